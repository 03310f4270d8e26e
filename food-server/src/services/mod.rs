//! 服务模块

pub mod greeter;

pub use greeter::{ConfigGreeter, DEFAULT_GREETING, Greeter};
