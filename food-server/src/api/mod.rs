//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`restaurants`] - 餐厅 JSON 接口

pub mod health;
pub mod restaurants;

// Re-export common types for handlers
pub use crate::utils::{AppResponse, AppResult};
