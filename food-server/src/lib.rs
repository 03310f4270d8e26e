//! OdeToFood Server - 餐厅列表 Web 应用
//!
//! # 架构概述
//!
//! - **存储** (`store`): [`RestaurantStore`] 抽象，内存与 SQLite 两种实现
//! - **数据库** (`db`): SQLite 连接池与迁移
//! - **页面** (`web`): askama 模板渲染的 HTML 页面
//! - **HTTP API** (`api`): JSON 接口与健康检查
//!
//! # 模块结构
//!
//! ```text
//! food-server/src/
//! ├── core/          # 配置、状态、错误、服务器
//! ├── store/         # 餐厅存储 (memory / sqlite)
//! ├── db/            # 数据库连接池
//! ├── services/      # Greeter
//! ├── web/           # HTML 页面和视图模型
//! ├── api/           # JSON 路由和处理器
//! ├── middleware/    # 请求日志
//! └── utils/         # 错误、日志
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod middleware;
pub mod services;
pub mod store;
pub mod utils;
pub mod web;

// Re-export 公共类型
pub use crate::core::{Config, Server, ServerState, StoreBackend, build_app};
pub use services::{ConfigGreeter, Greeter};
pub use store::{InMemoryStore, RestaurantStore, SqliteStore, StoreError, StoreResult};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// 设置运行环境：加载 .env 并初始化日志
pub fn setup_environment() -> Result<(), Box<dyn std::error::Error>> {
    // .env 文件可选
    if let Err(e) = dotenv::dotenv()
        && !e.not_found()
    {
        return Err(e.into());
    }

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(log_level.as_deref(), log_dir.as_deref());

    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
   ____     __    ______     ____             __
  / __ \___/ /__ /_  __/__  / __/__  ___  ___/ /
 / /_/ / _  / -_) / / / _ \/ _// _ \/ _ \/ _  /
 \____/\_,_/\__/ /_/  \___/_/  \___/\___/\_,_/
    "#
    );
}
