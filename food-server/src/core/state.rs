use std::sync::Arc;

use crate::core::{Config, StoreBackend};
use crate::db::DbService;
use crate::services::{ConfigGreeter, Greeter};
use crate::store::{InMemoryStore, RestaurantStore, SqliteStore};
use crate::utils::AppError;

/// 服务器状态 - 持有所有服务的共享引用
///
/// 使用 Arc 实现浅拷贝，每个请求 clone 一次。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | store | Arc<dyn RestaurantStore> | 餐厅存储 (memory / sqlite) |
/// | greeter | Arc<dyn Greeter> | 问候语 |
#[derive(Clone)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 餐厅存储
    pub store: Arc<dyn RestaurantStore>,
    /// 问候语
    pub greeter: Arc<dyn Greeter>,
}

impl std::fmt::Debug for ServerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerState")
            .field("config", &self.config)
            .field("store", &self.store.kind())
            .finish()
    }
}

impl ServerState {
    /// 创建服务器状态 (手动构造)
    ///
    /// 通常使用 [`initialize()`](Self::initialize) 方法代替
    pub fn new(
        config: Config,
        store: Arc<dyn RestaurantStore>,
        greeter: Arc<dyn Greeter>,
    ) -> Self {
        Self {
            config,
            store,
            greeter,
        }
    }

    /// 初始化服务器状态
    ///
    /// 按 `store_backend` 选择存储实现；sqlite 会打开连接池并执行迁移
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        let store: Arc<dyn RestaurantStore> = match config.store_backend {
            StoreBackend::Memory => Arc::new(InMemoryStore::new()),
            StoreBackend::Sqlite => {
                let db = DbService::new(&config.database_url).await?;
                Arc::new(SqliteStore::new(db.pool))
            }
        };
        let greeter: Arc<dyn Greeter> = Arc::new(ConfigGreeter::new(config));

        tracing::info!(store = store.kind(), "Server state initialized");

        Ok(Self::new(config.clone(), store, greeter))
    }

    /// 获取存储
    pub fn store(&self) -> &dyn RestaurantStore {
        self.store.as_ref()
    }
}
