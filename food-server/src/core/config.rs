use std::fmt;
use std::str::FromStr;

/// 存储后端
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreBackend {
    /// 进程内存 (带种子数据)
    #[default]
    Memory,
    /// SQLite (DATABASE_URL)
    Sqlite,
}

impl FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" | "in-memory" | "inmemory" => Ok(StoreBackend::Memory),
            "sqlite" | "sql" => Ok(StoreBackend::Sqlite),
            other => Err(format!("unknown store backend: {other}")),
        }
    }
}

impl fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreBackend::Memory => f.write_str("memory"),
            StoreBackend::Sqlite => f.write_str("sqlite"),
        }
    }
}

/// 服务器配置
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | HTTP_PORT | 5000 | HTTP 服务端口 |
/// | ENVIRONMENT | development | 运行环境 |
/// | GREETING | (无) | 每日问候语 |
/// | STORE_BACKEND | memory | memory 或 sqlite |
/// | DATABASE_URL | sqlite:odetofood.db | 数据库连接串 (仅 sqlite) |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | (无) | 日志目录 |
///
/// # 示例
///
/// ```ignore
/// STORE_BACKEND=sqlite DATABASE_URL=sqlite:data/food.db cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP 服务端口
    pub http_port: u16,
    /// 运行环境: development | production
    pub environment: String,
    /// 问候语 (Greeter 使用)
    pub greeting: Option<String>,
    /// 存储后端
    pub store_backend: StoreBackend,
    /// 数据库连接串
    pub database_url: String,
    /// 日志级别
    pub log_level: String,
    /// 日志目录
    pub log_dir: Option<String>,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        let store_backend = match std::env::var("STORE_BACKEND") {
            Ok(raw) => raw.parse::<StoreBackend>().unwrap_or_else(|e: String| {
                tracing::warn!(error = %e, "Falling back to in-memory store");
                StoreBackend::Memory
            }),
            Err(_) => StoreBackend::Memory,
        };

        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            greeting: std::env::var("GREETING").ok(),
            store_backend,
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite:odetofood.db".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok(),
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(
        http_port: u16,
        store_backend: StoreBackend,
        greeting: Option<&str>,
    ) -> Self {
        let mut config = Self::from_env();
        config.http_port = http_port;
        config.store_backend = store_backend;
        config.greeting = greeting.map(str::to_string);
        config
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// 是否开发环境
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_backend_parse() {
        assert_eq!("memory".parse::<StoreBackend>(), Ok(StoreBackend::Memory));
        assert_eq!(" SQLite ".parse::<StoreBackend>(), Ok(StoreBackend::Sqlite));
        assert!("mongo".parse::<StoreBackend>().is_err());
        assert_eq!(StoreBackend::Sqlite.to_string(), "sqlite");
    }

    #[test]
    fn test_with_overrides() {
        let config = Config::with_overrides(8088, StoreBackend::Sqlite, Some("Hi"));
        assert_eq!(config.http_port, 8088);
        assert_eq!(config.store_backend, StoreBackend::Sqlite);
        assert_eq!(config.greeting.as_deref(), Some("Hi"));
    }
}
