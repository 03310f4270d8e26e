use thiserror::Error;

use crate::utils::AppError;

/// 启动与运行期错误
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("端口绑定失败 {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("存储初始化失败: {0}")]
    Store(#[from] AppError),

    #[error("内部服务器错误: {0}")]
    Internal(#[from] anyhow::Error),
}

/// 服务器 Result 类型别名
pub type Result<T> = std::result::Result<T, ServerError>;
