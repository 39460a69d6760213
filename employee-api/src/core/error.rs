//! 服务器启动与运行错误
//!
//! 请求级错误见 [`crate::utils::AppError`]；这里只描述进程级失败。

use employee_client::ClientError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("上游客户端初始化失败: {0}")]
    Client(#[from] ClientError),

    #[error("端口绑定失败 {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("内部服务器错误")]
    Internal(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
