//! 入站请求超时中间件
//!
//! 超时后返回 408 和统一的 `{ "error": ... }` 响应体；
//! 被丢弃的处理器 future 会同时取消正在进行的上游退避等待。

use std::time::Duration;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::utils::AppError;

/// 请求截止时间中间件
pub async fn request_deadline(
    State(deadline): State<Duration>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let method = req.method().clone();
    let uri = req.uri().clone();

    match tokio::time::timeout(deadline, next.run(req)).await {
        Ok(response) => Ok(response),
        Err(_) => {
            tracing::warn!(
                method = %method,
                uri = %uri,
                deadline_ms = deadline.as_millis() as u64,
                "Request exceeded its deadline"
            );
            Err(AppError::timeout())
        }
    }
}
