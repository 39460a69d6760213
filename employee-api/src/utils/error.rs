//! 统一错误处理
//!
//! 错误类型定义在 `shared::error`，此处重新导出，并补充 HTTP 层专用的辅助函数。
//!
//! | 错误 | 状态码 |
//! |------|--------|
//! | 参数错误 / 校验失败 / 无效 UUID | 400 |
//! | 员工不存在 | 404 |
//! | 上游持续 429 | 429 |
//! | 上游异常 / 网络失败 | 500 |
//! | 其他内部错误 | 500 (通用提示，不暴露细节) |

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

pub use shared::error::{AppError, AppResult, ErrorBody, ErrorCategory, ErrorCode};

/// JSON 请求体解析失败 → 400
pub fn json_rejection(rejection: JsonRejection) -> AppError {
    AppError::with_message(ErrorCode::InvalidFormat, rejection.body_text())
}

/// 未捕获的 panic → 500 + 通用提示
pub fn panic_response(err: Box<dyn std::any::Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic".to_string()
    };
    tracing::error!(target: "internal", panic = %detail, "Handler panicked");

    (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorBody::support())).into_response()
}
