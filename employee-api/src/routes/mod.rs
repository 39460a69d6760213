//! Router 组装
//!
//! [`build_router`] 只注册路由；[`build_app`] 在其上叠加 HTTP 中间件，
//! 供服务器和 oneshot 调用共用。

use axum::Router;
use axum::middleware as axum_middleware;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::core::middleware::request_deadline;
use crate::core::{Config, ServerState};
use crate::utils::error::panic_response;

pub mod router_ext;
pub use router_ext::{OneshotResult, OneshotRouter};

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        // Employee API
        .merge(api::employees::router())
        // Health API
        .merge(api::health::router())
}

/// Build a fully configured application with all middleware
pub fn build_app(config: &Config) -> Router<ServerState> {
    build_router()
        // Panic → 500 with the generic support message
        .layer(CatchPanicLayer::custom(panic_response))
        // Inbound request deadline → 408 with an error body
        .layer(axum_middleware::from_fn_with_state(
            config.request_timeout(),
            request_deadline,
        ))
        // Trace - outermost, logs every request at INFO level
        .layer(TraceLayer::new_for_http())
}
