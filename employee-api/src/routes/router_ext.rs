//! Router extension for oneshot calls
//!
//! Calls the Router directly without going through the network stack.

use anyhow::Result;
use axum::Router;
use axum::body::Body;
use http::{Request, Response};
use tower::ServiceExt;

use crate::core::ServerState;

/// Result type for oneshot API calls
pub type OneshotResult = Result<Response<Body>>;

/// Extension trait for Router to support oneshot calls
#[async_trait::async_trait]
pub trait OneshotRouter {
    /// Process a request using oneshot pattern
    ///
    /// # Example
    ///
    /// ```ignore
    /// let state = ServerState::with_gateway(gateway);
    /// let request = Request::builder()
    ///     .uri("/health")
    ///     .body(Body::empty())?;
    ///
    /// let response = build_router().oneshot_with(&state, request).await?;
    /// ```
    async fn oneshot_with(&self, state: &ServerState, request: Request<Body>) -> OneshotResult;
}

#[async_trait::async_trait]
impl OneshotRouter for Router<ServerState> {
    async fn oneshot_with(&self, state: &ServerState, request: Request<Body>) -> OneshotResult {
        let svc = self.clone().with_state(state.clone());
        let response = svc.oneshot(request).await?;
        Ok(response)
    }
}
