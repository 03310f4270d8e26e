//! Server Implementation
//!
//! HTTP 服务器启动和管理

use anyhow::Context;
use axum::Router;
use axum::middleware as axum_middleware;
use http::{HeaderName, HeaderValue};
use std::net::SocketAddr;
use tower_http::compression::CompressionLayer;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};

use crate::core::{Config, Result, ServerError, ServerState};
use crate::middleware;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Custom request ID generator
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = uuid::Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        // HTML pages
        .merge(crate::web::home::router())
        .merge(crate::web::about::router())
        .merge(crate::web::greeting::router())
        // JSON API
        .merge(crate::api::restaurants::router())
        .merge(crate::api::health::router())
        .fallback(crate::web::not_found)
}

/// Build a fully configured application with all middleware and state
///
/// Used by both the HTTP server and in-process tests
pub fn build_app(state: ServerState) -> Router {
    build_router()
        .with_state(state)
        // Compression - Gzip compress responses
        .layer(CompressionLayer::new())
        // Request logging
        .layer(axum_middleware::from_fn(middleware::logging_middleware))
        // Propagate request ID to response
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            REQUEST_ID_HEADER,
        )))
        // Request ID - outermost, so every inner layer sees it
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static(REQUEST_ID_HEADER),
            XRequestId,
        ))
}

/// HTTP Server
pub struct Server {
    config: Config,
    state: Option<ServerState>,
}

impl Server {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            state: None,
        }
    }

    /// Create server with existing state
    pub fn with_state(config: Config, state: ServerState) -> Self {
        Self {
            config,
            state: Some(state),
        }
    }

    pub async fn run(&self) -> Result<()> {
        // Create application state if not provided
        let state = match &self.state {
            Some(s) => s.clone(),
            None => ServerState::initialize(&self.config).await?,
        };

        let addr = SocketAddr::from(([0, 0, 0, 0], self.config.http_port));
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|source| ServerError::Bind { addr, source })?;

        crate::api::health::mark_started();
        tracing::info!(
            %addr,
            store = state.store.kind(),
            environment = %self.config.environment,
            "🍕 OdeToFood server listening"
        );

        axum::serve(listener, build_app(state))
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("HTTP server stopped unexpectedly")?;

        tracing::info!("Server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down...");
}
