//! HTTP server configuration and request routing.
//!
//! Axum server setup with the middleware stack and graceful shutdown.
//! Requests flow through middleware in order:
//! 1. Request ID generation
//! 2. Request/response logging
//! 3. Timeout enforcement
//! 4. Handler execution
//!
//! # Graceful Shutdown
//!
//! The server stops accepting new connections on SIGINT/SIGTERM and lets
//! in-flight requests drain before returning.

use std::{net::SocketAddr, sync::Arc, time::Duration};

use axum::{
    extract::Request,
    middleware::{self, Next},
    response::Response,
    routing::{any, get, post},
    Router,
};
use hookbox_core::{Clock, WebhookStore};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use tracing::info;
use uuid::Uuid;

use crate::handlers;

/// Shared state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    /// The webhook store, the sole shared resource of the service.
    pub store: Arc<WebhookStore>,
    /// Clock used for response timestamps.
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    /// Creates handler state over a store and clock.
    pub fn new(store: Arc<WebhookStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }
}

/// Creates the axum router with all routes and middleware.
///
/// `/webhooks/clear` answers every method and, as a static segment, takes
/// priority over the `/webhooks/{id}` parameter route. Wrong methods on
/// the remaining routes are rejected with 405 by the method routing.
pub fn create_router(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/live", get(handlers::liveness_check))
        .route("/webhook", post(handlers::receive_webhook))
        .route("/webhooks", get(handlers::list_webhooks))
        .route("/webhooks/clear", any(handlers::clear_webhooks))
        .route("/webhooks/{id}", get(handlers::get_webhook))
        .layer(TimeoutLayer::new(request_timeout))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(inject_request_id))
        .with_state(state)
}

/// Middleware to inject a request ID into all responses.
///
/// Adds an `X-Request-Id` header so individual requests can be correlated
/// with log lines.
async fn inject_request_id(req: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4().to_string();

    let mut req = req;
    req.extensions_mut().insert(request_id.clone());

    let mut response = next.run(req).await;

    if let Ok(header_value) = request_id.parse() {
        response.headers_mut().insert("X-Request-Id", header_value);
    }

    response
}

/// Starts the HTTP server with graceful shutdown support.
///
/// Binds to the specified address and serves requests until a shutdown
/// signal is received.
///
/// # Errors
///
/// Returns `std::io::Error` if the port is already in use or the network
/// interface is unavailable.
pub async fn start_server(
    state: AppState,
    addr: SocketAddr,
    request_timeout: Duration,
) -> Result<(), std::io::Error> {
    let app = create_router(state, request_timeout);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    let actual_addr = listener.local_addr()?;

    info!("HTTP server listening on {}", actual_addr);

    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

    info!("HTTP server stopped gracefully");
    Ok(())
}

/// Waits for shutdown signal (CTRL+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received CTRL+C, starting graceful shutdown");
        },
        () = terminate => {
            info!("Received SIGTERM, starting graceful shutdown");
        },
    }
}
