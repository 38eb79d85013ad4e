//! Hookbox webhook capture service.
//!
//! Main entry point. Loads configuration, initializes structured logging,
//! builds the bounded in-memory store, and serves HTTP until shutdown.

use std::sync::Arc;

use anyhow::{Context, Result};
use hookbox_api::{AppState, Config};
use hookbox_core::{Clock, RealClock, WebhookStore};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load()?;

    init_tracing(&config.rust_log);

    info!("Starting hookbox webhook capture service");
    info!(
        host = %config.host,
        port = config.port,
        max_webhooks = config.max_webhooks,
        request_timeout = config.request_timeout,
        "Configuration loaded"
    );

    let addr = config.parse_server_addr()?;
    let clock: Arc<dyn Clock> = Arc::new(RealClock::new());
    let store = Arc::new(WebhookStore::with_clock(config.max_webhooks, clock.clone()));
    let state = AppState::new(store, clock);

    info!(capacity = config.max_webhooks, "Webhook store ready, oldest entries evicted at capacity");
    info!("  POST /webhook        - receive webhooks");
    info!("  GET  /webhooks       - list stored webhooks, most recent first");
    info!("  GET  /webhooks/{{id}}  - fetch a stored webhook by id");
    info!("  ANY  /webhooks/clear - drop all stored webhooks");

    hookbox_api::start_server(state, addr, config.request_timeout_duration())
        .await
        .context("server terminated with an error")?;

    info!("hookbox shutdown complete");
    Ok(())
}

/// Initializes tracing with environment-based configuration.
///
/// `RUST_LOG` takes priority; the configured directive is the fallback.
fn init_tracing(fallback_directive: &str) {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback_directive))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer().with_target(true);

    tracing_subscriber::registry().with(filter).with(fmt_layer).init();
}
