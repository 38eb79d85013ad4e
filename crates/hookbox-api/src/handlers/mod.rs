//! HTTP request handlers for the hookbox API.
//!
//! Handlers are grouped by functionality:
//! - `webhooks` - capture, listing, retrieval, and clearing
//! - `health` - health and liveness probes
//!
//! Every handler translates between HTTP and the store and nothing else:
//! input validation with the appropriate status code, tracing for
//! observability, and typed JSON responses.

pub mod health;
pub mod webhooks;

pub use health::{health_check, liveness_check};
pub use webhooks::{clear_webhooks, get_webhook, list_webhooks, receive_webhook};
