//! Error types and result handling for store operations.

use thiserror::Error;

use crate::models::WebhookId;

/// Result type alias using `CoreError`.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error type for webhook store operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Webhook ID could not be parsed from its textual form.
    #[error("invalid webhook id: {raw:?}")]
    InvalidId {
        /// The text that failed to parse as an ID
        raw: String,
    },

    /// No stored webhook carries the given ID.
    #[error("webhook {id} not found")]
    NotFound {
        /// The ID that was looked up
        id: WebhookId,
    },
}
