//! Domain models for the webhook capture service.

use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Newtype for webhook identifiers.
///
/// IDs are assigned by the store, strictly increasing within a store
/// lifetime, starting at 1. Serializes as a bare integer.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct WebhookId(pub u64);

impl fmt::Display for WebhookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for WebhookId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl FromStr for WebhookId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>().map(Self).map_err(|_| CoreError::InvalidId { raw: s.to_string() })
    }
}

/// A webhook as captured by the store.
///
/// The payload is held opaquely as a JSON value; no shape is imposed on it
/// beyond having parsed as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredWebhook {
    /// Store-assigned identifier.
    pub id: WebhookId,
    /// The payload exactly as received.
    pub payload: serde_json::Value,
    /// Receipt time stamped by the store.
    pub received_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn webhook_id_parses_digits() {
        let id: WebhookId = "17".parse().expect("digits parse");
        assert_eq!(id, WebhookId(17));
    }

    #[test]
    fn webhook_id_rejects_non_digits() {
        let err = "clear".parse::<WebhookId>().unwrap_err();
        assert!(matches!(err, CoreError::InvalidId { .. }));

        let err = "-3".parse::<WebhookId>().unwrap_err();
        assert!(matches!(err, CoreError::InvalidId { .. }));
    }

    #[test]
    fn webhook_id_serializes_as_integer() {
        let json = serde_json::to_value(WebhookId(7)).expect("serialize");
        assert_eq!(json, serde_json::json!(7));
    }
}
