//! Handlers for webhook capture and retrieval.
//!
//! Accepts arbitrary JSON payloads, stores them in the bounded in-memory
//! store, and serves them back by ID or in bulk.

use axum::{
    extract::{Path, State},
    Json,
};
use bytes::Bytes;
use hookbox_core::{StoredWebhook, WebhookId};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, instrument, warn};

use crate::{error::ApiError, server::AppState};

/// Response to a successfully captured webhook.
#[derive(Debug, Serialize)]
pub struct ReceiveResponse {
    /// Human-readable confirmation.
    pub message: String,
    /// Store-assigned webhook ID.
    pub id: WebhookId,
}

/// Response listing all stored webhooks.
#[derive(Debug, Serialize)]
pub struct ListResponse {
    /// Number of webhooks currently stored.
    pub count: usize,
    /// Stored webhooks, most recent first.
    pub webhooks: Vec<StoredWebhook>,
}

/// Response to a store clear.
#[derive(Debug, Serialize)]
pub struct ClearResponse {
    /// Human-readable confirmation.
    pub message: String,
    /// Number of webhooks dropped.
    pub cleared_count: usize,
}

/// Captures an arbitrary JSON payload.
///
/// Any valid JSON value is accepted; no shape is imposed on the payload.
///
/// # Errors
///
/// Returns 400 if the body does not parse as JSON.
#[instrument(name = "receive_webhook", skip(state, body))]
pub async fn receive_webhook(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ReceiveResponse>, ApiError> {
    let payload: Value = serde_json::from_slice(&body).map_err(|e| {
        warn!(error = %e, "rejecting body that is not valid JSON");
        ApiError::BadRequest("request body is not valid JSON".to_string())
    })?;

    // Well-known fields are surfaced in the log but never validated.
    let event = payload.get("event").and_then(Value::as_str).map(str::to_owned);
    let timestamp = payload.get("timestamp").and_then(Value::as_i64);

    let id = state.store.add(payload).await;

    info!(id = %id, event = event.as_deref(), timestamp, "webhook received and stored");

    Ok(Json(ReceiveResponse {
        message: "Webhook received and stored successfully".to_string(),
        id,
    }))
}

/// Lists all stored webhooks, most recent first.
#[instrument(name = "list_webhooks", skip(state))]
pub async fn list_webhooks(State(state): State<AppState>) -> Json<ListResponse> {
    let webhooks = state.store.get_all().await;

    debug!(count = webhooks.len(), "listing stored webhooks");

    Json(ListResponse { count: webhooks.len(), webhooks })
}

/// Fetches a single webhook by ID.
///
/// # Errors
///
/// Returns 400 for a non-numeric ID and 404 for an unknown one.
#[instrument(name = "get_webhook", skip(state))]
pub async fn get_webhook(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<StoredWebhook>, ApiError> {
    let id: WebhookId = id.parse()?;
    let webhook = state.store.get(id).await?;

    debug!(id = %id, "stored webhook served");

    Ok(Json(webhook))
}

/// Clears the store, dropping every retained webhook.
///
/// Registered for every HTTP method; the ID counter restarts at 1.
#[instrument(name = "clear_webhooks", skip(state))]
pub async fn clear_webhooks(State(state): State<AppState>) -> Json<ClearResponse> {
    let cleared_count = state.store.clear().await;

    info!(cleared_count, "cleared all stored webhooks");

    Json(ClearResponse {
        message: "All webhooks cleared successfully".to_string(),
        cleared_count,
    })
}
