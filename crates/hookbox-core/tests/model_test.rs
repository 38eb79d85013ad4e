//! Wire-format tests for domain models.

use chrono::{DateTime, Utc};
use hookbox_core::{StoredWebhook, WebhookId};
use serde_json::json;

#[test]
fn stored_webhook_serializes_with_integer_id_and_opaque_payload() {
    let received_at = DateTime::<Utc>::from_timestamp(1_700_000_000, 0).expect("valid timestamp");
    let webhook = StoredWebhook {
        id: WebhookId(3),
        payload: json!({"event": "ping", "nested": [1, 2, 3]}),
        received_at,
    };

    let value = serde_json::to_value(&webhook).expect("serialize");

    assert_eq!(value["id"], json!(3));
    assert_eq!(value["payload"], json!({"event": "ping", "nested": [1, 2, 3]}));
    assert!(value["received_at"].is_string());
}

#[test]
fn stored_webhook_round_trips_every_json_payload_kind() {
    let received_at = DateTime::<Utc>::from_timestamp(1_700_000_000, 0).expect("valid timestamp");
    let payloads = [
        json!(null),
        json!(true),
        json!(42.5),
        json!("plain string"),
        json!([1, "two", null]),
        json!({"object": {"deep": {"value": 1}}}),
    ];

    for payload in payloads {
        let webhook = StoredWebhook { id: WebhookId(1), payload: payload.clone(), received_at };

        let encoded = serde_json::to_string(&webhook).expect("serialize");
        let decoded: StoredWebhook = serde_json::from_str(&encoded).expect("deserialize");

        assert_eq!(decoded, webhook, "payload {payload} should round-trip unchanged");
    }
}

#[test]
fn webhook_id_display_matches_its_numeric_form() {
    assert_eq!(WebhookId(120).to_string(), "120");
}
