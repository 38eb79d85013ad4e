//! Concurrency-safe, size-bounded in-memory webhook store.
//!
//! The store owns an ordered sequence of received webhooks plus a monotonic
//! ID counter. Occupancy never exceeds the configured capacity: once an
//! insert would overflow it, the oldest entry is evicted. Listing reverses
//! insertion order so the newest webhook comes first.

use std::{collections::VecDeque, sync::Arc};

use serde_json::Value;
use tokio::sync::RwLock;

use crate::{
    error::{CoreError, Result},
    models::{StoredWebhook, WebhookId},
    time::{Clock, RealClock},
};

/// Default number of webhooks retained before eviction.
pub const DEFAULT_CAPACITY: usize = 5;

/// Fixed-capacity, concurrency-safe store of received webhooks.
///
/// All operations are synchronized by a single readers-writer lock:
/// `add` and `clear` take the exclusive side, `get_all`, `get` and `len`
/// take the shared side so any number of readers proceed together. No
/// lock is held across external I/O, and no atomicity is offered beyond
/// single-call granularity.
#[derive(Debug)]
pub struct WebhookStore {
    capacity: usize,
    clock: Arc<dyn Clock>,
    inner: RwLock<Inner>,
}

#[derive(Debug)]
struct Inner {
    webhooks: VecDeque<StoredWebhook>,
    next_id: u64,
}

impl WebhookStore {
    /// Creates a store with the given capacity, stamping receipt times
    /// from the system clock.
    pub fn new(capacity: usize) -> Self {
        Self::with_clock(capacity, Arc::new(RealClock))
    }

    /// Creates a store with an injected clock.
    pub fn with_clock(capacity: usize, clock: Arc<dyn Clock>) -> Self {
        Self {
            capacity,
            clock,
            inner: RwLock::new(Inner {
                webhooks: VecDeque::with_capacity(capacity),
                next_id: 1,
            }),
        }
    }

    /// Appends a payload and returns the assigned ID.
    ///
    /// The ID counter only moves forward within a store lifetime; `clear`
    /// is the sole reset. When occupancy exceeds the capacity the oldest
    /// entry is dropped.
    pub async fn add(&self, payload: Value) -> WebhookId {
        let mut inner = self.inner.write().await;

        let id = WebhookId(inner.next_id);
        inner.next_id += 1;

        let received_at = self.clock.now();
        inner.webhooks.push_back(StoredWebhook { id, payload, received_at });

        if inner.webhooks.len() > self.capacity {
            inner.webhooks.pop_front();
        }

        id
    }

    /// Returns a snapshot of all stored webhooks, most recent first.
    pub async fn get_all(&self) -> Vec<StoredWebhook> {
        let inner = self.inner.read().await;
        inner.webhooks.iter().rev().cloned().collect()
    }

    /// Looks up a webhook by ID.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` if no stored webhook carries `id`,
    /// including IDs that were evicted or cleared.
    pub async fn get(&self, id: WebhookId) -> Result<StoredWebhook> {
        let inner = self.inner.read().await;
        inner
            .webhooks
            .iter()
            .find(|webhook| webhook.id == id)
            .cloned()
            .ok_or(CoreError::NotFound { id })
    }

    /// Empties the store and resets the ID counter to 1.
    ///
    /// Returns the number of entries dropped.
    pub async fn clear(&self) -> usize {
        let mut inner = self.inner.write().await;
        let count = inner.webhooks.len();
        inner.webhooks.clear();
        inner.next_id = 1;
        count
    }

    /// Current occupancy.
    pub async fn len(&self) -> usize {
        self.inner.read().await.webhooks.len()
    }

    /// Whether the store holds no webhooks.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Maximum number of retained webhooks.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for WebhookStore {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
