//! Core domain models and the bounded in-memory webhook store.
//!
//! Provides the strongly-typed webhook record, the concurrency-safe
//! fixed-capacity store, and the clock abstraction used to stamp receipt
//! times. The HTTP layer depends on these foundational types; nothing in
//! this crate touches the network.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod models;
pub mod store;
pub mod time;

pub use error::{CoreError, Result};
pub use models::{StoredWebhook, WebhookId};
pub use store::{WebhookStore, DEFAULT_CAPACITY};
pub use time::{Clock, RealClock, TestClock};
