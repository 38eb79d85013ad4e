//! Hookbox HTTP API.
//!
//! Request handlers, routing, configuration, and server lifecycle for the
//! webhook capture service.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod handlers;
pub mod server;

pub use config::Config;
pub use error::ApiError;
pub use server::{create_router, start_server, AppState};
