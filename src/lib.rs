//! A lead capture service: stores an email and an optional contact number per
//! registration in Postgres and lists them back, newest first.
//!
//! The registry in [`model`] does the work. Two HTTP adapters in [`web`] map onto it,
//! a method routed server and a single function style handler.

pub mod app;
pub mod config;
pub mod database;
mod error;
pub mod model;
pub mod web;

pub use app::{App, AppState, Transport};
pub use error::{Error, Result};
pub use web::serve;

use tracing_subscriber::EnvFilter;

/// Compact, human readable logs for local development.
/// Reads `RUST_LOG` and falls back to `info`.
pub fn init_dbg_tracing() {
    tracing_subscriber::fmt()
        .without_time()
        .with_target(false)
        .with_env_filter(env_filter())
        .compact()
        .init();
}

/// One JSON object per event, for log collectors.
pub fn init_production_tracing() {
    tracing_subscriber::fmt()
        .json()
        .with_current_span(true)
        .with_env_filter(env_filter())
        .init();
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}
