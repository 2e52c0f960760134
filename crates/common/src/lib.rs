//! Zoomline Common Utilities
//!
//! Shared infrastructure for all Zoomline crates:
//! - Error types and result aliases
//! - Timeline/time conversion helpers and deadline timers
//! - Tracing/logging initialization
//! - Configuration loading

pub mod config;
pub mod error;
pub mod logging;
pub mod time;

pub use config::*;
pub use error::*;
pub use time::*;
