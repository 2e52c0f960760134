//! Error types shared across Zoomline crates.

use std::path::PathBuf;

/// Top-level error type for Zoomline operations.
#[derive(Debug, thiserror::Error)]
pub enum ZoomlineError {
    #[error("Model error: {message}")]
    Model { message: String },

    #[error("Gesture error: {message}")]
    Gesture { message: String },

    #[error("Media error: {message}")]
    Media { message: String },

    #[error("Event feed error: {message}")]
    EventFeed { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias using ZoomlineError.
pub type ZoomlineResult<T> = Result<T, ZoomlineError>;

impl ZoomlineError {
    pub fn model(msg: impl Into<String>) -> Self {
        Self::Model {
            message: msg.into(),
        }
    }

    pub fn gesture(msg: impl Into<String>) -> Self {
        Self::Gesture {
            message: msg.into(),
        }
    }

    pub fn media(msg: impl Into<String>) -> Self {
        Self::Media {
            message: msg.into(),
        }
    }

    pub fn event_feed(msg: impl Into<String>) -> Self {
        Self::EventFeed {
            message: msg.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }
}
