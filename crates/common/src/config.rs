//! Application configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Global application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Default editor tunables.
    pub editor: EditorDefaults,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Tunable editor parameters.
///
/// These feed the gesture state machines and the segment generator.
/// Defaults match the editor's reference behavior; overriding them is
/// intended for experimentation, not required for correct operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorDefaults {
    /// Pointer displacement (px) before a press is recognized as a drag.
    pub drag_threshold_px: f64,

    /// Minimum press duration (ms) before motion counts as a drag.
    pub drag_delay_ms: f64,

    /// Width (px) of the resize band at each segment edge.
    pub edge_band_px: f64,

    /// Radius (percent of frame) of a zoom-area corner handle.
    pub corner_handle_pct: f64,

    /// Total zoom duration generated per click event (seconds).
    pub zoom_duration_secs: f64,

    /// Default zoom-area extent generated per click (percent of frame).
    pub area_extent_pct: f64,

    /// How long to wait for a seek to take effect before retrying (ms).
    pub seek_timeout_ms: f64,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "zoomline=debug,warn").
    pub level: String,

    /// Whether to output structured JSON logs.
    pub json: bool,

    /// Optional log file path.
    pub file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            editor: EditorDefaults::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for EditorDefaults {
    fn default() -> Self {
        Self {
            drag_threshold_px: 4.0,
            drag_delay_ms: 150.0,
            edge_band_px: 8.0,
            corner_handle_pct: 4.0,
            zoom_duration_secs: 2.0,
            area_extent_pct: 30.0,
            seek_timeout_ms: 400.0,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            file: None,
        }
    }
}

impl AppConfig {
    /// Load config from the standard location, falling back to defaults.
    pub fn load() -> Self {
        let config_path = config_file_path();
        if config_path.exists() {
            match std::fs::read_to_string(&config_path) {
                Ok(content) => match serde_json::from_str(&content) {
                    Ok(config) => return config,
                    Err(e) => {
                        tracing::warn!("Failed to parse config at {:?}: {}", config_path, e);
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read config at {:?}: {}", config_path, e);
                }
            }
        }
        Self::default()
    }

    /// Save config to the standard location.
    pub fn save(&self) -> Result<(), std::io::Error> {
        let config_path = config_file_path();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(config_path, json)
    }
}

/// Standard config file location.
fn config_file_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("zoomline").join("config.json")
}
