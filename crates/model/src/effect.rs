//! The derived zoom transform handed to the rendering collaborator.

use serde::{Deserialize, Serialize};

/// Current zoom transform for the video viewport.
///
/// Fully recomputed from `(SegmentModel, playback time)` on every time
/// update; gestures never write into it directly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomEffectState {
    /// Whether a zoom segment is active at the current time.
    pub active: bool,

    /// Horizontal focus point (percent of frame).
    pub x: f64,

    /// Vertical focus point (percent of frame).
    pub y: f64,

    /// Magnification, `>= 1.0` (1.0 = no zoom).
    pub scale: f64,
}

impl ZoomEffectState {
    /// Resting state: centered, no zoom.
    pub const NEUTRAL: ZoomEffectState = ZoomEffectState {
        active: false,
        x: 50.0,
        y: 50.0,
        scale: 1.0,
    };

    pub fn new(x: f64, y: f64, scale: f64) -> Self {
        Self {
            active: true,
            x: x.clamp(0.0, 100.0),
            y: y.clamp(0.0, 100.0),
            scale: scale.max(1.0),
        }
    }

    /// Whether this state renders identically to no effect at all.
    pub fn is_neutral(&self) -> bool {
        !self.active || (self.scale - 1.0).abs() < 1e-9
    }

    /// CSS `transform-origin` value for the focus point.
    pub fn transform_origin(&self) -> String {
        format!("{:.3}% {:.3}%", self.x, self.y)
    }
}

impl Default for ZoomEffectState {
    fn default() -> Self {
        Self::NEUTRAL
    }
}
