//! Click-vs-drag disambiguation shared by the drag controller and the
//! scrubber.
//!
//! A press only becomes a drag once pointer displacement exceeds a pixel
//! threshold AND the press has lasted past a short delay. Both guards
//! are needed: the first keeps accidental micro-moves from registering
//! as drags, the second keeps long static presses from doing so.

use zoomline_common::config::EditorDefaults;

/// Thresholds for recognizing a drag.
#[derive(Debug, Clone, Copy)]
pub struct GestureThresholds {
    /// Displacement (px) the pointer must exceed.
    pub drag_threshold_px: f64,
    /// Press duration (ms) that must elapse.
    pub drag_delay_ms: f64,
}

impl Default for GestureThresholds {
    fn default() -> Self {
        let defaults = EditorDefaults::default();
        Self {
            drag_threshold_px: defaults.drag_threshold_px,
            drag_delay_ms: defaults.drag_delay_ms,
        }
    }
}

impl From<&EditorDefaults> for GestureThresholds {
    fn from(defaults: &EditorDefaults) -> Self {
        Self {
            drag_threshold_px: defaults.drag_threshold_px,
            drag_delay_ms: defaults.drag_delay_ms,
        }
    }
}

/// Tracks one press from pointer-down to pointer-up.
///
/// Once a drag is recognized it stays recognized for the rest of the
/// session; the classification never flips back mid-gesture.
#[derive(Debug, Clone, Copy)]
pub struct GestureTracker {
    origin_x: f64,
    origin_y: f64,
    pressed_at_ms: f64,
    recognized: bool,
}

impl GestureTracker {
    /// Start tracking at the pointer-down position.
    pub fn new(origin_x: f64, origin_y: f64, now_ms: f64) -> Self {
        Self {
            origin_x,
            origin_y,
            pressed_at_ms: now_ms,
            recognized: false,
        }
    }

    /// Feed a pointer-move. Returns whether the session now counts as a
    /// drag.
    pub fn update(&mut self, x: f64, y: f64, now_ms: f64, thresholds: &GestureThresholds) -> bool {
        if !self.recognized {
            let displacement =
                ((x - self.origin_x).powi(2) + (y - self.origin_y).powi(2)).sqrt();
            let elapsed = now_ms - self.pressed_at_ms;
            if displacement > thresholds.drag_threshold_px && elapsed > thresholds.drag_delay_ms {
                self.recognized = true;
            }
        }
        self.recognized
    }

    /// Whether the session has crossed into drag territory.
    pub fn is_drag(&self) -> bool {
        self.recognized
    }

    /// Pointer-down position.
    pub fn origin(&self) -> (f64, f64) {
        (self.origin_x, self.origin_y)
    }
}
