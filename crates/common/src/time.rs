//! Time and timeline-geometry conversion helpers.
//!
//! The editor reconciles three spaces: pointer pixels, timeline percent,
//! and playback seconds. This module owns the conversions between them,
//! plus the one-shot deadline timer the scrubber uses to detect seeks
//! that never took effect.

/// Convert a position in seconds to percent of a timeline.
///
/// An unknown duration (zero or negative) pins to 0% so the playhead
/// has a renderable position before media metadata arrives.
pub fn secs_to_percent(secs: f64, duration_secs: f64) -> f64 {
    if duration_secs <= 0.0 {
        return 0.0;
    }
    (secs / duration_secs * 100.0).clamp(0.0, 100.0)
}

/// Convert a percent of a timeline to seconds, clamped to `[0, duration]`.
pub fn percent_to_secs(percent: f64, duration_secs: f64) -> f64 {
    if duration_secs <= 0.0 {
        return 0.0;
    }
    (percent / 100.0 * duration_secs).clamp(0.0, duration_secs)
}

/// Clamp a seek target into the playable range `[0, duration]`.
pub fn clamp_seek(target_secs: f64, duration_secs: f64) -> f64 {
    target_secs.clamp(0.0, duration_secs.max(0.0))
}

/// Mapping between the rendered timeline strip and playback time.
///
/// Captured once at gesture start so a mid-drag container resize cannot
/// skew the pixel-to-seconds mapping for an in-flight session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimelineGeometry {
    /// Rendered width of the timeline strip in pixels.
    pub width_px: f64,
    /// Total playable duration represented by the strip (seconds).
    pub duration_secs: f64,
}

impl TimelineGeometry {
    pub fn new(width_px: f64, duration_secs: f64) -> Self {
        Self {
            width_px: width_px.max(1.0),
            duration_secs: duration_secs.max(0.0),
        }
    }

    /// Convert a horizontal pixel delta to a time delta in seconds.
    pub fn px_to_secs(&self, dx_px: f64) -> f64 {
        dx_px / self.width_px * self.duration_secs
    }

    /// Convert a horizontal pixel offset from the strip origin to an
    /// absolute time, clamped to the playable range.
    pub fn px_to_time(&self, x_px: f64) -> f64 {
        clamp_seek(self.px_to_secs(x_px), self.duration_secs)
    }

    /// One percent of the timeline expressed in seconds.
    pub fn percent_as_secs(&self, percent: f64) -> f64 {
        percent / 100.0 * self.duration_secs
    }
}

/// One-shot deadline timer driven by caller-supplied timestamps.
///
/// The editor is cooperative and event-driven: nothing blocks, so
/// timeouts are checked on explicit ticks instead of background threads.
#[derive(Debug, Clone, Copy)]
pub struct DeadlineTimer {
    deadline_ms: Option<f64>,
}

impl DeadlineTimer {
    /// Create an unarmed timer.
    pub fn new() -> Self {
        Self { deadline_ms: None }
    }

    /// Arm the timer to expire `timeout_ms` after `now_ms`.
    pub fn arm(&mut self, now_ms: f64, timeout_ms: f64) {
        self.deadline_ms = Some(now_ms + timeout_ms);
    }

    /// Disarm without expiring.
    pub fn cancel(&mut self) {
        self.deadline_ms = None;
    }

    /// Whether the timer is currently armed.
    pub fn is_armed(&self) -> bool {
        self.deadline_ms.is_some()
    }

    /// Check for expiry. Returns true at most once per arming.
    pub fn expired(&mut self, now_ms: f64) -> bool {
        match self.deadline_ms {
            Some(deadline) if now_ms >= deadline => {
                self.deadline_ms = None;
                true
            }
            _ => false,
        }
    }
}

impl Default for DeadlineTimer {
    fn default() -> Self {
        Self::new()
    }
}
