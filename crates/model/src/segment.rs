//! Zoom segments: time-spans during which a zoom effect is active.

use serde::{Deserialize, Serialize};

use crate::event::{REFERENCE_HEIGHT, REFERENCE_WIDTH};

/// Smallest duration (seconds) a segment may be clamped down to.
pub const MIN_SEGMENT_DURATION_SECS: f64 = 0.05;

/// Opaque segment identifier, stable for the segment's lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SegmentId(String);

impl SegmentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Deterministic generator id for the event at `index`.
    pub fn generated(index: usize) -> Self {
        Self(format!("zoom-{index}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SegmentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SegmentId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Fallback focus point: the originating interaction's pixel position
/// in the 1920×1080 reference resolution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnchorPoint {
    pub x: f64,
    pub y: f64,
}

impl AnchorPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Convert to percent of the reference frame, clamped to `[0, 100]`.
    pub fn to_percent(self) -> (f64, f64) {
        (
            (self.x / REFERENCE_WIDTH * 100.0).clamp(0.0, 100.0),
            (self.y / REFERENCE_HEIGHT * 100.0).clamp(0.0, 100.0),
        )
    }
}

/// A time-span over the video during which a zoom effect is active.
///
/// Overlapping spans are permitted; effect calculation resolves them by
/// stable creation order (first match wins).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoomSegment {
    /// Unique identifier, stable for the segment's lifetime.
    pub id: SegmentId,

    /// Start time in seconds, `>= 0`.
    pub timestamp: f64,

    /// Length in seconds, `> 0`; the segment spans
    /// `[timestamp, timestamp + duration]`.
    pub duration: f64,

    /// The instant the zoom is visually centered on. Defaults to the
    /// midpoint; edits may recompute it.
    pub click_timestamp: f64,

    /// Fallback focus point when no explicit area is set.
    pub anchor: AnchorPoint,

    /// Display text, non-semantic.
    pub label: String,
}

impl ZoomSegment {
    /// Create a segment with the peak centered on its midpoint.
    pub fn new(
        id: SegmentId,
        timestamp: f64,
        duration: f64,
        anchor: AnchorPoint,
        label: impl Into<String>,
    ) -> Self {
        let timestamp = timestamp.max(0.0);
        let duration = duration.max(MIN_SEGMENT_DURATION_SECS);
        Self {
            id,
            timestamp,
            duration,
            click_timestamp: timestamp + duration / 2.0,
            anchor,
            label: label.into(),
        }
    }

    /// End time in seconds.
    pub fn end(&self) -> f64 {
        self.timestamp + self.duration
    }

    /// Midpoint of the span.
    pub fn midpoint(&self) -> f64 {
        self.timestamp + self.duration / 2.0
    }

    /// Whether `time` falls within the span (inclusive on both ends).
    pub fn contains_time(&self, time: f64) -> bool {
        time >= self.timestamp && time <= self.end()
    }
}

/// Partial update applied through `SegmentModel::update_segment`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SegmentPatch {
    pub timestamp: Option<f64>,
    pub duration: Option<f64>,
    pub click_timestamp: Option<f64>,
    pub anchor: Option<AnchorPoint>,
    pub label: Option<String>,
}

impl SegmentPatch {
    /// Patch that moves the span and shifts the peak with it.
    pub fn shifted(segment: &ZoomSegment, new_timestamp: f64) -> Self {
        let delta = new_timestamp - segment.timestamp;
        Self {
            timestamp: Some(new_timestamp),
            click_timestamp: Some(segment.click_timestamp + delta),
            ..Default::default()
        }
    }

    /// Patch that replaces the span and re-centers the peak on the new
    /// midpoint, so the zoom stays symmetric after a resize.
    pub fn resized(new_timestamp: f64, new_duration: f64) -> Self {
        Self {
            timestamp: Some(new_timestamp),
            duration: Some(new_duration),
            click_timestamp: Some(new_timestamp + new_duration / 2.0),
            ..Default::default()
        }
    }
}
