//! The zoom effect calculator.
//!
//! Pure function from `(segment model, playback time)` to the transform
//! the viewport should display. Called on every time-update tick; no
//! side effects, no retained state.

use zoomline_model::{SegmentId, SegmentModel, ZoomEffectState, ZoomSegment};

/// Maximum magnification, reached at a segment's center.
pub const PEAK_SCALE: f64 = 2.5;

/// Axis clamp for anchor-derived focus points, so the zoom never pans
/// past the frame edge.
const ANCHOR_FOCUS_MIN_PCT: f64 = 5.0;
const ANCHOR_FOCUS_MAX_PCT: f64 = 95.0;

/// Compute the zoom transform at `time`.
///
/// The first segment in model iteration order whose span contains
/// `time` wins; with no match the state is neutral (centered, scale 1).
pub fn effect_at(model: &SegmentModel, time: f64) -> ZoomEffectState {
    let Some(segment) = model.segment_at(time) else {
        return ZoomEffectState::NEUTRAL;
    };

    let progress = ((time - segment.timestamp) / segment.duration).clamp(0.0, 1.0);
    let (x, y) = focus_point(model, segment);
    ZoomEffectState::new(x, y, scale_at_progress(progress))
}

/// Transform at a segment's visual peak, ignoring the time cursor.
///
/// Used to surface an immediate preview while a segment is being
/// dragged, without requiring playback to reach the segment.
pub fn peak_effect(model: &SegmentModel, id: &SegmentId) -> Option<ZoomEffectState> {
    let segment = model.get(id)?;
    let (x, y) = focus_point(model, segment);
    Some(ZoomEffectState::new(x, y, PEAK_SCALE))
}

/// Symmetric triangular easing: scale 1 at both span ends, [`PEAK_SCALE`]
/// at the center.
fn scale_at_progress(progress: f64) -> f64 {
    let scale = if progress < 0.5 {
        1.0 + (PEAK_SCALE - 1.0) * (2.0 * progress)
    } else {
        PEAK_SCALE - (PEAK_SCALE - 1.0) * (2.0 * progress - 1.0)
    };
    scale.max(1.0)
}

/// Focus point: explicit area center when set, otherwise the click
/// anchor converted to frame percent and clamped off the frame edge.
fn focus_point(model: &SegmentModel, segment: &ZoomSegment) -> (f64, f64) {
    if let Some(area) = model.area(&segment.id) {
        return area.center();
    }
    let (x, y) = segment.anchor.to_percent();
    (
        x.clamp(ANCHOR_FOCUS_MIN_PCT, ANCHOR_FOCUS_MAX_PCT),
        y.clamp(ANCHOR_FOCUS_MIN_PCT, ANCHOR_FOCUS_MAX_PCT),
    )
}
