//! Timeline drag controller: move and resize a segment's time-span.
//!
//! One session per gesture, created on pointer-down and consumed exactly
//! once on pointer-up. The mode is classified a single time at
//! pointer-down and never changes mid-gesture. Intermediate moves only
//! update the transient session; the model is written once, when the
//! gesture concludes. A press that never crosses the drag thresholds is
//! reclassified as a selection click on release.

use zoomline_common::time::TimelineGeometry;
use zoomline_model::{SegmentId, SegmentModel, SegmentPatch, ZoomEffectState};

use crate::effect::peak_effect;
use crate::gesture::{GestureThresholds, GestureTracker};

/// Smallest segment width, as percent of the timeline.
pub const MIN_SEGMENT_WIDTH_PCT: f64 = 1.0;

/// What a pointer-down on a segment was aimed at, decided once from the
/// pointer's offset within the segment's rendered extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragMode {
    Move,
    ResizeLeft,
    ResizeRight,
}

/// Rendered extent of a segment on the timeline strip, in pixels.
#[derive(Debug, Clone, Copy)]
pub struct SegmentExtent {
    pub left_px: f64,
    pub width_px: f64,
}

/// How a concluded gesture was resolved.
#[derive(Debug, Clone, PartialEq)]
pub enum DragOutcome {
    /// The press never became a drag: the segment was selected instead.
    Selected(SegmentId),
    /// The span was committed to the model.
    Committed {
        id: SegmentId,
        timestamp: f64,
        duration: f64,
    },
}

/// Transient state for one active gesture.
#[derive(Debug, Clone)]
struct DragSession {
    segment_id: SegmentId,
    mode: DragMode,
    tracker: GestureTracker,
    geometry: TimelineGeometry,
    start_timestamp: f64,
    start_duration: f64,
    pending_timestamp: f64,
    pending_duration: f64,
}

/// State machine for segment move/resize gestures on the 1-D timeline.
#[derive(Debug)]
pub struct TimelineDragController {
    thresholds: GestureThresholds,
    /// Pixel band at each segment edge that selects a resize mode.
    edge_band_px: f64,
    session: Option<DragSession>,
}

impl TimelineDragController {
    pub fn new(thresholds: GestureThresholds, edge_band_px: f64) -> Self {
        Self {
            thresholds,
            edge_band_px,
            session: None,
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(GestureThresholds::default(), 8.0)
    }

    /// Begin a gesture on `id`. Returns false (and starts nothing) for a
    /// stale id; one session may be active at a time, so a second
    /// pointer-down while one is live is ignored.
    pub fn pointer_down(
        &mut self,
        model: &SegmentModel,
        id: &SegmentId,
        x_px: f64,
        now_ms: f64,
        extent: SegmentExtent,
        geometry: TimelineGeometry,
    ) -> bool {
        if self.session.is_some() {
            tracing::warn!(id = %id, "pointer_down with live drag session ignored");
            return false;
        }
        let Some(segment) = model.get(id) else {
            tracing::debug!(id = %id, "pointer_down on missing segment ignored");
            return false;
        };

        let offset = x_px - extent.left_px;
        let mode = if offset <= self.edge_band_px {
            DragMode::ResizeLeft
        } else if offset >= extent.width_px - self.edge_band_px {
            DragMode::ResizeRight
        } else {
            DragMode::Move
        };

        tracing::debug!(id = %id, ?mode, "drag session started");
        self.session = Some(DragSession {
            segment_id: id.clone(),
            mode,
            tracker: GestureTracker::new(x_px, 0.0, now_ms),
            geometry,
            start_timestamp: segment.timestamp,
            start_duration: segment.duration,
            pending_timestamp: segment.timestamp,
            pending_duration: segment.duration,
        });
        true
    }

    /// Feed a pointer-move. Updates only the transient session; the
    /// model is untouched until the gesture concludes.
    pub fn pointer_move(&mut self, x_px: f64, now_ms: f64) {
        let thresholds = self.thresholds;
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if !session.tracker.update(x_px, 0.0, now_ms, &thresholds) {
            return;
        }

        let (origin_x, _) = session.tracker.origin();
        let dt = session.geometry.px_to_secs(x_px - origin_x);
        let min_width = session
            .geometry
            .percent_as_secs(MIN_SEGMENT_WIDTH_PCT)
            .max(f64::EPSILON);
        let container = session.geometry.duration_secs;
        let start_end = session.start_timestamp + session.start_duration;

        match session.mode {
            DragMode::Move => {
                let max_start = (container - session.start_duration).max(0.0);
                session.pending_timestamp =
                    (session.start_timestamp + dt).clamp(0.0, max_start);
                session.pending_duration = session.start_duration;
            }
            DragMode::ResizeLeft => {
                // Saturate before clamping: a span already below the
                // width floor would invert the range.
                let max_start = (start_end - min_width).max(0.0);
                let new_start = (session.start_timestamp + dt).clamp(0.0, max_start);
                session.pending_timestamp = new_start;
                session.pending_duration = start_end - new_start;
            }
            DragMode::ResizeRight => {
                // A segment starting within one width-floor of the
                // container end would invert the range too.
                let min_end = session.start_timestamp + min_width;
                let new_end = (start_end + dt).clamp(min_end, container.max(min_end));
                session.pending_timestamp = session.start_timestamp;
                session.pending_duration = new_end - session.start_timestamp;
            }
        }
    }

    /// Conclude the gesture. The session is consumed regardless of
    /// where the pointer was released.
    pub fn pointer_up(&mut self, model: &mut SegmentModel, x_px: f64, now_ms: f64) -> Option<DragOutcome> {
        let mut session = self.session.take()?;
        session.tracker.update(x_px, 0.0, now_ms, &self.thresholds);

        if !session.tracker.is_drag() {
            tracing::debug!(id = %session.segment_id, "gesture reclassified as selection click");
            model.select(Some(session.segment_id.clone()));
            return Some(DragOutcome::Selected(session.segment_id));
        }

        // Recompute against the release position so the commit matches
        // the last rendered preview.
        self.session = Some(session);
        self.pointer_move(x_px, now_ms);
        let session = self.session.take()?;

        let patch = match session.mode {
            DragMode::Move => model
                .get(&session.segment_id)
                .map(|segment| SegmentPatch::shifted(segment, session.pending_timestamp)),
            DragMode::ResizeLeft | DragMode::ResizeRight => Some(SegmentPatch::resized(
                session.pending_timestamp,
                session.pending_duration,
            )),
        };
        let Some(patch) = patch else {
            // Segment was removed mid-gesture: stale id, no-op.
            return None;
        };

        model.update_segment(&session.segment_id, patch);
        tracing::debug!(
            id = %session.segment_id,
            timestamp = session.pending_timestamp,
            duration = session.pending_duration,
            "drag committed"
        );
        Some(DragOutcome::Committed {
            id: session.segment_id,
            timestamp: session.pending_timestamp,
            duration: session.pending_duration,
        })
    }

    /// The transient span as it would commit right now, for overlay
    /// rendering during the gesture.
    pub fn pending_span(&self) -> Option<(f64, f64)> {
        self.session
            .as_ref()
            .map(|s| (s.pending_timestamp, s.pending_duration))
    }

    /// Zoom preview at the dragged segment's peak, surfaced while a
    /// session is live so the user sees the focus without playing the
    /// video. Bypasses the time-cursor-driven calculator; withdrawn as
    /// soon as the session ends.
    pub fn preview_effect(&self, model: &SegmentModel) -> Option<ZoomEffectState> {
        let session = self.session.as_ref()?;
        peak_effect(model, &session.segment_id)
    }

    /// Whether a gesture is currently in flight.
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zoomline_model::{AnchorPoint, ZoomSegment, MIN_SEGMENT_DURATION_SECS};

    const GEO: TimelineGeometry = TimelineGeometry {
        width_px: 1000.0,
        duration_secs: 20.0,
    };

    fn thresholds() -> GestureThresholds {
        GestureThresholds {
            drag_threshold_px: 4.0,
            drag_delay_ms: 150.0,
        }
    }

    fn model_with(timestamp: f64, duration: f64) -> (SegmentModel, SegmentId) {
        let mut model = SegmentModel::new();
        let id = model.create_segment(ZoomSegment::new(
            SegmentId::new("s"),
            timestamp,
            duration,
            AnchorPoint::new(960.0, 540.0),
            "S",
        ));
        (model, id)
    }

    fn extent_of(timestamp: f64, duration: f64) -> SegmentExtent {
        SegmentExtent {
            left_px: timestamp / GEO.duration_secs * GEO.width_px,
            width_px: duration / GEO.duration_secs * GEO.width_px,
        }
    }

    #[test]
    fn test_click_selects_without_mutation() {
        let (mut model, id) = model_with(5.0, 2.0);
        let mut controller = TimelineDragController::new(thresholds(), 8.0);

        let extent = extent_of(5.0, 2.0);
        assert!(controller.pointer_down(&model, &id, 300.0, 0.0, extent, GEO));
        let outcome = controller.pointer_up(&mut model, 300.0, 50.0).unwrap();

        assert_eq!(outcome, DragOutcome::Selected(id.clone()));
        assert_eq!(model.selected(), Some(&id));
        let segment = model.get(&id).unwrap();
        assert!((segment.timestamp - 5.0).abs() < 1e-9);
        assert!((segment.duration - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_move_shifts_span_and_peak() {
        let (mut model, id) = model_with(5.0, 2.0);
        let mut controller = TimelineDragController::new(thresholds(), 8.0);

        // Grab the middle of the segment (mode = Move), drag +100px =
        // +2s on a 20s/1000px timeline.
        controller.pointer_down(&model, &id, 300.0, 0.0, extent_of(5.0, 2.0), GEO);
        controller.pointer_move(400.0, 200.0);
        let outcome = controller.pointer_up(&mut model, 400.0, 250.0).unwrap();

        assert_eq!(
            outcome,
            DragOutcome::Committed {
                id: id.clone(),
                timestamp: 7.0,
                duration: 2.0
            }
        );
        let segment = model.get(&id).unwrap();
        assert!((segment.timestamp - 7.0).abs() < 1e-9);
        // The peak shifted with the span.
        assert!((segment.click_timestamp - 8.0).abs() < 1e-9);
    }

    #[test]
    fn test_move_clamps_to_container() {
        let (mut model, id) = model_with(5.0, 2.0);
        let mut controller = TimelineDragController::new(thresholds(), 8.0);

        controller.pointer_down(&model, &id, 300.0, 0.0, extent_of(5.0, 2.0), GEO);
        controller.pointer_move(5000.0, 200.0);
        controller.pointer_up(&mut model, 5000.0, 250.0);

        let segment = model.get(&id).unwrap();
        assert!((segment.timestamp - 18.0).abs() < 1e-9);
        assert!((segment.end() - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_resize_right_reference_scenario() {
        // Dragging the right edge +10% of a 20s timeline adds 2s of
        // duration and leaves the start untouched.
        let (mut model, id) = model_with(5.0, 2.0);
        let mut controller = TimelineDragController::new(thresholds(), 8.0);

        let extent = extent_of(5.0, 2.0);
        let right_edge = extent.left_px + extent.width_px - 2.0;
        controller.pointer_down(&model, &id, right_edge, 0.0, extent, GEO);
        controller.pointer_move(right_edge + 100.0, 200.0);
        controller.pointer_up(&mut model, right_edge + 100.0, 250.0);

        let segment = model.get(&id).unwrap();
        assert!((segment.timestamp - 5.0).abs() < 1e-9);
        assert!((segment.duration - 4.0).abs() < 1e-9);
        // Resize recenters the peak on the new midpoint.
        assert!((segment.click_timestamp - 7.0).abs() < 1e-9);
    }

    #[test]
    fn test_resize_left_honors_min_width() {
        let (mut model, id) = model_with(5.0, 2.0);
        let mut controller = TimelineDragController::new(thresholds(), 8.0);

        let extent = extent_of(5.0, 2.0);
        controller.pointer_down(&model, &id, extent.left_px + 1.0, 0.0, extent, GEO);
        // Drag the left edge far past the right edge.
        controller.pointer_move(extent.left_px + 900.0, 200.0);
        controller.pointer_up(&mut model, extent.left_px + 900.0, 250.0);

        let segment = model.get(&id).unwrap();
        let min_width = GEO.duration_secs * MIN_SEGMENT_WIDTH_PCT / 100.0;
        assert!(segment.duration >= min_width - 1e-9);
        assert!(segment.timestamp >= 0.0);
    }

    #[test]
    fn test_resize_left_of_minimum_duration_segment() {
        // A 0.05s span sits below the width floor of a 20s timeline;
        // grabbing its left edge must still be safe.
        let (mut model, id) = model_with(0.0, MIN_SEGMENT_DURATION_SECS);
        let mut controller = TimelineDragController::new(thresholds(), 8.0);

        let extent = extent_of(0.0, MIN_SEGMENT_DURATION_SECS);
        controller.pointer_down(&model, &id, extent.left_px + 1.0, 0.0, extent, GEO);
        controller.pointer_move(50.0, 200.0);
        controller.pointer_up(&mut model, 50.0, 250.0);

        let segment = model.get(&id).unwrap();
        assert_eq!(segment.timestamp, 0.0);
        assert!(segment.duration >= MIN_SEGMENT_DURATION_SECS);
    }

    #[test]
    fn test_resize_right_of_segment_at_container_end() {
        // The model does not know the container duration, so a segment
        // may start within one width-floor of the end.
        let (mut model, id) = model_with(19.9, 1.0);
        let mut controller = TimelineDragController::new(thresholds(), 8.0);

        let extent = extent_of(19.9, 1.0);
        let right_edge = extent.left_px + extent.width_px - 1.0;
        controller.pointer_down(&model, &id, right_edge, 0.0, extent, GEO);
        controller.pointer_move(right_edge - 30.0, 200.0);
        controller.pointer_up(&mut model, right_edge - 30.0, 250.0);

        let segment = model.get(&id).unwrap();
        let min_width = GEO.duration_secs * MIN_SEGMENT_WIDTH_PCT / 100.0;
        assert!((segment.timestamp - 19.9).abs() < 1e-9);
        assert!(segment.duration >= min_width - 1e-9);
    }

    #[test]
    fn test_intermediate_moves_do_not_touch_model() {
        let (model, id) = model_with(5.0, 2.0);
        let mut controller = TimelineDragController::new(thresholds(), 8.0);

        controller.pointer_down(&model, &id, 300.0, 0.0, extent_of(5.0, 2.0), GEO);
        controller.pointer_move(400.0, 200.0);

        assert!((model.get(&id).unwrap().timestamp - 5.0).abs() < 1e-9);
        let (pending_ts, pending_dur) = controller.pending_span().unwrap();
        assert!((pending_ts - 7.0).abs() < 1e-9);
        assert!((pending_dur - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_preview_active_only_during_session() {
        let (mut model, id) = model_with(5.0, 2.0);
        let mut controller = TimelineDragController::new(thresholds(), 8.0);
        assert!(controller.preview_effect(&model).is_none());

        controller.pointer_down(&model, &id, 300.0, 0.0, extent_of(5.0, 2.0), GEO);
        let preview = controller.preview_effect(&model).unwrap();
        assert!((preview.scale - crate::effect::PEAK_SCALE).abs() < 1e-9);

        controller.pointer_up(&mut model, 300.0, 50.0);
        assert!(controller.preview_effect(&model).is_none());
    }

    #[test]
    fn test_stale_id_starts_nothing() {
        let (model, _) = model_with(5.0, 2.0);
        let mut controller = TimelineDragController::new(thresholds(), 8.0);
        assert!(!controller.pointer_down(
            &model,
            &SegmentId::new("ghost"),
            300.0,
            0.0,
            extent_of(5.0, 2.0),
            GEO
        ));
        assert!(!controller.is_active());
    }

    #[test]
    fn test_segment_removed_mid_gesture_is_noop() {
        let (mut model, id) = model_with(5.0, 2.0);
        let mut controller = TimelineDragController::new(thresholds(), 8.0);

        controller.pointer_down(&model, &id, 300.0, 0.0, extent_of(5.0, 2.0), GEO);
        controller.pointer_move(400.0, 200.0);
        model.remove_segment(&id);

        assert!(controller.pointer_up(&mut model, 400.0, 250.0).is_none());
        assert!(!controller.is_active());
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn resize_never_violates_floor_or_origin(
                start in 0.0f64..20.0,
                duration in 0.05f64..2.0,
                grab_left in proptest::bool::ANY,
                drag_to in 0.0f64..1000.0,
            ) {
                let (mut model, id) = model_with(start, duration);
                let mut controller = TimelineDragController::new(thresholds(), 8.0);
                let extent = extent_of(start, duration);
                let x = if grab_left {
                    extent.left_px + 1.0
                } else {
                    extent.left_px + extent.width_px - 1.0
                };

                controller.pointer_down(&model, &id, x, 0.0, extent, GEO);
                controller.pointer_move(drag_to, 200.0);
                controller.pointer_up(&mut model, drag_to, 250.0);

                // A span already below the width floor may stay at its
                // original duration but never shrink past it.
                let segment = model.get(&id).unwrap();
                let min_width = GEO.duration_secs * MIN_SEGMENT_WIDTH_PCT / 100.0;
                prop_assert!(segment.timestamp >= 0.0);
                prop_assert!(segment.duration >= duration.min(min_width) - 1e-9);
            }
        }
    }
}
