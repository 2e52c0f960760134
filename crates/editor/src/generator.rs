//! Segment generation: derive initial zoom segments from recorded clicks.
//!
//! Each click becomes one segment spanning a fixed total duration, half
//! before and half after the click instant, with a default square focus
//! area centered on the click position. Ids are deterministic so
//! re-running generation on an unchanged feed is idempotent.

use zoomline_common::config::EditorDefaults;
use zoomline_model::{AnchorPoint, ClickEvent, SegmentId, SegmentModel, ZoomArea, ZoomSegment};

/// Configuration for the segment generator.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Total zoom duration per click (seconds).
    pub zoom_duration_secs: f64,

    /// Extent of the default square focus area (percent of frame).
    pub area_extent_pct: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            zoom_duration_secs: 2.0,
            area_extent_pct: 30.0,
        }
    }
}

impl From<&EditorDefaults> for GeneratorConfig {
    fn from(defaults: &EditorDefaults) -> Self {
        Self {
            zoom_duration_secs: defaults.zoom_duration_secs,
            area_extent_pct: defaults.area_extent_pct,
        }
    }
}

/// The segment generator.
pub struct SegmentGenerator {
    config: GeneratorConfig,
}

impl SegmentGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn with_defaults() -> Self {
        Self::new(GeneratorConfig::default())
    }

    /// Build a segment model from an ordered click feed.
    ///
    /// An empty feed yields an empty model, never an error; the editor
    /// renders gracefully with zero segments.
    pub fn generate(&self, events: &[ClickEvent]) -> SegmentModel {
        let mut model = SegmentModel::new();
        let half = self.config.zoom_duration_secs / 2.0;

        for (index, event) in events.iter().enumerate() {
            // The full duration is preserved near t=0 by shifting the
            // span right instead of truncating it.
            let timestamp = (event.timestamp_secs - half).max(0.0);

            let mut segment = ZoomSegment::new(
                SegmentId::generated(index),
                timestamp,
                self.config.zoom_duration_secs,
                AnchorPoint::new(event.x, event.y),
                format!("Zoom {}", index + 1),
            );
            // The visual peak stays on the original click instant even
            // when the span was shifted away from it.
            segment.click_timestamp = event.timestamp_secs.max(0.0);

            let (cx, cy) = event.position_percent();
            let area = ZoomArea::centered(
                cx,
                cy,
                self.config.area_extent_pct,
                self.config.area_extent_pct,
            );

            let id = model.create_segment(segment);
            model.set_area(&id, Some(area));
        }

        tracing::debug!(
            events = events.len(),
            segments = model.len(),
            "generated segments from click feed"
        );
        model
    }

    /// Demonstration segments for a UI with no recorded clicks to show.
    ///
    /// This is a presentation-level fallback; `generate` itself never
    /// substitutes samples for an empty feed.
    pub fn sample_segments() -> SegmentModel {
        let generator = Self::with_defaults();
        generator.generate(&[
            ClickEvent::new(2.0, 480.0, 270.0),
            ClickEvent::new(6.0, 1440.0, 810.0),
            ClickEvent::new(11.0, 960.0, 540.0),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_feed_yields_empty_model() {
        let model = SegmentGenerator::with_defaults().generate(&[]);
        assert!(model.is_empty());
    }

    #[test]
    fn test_single_click_reference_scenario() {
        // Click at t=10 centered on the frame.
        let model =
            SegmentGenerator::with_defaults().generate(&[ClickEvent::new(10.0, 960.0, 540.0)]);
        assert_eq!(model.len(), 1);

        let segment = &model.segments()[0];
        assert_eq!(segment.id.as_str(), "zoom-0");
        assert!((segment.timestamp - 9.0).abs() < 1e-9);
        assert!((segment.duration - 2.0).abs() < 1e-9);
        assert!((segment.click_timestamp - 10.0).abs() < 1e-9);

        let area = model.area(&segment.id).unwrap();
        assert!((area.x - 35.0).abs() < 1e-9);
        assert!((area.y - 35.0).abs() < 1e-9);
        assert!((area.width - 30.0).abs() < 1e-9);
        assert!((area.height - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_early_click_shifts_span_instead_of_truncating() {
        let model =
            SegmentGenerator::with_defaults().generate(&[ClickEvent::new(0.3, 100.0, 100.0)]);
        let segment = &model.segments()[0];
        assert_eq!(segment.timestamp, 0.0);
        assert!((segment.duration - 2.0).abs() < 1e-9);
        assert!((segment.click_timestamp - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_corner_click_area_clamps_into_frame() {
        let model =
            SegmentGenerator::with_defaults().generate(&[ClickEvent::new(5.0, 1900.0, 20.0)]);
        let area = model.area(&SegmentId::generated(0)).unwrap();
        assert!((area.x - 70.0).abs() < 1e-9);
        assert_eq!(area.y, 0.0);
        assert!(area.right() <= 100.0);
    }

    #[test]
    fn test_generation_is_idempotent() {
        let events = vec![
            ClickEvent::new(3.0, 480.0, 270.0),
            ClickEvent::new(10.0, 960.0, 540.0),
        ];
        let generator = SegmentGenerator::with_defaults();
        let first = generator.generate(&events);
        let second = generator.generate(&events);

        assert_eq!(first.len(), second.len());
        for (a, b) in first.segments().iter().zip(second.segments()) {
            assert_eq!(a, b);
            assert_eq!(first.area(&a.id), second.area(&b.id));
        }
    }

    #[test]
    fn test_sample_segments_are_nonempty() {
        let model = SegmentGenerator::sample_segments();
        assert!(!model.is_empty());
        assert!(model.segments().iter().all(|s| s.duration > 0.0));
    }
}
