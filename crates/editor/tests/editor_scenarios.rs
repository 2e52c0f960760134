//! End-to-end scenarios over the sample click feed: generation, effect
//! calculation, editing gestures, and the publish bundle, chained the
//! way an editor session uses them.

use std::path::PathBuf;

use zoomline_common::time::TimelineGeometry;
use zoomline_editor::effect::{effect_at, PEAK_SCALE};
use zoomline_editor::gesture::GestureThresholds;
use zoomline_editor::timeline_drag::{DragOutcome, SegmentExtent, TimelineDragController};
use zoomline_editor::{SegmentGenerator, ZoomAreaEditor};
use zoomline_model::event::parse_events;
use zoomline_model::{ClickEvent, PublishBundle, SegmentId};

fn load_fixture_events() -> Vec<ClickEvent> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("fixtures")
        .join("sample-session")
        .join("clicks.jsonl");

    let content = std::fs::read_to_string(path).expect("fixture clicks should be readable");
    parse_events(&content).expect("fixture clicks should parse")
}

#[test]
fn fixture_generates_one_segment_per_click() {
    let events = load_fixture_events();
    assert_eq!(events.len(), 3);

    let model = SegmentGenerator::with_defaults().generate(&events);
    assert_eq!(model.len(), 3);

    for (index, (segment, event)) in model.segments().iter().zip(&events).enumerate() {
        assert_eq!(segment.id, SegmentId::generated(index));
        assert!((segment.duration - 2.0).abs() < 1e-9);
        assert!((segment.click_timestamp - event.timestamp_secs).abs() < 1e-9);
        assert!(model.area(&segment.id).is_some());
    }
}

#[test]
fn fixture_effect_is_neutral_between_segments_and_peaks_on_clicks() {
    let events = load_fixture_events();
    let model = SegmentGenerator::with_defaults().generate(&events);

    // Between segments: centered, no zoom.
    let idle = effect_at(&model, 6.0);
    assert!(!idle.active);
    assert!((idle.scale - 1.0).abs() < 1e-9);

    // On each click instant: peak magnification at the click's area.
    for event in &events {
        let effect = effect_at(&model, event.timestamp_secs);
        assert!(effect.active);
        assert!((effect.scale - PEAK_SCALE).abs() < 1e-9);
    }
}

#[test]
fn fixture_centered_click_focuses_frame_center() {
    let events = load_fixture_events();
    let model = SegmentGenerator::with_defaults().generate(&events);

    // The 10s click sits at frame center (960, 540).
    let effect = effect_at(&model, 10.0);
    assert!((effect.x - 50.0).abs() < 1e-9);
    assert!((effect.y - 50.0).abs() < 1e-9);
}

#[test]
fn full_session_drag_then_area_edit_then_publish() {
    let events = load_fixture_events();
    let mut model = SegmentGenerator::with_defaults().generate(&events);
    let geometry = TimelineGeometry::new(1000.0, 20.0);

    // Select the second segment by clicking it (no drag).
    let id = SegmentId::generated(1);
    let segment = model.get(&id).unwrap();
    let extent = SegmentExtent {
        left_px: segment.timestamp / 20.0 * 1000.0,
        width_px: segment.duration / 20.0 * 1000.0,
    };
    let mut drag = TimelineDragController::new(GestureThresholds::default(), 8.0);
    let grab = extent.left_px + extent.width_px / 2.0;
    drag.pointer_down(&model, &id, grab, 0.0, extent, geometry);
    let outcome = drag.pointer_up(&mut model, grab, 50.0).unwrap();
    assert_eq!(outcome, DragOutcome::Selected(id.clone()));

    // Redraw its focus area.
    let mut area_editor = ZoomAreaEditor::with_defaults();
    area_editor.set_editing(true);
    // Start outside the generated area so the gesture creates anew.
    area_editor.pointer_down(&model, 2.0, 2.0);
    area_editor.pointer_move(42.0, 32.0);
    area_editor.pointer_up(&mut model);

    let area = model.area(&id).unwrap();
    assert!((area.x - 2.0).abs() < 1e-9);
    assert!((area.width - 40.0).abs() < 1e-9);

    // The effect now focuses the new area's center at the peak.
    let effect = effect_at(&model, model.get(&id).unwrap().click_timestamp);
    assert!((effect.x - 22.0).abs() < 1e-9);
    assert!((effect.y - 17.0).abs() < 1e-9);

    // Publish round-trips losslessly.
    let bundle = model.publish_bundle(20.0);
    let json = serde_json::to_string(&bundle).unwrap();
    let parsed: PublishBundle = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.segments, bundle.segments);
    assert_eq!(parsed.areas.len(), 3);
}

#[test]
fn regeneration_after_edits_restores_the_feed_state() {
    let events = load_fixture_events();
    let generator = SegmentGenerator::with_defaults();

    let mut edited = generator.generate(&events);
    edited.remove_segment(&SegmentId::generated(0));
    assert_eq!(edited.len(), 2);

    // Re-running the generator on the unchanged feed is idempotent.
    let fresh = generator.generate(&events);
    let again = generator.generate(&events);
    assert_eq!(fresh.segments(), again.segments());
    assert_eq!(fresh.len(), 3);
}
