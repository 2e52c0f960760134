//! Check a segment model's invariants.

use std::path::PathBuf;

use zoomline_model::{COMMIT_AREA_EXTENT_PCT, MIN_SEGMENT_DURATION_SECS};

pub fn run(model_path: PathBuf) -> anyhow::Result<()> {
    println!("Validating model at: {}", model_path.display());
    let model = super::load_model(&model_path)?;

    println!("  Segments: {}", model.len());
    let with_area = model
        .segments()
        .iter()
        .filter(|s| model.area(&s.id).is_some())
        .count();
    println!("  Focus areas: {with_area}");

    let mut errors = Vec::new();
    for segment in model.segments() {
        if segment.timestamp < 0.0 {
            errors.push(format!("{}: starts before t=0", segment.id));
        }
        if segment.duration < MIN_SEGMENT_DURATION_SECS {
            errors.push(format!(
                "{}: duration {:.3}s is below the {:.3}s floor",
                segment.id, segment.duration, MIN_SEGMENT_DURATION_SECS
            ));
        }
        if !segment.contains_time(segment.click_timestamp) {
            errors.push(format!(
                "{}: peak {:.3}s falls outside the segment span",
                segment.id, segment.click_timestamp
            ));
        }
        if let Some(area) = model.area(&segment.id) {
            if area.x < 0.0 || area.y < 0.0 || area.right() > 100.0 || area.bottom() > 100.0 {
                errors.push(format!("{}: focus area leaves the frame", segment.id));
            }
            if area.width < COMMIT_AREA_EXTENT_PCT || area.height < COMMIT_AREA_EXTENT_PCT {
                errors.push(format!("{}: focus area is degenerate", segment.id));
            }
        }
    }

    // Overlaps are legal (the earliest-created segment wins the effect),
    // but they are worth surfacing.
    let mut overlaps = 0;
    let segments = model.segments();
    for (i, a) in segments.iter().enumerate() {
        for b in &segments[i + 1..] {
            if a.timestamp < b.end() && b.timestamp < a.end() {
                overlaps += 1;
            }
        }
    }
    if overlaps > 0 {
        println!("  Overlapping pairs: {overlaps} (earliest-created wins)");
    }

    if errors.is_empty() {
        println!("\nModel is valid.");
    } else {
        println!("\nValidation issues:");
        for error in &errors {
            println!("  - {error}");
        }
        anyhow::bail!("{} issue(s) found", errors.len());
    }

    Ok(())
}
