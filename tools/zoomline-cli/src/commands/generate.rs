//! Derive zoom segments from a recorded click feed.

use std::path::PathBuf;

use anyhow::Context;
use zoomline_common::config::AppConfig;
use zoomline_editor::generator::{GeneratorConfig, SegmentGenerator};
use zoomline_model::parse_events;

pub fn run(
    clicks: PathBuf,
    output: Option<PathBuf>,
    zoom_duration: Option<f64>,
    area_extent: Option<f64>,
) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(&clicks)
        .with_context(|| format!("Failed to read click feed: {}", clicks.display()))?;
    let events = parse_events(&content)
        .with_context(|| format!("Failed to parse click feed: {}", clicks.display()))?;

    println!("Loaded {} click(s) from {}", events.len(), clicks.display());

    let defaults = AppConfig::load().editor;
    let mut config = GeneratorConfig::from(&defaults);
    if let Some(secs) = zoom_duration {
        config.zoom_duration_secs = secs;
    }
    if let Some(pct) = area_extent {
        config.area_extent_pct = pct;
    }

    let model = SegmentGenerator::new(config).generate(&events);
    println!("Generated {} segment(s)", model.len());
    for segment in model.segments() {
        println!(
            "  {} [{:.2}s - {:.2}s] peak {:.2}s  {}",
            segment.id,
            segment.timestamp,
            segment.end(),
            segment.click_timestamp,
            segment.label
        );
    }

    let json = serde_json::to_string_pretty(&model)?;
    super::write_output(output, &json)
}
