//! Click events from the recording collaborator.
//!
//! The recording side delivers an ordered list of interaction events in
//! JSONL format (one JSON object per line). Coordinates are pixels in a
//! fixed 1920×1080 reference resolution; the editor converts to frame
//! percent at the model boundary.

use serde::{Deserialize, Serialize};

/// Width of the reference resolution click coordinates are recorded in.
pub const REFERENCE_WIDTH: f64 = 1920.0;

/// Height of the reference resolution click coordinates are recorded in.
pub const REFERENCE_HEIGHT: f64 = 1080.0;

/// A single recorded interaction (click) event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClickEvent {
    /// Seconds since recording start.
    #[serde(rename = "t")]
    pub timestamp_secs: f64,

    /// Horizontal position in reference-resolution pixels.
    pub x: f64,

    /// Vertical position in reference-resolution pixels.
    pub y: f64,
}

impl ClickEvent {
    pub fn new(timestamp_secs: f64, x: f64, y: f64) -> Self {
        Self {
            timestamp_secs,
            x,
            y,
        }
    }

    /// Position as percent of the reference frame, clamped to `[0, 100]`.
    pub fn position_percent(&self) -> (f64, f64) {
        (
            (self.x / REFERENCE_WIDTH * 100.0).clamp(0.0, 100.0),
            (self.y / REFERENCE_HEIGHT * 100.0).clamp(0.0, 100.0),
        )
    }
}

/// Parse events from JSONL content (one JSON object per line).
///
/// Blank lines and `#` comment lines (feed headers) are skipped. Any
/// malformed line fails the whole feed; callers recover by treating the
/// feed as empty.
pub fn parse_events(jsonl: &str) -> Result<Vec<ClickEvent>, serde_json::Error> {
    jsonl
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(serde_json::from_str)
        .collect()
}

/// Serialize events to JSONL format.
pub fn serialize_events(events: &[ClickEvent]) -> Result<String, serde_json::Error> {
    let mut output = String::new();
    for event in events {
        output.push_str(&serde_json::to_string(event)?);
        output.push('\n');
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_roundtrip() {
        let event = ClickEvent::new(10.0, 960.0, 540.0);
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"t\":10.0"));
        let parsed: ClickEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, parsed);
    }

    #[test]
    fn test_position_percent_center() {
        let event = ClickEvent::new(0.0, 960.0, 540.0);
        let (x, y) = event.position_percent();
        assert!((x - 50.0).abs() < 1e-9);
        assert!((y - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_position_percent_clamps_out_of_frame() {
        let event = ClickEvent::new(0.0, -40.0, 2000.0);
        let (x, y) = event.position_percent();
        assert_eq!(x, 0.0);
        assert_eq!(y, 100.0);
    }

    #[test]
    fn test_jsonl_roundtrip() {
        let events = vec![
            ClickEvent::new(1.5, 100.0, 200.0),
            ClickEvent::new(8.25, 1800.0, 900.0),
        ];
        let jsonl = serialize_events(&events).unwrap();
        let parsed = parse_events(&jsonl).unwrap();
        assert_eq!(events, parsed);
    }

    #[test]
    fn test_parse_skips_header_and_blank_lines() {
        let jsonl = "# {\"schema_version\":\"1.0\"}\n\n{\"t\":2.0,\"x\":10.0,\"y\":20.0}\n";
        let parsed = parse_events(jsonl).unwrap();
        assert_eq!(parsed.len(), 1);
        assert!((parsed[0].timestamp_secs - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_malformed_line_fails_feed() {
        let jsonl = "{\"t\":1.0,\"x\":1.0,\"y\":1.0}\nnot-json\n";
        assert!(parse_events(jsonl).is_err());
    }
}
