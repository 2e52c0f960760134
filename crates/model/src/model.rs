//! The segment model: single mutable source of truth for the editor.
//!
//! Gesture controllers propose mutations through the operations here and
//! never touch the stored data directly. All operations are synchronous
//! and total: out-of-range values clamp, stale ids are no-ops, and the
//! model stays renderable at every point.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::area::ZoomArea;
use crate::segment::{SegmentId, SegmentPatch, ZoomSegment, MIN_SEGMENT_DURATION_SECS};

/// Segments, their optional focus areas, and the current selection.
///
/// Segments keep stable creation order; overlap resolution in effect
/// calculation relies on it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SegmentModel {
    segments: Vec<ZoomSegment>,
    areas: BTreeMap<SegmentId, ZoomArea>,
    #[serde(skip)]
    selected: Option<SegmentId>,
}

impl SegmentModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a segment, clamping its times into valid range. A segment
    /// with an id already present replaces the original in place so ids
    /// stay unique.
    pub fn create_segment(&mut self, segment: ZoomSegment) -> SegmentId {
        let mut segment = segment;
        segment.timestamp = segment.timestamp.max(0.0);
        segment.duration = segment.duration.max(MIN_SEGMENT_DURATION_SECS);
        let id = segment.id.clone();

        if let Some(existing) = self.segments.iter_mut().find(|s| s.id == id) {
            *existing = segment;
        } else {
            self.segments.push(segment);
        }
        id
    }

    /// Apply a partial update. Unknown ids are a no-op; values clamp.
    pub fn update_segment(&mut self, id: &SegmentId, patch: SegmentPatch) {
        let Some(segment) = self.segments.iter_mut().find(|s| s.id == *id) else {
            tracing::debug!(id = %id, "update_segment on missing id ignored");
            return;
        };

        if let Some(timestamp) = patch.timestamp {
            segment.timestamp = timestamp.max(0.0);
        }
        if let Some(duration) = patch.duration {
            segment.duration = duration.max(MIN_SEGMENT_DURATION_SECS);
        }
        if let Some(click_timestamp) = patch.click_timestamp {
            segment.click_timestamp = click_timestamp.max(0.0);
        }
        if let Some(anchor) = patch.anchor {
            segment.anchor = anchor;
        }
        if let Some(label) = patch.label {
            segment.label = label;
        }
    }

    /// Remove a segment along with its area; clears a matching
    /// selection. Unknown ids are a no-op.
    pub fn remove_segment(&mut self, id: &SegmentId) {
        self.segments.retain(|s| s.id != *id);
        self.areas.remove(id);
        if self.selected.as_ref() == Some(id) {
            self.selected = None;
        }
    }

    /// Set or clear a segment's focus area. Areas are clamped into the
    /// frame; setting an area for a missing segment is a no-op.
    pub fn set_area(&mut self, id: &SegmentId, area: Option<ZoomArea>) {
        if !self.segments.iter().any(|s| s.id == *id) {
            tracing::debug!(id = %id, "set_area on missing id ignored");
            return;
        }
        match area {
            Some(area) => {
                self.areas
                    .insert(id.clone(), ZoomArea::new(area.x, area.y, area.width, area.height));
            }
            None => {
                self.areas.remove(id);
            }
        }
    }

    /// Select a segment, or clear selection with `None`. Selecting an
    /// id that no longer exists clears selection silently: ids may race
    /// with deletion during concurrent edits.
    pub fn select(&mut self, id: Option<SegmentId>) {
        self.selected = id.filter(|id| self.segments.iter().any(|s| s.id == *id));
    }

    /// Segments in stable creation order.
    pub fn segments(&self) -> &[ZoomSegment] {
        &self.segments
    }

    pub fn get(&self, id: &SegmentId) -> Option<&ZoomSegment> {
        self.segments.iter().find(|s| s.id == *id)
    }

    pub fn area(&self, id: &SegmentId) -> Option<&ZoomArea> {
        self.areas.get(id)
    }

    pub fn selected(&self) -> Option<&SegmentId> {
        self.selected.as_ref()
    }

    pub fn selected_segment(&self) -> Option<&ZoomSegment> {
        self.selected.as_ref().and_then(|id| self.get(id))
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// First segment, in creation order, whose span contains `time`.
    pub fn segment_at(&self, time: f64) -> Option<&ZoomSegment> {
        self.segments.iter().find(|s| s.contains_time(time))
    }

    /// Derive the serializable export bundle for the publish boundary.
    pub fn publish_bundle(&self, duration_secs: f64) -> PublishBundle {
        PublishBundle {
            segments: self.segments.clone(),
            areas: self.areas.clone(),
            duration_secs,
            exported_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Serializable export of the editor state for downstream publishing.
///
/// Losslessly derivable from the model; the backend collaborator owns
/// the final encoding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublishBundle {
    pub segments: Vec<ZoomSegment>,
    pub areas: BTreeMap<SegmentId, ZoomArea>,
    pub duration_secs: f64,
    /// Export timestamp (ISO 8601).
    pub exported_at: String,
}
