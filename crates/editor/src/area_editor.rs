//! Zoom-area editor: create, move, and resize a segment's focus region
//! on the 2-D video surface.
//!
//! Editing is an explicit mode and operates on the selected segment
//! only. Pointer positions arrive in percent of the video frame (the
//! embedding view owns the pixel conversion). Hit-testing classifies a
//! pointer-down once: corner handles take precedence over the general
//! inside-test, and anything outside the existing area starts a fresh
//! rectangle.

use zoomline_model::{Corner, SegmentModel, ZoomArea};

/// What an area gesture is doing, decided once at pointer-down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AreaDragMode {
    /// Draw a free rectangle from the down-point.
    Create,
    /// Translate the existing area.
    Move,
    /// Drag one corner, opposite edges fixed.
    Resize(Corner),
}

/// How a concluded area gesture was resolved.
#[derive(Debug, Clone, PartialEq)]
pub enum AreaOutcome {
    /// The rectangle met the commit threshold and replaced the area.
    Committed(ZoomArea),
    /// Too small to be intentional; the edit was dropped.
    Discarded,
}

#[derive(Debug, Clone)]
struct AreaSession {
    mode: AreaDragMode,
    origin: (f64, f64),
    /// The area as it stood at pointer-down (for move/resize).
    original: Option<ZoomArea>,
    /// Live rectangle updated on every pointer-move.
    current: ZoomArea,
}

/// State machine for focus-area gestures.
#[derive(Debug)]
pub struct ZoomAreaEditor {
    /// Handle radius around each corner, percent of frame.
    corner_handle_pct: f64,
    editing: bool,
    session: Option<AreaSession>,
}

impl ZoomAreaEditor {
    pub fn new(corner_handle_pct: f64) -> Self {
        Self {
            corner_handle_pct,
            editing: false,
            session: None,
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(4.0)
    }

    /// Explicitly enter or leave edit mode. Leaving aborts any live
    /// session without committing.
    pub fn set_editing(&mut self, editing: bool) {
        if !editing && self.session.take().is_some() {
            tracing::debug!("area session aborted by leaving edit mode");
        }
        self.editing = editing;
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Selection moved to a different segment (or none): editing one
    /// segment's area while another becomes selected is not permitted,
    /// so edit mode exits entirely.
    pub fn selection_changed(&mut self) {
        self.set_editing(false);
    }

    /// Explicit cancel (escape): abort the in-progress edit, stay in
    /// edit mode.
    pub fn cancel(&mut self) {
        if self.session.take().is_some() {
            tracing::debug!("area session cancelled");
        }
    }

    /// Begin a gesture at `(x, y)` percent. Requires edit mode and a
    /// selected segment; returns whether a session started.
    pub fn pointer_down(&mut self, model: &SegmentModel, x: f64, y: f64) -> bool {
        if !self.editing || self.session.is_some() {
            return false;
        }
        let Some(selected) = model.selected() else {
            return false;
        };

        let existing = model.area(selected).copied();
        let mode = self.classify(existing.as_ref(), x, y);
        let current = match (mode, existing) {
            (AreaDragMode::Create, _) => ZoomArea::from_drag(x, y, x, y),
            (_, Some(area)) => area,
            // Move/Resize are only classified against an existing area.
            (_, None) => unreachable!("non-create mode without an area"),
        };

        tracing::debug!(segment = %selected, ?mode, "area session started");
        self.session = Some(AreaSession {
            mode,
            origin: (x, y),
            original: existing,
            current,
        });
        true
    }

    /// Feed a pointer-move, updating the live rectangle.
    pub fn pointer_move(&mut self, x: f64, y: f64) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        match session.mode {
            AreaDragMode::Create => {
                session.current = ZoomArea::from_drag(session.origin.0, session.origin.1, x, y);
            }
            AreaDragMode::Move => {
                if let Some(original) = session.original {
                    session.current =
                        original.translated(x - session.origin.0, y - session.origin.1);
                }
            }
            AreaDragMode::Resize(corner) => {
                if let Some(original) = session.original {
                    session.current = original.with_corner_at(corner, x, y);
                }
            }
        }
    }

    /// Conclude the gesture. Commits to the selected segment's area when
    /// the rectangle is big enough to be intentional; otherwise the edit
    /// is discarded. The session is consumed either way.
    pub fn pointer_up(&mut self, model: &mut SegmentModel) -> Option<AreaOutcome> {
        let session = self.session.take()?;
        let Some(selected) = model.selected().cloned() else {
            // Selection vanished mid-gesture: stale target, drop it.
            return Some(AreaOutcome::Discarded);
        };

        if session.current.is_committable() {
            model.set_area(&selected, Some(session.current));
            Some(AreaOutcome::Committed(session.current))
        } else {
            tracing::debug!(segment = %selected, "area edit below commit threshold, discarded");
            Some(AreaOutcome::Discarded)
        }
    }

    /// The live rectangle for overlay drawing during a gesture.
    pub fn live_area(&self) -> Option<&ZoomArea> {
        self.session.as_ref().map(|s| &s.current)
    }

    /// Whether a gesture is currently in flight.
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// Classify a pointer-down against the existing area, if any.
    fn classify(&self, area: Option<&ZoomArea>, x: f64, y: f64) -> AreaDragMode {
        let Some(area) = area else {
            return AreaDragMode::Create;
        };
        for corner in Corner::ALL {
            let (cx, cy) = area.corner(corner);
            if (x - cx).abs() <= self.corner_handle_pct && (y - cy).abs() <= self.corner_handle_pct
            {
                return AreaDragMode::Resize(corner);
            }
        }
        if area.contains(x, y) {
            AreaDragMode::Move
        } else {
            AreaDragMode::Create
        }
    }
}

impl Default for ZoomAreaEditor {
    fn default() -> Self {
        Self::with_defaults()
    }
}
