//! Zoom-area geometry: rectangular focus regions on the video frame.
//!
//! All coordinates are percent of the video-frame extent: `(0, 0)` is
//! top-left, `(100, 100)` bottom-right.

use serde::{Deserialize, Serialize};

/// Smallest extent (percent) an area edge may be resized down to.
pub const MIN_AREA_EXTENT_PCT: f64 = 5.0;

/// Smallest extent (percent) a freshly drawn rectangle must reach on
/// both axes to be committed; anything smaller is an accidental gesture.
pub const COMMIT_AREA_EXTENT_PCT: f64 = 1.0;

/// A rectangular focus region, percent of video-frame extent.
///
/// Invariant: `0 ≤ x`, `0 ≤ y`, `x + width ≤ 100`, `y + height ≤ 100`,
/// `width, height > 0`. Constructors clamp rather than reject.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomArea {
    /// Left edge (percent).
    pub x: f64,
    /// Top edge (percent).
    pub y: f64,
    /// Width (percent).
    pub width: f64,
    /// Height (percent).
    pub height: f64,
}

/// One of a zoom area's four resize handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::BottomRight,
    ];
}

impl ZoomArea {
    /// Create a new area, clamping values into the frame.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        let width = width.clamp(COMMIT_AREA_EXTENT_PCT, 100.0);
        let height = height.clamp(COMMIT_AREA_EXTENT_PCT, 100.0);
        Self {
            x: x.clamp(0.0, 100.0 - width),
            y: y.clamp(0.0, 100.0 - height),
            width,
            height,
        }
    }

    /// Create an area centered at `(cx, cy)`, clamped into the frame.
    pub fn centered(cx: f64, cy: f64, width: f64, height: f64) -> Self {
        Self::new(cx - width / 2.0, cy - height / 2.0, width, height)
    }

    /// Normalize a free-drawn rectangle between two pointer positions so
    /// the origin is the min corner and extents are non-negative.
    pub fn from_drag(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        let x = x1.min(x2).clamp(0.0, 100.0);
        let y = y1.min(y2).clamp(0.0, 100.0);
        let width = ((x1 - x2).abs()).min(100.0 - x);
        let height = ((y1 - y2).abs()).min(100.0 - y);
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge (percent).
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge (percent).
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// The center point of this area.
    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Check if a percent point is within this area.
    pub fn contains(&self, px: f64, py: f64) -> bool {
        px >= self.x && px <= self.right() && py >= self.y && py <= self.bottom()
    }

    /// Position of the given corner.
    pub fn corner(&self, corner: Corner) -> (f64, f64) {
        match corner {
            Corner::TopLeft => (self.x, self.y),
            Corner::TopRight => (self.right(), self.y),
            Corner::BottomLeft => (self.x, self.bottom()),
            Corner::BottomRight => (self.right(), self.bottom()),
        }
    }

    /// Translate by a percent delta, clamped to stay fully in frame.
    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self {
            x: (self.x + dx).clamp(0.0, 100.0 - self.width),
            y: (self.y + dy).clamp(0.0, 100.0 - self.height),
            width: self.width,
            height: self.height,
        }
    }

    /// Move the given corner to `(px, py)`, keeping the opposite edges
    /// fixed. Each adjacent edge clamps to [`MIN_AREA_EXTENT_PCT`] and
    /// the frame bounds. The clamp ranges are saturated first: a stored
    /// area smaller than the minimum extent, or one pinned against the
    /// far frame edge, would otherwise invert them.
    pub fn with_corner_at(&self, corner: Corner, px: f64, py: f64) -> Self {
        let (x, width) = match corner {
            Corner::TopLeft | Corner::BottomLeft => {
                let max_x = (self.right() - MIN_AREA_EXTENT_PCT).max(0.0);
                let new_x = px.clamp(0.0, max_x);
                (new_x, self.right() - new_x)
            }
            Corner::TopRight | Corner::BottomRight => {
                let max_width = (100.0 - self.x).max(MIN_AREA_EXTENT_PCT);
                (self.x, (px - self.x).clamp(MIN_AREA_EXTENT_PCT, max_width))
            }
        };

        let (y, height) = match corner {
            Corner::TopLeft | Corner::TopRight => {
                let max_y = (self.bottom() - MIN_AREA_EXTENT_PCT).max(0.0);
                let new_y = py.clamp(0.0, max_y);
                (new_y, self.bottom() - new_y)
            }
            Corner::BottomLeft | Corner::BottomRight => {
                let max_height = (100.0 - self.y).max(MIN_AREA_EXTENT_PCT);
                (self.y, (py - self.y).clamp(MIN_AREA_EXTENT_PCT, max_height))
            }
        };

        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Whether both extents reach the commit threshold.
    pub fn is_committable(&self) -> bool {
        self.width > COMMIT_AREA_EXTENT_PCT && self.height > COMMIT_AREA_EXTENT_PCT
    }
}
