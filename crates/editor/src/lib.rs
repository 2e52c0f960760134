//! Zoomline Editor Core
//!
//! The engineering-hard part of the demo editor surface:
//! - **Generator:** derive initial zoom segments from recorded clicks
//! - **Effect calculator:** pure `(segments, time) → pan/scale transform`
//! - **Timeline drag:** move/resize a segment's span with click-vs-drag
//!   disambiguation
//! - **Area editor:** create/move/resize a rectangular focus region
//! - **Scrubber:** keep the playhead and an external media clock in sync
//!
//! Everything here is cooperative and event-driven: state transitions
//! happen on pointer or timer callbacks handed in by the embedding UI,
//! and nothing blocks. Gesture controllers only ever write through
//! `SegmentModel` operations.

pub mod area_editor;
pub mod effect;
pub mod generator;
pub mod gesture;
pub mod media;
pub mod preview;
pub mod scrubber;
pub mod timeline_drag;

pub use area_editor::ZoomAreaEditor;
pub use effect::effect_at;
pub use generator::SegmentGenerator;
pub use scrubber::PlaybackScrubber;
pub use timeline_drag::TimelineDragController;
