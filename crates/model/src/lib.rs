//! Zoomline Data Model
//!
//! Defines the core data contracts for the zoom timeline editor:
//! - **Events:** Timestamped click events from the recording collaborator
//! - **Segments:** Time-spans during which a zoom effect is active
//! - **Areas:** Rectangular focus regions overriding the click anchor
//! - **Model:** The single mutable source of truth plus its operations
//! - **Effect state:** The derived pan/scale transform handed to rendering
//!
//! Segment times are fractional seconds; all 2-D geometry is expressed in
//! percent of the video frame so it survives display scaling. Pixel
//! coordinates appear only at the input boundary (click events in the
//! 1920×1080 reference resolution).

pub mod area;
pub mod effect;
pub mod event;
pub mod model;
pub mod segment;

pub use area::*;
pub use effect::*;
pub use event::*;
pub use model::*;
pub use segment::*;
