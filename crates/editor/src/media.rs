//! The playback-clock collaborator seam.
//!
//! Video decoding and playback live outside this crate; the editor only
//! needs the narrow surface below. Implementations wrap whatever media
//! element or pipeline the embedding application uses.

use zoomline_common::ZoomlineResult;

/// Readiness of the underlying media.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadyState {
    /// No metadata yet; duration is unknown and seeks cannot land.
    Empty,
    /// Metadata loaded: duration is known, seeking may still no-op.
    Metadata,
    /// Enough data buffered for seeks to take effect.
    Seekable,
}

/// External playback clock and transport commands.
///
/// `seek` is allowed to silently fail while the source is still
/// buffering; the scrubber detects that through the clock rather than
/// the return value, which is reserved for hard transport errors.
pub trait MediaSource {
    /// Current playback position (seconds).
    fn current_time(&self) -> f64;

    /// Total duration (seconds); 0.0 while unknown.
    fn duration(&self) -> f64;

    /// Whether playback is paused.
    fn paused(&self) -> bool;

    /// Buffering/readiness state.
    fn ready_state(&self) -> ReadyState;

    /// Request a jump to `time_secs`.
    fn seek(&mut self, time_secs: f64) -> ZoomlineResult<()>;

    fn play(&mut self) -> ZoomlineResult<()>;

    fn pause(&mut self) -> ZoomlineResult<()>;

    /// Force the source to reinitialize; used when seeks keep no-opping.
    fn reload(&mut self) -> ZoomlineResult<()>;
}
