//! Playback scrubber: keeps the timeline playhead and the external
//! playback clock in agreement, and owns seek-by-click/drag.
//!
//! The media source may not be seekable yet when a seek is requested
//! (buffering, partial load). Seeks are therefore verified on later
//! ticks: if the clock never moved near the target by the deadline, the
//! source is reloaded once and the seek re-issued. Only a second miss
//! surfaces a (non-fatal) notice. Until the clock reconciles, the
//! playhead renders the optimistic target position so the UI stays
//! responsive.

use zoomline_common::time::{clamp_seek, secs_to_percent, DeadlineTimer, TimelineGeometry};

use crate::gesture::{GestureThresholds, GestureTracker};
use crate::media::MediaSource;

/// How close (seconds) the clock must land to a target for the seek to
/// count as applied.
const SEEK_TOLERANCE_SECS: f64 = 0.25;

/// A seek that has been issued but not yet confirmed by the clock.
#[derive(Debug, Clone, Copy)]
struct PendingSeek {
    target_secs: f64,
    timer: DeadlineTimer,
    retried: bool,
}

/// An active scrub gesture on the timeline strip.
#[derive(Debug, Clone, Copy)]
struct ScrubSession {
    tracker: GestureTracker,
    geometry: TimelineGeometry,
}

/// Synchronizes the timeline playhead with an external media clock.
pub struct PlaybackScrubber<M: MediaSource> {
    media: M,
    thresholds: GestureThresholds,
    /// How long a seek may go unconfirmed before the retry path runs.
    seek_timeout_ms: f64,
    pending: Option<PendingSeek>,
    session: Option<ScrubSession>,
    /// Playhead override while a seek is unconfirmed.
    optimistic_secs: Option<f64>,
    notice: Option<String>,
}

impl<M: MediaSource> PlaybackScrubber<M> {
    pub fn new(media: M, thresholds: GestureThresholds, seek_timeout_ms: f64) -> Self {
        Self {
            media,
            thresholds,
            seek_timeout_ms,
            pending: None,
            session: None,
            optimistic_secs: None,
            notice: None,
        }
    }

    /// Playhead position as percent along the timeline. Unknown duration
    /// pins to 0%; an unconfirmed seek renders its target optimistically.
    pub fn playhead_percent(&self) -> f64 {
        let time = self.optimistic_secs.unwrap_or_else(|| self.media.current_time());
        secs_to_percent(time, self.media.duration())
    }

    /// Pointer-down on the timeline strip: seek to that point and start
    /// a potential scrub session.
    pub fn pointer_down(&mut self, x_px: f64, now_ms: f64, geometry: TimelineGeometry) {
        self.session = Some(ScrubSession {
            tracker: GestureTracker::new(x_px, 0.0, now_ms),
            geometry,
        });
        let target = geometry.px_to_time(x_px);
        self.request_seek(target, now_ms);
    }

    /// Pointer-move while held: once the session qualifies as a drag,
    /// every move re-requests a seek (scrubbing).
    pub fn pointer_move(&mut self, x_px: f64, now_ms: f64) {
        let thresholds = self.thresholds;
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if !session.tracker.update(x_px, 0.0, now_ms, &thresholds) {
            return;
        }
        let target = session.geometry.px_to_time(x_px);
        self.request_seek(target, now_ms);
    }

    /// Pointer-up ends the scrub. A press that never became a drag was
    /// a single seek-to-click, already issued at pointer-down.
    pub fn pointer_up(&mut self, _now_ms: f64) {
        self.session = None;
    }

    /// Issue a clamped seek request and arm the confirmation deadline.
    pub fn request_seek(&mut self, target_secs: f64, now_ms: f64) {
        let target = clamp_seek(target_secs, self.media.duration());
        if let Err(e) = self.media.seek(target) {
            tracing::warn!("seek request failed: {e}");
        }
        self.optimistic_secs = Some(target);

        let mut timer = DeadlineTimer::new();
        timer.arm(now_ms, self.seek_timeout_ms);
        self.pending = Some(PendingSeek {
            target_secs: target,
            timer,
            retried: false,
        });
    }

    /// Playback-timer callback. Reconciles the optimistic playhead with
    /// the actual clock and drives the seek retry.
    pub fn tick(&mut self, now_ms: f64) {
        let Some(mut pending) = self.pending.take() else {
            return;
        };

        if (self.media.current_time() - pending.target_secs).abs() <= SEEK_TOLERANCE_SECS {
            // Seek landed; the real clock takes over.
            self.optimistic_secs = None;
            return;
        }

        if !pending.timer.expired(now_ms) {
            self.pending = Some(pending);
            return;
        }

        if !pending.retried {
            tracing::warn!(
                target = pending.target_secs,
                "seek did not take effect, reloading source and retrying"
            );
            if let Err(e) = self.media.reload() {
                tracing::warn!("media reload failed: {e}");
            }
            if let Err(e) = self.media.seek(pending.target_secs) {
                tracing::warn!("seek retry failed: {e}");
            }
            pending.retried = true;
            pending.timer.arm(now_ms, self.seek_timeout_ms);
            self.pending = Some(pending);
            return;
        }

        // Retry exhausted: surface a non-fatal notice and fall back to
        // the real clock, wherever it is.
        tracing::warn!(target = pending.target_secs, "seek failed after retry");
        self.notice = Some(format!(
            "Could not seek to {:.1}s; the video may still be loading",
            pending.target_secs
        ));
        self.optimistic_secs = None;
    }

    pub fn play(&mut self) {
        if let Err(e) = self.media.play() {
            tracing::warn!("play request failed: {e}");
        }
    }

    pub fn pause(&mut self) {
        if let Err(e) = self.media.pause() {
            tracing::warn!("pause request failed: {e}");
        }
    }

    /// Persistent (post-retry) seek failure message, if any.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }

    /// Whether a scrub gesture is currently held.
    pub fn is_scrubbing(&self) -> bool {
        self.session.is_some()
    }

    pub fn media(&self) -> &M {
        &self.media
    }

    pub fn media_mut(&mut self) -> &mut M {
        &mut self.media
    }
}
