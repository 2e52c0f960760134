//! Transform preview sampling.
//!
//! Generates CSS-like transform samples so UI clients can preview the
//! zoom motion over a whole recording without running playback.

use serde::Serialize;
use zoomline_model::{SegmentModel, ZoomEffectState};

use crate::effect::effect_at;

/// One sampled transform, ready for the display collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TransformFrame {
    pub time_secs: f64,
    pub effect: ZoomEffectState,
}

impl TransformFrame {
    /// CSS transform for a full-size source frame, paired with
    /// [`ZoomEffectState::transform_origin`].
    pub fn css_transform(&self) -> String {
        format!("scale({:.4})", self.effect.scale)
    }
}

/// Sample the effect calculator at a fixed rate across the recording.
pub fn sample_transforms(
    model: &SegmentModel,
    duration_secs: f64,
    sample_rate_fps: f64,
) -> Vec<TransformFrame> {
    let sample_rate_fps = sample_rate_fps.max(1.0);
    let step = 1.0 / sample_rate_fps;
    let duration_secs = duration_secs.max(0.0);
    let mut t = 0.0;
    let mut frames = Vec::new();

    while t <= duration_secs + f64::EPSILON {
        frames.push(TransformFrame {
            time_secs: t,
            effect: effect_at(model, t),
        });
        t += step;
    }

    frames
}
