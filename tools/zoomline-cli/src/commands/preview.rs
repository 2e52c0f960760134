//! Sample the zoom transform across a recording.

use std::path::PathBuf;

use zoomline_editor::preview::sample_transforms;

pub fn run(
    model_path: PathBuf,
    duration: f64,
    fps: f64,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let model = super::load_model(&model_path)?;
    println!(
        "Sampling {} segment(s) over {:.2}s at {} fps",
        model.len(),
        duration,
        fps
    );

    let frames = sample_transforms(&model, duration, fps);
    let active = frames.iter().filter(|f| f.effect.active).count();
    println!(
        "  {} frame(s), {} with an active zoom",
        frames.len(),
        active
    );

    let json = serde_json::to_string_pretty(&frames)?;
    super::write_output(output, &json)
}
