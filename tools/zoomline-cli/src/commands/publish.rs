//! Bundle segments and areas into a publish payload.

use std::path::PathBuf;

pub fn run(model_path: PathBuf, duration: f64, output: Option<PathBuf>) -> anyhow::Result<()> {
    let model = super::load_model(&model_path)?;
    let bundle = model.publish_bundle(duration);

    println!(
        "Publishing {} segment(s), {} area(s), {:.2}s of video",
        bundle.segments.len(),
        bundle.areas.len(),
        bundle.duration_secs
    );

    let json = serde_json::to_string_pretty(&bundle)?;
    super::write_output(output, &json)
}
