pub mod generate;
pub mod preview;
pub mod publish;
pub mod validate;

use std::path::{Path, PathBuf};

use anyhow::Context;
use zoomline_model::SegmentModel;

/// Load a segment model from a JSON file.
pub fn load_model(path: &Path) -> anyhow::Result<SegmentModel> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read model file: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse model file: {}", path.display()))
}

/// Write a payload to `output`, or stdout when no path was given.
pub fn write_output(output: Option<PathBuf>, payload: &str) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            std::fs::write(&path, payload)
                .with_context(|| format!("Failed to write: {}", path.display()))?;
            println!("Wrote {}", path.display());
        }
        None => println!("{payload}"),
    }
    Ok(())
}
