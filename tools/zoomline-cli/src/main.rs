//! Zoomline CLI — Command-line interface for zoom timeline processing.
//!
//! Usage:
//!   zoomline generate <CLICKS>   Derive zoom segments from a click feed
//!   zoomline preview <MODEL>     Sample the zoom transform over time
//!   zoomline publish <MODEL>     Bundle segments and areas for rendering
//!   zoomline validate <MODEL>    Check a segment model's invariants

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "zoomline",
    about = "Zoom timeline processing for recorded demo sessions",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Derive zoom segments from a recorded click feed (JSONL)
    Generate {
        /// Path to the click feed
        clicks: PathBuf,

        /// Output path for the segment model (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Total zoom duration per click (seconds)
        #[arg(long)]
        zoom_duration: Option<f64>,

        /// Default focus-area extent (percent of frame)
        #[arg(long)]
        area_extent: Option<f64>,
    },

    /// Sample the zoom transform across the recording
    Preview {
        /// Path to a segment model file
        model: PathBuf,

        /// Recording duration (seconds)
        #[arg(short, long)]
        duration: f64,

        /// Samples per second
        #[arg(long, default_value = "30.0")]
        fps: f64,

        /// Output path for the sampled frames (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Bundle segments and areas into a publish payload
    Publish {
        /// Path to a segment model file
        model: PathBuf,

        /// Recording duration (seconds)
        #[arg(short, long)]
        duration: f64,

        /// Output path for the bundle (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check a segment model's invariants
    Validate {
        /// Path to a segment model file
        model: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    zoomline_common::logging::init_logging(&zoomline_common::config::LoggingConfig {
        level: log_level.to_string(),
        json: false,
        file: None,
    });

    match cli.command {
        Commands::Generate {
            clicks,
            output,
            zoom_duration,
            area_extent,
        } => commands::generate::run(clicks, output, zoom_duration, area_extent),
        Commands::Preview {
            model,
            duration,
            fps,
            output,
        } => commands::preview::run(model, duration, fps, output),
        Commands::Publish {
            model,
            duration,
            output,
        } => commands::publish::run(model, duration, output),
        Commands::Validate { model } => commands::validate::run(model),
    }
}
