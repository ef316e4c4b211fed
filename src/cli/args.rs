use clap::Parser;
use std::path::PathBuf;

use squarepad::CollisionPolicy;

/// Every option is optional so that values from `--config` are only overridden by
/// flags or environment variables that were actually given.
#[derive(Parser, Debug)]
#[command(
    name = "squarepad",
    version,
    about = "Resize a labeled image dataset to black-padded squares"
)]
pub struct CliArgs {
    /// Input folder (relative to the working directory) whose subfolders are class labels
    /// [default: images]
    #[arg(short, long, env = "SQUAREPAD_INPUT")]
    pub input: Option<PathBuf>,

    /// Output folder (relative to the working directory)
    /// [default: "formatted images"]
    #[arg(short, long, env = "SQUAREPAD_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Side length of the square output in pixels (positive integer) [default: 150]
    #[arg(short, long, env = "SQUAREPAD_SIZE")]
    pub size: Option<String>,

    /// How to name outputs when two files in a class share a file name
    #[arg(long, value_enum)]
    pub collision: Option<CollisionPolicy>,

    /// Also process files placed directly inside a class folder
    #[arg(long, default_value_t = false)]
    pub include_shallow: bool,

    /// JPEG quality for .jpg/.jpeg outputs (1-100) [default: 95]
    #[arg(long)]
    pub jpeg_quality: Option<u8>,

    /// JSON file with processing params; flags take precedence over its values
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write the run report as JSON to this path
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
