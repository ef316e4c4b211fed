use std::fs;
use std::path::Path;

use tracing::info;
use tracing_subscriber::EnvFilter;

use squarepad::{BatchReport, ProcessingParams};

use super::args::CliArgs;
use super::errors::AppError;

fn parse_size(size: &str) -> Result<u32, AppError> {
    let parsed_size = size.trim().parse::<u32>().map_err(|_| AppError::InvalidSize {
        size: size.to_string(),
    })?;

    if parsed_size == 0 {
        return Err(AppError::ZeroSize { size: parsed_size });
    }

    Ok(parsed_size)
}

/// Start from the config file (or defaults) and apply every flag that was given.
fn resolve_params(args: &CliArgs) -> Result<ProcessingParams, AppError> {
    let mut params = match &args.config {
        Some(path) => {
            if !path.is_file() {
                return Err(AppError::MissingConfig { path: path.clone() });
            }
            info!("Loading params from {:?}", path);
            ProcessingParams::from_json_file(path)?
        }
        None => ProcessingParams::default(),
    };

    if let Some(input) = &args.input {
        params.input_folder = input.clone();
    }
    if let Some(output) = &args.output {
        params.output_folder = output.clone();
    }
    if let Some(size) = &args.size {
        params.target_size = parse_size(size)?;
    }
    if let Some(collision) = args.collision {
        params.collision = collision;
    }
    if args.include_shallow {
        params.include_shallow = true;
    }
    if let Some(quality) = args.jpeg_quality {
        params.jpeg_quality = quality;
    }

    params.validate()?;
    Ok(params)
}

fn write_report(path: &Path, report: &BatchReport) -> Result<(), AppError> {
    let json = serde_json::to_string_pretty(report).map_err(|e| AppError::Report {
        path: path.to_path_buf(),
        source: e.into(),
    })?;
    fs::write(path, json).map_err(|source| AppError::Report {
        path: path.to_path_buf(),
        source,
    })
}

/// User-facing line for a failed run: the `Display` form, not `Debug`.
pub fn error_message(err: &(dyn std::error::Error + 'static)) -> String {
    format!("Error: {}", err)
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    let params = resolve_params(&args)?;
    let report = squarepad::run(&params).map_err(AppError::from)?;

    if let Some(path) = &args.report {
        write_report(path, &report)?;
        info!("Report written to {:?}", path);
    }

    Ok(())
}
