//! High-level, ergonomic library API: square a whole labeled dataset (`run`, `run_in`),
//! square a single file (`resize_square_and_save`), or square an in-memory image
//! (`square_image`). Prefer these entrypoints over the low-level processing modules.
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::core::params::{DEFAULT_JPEG_QUALITY, ProcessingParams};
use crate::core::processing::square;
use crate::error::{Error, Result};
use crate::io::walker::{destination_for, ensure_output_dir};
use crate::io::{collect_class_images, list_class_folders, load_color_image, write_image};
use crate::types::CollisionPolicy;

pub use crate::core::processing::square::SquaredImage;

/// Dataset run report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchReport {
    pub classes: usize,
    pub processed: usize,
    pub skipped_shallow: usize,
    /// Destinations written more than once in this run (last write won)
    pub overwritten: usize,
}

/// Square an in-memory RGB image to `target_size x target_size` (no disk I/O)
pub fn square_image(source: &image::RgbImage, target_size: u32) -> Result<SquaredImage> {
    square::square_image(source, target_size)
}

/// Decode `source`, square it to `target_size`, and write it to `destination`.
///
/// The output format follows the destination extension; an existing file is replaced.
pub fn resize_square_and_save(source: &Path, target_size: u32, destination: &Path) -> Result<()> {
    resize_square_and_save_with_quality(source, target_size, destination, DEFAULT_JPEG_QUALITY)
}

/// [`resize_square_and_save`] with an explicit JPEG quality (1-100) for `.jpg` outputs
pub fn resize_square_and_save_with_quality(
    source: &Path,
    target_size: u32,
    destination: &Path,
    jpeg_quality: u8,
) -> Result<()> {
    let original = load_color_image(source)?;
    let squared = square::square_image(&original, target_size)?;
    write_image(destination, &squared.image, jpeg_quality)
}

/// Square the dataset under `<cwd>/<input_folder>` into `<cwd>/<output_folder>`.
pub fn run(params: &ProcessingParams) -> Result<BatchReport> {
    let base = std::env::current_dir()?;
    run_in(&base, params)
}

/// Square the dataset under `<base>/<input_folder>` into `<base>/<output_folder>`.
///
/// Each class folder gets a flat output folder of the same name. The first failing
/// image aborts the run; outputs already written are left in place.
pub fn run_in(base: &Path, params: &ProcessingParams) -> Result<BatchReport> {
    params.validate()?;

    let input_root = base.join(&params.input_folder);
    if !input_root.is_dir() {
        return Err(Error::NotFound {
            folder: params.input_folder.display().to_string(),
        });
    }
    let output_root = base.join(&params.output_folder);

    info!("Starting dataset processing from directory: {:?}", input_root);
    info!("Output directory: {:?}", output_root);
    info!(
        "Target size: {}x{}, collision policy: {}",
        params.target_size, params.target_size, params.collision
    );

    let mut report = BatchReport::default();

    for class in list_class_folders(&input_root)? {
        let output_class_dir = output_root.join(&class.label);
        ensure_output_dir(&output_class_dir)?;
        info!("Processing class '{}' -> {:?}", class.label, output_class_dir);

        let found = collect_class_images(&class.path, params.include_shallow)?;
        if found.skipped_shallow > 0 {
            warn!(
                "Class '{}': skipped {} file(s) placed directly in the class folder",
                class.label, found.skipped_shallow
            );
        }
        report.skipped_shallow += found.skipped_shallow;

        let mut written: HashSet<PathBuf> = HashSet::new();
        for image in &found.images {
            let destination =
                destination_for(&output_class_dir, &class.path, image, params.collision)?;

            if !written.insert(destination.clone()) {
                match params.collision {
                    // Prefixed names can still clash (`a_b/x` vs `a/b_x`); never drop a file.
                    CollisionPolicy::Reject | CollisionPolicy::Prefix => {
                        return Err(Error::DestinationCollision { path: destination });
                    }
                    CollisionPolicy::Overwrite => {
                        warn!("Overwriting {:?} with {:?}", destination, image);
                        report.overwritten += 1;
                    }
                }
            }

            debug!("Processing: {:?} -> {:?}", image, destination);
            resize_square_and_save_with_quality(
                image,
                params.target_size,
                &destination,
                params.jpeg_quality,
            )?;
            report.processed += 1;
        }

        report.classes += 1;
    }

    info!("Dataset processing complete!");
    info!("Classes: {}", report.classes);
    info!("Processed: {}", report.processed);
    info!("Skipped (shallow): {}", report.skipped_shallow);
    info!("Overwritten: {}", report.overwritten);

    Ok(report)
}
