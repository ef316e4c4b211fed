use std::path::Path;

use image::{ImageReader, RgbImage};

use crate::error::{Error, Result};

/// Decode the image at `path` as 3-channel colour.
///
/// The format is sniffed from the file contents, falling back to the extension.
/// Grey and alpha inputs are converted to RGB.
pub fn load_color_image(path: &Path) -> Result<RgbImage> {
    let load_err = |source| Error::ImageLoad {
        path: path.to_path_buf(),
        source,
    };

    let reader = ImageReader::open(path)
        .map_err(|e| load_err(image::ImageError::IoError(e)))?
        .with_guessed_format()
        .map_err(|e| load_err(image::ImageError::IoError(e)))?;
    let decoded = reader.decode().map_err(load_err)?;

    Ok(decoded.to_rgb8())
}
