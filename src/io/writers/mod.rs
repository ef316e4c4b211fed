//! Encoders for squared output images. The destination extension picks the format:
//! JPEG goes through `jpeg-encoder`, everything else through the `image` crate.
pub mod jpeg;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::{ImageError, ImageFormat, RgbImage};
use tracing::debug;

use crate::error::{Error, Result};

fn is_jpeg(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("jpg") || e.eq_ignore_ascii_case("jpeg"))
        .unwrap_or(false)
}

/// Write `image` to `output`, inferring the format from its extension.
/// An existing file at `output` is overwritten.
pub fn write_image(output: &Path, image: &RgbImage, jpeg_quality: u8) -> Result<()> {
    let (cols, rows) = image.dimensions();
    if is_jpeg(output) {
        debug!("Writing JPEG (q={}) {:?}", jpeg_quality, output);
        jpeg::write_rgb_jpeg(output, cols, rows, image.as_raw(), jpeg_quality)
    } else {
        debug!("Writing {:?}", output);
        let format = ImageFormat::from_path(output).map_err(|source| Error::ImageSave {
            path: output.to_path_buf(),
            source,
        })?;
        write_with_format(output, image, format)
    }
}

fn write_with_format(output: &Path, image: &RgbImage, format: ImageFormat) -> Result<()> {
    let save_err = |source| Error::ImageSave {
        path: output.to_path_buf(),
        source,
    };
    let file = File::create(output)?;
    let mut writer = BufWriter::new(file);
    image.write_to(&mut writer, format).map_err(save_err)?;
    writer
        .flush()
        .map_err(|e| save_err(ImageError::IoError(e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn test_jpeg_extension_detection() {
        assert!(is_jpeg(Path::new("a/b/photo.jpg")));
        assert!(is_jpeg(Path::new("photo.JPEG")));
        assert!(!is_jpeg(Path::new("photo.png")));
        assert!(!is_jpeg(Path::new("photo")));
    }

    #[test]
    fn test_png_roundtrip_is_lossless() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        let img = RgbImage::from_pixel(8, 8, Rgb([12, 34, 56]));

        write_image(&path, &img, 95).unwrap();
        let back = image::open(&path).unwrap().to_rgb8();
        assert_eq!(back, img);
    }

    #[test]
    fn test_jpeg_is_decodable_with_same_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.jpg");
        let img = RgbImage::from_pixel(16, 16, Rgb([128, 64, 32]));

        write_image(&path, &img, 95).unwrap();
        let back = image::open(&path).unwrap();
        assert_eq!((back.width(), back.height()), (16, 16));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_full_disk_is_an_error() {
        let img = RgbImage::from_pixel(8, 8, Rgb([1, 2, 3]));
        assert!(matches!(
            write_with_format(Path::new("/dev/full"), &img, ImageFormat::Png),
            Err(Error::ImageSave { .. })
        ));
    }

    #[test]
    fn test_unknown_extension_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.notaformat");
        let img = RgbImage::new(2, 2);
        assert!(matches!(
            write_image(&path, &img, 95),
            Err(Error::ImageSave { .. })
        ));
    }
}
