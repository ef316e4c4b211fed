//! The square transform: scale the long side to the target, then letterbox the short
//! side with black so every output is exactly `target_size x target_size`.
use image::RgbImage;
use tracing::debug;

use crate::core::processing::padding::{add_padding, compute_padding};
use crate::core::processing::resize::{calculate_resize_dimensions, resize_rgb8_image};
use crate::error::{Error, Result};
use crate::types::Padding;

const RGB_CHANNELS: usize = 3;

/// Result of squaring an image in memory
#[derive(Debug, Clone)]
pub struct SquaredImage {
    pub image: RgbImage,
    /// Width of the resized content before padding
    pub scaled_width: u32,
    /// Height of the resized content before padding
    pub scaled_height: u32,
    pub padding: Padding,
}

pub fn square_image(source: &RgbImage, target_size: u32) -> Result<SquaredImage> {
    if target_size == 0 {
        return Err(Error::ZeroSize { size: target_size });
    }

    let (cols, rows) = source.dimensions();
    if cols == 0 || rows == 0 {
        return Err(Error::UnsupportedDimensions {
            width: cols,
            height: rows,
            reason: "image has no pixels".to_string(),
        });
    }

    let (new_cols, new_rows) = calculate_resize_dimensions(cols, rows, target_size);
    if new_cols == 0 || new_rows == 0 {
        return Err(Error::DegenerateDimensions {
            width: cols,
            height: rows,
            target_size,
        });
    }

    debug!(
        "Original size: {}x{}, New size: {}x{}",
        cols, rows, new_cols, new_rows
    );

    let resized = resize_rgb8_image(source.as_raw(), cols, rows, new_cols, new_rows)?;
    let padding = compute_padding(new_cols, new_rows, target_size);
    let padded = add_padding(&resized, new_cols, new_rows, RGB_CHANNELS, padding);

    let out_cols = new_cols + padding.left + padding.right;
    let out_rows = new_rows + padding.top + padding.bottom;
    let image = RgbImage::from_raw(out_cols, out_rows, padded).ok_or_else(|| {
        Error::UnsupportedDimensions {
            width: out_cols,
            height: out_rows,
            reason: "padded buffer does not match dimensions".to_string(),
        }
    })?;

    Ok(SquaredImage {
        image,
        scaled_width: new_cols,
        scaled_height: new_rows,
        padding,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn solid(width: u32, height: u32, color: [u8; 3]) -> RgbImage {
        RgbImage::from_pixel(width, height, Rgb(color))
    }

    #[test]
    fn test_output_is_exact_square() {
        for (w, h) in [(300, 200), (200, 300), (37, 911), (150, 150), (20, 10), (599, 600)] {
            let squared = square_image(&solid(w, h, [200, 200, 200]), 150).unwrap();
            assert_eq!(squared.image.dimensions(), (150, 150), "input {}x{}", w, h);
        }
    }

    #[test]
    fn test_landscape_gets_top_and_bottom_bars() {
        let squared = square_image(&solid(300, 200, [255, 255, 255]), 150).unwrap();
        assert_eq!((squared.scaled_width, squared.scaled_height), (150, 100));
        assert_eq!(squared.padding.top, 25);
        assert_eq!(squared.padding.bottom, 25);

        let img = &squared.image;
        assert_eq!(img.get_pixel(75, 0), &Rgb([0, 0, 0]));
        assert_eq!(img.get_pixel(75, 24), &Rgb([0, 0, 0]));
        assert_eq!(img.get_pixel(75, 125), &Rgb([0, 0, 0]));
        assert_eq!(img.get_pixel(75, 149), &Rgb([0, 0, 0]));
        assert!(img.get_pixel(75, 75).0.iter().all(|&c| c >= 250));
        assert!(img.get_pixel(0, 25).0.iter().all(|&c| c >= 250));
    }

    #[test]
    fn test_portrait_gets_side_bars() {
        let squared = square_image(&solid(199, 600, [255, 255, 255]), 150).unwrap();
        assert_eq!((squared.scaled_width, squared.scaled_height), (49, 150));
        assert_eq!(squared.padding.left, 50);
        assert_eq!(squared.padding.right, 51);
        assert_eq!(squared.image.get_pixel(49, 75), &Rgb([0, 0, 0]));
        assert_eq!(squared.image.get_pixel(99, 75), &Rgb([0, 0, 0]));
        assert!(squared.image.get_pixel(50, 75).0.iter().all(|&c| c >= 250));
    }

    #[test]
    fn test_aspect_ratio_within_one_pixel() {
        let (w, h) = (640u32, 427u32);
        let squared = square_image(&solid(w, h, [1, 2, 3]), 150).unwrap();
        let exact_h = f64::from(h) * 150.0 / f64::from(w);
        assert_eq!(squared.scaled_width, 150);
        assert!((f64::from(squared.scaled_height) - exact_h).abs() < 1.0);
    }

    #[test]
    fn test_long_side_rounding_short_still_square() {
        // 281 * (150 / 281) evaluates to just under 150 in f64
        let squared = square_image(&solid(281, 140, [255, 255, 255]), 150).unwrap();
        assert_eq!((squared.scaled_width, squared.scaled_height), (149, 74));
        assert_eq!(
            squared.padding,
            Padding {
                top: 38,
                bottom: 38,
                left: 0,
                right: 1
            }
        );
        assert_eq!(squared.image.dimensions(), (150, 150));
        assert_eq!(squared.image.get_pixel(149, 75), &Rgb([0, 0, 0]));
    }

    #[test]
    fn test_already_square_is_identity() {
        let mut img = RgbImage::new(150, 150);
        for (x, y, px) in img.enumerate_pixels_mut() {
            *px = Rgb([x as u8, y as u8, (x ^ y) as u8]);
        }
        let squared = square_image(&img, 150).unwrap();
        assert!(squared.padding.is_empty());
        assert_eq!(squared.image, img);
    }

    #[test]
    fn test_degenerate_strip_is_rejected() {
        let err = square_image(&solid(1000, 1, [9, 9, 9]), 150).unwrap_err();
        assert!(matches!(err, Error::DegenerateDimensions { .. }));
    }
}
