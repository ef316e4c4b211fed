use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image};
use tracing::debug;

use crate::error::{Error, Result};

/// Scale `(cols, rows)` so the long side maps to `target_size`.
///
/// Both sides are multiplied by `target_size / long_side` and truncated toward zero,
/// never rounded, so the short side may come out one pixel under its exact value.
pub fn calculate_resize_dimensions(
    original_cols: u32,
    original_rows: u32,
    target_size: u32,
) -> (u32, u32) {
    let long_side = original_rows.max(original_cols);
    let ratio = f64::from(target_size) / f64::from(long_side);

    let new_rows = (f64::from(original_rows) * ratio) as u32;
    let new_cols = (f64::from(original_cols) * ratio) as u32;

    (new_cols, new_rows)
}

/// Bilinear resize of an interleaved RGB8 buffer.
pub fn resize_rgb8_image(
    data: &[u8],
    original_cols: u32,
    original_rows: u32,
    target_cols: u32,
    target_rows: u32,
) -> Result<Vec<u8>> {
    if original_cols == target_cols && original_rows == target_rows {
        debug!(
            "Skipping resize: already {}x{}",
            original_cols, original_rows
        );
        return Ok(data.to_vec());
    }

    let resize_options =
        ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Bilinear));
    let mut resizer = Resizer::new();

    let src_image = Image::from_vec_u8(original_cols, original_rows, data.to_vec(), PixelType::U8x3)
        .map_err(Error::resize)?;
    let mut dst_image = Image::new(target_cols, target_rows, PixelType::U8x3);
    resizer
        .resize(&src_image, &mut dst_image, &resize_options)
        .map_err(Error::resize)?;

    Ok(dst_image.into_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_landscape_long_side_hits_target() {
        assert_eq!(calculate_resize_dimensions(300, 200, 150), (150, 100));
    }

    #[test]
    fn test_portrait_long_side_hits_target() {
        assert_eq!(calculate_resize_dimensions(200, 300, 150), (100, 150));
    }

    #[test]
    fn test_short_side_truncates() {
        // 199 * 0.25 = 49.75, truncated rather than rounded to 50
        assert_eq!(calculate_resize_dimensions(600, 199, 150), (150, 49));
    }

    #[test]
    fn test_upscale_small_image() {
        assert_eq!(calculate_resize_dimensions(50, 25, 150), (150, 75));
    }

    #[test]
    fn test_square_is_unchanged() {
        assert_eq!(calculate_resize_dimensions(150, 150, 150), (150, 150));
    }

    #[test]
    fn test_resize_uniform_color_stays_uniform() {
        let data = [10u8, 120, 240].repeat(40 * 20);
        let out = resize_rgb8_image(&data, 40, 20, 20, 10).unwrap();
        assert_eq!(out.len(), 20 * 10 * 3);
        for px in out.chunks_exact(3) {
            for (got, want) in px.iter().zip([10u8, 120, 240]) {
                assert!(got.abs_diff(want) <= 1, "{} vs {}", got, want);
            }
        }
    }

    #[test]
    fn test_resize_same_size_passthrough() {
        let data: Vec<u8> = (0..(4 * 3 * 3)).map(|v| v as u8).collect();
        let out = resize_rgb8_image(&data, 4, 3, 4, 3).unwrap();
        assert_eq!(out, data);
    }
}
