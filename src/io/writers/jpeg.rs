use jpeg_encoder::{ColorType, Encoder};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{Error, Result};

pub fn write_rgb_jpeg(
    output: &Path,
    cols: u32,
    rows: u32,
    rgb_data: &[u8],
    quality: u8,
) -> Result<()> {
    let (width, height) = match (u16::try_from(cols), u16::try_from(rows)) {
        (Ok(w), Ok(h)) => (w, h),
        _ => {
            return Err(Error::UnsupportedDimensions {
                width: cols,
                height: rows,
                reason: "JPEG sides are limited to 65535 pixels".to_string(),
            });
        }
    };

    let file = File::create(output)?;
    let mut writer = BufWriter::new(file);
    let encoder = Encoder::new(&mut writer, quality);
    encoder
        .encode(rgb_data, width, height, ColorType::Rgb)
        .map_err(|source| Error::JpegEncode {
            path: output.to_path_buf(),
            source,
        })?;
    // The encoder leaves the tail in the buffer; drop would discard a failed write.
    writer.flush()?;
    Ok(())
}
