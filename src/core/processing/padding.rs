use tracing::debug;

use crate::types::Padding;

/// Split the gap between the scaled content and the square canvas into borders.
///
/// The leading side (top/left) takes the floor of half the gap and the trailing side
/// takes the remainder, so `top <= bottom` and `left <= right`.
pub fn compute_padding(cols: u32, rows: u32, target_size: u32) -> Padding {
    let d_w = target_size.saturating_sub(cols);
    let d_h = target_size.saturating_sub(rows);

    let top = d_h / 2;
    let left = d_w / 2;

    Padding {
        top,
        bottom: d_h - top,
        left,
        right: d_w - left,
    }
}

/// Surround an interleaved pixel buffer with zero-valued (black) borders.
pub fn add_padding(data: &[u8], cols: u32, rows: u32, channels: usize, pad: Padding) -> Vec<u8> {
    let cols = cols as usize;
    let rows = rows as usize;
    let out_cols = cols + pad.left as usize + pad.right as usize;
    let out_rows = rows + pad.top as usize + pad.bottom as usize;

    debug!(
        "Adding padding: cols={}, rows={}, top={}, bottom={}, left={}, right={}",
        cols, rows, pad.top, pad.bottom, pad.left, pad.right
    );

    let mut padded = vec![0u8; out_cols * out_rows * channels];
    let row_len = cols * channels;
    // Copy per row using slice copies to minimize per-pixel indexing
    for row in 0..rows {
        let src_offset = row * row_len;
        let dst_offset = ((row + pad.top as usize) * out_cols + pad.left as usize) * channels;
        padded[dst_offset..dst_offset + row_len]
            .copy_from_slice(&data[src_offset..src_offset + row_len]);
    }
    padded
}
