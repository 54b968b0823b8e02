//! Uncompressed 24-bit BMP encoding.
//!
//! Output layout is the standard Windows bitmap: a 14-byte file header, a
//! 40-byte BITMAPINFOHEADER, then the raw padded BGR rows exactly as the
//! canvas stores them. BI_RGB, no compression, no color table — a straight
//! dump. All multi-byte header fields are little-endian.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use log::info;

use crate::basics::row_stride;
use crate::canvas::Canvas;
use crate::error::Result;

/// Size of the file header in bytes.
pub const FILE_HEADER_SIZE: usize = 14;
/// Size of the BITMAPINFOHEADER in bytes.
pub const INFO_HEADER_SIZE: usize = 40;
/// Offset from the start of the file to the pixel array.
pub const PIXEL_DATA_OFFSET: u32 = (FILE_HEADER_SIZE + INFO_HEADER_SIZE) as u32;

/// Build the 14-byte file header: `"BM"`, total file size, two reserved
/// words (zero), and the offset to the pixel data.
pub fn file_header(file_size: u32, data_offset: u32) -> [u8; FILE_HEADER_SIZE] {
    let mut h = [0u8; FILE_HEADER_SIZE];
    h[0] = b'B';
    h[1] = b'M';
    h[2..6].copy_from_slice(&file_size.to_le_bytes());
    // bytes 6..10 are the reserved words, left zero
    h[10..14].copy_from_slice(&data_offset.to_le_bytes());
    h
}

/// Build the 40-byte BITMAPINFOHEADER for a 24-bit BI_RGB image.
///
/// `width` and `height` keep their signs — a negative height is the
/// format's convention for top-down row order. The image data size is
/// computed from the padded stride and the absolute height; resolution and
/// palette fields stay zero.
pub fn info_header(width: i32, height: i32) -> [u8; INFO_HEADER_SIZE] {
    let image_size = row_stride(width) as u32 * height.unsigned_abs();
    let mut h = [0u8; INFO_HEADER_SIZE];
    h[0..4].copy_from_slice(&(INFO_HEADER_SIZE as u32).to_le_bytes());
    h[4..8].copy_from_slice(&width.to_le_bytes());
    h[8..12].copy_from_slice(&height.to_le_bytes());
    h[12..14].copy_from_slice(&1u16.to_le_bytes()); // planes
    h[14..16].copy_from_slice(&24u16.to_le_bytes()); // bits per pixel
    h[16..20].copy_from_slice(&0u32.to_le_bytes()); // compression (BI_RGB)
    h[20..24].copy_from_slice(&image_size.to_le_bytes());
    // resolution and palette fields (bytes 24..40) stay zero
    h
}

/// Encode the canvas as a complete BMP byte sequence.
pub fn encode(canvas: &Canvas) -> Vec<u8> {
    let file_size = PIXEL_DATA_OFFSET + canvas.data().len() as u32;
    let mut out = Vec::with_capacity(file_size as usize);
    out.extend_from_slice(&file_header(file_size, PIXEL_DATA_OFFSET));
    out.extend_from_slice(&info_header(canvas.width(), canvas.height()));
    out.extend_from_slice(canvas.data());
    out
}

/// Write the canvas to `path` as a BMP file.
///
/// Returns [`crate::Error::Io`] when the file cannot be created or a write
/// comes up short; the file is then absent or truncated, and no cleanup is
/// attempted beyond closing the handle.
pub fn save(canvas: &Canvas, path: &Path) -> Result<()> {
    let file_size = PIXEL_DATA_OFFSET + canvas.data().len() as u32;
    let mut f = File::create(path)?;
    f.write_all(&file_header(file_size, PIXEL_DATA_OFFSET))?;
    f.write_all(&info_header(canvas.width(), canvas.height()))?;
    f.write_all(canvas.data())?;
    info!(
        "saved {}x{} bitmap ({} bytes) to {}",
        canvas.width(),
        canvas.height(),
        file_size,
        path.display()
    );
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
