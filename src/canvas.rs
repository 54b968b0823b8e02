//! Canvas — an owned 24-bit BGR pixel buffer with rows padded to a 4-byte
//! boundary.
//!
//! Dimensions are signed: a negative height conventionally signals bottom-up
//! row order in the output file, but the in-memory pixel math is identical,
//! so all buffer geometry uses absolute values. The buffer is exactly
//! `row_stride(width) * |height|` bytes for the lifetime of the canvas and
//! is owned exclusively — the rasterizer mutates it in place, the encoder
//! reads it, nothing aliases it.

use log::debug;

use crate::basics::row_stride;
use crate::bmp::PIXEL_DATA_OFFSET;
use crate::color::Rgb8;
use crate::error::{Error, Result};

pub struct Canvas {
    width: i32,
    height: i32,
    stride: usize,
    data: Vec<u8>,
}

impl Canvas {
    /// Allocate a zeroed canvas of `width` × `height` pixels.
    ///
    /// Returns [`Error::InvalidArgument`] when the buffer size overflows
    /// `usize` or the 32-bit size fields of the bitmap headers, and
    /// [`Error::Allocation`] when the memory cannot be obtained.
    pub fn new(width: i32, height: i32) -> Result<Self> {
        let stride = row_stride(width);
        let size = stride
            .checked_mul(height.unsigned_abs() as usize)
            .ok_or(Error::InvalidArgument("canvas buffer size overflows usize"))?;
        if size > (u32::MAX as usize) - PIXEL_DATA_OFFSET as usize {
            return Err(Error::InvalidArgument(
                "canvas too large for the bitmap's 32-bit size fields",
            ));
        }

        let mut data = Vec::new();
        data.try_reserve_exact(size)
            .map_err(|source| Error::Allocation {
                requested: size,
                source,
            })?;
        data.resize(size, 0);

        debug!(
            "allocated {}x{} canvas, stride {} ({} bytes)",
            width, height, stride, size
        );
        Ok(Self {
            width,
            height,
            stride,
            data,
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn width_abs(&self) -> u32 {
        self.width.unsigned_abs()
    }

    pub fn height_abs(&self) -> u32 {
        self.height.unsigned_abs()
    }

    /// Bytes per row, including end-of-row padding.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// The raw padded pixel rows (B,G,R per pixel), as the encoder dumps them.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Fill the whole canvas with one color.
    ///
    /// Writes row 0 pixel by pixel, then duplicates it into every remaining
    /// row with a bulk copy.
    pub fn clear(&mut self, c: Rgb8) {
        for x in 0..self.width_abs() as usize {
            let off = x * 3;
            self.data[off] = c.b;
            self.data[off + 1] = c.g;
            self.data[off + 2] = c.r;
        }
        let stride = self.stride;
        for y in 1..self.height_abs() as usize {
            self.data.copy_within(0..stride, y * stride);
        }
    }

    /// Write one pixel, ignoring out-of-range coordinates.
    ///
    /// Clipping instead of failing is deliberate: partial visibility of a
    /// shape is expected behavior, not an error.
    pub fn set_pixel(&mut self, x: i32, y: i32, c: Rgb8) {
        if x < 0 || y < 0 {
            return;
        }
        if (x as u32) >= self.width_abs() || (y as u32) >= self.height_abs() {
            return;
        }
        unsafe { self.set_pixel_unchecked(x as usize, y as usize, c) }
    }

    /// Write one pixel without bounds checking.
    ///
    /// Fast path for the rasterizer's span fill, which clamps its ranges
    /// before entering the inner loop.
    ///
    /// # Safety
    /// `x` must be in `[0, |width|)` and `y` in `[0, |height|)`.
    #[inline]
    pub unsafe fn set_pixel_unchecked(&mut self, x: usize, y: usize, c: Rgb8) {
        let off = y * self.stride + x * 3;
        *self.data.get_unchecked_mut(off) = c.b;
        *self.data.get_unchecked_mut(off + 1) = c.g;
        *self.data.get_unchecked_mut(off + 2) = c.r;
    }

    /// Read one pixel.
    ///
    /// Panics when `x` or `y` is out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Rgb8 {
        assert!(
            x < self.width_abs() && y < self.height_abs(),
            "pixel ({}, {}) out of bounds ({}x{})",
            x,
            y,
            self.width_abs(),
            self.height_abs()
        );
        let off = y as usize * self.stride + x as usize * 3;
        Rgb8::new(self.data[off + 2], self.data[off + 1], self.data[off])
    }
}

// ============================================================================
// Tests
// ============================================================================
