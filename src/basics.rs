//! Rounding and row-geometry helpers shared by the canvas, the rasterizer,
//! and the BMP encoder.

/// Round to the nearest integer, half away from zero.
///
/// `iround(2.5) == 3` and `iround(-2.5) == -3`, unlike `f64::floor`-based
/// rounding which would systematically darken interpolated color channels.
#[inline]
pub fn iround(v: f64) -> i32 {
    if v < 0.0 {
        (v - 0.5) as i32
    } else {
        (v + 0.5) as i32
    }
}

/// Bytes per row of a 24-bit image, padded up to a 4-byte boundary.
///
/// `width` is taken by absolute value; a negative width describes the same
/// pixel geometry. The result always satisfies
/// `0 <= row_stride(w) - 3 * |w| < 4`.
#[inline]
pub fn row_stride(width: i32) -> usize {
    (width.unsigned_abs() as usize * 3 + 3) & !3
}

// ============================================================================
// Tests
// ============================================================================
