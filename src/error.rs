//! Crate error taxonomy.
//!
//! Three failure classes exist: caller-supplied dimensions the buffer or the
//! file format cannot represent, pixel buffer allocation failure, and output
//! file I/O failure. Off-canvas pixel coordinates are never an error — the
//! rasterizer clips them silently, since partial visibility of a triangle is
//! normal behavior.

use std::collections::TryReserveError;

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Caller passed dimensions that the pixel buffer or the bitmap headers
    /// cannot represent.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// The pixel buffer could not be allocated. The caller may retry with
    /// smaller dimensions.
    #[error("allocation of {requested} bytes for the pixel buffer failed")]
    Allocation {
        requested: usize,
        #[source]
        source: TryReserveError,
    },

    /// Opening or writing the output file failed. The file may be absent or
    /// truncated; no cleanup is attempted beyond closing the handle.
    #[error("bitmap I/O failed")]
    Io(#[from] std::io::Error),
}
