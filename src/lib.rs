//! Scanline triangle rasterizer with Gouraud shading and BMP output.
//!
//! Draws triangles whose three vertices carry independent RGB colors onto an
//! in-memory 24-bit BGR canvas, linearly interpolating the vertex colors
//! across the interior, and serializes the canvas as an uncompressed,
//! row-padded Windows bitmap (BI_RGB).
//!
//! ## Pipeline
//!
//! 1. The caller builds a [`Triangle`] from three [`Vertex`] values.
//! 2. [`render_triangle`] fills it into a [`Canvas`], scanline by scanline.
//! 3. [`bmp::encode`] or [`bmp::save`] turns the canvas into file bytes.
//!
//! ```
//! use rgb_triangle::{render_triangle, Canvas, Rgb8, Triangle, Vertex};
//!
//! let mut canvas = Canvas::new(64, 64)?;
//! canvas.clear(Rgb8::WHITE);
//! let tri = Triangle::new(
//!     Vertex::new(5, 5, Rgb8::new(255, 0, 0)),
//!     Vertex::new(60, 10, Rgb8::new(0, 255, 0)),
//!     Vertex::new(30, 60, Rgb8::new(0, 0, 255)),
//! );
//! render_triangle(&mut canvas, &tri);
//! let bytes = rgb_triangle::bmp::encode(&canvas);
//! assert_eq!(&bytes[0..2], b"BM");
//! # Ok::<(), rgb_triangle::Error>(())
//! ```
//!
//! Everything is synchronous and single-threaded; a `&mut Canvas` is the
//! whole concurrency story.

pub mod basics;
pub mod bmp;
pub mod canvas;
pub mod color;
pub mod error;
pub mod rasterizer_scanline;
pub mod triangle;

pub use canvas::Canvas;
pub use color::Rgb8;
pub use error::{Error, Result};
pub use rasterizer_scanline::render_triangle;
pub use triangle::{Triangle, Vertex};
