//! Triangle vertices and scan-order arrangement.

use crate::color::Rgb8;

/// A 2-D integer position with an attached color.
///
/// Coordinates may be negative or exceed the canvas bounds; the rasterizer
/// clips rather than rejects them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vertex {
    pub x: i32,
    pub y: i32,
    pub color: Rgb8,
}

impl Vertex {
    pub const fn new(x: i32, y: i32, color: Rgb8) -> Self {
        Self { x, y, color }
    }
}

/// Three vertices, unordered at the API boundary.
#[derive(Debug, Clone, Copy)]
pub struct Triangle([Vertex; 3]);

impl Triangle {
    pub const fn new(a: Vertex, b: Vertex, c: Vertex) -> Self {
        Self([a, b, c])
    }

    pub fn vertices(&self) -> &[Vertex; 3] {
        &self.0
    }

    /// Return the vertices ordered ascending by y.
    ///
    /// Three explicit compare-and-swaps, not a general sort — N is fixed at 3.
    /// Vertices sharing a y keep their input order; there is no x tie-break,
    /// and the span computation downstream tolerates equal-y vertices.
    pub fn arrange_vertices(&self) -> [Vertex; 3] {
        let mut v = self.0;
        if v[1].y < v[0].y {
            v.swap(0, 1);
        }
        if v[2].y < v[1].y {
            v.swap(1, 2);
        }
        if v[1].y < v[0].y {
            v.swap(0, 1);
        }
        v
    }
}

// ============================================================================
// Tests
// ============================================================================
