//! Scanline triangle rasterizer with Gouraud shading.
//!
//! The triangle is scanned top to bottom between its lowest and highest y.
//! The long edge (top vertex to bottom vertex) always supplies the right
//! boundary candidate; the two short edges supply the left one, switching
//! from the upper to the lower short edge at the middle vertex. Each
//! boundary carries an interpolated (x, r, g, b) tuple, and the span between
//! the boundaries is filled with a per-unit-x color ramp.

use log::trace;

use crate::basics::iround;
use crate::canvas::Canvas;
use crate::color::Rgb8;
use crate::triangle::{Triangle, Vertex};

// ============================================================================
// EdgeCalc — per-edge interpolation state
// ============================================================================

/// Per-unit-y steps of (x, r, g, b) along one triangle edge, anchored at the
/// edge's upper vertex.
///
/// When both endpoints share a scanline the steps stay zero and the boundary
/// evaluates to the anchor vertex itself — a guarded branch, never a
/// division by zero.
#[derive(Debug, Clone, Copy)]
struct EdgeCalc {
    origin: Vertex,
    dx: f64,
    dr: f64,
    dg: f64,
    db: f64,
}

impl EdgeCalc {
    fn new(top: Vertex, bottom: Vertex) -> Self {
        let mut e = Self {
            origin: top,
            dx: 0.0,
            dr: 0.0,
            dg: 0.0,
            db: 0.0,
        };
        if top.y != bottom.y {
            let dy = (bottom.y - top.y) as f64;
            e.dx = (bottom.x - top.x) as f64 / dy;
            e.dr = (bottom.color.r as f64 - top.color.r as f64) / dy;
            e.dg = (bottom.color.g as f64 - top.color.g as f64) / dy;
            e.db = (bottom.color.b as f64 - top.color.b as f64) / dy;
        }
        e
    }

    /// Evaluate the boundary at scanline `y`, rounding half away from zero.
    fn calc(&self, y: i32) -> Boundary {
        let t = (y - self.origin.y) as f64;
        Boundary {
            x: iround(self.origin.x as f64 + t * self.dx),
            r: iround(self.origin.color.r as f64 + t * self.dr),
            g: iround(self.origin.color.g as f64 + t * self.dg),
            b: iround(self.origin.color.b as f64 + t * self.db),
        }
    }
}

/// One evaluated span boundary: position and color at a given scanline.
#[derive(Debug, Clone, Copy)]
struct Boundary {
    x: i32,
    r: i32,
    g: i32,
    b: i32,
}

// ============================================================================
// Triangle fill
// ============================================================================

/// Fill `triangle` into `canvas` with Gouraud-shaded spans.
///
/// The scan range and every span are clamped to the canvas rectangle, so a
/// triangle partially or entirely outside produces exactly the visible
/// pixels and nothing else. Degenerate triangles (coincident vertices, zero
/// height or width) reduce to single-pixel or empty spans.
pub fn render_triangle(canvas: &mut Canvas, triangle: &Triangle) {
    let [v0, v1, v2] = triangle.arrange_vertices();

    let upper_left = EdgeCalc::new(v0, v1);
    let long_edge = EdgeCalc::new(v0, v2);
    let lower_left = EdgeCalc::new(v1, v2);

    let min_y = v0.y.max(0);
    let max_y = v2.y.min(canvas.height_abs() as i32 - 1);
    let max_x_bound = canvas.width_abs() as i32 - 1;
    trace!(
        "triangle y {}..={} clamped to {}..={}",
        v0.y,
        v2.y,
        min_y,
        max_y
    );

    for y in min_y..=max_y {
        let mut left = if y < v1.y {
            upper_left.calc(y)
        } else {
            lower_left.calc(y)
        };
        let mut right = long_edge.calc(y);
        // Rounding near shared-y vertices can invert the boundary order.
        if left.x > right.x {
            std::mem::swap(&mut left, &mut right);
        }

        let mut sr = 0.0;
        let mut sg = 0.0;
        let mut sb = 0.0;
        if left.x != right.x {
            let dx = (right.x - left.x) as f64;
            sr = (right.r - left.r) as f64 / dx;
            sg = (right.g - left.g) as f64 / dx;
            sb = (right.b - left.b) as f64 / dx;
        }

        let min_x = left.x.max(0);
        let max_x = right.x.min(max_x_bound);
        for x in min_x..=max_x {
            let t = (x - left.x) as f64;
            let c = Rgb8::new(
                iround(left.r as f64 + t * sr) as u8,
                iround(left.g as f64 + t * sg) as u8,
                iround(left.b as f64 + t * sb) as u8,
            );
            // The span is clamped to the canvas, so the write is in bounds.
            unsafe { canvas.set_pixel_unchecked(x as usize, y as usize, c) };
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgb8 = Rgb8::new(255, 0, 0);
    const BLUE: Rgb8 = Rgb8::new(0, 0, 255);

    fn white_canvas(w: i32, h: i32) -> Canvas {
        let mut c = Canvas::new(w, h).unwrap();
        c.clear(Rgb8::WHITE);
        c
    }

    fn count_non_white(c: &Canvas) -> usize {
        let mut n = 0;
        for y in 0..c.height_abs() {
            for x in 0..c.width_abs() {
                if c.pixel(x, y) != Rgb8::WHITE {
                    n += 1;
                }
            }
        }
        n
    }

    #[test]
    fn test_coincident_vertices_write_single_pixel() {
        let mut canvas = white_canvas(10, 10);
        let v = Vertex::new(4, 6, Rgb8::new(12, 34, 56));
        render_triangle(&mut canvas, &Triangle::new(v, v, v));
        assert_eq!(count_non_white(&canvas), 1);
        assert_eq!(canvas.pixel(4, 6), v.color);
    }

    #[test]
    fn test_coincident_vertices_off_canvas_write_nothing() {
        let mut canvas = white_canvas(10, 10);
        let v = Vertex::new(-3, -3, RED);
        render_triangle(&mut canvas, &Triangle::new(v, v, v));
        assert_eq!(count_non_white(&canvas), 0);
    }

    #[test]
    fn test_common_y_fills_one_row_with_exact_endpoints() {
        let mut canvas = white_canvas(10, 10);
        let tri = Triangle::new(
            Vertex::new(2, 5, RED),
            Vertex::new(7, 5, BLUE),
            Vertex::new(4, 5, Rgb8::new(10, 20, 30)),
        );
        render_triangle(&mut canvas, &tri);

        // Only row 5 is touched, from x=2 to x=7.
        for x in 2..=7 {
            assert_ne!(canvas.pixel(x, 5), Rgb8::WHITE, "x {}", x);
        }
        assert_eq!(count_non_white(&canvas), 6);
        // Endpoint pixels carry their vertex colors with no rounding drift.
        assert_eq!(canvas.pixel(2, 5), RED);
        assert_eq!(canvas.pixel(7, 5), BLUE);
    }

    #[test]
    fn test_triangle_entirely_outside_leaves_canvas_unchanged() {
        let mut canvas = white_canvas(10, 10);
        let before = canvas.data().to_vec();

        // Below, above, left of, and right of the canvas.
        let far = [
            [(20, 20), (30, 25), (25, 30)],
            [(0, -20), (5, -15), (-3, -10)],
            [(-20, 0), (-15, 5), (-10, 3)],
            [(12, 0), (15, 5), (20, 3)],
        ];
        for tri in far {
            let [a, b, c] = tri.map(|(x, y)| Vertex::new(x, y, RED));
            render_triangle(&mut canvas, &Triangle::new(a, b, c));
        }
        assert_eq!(canvas.data(), &before[..]);
    }

    #[test]
    fn test_solid_color_triangle_scenario() {
        // Canvas 10x10 cleared white, right triangle (1,1)-(1,8)-(8,1)
        // filled red: the right-angle corner is red, the far corner stays
        // white.
        let mut canvas = white_canvas(10, 10);
        let tri = Triangle::new(
            Vertex::new(1, 1, RED),
            Vertex::new(1, 8, RED),
            Vertex::new(8, 1, RED),
        );
        render_triangle(&mut canvas, &tri);
        assert_eq!(canvas.pixel(1, 1), RED);
        assert_eq!(canvas.pixel(9, 9), Rgb8::WHITE);
        // The hypotenuse endpoints are inside the fill too.
        assert_eq!(canvas.pixel(8, 1), RED);
        assert_eq!(canvas.pixel(1, 8), RED);
    }

    #[test]
    fn test_vertex_colors_exact_at_vertices() {
        let mut canvas = white_canvas(20, 20);
        let tri = Triangle::new(
            Vertex::new(2, 2, RED),
            Vertex::new(17, 3, Rgb8::new(0, 255, 0)),
            Vertex::new(9, 17, BLUE),
        );
        render_triangle(&mut canvas, &tri);
        assert_eq!(canvas.pixel(2, 2), RED);
        assert_eq!(canvas.pixel(9, 17), BLUE);
    }

    #[test]
    fn test_midpoint_interpolation_rounds_half_away_from_zero() {
        // Long edge from black at y=0 to white at y=10: the exact midpoint
        // channel value is 127.5, which must round to 128, not floor to 127.
        let mut canvas = white_canvas(12, 12);
        let tri = Triangle::new(
            Vertex::new(0, 0, Rgb8::BLACK),
            Vertex::new(5, 5, Rgb8::new(10, 20, 30)),
            Vertex::new(0, 10, Rgb8::WHITE),
        );
        render_triangle(&mut canvas, &tri);
        assert_eq!(canvas.pixel(0, 5), Rgb8::new(128, 128, 128));
    }

    #[test]
    fn test_partially_clipped_triangle_fills_visible_part() {
        // Spans reaching left of x=0 are clamped, and the colors written at
        // x=0 are the interpolated values for x=0, not the boundary color.
        let mut canvas = white_canvas(8, 8);
        let tri = Triangle::new(
            Vertex::new(-5, 0, RED),
            Vertex::new(4, 0, RED),
            Vertex::new(-5, 7, RED),
        );
        render_triangle(&mut canvas, &tri);
        assert_eq!(canvas.pixel(0, 0), RED);
        assert_eq!(canvas.pixel(4, 0), RED);
        assert_eq!(canvas.pixel(7, 7), Rgb8::WHITE);
    }

    #[test]
    fn test_horizontal_gradient_endpoints() {
        // Single row from red at x=0 to blue at x=5: both ends exact,
        // middle strictly between.
        let mut canvas = white_canvas(6, 1);
        let tri = Triangle::new(
            Vertex::new(0, 0, RED),
            Vertex::new(5, 0, BLUE),
            Vertex::new(3, 0, Rgb8::new(128, 128, 128)),
        );
        render_triangle(&mut canvas, &tri);
        assert_eq!(canvas.pixel(0, 0), RED);
        assert_eq!(canvas.pixel(5, 0), BLUE);
        let mid = canvas.pixel(2, 0);
        assert!(mid.r < 255 && mid.b < 255);
    }

    #[test]
    fn test_degenerate_vertical_line_triangle() {
        let mut canvas = white_canvas(10, 10);
        let tri = Triangle::new(
            Vertex::new(4, 2, RED),
            Vertex::new(4, 5, RED),
            Vertex::new(4, 8, RED),
        );
        render_triangle(&mut canvas, &tri);
        for y in 2..=8 {
            assert_eq!(canvas.pixel(4, y), RED, "y {}", y);
        }
        assert_eq!(count_non_white(&canvas), 7);
    }

    #[test]
    fn test_zero_sized_canvas_is_a_no_op() {
        let mut canvas = Canvas::new(0, 0).unwrap();
        let tri = Triangle::new(
            Vertex::new(0, 0, RED),
            Vertex::new(5, 0, RED),
            Vertex::new(0, 5, RED),
        );
        render_triangle(&mut canvas, &tri);
        assert!(canvas.data().is_empty());
    }
}
