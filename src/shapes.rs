//! Shape rasterization
//!
//! [`Shapes`] adds circle, ellipse and triangle drawing to every
//! [`PixelSurface`]. Each shape comes in an outline and a filled variant.
//! The two variants use different algorithms and are pixel-exact by
//! contract, so they are not interchangeable:
//!
//! | Shape    | Outline                        | Filled                              |
//! |----------|--------------------------------|-------------------------------------|
//! | Circle   | integer midpoint, 8-way        | integer spans, contains the outline |
//! | Ellipse  | two-region integer midpoint    | `a * sqrt(1 - y²/b²)` per row, truncated |
//! | Triangle | three lines in vertex order    | scanline interpolation              |
//!
//! ## Example
//!
//! ```
//! use sh1107::{Color, FrameBuffer, Orientation, PixelSurface, Shapes};
//!
//! let mut fb = FrameBuffer::new(Orientation::Landscape);
//! fb.circle(64, 32, 20, Color::On, false);
//! fb.ellipse(64, 32, 30, 10, Color::On, true);
//! fb.triangle(0, 0, 10, 0, 0, 10, Color::On, true);
//!
//! assert_eq!(fb.get_pixel(84, 32), Some(Color::On));
//! ```

use crate::color::Color;
use crate::framebuffer::PixelSurface;

/// Shape drawing on top of the primitive surface
///
/// Blanket-implemented for every [`PixelSurface`]; bring it into scope to use it.
///
/// Coordinates and radii may lie anywhere in `i32`. Rasterization runs in
/// wider integers and only the rows and spans that touch the surface are
/// drawn.
pub trait Shapes: PixelSurface {
    /// Circle of radius `r` centered on `(cx, cy)`
    ///
    /// A negative radius draws nothing; radius 0 is a single pixel.
    fn circle(&mut self, cx: i32, cy: i32, r: i32, color: Color, filled: bool) {
        if r < 0 {
            return;
        }
        let (cx, cy, r) = (i64::from(cx), i64::from(cy), i64::from(r));
        if misses_surface(self, cx, cy, r, r) {
            return;
        }
        if filled {
            fill_circle(self, cx, cy, r, color);
        } else {
            outline_circle(self, cx, cy, r, color);
        }
    }

    /// Axis-aligned ellipse centered on `(cx, cy)`
    ///
    /// `a` is the horizontal and `b` the vertical semi-axis. A negative
    /// semi-axis draws nothing; `b == 0` draws a single horizontal span.
    #[allow(clippy::many_single_char_names)]
    fn ellipse(&mut self, cx: i32, cy: i32, a: i32, b: i32, color: Color, filled: bool) {
        if a < 0 || b < 0 {
            return;
        }
        let (cx, cy) = (i64::from(cx), i64::from(cy));
        let (a, b) = (i64::from(a), i64::from(b));
        if misses_surface(self, cx, cy, a, b) {
            return;
        }
        if b == 0 {
            span(self, cx - a, cx + a, cy, color);
        } else if filled {
            fill_ellipse(self, cx, cy, a, b, color);
        } else {
            outline_ellipse(self, cx, cy, a, b, color);
        }
    }

    /// Triangle with vertices `(x0, y0)`, `(x1, y1)`, `(x2, y2)`
    #[allow(clippy::too_many_arguments)]
    fn triangle(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        color: Color,
        filled: bool,
    ) {
        if filled {
            let vertices =
                [(x0, y0), (x1, y1), (x2, y2)].map(|(x, y)| (i64::from(x), i64::from(y)));
            fill_triangle(self, vertices, color);
        } else {
            self.line(x0, y0, x1, y1, color);
            self.line(x1, y1, x2, y2, color);
            self.line(x2, y2, x0, y0, color);
        }
    }
}

impl<T: PixelSurface + ?Sized> Shapes for T {}

/// Whether the box `cx ± rx, cy ± ry` lies entirely off the surface
fn misses_surface<S: PixelSurface + ?Sized>(s: &S, cx: i64, cy: i64, rx: i64, ry: i64) -> bool {
    cx + rx < 0
        || cy + ry < 0
        || cx - rx >= i64::from(s.width())
        || cy - ry >= i64::from(s.height())
}

fn plot<S: PixelSurface + ?Sized>(s: &mut S, x: i64, y: i64, color: Color) {
    if let (Ok(x), Ok(y)) = (i32::try_from(x), i32::try_from(y)) {
        s.set_pixel(x, y, color);
    }
}

/// Row `y` from `left` to `right` inclusive, clipped to the surface
fn span<S: PixelSurface + ?Sized>(s: &mut S, left: i64, right: i64, y: i64, color: Color) {
    if y < 0 || y >= i64::from(s.height()) {
        return;
    }
    let left = left.max(0);
    let right = right.min(i64::from(s.width()) - 1);
    if left <= right {
        s.hline(left as i32, y as i32, (right - left + 1) as i32, color);
    }
}

fn outline_circle<S: PixelSurface + ?Sized>(s: &mut S, cx: i64, cy: i64, r: i64, color: Color) {
    // Every outline pixel lies strictly outside radius r - 2, so a surface
    // whose farthest corner is within it gets nothing.
    let far_x = cx.abs().max((i64::from(s.width()) - 1 - cx).abs());
    let far_y = cy.abs().max((i64::from(s.height()) - 1 - cy).abs());
    let inner = i128::from(r - 2);
    if r >= 2 && i128::from(far_x).pow(2) + i128::from(far_y).pow(2) <= inner * inner {
        return;
    }

    let (mut x, mut y, mut err) = (r, 0, 0);
    while x >= y {
        plot(s, cx + x, cy + y, color);
        plot(s, cx + y, cy + x, color);
        plot(s, cx - y, cy + x, color);
        plot(s, cx - x, cy + y, color);
        plot(s, cx - x, cy - y, color);
        plot(s, cx - y, cy - x, color);
        plot(s, cx + y, cy - x, color);
        plot(s, cx + x, cy - y, color);

        if err <= 0 {
            y += 1;
            err += 2 * y + 1;
        }
        if err > 0 {
            x -= 1;
            err -= 2 * x + 1;
        }
    }
}

fn fill_circle<S: PixelSurface + ?Sized>(s: &mut S, cx: i64, cy: i64, r: i64, color: Color) {
    let height = i64::from(s.height());
    let (mut x, mut y, mut err) = (r, 0, 0);

    while y <= r {
        // Both rows only move further away from here on
        if cy - y < 0 && cy + y >= height {
            break;
        }
        span(s, cx - x, cx + x, cy + y, color);
        if y != 0 {
            span(s, cx - x, cx + x, cy - y, color);
        }
        err += 1 + 2 * y;
        y += 1;
        if 2 * err > 2 * x + 1 {
            x -= 1;
            err += 1 - 2 * x;
        }
    }
}

#[allow(clippy::many_single_char_names)]
fn outline_ellipse<S: PixelSurface + ?Sized>(
    s: &mut S,
    cx: i64,
    cy: i64,
    a: i64,
    b: i64,
    color: Color,
) {
    let plot4 = |s: &mut S, x: i128, y: i128| {
        let (x, y) = (x as i64, y as i64);
        plot(s, cx + x, cy + y, color);
        plot(s, cx - x, cy + y, color);
        plot(s, cx + x, cy - y, color);
        plot(s, cx - x, cy - y, color);
    };

    // Semi-axes below 2^31 keep every term below 2^127
    let a2 = i128::from(a) * i128::from(a);
    let b2 = i128::from(b) * i128::from(b);
    let mut x: i128 = 0;
    let mut y = i128::from(b);
    let mut dx: i128 = 0;
    let mut dy = 2 * a2 * y;

    // Region 1: slope magnitude below 1, step x every iteration
    let mut d = b2 - a2 * y + a2 / 4;
    while dx < dy {
        plot4(s, x, y);
        x += 1;
        dx += 2 * b2;
        if d < 0 {
            d += dx + b2;
        } else {
            y -= 1;
            dy -= 2 * a2;
            d += dx - dy + b2;
        }
    }

    // Region 2: step y every iteration. The decision value is evaluated at
    // (x + 1/2, y - 1) and kept scaled by 4 so it stays integral.
    let mut d4 = b2 * (2 * x + 1) * (2 * x + 1) + 4 * a2 * (y - 1) * (y - 1) - 4 * a2 * b2;
    while y >= 0 {
        plot4(s, x, y);
        y -= 1;
        dy -= 2 * a2;
        if d4 > 0 {
            d4 += 4 * (a2 - dy);
        } else {
            x += 1;
            dx += 2 * b2;
            d4 += 4 * (dx - dy + a2);
        }
    }
}

#[allow(clippy::many_single_char_names)]
fn fill_ellipse<S: PixelSurface + ?Sized>(
    s: &mut S,
    cx: i64,
    cy: i64,
    a: i64,
    b: i64,
    color: Color,
) {
    let b2 = b as f64 * b as f64;
    let first = (-b).max(-cy);
    let last = b.min(i64::from(s.height()) - 1 - cy);
    for y in first..=last {
        let yy = y as f64 * y as f64;
        // Truncation toward zero is the fixed rounding policy for row widths.
        let x = (a as f64 * libm::sqrt(1.0 - yy / b2)) as i64;
        span(s, cx - x, cx + x, cy + y, color);
    }
}

fn fill_triangle<S: PixelSurface + ?Sized>(s: &mut S, mut v: [(i64, i64); 3], color: Color) {
    if v[0].1 > v[1].1 {
        v.swap(0, 1);
    }
    if v[1].1 > v[2].1 {
        v.swap(1, 2);
    }
    if v[0].1 > v[1].1 {
        v.swap(0, 1);
    }
    let [(x0, y0), (x1, y1), (x2, y2)] = v;

    if y0 == y2 {
        let left = x0.min(x1).min(x2);
        let right = x0.max(x1).max(x2);
        span(s, left, right, y0, color);
        return;
    }

    // Divisors are positive after sorting, so `div_euclid` floors. The
    // quotient lies between xa and xb, so it fits back into i64.
    let lerp = |xa: i64, ya: i64, xb: i64, yb: i64, y: i64| -> i64 {
        let step = (i128::from(xb - xa) * i128::from(y - ya)).div_euclid(i128::from(yb - ya));
        xa + step as i64
    };

    let first = y0.max(0);
    let last = y2.min(i64::from(s.height()) - 1);
    for y in first..=last {
        let long = lerp(x0, y0, x2, y2, y);
        let short = if y <= y1 {
            if y1 == y0 { x1 } else { lerp(x0, y0, x1, y1, y) }
        } else {
            lerp(x1, y1, x2, y2, y)
        };
        let (left, right) = if short > long { (long, short) } else { (short, long) };
        span(s, left, right, y, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Orientation;
    use crate::framebuffer::FrameBuffer;
    use alloc::vec::Vec;

    fn lit(fb: &FrameBuffer) -> Vec<(i32, i32)> {
        let mut pixels = Vec::new();
        for y in 0..fb.height() {
            for x in 0..fb.width() {
                if fb.get_pixel(x, y) == Some(Color::On) {
                    pixels.push((x, y));
                }
            }
        }
        pixels
    }

    fn row_span(fb: &FrameBuffer, y: i32) -> Option<(i32, i32)> {
        let xs: Vec<i32> = (0..fb.width())
            .filter(|x| fb.get_pixel(*x, y) == Some(Color::On))
            .collect();
        Some((*xs.first()?, *xs.last()?))
    }

    #[test]
    fn test_circle_outline_distance() {
        let mut fb = FrameBuffer::new(Orientation::Landscape);
        let (cx, cy, r) = (64, 32, 10);
        fb.circle(cx, cy, r, Color::On, false);

        let pixels = lit(&fb);
        assert!(!pixels.is_empty());
        for (x, y) in pixels {
            let d2 = (x - cx).pow(2) + (y - cy).pow(2);
            assert!(d2 <= r * r && d2 > (r - 2) * (r - 2), "({x},{y}) d2={d2}");
        }
        assert_eq!(fb.get_pixel(cx + r, cy), Some(Color::On));
        assert_eq!(fb.get_pixel(cx, cy - r), Some(Color::On));
    }

    #[test]
    fn test_circle_outline_eight_way_symmetry() {
        let mut fb = FrameBuffer::new(Orientation::Landscape);
        let (cx, cy) = (64, 32);
        fb.circle(cx, cy, 13, Color::On, false);

        for (x, y) in lit(&fb) {
            let (dx, dy) = (x - cx, y - cy);
            for (mx, my) in [
                (dx, dy),
                (-dx, dy),
                (dx, -dy),
                (-dx, -dy),
                (dy, dx),
                (-dy, dx),
                (dy, -dx),
                (-dy, -dx),
            ] {
                assert_eq!(fb.get_pixel(cx + mx, cy + my), Some(Color::On));
            }
        }
    }

    #[test]
    fn test_filled_circle_contains_outline() {
        for r in 0..30 {
            let mut outline = FrameBuffer::new(Orientation::Landscape);
            let mut filled = FrameBuffer::new(Orientation::Landscape);
            outline.circle(64, 32, r, Color::On, false);
            filled.circle(64, 32, r, Color::On, true);

            for (x, y) in lit(&outline) {
                assert_eq!(filled.get_pixel(x, y), Some(Color::On), "r={r} ({x},{y})");
            }
        }
    }

    #[test]
    fn test_circle_radius_zero_and_negative() {
        let mut fb = FrameBuffer::new(Orientation::Landscape);
        fb.circle(5, 5, 0, Color::On, false);
        assert_eq!(lit(&fb), [(5, 5)]);

        fb.fill(Color::Off);
        fb.circle(5, 5, 0, Color::On, true);
        assert_eq!(lit(&fb), [(5, 5)]);

        fb.fill(Color::Off);
        fb.circle(5, 5, -3, Color::On, true);
        fb.circle(5, 5, -3, Color::On, false);
        assert!(lit(&fb).is_empty());
    }

    #[test]
    fn test_circle_clipped_at_edge() {
        let mut fb = FrameBuffer::new(Orientation::Landscape);
        fb.circle(0, 0, 5, Color::On, true);
        assert_eq!(row_span(&fb, 0), Some((0, 5)));
        assert_eq!(fb.get_pixel(0, 5), Some(Color::On));
    }

    #[test]
    fn test_filled_ellipse_row_widths() {
        let mut fb = FrameBuffer::new(Orientation::Landscape);
        fb.ellipse(32, 32, 10, 5, Color::On, true);

        assert_eq!(row_span(&fb, 32), Some((22, 42)));
        assert_eq!(row_span(&fb, 27), Some((32, 32)));
        assert_eq!(row_span(&fb, 37), Some((32, 32)));
        assert_eq!(row_span(&fb, 28), Some((26, 38)));
        assert_eq!(row_span(&fb, 29), Some((24, 40)));
        assert_eq!(row_span(&fb, 26), None);
        assert_eq!(row_span(&fb, 38), None);
    }

    #[test]
    fn test_ellipse_outline_extremes_and_symmetry() {
        let mut fb = FrameBuffer::new(Orientation::Landscape);
        let (cx, cy) = (64, 32);
        fb.ellipse(cx, cy, 10, 5, Color::On, false);

        for (x, y) in [(cx + 10, cy), (cx - 10, cy), (cx, cy + 5), (cx, cy - 5)] {
            assert_eq!(fb.get_pixel(x, y), Some(Color::On));
        }
        assert_eq!(fb.get_pixel(cx, cy), Some(Color::Off));
        assert_eq!(row_span(&fb, cy - 6), None);

        for (x, y) in lit(&fb) {
            let (dx, dy) = (x - cx, y - cy);
            assert!(dx.abs() <= 10 && dy.abs() <= 5);
            assert_eq!(fb.get_pixel(cx - dx, cy - dy), Some(Color::On));
            assert_eq!(fb.get_pixel(cx - dx, cy + dy), Some(Color::On));
        }
    }

    #[test]
    fn test_ellipse_outline_with_equal_axes_is_closed() {
        let mut fb = FrameBuffer::new(Orientation::Landscape);
        fb.ellipse(20, 20, 5, 5, Color::On, false);

        for y in 15..=25 {
            assert!(row_span(&fb, y).is_some(), "row {y} empty");
        }
        assert_eq!(row_span(&fb, 20), Some((15, 25)));
    }

    #[test]
    fn test_flat_ellipse_is_a_span() {
        let mut fb = FrameBuffer::new(Orientation::Landscape);
        fb.ellipse(20, 20, 4, 0, Color::On, false);
        assert_eq!(row_span(&fb, 20), Some((16, 24)));
        assert_eq!(lit(&fb).len(), 9);

        fb.fill(Color::Off);
        fb.ellipse(20, 20, 4, 0, Color::On, true);
        assert_eq!(lit(&fb).len(), 9);
    }

    #[test]
    fn test_filled_right_triangle() {
        let mut fb = FrameBuffer::new(Orientation::Landscape);
        fb.triangle(0, 0, 4, 0, 0, 4, Color::On, true);

        for y in 0..=4 {
            for x in 0..=4 {
                let expected = if x + y <= 4 { Color::On } else { Color::Off };
                assert_eq!(fb.get_pixel(x, y), Some(expected), "({x},{y})");
            }
        }
        assert_eq!(fb.get_pixel(4, 4), Some(Color::Off));
    }

    #[test]
    fn test_filled_triangle_vertex_order_irrelevant() {
        let mut a = FrameBuffer::new(Orientation::Landscape);
        let mut b = FrameBuffer::new(Orientation::Landscape);
        a.triangle(10, 5, 40, 20, 5, 50, Color::On, true);
        b.triangle(5, 50, 10, 5, 40, 20, Color::On, true);
        assert_eq!(a, b);
    }

    #[test]
    fn test_filled_triangle_flat_bottom_and_degenerate() {
        let mut fb = FrameBuffer::new(Orientation::Landscape);
        fb.triangle(10, 0, 0, 10, 20, 10, Color::On, true);
        assert_eq!(row_span(&fb, 0), Some((10, 10)));
        assert_eq!(row_span(&fb, 10), Some((0, 20)));

        fb.fill(Color::Off);
        fb.triangle(7, 3, 1, 3, 12, 3, Color::On, true);
        assert_eq!(lit(&fb).len(), 12);
        assert_eq!(row_span(&fb, 3), Some((1, 12)));
    }

    #[test]
    fn test_filled_triangle_floors_negative_slopes() {
        let mut fb = FrameBuffer::new(Orientation::Landscape);
        // Long edge (10,0)-(5,4): at y=1, 10 + (-5*1) floor/ 4 = 10 - 2 = 8
        fb.triangle(10, 0, 20, 2, 5, 4, Color::On, true);
        assert_eq!(row_span(&fb, 1).map(|(l, _)| l), Some(8));
    }

    #[test]
    fn test_triangle_outline_passes_through_vertices() {
        let mut fb = FrameBuffer::new(Orientation::Landscape);
        fb.triangle(2, 2, 30, 8, 12, 40, Color::On, false);
        for (x, y) in [(2, 2), (30, 8), (12, 40)] {
            assert_eq!(fb.get_pixel(x, y), Some(Color::On));
        }
        // Interior stays dark
        assert_eq!(fb.get_pixel(15, 15), Some(Color::Off));
    }

    #[test]
    fn test_filled_triangle_with_distant_vertices() {
        let mut fb = FrameBuffer::new(Orientation::Landscape);
        fb.triangle(0, 0, 60_000, 10, 10, 60_000, Color::On, true);
        // Row 0 is the apex; every later row spans past both edges
        assert_eq!(row_span(&fb, 0), Some((0, 0)));
        assert_eq!(lit(&fb).len(), 1 + 63 * 128);
    }

    #[test]
    fn test_filled_triangle_spanning_full_i32_range() {
        let mut fb = FrameBuffer::new(Orientation::Landscape);
        fb.triangle(-5, i32::MIN, 200, i32::MAX, 60, 10, Color::On, true);
        assert_eq!(fb.get_pixel(60, 10), Some(Color::On));
        assert_eq!(fb.get_pixel(80, 10), Some(Color::On));
        assert_eq!(fb.get_pixel(59, 10), Some(Color::Off));
    }

    #[test]
    fn test_huge_circle_covers_surface() {
        let mut fb = FrameBuffer::new(Orientation::Landscape);
        fb.circle(64, 32, 1 << 30, Color::On, true);
        assert_eq!(lit(&fb).len(), 128 * 64);

        // The outline passes far outside every corner
        fb.fill(Color::Off);
        fb.circle(64, 32, 1 << 30, Color::On, false);
        assert!(lit(&fb).is_empty());
    }

    #[test]
    fn test_circles_at_extreme_centers_draw_nothing() {
        let mut fb = FrameBuffer::new(Orientation::Landscape);
        fb.circle(i32::MAX, i32::MIN, i32::MAX, Color::On, true);
        fb.circle(i32::MIN, 10, 5, Color::On, false);
        fb.circle(i32::MAX, i32::MAX, 5, Color::On, true);
        assert!(lit(&fb).is_empty());
    }

    #[test]
    fn test_extreme_ellipses() {
        let mut fb = FrameBuffer::new(Orientation::Landscape);
        fb.ellipse(64, 32, i32::MAX, i32::MAX, Color::On, true);
        assert_eq!(lit(&fb).len(), 128 * 64);

        fb.fill(Color::Off);
        fb.ellipse(0, 5, i32::MAX, 0, Color::On, false);
        assert_eq!(row_span(&fb, 5), Some((0, 127)));
        assert_eq!(lit(&fb).len(), 128);

        fb.fill(Color::Off);
        fb.ellipse(i32::MAX, 0, 3, 3, Color::On, false);
        fb.ellipse(i32::MIN, i32::MIN, 3, 3, Color::On, true);
        assert!(lit(&fb).is_empty());
    }
}
