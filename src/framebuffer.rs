//! Logical pixel buffer and the primitive drawing surface
//!
//! [`FrameBuffer`] stores pixels in the controller's page format: the buffer
//! is `height / 8` pages of `width` column bytes, and within a byte bit 0 is
//! the topmost of its 8 rows (vertical, LSB first).
//!
//! [`PixelSurface`] is the primitive contract every shape in
//! [`Shapes`](crate::shapes::Shapes) is built from. All of its operations
//! clip silently: coordinates outside `[0, width) x [0, height)` are ignored.
//!
//! ## Example
//!
//! ```
//! use sh1107::{Color, FrameBuffer, Orientation, PixelSurface};
//!
//! let mut fb = FrameBuffer::new(Orientation::Landscape);
//! fb.set_pixel(3, 10, Color::On);
//!
//! // Page 1 (rows 8..16), column 3, bit 2
//! assert_eq!(fb.as_bytes()[128 + 3], 0b0000_0100);
//!
//! // Out of range is a no-op, never an error
//! fb.set_pixel(-1, 500, Color::On);
//! ```

use crate::color::Color;
use crate::config::{BUFFER_SIZE, Orientation};

/// Primitive pixel operations on a monochrome surface
///
/// Implementors provide single-pixel access and `fill`; the line and
/// rectangle primitives have clipping default implementations built on
/// [`set_pixel`](Self::set_pixel).
pub trait PixelSurface {
    /// Width in pixels
    fn width(&self) -> i32;

    /// Height in pixels
    fn height(&self) -> i32;

    /// Set one pixel; ignored when out of range
    fn set_pixel(&mut self, x: i32, y: i32, color: Color);

    /// Read one pixel; `None` when out of range
    fn get_pixel(&self, x: i32, y: i32) -> Option<Color>;

    /// Set every pixel to `color`
    fn fill(&mut self, color: Color);

    /// Horizontal line of `len` pixels starting at `(x, y)` going right
    fn hline(&mut self, x: i32, y: i32, len: i32, color: Color) {
        if len <= 0 || y < 0 || y >= self.height() {
            return;
        }
        let start = x.max(0);
        let end = x.saturating_add(len).min(self.width());
        for px in start..end {
            self.set_pixel(px, y, color);
        }
    }

    /// Vertical line of `len` pixels starting at `(x, y)` going down
    fn vline(&mut self, x: i32, y: i32, len: i32, color: Color) {
        if len <= 0 || x < 0 || x >= self.width() {
            return;
        }
        let start = y.max(0);
        let end = y.saturating_add(len).min(self.height());
        for py in start..end {
            self.set_pixel(x, py, color);
        }
    }

    /// Filled `w` x `h` rectangle with top-left corner `(x, y)`
    #[allow(clippy::many_single_char_names)]
    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) {
        if w <= 0 || h <= 0 {
            return;
        }
        let start = y.max(0);
        let end = y.saturating_add(h).min(self.height());
        for py in start..end {
            self.hline(x, py, w, color);
        }
    }

    /// One pixel wide `w` x `h` rectangle outline with top-left corner `(x, y)`
    #[allow(clippy::many_single_char_names)]
    fn rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) {
        if w <= 0 || h <= 0 {
            return;
        }
        self.hline(x, y, w, color);
        self.hline(x, y.saturating_add(h - 1), w, color);
        self.vline(x, y, h, color);
        self.vline(x.saturating_add(w - 1), y, h, color);
    }

    /// Line from `(x0, y0)` to `(x1, y1)`, both endpoints included
    fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        // Bresenham, all octants. Steps stay between the endpoints, so only
        // the error terms need the wider type.
        let (x0, y0, x1, y1) = (i64::from(x0), i64::from(y0), i64::from(x1), i64::from(y1));
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut x, mut y) = (x0, y0);

        loop {
            self.set_pixel(x as i32, y as i32, color);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }
}

/// Bit-packed monochrome pixel buffer in page format
///
/// Always [`BUFFER_SIZE`] bytes: 128x64 in landscape, 64x128 in portrait.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    data: [u8; BUFFER_SIZE],
}

impl FrameBuffer {
    /// Create a cleared buffer sized for `orientation`
    pub fn new(orientation: Orientation) -> Self {
        Self {
            width: orientation.width(),
            height: orientation.height(),
            data: [0; BUFFER_SIZE],
        }
    }

    /// Raw page-format bytes
    pub fn as_bytes(&self) -> &[u8; BUFFER_SIZE] {
        &self.data
    }

    /// Raw page-format bytes, mutable
    ///
    /// Writing a byte sets all 8 rows of that column in its page.
    ///
    /// ```
    /// use sh1107::{Color, FrameBuffer, Orientation, PixelSurface};
    ///
    /// let mut fb = FrameBuffer::new(Orientation::Landscape);
    /// fb.as_bytes_mut()[0] = 0xFF;
    /// assert_eq!(fb.get_pixel(0, 7), Some(Color::On));
    /// ```
    pub fn as_bytes_mut(&mut self) -> &mut [u8; BUFFER_SIZE] {
        &mut self.data
    }

    /// Column bytes of one 8-row page
    ///
    /// Returns an empty slice for pages past the bottom of the buffer.
    pub fn page(&self, page: usize) -> &[u8] {
        let width = self.width as usize;
        self.data
            .get(page * width..(page + 1) * width)
            .unwrap_or(&[])
    }

    /// Byte index and bit mask of an in-range pixel
    fn locate(&self, x: i32, y: i32) -> Option<(usize, u8)> {
        if x < 0 || y < 0 || x >= i32::from(self.width) || y >= i32::from(self.height) {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        Some(((y / 8) * self.width as usize + x, 1 << (y % 8)))
    }
}

impl PixelSurface for FrameBuffer {
    fn width(&self) -> i32 {
        i32::from(self.width)
    }

    fn height(&self) -> i32 {
        i32::from(self.height)
    }

    fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if let Some((index, bit)) = self.locate(x, y) {
            match color {
                Color::On => self.data[index] |= bit,
                Color::Off => self.data[index] &= !bit,
            }
        }
    }

    fn get_pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.locate(x, y)
            .map(|(index, bit)| Color::from(self.data[index] & bit != 0))
    }

    fn fill(&mut self, color: Color) {
        self.data.fill(color.fill_byte());
    }
}
