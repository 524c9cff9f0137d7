//! Graphics support via embedded-graphics
//!
//! This module implements the [`DrawTarget`] and [`OriginDimensions`] traits
//! from embedded-graphics-core for [`Display`] and [`FrameBuffer`], so text,
//! images and the embedded-graphics primitives can be drawn into the logical
//! buffer alongside the built-in [`Shapes`](crate::shapes::Shapes).
//!
//! Drawing is infallible and clips to the logical size. Nothing reaches the
//! panel until [`Display::show`] is called.
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_graphics::{
//!     mono_font::{ascii::FONT_6X10, MonoTextStyle},
//!     prelude::*,
//!     primitives::{PrimitiveStyle, Rectangle},
//!     text::Text,
//! };
//! use sh1107::{Builder, Color, Display};
//! # use core::convert::Infallible;
//! # use embedded_hal::delay::DelayNs;
//! # use embedded_hal::i2c::{ErrorType, I2c, Operation};
//! # struct MockI2c;
//! # impl ErrorType for MockI2c { type Error = Infallible; }
//! # impl I2c for MockI2c {
//! #     fn transaction(
//! #         &mut self,
//! #         _address: u8,
//! #         _operations: &mut [Operation<'_>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let mut delay = MockDelay;
//! # let config = match Builder::new().build() {
//! #     Ok(config) => config,
//! #     Err(_) => return,
//! # };
//! let mut display = match Display::from_i2c(MockI2c, config, &mut delay) {
//!     Ok(display) => display,
//!     Err(_) => return,
//! };
//!
//! let _ = Rectangle::new(Point::new(0, 0), Size::new(128, 12))
//!     .into_styled(PrimitiveStyle::with_stroke(Color::On, 1))
//!     .draw(&mut display);
//!
//! let _ = Text::new(
//!     "Hello, SH1107!",
//!     Point::new(4, 30),
//!     MonoTextStyle::new(&FONT_6X10, Color::On),
//! )
//! .draw(&mut display);
//!
//! let _ = display.show(&mut delay);
//! ```

use core::convert::Infallible;
use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Point, Size},
    prelude::Pixel,
};

use crate::color::Color;
use crate::display::Display;
use crate::framebuffer::{FrameBuffer, PixelSurface};
use crate::interface::DisplayInterface;

fn surface_size<S: PixelSurface + ?Sized>(surface: &S) -> Size {
    Size::new(surface.width() as u32, surface.height() as u32)
}

fn draw_pixels<S, Iter>(surface: &mut S, pixels: Iter)
where
    S: PixelSurface + ?Sized,
    Iter: IntoIterator<Item = Pixel<Color>>,
{
    for Pixel(Point { x, y }, color) in pixels {
        surface.set_pixel(x, y, color);
    }
}

impl DrawTarget for FrameBuffer {
    type Color = Color;
    type Error = Infallible;

    fn draw_iter<Iter>(&mut self, pixels: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = Pixel<Self::Color>>,
    {
        draw_pixels(self, pixels);
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill(color);
        Ok(())
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        surface_size(self)
    }
}

impl<I> DrawTarget for Display<I>
where
    I: DisplayInterface,
{
    type Color = Color;
    type Error = Infallible;

    fn draw_iter<Iter>(&mut self, pixels: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = Pixel<Self::Color>>,
    {
        draw_pixels(self, pixels);
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill(color);
        Ok(())
    }
}

impl<I> OriginDimensions for Display<I>
where
    I: DisplayInterface,
{
    fn size(&self) -> Size {
        surface_size(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Builder, Orientation};
    use embedded_graphics::{
        mono_font::{MonoTextStyle, ascii::FONT_6X10},
        prelude::*,
        primitives::{Line, PrimitiveStyle, Rectangle},
        text::Text,
    };
    use embedded_hal::delay::DelayNs;

    #[derive(Debug)]
    struct MockInterface;

    impl DisplayInterface for MockInterface {
        type Error = Infallible;

        fn send_command(&mut self, _command: u8) -> Result<(), Self::Error> {
            Ok(())
        }

        fn send_data<D: DelayNs>(
            &mut self,
            _data: &[u8],
            _delay: &mut D,
        ) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    struct MockDelay;

    impl DelayNs for MockDelay {
        fn delay_ns(&mut self, _ns: u32) {}
    }

    fn test_display(orientation: Orientation) -> Display<MockInterface> {
        let config = Builder::new().orientation(orientation).build().unwrap();
        Display::new(MockInterface, config, &mut MockDelay).unwrap()
    }

    fn lit_pixels<S: PixelSurface>(surface: &S) -> impl Iterator<Item = (i32, i32)> + '_ {
        (0..surface.height()).flat_map(move |y| {
            (0..surface.width())
                .filter(move |&x| surface.get_pixel(x, y) == Some(Color::On))
                .map(move |x| (x, y))
        })
    }

    #[test]
    fn test_size_follows_orientation() {
        assert_eq!(test_display(Orientation::Landscape).size(), Size::new(128, 64));
        assert_eq!(test_display(Orientation::Portrait).size(), Size::new(64, 128));
        assert_eq!(
            FrameBuffer::new(Orientation::Portrait).size(),
            Size::new(64, 128)
        );
    }

    #[test]
    fn test_filled_rectangle() {
        let mut fb = FrameBuffer::new(Orientation::Landscape);
        Rectangle::new(Point::new(10, 20), Size::new(5, 4))
            .into_styled(PrimitiveStyle::with_fill(Color::On))
            .draw(&mut fb)
            .unwrap();

        assert_eq!(lit_pixels(&fb).count(), 20);
        assert_eq!(fb.get_pixel(14, 23), Some(Color::On));
        assert_eq!(fb.get_pixel(15, 23), Some(Color::Off));
    }

    #[test]
    fn test_drawing_off_screen_is_clipped() {
        let mut display = test_display(Orientation::Landscape);
        Line::new(Point::new(-20, 5), Point::new(200, 5))
            .into_styled(PrimitiveStyle::with_stroke(Color::On, 1))
            .draw(&mut display)
            .unwrap();

        assert_eq!(lit_pixels(&display).count(), 128);
    }

    #[test]
    fn test_clear() {
        let mut display = test_display(Orientation::Landscape);
        display.clear(Color::On).unwrap();
        assert!(display.buffer().as_bytes().iter().all(|b| *b == 0xFF));

        display.clear(Color::Off).unwrap();
        assert_eq!(lit_pixels(&display).count(), 0);
    }

    #[test]
    fn test_text_lands_in_glyph_cells() {
        let mut display = test_display(Orientation::Landscape);
        Text::new(
            "Hi",
            Point::new(0, 10),
            MonoTextStyle::new(&FONT_6X10, Color::On),
        )
        .draw(&mut display)
        .unwrap();

        let mut count = 0;
        for (x, y) in lit_pixels(&display) {
            assert!(x < 12 && y < 16, "stray pixel at ({x},{y})");
            count += 1;
        }
        assert!(count > 0);
    }

    #[test]
    fn test_graphics_and_shapes_share_buffer() {
        use crate::shapes::Shapes;

        let mut display = test_display(Orientation::Portrait);
        display.circle(32, 64, 5, Color::On, true);
        Pixel(Point::new(0, 0), Color::On).draw(&mut display).unwrap();

        assert_eq!(display.get_pixel(32, 64), Some(Color::On));
        assert_eq!(display.get_pixel(0, 0), Some(Color::On));
    }
}
