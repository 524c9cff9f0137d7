//! Pixel color for monochrome OLED panels
//!
//! Every pixel of the SH1107 is a single bit in display RAM: set bits light
//! the OLED segment, clear bits leave it dark.
//!
//! ## Example
//!
//! ```
//! use sh1107::Color;
//!
//! assert_eq!(Color::from(1u8), Color::On);
//! assert_eq!(Color::from(false), Color::Off);
//! assert_eq!(Color::On.fill_byte(), 0xFF);
//! ```

/// Colors supported by SH1107 (monochrome)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Color {
    /// Pixel dark (bit clear)
    #[default]
    Off,
    /// Pixel lit (bit set)
    On,
}

#[cfg(feature = "graphics")]
impl embedded_graphics_core::prelude::PixelColor for Color {
    type Raw = embedded_graphics_core::pixelcolor::raw::RawU1;
}

#[cfg(feature = "graphics")]
impl From<embedded_graphics_core::pixelcolor::BinaryColor> for Color {
    fn from(color: embedded_graphics_core::pixelcolor::BinaryColor) -> Self {
        Self::from(color.is_on())
    }
}

impl From<bool> for Color {
    fn from(on: bool) -> Self {
        if on { Self::On } else { Self::Off }
    }
}

/// Only the lowest bit is significant, so `0` is off and `1` is on.
impl From<u8> for Color {
    fn from(value: u8) -> Self {
        Self::from(value & 1 != 0)
    }
}

impl Color {
    /// Whether the pixel is lit
    ///
    /// ```
    /// assert!(sh1107::Color::from(true).is_on());
    /// ```
    pub fn is_on(self) -> bool {
        self == Self::On
    }

    /// Byte value that sets all eight pixels of a column byte to this color
    ///
    /// ## Example
    ///
    /// ```
    /// use sh1107::Color;
    ///
    /// assert_eq!(Color::Off.fill_byte(), 0x00);
    /// assert_eq!(Color::On.fill_byte(), 0xFF);
    /// ```
    pub fn fill_byte(self) -> u8 {
        match self {
            Self::Off => 0x00,
            Self::On => 0xFF,
        }
    }
}
