//! SH1107 OLED Display Driver
//!
//! A driver for the SH1107 monochrome OLED controller on a 128x64 panel
//! (Adafruit FeatherWing and similar), driven over I2C.
//!
//! ## Features
//!
//! - `no_std` compatible
//! - `embedded-hal` v1.0 support
//! - `embedded-graphics` integration (with `graphics` feature)
//! - Landscape (128x64) or portrait (64x128) drawing
//! - Circles, ellipses and triangles, outlined or filled
//! - Per-page retry on flaky buses
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::i2c::{ErrorType, I2c, Operation};
//! use sh1107::{Builder, Color, Display, I2cInterface, Orientation, PixelSurface, Shapes};
//!
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
//! # let i2c = MockI2c;
//! # let mut delay = MockDelay;
//! let config = match Builder::new().orientation(Orientation::Landscape).build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//! let interface = I2cInterface::new(i2c, config.address);
//!
//! // Construction initializes the controller and clears the panel
//! let mut display = match Display::new(interface, config, &mut delay) {
//!     Ok(display) => display,
//!     Err(_) => return,
//! };
//!
//! display.rect(0, 0, 128, 64, Color::On);
//! display.ellipse(64, 32, 30, 12, Color::On, false);
//! display.triangle(10, 50, 20, 40, 30, 50, Color::On, true);
//!
//! match display.show(&mut delay) {
//!     Ok(status) if !status.is_clean() => {
//!         // Some pages needed a retry
//!     }
//!     Ok(_) => {}
//!     Err(_) => return,
//! }
//! ```

#![no_std]

#[cfg(any(test, feature = "alloc"))]
extern crate alloc;

/// On/off pixel color
pub mod color;
/// SH1107 command definitions
pub mod command;
/// Display configuration types and builder
pub mod config;
/// Core display operations
pub mod display;
/// Error types for the driver
pub mod error;
/// Logical pixel buffer and drawing surface
pub mod framebuffer;
/// Hardware interface abstraction
pub mod interface;
/// Landscape-to-native rotation
pub mod rotation;
/// Circle, ellipse and triangle rasterization
pub mod shapes;

/// Graphics support via embedded-graphics (requires `graphics` feature)
#[cfg(feature = "graphics")]
pub mod graphics;

pub use color::Color;
pub use config::{BUFFER_SIZE, Builder, Config, DEFAULT_ADDRESS, Orientation, PAGE_COUNT};
pub use display::{
    Display, INVERT_SETTLE_MS, PAGE_DELAY_US, RETRY_BACKOFF_MS, ShowStatus,
};
pub use error::{BuilderError, Error};
pub use framebuffer::{FrameBuffer, PixelSurface};
pub use interface::{CHUNK_DELAY_US, DATA_CHUNK_SIZE, DisplayInterface, I2cInterface};
pub use shapes::Shapes;
