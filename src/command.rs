//! SH1107 command definitions
//!
//! This module defines the command bytes used to control the SH1107 OLED
//! controller. On the I2C bus every transaction starts with a control byte
//! that tells the controller how to interpret the bytes that follow:
//!
//! - [`CONTROL_COMMAND`] (`0x80`): a single command byte follows
//! - [`CONTROL_DATA`] (`0x40`): display RAM data follows
//!
//! Commands that take a parameter (contrast, multiplex ratio, ...) send the
//! parameter as a second, separate command write.
//!
//! ## Example
//!
//! ```rust,no_run
//! use sh1107::{command, DisplayInterface, I2cInterface};
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
//! let mut interface = I2cInterface::new(MockI2c, sh1107::DEFAULT_ADDRESS);
//!
//! // Select page 3, column 0
//! let _ = interface.send_command(command::SET_PAGE_ADDR | 3);
//! let _ = interface.send_command(command::SET_COL_ADDR_LOW);
//! let _ = interface.send_command(command::SET_COL_ADDR_HIGH);
//! let _ = interface.send_data(&[0xFF; 64], &mut delay);
//! ```

// Bus framing

/// Control byte announcing a single command byte
pub const CONTROL_COMMAND: u8 = 0x80;

/// Control byte announcing a run of display RAM data
pub const CONTROL_DATA: u8 = 0x40;

// Fundamental commands

/// Set contrast control command (0x81)
///
/// Followed by one parameter write holding the level (0x00..=0xFF).
pub const SET_CONTRAST: u8 = 0x81;

/// Entire display on command base (0xA4)
///
/// `0xA4` = output follows RAM contents, `0xA5` = all pixels on.
pub const SET_ENTIRE_ON: u8 = 0xA4;

/// Normal/inverse display command base (0xA6)
///
/// OR with 1 to invert: `0xA6` = normal, `0xA7` = inverted.
pub const SET_NORM_INV: u8 = 0xA6;

/// Display off/on command base (0xAE)
///
/// OR with 1 to turn the panel on: `0xAE` = off (sleep), `0xAF` = on.
pub const SET_DISP: u8 = 0xAE;

// Addressing commands

/// Memory addressing mode command (0x20)
pub const SET_MEM_ADDR_MODE: u8 = 0x20;

/// Page address command base (0xB0)
///
/// OR with the page number (0..=15).
pub const SET_PAGE_ADDR: u8 = 0xB0;

/// Lower column address command base (0x00)
///
/// OR with the low nibble of the column address.
pub const SET_COL_ADDR_LOW: u8 = 0x00;

/// Higher column address command base (0x10)
///
/// OR with the high nibble of the column address.
pub const SET_COL_ADDR_HIGH: u8 = 0x10;

// Hardware configuration commands

/// Segment remap command base (0xA0)
///
/// OR with 1 to reverse the column direction.
pub const SET_SEG_REMAP: u8 = 0xA0;

/// Common output scan direction command base (0xC0)
///
/// OR with 0x08 to scan from COM[N-1] to COM0.
pub const SET_SCAN_DIR: u8 = 0xC0;

/// Multiplex ratio command (0xA8)
///
/// Followed by one parameter write: number of driven rows minus one.
pub const SET_MUX_RATIO: u8 = 0xA8;

/// Display offset command (0xD3)
///
/// Followed by one parameter write: vertical COM shift.
pub const SET_DISP_OFFSET: u8 = 0xD3;

/// Display start line command (0xDC)
///
/// Followed by one parameter write: RAM row mapped to COM0.
pub const SET_DISP_START_LINE: u8 = 0xDC;

// Timing and driving scheme commands

/// Display clock divide ratio / oscillator frequency command (0xD5)
///
/// Followed by one parameter write.
pub const SET_DISP_CLK_DIV: u8 = 0xD5;

/// Pre-charge / discharge period command (0xD9)
///
/// Followed by one parameter write.
pub const SET_PRECHARGE: u8 = 0xD9;

/// VCOM deselect level command (0xDB)
///
/// Followed by one parameter write.
pub const SET_VCOM_DESEL: u8 = 0xDB;

/// Power-on initialization sequence for the 128x64 FeatherWing panel
///
/// Every entry is sent as its own command write, parameters included.
/// The multiplex ratio (128 rows) and display offset (0x60) match this
/// panel's internal COM wiring and must not be changed for it.
pub const INIT_SEQUENCE: [u8; 21] = [
    SET_DISP,
    SET_DISP_START_LINE,
    0x00,
    SET_CONTRAST,
    0x2F,
    SET_MEM_ADDR_MODE,
    SET_SEG_REMAP,
    SET_SCAN_DIR,
    SET_MUX_RATIO,
    0x7F,
    SET_DISP_OFFSET,
    0x60,
    SET_DISP_CLK_DIV,
    0x51,
    SET_PRECHARGE,
    0x22,
    SET_VCOM_DESEL,
    0x35,
    SET_ENTIRE_ON,
    SET_NORM_INV,
    SET_DISP | 0x01,
];
