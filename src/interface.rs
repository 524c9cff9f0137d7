//! Hardware interface abstraction
//!
//! This module provides the [`DisplayInterface`] trait and the [`I2cInterface`]
//! struct for communicating with the SH1107 controller over I2C.
//!
//! ## Bus Framing
//!
//! The SH1107 has no D/C pin in I2C mode. Instead every bus write begins with
//! a control byte:
//!
//! - Commands: `[0x80, opcode]`, one opcode per transaction
//! - Data: `[0x40, payload...]`, at most [`DATA_CHUNK_SIZE`] payload bytes per
//!   transaction, followed by a [`CHUNK_DELAY_US`] pause
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_hal::delay::DelayNs;
//! use sh1107::{DisplayInterface, I2cInterface};
//! # use core::convert::Infallible;
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
//! // Create interface on the default address (0x3C)
//! let mut interface = I2cInterface::new(MockI2c, sh1107::DEFAULT_ADDRESS);
//!
//! // Send command
//! let _ = interface.send_command(0xAF); // Display on
//!
//! // Send data (split into 16-byte transactions)
//! let _ = interface.send_data(&[0xFF; 64], &mut delay);
//! ```

use core::fmt::Debug;
use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

use crate::command::{CONTROL_COMMAND, CONTROL_DATA};

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Maximum payload bytes per data transaction
pub const DATA_CHUNK_SIZE: usize = 16;

/// Pause after every data chunk in microseconds
pub const CHUNK_DELAY_US: u32 = 50;

/// Trait for hardware interface to SH1107 controller
///
/// This trait abstracts over different bus implementations, allowing the
/// [`Display`](crate::display::Display) to work with any transport that can
/// deliver command and data writes.
///
/// ## Implementing
///
/// For most cases, use the provided [`I2cInterface`]. Implement this trait on
/// your own type to wrap a shared bus, add instrumentation, or inject faults
/// in tests.
pub trait DisplayInterface {
    /// Error type for interface operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Send a single command byte to the controller
    ///
    /// # Errors
    ///
    /// Returns an error if the bus write fails.
    fn send_command(&mut self, command: u8) -> InterfaceResult<(), Self::Error>;

    /// Send display RAM data to the controller
    ///
    /// Implementations split `data` into bus-sized chunks and wait on `delay`
    /// between them as the controller requires.
    ///
    /// # Errors
    ///
    /// Returns an error if any chunk fails. Chunks already written stay written.
    fn send_data<D: DelayNs>(
        &mut self,
        data: &[u8],
        delay: &mut D,
    ) -> InterfaceResult<(), Self::Error>;
}

/// I2C implementation of [`DisplayInterface`]
///
/// ## Type Parameters
///
/// * `I2C` - Bus implementing [`embedded_hal::i2c::I2c`]
///
/// ## Example
///
/// ```rust,no_run
/// use sh1107::I2cInterface;
/// # use core::convert::Infallible;
/// # use embedded_hal::i2c::{ErrorType, I2c, Operation};
/// # struct MockI2c;
/// # impl ErrorType for MockI2c { type Error = Infallible; }
/// # impl I2c for MockI2c {
/// #     fn transaction(
/// #         &mut self,
/// #         _address: u8,
/// #         _operations: &mut [Operation<'_>],
/// #     ) -> Result<(), Self::Error> {
/// #         Ok(())
/// #     }
/// # }
/// let interface = I2cInterface::new(MockI2c, 0x3D);
/// assert_eq!(interface.address(), 0x3D);
/// ```
#[derive(Debug)]
pub struct I2cInterface<I2C> {
    /// I2C bus
    i2c: I2C,
    /// 7-bit device address
    address: u8,
}

impl<I2C> I2cInterface<I2C>
where
    I2C: I2c,
{
    /// Create a new interface talking to `address` on `i2c`
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Get the device address
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Consume the interface and return the bus
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C> DisplayInterface for I2cInterface<I2C>
where
    I2C: I2c,
{
    type Error = I2C::Error;

    fn send_command(&mut self, command: u8) -> InterfaceResult<(), Self::Error> {
        self.i2c.write(self.address, &[CONTROL_COMMAND, command])
    }

    fn send_data<D: DelayNs>(
        &mut self,
        data: &[u8],
        delay: &mut D,
    ) -> InterfaceResult<(), Self::Error> {
        let mut frame = [0u8; DATA_CHUNK_SIZE + 1];
        frame[0] = CONTROL_DATA;

        for chunk in data.chunks(DATA_CHUNK_SIZE) {
            frame[1..=chunk.len()].copy_from_slice(chunk);
            self.i2c.write(self.address, &frame[..=chunk.len()])?;
            delay.delay_us(CHUNK_DELAY_US);
        }

        Ok(())
    }
}
