//! Error types for the driver
//!
//! This module defines error types for configuration building ([`BuilderError`])
//! and display operations ([`Error`]).
//!
//! ## Error Types
//!
//! - [`BuilderError`] - Errors during configuration construction
//! - [`Error`] - Runtime errors during initialization and transfers
//!
//! Drawing never fails: coordinates outside the buffer are clipped.
//!
//! ## Example
//!
//! ```
//! use sh1107::{Builder, BuilderError};
//!
//! // Does not fit in 7 bits
//! let result = Builder::new().address(0xF0).build();
//! assert!(matches!(result, Err(BuilderError::InvalidAddress(0xF0))));
//!
//! // Highest 7-bit address is accepted
//! assert!(Builder::new().address(0x7F).build().is_ok());
//! ```

use crate::interface::DisplayInterface;

/// Errors that can occur when interacting with the display
///
/// Generic over the interface type to preserve the specific error type.
/// This allows error handling code to match on the underlying bus error.
#[derive(Debug)]
pub enum Error<I: DisplayInterface> {
    /// Interface error on a command write
    ///
    /// Raised by initialization and the simple state commands. These are
    /// never retried.
    Interface(I::Error),
    /// A page failed to transfer and its single retry failed too
    ///
    /// Pages before `page` reached the display; pages after it were not sent.
    PageTransfer {
        /// Page index (0..=15) that failed
        page: u8,
        /// Error from the retry attempt
        source: I::Error,
    },
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(e) => write!(f, "Interface error: {e:?}"),
            Self::PageTransfer { page, source } => {
                write!(f, "Page {page} transfer failed after retry: {source:?}")
            }
        }
    }
}

impl<I: DisplayInterface + core::fmt::Debug> core::error::Error for Error<I> {}

/// Errors that can occur when building configuration
#[derive(Debug, PartialEq, Eq)]
pub enum BuilderError {
    /// I2C address does not fit in 7 bits (above `0x7F`)
    InvalidAddress(u8),
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidAddress(address) => {
                write!(f, "Invalid I2C address {address:#04x} (must be 7-bit)")
            }
        }
    }
}

impl core::error::Error for BuilderError {}
