//! Display configuration types and builder

pub use crate::error::BuilderError;

/// Default I2C address of the SH1107 (SA0 pulled low)
pub const DEFAULT_ADDRESS: u8 = 0x3C;

/// Columns of the controller's native display RAM
pub const PHYSICAL_WIDTH: u16 = 64;

/// Rows of the controller's native display RAM
pub const PHYSICAL_HEIGHT: u16 = 128;

/// Number of 8-row pages in display RAM
pub const PAGE_COUNT: u8 = (PHYSICAL_HEIGHT / 8) as u8;

/// Size in bytes of a full frame, logical or physical
pub const BUFFER_SIZE: usize = (PHYSICAL_WIDTH as usize * PHYSICAL_HEIGHT as usize) / 8;

/// Logical orientation of the panel
///
/// The SH1107 RAM is wired as a 64x128 portrait panel. In landscape the
/// driver draws into a 128x64 buffer and rotates it into the native layout
/// before each transfer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Orientation {
    /// 128x64, rotated 90° counter-clockwise into display RAM
    #[default]
    Landscape,
    /// 64x128, matches display RAM directly
    Portrait,
}

impl Orientation {
    /// Logical width in pixels
    pub fn width(self) -> u16 {
        match self {
            Self::Landscape => PHYSICAL_HEIGHT,
            Self::Portrait => PHYSICAL_WIDTH,
        }
    }

    /// Logical height in pixels
    pub fn height(self) -> u16 {
        match self {
            Self::Landscape => PHYSICAL_WIDTH,
            Self::Portrait => PHYSICAL_HEIGHT,
        }
    }

    /// Whether the logical buffer must be rotated before transfer
    pub fn needs_rotation(self) -> bool {
        self == Self::Landscape
    }
}

/// Display configuration
///
/// Use [`Builder`] to create a Config.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Logical orientation, fixed for the lifetime of the driver
    pub orientation: Orientation,
    /// 7-bit I2C address
    pub address: u8,
    /// Whether the panel runs from an external VCC supply
    ///
    /// Recorded for charge-pump configuration; the FeatherWing init sequence
    /// sends the same bytes either way.
    pub external_vcc: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            orientation: Orientation::Landscape,
            address: DEFAULT_ADDRESS,
            external_vcc: false,
        }
    }
}

/// Builder for constructing display configuration
///
/// # Example
///
/// ```
/// use sh1107::{Builder, Orientation};
///
/// let config = match Builder::new()
///     .orientation(Orientation::Portrait)
///     .address(0x3D)
///     .build()
/// {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// assert_eq!(config.orientation.width(), 64);
/// ```
#[must_use]
#[derive(Default)]
pub struct Builder {
    config: Config,
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the logical orientation
    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.config.orientation = orientation;
        self
    }

    /// Set the I2C address
    pub fn address(mut self, address: u8) -> Self {
        self.config.address = address;
        self
    }

    /// Set whether the panel has an external VCC supply
    pub fn external_vcc(mut self, external_vcc: bool) -> Self {
        self.config.external_vcc = external_vcc;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidAddress` if the address does not fit in
    /// 7 bits.
    pub fn build(self) -> Result<Config, BuilderError> {
        if self.config.address > 0x7F {
            return Err(BuilderError::InvalidAddress(self.config.address));
        }
        Ok(self.config)
    }
}
