//! Core display operations
//!
//! [`Display`] owns the logical [`FrameBuffer`], the physical buffer used in
//! landscape, and the bus interface. Drawing goes through [`PixelSurface`] and
//! [`Shapes`](crate::shapes::Shapes); [`Display::show`] streams the frame to
//! the controller page by page.
//!
//! ## Frame Transfer
//!
//! For each of the 16 pages, in order:
//!
//! 1. Page address (`0xB0 | page`), column low (`0x00`), column high (`0x10`)
//! 2. 64 bytes of page data, chunked by the interface
//! 3. [`PAGE_DELAY_US`] pause
//!
//! A page that fails is retried once after [`RETRY_BACKOFF_MS`]. A second
//! failure aborts the transfer with [`Error::PageTransfer`].

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;
use log::{debug, error, warn};

use crate::color::Color;
use crate::command::{
    INIT_SEQUENCE, SET_COL_ADDR_HIGH, SET_COL_ADDR_LOW, SET_CONTRAST, SET_DISP, SET_NORM_INV,
    SET_PAGE_ADDR,
};
use crate::config::{BUFFER_SIZE, Config, Orientation, PAGE_COUNT, PHYSICAL_WIDTH};
use crate::error::Error;
use crate::framebuffer::{FrameBuffer, PixelSurface};
use crate::interface::{DisplayInterface, I2cInterface};
use crate::rotation::rotate_landscape;

type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// Pause after each page transfer in microseconds
pub const PAGE_DELAY_US: u32 = 100;

/// Wait before retrying a failed page in milliseconds
pub const RETRY_BACKOFF_MS: u32 = 10;

/// Settling time after toggling inversion in milliseconds
pub const INVERT_SETTLE_MS: u32 = 10;

const PAGE_BYTES: usize = PHYSICAL_WIDTH as usize;

/// Outcome of a successful [`Display::show`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShowStatus {
    /// Every page transferred on the first attempt
    Clean,
    /// Some pages failed once and succeeded on their retry
    Recovered {
        /// Bitmask of retried pages (bit `n` = page `n`)
        pages: u16,
    },
}

impl ShowStatus {
    /// Bitmask of pages that needed a retry (0 when clean)
    pub fn retried_pages(self) -> u16 {
        match self {
            Self::Clean => 0,
            Self::Recovered { pages } => pages,
        }
    }

    /// Whether the frame went out without any retry
    pub fn is_clean(self) -> bool {
        self == Self::Clean
    }
}

/// Core display driver for SH1107
///
/// Construction runs the controller initialization sequence and pushes one
/// blank frame, so a `Display` value always refers to an initialized panel.
pub struct Display<I>
where
    I: DisplayInterface,
{
    /// Hardware interface
    interface: I,
    /// Display configuration
    config: Config,
    /// Logical pixel buffer drawn into by the caller
    buffer: FrameBuffer,
    /// Native-layout buffer, present only when the orientation needs rotation
    physical: Option<[u8; BUFFER_SIZE]>,
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Create and initialize a display
    ///
    /// # Errors
    ///
    /// Any bus failure during initialization is returned as-is; the init
    /// commands are not retried.
    pub fn new<D: DelayNs>(interface: I, config: Config, delay: &mut D) -> Result<Self, Error<I>> {
        debug!(
            "creating sh1107 display: {:?}, external_vcc={}",
            config.orientation, config.external_vcc
        );
        let physical = config
            .orientation
            .needs_rotation()
            .then_some([0u8; BUFFER_SIZE]);
        let mut display = Self {
            interface,
            buffer: FrameBuffer::new(config.orientation),
            config,
            physical,
        };
        display.init(delay)?;
        Ok(display)
    }

    /// Send the power-on command sequence and clear the panel
    fn init<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        for &command in &INIT_SEQUENCE {
            self.send_command(command)?;
        }
        debug!("init sequence complete");

        self.buffer.fill(Color::Off);
        let status = self.show(delay)?;
        if !status.is_clean() {
            warn!(
                "initial clear recovered pages {:#06x}",
                status.retried_pages()
            );
        }
        Ok(())
    }

    /// Transfer the buffer contents to the display
    ///
    /// In landscape the logical buffer is first rotated into the physical
    /// buffer. The logical buffer is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PageTransfer`] when a page fails twice in a row.
    /// Pages after the failing one are not sent.
    pub fn show<D: DelayNs>(&mut self, delay: &mut D) -> Result<ShowStatus, Error<I>> {
        if let Some(physical) = self.physical.as_mut() {
            rotate_landscape(self.buffer.as_bytes(), physical);
        }

        let mut retried: u16 = 0;
        for page in 0..PAGE_COUNT {
            if let Err(err) = self.write_page(page, delay) {
                warn!("page {} transfer failed ({:?}), retrying", page, err);
                delay.delay_ms(RETRY_BACKOFF_MS);
                if let Err(source) = self.write_page(page, delay) {
                    error!("page {} transfer failed after retry ({:?})", page, source);
                    return Err(Error::PageTransfer { page, source });
                }
                retried |= 1 << page;
            }
            delay.delay_us(PAGE_DELAY_US);
        }

        if retried == 0 {
            Ok(ShowStatus::Clean)
        } else {
            debug!("frame sent, recovered pages {:#06x}", retried);
            Ok(ShowStatus::Recovered { pages: retried })
        }
    }

    /// Address one page and send its 64 column bytes
    fn write_page<D: DelayNs>(&mut self, page: u8, delay: &mut D) -> Result<(), I::Error> {
        let frame = match &self.physical {
            Some(physical) => physical,
            None => self.buffer.as_bytes(),
        };
        let start = usize::from(page) * PAGE_BYTES;
        let data = &frame[start..start + PAGE_BYTES];

        self.interface.send_command(SET_PAGE_ADDR | page)?;
        self.interface.send_command(SET_COL_ADDR_LOW)?;
        self.interface.send_command(SET_COL_ADDR_HIGH)?;
        self.interface.send_data(data, delay)
    }

    /// Set display contrast (0-255)
    pub fn contrast(&mut self, value: u8) -> DisplayResult<I> {
        self.send_command(SET_CONTRAST)?;
        self.send_command(value)
    }

    /// Invert the display (lit pixels dark and vice versa)
    pub fn invert<D: DelayNs>(&mut self, invert: bool, delay: &mut D) -> DisplayResult<I> {
        self.send_command(SET_NORM_INV | u8::from(invert))?;
        delay.delay_ms(INVERT_SETTLE_MS);
        Ok(())
    }

    /// Turn the panel off (display RAM is kept)
    pub fn poweroff(&mut self) -> DisplayResult<I> {
        self.send_command(SET_DISP)
    }

    /// Turn the panel on
    pub fn poweron(&mut self) -> DisplayResult<I> {
        self.send_command(SET_DISP | 0x01)
    }

    /// Send a command to the display controller
    fn send_command(&mut self, cmd: u8) -> DisplayResult<I> {
        self.interface.send_command(cmd).map_err(Error::Interface)
    }

    /// Get the logical orientation
    pub fn orientation(&self) -> Orientation {
        self.config.orientation
    }

    /// Access the underlying configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Logical buffer
    pub fn buffer(&self) -> &FrameBuffer {
        &self.buffer
    }

    /// Logical buffer, mutable
    pub fn buffer_mut(&mut self) -> &mut FrameBuffer {
        &mut self.buffer
    }

    /// Native-layout buffer as of the last [`show`](Self::show)
    ///
    /// `None` in portrait, where the logical buffer is sent directly.
    pub fn physical_buffer(&self) -> Option<&[u8; BUFFER_SIZE]> {
        self.physical.as_ref()
    }

    /// Consume the driver and return the interface
    pub fn release(self) -> I {
        self.interface
    }
}

impl<I2C> Display<I2cInterface<I2C>>
where
    I2C: I2c,
{
    /// Create and initialize a display on an I2C bus at `config.address`
    ///
    /// ## Example
    ///
    /// ```rust,no_run
    /// use sh1107::{Builder, Color, Display, Orientation, PixelSurface, Shapes};
    /// # use core::convert::Infallible;
    /// # use embedded_hal::delay::DelayNs;
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
    /// # struct MockDelay;
    /// # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
    /// # let mut delay = MockDelay;
    /// let config = match Builder::new().orientation(Orientation::Landscape).build() {
    ///     Ok(config) => config,
    ///     Err(_) => return,
    /// };
    /// let mut display = match Display::from_i2c(MockI2c, config, &mut delay) {
    ///     Ok(display) => display,
    ///     Err(_) => return,
    /// };
    ///
    /// display.circle(64, 32, 20, Color::On, false);
    /// display.hline(0, 63, 128, Color::On);
    /// let _ = display.show(&mut delay);
    /// ```
    pub fn from_i2c<D: DelayNs>(
        i2c: I2C,
        config: Config,
        delay: &mut D,
    ) -> Result<Self, Error<I2cInterface<I2C>>> {
        let interface = I2cInterface::new(i2c, config.address);
        Self::new(interface, config, delay)
    }
}

impl<I> PixelSurface for Display<I>
where
    I: DisplayInterface,
{
    fn width(&self) -> i32 {
        self.buffer.width()
    }

    fn height(&self) -> i32 {
        self.buffer.height()
    }

    fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        self.buffer.set_pixel(x, y, color);
    }

    fn get_pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.buffer.get_pixel(x, y)
    }

    fn fill(&mut self, color: Color) {
        self.buffer.fill(color);
    }
}
