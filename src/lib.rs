//! A blocking, platform agnostic driver for the MAX7219 LED display controller.
//!
//! The driver talks to the chip through the embedded-hal 1.0 [`SpiDevice`]
//! trait, so chip-select handling and bus sharing are provided by whatever
//! device wrapper the application hands in (for example the `ExclusiveDevice`
//! or `RefCellDevice` types from `embedded-hal-bus`).
//!
//! It keeps a mirror of the eight digit registers so single LEDs, rows and
//! columns of an 8x8 matrix can be toggled without reading the chip back, and
//! it carries a 128 entry character table for 7-segment modules.
//!
//! ```rust,ignore
//! use max7219_display::{Config, Max7219};
//!
//! let mut display = Max7219::open(spi, Config::default())?;
//! display.shutdown(false)?;
//! display.set_led(0, 0, true)?; // top-left LED
//! ```
//!
//! Only a single device is driven. The frame layout still follows the
//! daisy-chain convention (most significant device first), see
//! [`DEVICE_COUNT`].
//!
//! [`SpiDevice`]: embedded_hal::spi::SpiDevice

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod char_table;
pub mod config;
pub mod driver;
pub mod error;
pub mod registers;

pub use config::{Config, MAX_FREQUENCY, SPI_MODE};
pub use driver::max7219::Max7219;
pub use error::Error;
pub use registers::{DecodeMode, Register};

/// Number of devices the driver addresses on one chip-select line.
pub const DEVICE_COUNT: usize = 1;

/// Upper bound of devices a MAX7219 chain is sized for.
pub const MAX_DISPLAYS: usize = 8;

/// Digit (row) registers per device.
pub const NUM_DIGITS: u8 = 8;

/// Length of the status mirror: 8 rows for each of `MAX_DISPLAYS` devices.
pub const STATUS_LEN: usize = NUM_DIGITS as usize * MAX_DISPLAYS;

/// Result type used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;
