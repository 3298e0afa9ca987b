//! Bus configuration
//!
//! With embedded-hal the chip-select line and the clock are owned by the
//! platform HAL: both are fixed when the application builds the `SpiDevice`
//! that is handed to [`Max7219`](crate::Max7219). `Config` records the clock
//! rate the bus should be set up with and rejects rates the chip can't take.

use embedded_hal::spi::{Mode, MODE_0};

use crate::{error::Error, Result};

/// Highest serial clock the MAX7219 accepts (10 MHz).
pub const MAX_FREQUENCY: u32 = 10_000_000;

/// SPI mode required by the chip: clock idles low, data latched on the
/// rising edge.
pub const SPI_MODE: Mode = MODE_0;

/// Driver configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Clock frequency in Hz
    pub frequency: u32,
}

impl Config {
    /// Default clock frequency (1 MHz)
    pub const DEFAULT_FREQUENCY: u32 = 1_000_000;

    /// Creates a configuration for the given clock frequency.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidFrequency` for 0 Hz or anything above
    /// [`MAX_FREQUENCY`].
    pub fn new(frequency: u32) -> Result<Self> {
        let config = Self { frequency };
        config.validate()?;
        Ok(config)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.frequency == 0 || self.frequency > MAX_FREQUENCY {
            return Err(Error::InvalidFrequency);
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            frequency: Self::DEFAULT_FREQUENCY,
        }
    }
}
