//! Error type returned by the driver

use core::fmt;

use embedded_hal::spi::ErrorKind;

/// Errors reported by the MAX7219 driver.
///
/// Argument errors are raised before anything is sent, so the bus and the
/// status mirror are untouched when one of the `Invalid*` variants comes back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// The SPI transfer failed
    Spi(ErrorKind),
    /// Row index outside 0..=7
    InvalidRow,
    /// Column index outside 0..=7
    InvalidColumn,
    /// Digit index outside 0..=7
    InvalidDigit,
    /// Hex digit value outside 0..=15
    InvalidValue,
    /// Scan limit outside 0..=7
    InvalidScanLimit,
    /// Intensity outside 0..=15
    InvalidIntensity,
    /// Clock frequency is zero or above the chip maximum
    InvalidFrequency,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Spi(kind) => write!(f, "SPI error: {kind}"),
            Self::InvalidRow => f.write_str("row must be in 0..=7"),
            Self::InvalidColumn => f.write_str("column must be in 0..=7"),
            Self::InvalidDigit => f.write_str("digit must be in 0..=7"),
            Self::InvalidValue => f.write_str("digit value must be in 0..=15"),
            Self::InvalidScanLimit => f.write_str("scan limit must be in 0..=7"),
            Self::InvalidIntensity => f.write_str("intensity must be in 0..=15"),
            Self::InvalidFrequency => f.write_str("SPI frequency must be in 1 Hz..=10 MHz"),
        }
    }
}
