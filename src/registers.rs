//! MAX7219 register address map

use crate::{error::Error, NUM_DIGITS};

/// Register addresses of the MAX7219 (first byte of every 16-bit packet).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Register {
    NoOp = 0x00,
    Digit0 = 0x01,
    Digit1 = 0x02,
    Digit2 = 0x03,
    Digit3 = 0x04,
    Digit4 = 0x05,
    Digit5 = 0x06,
    Digit6 = 0x07,
    Digit7 = 0x08,
    DecodeMode = 0x09,
    Intensity = 0x0A,
    ScanLimit = 0x0B,
    Shutdown = 0x0C,
    DisplayTest = 0x0F,
}

impl Register {
    /// Raw opcode sent on the wire.
    pub const fn addr(self) -> u8 {
        self as u8
    }

    /// Digit register for a zero based row/digit index.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDigit` for indices above 7.
    pub fn try_digit(digit: u8) -> Result<Self, Error> {
        Ok(match digit {
            0 => Self::Digit0,
            1 => Self::Digit1,
            2 => Self::Digit2,
            3 => Self::Digit3,
            4 => Self::Digit4,
            5 => Self::Digit5,
            6 => Self::Digit6,
            7 => Self::Digit7,
            _ => return Err(Error::InvalidDigit),
        })
    }

    /// All eight digit registers, DIG0 first.
    pub fn digits() -> impl Iterator<Item = Register> {
        (0..NUM_DIGITS).filter_map(|d| Self::try_digit(d).ok())
    }
}

impl From<Register> for u8 {
    fn from(register: Register) -> u8 {
        register.addr()
    }
}

/// Shutdown register data
pub mod shutdown {
    /// Low power mode, display blanked
    pub const POWER_DOWN: u8 = 0x00;
    /// Normal operation
    pub const NORMAL: u8 = 0x01;
}

/// Which digits the chip runs through its Code B decoder.
///
/// This driver always sends raw segment patterns, so `init` selects
/// `NoDecode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum DecodeMode {
    #[default]
    NoDecode = 0x00,
    Digit0 = 0x01,
    Digits0To3 = 0x0F,
    AllDigits = 0xFF,
}

impl DecodeMode {
    /// Data byte for the DecodeMode register.
    pub const fn value(self) -> u8 {
        self as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_registers_follow_rows() {
        let addrs: Vec<u8> = Register::digits().map(Register::addr).collect();
        assert_eq!(addrs, vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn try_digit_rejects_out_of_range() {
        assert_eq!(Register::try_digit(7), Ok(Register::Digit7));
        assert_eq!(Register::try_digit(8), Err(Error::InvalidDigit));
    }

    #[test]
    fn control_register_opcodes() {
        assert_eq!(u8::from(Register::NoOp), 0x00);
        assert_eq!(u8::from(Register::DecodeMode), 0x09);
        assert_eq!(u8::from(Register::Intensity), 0x0A);
        assert_eq!(u8::from(Register::ScanLimit), 0x0B);
        assert_eq!(u8::from(Register::Shutdown), 0x0C);
        assert_eq!(u8::from(Register::DisplayTest), 0x0F);
    }
}
