//! Core MAX7219 driver implementation

use embedded_hal::spi::{Error as _, SpiDevice};

use crate::{
    char_table::{self, DP},
    config::Config,
    error::Error,
    registers::{shutdown, DecodeMode, Register},
    Result, DEVICE_COUNT, NUM_DIGITS, STATUS_LEN,
};

/// Driver for the MAX7219 LED display controller.
/// Communicates over SPI using the embedded-hal `SpiDevice` trait.
///
/// The driver mirrors the eight digit registers in memory. Matrix operations
/// (`set_led`, `set_row`, `set_column`) are read-modify-write on that mirror,
/// so the chip never has to be read back.
pub struct Max7219<SPI> {
    spi: SPI,
    config: Config,
    buffer: [u8; DEVICE_COUNT * 2],
    status: [u8; STATUS_LEN],
}

impl<SPI> Max7219<SPI>
where
    SPI: SpiDevice,
{
    /// Creates a new MAX7219 driver instance with the given SPI interface.
    ///
    /// The SPI interface must use Mode 0, which means the clock is low when idle
    /// and data is read on the rising edge of the clock signal. Chip-select is
    /// driven by the `SpiDevice` implementation.
    ///
    /// Nothing is sent to the chip until [`init`](Self::init) is called.
    pub fn new(spi: SPI) -> Self {
        Self {
            spi,
            config: Config::default(),
            buffer: [0; DEVICE_COUNT * 2],
            status: [0; STATUS_LEN],
        }
    }

    /// Creates a driver for a bus clocked as described by `config`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidFrequency` if the clock is above 10 MHz or zero.
    pub fn with_config(spi: SPI, config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::new(spi)
        })
    }

    /// Creates the driver and runs [`init`](Self::init), leaving the chip
    /// blank and in shutdown mode.
    ///
    /// Bus faults during the power-up sequence don't fail construction; they
    /// are logged and the driver is returned anyway. Use `with_config` and
    /// `init` to observe them.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidFrequency` for an unusable `config`.
    pub fn open(spi: SPI, config: Config) -> Result<Self> {
        let mut driver = Self::with_config(spi, config)?;
        driver.init().ok();
        Ok(driver)
    }

    /// Runs the power-up sequence: display test off, scan all eight digits,
    /// no decoding, clear every digit, then enter shutdown mode.
    ///
    /// All 12 register writes are attempted even if some of them fail; the
    /// first failure is returned.
    pub fn init(&mut self) -> Result<()> {
        #[cfg(feature = "defmt")]
        defmt::debug!("MAX7219 init, bus clock {=u32} Hz", self.config.frequency);

        let mut result = self.display_test(false);
        result = result.and(self.set_scan_limit(NUM_DIGITS - 1));
        result = result.and(self.set_decode_mode(DecodeMode::NoDecode));
        result = result.and(self.clear_display());
        result.and(self.shutdown(true))
    }

    /// Returns the bus handle, consuming the driver.
    pub fn release(self) -> SPI {
        self.spi
    }

    /// Returns the number of MAX7219 devices managed by this driver.
    ///
    /// Always [`DEVICE_COUNT`]; daisy-chains are not driven.
    pub fn device_count(&self) -> usize {
        DEVICE_COUNT
    }

    /// Bus configuration the driver was created with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Mirrored digit registers, row 0 first.
    pub fn status(&self) -> &[u8] {
        &self.status[..NUM_DIGITS as usize * DEVICE_COUNT]
    }

    /// Mirrored pattern of a single row, `None` for rows above 7.
    pub fn row(&self, row: u8) -> Option<u8> {
        self.status().get(row as usize).copied()
    }

    /// Writes a value to a register of the chip.
    ///
    /// Each MAX7219 expects a 16-bit packet: the register address followed by
    /// the data byte. The scratch buffer holds the packets least significant
    /// device first (data, then opcode), and is shifted out in reverse so the
    /// device furthest down the chain receives its packet first. With a single
    /// device the frame is simply `[opcode, data]`.
    ///
    /// The frame goes out in one `SpiDevice` transaction, which locks the bus,
    /// asserts chip-select, writes, then deasserts chip-select and releases
    /// the bus whether or not the write succeeded.
    ///
    /// # Errors
    ///
    /// Returns `Error::Spi` if the transfer fails. The status mirror is not
    /// rolled back.
    pub(crate) fn write_register(&mut self, register: Register, data: u8) -> Result<()> {
        self.buffer = [0; DEVICE_COUNT * 2];
        self.buffer[0] = data;
        self.buffer[1] = register.addr();

        let mut frame = [0; DEVICE_COUNT * 2];
        for (out, byte) in frame.iter_mut().zip(self.buffer.iter().rev()) {
            *out = *byte;
        }

        self.spi.write(&frame).map_err(|e| {
            let kind = e.kind();
            #[cfg(feature = "defmt")]
            defmt::warn!("MAX7219 write {} <- {=u8:#x} failed: {}", register, data, kind);
            Error::Spi(kind)
        })
    }

    /// Stores `pattern` for `digit` in the mirror and sends it.
    fn write_digit(&mut self, register: Register, digit: u8, pattern: u8) -> Result<()> {
        self.status[digit as usize] = pattern;
        self.write_register(register, pattern)
    }

    /// Enters shutdown (`true`) or resumes normal operation (`false`).
    ///
    /// Digit data is retained by the chip while shut down.
    pub fn shutdown(&mut self, powerdown: bool) -> Result<()> {
        let data = if powerdown {
            shutdown::POWER_DOWN
        } else {
            shutdown::NORMAL
        };
        self.write_register(Register::Shutdown, data)
    }

    /// Enables or disables display test mode.
    ///
    /// When enabled, all LEDs are lit regardless of the digit registers.
    pub fn display_test(&mut self, enable: bool) -> Result<()> {
        self.write_register(Register::DisplayTest, u8::from(enable))
    }

    /// Sets how many digits the chip scans, as the index of the last scanned
    /// digit: 0 scans only digit 0, 7 scans all eight.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidScanLimit` if `limit` is above 7.
    pub fn set_scan_limit(&mut self, limit: u8) -> Result<()> {
        if limit >= NUM_DIGITS {
            return Err(Error::InvalidScanLimit);
        }
        self.write_register(Register::ScanLimit, limit)
    }

    /// Sets the brightness intensity, `0x00` to `0x0F`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidIntensity` if `intensity` is above 15.
    pub fn set_intensity(&mut self, intensity: u8) -> Result<()> {
        if intensity > 0x0F {
            return Err(Error::InvalidIntensity);
        }
        self.write_register(Register::Intensity, intensity)
    }

    /// Selects which digits go through the chip's Code B decoder.
    ///
    /// The segment helpers in this driver send raw patterns and expect
    /// [`DecodeMode::NoDecode`].
    pub fn set_decode_mode(&mut self, mode: DecodeMode) -> Result<()> {
        self.write_register(Register::DecodeMode, mode.value())
    }

    /// Clears all digits by writing 0 to each digit register (DIG0 to DIG7).
    ///
    /// The mirror is zeroed and all eight writes are attempted; the first
    /// failure is returned.
    pub fn clear_display(&mut self) -> Result<()> {
        let mut result = Ok(());
        for (digit, register) in (0..NUM_DIGITS).zip(Register::digits()) {
            result = result.and(self.write_digit(register, digit, 0x00));
        }
        result
    }

    /// Switches a single LED of an 8x8 matrix.
    ///
    /// Column 0 is the most significant bit of the row's digit register,
    /// i.e. the leftmost LED on common modules.
    ///
    /// # Errors
    ///
    /// `Error::InvalidRow` / `Error::InvalidColumn` for indices above 7;
    /// nothing is sent and the mirror is unchanged.
    pub fn set_led(&mut self, row: u8, column: u8, state: bool) -> Result<()> {
        let register = Register::try_digit(row).map_err(|_| Error::InvalidRow)?;
        if column >= NUM_DIGITS {
            return Err(Error::InvalidColumn);
        }

        let mask = 0x80 >> column;
        let pattern = if state {
            self.status[row as usize] | mask
        } else {
            self.status[row as usize] & !mask
        };
        self.write_digit(register, row, pattern)
    }

    /// Switches every LED in a row, one register write per column.
    pub fn set_row(&mut self, row: u8, state: bool) -> Result<()> {
        if row >= NUM_DIGITS {
            return Err(Error::InvalidRow);
        }

        let mut result = Ok(());
        for column in 0..NUM_DIGITS {
            result = result.and(self.set_led(row, column, state));
        }
        result
    }

    /// Switches every LED in a column, one register write per row.
    pub fn set_column(&mut self, column: u8, state: bool) -> Result<()> {
        if column >= NUM_DIGITS {
            return Err(Error::InvalidColumn);
        }

        let mut result = Ok(());
        for row in 0..NUM_DIGITS {
            result = result.and(self.set_led(row, column, state));
        }
        result
    }

    /// Shows a hex digit (`0x0` to `0xF`) on a 7-segment position, with an
    /// optional decimal point.
    ///
    /// # Errors
    ///
    /// `Error::InvalidDigit` for positions above 7, `Error::InvalidValue` for
    /// values above 15.
    pub fn set_digit(&mut self, digit: u8, value: u8, dp: bool) -> Result<()> {
        let register = Register::try_digit(digit)?;
        let mut pattern = char_table::hex_digit(value).ok_or(Error::InvalidValue)?;
        if dp {
            pattern |= DP;
        }
        self.write_digit(register, digit, pattern)
    }

    /// Shows a character from the 7-segment table on a digit position.
    ///
    /// Codes above 127 show a blank. `state` lights the high segment bit,
    /// which is the decimal point on 7-segment modules.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDigit` for positions above 7.
    pub fn set_char(&mut self, digit: u8, value: u8, state: bool) -> Result<()> {
        let register = Register::try_digit(digit)?;
        let mut pattern = char_table::glyph(value);
        if state {
            pattern |= DP;
        }
        self.write_digit(register, digit, pattern)
    }

    /// Writes a raw value to the specified digit register (DIG0 to DIG7).
    ///
    /// Each bit of `value` drives one segment (7-segment modules) or one LED
    /// of the row (matrices):
    ///
    /// | Byte        | 7  | 6 | 5 | 4 | 3 | 2 | 1 | 0 |
    /// |-------------|----|---|---|---|---|---|---|---|
    /// | **Segment** | DP | A | B | C | D | E | F | G |
    /// | **Matrix**  | C0 | C1| C2| C3| C4| C5| C6| C7|
    ///
    /// ```rust,ignore
    /// display.write_raw_digit(0, 0b00110000)?; // Shows '1'
    /// ```
    pub fn write_raw_digit(&mut self, digit: u8, value: u8) -> Result<()> {
        let register = Register::try_digit(digit)?;
        self.write_digit(register, digit, value)
    }
}
