//! 7-segment character table
//!
//! Segment bits, MSB first:
//!
//! | Bit         | 7  | 6 | 5 | 4 | 3 | 2 | 1 | 0 |
//! |-------------|----|---|---|---|---|---|---|---|
//! | **Segment** | DP | A | B | C | D | E | F | G |
//!
//! Entries 0..=15 are the hex digits, the rest is indexed by ASCII code.
//! Characters without a usable glyph are blank.

/// Decimal point segment
pub const DP: u8 = 0b1000_0000;

/// Index of the blank glyph used for unknown characters
pub const SPACE: u8 = 32;

/// Segment patterns for character codes 0..=127.
#[rustfmt::skip]
pub const CHAR_TABLE: [u8; 128] = [
    0b0111_1110, 0b0011_0000, 0b0110_1101, 0b0111_1001, 0b0011_0011, 0b0101_1011, 0b0101_1111, 0b0111_0000,
    0b0111_1111, 0b0111_1011, 0b0111_0111, 0b0001_1111, 0b0000_1101, 0b0011_1101, 0b0100_1111, 0b0100_0111,
    0b0000_0000, 0b0000_0000, 0b0000_0000, 0b0000_0000, 0b0000_0000, 0b0000_0000, 0b0000_0000, 0b0000_0000,
    0b0000_0000, 0b0000_0000, 0b0000_0000, 0b0000_0000, 0b0000_0000, 0b0000_0000, 0b0000_0000, 0b0000_0000,
    0b0000_0000, 0b0000_0000, 0b0000_0000, 0b0000_0000, 0b0000_0000, 0b0000_0000, 0b0000_0000, 0b0000_0000,
    0b0000_0000, 0b0000_0000, 0b0000_0000, 0b0000_0000, 0b1000_0000, 0b0000_0001, 0b1000_0000, 0b0000_0000,
    0b0111_1110, 0b0011_0000, 0b0110_1101, 0b0111_1001, 0b0011_0011, 0b0101_1011, 0b0101_1111, 0b0111_0000,
    0b0111_1111, 0b0111_1011, 0b0000_0000, 0b0000_0000, 0b0000_0000, 0b0000_0000, 0b0000_0000, 0b0000_0000,
    0b0000_0000, 0b0111_0111, 0b0001_1111, 0b0000_1101, 0b0011_1101, 0b0100_1111, 0b0100_0111, 0b0000_0000,
    0b0011_0111, 0b0000_0000, 0b0000_0000, 0b0000_0000, 0b0000_1110, 0b0000_0000, 0b0000_0000, 0b0000_0000,
    0b0110_0111, 0b0000_0000, 0b0000_0000, 0b0000_0000, 0b0000_0000, 0b0000_0000, 0b0000_0000, 0b0000_0000,
    0b0000_0000, 0b0000_0000, 0b0000_0000, 0b0000_0000, 0b0000_0000, 0b0000_0000, 0b0000_0000, 0b0000_1000,
    0b0000_0000, 0b0111_0111, 0b0001_1111, 0b0000_1101, 0b0011_1101, 0b0100_1111, 0b0100_0111, 0b0000_0000,
    0b0011_0111, 0b0000_0000, 0b0000_0000, 0b0000_0000, 0b0000_1110, 0b0000_0000, 0b0001_0101, 0b0001_1101,
    0b0110_0111, 0b0000_0000, 0b0000_0000, 0b0000_0000, 0b0000_0000, 0b0000_0000, 0b0000_0000, 0b0000_0000,
    0b0000_0000, 0b0000_0000, 0b0000_0000, 0b0000_0000, 0b0000_0000, 0b0000_0000, 0b0000_0000, 0b0000_0000,
];

/// Segment pattern for a character code; codes above 127 map to the blank
/// glyph.
pub const fn glyph(code: u8) -> u8 {
    let index = if code as usize >= CHAR_TABLE.len() {
        SPACE
    } else {
        code
    };
    CHAR_TABLE[index as usize]
}

/// Segment pattern for a hex digit, `None` above 15.
pub const fn hex_digit(value: u8) -> Option<u8> {
    if value > 0x0F {
        None
    } else {
        Some(CHAR_TABLE[value as usize])
    }
}
