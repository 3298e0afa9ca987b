//! Driving the chip through `embedded-hal-bus` shared devices.
//!
//! The bus is a `RefCell`, so a successful `try_borrow_mut` after a write
//! shows the device gave the bus back, and the pin mock checks chip-select
//! went low and back high around every frame.

use core::cell::RefCell;

use embedded_hal::spi::{ErrorKind, ErrorType, SpiBus};
use embedded_hal_bus::spi::{NoDelay, RefCellDevice};
use embedded_hal_mock::eh1::digital::{Mock as PinMock, State, Transaction as PinTransaction};
use max7219_display::{Error, Max7219};

#[derive(Debug, Default)]
struct Bus {
    written: Vec<Vec<u8>>,
    fail: bool,
}

impl ErrorType for Bus {
    type Error = ErrorKind;
}

impl SpiBus for Bus {
    fn read(&mut self, words: &mut [u8]) -> Result<(), ErrorKind> {
        words.fill(0);
        Ok(())
    }

    fn write(&mut self, words: &[u8]) -> Result<(), ErrorKind> {
        if self.fail {
            return Err(ErrorKind::Other);
        }
        self.written.push(words.to_vec());
        Ok(())
    }

    fn transfer(&mut self, read: &mut [u8], write: &[u8]) -> Result<(), ErrorKind> {
        SpiBus::write(self, write)?;
        read.fill(0);
        Ok(())
    }

    fn transfer_in_place(&mut self, words: &mut [u8]) -> Result<(), ErrorKind> {
        SpiBus::write(self, words)
    }

    fn flush(&mut self) -> Result<(), ErrorKind> {
        Ok(())
    }
}

/// Idle-high on creation, then one low/high pulse per frame.
fn cs_pulses(frames: usize) -> Vec<PinTransaction> {
    let mut expectations = vec![PinTransaction::set(State::High)];
    for _ in 0..frames {
        expectations.push(PinTransaction::set(State::Low));
        expectations.push(PinTransaction::set(State::High));
    }
    expectations
}

#[test]
fn frames_reach_the_bus() {
    let bus = RefCell::new(Bus::default());
    let cs = PinMock::new(&cs_pulses(2));
    let mut cs_handle = cs.clone();

    let device = RefCellDevice::new(&bus, cs, NoDelay).expect("cs idle");
    let mut display = Max7219::new(device);
    display.set_intensity(0x08).expect("intensity");
    display.set_led(2, 1, true).expect("led");

    assert_eq!(
        bus.borrow().written,
        vec![vec![0x0A, 0x08], vec![0x03, 0b0100_0000]]
    );
    cs_handle.done();
}

#[test]
fn failed_transfer_releases_chip_select_and_bus() {
    let bus = RefCell::new(Bus {
        fail: true,
        ..Bus::default()
    });
    let cs = PinMock::new(&cs_pulses(1));
    let mut cs_handle = cs.clone();

    let device = RefCellDevice::new(&bus, cs, NoDelay).expect("cs idle");
    let mut display = Max7219::new(device);

    assert_eq!(display.shutdown(false), Err(Error::Spi(ErrorKind::Other)));
    assert!(bus.try_borrow_mut().is_ok());

    cs_handle.done();
}

#[test]
fn two_displays_share_one_bus() {
    let bus = RefCell::new(Bus::default());
    let cs_left = PinMock::new(&cs_pulses(1));
    let cs_right = PinMock::new(&cs_pulses(1));
    let (mut left_handle, mut right_handle) = (cs_left.clone(), cs_right.clone());

    let mut left =
        Max7219::new(RefCellDevice::new(&bus, cs_left, NoDelay).expect("cs idle"));
    let mut right =
        Max7219::new(RefCellDevice::new(&bus, cs_right, NoDelay).expect("cs idle"));

    left.set_digit(0, 1, false).expect("left digit");
    right.set_digit(0, 2, true).expect("right digit");

    assert_eq!(left.row(0), Some(0b0011_0000));
    assert_eq!(right.row(0), Some(0b1110_1101));
    assert_eq!(
        bus.borrow().written,
        vec![vec![0x01, 0b0011_0000], vec![0x01, 0b1110_1101]]
    );

    left_handle.done();
    right_handle.done();
}
