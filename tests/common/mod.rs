//! Recording `SpiDevice` used by the integration tests.
//!
//! It plays the part of a shared-bus device: every transaction is bracketed
//! by lock/select and unselect/unlock events, and writes can be made to fail.

#![allow(dead_code)]

use embedded_hal::spi::{ErrorKind, ErrorType, Operation, SpiDevice};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Lock,
    Select,
    Write,
    Unselect,
    Unlock,
}

/// The events one successful or failed register write must produce.
pub const WRITE_EVENTS: [Event; 5] = [
    Event::Lock,
    Event::Select,
    Event::Write,
    Event::Unselect,
    Event::Unlock,
];

#[derive(Debug, Default)]
pub struct RecordingSpi {
    pub events: Vec<Event>,
    pub frames: Vec<Vec<u8>>,
    pub fail_writes: bool,
}

impl RecordingSpi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    pub fn clear(&mut self) {
        self.events.clear();
        self.frames.clear();
    }
}

impl ErrorType for RecordingSpi {
    type Error = ErrorKind;
}

impl SpiDevice for RecordingSpi {
    fn transaction(&mut self, operations: &mut [Operation<'_, u8>]) -> Result<(), ErrorKind> {
        self.events.push(Event::Lock);
        self.events.push(Event::Select);

        let result = operations.iter_mut().try_for_each(|op| match op {
            Operation::Write(words) => {
                self.events.push(Event::Write);
                self.frames.push(words.to_vec());
                if self.fail_writes {
                    Err(ErrorKind::Other)
                } else {
                    Ok(())
                }
            }
            _ => Ok(()),
        });

        self.events.push(Event::Unselect);
        self.events.push(Event::Unlock);
        result
    }
}
