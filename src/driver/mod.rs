//! Device drivers

pub mod max7219;
