#![cfg_attr(not(test), no_std)]

//! SSD1306 (128x64 monochrome OLED) bus primitives.

pub mod protocol;
mod transport;

pub use transport::{I2cTransport, Transport};

/// Driver configuration.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Config {
    /// 7-bit bus address of the controller.
    pub address: u8,
    /// Contrast level written during power-up.
    pub contrast: u8,
    /// Settle delay after the power-up burst, in microseconds.
    pub settle_us: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            address: protocol::DEFAULT_ADDRESS,
            contrast: 0x80,
            settle_us: 100,
        }
    }
}

/// Bus errors.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Error<I2cErr> {
    /// I2C transaction failed.
    I2c(I2cErr),
}

pub type BusResult<I2cErr> = Result<(), Error<I2cErr>>;
