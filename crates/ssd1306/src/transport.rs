//! Command/data channel over a byte-oriented bus.

use embedded_hal::i2c::{I2c, Operation};

use crate::{
    BusResult, Config, Error,
    protocol::{CONTROL_COMMAND, CONTROL_DATA, DEFAULT_ADDRESS},
};

/// Bytes staged per transaction when repeating a fill value.
const REPEAT_CHUNK: usize = 32;

/// Narrow capability the text layer needs from the bus.
///
/// Every call is one blocking transaction (or a short run of them for
/// [`Transport::write_repeated`]).
pub trait Transport {
    type Error;

    /// Sends `bytes` on the command channel.
    fn write_command(&mut self, bytes: &[u8]) -> Result<(), Self::Error>;

    /// Sends `bytes` on the data channel.
    fn write_data(&mut self, bytes: &[u8]) -> Result<(), Self::Error>;

    /// Sends `count` copies of `byte` on the data channel.
    fn write_repeated(&mut self, byte: u8, count: usize) -> Result<(), Self::Error>;

    /// Sends a single data byte.
    fn write_data_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        self.write_data(&[byte])
    }
}

/// [`Transport`] over an `embedded-hal` I2C bus.
#[derive(Debug)]
pub struct I2cTransport<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> I2cTransport<I2C>
where
    I2C: I2c,
{
    /// Creates a transport for the default device address.
    pub fn new(i2c: I2C) -> Self {
        Self::with_address(i2c, DEFAULT_ADDRESS)
    }

    /// Creates a transport for the address in `config`.
    pub fn from_config(i2c: I2C, config: &Config) -> Self {
        Self::with_address(i2c, config.address)
    }

    /// Creates a transport for an explicit device address.
    pub fn with_address(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Returns the device address.
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Releases the owned bus.
    pub fn release(self) -> I2C {
        self.i2c
    }

    fn write_prefixed(&mut self, control: u8, payload: &[u8]) -> BusResult<I2C::Error> {
        // Adjacent writes in one transaction go out without a repeated start.
        let control = [control];
        let mut ops = [Operation::Write(&control), Operation::Write(payload)];
        self.i2c
            .transaction(self.address, &mut ops)
            .map_err(Error::I2c)
    }
}

impl<I2C> Transport for I2cTransport<I2C>
where
    I2C: I2c,
{
    type Error = Error<I2C::Error>;

    fn write_command(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        self.write_prefixed(CONTROL_COMMAND, bytes)
    }

    fn write_data(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        self.write_prefixed(CONTROL_DATA, bytes)
    }

    fn write_repeated(&mut self, byte: u8, count: usize) -> Result<(), Self::Error> {
        let chunk = [byte; REPEAT_CHUNK];
        let mut remaining = count;

        while remaining > 0 {
            let n = remaining.min(REPEAT_CHUNK);
            self.write_prefixed(CONTROL_DATA, &chunk[..n])?;
            remaining -= n;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::i2c::{ErrorKind, ErrorType, SevenBitAddress};

    /// Captures each transaction as the flattened byte stream on the wire.
    #[derive(Default)]
    struct CaptureBus {
        transactions: Vec<(u8, Vec<u8>)>,
        fail: bool,
    }

    impl ErrorType for CaptureBus {
        type Error = ErrorKind;
    }

    impl I2c for CaptureBus {
        fn transaction(
            &mut self,
            address: SevenBitAddress,
            operations: &mut [Operation<'_>],
        ) -> Result<(), Self::Error> {
            if self.fail {
                return Err(ErrorKind::Other);
            }

            let mut bytes = Vec::new();
            for op in operations.iter() {
                if let Operation::Write(data) = op {
                    bytes.extend_from_slice(data);
                }
            }
            self.transactions.push((address, bytes));
            Ok(())
        }
    }

    #[test]
    fn command_and_data_use_distinct_control_bytes() {
        let mut transport = I2cTransport::new(CaptureBus::default());

        transport.write_command(&[0xAE]).unwrap();
        transport.write_data(&[0x12, 0x34]).unwrap();
        transport.write_data_byte(0x56).unwrap();

        let bus = transport.release();
        assert_eq!(
            bus.transactions,
            vec![
                (0x3C, vec![0x00, 0xAE]),
                (0x3C, vec![0x40, 0x12, 0x34]),
                (0x3C, vec![0x40, 0x56]),
            ]
        );
    }

    #[test]
    fn repeated_write_is_chunked() {
        let mut transport = I2cTransport::with_address(CaptureBus::default(), 0x3D);

        transport.write_repeated(0x00, 70).unwrap();

        let bus = transport.release();
        let lens: Vec<usize> = bus.transactions.iter().map(|(_, b)| b.len()).collect();
        assert_eq!(lens, vec![33, 33, 7]);
        assert!(bus.transactions.iter().all(|(addr, b)| {
            *addr == 0x3D && b[0] == CONTROL_DATA && b[1..].iter().all(|&x| x == 0)
        }));
    }

    #[test]
    fn zero_count_repeat_sends_nothing() {
        let mut transport = I2cTransport::new(CaptureBus::default());

        transport.write_repeated(0xFF, 0).unwrap();

        assert!(transport.release().transactions.is_empty());
    }

    #[test]
    fn bus_failure_is_reported() {
        let bus = CaptureBus {
            fail: true,
            ..CaptureBus::default()
        };
        let mut transport = I2cTransport::from_config(bus, &Config::default());

        assert_eq!(
            transport.write_command(&[0xAF]),
            Err(Error::I2c(ErrorKind::Other))
        );
    }
}
