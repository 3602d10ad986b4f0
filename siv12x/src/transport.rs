// SPDX-License-Identifier: Apache-2.0
// Copyright © 2021 Will Ross
//! Byte-level access to the sensor's physical registers.
//!
//! The sensors are reachable either through an SMBus controller (where a register read is a
//! single combined write-then-read transaction) or through a plain I²C controller (where the
//! register pointer is written in one transaction and the value read in a second one). Both are
//! provided on top of the `embedded-hal` blocking I²C traits.
use embedded_hal::blocking::i2c;

/// Read and write single bytes at an 8-bit physical register address.
///
/// Bank selection is *not* the responsibility of a transport; see
/// [`BankedRegisters`][crate::bank::BankedRegisters].
pub trait RegisterTransport {
    type Error;

    /// Read the register at `address` in the currently selected bank.
    fn read_byte(&mut self, address: u8) -> Result<u8, Self::Error>;

    /// Write `value` to the register at `address` in the currently selected bank.
    fn write_byte(&mut self, address: u8, value: u8) -> Result<(), Self::Error>;
}

/// Register access using SMBus-style "byte data" transactions.
#[derive(Clone, Debug)]
pub struct SmbusTransport<I2C> {
    bus: I2C,
    address: u8,
}

impl<I2C> SmbusTransport<I2C> {
    pub fn new(bus: I2C, address: u8) -> Self {
        Self { bus, address }
    }

    /// The I²C address of the sensor.
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Give back the underlying bus.
    pub fn release(self) -> I2C {
        self.bus
    }
}

impl<I2C, E> RegisterTransport for SmbusTransport<I2C>
where
    I2C: i2c::WriteRead<Error = E> + i2c::Write<Error = E>,
{
    type Error = E;

    fn read_byte(&mut self, address: u8) -> Result<u8, Self::Error> {
        let mut value = [0u8];
        self.bus.write_read(self.address, &[address], &mut value)?;
        Ok(value[0])
    }

    fn write_byte(&mut self, address: u8, value: u8) -> Result<(), Self::Error> {
        self.bus.write(self.address, &[address, value])
    }
}

/// Register access using separate I²C transactions for setting the register pointer and reading.
#[derive(Clone, Debug)]
pub struct I2cTransport<I2C> {
    bus: I2C,
    address: u8,
}

impl<I2C> I2cTransport<I2C> {
    pub fn new(bus: I2C, address: u8) -> Self {
        Self { bus, address }
    }

    /// The I²C address of the sensor.
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Give back the underlying bus.
    pub fn release(self) -> I2C {
        self.bus
    }
}

impl<I2C, E> RegisterTransport for I2cTransport<I2C>
where
    I2C: i2c::Read<Error = E> + i2c::Write<Error = E>,
{
    type Error = E;

    fn read_byte(&mut self, address: u8) -> Result<u8, Self::Error> {
        self.bus.write(self.address, &[address])?;
        let mut value = [0u8];
        self.bus.read(self.address, &mut value)?;
        Ok(value[0])
    }

    fn write_byte(&mut self, address: u8, value: u8) -> Result<(), Self::Error> {
        self.bus.write(self.address, &[address, value])
    }
}

#[cfg(test)]
mod test {
    use siv12x_test_data::{mock_siv120d_at_address, I2cOperation};

    use super::{I2cTransport, RegisterTransport, SmbusTransport};

    #[test]
    fn smbus_read_write() {
        let mock = mock_siv120d_at_address(0x33);
        let mut transport = SmbusTransport::new(mock.clone(), 0x33);
        assert_eq!(transport.read_byte(0x01).unwrap(), 0x12);
        transport.write_byte(0x10, 0xab).unwrap();
        assert_eq!(mock.register(0x010), 0xab);
        assert_eq!(transport.read_byte(0x10).unwrap(), 0xab);
    }

    #[test]
    fn plain_i2c_read_write() {
        let mock = mock_siv120d_at_address(0x33);
        let mut transport = I2cTransport::new(mock.clone(), 0x33);
        assert_eq!(transport.read_byte(0x02).unwrap(), 0x13);
        transport.write_byte(0x11, 0x5a).unwrap();
        assert_eq!(transport.read_byte(0x11).unwrap(), 0x5a);
        // Setting the pointer is not a register write.
        assert_eq!(
            mock.recent_operations(),
            [
                I2cOperation::Read {
                    bank: 0,
                    offset: 0x02
                },
                I2cOperation::Write {
                    bank: 0,
                    offset: 0x11,
                    value: 0x5a
                },
                I2cOperation::Read {
                    bank: 0,
                    offset: 0x11
                },
            ]
        );
    }

    #[test]
    fn wrong_address() {
        let mock = mock_siv120d_at_address(0x33);
        let mut transport = SmbusTransport::new(mock, 0x34);
        assert!(transport.read_byte(0x01).is_err());
    }
}
