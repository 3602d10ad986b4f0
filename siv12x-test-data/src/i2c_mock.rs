// SPDX-License-Identifier: Apache-2.0
// Copyright © 2021 Will Ross
use std::sync::{Arc, Mutex, MutexGuard};

use arrayvec::ArrayVec;
use embedded_hal::blocking::i2c;

use siv12x::siv120d::Siv120d;
use siv12x::siv121c::Siv121c;
use siv12x::{LogicalRegister, SensorModel};

/// The number of register banks the mock has. The SIV120D uses four, the SIV121C five.
pub const BANK_COUNT: usize = 5;

const BANK_SELECT_OFFSET: u8 = 0x00;

// Plenty for any single test.
const MAX_FAILURES: usize = 8;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MockError {
    /// An unknown I2C address was given.
    UnknownI2cAddress(u8),

    /// An attempt was made to select a bank the sensor doesn't have.
    UnknownBank(u8),

    /// The transaction doesn't look like anything the sensor understands.
    ///
    /// This covers:
    /// * Writes of anything other than one byte (setting the register pointer) or two bytes (an
    ///   offset and a value).
    /// * Reads of anything other than a single byte.
    IllegalOperation,

    /// A failure was injected for this logical address.
    InjectedFailure(u16),
}

/// A register access, as seen on the bus.
///
/// Setting the register pointer for a plain I2C read is not recorded, and neither are operations
/// that failed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum I2cOperation {
    /// A write to `offset` while `bank` was selected. Writes to offset 0 are bank selects.
    Write { bank: u8, offset: u8, value: u8 },

    Read { bank: u8, offset: u8 },
}

#[derive(Debug)]
struct MockState {
    banks: [[u8; 256]; BANK_COUNT],
    selected_bank: u8,
    pointer: u8,
    recent_operations: Vec<I2cOperation>,
    failing_writes: ArrayVec<u16, MAX_FAILURES>,
    failing_reads: ArrayVec<u16, MAX_FAILURES>,
    failing_bank_selects: ArrayVec<u8, MAX_FAILURES>,
}

impl MockState {
    fn logical_address(&self, offset: u8) -> u16 {
        LogicalRegister::from_parts(self.selected_bank, offset).as_u16()
    }

    fn read(&mut self, offset: u8) -> Result<u8, MockError> {
        let address = self.logical_address(offset);
        if self.failing_reads.contains(&address) {
            return Err(MockError::InjectedFailure(address));
        }
        let value = if offset == BANK_SELECT_OFFSET {
            self.selected_bank
        } else {
            self.banks[self.selected_bank as usize][offset as usize]
        };
        self.recent_operations.push(I2cOperation::Read {
            bank: self.selected_bank,
            offset,
        });
        Ok(value)
    }

    fn write(&mut self, offset: u8, value: u8) -> Result<(), MockError> {
        let bank = self.selected_bank;
        if offset == BANK_SELECT_OFFSET {
            if self.failing_bank_selects.contains(&value) {
                return Err(MockError::InjectedFailure(self.logical_address(offset)));
            }
            if value as usize >= BANK_COUNT {
                return Err(MockError::UnknownBank(value));
            }
            self.selected_bank = value;
        } else {
            let address = self.logical_address(offset);
            if self.failing_writes.contains(&address) {
                return Err(MockError::InjectedFailure(address));
            }
            self.banks[bank as usize][offset as usize] = value;
        }
        self.recent_operations.push(I2cOperation::Write {
            bank,
            offset,
            value,
        });
        Ok(())
    }
}

/// A simulated SIV12x sensor on an I2C bus.
///
/// Clones share the same simulated sensor, so a clone can be handed to a driver while the test
/// keeps one to inspect and manipulate the registers.
#[derive(Clone, Debug)]
pub struct MockSensorBus {
    i2c_address: u8,
    state: Arc<Mutex<MockState>>,
}

impl MockSensorBus {
    /// Create a mock sensor with every register zeroed and bank 0 selected.
    pub fn new(i2c_address: u8) -> Self {
        Self {
            i2c_address,
            state: Arc::new(Mutex::new(MockState {
                banks: [[0u8; 256]; BANK_COUNT],
                selected_bank: 0,
                pointer: 0,
                recent_operations: Vec::new(),
                failing_writes: ArrayVec::new(),
                failing_reads: ArrayVec::new(),
                failing_bank_selects: ArrayVec::new(),
            })),
        }
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().expect("mock sensor state poisoned")
    }

    fn check_address(&self, i2c_address: u8) -> Result<(), MockError> {
        if i2c_address == self.i2c_address {
            Ok(())
        } else {
            Err(MockError::UnknownI2cAddress(i2c_address))
        }
    }

    /// Peek at a register without going through the bus.
    pub fn register(&self, address: u16) -> u8 {
        let (bank, offset) = LogicalRegister::new(address).decompose();
        self.state().banks[bank as usize][offset as usize]
    }

    /// Change a register without going through the bus.
    pub fn set_register(&self, address: u16, value: u8) {
        let (bank, offset) = LogicalRegister::new(address).decompose();
        self.state().banks[bank as usize][offset as usize] = value;
    }

    /// The bank the simulated sensor has selected.
    pub fn selected_bank(&self) -> u8 {
        self.state().selected_bank
    }

    /// Every successful access since the last clear, oldest first.
    pub fn recent_operations(&self) -> Vec<I2cOperation> {
        self.state().recent_operations.clone()
    }

    pub fn clear_recent_operations(&self) {
        self.state().recent_operations.clear()
    }

    /// The banks selected since the last clear, in order.
    pub fn bank_selects(&self) -> Vec<u8> {
        self.state()
            .recent_operations
            .iter()
            .filter_map(|op| match *op {
                I2cOperation::Write {
                    offset: BANK_SELECT_OFFSET,
                    value,
                    ..
                } => Some(value),
                _ => None,
            })
            .collect()
    }

    /// The register writes (excluding bank selects) since the last clear, as logical addresses
    /// and values.
    pub fn data_writes(&self) -> Vec<(u16, u8)> {
        self.state()
            .recent_operations
            .iter()
            .filter_map(|op| match *op {
                I2cOperation::Write {
                    bank,
                    offset,
                    value,
                } if offset != BANK_SELECT_OFFSET => {
                    Some((LogicalRegister::from_parts(bank, offset).as_u16(), value))
                }
                _ => None,
            })
            .collect()
    }

    /// Make writes to a register fail until [`MockSensorBus::clear_failures`] is called.
    pub fn fail_writes_to(&self, address: u16) {
        self.state().failing_writes.push(address);
    }

    /// Make reads from a register fail until [`MockSensorBus::clear_failures`] is called.
    pub fn fail_reads_from(&self, address: u16) {
        self.state().failing_reads.push(address);
    }

    /// Make selecting a bank fail until [`MockSensorBus::clear_failures`] is called.
    pub fn fail_bank_select(&self, bank: u8) {
        self.state().failing_bank_selects.push(bank);
    }

    pub fn clear_failures(&self) {
        let mut state = self.state();
        state.failing_writes.clear();
        state.failing_reads.clear();
        state.failing_bank_selects.clear();
    }
}

impl i2c::Write for MockSensorBus {
    type Error = MockError;

    fn write(&mut self, i2c_address: u8, bytes: &[u8]) -> Result<(), Self::Error> {
        self.check_address(i2c_address)?;
        let mut state = self.state();
        match *bytes {
            // Setting the register pointer for a following read
            [offset] => {
                state.pointer = offset;
                Ok(())
            }
            [offset, value] => state.write(offset, value),
            _ => Err(MockError::IllegalOperation),
        }
    }
}

impl i2c::Read for MockSensorBus {
    type Error = MockError;

    fn read(&mut self, i2c_address: u8, buffer: &mut [u8]) -> Result<(), Self::Error> {
        self.check_address(i2c_address)?;
        if buffer.len() != 1 {
            return Err(MockError::IllegalOperation);
        }
        let mut state = self.state();
        let pointer = state.pointer;
        buffer[0] = state.read(pointer)?;
        Ok(())
    }
}

impl i2c::WriteRead for MockSensorBus {
    type Error = MockError;

    fn write_read(
        &mut self,
        i2c_address: u8,
        write_buffer: &[u8],
        out_buffer: &mut [u8],
    ) -> Result<(), Self::Error> {
        self.check_address(i2c_address)?;
        // Only single register reads are supported, like an SMBus read byte command.
        match (write_buffer, out_buffer) {
            ([offset], [out]) => {
                let mut state = self.state();
                state.pointer = *offset;
                *out = state.read(*offset)?;
                Ok(())
            }
            _ => Err(MockError::IllegalOperation),
        }
    }
}

fn mock_with_identity<Model: SensorModel>(i2c_address: u8) -> MockSensorBus {
    let mock = MockSensorBus::new(i2c_address);
    mock.set_register(Model::REGISTERS.chip_id.as_u16(), Model::CHIP_ID);
    mock.set_register(Model::REGISTERS.chip_info.as_u16(), Model::CHIP_INFO);
    // Auto-exposure is on out of reset
    mock.set_register(Model::REGISTERS.ae_control.as_u16(), 0x80);
    mock
}

/// A mock SIV120D that has just been powered on.
pub fn mock_siv120d_at_address(i2c_address: u8) -> MockSensorBus {
    mock_with_identity::<Siv120d>(i2c_address)
}

/// A mock SIV121C that has just been powered on.
pub fn mock_siv121c_at_address(i2c_address: u8) -> MockSensorBus {
    mock_with_identity::<Siv121c>(i2c_address)
}
