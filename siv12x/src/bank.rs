// SPDX-License-Identifier: Apache-2.0
// Copyright © 2021 Will Ross
//! Banked access to the sensor register space.
//!
//! Each sensor register is identified by a 16-bit [`LogicalRegister`]: the upper byte selects a
//! bank, and the lower byte is the physical address within that bank. The bank select register
//! lives at physical address `0x00` and is reachable from every bank.
use core::fmt;

use log::trace;
use spin::Mutex;

use crate::error::Error;
use crate::program::RegisterValue;
use crate::transport::RegisterTransport;

/// The physical address of the bank select register.
pub const BANK_SELECT_ADDRESS: u8 = 0x00;

/// The bank cache value meaning "unknown".
///
/// No sensor has this many banks, so the first access after invalidation always selects a bank.
pub const UNKNOWN_BANK: u8 = 0xFF;

/// A 16-bit register address, with the bank in the upper byte.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct LogicalRegister(u16);

impl LogicalRegister {
    pub const fn new(address: u16) -> Self {
        Self(address)
    }

    /// Create a logical register from a bank and an offset within that bank.
    pub const fn from_parts(bank: u8, offset: u8) -> Self {
        Self((bank as u16) << 8 | offset as u16)
    }

    /// The bank this register is in.
    pub const fn bank(&self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// The physical address of this register within its bank.
    pub const fn offset(&self) -> u8 {
        (self.0 & 0xFF) as u8
    }

    /// Split into `(bank, offset)`.
    pub const fn decompose(&self) -> (u8, u8) {
        (self.bank(), self.offset())
    }

    pub const fn as_u16(&self) -> u16 {
        self.0
    }
}

impl From<u16> for LogicalRegister {
    fn from(raw: u16) -> Self {
        Self(raw)
    }
}

impl From<LogicalRegister> for u16 {
    fn from(register: LogicalRegister) -> Self {
        register.0
    }
}

impl fmt::Display for LogicalRegister {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#05x}", self.0)
    }
}

struct BankState<T> {
    transport: T,
    current_bank: u8,
}

impl<T> BankState<T>
where
    T: RegisterTransport,
{
    /// Make sure `bank` is selected on the device.
    ///
    /// The cached bank is only updated once the bank select write has succeeded, so a failed
    /// switch is retried on the next access.
    fn select(&mut self, bank: u8) -> Result<(), T::Error> {
        if bank != self.current_bank {
            trace!("Selecting register bank {}", bank);
            self.transport.write_byte(BANK_SELECT_ADDRESS, bank)?;
            self.current_bank = bank;
        }
        Ok(())
    }

    fn read(&mut self, register: LogicalRegister) -> Result<u8, T::Error> {
        let (bank, offset) = register.decompose();
        self.select(bank)?;
        self.transport.read_byte(offset)
    }

    fn write(&mut self, register: LogicalRegister, value: u8) -> Result<(), T::Error> {
        let (bank, offset) = register.decompose();
        self.select(bank)?;
        self.transport.write_byte(offset, value)
    }
}

/// Serialized access to the banked register space of one sensor.
///
/// The transport and the cached bank number are kept behind a single lock, held for the whole
/// select-then-access sequence of each operation. This keeps another thread from switching banks
/// between a bank select and the access it was made for.
pub struct BankedRegisters<T> {
    state: Mutex<BankState<T>>,
}

impl<T> BankedRegisters<T>
where
    T: RegisterTransport,
{
    pub fn new(transport: T) -> Self {
        Self {
            state: Mutex::new(BankState {
                transport,
                current_bank: UNKNOWN_BANK,
            }),
        }
    }

    /// Read a single register.
    pub fn read(&self, register: LogicalRegister) -> Result<u8, Error<T>> {
        self.state
            .lock()
            .read(register)
            .map_err(Error::TransportError)
    }

    /// Write a single register.
    pub fn write(&self, register: LogicalRegister, value: u8) -> Result<(), Error<T>> {
        self.state
            .lock()
            .write(register, value)
            .map_err(Error::TransportError)
    }

    /// Read a register, transform its value, and write the result back.
    ///
    /// The lock is held across the read and the write. The written value is returned.
    pub fn modify<F>(&self, register: LogicalRegister, f: F) -> Result<u8, Error<T>>
    where
        F: FnOnce(u8) -> u8,
    {
        let mut state = self.state.lock();
        let current = state.read(register).map_err(Error::TransportError)?;
        let updated = f(current);
        state
            .write(register, updated)
            .map_err(Error::TransportError)?;
        Ok(updated)
    }

    /// Write a sequence of registers in order.
    ///
    /// Writing stops at the first failure, and that error is returned. Registers written before
    /// the failure keep their new values.
    pub fn write_array(&self, values: &[RegisterValue]) -> Result<(), Error<T>> {
        // Hold the lock for the whole sequence so the program isn't interleaved with other
        // accesses.
        let mut state = self.state.lock();
        values
            .iter()
            .try_for_each(|entry| state.write(entry.register, entry.value))
            .map_err(Error::TransportError)
    }

    /// Forget which bank is selected, forcing a bank select on the next access.
    pub fn invalidate(&self) {
        self.state.lock().current_bank = UNKNOWN_BANK;
    }

    /// The bank the device is believed to have selected, or [`UNKNOWN_BANK`].
    pub fn current_bank(&self) -> u8 {
        self.state.lock().current_bank
    }

    /// Give back the transport.
    pub fn release(self) -> T {
        self.state.into_inner().transport
    }
}

impl<T> fmt::Debug for BankedRegisters<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BankedRegisters").finish_non_exhaustive()
    }
}
