// SPDX-License-Identifier: Apache-2.0
// Copyright © 2021 Will Ross
//! Register programs: fixed sequences of register writes.
use core::ops::Deref;

use crate::bank::{BankedRegisters, LogicalRegister};
use crate::error::Error;
use crate::transport::RegisterTransport;

/// A single register write.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RegisterValue {
    pub register: LogicalRegister,
    pub value: u8,
}

impl RegisterValue {
    pub const fn new(register: u16, value: u8) -> Self {
        Self {
            register: LogicalRegister::new(register),
            value,
        }
    }
}

/// An immutable, ordered sequence of register writes.
///
/// Programs are explicitly sized, so any logical address (including `0xFFFF`) can appear in one.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RegisterProgram(&'static [RegisterValue]);

impl RegisterProgram {
    /// An empty program.
    pub const EMPTY: RegisterProgram = RegisterProgram(&[]);

    pub const fn new(values: &'static [RegisterValue]) -> Self {
        Self(values)
    }

    pub const fn len(&self) -> usize {
        self.0.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Apply this program to a sensor, in order.
    ///
    /// Application stops at the first error, which is returned. There is no rollback, registers
    /// written before the failure keep their new values.
    pub fn apply<T>(&self, registers: &BankedRegisters<T>) -> Result<(), Error<T>>
    where
        T: RegisterTransport,
    {
        registers.write_array(self.0)
    }
}

impl Deref for RegisterProgram {
    type Target = [RegisterValue];

    fn deref(&self) -> &Self::Target {
        self.0
    }
}

impl<'a> IntoIterator for &'a RegisterProgram {
    type Item = &'a RegisterValue;
    type IntoIter = core::slice::Iter<'a, RegisterValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod test {
    use siv12x_test_data::mock_siv120d_at_address;

    use crate::bank::{BankedRegisters, LogicalRegister};
    use crate::transport::SmbusTransport;

    use super::{RegisterProgram, RegisterValue};

    static HIGH_ADDRESS_VALUES: [RegisterValue; 3] = [
        RegisterValue::new(0x0312, 0x3d),
        RegisterValue::new(0x00ff, 0xff),
        RegisterValue::new(0x0320, 0x01),
    ];

    #[test]
    fn sentinel_like_entries_are_written() {
        // 0xff/0xff is an ordinary entry, not an end marker.
        let mock = mock_siv120d_at_address(0x33);
        let registers = BankedRegisters::new(SmbusTransport::new(mock.clone(), 0x33));
        let program = RegisterProgram::new(&HIGH_ADDRESS_VALUES);
        assert_eq!(program.len(), 3);
        program.apply(&registers).unwrap();
        assert_eq!(
            mock.data_writes(),
            [(0x0312, 0x3d), (0x00ff, 0xff), (0x0320, 0x01)]
        );
    }

    #[test]
    fn empty_program() {
        let mock = mock_siv120d_at_address(0x33);
        let registers = BankedRegisters::new(SmbusTransport::new(mock.clone(), 0x33));
        assert!(RegisterProgram::EMPTY.is_empty());
        RegisterProgram::EMPTY.apply(&registers).unwrap();
        assert!(mock.recent_operations().is_empty());
    }

    #[test]
    fn iterate_entries() {
        let program = RegisterProgram::new(&HIGH_ADDRESS_VALUES);
        let registers: [LogicalRegister; 3] = [
            LogicalRegister::new(0x0312),
            LogicalRegister::new(0x00ff),
            LogicalRegister::new(0x0320),
        ];
        assert!(program
            .into_iter()
            .zip(registers.iter())
            .all(|(entry, register)| entry.register == *register));
    }
}
