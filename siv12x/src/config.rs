// SPDX-License-Identifier: Apache-2.0
// Copyright © 2021 Will Ross
//! Board-level configuration.
use log::warn;

/// How a sensor is wired up on a particular board.
///
/// Whether the sensor is accessed through SMBus or plain I²C is chosen by the transport type, see
/// [`SmbusTransport`][crate::SmbusTransport] and [`I2cTransport`][crate::I2cTransport].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SensorConfig {
    /// Window sizes narrower than this are not enumerated. 0 disables the filter.
    pub min_width: u16,

    /// Window sizes shorter than this are not enumerated. 0 disables the filter.
    pub min_height: u16,

    /// The external clock speed in MHz, or 0 if unspecified.
    ///
    /// A 48MHz clock is divided by two before use; 24MHz is used as-is.
    pub clock_speed: u32,

    /// Allow direct reads and writes of arbitrary registers.
    pub raw_register_access: bool,
}

impl SensorConfig {
    /// The power of two the master clock is divided by.
    pub fn master_clock_divider(&self) -> u8 {
        match self.clock_speed {
            0 | 24 => 0,
            48 => 1,
            other => {
                warn!(
                    "Unknown clock input setting: {} MHz. Clock divider disabled.",
                    other
                );
                0
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::SensorConfig;

    fn with_clock(clock_speed: u32) -> SensorConfig {
        SensorConfig {
            clock_speed,
            ..SensorConfig::default()
        }
    }

    #[test]
    fn default_is_unfiltered() {
        let config = SensorConfig::default();
        assert_eq!(config.min_width, 0);
        assert_eq!(config.min_height, 0);
        assert!(!config.raw_register_access);
        assert_eq!(config.master_clock_divider(), 0);
    }

    #[test]
    fn clock_dividers() {
        assert_eq!(with_clock(24).master_clock_divider(), 0);
        assert_eq!(with_clock(48).master_clock_divider(), 1);
        assert_eq!(with_clock(27).master_clock_divider(), 0);
    }
}
