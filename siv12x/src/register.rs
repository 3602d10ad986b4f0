// SPDX-License-Identifier: Apache-2.0
// Copyright © 2021 Will Ross
//! Bitfield views of registers that are shared between several settings.
//!
//! These types wrap the raw register value, so any bits they don't know about are carried through
//! unchanged when the value is written back.
use core::convert::TryFrom;

use bitvec::prelude::*;
use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::error::LibraryError;
use crate::util::is_bit_set;

/// Trait for common register functionality.
pub trait Register: Copy + From<u8> + Into<u8> {
    /// A bit mask of which bits can be modified by the controller.
    ///
    /// When changing register values on the sensor, the current value should be read, then
    /// bitwise-ANDed with the complement of this mask, then bitwise-ORd with the new value. This
    /// preserves the values of any bits belonging to other settings.
    fn write_mask() -> u8;
}

/// How much the pixel clock is divided down from the master clock.
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum PixelClockDivider {
    /// Full speed pixel clock.
    One = 0,

    /// Half speed.
    Two = 1,

    /// Quarter speed.
    Four = 2,

    /// Eighth speed.
    Eight = 3,
}

impl PixelClockDivider {
    /// The divider for a power-of-two exponent.
    ///
    /// The register field is two bits wide; larger exponents wrap around the same way the sensor
    /// would see them.
    pub fn from_exponent(exponent: u8) -> Self {
        match exponent & 0x03 {
            0 => Self::One,
            1 => Self::Two,
            2 => Self::Four,
            _ => Self::Eight,
        }
    }

    /// The value of this divider as it appears in control register B (bits 2 and 3).
    pub fn register_bits(&self) -> u8 {
        u8::from(*self) << 2
    }
}

/// Control register B: image flips and the pixel clock divider.
///
/// | Bits | Setting |
/// | --- | --- |
/// | 0 | Horizontal flip |
/// | 1 | Vertical flip |
/// | 2-3 | Pixel clock divider |
/// | 4-7 | Other sensor settings, preserved |
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ControlB(u8);

impl ControlB {
    const HFLIP_BIT: usize = 0;
    const VFLIP_BIT: usize = 1;

    pub fn hflip(&self) -> bool {
        is_bit_set(self.0, Self::HFLIP_BIT)
    }

    pub fn set_hflip(&mut self, enabled: bool) {
        self.0.view_bits_mut::<Lsb0>().set(Self::HFLIP_BIT, enabled);
    }

    pub fn vflip(&self) -> bool {
        is_bit_set(self.0, Self::VFLIP_BIT)
    }

    pub fn set_vflip(&mut self, enabled: bool) {
        self.0.view_bits_mut::<Lsb0>().set(Self::VFLIP_BIT, enabled);
    }

    pub fn pixel_clock_divider(&self) -> PixelClockDivider {
        PixelClockDivider::from_exponent(self.0.view_bits::<Lsb0>()[2..4].load_le::<u8>())
    }

    pub fn set_pixel_clock_divider(&mut self, divider: PixelClockDivider) {
        self.0.view_bits_mut::<Lsb0>()[2..4].store_le(u8::from(divider));
    }
}

impl Register for ControlB {
    fn write_mask() -> u8 {
        0x0F
    }
}

impl From<u8> for ControlB {
    fn from(raw: u8) -> Self {
        Self(raw)
    }
}

impl From<ControlB> for u8 {
    fn from(register: ControlB) -> Self {
        register.0
    }
}

/// The auto-exposure control register. Only the enable bit (bit 7) is managed here, the rest holds
/// auto-exposure tuning.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AeControl(u8);

impl AeControl {
    const ENABLE_BIT: usize = 7;

    pub fn enabled(&self) -> bool {
        is_bit_set(self.0, Self::ENABLE_BIT)
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.0.view_bits_mut::<Lsb0>().set(Self::ENABLE_BIT, enabled);
    }
}

impl Register for AeControl {
    fn write_mask() -> u8 {
        0x80
    }
}

impl From<u8> for AeControl {
    fn from(raw: u8) -> Self {
        Self(raw)
    }
}

impl From<AeControl> for u8 {
    fn from(register: AeControl) -> Self {
        register.0
    }
}

/// The contrast gain register: a six bit gain (bits 0-5) and an enable flag (bit 7).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ContrastGain {
    pub(crate) gain: u8,
    pub(crate) enabled: bool,
}

impl ContrastGain {
    pub const MAX_GAIN: u8 = 0x3F;

    /// An enabled contrast gain. Returns an error if `gain` is larger than [`Self::MAX_GAIN`].
    pub fn enabled_with_gain(gain: i32) -> Result<Self, LibraryError> {
        match u8::try_from(gain) {
            Ok(gain) if gain <= Self::MAX_GAIN => Ok(Self {
                gain,
                enabled: true,
            }),
            _ => Err(LibraryError::Range("contrast")),
        }
    }

    pub fn gain(&self) -> u8 {
        self.gain
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }
}

impl Register for ContrastGain {
    fn write_mask() -> u8 {
        0xBF
    }
}

impl From<u8> for ContrastGain {
    fn from(raw: u8) -> Self {
        Self {
            gain: raw & Self::MAX_GAIN,
            enabled: is_bit_set(raw, 7),
        }
    }
}

impl From<ContrastGain> for u8 {
    fn from(register: ContrastGain) -> Self {
        (register.enabled as u8) << 7 | (register.gain & ContrastGain::MAX_GAIN)
    }
}

/// A brightness offset, stored on the sensor as sign-magnitude (bit 7 is the sign).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Brightness(i8);

impl Brightness {
    pub const MIN: i32 = -127;
    pub const MAX: i32 = 127;

    pub fn value(&self) -> i32 {
        self.0 as i32
    }
}

impl TryFrom<i32> for Brightness {
    type Error = LibraryError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            // The range check keeps this within i8
            Ok(Self(value as i8))
        } else {
            Err(LibraryError::Range("brightness"))
        }
    }
}

impl From<u8> for Brightness {
    fn from(raw: u8) -> Self {
        let magnitude = (raw & 0x7F) as i8;
        if is_bit_set(raw, 7) {
            Self(-magnitude)
        } else {
            Self(magnitude)
        }
    }
}

impl From<Brightness> for u8 {
    fn from(brightness: Brightness) -> Self {
        let magnitude = brightness.0.unsigned_abs();
        if brightness.0 < 0 {
            magnitude | 0x80
        } else {
            magnitude
        }
    }
}

/// Pack the upper nibbles of the horizontal and vertical blanking counts into their shared
/// register.
///
/// Bits 8-11 of the horizontal blanking go in the upper nibble, bits 8-11 of the vertical
/// blanking in the lower nibble.
pub fn blanking_high(hblank: u16, vblank: u16) -> u8 {
    (((hblank & 0xF00) >> 4) | ((vblank & 0xF00) >> 8)) as u8
}

#[cfg(test)]
mod test {
    use core::convert::TryFrom;

    use super::*;

    macro_rules! assert_register_field {
        ($register:ty, $value:literal, $field:ident, $expected:expr) => {
            // backdoor type annotation for the macro
            let value: u8 = $value;
            let packed: $register = From::from(value);
            assert_eq!(packed.$field(), $expected);
            let unpacked: u8 = packed.into();
            assert_eq!(unpacked, value);
        };
    }

    #[test]
    fn control_b_flips() {
        assert_register_field!(ControlB, 0x01, hflip, true);
        assert_register_field!(ControlB, 0x02, hflip, false);
        assert_register_field!(ControlB, 0x02, vflip, true);
        assert_register_field!(ControlB, 0xFD, vflip, false);
    }

    #[test]
    fn control_b_pixel_clock() {
        assert_register_field!(ControlB, 0x00, pixel_clock_divider, PixelClockDivider::One);
        assert_register_field!(ControlB, 0x04, pixel_clock_divider, PixelClockDivider::Two);
        assert_register_field!(ControlB, 0x08, pixel_clock_divider, PixelClockDivider::Four);
        assert_register_field!(ControlB, 0xFF, pixel_clock_divider, PixelClockDivider::Eight);
    }

    #[test]
    fn control_b_preserves_other_bits() {
        let mut register = ControlB::from(0xA0);
        register.set_hflip(true);
        register.set_vflip(true);
        register.set_pixel_clock_divider(PixelClockDivider::Four);
        assert_eq!(u8::from(register), 0xAB);
        register.set_hflip(false);
        register.set_pixel_clock_divider(PixelClockDivider::One);
        assert_eq!(u8::from(register), 0xA2);
        // Nothing outside the write mask changed
        assert_eq!(u8::from(register) & !ControlB::write_mask(), 0xA0);
    }

    #[test]
    fn pixel_clock_from_exponent() {
        assert_eq!(PixelClockDivider::from_exponent(0), PixelClockDivider::One);
        assert_eq!(PixelClockDivider::from_exponent(1), PixelClockDivider::Two);
        assert_eq!(PixelClockDivider::from_exponent(3), PixelClockDivider::Eight);
        // Wraps, like the two bit field does
        assert_eq!(PixelClockDivider::from_exponent(4), PixelClockDivider::One);
        assert_eq!(PixelClockDivider::Four.register_bits(), 0x08);
    }

    #[test]
    fn pixel_clock_from_u8() {
        assert_eq!(
            PixelClockDivider::try_from(2u8).unwrap(),
            PixelClockDivider::Four
        );
        assert!(PixelClockDivider::try_from(4u8).is_err());
    }

    #[test]
    fn ae_control_enable() {
        assert_register_field!(AeControl, 0x80, enabled, true);
        assert_register_field!(AeControl, 0x7F, enabled, false);
        let mut register = AeControl::from(0x35);
        register.set_enabled(true);
        assert_eq!(u8::from(register), 0xB5);
        register.set_enabled(false);
        assert_eq!(u8::from(register), 0x35);
    }

    #[test]
    fn contrast_gain() {
        assert_register_field!(ContrastGain, 0x90, gain, 0x10);
        assert_register_field!(ContrastGain, 0x90, enabled, true);
        assert_register_field!(ContrastGain, 0x3F, enabled, false);
        assert_eq!(u8::from(ContrastGain::enabled_with_gain(16).unwrap()), 0x90);
        assert_eq!(u8::from(ContrastGain::enabled_with_gain(0).unwrap()), 0x80);
        assert!(ContrastGain::enabled_with_gain(64).is_err());
        assert!(ContrastGain::enabled_with_gain(-1).is_err());
    }

    #[test]
    fn brightness_sign_magnitude() {
        assert_register_field!(Brightness, 0x00, value, 0);
        assert_register_field!(Brightness, 0x7F, value, 127);
        assert_register_field!(Brightness, 0x81, value, -1);
        assert_register_field!(Brightness, 0xFF, value, -127);
        assert_eq!(u8::from(Brightness::try_from(-20).unwrap()), 0x94);
        assert_eq!(u8::from(Brightness::try_from(20).unwrap()), 0x14);
    }

    #[test]
    fn brightness_range() {
        assert!(Brightness::try_from(-128).is_err());
        assert!(Brightness::try_from(128).is_err());
        assert_eq!(
            Brightness::try_from(-128).unwrap_err(),
            LibraryError::Range("brightness")
        );
        assert!(Brightness::try_from(-127).is_ok());
    }

    #[test]
    fn blanking_nibbles() {
        assert_eq!(blanking_high(0x001, 0x001), 0x00);
        assert_eq!(blanking_high(0x165, 0x203), 0x12);
        assert_eq!(blanking_high(0xF00, 0x000), 0xF0);
        // Only bits 8-11 are used
        assert_eq!(blanking_high(0x1000, 0x1000), 0x00);
    }
}
