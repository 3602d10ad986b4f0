// SPDX-License-Identifier: Apache-2.0
// Copyright © 2021 Will Ross
//! Image controls, identified the same way V4L2 identifies them.
use core::ops::RangeInclusive;

use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::error::LibraryError;

/// The controls a sensor may support.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, IntoPrimitive, TryFromPrimitive)]
#[repr(u32)]
pub enum ControlId {
    Brightness = 0x0098_0900,
    Contrast = 0x0098_0901,
    Saturation = 0x0098_0902,
    Hue = 0x0098_0903,

    /// The auto-exposure target luminance.
    Exposure = 0x0098_0911,
    AutoGain = 0x0098_0912,
    Gain = 0x0098_0913,
    HorizontalFlip = 0x0098_0914,
    VerticalFlip = 0x0098_0915,

    /// `0` is automatic exposure, anything else is manual.
    ExposureAuto = 0x009A_0901,
}

impl ControlId {
    /// Parse a raw control ID, returning [`LibraryError::UnknownControl`] for anything
    /// unrecognized.
    pub fn from_raw(raw: u32) -> Result<Self, LibraryError> {
        Self::try_from_primitive(raw).map_err(|_| LibraryError::UnknownControl(raw))
    }
}

/// The value of [`ControlId::ExposureAuto`] for automatic exposure.
pub const EXPOSURE_AUTO: i32 = 0;

/// The value of [`ControlId::ExposureAuto`] for manual exposure.
pub const EXPOSURE_MANUAL: i32 = 1;

/// A description of a control's values.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ControlInfo {
    pub id: ControlId,
    pub minimum: i32,
    pub maximum: i32,
    pub step: i32,
    pub default: i32,

    /// The control exists, but does nothing on this sensor.
    pub disabled: bool,

    /// The control currently has no effect (because of the auto-exposure mode).
    pub inactive: bool,
}

impl ControlInfo {
    pub(crate) const fn new(
        id: ControlId,
        minimum: i32,
        maximum: i32,
        step: i32,
        default: i32,
    ) -> Self {
        Self {
            id,
            minimum,
            maximum,
            step,
            default,
            disabled: false,
            inactive: false,
        }
    }

    pub fn range(&self) -> RangeInclusive<i32> {
        self.minimum..=self.maximum
    }
}

/// Check that `value` is within `range`.
pub(crate) fn check_range(
    value: i32,
    range: RangeInclusive<i32>,
    name: &'static str,
) -> Result<i32, LibraryError> {
    if range.contains(&value) {
        Ok(value)
    } else {
        Err(LibraryError::Range(name))
    }
}
