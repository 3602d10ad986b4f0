// SPDX-License-Identifier: Apache-2.0
// Copyright © 2021 Will Ross
//! The parts of the driver that differ between sensor models.
use crate::bank::LogicalRegister;
use crate::catalog::Catalog;
use crate::program::RegisterProgram;

/// Locations of the registers the driver uses directly.
///
/// Registers that only some sensors have are optional; the controls using them are reported as
/// unknown on sensors without them.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RegisterMap {
    pub chip_id: LogicalRegister,
    pub chip_info: LogicalRegister,

    /// Writing the start command here starts streaming.
    pub control_a: LogicalRegister,

    /// Flips and pixel clock divider, see [`ControlB`][crate::register::ControlB].
    pub control_b: LogicalRegister,

    /// Upper nibbles of both blanking counts.
    pub blanking_high: LogicalRegister,
    pub hblank: LogicalRegister,
    pub vblank: LogicalRegister,
    pub shutter_step: LogicalRegister,

    /// See [`AeControl`][crate::register::AeControl].
    pub ae_control: LogicalRegister,
    pub y_target_normal: LogicalRegister,
    pub y_target_cwf: LogicalRegister,
    pub y_target_incandescent: LogicalRegister,
    pub analog_gain: Option<LogicalRegister>,

    pub cr_gain: LogicalRegister,
    pub cb_gain: LogicalRegister,
    pub brightness: LogicalRegister,
    pub contrast: Option<LogicalRegister>,
    pub hue_cosine: LogicalRegister,
    pub hue_sine: LogicalRegister,
}

/// Functionality specific to a sensor model.
pub trait SensorModel {
    /// A human readable name for the sensor.
    const NAME: &'static str;

    /// The expected value of the chip ID register.
    const CHIP_ID: u8;

    /// The expected value of the chip information register.
    const CHIP_INFO: u8;

    /// The value written to control register A to start streaming.
    const START_STREAMING: u8;

    const REGISTERS: RegisterMap;

    /// The calibration baseline loaded by `init()`.
    fn default_program() -> RegisterProgram;

    /// The formats, window sizes and frame rates this sensor supports.
    fn catalog() -> &'static Catalog;
}
