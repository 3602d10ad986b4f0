// SPDX-License-Identifier: Apache-2.0
// Copyright © 2021 Will Ross
use core::convert::TryFrom;
use core::fmt;
use core::marker::PhantomData;

use log::{debug, info};
use paste::paste;

use crate::bank::{BankedRegisters, LogicalRegister};
use crate::catalog::{FormatDescriptor, FrameFormat, FrameRatePreset, Negotiated, WindowSize};
use crate::config::SensorConfig;
use crate::control::{check_range, ControlId, ControlInfo, EXPOSURE_AUTO, EXPOSURE_MANUAL};
use crate::error::{Error, LibraryError};
use crate::model::SensorModel;
use crate::program::RegisterValue;
use crate::register::{AeControl, Brightness, ContrastGain, ControlB, PixelClockDivider, Register};
use crate::transport::RegisterTransport;
use crate::trig::HueCoefficients;
use crate::util::masked_update;

/// Define getters and setters for the flip flags in control register B.
macro_rules! flip_control {
    { $field:ident, $getter_doc:literal, $setter_doc:literal } => {
    paste! {
        #[doc = $getter_doc]
        pub fn $field(&self) -> Result<bool, Error<T>> {
            let register: ControlB = self.read_register(Model::REGISTERS.control_b)?;
            Ok(register.$field())
        }

        #[doc = $setter_doc]
        pub fn [< set_ $field >](&mut self, enabled: bool) -> Result<(), Error<T>> {
            self.modify_register(Model::REGISTERS.control_b, |register: &mut ControlB| {
                register.[< set_ $field >](enabled)
            })
        }
    }};
}

/// Where a sensor is in its lifecycle.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DriverState {
    /// The driver has been created, but nothing is known about the device.
    Uninitialized,

    /// The identification registers matched.
    Detected,

    /// The sensor has been configured and told to start streaming.
    Streaming,
}

/// The shared driver for the SIV120D and SIV121C sensors.
///
/// The driver keeps track of the negotiated format, window size and frame rate, along with the
/// image settings that can't be read back from the sensor (saturation, hue and the exposure
/// target). Settings that live in registers shared with other settings are changed with a masked
/// read-modify-write so the other settings are preserved.
pub struct SensorDriver<Model, T> {
    /// The sensor's registers.
    registers: BankedRegisters<T>,

    config: SensorConfig,

    /// Power of two the master clock is divided by, before any frame rate specific division.
    master_clock_divider: u8,

    format: &'static FormatDescriptor,

    window: &'static WindowSize,

    frame_rate: &'static FrameRatePreset,

    /// Color saturation (0-63), written to both chroma gain registers.
    saturation: u8,

    /// Hue rotation in degrees. The sensor can't report it, so `init()` writes it back.
    hue: i32,

    /// Cached state of the auto-exposure enable bit.
    ae_enabled: bool,

    /// Target luminance for auto-exposure.
    ae_target: u8,

    state: DriverState,

    _model: PhantomData<Model>,
}

impl<Model, T> fmt::Debug for SensorDriver<Model, T>
where
    Model: SensorModel,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SensorDriver")
            .field("model", &Model::NAME)
            .field("state", &self.state)
            .field("format", &self.format.code)
            .field("width", &self.window.width)
            .field("height", &self.window.height)
            .field("fps", &self.frame_rate.fps)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<Model, T> SensorDriver<Model, T>
where
    Model: SensorModel,
    T: RegisterTransport,
{
    /// Create a new `SensorDriver`, checking that the expected sensor is present.
    ///
    /// If the identification registers don't match, [`LibraryError::NotThisDevice`] is returned.
    /// The transport is dropped in that case; use [`SensorDriver::new_unprobed`] and
    /// [`SensorDriver::detect`] to keep it around for probing other addresses.
    pub fn new(transport: T, config: SensorConfig) -> Result<Self, Error<T>> {
        let mut driver = Self::new_unprobed(transport, config);
        match driver.detect() {
            Ok(()) => {
                info!("{} chip found", Model::NAME);
                Ok(driver)
            }
            Err(err) => {
                debug!("Chip found is not an {}", Model::NAME);
                Err(err)
            }
        }
    }

    /// Create a `SensorDriver` without accessing the sensor.
    pub fn new_unprobed(transport: T, config: SensorConfig) -> Self {
        let catalog = Model::catalog();
        Self {
            registers: BankedRegisters::new(transport),
            master_clock_divider: config.master_clock_divider(),
            config,
            format: catalog.default_format(),
            window: catalog.default_window_size(),
            frame_rate: catalog.fastest_frame_rate(),
            // Replaced with the sensor's values by detect()
            saturation: 32,
            hue: 0,
            ae_enabled: true,
            ae_target: 0x80,
            state: DriverState::Uninitialized,
            _model: PhantomData,
        }
    }

    /// Give back the transport.
    pub fn release(self) -> T {
        self.registers.release()
    }

    pub fn model_name(&self) -> &'static str {
        Model::NAME
    }

    pub fn config(&self) -> &SensorConfig {
        &self.config
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    fn read_register<R: Register>(&self, address: LogicalRegister) -> Result<R, Error<T>> {
        self.registers.read(address).map(R::from)
    }

    /// Update the fields of a register, leaving any bits outside of its write mask untouched.
    fn modify_register<R, F>(&self, address: LogicalRegister, f: F) -> Result<(), Error<T>>
    where
        R: Register,
        F: FnOnce(&mut R),
    {
        self.registers.modify(address, |current| {
            let mut register = R::from(current);
            f(&mut register);
            masked_update(current, R::write_mask(), register.into())
        })?;
        Ok(())
    }

    /// Reload the cached saturation, exposure target and auto-exposure mode from the sensor.
    fn sync_cached_controls(&mut self) -> Result<(), Error<T>> {
        let map = &Model::REGISTERS;
        let saturation = self.registers.read(map.cr_gain)?;
        let ae_target = self.registers.read(map.y_target_normal)?;
        let ae_control: AeControl = self.read_register(map.ae_control)?;
        self.saturation = saturation;
        self.ae_target = ae_target;
        self.ae_enabled = ae_control.enabled();
        Ok(())
    }

    fn write_hue(&self, degrees: i32) -> Result<(), Error<T>> {
        let coefficients = HueCoefficients::from_degrees(degrees);
        let map = &Model::REGISTERS;
        self.registers.write_array(&[
            RegisterValue {
                register: map.hue_cosine,
                value: coefficients.cosine,
            },
            RegisterValue {
                register: map.hue_sine,
                value: coefficients.sine,
            },
        ])
    }

    /// Check the identification registers, then read the current control state.
    pub fn detect(&mut self) -> Result<(), Error<T>> {
        let map = &Model::REGISTERS;
        let expected_values = [
            (map.chip_id, Model::CHIP_ID),
            (map.chip_info, Model::CHIP_INFO),
        ];
        for (register, expected) in expected_values {
            let found = self.registers.read(register)?;
            if found != expected {
                return Err(LibraryError::NotThisDevice { expected, found }.into());
            }
        }
        self.sync_cached_controls()?;
        if self.state == DriverState::Uninitialized {
            self.state = DriverState::Detected;
        }
        Ok(())
    }

    /// Load the calibration baseline, restore the current mode, and start streaming.
    ///
    /// The baseline replaces saturation, the exposure target and the auto-exposure mode, and the
    /// driver picks those values up from the sensor afterwards. The hue is written back.
    ///
    /// Any failure stops initialization where it is, without undoing the writes already made.
    /// Calling `init()` again will retry the whole sequence.
    pub fn init(&mut self) -> Result<(), Error<T>> {
        info!("Initializing {}", Model::NAME);
        // The sensor may have been reset behind our back, so don't trust the cached bank.
        self.registers.invalidate();
        Model::default_program().apply(&self.registers)?;
        self.write_hue(self.hue)?;
        self.sync_cached_controls()?;
        self.apply_frame_rate(self.frame_rate)?;
        self.format.program.apply(&self.registers)?;
        self.window.program.apply(&self.registers)?;
        self.registers.write(Model::REGISTERS.control_a, Model::START_STREAMING)?;
        self.state = DriverState::Streaming;
        Ok(())
    }

    /// Enumerate the supported formats.
    pub fn enumerate_format(
        &self,
        index: usize,
    ) -> Result<&'static FormatDescriptor, LibraryError> {
        Model::catalog()
            .formats()
            .get(index)
            .ok_or(LibraryError::OutOfRange(index))
    }

    /// Negotiate a format without changing anything.
    pub fn try_format(&self, requested: &FrameFormat) -> FrameFormat {
        Model::catalog().try_format(requested).frame_format()
    }

    /// Negotiate and apply a format, returning what was actually configured.
    ///
    /// The current format is only updated if every register write succeeded.
    pub fn set_format(&mut self, requested: &FrameFormat) -> Result<FrameFormat, Error<T>> {
        let negotiated = Model::catalog().try_format(requested);
        negotiated.format.program.apply(&self.registers)?;
        negotiated.window.program.apply(&self.registers)?;
        self.format = negotiated.format;
        self.window = negotiated.window;
        let frame_format = negotiated.frame_format();
        debug!(
            "Format set to {:#06x} at {}x{}",
            frame_format.code, frame_format.width, frame_format.height
        );
        Ok(frame_format)
    }

    /// The current format.
    pub fn format(&self) -> FrameFormat {
        Negotiated {
            format: self.format,
            window: self.window,
        }
        .frame_format()
    }

    /// Write the pixel clock divider and blanking registers for a preset.
    fn apply_frame_rate(&self, preset: &FrameRatePreset) -> Result<(), Error<T>> {
        let divider = PixelClockDivider::from_exponent(
            self.master_clock_divider.wrapping_add(preset.clock_divider),
        );
        self.modify_register(Model::REGISTERS.control_b, |register: &mut ControlB| {
            register.set_pixel_clock_divider(divider)
        })?;
        self.registers
            .write_array(&preset.timing_program(&Model::REGISTERS))
    }

    /// Change the frame rate to the fastest preset not exceeding `fps`.
    ///
    /// The frame rate can only be changed at window sizes supporting it; others return
    /// [`LibraryError::UnsupportedSize`]. A request slower than every preset returns
    /// [`LibraryError::Range`].
    pub fn set_frame_rate(&mut self, fps: u32) -> Result<(), Error<T>> {
        if !self.window.variable_frame_rate {
            return Err(LibraryError::UnsupportedSize {
                width: self.window.width,
                height: self.window.height,
            }
            .into());
        }
        let preset = Model::catalog()
            .select_frame_rate(fps)
            .ok_or(LibraryError::Range("frame rate"))?;
        self.apply_frame_rate(preset)?;
        debug!("Frame rate set to {} fps", preset.fps);
        self.frame_rate = preset;
        Ok(())
    }

    /// The current frame rate, in frames per second.
    pub fn frame_rate(&self) -> u32 {
        self.frame_rate.fps
    }

    /// Set the frame rate from a time per frame, in seconds (`numerator / denominator`).
    ///
    /// A zero numerator or denominator selects the fastest frame rate.
    pub fn set_frame_interval(&mut self, numerator: u32, denominator: u32) -> Result<(), Error<T>> {
        let fps = if numerator == 0 || denominator == 0 {
            Model::catalog().fastest_frame_rate().fps
        } else {
            denominator / numerator
        };
        self.set_frame_rate(fps)
    }

    /// The current time per frame, as `(numerator, denominator)` seconds.
    pub fn frame_interval(&self) -> (u32, u32) {
        (1, self.frame_rate.fps)
    }

    /// Enumerate the supported frame rates, fastest first.
    pub fn enumerate_frame_interval(&self, index: usize) -> Result<u32, LibraryError> {
        Model::catalog()
            .frame_rates()
            .get(index)
            .map(|preset| preset.fps)
            .ok_or(LibraryError::OutOfRange(index))
    }

    /// Enumerate the supported frame sizes, skipping those below the configured minimums.
    pub fn enumerate_frame_size(&self, index: usize) -> Result<(u16, u16), LibraryError> {
        Model::catalog()
            .frame_size(index, self.config.min_width, self.config.min_height)
            .map(|size| (size.width, size.height))
            .ok_or(LibraryError::OutOfRange(index))
    }

    /// The color saturation.
    pub fn saturation(&self) -> u8 {
        self.saturation
    }

    /// Set the color saturation (0-63).
    pub fn set_saturation(&mut self, value: i32) -> Result<(), Error<T>> {
        let value = check_range(value, 0..=63, "saturation")? as u8;
        let map = &Model::REGISTERS;
        self.registers.write_array(&[
            RegisterValue {
                register: map.cr_gain,
                value,
            },
            RegisterValue {
                register: map.cb_gain,
                value,
            },
        ])?;
        self.saturation = value;
        Ok(())
    }

    /// The hue rotation, in degrees.
    pub fn hue(&self) -> i32 {
        self.hue
    }

    /// Set the hue rotation in degrees (-180 to 180). The rotation is applied in 5° steps.
    pub fn set_hue(&mut self, degrees: i32) -> Result<(), Error<T>> {
        let degrees = check_range(degrees, -180..=180, "hue")?;
        self.write_hue(degrees)?;
        self.hue = degrees;
        Ok(())
    }

    pub fn brightness(&self) -> Result<i32, Error<T>> {
        let raw = self.registers.read(Model::REGISTERS.brightness)?;
        Ok(Brightness::from(raw).value())
    }

    /// Set the brightness offset (-127 to 127).
    pub fn set_brightness(&mut self, value: i32) -> Result<(), Error<T>> {
        let brightness = Brightness::try_from(value)?;
        self.registers.write(Model::REGISTERS.brightness, brightness.into())
    }

    fn contrast_register() -> Result<LogicalRegister, LibraryError> {
        Model::REGISTERS
            .contrast
            .ok_or_else(|| LibraryError::UnknownControl(ControlId::Contrast.into()))
    }

    pub fn contrast(&self) -> Result<u8, Error<T>> {
        let register: ContrastGain = self.read_register(Self::contrast_register()?)?;
        Ok(register.gain())
    }

    /// Set the contrast gain (0-63), enabling contrast adjustment.
    pub fn set_contrast(&mut self, value: i32) -> Result<(), Error<T>> {
        let register = Self::contrast_register()?;
        let contrast = ContrastGain::enabled_with_gain(value)?;
        self.modify_register(register, |current: &mut ContrastGain| *current = contrast)
    }

    flip_control! {
        hflip,
        "Whether the image is mirrored horizontally.",
        "Mirror the image horizontally."
    }

    flip_control! {
        vflip,
        "Whether the image is flipped vertically.",
        "Flip the image vertically."
    }

    fn gain_register() -> Result<LogicalRegister, LibraryError> {
        Model::REGISTERS
            .analog_gain
            .ok_or_else(|| LibraryError::UnknownControl(ControlId::Gain.into()))
    }

    pub fn gain(&self) -> Result<u8, Error<T>> {
        self.registers.read(Self::gain_register()?)
    }

    /// Set the analog gain (0-0x9F). Only allowed while auto-exposure is disabled.
    pub fn set_gain(&mut self, value: i32) -> Result<(), Error<T>> {
        let register = Self::gain_register()?;
        if self.ae_enabled {
            return Err(LibraryError::Busy("gain is controlled by auto-exposure").into());
        }
        let value = check_range(value, 0..=0x9F, "gain")? as u8;
        self.registers.write(register, value)
    }

    /// The auto-exposure target luminance.
    pub fn exposure(&self) -> u8 {
        self.ae_target
    }

    /// Set the auto-exposure target luminance (0-0xFF). Only allowed while auto-exposure is
    /// enabled.
    ///
    /// The sensor has separate targets for each illuminant type; they are all set to `value`.
    pub fn set_exposure(&mut self, value: i32) -> Result<(), Error<T>> {
        if !self.ae_enabled {
            return Err(LibraryError::Busy("exposure target requires auto-exposure").into());
        }
        let value = check_range(value, 0..=0xFF, "exposure")? as u8;
        let map = &Model::REGISTERS;
        self.registers.write_array(&[
            RegisterValue {
                register: map.y_target_normal,
                value,
            },
            RegisterValue {
                register: map.y_target_cwf,
                value,
            },
            RegisterValue {
                register: map.y_target_incandescent,
                value,
            },
        ])?;
        self.ae_target = value;
        Ok(())
    }

    /// Whether auto-exposure is enabled, as read from the sensor.
    pub fn auto_exposure(&self) -> Result<bool, Error<T>> {
        let register: AeControl = self.read_register(Model::REGISTERS.ae_control)?;
        Ok(register.enabled())
    }

    pub fn set_auto_exposure(&mut self, enabled: bool) -> Result<(), Error<T>> {
        self.modify_register(Model::REGISTERS.ae_control, |register: &mut AeControl| {
            register.set_enabled(enabled)
        })?;
        self.ae_enabled = enabled;
        Ok(())
    }

    /// Read a control.
    pub fn get_control(&self, id: ControlId) -> Result<i32, Error<T>> {
        let value = match id {
            ControlId::Brightness => self.brightness()?,
            ControlId::Contrast => self.contrast()? as i32,
            ControlId::Saturation => self.saturation() as i32,
            ControlId::Hue => self.hue(),
            ControlId::Exposure => self.exposure() as i32,
            // Gain is handled by auto-exposure
            ControlId::AutoGain => 0,
            ControlId::Gain => self.gain()? as i32,
            ControlId::HorizontalFlip => self.hflip()? as i32,
            ControlId::VerticalFlip => self.vflip()? as i32,
            ControlId::ExposureAuto => {
                if self.auto_exposure()? {
                    EXPOSURE_AUTO
                } else {
                    EXPOSURE_MANUAL
                }
            }
        };
        Ok(value)
    }

    /// Change a control.
    ///
    /// Out of range values are rejected before anything is written.
    pub fn set_control(&mut self, id: ControlId, value: i32) -> Result<(), Error<T>> {
        match id {
            ControlId::Brightness => self.set_brightness(value),
            ControlId::Contrast => self.set_contrast(value),
            ControlId::Saturation => self.set_saturation(value),
            ControlId::Hue => self.set_hue(value),
            ControlId::Exposure => self.set_exposure(value),
            ControlId::AutoGain => Ok(()),
            ControlId::Gain => self.set_gain(value),
            ControlId::HorizontalFlip => self.set_hflip(value != 0),
            ControlId::VerticalFlip => self.set_vflip(value != 0),
            ControlId::ExposureAuto => self.set_auto_exposure(value == EXPOSURE_AUTO),
        }
    }

    /// Describe a control's range and default.
    pub fn query_control(&self, id: ControlId) -> Result<ControlInfo, LibraryError> {
        let info = match id {
            ControlId::Brightness => ControlInfo::new(id, Brightness::MIN, Brightness::MAX, 1, 0),
            ControlId::Contrast => {
                Self::contrast_register()?;
                ControlInfo::new(id, 0, ContrastGain::MAX_GAIN as i32, 1, 16)
            }
            ControlId::HorizontalFlip | ControlId::VerticalFlip => ControlInfo::new(id, 0, 1, 1, 0),
            ControlId::Saturation => ControlInfo::new(id, 0, 63, 1, 32),
            ControlId::Hue => ControlInfo::new(id, -180, 180, 5, 0),
            ControlId::Gain => {
                Self::gain_register()?;
                ControlInfo {
                    inactive: self.ae_enabled,
                    ..ControlInfo::new(id, 0, 0x9F, 1, 8)
                }
            }
            ControlId::AutoGain => ControlInfo {
                disabled: true,
                ..ControlInfo::new(id, 0, 1, 1, 1)
            },
            ControlId::Exposure => ControlInfo {
                inactive: !self.ae_enabled,
                ..ControlInfo::new(id, 0, 0xFF, 1, 0x80)
            },
            ControlId::ExposureAuto => ControlInfo::new(id, 0, 1, 1, 1),
        };
        Ok(info)
    }

    /// Read any register directly.
    ///
    /// Requires [`SensorConfig::raw_register_access`].
    pub fn raw_register(&self, register: LogicalRegister) -> Result<u8, Error<T>> {
        if !self.config.raw_register_access {
            return Err(LibraryError::PermissionDenied.into());
        }
        self.registers.read(register)
    }

    /// Write any register directly, bypassing the driver's cached state.
    ///
    /// Requires [`SensorConfig::raw_register_access`].
    pub fn set_raw_register(&self, register: LogicalRegister, value: u8) -> Result<(), Error<T>> {
        if !self.config.raw_register_access {
            return Err(LibraryError::PermissionDenied.into());
        }
        self.registers.write(register, value)
    }
}
