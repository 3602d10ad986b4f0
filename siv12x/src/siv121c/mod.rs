// SPDX-License-Identifier: Apache-2.0
// Copyright © 2021 Will Ross
//! SIV121C specific types.
//!
//! The SIV121C only supports YUV 4:2:2 at VGA, and lacks the contrast and manual gain controls of
//! the SIV120D.
pub mod address;
mod defaults;

use crate::catalog::{Catalog, Colorspace, FormatDescriptor, FrameRatePreset, PixelCode, WindowSize};
use crate::model::{RegisterMap, SensorModel};
use crate::program::{RegisterProgram, RegisterValue};

use address::*;

const YUV422_VALUES: [RegisterValue; 1] = [RegisterValue {
    register: OUTPUT_FORMAT,
    value: 0x3D,
}];

const VGA_VALUES: [RegisterValue; 1] = [RegisterValue {
    register: VIDEO_MODE,
    value: 0x4,
}];

const FORMATS: [FormatDescriptor; 1] = [FormatDescriptor {
    code: PixelCode::Yuyv8_2x8,
    colorspace: Colorspace::Jpeg,
    program: RegisterProgram::new(&YUV422_VALUES),
}];

const WINDOW_SIZES: [WindowSize; 1] = [WindowSize {
    width: 640,
    height: 480,
    variable_frame_rate: true,
    program: RegisterProgram::new(&VGA_VALUES),
}];

// Blanking is the same for every rate, only the pixel clock changes.
const fn preset(fps: u32, clock_divider: u8, shutter_step: u8) -> FrameRatePreset {
    FrameRatePreset {
        fps,
        vblank: 0x03,
        hblank: 0x65,
        clock_divider,
        shutter_step,
    }
}

const FRAME_RATES: [FrameRatePreset; 6] = [
    preset(30, 0, 0x7D),
    preset(25, 0, 0x7D),
    preset(20, 0, 0x7D),
    preset(15, 1, 0x3E),
    preset(10, 1, 0x3E),
    preset(5, 2, 0x1F),
];

static CATALOG: Catalog = Catalog::new(&FORMATS, &WINDOW_SIZES, &FRAME_RATES);

/// The SIV121C sensor.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Siv121c;

impl SensorModel for Siv121c {
    const NAME: &'static str = "SIV121C";

    const CHIP_ID: u8 = 0x95;

    const CHIP_INFO: u8 = 0x10;

    const START_STREAMING: u8 = 0x01;

    const REGISTERS: RegisterMap = RegisterMap {
        chip_id: CHIP_ID,
        chip_info: CHIP_INFO,
        control_a: CONTROL_A,
        control_b: CONTROL_B,
        blanking_high: BLANKING_HIGH,
        hblank: HBLANK,
        vblank: VBLANK,
        shutter_step: SHUTTER_STEP,
        ae_control: AE_CONTROL,
        y_target_normal: Y_TARGET_NORMAL,
        y_target_cwf: Y_TARGET_CWF,
        y_target_incandescent: Y_TARGET_INCANDESCENT,
        analog_gain: None,
        cr_gain: CR_GAIN,
        cb_gain: CB_GAIN,
        brightness: BRIGHTNESS,
        contrast: None,
        hue_cosine: HUE_COSINE,
        hue_sine: HUE_SINE,
    };

    fn default_program() -> RegisterProgram {
        RegisterProgram::new(&defaults::DEFAULT_VALUES)
    }

    fn catalog() -> &'static Catalog {
        &CATALOG
    }
}

#[cfg(test)]
mod test {
    use crate::model::SensorModel;

    use super::Siv121c;

    #[test]
    fn default_program_stays_in_banks() {
        let program = Siv121c::default_program();
        assert!(program.iter().all(|entry| entry.register.bank() <= 4));
        assert!(program.iter().all(|entry| entry.register.offset() != 0));
    }

    #[test]
    fn fixed_blanking() {
        let catalog = Siv121c::catalog();
        assert_eq!(catalog.frame_rates().len(), 6);
        assert!(catalog
            .frame_rates()
            .iter()
            .all(|preset| preset.hblank == 0x65 && preset.vblank == 0x03));
    }

    #[test]
    fn optional_controls_absent() {
        assert!(Siv121c::REGISTERS.contrast.is_none());
        assert!(Siv121c::REGISTERS.analog_gain.is_none());
    }
}
