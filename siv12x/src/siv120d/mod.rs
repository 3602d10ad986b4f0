// SPDX-License-Identifier: Apache-2.0
// Copyright © 2021 Will Ross
//! SIV120D specific types.
//!
//! The SIV120D is a VGA sensor with four register banks. It can output YUV 4:2:2 or RGB 5:6:5 at
//! VGA, QVGA or QQVGA, and supports contrast and manual gain controls.
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

const RGB565_VALUES: [RegisterValue; 1] = [RegisterValue {
    register: OUTPUT_FORMAT,
    value: 0xCB,
}];

// The window registers are always programmed along with the video mode. Switching sizes with only
// the video mode register can leave the image skewed when the sensor is rapidly started and
// stopped.
const fn window_values(mode: u8, high: u8, width: u8, height: u8) -> [RegisterValue; 6] {
    [
        RegisterValue {
            register: VIDEO_MODE,
            value: mode,
        },
        RegisterValue {
            register: WINDOW_HIGH,
            value: high,
        },
        RegisterValue {
            register: WINDOW_H_START,
            value: 0x00,
        },
        RegisterValue {
            register: WINDOW_H_WIDTH,
            value: width,
        },
        RegisterValue {
            register: WINDOW_V_START,
            value: 0x00,
        },
        RegisterValue {
            register: WINDOW_V_WIDTH,
            value: height,
        },
    ]
}

const VGA_VALUES: [RegisterValue; 6] = window_values(0x2, 0x24, 0x80, 0xE0);
const QVGA_VALUES: [RegisterValue; 6] = window_values(0x1, 0x10, 0x40, 0xF0);
const QQVGA_VALUES: [RegisterValue; 6] = window_values(0x0, 0x00, 0xA0, 0x78);

const FORMATS: [FormatDescriptor; 2] = [
    FormatDescriptor {
        code: PixelCode::Yuyv8_2x8,
        colorspace: Colorspace::Jpeg,
        program: RegisterProgram::new(&YUV422_VALUES),
    },
    FormatDescriptor {
        code: PixelCode::Rgb565_2x8Le,
        colorspace: Colorspace::Srgb,
        program: RegisterProgram::new(&RGB565_VALUES),
    },
];

const WINDOW_SIZES: [WindowSize; 3] = [
    WindowSize {
        width: 640,
        height: 480,
        variable_frame_rate: true,
        program: RegisterProgram::new(&VGA_VALUES),
    },
    WindowSize {
        width: 320,
        height: 240,
        variable_frame_rate: false,
        program: RegisterProgram::new(&QVGA_VALUES),
    },
    WindowSize {
        width: 160,
        height: 120,
        variable_frame_rate: false,
        program: RegisterProgram::new(&QQVGA_VALUES),
    },
];

const fn preset(fps: u32, vblank: u16, clock_divider: u8, shutter_step: u8) -> FrameRatePreset {
    FrameRatePreset {
        fps,
        vblank,
        hblank: 1,
        clock_divider,
        shutter_step,
    }
}

const FRAME_RATES: [FrameRatePreset; 6] = [
    preset(30, 1, 0, 0x7D),
    preset(25, 126, 0, 0x7D),
    preset(20, 251, 0, 0x7D),
    preset(15, 1, 1, 0x3E),
    preset(10, 251, 1, 0x3E),
    preset(5, 251, 2, 0x1F),
];

static CATALOG: Catalog = Catalog::new(&FORMATS, &WINDOW_SIZES, &FRAME_RATES);

/// The SIV120D sensor.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Siv120d;

impl SensorModel for Siv120d {
    const NAME: &'static str = "SIV120D";

    const CHIP_ID: u8 = 0x12;

    const CHIP_INFO: u8 = 0x13;

    const START_STREAMING: u8 = 0x05;

    const REGISTERS: RegisterMap = RegisterMap {
        chip_id: CHIP_ID,
        chip_info: CHIP_INFO,
        control_a: CONTROL_A,
        control_b: CONTROL_B,
        blanking_high: PREVIEW_BLANKING,
        hblank: PREVIEW_HBLANK,
        vblank: PREVIEW_VBLANK,
        shutter_step: PREVIEW_SHUTTER_STEP,
        ae_control: AE_CONTROL,
        y_target_normal: Y_TARGET_NORMAL,
        y_target_cwf: Y_TARGET_CWF,
        y_target_incandescent: Y_TARGET_INCANDESCENT,
        analog_gain: Some(ANALOG_GAIN),
        cr_gain: CR_GAIN,
        cb_gain: CB_GAIN,
        brightness: BRIGHTNESS,
        contrast: Some(CONTRAST_GAIN),
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
