// SPDX-License-Identifier: Apache-2.0
// Copyright © 2021 Will Ross
//! Register addresses for the SIV120D.
use crate::bank::LogicalRegister;

// Bank 0: sensor control
pub const CHIP_ID: LogicalRegister = LogicalRegister::new(0x001);
pub const CHIP_INFO: LogicalRegister = LogicalRegister::new(0x002);
pub const CONTROL_A: LogicalRegister = LogicalRegister::new(0x003);
pub const CONTROL_B: LogicalRegister = LogicalRegister::new(0x004);

/// Video mode; selects one of the predefined subsampled output sizes.
pub const VIDEO_MODE: LogicalRegister = LogicalRegister::new(0x005);
pub const CONTROL_C: LogicalRegister = LogicalRegister::new(0x007);
pub const LDO_CONTROL: LogicalRegister = LogicalRegister::new(0x017);

/// Upper nibbles of the preview blanking counts.
pub const PREVIEW_BLANKING: LogicalRegister = LogicalRegister::new(0x020);
pub const PREVIEW_HBLANK: LogicalRegister = LogicalRegister::new(0x021);
pub const PREVIEW_ROW_FILL: LogicalRegister = LogicalRegister::new(0x022);
pub const PREVIEW_VBLANK: LogicalRegister = LogicalRegister::new(0x023);

// Bank 1: auto exposure
pub const AE_CONTROL: LogicalRegister = LogicalRegister::new(0x110);

/// Limits the longest shutter time, and so the slowest frame rate.
pub const MAX_SHUTTER_STEP: LogicalRegister = LogicalRegister::new(0x111);
pub const Y_TARGET_NORMAL: LogicalRegister = LogicalRegister::new(0x112);
pub const Y_TARGET_CWF: LogicalRegister = LogicalRegister::new(0x113);
pub const Y_TARGET_INCANDESCENT: LogicalRegister = LogicalRegister::new(0x114);
pub const INITIAL_ANALOG_GAIN: LogicalRegister = LogicalRegister::new(0x11E);
pub const ANALOG_GAIN: LogicalRegister = LogicalRegister::new(0x132);
pub const PREVIEW_SHUTTER_STEP: LogicalRegister = LogicalRegister::new(0x134);

// Bank 3: image signal processing
pub const OUTPUT_FORMAT: LogicalRegister = LogicalRegister::new(0x312);
pub const CR_GAIN: LogicalRegister = LogicalRegister::new(0x3A9);
pub const CB_GAIN: LogicalRegister = LogicalRegister::new(0x3AA);

/// Sign-magnitude, see [`Brightness`][crate::register::Brightness].
pub const BRIGHTNESS: LogicalRegister = LogicalRegister::new(0x3AB);

/// See [`ContrastGain`][crate::register::ContrastGain].
pub const CONTRAST_GAIN: LogicalRegister = LogicalRegister::new(0x3AC);
pub const HUE_COSINE: LogicalRegister = LogicalRegister::new(0x3AE);
pub const HUE_SINE: LogicalRegister = LogicalRegister::new(0x3AF);

// Output window. The high bits of the start and width values are packed into WINDOW_HIGH:
// horizontal start in bits 6-7, horizontal width in bits 4-5, vertical start in bit 3 and vertical
// width in bit 2.
pub const WINDOW_HIGH: LogicalRegister = LogicalRegister::new(0x3C0);
pub const WINDOW_H_START: LogicalRegister = LogicalRegister::new(0x3C1);
pub const WINDOW_H_WIDTH: LogicalRegister = LogicalRegister::new(0x3C2);
pub const WINDOW_V_START: LogicalRegister = LogicalRegister::new(0x3C3);
pub const WINDOW_V_WIDTH: LogicalRegister = LogicalRegister::new(0x3C4);
