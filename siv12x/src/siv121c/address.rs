// SPDX-License-Identifier: Apache-2.0
// Copyright © 2021 Will Ross
//! Register addresses for the SIV121C.
//!
//! The SIV121C has the same register layout as the SIV120D, but shifted up by one bank.
use crate::bank::LogicalRegister;

// Bank 0: identification
pub const CHIP_ID: LogicalRegister = LogicalRegister::new(0x001);
pub const CHIP_INFO: LogicalRegister = LogicalRegister::new(0x002);

// Bank 1: sensor control
pub const CONTROL_A: LogicalRegister = LogicalRegister::new(0x103);
pub const CONTROL_B: LogicalRegister = LogicalRegister::new(0x104);
pub const VIDEO_MODE: LogicalRegister = LogicalRegister::new(0x106);
pub const BLANKING_HIGH: LogicalRegister = LogicalRegister::new(0x120);
pub const HBLANK: LogicalRegister = LogicalRegister::new(0x121);
pub const VBLANK: LogicalRegister = LogicalRegister::new(0x122);

// Bank 2: auto exposure
pub const AE_CONTROL: LogicalRegister = LogicalRegister::new(0x210);
pub const Y_TARGET_NORMAL: LogicalRegister = LogicalRegister::new(0x212);
pub const Y_TARGET_CWF: LogicalRegister = LogicalRegister::new(0x213);
pub const Y_TARGET_INCANDESCENT: LogicalRegister = LogicalRegister::new(0x214);
pub const SHUTTER_STEP: LogicalRegister = LogicalRegister::new(0x234);

// Bank 4: image signal processing
pub const OUTPUT_FORMAT: LogicalRegister = LogicalRegister::new(0x412);
pub const CR_GAIN: LogicalRegister = LogicalRegister::new(0x4A9);
pub const CB_GAIN: LogicalRegister = LogicalRegister::new(0x4AA);
pub const BRIGHTNESS: LogicalRegister = LogicalRegister::new(0x4AB);
pub const HUE_COSINE: LogicalRegister = LogicalRegister::new(0x4AE);
pub const HUE_SINE: LogicalRegister = LogicalRegister::new(0x4AF);
pub const WINDOW_HIGH: LogicalRegister = LogicalRegister::new(0x4C0);
pub const WINDOW_H_START: LogicalRegister = LogicalRegister::new(0x4C1);
pub const WINDOW_H_WIDTH: LogicalRegister = LogicalRegister::new(0x4C2);
pub const WINDOW_V_START: LogicalRegister = LogicalRegister::new(0x4C3);
pub const WINDOW_V_WIDTH: LogicalRegister = LogicalRegister::new(0x4C4);
