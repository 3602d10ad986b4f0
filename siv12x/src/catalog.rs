// SPDX-License-Identifier: Apache-2.0
// Copyright © 2021 Will Ross
//! Tables of the formats, window sizes and frame rates a sensor supports, and the negotiation
//! logic run against them.
//!
//! Catalogs are immutable static data, shared between every driver instance. Everything in this
//! module is pure; nothing here touches the bus.
use arrayvec::ArrayVec;
use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::model::RegisterMap;
use crate::program::{RegisterProgram, RegisterValue};
use crate::register::blanking_high;

/// Media bus pixel codes, using the values from the Linux media bus API.
#[derive(Clone, Copy, Debug, Eq, PartialEq, IntoPrimitive, TryFromPrimitive)]
#[repr(u32)]
pub enum PixelCode {
    /// RGB 5:6:5, two 8-bit samples per pixel, little endian.
    Rgb565_2x8Le = 0x1008,

    /// YUV 4:2:2, Y-U-Y-V ordering, two 8-bit samples per pixel.
    Yuyv8_2x8 = 0x2008,
}

/// Colorspace identifiers, using the values from the V4L2 API.
#[derive(Clone, Copy, Debug, Eq, PartialEq, IntoPrimitive, TryFromPrimitive)]
#[repr(u32)]
pub enum Colorspace {
    /// No colorspace requested.
    Default = 0,
    Smpte170m = 1,
    Smpte240m = 2,
    Rec709 = 3,
    Bt878 = 4,
    System470M = 5,
    System470Bg = 6,
    Jpeg = 7,
    Srgb = 8,
}

impl Default for Colorspace {
    fn default() -> Self {
        Self::Default
    }
}

/// A media bus frame format, as requested by a caller or negotiated by the driver.
///
/// The pixel code is kept as the raw value so that unsupported codes can be requested (and then
/// replaced during negotiation).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FrameFormat {
    pub code: u32,
    pub width: u32,
    pub height: u32,
    pub colorspace: Colorspace,
}

impl FrameFormat {
    pub fn new(code: u32, width: u32, height: u32) -> Self {
        Self {
            code,
            width,
            height,
            colorspace: Colorspace::Default,
        }
    }
}

/// An output pixel encoding and the register program selecting it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FormatDescriptor {
    pub code: PixelCode,
    pub colorspace: Colorspace,
    pub program: RegisterProgram,
}

/// An output resolution and the register program configuring the sensor's windowing for it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct WindowSize {
    pub width: u16,
    pub height: u16,

    /// Whether the frame rate can be changed while this size is selected.
    pub variable_frame_rate: bool,
    pub program: RegisterProgram,
}

/// Timing parameters for a frame rate.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FrameRatePreset {
    pub fps: u32,

    /// Vertical blanking, in lines. 12 bits.
    pub vblank: u16,

    /// Horizontal blanking, in pixel clocks. 12 bits.
    pub hblank: u16,

    /// The power of two this preset adds to the master clock divider.
    pub clock_divider: u8,

    /// The anti-flicker shutter step.
    pub shutter_step: u8,
}

impl FrameRatePreset {
    /// The blanking and shutter step writes for this preset, in the order they are applied.
    ///
    /// The pixel clock divider is not included, as it shares a register with other settings.
    pub fn timing_program(&self, map: &RegisterMap) -> ArrayVec<RegisterValue, 4> {
        [
            RegisterValue {
                register: map.hblank,
                value: (self.hblank & 0xFF) as u8,
            },
            RegisterValue {
                register: map.vblank,
                value: (self.vblank & 0xFF) as u8,
            },
            RegisterValue {
                register: map.blanking_high,
                value: blanking_high(self.hblank, self.vblank),
            },
            RegisterValue {
                register: map.shutter_step,
                value: self.shutter_step,
            },
        ]
        .into()
    }
}

/// The result of negotiating a requested format against a catalog.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Negotiated {
    pub format: &'static FormatDescriptor,
    pub window: &'static WindowSize,
}

impl Negotiated {
    /// The negotiated format as a [`FrameFormat`].
    pub fn frame_format(&self) -> FrameFormat {
        FrameFormat {
            code: self.format.code.into(),
            width: self.window.width as u32,
            height: self.window.height as u32,
            colorspace: self.format.colorspace,
        }
    }
}

/// Everything a sensor supports.
///
/// A catalog always has at least one entry of each kind. Window sizes are ordered largest first,
/// and frame rates are ordered fastest first (strictly). The negotiation logic depends on both
/// orderings, and they are checked when the catalog is built.
#[derive(Clone, Copy, Debug)]
pub struct Catalog {
    formats: &'static [FormatDescriptor],
    window_sizes: &'static [WindowSize],
    frame_rates: &'static [FrameRatePreset],
}

impl Catalog {
    /// Create a new catalog.
    ///
    /// This function will panic (at compile time, when used in a `const` or `static`) if any table
    /// is empty or out of order.
    pub const fn new(
        formats: &'static [FormatDescriptor],
        window_sizes: &'static [WindowSize],
        frame_rates: &'static [FrameRatePreset],
    ) -> Self {
        assert!(!formats.is_empty(), "at least one format is required");
        assert!(!window_sizes.is_empty(), "at least one window size is required");
        assert!(!frame_rates.is_empty(), "at least one frame rate is required");
        let mut index = 1;
        while index < window_sizes.len() {
            assert!(
                window_sizes[index].width <= window_sizes[index - 1].width
                    && window_sizes[index].height <= window_sizes[index - 1].height,
                "window sizes must be ordered largest first"
            );
            index += 1;
        }
        let mut index = 1;
        while index < frame_rates.len() {
            assert!(
                frame_rates[index].fps < frame_rates[index - 1].fps,
                "frame rates must be ordered fastest first"
            );
            index += 1;
        }
        Self {
            formats,
            window_sizes,
            frame_rates,
        }
    }

    pub fn formats(&self) -> &'static [FormatDescriptor] {
        self.formats
    }

    pub fn window_sizes(&self) -> &'static [WindowSize] {
        self.window_sizes
    }

    pub fn frame_rates(&self) -> &'static [FrameRatePreset] {
        self.frame_rates
    }

    /// The first format is the default.
    pub fn default_format(&self) -> &'static FormatDescriptor {
        &self.formats[0]
    }

    /// The largest window size is the default.
    pub fn default_window_size(&self) -> &'static WindowSize {
        &self.window_sizes[0]
    }

    pub fn fastest_frame_rate(&self) -> &'static FrameRatePreset {
        &self.frame_rates[0]
    }

    /// Find the format for a pixel code, falling back to the default format.
    pub fn find_format(&self, code: u32) -> &'static FormatDescriptor {
        self.formats
            .iter()
            .find(|format| u32::from(format.code) == code)
            .unwrap_or_else(|| self.default_format())
    }

    /// Find the largest window size that fits within both dimensions.
    ///
    /// Sizes are never rounded up; a request smaller than every window size gets the smallest one.
    pub fn round_down_window(&self, width: u32, height: u32) -> &'static WindowSize {
        self.window_sizes
            .iter()
            .find(|size| size.width as u32 <= width && size.height as u32 <= height)
            .unwrap_or_else(|| &self.window_sizes[self.window_sizes.len() - 1])
    }

    /// Negotiate a requested format.
    pub fn try_format(&self, requested: &FrameFormat) -> Negotiated {
        Negotiated {
            format: self.find_format(requested.code),
            window: self.round_down_window(requested.width, requested.height),
        }
    }

    /// Select the fastest preset that does not exceed `fps`.
    ///
    /// Requests faster than every preset get the fastest preset, requests between two presets
    /// round down to the slower one. `None` is returned if the request is slower than every
    /// preset.
    pub fn select_frame_rate(&self, fps: u32) -> Option<&'static FrameRatePreset> {
        self.frame_rates.iter().find(|preset| preset.fps <= fps)
    }

    /// The `index`-th window size that is at least `min_width` by `min_height`.
    ///
    /// A minimum of 0 disables filtering on that dimension.
    pub fn frame_size(
        &self,
        index: usize,
        min_width: u16,
        min_height: u16,
    ) -> Option<&'static WindowSize> {
        self.window_sizes
            .iter()
            .filter(|size| min_width == 0 || size.width >= min_width)
            .filter(|size| min_height == 0 || size.height >= min_height)
            .nth(index)
    }
}

#[cfg(test)]
mod test {
    use core::convert::TryFrom;

    use crate::bank::LogicalRegister;
    use crate::program::{RegisterProgram, RegisterValue};
    use crate::siv120d::Siv120d;
    use crate::SensorModel;

    use super::*;

    const FORMATS: [FormatDescriptor; 2] = [
        FormatDescriptor {
            code: PixelCode::Yuyv8_2x8,
            colorspace: Colorspace::Jpeg,
            program: RegisterProgram::EMPTY,
        },
        FormatDescriptor {
            code: PixelCode::Rgb565_2x8Le,
            colorspace: Colorspace::Srgb,
            program: RegisterProgram::EMPTY,
        },
    ];

    const WINDOW_SIZES: [WindowSize; 3] = [
        WindowSize {
            width: 640,
            height: 480,
            variable_frame_rate: true,
            program: RegisterProgram::EMPTY,
        },
        WindowSize {
            width: 320,
            height: 240,
            variable_frame_rate: false,
            program: RegisterProgram::EMPTY,
        },
        WindowSize {
            width: 160,
            height: 120,
            variable_frame_rate: false,
            program: RegisterProgram::EMPTY,
        },
    ];

    const fn preset(fps: u32) -> FrameRatePreset {
        FrameRatePreset {
            fps,
            vblank: 1,
            hblank: 1,
            clock_divider: 0,
            shutter_step: 0x7d,
        }
    }

    const FRAME_RATES: [FrameRatePreset; 6] = [
        preset(30),
        preset(25),
        preset(20),
        preset(15),
        preset(10),
        preset(5),
    ];

    static CATALOG: Catalog = Catalog::new(&FORMATS, &WINDOW_SIZES, &FRAME_RATES);

    #[test]
    fn pixel_codes() {
        assert_eq!(u32::from(PixelCode::Yuyv8_2x8), 0x2008);
        assert_eq!(
            PixelCode::try_from(0x1008u32).unwrap(),
            PixelCode::Rgb565_2x8Le
        );
        assert!(PixelCode::try_from(0x3001u32).is_err());
    }

    #[test]
    fn find_known_format() {
        let format = CATALOG.find_format(PixelCode::Rgb565_2x8Le.into());
        assert_eq!(format.code, PixelCode::Rgb565_2x8Le);
        assert_eq!(format.colorspace, Colorspace::Srgb);
    }

    #[test]
    fn unknown_format_falls_back_to_default() {
        let format = CATALOG.find_format(0x3001);
        assert_eq!(format, CATALOG.default_format());
        assert_eq!(format.code, PixelCode::Yuyv8_2x8);
    }

    #[test]
    fn window_exact_match() {
        let size = CATALOG.round_down_window(320, 240);
        assert_eq!((size.width, size.height), (320, 240));
    }

    #[test]
    fn window_rounds_down_on_both_dimensions() {
        // 320x240 fits the width but not the height
        let size = CATALOG.round_down_window(300, 200);
        assert_eq!((size.width, size.height), (160, 120));
        let size = CATALOG.round_down_window(639, 1000);
        assert_eq!((size.width, size.height), (320, 240));
    }

    #[test]
    fn window_never_rounds_up() {
        let size = CATALOG.round_down_window(10_000, 10_000);
        assert_eq!((size.width, size.height), (640, 480));
        // Smaller than everything is floored at the smallest size
        let size = CATALOG.round_down_window(100, 100);
        assert_eq!((size.width, size.height), (160, 120));
        let size = CATALOG.round_down_window(0, 0);
        assert_eq!((size.width, size.height), (160, 120));
    }

    #[test]
    fn try_format_unknown_code() {
        let requested = FrameFormat::new(0x3001, 300, 200);
        let negotiated = CATALOG.try_format(&requested).frame_format();
        assert_eq!(
            negotiated,
            FrameFormat {
                code: PixelCode::Yuyv8_2x8.into(),
                width: 160,
                height: 120,
                colorspace: Colorspace::Jpeg,
            }
        );
    }

    #[test]
    fn frame_rate_tie_break() {
        assert_eq!(CATALOG.select_frame_rate(22).unwrap().fps, 20);
        assert_eq!(CATALOG.select_frame_rate(25).unwrap().fps, 25);
        assert_eq!(CATALOG.select_frame_rate(14).unwrap().fps, 10);
    }

    #[test]
    fn frame_rate_bounds() {
        assert_eq!(CATALOG.select_frame_rate(60).unwrap().fps, 30);
        assert_eq!(CATALOG.select_frame_rate(5).unwrap().fps, 5);
        assert!(CATALOG.select_frame_rate(4).is_none());
        assert!(CATALOG.select_frame_rate(0).is_none());
    }

    #[test]
    fn frame_sizes_unfiltered() {
        let sizes: [(u16, u16); 3] = [(640, 480), (320, 240), (160, 120)];
        for (index, expected) in sizes.iter().enumerate() {
            let size = CATALOG.frame_size(index, 0, 0).unwrap();
            assert_eq!((size.width, size.height), *expected);
        }
        assert!(CATALOG.frame_size(3, 0, 0).is_none());
    }

    #[test]
    fn frame_sizes_filtered() {
        let size = CATALOG.frame_size(1, 320, 240).unwrap();
        assert_eq!((size.width, size.height), (320, 240));
        assert!(CATALOG.frame_size(2, 320, 240).is_none());
        // Height-only filter
        let size = CATALOG.frame_size(0, 0, 481);
        assert!(size.is_none());
        let size = CATALOG.frame_size(1, 0, 200).unwrap();
        assert_eq!(size.height, 240);
    }

    #[test]
    fn timing_program() {
        let preset = FrameRatePreset {
            fps: 30,
            vblank: 0x203,
            hblank: 0x165,
            clock_divider: 0,
            shutter_step: 0x7d,
        };
        let map = &Siv120d::REGISTERS;
        let program = preset.timing_program(map);
        assert_eq!(
            program.as_slice(),
            [
                RegisterValue::new(0x021, 0x65),
                RegisterValue::new(0x023, 0x03),
                RegisterValue::new(0x020, 0x12),
                RegisterValue::new(0x134, 0x7d),
            ]
        );
        assert_eq!(program[0].register, LogicalRegister::new(0x021));
    }
}
