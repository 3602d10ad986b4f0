// SPDX-License-Identifier: Apache-2.0
// Copyright © 2021 Will Ross
//! The SIV120D calibration baseline.
//!
//! These values are opaque tuning data (sensor timing, auto exposure, auto white balance, lens
//! shading, gamma and color correction) and are written as-is.
use crate::program::RegisterValue;

pub(crate) const DEFAULT_VALUES: [RegisterValue; 221] = [
    // Bank 0
    RegisterValue::new(0x004, 0x00),
    RegisterValue::new(0x005, 0x03),
    RegisterValue::new(0x007, 0x32),
    RegisterValue::new(0x010, 0x34),
    RegisterValue::new(0x011, 0x27),
    RegisterValue::new(0x012, 0x21),
    RegisterValue::new(0x016, 0xce),
    RegisterValue::new(0x017, 0xaa),
    RegisterValue::new(0x020, 0x00),
    RegisterValue::new(0x021, 0x01),
    RegisterValue::new(0x022, 0x01),
    RegisterValue::new(0x023, 0x01),

    // Bank 1
    RegisterValue::new(0x111, 0x14),
    RegisterValue::new(0x112, 0x78),
    RegisterValue::new(0x113, 0x78),
    RegisterValue::new(0x114, 0x78),
    RegisterValue::new(0x11d, 0x04),
    RegisterValue::new(0x11e, 0x08),
    RegisterValue::new(0x134, 0x7d),
    RegisterValue::new(0x140, 0x60),
    RegisterValue::new(0x170, 0xd4),
    RegisterValue::new(0x174, 0x07),
    RegisterValue::new(0x179, 0x69),

    // Bank 2
    RegisterValue::new(0x210, 0xd0),
    RegisterValue::new(0x211, 0xc0),
    RegisterValue::new(0x212, 0x80),
    RegisterValue::new(0x213, 0x7f),
    RegisterValue::new(0x214, 0x7f),
    RegisterValue::new(0x215, 0xfe),
    RegisterValue::new(0x216, 0x80),
    RegisterValue::new(0x217, 0xcb),
    RegisterValue::new(0x218, 0x70),
    RegisterValue::new(0x219, 0x94),
    RegisterValue::new(0x21a, 0x6c),
    RegisterValue::new(0x21b, 0x94),
    RegisterValue::new(0x21c, 0x6c),
    RegisterValue::new(0x21d, 0x94),
    RegisterValue::new(0x21e, 0x6c),
    RegisterValue::new(0x220, 0xe8),
    RegisterValue::new(0x221, 0x30),
    RegisterValue::new(0x222, 0xa4),
    RegisterValue::new(0x223, 0x20),
    RegisterValue::new(0x224, 0x20),
    RegisterValue::new(0x226, 0x0f),
    RegisterValue::new(0x227, 0x01),
    RegisterValue::new(0x228, 0xb4),
    RegisterValue::new(0x229, 0xb0),
    RegisterValue::new(0x22a, 0x92),
    RegisterValue::new(0x22b, 0x8e),
    RegisterValue::new(0x22c, 0x88),
    RegisterValue::new(0x22d, 0x88),
    RegisterValue::new(0x230, 0x00),
    RegisterValue::new(0x231, 0x10),
    RegisterValue::new(0x232, 0x00),
    RegisterValue::new(0x233, 0x10),
    RegisterValue::new(0x234, 0x02),
    RegisterValue::new(0x235, 0x76),
    RegisterValue::new(0x236, 0x01),
    RegisterValue::new(0x237, 0xd6),
    RegisterValue::new(0x240, 0x01),
    RegisterValue::new(0x241, 0x04),
    RegisterValue::new(0x242, 0x08),
    RegisterValue::new(0x243, 0x10),
    RegisterValue::new(0x244, 0x12),
    RegisterValue::new(0x245, 0x35),
    RegisterValue::new(0x246, 0x64),
    RegisterValue::new(0x250, 0x33),
    RegisterValue::new(0x251, 0x20),
    RegisterValue::new(0x252, 0xe5),
    RegisterValue::new(0x253, 0xfb),
    RegisterValue::new(0x254, 0x13),
    RegisterValue::new(0x255, 0x26),
    RegisterValue::new(0x256, 0x07),
    RegisterValue::new(0x257, 0xf5),
    RegisterValue::new(0x258, 0xea),
    RegisterValue::new(0x259, 0x21),
    RegisterValue::new(0x262, 0x88),
    RegisterValue::new(0x263, 0xb3),
    RegisterValue::new(0x264, 0xc3),
    RegisterValue::new(0x265, 0xb3),
    RegisterValue::new(0x266, 0xc3),
    RegisterValue::new(0x267, 0xdd),
    RegisterValue::new(0x268, 0xa0),
    RegisterValue::new(0x269, 0xdd),
    RegisterValue::new(0x26a, 0xa0),

    // Bank 3
    RegisterValue::new(0x310, 0xff),
    RegisterValue::new(0x311, 0x1d),
    RegisterValue::new(0x312, 0x3d),
    RegisterValue::new(0x314, 0x04),
    RegisterValue::new(0x318, 0x00),
    RegisterValue::new(0x319, 0x56),
    RegisterValue::new(0x31a, 0x56),
    RegisterValue::new(0x31b, 0x12),
    RegisterValue::new(0x31c, 0x04),
    RegisterValue::new(0x31d, 0x00),
    RegisterValue::new(0x31e, 0x00),
    RegisterValue::new(0x31f, 0x08),
    RegisterValue::new(0x320, 0x04),
    RegisterValue::new(0x321, 0x0f),
    RegisterValue::new(0x330, 0x00),
    RegisterValue::new(0x331, 0x04),
    RegisterValue::new(0x332, 0x0b),
    RegisterValue::new(0x333, 0x24),
    RegisterValue::new(0x334, 0x49),
    RegisterValue::new(0x335, 0x66),
    RegisterValue::new(0x336, 0x7c),
    RegisterValue::new(0x337, 0x8d),
    RegisterValue::new(0x338, 0x9b),
    RegisterValue::new(0x339, 0xaa),
    RegisterValue::new(0x33a, 0xb6),
    RegisterValue::new(0x33b, 0xca),
    RegisterValue::new(0x33c, 0xdc),
    RegisterValue::new(0x33d, 0xef),
    RegisterValue::new(0x33e, 0xf8),
    RegisterValue::new(0x33f, 0xff),
    RegisterValue::new(0x340, 0x11),
    RegisterValue::new(0x341, 0x11),
    RegisterValue::new(0x342, 0x22),
    RegisterValue::new(0x343, 0x33),
    RegisterValue::new(0x344, 0x44),
    RegisterValue::new(0x345, 0x55),
    RegisterValue::new(0x346, 0x12),
    RegisterValue::new(0x347, 0x20),
    RegisterValue::new(0x348, 0x01),
    RegisterValue::new(0x349, 0x20),
    RegisterValue::new(0x34a, 0x01),
    RegisterValue::new(0x34b, 0x20),
    RegisterValue::new(0x34c, 0x01),
    RegisterValue::new(0x34d, 0x00),
    RegisterValue::new(0x34e, 0x04),
    RegisterValue::new(0x34f, 0x50),
    RegisterValue::new(0x350, 0xd0),
    RegisterValue::new(0x351, 0x80),
    RegisterValue::new(0x352, 0x00),
    RegisterValue::new(0x353, 0x00),
    RegisterValue::new(0x354, 0x00),
    RegisterValue::new(0x355, 0x00),
    RegisterValue::new(0x360, 0x57),
    RegisterValue::new(0x361, 0xff),
    RegisterValue::new(0x362, 0x77),
    RegisterValue::new(0x363, 0x38),
    RegisterValue::new(0x364, 0x38),
    RegisterValue::new(0x366, 0x0c),
    RegisterValue::new(0x367, 0xff),
    RegisterValue::new(0x368, 0x04),
    RegisterValue::new(0x369, 0x08),
    RegisterValue::new(0x36a, 0xaf),
    RegisterValue::new(0x36b, 0x78),
    RegisterValue::new(0x36d, 0x84),
    RegisterValue::new(0x371, 0x42),
    RegisterValue::new(0x372, 0xbf),
    RegisterValue::new(0x373, 0x00),
    RegisterValue::new(0x374, 0x0f),
    RegisterValue::new(0x375, 0x31),
    RegisterValue::new(0x376, 0x00),
    RegisterValue::new(0x377, 0x00),
    RegisterValue::new(0x378, 0xbc),
    RegisterValue::new(0x379, 0x44),
    RegisterValue::new(0x37a, 0x56),
    RegisterValue::new(0x37b, 0xbf),
    RegisterValue::new(0x37c, 0xeb),
    RegisterValue::new(0x37d, 0x1a),
    RegisterValue::new(0x37e, 0x22),
    RegisterValue::new(0x37f, 0x04),
    RegisterValue::new(0x380, 0xdc),
    RegisterValue::new(0x381, 0xc9),
    RegisterValue::new(0x382, 0x5b),
    RegisterValue::new(0x383, 0x4d),
    RegisterValue::new(0x384, 0xc0),
    RegisterValue::new(0x385, 0xf3),
    RegisterValue::new(0x386, 0x18),
    RegisterValue::new(0x387, 0x24),
    RegisterValue::new(0x388, 0x04),
    RegisterValue::new(0x389, 0xe0),
    RegisterValue::new(0x38a, 0xcb),
    RegisterValue::new(0x38b, 0x55),
    RegisterValue::new(0x38c, 0x10),
    RegisterValue::new(0x38d, 0xa4),
    RegisterValue::new(0x38e, 0x06),
    RegisterValue::new(0x38f, 0x00),
    RegisterValue::new(0x390, 0x15),
    RegisterValue::new(0x391, 0x15),
    RegisterValue::new(0x392, 0xf0),
    RegisterValue::new(0x394, 0x00),
    RegisterValue::new(0x396, 0xf0),
    RegisterValue::new(0x398, 0x00),
    RegisterValue::new(0x39a, 0x08),
    RegisterValue::new(0x39b, 0x18),
    RegisterValue::new(0x39f, 0x0c),
    RegisterValue::new(0x3a0, 0x0c),
    RegisterValue::new(0x3a1, 0x33),
    RegisterValue::new(0x3a9, 0x10),
    RegisterValue::new(0x3aa, 0x10),
    RegisterValue::new(0x3ab, 0x82),
    RegisterValue::new(0x3ae, 0x40),
    RegisterValue::new(0x3af, 0x86),
    RegisterValue::new(0x3b9, 0x10),
    RegisterValue::new(0x3ba, 0x20),
    RegisterValue::new(0x3cc, 0x40),
    RegisterValue::new(0x3cd, 0x00),
    RegisterValue::new(0x3ce, 0x58),
    RegisterValue::new(0x3cf, 0x40),
    RegisterValue::new(0x3d0, 0xea),
    RegisterValue::new(0x3d1, 0xd3),
    RegisterValue::new(0x3d2, 0x40),
    RegisterValue::new(0x3d3, 0x6f),
    RegisterValue::new(0x3d4, 0x00),
    RegisterValue::new(0x3d9, 0x08),
    RegisterValue::new(0x3da, 0x1f),
    RegisterValue::new(0x3db, 0x05),
    RegisterValue::new(0x3dc, 0x08),
    RegisterValue::new(0x3dd, 0x3c),
    RegisterValue::new(0x3de, 0xfb),
    RegisterValue::new(0x3df, 0x10),
    RegisterValue::new(0x3e0, 0x60),
    RegisterValue::new(0x3e1, 0x90),
    RegisterValue::new(0x3e2, 0x08),
    RegisterValue::new(0x3e3, 0x0a),
    RegisterValue::new(0x3e5, 0x15),
    RegisterValue::new(0x3e6, 0x20),
    RegisterValue::new(0x3e7, 0x04),
];
