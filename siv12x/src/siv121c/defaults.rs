// SPDX-License-Identifier: Apache-2.0
// Copyright © 2021 Will Ross
//! The SIV121C calibration baseline.
//!
//! Like the SIV120D table, this is opaque tuning data written as-is.
use crate::program::RegisterValue;

pub(crate) const DEFAULT_VALUES: [RegisterValue; 205] = [
    // Bank 0
    RegisterValue::new(0x003, 0x04),
    RegisterValue::new(0x010, 0x02),

    // Bank 1
    RegisterValue::new(0x104, 0x80),
    RegisterValue::new(0x107, 0xc1),
    RegisterValue::new(0x110, 0x1e),
    RegisterValue::new(0x111, 0x81),
    RegisterValue::new(0x112, 0x54),
    RegisterValue::new(0x113, 0x01),
    RegisterValue::new(0x114, 0x31),
    RegisterValue::new(0x115, 0x21),
    RegisterValue::new(0x117, 0x84),
    RegisterValue::new(0x118, 0x00),
    RegisterValue::new(0x119, 0xc3),
    RegisterValue::new(0x120, 0x00),
    RegisterValue::new(0x121, 0x65),
    RegisterValue::new(0x122, 0x03),
    RegisterValue::new(0x123, 0x63),
    RegisterValue::new(0x142, 0x52),
    RegisterValue::new(0x143, 0x00),

    // Bank 2
    RegisterValue::new(0x210, 0x80),
    RegisterValue::new(0x211, 0x10),
    RegisterValue::new(0x212, 0x78),
    RegisterValue::new(0x213, 0x78),
    RegisterValue::new(0x214, 0x78),
    RegisterValue::new(0x21e, 0x00),
    RegisterValue::new(0x222, 0x28),
    RegisterValue::new(0x234, 0x7d),
    RegisterValue::new(0x240, 0x48),
    RegisterValue::new(0x242, 0x40),
    RegisterValue::new(0x244, 0x20),
    RegisterValue::new(0x245, 0x21),
    RegisterValue::new(0x246, 0x2c),
    RegisterValue::new(0x247, 0x31),
    RegisterValue::new(0x248, 0x34),
    RegisterValue::new(0x249, 0x37),
    RegisterValue::new(0x24a, 0x3a),
    RegisterValue::new(0x24b, 0x3c),
    RegisterValue::new(0x24c, 0x3e),
    RegisterValue::new(0x24d, 0x3f),
    RegisterValue::new(0x24e, 0x2f),
    RegisterValue::new(0x24f, 0x2a),
    RegisterValue::new(0x250, 0x27),
    RegisterValue::new(0x251, 0x26),
    RegisterValue::new(0x252, 0x24),
    RegisterValue::new(0x253, 0x23),
    RegisterValue::new(0x254, 0x22),
    RegisterValue::new(0x255, 0x21),
    RegisterValue::new(0x256, 0x02),
    RegisterValue::new(0x270, 0x14),
    RegisterValue::new(0x279, 0x58),

    // Bank 3
    RegisterValue::new(0x310, 0xd3),
    RegisterValue::new(0x311, 0xc0),
    RegisterValue::new(0x312, 0x80),
    RegisterValue::new(0x313, 0x7e),
    RegisterValue::new(0x314, 0x80),
    RegisterValue::new(0x315, 0xfe),
    RegisterValue::new(0x316, 0x70),
    RegisterValue::new(0x317, 0xcb),
    RegisterValue::new(0x318, 0x70),
    RegisterValue::new(0x319, 0x94),
    RegisterValue::new(0x31a, 0x6c),
    RegisterValue::new(0x31b, 0x94),
    RegisterValue::new(0x31c, 0x6c),
    RegisterValue::new(0x31d, 0x94),
    RegisterValue::new(0x31e, 0x6c),
    RegisterValue::new(0x320, 0xe8),
    RegisterValue::new(0x321, 0x30),
    RegisterValue::new(0x322, 0xa4),
    RegisterValue::new(0x323, 0x20),
    RegisterValue::new(0x324, 0xff),
    RegisterValue::new(0x325, 0x20),
    RegisterValue::new(0x326, 0x0f),
    RegisterValue::new(0x327, 0x04),
    RegisterValue::new(0x328, 0xa0),
    RegisterValue::new(0x329, 0xa0),
    RegisterValue::new(0x32a, 0xae),
    RegisterValue::new(0x32b, 0x88),
    RegisterValue::new(0x32c, 0x00),
    RegisterValue::new(0x330, 0x00),
    RegisterValue::new(0x331, 0x10),
    RegisterValue::new(0x332, 0x00),
    RegisterValue::new(0x333, 0x10),
    RegisterValue::new(0x334, 0x02),
    RegisterValue::new(0x335, 0x76),
    RegisterValue::new(0x336, 0x01),
    RegisterValue::new(0x337, 0xd6),
    RegisterValue::new(0x340, 0x01),
    RegisterValue::new(0x341, 0x04),
    RegisterValue::new(0x342, 0x08),
    RegisterValue::new(0x343, 0x10),
    RegisterValue::new(0x344, 0x12),
    RegisterValue::new(0x345, 0x35),
    RegisterValue::new(0x346, 0x64),
    RegisterValue::new(0x363, 0xb3),
    RegisterValue::new(0x364, 0xc3),
    RegisterValue::new(0x365, 0xb3),
    RegisterValue::new(0x366, 0xc3),
    RegisterValue::new(0x367, 0xdd),
    RegisterValue::new(0x368, 0xa0),
    RegisterValue::new(0x369, 0xdd),
    RegisterValue::new(0x36a, 0xa0),

    // Bank 4
    RegisterValue::new(0x410, 0x7f),
    RegisterValue::new(0x411, 0x1d),
    RegisterValue::new(0x412, 0x3d),
    RegisterValue::new(0x418, 0x8f),
    RegisterValue::new(0x419, 0x0f),
    RegisterValue::new(0x41a, 0x04),
    RegisterValue::new(0x41b, 0x12),
    RegisterValue::new(0x41c, 0x08),
    RegisterValue::new(0x41d, 0x08),
    RegisterValue::new(0x41e, 0xff),
    RegisterValue::new(0x41f, 0x5a),
    RegisterValue::new(0x420, 0x5a),
    RegisterValue::new(0x421, 0x08),
    RegisterValue::new(0x422, 0x24),
    RegisterValue::new(0x423, 0x00),
    RegisterValue::new(0x424, 0x04),
    RegisterValue::new(0x425, 0x0f),
    RegisterValue::new(0x42e, 0xad),
    RegisterValue::new(0x42f, 0x45),
    RegisterValue::new(0x430, 0x00),
    RegisterValue::new(0x431, 0x08),
    RegisterValue::new(0x432, 0x10),
    RegisterValue::new(0x433, 0x1b),
    RegisterValue::new(0x434, 0x37),
    RegisterValue::new(0x435, 0x4d),
    RegisterValue::new(0x436, 0x60),
    RegisterValue::new(0x437, 0x72),
    RegisterValue::new(0x438, 0x82),
    RegisterValue::new(0x439, 0x91),
    RegisterValue::new(0x43a, 0xa0),
    RegisterValue::new(0x43b, 0xba),
    RegisterValue::new(0x43c, 0xd3),
    RegisterValue::new(0x43d, 0xea),
    RegisterValue::new(0x43e, 0xf5),
    RegisterValue::new(0x43f, 0xff),
    RegisterValue::new(0x440, 0x0a),
    RegisterValue::new(0x441, 0x87),
    RegisterValue::new(0x442, 0x76),
    RegisterValue::new(0x443, 0x65),
    RegisterValue::new(0x444, 0x54),
    RegisterValue::new(0x445, 0x43),
    RegisterValue::new(0x446, 0x22),
    RegisterValue::new(0x447, 0x31),
    RegisterValue::new(0x448, 0x00),
    RegisterValue::new(0x449, 0x10),
    RegisterValue::new(0x44a, 0x00),
    RegisterValue::new(0x44b, 0x10),
    RegisterValue::new(0x44c, 0x00),
    RegisterValue::new(0x44d, 0x11),
    RegisterValue::new(0x44e, 0x04),
    RegisterValue::new(0x44f, 0x48),
    RegisterValue::new(0x450, 0xd8),
    RegisterValue::new(0x451, 0x80),
    RegisterValue::new(0x452, 0x00),
    RegisterValue::new(0x453, 0x00),
    RegisterValue::new(0x454, 0x00),
    RegisterValue::new(0x455, 0x00),
    RegisterValue::new(0x461, 0xb7),
    RegisterValue::new(0x464, 0x10),
    RegisterValue::new(0x471, 0x3b),
    RegisterValue::new(0x472, 0xce),
    RegisterValue::new(0x473, 0xf7),
    RegisterValue::new(0x474, 0x13),
    RegisterValue::new(0x475, 0x25),
    RegisterValue::new(0x476, 0x07),
    RegisterValue::new(0x477, 0xf2),
    RegisterValue::new(0x478, 0xc7),
    RegisterValue::new(0x479, 0x47),
    RegisterValue::new(0x47a, 0x3b),
    RegisterValue::new(0x47b, 0xce),
    RegisterValue::new(0x47c, 0xf7),
    RegisterValue::new(0x47d, 0x13),
    RegisterValue::new(0x47e, 0x25),
    RegisterValue::new(0x47f, 0x07),
    RegisterValue::new(0x480, 0xf2),
    RegisterValue::new(0x481, 0xc7),
    RegisterValue::new(0x482, 0x47),
    RegisterValue::new(0x483, 0x3c),
    RegisterValue::new(0x484, 0xc6),
    RegisterValue::new(0x485, 0xff),
    RegisterValue::new(0x486, 0x12),
    RegisterValue::new(0x487, 0x24),
    RegisterValue::new(0x488, 0x0a),
    RegisterValue::new(0x489, 0xed),
    RegisterValue::new(0x48a, 0xc2),
    RegisterValue::new(0x48b, 0x51),
    RegisterValue::new(0x48c, 0x10),
    RegisterValue::new(0x490, 0x20),
    RegisterValue::new(0x491, 0x20),
    RegisterValue::new(0x492, 0x11),
    RegisterValue::new(0x49c, 0x13),
    RegisterValue::new(0x49d, 0x10),
    RegisterValue::new(0x4af, 0x84),
    RegisterValue::new(0x4b9, 0x10),
    RegisterValue::new(0x4ba, 0x20),
    RegisterValue::new(0x4c0, 0x24),
    RegisterValue::new(0x4c1, 0x00),
    RegisterValue::new(0x4c2, 0x80),
    RegisterValue::new(0x4c3, 0x00),
    RegisterValue::new(0x4c4, 0xe0),
    RegisterValue::new(0x4de, 0xa0),
    RegisterValue::new(0x4e5, 0x15),
    RegisterValue::new(0x4e6, 0x02),
    RegisterValue::new(0x4e7, 0x04),
];
