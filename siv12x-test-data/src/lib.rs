// SPDX-License-Identifier: Apache-2.0
// Copyright © 2021 Will Ross
mod i2c_mock;

pub use i2c_mock::{
    mock_siv120d_at_address, mock_siv121c_at_address, I2cOperation, MockError, MockSensorBus,
    BANK_COUNT,
};
