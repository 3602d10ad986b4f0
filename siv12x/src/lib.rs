//! A pure-Rust library for configuring the SETi SIV120D and SIV121C CMOS camera sensors over I²C.
//!
//! Both sensors expose far more than 256 registers behind a single 8-bit bus address. The
//! register file is split into banks, and a bank select register (physical address `0x00`, present
//! in every bank) chooses which bank the remaining 255 addresses refer to. This crate uses 16-bit
//! [logical register][bank::LogicalRegister] addresses, with the bank in the upper byte and the
//! offset within that bank in the lower byte, and takes care of issuing bank selects only when the
//! bank actually changes.
//!
//! This library uses the [`embedded-hal`][embedded-hal] I²C traits, meaning you should be able to
//! use this library on other platforms, as long as there's an `embedded-hal` I²C implementation
//! available. This library is also `no_std` compatible, and does not allocate.
//!
//! [embedded-hal]: https://docs.rs/embedded-hal/*/embedded_hal/blocking/i2c/index.html
//!
//! # High-Level API
//! ```no_run
//! use siv12x::{SensorConfig, Siv120dDriver, SmbusTransport};
//! use siv12x::catalog::{Colorspace, FrameFormat, PixelCode};
//! use linux_embedded_hal::I2cdev;
//!
//! let i2c_bus = I2cdev::new("/dev/i2c-0").expect("/dev/i2c-0 needs to be an I2C controller");
//! // The sensor is usually strapped to 0x33
//! let transport = SmbusTransport::new(i2c_bus, 0x33);
//! let mut sensor = Siv120dDriver::new(transport, SensorConfig::default())?;
//! sensor.init()?;
//! let requested = FrameFormat::new(PixelCode::Rgb565_2x8Le.into(), 320, 240);
//! let negotiated = sensor.set_format(&requested)?;
//! assert_eq!(negotiated.colorspace, Colorspace::Srgb);
//! # Ok::<(), siv12x::Error<SmbusTransport<I2cdev>>>(())
//! ```
//! [`SensorDriver::new`] probes the identification registers, returning
//! [`LibraryError::NotThisDevice`] if a different chip answered, so probing code can move on to
//! the next candidate. [`SensorDriver::init`] then loads the calibration baseline and restores
//! the current format, window size and frame rate before starting the sensor.
//!
//! # Low-Level API
//! The pieces the driver is built from are public as well.
//! [`BankedRegisters`][bank::BankedRegisters] provides serialized access to the banked register
//! space, [`RegisterProgram`][program::RegisterProgram] is a sequence of register writes, and
//! the [`catalog`] module holds the format, window size and frame rate tables along with the
//! (pure) functions used to negotiate against them. The bitfield layouts of registers shared
//! between several controls are in [`register`].
//!
//! # Partial Failures
//! Operations that write more than one register (for example [`SensorDriver::init`],
//! [`SensorDriver::set_format`], and [`SensorDriver::set_frame_rate`]) stop at the first failed
//! bus transaction and do not roll back the writes that already happened. The cached driver
//! state is only updated once every write has succeeded. Calling `init()` again brings the sensor
//! back to a consistent configuration.

#![no_std]

pub mod bank;
pub mod catalog;
pub mod config;
pub mod control;
#[doc(hidden)]
pub mod driver;
#[doc(hidden)]
pub mod error;
pub mod model;
pub mod program;
pub mod register;
pub mod siv120d;
pub mod siv121c;
pub mod transport;
pub mod trig;
mod util;

pub use bank::{BankedRegisters, LogicalRegister};
pub use config::SensorConfig;
pub use control::{ControlId, ControlInfo};
#[doc(inline)]
pub use driver::{DriverState, SensorDriver};
#[doc(inline)]
pub use error::{Error, LibraryError};
pub use model::{RegisterMap, SensorModel};
pub use program::{RegisterProgram, RegisterValue};
pub use transport::{I2cTransport, RegisterTransport, SmbusTransport};

/// High-level SIV120D driver.
pub type Siv120dDriver<T> = SensorDriver<siv120d::Siv120d, T>;

/// High-level SIV121C driver.
pub type Siv121cDriver<T> = SensorDriver<siv121c::Siv121c, T>;
