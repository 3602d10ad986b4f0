// SPDX-License-Identifier: Apache-2.0
// Copyright © 2021 Will Ross
#[cfg(feature = "std")]
extern crate std;

use core::fmt;

use crate::transport::RegisterTransport;

/// Errors that don't involve the bus.
#[derive(Clone, Debug, PartialEq)]
pub enum LibraryError {
    /// The identification registers did not match the expected chip.
    ///
    /// This is not a bus error; a probe loop can move on and try another driver or address.
    NotThisDevice { expected: u8, found: u8 },

    /// A control value was outside of the range the control accepts.
    Range(&'static str),

    /// The requested change conflicts with the current auto-exposure mode.
    Busy(&'static str),

    /// The frame rate can only be changed at a window size that supports variable frame rates.
    UnsupportedSize { width: u16, height: u16 },

    /// An enumeration index past the end of the (filtered) list.
    OutOfRange(usize),

    /// The control is not known, or not supported by this sensor.
    UnknownControl(u32),

    /// Raw register access was requested without the capability being granted.
    PermissionDenied,
}

impl fmt::Display for LibraryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::NotThisDevice { expected, found } => write!(
                f,
                "identification mismatch (expected {:#04x}, found {:#04x})",
                expected, found
            ),
            LibraryError::Range(msg) => write!(f, "{} is out of range", msg),
            LibraryError::Busy(msg) => write!(f, "{}", msg),
            LibraryError::UnsupportedSize { width, height } => write!(
                f,
                "the frame rate cannot be changed at {}x{}",
                width, height
            ),
            LibraryError::OutOfRange(index) => write!(f, "index {} is out of range", index),
            LibraryError::UnknownControl(id) => write!(f, "unknown control {:#010x}", id),
            LibraryError::PermissionDenied => write!(f, "raw register access is not enabled"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LibraryError {}

#[derive(Clone, PartialEq)]
pub enum Error<T>
where
    T: RegisterTransport,
{
    /// Errors originating from the bus transport.
    TransportError(T::Error),

    /// Errors originating from within this library.
    LibraryError(LibraryError),
}

impl<T> Error<T>
where
    T: RegisterTransport,
{
    /// The library error, if this isn't a transport error.
    pub fn library_error(&self) -> Option<&LibraryError> {
        match self {
            Error::LibraryError(err) => Some(err),
            Error::TransportError(_) => None,
        }
    }
}

// Custom Debug implementation so that the transport doesn't need to implement Debug (like the one
// wrapping linux-embedded-hal).
impl<T> fmt::Debug for Error<T>
where
    T: RegisterTransport,
    T::Error: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::TransportError(bus_error) => f
                .debug_tuple("Error::TransportError")
                .field(bus_error)
                .finish(),
            Error::LibraryError(err) => f.debug_tuple("Error::LibraryError").field(err).finish(),
        }
    }
}

impl<T> fmt::Display for Error<T>
where
    T: RegisterTransport,
    T::Error: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::TransportError(bus_error) => write!(f, "Transport Error: {:?}", bus_error),
            Error::LibraryError(err) => write!(f, "Library Error: {}", err),
        }
    }
}

#[cfg(feature = "std")]
impl<T> std::error::Error for Error<T>
where
    T: RegisterTransport,
    T::Error: std::error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::TransportError(bus_error) => Some(bus_error),
            Error::LibraryError(lib_err) => Some(lib_err),
        }
    }
}

impl<T> From<LibraryError> for Error<T>
where
    T: RegisterTransport,
{
    fn from(lib_err: LibraryError) -> Self {
        Self::LibraryError(lib_err)
    }
}

#[cfg(test)]
mod test {
    extern crate std;

    use std::format;

    use super::LibraryError;

    #[test]
    fn not_this_device_display() {
        let err = LibraryError::NotThisDevice {
            expected: 0x12,
            found: 0x95,
        };
        assert_eq!(
            format!("{}", err),
            "identification mismatch (expected 0x12, found 0x95)"
        );
    }

    #[test]
    fn unknown_control_display() {
        let err = LibraryError::UnknownControl(0x0098_0901);
        assert_eq!(format!("{}", err), "unknown control 0x00980901");
    }
}
