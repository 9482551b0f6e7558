//! Error types for open-chroma-core.

use crate::report::CommandStatus;
use thiserror::Error;

/// Core library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Caller supplied malformed parameters. Raised before any device I/O.
    #[error("invalid argument: {field}: {reason}")]
    InvalidArgument { field: &'static str, reason: String },

    /// The command is not available on this model.
    #[error("{command} is not supported on {model}")]
    NotSupported {
        model: &'static str,
        command: &'static str,
    },

    /// No descriptor exists for the product id.
    #[error("unknown device: pid 0x{0:04X}")]
    UnknownDevice(u16),

    /// Response did not echo the request's remaining-packets/class/id.
    #[error("response mismatch: expected {expected:02X?}, got {actual:02X?}")]
    ResponseMismatch {
        /// (remaining packets, command class, command id) of the request.
        expected: (u16, u8, u8),
        /// The same fields as read back from the device.
        actual: (u16, u8, u8),
    },

    /// Device answered with a failure, timeout or not-supported status.
    #[error("device reported {status:?} for command 0x{class:02X}/0x{id:02X}")]
    DeviceStatus {
        status: CommandStatus,
        class: u8,
        id: u8,
    },

    /// HID transport failure.
    #[error("HID error: {0}")]
    Hid(String),

    /// Allocation failure or poisoned device lock.
    #[error("resource error: {0}")]
    Resource(String),

    /// Timing configuration could not be read or is invalid.
    #[error("config error: {0}")]
    Config(String),
}

impl Error {
    /// Shorthand for [`Error::InvalidArgument`].
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field,
            reason: reason.into(),
        }
    }
}

impl From<std::collections::TryReserveError> for Error {
    fn from(e: std::collections::TryReserveError) -> Self {
        Self::Resource(e.to_string())
    }
}

/// Convenience Result alias.
pub type Result<T> = std::result::Result<T, Error>;
