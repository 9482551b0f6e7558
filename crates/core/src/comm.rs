//! Error classification and device health checks.
//!
//! Exchanges are never retried automatically: lighting commands are not
//! safe to replay blindly. Callers use [`ErrorClass`] to decide what to do.

use crate::commands;
use crate::config::SettleWindow;
use crate::error::Error;
use crate::transport::{exchange, ControlTransport};
use tracing::debug;

/// Classification of communication errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// Caller input, unsupported command or unknown model. Nothing was sent.
    Validation,
    /// Response did not echo the request.
    ProtocolMismatch,
    /// Device answered with failure, timeout or not supported.
    DeviceReported,
    /// The HID layer failed.
    Transport,
    /// Allocation failure, poisoned lock or unusable configuration.
    Resource,
}

impl ErrorClass {
    pub fn classify(err: &Error) -> Self {
        match err {
            Error::InvalidArgument { .. } | Error::NotSupported { .. } | Error::UnknownDevice(_) => {
                Self::Validation
            }
            Error::ResponseMismatch { .. } => Self::ProtocolMismatch,
            Error::DeviceStatus { .. } => Self::DeviceReported,
            Error::Hid(_) => Self::Transport,
            Error::Resource(_) | Error::Config(_) => Self::Resource,
        }
    }

    /// Whether the failure happened on the wire.
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            Self::ProtocolMismatch | Self::DeviceReported | Self::Transport
        )
    }
}

/// Device connection status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceStatus {
    /// Device answered the health check.
    Connected,
    /// HID layer could not reach the device.
    Disconnected,
    /// Device answered, but not correctly.
    Error,
}

/// Check a device with a firmware-version query.
pub fn check_device_status(
    transport: &dyn ControlTransport,
    transaction_id: u8,
    window: SettleWindow,
) -> DeviceStatus {
    let mut query = commands::get_firmware_version();
    query.set_transaction_id(transaction_id);
    match exchange(transport, &mut query, window) {
        Ok(_) => DeviceStatus::Connected,
        Err(ref e) => {
            let class = ErrorClass::classify(e);
            debug!(class = ?class, error = %e, "Device health check failed");
            match class {
                ErrorClass::Transport => DeviceStatus::Disconnected,
                _ => DeviceStatus::Error,
            }
        }
    }
}
