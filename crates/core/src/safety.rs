//! Safety layer: bounds every value before it is written into a report.
//!
//! Two policies coexist here.
//!
//! ## Clamping
//! Bounded effect fields (speed, direction, LED state, LED effect id) are
//! clamped into range rather than rejected. Out-of-range values silently
//! become the nearest valid value. Firmware on older devices misbehaves on
//! unexpected bytes, and existing callers rely on this permissiveness.
//!
//! ## Rejection
//! Structural input (byte counts, column ranges, pixel buffer lengths) is
//! rejected with [`Error::InvalidArgument`] before any device I/O.
//!
//! ## Device mode
//! Only normal (0x00) and driver (0x03) mode are ever sent, always with a
//! zero parameter. Factory-test mode (0x02) and anything unknown are
//! rewritten to normal mode.

use crate::error::{Error, Result};
use tracing::debug;

/// Normal mode: the device animates its own hardware effects.
pub const MODE_NORMAL: u8 = 0x00;
/// Driver mode: the host streams per-pixel frames.
pub const MODE_DRIVER: u8 = 0x03;

/// Clamp `value` into `[min, max]`.
pub fn clamp_u8(value: u8, min: u8, max: u8) -> u8 {
    debug_assert!(min <= max);
    value.clamp(min, max)
}

/// Rewrite a requested device mode into one that is safe to send.
///
/// The parameter byte is always 0 on the wire.
pub fn sanitize_device_mode(mode: u8, param: u8) -> (u8, u8) {
    if param != 0 {
        debug!(param, "Device mode parameter dropped");
    }
    match mode {
        MODE_NORMAL | MODE_DRIVER => (mode, 0),
        other => {
            debug!(
                requested = format_args!("0x{:02X}", other),
                "Unsupported device mode, falling back to normal mode"
            );
            (MODE_NORMAL, 0)
        }
    }
}

/// Require exactly `expected` bytes.
pub fn validate_len(field: &'static str, data: &[u8], expected: usize) -> Result<()> {
    if data.len() != expected {
        return Err(Error::invalid(
            field,
            format!("expected {expected} bytes, got {}", data.len()),
        ));
    }
    Ok(())
}

/// Require at least `min` bytes.
pub fn validate_min_len(field: &'static str, data: &[u8], min: usize) -> Result<()> {
    if data.len() < min {
        return Err(Error::invalid(
            field,
            format!("expected at least {min} bytes, got {}", data.len()),
        ));
    }
    Ok(())
}

/// Validate a column range and return its RGB byte length.
///
/// `row_length = (stop + 1 - start) * 3`.
pub fn row_length(start_col: u8, stop_col: u8) -> Result<usize> {
    if start_col > stop_col {
        return Err(Error::invalid(
            "segment",
            format!("start column {start_col} is past stop column {stop_col}"),
        ));
    }
    Ok((stop_col as usize + 1 - start_col as usize) * 3)
}
