//! Control transport abstraction and the request/response exchange.
//!
//! Provides a trait-based transport layer so that real HID devices and
//! simulated devices share the same interface. One exchange is a
//! set-report, a settle wait, and a get-report. The response must echo the
//! request and carry a non-error status.

use crate::config::SettleWindow;
use crate::error::{Error, Result};
use crate::report::{CommandStatus, Report, REPORT_LEN};
use tracing::{debug, trace, warn};

/// Abstraction over the two halves of a feature-report exchange.
pub trait ControlTransport: Send {
    /// Write one 90-byte report.
    fn set_report(&self, report: &[u8; REPORT_LEN]) -> Result<()>;

    /// Read the device's pending 90-byte response.
    fn get_report(&self) -> Result<[u8; REPORT_LEN]>;

    /// Write, wait a random duration from `window`, read.
    fn control_exchange(
        &self,
        report: &[u8; REPORT_LEN],
        window: SettleWindow,
    ) -> Result<[u8; REPORT_LEN]> {
        self.set_report(report)?;
        let wait = window.sample();
        if !wait.is_zero() {
            std::thread::sleep(wait);
        }
        self.get_report()
    }
}

/// Seal `request`, send it and validate the response.
///
/// The caller holds the device lock. Nothing is retried here: a busy
/// status counts as success, every other failure is returned.
pub fn exchange(
    transport: &dyn ControlTransport,
    request: &mut Report,
    window: SettleWindow,
) -> Result<Report> {
    request.seal();
    trace!(
        transaction_id = format_args!("0x{:02X}", request.transaction_id()),
        class = format_args!("0x{:02X}", request.command_class()),
        id = format_args!("0x{:02X}", request.command_id()),
        report_hex = format_args!("{:02X?}", request.as_bytes()),
        "TX"
    );

    let raw = transport.control_exchange(request.as_bytes(), window)?;
    let response = Report::from_bytes(raw);

    trace!(
        status = ?response.status(),
        report_hex = format_args!("{:02X?}", response.as_bytes()),
        "RX"
    );

    if response.echo_key() != request.echo_key() {
        warn!(
            request = ?request,
            response = ?response,
            "Response does not match request"
        );
        return Err(Error::ResponseMismatch {
            expected: request.echo_key(),
            actual: response.echo_key(),
        });
    }

    match response.status() {
        CommandStatus::Busy => {
            debug!(
                class = format_args!("0x{:02X}", request.command_class()),
                id = format_args!("0x{:02X}", request.command_id()),
                "Device busy"
            );
        }
        status if status.is_error() => {
            warn!(
                class = format_args!("0x{:02X}", request.command_class()),
                id = format_args!("0x{:02X}", request.command_id()),
                status = ?status,
                "Device reported command failure"
            );
            return Err(Error::DeviceStatus {
                status,
                class: request.command_class(),
                id: request.command_id(),
            });
        }
        _ => {}
    }

    Ok(response)
}
