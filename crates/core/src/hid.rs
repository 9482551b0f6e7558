//! hidapi feature-report transport.
//!
//! Razer devices carry the protocol on report id 0, so every buffer handed
//! to hidapi is one byte longer than the report itself.

use crate::device::DeviceDescriptor;
use crate::error::{Error, Result};
use crate::report::REPORT_LEN;
use crate::transport::ControlTransport;
use hidapi::{HidApi, HidDevice};
use std::ffi::CStr;
use tracing::debug;

const FEATURE_LEN: usize = REPORT_LEN + 1;

/// Feature-report transport over one opened HID interface.
pub struct HidapiTransport {
    device: HidDevice,
}

impl HidapiTransport {
    /// Open the HID node at `path`, which must be the interface named by
    /// `descriptor.interface`.
    pub fn open(api: &HidApi, descriptor: &DeviceDescriptor, path: &CStr) -> Result<Self> {
        let device = api.open_path(path).map_err(|e| {
            Error::Hid(format!(
                "open {} (PID=0x{:04X}) at {}: {e}",
                descriptor.name,
                descriptor.pid,
                path.to_string_lossy()
            ))
        })?;
        debug!(
            model = descriptor.name,
            interface = descriptor.interface,
            path = %path.to_string_lossy(),
            "Opened HID control interface"
        );
        Ok(Self { device })
    }

    pub fn from_device(device: HidDevice) -> Self {
        Self { device }
    }
}

fn frame_request(report: &[u8; REPORT_LEN]) -> [u8; FEATURE_LEN] {
    let mut buf = [0u8; FEATURE_LEN];
    buf[1..].copy_from_slice(report);
    buf
}

fn unframe_response(buf: &[u8; FEATURE_LEN], len: usize) -> Result<[u8; REPORT_LEN]> {
    if len < FEATURE_LEN {
        return Err(Error::Hid(format!(
            "short feature report: {len} of {FEATURE_LEN} bytes"
        )));
    }
    let mut report = [0u8; REPORT_LEN];
    report.copy_from_slice(&buf[1..]);
    Ok(report)
}

impl ControlTransport for HidapiTransport {
    fn set_report(&self, report: &[u8; REPORT_LEN]) -> Result<()> {
        self.device
            .send_feature_report(&frame_request(report))
            .map_err(|e| Error::Hid(format!("send_feature_report: {e}")))
    }

    fn get_report(&self) -> Result<[u8; REPORT_LEN]> {
        let mut buf = [0u8; FEATURE_LEN];
        let len = self
            .device
            .get_feature_report(&mut buf)
            .map_err(|e| Error::Hid(format!("get_feature_report: {e}")))?;
        unframe_response(&buf, len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_is_prefixed_with_report_id() {
        let mut report = [0u8; REPORT_LEN];
        report[1] = 0xFF;
        report[89] = 0x00;
        report[88] = 0xAB;
        let buf = frame_request(&report);
        assert_eq!(buf.len(), 91);
        assert_eq!(buf[0], 0x00);
        assert_eq!(buf[2], 0xFF);
        assert_eq!(buf[89], 0xAB);
    }

    #[test]
    fn response_drops_report_id() {
        let mut buf = [0u8; FEATURE_LEN];
        buf[1] = 0x02;
        buf[8] = 0x0A;
        let report = unframe_response(&buf, FEATURE_LEN).unwrap();
        assert_eq!(report[0], 0x02);
        assert_eq!(report[7], 0x0A);
    }

    #[test]
    fn short_response_is_hid_error() {
        let buf = [0u8; FEATURE_LEN];
        assert!(matches!(unframe_response(&buf, 64), Err(Error::Hid(_))));
    }
}
