//! The 90-byte Razer feature report.
//!
//! Every command and response is a single fixed-size record:
//!
//! ```text
//! 0      status              (0 on requests, outcome on responses)
//! 1      transaction id      (protocol generation / channel)
//! 2..4   remaining packets   (big-endian, echoed by the device)
//! 4      protocol type       (0)
//! 5      data size           (meaningful argument bytes, <= 80)
//! 6      command class
//! 7      command id          (bit 7 set for "get" commands)
//! 8..88  arguments
//! 88     checksum            (XOR of bytes 2..88)
//! 89     reserved            (0)
//! ```
//!
//! All offset knowledge lives in this module.

use crate::error::{Error, Result};
use std::fmt;

/// Total report length.
pub const REPORT_LEN: usize = 90;
/// Size of the argument area.
pub const ARGS_LEN: usize = 80;

const STATUS: usize = 0;
const TRANSACTION_ID: usize = 1;
const REMAINING_PACKETS: usize = 2;
const PROTOCOL_TYPE: usize = 4;
const DATA_SIZE: usize = 5;
const COMMAND_CLASS: usize = 6;
const COMMAND_ID: usize = 7;
const ARGS: usize = 8;
const CRC: usize = 88;

/// Transaction id values seen on the wire.
pub mod transaction {
    /// Default tag for older Standard-generation devices.
    pub const DEFAULT: u8 = 0xFF;
    /// Extended-generation devices and most accessories.
    pub const EXTENDED: u8 = 0x3F;
    /// Newer keyboards and wireless-capable accessories.
    pub const WIRELESS: u8 = 0x1F;
    /// HyperSpeed receivers.
    pub const HYPERSPEED: u8 = 0x9F;
    /// Legacy custom-frame channel on early Chroma mice and keyboards.
    pub const LEGACY_FRAME: u8 = 0x80;
}

/// Variable-storage flag: persist to device memory or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Storage {
    NoStore = 0x00,
    #[default]
    VarStore = 0x01,
}

/// LED zone ids.
pub mod led {
    pub const ZERO: u8 = 0x00;
    pub const SCROLL_WHEEL: u8 = 0x01;
    pub const BATTERY: u8 = 0x03;
    pub const LOGO: u8 = 0x04;
    pub const BACKLIGHT: u8 = 0x05;
    pub const MACRO: u8 = 0x07;
    pub const GAME: u8 = 0x08;
    pub const RED_PROFILE: u8 = 0x0C;
    pub const GREEN_PROFILE: u8 = 0x0D;
    pub const BLUE_PROFILE: u8 = 0x0E;
    /// Charging pad status rings.
    pub const CHARGING: u8 = 0x20;
    pub const FAST_CHARGING: u8 = 0x21;
    pub const FULLY_CHARGED: u8 = 0x22;
}

/// Outcome code carried in the status byte of a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandStatus {
    New,
    Busy,
    Successful,
    Failure,
    Timeout,
    NotSupported,
    Unknown(u8),
}

impl CommandStatus {
    pub fn from_byte(b: u8) -> Self {
        match b {
            0x00 => Self::New,
            0x01 => Self::Busy,
            0x02 => Self::Successful,
            0x03 => Self::Failure,
            0x04 => Self::Timeout,
            0x05 => Self::NotSupported,
            other => Self::Unknown(other),
        }
    }

    pub fn as_byte(self) -> u8 {
        match self {
            Self::New => 0x00,
            Self::Busy => 0x01,
            Self::Successful => 0x02,
            Self::Failure => 0x03,
            Self::Timeout => 0x04,
            Self::NotSupported => 0x05,
            Self::Unknown(b) => b,
        }
    }

    /// Whether the device rejected the command.
    pub fn is_error(self) -> bool {
        matches!(self, Self::Failure | Self::Timeout | Self::NotSupported)
    }
}

/// One 90-byte report, request or response.
#[derive(Clone, PartialEq, Eq)]
pub struct Report {
    buf: [u8; REPORT_LEN],
}

/// Build a zeroed report addressed to `command_class`/`command_id`.
///
/// `data_size` above 80 is a programming error: it trips a debug assertion
/// and is clamped in release builds.
pub fn new_report(command_class: u8, command_id: u8, data_size: u8) -> Report {
    debug_assert!(
        data_size as usize <= ARGS_LEN,
        "data size {data_size} exceeds argument area"
    );
    let mut report = Report {
        buf: [0u8; REPORT_LEN],
    };
    report.buf[DATA_SIZE] = data_size.min(ARGS_LEN as u8);
    report.buf[COMMAND_CLASS] = command_class;
    report.buf[COMMAND_ID] = command_id;
    report
}

/// XOR of every byte in offsets 2..=87.
pub fn checksum(buf: &[u8; REPORT_LEN]) -> u8 {
    buf[REMAINING_PACKETS..CRC].iter().fold(0, |acc, b| acc ^ b)
}

impl Report {
    /// Build a report with the given argument bytes; data size is their length.
    pub fn with_arguments(command_class: u8, command_id: u8, args: &[u8]) -> Result<Self> {
        if args.len() > ARGS_LEN {
            return Err(Error::invalid(
                "arguments",
                format!("{} bytes exceed the {ARGS_LEN}-byte argument area", args.len()),
            ));
        }
        let mut report = new_report(command_class, command_id, args.len() as u8);
        report.arguments_mut()[..args.len()].copy_from_slice(args);
        Ok(report)
    }

    /// Decode a raw 90-byte buffer. Any byte pattern is accepted.
    pub fn from_bytes(buf: [u8; REPORT_LEN]) -> Self {
        Self { buf }
    }

    /// Decode from a slice, which must be exactly 90 bytes.
    pub fn from_slice(data: &[u8]) -> Result<Self> {
        let buf: [u8; REPORT_LEN] = data.try_into().map_err(|_| {
            Error::Hid(format!(
                "report must be {REPORT_LEN} bytes, got {}",
                data.len()
            ))
        })?;
        Ok(Self { buf })
    }

    pub fn as_bytes(&self) -> &[u8; REPORT_LEN] {
        &self.buf
    }

    pub fn into_bytes(self) -> [u8; REPORT_LEN] {
        self.buf
    }

    pub fn status(&self) -> CommandStatus {
        CommandStatus::from_byte(self.buf[STATUS])
    }

    pub fn set_status(&mut self, status: CommandStatus) {
        self.buf[STATUS] = status.as_byte();
    }

    pub fn transaction_id(&self) -> u8 {
        self.buf[TRANSACTION_ID]
    }

    pub fn set_transaction_id(&mut self, id: u8) {
        self.buf[TRANSACTION_ID] = id;
    }

    pub fn remaining_packets(&self) -> u16 {
        u16::from_be_bytes([self.buf[REMAINING_PACKETS], self.buf[REMAINING_PACKETS + 1]])
    }

    pub fn set_remaining_packets(&mut self, n: u16) {
        self.buf[REMAINING_PACKETS..REMAINING_PACKETS + 2].copy_from_slice(&n.to_be_bytes());
    }

    pub fn protocol_type(&self) -> u8 {
        self.buf[PROTOCOL_TYPE]
    }

    pub fn data_size(&self) -> u8 {
        self.buf[DATA_SIZE]
    }

    /// Overwrite the data size, clamping to the argument area.
    pub fn set_data_size(&mut self, size: u8) {
        debug_assert!(size as usize <= ARGS_LEN);
        self.buf[DATA_SIZE] = size.min(ARGS_LEN as u8);
    }

    pub fn command_class(&self) -> u8 {
        self.buf[COMMAND_CLASS]
    }

    pub fn command_id(&self) -> u8 {
        self.buf[COMMAND_ID]
    }

    pub fn arguments(&self) -> &[u8] {
        &self.buf[ARGS..ARGS + ARGS_LEN]
    }

    pub fn arguments_mut(&mut self) -> &mut [u8] {
        &mut self.buf[ARGS..ARGS + ARGS_LEN]
    }

    /// The first `data_size` argument bytes. A device-supplied size above 80
    /// is capped at the argument area.
    pub fn payload(&self) -> &[u8] {
        let len = (self.data_size() as usize).min(ARGS_LEN);
        &self.arguments()[..len]
    }

    /// Write `bytes` into the argument area starting at `offset`.
    ///
    /// Bytes that would fall outside the argument area are rejected.
    pub fn put(&mut self, offset: usize, bytes: &[u8]) -> Result<()> {
        let end = offset
            .checked_add(bytes.len())
            .filter(|&end| end <= ARGS_LEN)
            .ok_or_else(|| {
                Error::invalid(
                    "arguments",
                    format!("{} bytes at offset {offset} overflow the argument area", bytes.len()),
                )
            })?;
        self.arguments_mut()[offset..end].copy_from_slice(bytes);
        Ok(())
    }

    pub fn checksum(&self) -> u8 {
        self.buf[CRC]
    }

    /// Recompute and store the checksum. Call after the last mutation.
    pub fn seal(&mut self) {
        self.buf[CRC] = checksum(&self.buf);
    }

    /// Whether the stored checksum matches the record body.
    pub fn checksum_valid(&self) -> bool {
        self.buf[CRC] == checksum(&self.buf)
    }

    /// (remaining packets, class, id): the fields a response must echo.
    pub fn echo_key(&self) -> (u16, u8, u8) {
        (self.remaining_packets(), self.command_class(), self.command_id())
    }
}

impl fmt::Debug for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Report")
            .field("status", &self.status())
            .field("transaction_id", &format_args!("0x{:02X}", self.transaction_id()))
            .field("class", &format_args!("0x{:02X}", self.command_class()))
            .field("id", &format_args!("0x{:02X}", self.command_id()))
            .field("data_size", &self.data_size())
            .field("payload", &format_args!("{:02X?}", self.payload()))
            .finish()
    }
}
