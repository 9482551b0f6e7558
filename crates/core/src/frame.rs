//! Custom-frame chunker.
//!
//! A custom frame is uploaded as one report per row segment, then latched
//! with a single custom-draw effect. Segments may cover any part of the
//! matrix in any order; the device accumulates them until the draw.
//!
//! Four record layouts exist:
//!
//! | layout | class/id | size | arguments |
//! |---|---|---|---|
//! | matrix | 0x03/0x0B | 0x46 | `[0xFF, row, start, stop, rgb..]` |
//! | one-row | 0x03/0x0C | 0x32 | `[start, stop, rgb..]` |
//! | extended | 0x0F/0x03 | 0x47 | `[0, 0, row, start, stop, rgb..]` |
//! | extended padded | 0x0F/0x03 | `len + 6` | `[0, 0, row, start, stop, rgb.., 0]` |

use crate::error::{Error, Result};
use crate::report::{new_report, Report, ARGS_LEN};
use crate::safety::row_length;
use serde::{Deserialize, Serialize};

/// Record layout used for custom-frame rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FrameLayout {
    /// Device has no per-pixel control.
    None,
    Matrix,
    OneRow,
    Extended,
    /// Extended with an explicit trailing zero and an exact data size.
    ExtendedPadded,
}

impl FrameLayout {
    /// Bytes of header that precede the RGB data in the argument area.
    fn header_len(self) -> usize {
        match self {
            Self::None => 0,
            Self::Matrix => 4,
            Self::OneRow => 2,
            Self::Extended => 5,
            Self::ExtendedPadded => 5,
        }
    }

    /// Largest RGB run one record can carry.
    pub fn max_row_bytes(self) -> usize {
        match self {
            Self::None => 0,
            Self::ExtendedPadded => ARGS_LEN - self.header_len() - 1,
            other => ARGS_LEN - other.header_len(),
        }
    }
}

/// One `(row, start_col..=stop_col)` run of pixels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameSegment {
    pub row: u8,
    pub start_col: u8,
    pub stop_col: u8,
    /// RGB triples, at least `(stop_col + 1 - start_col) * 3` bytes.
    pub rgb: Vec<u8>,
}

impl FrameSegment {
    pub fn new(row: u8, start_col: u8, stop_col: u8, rgb: Vec<u8>) -> Self {
        Self {
            row,
            start_col,
            stop_col,
            rgb,
        }
    }

    /// RGB bytes this segment must carry.
    pub fn row_length(&self) -> Result<usize> {
        row_length(self.start_col, self.stop_col)
    }
}

/// Split a packed `[row, start, stop, rgb × n]...` buffer into segments.
///
/// Any truncated or inconsistent record fails the whole buffer.
pub fn parse_segments(buf: &[u8]) -> Result<Vec<FrameSegment>> {
    let mut segments = Vec::new();
    let mut offset = 0;

    while offset < buf.len() {
        let Some(&[row, start_col, stop_col]) = buf.get(offset..offset + 3) else {
            return Err(Error::invalid(
                "frame",
                "expected row, start column and stop column before RGB data",
            ));
        };
        offset += 3;

        let len = row_length(start_col, stop_col)?;
        let rgb = buf.get(offset..offset + len).ok_or_else(|| {
            Error::invalid(
                "frame",
                format!("not enough RGB data to fill row {row}: need {len} bytes"),
            )
        })?;
        offset += len;

        segments.try_reserve(1)?;
        segments.push(FrameSegment::new(row, start_col, stop_col, rgb.to_vec()));
    }

    Ok(segments)
}

/// Check one segment against the layout and matrix; return its RGB run.
fn validate<'a>(
    layout: FrameLayout,
    rows: u8,
    cols: u8,
    segment: &'a FrameSegment,
) -> Result<&'a [u8]> {
    let len = segment.row_length()?;

    if segment.rgb.len() < len {
        return Err(Error::invalid(
            "frame",
            format!(
                "row {} columns {}..={} need {len} RGB bytes, got {}",
                segment.row,
                segment.start_col,
                segment.stop_col,
                segment.rgb.len()
            ),
        ));
    }
    if segment.row >= rows || segment.stop_col >= cols {
        return Err(Error::invalid(
            "frame",
            format!(
                "segment row {} columns {}..={} outside {rows}x{cols} matrix",
                segment.row, segment.start_col, segment.stop_col
            ),
        ));
    }
    if len > layout.max_row_bytes() {
        return Err(Error::invalid(
            "frame",
            format!(
                "{len} RGB bytes exceed the {}-byte limit of one record",
                layout.max_row_bytes()
            ),
        ));
    }

    Ok(&segment.rgb[..len])
}

fn encode_segment(layout: FrameLayout, segment: &FrameSegment, rgb: &[u8]) -> Result<Report> {
    let report = match layout {
        FrameLayout::None => {
            return Err(Error::invalid("frame", "device has no custom frame support"))
        }
        FrameLayout::Matrix => {
            let mut r = new_report(0x03, 0x0B, 0x46);
            r.put(0, &[0xFF, segment.row, segment.start_col, segment.stop_col])?;
            r.put(4, rgb)?;
            r
        }
        FrameLayout::OneRow => {
            let mut r = new_report(0x03, 0x0C, 0x32);
            r.put(0, &[segment.start_col, segment.stop_col])?;
            r.put(2, rgb)?;
            r
        }
        FrameLayout::Extended => {
            let mut r = new_report(0x0F, 0x03, 0x47);
            r.put(2, &[segment.row, segment.start_col, segment.stop_col])?;
            r.put(5, rgb)?;
            r
        }
        FrameLayout::ExtendedPadded => {
            // Trailing zero is already present in the zeroed record; the
            // data size is what makes it part of the payload.
            let mut r = new_report(0x0F, 0x03, (rgb.len() + 6) as u8);
            r.put(2, &[segment.row, segment.start_col, segment.stop_col])?;
            r.put(5, rgb)?;
            r
        }
    };
    Ok(report)
}

/// Encode every segment into a report, in order.
///
/// All segments are validated before any record is built, so a bad segment
/// anywhere in the batch means nothing is sent.
pub fn encode_segments(
    layout: FrameLayout,
    rows: u8,
    cols: u8,
    segments: &[FrameSegment],
) -> Result<Vec<Report>> {
    if layout == FrameLayout::None {
        return Err(Error::invalid("frame", "device has no custom frame support"));
    }

    let runs = segments
        .iter()
        .map(|s| validate(layout, rows, cols, s))
        .collect::<Result<Vec<_>>>()?;

    let mut reports = Vec::new();
    reports.try_reserve_exact(segments.len())?;
    for (segment, rgb) in segments.iter().zip(runs) {
        reports.push(encode_segment(layout, segment, rgb)?);
    }
    Ok(reports)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixels(n: usize) -> Vec<u8> {
        (0..n).map(|i| i as u8).collect()
    }

    #[test]
    fn full_row_needs_66_bytes() {
        let short = FrameSegment::new(0, 0, 21, pixels(65));
        let exact = FrameSegment::new(0, 0, 21, pixels(66));
        assert_eq!(exact.row_length().unwrap(), 66);
        assert!(encode_segments(FrameLayout::Matrix, 6, 22, &[short]).is_err());
        assert!(encode_segments(FrameLayout::Matrix, 6, 22, &[exact]).is_ok());
    }

    #[test]
    fn matrix_layout() {
        let seg = FrameSegment::new(2, 1, 2, vec![1, 2, 3, 4, 5, 6]);
        let r = &encode_segments(FrameLayout::Matrix, 6, 22, &[seg]).unwrap()[0];
        assert_eq!((r.command_class(), r.command_id(), r.data_size()), (0x03, 0x0B, 0x46));
        assert_eq!(&r.arguments()[..11], &[0xFF, 2, 1, 2, 1, 2, 3, 4, 5, 6, 0]);
    }

    #[test]
    fn one_row_layout() {
        let seg = FrameSegment::new(0, 0, 0, vec![9, 8, 7]);
        let r = &encode_segments(FrameLayout::OneRow, 1, 15, &[seg]).unwrap()[0];
        assert_eq!((r.command_class(), r.command_id(), r.data_size()), (0x03, 0x0C, 0x32));
        assert_eq!(&r.arguments()[..6], &[0, 0, 9, 8, 7, 0]);
    }

    #[test]
    fn extended_layout() {
        let seg = FrameSegment::new(3, 4, 4, vec![0xAA, 0xBB, 0xCC]);
        let r = &encode_segments(FrameLayout::Extended, 6, 22, &[seg]).unwrap()[0];
        assert_eq!((r.command_class(), r.command_id(), r.data_size()), (0x0F, 0x03, 0x47));
        assert_eq!(&r.arguments()[..8], &[0, 0, 3, 4, 4, 0xAA, 0xBB, 0xCC]);
    }

    #[test]
    fn extended_padded_layout_has_trailing_zero() {
        let seg = FrameSegment::new(0, 0, 1, vec![1, 1, 1, 2, 2, 2]);
        let r = &encode_segments(FrameLayout::ExtendedPadded, 1, 15, &[seg]).unwrap()[0];
        assert_eq!(r.data_size(), 12);
        assert_eq!(r.payload(), &[0, 0, 0, 0, 1, 1, 1, 1, 2, 2, 2, 0]);
    }

    #[test]
    fn excess_rgb_is_ignored() {
        let seg = FrameSegment::new(0, 0, 0, vec![1, 2, 3, 4, 5, 6]);
        let r = &encode_segments(FrameLayout::OneRow, 1, 15, &[seg]).unwrap()[0];
        assert_eq!(&r.arguments()[..6], &[0, 0, 1, 2, 3, 0]);
    }

    #[test]
    fn segment_outside_matrix_rejected() {
        let row = FrameSegment::new(6, 0, 0, pixels(3));
        let col = FrameSegment::new(0, 0, 22, pixels(69));
        assert!(encode_segments(FrameLayout::Matrix, 6, 22, &[row]).is_err());
        assert!(encode_segments(FrameLayout::Matrix, 6, 22, &[col]).is_err());
    }

    #[test]
    fn segment_over_record_capacity_rejected() {
        // 26 columns = 78 bytes: fits one-row, not extended.
        let seg = FrameSegment::new(0, 0, 25, pixels(78));
        assert!(encode_segments(FrameLayout::OneRow, 1, 30, &[seg.clone()]).is_ok());
        assert!(encode_segments(FrameLayout::Extended, 1, 30, &[seg]).is_err());

        let seg = FrameSegment::new(0, 0, 24, pixels(75));
        assert!(encode_segments(FrameLayout::Extended, 1, 30, &[seg.clone()]).is_ok());
        assert!(encode_segments(FrameLayout::ExtendedPadded, 1, 30, &[seg]).is_err());
    }

    #[test]
    fn one_bad_segment_fails_the_batch() {
        let good = FrameSegment::new(0, 0, 0, pixels(3));
        let bad = FrameSegment::new(0, 3, 2, pixels(3));
        assert!(matches!(
            encode_segments(FrameLayout::Matrix, 6, 22, &[good, bad]),
            Err(Error::InvalidArgument { field: "segment", .. })
        ));
    }

    #[test]
    fn no_frame_layout_rejected() {
        let seg = FrameSegment::new(0, 0, 0, pixels(3));
        assert!(encode_segments(FrameLayout::None, 1, 1, &[seg]).is_err());
    }

    #[test]
    fn order_is_preserved() {
        let segs = [
            FrameSegment::new(4, 0, 0, pixels(3)),
            FrameSegment::new(1, 0, 0, pixels(3)),
            FrameSegment::new(3, 0, 0, pixels(3)),
        ];
        let rows: Vec<u8> = encode_segments(FrameLayout::Extended, 6, 22, &segs)
            .unwrap()
            .iter()
            .map(|r| r.arguments()[2])
            .collect();
        assert_eq!(rows, vec![4, 1, 3]);
    }

    #[test]
    fn parse_packed_buffer() {
        let buf = [0, 0, 1, 1, 2, 3, 4, 5, 6, 2, 5, 5, 7, 8, 9];
        let segs = parse_segments(&buf).unwrap();
        assert_eq!(
            segs,
            vec![
                FrameSegment::new(0, 0, 1, vec![1, 2, 3, 4, 5, 6]),
                FrameSegment::new(2, 5, 5, vec![7, 8, 9]),
            ]
        );
        assert!(parse_segments(&[]).unwrap().is_empty());
    }

    #[test]
    fn parse_rejects_truncated_records() {
        assert!(parse_segments(&[0, 0]).is_err());
        assert!(parse_segments(&[0, 0, 1, 1, 2, 3]).is_err());
        assert!(parse_segments(&[0, 2, 1]).is_err());
    }
}
