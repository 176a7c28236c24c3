//! Intel HEX reader.
//!
//! Every record is `:LLAAAATT<data>CC`. Data records are placed relative to the
//! current extended address and merged into contiguous segments.

use eyre::{Context, Result, bail};

use crate::image::Segment;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RecordType {
    Data,
    EndOfFile,
    ExtendedSegmentAddress,
    StartSegmentAddress,
    ExtendedLinearAddress,
    StartLinearAddress,
}

impl RecordType {
    fn from_byte(byte: u8) -> Result<Self> {
        Ok(match byte {
            0x00 => RecordType::Data,
            0x01 => RecordType::EndOfFile,
            0x02 => RecordType::ExtendedSegmentAddress,
            0x03 => RecordType::StartSegmentAddress,
            0x04 => RecordType::ExtendedLinearAddress,
            0x05 => RecordType::StartLinearAddress,
            _ => bail!("unknown record type {byte:#04x}"),
        })
    }
}

#[derive(Debug)]
struct Record {
    kind: RecordType,
    offset: u16,
    data: Vec<u8>,
}

impl Record {
    fn parse(line: &str) -> Result<Self> {
        let Some(digits) = line.strip_prefix(':') else {
            bail!("record does not start with ':'");
        };
        let bytes = hex_bytes(digits)?;

        // length, address (2), type, checksum
        if bytes.len() < 5 {
            bail!("record too short");
        }
        let len = bytes[0] as usize;
        if bytes.len() != len + 5 {
            bail!(
                "record declares {len} data bytes but contains {}",
                bytes.len() - 5
            );
        }

        let sum = bytes.iter().fold(0u8, |sum, byte| sum.wrapping_add(*byte));
        if sum != 0 {
            let found = bytes[bytes.len() - 1];
            let expected = found.wrapping_sub(sum);
            bail!("checksum mismatch (expected {expected:#04x}, found {found:#04x})");
        }

        let kind = RecordType::from_byte(bytes[3])?;
        let expected_len = match kind {
            RecordType::Data => None,
            RecordType::EndOfFile => Some(0),
            RecordType::ExtendedSegmentAddress | RecordType::ExtendedLinearAddress => Some(2),
            RecordType::StartSegmentAddress | RecordType::StartLinearAddress => Some(4),
        };
        if let Some(expected_len) = expected_len
            && expected_len != len
        {
            bail!("{kind:?} record must carry {expected_len} data bytes, found {len}");
        }

        Ok(Record {
            kind,
            offset: u16::from_be_bytes([bytes[1], bytes[2]]),
            data: bytes[4..4 + len].to_vec(),
        })
    }
}

fn hex_bytes(digits: &str) -> Result<Vec<u8>> {
    let digits = digits.as_bytes();
    if digits.len() % 2 != 0 {
        bail!("odd number of hex digits");
    }
    digits
        .chunks(2)
        .map(|pair| {
            let high = (pair[0] as char).to_digit(16);
            let low = (pair[1] as char).to_digit(16);
            match (high, low) {
                (Some(high), Some(low)) => Ok(((high << 4) | low) as u8),
                _ => bail!(
                    "invalid hex digits '{}'",
                    String::from_utf8_lossy(pair)
                ),
            }
        })
        .collect()
}

/// The contents of an Intel HEX file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HexFile {
    /// Contiguous runs of data, sorted by address and never overlapping.
    pub segments: Vec<Segment>,
    /// Start address from a start segment (CS:IP) or start linear address record.
    pub entry: Option<u32>,
}

pub fn parse(input: &str) -> Result<HexFile> {
    let mut base = 0u32;
    let mut entry = None;
    let mut chunks: Vec<Segment> = Vec::new();
    let mut saw_end = false;
    let mut records = 0usize;

    for (index, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let line_no = index + 1;
        let record =
            Record::parse(line).wrap_err_with(|| format!("invalid record on line {line_no}"))?;
        records += 1;

        match record.kind {
            RecordType::Data => {
                let address = base.wrapping_add(record.offset as u32) as u64;
                match chunks.last_mut() {
                    Some(last) if last.end() == address => last.bytes.extend(&record.data),
                    _ => chunks.push(Segment {
                        base: address,
                        bytes: record.data,
                    }),
                }
            }
            RecordType::EndOfFile => {
                saw_end = true;
                break;
            }
            RecordType::ExtendedSegmentAddress => {
                base = (u16::from_be_bytes([record.data[0], record.data[1]]) as u32) << 4;
            }
            RecordType::ExtendedLinearAddress => {
                base = (u16::from_be_bytes([record.data[0], record.data[1]]) as u32) << 16;
            }
            RecordType::StartSegmentAddress => {
                let cs = u16::from_be_bytes([record.data[0], record.data[1]]) as u32;
                let ip = u16::from_be_bytes([record.data[2], record.data[3]]) as u32;
                entry = Some(cs * 16 + ip);
            }
            RecordType::StartLinearAddress => {
                entry = Some(u32::from_be_bytes([
                    record.data[0],
                    record.data[1],
                    record.data[2],
                    record.data[3],
                ]));
            }
        }
    }

    if !saw_end {
        tracing::warn!("no end-of-file record");
    }

    let segments = merge(chunks)?;
    tracing::debug!(records, segments = segments.len(), ?entry, "read Intel HEX file");

    Ok(HexFile { segments, entry })
}

/// Sorts data runs by address and joins the ones that touch.
fn merge(mut chunks: Vec<Segment>) -> Result<Vec<Segment>> {
    chunks.sort_by_key(|chunk| chunk.base);

    let mut segments: Vec<Segment> = Vec::with_capacity(chunks.len());
    for chunk in chunks {
        match segments.last_mut() {
            Some(last) if chunk.base < last.end() => {
                bail!("data at {:#x} overlaps earlier data", chunk.base);
            }
            Some(last) if chunk.base == last.end() => last.bytes.extend(chunk.bytes),
            _ => segments.push(chunk),
        }
    }
    Ok(segments)
}

#[cfg(test)]
mod tests {
    use super::{HexFile, parse};
    use crate::image::Segment;

    #[test]
    fn data_and_end() {
        let file = parse(
            ":0400000013000000E9\n\
             :040004006780000011\n\
             :00000001FF\n",
        )
        .unwrap();
        assert_eq!(
            file,
            HexFile {
                segments: vec![Segment {
                    base: 0,
                    bytes: vec![0x13, 0, 0, 0, 0x67, 0x80, 0, 0],
                }],
                entry: None,
            }
        );
    }

    #[test]
    fn extended_linear_address_and_entry() {
        let file = parse(
            ":020000040800F2\n\
             :020010000100ED\n\
             :0400000508000010DF\n\
             :00000001FF\n",
        )
        .unwrap();
        assert_eq!(file.segments.len(), 1);
        assert_eq!(file.segments[0].base, 0x0800_0010);
        assert_eq!(file.segments[0].bytes, vec![0x01, 0x00]);
        assert_eq!(file.entry, Some(0x0800_0010));
    }

    #[test]
    fn extended_segment_address_and_start_segment() {
        let file = parse(
            ":020000021000EC\n\
             :020004000100F9\n\
             :0400000310000004E5\n\
             :00000001FF\n",
        )
        .unwrap();
        assert_eq!(file.segments[0].base, 0x1_0004);
        assert_eq!(file.entry, Some(0x1_0004));
    }

    #[test]
    fn gaps_start_new_segments() {
        let file = parse(
            ":020000000100FD\n\
             :02001000010EDF\n\
             :00000001FF\n",
        )
        .unwrap();
        let bases = file.segments.iter().map(|s| s.base).collect::<Vec<_>>();
        assert_eq!(bases, vec![0, 0x10]);
    }

    #[test]
    fn out_of_order_records_are_merged() {
        let file = parse(
            ":02000200010EED\n\
             :020000000100FD\n\
             :00000001FF\n",
        )
        .unwrap();
        assert_eq!(file.segments.len(), 1);
        assert_eq!(file.segments[0].bytes, vec![0x01, 0x00, 0x01, 0x0e]);
    }

    #[test]
    fn stops_at_end_of_file() {
        let file = parse(
            ":020000000100FD\n\
             :00000001FF\n\
             this is not a record\n",
        )
        .unwrap();
        assert_eq!(file.segments[0].bytes, vec![0x01, 0x00]);
    }

    #[test]
    fn tolerates_crlf_lowercase_and_blank_lines() {
        let file = parse(":020000000100fd\r\n\r\n:00000001ff\r\n").unwrap();
        assert_eq!(file.segments[0].bytes, vec![0x01, 0x00]);
    }

    #[test]
    fn checksum_errors_name_the_line() {
        let err = parse(
            ":020000000100FD\n\
             :02000200010EEE\n",
        )
        .unwrap_err();
        let message = format!("{err:?}");
        assert!(message.contains("line 2"), "{message}");
        assert!(message.contains("checksum mismatch"), "{message}");
    }

    #[test]
    fn malformed_records() {
        for (input, needle) in [
            ("020000000100FD", "does not start with ':'"),
            (":0200", "too short"),
            (":0400000013000000", "declares 4 data bytes"),
            (":00000006FA", "unknown record type"),
            (":0100000400FB", "must carry 2 data bytes"),
            (":02000000010G", "invalid hex digits"),
            (":020000000100F", "odd number"),
        ] {
            let err = parse(input).unwrap_err();
            let message = format!("{err:?}");
            assert!(message.contains(needle), "{input}: {message}");
            assert!(message.contains("line 1"), "{input}: {message}");
        }
    }

    #[test]
    fn overlapping_data_is_rejected() {
        let err = parse(
            ":020000000100FD\n\
             :020001000100FC\n",
        )
        .unwrap_err();
        assert!(format!("{err:?}").contains("overlaps"));
    }
}
