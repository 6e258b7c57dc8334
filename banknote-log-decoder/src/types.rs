//! Core types for the banknote log decoder library
//!
//! This module defines the fundamental types the decoder emits when processing
//! diagnostic log text. The decoder is stateless and only outputs decoded
//! results - it performs no I/O and keeps no history.

use chrono::NaiveTime;
use serde::Serialize;
use std::fmt;

/// Time-of-day timestamp used throughout the decoder.
///
/// Device logs carry no date component, so entries can only be ordered
/// within a single log; a log that crosses midnight will compare wrong.
pub type Timestamp = NaiveTime;

/// Result type for decoder operations
pub type Result<T> = std::result::Result<T, DecodeError>;

/// One parsed log block: header metadata plus the flattened dump bytes.
///
/// Created once per block during parsing and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogEntry {
    /// Literal time-of-day text from the header, `HH:MM:SS.mmm`
    pub timestamp: String,
    /// `timestamp` parsed to sub-second precision, for ordering
    pub timestamp_value: Timestamp,
    /// Emitter identifier (the token before the event type)
    pub identifier: String,
    /// Free-text event type from the header
    pub event_type: String,
    /// Source file named in the header parenthesis
    pub source_file: String,
    /// Source line number, kept verbatim as written in the header
    pub line_number: String,
    /// Function name after the header colon
    pub function: String,
    /// Dump bytes concatenated across all hex-dump lines, in line order
    pub byte_sequence: Vec<u8>,
    /// `byte_sequence[2]` when the sequence has more than 2 bytes
    pub event_code: Option<u8>,
    /// The verbatim block text, kept for display by the caller
    pub raw_block: String,
}

impl LogEntry {
    /// Payload view: the byte sequence with its 3 header bytes dropped.
    ///
    /// The event code at index 2 is adjacent to, but not part of, the payload.
    pub fn payload(&self) -> &[u8] {
        if self.byte_sequence.len() > 3 {
            &self.byte_sequence[3..]
        } else {
            &[]
        }
    }
}

/// Errors that can occur during decoding
///
/// All of these are per-block or per-call values; a batch of entries with
/// some malformed ones still yields results for the rest.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("malformed header line: {0}")]
    MalformedHeader(String),

    #[error("malformed hex token {token:?} in dump line: {line}")]
    MalformedHexToken { token: String, line: String },

    #[error("insufficient data: need at least {needed} bytes, got {got}")]
    InsufficientData { needed: usize, got: usize },
}

/// Decoded count-result record (event code 0x24).
///
/// The format is auto-detected from the payload length; the three known
/// shapes are structurally independent so a fourth can be added without
/// touching the existing ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum CountInfo {
    /// KD series cycle counters (payload length 10 or 11)
    Kd {
        insert_count_last: u8,
        deposit_count_last: u8,
        reject_count_last: u8,
        insert_try_count: u8,
        insert_count_total: u16,
        deposit_count_total: u16,
        reject_count_total: u16,
    },
    /// KR series cumulative counters (payload length exactly 12)
    Kr1 {
        reject_count: u16,
        cassette_count: u16,
        drum1_count: u16,
        drum2_count: u16,
        drum3_count: u16,
        drum4_count: u16,
    },
    /// KR series per-cycle counters with drum direction (payload length >= 15)
    Kr2 {
        insert_count_last: u8,
        reject_count_last: u8,
        cassette_count_last: u16,
        drum_direction: DrumDirection,
        drum1_count_last: u8,
        drum2_count_last: u8,
        drum3_count_last: u8,
        drum4_count_last: u8,
        cassette_count_total: u16,
        drum1_count_total: u8,
        drum2_count_total: u8,
        drum3_count_total: u8,
        drum4_count_total: u8,
    },
    /// Payload length matches none of the known shapes; the raw bytes stay
    /// with the entry for the caller to display
    Unrecognized,
}

impl CountInfo {
    /// Short format tag, as printed in reports
    pub fn format_name(&self) -> &'static str {
        match self {
            CountInfo::Kd { .. } => "KD",
            CountInfo::Kr1 { .. } => "KR1",
            CountInfo::Kr2 { .. } => "KR2",
            CountInfo::Unrecognized => "unrecognized",
        }
    }
}

/// Drum transport direction reported in KR2 count records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DrumDirection {
    Deposit,
    Dispense,
}

impl fmt::Display for DrumDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrumDirection::Deposit => write!(f, "deposit"),
            DrumDirection::Dispense => write!(f, "dispense"),
        }
    }
}

/// Decoded per-banknote transaction record (event code 0x23).
///
/// Fixed 58-byte payload layout; the derived `*_text` fields carry the
/// resolved lookup-table texts so callers never consult the tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemInfo {
    pub item_number: u8,
    pub recognition_code: [u8; 4],
    pub recognition_error: [u8; 2],
    pub encoder: [u8; 4],
    pub destination: u8,
    pub reserved1: u8,
    pub reserved2: [u8; 3],
    pub serial_length: u8,
    pub serial: [u8; 32],
    pub denomination_info: [u8; 4],
    pub denomination_use_flag: u8,
    pub decimal_point: u8,
    pub extension: [u8; 2],
    pub status_code: u8,
    /// Destination name resolved from the destination table
    pub destination_text: &'static str,
    /// Status/rejection reason resolved from the status table
    pub status_text: &'static str,
    /// Printable serial number, or "not applicable" when the length
    /// field is 0 or out of range
    pub serial_text: String,
}

/// One decoded device-status flag (event code 0x48)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlagRecord {
    /// Index in the 60-entry descriptor table
    pub index: usize,
    /// Symbolic flag name
    pub name: &'static str,
    /// Human description of the monitored component
    pub description: &'static str,
    /// What a raised flag means ("Failure", "Open", ...); empty for
    /// the trailing reserved entries
    pub active_meaning: &'static str,
    /// Device-series applicability
    pub scope: &'static str,
    /// Raw byte value from the payload
    pub value: u8,
    /// Transport sub-code text, set only for the banknote-transport flag
    /// when its value is non-zero
    pub specific_text: Option<String>,
}

/// Decoded device-status bitfield (event code 0x48).
///
/// A payload shorter than 60 bytes yields partial results: flags past the
/// payload end are absent, not zero-filled, and callers must treat an
/// absent flag as unknown rather than inactive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorInfo {
    /// Decoded flags in descriptor-table order
    pub flags: Vec<FlagRecord>,
    /// "description: meaning" lines for every active flag, in table order
    pub active_errors: Vec<String>,
    pub active_error_count: usize,
    pub errors_detected: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_view() {
        let entry = sample_entry(vec![0xAA, 0xBB, 0x24, 0x01, 0x02]);
        assert_eq!(entry.payload(), &[0x01, 0x02]);

        let short = sample_entry(vec![0xAA, 0xBB, 0x24]);
        assert!(short.payload().is_empty());
    }

    #[test]
    fn test_drum_direction_display() {
        assert_eq!(format!("{}", DrumDirection::Deposit), "deposit");
        assert_eq!(format!("{}", DrumDirection::Dispense), "dispense");
    }

    #[test]
    fn test_count_format_names() {
        assert_eq!(CountInfo::Unrecognized.format_name(), "unrecognized");
    }

    fn sample_entry(bytes: Vec<u8>) -> LogEntry {
        LogEntry {
            timestamp: "12:00:00.000".to_string(),
            timestamp_value: NaiveTime::from_hms_milli_opt(12, 0, 0, 0).unwrap(),
            identifier: "DEV1".to_string(),
            event_type: "EVENT".to_string(),
            source_file: "main.c".to_string(),
            line_number: "42".to_string(),
            function: "handler".to_string(),
            event_code: if bytes.len() > 2 { Some(bytes[2]) } else { None },
            byte_sequence: bytes,
            raw_block: String::new(),
        }
    }
}
