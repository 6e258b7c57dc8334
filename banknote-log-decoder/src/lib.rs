//! Banknote Log Decoder Library
//!
//! A stateless, reusable library for decoding diagnostic logs emitted by
//! banknote-processing hardware: free-form text blocks, each with a header
//! line and hex-dump lines that together encode a timestamped event with a
//! binary payload.
//!
//! # Architecture
//!
//! This library is intentionally minimal and focused on decoding:
//! - Parses log text into ordered [`LogEntry`] records (header metadata plus
//!   the flattened dump bytes)
//! - Decodes the three known event payload families: count results (0x24),
//!   per-banknote records (0x23), and the device-status flag field (0x48)
//! - Groups entries by event code and summarizes per-code statistics
//!
//! The library does NOT:
//! - Read files or perform any other I/O
//! - Render reports or markup
//! - Interpret event codes beyond the three known families (unknown codes
//!   keep their raw byte sequence)
//!
//! All higher-level functionality is in the application layer
//! (banknote-log-cli).
//!
//! # Example Usage
//!
//! ```
//! use banknote_log_decoder::{analyze, decode_count, default_event_codes, parse};
//!
//! let text = "\
//! 10:22:33.456|DEV01 RECV EVENT (comm.c,120):on_frame
//! 0000h 02 10 24 05 08 03 02 10 00 64 00 32 00  | ..$......d.2.";
//!
//! let parsed = parse(text);
//! assert!(parsed.errors.is_empty());
//!
//! let analysis = analyze(&parsed.entries, &default_event_codes());
//! assert_eq!(analysis.summary[&0x24].count, 1);
//!
//! let info = decode_count(&parsed.entries[0].byte_sequence).unwrap();
//! assert_eq!(info.format_name(), "KD");
//! ```

// Public modules
pub mod analyzer;
pub mod parser;
pub mod payload;
pub mod types;

// Re-export main types for convenience
pub use analyzer::{
    analyze, default_event_codes, AnalysisResult, EventCodes, EventSummary,
    BANKNOTE_RECORD_CODE, COUNT_RESULT_CODE, DEVICE_ERROR_CODE,
};
pub use parser::{parse, BlockError, ParseResult};
pub use payload::{decode_count, decode_errors, decode_item};
pub use types::{
    CountInfo, DecodeError, DrumDirection, ErrorInfo, FlagRecord, ItemInfo, LogEntry, Result,
    Timestamp,
};

// Internal modules (not exposed in public API)
mod tables;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
