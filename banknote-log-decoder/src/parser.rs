//! Log block parser
//!
//! Splits raw diagnostic-log text into blank-line-delimited blocks and turns
//! each block into a [`LogEntry`]: header metadata plus the flattened bytes
//! of its hex-dump lines. Parsing is recoverable per block - one malformed
//! block never aborts the rest of the file.

use crate::types::{DecodeError, LogEntry};
use chrono::NaiveTime;
use regex::Regex;
use std::sync::OnceLock;

/// Result of parsing one log text.
///
/// `entries` preserves input block order. `errors` records the blocks that
/// had to be discarded (malformed header or hex token) so the caller can
/// report them; blocks with fewer than two non-empty lines are skipped
/// without a record.
#[derive(Debug, Clone, Default)]
pub struct ParseResult {
    /// Successfully parsed entries, in input order
    pub entries: Vec<LogEntry>,
    /// Per-block failures, with the index of the offending block
    pub errors: Vec<BlockError>,
}

/// A discarded block and the reason it failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockError {
    /// Zero-based index among the blank-line-delimited blocks
    pub block_index: usize,
    pub error: DecodeError,
}

fn header_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        // HH:MM:SS.mmm|IDENTIFIER EVENT_TYPE (SOURCE_FILE,LINE):FUNCTION
        Regex::new(r"^(\d{2}:\d{2}:\d{2}\.\d{3})\|(\S+)\s+(.+?)\s+\(([^,]+),(\d+)\):(.+)$")
            .expect("header pattern is valid")
    })
}

fn dump_line_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        // LABELh BB BB BB ... <trailing description text>
        Regex::new(r"^\w+h\s+([0-9A-F\s]+)\s+.+").expect("dump-line pattern is valid")
    })
}

fn block_separator_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\n\s*\n").expect("separator pattern is valid"))
}

/// Parse raw log text into entries.
///
/// Blocks are separated by one or more blank lines. A block needs a header
/// line matching the log grammar plus at least one further line; dump lines
/// contribute their hex bytes to the entry's byte sequence in line order,
/// lines containing the literal marker `HEX DUMP` are skipped, and any other
/// line is ignored.
pub fn parse(text: &str) -> ParseResult {
    let mut result = ParseResult::default();

    for (block_index, block) in block_separator_regex().split(text.trim()).enumerate() {
        if block.trim().is_empty() {
            continue;
        }
        match parse_block(block) {
            Ok(Some(entry)) => result.entries.push(entry),
            Ok(None) => {} // fewer than two lines, skipped silently
            Err(error) => result.errors.push(BlockError { block_index, error }),
        }
    }

    log::debug!(
        "parsed {} entries, discarded {} blocks",
        result.entries.len(),
        result.errors.len()
    );
    result
}

/// Parse a single block. `Ok(None)` means the block is too short to be an
/// entry; errors mean the block was recognizably an entry but malformed.
fn parse_block(block: &str) -> Result<Option<LogEntry>, DecodeError> {
    let block = block.trim();
    let mut lines = block.lines();

    let header = match lines.next() {
        Some(line) => line,
        None => return Ok(None),
    };
    let rest: Vec<&str> = lines.collect();
    if rest.is_empty() {
        return Ok(None);
    }

    let captures = header_regex()
        .captures(header)
        .ok_or_else(|| DecodeError::MalformedHeader(header.to_string()))?;

    let timestamp = captures[1].to_string();
    let timestamp_value = NaiveTime::parse_from_str(&timestamp, "%H:%M:%S%.3f")
        .map_err(|_| DecodeError::MalformedHeader(header.to_string()))?;

    let mut byte_sequence = Vec::new();
    for line in rest {
        if line.contains("HEX DUMP") {
            continue;
        }
        if let Some(dump) = dump_line_regex().captures(line) {
            parse_hex_group(dump[1].trim(), line, &mut byte_sequence)?;
        }
    }

    let event_code = if byte_sequence.len() > 2 {
        Some(byte_sequence[2])
    } else {
        None
    };

    Ok(Some(LogEntry {
        timestamp,
        timestamp_value,
        identifier: captures[2].to_string(),
        event_type: captures[3].to_string(),
        source_file: captures[4].to_string(),
        line_number: captures[5].to_string(),
        function: captures[6].to_string(),
        byte_sequence,
        event_code,
        raw_block: block.to_string(),
    }))
}

/// Parse one dump line's hex-byte group into the accumulator.
///
/// Every token must be exactly two hex digits; anything else fails the
/// whole entry so a corrupt dump is never half-ingested.
fn parse_hex_group(group: &str, line: &str, out: &mut Vec<u8>) -> Result<(), DecodeError> {
    for token in group.split_whitespace() {
        if token.len() != 2 {
            return Err(DecodeError::MalformedHexToken {
                token: token.to_string(),
                line: line.to_string(),
            });
        }
        let byte = u8::from_str_radix(token, 16).map_err(|_| DecodeError::MalformedHexToken {
            token: token.to_string(),
            line: line.to_string(),
        })?;
        out.push(byte);
    }
    Ok(())
}
