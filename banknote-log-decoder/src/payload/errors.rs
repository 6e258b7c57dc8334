//! Device-status flag decoder (event code 0x48)
//!
//! The payload is one byte per flag, in the fixed order of the 60-entry
//! descriptor table. A shorter payload yields partial results: decoding
//! stops at the payload end and the remaining flags are simply absent.

use super::HEADER_LEN;
use crate::tables::{self, ERROR_FLAG_TABLE};
use crate::types::{DecodeError, ErrorInfo, FlagRecord, Result};

/// Decode a device-status byte sequence.
///
/// A flag is active when its value is exactly 1 and its table entry carries
/// an active meaning; reserved entries never activate. The banknote-transport
/// flag is the exception: any non-zero value is an error, and the value is
/// resolved against the transport sub-code table.
pub fn decode_errors(byte_sequence: &[u8]) -> Result<ErrorInfo> {
    if byte_sequence.len() < 4 {
        return Err(DecodeError::InsufficientData {
            needed: 4,
            got: byte_sequence.len(),
        });
    }

    let data = &byte_sequence[HEADER_LEN..];
    let mut flags = Vec::with_capacity(data.len().min(ERROR_FLAG_TABLE.len()));
    let mut active_errors = Vec::new();

    for (index, descriptor) in ERROR_FLAG_TABLE.iter().enumerate() {
        if index >= data.len() {
            break;
        }
        let value = data[index];
        let mut specific_text = None;

        if descriptor.is_special && value > 0 {
            let text = tables::transport_failure_text(value);
            active_errors.push(format!("{}: {}", descriptor.description, text));
            specific_text = Some(text);
        } else if value == 1 && !descriptor.active_meaning.is_empty() {
            active_errors.push(format!(
                "{}: {}",
                descriptor.description, descriptor.active_meaning
            ));
        }

        flags.push(FlagRecord {
            index,
            name: descriptor.name,
            description: descriptor.description,
            active_meaning: descriptor.active_meaning,
            scope: descriptor.scope,
            value,
            specific_text,
        });
    }

    let active_error_count = active_errors.len();
    Ok(ErrorInfo {
        flags,
        errors_detected: active_error_count > 0,
        active_error_count,
        active_errors,
    })
}
