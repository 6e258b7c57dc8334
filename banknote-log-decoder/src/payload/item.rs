//! Per-banknote transaction record decoder (event code 0x23)
//!
//! One record per processed banknote, as a fixed 58-byte layout. The decoded
//! sub-fields partition the payload exactly: offsets 0..58 with no gaps.

use super::HEADER_LEN;
use crate::tables;
use crate::types::{DecodeError, ItemInfo, Result};

/// Exact payload size of a banknote record
const RECORD_LEN: usize = 58;

/// Longest serial number the record format can carry
const SERIAL_FIELD_LEN: usize = 32;

/// Decode a banknote transaction byte sequence.
///
/// Both minimum-length checks come from the origin protocol handler; the
/// first is subsumed by the second but is kept so boundary-length inputs
/// fail with the same reported requirement.
pub fn decode_item(byte_sequence: &[u8]) -> Result<ItemInfo> {
    if byte_sequence.len() < RECORD_LEN {
        return Err(DecodeError::InsufficientData {
            needed: RECORD_LEN,
            got: byte_sequence.len(),
        });
    }
    if byte_sequence.len() < HEADER_LEN + RECORD_LEN {
        return Err(DecodeError::InsufficientData {
            needed: HEADER_LEN + RECORD_LEN,
            got: byte_sequence.len(),
        });
    }

    let data = &byte_sequence[HEADER_LEN..];

    let mut recognition_code = [0u8; 4];
    recognition_code.copy_from_slice(&data[1..5]);
    let mut recognition_error = [0u8; 2];
    recognition_error.copy_from_slice(&data[5..7]);
    let mut encoder = [0u8; 4];
    encoder.copy_from_slice(&data[7..11]);
    let mut reserved2 = [0u8; 3];
    reserved2.copy_from_slice(&data[13..16]);
    let mut serial = [0u8; SERIAL_FIELD_LEN];
    serial.copy_from_slice(&data[17..49]);
    let mut denomination_info = [0u8; 4];
    denomination_info.copy_from_slice(&data[49..53]);
    let mut extension = [0u8; 2];
    extension.copy_from_slice(&data[55..57]);

    let destination = data[11];
    let serial_length = data[16];
    let status_code = data[57];

    Ok(ItemInfo {
        item_number: data[0],
        recognition_code,
        recognition_error,
        encoder,
        destination,
        reserved1: data[12],
        reserved2,
        serial_length,
        serial,
        denomination_info,
        denomination_use_flag: data[53],
        decimal_point: data[54],
        extension,
        status_code,
        destination_text: tables::destination_text(destination),
        status_text: tables::status_text(status_code),
        serial_text: decode_serial(&serial, serial_length),
    })
}

/// Render the serial field as text.
///
/// Only the first `length` bytes are significant, and only when the length
/// is in range; non-printable bytes become `?`.
fn decode_serial(serial: &[u8; SERIAL_FIELD_LEN], length: u8) -> String {
    let length = length as usize;
    if length == 0 || length > SERIAL_FIELD_LEN {
        return "not applicable".to_string();
    }
    serial[..length]
        .iter()
        .map(|&b| if (32..=126).contains(&b) { b as char } else { '?' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build a full 61-byte sequence with the given payload overrides
    fn record(edit: impl FnOnce(&mut [u8])) -> Vec<u8> {
        let mut bytes = vec![0u8; HEADER_LEN + RECORD_LEN];
        bytes[2] = 0x23;
        edit(&mut bytes[HEADER_LEN..]);
        bytes
    }

    #[test]
    fn test_field_offsets() {
        let bytes = record(|data| {
            data[0] = 7; // item number
            data[1..5].copy_from_slice(&[0xA1, 0xA2, 0xA3, 0xA4]);
            data[5..7].copy_from_slice(&[0xB1, 0xB2]);
            data[7..11].copy_from_slice(&[0xC1, 0xC2, 0xC3, 0xC4]);
            data[11] = 1; // destination: cassette
            data[12] = 0xEE;
            data[53] = 1;
            data[54] = 2;
            data[55..57].copy_from_slice(&[0xD1, 0xD2]);
            data[57] = 0; // status: no error
        });
        let info = decode_item(&bytes).unwrap();

        assert_eq!(info.item_number, 7);
        assert_eq!(info.recognition_code, [0xA1, 0xA2, 0xA3, 0xA4]);
        assert_eq!(info.recognition_error, [0xB1, 0xB2]);
        assert_eq!(info.encoder, [0xC1, 0xC2, 0xC3, 0xC4]);
        assert_eq!(info.destination, 1);
        assert_eq!(info.destination_text, "Cassette");
        assert_eq!(info.reserved1, 0xEE);
        assert_eq!(info.denomination_use_flag, 1);
        assert_eq!(info.decimal_point, 2);
        assert_eq!(info.extension, [0xD1, 0xD2]);
        assert_eq!(info.status_code, 0);
        assert_eq!(info.status_text, "No error");
    }

    #[test]
    fn test_serial_decodes_printable_prefix() {
        let bytes = record(|data| {
            data[16] = 5;
            data[17..22].copy_from_slice(b"ABCDE");
            data[22] = b'X'; // beyond the declared length, must be ignored
        });
        let info = decode_item(&bytes).unwrap();
        assert_eq!(info.serial_length, 5);
        assert_eq!(info.serial_text, "ABCDE");
    }

    #[test]
    fn test_serial_replaces_non_printable_bytes() {
        let bytes = record(|data| {
            data[16] = 4;
            data[17..21].copy_from_slice(&[b'A', 0x07, b'B', 0xFF]);
        });
        let info = decode_item(&bytes).unwrap();
        assert_eq!(info.serial_text, "A?B?");
    }

    #[test]
    fn test_serial_length_out_of_range() {
        let zero = decode_item(&record(|data| data[16] = 0)).unwrap();
        assert_eq!(zero.serial_text, "not applicable");

        let oversized = decode_item(&record(|data| data[16] = 40)).unwrap();
        assert_eq!(oversized.serial_text, "not applicable");

        // 32 is the largest in-range length
        let full = decode_item(&record(|data| {
            data[16] = 32;
            data[17..49].fill(b'Z');
        }))
        .unwrap();
        assert_eq!(full.serial_text, "Z".repeat(32));
    }

    #[test]
    fn test_unknown_destination_and_status() {
        let bytes = record(|data| {
            data[11] = 9;
            data[57] = 0x7F;
        });
        let info = decode_item(&bytes).unwrap();
        assert_eq!(info.destination_text, "unknown");
        assert_eq!(info.status_text, "unknown status");
    }

    #[test]
    fn test_insufficient_data_boundaries() {
        assert_eq!(
            decode_item(&[0u8; 57]),
            Err(DecodeError::InsufficientData { needed: 58, got: 57 })
        );
        assert_eq!(
            decode_item(&[0u8; 58]),
            Err(DecodeError::InsufficientData { needed: 61, got: 58 })
        );
        assert_eq!(
            decode_item(&[0u8; 60]),
            Err(DecodeError::InsufficientData { needed: 61, got: 60 })
        );
        assert!(decode_item(&[0u8; 61]).is_ok());
        // Extra trailing bytes are tolerated; the layout is offset-fixed
        assert!(decode_item(&[0u8; 70]).is_ok());
    }
}
