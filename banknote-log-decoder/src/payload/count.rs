//! Count-result decoder (event code 0x24)
//!
//! The device reports counting results in three wire formats that share an
//! event code and differ only in payload length, so the format is
//! auto-detected from the length alone. Byte values themselves are never
//! validated - any 0-255 value is a legal counter.

use super::HEADER_LEN;
use crate::types::{CountInfo, DecodeError, DrumDirection, Result};
use byteorder::{ByteOrder, LittleEndian};

/// Decode a count-result byte sequence.
///
/// The two minimum-length checks overlap (the second subsumes the first);
/// the origin firmware protocol handler performs both, and boundary-length
/// behavior is kept identical to it.
pub fn decode_count(byte_sequence: &[u8]) -> Result<CountInfo> {
    if byte_sequence.len() < 4 {
        return Err(DecodeError::InsufficientData {
            needed: 4,
            got: byte_sequence.len(),
        });
    }
    if byte_sequence.len() < HEADER_LEN + 4 {
        return Err(DecodeError::InsufficientData {
            needed: HEADER_LEN + 4,
            got: byte_sequence.len(),
        });
    }

    let data = &byte_sequence[HEADER_LEN..];
    let info = match data.len() {
        10 | 11 => CountInfo::Kd {
            insert_count_last: data[0],
            deposit_count_last: data[1],
            reject_count_last: data[2],
            insert_try_count: data[3],
            insert_count_total: LittleEndian::read_u16(&data[4..6]),
            deposit_count_total: LittleEndian::read_u16(&data[6..8]),
            reject_count_total: LittleEndian::read_u16(&data[8..10]),
        },
        12 => CountInfo::Kr1 {
            reject_count: LittleEndian::read_u16(&data[0..2]),
            cassette_count: LittleEndian::read_u16(&data[2..4]),
            drum1_count: LittleEndian::read_u16(&data[4..6]),
            drum2_count: LittleEndian::read_u16(&data[6..8]),
            drum3_count: LittleEndian::read_u16(&data[8..10]),
            drum4_count: LittleEndian::read_u16(&data[10..12]),
        },
        n if n >= 15 => CountInfo::Kr2 {
            insert_count_last: data[0],
            reject_count_last: data[1],
            cassette_count_last: LittleEndian::read_u16(&data[2..4]),
            drum_direction: if data[4] == 1 {
                DrumDirection::Deposit
            } else {
                DrumDirection::Dispense
            },
            drum1_count_last: data[5],
            drum2_count_last: data[6],
            drum3_count_last: data[7],
            drum4_count_last: data[8],
            cassette_count_total: LittleEndian::read_u16(&data[9..11]),
            drum1_count_total: data[11],
            drum2_count_total: data[12],
            drum3_count_total: data[13],
            drum4_count_total: data[14],
        },
        _ => CountInfo::Unrecognized,
    };

    Ok(info)
}
