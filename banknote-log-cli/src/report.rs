//! Report rendering
//!
//! Turns a parsed log into the two consumer views: a line-by-line text
//! report (per-entry metadata plus the decoded payload) followed by the
//! per-event-code summary, or the same data as JSON.

use anyhow::Result;
use banknote_log_decoder::{
    analyze, decode_count, decode_errors, decode_item, CountInfo, ErrorInfo, EventCodes,
    EventSummary, ItemInfo, LogEntry, ParseResult, BANKNOTE_RECORD_CODE, COUNT_RESULT_CODE,
    DEVICE_ERROR_CODE,
};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Write;

/// Render the full text report.
pub fn render_text(parsed: &ParseResult, codes: &EventCodes, summary_only: bool) -> Result<String> {
    let analysis = analyze(&parsed.entries, codes);
    let mut out = String::new();

    if !summary_only {
        writeln!(out, "═══ Entries ═══")?;
        for (index, entry) in parsed.entries.iter().enumerate() {
            write_entry(&mut out, index, entry, codes)?;
        }
        writeln!(out)?;
    }

    writeln!(out, "═══ Summary ═══")?;
    writeln!(out, "entries: {}", parsed.entries.len())?;
    writeln!(out, "discarded blocks: {}", parsed.errors.len())?;
    for (code, summary) in &analysis.summary {
        write!(
            out,
            "0x{:02X} {}: {} event(s)",
            code, summary.description, summary.count
        )?;
        if let (Some(first), Some(last)) = (summary.first_occurrence, summary.last_occurrence) {
            write!(out, ", first {} last {}", first, last)?;
        }
        writeln!(out)?;
    }

    Ok(out)
}

fn write_entry(
    out: &mut String,
    index: usize,
    entry: &LogEntry,
    codes: &EventCodes,
) -> Result<()> {
    writeln!(
        out,
        "\n[{}] {} {} {} ({}:{}) {}",
        index + 1,
        entry.timestamp,
        entry.identifier,
        entry.event_type,
        entry.source_file,
        entry.line_number,
        entry.function
    )?;
    writeln!(out, "    bytes: {}", hex_string(&entry.byte_sequence))?;

    let code = match entry.event_code {
        Some(code) => code,
        None => {
            writeln!(out, "    event code: none (dump too short)")?;
            return Ok(());
        }
    };
    match codes.get(&code) {
        Some(description) => writeln!(out, "    event code: 0x{:02X} - {}", code, description)?,
        None => writeln!(out, "    event code: 0x{:02X} - not interpreted", code)?,
    }

    match decode_entry(entry) {
        Some(Ok(decoded)) => write_payload(out, &decoded)?,
        Some(Err(error)) => writeln!(out, "    decode failed: {}", error)?,
        None => {}
    }
    Ok(())
}

fn write_payload(out: &mut String, decoded: &DecodedPayload) -> Result<()> {
    match decoded {
        DecodedPayload::Count(info) => write_count(out, info),
        DecodedPayload::Item(info) => write_item(out, info),
        DecodedPayload::Errors(info) => write_errors(out, info),
    }
}

fn write_count(out: &mut String, info: &CountInfo) -> Result<()> {
    writeln!(out, "    count format: {}", info.format_name())?;
    match info {
        CountInfo::Kd {
            insert_count_last,
            deposit_count_last,
            reject_count_last,
            insert_try_count,
            insert_count_total,
            deposit_count_total,
            reject_count_total,
        } => {
            writeln!(
                out,
                "    last cycle: inserted {}, deposited {}, rejected {}, attempts {}",
                insert_count_last, deposit_count_last, reject_count_last, insert_try_count
            )?;
            writeln!(
                out,
                "    totals: inserted {}, deposited {}, rejected {}",
                insert_count_total, deposit_count_total, reject_count_total
            )?;
        }
        CountInfo::Kr1 {
            reject_count,
            cassette_count,
            drum1_count,
            drum2_count,
            drum3_count,
            drum4_count,
        } => {
            writeln!(
                out,
                "    totals: rejected {}, cassette {}, drums {}/{}/{}/{}",
                reject_count, cassette_count, drum1_count, drum2_count, drum3_count, drum4_count
            )?;
        }
        CountInfo::Kr2 {
            insert_count_last,
            reject_count_last,
            cassette_count_last,
            drum_direction,
            drum1_count_last,
            drum2_count_last,
            drum3_count_last,
            drum4_count_last,
            cassette_count_total,
            drum1_count_total,
            drum2_count_total,
            drum3_count_total,
            drum4_count_total,
        } => {
            writeln!(
                out,
                "    last cycle: inserted {}, rejected {}, cassette {}, drums {}/{}/{}/{} ({})",
                insert_count_last,
                reject_count_last,
                cassette_count_last,
                drum1_count_last,
                drum2_count_last,
                drum3_count_last,
                drum4_count_last,
                drum_direction
            )?;
            writeln!(
                out,
                "    totals: cassette {}, drums {}/{}/{}/{}",
                cassette_count_total,
                drum1_count_total,
                drum2_count_total,
                drum3_count_total,
                drum4_count_total
            )?;
        }
        CountInfo::Unrecognized => {
            writeln!(out, "    payload length matches no known count format")?;
        }
    }
    Ok(())
}

fn write_item(out: &mut String, info: &ItemInfo) -> Result<()> {
    writeln!(
        out,
        "    banknote #{} -> {} ({})",
        info.item_number, info.destination_text, info.status_text
    )?;
    writeln!(out, "    serial: {}", info.serial_text)?;
    writeln!(
        out,
        "    denomination: {} (use flag {}, decimal point {})",
        hex_string(&info.denomination_info),
        info.denomination_use_flag,
        info.decimal_point
    )?;
    Ok(())
}

fn write_errors(out: &mut String, info: &ErrorInfo) -> Result<()> {
    writeln!(out, "    flags decoded: {}", info.flags.len())?;
    if info.errors_detected {
        writeln!(out, "    active errors: {}", info.active_error_count)?;
        for error in &info.active_errors {
            writeln!(out, "      - {}", error)?;
        }
    } else {
        writeln!(out, "    no active errors")?;
    }
    Ok(())
}

/// Render the report as JSON.
pub fn render_json(parsed: &ParseResult, codes: &EventCodes) -> Result<String> {
    let analysis = analyze(&parsed.entries, codes);

    let entries: Vec<EntryReport> = parsed
        .entries
        .iter()
        .map(|entry| {
            let (payload, decode_error) = match decode_entry(entry) {
                Some(Ok(decoded)) => (Some(decoded), None),
                Some(Err(error)) => (None, Some(error)),
                None => (None, None),
            };
            EntryReport {
                timestamp: &entry.timestamp,
                identifier: &entry.identifier,
                event_type: &entry.event_type,
                source_file: &entry.source_file,
                line_number: &entry.line_number,
                function: &entry.function,
                event_code: entry.event_code,
                event_description: entry
                    .event_code
                    .and_then(|code| codes.get(&code))
                    .map(String::as_str),
                bytes: hex_string(&entry.byte_sequence),
                payload,
                decode_error,
            }
        })
        .collect();

    let report = Report {
        entries,
        summary: &analysis.summary,
        discarded_blocks: parsed.errors.len(),
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

#[derive(Serialize)]
struct Report<'a> {
    entries: Vec<EntryReport<'a>>,
    summary: &'a BTreeMap<u8, EventSummary>,
    discarded_blocks: usize,
}

#[derive(Serialize)]
struct EntryReport<'a> {
    timestamp: &'a str,
    identifier: &'a str,
    event_type: &'a str,
    source_file: &'a str,
    line_number: &'a str,
    function: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    event_code: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    event_description: Option<&'a str>,
    bytes: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    payload: Option<DecodedPayload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    decode_error: Option<String>,
}

/// Decoded payload of one entry, tagged by family
#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
enum DecodedPayload {
    Count(CountInfo),
    Item(ItemInfo),
    Errors(ErrorInfo),
}

/// Decode an entry's payload per its event code.
///
/// `None` means the code is not one of the interpreted families; the raw
/// bytes are still shown.
fn decode_entry(entry: &LogEntry) -> Option<std::result::Result<DecodedPayload, String>> {
    let code = entry.event_code?;
    let bytes = &entry.byte_sequence;
    let outcome = match code {
        COUNT_RESULT_CODE => decode_count(bytes)
            .map(DecodedPayload::Count)
            .map_err(|e| e.to_string()),
        BANKNOTE_RECORD_CODE => decode_item(bytes)
            .map(DecodedPayload::Item)
            .map_err(|e| e.to_string()),
        DEVICE_ERROR_CODE => decode_errors(bytes)
            .map(DecodedPayload::Errors)
            .map_err(|e| e.to_string()),
        _ => return None,
    };
    Some(outcome)
}

fn hex_string(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(" ")
}
