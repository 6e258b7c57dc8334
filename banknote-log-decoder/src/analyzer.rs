//! Event analysis
//!
//! Groups parsed entries by event code and computes per-code summary
//! statistics. Payloads are not decoded here; that stays with the caller,
//! per entry, using the payload decoders.

use crate::types::{LogEntry, Timestamp};
use serde::Serialize;
use std::collections::BTreeMap;

/// Caller-supplied mapping from event code to human description
pub type EventCodes = BTreeMap<u8, String>;

/// The event codes the device emits for the decoded families
pub const COUNT_RESULT_CODE: u8 = 0x24;
pub const BANKNOTE_RECORD_CODE: u8 = 0x23;
pub const DEVICE_ERROR_CODE: u8 = 0x48;

/// Default code set: count results, banknote records, device errors
pub fn default_event_codes() -> EventCodes {
    EventCodes::from([
        (COUNT_RESULT_CODE, "Count result".to_string()),
        (BANKNOTE_RECORD_CODE, "Banknote record".to_string()),
        (DEVICE_ERROR_CODE, "Device error".to_string()),
    ])
}

/// Per-code summary statistics
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventSummary {
    pub description: String,
    pub count: usize,
    /// Earliest matching timestamp, absent when the group is empty
    pub first_occurrence: Option<Timestamp>,
    /// Latest matching timestamp, absent when the group is empty
    pub last_occurrence: Option<Timestamp>,
}

/// Result of [`analyze`]: groups borrow the analyzed entries.
#[derive(Debug)]
pub struct AnalysisResult<'a> {
    /// Entries per known code, in original log order
    pub events_by_code: BTreeMap<u8, Vec<&'a LogEntry>>,
    /// One summary per known code, including zero-match codes
    pub summary: BTreeMap<u8, EventSummary>,
}

/// Group entries by event code and summarize each known code.
///
/// Entries without an event code, or with a code not in `known_codes`,
/// are left out of every group.
pub fn analyze<'a>(entries: &'a [LogEntry], known_codes: &EventCodes) -> AnalysisResult<'a> {
    let mut events_by_code: BTreeMap<u8, Vec<&LogEntry>> =
        known_codes.keys().map(|&code| (code, Vec::new())).collect();

    for entry in entries {
        if let Some(code) = entry.event_code {
            if let Some(group) = events_by_code.get_mut(&code) {
                group.push(entry);
            }
        }
    }

    let summary = known_codes
        .iter()
        .map(|(&code, description)| {
            let group = &events_by_code[&code];
            let summary = EventSummary {
                description: description.clone(),
                count: group.len(),
                first_occurrence: group.iter().map(|e| e.timestamp_value).min(),
                last_occurrence: group.iter().map(|e| e.timestamp_value).max(),
            };
            (code, summary)
        })
        .collect();

    AnalysisResult {
        events_by_code,
        summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn entry(timestamp: &str, code: Option<u8>) -> LogEntry {
        let byte_sequence = match code {
            Some(c) => vec![0x02, 0x10, c, 0x00],
            None => vec![0x02, 0x10],
        };
        LogEntry {
            timestamp: timestamp.to_string(),
            timestamp_value: NaiveTime::parse_from_str(timestamp, "%H:%M:%S%.3f").unwrap(),
            identifier: "DEV01".to_string(),
            event_type: "RECV".to_string(),
            source_file: "comm.c".to_string(),
            line_number: "1".to_string(),
            function: "f".to_string(),
            event_code: code,
            byte_sequence,
            raw_block: String::new(),
        }
    }

    #[test]
    fn test_grouping_preserves_order() {
        let entries = vec![
            entry("10:00:02.000", Some(0x24)),
            entry("10:00:01.000", Some(0x24)),
            entry("10:00:03.000", Some(0x23)),
        ];
        let result = analyze(&entries, &default_event_codes());

        let counts = &result.events_by_code[&0x24];
        assert_eq!(counts.len(), 2);
        // Log order, not timestamp order
        assert_eq!(counts[0].timestamp, "10:00:02.000");
        assert_eq!(counts[1].timestamp, "10:00:01.000");
    }

    #[test]
    fn test_summary_first_and_last() {
        let entries = vec![
            entry("10:00:02.500", Some(0x24)),
            entry("10:00:01.000", Some(0x24)),
            entry("10:00:03.000", Some(0x24)),
        ];
        let result = analyze(&entries, &default_event_codes());

        let summary = &result.summary[&0x24];
        assert_eq!(summary.count, 3);
        assert_eq!(
            summary.first_occurrence,
            NaiveTime::from_hms_milli_opt(10, 0, 1, 0)
        );
        assert_eq!(
            summary.last_occurrence,
            NaiveTime::from_hms_milli_opt(10, 0, 3, 0)
        );
    }

    #[test]
    fn test_zero_match_code_still_summarized() {
        let entries = vec![entry("10:00:00.000", Some(0x24))];
        let result = analyze(&entries, &default_event_codes());

        let summary = &result.summary[&0x48];
        assert_eq!(summary.description, "Device error");
        assert_eq!(summary.count, 0);
        assert_eq!(summary.first_occurrence, None);
        assert_eq!(summary.last_occurrence, None);
        assert!(result.events_by_code[&0x48].is_empty());
    }

    #[test]
    fn test_unknown_and_missing_codes_ignored() {
        let entries = vec![
            entry("10:00:00.000", Some(0x99)),
            entry("10:00:01.000", None),
            entry("10:00:02.000", Some(0x23)),
        ];
        let result = analyze(&entries, &default_event_codes());
        let total: usize = result.events_by_code.values().map(|g| g.len()).sum();
        assert_eq!(total, 1);
    }
}
