//! End-to-end test: a realistic multi-block device log through parse,
//! analysis, and all three payload decoders.

use banknote_log_decoder::{
    analyze, decode_count, decode_errors, decode_item, default_event_codes, parse, CountInfo,
    DecodeError,
};

const SAMPLE_LOG: &str = "\
09:15:02.101|KDS01 RECV COUNT RESULT (proto.c,210):on_count_result
HEX DUMP of received frame
0000h 02 10 24 05 08 03 02 10 00 64  | ..$......d
000Ah 00 32 00                       | .2.

09:15:02.530|KDS01 RECV NOTE RECORD (proto.c,254):on_note_record
HEX DUMP of received frame
0000h 02 10 23 01 00 00 00 00 00 00  | ..#.......
000Ah 00 00 00 00 01 00 00 00 00 05  | ..........
0014h 41 42 43 44 45 00 00 00 00 00  | ABCDE.....
001Eh 00 00 00 00 00 00 00 00 00 00  | ..........
0028h 00 00 00 00 00 00 00 00 00 00  | ..........
0032h 00 00 00 00 00 00 00 00 00 00  | ..........
003Ch 02                             | .

09:15:03.007|KDS01 RECV DEVICE STATUS (proto.c,301):on_device_status
HEX DUMP of received frame
0000h 02 10 48 00 00 00 00 00 00 00  | ..H.......
000Ah 00 00 00 00 00 00 00 00 00 00  | ..........
0014h 00 00 00 00 00 00 00 00 00 00  | ..........
001Eh 00 00 00 00 00 03 00 00 00 00  | ..........
0028h 00 00 00 00 00 00 00 00 00 00  | ..........
0032h 00 00 00 00 00 00 00 00 00 00  | ..........
003Ch 00 00 00                       | ...

09:15:03.440|KDS01 RECV VENDOR EXT (proto.c,340):on_vendor_ext
0000h 02 10 99 AA BB                 | .....

this line is not a header
0000h 01 02                          | ..
";

#[test]
fn test_parse_full_log() {
    let result = parse(SAMPLE_LOG);
    assert_eq!(result.entries.len(), 4);
    assert_eq!(result.errors.len(), 1);
    assert!(matches!(
        result.errors[0].error,
        DecodeError::MalformedHeader(_)
    ));

    let codes: Vec<Option<u8>> = result.entries.iter().map(|e| e.event_code).collect();
    assert_eq!(
        codes,
        vec![Some(0x24), Some(0x23), Some(0x48), Some(0x99)]
    );
}

#[test]
fn test_analysis_over_full_log() {
    let result = parse(SAMPLE_LOG);
    let analysis = analyze(&result.entries, &default_event_codes());

    assert_eq!(analysis.summary[&0x24].count, 1);
    assert_eq!(analysis.summary[&0x23].count, 1);
    assert_eq!(analysis.summary[&0x48].count, 1);

    // The vendor extension code is not a known family and joins no group
    let grouped: usize = analysis.events_by_code.values().map(|g| g.len()).sum();
    assert_eq!(grouped, 3);

    let count_summary = &analysis.summary[&0x24];
    assert_eq!(count_summary.first_occurrence, count_summary.last_occurrence);
    assert_eq!(
        count_summary.first_occurrence.map(|t| t.to_string()),
        Some("09:15:02.101".to_string())
    );
}

#[test]
fn test_decode_each_family() {
    let result = parse(SAMPLE_LOG);

    let count = decode_count(&result.entries[0].byte_sequence).unwrap();
    assert_eq!(
        count,
        CountInfo::Kd {
            insert_count_last: 5,
            deposit_count_last: 8,
            reject_count_last: 3,
            insert_try_count: 2,
            insert_count_total: 16,
            deposit_count_total: 100,
            reject_count_total: 50,
        }
    );

    let item = decode_item(&result.entries[1].byte_sequence).unwrap();
    assert_eq!(item.item_number, 1);
    assert_eq!(item.destination_text, "Cassette");
    assert_eq!(item.serial_text, "ABCDE");
    assert_eq!(item.status_text, "Reject result - SC option");

    let errors = decode_errors(&result.entries[2].byte_sequence).unwrap();
    assert_eq!(errors.flags.len(), 60);
    assert!(errors.errors_detected);
    assert_eq!(
        errors.active_errors,
        vec!["Banknote transport failure: Banknote tear error".to_string()]
    );
}

#[test]
fn test_batch_decoding_survives_bad_entries() {
    // Decoding every entry with every decoder: failures are values and the
    // batch still produces results for the entries that fit.
    let result = parse(SAMPLE_LOG);
    let outcomes: Vec<_> = result
        .entries
        .iter()
        .map(|e| decode_item(&e.byte_sequence))
        .collect();

    assert_eq!(outcomes.len(), 4);
    assert!(outcomes[0].is_err()); // count frame is far too short for a record
    assert!(outcomes[1].is_ok());
    assert!(outcomes[2].is_ok()); // status frame happens to be long enough
    assert!(outcomes[3].is_err());
}
