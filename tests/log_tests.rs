//! Tests for the per-key log
//!
//! Record encoding, the quote-aware reader, and the append writer.

use std::fs;
use std::io::Cursor;

use tempfile::TempDir;
use tempokv::config::SyncStrategy;
use tempokv::log::{encode_record, validate_key, LogWriter, Record, RecordReader};
use tempokv::{Sequence, TempoError};

// =============================================================================
// Helper Functions
// =============================================================================

fn read_all(text: &str) -> Vec<Record> {
    RecordReader::new(Cursor::new(text.as_bytes()))
        .collect::<tempokv::Result<Vec<_>>>()
        .unwrap()
}

fn fields(record: &Record) -> Vec<&str> {
    record.fields.iter().map(String::as_str).collect()
}

// =============================================================================
// Encoding Tests
// =============================================================================

#[test]
fn test_encode_plain_record() {
    let line = encode_record(&Sequence::new("my-key", 101, "My Value"));
    assert_eq!(line, "my-key,101,My Value\n");
}

#[test]
fn test_encode_quotes_only_when_needed() {
    assert_eq!(
        encode_record(&Sequence::new("k", 1, "a,b")),
        "k,1,\"a,b\"\n"
    );
    assert_eq!(
        encode_record(&Sequence::new("k", 1, "say \"hi\"")),
        "k,1,\"say \"\"hi\"\"\"\n"
    );
    assert_eq!(
        encode_record(&Sequence::new("k", -3, "two\nlines")),
        "k,-3,\"two\nlines\"\n"
    );
    assert_eq!(encode_record(&Sequence::new("k", 1, "")), "k,1,\n");
}

// =============================================================================
// Reader Tests
// =============================================================================

#[test]
fn test_reader_empty_input() {
    assert!(read_all("").is_empty());
}

#[test]
fn test_reader_plain_lines_with_line_numbers() {
    let records = read_all("a,1,x\nb,2,y\n");

    assert_eq!(records.len(), 2);
    assert_eq!(fields(&records[0]), vec!["a", "1", "x"]);
    assert_eq!(records[0].line, 1);
    assert_eq!(fields(&records[1]), vec!["b", "2", "y"]);
    assert_eq!(records[1].line, 2);
}

#[test]
fn test_reader_last_line_without_newline() {
    let records = read_all("a,1,x\nb,2,y");
    assert_eq!(fields(&records[1]), vec!["b", "2", "y"]);
}

#[test]
fn test_reader_crlf_line_endings() {
    let records = read_all("a,1,x\r\nb,2,y\r\n");
    assert_eq!(fields(&records[0]), vec!["a", "1", "x"]);
    assert_eq!(fields(&records[1]), vec!["b", "2", "y"]);
}

#[test]
fn test_reader_short_and_blank_lines_come_back_as_is() {
    let records = read_all("\nonly\na,b\n");

    assert_eq!(records.len(), 3);
    assert_eq!(fields(&records[0]), vec![""]);
    assert_eq!(fields(&records[1]), vec!["only"]);
    assert_eq!(fields(&records[2]), vec!["a", "b"]);
}

#[test]
fn test_reader_quoted_field_spanning_lines() {
    let records = read_all("k,1,\"first\nsecond\"\nk,2,after\n");

    assert_eq!(records.len(), 2);
    assert_eq!(fields(&records[0]), vec!["k", "1", "first\nsecond"]);
    assert_eq!(records[0].line, 1);
    assert_eq!(records[1].line, 3);
}

#[test]
fn test_reader_unterminated_quote_at_eof_is_an_error() {
    let text = "k,0,ok\nk,1,\"legacy\nk,2,visible\n";
    let mut reader = RecordReader::new(Cursor::new(text.as_bytes()));

    let first = reader.next_record().unwrap().unwrap();
    assert_eq!(fields(&first), vec!["k", "0", "ok"]);

    match reader.next_record() {
        Err(TempoError::UnterminatedQuote { line }) => assert_eq!(line, 2),
        other => panic!("Expected UnterminatedQuote, got {:?}", other),
    }
    assert!(reader.next_record().unwrap().is_none());
}

#[test]
fn test_reader_extra_fields_are_kept() {
    let records = read_all("k,1,a,b\n");
    assert_eq!(fields(&records[0]), vec!["k", "1", "a", "b"]);
}

#[test]
fn test_encoded_records_read_back() {
    let sequences = [
        Sequence::new("k", 1, "plain"),
        Sequence::new("k,comma", 2, "a,b"),
        Sequence::new("k", 3, "\"\""),
        Sequence::new("k", 4, "multi\r\nline"),
    ];
    let text: String = sequences.iter().map(encode_record).collect();

    let records = read_all(&text);
    assert_eq!(records.len(), sequences.len());
    for (record, sequence) in records.iter().zip(&sequences) {
        assert_eq!(record.fields[0], sequence.key);
        assert_eq!(record.fields[1], sequence.timestamp.to_string());
        assert_eq!(record.fields[2], sequence.value);
    }
}

// =============================================================================
// Writer Tests
// =============================================================================

#[test]
fn test_writer_appends_to_existing_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("k.csv");
    fs::write(&path, "k,0,existing\n").unwrap();

    let mut writer = LogWriter::open(&path, SyncStrategy::EveryWrite).unwrap();
    writer.append(&Sequence::new("k", 1, "new")).unwrap();
    assert_eq!(writer.path(), path.as_path());

    let mut writer = LogWriter::open(&path, SyncStrategy::OsBuffered).unwrap();
    writer.append(&Sequence::new("k", 2, "newer")).unwrap();
    writer.sync().unwrap();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "k,0,existing\nk,1,new\nk,2,newer\n"
    );
}

// =============================================================================
// Key Validation Tests
// =============================================================================

#[test]
fn test_validate_key() {
    for key in ["my-key", "append_key", "a,b", "with space", "dots.in.name", "ünïcode"] {
        assert!(validate_key(key).is_ok(), "{:?} should be accepted", key);
    }
    for key in ["", ".", "..", "a/b", "/abs", "a\\b", "x\0y"] {
        assert!(validate_key(key).is_err(), "{:?} should be rejected", key);
    }
}
