//! Log record encoding
//!
//! Turns a sequence into one newline-terminated record.

use crate::error::{Result, TempoError};
use crate::sequence::Sequence;

/// Fields a well-formed record carries: key, timestamp, value
pub const FIELD_COUNT: usize = 3;

/// Encode a sequence as `key,timestamp,value\n`
pub fn encode_record(sequence: &Sequence) -> String {
    let mut line = String::with_capacity(sequence.key.len() + sequence.value.len() + 24);
    push_field(&mut line, &sequence.key);
    line.push(',');
    line.push_str(&sequence.timestamp.to_string());
    line.push(',');
    push_field(&mut line, &sequence.value);
    line.push('\n');
    line
}

/// Reject keys that cannot name a file inside the data directory
pub fn validate_key(key: &str) -> Result<()> {
    let unsafe_key = key.is_empty()
        || key == "."
        || key == ".."
        || key.contains(['/', '\\', '\0']);

    if unsafe_key {
        return Err(TempoError::InvalidKey(key.to_string()));
    }
    Ok(())
}

fn push_field(line: &mut String, field: &str) {
    if !field.contains([',', '"', '\n', '\r']) {
        line.push_str(field);
        return;
    }

    line.push('"');
    for c in field.chars() {
        if c == '"' {
            line.push('"');
        }
        line.push(c);
    }
    line.push('"');
}
