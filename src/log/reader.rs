//! Log Reader
//!
//! Reads records from a key's log file, front to back.

use std::io::BufRead;

use crate::error::{Result, TempoError};

/// One decoded record: its fields and the line it starts on (1-based)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub line: usize,
    pub fields: Vec<String>,
}

/// Sequential, quote-aware record reader
///
/// Does not judge record shape: short records come back as-is and the
/// caller decides whether to skip them. A quote left open at end of file
/// is an error rather than a record swallowing the rest of the log.
pub struct RecordReader<R> {
    inner: R,
    line_no: usize,
    buf: String,
}

impl<R: BufRead> RecordReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            line_no: 0,
            buf: String::new(),
        }
    }

    /// Read the next record, or `None` at end of file
    pub fn next_record(&mut self) -> Result<Option<Record>> {
        let mut fields = Vec::new();
        let mut field = String::new();
        let mut in_quotes = false;
        let start_line = self.line_no + 1;

        loop {
            self.buf.clear();
            let n = self.inner.read_line(&mut self.buf)?;
            if n == 0 {
                if self.line_no < start_line {
                    return Ok(None);
                }
                // Only reachable with a quote still open
                return Err(TempoError::UnterminatedQuote { line: start_line });
            }
            self.line_no += 1;

            let mut chars = self.buf.chars().peekable();
            while let Some(c) = chars.next() {
                if in_quotes {
                    if c == '"' {
                        if chars.peek() == Some(&'"') {
                            chars.next();
                            field.push('"');
                        } else {
                            in_quotes = false;
                        }
                    } else {
                        field.push(c);
                    }
                    continue;
                }

                match c {
                    ',' => fields.push(std::mem::take(&mut field)),
                    '"' if field.is_empty() => in_quotes = true,
                    '\r' if chars.peek() == Some(&'\n') => {}
                    '\n' => {
                        fields.push(field);
                        return Ok(Some(Record { line: start_line, fields }));
                    }
                    _ => field.push(c),
                }
            }

            // Last line without a trailing newline
            if !in_quotes {
                fields.push(field);
                return Ok(Some(Record { line: start_line, fields }));
            }
        }
    }
}

impl<R: BufRead> Iterator for RecordReader<R> {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_record().transpose()
    }
}
