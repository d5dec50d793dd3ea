//! # Delimited Records
//!
//! A record is one line of `;`-joined fields; the first field is its key.
//! There is no escaping, so a field may contain neither `;` nor a newline.
//! [`Record`] refuses such fields at construction instead of letting them
//! shift columns on reload, and always carries at least one field after the
//! key so that its line contains a delimiter.

use crate::lookup::CustomObject;
use std::{fmt::Display, str::FromStr};
use thiserror::Error;

/// Field separator within a record.
pub const DELIMITER: char = ';';
/// Record separator within a Record File.
pub const NEWLINE: char = '\n';

pub type RecordResult<T> = Result<T, RecordError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("a record needs a key and at least one field, got {found} field(s)")]
    TooFewFields { found: usize },

    #[error("field {index} contains the delimiter ';'")]
    Delimiter { index: usize },

    #[error("field {index} contains a newline")]
    Newline { index: usize },
}

/// An ordered list of fields keyed by the first one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    fields: Vec<String>,
}

impl Record {
    pub fn new<I, S>(fields: I) -> RecordResult<Record>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fields: Vec<String> = fields.into_iter().map(Into::into).collect();
        if fields.len() < 2 {
            return Err(RecordError::TooFewFields {
                found: fields.len(),
            });
        }

        for (index, field) in fields.iter().enumerate() {
            if field.contains(DELIMITER) {
                return Err(RecordError::Delimiter { index });
            }
            if field.contains(NEWLINE) || field.contains('\r') {
                return Err(RecordError::Newline { index });
            }
        }

        Ok(Record { fields })
    }

    pub fn key(&self) -> &str {
        &self.fields[0]
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(String::as_str)
    }

    pub fn into_fields(self) -> Vec<String> {
        self.fields
    }
}

impl CustomObject for Record {
    fn key(&self) -> &str {
        Record::key(self)
    }
}

impl Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut fields = self.fields.iter();
        if let Some(first) = fields.next() {
            write!(f, "{}", first)?;
        }
        for field in fields {
            write!(f, "{}{}", DELIMITER, field)?;
        }
        Ok(())
    }
}

impl FromStr for Record {
    type Err = RecordError;

    /// Parses one line. A trailing `\r` is dropped.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.strip_suffix('\r').unwrap_or(line);
        Record::new(line.split(DELIMITER))
    }
}

/// Joins records into Record File content, one per line, newline-terminated.
pub fn encode_records(records: &[Record]) -> String {
    records.iter().map(|r| format!("{}{}", r, NEWLINE)).collect()
}

/// Parses the lines returned by [`read_all`](super::read_all), skipping blank
/// and delimiter-less ones.
pub fn load_records<S: AsRef<str>>(lines: &[S]) -> Vec<Record> {
    lines
        .iter()
        .filter_map(|line| line.as_ref().parse::<Record>().ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_display_joins_with_delimiter() {
        let record = Record::new(["alice", "30", "alice@example.com"]).unwrap();
        assert_eq!(record.to_string(), "alice;30;alice@example.com");
        assert_eq!(record.key(), "alice");
        assert_eq!(record.get(1), Some("30"));
        assert_eq!(record.get(3), None);
    }

    #[test]
    fn test_record_keeps_empty_fields() {
        let record: Record = "bob;;0123456789;".parse().unwrap();
        assert_eq!(record.fields(), &["bob", "", "0123456789", ""]);
        assert_eq!(record.to_string(), "bob;;0123456789;");
    }

    #[test]
    fn test_record_rejects_separators_in_fields() {
        assert_eq!(
            Record::new(["alice", "a;b"]),
            Err(RecordError::Delimiter { index: 1 })
        );
        assert_eq!(
            Record::new(["alice", "x\ny"]),
            Err(RecordError::Newline { index: 1 })
        );
        assert_eq!(
            Record::new(["alice\rbob", "30"]),
            Err(RecordError::Newline { index: 0 })
        );
        assert_eq!(
            Record::new(Vec::<String>::new()),
            Err(RecordError::TooFewFields { found: 0 })
        );
        assert_eq!(
            Record::new(["alice"]),
            Err(RecordError::TooFewFields { found: 1 })
        );
    }

    #[test]
    fn test_record_from_line_without_delimiter_fails() {
        assert_eq!(
            "carol".parse::<Record>(),
            Err(RecordError::TooFewFields { found: 1 })
        );
        assert_eq!(
            "".parse::<Record>(),
            Err(RecordError::TooFewFields { found: 1 })
        );
    }

    #[test]
    fn test_record_from_line_drops_carriage_return() {
        let record: Record = ";orphan\r".parse().unwrap();
        assert_eq!(record.key(), "");
        assert_eq!(record.fields(), &["", "orphan"]);
    }

    #[test]
    fn test_encode_and_load_records() {
        let records = vec![
            Record::new(["alice", "30"]).unwrap(),
            Record::new(["bob", "40"]).unwrap(),
        ];
        let content = encode_records(&records);
        assert_eq!(content, "alice;30\nbob;40\n");

        let mut lines: Vec<&str> = content.split('\n').collect();
        lines.push("garbage");
        assert_eq!(load_records(&lines), records);
    }
}
