//! Flat delimited text storage: whole-file read/write and key search.

pub mod record;
pub use record::{
    DELIMITER, Record, RecordError, RecordResult, encode_records, load_records,
};

pub mod text;
pub use text::{
    StoreError, StoreResult, find_by_key, find_record, read_all, try_read_all, try_write_all,
    write_all,
};
