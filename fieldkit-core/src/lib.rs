//! # FieldKit Core
//!
//! Helpers for small console applications that keep their data in flat text
//! files.
//!
//! ## Features
//! - **Validated input** - blocking prompt loops that repeat until the line
//!   satisfies a field grammar (username, password, name, phone, email, date),
//!   a number range or a fixed set of answers.
//! - **Credential hashing** - SHA-256 digests stored as lowercase hex.
//! - **Record files** - whole-file read/write of `;`-delimited records keyed by
//!   their first field, plus key search.
//! - **Keyed lookup** - first-match linear search over anything implementing
//!   [`lookup::CustomObject`].
//!
//! ## Example
//! ```rust,no_run
//! use fieldkit_core::store::{self, Record};
//! use fieldkit_core::utils::Terminal;
//!
//! let mut term = Terminal::stdio();
//! let username = term.input_username().unwrap();
//! let password = term.input_password(true).unwrap();
//! let email = term.input_email(true).unwrap();
//!
//! let record = Record::new([username, password, email]).unwrap();
//! if !store::find_by_key("users.txt", record.key()) {
//!     let mut lines = store::read_all("users.txt").unwrap_or_default();
//!     lines.retain(|line| !line.is_empty());
//!     lines.push(record.to_string());
//!     store::write_all("users.txt", &format!("{}\n", lines.join("\n")));
//! }
//! ```
//!
//! ## Concurrency
//! Everything is synchronous and single-threaded. The only blocking point is
//! the console read inside [`utils::Terminal`]. Record files are not locked.

pub mod crypto;

pub mod lookup;

pub mod store;

pub mod utils;
