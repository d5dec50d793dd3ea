//! Whole-file access to a Record File.
//!
//! Every call opens, uses and releases its own handle. There is no locking:
//! one writer per path is assumed and the last full write wins.
//!
//! The `try_*` functions return a [`StoreResult`]; the plain ones report the
//! failure on standard error and return a sentinel instead.

use super::record::DELIMITER;
use log::{debug, error, warn};
use std::{fs, io, path::Path, path::PathBuf};
use thiserror::Error;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("cannot read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("cannot write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
}

/// Creates or truncates `path` and writes `content` verbatim.
pub fn try_write_all(path: impl AsRef<Path>, content: &str) -> StoreResult<()> {
    let path = path.as_ref();
    fs::write(path, content).map_err(|source| StoreError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}

/// Reads `path` and splits it into lines.
///
/// Content without any `\n` yields an empty list. Otherwise the content is
/// split on every `\n`, keeping a trailing empty segment, so that
/// `lines.join("\n")` reproduces the file exactly.
pub fn try_read_all(path: impl AsRef<Path>) -> StoreResult<Vec<String>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| StoreError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    if !content.contains('\n') {
        debug!("{} holds no newline, nothing to split", path.display());
        return Ok(Vec::new());
    }

    Ok(content.split('\n').map(str::to_string).collect())
}

/// [`try_write_all`], reporting failure as `false`.
pub fn write_all(path: impl AsRef<Path>, content: &str) -> bool {
    match try_write_all(path, content) {
        Ok(()) => true,
        Err(e) => {
            error!("{}", e);
            eprintln!("File Is Inaccessible");
            false
        }
    }
}

/// [`try_read_all`], reporting failure as `None`.
pub fn read_all(path: impl AsRef<Path>) -> Option<Vec<String>> {
    match try_read_all(path) {
        Ok(lines) => Some(lines),
        Err(e) => {
            error!("{}", e);
            eprintln!("File Inaccessible or There was nothing to read");
            None
        }
    }
}

/// Returns the first line whose key (text before the first `;`) equals `key`.
///
/// Lines without a delimiter never match.
pub fn find_record(path: impl AsRef<Path>, key: &str) -> Option<String> {
    let path = path.as_ref();
    let lines = read_all(path)?;

    lines.into_iter().find(|line| match line.split_once(DELIMITER) {
        Some((line_key, _)) => line_key == key,
        None => {
            if !line.is_empty() {
                warn!("{}: skipping line without '{}'", path.display(), DELIMITER);
            }
            false
        }
    })
}

/// Returns whether any line of the file at `path` is keyed by `key`.
pub fn find_by_key(path: impl AsRef<Path>, key: &str) -> bool {
    find_record(path, key).is_some()
}
