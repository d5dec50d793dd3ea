//! Normalization helpers for field values.

use thiserror::Error;

pub type MergeResult<T> = Result<T, MergeError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MergeError {
    #[error("cannot merge {updates} updates into {current} fields")]
    LengthMismatch { current: usize, updates: usize },
}

/// Title-cases every whitespace-separated word and collapses the whitespace.
///
/// A blank string is returned untouched.
///
/// ```rust
/// use fieldkit_core::utils::capitalize;
///
/// assert_eq!(capitalize("  mARY   ann  "), "Mary Ann");
/// ```
pub fn capitalize(text: &str) -> String {
    if text.trim().is_empty() {
        return text.to_string();
    }

    text.to_lowercase()
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Positional merge: `updates[i]` replaces `current[i]` only when it is
/// present and non-empty.
///
/// Both slices must have the same length.
pub fn merge_fields<C, U>(current: &[C], updates: &[Option<U>]) -> MergeResult<Vec<String>>
where
    C: AsRef<str>,
    U: AsRef<str>,
{
    if current.len() != updates.len() {
        return Err(MergeError::LengthMismatch {
            current: current.len(),
            updates: updates.len(),
        });
    }

    Ok(current
        .iter()
        .zip(updates)
        .map(|(field, update)| match update {
            Some(new) if !new.as_ref().is_empty() => new.as_ref().to_string(),
            _ => field.as_ref().to_string(),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize_collapses_and_title_cases() {
        assert_eq!(capitalize("  mARY   ann  "), "Mary Ann");
        assert_eq!(capitalize("o'neil"), "O'neil");
        assert_eq!(capitalize("JOHN\tsmith"), "John Smith");
        assert_eq!(capitalize("x"), "X");
    }

    #[test]
    fn test_capitalize_leaves_blank_untouched() {
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("   "), "   ");
    }

    #[test]
    fn test_merge_fields_ignores_empty_and_absent() {
        let merged = merge_fields(&["John", "30", ""], &[None, Some(""), Some("31")]).unwrap();
        assert_eq!(merged, vec!["John", "30", "31"]);
    }

    #[test]
    fn test_merge_fields_overwrites_non_empty() {
        let current = vec!["a".to_string(), "b".to_string()];
        let updates = vec![Some("x".to_string()), Some(" ".to_string())];
        assert_eq!(merge_fields(&current, &updates).unwrap(), vec!["x", " "]);
    }

    #[test]
    fn test_merge_fields_rejects_length_mismatch() {
        let res = merge_fields(&["a", "b"], &[Some("x")]);
        assert_eq!(
            res,
            Err(MergeError::LengthMismatch {
                current: 2,
                updates: 1
            })
        );
    }
}
