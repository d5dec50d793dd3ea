//! Linear lookup over in-memory keyed values.

/// A value identified by a string key.
///
/// Key uniqueness is up to the implementor; lookups return the first match.
pub trait CustomObject {
    fn key(&self) -> &str;
}

impl<T: CustomObject + ?Sized> CustomObject for &T {
    fn key(&self) -> &str {
        (**self).key()
    }
}

impl<T: CustomObject + ?Sized> CustomObject for Box<T> {
    fn key(&self) -> &str {
        (**self).key()
    }
}

/// `true` if `items` is absent or holds nothing.
pub fn is_empty<T>(items: Option<&[T]>) -> bool {
    items.is_none_or(<[T]>::is_empty)
}

/// Index of the first item whose key equals `key` (case-sensitive), or
/// `None` when `items` is empty or nothing matches.
///
/// ```rust
/// use fieldkit_core::lookup::{CustomObject, find_index};
///
/// struct Book(&'static str);
///
/// impl CustomObject for Book {
///     fn key(&self) -> &str {
///         self.0
///     }
/// }
///
/// let shelf = [Book("a"), Book("b"), Book("a")];
/// assert_eq!(find_index(&shelf, "a"), Some(0));
/// assert_eq!(find_index(&shelf, "c"), None);
/// ```
pub fn find_index<T: CustomObject>(items: &[T], key: &str) -> Option<usize> {
    items.iter().position(|item| item.key() == key)
}

/// [`find_index`] over an optional list; an absent list finds nothing.
pub fn find_index_in<T: CustomObject>(items: Option<&[T]>, key: &str) -> Option<usize> {
    items.and_then(|items| find_index(items, key))
}
