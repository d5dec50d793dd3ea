pub mod sanitize;
pub use sanitize::{FieldKind, FilterError, Sanitize};

pub mod terminal;
pub use terminal::{PromptConfig, PromptError, PromptResult, Terminal};

pub mod fields;

pub mod format;
pub use format::{MergeError, MergeResult, capitalize, merge_fields};
