use crate::profile::SUPPORTED_CHIPS;

/// Errors that can occur while resolving a chip profile.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChipError {
    /// The requested chip name is not one of the compiled-in profiles.
    #[error("unknown chip {name:?} (supported: {})", SUPPORTED_CHIPS.join(", "))]
    UnknownChip { name: String },

    /// A profile table does not have `2^bits` entries.
    #[error("{field} table has {actual} entries, expected {expected}")]
    TableSize {
        field: &'static str,
        expected: usize,
        actual: usize,
    },
}

pub type Result<T> = std::result::Result<T, ChipError>;
