use serde::{Deserialize, Serialize};

/// Which counters a run reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CountMode {
    /// Lines, words and bytes, in that order. Never characters.
    #[default]
    Standard,
    /// Newline count only.
    Lines,
    /// Word count only.
    Words,
    /// Byte count only.
    Bytes,
    /// Character count only.
    Chars,
}
