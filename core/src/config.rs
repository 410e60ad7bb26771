use serde::{Deserialize, Serialize};

/// Terms shorter than this many characters are dropped by the tokenizer.
pub const MIN_TERM_LEN: usize = 3;

pub const DEFAULT_MAX_COMPLETIONS: usize = 5;
pub const DEFAULT_MAX_EDIT_DISTANCE: usize = 2;
pub const DEFAULT_MAX_LENGTH_DIFF: usize = 2;

/// Returned by the bounded edit distance when the length gap alone rules a pair out.
pub const DISTANCE_SENTINEL: usize = 100;

/// Query-side limits for completion and correction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Maximum number of prefix completions returned.
    pub max_completions: usize,
    /// Largest accepted edit distance for a correction.
    pub max_edit_distance: usize,
    /// Candidates whose length differs by more than this are never compared.
    pub max_length_diff: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_completions: DEFAULT_MAX_COMPLETIONS,
            max_edit_distance: DEFAULT_MAX_EDIT_DISTANCE,
            max_length_diff: DEFAULT_MAX_LENGTH_DIFF,
        }
    }
}
