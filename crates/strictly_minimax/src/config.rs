//! Search configuration.

use derive_getters::Getters;
use derive_setters::Setters;
use serde::{Deserialize, Serialize};

/// Knobs for a [`Searcher`](crate::Searcher).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct SearchConfig {
    /// Narrow the alpha-beta window as siblings are examined.
    ///
    /// Turning this off gives plain exhaustive minimax. Values are identical
    /// either way; only the number of visited nodes changes.
    #[serde(default = "default_pruning")]
    pruning: bool,
}

fn default_pruning() -> bool {
    true
}

impl SearchConfig {
    /// Exhaustive minimax with no pruning.
    pub fn exhaustive() -> Self {
        Self { pruning: false }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            pruning: default_pruning(),
        }
    }
}
