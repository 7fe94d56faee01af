//! Statistics and ModelStats.

use crate::model::types::Model;

/// A snapshot of model statistics.
#[derive(Debug, Clone, Copy)]
pub struct ModelStats {
    /// Number of trained languages.
    pub num_languages: usize,
    /// Total non-zero weights across all fingerprints. A trigram shared
    /// by several languages counts once per language.
    pub num_weights: usize,
    /// Training rows consumed.
    pub rows_trained: u64,
    /// Total trigram windows observed across all training text.
    pub trigrams_observed: u64,
}

impl Model {
    /// Returns model statistics.
    #[must_use]
    pub fn stats(&self) -> ModelStats {
        ModelStats {
            num_languages: self.labels.len(),
            num_weights: self.fingerprints.iter().map(|f| f.len()).sum(),
            rows_trained: self.rows_trained,
            trigrams_observed: self.trigrams_observed,
        }
    }
}

impl core::fmt::Display for ModelStats {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} languages, {} weights, {} rows, {} trigrams observed",
            self.num_languages, self.num_weights, self.rows_trained, self.trigrams_observed
        )
    }
}
