//! Model types and constants.

use crate::analyzer::fingerprint::Fingerprint;
use triglot_types::LangId;

/// Minimum number of trained languages a model needs before it can
/// classify. The ranking rule compares the winner against a runner-up.
pub const MIN_LANGUAGES: usize = 2;

/// Stack capacity for per-classification score buffers.
pub(crate) const RANK_BUF: usize = 32;

/// A trained language identification model.
///
/// Holds one unit-length [`Fingerprint`] per language. Labels are stored
/// sorted ascending and a language's id is its position in that table,
/// so id order and alphabetical label order always agree.
///
/// A model is immutable once built. Classification borrows `&self`, so
/// one model can serve any number of documents, and the same document
/// always yields the same answer.
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    pub(crate) labels: Vec<String>,
    pub(crate) fingerprints: Vec<Fingerprint>,
    pub(crate) rows_trained: u64,
    pub(crate) trigrams_observed: u64,
}

impl Model {
    /// Returns the number of trained languages.
    #[inline(always)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns `true` if no languages were trained.
    #[inline(always)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Returns the label of a language id.
    #[inline(always)]
    pub fn label(&self, lang: LangId) -> Option<&str> {
        self.labels.get(lang as usize).map(String::as_str)
    }

    /// Returns the id of a label, if that language was trained.
    #[inline(always)]
    pub fn lang_id(&self, label: &str) -> Option<LangId> {
        // Labels are sorted, ids follow table position
        self.labels
            .binary_search_by(|l| l.as_str().cmp(label))
            .ok()
            .map(|i| i as LangId)
    }

    /// Returns the fingerprint of a language.
    #[inline(always)]
    pub fn fingerprint(&self, lang: LangId) -> Option<&Fingerprint> {
        self.fingerprints.get(lang as usize)
    }

    /// Iterates labels in id order (which is alphabetical order).
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }
}
