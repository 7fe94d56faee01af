//! Model building logic.

use std::collections::hash_map::Entry;

use rustc_hash::FxHashMap;
use triglot_types::TrainError;

use crate::analyzer::fingerprint::Fingerprint;
use crate::analyzer::trigram::{extract_trigrams, TrigramCounts};
use crate::corpus;
use crate::model::types::Model;

/// Accumulates labeled text into per-language trigram counts.
///
/// Counting and normalization are kept separate: the builder only ever
/// adds integer counts, and [`build`](ModelBuilder::build) performs the
/// single normalization at the end. That makes training order-free:
/// any permutation of the same samples produces an identical model.
#[derive(Debug, Default)]
pub struct ModelBuilder {
    counts: FxHashMap<String, TrigramCounts>,
    rows: u64,
    windows: u64,
}

impl ModelBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one labeled text sample.
    ///
    /// Samples sharing a label accumulate into the same fingerprint.
    /// Each sample is windowed on its own, so trigrams never span the
    /// boundary between two samples. Text shorter than 3 characters
    /// contributes nothing but still counts as a row.
    pub fn add_sample(&mut self, label: &str, text: &str) {
        let counts = self.counts.entry(label.to_owned()).or_default();

        let mut seen = 0u64;
        extract_trigrams(text, |t| {
            *counts.entry(t).or_insert(0) += 1;
            seen += 1;
        });

        self.rows += 1;
        self.windows += seen;
    }

    /// Adds every row of a training table.
    ///
    /// All-or-nothing: rows are staged in a scratch builder and merged
    /// only once the whole table has parsed, so a malformed row on line
    /// 1000 leaves this builder exactly as it was.
    ///
    /// # Errors
    /// Returns [`TrainError::MalformedRow`] for the first row that does
    /// not split into exactly two columns.
    pub fn add_table(&mut self, table: &str) -> Result<(), TrainError> {
        let mut staged = ModelBuilder::new();
        corpus::parse_rows(table, |row| staged.add_sample(row.label, row.text))?;
        self.merge(staged);
        Ok(())
    }

    /// Folds another builder's counts into this one.
    fn merge(&mut self, other: ModelBuilder) {
        for (label, counts) in other.counts {
            match self.counts.entry(label) {
                Entry::Vacant(slot) => {
                    slot.insert(counts);
                }
                Entry::Occupied(mut slot) => {
                    let into = slot.get_mut();
                    for (t, c) in counts {
                        *into.entry(t).or_insert(0) += c;
                    }
                }
            }
        }
        self.rows += other.rows;
        self.windows += other.windows;
    }

    /// Normalizes the accumulated counts into a finished [`Model`].
    ///
    /// Labels are sorted ascending; a language's id is its position in
    /// the sorted table.
    pub fn build(self) -> Model {
        let mut entries: Vec<(String, TrigramCounts)> = self.counts.into_iter().collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(&b.0));

        let mut labels = Vec::with_capacity(entries.len());
        let mut fingerprints = Vec::with_capacity(entries.len());
        for (label, counts) in entries {
            fingerprints.push(Fingerprint::from_counts(&counts));
            labels.push(label);
        }

        Model {
            labels,
            fingerprints,
            rows_trained: self.rows,
            trigrams_observed: self.windows,
        }
    }
}

impl Model {
    /// Builds a model straight from one training table.
    ///
    /// Convenience for the common train-once case; equivalent to feeding
    /// the table through a fresh [`ModelBuilder`].
    ///
    /// # Errors
    /// Returns [`TrainError::MalformedRow`] on the first bad row; no
    /// model is produced.
    pub fn from_table(table: &str) -> Result<Self, TrainError> {
        let mut builder = ModelBuilder::new();
        builder.add_table(table)?;
        Ok(builder.build())
    }
}
