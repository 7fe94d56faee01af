//! Scoring functions.

use smallvec::SmallVec;
use triglot_types::{LabelScore, LangId};

use crate::analyzer::trigram::{count_trigrams, TrigramCounts};
use crate::model::types::{Model, RANK_BUF};

impl Model {
    /// Scores a document's trigram counts against every fingerprint.
    ///
    /// The score is the dot product of the document's raw counts with
    /// the language's unit-weight vector. Leaving the document side
    /// unnormalized scales every language by the same positive factor,
    /// so the ranking is unchanged and the per-document normalization
    /// is skipped entirely.
    ///
    /// Emits one entry per language, in id order.
    pub(crate) fn score_into(
        &self,
        counts: &TrigramCounts,
        out: &mut SmallVec<[LabelScore; RANK_BUF]>,
    ) {
        out.clear();
        for (id, fingerprint) in self.fingerprints.iter().enumerate() {
            let mut score = 0.0f64;
            for (&trigram, &count) in counts {
                score += count as f64 * fingerprint.weight(trigram);
            }
            out.push(LabelScore::new(id as LangId, score));
        }
    }

    /// Scores a document against every trained language.
    ///
    /// Returns one entry per language in id order, unranked. A document
    /// sharing no trigram with a language scores 0.0 for it; an empty
    /// document scores 0.0 everywhere.
    pub fn score(&self, document: &str) -> Vec<LabelScore> {
        let counts = count_trigrams(document);
        let mut out = SmallVec::new();
        self.score_into(&counts, &mut out);
        out.into_vec()
    }
}
