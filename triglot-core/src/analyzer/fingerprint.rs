//! Language fingerprint construction.
//!
//! A fingerprint is the L2-normalized trigram frequency vector of all
//! text seen for one language. Normalizing to unit length makes
//! fingerprints comparable across languages regardless of how much
//! training text each language had.

use rustc_hash::FxHashMap;
use triglot_types::Trigram;

use crate::analyzer::trigram::TrigramCounts;

/// Unit-length trigram weight vector for one language.
///
/// Conceptually the vector spans every possible trigram; trigrams absent
/// from the map carry weight 0.0, so the map only stores the non-zero
/// coordinates. An empty fingerprint is the all-zero vector, which is a
/// valid (if useless) value: every dot product against it is 0.0.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fingerprint {
    weights: FxHashMap<Trigram, f64>,
}

impl Fingerprint {
    /// Builds a fingerprint by L2-normalizing a trigram frequency table.
    ///
    /// The squared magnitude is accumulated as a u128 before the single
    /// square root, so the result is bit-identical no matter what order
    /// the counts were accumulated in. A zero magnitude, whether from an
    /// empty table or from all-zero counts, produces the all-zero
    /// fingerprint rather than dividing by zero. Zero-count entries are
    /// dropped so the map holds only non-zero coordinates.
    pub fn from_counts(counts: &TrigramCounts) -> Self {
        let squared: u128 = counts.values().map(|&c| (c as u128) * (c as u128)).sum();
        if squared == 0 {
            return Self::default();
        }
        let magnitude = (squared as f64).sqrt();

        let weights = counts
            .iter()
            .filter(|&(_, &c)| c != 0)
            .map(|(&t, &c)| (t, c as f64 / magnitude))
            .collect();

        Self { weights }
    }

    /// Returns the weight of a trigram, or 0.0 if it is not present.
    #[inline(always)]
    pub fn weight(&self, trigram: Trigram) -> f64 {
        self.weights.get(&trigram).copied().unwrap_or(0.0)
    }

    /// Returns the Euclidean length of the vector.
    ///
    /// 1.0 for any fingerprint built from non-empty counts (up to float
    /// rounding), 0.0 for the all-zero fingerprint.
    pub fn norm(&self) -> f64 {
        self.weights.values().map(|w| w * w).sum::<f64>().sqrt()
    }

    /// Number of trigrams with non-zero weight.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Returns `true` if this is the all-zero fingerprint.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Iterates over the non-zero coordinates.
    pub fn iter(&self) -> impl Iterator<Item = (Trigram, f64)> + '_ {
        self.weights.iter().map(|(&t, &w)| (t, w))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts_of(pairs: &[(&str, u64)]) -> TrigramCounts {
        let mut counts = TrigramCounts::default();
        for &(s, c) in pairs {
            counts.insert(Trigram::from_str(s), c);
        }
        counts
    }

    #[test]
    fn normalizes_to_unit_length() {
        let counts = counts_of(&[("the", 10), ("he ", 7), ("qui", 2)]);
        let fp = Fingerprint::from_counts(&counts);
        assert!((fp.norm() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn pythagorean_weights() {
        // Counts 3 and 4 give magnitude 5, so weights land exactly
        // on 0.6 and 0.8
        let counts = counts_of(&[("aaa", 3), ("bbb", 4)]);
        let fp = Fingerprint::from_counts(&counts);
        assert_eq!(fp.weight(Trigram::from_str("aaa")), 0.6);
        assert_eq!(fp.weight(Trigram::from_str("bbb")), 0.8);
    }

    #[test]
    fn single_trigram_weighs_one() {
        let counts = counts_of(&[("xyz", 5)]);
        let fp = Fingerprint::from_counts(&counts);
        assert_eq!(fp.weight(Trigram::from_str("xyz")), 1.0);
        assert_eq!(fp.len(), 1);
    }

    #[test]
    fn absent_trigram_weighs_zero() {
        let counts = counts_of(&[("aaa", 3)]);
        let fp = Fingerprint::from_counts(&counts);
        assert_eq!(fp.weight(Trigram::from_str("zzz")), 0.0);
    }

    #[test]
    fn empty_counts_give_zero_vector() {
        let fp = Fingerprint::from_counts(&TrigramCounts::default());
        assert!(fp.is_empty());
        assert_eq!(fp.norm(), 0.0);
        assert_eq!(fp.weight(Trigram::from_str("any")), 0.0);
    }

    #[test]
    fn all_zero_counts_give_zero_vector() {
        // Constructible by hand even though the counter never writes zeros
        let counts = counts_of(&[("aaa", 0), ("bbb", 0)]);
        let fp = Fingerprint::from_counts(&counts);

        assert!(fp.is_empty());
        assert_eq!(fp.norm(), 0.0);
        assert_eq!(fp.weight(Trigram::from_str("aaa")), 0.0);
    }

    #[test]
    fn zero_count_entries_are_dropped() {
        let counts = counts_of(&[("aaa", 3), ("bbb", 4), ("zzz", 0)]);
        let fp = Fingerprint::from_counts(&counts);

        // The zero entry adds nothing to the magnitude and never lands
        // in the map
        assert_eq!(fp.len(), 2);
        assert_eq!(fp.weight(Trigram::from_str("aaa")), 0.6);
        assert_eq!(fp.weight(Trigram::from_str("zzz")), 0.0);
    }

    #[test]
    fn weights_ignore_accumulation_order() {
        let forward = counts_of(&[("aaa", 3), ("bbb", 4), ("ccc", 12)]);
        let mut reversed = TrigramCounts::default();
        for (&t, &c) in forward.iter().collect::<Vec<_>>().into_iter().rev() {
            reversed.insert(t, c);
        }

        let a = Fingerprint::from_counts(&forward);
        let b = Fingerprint::from_counts(&reversed);
        for (t, w) in a.iter() {
            // Bit-for-bit equal, not just approximately equal
            assert_eq!(w.to_bits(), b.weight(t).to_bits());
        }
    }
}
