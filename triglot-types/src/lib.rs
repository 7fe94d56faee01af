//! Core types for the triglot language identifier.
//!
//! This crate provides the fundamental types that are shared across
//! the triglot ecosystem. Keeping types separate ensures:
//!
//! - **Zero-cost abstractions**: Types are plain values with no hidden state
//! - **Cross-crate compatibility**: Engine and CLI share the same types
//! - **Clean boundaries**: No circular dependencies between crates

#![warn(missing_docs)]

use core::fmt;

/// Identifier of a trained language inside a model.
///
/// Languages are identified by a 32-bit unsigned integer assigned at
/// model build time. Ids index the model's label table, which is sorted
/// ascending by label, so id order and label order always agree.
pub type LangId = u32;

/// Per-language similarity score produced for one classified document.
///
/// Entries are ordered by score (higher is better), then by language id
/// (ascending) when scores are equal. Because ids follow label order,
/// exact ties resolve alphabetically by label.
#[derive(Debug, Clone, Copy)]
pub struct LabelScore {
    /// Language identifier
    pub lang: LangId,
    /// Similarity score (higher is better)
    pub score: f64,
}

impl PartialEq for LabelScore {
    fn eq(&self, other: &Self) -> bool {
        // Two entries are equal if both lang AND score are equal
        self.lang == other.lang && self.score == other.score
    }
}

impl Eq for LabelScore {}

impl PartialOrd for LabelScore {
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LabelScore {
    #[inline(always)]
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        // Primary: score (higher = greater for intuitive comparison)
        // Secondary: lang (for deterministic ordering when scores are equal)
        match self.score.total_cmp(&other.score) {
            core::cmp::Ordering::Equal => self.lang.cmp(&other.lang),
            ord => ord,
        }
    }
}

impl LabelScore {
    /// Creates a new score entry.
    #[inline(always)]
    pub const fn new(lang: LangId, score: f64) -> Self {
        Self { lang, score }
    }
}

impl fmt::Display for LabelScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "lang={} score={:.3}", self.lang, self.score)
    }
}

/// A trigram: three consecutive characters of a document.
///
/// Characters are Unicode scalar values rather than bytes. Languages are
/// often told apart precisely by their multi-byte characters, so a packed
/// byte representation would conflate distinct scripts. The value:
/// - Is `Copy` and allocation-free (12 bytes)
/// - Works as a hash map key without indirection
/// - Orders lexicographically by character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Trigram([char; 3]);

impl Trigram {
    /// Creates a trigram from three characters.
    #[inline(always)]
    pub const fn from_chars(a: char, b: char, c: char) -> Self {
        Self([a, b, c])
    }

    /// Creates a trigram from the first three characters of a string slice.
    /// Panics if the slice holds fewer than 3 characters.
    #[inline]
    pub fn from_str(s: &str) -> Self {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(a), Some(b), Some(c)) => Self([a, b, c]),
            _ => panic!("trigram requires at least 3 characters"),
        }
    }

    /// Returns the three characters of this trigram.
    #[inline(always)]
    pub const fn chars(self) -> [char; 3] {
        self.0
    }
}

impl From<[char; 3]> for Trigram {
    #[inline(always)]
    fn from(chars: [char; 3]) -> Self {
        Self(chars)
    }
}

impl From<Trigram> for [char; 3] {
    #[inline(always)]
    fn from(t: Trigram) -> Self {
        t.0
    }
}

impl fmt::Display for Trigram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.0[0], self.0[1], self.0[2])
    }
}

/// Errors that can occur when training a model from a labeled table.
///
/// Training is all-or-nothing: any row failing validation aborts the
/// whole run without producing a partial model. A fingerprint built
/// from misparsed rows would degrade every later classification with
/// no visible signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrainError {
    /// A training row does not split into exactly two columns.
    MalformedRow {
        /// 1-based line number of the offending row.
        line: usize,
        /// Number of columns found on that row.
        columns: usize,
    },
    /// The training table is not valid UTF-8.
    InvalidEncoding {
        /// Number of leading bytes that decoded cleanly.
        valid_up_to: usize,
    },
}

impl fmt::Display for TrainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrainError::MalformedRow { line, columns } => {
                write!(
                    f,
                    "training row {} has {} columns (expected 2)",
                    line, columns
                )
            }
            TrainError::InvalidEncoding { valid_up_to } => {
                write!(
                    f,
                    "training table is not valid UTF-8 (valid up to byte {})",
                    valid_up_to
                )
            }
        }
    }
}

impl core::error::Error for TrainError {}

/// Errors that can occur when classifying a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassifyError {
    /// The model holds too few languages for the ranking rule.
    ///
    /// The near-tie check compares the winner against a runner-up, so a
    /// usable model needs at least two trained languages.
    InsufficientModel {
        /// Number of languages in the model.
        languages: usize,
        /// Minimum number of languages required.
        required: usize,
    },
}

impl fmt::Display for ClassifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassifyError::InsufficientModel {
                languages,
                required,
            } => {
                write!(
                    f,
                    "model holds {} trained languages (classification requires {})",
                    languages, required
                )
            }
        }
    }
}

impl core::error::Error for ClassifyError {}

/// Default near-tie threshold.
pub const DEFAULT_EPSILON: f64 = 1e-10;

/// Default label reported when the winning margin is too thin to trust.
pub const DEFAULT_FALLBACK: &str = "English";

/// Classification configuration options.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifierConfig {
    /// Near-tie threshold: when the runner-up score comes within `epsilon`
    /// of the top score, the result is ambiguous and the fallback label is
    /// reported instead of the winner.
    /// Default: 1e-10
    pub epsilon: f64,
    /// Label reported for an ambiguous result.
    /// Default: "English"
    pub fallback: String,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
            fallback: DEFAULT_FALLBACK.to_string(),
        }
    }
}

impl ClassifierConfig {
    /// Creates a configuration with a custom fallback label.
    pub fn with_fallback<S: Into<String>>(fallback: S) -> Self {
        Self {
            fallback: fallback.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_score_ordering() {
        let r1 = LabelScore::new(1, 0.9);
        let r2 = LabelScore::new(2, 0.5);
        let r3 = LabelScore::new(3, 0.9); // Same score as r1

        assert!(r1 > r2); // Higher score is "greater"
        assert_ne!(r1, r3); // Different lang = not equal

        // When scores are equal, lang breaks the tie
        assert_eq!(r1.cmp(&r3), core::cmp::Ordering::Less); // lang 1 < lang 3
    }

    #[test]
    fn label_score_total_order_on_signed_zero() {
        let pos = LabelScore::new(0, 0.0);
        let neg = LabelScore::new(0, -0.0);
        // total_cmp keeps the order total even across signed zeros
        assert_eq!(pos.cmp(&neg), core::cmp::Ordering::Greater);
    }

    #[test]
    fn trigram_from_chars() {
        let t = Trigram::from_chars('a', 'b', 'c');
        assert_eq!(t.chars(), ['a', 'b', 'c']);
        assert_eq!(t.to_string(), "abc");
    }

    #[test]
    fn trigram_from_str() {
        let t = Trigram::from_str("abcdef");
        assert_eq!(t.chars(), ['a', 'b', 'c']);
    }

    #[test]
    fn trigram_from_str_multibyte() {
        let t = Trigram::from_str("héllo");
        assert_eq!(t.chars(), ['h', 'é', 'l']);
        assert_eq!(t.to_string(), "hél");
    }

    #[test]
    #[should_panic(expected = "at least 3 characters")]
    fn trigram_from_short_str_panics() {
        let _ = Trigram::from_str("ab");
    }

    #[test]
    fn trigram_orders_lexicographically() {
        let a = Trigram::from_str("abc");
        let b = Trigram::from_str("abd");
        let c = Trigram::from_str("baa");
        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn config_defaults() {
        let config = ClassifierConfig::default();
        assert_eq!(config.epsilon, DEFAULT_EPSILON);
        assert_eq!(config.fallback, DEFAULT_FALLBACK);
    }

    #[test]
    fn config_with_fallback() {
        let config = ClassifierConfig::with_fallback("Unknown");
        assert_eq!(config.fallback, "Unknown");
        assert_eq!(config.epsilon, DEFAULT_EPSILON);
    }

    #[test]
    fn train_error_display() {
        let err = TrainError::MalformedRow {
            line: 17,
            columns: 3,
        };
        assert_eq!(err.to_string(), "training row 17 has 3 columns (expected 2)");

        let err = TrainError::InvalidEncoding { valid_up_to: 42 };
        assert!(err.to_string().contains("byte 42"));
    }

    #[test]
    fn classify_error_display() {
        let err = ClassifyError::InsufficientModel {
            languages: 1,
            required: 2,
        };
        assert_eq!(
            err.to_string(),
            "model holds 1 trained languages (classification requires 2)"
        );
    }
}
