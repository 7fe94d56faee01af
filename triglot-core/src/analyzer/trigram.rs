//! Trigram extraction module.
//!
//! Provides extraction of overlapping 3-character windows from text.
//! Trigram frequencies are the raw signal every language fingerprint
//! and every classification is built from.

use rustc_hash::FxHashMap;
use triglot_types::Trigram;

/// Trigram frequency table for one piece of text.
pub type TrigramCounts = FxHashMap<Trigram, u64>;

/// Extracts trigrams from text using a sliding character window.
///
/// For text shorter than 3 characters, no trigrams are emitted.
/// For text of N characters, exactly N-2 trigrams are emitted, in
/// document order. Windows slide over Unicode characters, never bytes,
/// and the text is taken verbatim: no case folding, no trimming, no
/// whitespace or punctuation filtering. Spaces and punctuation carry
/// real signal for language identification.
///
/// # Example
///
/// ```
/// use triglot_core::analyzer::trigram::extract_trigrams;
/// use triglot_types::Trigram;
///
/// let mut trigrams = Vec::new();
/// extract_trigrams("hello", |t| trigrams.push(t));
///
/// assert_eq!(trigrams.len(), 3); // "hel", "ell", "llo"
/// ```
#[inline(always)]
pub fn extract_trigrams<F>(text: &str, mut callback: F)
where
    F: FnMut(Trigram),
{
    let mut chars = text.chars();
    let (mut a, mut b) = match (chars.next(), chars.next()) {
        (Some(a), Some(b)) => (a, b),
        _ => return,
    };

    for c in chars {
        callback(Trigram::from_chars(a, b, c));
        a = b;
        b = c;
    }
}

/// Counts trigram windows without extracting them.
///
/// Returns 0 for text shorter than 3 characters, N-2 otherwise,
/// where N is the character count (not the byte count).
#[inline(always)]
pub fn window_count(text: &str) -> usize {
    text.chars().count().saturating_sub(2)
}

/// Builds the trigram frequency table of a text.
///
/// Every window emitted by [`extract_trigrams`] contributes one count.
/// Text with fewer than 3 characters yields an empty table.
///
/// # Example
///
/// ```
/// use triglot_core::analyzer::trigram::count_trigrams;
///
/// let counts = count_trigrams("aaaa");
/// assert_eq!(counts.len(), 1); // only "aaa", seen twice
/// ```
pub fn count_trigrams(text: &str) -> TrigramCounts {
    let mut counts = TrigramCounts::default();
    extract_trigrams(text, |t| *counts.entry(t).or_insert(0) += 1);
    counts
}

/// Sums all frequencies in a trigram table.
#[inline]
pub fn total_trigrams(counts: &TrigramCounts) -> u64 {
    counts.values().sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_basic() {
        let mut trigrams = Vec::new();
        extract_trigrams("hello", |t| trigrams.push(t));

        assert_eq!(trigrams.len(), 3);
        assert_eq!(trigrams[0], Trigram::from_chars('h', 'e', 'l'));
        assert_eq!(trigrams[1], Trigram::from_chars('e', 'l', 'l'));
        assert_eq!(trigrams[2], Trigram::from_chars('l', 'l', 'o'));
    }

    #[test]
    fn extract_short_text() {
        let mut trigrams = Vec::new();
        extract_trigrams("ab", |t| trigrams.push(t));
        assert!(trigrams.is_empty());

        extract_trigrams("", |t| trigrams.push(t));
        assert!(trigrams.is_empty());

        extract_trigrams("a", |t| trigrams.push(t));
        assert!(trigrams.is_empty());
    }

    #[test]
    fn extract_exactly_three() {
        let mut trigrams = Vec::new();
        extract_trigrams("abc", |t| trigrams.push(t));

        assert_eq!(trigrams, vec![Trigram::from_chars('a', 'b', 'c')]);
    }

    #[test]
    fn extract_slides_over_characters_not_bytes() {
        // "héllo" is 5 characters but 6 bytes; a byte window would
        // produce 4 trigrams and split the 'é' in half
        let mut trigrams = Vec::new();
        extract_trigrams("héllo", |t| trigrams.push(t));

        assert_eq!(trigrams.len(), 3);
        assert_eq!(trigrams[0], Trigram::from_chars('h', 'é', 'l'));
        assert_eq!(trigrams[2], Trigram::from_chars('l', 'l', 'o'));
    }

    #[test]
    fn extract_keeps_text_verbatim() {
        // Case, spaces and punctuation all pass through untouched
        let mut trigrams = Vec::new();
        extract_trigrams("A b!", |t| trigrams.push(t));

        assert_eq!(trigrams.len(), 2);
        assert_eq!(trigrams[0], Trigram::from_chars('A', ' ', 'b'));
        assert_eq!(trigrams[1], Trigram::from_chars(' ', 'b', '!'));
    }

    #[test]
    fn window_count_law() {
        assert_eq!(window_count("hello"), 3);
        assert_eq!(window_count("ab"), 0);
        assert_eq!(window_count(""), 0);
        assert_eq!(window_count("abc"), 1);
        assert_eq!(window_count("héllo"), 3); // characters, not bytes
    }

    #[test]
    fn count_accumulates_repeats() {
        let counts = count_trigrams("aaaa");
        assert_eq!(counts.len(), 1);
        assert_eq!(counts[&Trigram::from_str("aaa")], 2);

        let counts = count_trigrams("ababa");
        assert_eq!(counts[&Trigram::from_str("aba")], 2);
        assert_eq!(counts[&Trigram::from_str("bab")], 1);
    }

    #[test]
    fn count_empty_text() {
        let counts = count_trigrams("");
        assert!(counts.is_empty());
        assert_eq!(total_trigrams(&counts), 0);
    }

    #[test]
    fn total_matches_window_count() {
        let text = "the quick brown fox";
        let counts = count_trigrams(text);
        assert_eq!(total_trigrams(&counts), window_count(text) as u64);
    }
}
