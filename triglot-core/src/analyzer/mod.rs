//! Text analysis pipeline.
//!
//! This module provides the text processing components:
//! - **Trigram**: Extracts and counts overlapping 3-character windows
//! - **Fingerprint**: L2-normalizes counts into comparable unit vectors
//!
//! Text enters the pipeline verbatim. There is deliberately no
//! normalization or tokenization stage: casing, whitespace and
//! punctuation habits differ between languages and are part of the
//! signal, not noise to scrub out.

pub mod fingerprint;
pub mod trigram;

pub use fingerprint::Fingerprint;
pub use trigram::{count_trigrams, extract_trigrams, TrigramCounts};
