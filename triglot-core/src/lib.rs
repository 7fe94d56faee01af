//! Trigram-frequency language identification.
//!
//! triglot identifies the language of a document by comparing its
//! trigram frequencies against per-language fingerprints learned from a
//! labeled corpus. Text is windowed into overlapping 3-character
//! sequences, counted, and L2-normalized into unit vectors; a document
//! is then ranked against every language by dot product, with a
//! configurable fallback label for margins too thin to trust.
//!
//! ## Quick start
//!
//! ```
//! use triglot_core::Model;
//! use triglot_types::ClassifierConfig;
//!
//! let table = "English\tthe cat sat on the mat\n\
//!              French\tle chat est assis sur le tapis\n";
//! let model = Model::from_table(table)?;
//!
//! let config = ClassifierConfig::default();
//! assert_eq!(model.classify("le chat", &config)?, "French");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]

pub mod analyzer;
pub mod corpus;
pub mod model;

pub use model::{Model, ModelBuilder, ModelStats};
