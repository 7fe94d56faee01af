//! Language model training and classification.
//!
//! A [`Model`] is built once from labeled samples and then answers any
//! number of classification queries. The flow:
//!
//! - Training text is windowed into trigrams and counted per language
//! - Counts are L2-normalized into one unit fingerprint per language
//! - A document is scored by dotting its raw counts with each fingerprint
//! - The ranked winner is returned, unless the margin over the runner-up
//!   is within the configured epsilon, in which case the fallback label
//!   is returned instead
//!
//! Determinism:
//! - Counting is integral and normalization happens once at build time,
//!   so training is order-free: shuffled rows build an identical model
//! - Classification is pure: same model, document and config always
//!   produce the same label
//!
//! A built model holds no interior mutability and no buffers; it is
//! safely shared across threads.

mod builder;
mod classify;
mod scorer;
mod stats;
mod types;

pub use builder::ModelBuilder;
pub use stats::ModelStats;
pub use types::{Model, MIN_LANGUAGES};
