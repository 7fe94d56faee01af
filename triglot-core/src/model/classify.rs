//! Document classification.

use smallvec::SmallVec;
use triglot_types::{ClassifierConfig, ClassifyError, LabelScore};

use crate::analyzer::trigram::count_trigrams;
use crate::model::types::{Model, MIN_LANGUAGES, RANK_BUF};

impl Model {
    /// Classifies a document, returning the winning language label.
    ///
    /// The document's raw trigram counts are scored against every
    /// fingerprint and ranked highest first, equal scores falling back
    /// to id order (alphabetical label order). The top label wins,
    /// unless the runner-up comes within `config.epsilon` of it; then
    /// the margin is too thin to trust and `config.fallback` is
    /// returned instead.
    ///
    /// An empty document, or one sharing no trigram with any language,
    /// scores 0.0 everywhere and therefore lands on the fallback.
    ///
    /// # Example
    ///
    /// ```
    /// use triglot_core::model::Model;
    /// use triglot_types::ClassifierConfig;
    ///
    /// let model = Model::from_table("English\tthe cat sat\nFrench\tle chat assis\n")?;
    /// let config = ClassifierConfig::default();
    ///
    /// assert_eq!(model.classify("the cat", &config)?, "English");
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    ///
    /// # Errors
    /// Returns [`ClassifyError::InsufficientModel`] when fewer than two
    /// languages were trained; with a single language the runner-up
    /// comparison has nothing to compare against.
    pub fn classify<'a>(
        &'a self,
        document: &str,
        config: &'a ClassifierConfig,
    ) -> Result<&'a str, ClassifyError> {
        if self.labels.len() < MIN_LANGUAGES {
            return Err(ClassifyError::InsufficientModel {
                languages: self.labels.len(),
                required: MIN_LANGUAGES,
            });
        }

        let counts = count_trigrams(document);
        let mut ranked: SmallVec<[LabelScore; RANK_BUF]> = SmallVec::new();
        self.score_into(&counts, &mut ranked);

        // Highest score first; exact ties fall back to id order, which
        // is alphabetical label order
        ranked.sort_unstable_by(|a, b| {
            b.score.total_cmp(&a.score).then_with(|| a.lang.cmp(&b.lang))
        });

        // The guard above ensures at least two entries
        let top = ranked[0];
        let second = ranked[1];

        if second.score > top.score - config.epsilon {
            return Ok(&config.fallback);
        }

        // Ids index the label table by construction
        Ok(&self.labels[top.lang as usize])
    }
}
