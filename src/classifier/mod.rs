//! Field and availability classification.
//!
//! Both classifiers are thin wrappers over a [`NaiveBayes`] model trained once
//! from a [`TrainingSet`] and read-only afterwards, so a single instance can
//! be shared across pages and threads.

mod availability;
mod field;
mod naive_bayes;
mod training;

pub use availability::{AvailabilityClassifier, NEGATIVE, POSITIVE};
pub use field::{Classification, FieldClassifier};
pub use naive_bayes::NaiveBayes;
pub use training::TrainingSet;

use crate::error::{Error, Result};
use crate::text::classifier_tokens;

/// Probability per label, in label insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Prediction {
    scores: Vec<(String, f64)>,
}

impl Prediction {
    #[must_use]
    pub fn new(scores: Vec<(String, f64)>) -> Self {
        Self { scores }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.scores.iter().map(|(label, p)| (label.as_str(), *p))
    }

    /// Probability assigned to `label`, if it is a known label.
    #[must_use]
    pub fn probability(&self, label: &str) -> Option<f64> {
        self.iter().find(|(l, _)| *l == label).map(|(_, p)| p)
    }

    /// The label with the strictly highest probability.
    ///
    /// Ties resolve to the label that comes first in insertion order.
    #[must_use]
    pub fn best(&self) -> Option<(&str, f64)> {
        let mut best: Option<(&str, f64)> = None;
        for (label, p) in self.iter() {
            if best.is_none_or(|(_, top)| p > top) {
                best = Some((label, p));
            }
        }
        best
    }
}

/// Train a model with one document per label, in training set order.
fn train_model(set: &TrainingSet, purpose: &str) -> Result<NaiveBayes> {
    if set.is_empty() {
        return Err(Error::Configuration(format!(
            "{purpose} training set has no labels"
        )));
    }

    let mut model = NaiveBayes::new();
    for (label, phrases) in set.iter() {
        let tokens: Vec<String> = phrases.iter().flat_map(|p| classifier_tokens(p)).collect();
        model.train(label, &tokens);
    }
    tracing::debug!(purpose, labels = set.len(), "trained classifier");
    Ok(model)
}
