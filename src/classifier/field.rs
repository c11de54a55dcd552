//! Field labelling for listing text fragments.
//!
//! Trained from `training/extraction/*.json`, one label per file, in file
//! name order. That order decides ties.

use std::path::Path;

use super::{train_model, NaiveBayes, Prediction, TrainingSet};
use crate::error::Result;
use crate::text::classifier_tokens;

/// Winning label for a text fragment plus the full distribution.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub label: String,
    pub prediction: Prediction,
}

/// Assigns listing text fragments to semantic field labels.
#[derive(Debug, Clone)]
pub struct FieldClassifier {
    model: NaiveBayes,
}

impl FieldClassifier {
    /// Train from an extraction training set. Fails if the set is empty.
    pub fn train(set: &TrainingSet) -> Result<Self> {
        Ok(Self {
            model: train_model(set, "extraction")?,
        })
    }

    /// Train from a directory of extraction training files.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        Self::train(&TrainingSet::from_extraction_dir(dir)?)
    }

    /// Labels the classifier can assign, in tie-break order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.model.labels()
    }

    /// Probability per label for `text`.
    #[must_use]
    pub fn predict(&self, text: &str) -> Prediction {
        self.model.predict(&classifier_tokens(text))
    }

    /// Classify a fragment. `None` when the model yields no distribution.
    #[must_use]
    pub fn classify(&self, text: &str) -> Option<Classification> {
        let prediction = self.predict(text);
        let label = prediction.best()?.0.to_string();
        Some(Classification { label, prediction })
    }
}
