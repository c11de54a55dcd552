//! In-stock classification of availability text.
//!
//! The `Availability:` prefix is stripped before tokenizing. Labels are
//! `positive` and `negative`; a tie, blank text included, goes to whichever
//! the validation file lists first.

use std::path::Path;

use super::{train_model, NaiveBayes, Prediction, TrainingSet};
use crate::error::{Error, Result};
use crate::normalize::format_availability;
use crate::text::classifier_tokens;

/// Label meaning "in stock".
pub const POSITIVE: &str = "positive";
/// Label meaning "not in stock".
pub const NEGATIVE: &str = "negative";

/// Binary in-stock classifier over availability text.
#[derive(Debug, Clone)]
pub struct AvailabilityClassifier {
    model: NaiveBayes,
}

impl AvailabilityClassifier {
    /// Train from a validation set. The set must contain a `positive` label.
    pub fn train(set: &TrainingSet) -> Result<Self> {
        if set.get(POSITIVE).is_none() {
            return Err(Error::Configuration(format!(
                "availability training has no `{POSITIVE}` label"
            )));
        }
        Ok(Self {
            model: train_model(set, "availability")?,
        })
    }

    /// Train from a validation training file.
    pub fn from_file(path: &Path) -> Result<Self> {
        Self::train(&TrainingSet::from_validation_file(path)?)
    }

    /// Distribution over `positive`/`negative` for raw availability text.
    #[must_use]
    pub fn predict(&self, text: &str) -> Prediction {
        self.model
            .predict(&classifier_tokens(&format_availability(text)))
    }

    /// Whether `positive` wins the prediction for the text.
    ///
    /// Blank text leaves only the label priors, so it follows the tie-break.
    #[must_use]
    pub fn is_available(&self, text: &str) -> bool {
        self.predict(text)
            .best()
            .is_some_and(|(label, _)| label == POSITIVE)
    }
}
