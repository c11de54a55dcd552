//! Raw per-product field values, before normalization.

use std::collections::HashMap;

use crate::classifier::Prediction;

/// Extracted text: one fragment, or every value an explicit rule matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldText {
    Single(String),
    Many(Vec<String>),
}

impl FieldText {
    /// The single value, or the first of many.
    #[must_use]
    pub fn first(&self) -> Option<&str> {
        match self {
            Self::Single(text) => Some(text.as_str()),
            Self::Many(values) => values.first().map(String::as_str),
        }
    }

    /// All values; a single value is a one-element list.
    #[must_use]
    pub fn values(&self) -> Vec<&str> {
        match self {
            Self::Single(text) => vec![text.as_str()],
            Self::Many(values) => values.iter().map(String::as_str).collect(),
        }
    }
}

impl From<&str> for FieldText {
    fn from(text: &str) -> Self {
        Self::Single(text.to_string())
    }
}

impl From<String> for FieldText {
    fn from(text: String) -> Self {
        Self::Single(text)
    }
}

impl From<Vec<String>> for FieldText {
    fn from(values: Vec<String>) -> Self {
        Self::Many(values)
    }
}

/// One field of one product node.
#[derive(Debug, Clone, PartialEq)]
pub struct RawField {
    pub text: FieldText,
    pub matched_label: String,
    /// Populated for classified fragments, empty for selector rules.
    pub prediction: Prediction,
}

impl RawField {
    /// A field produced by the classifier.
    #[must_use]
    pub fn classified(text: String, label: String, prediction: Prediction) -> Self {
        Self {
            text: FieldText::Single(text),
            matched_label: label,
            prediction,
        }
    }

    /// A field produced by an explicit selector rule.
    #[must_use]
    pub fn selected(label: &str, values: Vec<String>) -> Self {
        Self {
            text: FieldText::Many(values),
            matched_label: label.to_string(),
            prediction: Prediction::default(),
        }
    }
}

/// Label → field for one product node. Later inserts under the same label win.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldMap {
    fields: HashMap<String, RawField>,
}

impl FieldMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a field under its matched label, returning any field it replaced.
    pub fn insert(&mut self, field: RawField) -> Option<RawField> {
        self.fields.insert(field.matched_label.clone(), field)
    }

    /// Convenience for building maps by hand: a field without a prediction.
    pub fn set(&mut self, label: &str, text: impl Into<FieldText>) {
        self.insert(RawField {
            text: text.into(),
            matched_label: label.to_string(),
            prediction: Prediction::default(),
        });
    }

    #[must_use]
    pub fn get(&self, label: &str) -> Option<&RawField> {
        self.fields.get(label)
    }

    /// First text value under `label`.
    #[must_use]
    pub fn text(&self, label: &str) -> Option<&str> {
        self.get(label).and_then(|f| f.text.first())
    }

    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.fields.contains_key(label)
    }

    /// Labels present, sorted.
    #[must_use]
    pub fn labels(&self) -> Vec<&str> {
        let mut labels: Vec<&str> = self.fields.keys().map(String::as_str).collect();
        labels.sort_unstable();
        labels
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
