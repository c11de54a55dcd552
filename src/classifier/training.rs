//! Training data loading.
//!
//! Extraction training lives in a directory of JSON files, one label per file:
//!
//! ```json
//! { "name": "price", "training": ["£699.99", "$199.99"] }
//! ```
//!
//! Validation training is a single file of keyed exemplar lists:
//!
//! ```json
//! { "validation": [ { "key": "positive", "training": ["In Stock"] } ] }
//! ```

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::{Error, Result};

#[derive(Debug, Deserialize)]
struct ExtractionFile {
    name: String,
    training: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ValidationFile {
    validation: Vec<ValidationEntry>,
}

#[derive(Debug, Deserialize)]
struct ValidationEntry {
    key: String,
    training: Vec<String>,
}

/// Ordered mapping from label to exemplar phrases.
///
/// Label order is insertion order and decides classifier tie-breaks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrainingSet {
    entries: Vec<(String, Vec<String>)>,
}

impl TrainingSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the phrases for `label`, replacing earlier ones but keeping the
    /// label's original position.
    pub fn insert(&mut self, label: impl Into<String>, phrases: Vec<String>) {
        let label = label.into();
        match self.entries.iter_mut().find(|(l, _)| *l == label) {
            Some((_, existing)) => *existing = phrases,
            None => self.entries.push((label, phrases)),
        }
    }

    /// Append phrases to `label`, creating it at the end if new.
    pub fn extend(&mut self, label: impl Into<String>, phrases: Vec<String>) {
        let label = label.into();
        match self.entries.iter_mut().find(|(l, _)| *l == label) {
            Some((_, existing)) => existing.extend(phrases),
            None => self.entries.push((label, phrases)),
        }
    }

    #[must_use]
    pub fn get(&self, label: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, phrases)| phrases.as_slice())
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(l, _)| l.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(l, phrases)| (l.as_str(), phrases.as_slice()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Load every `*.json` file of an extraction training directory.
    ///
    /// Files are read in filename order, which fixes label order. A later
    /// file declaring an already seen `name` replaces its phrases.
    pub fn from_extraction_dir(dir: &Path) -> Result<Self> {
        let entries = fs::read_dir(dir).map_err(|e| {
            Error::Configuration(format!(
                "training directory {} is not readable: {e}",
                dir.display()
            ))
        })?;

        let mut paths: Vec<_> = entries
            .filter_map(std::result::Result::ok)
            .map(|entry| entry.path())
            .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "json"))
            .collect();
        paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

        let mut set = Self::new();
        for path in &paths {
            let file: ExtractionFile = load_json(path)?;
            set.insert(file.name.trim(), file.training);
        }

        if set.is_empty() {
            return Err(Error::Configuration(format!(
                "no extraction training files in {}",
                dir.display()
            )));
        }
        tracing::debug!(dir = %dir.display(), labels = set.len(), "loaded extraction training");
        Ok(set)
    }

    /// Load a validation training file.
    pub fn from_validation_file(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::Configuration(format!(
                "validation training file {} does not exist",
                path.display()
            )));
        }
        let file: ValidationFile = load_json(path)?;
        let set = Self::from_validation_entries(file.validation);
        if set.is_empty() {
            return Err(Error::Configuration(format!(
                "validation training file {} has no entries",
                path.display()
            )));
        }
        Ok(set)
    }

    /// Parse validation training from a JSON string.
    pub fn from_validation_json(json: &str) -> Result<Self> {
        let file: ValidationFile = serde_json::from_str(json).map_err(|source| Error::Json {
            path: "<inline>".into(),
            source,
        })?;
        Ok(Self::from_validation_entries(file.validation))
    }

    fn from_validation_entries(entries: Vec<ValidationEntry>) -> Self {
        let mut set = Self::new();
        for entry in entries {
            set.extend(entry.key.trim(), entry.training);
        }
        set
    }
}

impl<L: Into<String>> FromIterator<(L, Vec<String>)> for TrainingSet {
    fn from_iter<T: IntoIterator<Item = (L, Vec<String>)>>(iter: T) -> Self {
        let mut set = Self::new();
        for (label, phrases) in iter {
            set.insert(label, phrases);
        }
        set
    }
}

fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })
}
