//! Multinomial Naive Bayes over token bags.
//!
//! Every `train` call counts as one document for the label's prior. Token
//! likelihoods use add-one (Laplace) smoothing over the shared vocabulary,
//! with one extra slot reserved for unseen tokens. Scores are accumulated in
//! log space and normalized into probabilities on the way out.

use std::collections::{HashMap, HashSet};

use super::Prediction;

#[derive(Debug, Clone, Default)]
struct LabelStats {
    label: String,
    documents: usize,
    token_counts: HashMap<String, usize>,
    total_tokens: usize,
}

/// A trainable multinomial Naive Bayes text model.
///
/// Labels keep the order in which they were first trained; predictions list
/// them in that order.
#[derive(Debug, Clone, Default)]
pub struct NaiveBayes {
    labels: Vec<LabelStats>,
    vocabulary: HashSet<String>,
    documents: usize,
}

impl NaiveBayes {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one document of `tokens` under `label`.
    pub fn train<S: AsRef<str>>(&mut self, label: &str, tokens: &[S]) {
        let index = match self.labels.iter().position(|s| s.label == label) {
            Some(index) => index,
            None => {
                self.labels.push(LabelStats {
                    label: label.to_string(),
                    ..LabelStats::default()
                });
                self.labels.len() - 1
            }
        };

        let stats = &mut self.labels[index];
        stats.documents += 1;
        for token in tokens {
            let token = token.as_ref();
            *stats.token_counts.entry(token.to_string()).or_default() += 1;
            stats.total_tokens += 1;
            self.vocabulary.insert(token.to_string());
        }
        self.documents += 1;
    }

    /// Trained labels in insertion order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(|s| s.label.as_str())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Posterior probability per label for a token bag.
    ///
    /// An untrained model yields an empty prediction.
    #[must_use]
    pub fn predict<S: AsRef<str>>(&self, tokens: &[S]) -> Prediction {
        if self.labels.is_empty() {
            return Prediction::default();
        }

        let vocabulary = (self.vocabulary.len() + 1) as f64;
        let log_scores: Vec<f64> = self
            .labels
            .iter()
            .map(|stats| {
                let prior = (stats.documents as f64 / self.documents as f64).ln();
                let denominator = stats.total_tokens as f64 + vocabulary;
                tokens.iter().fold(prior, |score, token| {
                    let count = stats.token_counts.get(token.as_ref()).copied().unwrap_or(0);
                    score + ((count as f64 + 1.0) / denominator).ln()
                })
            })
            .collect();

        // Log-sum-exp normalization
        let max = log_scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let total: f64 = log_scores.iter().map(|s| (s - max).exp()).sum();

        Prediction::new(
            self.labels
                .iter()
                .zip(log_scores)
                .map(|(stats, score)| (stats.label.clone(), (score - max).exp() / total))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> NaiveBayes {
        let mut nb = NaiveBayes::new();
        nb.train("positive", &["in", "stock", "available"]);
        nb.train("negative", &["out", "of", "stock", "unavailable"]);
        nb
    }

    #[test]
    fn untrained_model_predicts_nothing() {
        let nb = NaiveBayes::new();
        assert!(nb.predict(&["stock"]).is_empty());
    }

    #[test]
    fn probabilities_sum_to_one_in_label_order() {
        let prediction = model().predict(&["in", "stock"]);
        let labels: Vec<&str> = prediction.iter().map(|(l, _)| l).collect();
        assert_eq!(labels, vec!["positive", "negative"]);

        let total: f64 = prediction.iter().map(|(_, p)| p).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn discriminating_tokens_decide() {
        let nb = model();
        assert_eq!(nb.predict(&["in", "stock"]).best().map(|(l, _)| l), Some("positive"));
        assert_eq!(
            nb.predict(&["out", "of", "stock"]).best().map(|(l, _)| l),
            Some("negative")
        );
    }

    #[test]
    fn repeated_training_accumulates_under_one_label() {
        let mut nb = model();
        nb.train("positive", &["yes"]);
        assert_eq!(nb.labels().collect::<Vec<_>>(), vec!["positive", "negative"]);
        assert_eq!(nb.predict(&["yes"]).best().map(|(l, _)| l), Some("positive"));
    }
}
