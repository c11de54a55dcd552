//! RAKE keyphrase extraction.
//!
//! Rapid Automatic Keyword Extraction: candidate phrases are the runs of
//! content tokens between stop words and punctuation. Each word scores
//! `degree / frequency`, a phrase scores the sum of its words, and phrases are
//! ranked by score (ties keep first-appearance order).

use std::collections::HashMap;

/// English stop words that delimit candidate phrases.
const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "as", "at", "be", "because", "been", "before", "being", "below", "between", "both", "but",
    "by", "can", "could", "did", "do", "does", "doing", "down", "during", "each", "few", "for",
    "from", "further", "get", "had", "has", "have", "having", "he", "her", "here", "hers", "him",
    "his", "how", "i", "if", "in", "into", "is", "it", "its", "itself", "just", "me", "more",
    "most", "my", "no", "nor", "not", "now", "of", "off", "on", "once", "only", "or", "other",
    "our", "ours", "out", "over", "own", "same", "she", "should", "so", "some", "such", "than",
    "that", "the", "their", "them", "then", "there", "these", "they", "this", "those", "through",
    "to", "too", "under", "until", "up", "very", "was", "we", "were", "what", "when", "where",
    "which", "while", "who", "whom", "why", "will", "with", "within", "would", "you", "your",
];

fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.contains(&token.to_lowercase().as_str())
}

/// A token that carries no letters or digits (punctuation, symbols).
fn is_delimiter(token: &str) -> bool {
    !token.chars().any(char::is_alphanumeric)
}

/// A ranked candidate phrase.
#[derive(Debug, Clone, PartialEq)]
pub struct Keyphrase {
    /// Phrase words joined by single spaces, original casing.
    pub phrase: String,
    pub score: f64,
}

/// Split tokens into candidate phrases (runs of content words).
fn candidate_phrases<S: AsRef<str>>(tokens: &[S]) -> Vec<Vec<&str>> {
    let mut phrases = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for token in tokens {
        let token = token.as_ref();
        if is_stop_word(token) || is_delimiter(token) {
            if !current.is_empty() {
                phrases.push(std::mem::take(&mut current));
            }
        } else {
            current.push(token);
        }
    }
    if !current.is_empty() {
        phrases.push(current);
    }

    phrases
}

/// Rank the keyphrases of a token sequence, best first.
///
/// Duplicate phrases (case-insensitive) are reported once, at their first
/// position.
#[must_use]
pub fn extract<S: AsRef<str>>(tokens: &[S]) -> Vec<Keyphrase> {
    let phrases = candidate_phrases(tokens);

    let mut frequency: HashMap<String, f64> = HashMap::new();
    let mut degree: HashMap<String, f64> = HashMap::new();
    for phrase in &phrases {
        let co_occurring = phrase.len() as f64;
        for word in phrase {
            let key = word.to_lowercase();
            *frequency.entry(key.clone()).or_default() += 1.0;
            *degree.entry(key).or_default() += co_occurring;
        }
    }

    let word_score = |word: &str| -> f64 {
        let key = word.to_lowercase();
        let freq = frequency.get(&key).copied().unwrap_or(1.0);
        degree.get(&key).copied().unwrap_or(0.0) / freq
    };

    let mut seen = std::collections::HashSet::new();
    let mut ranked: Vec<Keyphrase> = phrases
        .iter()
        .filter(|phrase| seen.insert(phrase.join(" ").to_lowercase()))
        .map(|phrase| Keyphrase {
            phrase: phrase.join(" "),
            score: phrase.iter().map(|w| word_score(w)).sum(),
        })
        .collect();

    // Stable sort keeps first-appearance order among equal scores
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked
}

/// Ranked phrase strings only.
#[must_use]
pub fn phrases<S: AsRef<str>>(tokens: &[S]) -> Vec<String> {
    extract(tokens).into_iter().map(|k| k.phrase).collect()
}
