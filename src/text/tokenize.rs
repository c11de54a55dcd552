//! Social-media-aware tokenizer.
//!
//! Listing markup mixes prices, dates, ratings and emoji-ish punctuation, so
//! plain whitespace splitting loses too much. Tokens come from the ordered
//! alternatives in [`crate::patterns::TOKEN`].

use crate::patterns::TOKEN;

/// Split text into tokens, preserving original casing and order.
#[must_use]
pub fn tokenize(text: &str) -> Vec<String> {
    TOKEN
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Case-fold tokens and drop empty ones.
#[must_use]
pub fn normalize_tokens<I, S>(tokens: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|t| t.as_ref().trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect()
}

/// Tokenize and normalize in one step; the form fed to the classifiers.
#[must_use]
pub fn classifier_tokens(text: &str) -> Vec<String> {
    normalize_tokens(tokenize(text))
}
