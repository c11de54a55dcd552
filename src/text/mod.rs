//! Text toolkit shared by the classifiers and the date normalizer.

pub mod rake;
mod tokenize;

pub use tokenize::{classifier_tokens, normalize_tokens, tokenize};
