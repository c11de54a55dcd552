//! Compiled regex patterns used across the pipeline.
//!
//! All patterns are compiled once at first use with `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Storage
// =============================================================================

/// A bare storage size with its unit glued on, e.g. `128GB`.
pub static STORAGE_TEXT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(\d+)([KMGT]?B)$").expect("STORAGE_TEXT regex"));

/// First `<number><unit-letter>` token inside storage text, e.g. `128 G` in `128 GB`.
pub static STORAGE_AMOUNT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+(?:\.\d+)?)\s?([GMKB])").expect("STORAGE_AMOUNT regex")
});

/// Any whitespace run.
pub static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE regex"));

// =============================================================================
// Availability
// =============================================================================

/// Label prefix ending at the last colon, e.g. `Availability: `.
pub static LABEL_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r".*:\s*(.*)").expect("LABEL_PREFIX regex"));

// =============================================================================
// Selector rules
// =============================================================================

/// Bracketed attribute token at the end of a selector, e.g. `src` in `img[src]`.
///
/// Only a bare attribute name counts; `[data-x="y"]` style filters do not.
pub static ATTRIBUTE_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[\s*([A-Za-z_][\w:.-]*)\s*\]\s*$").expect("ATTRIBUTE_TOKEN regex")
});

// =============================================================================
// Tokenization
// =============================================================================

/// Tokenizer alternatives, most specific first.
///
/// Keeps URLs, e-mail addresses, hashtags/mentions, emoticons, dates and
/// decimal numbers whole; splits currency symbols from amounts so the symbol
/// becomes a token of its own.
pub static TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?xi)
          https?://[^\s<>"']+                     # urls
        | [\w.+-]+@[\w-]+\.[\w.-]+                # e-mail
        | [@\#]\w+                                # mentions and hashtags
        | [:;=][-o*']?[)\](\[dDpP/\\|]            # emoticons
        | \d{1,4}[-/.]\d{1,2}[-/.]\d{1,4}         # dates
        | \d{1,2}(?:st|nd|rd|th)\b                # ordinals
        | \d+(?:[.,]\d+)*                         # numbers
        | \w+(?:['’-]\w+)*                        # words, contractions, hyphenated
        | [\$£€¥]                                 # currency symbols
        | [^\s\w]                                 # any other single symbol
        "#,
    )
    .expect("TOKEN regex")
});

// =============================================================================
// Dates
// =============================================================================

/// Ordinal suffix on a day number, e.g. the `th` of `5th`.
pub static ORDINAL_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(\d{1,2})(?:st|nd|rd|th)\b").expect("ORDINAL_SUFFIX regex"));
