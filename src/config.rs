//! Scrape configuration.
//!
//! Read from an INI-style `.environment` file:
//!
//! ```ini
//! ; listing to scrape
//! app.baseurl = "https://www.magpiehq.com/developer-challenge/smartphones"
//!
//! selector.pages = "#pages a"
//! selector.product = "#products .product"
//! selector.product.content = "div > h3 span, div > div"
//! selector.product.extra = "image=img[src]|color=span[data-colour]"
//! ```
//!
//! Lines starting with `;` or `#` are comments, and an unquoted value ends at
//! a trailing `; comment`. Keys are flat and dotted. A `[section]` header prefixes the keys below
//! it, so `[app]` followed by `baseurl = ...` is the same as `app.baseurl`.

use std::collections::HashMap;
use std::path::Path;

use crate::error::{Error, Result};
use crate::extractor::{parse_rules, ExtraRule};

/// Listing URL key.
pub const BASE_URL_KEY: &str = "app.baseurl";
/// Pagination link selector key.
pub const PAGES_KEY: &str = "selector.pages";
/// Product node selector key.
pub const PRODUCT_KEY: &str = "selector.product";
/// Content fragment selector key, relative to a product node.
pub const CONTENT_KEY: &str = "selector.product.content";
/// Explicit `label=selector[attribute]` rules key.
pub const EXTRA_KEY: &str = "selector.product.extra";

/// Configuration for one listing site.
///
/// All fields are public, so a config can also be built in code:
///
/// ```rust
/// use rs_product_scraper::{parse_rules, ScrapeConfig};
///
/// let config = ScrapeConfig {
///     base_url: "https://example.com/phones".to_string(),
///     extra_rules: parse_rules("image=img[src]"),
///     ..ScrapeConfig::default()
/// };
/// assert_eq!(config.product_selector, ".product");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapeConfig {
    /// Listing page URL; page URLs add `?page=<id>`.
    ///
    /// Required.
    pub base_url: String,

    /// Pagination links.
    ///
    /// Default: `#pages a`
    pub pages_selector: String,

    /// Product nodes.
    ///
    /// Default: `.product`
    pub product_selector: String,

    /// Content fragments, anchored at the product node's direct children.
    /// Empty matches every child.
    ///
    /// Default: empty
    pub content_selector: String,

    /// Explicit attribute rules.
    ///
    /// Default: none
    pub extra_rules: Vec<ExtraRule>,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            pages_selector: "#pages a".to_string(),
            product_selector: ".product".to_string(),
            content_selector: String::new(),
            extra_rules: Vec::new(),
        }
    }
}

impl ScrapeConfig {
    /// Load from an `.environment` file.
    ///
    /// # Errors
    /// [`Error::Io`] when the file cannot be read, [`Error::Configuration`]
    /// when a required key is missing.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_ini_str(&text)
    }

    /// Parse `.environment` text. Only `app.baseurl` is required.
    pub fn from_ini_str(text: &str) -> Result<Self> {
        let values = parse_ini(text);
        let defaults = Self::default();

        let base_url = values
            .get(BASE_URL_KEY)
            .filter(|v| !v.is_empty())
            .cloned()
            .ok_or_else(|| Error::Configuration(format!("missing `{BASE_URL_KEY}`")))?;

        let or_default = |key: &str, default: String| {
            values.get(key).filter(|v| !v.is_empty()).cloned().unwrap_or(default)
        };

        Ok(Self {
            base_url,
            pages_selector: or_default(PAGES_KEY, defaults.pages_selector),
            product_selector: or_default(PRODUCT_KEY, defaults.product_selector),
            content_selector: or_default(CONTENT_KEY, defaults.content_selector),
            extra_rules: values.get(EXTRA_KEY).map(|v| parse_rules(v)).unwrap_or_default(),
        })
    }
}

/// Flat key/value pairs from INI text. Later keys win.
fn parse_ini(text: &str) -> HashMap<String, String> {
    let mut values = HashMap::new();
    let mut section = String::new();

    for (number, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
            continue;
        }

        if let Some(name) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
            section = name.trim().to_string();
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            tracing::warn!(line = number + 1, "ignoring configuration line without `=`");
            continue;
        };

        let key = key.trim();
        let key = if section.is_empty() {
            key.to_string()
        } else {
            format!("{section}.{key}")
        };
        values.insert(key, parse_value(value).to_string());
    }

    values
}

/// A quoted value is taken verbatim up to its closing quote; an unquoted one
/// ends at the first `;`.
fn parse_value(value: &str) -> &str {
    let value = value.trim();
    for quote in ['"', '\''] {
        if let Some((inner, _)) = value
            .strip_prefix(quote)
            .and_then(|v| v.split_once(quote))
        {
            return inner;
        }
    }
    value.split_once(';').map_or(value, |(v, _)| v).trim_end()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENVIRONMENT: &str = r##"
; scraper settings
app.baseurl = "https://example.com/smartphones"

selector.pages = "#pages a"
selector.product = '#products .product'
# content fragments
selector.product.content = div > h3 span, div > div
selector.product.extra = "image=img[src]|color=span[data-colour]"
"##;

    #[test]
    fn parses_all_keys() {
        let config = ScrapeConfig::from_ini_str(ENVIRONMENT).expect("valid config");
        assert_eq!(config.base_url, "https://example.com/smartphones");
        assert_eq!(config.pages_selector, "#pages a");
        assert_eq!(config.product_selector, "#products .product");
        assert_eq!(config.content_selector, "div > h3 span, div > div");
        assert_eq!(config.extra_rules.len(), 2);
        assert_eq!(config.extra_rules[1].label, "color");
    }

    #[test]
    fn sections_prefix_keys() {
        let config = ScrapeConfig::from_ini_str(
            "[app]\nbaseurl = https://example.com\n[selector]\nproduct = li.item\n",
        )
        .expect("valid config");
        assert_eq!(config.base_url, "https://example.com");
        assert_eq!(config.product_selector, "li.item");
        assert_eq!(config.pages_selector, "#pages a");
    }

    #[test]
    fn trailing_comments_are_stripped() {
        let config = ScrapeConfig::from_ini_str(
            "app.baseurl = https://example.com ; listing\n\
             selector.product = .product ; product nodes\n\
             selector.pages = \"#pages a\" ; pagination\n\
             selector.product.content = 'div; span'\n",
        )
        .expect("valid config");
        assert_eq!(config.base_url, "https://example.com");
        assert_eq!(config.product_selector, ".product");
        assert_eq!(config.pages_selector, "#pages a");
        assert_eq!(config.content_selector, "div; span");
    }

    #[test]
    fn missing_base_url_is_a_configuration_error() {
        let err = ScrapeConfig::from_ini_str("selector.product = .product").unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
        assert!(err.to_string().contains(BASE_URL_KEY));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = ScrapeConfig::from_path(Path::new("/definitely/not/here/.environment"))
            .unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
