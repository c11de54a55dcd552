//! Explicit `label=selector[attribute]` extraction rules.

use std::fmt;
use std::str::FromStr;

use crate::patterns::ATTRIBUTE_TOKEN;

/// One explicit field rule, e.g. `image=img[src]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtraRule {
    pub label: String,
    /// CSS selector, including any trailing `[attribute]` token.
    pub selector: String,
    /// Attribute to read; `None` reads the node's text.
    pub attribute: Option<String>,
}

impl ExtraRule {
    #[must_use]
    pub fn new(label: &str, selector: &str) -> Self {
        let selector = selector.trim();
        let attribute = ATTRIBUTE_TOKEN
            .captures(selector)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string());
        Self {
            label: label.trim().to_string(),
            selector: selector.to_string(),
            attribute,
        }
    }
}

impl FromStr for ExtraRule {
    type Err = String;

    fn from_str(rule: &str) -> Result<Self, Self::Err> {
        let Some((label, selector)) = rule.split_once('=') else {
            return Err(format!("rule `{rule}` has no `=`"));
        };
        if label.trim().is_empty() {
            return Err(format!("rule `{rule}` has an empty label"));
        }
        if selector.trim().is_empty() {
            return Err(format!("rule `{rule}` has an empty selector"));
        }
        Ok(Self::new(label, selector))
    }
}

impl fmt::Display for ExtraRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.label, self.selector)
    }
}

/// Parse a pipe-separated rule list. Malformed rules are logged and skipped.
#[must_use]
pub fn parse_rules(rules: &str) -> Vec<ExtraRule> {
    rules
        .split('|')
        .map(str::trim)
        .filter(|rule| !rule.is_empty())
        .filter_map(|rule| match rule.parse::<ExtraRule>() {
            Ok(rule) => Some(rule),
            Err(reason) => {
                tracing::warn!(%reason, "skipping malformed extraction rule");
                None
            }
        })
        .collect()
}
