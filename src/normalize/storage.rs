//! Storage size text handling.
//!
//! Units are decimal (SI): 1 KB = 1000 B, not 1024.

use std::fmt;
use std::str::FromStr;

use crate::patterns::{STORAGE_AMOUNT, STORAGE_TEXT, WHITESPACE};

/// Byte units understood by [`format_storage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageUnit {
    Bytes,
    Kilobytes,
    Megabytes,
    Gigabytes,
}

impl StorageUnit {
    /// Size of one unit in bytes.
    #[must_use]
    pub const fn factor(self) -> f64 {
        match self {
            Self::Bytes => 1.0,
            Self::Kilobytes => 1e3,
            Self::Megabytes => 1e6,
            Self::Gigabytes => 1e9,
        }
    }

    /// Unit for the leading letter of a suffix (`b`, `k`, `m`, `g`).
    #[must_use]
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'B' => Some(Self::Bytes),
            'K' => Some(Self::Kilobytes),
            'M' => Some(Self::Megabytes),
            'G' => Some(Self::Gigabytes),
            _ => None,
        }
    }
}

impl FromStr for StorageUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "B" => Ok(Self::Bytes),
            "KB" => Ok(Self::Kilobytes),
            "MB" => Ok(Self::Megabytes),
            "GB" => Ok(Self::Gigabytes),
            other => Err(format!("unknown storage unit `{other}`")),
        }
    }
}

impl fmt::Display for StorageUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Bytes => "B",
            Self::Kilobytes => "KB",
            Self::Megabytes => "MB",
            Self::Gigabytes => "GB",
        })
    }
}

/// Put a space between a size and its glued-on unit: `10GB` → `10 GB`.
///
/// Anything that is not exactly `<digits><unit>` comes back unchanged.
#[must_use]
pub fn normalize_storage_text(text: &str) -> String {
    STORAGE_TEXT.replace(text, "$1 $2").into_owned()
}

/// Display form of storage text: all whitespace removed (`128 GB` → `128GB`).
#[must_use]
pub fn format_storage_display(text: &str) -> String {
    WHITESPACE.replace_all(text, "").into_owned()
}

/// Convert the first `<number><unit-letter>` amount in `text` to `unit`.
///
/// Returns 0 when no amount is found.
#[must_use]
pub fn format_storage(text: &str, unit: StorageUnit) -> f64 {
    let Some(caps) = STORAGE_AMOUNT.captures(text) else {
        return 0.0;
    };

    let value = caps
        .get(1)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(0.0);
    let source = caps
        .get(2)
        .and_then(|m| m.as_str().chars().next())
        .and_then(StorageUnit::from_letter);

    match source {
        Some(source) => (value * source.factor()) / unit.factor(),
        None => 0.0,
    }
}

/// String-unit variant of [`format_storage`]: an empty unit yields the
/// display string, an unknown unit yields `0`.
#[must_use]
pub fn format_storage_as(text: &str, unit: &str) -> StorageValue {
    if unit.trim().is_empty() {
        return StorageValue::Display(format_storage_display(text));
    }
    match unit.parse::<StorageUnit>() {
        Ok(unit) => StorageValue::Amount(format_storage(text, unit)),
        Err(_) => StorageValue::Amount(0.0),
    }
}

/// Result of [`format_storage_as`].
#[derive(Debug, Clone, PartialEq)]
pub enum StorageValue {
    Display(String),
    Amount(f64),
}
