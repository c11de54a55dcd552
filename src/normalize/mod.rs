//! Field normalizers.
//!
//! Every function here is total: malformed input produces a neutral value
//! (`0`, an empty string) instead of an error, since the listing markup is
//! outside our control.

mod date;
mod storage;

pub use date::{format_delivery_date, format_delivery_date_on, parse_date_phrase, DATE_FORMAT};
pub use storage::{
    format_storage, format_storage_as, format_storage_display, normalize_storage_text,
    StorageUnit, StorageValue,
};

pub use crate::url_utils::format_image_url;

use crate::patterns::LABEL_PREFIX;

/// Parse a displayed price, ignoring currency symbols and separators.
///
/// Keeps the digits and the first decimal point; anything unparsable is `0`.
#[must_use]
pub fn format_price(text: &str) -> f64 {
    let mut seen_point = false;
    let numeric: String = text
        .chars()
        .filter(|c| match *c {
            '0'..='9' => true,
            '.' if !seen_point => {
                seen_point = true;
                true
            }
            _ => false,
        })
        .collect();

    numeric.parse::<f64>().unwrap_or(0.0)
}

/// Canonical color name: lower-cased.
#[must_use]
pub fn format_color(text: &str) -> String {
    text.to_lowercase()
}

/// Drop a leading `Label:` prefix, keeping the text after the last colon.
#[must_use]
pub fn format_availability(text: &str) -> String {
    LABEL_PREFIX.replace(text, "$1").trim().to_string()
}

/// Shipping text as shown; absent text is empty.
#[must_use]
pub fn format_shipping_text(text: Option<&str>) -> String {
    text.unwrap_or_default().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_strips_currency() {
        assert_eq!(format_price("$10"), 10.0);
        assert_eq!(format_price("$10.99"), 10.99);
        assert_eq!(format_price("£1,099.00"), 1099.0);
        assert_eq!(format_price(" 49.5 EUR"), 49.5);
    }

    #[test]
    fn price_keeps_only_first_decimal_point() {
        assert_eq!(format_price("1.234.5"), 1.2345);
    }

    #[test]
    fn malformed_price_is_zero() {
        assert_eq!(format_price(""), 0.0);
        assert_eq!(format_price("free"), 0.0);
        assert_eq!(format_price("."), 0.0);
    }

    #[test]
    fn color_is_lowercased() {
        assert_eq!(format_color("Red"), "red");
        assert_eq!(format_color("Sky Blue"), "sky blue");
    }

    #[test]
    fn availability_prefix_removed() {
        assert_eq!(format_availability("Availability: In Stock"), "In Stock");
        assert_eq!(format_availability("Availability: Out of Stock"), "Out of Stock");
        assert_eq!(format_availability("Status: Stock: Low"), "Low");
        assert_eq!(format_availability("  In Stock "), "In Stock");
    }

    #[test]
    fn shipping_text_passes_through() {
        let text = "Order within 6 hours and have it Tuesday 5th Jul 2022";
        assert_eq!(format_shipping_text(Some(text)), text);
        assert_eq!(format_shipping_text(None), "");
    }
}
