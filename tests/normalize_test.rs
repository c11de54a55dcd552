use chrono::NaiveDate;
use rs_product_scraper::normalize::{
    format_availability, format_color, format_delivery_date, format_delivery_date_on,
    format_image_url, format_price, format_storage, format_storage_as, normalize_storage_text,
    StorageUnit, StorageValue,
};

fn friday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2022, 7, 1).expect("valid date")
}

#[test]
fn storage_text_gets_a_space_once() {
    assert_eq!(normalize_storage_text("10GB"), "10 GB");
    assert_eq!(normalize_storage_text("10 GB"), "10 GB");
    assert_eq!(
        normalize_storage_text(&normalize_storage_text("256MB")),
        "256 MB"
    );
    assert_eq!(normalize_storage_text("Only 10GB"), "Only 10GB");
}

#[test]
fn storage_converts_with_decimal_multipliers() {
    assert_eq!(format_storage("10GB", StorageUnit::Kilobytes), 10_000_000.0);
    assert_eq!(format_storage("10GB", StorageUnit::Megabytes), 10_000.0);
    assert_eq!(format_storage("10GB", StorageUnit::Gigabytes), 10.0);
    assert_eq!(format_storage("512 MB", StorageUnit::Gigabytes), 0.512);
    assert_eq!(format_storage("no size", StorageUnit::Megabytes), 0.0);
}

#[test]
fn storage_with_string_units() {
    assert_eq!(
        format_storage_as("128 GB", ""),
        StorageValue::Display("128GB".to_string())
    );
    assert_eq!(format_storage_as("128 GB", "MB"), StorageValue::Amount(128_000.0));
    assert_eq!(format_storage_as("128 GB", "PB"), StorageValue::Amount(0.0));
}

#[test]
fn price_color_and_availability() {
    assert_eq!(format_price("$10"), 10.0);
    assert_eq!(format_price("$10.99"), 10.99);
    assert_eq!(format_color("Red"), "red");
    assert_eq!(format_availability("Availability: In Stock"), "In Stock");
    assert_eq!(format_availability("Availability: Out of Stock"), "Out of Stock");
}

#[test]
fn image_url_resolves_against_listing_directory() {
    assert_eq!(
        format_image_url("../images/lg-k42.png", "https://example.com/a/b"),
        "https://example.com/a/images/lg-k42.png"
    );
}

#[test]
fn delivery_date_from_ranked_keyphrases() {
    assert_eq!(
        format_delivery_date(Some("Order within 6 hours and have it Tuesday 5th Jul 2022")),
        "2022-07-05"
    );
    assert_eq!(format_delivery_date(Some("Delivers 2022-07-03")), "2022-07-03");
    assert_eq!(format_delivery_date(Some("Delivery by Saturday 2nd Jul 2022")), "2022-07-02");
    assert_eq!(format_delivery_date(None), "");
    assert_eq!(format_delivery_date(Some("   ")), "");
    assert_eq!(format_delivery_date(Some("Free Delivery")), "");
}

#[test]
fn delivery_date_relative_words_use_reference_date() {
    assert_eq!(
        format_delivery_date_on(Some("Free delivery tomorrow"), friday()),
        "2022-07-02"
    );
    assert_eq!(
        format_delivery_date_on(Some("Arrives Tuesday"), friday()),
        "2022-07-05"
    );
    assert_eq!(
        format_delivery_date_on(Some("Delivery from 9 Jul"), friday()),
        "2022-07-09"
    );
}
