use std::path::Path;

use rs_product_scraper::encoding::transcode_to_utf8;
use rs_product_scraper::{parse_rules, ScrapeConfig, Scraper};

fn scraper() -> Scraper {
    let config = ScrapeConfig {
        base_url: "https://example.com/phones".to_string(),
        product_selector: ".product".to_string(),
        content_selector: "div > h3 span, div > div".to_string(),
        extra_rules: parse_rules("color=span[data-colour]"),
        ..ScrapeConfig::default()
    };
    let training = Path::new(env!("CARGO_MANIFEST_DIR")).join("training");
    Scraper::from_training_dir(config, &training).expect("shipped training loads")
}

/// A latin-1 page declares its charset in a meta tag; £ is 0xA3.
#[test]
fn latin1_listing_prices_survive_decoding() {
    let body: &[u8] = b"<html><head><meta charset=\"ISO-8859-1\"></head><body>\
        <div class=\"product\"><div>\
        <h3><span>Nokia 3310</span> <span>16GB</span></h3>\
        <div><span data-colour=\"Blue\"></span></div>\
        <div>\xA349.99</div>\
        </div></div></body></html>";

    let html = transcode_to_utf8(body, None);
    assert!(html.contains("£49.99"));

    let products = scraper().scrape_document(&html);
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].title, "Nokia 3310 16GB");
    assert_eq!(products[0].price, 49.99);
}

/// The response header takes precedence over the page's own declaration.
#[test]
fn header_charset_overrides_meta() {
    let body: &[u8] = b"<meta charset=\"utf-8\"><p>\x93In Stock\x94</p>";
    let html = transcode_to_utf8(body, Some("text/html; charset=windows-1252"));
    assert!(html.contains("\u{201C}In Stock\u{201D}"));
}
