use std::path::Path;

use chrono::NaiveDate;
use rs_product_scraper::assembler::labels;
use rs_product_scraper::classifier::{AvailabilityClassifier, FieldClassifier};
use rs_product_scraper::normalize::{format_storage, StorageUnit};
use rs_product_scraper::{
    dom, parse_rules, Error, FieldMap, ProductAssembler, ProductExtractor, ScrapeConfig, Scraper,
};

const BASE_URL: &str = "https://www.magpiehq.com/developer-challenge/smartphones";

const LISTING: &str = r#"
<html><body>
<div id="products">
  <div class="product">
    <div class="card">
      <h3><span class="product-name">iPhone 12 Pro Max</span> <span class="product-capacity">128GB</span></h3>
      <img src="../images/iphone-12-pro.png">
      <div class="colours"><span data-colour="Sky Blue"></span><span data-colour="Black"></span></div>
      <div class="price">£1,099.99</div>
      <div class="stock">Availability: In Stock</div>
      <div class="shipping">Delivery by Saturday 2nd Jul 2022</div>
    </div>
  </div>
  <div class="product">
    <div class="card">
      <h3><span class="product-name">Samsung Galaxy S21</span> <span class="product-capacity">256GB</span></h3>
      <img src="../images/galaxy-s21.png">
      <div class="colours"><span data-colour="White"></span></div>
      <div class="price">£749.00</div>
      <div class="stock">Availability: Out of Stock</div>
    </div>
  </div>
  <div class="product">
    <div class="card">
      <h3><span class="product-capacity">64GB</span></h3>
      <div class="colours"><span data-colour="Red"></span></div>
      <div class="price">£99.00</div>
    </div>
  </div>
</div>
</body></html>
"#;

fn config() -> ScrapeConfig {
    ScrapeConfig {
        base_url: BASE_URL.to_string(),
        pages_selector: "#pages a".to_string(),
        product_selector: "#products .product".to_string(),
        content_selector: "div > h3 span, div > div".to_string(),
        extra_rules: parse_rules("image=img[src]|color=span[data-colour]"),
    }
}

fn scraper() -> Scraper {
    let training = Path::new(env!("CARGO_MANIFEST_DIR")).join("training");
    Scraper::from_training_dir(config(), &training).expect("shipped training loads")
}

fn availability() -> AvailabilityClassifier {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("training/validation/availability.json");
    AvailabilityClassifier::from_file(&path).expect("shipped validation loads")
}

#[test]
fn extracts_classified_and_selected_fields() {
    let training = Path::new(env!("CARGO_MANIFEST_DIR")).join("training/extraction");
    let classifier = FieldClassifier::from_dir(&training).expect("shipped training loads");
    let config = config();
    let extractor = ProductExtractor::new(&classifier, &config.content_selector, &config.extra_rules);

    let doc = dom::parse(LISTING);
    let maps = extractor.extract_page(&doc, &config.product_selector);
    assert_eq!(maps.len(), 3);

    let first = &maps[0];
    assert_eq!(first.text("title"), Some("iPhone 12 Pro Max"));
    assert_eq!(first.text("storage"), Some("128 GB"));
    assert_eq!(first.text("price"), Some("£1,099.99"));
    assert_eq!(first.text("availability"), Some("Availability: In Stock"));
    assert_eq!(first.text("delivery"), Some("Delivery by Saturday 2nd Jul 2022"));
    assert_eq!(first.text("image"), Some("../images/iphone-12-pro.png"));
    assert_eq!(
        first.get("color").map(|f| f.text.values()),
        Some(vec!["Sky Blue", "Black"])
    );
}

#[test]
fn listing_page_becomes_one_product_per_color() {
    let products = scraper().scrape_document(LISTING);

    // The third product has no title and is skipped
    assert_eq!(products.len(), 3);

    let sky_blue = &products[0];
    assert_eq!(sky_blue.title, "iPhone 12 Pro Max 128GB");
    assert_eq!(sky_blue.price, 1099.99);
    assert_eq!(
        sky_blue.image_url,
        "https://www.magpiehq.com/developer-challenge/images/iphone-12-pro.png"
    );
    assert_eq!(sky_blue.capacity_mb, 128_000.0);
    assert_eq!(sky_blue.availability_text, "In Stock");
    assert!(sky_blue.is_available);
    assert_eq!(sky_blue.shipping_text, "Delivery by Saturday 2nd Jul 2022");
    assert_eq!(sky_blue.shipping_date, "2022-07-02");
    assert_eq!(sky_blue.color, "sky blue");
    assert_eq!(products[1].color, "black");

    let galaxy = &products[2];
    assert_eq!(galaxy.title, "Samsung Galaxy S21 256GB");
    assert_eq!(galaxy.availability_text, "Out of Stock");
    assert!(!galaxy.is_available);
    assert_eq!(galaxy.shipping_text, "");
    assert_eq!(galaxy.shipping_date, "");
    assert_eq!(galaxy.color, "white");
}

fn phone_fields() -> FieldMap {
    let mut fields = FieldMap::new();
    fields.set(labels::TITLE, "Phone");
    fields.set(labels::PRICE, "$199.99");
    fields.set(labels::STORAGE, "128GB");
    fields.set(labels::COLOR, vec!["red".to_string(), "blue".to_string()]);
    fields
}

#[test]
fn variants_differ_only_in_color() {
    let availability = availability();
    let assembler = ProductAssembler::new(&availability, BASE_URL)
        .with_reference_date(NaiveDate::from_ymd_opt(2022, 7, 1).expect("valid date"));

    let products = assembler.assemble(&phone_fields()).expect("assembled");
    assert_eq!(products.len(), 2);
    assert_eq!(products[0].title, "Phone 128GB");
    assert_eq!(products[0].price, 199.99);
    assert_eq!(
        products[0].capacity_mb,
        format_storage("128GB", StorageUnit::Megabytes)
    );
    assert_eq!(products[0].color, "red");
    assert_eq!(products[1].color, "blue");

    let mut recolored = products[1].clone();
    recolored.color = products[0].color.clone();
    assert_eq!(recolored, products[0]);
}

#[test]
fn no_color_means_no_products() {
    let availability = availability();
    let assembler = ProductAssembler::new(&availability, BASE_URL);

    let mut fields = FieldMap::new();
    fields.set(labels::TITLE, "Phone");
    fields.set(labels::PRICE, "$199.99");
    assert!(assembler.assemble(&fields).expect("assembled").is_empty());
}

#[test]
fn missing_title_names_the_field() {
    let availability = availability();
    let assembler = ProductAssembler::new(&availability, BASE_URL);

    let mut fields = FieldMap::new();
    fields.set(labels::PRICE, "$199.99");
    fields.set(labels::STORAGE, "128GB");
    fields.set(labels::COLOR, vec!["red".to_string()]);

    match assembler.assemble(&fields) {
        Err(Error::MissingField { label }) => assert_eq!(label, "title"),
        other => panic!("expected missing title, got {other:?}"),
    }
}
