//! # rs-product-scraper
//!
//! Structured product records from paginated e-commerce listings whose markup
//! does not label its fields.
//!
//! Each product node is split into text fragments that a Naive Bayes
//! classifier assigns to fields (title, price, storage, availability,
//! delivery). Attribute fields such as image and color come from explicit
//! selector rules. Every field is normalized, color variants become separate
//! records, and repeats across pages are dropped.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use rs_product_scraper::{persist_products, ScrapeConfig, Scraper};
//!
//! let config = ScrapeConfig::from_path(Path::new(".environment"))?;
//! let scraper = Scraper::from_training_dir(config, Path::new("training"))?;
//!
//! let html = std::fs::read_to_string("page.html").unwrap_or_default();
//! let products = scraper.scrape_document(&html);
//! persist_products(&products, Path::new("output.json"))?;
//! # Ok::<(), rs_product_scraper::Error>(())
//! ```
//!
//! ## Normalizers
//!
//! ```rust
//! use rs_product_scraper::normalize::{format_price, format_storage, StorageUnit};
//!
//! assert_eq!(format_price("£1,099.99"), 1099.99);
//! assert_eq!(format_storage("128GB", StorageUnit::Megabytes), 128_000.0);
//! ```

mod error;
mod patterns;

/// DOM operations over `dom_query`.
pub mod dom;

/// Tokenizer and keyphrase extraction.
pub mod text;

/// Naive Bayes field and availability classifiers.
pub mod classifier;

/// Field normalizers.
pub mod normalize;

/// Per-product field extraction.
pub mod extractor;

/// Field map to product records.
pub mod assembler;

/// Output record.
pub mod product;

/// Duplicate removal.
pub mod dedup;

/// Pagination link discovery.
pub mod pages;

/// `.environment` configuration.
pub mod config;

/// Fetch, scrape and persist driver.
pub mod scraper;

/// URL resolution and page URLs.
pub mod url_utils;

/// Character encoding detection and transcoding.
pub mod encoding;

// Public API - re-exports
pub use assembler::ProductAssembler;
pub use classifier::{AvailabilityClassifier, FieldClassifier, TrainingSet};
pub use config::ScrapeConfig;
pub use dedup::dedupe;
pub use error::{Error, Result};
pub use extractor::{parse_rules, ExtraRule, FieldMap, ProductExtractor};
pub use product::Product;
pub use scraper::{persist_products, Fetch, Scraper};
