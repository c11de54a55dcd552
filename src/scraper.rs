//! The scrape driver: fetch, extract, assemble, dedupe, persist.
//!
//! Retrieval is injected through [`Fetch`], so everything here runs against
//! canned pages in tests.

use std::path::Path;

use url::Url;

use crate::assembler::ProductAssembler;
use crate::classifier::{AvailabilityClassifier, FieldClassifier};
use crate::config::ScrapeConfig;
use crate::dedup::dedupe;
use crate::dom;
use crate::error::{Error, Result};
use crate::extractor::ProductExtractor;
use crate::pages::page_ids;
use crate::product::Product;
use crate::url_utils::{page_url, parse_base_url};

/// Extraction training files, relative to the training root.
pub const EXTRACTION_DIR: &str = "extraction";
/// Availability training file, relative to the training root.
pub const VALIDATION_FILE: &str = "validation/availability.json";

/// Page retrieval.
pub trait Fetch {
    /// Fetch a page as UTF-8 HTML.
    fn fetch(&self, url: &Url) -> Result<String>;
}

/// Scrapes every page of one listing with trained classifiers.
#[derive(Debug, Clone)]
pub struct Scraper {
    config: ScrapeConfig,
    fields: FieldClassifier,
    availability: AvailabilityClassifier,
}

impl Scraper {
    #[must_use]
    pub fn new(
        config: ScrapeConfig,
        fields: FieldClassifier,
        availability: AvailabilityClassifier,
    ) -> Self {
        Self {
            config,
            fields,
            availability,
        }
    }

    /// Train both classifiers from a training root laid out as
    /// `extraction/*.json` and `validation/availability.json`.
    pub fn from_training_dir(config: ScrapeConfig, training: &Path) -> Result<Self> {
        let fields = FieldClassifier::from_dir(&training.join(EXTRACTION_DIR))?;
        let availability = AvailabilityClassifier::from_file(&training.join(VALIDATION_FILE))?;
        Ok(Self::new(config, fields, availability))
    }

    #[must_use]
    pub fn config(&self) -> &ScrapeConfig {
        &self.config
    }

    /// Products on one listing page, before deduplication.
    ///
    /// Product nodes missing a title or price are logged and skipped.
    #[must_use]
    pub fn scrape_document(&self, html: &str) -> Vec<Product> {
        let doc = dom::parse(html);
        let extractor = ProductExtractor::new(
            &self.fields,
            &self.config.content_selector,
            &self.config.extra_rules,
        );
        let assembler = ProductAssembler::new(&self.availability, &self.config.base_url);

        let mut products = Vec::new();
        for (index, fields) in extractor
            .extract_page(&doc, &self.config.product_selector)
            .iter()
            .enumerate()
        {
            match assembler.assemble(fields) {
                Ok(variants) => products.extend(variants),
                Err(Error::MissingField { label }) => {
                    tracing::warn!(product = index, %label, "skipping product without required field");
                }
                Err(err) => {
                    tracing::warn!(product = index, error = %err, "skipping product");
                }
            }
        }
        products
    }

    /// Scrape every page linked from the base page.
    ///
    /// Pages are fetched in link order and their products concatenated
    /// before deduplication.
    ///
    /// # Errors
    /// [`Error::Configuration`] for an unusable base URL, or the first fetch
    /// error.
    pub fn run(&self, fetcher: &dyn Fetch) -> Result<Vec<Product>> {
        let base = parse_base_url(&self.config.base_url).ok_or_else(|| {
            Error::Configuration(format!("invalid base url `{}`", self.config.base_url))
        })?;

        let landing = fetcher.fetch(&base)?;
        let pages = page_ids(&dom::parse(&landing), &self.config.pages_selector, &base);
        tracing::info!(pages = pages.len(), url = %base, "discovered listing pages");

        let mut products = Vec::new();
        for page in &pages {
            let url = page_url(&base, page);
            let html = fetcher.fetch(&url)?;
            let found = self.scrape_document(&html);
            tracing::debug!(page = %page, products = found.len(), "scraped page");
            products.extend(found);
        }

        let scraped = products.len();
        let products = dedupe(products);
        tracing::info!(scraped, unique = products.len(), "scrape finished");
        Ok(products)
    }
}

/// Write products as a pretty-printed JSON array.
pub fn persist_products(products: &[Product], path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(products).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })?;
    std::fs::write(path, json).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(count = products.len(), path = %path.display(), "saved products");
    Ok(())
}
