//! Turns a [`FieldMap`] into finished [`Product`] records.
//!
//! Every normalizer runs here. A map with N colors becomes N products that
//! differ only in `color`; a map without a `color` field becomes none.

use chrono::{Local, NaiveDate};

use crate::classifier::AvailabilityClassifier;
use crate::error::{Error, Result};
use crate::extractor::FieldMap;
use crate::normalize::{
    format_availability, format_color, format_delivery_date_on, format_image_url, format_price,
    format_shipping_text, format_storage, format_storage_display, StorageUnit,
};
use crate::product::Product;

/// Field labels read by the assembler.
pub mod labels {
    pub const TITLE: &str = "title";
    pub const PRICE: &str = "price";
    pub const STORAGE: &str = "storage";
    pub const IMAGE: &str = "image";
    pub const AVAILABILITY: &str = "availability";
    pub const DELIVERY: &str = "delivery";
    pub const COLOR: &str = "color";
}

/// Builds products from field maps.
#[derive(Debug, Clone)]
pub struct ProductAssembler<'a> {
    availability: &'a AvailabilityClassifier,
    base_url: &'a str,
    today: Option<NaiveDate>,
}

impl<'a> ProductAssembler<'a> {
    #[must_use]
    pub fn new(availability: &'a AvailabilityClassifier, base_url: &'a str) -> Self {
        Self {
            availability,
            base_url,
            today: None,
        }
    }

    /// Resolve relative delivery phrases against `today` instead of the clock.
    #[must_use]
    pub fn with_reference_date(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    /// One product per color variant.
    ///
    /// # Errors
    /// [`Error::MissingField`] when `title` or `price` is absent or empty.
    pub fn assemble(&self, fields: &FieldMap) -> Result<Vec<Product>> {
        let name = required(fields, labels::TITLE)?;
        let price = format_price(required(fields, labels::PRICE)?);

        let title = match fields.text(labels::STORAGE) {
            Some(storage) if !storage.trim().is_empty() => {
                format!("{name} {}", format_storage_display(storage))
            }
            _ => name.to_string(),
        };
        let capacity_mb = fields
            .text(labels::STORAGE)
            .map_or(0.0, |storage| format_storage(storage, StorageUnit::Megabytes));

        let image_url = fields
            .text(labels::IMAGE)
            .map(|image| format_image_url(image, self.base_url))
            .unwrap_or_default();

        let availability = fields.text(labels::AVAILABILITY).unwrap_or_default();
        let availability_text = format_availability(availability);
        let is_available = self.availability.is_available(availability);

        let delivery = fields.text(labels::DELIVERY);
        let shipping_text = format_shipping_text(delivery);
        let today = self.today.unwrap_or_else(|| Local::now().date_naive());
        let shipping_date = format_delivery_date_on(delivery, today);

        let Some(colors) = fields.get(labels::COLOR) else {
            tracing::debug!(%title, "product has no color variants");
            return Ok(Vec::new());
        };

        Ok(colors
            .text
            .values()
            .into_iter()
            .map(|color| Product {
                title: title.clone(),
                price,
                image_url: image_url.clone(),
                capacity_mb,
                availability_text: availability_text.clone(),
                is_available,
                shipping_text: shipping_text.clone(),
                shipping_date: shipping_date.clone(),
                color: format_color(color),
            })
            .collect())
    }
}

fn required<'f>(fields: &'f FieldMap, label: &str) -> Result<&'f str> {
    fields
        .text(label)
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .ok_or_else(|| Error::missing_field(label))
}
