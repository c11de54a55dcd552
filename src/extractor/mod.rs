//! Per-product field extraction.
//!
//! A product node yields one [`FieldMap`]. Fields come from two sources:
//!
//! - content fragments (direct children matching the content selector),
//!   labeled by the [`FieldClassifier`]
//! - explicit [`ExtraRule`]s that read an attribute or text from matching
//!   descendants
//!
//! Classified fields are inserted first, explicit fields second; within the
//! map the last write under a label wins.

mod field_map;
mod rules;

pub use field_map::{FieldMap, FieldText, RawField};
pub use rules::{parse_rules, ExtraRule};

use crate::classifier::FieldClassifier;
use crate::dom::{self, Document, Selection};
use crate::normalize::normalize_storage_text;

/// Builds a [`FieldMap`] for each product node of a listing page.
#[derive(Debug, Clone, Copy)]
pub struct ProductExtractor<'a> {
    classifier: &'a FieldClassifier,
    content_selector: &'a str,
    rules: &'a [ExtraRule],
}

impl<'a> ProductExtractor<'a> {
    #[must_use]
    pub fn new(
        classifier: &'a FieldClassifier,
        content_selector: &'a str,
        rules: &'a [ExtraRule],
    ) -> Self {
        Self {
            classifier,
            content_selector,
            rules,
        }
    }

    /// Field maps for every node matching `product_selector`, in document order.
    #[must_use]
    pub fn extract_page(&self, doc: &Document, product_selector: &str) -> Vec<FieldMap> {
        let products = dom::select_document(doc, product_selector);
        tracing::debug!(count = products.len(), "found product nodes");
        products.iter().map(|node| self.extract(node)).collect()
    }

    /// Field map for one product node.
    #[must_use]
    pub fn extract(&self, product: &Selection) -> FieldMap {
        let mut fields = FieldMap::new();
        self.classify_content(product, &mut fields);
        self.apply_rules(product, &mut fields);
        fields
    }

    fn classify_content(&self, product: &Selection, fields: &mut FieldMap) {
        for node in dom::children_matching(product, self.content_selector) {
            let text = dom::clean_text(&node);
            if text.is_empty() {
                continue;
            }

            let text = normalize_storage_text(&text);
            let Some(classification) = self.classifier.classify(&text) else {
                continue;
            };

            let field = RawField::classified(text, classification.label, classification.prediction);
            if let Some(previous) = fields.insert(field) {
                tracing::debug!(
                    label = %previous.matched_label,
                    replaced = ?previous.text.first(),
                    "later fragment replaced field"
                );
            }
        }
    }

    fn apply_rules(&self, product: &Selection, fields: &mut FieldMap) {
        for rule in self.rules {
            let values: Vec<String> = dom::select_all(product, &rule.selector)
                .iter()
                .filter_map(|node| match &rule.attribute {
                    Some(name) => dom::get_attribute(node, name),
                    None => Some(dom::clean_text(node)),
                })
                .collect();

            if let Some(previous) = fields.insert(RawField::selected(&rule.label, values)) {
                tracing::debug!(
                    label = %previous.matched_label,
                    "selector rule replaced classified field"
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::TrainingSet;

    fn classifier() -> FieldClassifier {
        let set: TrainingSet = [
            ("price", vec!["£699.99".to_string(), "$10".to_string(), "£5".to_string()]),
            ("storage", vec!["64 GB".to_string(), "128 GB".to_string(), "1 TB".to_string()]),
            ("title", vec!["Apple iPhone".to_string(), "Samsung Galaxy".to_string()]),
        ]
        .into_iter()
        .collect();
        FieldClassifier::train(&set).expect("non-empty training set")
    }

    const PRODUCT: &str = r#"
        <div class="product">
            <h3><span>Apple iPhone 11</span> <span>64GB</span></h3>
            <img src="../images/iphone-11.png">
            <div>£699.99</div>
            <div><span data-colour="Red"></span><span data-colour="Blue"></span></div>
        </div>
    "#;

    #[test]
    fn classifies_fragments_and_applies_rules() {
        let classifier = classifier();
        let rules = parse_rules("image=img[src]|color=span[data-colour]");
        let extractor = ProductExtractor::new(&classifier, "h3 span, div", &rules);

        let doc = dom::parse(PRODUCT);
        let maps = extractor.extract_page(&doc, ".product");
        assert_eq!(maps.len(), 1);

        let fields = &maps[0];
        assert_eq!(fields.text("title"), Some("Apple iPhone 11"));
        assert_eq!(fields.text("storage"), Some("64 GB"));
        assert_eq!(fields.text("price"), Some("£699.99"));
        assert_eq!(fields.text("image"), Some("../images/iphone-11.png"));

        let colors = fields.get("color").expect("color rule matched");
        assert_eq!(colors.text.values(), vec!["Red", "Blue"]);
        assert!(colors.prediction.is_empty());
        assert!(!fields.get("price").expect("price").prediction.is_empty());
    }

    #[test]
    fn explicit_rule_overrides_classified_label() {
        let classifier = classifier();
        let rules = parse_rules("title=h3 span");
        let extractor = ProductExtractor::new(&classifier, "h3 span", &rules);

        let doc = dom::parse(PRODUCT);
        let fields = extractor.extract(&doc.select(".product"));
        assert_eq!(
            fields.get("title").map(|f| f.text.values()),
            Some(vec!["Apple iPhone 11", "64GB"])
        );
    }

    #[test]
    fn later_fragment_with_the_same_label_wins() {
        let classifier = classifier();
        let extractor = ProductExtractor::new(&classifier, "div", &[]);

        let doc = dom::parse(
            r#"<div class="product"><div>£699.99</div><div>£5</div></div>"#,
        );
        let fields = extractor.extract(&doc.select(".product"));
        assert_eq!(fields.len(), 1);
        assert_eq!(fields.text("price"), Some("£5"));
    }

    #[test]
    fn unmatched_rule_stores_an_empty_sequence() {
        let classifier = classifier();
        let rules = parse_rules("color=span.swatch[data-colour]");
        let extractor = ProductExtractor::new(&classifier, "div", &rules);

        let doc = dom::parse(PRODUCT);
        let fields = extractor.extract(&doc.select(".product"));
        assert_eq!(fields.get("color").map(|f| f.text.values().len()), Some(0));
    }
}
