//! Pagination link discovery.

use url::Url;

use crate::dom::{self, Document};
use crate::url_utils::page_id_from_href;

/// Page identifiers from the pagination links of a listing document.
///
/// Each node matching `selector` contributes the `page` query parameter of
/// its `href`, resolved against `base`. Links without one are skipped; order
/// and repeats are kept as found.
#[must_use]
pub fn page_ids(doc: &Document, selector: &str, base: &Url) -> Vec<String> {
    let ids: Vec<String> = dom::select_document(doc, selector)
        .iter()
        .filter_map(|link| dom::get_attribute(link, "href"))
        .filter_map(|href| page_id_from_href(&href, base))
        .collect();
    tracing::debug!(count = ids.len(), selector, "found pagination links");
    ids
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_page_parameter_in_link_order() {
        let doc = dom::parse(
            r##"<div id="pages">
                <a href="?page=1">1</a>
                <a href="/smartphones?page=2">2</a>
                <a href="#top">top</a>
                <a>no href</a>
                <a href="https://example.com/smartphones?page=3&sort=price">3</a>
            </div>"##,
        );
        let base = Url::parse("https://example.com/smartphones").expect("valid url");
        assert_eq!(page_ids(&doc, "#pages a", &base), vec!["1", "2", "3"]);
    }

    #[test]
    fn no_links_means_no_pages() {
        let doc = dom::parse("<p>single page</p>");
        let base = Url::parse("https://example.com/").expect("valid url");
        assert!(page_ids(&doc, "#pages a", &base).is_empty());
    }
}
