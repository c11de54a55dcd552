//! URL Utility Functions
//!
//! Resolution of relative image URLs against the listing base URL and the
//! query handling used for pagination.

use url::Url;

/// Scheme assumed when a base URL has none.
pub const DEFAULT_SCHEME: &str = "https";

/// Parse a base URL, assuming `https://` when the scheme is missing.
///
/// # Returns
/// * `Some(Url)` if the base has (or can be given) a scheme and host
#[must_use]
pub fn parse_base_url(base: &str) -> Option<Url> {
    let base = base.trim();
    if base.is_empty() {
        return None;
    }

    let parsed = match Url::parse(base) {
        Ok(url) => url,
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            let without_slashes = base.trim_start_matches('/');
            Url::parse(&format!("{DEFAULT_SCHEME}://{without_slashes}")).ok()?
        }
        Err(_) => return None,
    };

    parsed.host().is_some().then_some(parsed)
}

/// Resolve an image URL found in a product node against the listing URL.
///
/// The base is treated as a directory (`base + "/"`), so
/// `../images/a.png` against `https://example.com/a/b` gives
/// `https://example.com/a/images/a.png`. Resolution follows RFC 3986; a base
/// without a scheme gets `https`. Unresolvable input comes back trimmed.
///
/// # Examples
/// ```
/// use rs_product_scraper::url_utils::format_image_url;
///
/// assert_eq!(
///     format_image_url("../images/lg-k42.png", "https://example.com/a/b"),
///     "https://example.com/a/images/lg-k42.png"
/// );
/// ```
#[must_use]
pub fn format_image_url(relative: &str, base: &str) -> String {
    let relative = relative.trim();

    let directory = format!("{}/", base.trim().trim_end_matches('/'));
    let Some(base_url) = parse_base_url(&directory) else {
        return relative.to_string();
    };

    match base_url.join(relative) {
        Ok(resolved) => resolved.to_string(),
        Err(_) => relative.to_string(),
    }
}

/// URL of one listing page: the base URL with `page=<id>` in its query.
#[must_use]
pub fn page_url(base: &Url, page_id: &str) -> Url {
    let mut url = base.clone();
    url.query_pairs_mut().append_pair("page", page_id);
    url
}

/// The `page` query parameter of a pagination link.
///
/// Relative links are resolved against `base` first.
#[must_use]
pub fn page_id_from_href(href: &str, base: &Url) -> Option<String> {
    let href = href.trim();
    if href.is_empty() {
        return None;
    }

    let url = base.join(href).ok()?;
    url.query_pairs()
        .find(|(key, _)| key == "page")
        .map(|(_, value)| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
