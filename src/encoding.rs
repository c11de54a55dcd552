//! Decoding fetched listing pages to UTF-8.
//!
//! The charset comes from the HTTP `Content-Type` header when it names one,
//! otherwise from a `<meta>` declaration near the top of the page, otherwise
//! UTF-8.

use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;

/// `charset=` parameter, as found in a header or in either `<meta>` form.
#[allow(clippy::expect_used)]
static CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)charset\s*=\s*["']?([\w.:-]+)"#).expect("CHARSET regex")
});

/// Only the head of a page is searched for a `<meta>` charset.
const SNIFF_LEN: usize = 1024;

/// Encoding named by a `charset=` parameter anywhere in `text`.
fn charset_in(text: &str) -> Option<&'static Encoding> {
    let label = CHARSET.captures(text)?.get(1)?.as_str();
    Encoding::for_label(label.as_bytes())
}

/// Pick the encoding for a page body.
#[must_use]
pub fn detect_encoding(body: &[u8], content_type: Option<&str>) -> &'static Encoding {
    if let Some(encoding) = content_type.and_then(charset_in) {
        return encoding;
    }

    let head = String::from_utf8_lossy(&body[..body.len().min(SNIFF_LEN)]);
    head.match_indices("<meta")
        .chain(head.match_indices("<META"))
        .find_map(|(start, _)| {
            let tag = &head[start..];
            let end = tag.find('>').unwrap_or(tag.len());
            charset_in(&tag[..end])
        })
        .unwrap_or(UTF_8)
}

/// Decode a page body to UTF-8. Undecodable bytes become U+FFFD.
#[must_use]
pub fn transcode_to_utf8(body: &[u8], content_type: Option<&str>) -> String {
    let encoding = detect_encoding(body, content_type);
    let (decoded, used, had_errors) = encoding.decode(body);
    if had_errors {
        tracing::debug!(encoding = used.name(), "page contained undecodable bytes");
    }
    decoded.into_owned()
}
