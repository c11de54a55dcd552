//! DOM Operations Adapter
//!
//! Thin layer over the `dom_query` crate exposing the handful of document
//! operations the extractor needs: selecting descendants, selecting direct
//! children by selector, reading text and reading attributes.

// Re-export core types for external use
pub use dom_query::{Document, Selection};

pub use tendril::StrTendril;

/// Parse an HTML string into a document.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

// === Querying ===

/// All descendants of `sel` matching a CSS selector, one `Selection` per node,
/// in document order.
#[must_use]
pub fn select_all<'a>(sel: &Selection<'a>, selector: &str) -> Vec<Selection<'a>> {
    sel.select(selector)
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .collect()
}

/// All elements of a document matching a CSS selector.
#[must_use]
pub fn select_document<'a>(doc: &'a Document, selector: &str) -> Vec<Selection<'a>> {
    doc.select(selector)
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .collect()
}

/// Elements matching a selector anchored at the direct children of `sel`.
///
/// The first compound of each comma-separated group must match a direct
/// child; the rest of the group is matched below that child. So `div` yields
/// child divs, while `div > h3 span` yields spans inside an `h3` child of a
/// child `div`. An empty selector matches every child element.
///
/// Results follow child order; within one child, group order.
#[must_use]
pub fn children_matching<'a>(sel: &Selection<'a>, selector: &str) -> Vec<Selection<'a>> {
    let groups: Vec<&str> = split_top_level(selector, ',')
        .into_iter()
        .map(str::trim)
        .filter(|g| !g.is_empty())
        .collect();

    let mut matched = Vec::new();
    for child in sel.children().nodes().iter().map(|node| Selection::from(*node)) {
        if groups.is_empty() {
            matched.push(child);
            continue;
        }
        for group in &groups {
            matched.extend(match_from_child(&child, group));
        }
    }
    matched
}

fn match_from_child<'a>(child: &Selection<'a>, group: &str) -> Vec<Selection<'a>> {
    let (head, rest) = split_head(group);
    if !child.is(head) {
        return Vec::new();
    }
    match rest {
        None => vec![child.clone()],
        Some((Combinator::Child, tail)) => children_matching(child, tail),
        Some((Combinator::Descendant, tail)) => select_all(child, tail),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Combinator {
    Child,
    Descendant,
}

/// Split off the first compound selector of a group.
///
/// `+` and `~` are not supported as anchors and fall back to descendant
/// matching of the remainder.
fn split_head(group: &str) -> (&str, Option<(Combinator, &str)>) {
    let mut depth = 0usize;
    for (i, c) in group.char_indices() {
        match c {
            '[' | '(' => depth += 1,
            ']' | ')' => depth = depth.saturating_sub(1),
            c if depth == 0 && (c.is_whitespace() || c == '>') => {
                let head = &group[..i];
                let rest = group[i..].trim_start();
                if let Some(tail) = rest.strip_prefix('>') {
                    return (head, Some((Combinator::Child, tail.trim())));
                }
                let tail = rest.trim_start_matches(['+', '~']).trim();
                if tail.is_empty() {
                    return (head, None);
                }
                return (head, Some((Combinator::Descendant, tail)));
            }
            _ => {}
        }
    }
    (group, None)
}

/// Split on `sep` outside brackets and parentheses.
fn split_top_level(s: &str, sep: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in s.char_indices() {
        match c {
            '[' | '(' => depth += 1,
            ']' | ')' => depth = depth.saturating_sub(1),
            c if c == sep && depth == 0 => {
                parts.push(&s[start..i]);
                start = i + c.len_utf8();
            }
            _ => {}
        }
    }
    parts.push(&s[start..]);
    parts
}

// === Text Content ===

/// Get all text content of node and descendants.
///
/// Returns `StrTendril` for zero-copy passing.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Text content with surrounding whitespace trimmed and inner runs collapsed.
#[must_use]
pub fn clean_text(sel: &Selection) -> String {
    text_content(sel).split_whitespace().collect::<Vec<_>>().join(" ")
}

// === Attribute Operations ===

/// Get any attribute value.
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}
