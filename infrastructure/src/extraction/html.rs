//! HTML to plain text

use gapscout_domain::core::string::collapse_whitespace;
use scraper::{ElementRef, Html, Node};

/// Elements removed together with everything nested inside them
pub const STRIPPED_TAGS: [&str; 6] = ["script", "style", "nav", "footer", "header", "aside"];

/// `<noscript>` is parsed as raw markup text when scripting is enabled,
/// so it is skipped as well.
const RAW_MARKUP_TAGS: [&str; 1] = ["noscript"];

/// Extract visible text from an HTML document
///
/// Walks the whole document (including `<head>`, so `<title>` is kept),
/// skips [`STRIPPED_TAGS`] subtrees, collapses whitespace inside each text
/// node and joins the non-empty pieces with a single space.
pub fn html_to_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut parts = Vec::new();
    collect_element_text(document.root_element(), &mut parts);
    parts.join(" ")
}

fn is_skipped(tag_name: &str) -> bool {
    STRIPPED_TAGS.contains(&tag_name) || RAW_MARKUP_TAGS.contains(&tag_name)
}

/// Recursively collect text from an element, skipping stripped subtrees
fn collect_element_text(element: ElementRef, parts: &mut Vec<String>) {
    if is_skipped(element.value().name()) {
        return;
    }

    for child in element.children() {
        match child.value() {
            Node::Text(text) => {
                let t = collapse_whitespace(text);
                if !t.is_empty() {
                    parts.push(t);
                }
            }
            Node::Element(_) => {
                if let Some(child_el) = ElementRef::wrap(child) {
                    collect_element_text(child_el, parts);
                }
            }
            _ => {}
        }
    }
}
