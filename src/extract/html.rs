//! Title and description discovery in HTML documents
//!
//! The document is walked depth first, in document order, with an explicit
//! stack. The first `<title>` text and the first qualifying description
//! `<meta>` win. The walk stops as soon as both have been found.

use std::io::Read;

use scraper::node::Element;
use scraper::Html;
use tracing::debug;

use crate::domain::ExtractedMetadata;
use crate::errors::{LinkfeedError, LinkfeedResult};

/// Elements nested deeper than this are not inspected
pub const MAX_DEPTH: usize = 256;

/// Bytes of a document body read before the rest is ignored
pub const MAX_BODY_BYTES: u64 = 8 * 1024 * 1024;

const DESCRIPTION_KEYS: &[&str] = &["name", "property"];
const DESCRIPTION_NAMES: &[&str] = &["description", "og:description"];

/// Read a document body and extract its metadata
pub fn html_metadata(body: &mut dyn Read) -> LinkfeedResult<ExtractedMetadata> {
    let bytes = read_capped(body, MAX_BODY_BYTES)?;
    let html = String::from_utf8_lossy(&bytes);
    Ok(parse_metadata(&html))
}

fn read_capped(body: &mut dyn Read, limit: u64) -> LinkfeedResult<Vec<u8>> {
    let mut bytes = Vec::new();
    Read::take(body, limit)
        .read_to_end(&mut bytes)
        .map_err(|e| LinkfeedError::Parse(format!("failed to read document: {}", e)))?;

    if bytes.len() as u64 == limit {
        debug!("Document truncated at {} bytes", limit);
    }
    Ok(bytes)
}

pub fn parse_metadata(html: &str) -> ExtractedMetadata {
    let document = Html::parse_document(html);
    traverse(&document)
}

/// Pre-order walk collecting the title and description slots
pub fn traverse(document: &Html) -> ExtractedMetadata {
    let mut meta = ExtractedMetadata::default();
    let mut stack = vec![(document.tree.root(), 0usize)];

    while let Some((node, depth)) = stack.pop() {
        if let Some(element) = node.value().as_element() {
            match element.name() {
                "title" if meta.title.is_none() => {
                    meta.title = node
                        .first_child()
                        .and_then(|child| child.value().as_text())
                        .map(|text| text.trim().to_string())
                        .filter(|text| !text.is_empty());
                }
                "meta" if meta.description.is_none() => {
                    meta.description = meta_description(element);
                }
                _ => {}
            }
        }

        if meta.is_complete() {
            break;
        }

        if depth >= MAX_DEPTH {
            debug!("Not descending below depth {}", depth);
            continue;
        }

        // Reversed so the first child is popped first
        for child in node.children().rev() {
            stack.push((child, depth + 1));
        }
    }

    meta
}

fn meta_description(element: &Element) -> Option<String> {
    let describes = element.attrs().any(|(key, value)| {
        DESCRIPTION_KEYS.contains(&key) && DESCRIPTION_NAMES.contains(&value)
    });
    if !describes {
        return None;
    }

    element
        .attr("content")
        .map(str::trim)
        .filter(|content| !content.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_and_description() {
        let meta = parse_metadata(
            r#"<html><head>
                <title>Announcing Rust 1.75.0</title>
                <meta name="description" content="async fn in traits">
            </head><body></body></html>"#,
        );

        assert_eq!(meta.title.as_deref(), Some("Announcing Rust 1.75.0"));
        assert_eq!(meta.description.as_deref(), Some("async fn in traits"));
    }

    #[test]
    fn test_og_description() {
        let meta = parse_metadata(
            r#"<html><head><meta property="og:description" content="From Open Graph"></head></html>"#,
        );
        assert_eq!(meta.description.as_deref(), Some("From Open Graph"));
    }

    #[test]
    fn test_first_qualifying_meta_wins_regardless_of_kind() {
        let og_first = parse_metadata(
            r#"<html><head>
                <meta property="og:description" content="og">
                <meta name="description" content="plain">
            </head></html>"#,
        );
        assert_eq!(og_first.description.as_deref(), Some("og"));

        let name_first = parse_metadata(
            r#"<html><head>
                <meta name="description" content="plain">
                <meta property="og:description" content="og">
            </head></html>"#,
        );
        assert_eq!(name_first.description.as_deref(), Some("plain"));
    }

    #[test]
    fn test_first_title_wins() {
        let meta = parse_metadata(
            r#"<html><head><title>First</title></head>
               <body><svg><title>Second</title></svg></body></html>"#,
        );
        assert_eq!(meta.title.as_deref(), Some("First"));
    }

    #[test]
    fn test_meta_without_content_skipped() {
        let meta = parse_metadata(
            r#"<html><head>
                <meta name="description">
                <meta name="description" content="">
                <meta name="description" content="real one">
            </head></html>"#,
        );
        assert_eq!(meta.description.as_deref(), Some("real one"));
    }

    #[test]
    fn test_unrelated_meta_ignored() {
        let meta = parse_metadata(
            r#"<html><head>
                <meta name="viewport" content="width=device-width">
                <meta property="og:title" content="Not a description">
            </head></html>"#,
        );
        assert!(meta.description.is_none());
    }

    #[test]
    fn test_later_sibling_still_found() {
        let meta = parse_metadata(
            r#"<html><head></head><body>
                <div><p>nothing here</p><span>still nothing</span></div>
                <section>
                    <title>Late title</title>
                    <meta name="description" content="Late description">
                </section>
            </body></html>"#,
        );

        assert_eq!(meta.title.as_deref(), Some("Late title"));
        assert_eq!(meta.description.as_deref(), Some("Late description"));
    }

    #[test]
    fn test_walk_stops_once_both_found() {
        let meta = parse_metadata(
            r#"<html><head>
                <title>Early</title>
                <meta name="description" content="early">
            </head><body>
                <title>Too late</title>
                <meta name="description" content="too late">
            </body></html>"#,
        );

        assert_eq!(meta.title.as_deref(), Some("Early"));
        assert_eq!(meta.description.as_deref(), Some("early"));
    }

    #[test]
    fn test_missing_everything() {
        let meta = parse_metadata("<html><body><p>Just text</p></body></html>");
        assert_eq!(meta, ExtractedMetadata::default());
    }

    #[test]
    fn test_empty_title_does_not_fill_slot() {
        let meta = parse_metadata(
            r#"<html><head><title>   </title></head><body><svg><title>Icon</title></svg></body></html>"#,
        );
        assert_eq!(meta.title.as_deref(), Some("Icon"));
    }

    #[test]
    fn test_deeply_nested_document_terminates() {
        let depth = MAX_DEPTH * 2;
        let html = format!(
            "<html><head><title>Deep</title></head><body>{}{}</body></html>",
            "<div>".repeat(depth),
            "</div>".repeat(depth)
        );

        let meta = parse_metadata(&html);
        assert_eq!(meta.title.as_deref(), Some("Deep"));
        assert!(meta.description.is_none());
    }

    #[test]
    fn test_body_read_is_capped() {
        let mut endless = std::io::repeat(b'x');
        let bytes = read_capped(&mut endless, 64).unwrap();
        assert_eq!(bytes.len(), 64);
    }

    #[test]
    fn test_title_before_cap_survives_truncation() {
        let mut body = "<title>Kept</title>".as_bytes().chain(std::io::repeat(b' '));
        let bytes = read_capped(&mut body, 1024).unwrap();
        let meta = parse_metadata(&String::from_utf8_lossy(&bytes));
        assert_eq!(meta.title.as_deref(), Some("Kept"));
    }

    #[test]
    fn test_read_from_body() {
        let mut body: &[u8] = b"<title>From bytes</title>";
        let meta = html_metadata(&mut body).unwrap();
        assert_eq!(meta.title.as_deref(), Some("From bytes"));
    }
}
