use std::fmt;

use html_escape::{encode_double_quoted_attribute, encode_text};

/// Raw title and description pulled out of a fetched resource, before
/// decoration and before the canonical link is attached
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedMetadata {
    pub title: Option<String>,
    pub description: Option<String>,
}

impl ExtractedMetadata {
    pub fn is_complete(&self) -> bool {
        self.title.is_some() && self.description.is_some()
    }
}

/// An HTML link embedded in an item description; both parts are escaped on render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    pub href: String,
    pub text: String,
}

impl Anchor {
    pub fn new(href: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            text: text.into(),
        }
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            r#"<a href="{}">{}</a>"#,
            encode_double_quoted_attribute(&self.href),
            encode_text(&self.text)
        )
    }
}
