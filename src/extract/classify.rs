use crate::errors::{LinkfeedError, LinkfeedResult};

/// Content kinds the extractor knows how to handle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Html,
    Pdf,
}

impl ContentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Html => "html",
            ContentKind::Pdf => "pdf",
        }
    }
}

impl std::fmt::Display for ContentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classify a declared `Content-Type` header value
///
/// Matching is a case-insensitive substring test, so parameters such as
/// `; charset=utf-8` are ignored. Anything that is neither PDF nor HTML is
/// rejected with the offending type.
pub fn classify(content_type: &str) -> LinkfeedResult<ContentKind> {
    let content_type = content_type.to_lowercase();

    if content_type.contains("application/pdf") {
        Ok(ContentKind::Pdf)
    } else if content_type.contains("text/html") {
        Ok(ContentKind::Html)
    } else {
        Err(LinkfeedError::UnsupportedContentType(content_type))
    }
}
