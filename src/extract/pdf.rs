use percent_encoding::percent_decode_str;
use url::Url;

use crate::domain::ExtractedMetadata;

pub const PDF_DESCRIPTION: &str = "A PDF File";
pub const PLACEHOLDER_FILENAME: &str = "document.pdf";

/// Metadata for a PDF, taken from the URL alone
///
/// The title is the percent-decoded last path segment; an empty segment
/// (path ending in `/`) falls back to a placeholder file name.
pub fn pdf_metadata(url: &Url) -> ExtractedMetadata {
    let filename = url
        .path()
        .rsplit('/')
        .next()
        .map(|segment| percent_decode_str(segment).decode_utf8_lossy().into_owned())
        .filter(|segment| !segment.is_empty())
        .unwrap_or_else(|| PLACEHOLDER_FILENAME.to_string());

    ExtractedMetadata {
        title: Some(filename),
        description: Some(PDF_DESCRIPTION.to_string()),
    }
}
