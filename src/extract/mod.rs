pub mod classify;
pub mod html;
pub mod pdf;

pub use classify::{classify, ContentKind};

use tracing::debug;
use url::Url;

use crate::domain::ExtractedMetadata;
use crate::errors::LinkfeedResult;
use crate::fetch::FetchedResource;
use crate::rules::{canonicalize, registrable_domain, simple_host, HostRuleTable};

pub const PDF_PREFIX: &str = "📑";

/// Decorated title and description for a fetched resource
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMetadata {
    pub kind: ContentKind,
    pub title: String,
    pub description: String,
}

/// Classify a fetched resource and extract its display metadata
///
/// PDFs never have their body read. For HTML, a missing title falls back to
/// the host rule's URL pattern (matched against the canonical URL) and then
/// to the host name; a missing description falls back to the resolved URL.
pub fn extract(resource: FetchedResource, rules: &HostRuleTable) -> LinkfeedResult<PageMetadata> {
    let FetchedResource {
        content_type,
        final_url,
        mut body,
    } = resource;

    let kind = classify(&content_type)?;
    debug!("Classified {} as {}", final_url, kind);

    let page = match kind {
        ContentKind::Pdf => finish_pdf(pdf::pdf_metadata(&final_url)),
        ContentKind::Html => {
            let meta = html::html_metadata(&mut *body)?;
            finish_html(meta, &final_url, rules)
        }
    };

    Ok(page)
}

fn finish_pdf(meta: ExtractedMetadata) -> PageMetadata {
    let title = meta
        .title
        .unwrap_or_else(|| pdf::PLACEHOLDER_FILENAME.to_string());

    PageMetadata {
        kind: ContentKind::Pdf,
        title: format!("{} {}", PDF_PREFIX, title),
        description: meta
            .description
            .unwrap_or_else(|| pdf::PDF_DESCRIPTION.to_string()),
    }
}

/// Apply fallbacks and the host prefix to HTML metadata
pub fn finish_html(meta: ExtractedMetadata, url: &Url, rules: &HostRuleTable) -> PageMetadata {
    let host = url.host_str().unwrap_or_default();
    let rule = rules.get(&registrable_domain(host));

    let title = meta
        .title
        .or_else(|| {
            let canonical = canonicalize(url, rules);
            let derived = rule.and_then(|r| r.title_from_url(canonical.as_str()));
            if derived.is_some() {
                debug!("Title derived from URL shape");
            }
            derived
        })
        .or_else(|| Some(simple_host(host).to_string()).filter(|h| !h.is_empty()))
        .unwrap_or_else(|| url.to_string());

    let description = meta.description.unwrap_or_else(|| {
        debug!("No description found, using URL");
        url.to_string()
    });

    let title = match rule {
        Some(rule) => rule.decorate(&title),
        None => title,
    };

    PageMetadata {
        kind: ContentKind::Html,
        title,
        description,
    }
}
