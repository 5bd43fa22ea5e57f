use chrono::{DateTime, Local, TimeZone};
use tracing::{debug, info};
use url::Url;

use crate::domain::{Anchor, FeedItem};
use crate::errors::{LinkfeedError, LinkfeedResult};
use crate::extract::{self, PageMetadata};
use crate::fetch::Fetcher;
use crate::rules::{canonicalize, simple_host, HostRuleTable};

/// RFC 1123 with a numeric zone, e.g. `Mon, 02 Jan 2006 15:04:05 -0700`
pub const PUB_DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S %z";

pub fn format_pub_date<Tz: TimeZone>(time: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    time.format(PUB_DATE_FORMAT).to_string()
}

/// Combine extracted metadata and URLs into a feed item
///
/// The description is prefixed with a link back to the requested URL,
/// labelled with the resolved host.
pub fn synthesize_item(
    original_url: &str,
    resolved_url: &Url,
    canonical_url: &Url,
    page: PageMetadata,
    pub_date: String,
) -> FeedItem {
    let host = simple_host(resolved_url.host_str().unwrap_or_default());
    let description = format!(
        "{} - {}",
        Anchor::new(original_url, host),
        page.description
    );

    FeedItem::new(page.title, canonical_url.to_string(), description, pub_date)
        .with_original_url(Some(original_url.to_string()))
}

/// Turns a single URL into a feed item
pub struct LinkService<F: Fetcher> {
    fetcher: F,
    rules: HostRuleTable,
}

impl<F: Fetcher> LinkService<F> {
    pub fn new(fetcher: F, rules: HostRuleTable) -> Self {
        Self { fetcher, rules }
    }

    /// Fetch `url` and build its feed item, stamped with the current time
    pub fn item_from_url(&self, url: &str) -> LinkfeedResult<FeedItem> {
        self.item_from_url_at(url, &Local::now())
    }

    pub fn item_from_url_at<Tz: TimeZone>(
        &self,
        url: &str,
        now: &DateTime<Tz>,
    ) -> LinkfeedResult<FeedItem>
    where
        Tz::Offset: std::fmt::Display,
    {
        let parsed = parse_input_url(url)?;

        let resource = self.fetcher.fetch(&parsed)?;
        let resolved = resource.final_url.clone();

        let page = extract::extract(resource, &self.rules)?;
        let canonical = canonicalize(&resolved, &self.rules);
        if canonical != resolved {
            debug!("Canonicalized {} to {}", resolved, canonical);
        }

        info!("Extracted {} page: {}", page.kind, page.title);
        Ok(synthesize_item(
            parsed.as_str(),
            &resolved,
            &canonical,
            page,
            format_pub_date(now),
        ))
    }
}

fn parse_input_url(url: &str) -> LinkfeedResult<Url> {
    let parsed = Url::parse(url).map_err(|e| LinkfeedError::InvalidUrl(format!("{}: {}", url, e)))?;

    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        scheme => Err(LinkfeedError::InvalidUrl(format!(
            "{}: unsupported scheme '{}'",
            url, scheme
        ))),
    }
}
