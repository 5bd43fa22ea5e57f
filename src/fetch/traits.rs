use std::fmt;
use std::io::Read;

use url::Url;

use crate::errors::LinkfeedResult;

/// A fetched resource whose body has not been consumed yet
pub struct FetchedResource {
    /// Declared `Content-Type` header, empty when absent
    pub content_type: String,
    /// URL the response was served from, after redirects
    pub final_url: Url,
    pub body: Box<dyn Read + Send>,
}

impl FetchedResource {
    pub fn new(content_type: impl Into<String>, final_url: Url, body: Box<dyn Read + Send>) -> Self {
        Self {
            content_type: content_type.into(),
            final_url,
            body,
        }
    }
}

impl fmt::Debug for FetchedResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FetchedResource")
            .field("content_type", &self.content_type)
            .field("final_url", &self.final_url.as_str())
            .finish_non_exhaustive()
    }
}

#[cfg_attr(test, mockall::automock)]
pub trait Fetcher {
    /// Fetch `url`, following redirects
    fn fetch(&self, url: &Url) -> LinkfeedResult<FetchedResource>;
}
