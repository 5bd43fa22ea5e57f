use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use reqwest::redirect::Policy;
use tracing::{debug, info};
use url::Url;

use crate::errors::LinkfeedResult;
use crate::fetch::traits::{FetchedResource, Fetcher};

const USER_AGENT: &str = concat!("linkfeed/", env!("CARGO_PKG_VERSION"));
const MAX_REDIRECTS: usize = 10;

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> LinkfeedResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .redirect(Policy::limited(MAX_REDIRECTS))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &Url) -> LinkfeedResult<FetchedResource> {
        info!("Fetching {}", url);

        let response = self.client.get(url.clone()).send()?.error_for_status()?;

        let final_url = response.url().clone();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();

        if &final_url != url {
            debug!("Redirected to {}", final_url);
        }
        debug!("Content-Type: {:?}", content_type);

        Ok(FetchedResource::new(content_type, final_url, Box::new(response)))
    }
}
