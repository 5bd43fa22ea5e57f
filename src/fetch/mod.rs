pub mod http_fetcher;
pub mod traits;

pub use http_fetcher::HttpFetcher;
pub use traits::{FetchedResource, Fetcher};
