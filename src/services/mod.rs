pub mod feed_service;
pub mod link_service;

pub use feed_service::FeedService;
pub use link_service::{format_pub_date, synthesize_item, LinkService};
