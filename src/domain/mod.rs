pub mod feed;
pub mod item;
pub mod metadata;

pub use feed::{Channel, MergeOutcome, Rss};
pub use item::FeedItem;
pub use metadata::{Anchor, ExtractedMetadata};
