use tracing::info;

use crate::config::ChannelConfig;
use crate::domain::{FeedItem, MergeOutcome, Rss};
use crate::errors::LinkfeedResult;
use crate::storage::traits::FeedStore;

pub struct FeedService<S: FeedStore> {
    store: S,
    channel: ChannelConfig,
}

impl<S: FeedStore> FeedService<S> {
    pub fn new(store: S, channel: ChannelConfig) -> Self {
        Self { store, channel }
    }

    /// Load the persisted feed, or a fresh one seeded from the channel config
    pub fn load(&self) -> LinkfeedResult<Rss> {
        Ok(self
            .store
            .load()?
            .unwrap_or_else(|| Rss::new(&self.channel)))
    }

    /// Merge an item into the feed, persisting only when it was inserted
    pub fn add(&self, item: FeedItem) -> LinkfeedResult<MergeOutcome> {
        let link = item.link.clone();

        match self.load()?.merge(item) {
            MergeOutcome::Inserted(rss) => {
                self.store.save(&rss)?;
                info!("Inserted {}", link);
                Ok(MergeOutcome::Inserted(rss))
            }
            MergeOutcome::AlreadyPresent => {
                info!("Already in feed: {}", link);
                Ok(MergeOutcome::AlreadyPresent)
            }
        }
    }

    /// Check whether `item` would be inserted, without writing anything
    pub fn would_insert(&self, item: &FeedItem) -> LinkfeedResult<bool> {
        Ok(!self.load()?.contains_link(&item.link))
    }

    /// Items in the feed, newest first
    pub fn list(&self) -> LinkfeedResult<Vec<FeedItem>> {
        Ok(self.load()?.channel.items)
    }
}
