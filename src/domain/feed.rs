use serde::{Deserialize, Serialize};

use crate::config::ChannelConfig;
use crate::domain::FeedItem;

pub const RSS_VERSION: &str = "2.0";

/// The persisted RSS document: one channel holding items newest first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "rss")]
pub struct Rss {
    #[serde(rename = "@version")]
    pub version: String,
    pub channel: Channel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    pub title: String,
    pub link: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "item", default)]
    pub items: Vec<FeedItem>,
}

/// Result of merging a new item into a feed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeOutcome {
    /// The item was prepended; the updated feed must be persisted
    Inserted(Rss),
    /// An item with the same link is already in the feed
    AlreadyPresent,
}

impl Rss {
    /// An empty feed seeded with the configured channel fields
    pub fn new(channel: &ChannelConfig) -> Self {
        Self {
            version: RSS_VERSION.to_string(),
            channel: Channel {
                title: channel.title.clone(),
                link: channel.link.clone(),
                description: channel.description.clone(),
                items: Vec::new(),
            },
        }
    }

    pub fn items(&self) -> &[FeedItem] {
        &self.channel.items
    }

    pub fn contains_link(&self, link: &str) -> bool {
        self.channel.items.iter().any(|existing| existing.link == link)
    }

    /// Prepend `item` unless its link is already present
    pub fn merge(mut self, item: FeedItem) -> MergeOutcome {
        if self.contains_link(&item.link) {
            return MergeOutcome::AlreadyPresent;
        }

        self.channel.items.insert(0, item);
        MergeOutcome::Inserted(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(link: &str) -> FeedItem {
        FeedItem::new(
            format!("Title for {}", link),
            link.to_string(),
            "Description".to_string(),
            "Mon, 02 Jan 2006 15:04:05 -0700".to_string(),
        )
    }

    #[test]
    fn test_new_feed_uses_channel_config() {
        let config = ChannelConfig {
            title: "Reading".to_string(),
            link: "https://example.com".to_string(),
            description: "Later".to_string(),
        };
        let rss = Rss::new(&config);

        assert_eq!(rss.version, "2.0");
        assert_eq!(rss.channel.title, "Reading");
        assert_eq!(rss.channel.link, "https://example.com");
        assert_eq!(rss.channel.description, "Later");
        assert!(rss.items().is_empty());
    }

    #[test]
    fn test_merge_prepends_new_item() {
        let rss = Rss::new(&ChannelConfig::default());

        let rss = match rss.merge(item("https://example.com/a")) {
            MergeOutcome::Inserted(rss) => rss,
            MergeOutcome::AlreadyPresent => panic!("first insert should succeed"),
        };
        let rss = match rss.merge(item("https://example.com/b")) {
            MergeOutcome::Inserted(rss) => rss,
            MergeOutcome::AlreadyPresent => panic!("distinct link should be inserted"),
        };

        let links: Vec<&str> = rss.items().iter().map(|i| i.link.as_str()).collect();
        assert_eq!(links, vec!["https://example.com/b", "https://example.com/a"]);
    }

    #[test]
    fn test_merge_same_link_is_noop() {
        let rss = Rss::new(&ChannelConfig::default());
        let rss = match rss.merge(item("https://youtube.com/watch?v=X")) {
            MergeOutcome::Inserted(rss) => rss,
            MergeOutcome::AlreadyPresent => panic!("first insert should succeed"),
        };

        let mut again = item("https://youtube.com/watch?v=X");
        again.title = "Different title".to_string();

        assert_eq!(rss.clone().merge(again), MergeOutcome::AlreadyPresent);
        assert_eq!(rss.items().len(), 1);
    }

    #[test]
    fn test_link_comparison_is_exact() {
        let rss = Rss::new(&ChannelConfig::default());
        let rss = match rss.merge(item("https://example.com/a")) {
            MergeOutcome::Inserted(rss) => rss,
            MergeOutcome::AlreadyPresent => panic!("first insert should succeed"),
        };

        assert!(rss.contains_link("https://example.com/a"));
        assert!(!rss.contains_link("https://example.com/a/"));
        assert!(!rss.contains_link("https://EXAMPLE.com/a"));
    }
}
