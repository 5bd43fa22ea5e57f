use serde::{Deserialize, Serialize};

/// One entry of the persisted feed, keyed by its canonical `link`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedItem {
    pub title: String,
    pub link: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "pubDate", default)]
    pub pub_date: String,
    #[serde(default)]
    pub guid: String,
    #[serde(
        rename = "originalUrl",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub original_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

impl FeedItem {
    /// The guid mirrors the canonical link at creation time and is never
    /// rewritten afterwards, even if canonicalization rules change.
    pub fn new(title: String, link: String, description: String, pub_date: String) -> Self {
        Self {
            guid: link.clone(),
            title,
            link,
            description,
            pub_date,
            original_url: None,
            author: None,
        }
    }

    pub fn with_original_url(mut self, original_url: Option<String>) -> Self {
        self.original_url = original_url;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guid_follows_link() {
        let item = FeedItem::new(
            "Title".to_string(),
            "https://example.com/post".to_string(),
            "Desc".to_string(),
            "Mon, 02 Jan 2006 15:04:05 -0700".to_string(),
        );

        assert_eq!(item.guid, "https://example.com/post");
        assert!(item.original_url.is_none());
        assert!(item.author.is_none());
    }

    #[test]
    fn test_json_uses_feed_field_names() {
        let item = FeedItem::new(
            "Title".to_string(),
            "https://example.com/post".to_string(),
            "Desc".to_string(),
            "Mon, 02 Jan 2006 15:04:05 -0700".to_string(),
        )
        .with_original_url(Some("https://www.example.com/post?utm_source=x".to_string()));

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["pubDate"], "Mon, 02 Jan 2006 15:04:05 -0700");
        assert_eq!(json["originalUrl"], "https://www.example.com/post?utm_source=x");
        assert!(json.get("author").is_none());
    }
}
