use std::time::Duration;

use crate::errors::{LinkfeedError, LinkfeedResult};

const DEFAULT_FEED_FILE: &str = "rss.xml";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Channel-level fields used to seed a brand new feed file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelConfig {
    pub title: String,
    pub link: String,
    pub description: String,
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self {
            title: "My Feed".to_string(),
            link: "http://localhost".to_string(),
            description: "Generated feed".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub channel: ChannelConfig,
    pub feed_path: String,
    pub fetch_timeout: Duration,
}

impl Config {
    /// Get the directory where the executable is located
    fn exe_dir() -> Option<std::path::PathBuf> {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
    }

    pub fn from_env() -> LinkfeedResult<Self> {
        // Try to load .env from executable's directory first
        if let Some(dir) = Self::exe_dir() {
            let env_path = dir.join(".env");
            if env_path.exists() {
                dotenvy::from_path(&env_path).ok();
            }
        }
        // Fall back to current directory
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source; empty values count as unset
    pub fn from_lookup<F>(lookup: F) -> LinkfeedResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());
        let defaults = ChannelConfig::default();

        let channel = ChannelConfig {
            title: get("RSS_TITLE").unwrap_or(defaults.title),
            link: get("RSS_LINK").unwrap_or(defaults.link),
            description: get("RSS_DESCRIPTION").unwrap_or(defaults.description),
        };

        let feed_path = get("RSS_FILE").unwrap_or_else(|| DEFAULT_FEED_FILE.to_string());

        let timeout_secs = match get("LINKFEED_TIMEOUT_SECS") {
            Some(raw) => raw
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| {
                    LinkfeedError::Config(format!(
                        "LINKFEED_TIMEOUT_SECS must be a positive number of seconds, got '{}'",
                        raw
                    ))
                })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            channel,
            feed_path,
            fetch_timeout: Duration::from_secs(timeout_secs),
        })
    }
}
