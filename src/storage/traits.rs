use crate::domain::Rss;
use crate::errors::LinkfeedResult;

#[cfg_attr(test, mockall::automock)]
pub trait FeedStore {
    /// Load the persisted feed, `None` if nothing has been saved yet
    fn load(&self) -> LinkfeedResult<Option<Rss>>;
    /// Replace the persisted feed with `rss`
    fn save(&self, rss: &Rss) -> LinkfeedResult<()>;
}
