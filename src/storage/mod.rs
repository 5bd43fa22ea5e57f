pub mod traits;
pub mod xml_store;

pub use traits::FeedStore;
pub use xml_store::XmlFeedStore;
