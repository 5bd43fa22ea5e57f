use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use quick_xml::se::Serializer;
use serde::Serialize;
use tracing::{debug, info};

use crate::domain::Rss;
use crate::errors::{LinkfeedError, LinkfeedResult};
use crate::storage::traits::FeedStore;

const XML_HEADER: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";

/// RSS 2.0 document on disk
pub struct XmlFeedStore {
    path: PathBuf,
}

impl XmlFeedStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn read_error(&self, reason: impl ToString) -> LinkfeedError {
        LinkfeedError::FeedRead {
            path: self.path.display().to_string(),
            reason: reason.to_string(),
        }
    }

    fn write_error(&self, reason: impl ToString) -> LinkfeedError {
        LinkfeedError::FeedWrite {
            path: self.path.display().to_string(),
            reason: reason.to_string(),
        }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

/// Render a feed as an indented XML document
pub fn to_xml(rss: &Rss) -> Result<String, String> {
    let mut body = String::new();
    let mut serializer = Serializer::new(&mut body);
    serializer.indent(' ', 2);
    rss.serialize(serializer).map_err(|e| e.to_string())?;

    Ok(format!("{}{}\n", XML_HEADER, body))
}

pub fn from_xml(xml: &str) -> Result<Rss, String> {
    quick_xml::de::from_str(xml).map_err(|e| e.to_string())
}

impl FeedStore for XmlFeedStore {
    fn load(&self) -> LinkfeedResult<Option<Rss>> {
        let xml = match fs::read_to_string(&self.path) {
            Ok(xml) => xml,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No feed at {}, starting fresh", self.path.display());
                return Ok(None);
            }
            Err(e) => return Err(self.read_error(e)),
        };

        let rss = from_xml(&xml).map_err(|e| self.read_error(e))?;
        debug!(
            "Loaded {} items from {}",
            rss.items().len(),
            self.path.display()
        );

        Ok(Some(rss))
    }

    fn save(&self, rss: &Rss) -> LinkfeedResult<()> {
        let xml = to_xml(rss).map_err(|e| self.write_error(e))?;

        // Write beside the target, then rename over it
        let temp_path = self.temp_path();
        fs::write(&temp_path, xml).map_err(|e| self.write_error(e))?;
        fs::rename(&temp_path, &self.path).map_err(|e| {
            fs::remove_file(&temp_path).ok();
            self.write_error(e)
        })?;

        info!(
            "Saved {} items to {}",
            rss.items().len(),
            self.path.display()
        );
        Ok(())
    }
}
