use std::collections::BTreeSet;

use crate::error::{KeepsakeError, KeepsakeResult};

/// One gallery photo or theater video. `source` is a host path/URL and is
/// not validated beyond being non-empty; bad paths surface as host-level
/// media-load failures.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MediaItem {
    pub id: String,
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

/// The static media lists the downstream sections consume once the intro
/// completes.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub photos: Vec<MediaItem>,
    #[serde(default)]
    pub videos: Vec<MediaItem>,
}

impl Catalog {
    pub fn validate(&self) -> KeepsakeResult<()> {
        let mut seen = BTreeSet::new();
        for item in self.photos.iter().chain(self.videos.iter()) {
            if item.id.trim().is_empty() {
                return Err(KeepsakeError::validation("media item id must be non-empty"));
            }
            if item.source.trim().is_empty() {
                return Err(KeepsakeError::validation(format!(
                    "media item '{}' has an empty source",
                    item.id
                )));
            }
            if !seen.insert(item.id.as_str()) {
                return Err(KeepsakeError::validation(format!(
                    "duplicate media item id '{}'",
                    item.id
                )));
            }
        }
        Ok(())
    }
}
