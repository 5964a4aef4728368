use serde::Deserialize;

use crate::classify::enrich_all;
use crate::filter::filter;
use crate::keyword::CategoryToken;
use crate::video::{Difficulty, EnrichedVideo, VideoRecord};
use crate::youtube::{ThumbnailQuality, VIDEO_ID_LEN};

/// Embedded workout catalog.
const EMBEDDED_CATALOG: &str = include_str!("../data/videos.toml");

/// One `[[video]]` table of a catalog file.
#[derive(Debug, Deserialize)]
struct CatalogEntry {
    id: String,
    title: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    duration: Option<String>,
    #[serde(default)]
    difficulty: Option<Difficulty>,
}

/// Wrapper for TOML deserialization.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(rename = "video", default)]
    videos: Vec<CatalogEntry>,
}

/// The enriched, read-only list of workout videos in display order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    videos: Vec<EnrichedVideo>,
}

impl Catalog {
    /// Load the embedded catalog.
    pub fn embedded() -> Self {
        Self::from_toml(EMBEDDED_CATALOG).expect("embedded videos.toml should be valid")
    }

    /// Load a catalog from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        Self::from_toml_with(toml_str, ThumbnailQuality::default())
    }

    /// Load a catalog from a TOML string, building thumbnails at `quality`.
    pub fn from_toml_with(
        toml_str: &str,
        quality: ThumbnailQuality,
    ) -> Result<Self, toml::de::Error> {
        let file: CatalogFile = toml::from_str(toml_str)?;
        let records = file
            .videos
            .into_iter()
            .map(|entry| {
                if entry.id.chars().count() != VIDEO_ID_LEN {
                    tracing::warn!(id = %entry.id, "Catalog entry id is not a YouTube video id");
                }
                VideoRecord {
                    description: entry.description,
                    duration: entry.duration,
                    difficulty: entry.difficulty,
                    ..VideoRecord::with_quality(entry.id, entry.title, quality)
                }
            })
            .collect();
        Ok(Self::from_records(records))
    }

    /// Enrich raw records once, keeping their order.
    pub fn from_records(records: Vec<VideoRecord>) -> Self {
        let videos = enrich_all(records);
        tracing::debug!(count = videos.len(), "Catalog loaded");
        Self { videos }
    }

    pub fn videos(&self) -> &[EnrichedVideo] {
        &self.videos
    }

    pub fn len(&self) -> usize {
        self.videos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }

    /// Find a video by id.
    pub fn get(&self, id: &str) -> Option<&EnrichedVideo> {
        self.videos.iter().find(|v| v.id == id)
    }

    /// Videos in `category`, in display order.
    pub fn filter(&self, category: CategoryToken) -> Vec<&EnrichedVideo> {
        filter(&self.videos, category)
    }
}
