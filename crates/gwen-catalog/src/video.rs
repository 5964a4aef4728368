use serde::{Deserialize, Serialize};

use crate::youtube::{thumbnail_url, watch_url, ThumbnailQuality};

/// How demanding a workout is, derived from its title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    #[default]
    Intermediate,
    Intense,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Intense => "intense",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A raw catalog entry, as supplied by hand or by the playlist helper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoRecord {
    /// 11-character YouTube video id.
    pub id: String,
    /// Watch link, derived from `id`.
    pub url: String,
    /// Display title. The only input to classification.
    pub title: String,
    /// Thumbnail image link, derived from `id`.
    pub thumbnail: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Explicit duration label; wins over the derived one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    /// Explicit difficulty; wins over the derived one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
}

impl VideoRecord {
    /// Build a record from an id and title, deriving the watch URL and a
    /// thumbnail at the default (`high`) quality.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self::with_quality(id, title, ThumbnailQuality::default())
    }

    pub fn with_quality(
        id: impl Into<String>,
        title: impl Into<String>,
        quality: ThumbnailQuality,
    ) -> Self {
        let id = id.into();
        Self {
            url: watch_url(&id),
            thumbnail: thumbnail_url(&id, quality),
            id,
            title: title.into(),
            description: None,
            duration: None,
            difficulty: None,
        }
    }
}

/// A catalog entry with its derived fields filled in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedVideo {
    pub id: String,
    pub url: String,
    pub title: String,
    pub thumbnail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Display label such as "10 min"; absent when the title names no length.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    pub difficulty: Difficulty,
}
