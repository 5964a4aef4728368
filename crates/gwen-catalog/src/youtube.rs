//! YouTube link shapes: watch and thumbnail URLs, and video-id extraction.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Length of every YouTube video id.
pub const VIDEO_ID_LEN: usize = 11;

// Greedy prefix so the last recognised marker wins, as browsers' regex engines do.
static RE_VIDEO_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^.*(youtu.be/|v/|u/[A-Za-z0-9_]/|embed/|watch\?v=|&v=)([^#&?]*).*").unwrap()
});

/// Thumbnail size tier served by `img.youtube.com`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThumbnailQuality {
    Default,
    Medium,
    #[default]
    High,
    Maxres,
}

impl ThumbnailQuality {
    /// File stem used by the image host for this tier.
    pub fn token(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Medium => "mqdefault",
            Self::High => "hqdefault",
            Self::Maxres => "maxresdefault",
        }
    }
}

/// Canonical watch link for a video id.
pub fn watch_url(video_id: &str) -> String {
    format!("https://www.youtube.com/watch?v={video_id}")
}

/// Thumbnail image link for a video id at the given quality.
pub fn thumbnail_url(video_id: &str, quality: ThumbnailQuality) -> String {
    format!("https://img.youtube.com/vi/{video_id}/{}.jpg", quality.token())
}

/// Pull the 11-character video id out of a URL-like string.
///
/// Recognises `youtu.be/`, `/v/`, `/u/<x>/`, `/embed/`, `watch?v=` and `&v=`.
/// Returns `None` when no candidate is found or the candidate is not exactly
/// 11 characters long.
pub fn extract_video_id(url: &str) -> Option<String> {
    let caps = RE_VIDEO_ID.captures(url)?;
    let candidate = caps.get(2)?.as_str();
    if candidate.chars().count() == VIDEO_ID_LEN {
        Some(candidate.to_string())
    } else {
        None
    }
}
