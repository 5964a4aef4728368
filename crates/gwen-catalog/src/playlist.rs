//! Turn a pasted playlist dump into video records.
//!
//! Input is `URL - Title` entries separated by newlines or semicolons, e.g.
//! the output of a playlist export. Section rules (`=== ... ===`) and blank
//! entries are skipped. Not part of the live catalog flow.

use std::sync::LazyLock;

use regex::Regex;

use crate::video::VideoRecord;
use crate::youtube::ThumbnailQuality;

static RE_WATCH_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"https://www\.youtube\.com/watch\?v=([a-zA-Z0-9_-]+)").unwrap()
});

/// Title used when an entry has a URL but no title text.
pub const FALLBACK_TITLE: &str = "Workout Video";

/// Title fragments that mark an entry as not being a workout.
const EXCLUDED_TERMS: &[&str] = &["goat", "hip hop"];

/// Parse playlist text with `high` quality thumbnails.
pub fn parse_playlist(text: &str) -> Vec<VideoRecord> {
    parse_playlist_with(text, ThumbnailQuality::default())
}

/// Parse playlist text, building thumbnails at `quality`.
pub fn parse_playlist_with(text: &str, quality: ThumbnailQuality) -> Vec<VideoRecord> {
    text.split(['\n', ';'])
        .filter(|entry| !entry.trim().is_empty() && !entry.contains("==="))
        .filter_map(|entry| parse_entry(entry, quality))
        .collect()
}

fn parse_entry(entry: &str, quality: ThumbnailQuality) -> Option<VideoRecord> {
    let caps = RE_WATCH_URL.captures(entry)?;
    let video_id = &caps[1];

    let title = entry
        .split(" - ")
        .skip(1)
        .collect::<Vec<_>>()
        .join(" - ");
    let title = match title.trim() {
        "" => FALLBACK_TITLE,
        t => t,
    };

    if is_excluded(title) {
        tracing::debug!(id = video_id, title, "Skipping non-workout entry");
        return None;
    }

    Some(VideoRecord::with_quality(video_id, title, quality))
}

fn is_excluded(title: &str) -> bool {
    let lower = title.to_lowercase();
    EXCLUDED_TERMS.iter().any(|term| lower.contains(term))
}
