//! Workout video catalog: records, title classification, category filters
//! and YouTube link helpers. Pure functions only; no I/O.

pub mod catalog;
pub mod classify;
pub mod filter;
pub mod keyword;
pub mod playlist;
pub mod video;
pub mod youtube;

pub use catalog::Catalog;
pub use classify::{enrich, parse_difficulty, parse_duration};
pub use filter::filter;
pub use keyword::{CategoryFlags, CategoryToken};
pub use playlist::parse_playlist;
pub use video::{Difficulty, EnrichedVideo, VideoRecord};
pub use youtube::{extract_video_id, thumbnail_url, watch_url, ThumbnailQuality};
