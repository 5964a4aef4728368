//! Category filtering of the catalog.
//!
//! Filtering tests the title against the category keyword tables, never the
//! derived difficulty or duration. A video can therefore be classified one
//! way and bucketed another.

use crate::keyword::{category_flags, lookup_category, CategoryFlags, CategoryToken};
use crate::video::EnrichedVideo;

impl CategoryToken {
    /// Parse a token, treating anything unrecognised as `All`.
    pub fn parse_lenient(s: &str) -> Self {
        lookup_category(s).unwrap_or(CategoryToken::All)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Beginner => "beginner",
            Self::Quick => "quick",
            Self::Intense => "intense",
        }
    }

    /// Bucket flag for this token; `None` for `All`.
    pub fn flag(&self) -> Option<CategoryFlags> {
        match self {
            Self::All => None,
            Self::Beginner => Some(CategoryFlags::BEGINNER),
            Self::Quick => Some(CategoryFlags::QUICK),
            Self::Intense => Some(CategoryFlags::INTENSE),
        }
    }

    pub const ALL: &[CategoryToken] = &[Self::All, Self::Beginner, Self::Quick, Self::Intense];
}

impl std::fmt::Display for CategoryToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// True if `video` belongs in the `category` bucket.
pub fn matches_category(video: &EnrichedVideo, category: CategoryToken) -> bool {
    match category.flag() {
        None => true,
        Some(flag) => category_flags(&video.title).contains(flag),
    }
}

/// Videos of `catalog` in `category`, in catalog order.
///
/// An empty result is a valid outcome; callers show a "no results" state.
pub fn filter(catalog: &[EnrichedVideo], category: CategoryToken) -> Vec<&EnrichedVideo> {
    catalog
        .iter()
        .filter(|video| matches_category(video, category))
        .collect()
}
