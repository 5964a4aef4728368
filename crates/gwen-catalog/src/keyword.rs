use bitflags::bitflags;
use phf::phf_map;

use crate::video::Difficulty;

bitflags! {
    /// Filter buckets a title falls into.
    ///
    /// A title can sit in several buckets at once ("8 MIN EASY ..." is both
    /// beginner and quick). "all" has no flag: it is the identity filter.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CategoryFlags: u8 {
        const BEGINNER = 0b0000_0001;
        const QUICK = 0b0000_0010;
        const INTENSE = 0b0000_0100;
    }
}

/// One classification rule: a title containing any keyword maps to `value`.
#[derive(Debug, Clone, Copy)]
pub struct KeywordRule<T> {
    pub value: T,
    pub keywords: &'static [&'static str],
}

impl<T: Copy> KeywordRule<T> {
    /// True if the lowercased `title` contains any keyword of this rule.
    pub fn matches(&self, lowered_title: &str) -> bool {
        self.keywords.iter().any(|kw| lowered_title.contains(kw))
    }
}

// ── Difficulty (classifier) ─────────────────────────────────────
//
// Evaluated in order; the first matching rule wins, and a title matching
// none of them is intermediate.

pub static DIFFICULTY_RULES: &[KeywordRule<Difficulty>] = &[
    KeywordRule {
        value: Difficulty::Beginner,
        keywords: &["beginner", "easy", "everyday", "side-lying"],
    },
    KeywordRule {
        value: Difficulty::Intense,
        keywords: &[
            "intense", "insanely", "extreme", "explosive", "major", "maximum", "fire",
        ],
    },
];

// ── Category buckets (filter) ───────────────────────────────────
//
// These lists overlap with the difficulty lists but are not the same
// ("7 minute" and "8 min" count as beginner here, "side-lying" does not).
// Keep them separate.

pub static CATEGORY_RULES: &[KeywordRule<CategoryFlags>] = &[
    KeywordRule {
        value: CategoryFlags::BEGINNER,
        keywords: &["beginner", "easy", "everyday", "7 minute", "8 min"],
    },
    KeywordRule {
        value: CategoryFlags::QUICK,
        keywords: &["7 min", "8 min", "10 min", "7 minute"],
    },
    KeywordRule {
        value: CategoryFlags::INTENSE,
        keywords: &[
            "12 min",
            "13 min",
            "14 min",
            "15 min",
            "intense",
            "insanely",
            "extreme",
            "explosive",
            "major",
        ],
    },
];

/// Category token as selected by the visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryToken {
    All,
    Beginner,
    Quick,
    Intense,
}

/// Compile-time token lookup table. All keys are lowercase.
pub static CATEGORY_TOKENS: phf::Map<&'static str, CategoryToken> = phf_map! {
    "all" => CategoryToken::All,
    "beginner" => CategoryToken::Beginner,
    "quick" => CategoryToken::Quick,
    "intense" => CategoryToken::Intense,
};

/// Look up a category token (case-insensitive).
pub fn lookup_category(s: &str) -> Option<CategoryToken> {
    CATEGORY_TOKENS.get(s.trim().to_lowercase().as_str()).copied()
}

/// Every filter bucket the title belongs to.
pub fn category_flags(title: &str) -> CategoryFlags {
    let lower = title.to_lowercase();
    CATEGORY_RULES
        .iter()
        .filter(|rule| rule.matches(&lower))
        .fold(CategoryFlags::empty(), |acc, rule| acc | rule.value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_category_case_insensitive() {
        assert_eq!(lookup_category("Beginner"), Some(CategoryToken::Beginner));
        assert_eq!(lookup_category("QUICK"), Some(CategoryToken::Quick));
        assert_eq!(lookup_category(" all "), Some(CategoryToken::All));
        assert_eq!(lookup_category("cardio"), None);
    }

    #[test]
    fn test_flags_can_overlap() {
        let flags = category_flags("8 MIN EASY Beginner Friendly Booty Workout");
        assert!(flags.contains(CategoryFlags::BEGINNER));
        assert!(flags.contains(CategoryFlags::QUICK));
        assert!(!flags.contains(CategoryFlags::INTENSE));
    }

    #[test]
    fn test_every_category_keyword_matches_alone() {
        for rule in CATEGORY_RULES {
            for kw in rule.keywords {
                let title = format!("Workout {} at Home", kw.to_uppercase());
                assert!(
                    category_flags(&title).contains(rule.value),
                    "{kw:?} should select {:?}",
                    rule.value
                );
            }
        }
    }

    #[test]
    fn test_side_lying_is_not_a_beginner_bucket() {
        // Classified beginner, but not in the beginner filter bucket.
        assert!(category_flags("Side-Lying Glute Workout").is_empty());
    }

    #[test]
    fn test_no_keywords_no_flags() {
        assert!(category_flags("Round Booty Workout at Home").is_empty());
    }
}
