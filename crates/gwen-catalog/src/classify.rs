//! Derive display metadata from a video title.
//!
//! Both derivations are pure functions of the title: same title in, same
//! duration and difficulty out, regardless of letter case. A title that
//! matches nothing is a normal outcome (no duration, intermediate).

use std::sync::LazyLock;

use regex::Regex;

use crate::keyword::DIFFICULTY_RULES;
use crate::video::{Difficulty, EnrichedVideo, VideoRecord};

// ── Regex patterns (compiled once) ──────────────────────────────

static RE_MIN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([0-9]+)\s*min").unwrap());

static RE_MINUTE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([0-9]+)\s*minute").unwrap());

/// Duration label for a title, e.g. `"10 min"`.
///
/// Checked in order, first hit wins:
/// 1. `<n> min`
/// 2. `<n> minute`
/// 3. the phrase "under 10" (labelled `"10 min"`)
pub fn parse_duration(title: &str) -> Option<String> {
    let lower = title.to_lowercase();

    if let Some(caps) = RE_MIN.captures(&lower) {
        return Some(format!("{} min", &caps[1]));
    }
    if let Some(caps) = RE_MINUTE.captures(&lower) {
        return Some(format!("{} min", &caps[1]));
    }
    if lower.contains("under 10") {
        return Some("10 min".to_string());
    }
    None
}

/// Difficulty for a title. Defaults to intermediate.
pub fn parse_difficulty(title: &str) -> Difficulty {
    let lower = title.to_lowercase();
    DIFFICULTY_RULES
        .iter()
        .find(|rule| rule.matches(&lower))
        .map(|rule| rule.value)
        .unwrap_or_default()
}

/// Fill in the derived fields of a record.
///
/// Explicit values on the record are kept; only missing ones are derived.
/// An empty explicit duration counts as missing.
pub fn enrich(record: VideoRecord) -> EnrichedVideo {
    let duration = record
        .duration
        .filter(|d| !d.is_empty())
        .or_else(|| parse_duration(&record.title));
    let difficulty = record
        .difficulty
        .unwrap_or_else(|| parse_difficulty(&record.title));

    tracing::debug!(
        id = %record.id,
        duration = duration.as_deref().unwrap_or("-"),
        %difficulty,
        "Classified video"
    );

    EnrichedVideo {
        id: record.id,
        url: record.url,
        title: record.title,
        thumbnail: record.thumbnail,
        description: record.description,
        duration,
        difficulty,
    }
}

/// Enrich every record, keeping input order.
pub fn enrich_all(records: Vec<VideoRecord>) -> Vec<EnrichedVideo> {
    records.into_iter().map(enrich).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyword::KeywordRule;

    // ── Duration ──────────────────────────────────────────────────

    #[test]
    fn test_duration_min() {
        assert_eq!(
            parse_duration("EXPLOSIVE BOOTY PUMP in JUST 10 Min!").as_deref(),
            Some("10 min")
        );
        assert_eq!(
            parse_duration("INSTANT BOOTY PUMP - 12 Min Intense burn").as_deref(),
            Some("12 min")
        );
    }

    #[test]
    fn test_duration_no_space() {
        assert_eq!(parse_duration("Quick 15min burner").as_deref(), Some("15 min"));
    }

    #[test]
    fn test_duration_minute_forms() {
        assert_eq!(
            parse_duration("7 Minute Tone + Butt Lift Workout for Beginners").as_deref(),
            Some("7 min")
        );
        assert_eq!(
            parse_duration("INSANELY MASSIVE BOOTY LIFT WORKOUT - Only 13 Minutes").as_deref(),
            Some("13 min")
        );
    }

    #[test]
    fn test_duration_under_ten() {
        assert_eq!(
            parse_duration("MAJOR BUTT LIFT In Under 10 Minutes").as_deref(),
            // "10 Minutes" is itself a `<n> min` hit.
            Some("10 min")
        );
        assert_eq!(parse_duration("Booty Burn in under 10").as_deref(), Some("10 min"));
    }

    #[test]
    fn test_duration_absent() {
        assert_eq!(parse_duration("Round Booty Workout at Home"), None);
        assert_eq!(parse_duration("Major Butt Lift in 14 Days!"), None);
        assert_eq!(parse_duration(""), None);
    }

    #[test]
    fn test_duration_ascii_digits_only() {
        assert_eq!(parse_duration("Glute burn ٥ min"), None);
        assert_eq!(parse_duration("१० minute burner"), None);
    }

    #[test]
    fn test_duration_first_number_wins() {
        assert_eq!(
            parse_duration("5 min warmup then 20 min burn").as_deref(),
            Some("5 min")
        );
    }

    // ── Difficulty ────────────────────────────────────────────────

    #[test]
    fn test_difficulty_beginner() {
        assert_eq!(parse_difficulty("Beginner Glute Workout at Home"), Difficulty::Beginner);
        assert_eq!(parse_difficulty("Everyday Side-Lying Glute Workout"), Difficulty::Beginner);
        assert_eq!(parse_difficulty("side-lying pulses"), Difficulty::Beginner);
    }

    #[test]
    fn test_difficulty_intense() {
        assert_eq!(parse_difficulty("3 MUST DO EXERCISES TO SET YOUR GLUTES ON FIRE"), Difficulty::Intense);
        assert_eq!(parse_difficulty("Unlock Your BEST Glutes | 3 Exercises for MAXIMUM Growth!"), Difficulty::Intense);
    }

    #[test]
    fn test_difficulty_beginner_rule_checked_first() {
        // Contains both "easy" and "explosive".
        assert_eq!(parse_difficulty("Easy but Explosive"), Difficulty::Beginner);
    }

    #[test]
    fn test_difficulty_default() {
        assert_eq!(parse_difficulty("Round Booty Workout at Home"), Difficulty::Intermediate);
        assert_eq!(parse_difficulty(""), Difficulty::Intermediate);
    }

    #[test]
    fn test_case_insensitive() {
        let titles = ["INTENSE BUTT LIFT", "8 MIN EASY Beginner", "under 10 burn"];
        for title in titles {
            let upper = title.to_uppercase();
            let lower = title.to_lowercase();
            assert_eq!(parse_difficulty(&upper), parse_difficulty(&lower));
            assert_eq!(parse_duration(&upper), parse_duration(&lower));
        }
    }

    fn assert_rule_table(rules: &[KeywordRule<Difficulty>]) {
        for rule in rules {
            for kw in rule.keywords {
                let title = format!("Glute {} session", kw.to_uppercase());
                assert_eq!(parse_difficulty(&title), rule.value, "keyword {kw:?}");
            }
        }
    }

    #[test]
    fn test_every_difficulty_keyword() {
        assert_rule_table(DIFFICULTY_RULES);
    }

    // ── Enrichment ────────────────────────────────────────────────

    #[test]
    fn test_enrich_derives_missing_fields() {
        let video = enrich(VideoRecord::new("A-VcNtArh48", "8 MIN EASY Beginner Friendly Booty Workout"));
        assert_eq!(video.duration.as_deref(), Some("8 min"));
        assert_eq!(video.difficulty, Difficulty::Beginner);
        assert_eq!(video.url, "https://www.youtube.com/watch?v=A-VcNtArh48");
    }

    #[test]
    fn test_enrich_explicit_values_win() {
        let mut record = VideoRecord::new("qfEOp7JmVtE", "INSTANT BOOTY PUMP - 12 Min Intense burn");
        record.duration = Some("20 min".into());
        record.difficulty = Some(Difficulty::Beginner);

        let video = enrich(record);
        assert_eq!(video.duration.as_deref(), Some("20 min"));
        assert_eq!(video.difficulty, Difficulty::Beginner);
    }

    #[test]
    fn test_enrich_empty_explicit_duration_is_derived() {
        let mut record = VideoRecord::new("1wyo5hQer_E", "BOOTY PUMP in 10 Minutes at Home");
        record.duration = Some(String::new());
        assert_eq!(enrich(record).duration.as_deref(), Some("10 min"));
    }

    #[test]
    fn test_enrich_is_deterministic() {
        let record = VideoRecord::new("vATqEOXBp68", "INTENSE BOOTY LIFT Workout for Major Gains");
        assert_eq!(enrich(record.clone()), enrich(record));
    }

    #[test]
    fn test_enrich_all_keeps_order() {
        let records = vec![
            VideoRecord::new("bhL-_19yOwI", "The JUICIEST BOOTY With No Equipment"),
            VideoRecord::new("D8ubjZkgOB0", "Beginner Glute Workout at Home"),
        ];
        let ids: Vec<_> = enrich_all(records).into_iter().map(|v| v.id).collect();
        assert_eq!(ids, ["bhL-_19yOwI", "D8ubjZkgOB0"]);
    }
}
