use gwen_catalog::{Catalog, CategoryToken};
use wasm_bindgen::prelude::*;

/// The embedded catalog, enriched, as a JSON array.
#[wasm_bindgen]
pub fn catalog_json() -> String {
    serde_json::to_string(Catalog::embedded().videos()).unwrap_or_else(|_| "[]".to_string())
}

/// Videos of the embedded catalog in `category`. Unknown tokens mean "all".
#[wasm_bindgen]
pub fn filter_catalog(category: &str) -> String {
    let catalog = Catalog::embedded();
    let videos = catalog.filter(CategoryToken::parse_lenient(category));
    serde_json::to_string(&videos).unwrap_or_else(|_| "[]".to_string())
}

/// Derived duration and difficulty for a bare title.
#[wasm_bindgen]
pub fn classify_title(title: &str) -> String {
    let value = serde_json::json!({
        "duration": gwen_catalog::parse_duration(title),
        "difficulty": gwen_catalog::parse_difficulty(title),
    });
    value.to_string()
}

/// The 11-character video id of `url`, or `undefined`.
#[wasm_bindgen]
pub fn extract_video_id(url: &str) -> Option<String> {
    gwen_catalog::extract_video_id(url)
}

#[wasm_bindgen]
pub fn parse_playlist(text: &str) -> String {
    let records = gwen_catalog::parse_playlist(text);
    serde_json::to_string(&records).unwrap_or_else(|_| "[]".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_catalog_json() {
        let value: Value = serde_json::from_str(&catalog_json()).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 32);
    }

    #[test]
    fn test_filter_catalog() {
        let beginner: Value = serde_json::from_str(&filter_catalog("Beginner")).unwrap();
        assert_eq!(beginner.as_array().unwrap().len(), 7);

        let unknown: Value = serde_json::from_str(&filter_catalog("cardio")).unwrap();
        assert_eq!(unknown.as_array().unwrap().len(), 32);
    }

    #[test]
    fn test_classify_title() {
        let value: Value = serde_json::from_str(&classify_title("EASY 7 MIN Glute Workout")).unwrap();
        assert_eq!(value["duration"], "7 min");
        assert_eq!(value["difficulty"], "beginner");

        let value: Value = serde_json::from_str(&classify_title("Booty Burner")).unwrap();
        assert!(value["duration"].is_null());
        assert_eq!(value["difficulty"], "intermediate");
    }

    #[test]
    fn test_extract_video_id() {
        assert_eq!(
            extract_video_id("https://youtu.be/dQw4w9WgXcQ").as_deref(),
            Some("dQw4w9WgXcQ")
        );
        assert_eq!(extract_video_id("https://example.com"), None);
    }

    #[test]
    fn test_parse_playlist() {
        let text = "https://www.youtube.com/watch?v=A-VcNtArh48 - 8 MIN Glutes\n\
                    https://www.youtube.com/watch?v=abcdefghijk - GOAT dance";
        let value: Value = serde_json::from_str(&parse_playlist(text)).unwrap();
        let records = value.as_array().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["title"], "8 MIN Glutes");
    }
}
