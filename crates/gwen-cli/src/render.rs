//! Plain-text rendering for terminal output.

use gwen_catalog::EnrichedVideo;
use gwen_core::{Card, GatePrompt};

/// One line per card: lock badge, id, duration, difficulty, title.
pub fn card_line(card: &Card<'_>) -> String {
    let badge = if card.locked { "locked" } else { "open" };
    format!("[{badge:<6}] {}", video_line(card.video))
}

pub fn video_line(video: &EnrichedVideo) -> String {
    format!(
        "{}  {:>6}  {:<12}  {}",
        video.id,
        video.duration.as_deref().unwrap_or("-"),
        video.difficulty.as_str(),
        video.title
    )
}

pub fn gate_prompt(prompt: &GatePrompt) -> String {
    let mut out = format!(
        "{}\n\n{}\n{}\n\n",
        prompt.headline, prompt.video_title, prompt.description
    );
    for benefit in prompt.benefits {
        out.push_str("  * ");
        out.push_str(benefit);
        out.push('\n');
    }
    out.push_str("\nRun again with --subscribe to subscribe and watch.");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use gwen_catalog::Catalog;
    use gwen_core::{ClickOutcome, MemoryStore, VideoGrid};

    #[test]
    fn test_card_line() {
        let catalog = Catalog::embedded();
        let video = catalog.get("A-VcNtArh48").unwrap();
        let line = card_line(&Card {
            video,
            locked: true,
            label: String::new(),
        });
        assert!(line.starts_with("[locked] A-VcNtArh48   8 min  beginner"));
        assert!(line.ends_with(&video.title));
    }

    #[test]
    fn test_video_line_without_duration() {
        let catalog = Catalog::embedded();
        let line = video_line(&catalog.videos()[3]);
        assert!(line.contains("     -  intermediate"));
    }

    #[test]
    fn test_gate_prompt_never_shows_destination() {
        let mut grid = VideoGrid::mount(Catalog::embedded(), MemoryStore::new());
        let ClickOutcome::Gate(prompt) = grid.click("A-VcNtArh48") else {
            panic!("fresh store should gate");
        };
        let text = gate_prompt(&prompt);
        assert!(text.starts_with("Subscribe to Unlock"));
        assert!(text.contains("Join 1,200+ strong women"));
        assert!(!text.contains("watch?v="));
    }
}
