//! Video grid interaction: card listing, click-through, and the subscribe gate.
//!
//! The grid reads the persisted flag once when mounted and then keeps its
//! own session copy. Completing the gate flips the session copy even if the
//! write behind it fails, so the visitor is unlocked for the rest of the
//! session either way.

use gwen_catalog::{extract_video_id, Catalog, CategoryToken, EnrichedVideo};
use serde::Serialize;

use crate::store::KvStore;
use crate::subscription::{GateStatus, SubscriptionState};

/// Shown instead of the grid when a category has no videos.
pub const NO_RESULTS_MESSAGE: &str =
    "No workouts found in this category. Try selecting a different filter!";

pub const GATE_HEADLINE: &str = "Subscribe to Unlock";

pub const GATE_DESCRIPTION: &str =
    "Get instant access to this workout and 35+ free workouts by subscribing to Jessie Gwen on YouTube!";

pub const GATE_BENEFITS: &[&str] = &[
    "35+ free home workouts",
    "New videos every week",
    "No spam, just gains",
    "Join 1,200+ strong women",
];

/// One grid card.
#[derive(Debug, Clone, Serialize)]
pub struct Card<'a> {
    pub video: &'a EnrichedVideo,
    pub locked: bool,
    /// Accessible label for the card button.
    pub label: String,
}

/// What the grid renders for a category.
#[derive(Debug, Clone)]
pub enum GridView<'a> {
    Cards(Vec<Card<'a>>),
    Empty(&'static str),
}

/// Content of the subscribe prompt for the clicked video.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GatePrompt {
    pub video_id: String,
    pub video_title: String,
    pub thumbnail: String,
    pub headline: &'static str,
    pub description: &'static str,
    pub benefits: &'static [&'static str],
    pub subscribe_url: &'static str,
}

/// Result of clicking a card.
#[derive(Debug, Clone, PartialEq)]
pub enum ClickOutcome {
    /// Unlocked: go straight to the video.
    Open(String),
    /// Locked: show the subscribe prompt instead.
    Gate(GatePrompt),
    /// No such video in the catalog.
    NotFound,
}

pub struct VideoGrid<S> {
    catalog: Catalog,
    subscription: SubscriptionState<S>,
    has_subscribed: bool,
    selected: Option<String>,
}

impl<S: KvStore> VideoGrid<S> {
    /// Mount the grid, reading the persisted flag once.
    pub fn mount(catalog: Catalog, store: S) -> Self {
        let subscription = SubscriptionState::new(store);
        let has_subscribed = subscription.is_subscribed();
        tracing::debug!(subscribed = has_subscribed, videos = catalog.len(), "Grid mounted");
        Self {
            catalog,
            subscription,
            has_subscribed,
            selected: None,
        }
    }

    pub fn subscription(&self) -> &SubscriptionState<S> {
        &self.subscription
    }

    /// Session view of the gate.
    pub fn status(&self) -> GateStatus {
        GateStatus::from_subscribed(self.has_subscribed)
    }

    pub fn is_gate_open(&self) -> bool {
        self.selected.is_some()
    }

    /// The video whose click opened the gate, if any.
    pub fn selected(&self) -> Option<&EnrichedVideo> {
        self.selected.as_deref().and_then(|id| self.catalog.get(id))
    }

    /// Cards for `category`, or the empty state.
    pub fn cards(&self, category: CategoryToken) -> GridView<'_> {
        let locked = !self.has_subscribed;
        let cards: Vec<Card<'_>> = self
            .catalog
            .filter(category)
            .into_iter()
            .map(|video| Card {
                video,
                locked,
                label: card_label(&video.title, locked),
            })
            .collect();

        if cards.is_empty() {
            GridView::Empty(NO_RESULTS_MESSAGE)
        } else {
            GridView::Cards(cards)
        }
    }

    /// Resolve a video id or any supported YouTube link to a catalog entry.
    pub fn resolve(&self, id_or_url: &str) -> Option<&EnrichedVideo> {
        self.catalog.get(id_or_url).or_else(|| {
            extract_video_id(id_or_url).and_then(|id| self.catalog.get(&id))
        })
    }

    /// Click a card. Locked visitors get the prompt, never the destination.
    pub fn click(&mut self, id_or_url: &str) -> ClickOutcome {
        let Some(video) = self.resolve(id_or_url) else {
            tracing::debug!(query = id_or_url, "Clicked video not in catalog");
            return ClickOutcome::NotFound;
        };

        if self.has_subscribed {
            return ClickOutcome::Open(video.url.clone());
        }

        let prompt = gate_prompt(video);
        self.selected = Some(video.id.clone());
        ClickOutcome::Gate(prompt)
    }

    /// Finish the gate flow on the visitor's word (nothing is verified).
    ///
    /// Returns the destinations to open in order: the subscribe page, then
    /// the video that opened the gate, if any.
    pub fn complete_gate(&mut self) -> Vec<String> {
        self.subscription.set_subscribed(true);
        self.has_subscribed = true;

        let mut destinations = vec![self.subscription.subscribe_url().to_string()];
        if let Some(video) = self.selected() {
            destinations.push(video.url.clone());
        }
        self.selected = None;

        tracing::info!("Gate completed, grid unlocked");
        destinations
    }

    /// Dismiss the prompt without subscribing.
    pub fn close_gate(&mut self) {
        self.selected = None;
    }
}

fn card_label(title: &str, locked: bool) -> String {
    if locked {
        format!("Subscribe to unlock: {title}")
    } else {
        format!("Watch: {title}")
    }
}

fn gate_prompt(video: &EnrichedVideo) -> GatePrompt {
    GatePrompt {
        video_id: video.id.clone(),
        video_title: video.title.clone(),
        thumbnail: video.thumbnail.clone(),
        headline: GATE_HEADLINE,
        description: GATE_DESCRIPTION,
        benefits: GATE_BENEFITS,
        subscribe_url: crate::subscription::subscribe_url(),
    }
}
