//! View model types representing renderable deck state.
//!
//! View models are computed from `AppState` on demand and contain only
//! display-ready data: formatted labels, the card transform, and which filter
//! chips are active. No rendering happens in this crate; hosts draw from these.
//!
//! # Example
//!
//! ```rust
//! use swipedeck::{initialize, Card, Config};
//!
//! let state = initialize(&Config::default(), vec![Card::new("tree", "Tree Pose", &["Standing"])]);
//! let vm = state.compute_viewmodel();
//! assert_eq!(vm.position_label, "01");
//! assert_eq!(vm.total_label, "01");
//! ```

use crate::animation::CardTransform;
use serde::Serialize;

/// Complete deck view model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeckViewModel {
    /// One-based position of the current card, zero-padded to two digits
    /// (`"00"` for an empty deck).
    pub position_label: String,

    /// Filtered deck length, zero-padded to two digits.
    pub total_label: String,

    /// The card under the user's finger.
    pub current: Option<CardView>,

    /// The card revealed underneath while dragging.
    pub next: Option<CardView>,

    /// Offset, rotation, scale and easing of the current card.
    pub transform: CardTransform,

    /// Pull-to-reset feedback is showing.
    pub refreshing: bool,

    pub mode_label: &'static str,

    /// Quiz answer visible. Always `false` in study mode.
    pub revealed: bool,

    /// Filter bar contents, "All" first.
    pub filters: Vec<FilterChip>,

    /// Shown instead of a card when the filtered deck is empty.
    pub empty_state: Option<EmptyState>,
}

/// Display data for one card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardView {
    pub id: String,
    pub title: String,
    pub subtitle: Option<String>,
}

/// One entry in the category filter bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterChip {
    pub label: String,
    pub active: bool,
}

/// Message for an empty filtered deck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmptyState {
    pub message: String,
}

/// Formats a count the way the position indicator shows it.
#[must_use]
pub fn format_counter(value: usize) -> String {
    format!("{value:02}")
}
