//! Card domain model.
//!
//! A card is one study item in the deck. The gesture engine never looks at card
//! contents; only the catalog (for category filtering) and the view model (for
//! titles) do. Content authoring and enrichment live outside this crate.

use serde::{Deserialize, Serialize};

/// A single study item.
///
/// # Fields
///
/// - `id`: Stable identifier, unique within a deck
/// - `title`: Primary display name
/// - `subtitle`: Optional secondary name (e.g. a Sanskrit name in a pose deck)
/// - `categories`: Category labels used by the filter bar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub categories: Vec<String>,
}

impl Card {
    /// Creates a card with no subtitle.
    ///
    /// # Examples
    ///
    /// ```
    /// use swipedeck::Card;
    ///
    /// let card = Card::new("tree", "Tree Pose", &["Standing", "Balance"]);
    /// assert_eq!(card.categories.len(), 2);
    /// assert!(card.subtitle.is_none());
    /// ```
    #[must_use]
    pub fn new(id: &str, title: &str, categories: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            subtitle: None,
            categories: categories.iter().map(|c| (*c).to_string()).collect(),
        }
    }

    /// Creates an uncategorized stand-in card numbered from 1.
    ///
    /// Used by the replay tool when a trace only specifies a deck size.
    #[must_use]
    pub fn placeholder(position: usize) -> Self {
        let number = position + 1;
        Self {
            id: format!("card-{number:02}"),
            title: format!("Card {number}"),
            subtitle: None,
            categories: Vec::new(),
        }
    }

    /// Returns `true` if the card carries any of the given categories.
    #[must_use]
    pub fn matches_any(&self, categories: &[String]) -> bool {
        self.categories.iter().any(|c| categories.contains(c))
    }
}
