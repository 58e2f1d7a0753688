//! Card catalog with category filtering.
//!
//! The catalog holds the full card list and the active category filters. The
//! filtered view is what the deck index controller navigates; its length is the
//! only thing the gesture engine ever reads.

use crate::domain::Card;
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// Pseudo-category that clears every filter when toggled.
pub const ALL_CATEGORIES: &str = "All";

/// Preferred display order for well-known categories.
///
/// Categories not listed here sort after these, alphabetically.
pub const CATEGORY_ORDER: [&str; 12] = [
    "Standing",
    "Seated",
    "Balance",
    "Twist",
    "Inversion",
    "Backbend",
    "Forward Fold",
    "Arm Balance",
    "Hip Opener",
    "Core",
    "Restorative",
    "Warm-up",
];

/// Full card list plus the active filter set.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    cards: Vec<Card>,
    active_filters: Vec<String>,
    filtered: Vec<usize>,
}

impl Catalog {
    /// Creates a catalog with no active filters.
    #[must_use]
    pub fn new(cards: Vec<Card>) -> Self {
        let mut catalog = Self {
            cards,
            active_filters: Vec::new(),
            filtered: Vec::new(),
        };
        catalog.apply_filters();
        catalog
    }

    /// Number of cards in the filtered view.
    #[must_use]
    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    /// Card at `position` within the filtered view.
    #[must_use]
    pub fn filtered_card(&self, position: usize) -> Option<&Card> {
        self.filtered.get(position).and_then(|&i| self.cards.get(i))
    }

    #[must_use]
    pub fn active_filters(&self) -> &[String] {
        &self.active_filters
    }

    /// Unique categories across all cards, in display order.
    ///
    /// # Examples
    ///
    /// ```
    /// use swipedeck::{Card, deck::Catalog};
    ///
    /// let catalog = Catalog::new(vec![
    ///     Card::new("a", "A", &["Core", "Aerial"]),
    ///     Card::new("b", "B", &["Standing"]),
    /// ]);
    /// assert_eq!(catalog.category_options(), vec!["Standing", "Core", "Aerial"]);
    /// ```
    #[must_use]
    pub fn category_options(&self) -> Vec<String> {
        let unique: BTreeSet<&str> = self
            .cards
            .iter()
            .flat_map(|card| card.categories.iter().map(String::as_str))
            .collect();

        let mut options: Vec<String> = unique.into_iter().map(String::from).collect();
        options.sort_by(|a, b| compare_categories(a, b));
        options
    }

    /// Toggles a category filter. Toggling [`ALL_CATEGORIES`] clears all filters.
    pub fn toggle_filter(&mut self, category: &str) {
        if category == ALL_CATEGORIES {
            self.active_filters.clear();
        } else if let Some(pos) = self.active_filters.iter().position(|c| c == category) {
            self.active_filters.remove(pos);
        } else {
            self.active_filters.push(category.to_string());
        }
        self.apply_filters();
    }

    fn apply_filters(&mut self) {
        let _span = tracing::debug_span!(
            "apply_filters",
            total_cards = self.cards.len(),
            active_filters = self.active_filters.len()
        )
        .entered();

        self.filtered = self
            .cards
            .iter()
            .enumerate()
            .filter(|(_, card)| self.active_filters.is_empty() || card.matches_any(&self.active_filters))
            .map(|(i, _)| i)
            .collect();

        tracing::debug!(filtered_count = self.filtered.len(), "category filter applied");
    }
}

fn compare_categories(a: &str, b: &str) -> Ordering {
    let rank = |c: &str| CATEGORY_ORDER.iter().position(|known| *known == c);
    match (rank(a), rank(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_catalog() -> Catalog {
        Catalog::new(vec![
            Card::new("mountain", "Mountain", &["Standing"]),
            Card::new("tree", "Tree", &["Standing", "Balance"]),
            Card::new("staff", "Staff", &["Seated"]),
            Card::new("boat", "Boat", &["Core", "Seated"]),
            Card::new("lotus", "Lotus", &["Meditation"]),
        ])
    }

    #[test]
    fn no_filters_shows_everything() {
        let catalog = sample_catalog();
        assert_eq!(catalog.filtered_len(), 5);
        assert_eq!(catalog.filtered_card(4).map(|c| c.id.as_str()), Some("lotus"));
    }

    #[test]
    fn filters_match_any_active_category() {
        let mut catalog = sample_catalog();
        catalog.toggle_filter("Seated");
        assert_eq!(catalog.filtered_len(), 2);

        catalog.toggle_filter("Balance");
        let ids: Vec<&str> = (0..catalog.filtered_len())
            .filter_map(|i| catalog.filtered_card(i))
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(ids, vec!["tree", "staff", "boat"]);
    }

    #[test]
    fn toggling_twice_removes_filter() {
        let mut catalog = sample_catalog();
        catalog.toggle_filter("Core");
        catalog.toggle_filter("Core");
        assert!(catalog.active_filters().is_empty());
        assert_eq!(catalog.filtered_len(), 5);
    }

    #[test]
    fn all_clears_filters() {
        let mut catalog = sample_catalog();
        catalog.toggle_filter(ALL_CATEGORIES);
        assert_eq!(catalog.filtered_len(), 5);
        catalog.toggle_filter("Standing");
        catalog.toggle_filter("Core");
        catalog.toggle_filter(ALL_CATEGORIES);
        assert!(catalog.active_filters().is_empty());
        assert_eq!(catalog.filtered_len(), 5);
    }

    #[test]
    fn unknown_filter_yields_empty_view() {
        let mut catalog = sample_catalog();
        catalog.toggle_filter("Aerial");
        assert_eq!(catalog.filtered_len(), 0);
        assert!(catalog.filtered_card(0).is_none());
    }

    #[test]
    fn category_options_follow_preferred_order() {
        let catalog = sample_catalog();
        assert_eq!(
            catalog.category_options(),
            vec!["Standing", "Seated", "Balance", "Core", "Meditation"]
        );
    }
}
