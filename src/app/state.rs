//! Application state management and view model computation.
//!
//! [`AppState`] is the single source of truth for the deck: the catalog and its
//! filters, the deck index, the study/quiz mode, and the gesture engine.
//!
//! # Architecture
//!
//! The gesture engine only *requests* changes. `AppState::apply_requests` is
//! where those requests meet the deck, so the [`DeckIndex`] stays the sole
//! mutator of the shown card regardless of whether a change came from a swipe,
//! a pull, or a navigation tap.
//!
//! # Example
//!
//! ```rust
//! use swipedeck::{app::AppState, deck::IndexChange, Card, Config};
//!
//! let cards = vec![
//!     Card::new("tree", "Tree Pose", &["Standing", "Balance"]),
//!     Card::new("crow", "Crow Pose", &["Arm Balance"]),
//! ];
//! let mut state = AppState::new(cards, &Config::default());
//! state.navigate(IndexChange::Advance);
//! assert_eq!(state.current_card().map(|c| c.id.as_str()), Some("crow"));
//! ```

use super::actions::Action;
use super::modes::{QuizKind, StudyMode};
use crate::animation::TransitionState;
use crate::deck::{Catalog, DeckIndex, IndexChange, ALL_CATEGORIES};
use crate::domain::Card;
use crate::gesture::{EngineRequest, GestureEngine};
use crate::ui::viewmodel::{format_counter, CardView, DeckViewModel, EmptyState, FilterChip};
use crate::Config;

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Cards and the active category filters.
    pub catalog: Catalog,

    /// Position within the filtered view. Only mutated through
    /// [`DeckIndex::apply`] and [`DeckIndex::set_len`].
    pub deck: DeckIndex,

    pub mode: StudyMode,

    /// Last quiz kind chosen; re-entering quiz mode restores it.
    pub quiz_kind: QuizKind,

    /// Gesture session, transition state machine and refresh state.
    pub engine: GestureEngine,

    /// Haptic pulse length forwarded to the host.
    pub haptic_ms: u64,

    /// Mirrors the engine's refreshing state for rendering.
    pub refreshing: bool,
}

impl AppState {
    /// Creates state positioned on the first card with no filters and study mode.
    #[must_use]
    pub fn new(cards: Vec<Card>, config: &Config) -> Self {
        let catalog = Catalog::new(cards);
        let deck = DeckIndex::new(catalog.filtered_len());
        Self {
            catalog,
            deck,
            mode: StudyMode::default(),
            quiz_kind: QuizKind::default(),
            engine: GestureEngine::new(config),
            haptic_ms: config.haptic_ms,
            refreshing: false,
        }
    }

    /// Number of cards the gesture engine may navigate.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.deck.len()
    }

    #[must_use]
    pub fn current_card(&self) -> Option<&Card> {
        if self.deck.is_empty() {
            return None;
        }
        self.catalog.filtered_card(self.deck.index())
    }

    /// The card after the current one, wrapping to the front.
    #[must_use]
    pub fn next_card(&self) -> Option<&Card> {
        self.deck.peek_next().and_then(|i| self.catalog.filtered_card(i))
    }

    #[must_use]
    pub fn transition_state(&self) -> TransitionState {
        self.engine.state()
    }

    /// Tap/button navigation.
    ///
    /// Rejected while a committed swipe is animating. Returns `true` if the
    /// shown card changed.
    pub fn navigate(&mut self, change: IndexChange) -> bool {
        if self.engine.is_locked() {
            tracing::debug!(change = ?change, state = %self.engine.state(), "navigation rejected, transition in flight");
            return false;
        }
        let changed = self.deck.apply(change);
        if changed {
            self.mode.reset_side_effects();
        }
        changed
    }

    /// Switches to quiz mode with `kind`, remembering it for [`Self::enter_quiz`].
    pub fn select_quiz(&mut self, kind: QuizKind) {
        self.quiz_kind = kind;
        self.mode.select_quiz(kind);
    }

    /// Enters quiz mode with the last chosen kind and the answer hidden.
    pub fn enter_quiz(&mut self) {
        self.mode.select_quiz(self.quiz_kind);
    }

    /// Carries out engine requests and converts the host-facing ones to actions.
    pub fn apply_requests(&mut self, requests: Vec<EngineRequest>) -> Vec<Action> {
        let mut actions = Vec::new();
        for request in requests {
            match request {
                EngineRequest::ChangeIndex(change) => {
                    self.deck.apply(change);
                }
                EngineRequest::ResetModeSideEffects => self.mode.reset_side_effects(),
                EngineRequest::Haptic => actions.push(Action::Haptic {
                    duration_ms: self.haptic_ms,
                }),
                EngineRequest::Schedule { task, delay_ms } => {
                    actions.push(Action::ScheduleTimer { task, delay_ms });
                }
                EngineRequest::RefreshingChanged(refreshing) => self.refreshing = refreshing,
            }
        }
        actions
    }

    /// Toggles a category filter.
    ///
    /// Every chip press, "All" included even with nothing active, returns the
    /// deck to its first card, hides the quiz answer and aborts the gesture in
    /// flight.
    pub fn toggle_filter(&mut self, category: &str) {
        let _span = tracing::debug_span!("toggle_filter", category).entered();

        self.catalog.toggle_filter(category);
        self.engine.cancel();
        self.deck.set_len(self.catalog.filtered_len());
        self.mode.reset_side_effects();
    }

    /// Computes the render-facing view model.
    #[must_use]
    pub fn compute_viewmodel(&self) -> DeckViewModel {
        let position = if self.deck.is_empty() { 0 } else { self.deck.index() + 1 };

        let mut filters = vec![FilterChip {
            label: ALL_CATEGORIES.to_string(),
            active: self.catalog.active_filters().is_empty(),
        }];
        filters.extend(self.catalog.category_options().into_iter().map(|label| FilterChip {
            active: self.catalog.active_filters().contains(&label),
            label,
        }));

        let empty_state = self.deck.is_empty().then(|| EmptyState {
            message: "No cards match the selected filters.".to_string(),
        });

        DeckViewModel {
            position_label: format_counter(position),
            total_label: format_counter(self.deck.len()),
            current: self.current_card().map(card_view),
            next: self.next_card().map(card_view),
            transform: self.engine.transform(),
            refreshing: self.refreshing,
            mode_label: self.mode.label(),
            revealed: self.mode.is_revealed(),
            filters,
            empty_state,
        }
    }
}

fn card_view(card: &Card) -> CardView {
    CardView {
        id: card.id.clone(),
        title: card.title.clone(),
        subtitle: card.subtitle.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn deck() -> Vec<Card> {
        vec![
            Card::new("mountain", "Mountain", &["Standing"]),
            Card::new("tree", "Tree", &["Standing", "Balance"]),
            Card::new("boat", "Boat", &["Core"]),
        ]
    }

    #[test]
    fn next_card_wraps() {
        let mut state = AppState::new(deck(), &Config::default());
        state.navigate(IndexChange::Retreat);
        assert_eq!(state.current_card().map(|c| c.id.as_str()), Some("boat"));
        assert_eq!(state.next_card().map(|c| c.id.as_str()), Some("mountain"));
    }

    #[test]
    fn navigation_hides_revealed_answer() {
        let mut state = AppState::new(deck(), &Config::default());
        state.select_quiz(QuizKind::Sanskrit);
        state.mode.reveal();
        assert!(state.navigate(IndexChange::Advance));
        assert!(!state.mode.is_revealed());
    }

    #[test]
    fn filter_change_resets_to_first_card() {
        let mut state = AppState::new(deck(), &Config::default());
        state.navigate(IndexChange::Advance);
        state.navigate(IndexChange::Advance);

        state.toggle_filter("Standing");
        assert_eq!(state.deck.index(), 0);
        assert_eq!(state.item_count(), 2);

        state.toggle_filter(ALL_CATEGORIES);
        assert_eq!(state.item_count(), 3);
    }

    #[test]
    fn all_without_active_filters_still_resets() {
        let mut state = AppState::new(deck(), &Config::default());
        state.select_quiz(QuizKind::Breath);
        state.navigate(IndexChange::Advance);
        state.navigate(IndexChange::Advance);
        state.mode.reveal();

        state.toggle_filter(ALL_CATEGORIES);
        assert_eq!(state.deck.index(), 0);
        assert_eq!(state.item_count(), 3);
        assert!(!state.mode.is_revealed());
    }

    #[test]
    fn viewmodel_labels_and_chips() {
        let mut state = AppState::new(deck(), &Config::default());
        state.toggle_filter("Core");
        let vm = state.compute_viewmodel();

        assert_eq!(vm.position_label, "01");
        assert_eq!(vm.total_label, "01");
        assert_eq!(
            vm.filters,
            vec![
                FilterChip { label: "All".into(), active: false },
                FilterChip { label: "Standing".into(), active: false },
                FilterChip { label: "Balance".into(), active: false },
                FilterChip { label: "Core".into(), active: true },
            ]
        );
        assert!(vm.empty_state.is_none());
    }

    #[test]
    fn empty_filtered_deck_shows_empty_state() {
        let mut state = AppState::new(vec![Card::new("a", "A", &[])], &Config::default());
        state.toggle_filter("Twist");
        let vm = state.compute_viewmodel();
        assert_eq!(vm.position_label, "00");
        assert!(vm.current.is_none());
        assert!(vm.empty_state.is_some());
    }
}
