//! Event handling and state transition logic.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the host (raw input, timers, controls)
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. Actions are collected and returned for execution
//!
//! # Event Types
//!
//! - **Gesture**: `Input`, `TimerFired`
//! - **Navigation**: `Previous`, `Next`
//! - **Filtering**: `ToggleFilter`
//! - **Layout**: `ViewportResized`
//! - **Mode**: `EnterStudy`, `EnterQuiz`, `SelectQuizKind`, `RevealAnswer`
//!
//! # Example
//!
//! ```rust
//! use swipedeck::app::{handle_event, AppState, Event};
//! use swipedeck::{Card, Config};
//!
//! let mut state = AppState::new(vec![Card::new("a", "A", &[]), Card::new("b", "B", &[])], &Config::default());
//! let (render, actions) = handle_event(&mut state, &Event::Next)?;
//! assert!(render);
//! assert!(actions.is_empty());
//! # Ok::<(), swipedeck::SwipeDeckError>(())
//! ```

use super::modes::{QuizKind, StudyMode};
use crate::animation::ScheduledTask;
use crate::app::{Action, AppState};
use crate::deck::IndexChange;
use crate::domain::error::{Result, SwipeDeckError};
use crate::gesture::RawInput;
use serde::{Deserialize, Serialize};

/// Everything the host can deliver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Event {
    /// Raw pointer or touch input over the card surface.
    Input(RawInput),

    /// A task from [`Action::ScheduleTimer`] came due.
    TimerFired(ScheduledTask),

    /// "Previous" control.
    Previous,
    /// "Next" control.
    Next,

    /// Filter chip pressed. `"All"` clears every filter.
    ToggleFilter(String),

    /// The card viewport changed width; commit targets scale with it.
    ViewportResized { width: f64 },

    EnterStudy,
    /// Enters quiz mode with the last selected kind.
    EnterQuiz,
    /// Enters quiz mode, or switches quiz kind, with the answer hidden.
    SelectQuizKind(QuizKind),
    RevealAnswer,
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// The returned flag says whether the host should re-render.
///
/// # Errors
///
/// Returns [`SwipeDeckError::Config`] for a non-positive or non-finite viewport
/// width. Gesture anomalies never surface here; they degrade to a reset.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::Input(input) => {
            let before = state.engine.transform();
            let requests = state.engine.handle_input(input, state.item_count());
            let should_render = !requests.is_empty() || state.engine.transform() != before;
            let actions = state.apply_requests(requests);
            Ok((should_render, actions))
        }
        Event::TimerFired(task) => {
            let requests = state.engine.handle_timer(task, state.item_count());
            let actions = state.apply_requests(requests);
            Ok((true, actions))
        }
        Event::Previous => Ok((state.navigate(IndexChange::Retreat), vec![])),
        Event::Next => Ok((state.navigate(IndexChange::Advance), vec![])),
        Event::ToggleFilter(category) => {
            state.toggle_filter(category);
            Ok((true, vec![]))
        }
        Event::ViewportResized { width } => {
            if !width.is_finite() || *width <= 0.0 {
                return Err(SwipeDeckError::Config(format!("invalid viewport width: {width}")));
            }
            state.engine.set_viewport_width(*width);
            Ok((false, vec![]))
        }
        Event::EnterStudy => {
            let changed = state.mode != StudyMode::Study;
            state.mode = StudyMode::Study;
            Ok((changed, vec![]))
        }
        Event::EnterQuiz => {
            state.enter_quiz();
            Ok((true, vec![]))
        }
        Event::SelectQuizKind(kind) => {
            state.select_quiz(*kind);
            Ok((true, vec![]))
        }
        Event::RevealAnswer => Ok((state.mode.reveal(), vec![])),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Card, Config};

    fn state() -> AppState {
        AppState::new(
            vec![Card::new("a", "A", &["Core"]), Card::new("b", "B", &["Twist"])],
            &Config::default(),
        )
    }

    #[test]
    fn rejects_bad_viewport_width() {
        let mut state = state();
        assert!(handle_event(&mut state, &Event::ViewportResized { width: 0.0 }).is_err());
        assert!(handle_event(&mut state, &Event::ViewportResized { width: f64::NAN }).is_err());
        assert!(handle_event(&mut state, &Event::ViewportResized { width: 360.0 }).is_ok());
        assert_eq!(state.engine.viewport_width(), 360.0);
    }

    #[test]
    fn reveal_only_in_quiz_mode() {
        let mut state = state();
        assert!(!handle_event(&mut state, &Event::RevealAnswer).unwrap().0);

        handle_event(&mut state, &Event::SelectQuizKind(QuizKind::Cues)).unwrap();
        assert!(handle_event(&mut state, &Event::RevealAnswer).unwrap().0);
        assert!(state.mode.is_revealed());

        handle_event(&mut state, &Event::EnterStudy).unwrap();
        assert_eq!(state.mode, StudyMode::Study);
    }

    #[test]
    fn quiz_reentry_restores_last_kind() {
        let mut state = state();
        handle_event(&mut state, &Event::EnterQuiz).unwrap();
        assert_eq!(
            state.mode,
            StudyMode::Quiz {
                kind: QuizKind::Sanskrit,
                revealed: false
            }
        );

        handle_event(&mut state, &Event::SelectQuizKind(QuizKind::Breath)).unwrap();
        handle_event(&mut state, &Event::RevealAnswer).unwrap();
        handle_event(&mut state, &Event::EnterStudy).unwrap();
        handle_event(&mut state, &Event::EnterQuiz).unwrap();
        assert_eq!(
            state.mode,
            StudyMode::Quiz {
                kind: QuizKind::Breath,
                revealed: false
            }
        );
    }

    #[test]
    fn events_deserialize_from_json() {
        let event: Event = serde_json::from_str(r#"{"toggle_filter":"Core"}"#).unwrap();
        assert_eq!(event, Event::ToggleFilter("Core".into()));

        let event: Event = serde_json::from_str(r#""next""#).unwrap();
        assert_eq!(event, Event::Next);
    }
}
