//! Study and quiz mode state.
//!
//! The deck can be browsed plainly or with an overlaid quiz prompt. In quiz mode
//! the answer starts hidden; revealing it is per card, so every index change
//! hides it again (the "mode side-effect reset").
//!
//! # Example
//!
//! ```rust
//! use swipedeck::app::modes::{QuizKind, StudyMode};
//!
//! let mut mode = StudyMode::Quiz { kind: QuizKind::Sanskrit, revealed: false };
//! mode.reveal();
//! assert!(mode.is_revealed());
//! mode.reset_side_effects();
//! assert!(!mode.is_revealed());
//! ```

use serde::{Deserialize, Serialize};

/// What the quiz asks about the current card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuizKind {
    /// Name the card from its subtitle, or the other way round.
    #[default]
    Sanskrit,
    /// Recall the breathing pattern.
    Breath,
    /// Recall the alignment cues.
    Cues,
}

/// Top-level presentation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StudyMode {
    /// Plain browsing; nothing is hidden.
    #[default]
    Study,
    /// Quiz overlay with a per-card reveal flag.
    Quiz { kind: QuizKind, revealed: bool },
}

impl StudyMode {
    #[must_use]
    pub const fn is_revealed(&self) -> bool {
        matches!(self, Self::Quiz { revealed: true, .. })
    }

    /// Reveals the answer. Ignored outside quiz mode.
    pub fn reveal(&mut self) -> bool {
        match self {
            Self::Quiz { revealed, .. } if !*revealed => {
                *revealed = true;
                true
            }
            _ => false,
        }
    }

    /// Clears per-card state after the shown card changes.
    pub fn reset_side_effects(&mut self) {
        if let Self::Quiz { revealed, .. } = self {
            *revealed = false;
        }
    }

    /// Switches to quiz mode, or changes the quiz kind, with the answer hidden.
    pub fn select_quiz(&mut self, kind: QuizKind) {
        *self = Self::Quiz { kind, revealed: false };
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Study => "Study",
            Self::Quiz { kind: QuizKind::Sanskrit, .. } => "Quiz: Sanskrit",
            Self::Quiz { kind: QuizKind::Breath, .. } => "Quiz: Breath",
            Self::Quiz { kind: QuizKind::Cues, .. } => "Quiz: Cues",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_is_ignored_in_study_mode() {
        let mut mode = StudyMode::Study;
        assert!(!mode.reveal());
        assert!(!mode.is_revealed());
    }

    #[test]
    fn selecting_a_kind_hides_the_answer() {
        let mut mode = StudyMode::Quiz {
            kind: QuizKind::Breath,
            revealed: true,
        };
        mode.select_quiz(QuizKind::Cues);
        assert_eq!(
            mode,
            StudyMode::Quiz {
                kind: QuizKind::Cues,
                revealed: false
            }
        );
        assert_eq!(mode.label(), "Quiz: Cues");
    }
}
