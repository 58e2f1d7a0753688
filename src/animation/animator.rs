//! Transition state machine for the active card.
//!
//! The card offset moves through one explicit state at a time:
//!
//! ```text
//! Idle ──begin_drag──▶ Dragging ──settle_back──▶ SettlingBack ──finish_settle──▶ Idle
//!                         │    └──release_in_place──────────────────────────────▶ Idle
//!                         └──commit──▶ Committing ──finish_commit──▶ Idle
//! ```
//!
//! Every transition validates its precondition and returns
//! [`SwipeDeckError::InvalidTransition`] instead of silently entering an
//! impossible state. Only `Idle` accepts a new gesture.

use crate::domain::{Point, Result, SwipeDeckError};
use crate::gesture::SwipeDirection;
use crate::Config;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where the card is in its gesture/transition lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionState {
    /// No gesture and no animation; new gestures are accepted.
    Idle,
    /// The card follows the pointer.
    Dragging,
    /// Easing back to rest after a cancelled swipe.
    SettlingBack,
    /// Flying off-screen; the index changes when this completes.
    Committing(SwipeDirection),
}

impl TransitionState {
    #[must_use]
    pub const fn accepts_gesture_start(self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Transition lock: an index-changing animation is in flight.
    #[must_use]
    pub const fn is_locked(self) -> bool {
        matches!(self, Self::Committing(_))
    }
}

impl fmt::Display for TransitionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => f.write_str("idle"),
            Self::Dragging => f.write_str("dragging"),
            Self::SettlingBack => f.write_str("settling-back"),
            Self::Committing(SwipeDirection::Advance) => f.write_str("committing(advance)"),
            Self::Committing(SwipeDirection::Retreat) => f.write_str("committing(retreat)"),
        }
    }
}

/// How the host should move the card to its new offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    /// Track input directly, no transition.
    None,
    /// Ease over the given duration.
    Eased { duration_ms: u64 },
    /// Jump without animating.
    Instant,
}

/// Visual displacement of the active card.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DragOffset {
    pub x: f64,
    pub y: f64,
}

impl DragOffset {
    #[must_use]
    pub fn is_at_rest(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

/// Render-facing transform of the active card.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CardTransform {
    pub translate_x: f64,
    pub translate_y: f64,
    pub rotate_deg: f64,
    pub scale: f64,
    pub easing: Easing,
}

/// Styling constants for the animator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimatorTuning {
    pub vertical_damping: f64,
    pub offscreen_factor: f64,
    pub rotation_divisor: f64,
    pub drag_scale: f64,
    pub settle_ms: u64,
}

impl From<&Config> for AnimatorTuning {
    fn from(config: &Config) -> Self {
        Self {
            vertical_damping: config.vertical_damping,
            offscreen_factor: config.offscreen_factor,
            rotation_divisor: config.rotation_divisor,
            drag_scale: config.drag_scale,
            settle_ms: config.settle_ms,
        }
    }
}

/// Owns the transition state and the card offset.
#[derive(Debug, Clone)]
pub struct TransitionAnimator {
    state: TransitionState,
    offset: DragOffset,
    easing: Easing,
    tuning: AnimatorTuning,
}

impl TransitionAnimator {
    #[must_use]
    pub const fn new(tuning: AnimatorTuning) -> Self {
        Self {
            state: TransitionState::Idle,
            offset: DragOffset { x: 0.0, y: 0.0 },
            easing: Easing::Instant,
            tuning,
        }
    }

    #[must_use]
    pub const fn state(&self) -> TransitionState {
        self.state
    }

    #[must_use]
    pub const fn offset(&self) -> DragOffset {
        self.offset
    }

    /// `Idle → Dragging`.
    ///
    /// # Errors
    ///
    /// Returns [`SwipeDeckError::InvalidTransition`] unless idle.
    pub fn begin_drag(&mut self) -> Result<()> {
        self.require("begin drag", matches!(self.state, TransitionState::Idle))?;
        self.state = TransitionState::Dragging;
        self.offset = DragOffset::default();
        self.easing = Easing::None;
        Ok(())
    }

    /// Follows a horizontal-axis displacement: x 1:1, y damped.
    ///
    /// # Errors
    ///
    /// Returns [`SwipeDeckError::InvalidTransition`] unless dragging.
    pub fn follow(&mut self, delta: Point) -> Result<()> {
        self.require("follow input", matches!(self.state, TransitionState::Dragging))?;
        self.offset = DragOffset {
            x: delta.x,
            y: delta.y * self.tuning.vertical_damping,
        };
        Ok(())
    }

    /// `Dragging → Idle` for a release that never moved the card.
    ///
    /// # Errors
    ///
    /// Returns [`SwipeDeckError::InvalidTransition`] unless dragging at rest.
    pub fn release_in_place(&mut self) -> Result<()> {
        self.require(
            "release in place",
            matches!(self.state, TransitionState::Dragging) && self.offset.is_at_rest(),
        )?;
        self.state = TransitionState::Idle;
        self.easing = Easing::Instant;
        Ok(())
    }

    /// `Dragging → SettlingBack`, easing the card to rest.
    ///
    /// # Errors
    ///
    /// Returns [`SwipeDeckError::InvalidTransition`] unless dragging.
    pub fn settle_back(&mut self) -> Result<()> {
        self.require("settle back", matches!(self.state, TransitionState::Dragging))?;
        self.state = TransitionState::SettlingBack;
        self.offset = DragOffset::default();
        self.easing = Easing::Eased {
            duration_ms: self.tuning.settle_ms,
        };
        Ok(())
    }

    /// `Dragging → Committing`, easing the card fully off-screen.
    ///
    /// The target distance scales with `viewport_width` so the card leaves the
    /// frame on any screen size.
    ///
    /// # Errors
    ///
    /// Returns [`SwipeDeckError::InvalidTransition`] unless dragging.
    pub fn commit(&mut self, direction: SwipeDirection, viewport_width: f64) -> Result<()> {
        self.require("commit", matches!(self.state, TransitionState::Dragging))?;
        self.state = TransitionState::Committing(direction);
        self.offset = DragOffset {
            x: direction.exit_sign() * viewport_width * self.tuning.offscreen_factor,
            y: 0.0,
        };
        self.easing = Easing::Eased {
            duration_ms: self.tuning.settle_ms,
        };
        Ok(())
    }

    /// `SettlingBack → Idle`.
    ///
    /// # Errors
    ///
    /// Returns [`SwipeDeckError::InvalidTransition`] unless settling back.
    pub fn finish_settle(&mut self) -> Result<()> {
        self.require("finish settle", matches!(self.state, TransitionState::SettlingBack))?;
        self.state = TransitionState::Idle;
        Ok(())
    }

    /// `Committing → Idle`, snapping the offset to rest without easing.
    ///
    /// Returns the committed direction so the caller can apply the index change.
    ///
    /// # Errors
    ///
    /// Returns [`SwipeDeckError::InvalidTransition`] unless committing.
    pub fn finish_commit(&mut self) -> Result<SwipeDirection> {
        let TransitionState::Committing(direction) = self.state else {
            return Err(self.invalid("finish commit"));
        };
        self.state = TransitionState::Idle;
        self.offset = DragOffset::default();
        self.easing = Easing::Instant;
        Ok(direction)
    }

    /// Drops whatever is in flight and returns to idle at rest.
    pub fn abort(&mut self) {
        if self.state != TransitionState::Idle {
            tracing::debug!(state = %self.state, "aborting transition");
        }
        self.state = TransitionState::Idle;
        self.offset = DragOffset::default();
        self.easing = Easing::Instant;
    }

    /// Current transform for rendering.
    #[must_use]
    pub fn transform(&self) -> CardTransform {
        let dragging = matches!(self.state, TransitionState::Dragging);
        CardTransform {
            translate_x: self.offset.x,
            translate_y: self.offset.y,
            rotate_deg: self.offset.x / self.tuning.rotation_divisor,
            scale: if dragging { self.tuning.drag_scale } else { 1.0 },
            easing: self.easing,
        }
    }

    fn require(&self, op: &'static str, allowed: bool) -> Result<()> {
        if allowed {
            Ok(())
        } else {
            Err(self.invalid(op))
        }
    }

    fn invalid(&self, op: &'static str) -> SwipeDeckError {
        SwipeDeckError::InvalidTransition {
            from: self.state.to_string(),
            op,
        }
    }
}
