//! Pull-to-reset detection.
//!
//! A slow, mostly vertical downward pull returns the deck to its first card.
//! The detector fires at most once per session, and never while a previous reset
//! is still showing its "refreshing" state.

use crate::domain::Point;

/// Trigger thresholds for pull-to-reset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PullToReset {
    max_dx: f64,
    min_dy: f64,
}

impl PullToReset {
    #[must_use]
    pub const fn new(max_dx: f64, min_dy: f64) -> Self {
        Self { max_dx, min_dy }
    }

    /// Returns `true` when a vertical-axis displacement qualifies as a reset pull.
    ///
    /// ```
    /// use swipedeck::domain::Point;
    /// use swipedeck::gesture::PullToReset;
    ///
    /// let pull = PullToReset::new(16.0, 40.0);
    /// assert!(pull.should_fire(Point::new(2.0, 45.0), true, false));
    /// assert!(!pull.should_fire(Point::new(2.0, 45.0), false, false));
    /// assert!(!pull.should_fire(Point::new(2.0, -45.0), true, false));
    /// ```
    #[must_use]
    pub fn should_fire(&self, delta: Point, eligible: bool, refreshing: bool) -> bool {
        eligible && !refreshing && delta.x.abs() < self.max_dx && delta.y > self.min_dy
    }
}

/// The self-clearing "refreshing" display state entered after a reset.
///
/// Each activation gets a new generation; a cool-down only clears the
/// generation that scheduled it, so a late timer from an older reset is inert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RefreshState {
    generation: u64,
    active: bool,
}

impl RefreshState {
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Enters the refreshing state and returns its generation.
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.active = true;
        self.generation
    }

    /// Leaves the refreshing state if `generation` is the current one.
    pub fn clear(&mut self, generation: u64) -> bool {
        if self.active && self.generation == generation {
            self.active = false;
            true
        } else {
            false
        }
    }
}
