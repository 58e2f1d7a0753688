//! Swipe decision policy.
//!
//! At release, a horizontal-axis gesture either commits (the card flies off and
//! the deck steps by one) or snaps back. Distance and velocity are each enough
//! to commit on their own; the direction always comes from displacement.

use super::session::SwipeSample;
use crate::deck::IndexChange;
use serde::{Deserialize, Serialize};

/// Direction a committed swipe moves the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwipeDirection {
    /// Leftward swipe: show the next card.
    Advance,
    /// Rightward swipe: show the previous card.
    Retreat,
}

impl SwipeDirection {
    /// Sign of the off-screen target on the x axis.
    #[must_use]
    pub const fn exit_sign(self) -> f64 {
        match self {
            Self::Advance => -1.0,
            Self::Retreat => 1.0,
        }
    }
}

impl From<SwipeDirection> for IndexChange {
    fn from(direction: SwipeDirection) -> Self {
        match direction {
            SwipeDirection::Advance => Self::Advance,
            SwipeDirection::Retreat => Self::Retreat,
        }
    }
}

/// Outcome of a release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDecision {
    Commit(SwipeDirection),
    SnapBack,
}

/// Commit thresholds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipePolicy {
    distance: f64,
    velocity: f64,
}

impl SwipePolicy {
    #[must_use]
    pub const fn new(distance: f64, velocity: f64) -> Self {
        Self { distance, velocity }
    }

    /// Classifies a horizontal release.
    ///
    /// `dx` is the final displacement from the origin; velocity comes from the
    /// last recorded horizontal move.
    ///
    /// ```
    /// use swipedeck::domain::{Point, Sample};
    /// use swipedeck::gesture::{SwipeDecision, SwipeDirection, SwipePolicy, SwipeSample};
    ///
    /// let policy = SwipePolicy::new(45.0, 0.45);
    /// let mut sample = SwipeSample::starting_at(Sample::new(Point::new(100.0, 0.0), 0));
    /// sample.record(Sample::new(Point::new(50.0, 0.0), 100));
    ///
    /// assert_eq!(
    ///     policy.decide(-50.0, &sample, 100.0),
    ///     SwipeDecision::Commit(SwipeDirection::Advance)
    /// );
    /// ```
    #[must_use]
    pub fn decide(&self, dx: f64, sample: &SwipeSample, origin_x: f64) -> SwipeDecision {
        let velocity = sample.velocity(origin_x);
        let far_enough = dx.abs() >= self.distance;
        let fast_enough = velocity.abs() > self.velocity;

        tracing::debug!(dx, velocity, far_enough, fast_enough, "swipe release evaluated");

        if !far_enough && !fast_enough {
            return SwipeDecision::SnapBack;
        }

        // Displacement decides direction; velocity is consulted only when the
        // card ended exactly where it started.
        let leftward = if dx == 0.0 { velocity < 0.0 } else { dx < 0.0 };

        if leftward {
            SwipeDecision::Commit(SwipeDirection::Advance)
        } else {
            SwipeDecision::Commit(SwipeDirection::Retreat)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Point, Sample};

    fn sample_moving(origin_x: f64, to_x: f64, elapsed: u64) -> SwipeSample {
        let mut sample = SwipeSample::starting_at(Sample::new(Point::new(origin_x, 0.0), 1_000));
        sample.record(Sample::new(Point::new(to_x, 0.0), 1_000 + elapsed));
        sample
    }

    #[test]
    fn distance_alone_commits() {
        let policy = SwipePolicy::new(45.0, 0.45);
        let slow = sample_moving(100.0, 145.0, 2_000);
        assert_eq!(policy.decide(45.0, &slow, 100.0), SwipeDecision::Commit(SwipeDirection::Retreat));
    }

    #[test]
    fn velocity_alone_commits() {
        let policy = SwipePolicy::new(45.0, 0.45);
        let flick = sample_moving(100.0, 80.0, 20);
        assert_eq!(policy.decide(-20.0, &flick, 100.0), SwipeDecision::Commit(SwipeDirection::Advance));
    }

    #[test]
    fn slow_short_drag_snaps_back() {
        let policy = SwipePolicy::new(45.0, 0.45);
        let drag = sample_moving(100.0, 70.0, 200);
        assert_eq!(policy.decide(-30.0, &drag, 100.0), SwipeDecision::SnapBack);
    }

    #[test]
    fn displacement_wins_over_velocity_sign() {
        let policy = SwipePolicy::new(45.0, 0.45);
        // Last recorded move was fast to the right, but the release landed left.
        let sample = sample_moving(100.0, 160.0, 10);
        assert_eq!(policy.decide(-50.0, &sample, 100.0), SwipeDecision::Commit(SwipeDirection::Advance));
    }

    #[test]
    fn direction_maps_to_index_change() {
        assert_eq!(IndexChange::from(SwipeDirection::Advance), IndexChange::Advance);
        assert_eq!(IndexChange::from(SwipeDirection::Retreat), IndexChange::Retreat);
        assert!(SwipeDirection::Advance.exit_sign() < 0.0);
    }
}
