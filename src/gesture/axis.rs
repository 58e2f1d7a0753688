//! Axis resolution.
//!
//! A gesture is committed to exactly one axis the first time it leaves the
//! deadzone around its origin. Horizontal gestures are swipe candidates;
//! vertical gestures belong to scrolling and pull-to-reset.

use serde::{Deserialize, Serialize};

/// The committed axis of a gesture session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Classifies displacements against a square deadzone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisResolver {
    deadzone: f64,
}

impl AxisResolver {
    #[must_use]
    pub const fn new(deadzone: f64) -> Self {
        Self { deadzone }
    }

    /// Returns the axis for `delta`, or `None` while still inside the deadzone.
    ///
    /// Ties go to vertical: a gesture is horizontal only if `|dx| > |dy|`.
    ///
    /// ```
    /// use swipedeck::domain::Point;
    /// use swipedeck::gesture::{Axis, AxisResolver};
    ///
    /// let resolver = AxisResolver::new(6.0);
    /// assert_eq!(resolver.resolve(Point::new(6.0, 0.0)), None);
    /// assert_eq!(resolver.resolve(Point::new(-9.0, 4.0)), Some(Axis::Horizontal));
    /// assert_eq!(resolver.resolve(Point::new(8.0, 8.0)), Some(Axis::Vertical));
    /// ```
    #[must_use]
    pub fn resolve(&self, delta: crate::domain::Point) -> Option<Axis> {
        if delta.max_abs() <= self.deadzone {
            return None;
        }
        if delta.x.abs() > delta.y.abs() {
            Some(Axis::Horizontal)
        } else {
            Some(Axis::Vertical)
        }
    }
}
