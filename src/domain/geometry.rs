//! Positions and timestamped samples shared by every layer.
//!
//! Coordinates are logical units (typically CSS pixels); timestamps are
//! milliseconds from an arbitrary host epoch. The engine only ever subtracts
//! timestamps, so the epoch does not matter as long as it is consistent.

use serde::{Deserialize, Serialize};

/// Milliseconds on the host clock.
pub type Millis = u64;

/// A 2D position or displacement in logical units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// The zero point.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Displacement of `self` relative to `origin`.
    ///
    /// ```
    /// use swipedeck::domain::Point;
    ///
    /// let delta = Point::new(40.0, 110.0).delta_from(Point::new(100.0, 100.0));
    /// assert_eq!(delta, Point::new(-60.0, 10.0));
    /// ```
    #[must_use]
    pub fn delta_from(self, origin: Self) -> Self {
        Self {
            x: self.x - origin.x,
            y: self.y - origin.y,
        }
    }

    /// Largest absolute component (Chebyshev length).
    #[must_use]
    pub fn max_abs(self) -> f64 {
        self.x.abs().max(self.y.abs())
    }

    #[must_use]
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

/// A position observed at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Sample {
    pub position: Point,
    pub at: Millis,
}

impl Sample {
    #[must_use]
    pub const fn new(position: Point, at: Millis) -> Self {
        Self { position, at }
    }
}
