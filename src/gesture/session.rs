//! The single live gesture session and its velocity record.
//!
//! Exactly one [`GestureSession`] slot exists per engine. It is overwritten in
//! place when a new interaction starts and neutralized on release, cancellation,
//! or when a transition begins; it is never reconstructed per event.

use super::axis::{Axis, AxisResolver};
use crate::domain::{Millis, Point, Sample};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Monotonic identifier of a gesture session generation.
///
/// Scheduled tasks carry the id of the session that created them; a task whose
/// id no longer matches the engine's current generation is inert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct SessionId(pub u64);

impl SessionId {
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// State of one continuous pointer/touch interaction.
#[derive(Debug, Clone, PartialEq)]
pub struct GestureSession {
    pub id: SessionId,
    pub origin: Point,
    pub last: Sample,
    pub start_time: Millis,
    pub axis: Option<Axis>,
    pub active: bool,
    /// Cleared once pull-to-reset fires so it cannot repeat within the session.
    pub pull_eligible: bool,
}

impl Default for GestureSession {
    fn default() -> Self {
        Self {
            id: SessionId::default(),
            origin: Point::ZERO,
            last: Sample::default(),
            start_time: 0,
            axis: None,
            active: false,
            pull_eligible: false,
        }
    }
}

impl GestureSession {
    /// Overwrites the slot with a fresh session starting at `sample`.
    pub fn restart(&mut self, id: SessionId, sample: Sample) {
        self.id = id;
        self.origin = sample.position;
        self.last = sample;
        self.start_time = sample.at;
        self.axis = None;
        self.active = true;
        self.pull_eligible = true;
    }

    /// Returns the slot to neutral, keeping the id for stale-task checks.
    pub fn clear(&mut self) {
        self.origin = Point::ZERO;
        self.last = Sample::default();
        self.start_time = 0;
        self.axis = None;
        self.active = false;
        self.pull_eligible = false;
    }

    /// Displacement of `position` from the session origin.
    #[must_use]
    pub fn delta(&self, position: Point) -> Point {
        position.delta_from(self.origin)
    }

    /// Locks the axis on first exit from the deadzone; later calls return the lock.
    pub fn observe_axis(&mut self, resolver: &AxisResolver, delta: Point) -> Option<Axis> {
        if self.axis.is_none() {
            self.axis = resolver.resolve(delta);
            if let Some(axis) = self.axis {
                tracing::debug!(session = %self.id, axis = ?axis, dx = delta.x, dy = delta.y, "axis locked");
            }
        }
        self.axis
    }
}

/// Velocity record for horizontal moves, read only at release.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SwipeSample {
    pub start_time: Millis,
    pub last_x: f64,
    pub last_time: Millis,
}

impl SwipeSample {
    #[must_use]
    pub const fn starting_at(sample: Sample) -> Self {
        Self {
            start_time: sample.at,
            last_x: sample.position.x,
            last_time: sample.at,
        }
    }

    pub fn record(&mut self, sample: Sample) {
        self.last_x = sample.position.x;
        self.last_time = sample.at;
    }

    /// Horizontal velocity in units per millisecond relative to `origin_x`.
    ///
    /// Elapsed time is floored at one millisecond.
    #[must_use]
    pub fn velocity(&self, origin_x: f64) -> f64 {
        let elapsed = self.last_time.saturating_sub(self.start_time).max(1);
        #[allow(clippy::cast_precision_loss)]
        let elapsed = elapsed as f64;
        (self.last_x - origin_x) / elapsed
    }
}
