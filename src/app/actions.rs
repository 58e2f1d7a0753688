//! Actions representing side effects to be executed by the host runtime.
//!
//! The event handler never sleeps and never touches hardware. Anything that has
//! to happen later, or outside the process, is returned as an [`Action`] and the
//! host executes it.
//!
//! # Example
//!
//! ```rust
//! use swipedeck::animation::{ScheduledTask, TaskKind};
//! use swipedeck::app::Action;
//! use swipedeck::gesture::SessionId;
//!
//! let actions = vec![
//!     Action::ScheduleTimer {
//!         task: ScheduledTask { session: SessionId(3), kind: TaskKind::CommitComplete },
//!         delay_ms: 170,
//!     },
//!     Action::Haptic { duration_ms: 12 },
//! ];
//! assert_eq!(actions.len(), 2);
//! ```

use crate::animation::ScheduledTask;
use serde::Serialize;

/// Commands for the host runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Deliver `Event::TimerFired(task)` back after `delay_ms`.
    ///
    /// Tasks from superseded sessions are discarded on delivery, so hosts do
    /// not need to cancel timers.
    ScheduleTimer { task: ScheduledTask, delay_ms: u64 },

    /// Pulse the vibration motor. Best-effort; failures are ignored.
    Haptic { duration_ms: u64 },
}
