//! Transition sequencing for the active card.
//!
//! # Modules
//!
//! - [`animator`]: Explicit `idle → dragging → settling-back | committing → idle`
//!   state machine owning the card offset
//! - [`scheduler`]: Session-keyed delayed tasks, a virtual-time queue, and clocks

pub mod animator;
pub mod scheduler;

pub use animator::{AnimatorTuning, CardTransform, DragOffset, Easing, TransitionAnimator, TransitionState};
pub use scheduler::{Clock, ManualClock, ScheduledTask, SystemClock, TaskKind, TimerQueue};
