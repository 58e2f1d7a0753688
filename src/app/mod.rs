//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the host runtime and the gesture/deck layers.
//!
//! # Architecture
//!
//! ```text
//! Host input → Events → Event Handler → State Mutations → Actions → Host
//!                   ↑                                        │
//!                   └──────────── TimerFired ◀───────────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: Study/quiz mode state
//! - [`state`]: Central application state container and view model computation

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{QuizKind, StudyMode};
pub use state::AppState;
