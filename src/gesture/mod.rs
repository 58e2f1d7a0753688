//! Gesture recognition: from raw input to navigation intents.
//!
//! # Modules
//!
//! - [`normalizer`]: Pointer and touch events collapsed into one sample stream
//! - [`axis`]: Deadzone-gated, irrevocable axis commitment
//! - [`pull`]: Pull-to-reset detection and its refreshing state
//! - [`swipe`]: Commit/snap-back decision at release
//! - [`session`]: The single live session slot and its velocity record
//! - [`engine`]: Ties the above to the transition animator

pub mod axis;
pub mod engine;
pub mod normalizer;
pub mod pull;
pub mod session;
pub mod swipe;

pub use axis::{Axis, AxisResolver};
pub use engine::{EngineRequest, GestureEngine};
pub use normalizer::{
    ElementRole, InputTarget, NormalizedSample, Normalizer, PointerEvent, PointerKind, PointerPhase, RawInput,
    SamplePhase, TouchEvent, TouchPhase, TouchPoint,
};
pub use pull::{PullToReset, RefreshState};
pub use session::{GestureSession, SessionId, SwipeSample};
pub use swipe::{SwipeDecision, SwipeDirection, SwipePolicy};
