//! Pointer/touch normalization.
//!
//! Hosts deliver two input families: mouse-like pointer events and multi-touch
//! events. The [`Normalizer`] collapses both into one stream of
//! [`NormalizedSample`]s and decides which raw events belong to a gesture at all.
//!
//! # Rules
//!
//! - A session is bound to the input class that started it; events from the other
//!   class are ignored until release.
//! - Pointer events reporting a `touch` pointer type are dropped, since the same
//!   contact also arrives through the touch stream.
//! - An interaction that starts inside an interactive element (button, link, form
//!   control, explicit opt-out) is suppressed: nothing is forwarded until release.
//! - Touch input tracks only the first active contact. If that contact vanishes
//!   without an end phase, the session is finalized at its last known position.
//! - While the engine reports a transition lock, starts are rejected outright.

use crate::domain::{Millis, Point, Sample};
use serde::{Deserialize, Serialize};

/// Semantic role of an element in the hit-test ancestry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementRole {
    /// Plain, non-interactive content (the card surface itself).
    Surface,
    Button,
    Link,
    Input,
    TextArea,
    Select,
    /// An element carrying `role="button"` semantics.
    RoleButton,
    /// An element explicitly opted out of card gestures.
    OptOut,
}

impl ElementRole {
    #[must_use]
    pub const fn is_interactive(self) -> bool {
        !matches!(self, Self::Surface)
    }
}

/// Hit-test result for the element under a gesture start.
///
/// `ancestry` lists roles from the hit element outward to the gesture surface.
/// A start is suppressed if any of them is interactive.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InputTarget {
    #[serde(default)]
    pub ancestry: Vec<ElementRole>,
}

impl InputTarget {
    /// A target on the bare card surface.
    #[must_use]
    pub fn surface() -> Self {
        Self {
            ancestry: vec![ElementRole::Surface],
        }
    }

    /// A target nested inside an element with the given role.
    #[must_use]
    pub fn inside(role: ElementRole) -> Self {
        Self {
            ancestry: vec![ElementRole::Surface, role, ElementRole::Surface],
        }
    }

    #[must_use]
    pub fn within_interactive(&self) -> bool {
        self.ancestry.iter().any(|role| role.is_interactive())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerKind {
    Mouse,
    Pen,
    Touch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerPhase {
    Down,
    Move,
    Up,
    /// Pointer capture lost or the platform aborted the interaction.
    Cancel,
}

/// A mouse-like pointer event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub phase: PointerPhase,
    pub position: Point,
    pub at: Millis,
    /// Only consulted on `Down`.
    #[serde(default)]
    pub target: InputTarget,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TouchPhase {
    Start,
    Move,
    End,
    Cancel,
}

/// One contact point of a touch event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TouchPoint {
    pub id: u64,
    pub position: Point,
}

/// A multi-touch event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TouchEvent {
    pub phase: TouchPhase,
    /// Contacts still on the surface after this event.
    #[serde(default)]
    pub touches: Vec<TouchPoint>,
    /// Contacts that changed in this event (lifted ones for `End`).
    #[serde(default)]
    pub changed: Vec<TouchPoint>,
    pub at: Millis,
    /// Only consulted on `Start`.
    #[serde(default)]
    pub target: InputTarget,
}

/// Raw host input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RawInput {
    Pointer(PointerEvent),
    Touch(TouchEvent),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SamplePhase {
    Start,
    Move,
    End,
    Cancel,
}

/// A gesture sample in a single, input-agnostic shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedSample {
    pub phase: SamplePhase,
    pub position: Point,
    pub at: Millis,
}

impl NormalizedSample {
    #[must_use]
    pub const fn sample(&self) -> Sample {
        Sample::new(self.position, self.at)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InputClass {
    Pointer,
    Touch,
}

/// Per-session input filter.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    class: Option<InputClass>,
    suppressed: bool,
    tracked_contact: Option<u64>,
    last: Option<Sample>,
}

impl Normalizer {
    /// Returns `true` while a (possibly suppressed) session is bound.
    #[must_use]
    pub const fn is_bound(&self) -> bool {
        self.class.is_some()
    }

    /// Returns `true` if the bound session started on an interactive element.
    #[must_use]
    pub const fn is_suppressed(&self) -> bool {
        self.suppressed
    }

    /// Forgets the bound session without emitting anything.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Filters one raw event into at most one normalized sample.
    ///
    /// `locked` rejects session starts while a transition is in flight.
    pub fn normalize(&mut self, input: &RawInput, locked: bool) -> Option<NormalizedSample> {
        match input {
            RawInput::Pointer(event) => self.normalize_pointer(event, locked),
            RawInput::Touch(event) => self.normalize_touch(event, locked),
        }
    }

    fn normalize_pointer(&mut self, event: &PointerEvent, locked: bool) -> Option<NormalizedSample> {
        if event.kind == PointerKind::Touch {
            tracing::trace!("ignoring touch-typed pointer event");
            return None;
        }

        match event.phase {
            PointerPhase::Down => self.begin(InputClass::Pointer, event.position, event.at, &event.target, locked, None),
            PointerPhase::Move => self.track(InputClass::Pointer, event.position, event.at),
            PointerPhase::Up => self.finish(InputClass::Pointer, Some(event.position), event.at, SamplePhase::End),
            PointerPhase::Cancel => {
                self.finish(InputClass::Pointer, Some(event.position), event.at, SamplePhase::Cancel)
            }
        }
    }

    fn normalize_touch(&mut self, event: &TouchEvent, locked: bool) -> Option<NormalizedSample> {
        match event.phase {
            TouchPhase::Start => {
                let Some(first) = event.touches.first() else {
                    tracing::debug!("touch start without contacts");
                    return None;
                };
                self.begin(InputClass::Touch, first.position, event.at, &event.target, locked, Some(first.id))
            }
            TouchPhase::Move => {
                if self.class != Some(InputClass::Touch) {
                    return None;
                }
                match self.tracked_in(&event.touches) {
                    Some(point) => self.track(InputClass::Touch, point.position, event.at),
                    None => {
                        tracing::debug!("tracked contact vanished, finalizing at last sample");
                        self.finish(InputClass::Touch, None, event.at, SamplePhase::End)
                    }
                }
            }
            TouchPhase::End | TouchPhase::Cancel => {
                if self.class != Some(InputClass::Touch) {
                    return None;
                }
                if self.tracked_in(&event.touches).is_some() {
                    // A secondary finger lifted; the tracked contact is still down.
                    return None;
                }
                let phase = if event.phase == TouchPhase::End {
                    SamplePhase::End
                } else {
                    SamplePhase::Cancel
                };
                let position = self.tracked_in(&event.changed).map(|p| p.position);
                self.finish(InputClass::Touch, position, event.at, phase)
            }
        }
    }

    fn tracked_in<'a>(&self, points: &'a [TouchPoint]) -> Option<&'a TouchPoint> {
        let id = self.tracked_contact?;
        points.iter().find(|p| p.id == id)
    }

    fn begin(
        &mut self,
        class: InputClass,
        position: Point,
        at: Millis,
        target: &InputTarget,
        locked: bool,
        contact: Option<u64>,
    ) -> Option<NormalizedSample> {
        if self.class.is_some() {
            tracing::trace!(class = ?class, "session already bound, ignoring start");
            return None;
        }
        if locked {
            tracing::debug!(class = ?class, "transition in flight, rejecting gesture start");
            return None;
        }

        self.class = Some(class);
        self.tracked_contact = contact;
        self.suppressed = target.within_interactive();
        self.last = Some(Sample::new(position, at));

        if self.suppressed {
            tracing::debug!(class = ?class, "gesture started on interactive element, suppressing");
            return None;
        }

        Some(NormalizedSample {
            phase: SamplePhase::Start,
            position,
            at,
        })
    }

    fn track(&mut self, class: InputClass, position: Point, at: Millis) -> Option<NormalizedSample> {
        if self.class != Some(class) || self.suppressed {
            return None;
        }
        self.last = Some(Sample::new(position, at));
        Some(NormalizedSample {
            phase: SamplePhase::Move,
            position,
            at,
        })
    }

    fn finish(
        &mut self,
        class: InputClass,
        position: Option<Point>,
        at: Millis,
        phase: SamplePhase,
    ) -> Option<NormalizedSample> {
        if self.class != Some(class) {
            return None;
        }

        let suppressed = self.suppressed;
        let last = self.last;
        self.reset();

        if suppressed {
            return None;
        }

        let position = position.or_else(|| last.map(|s| s.position))?;
        Some(NormalizedSample { phase, position, at })
    }
}
