//! Deterministic replay of recorded input traces.
//!
//! A trace is a JSON document of timestamped [`Event`]s. Replay drives
//! [`handle_event`] in virtual time: a [`ManualClock`] follows the trace
//! timestamps, `ScheduleTimer` actions go into a [`TimerQueue`], and every task
//! that comes due before the next event is delivered first. Tasks still pending
//! after the last event are drained at the end.
//!
//! # Trace Format
//!
//! ```json
//! {
//!   "viewport_width": 390,
//!   "cards": [{ "id": "tree", "title": "Tree Pose", "categories": ["Balance"] }],
//!   "events": [
//!     { "at": 0, "event": { "input": { "pointer": {
//!         "kind": "mouse", "phase": "down", "position": { "x": 300, "y": 200 }, "at": 0 } } } },
//!     { "at": 500, "event": "next" }
//!   ]
//! }
//! ```

use crate::animation::{Clock, CardTransform, ManualClock, TimerQueue, TransitionState};
use crate::app::{handle_event, Action, AppState, Event};
use crate::domain::{Card, Millis, Result};
use crate::Config;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A recorded session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    #[serde(default)]
    pub viewport_width: Option<f64>,
    /// Deck to replay against; placeholders are used when absent.
    #[serde(default)]
    pub cards: Option<Vec<Card>>,
    pub events: Vec<TimedEvent>,
}

impl Trace {
    /// Reads a JSON trace file.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SwipeDeckError::Io`] or [`crate::SwipeDeckError::Json`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&source)?)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimedEvent {
    pub at: Millis,
    pub event: Event,
}

/// What triggered a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FrameSource {
    Event,
    Timer,
}

/// State snapshot after one handled event or timer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayFrame {
    pub at: Millis,
    pub source: FrameSource,
    pub index: usize,
    pub len: usize,
    pub state: TransitionState,
    pub transform: CardTransform,
    pub refreshing: bool,
    pub actions: Vec<Action>,
}

/// Replays `trace` and returns one frame per handled event and timer.
///
/// `placeholder_cards` sizes the deck when the trace carries no cards.
///
/// # Errors
///
/// Propagates errors from [`handle_event`], such as an invalid viewport width.
pub fn replay(trace: &Trace, config: &Config, placeholder_cards: usize) -> Result<Vec<ReplayFrame>> {
    let cards = trace
        .cards
        .clone()
        .unwrap_or_else(|| (0..placeholder_cards).map(Card::placeholder).collect());

    let _span = tracing::info_span!("replay", events = trace.events.len(), cards = cards.len()).entered();

    let mut player = Player {
        state: crate::initialize(config, cards),
        clock: ManualClock::default(),
        queue: TimerQueue::default(),
        frames: Vec::new(),
    };

    if let Some(width) = trace.viewport_width {
        handle_event(&mut player.state, &Event::ViewportResized { width })?;
    }

    for timed in &trace.events {
        player.fire_due(timed.at)?;
        player.clock.advance_to(timed.at);
        player.dispatch(&timed.event, FrameSource::Event)?;
    }
    player.fire_due(Millis::MAX)?;

    tracing::info!(frames = player.frames.len(), final_index = player.state.deck.index(), "replay finished");
    Ok(player.frames)
}

struct Player {
    state: AppState,
    clock: ManualClock,
    queue: TimerQueue,
    frames: Vec<ReplayFrame>,
}

impl Player {
    fn fire_due(&mut self, until: Millis) -> Result<()> {
        while let Some(due) = self.queue.next_due().filter(|due| *due <= until) {
            self.clock.advance_to(due);
            for task in self.queue.drain_due(due) {
                self.dispatch(&Event::TimerFired(task), FrameSource::Timer)?;
            }
        }
        Ok(())
    }

    fn dispatch(&mut self, event: &Event, source: FrameSource) -> Result<()> {
        let (_, actions) = handle_event(&mut self.state, event)?;
        let now = self.clock.now_ms();

        for action in &actions {
            if let Action::ScheduleTimer { task, delay_ms } = action {
                self.queue.schedule(*task, now, *delay_ms);
            }
        }

        self.frames.push(ReplayFrame {
            at: now,
            source,
            index: self.state.deck.index(),
            len: self.state.deck.len(),
            state: self.state.engine.state(),
            transform: self.state.engine.transform(),
            refreshing: self.state.refreshing,
            actions,
        });
        Ok(())
    }
}
