//! The gesture engine: one session slot driving one transition state machine.
//!
//! # Architecture
//!
//! ```text
//! RawInput ─▶ Normalizer ─▶ GestureEngine ─┬─ vertical ──▶ PullToReset
//!                                          └─ horizontal ─▶ SwipePolicy (at release)
//!                                                  │
//!                                                  ▼
//!                                          TransitionAnimator
//!                                                  │
//!                                                  ▼
//!                                          Vec<EngineRequest> ─▶ host
//! ```
//!
//! The engine never mutates the deck. It reads the item count and returns
//! [`EngineRequest`]s; index changes, mode resets, haptics and delayed tasks are
//! carried out by the caller. Delayed work comes back through
//! [`GestureEngine::handle_timer`] and is discarded if its session generation has
//! been superseded.

use super::axis::{Axis, AxisResolver};
use super::normalizer::{NormalizedSample, Normalizer, RawInput, SamplePhase};
use super::pull::{PullToReset, RefreshState};
use super::session::{GestureSession, SessionId, SwipeSample};
use super::swipe::{SwipeDecision, SwipePolicy};
use crate::animation::{AnimatorTuning, CardTransform, ScheduledTask, TaskKind, TransitionAnimator, TransitionState};
use crate::deck::IndexChange;
use crate::domain::{Point, SwipeDeckError};
use crate::Config;

/// Something the engine needs the host to do.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EngineRequest {
    /// Apply an index change to the deck.
    ChangeIndex(IndexChange),
    /// Clear per-card mode state (quiz reveal).
    ResetModeSideEffects,
    /// Best-effort haptic pulse.
    Haptic,
    /// Deliver `task` back to [`GestureEngine::handle_timer`] after `delay_ms`.
    Schedule { task: ScheduledTask, delay_ms: u64 },
    /// The pull-to-reset "refreshing" display state changed.
    RefreshingChanged(bool),
}

#[derive(Debug, Clone)]
pub struct GestureEngine {
    normalizer: Normalizer,
    resolver: AxisResolver,
    pull: PullToReset,
    policy: SwipePolicy,
    animator: TransitionAnimator,
    session: GestureSession,
    swipe: SwipeSample,
    refresh: RefreshState,
    generation: SessionId,
    viewport_width: f64,
    commit_delay_ms: u64,
    settle_ms: u64,
    refresh_cooldown_ms: u64,
}

impl GestureEngine {
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            normalizer: Normalizer::default(),
            resolver: AxisResolver::new(config.deadzone),
            pull: PullToReset::new(config.pull_max_dx, config.pull_min_dy),
            policy: SwipePolicy::new(config.swipe_distance, config.swipe_velocity),
            animator: TransitionAnimator::new(AnimatorTuning::from(config)),
            session: GestureSession::default(),
            swipe: SwipeSample::default(),
            refresh: RefreshState::default(),
            generation: SessionId::default(),
            viewport_width: config.default_viewport_width,
            commit_delay_ms: config.commit_delay_ms,
            settle_ms: config.settle_ms,
            refresh_cooldown_ms: config.refresh_cooldown_ms,
        }
    }

    #[must_use]
    pub const fn state(&self) -> TransitionState {
        self.animator.state()
    }

    /// Transition lock: a committed swipe is still animating.
    #[must_use]
    pub const fn is_locked(&self) -> bool {
        self.animator.state().is_locked()
    }

    #[must_use]
    pub const fn is_refreshing(&self) -> bool {
        self.refresh.is_active()
    }

    #[must_use]
    pub const fn generation(&self) -> SessionId {
        self.generation
    }

    #[must_use]
    pub const fn session(&self) -> &GestureSession {
        &self.session
    }

    #[must_use]
    pub fn transform(&self) -> CardTransform {
        self.animator.transform()
    }

    #[must_use]
    pub const fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    pub fn set_viewport_width(&mut self, width: f64) {
        self.viewport_width = width;
    }

    /// Feeds one raw input event through the pipeline.
    pub fn handle_input(&mut self, input: &RawInput, item_count: usize) -> Vec<EngineRequest> {
        let locked = !self.animator.state().accepts_gesture_start();
        let Some(sample) = self.normalizer.normalize(input, locked) else {
            return Vec::new();
        };

        match sample.phase {
            SamplePhase::Start => self.begin(sample),
            SamplePhase::Move => self.update(sample),
            SamplePhase::End | SamplePhase::Cancel => self.release(sample, item_count),
        }
    }

    /// Completes a delayed task previously requested through
    /// [`EngineRequest::Schedule`].
    pub fn handle_timer(&mut self, task: &ScheduledTask, item_count: usize) -> Vec<EngineRequest> {
        let _span = tracing::debug_span!("handle_timer", task = ?task.kind, session = %task.session).entered();

        if let TaskKind::RefreshCooldown { generation } = task.kind {
            if self.refresh.clear(generation) {
                tracing::debug!(generation, "refresh cool-down elapsed");
                return vec![EngineRequest::RefreshingChanged(false)];
            }
            return Vec::new();
        }

        if task.session != self.generation {
            tracing::debug!(current = %self.generation, "discarding stale task");
            return Vec::new();
        }

        match task.kind {
            TaskKind::CommitComplete => match self.animator.finish_commit() {
                Ok(direction) => {
                    tracing::debug!(direction = ?direction, "commit complete");
                    if item_count == 0 {
                        return Vec::new();
                    }
                    vec![
                        EngineRequest::ChangeIndex(direction.into()),
                        EngineRequest::ResetModeSideEffects,
                        EngineRequest::Haptic,
                    ]
                }
                Err(err) => self.degrade(&err),
            },
            TaskKind::SettleComplete => match self.animator.finish_settle() {
                Ok(()) => Vec::new(),
                Err(err) => self.degrade(&err),
            },
            TaskKind::RefreshCooldown { .. } => Vec::new(),
        }
    }

    /// Aborts any session and transition in flight.
    ///
    /// Pending tasks from the aborted session become stale.
    pub fn cancel(&mut self) {
        tracing::debug!(state = %self.animator.state(), session = %self.generation, "cancelling gesture");
        self.generation = self.generation.next();
        self.normalizer.reset();
        self.session.clear();
        self.animator.abort();
    }

    fn begin(&mut self, sample: NormalizedSample) -> Vec<EngineRequest> {
        self.generation = self.generation.next();
        let _span = tracing::debug_span!("gesture", session = %self.generation).entered();

        if let Err(err) = self.animator.begin_drag() {
            return self.degrade(&err);
        }
        self.session.restart(self.generation, sample.sample());
        self.swipe = SwipeSample::starting_at(sample.sample());
        tracing::debug!(x = sample.position.x, y = sample.position.y, "gesture started");
        Vec::new()
    }

    fn update(&mut self, sample: NormalizedSample) -> Vec<EngineRequest> {
        if !self.session.active || self.animator.state() != TransitionState::Dragging {
            return Vec::new();
        }
        let _span = tracing::trace_span!("gesture", session = %self.session.id).entered();

        self.session.last = sample.sample();
        let delta = self.session.delta(sample.position);

        match self.session.observe_axis(&self.resolver, delta) {
            None => Vec::new(),
            Some(Axis::Vertical) => self.detect_pull(delta),
            Some(Axis::Horizontal) => {
                self.swipe.record(sample.sample());
                match self.animator.follow(delta) {
                    Ok(()) => Vec::new(),
                    Err(err) => self.degrade(&err),
                }
            }
        }
    }

    fn detect_pull(&mut self, delta: Point) -> Vec<EngineRequest> {
        if !self
            .pull
            .should_fire(delta, self.session.pull_eligible, self.refresh.is_active())
        {
            return Vec::new();
        }

        self.session.pull_eligible = false;
        let generation = self.refresh.begin();
        tracing::info!(generation, dy = delta.y, "pull-to-reset fired");

        vec![
            EngineRequest::ChangeIndex(IndexChange::ResetToFirst),
            EngineRequest::Haptic,
            EngineRequest::RefreshingChanged(true),
            EngineRequest::Schedule {
                task: ScheduledTask {
                    session: self.session.id,
                    kind: TaskKind::RefreshCooldown { generation },
                },
                delay_ms: self.refresh_cooldown_ms,
            },
        ]
    }

    fn release(&mut self, sample: NormalizedSample, item_count: usize) -> Vec<EngineRequest> {
        if !self.session.active || self.animator.state() != TransitionState::Dragging {
            tracing::debug!("release without a live session");
            return Vec::new();
        }
        let _span = tracing::debug_span!("release", session = %self.session.id, phase = ?sample.phase).entered();

        let delta = self.session.delta(sample.position);
        let axis = self.session.observe_axis(&self.resolver, delta);
        let origin_x = self.session.origin.x;
        let session = self.session.id;
        self.session.clear();

        let decision = match (sample.phase, axis) {
            (SamplePhase::End, Some(Axis::Horizontal)) => self.policy.decide(delta.x, &self.swipe, origin_x),
            _ => SwipeDecision::SnapBack,
        };

        match decision {
            SwipeDecision::Commit(_) if item_count == 0 => {
                tracing::debug!("no eligible items, dropping swipe");
                self.animator.abort();
                Vec::new()
            }
            SwipeDecision::Commit(direction) => {
                if let Err(err) = self.animator.commit(direction, self.viewport_width) {
                    return self.degrade(&err);
                }
                tracing::debug!(direction = ?direction, dx = delta.x, "swipe committed");
                vec![EngineRequest::Schedule {
                    task: ScheduledTask {
                        session,
                        kind: TaskKind::CommitComplete,
                    },
                    delay_ms: self.commit_delay_ms,
                }]
            }
            SwipeDecision::SnapBack if self.animator.offset().is_at_rest() => match self.animator.release_in_place() {
                Ok(()) => Vec::new(),
                Err(err) => self.degrade(&err),
            },
            SwipeDecision::SnapBack => {
                if let Err(err) = self.animator.settle_back() {
                    return self.degrade(&err);
                }
                tracing::debug!(dx = delta.x, "snapping back");
                vec![EngineRequest::Schedule {
                    task: ScheduledTask {
                        session,
                        kind: TaskKind::SettleComplete,
                    },
                    delay_ms: self.settle_ms,
                }]
            }
        }
    }

    fn degrade(&mut self, err: &SwipeDeckError) -> Vec<EngineRequest> {
        tracing::warn!(error = %err, "gesture state anomaly, resetting");
        self.cancel();
        Vec::new()
    }
}
