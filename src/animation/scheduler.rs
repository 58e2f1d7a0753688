//! Scheduled tasks, a virtual-time timer queue, and clocks.
//!
//! The engine never sleeps. When it needs something to happen later (finish a
//! commit, finish a settle, clear the refreshing state) it emits a
//! [`ScheduledTask`] with a delay and the host delivers it back when the delay
//! elapses. Each task carries the session generation that created it, so a task
//! outliving its session is recognized and discarded on delivery.
//!
//! Hosts without their own timer facility can use [`TimerQueue`], which orders
//! tasks by due time and keeps insertion order among equal due times.

use crate::domain::Millis;
use crate::gesture::SessionId;
use serde::{Deserialize, Serialize};

/// What a scheduled task completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
    /// The off-screen commit animation has run; apply the index change.
    CommitComplete,
    /// The snap-back animation has run; return to idle.
    SettleComplete,
    /// The refreshing cool-down elapsed for the given reset generation.
    RefreshCooldown { generation: u64 },
}

/// A delayed callback keyed to the session that scheduled it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledTask {
    pub session: SessionId,
    pub kind: TaskKind,
}

#[derive(Debug, Clone, Copy)]
struct QueuedTask {
    due: Millis,
    seq: u64,
    task: ScheduledTask,
}

/// Virtual-time queue of scheduled tasks.
///
/// # Example
///
/// ```
/// use swipedeck::animation::{ScheduledTask, TaskKind, TimerQueue};
/// use swipedeck::gesture::SessionId;
///
/// let mut queue = TimerQueue::default();
/// let task = ScheduledTask { session: SessionId(1), kind: TaskKind::CommitComplete };
/// queue.schedule(task, 1_000, 170);
///
/// assert!(queue.drain_due(1_100).is_empty());
/// assert_eq!(queue.drain_due(1_170), vec![task]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TimerQueue {
    entries: Vec<QueuedTask>,
    next_seq: u64,
}

impl TimerQueue {
    /// Schedules `task` to be due `delay_ms` after `now`.
    pub fn schedule(&mut self, task: ScheduledTask, now: Millis, delay_ms: u64) {
        let due = now.saturating_add(delay_ms);
        tracing::trace!(task = ?task, due, "task scheduled");
        self.entries.push(QueuedTask {
            due,
            seq: self.next_seq,
            task,
        });
        self.next_seq += 1;
    }

    /// Removes and returns every task due at or before `now`, earliest first.
    pub fn drain_due(&mut self, now: Millis) -> Vec<ScheduledTask> {
        let (mut due, pending): (Vec<QueuedTask>, Vec<QueuedTask>) =
            self.entries.drain(..).partition(|entry| entry.due <= now);
        self.entries = pending;
        due.sort_by_key(|entry| (entry.due, entry.seq));
        due.into_iter().map(|entry| entry.task).collect()
    }

    /// Earliest due time among pending tasks.
    #[must_use]
    pub fn next_due(&self) -> Option<Millis> {
        self.entries.iter().map(|entry| entry.due).min()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Source of the current time in milliseconds.
pub trait Clock {
    fn now_ms(&self) -> Millis;
}

/// Wall clock backed by `chrono`, in milliseconds since the Unix epoch.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> Millis {
        u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or(0)
    }
}

/// A clock that only moves when told to; used for replay and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManualClock {
    now: Millis,
}

impl ManualClock {
    #[must_use]
    pub const fn starting_at(now: Millis) -> Self {
        Self { now }
    }

    /// Moves the clock forward to `at`; earlier times are ignored.
    pub fn advance_to(&mut self, at: Millis) {
        self.now = self.now.max(at);
    }

    pub fn advance_by(&mut self, delta: Millis) {
        self.now = self.now.saturating_add(delta);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> Millis {
        self.now
    }
}
