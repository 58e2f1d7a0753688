use pretty_assertions::assert_eq;
use swipedeck::animation::{TaskKind, TimerQueue, TransitionState};
use swipedeck::deck::{advance, retreat};
use swipedeck::domain::{Millis, Point};
use swipedeck::gesture::{
    ElementRole, InputTarget, PointerEvent, PointerKind, PointerPhase, RawInput, TouchEvent, TouchPhase, TouchPoint,
};
use swipedeck::{handle_event, initialize, Action, AppState, Card, Config, Event};

struct Harness {
    state: AppState,
    queue: TimerQueue,
    now: Millis,
    haptics: usize,
}

impl Harness {
    fn with_cards(n: usize) -> Self {
        let cards = (0..n).map(Card::placeholder).collect();
        Self {
            state: initialize(&Config::default(), cards),
            queue: TimerQueue::default(),
            now: 0,
            haptics: 0,
        }
    }

    fn send(&mut self, event: Event) {
        let (_, actions) = handle_event(&mut self.state, &event).unwrap();
        for action in actions {
            match action {
                Action::ScheduleTimer { task, delay_ms } => self.queue.schedule(task, self.now, delay_ms),
                Action::Haptic { .. } => self.haptics += 1,
            }
        }
    }

    /// Moves virtual time to `at`, firing every timer that comes due.
    fn advance_to(&mut self, at: Millis) {
        while let Some(due) = self.queue.next_due().filter(|due| *due <= at) {
            self.now = due;
            for task in self.queue.drain_due(due) {
                self.send(Event::TimerFired(task));
            }
        }
        self.now = self.now.max(at);
    }

    fn pointer(&mut self, phase: PointerPhase, x: f64, y: f64, at: Millis) {
        self.pointer_on(phase, x, y, at, InputTarget::surface());
    }

    fn pointer_on(&mut self, phase: PointerPhase, x: f64, y: f64, at: Millis, target: InputTarget) {
        self.advance_to(at);
        self.send(Event::Input(RawInput::Pointer(PointerEvent {
            kind: PointerKind::Mouse,
            phase,
            position: Point::new(x, y),
            at,
            target,
        })));
    }

    /// Down at (200, 300), one move at `elapsed`, release at the same spot.
    fn drag(&mut self, start: Millis, dx: f64, dy: f64, elapsed: Millis) {
        self.pointer(PointerPhase::Down, 200.0, 300.0, start);
        self.pointer(PointerPhase::Move, 200.0 + dx, 300.0 + dy, start + elapsed);
        self.pointer(PointerPhase::Up, 200.0 + dx, 300.0 + dy, start + elapsed);
    }

    fn index(&self) -> usize {
        self.state.deck.index()
    }

    fn pending(&self, kind: TaskKind) -> bool {
        let mut queue = self.queue.clone();
        queue.drain_due(Millis::MAX).iter().any(|t| t.kind == kind)
    }
}

#[test]
fn advance_and_retreat_round_trip_for_every_length() {
    for n in 1..=40 {
        for i in 0..n {
            assert_eq!(retreat(advance(i, n), n), i);
            assert_eq!(advance(retreat(i, n), n), i);
        }
        let mut i = 0;
        for _ in 0..n {
            i = advance(i, n);
        }
        assert_eq!(i, 0, "advancing {n} times must return to the start");
    }
}

#[test]
fn next_control_cycles_the_whole_deck() {
    let mut h = Harness::with_cards(7);
    for _ in 0..7 {
        h.send(Event::Next);
    }
    assert_eq!(h.index(), 0);
    h.send(Event::Previous);
    assert_eq!(h.index(), 6);
}

#[test]
fn fast_leftward_swipe_advances_after_commit_delay() {
    let mut h = Harness::with_cards(5);
    h.drag(1_000, -50.0, 0.0, 100);

    assert_eq!(h.state.engine.state(), TransitionState::Committing(swipedeck::gesture::SwipeDirection::Advance));
    assert_eq!(h.index(), 0);

    h.advance_to(1_100 + 169);
    assert_eq!(h.index(), 0);
    h.advance_to(1_100 + 170);
    assert_eq!(h.index(), 1);
    assert_eq!(h.state.engine.state(), TransitionState::Idle);
    assert_eq!(h.state.engine.transform().translate_x, 0.0);
    assert_eq!(h.haptics, 1);
}

#[test]
fn rightward_swipe_retreats_with_wraparound() {
    let mut h = Harness::with_cards(4);
    h.drag(0, 60.0, 3.0, 400);
    h.advance_to(2_000);
    assert_eq!(h.index(), 3);
}

#[test]
fn short_slow_swipe_snaps_back() {
    let mut h = Harness::with_cards(5);
    h.drag(0, -30.0, 0.0, 200);

    assert_eq!(h.state.engine.state(), TransitionState::SettlingBack);
    let transform = h.state.engine.transform();
    assert_eq!((transform.translate_x, transform.translate_y), (0.0, 0.0));

    h.advance_to(1_000);
    assert_eq!(h.index(), 0);
    assert_eq!(h.state.engine.state(), TransitionState::Idle);
    assert_eq!(h.haptics, 0);
}

#[test]
fn mostly_vertical_gesture_never_commits_horizontally() {
    let mut h = Harness::with_cards(5);
    h.send(Event::Next);
    h.send(Event::Next);
    h.drag(0, 5.0, 60.0, 50);

    assert!(!h.pending(TaskKind::CommitComplete));
    h.advance_to(5_000);
    // The pull resets to the first card; a horizontal commit would have moved to 1 or 3.
    assert_eq!(h.index(), 0);
    assert_eq!(h.state.engine.transform().translate_x, 0.0);
}

#[test]
fn pull_resets_once_and_respects_cooldown() {
    let mut h = Harness::with_cards(5);
    h.send(Event::Next);
    h.send(Event::Next);

    h.drag(0, 2.0, 45.0, 80);
    assert_eq!(h.index(), 0);
    assert!(h.state.refreshing);
    assert_eq!(h.haptics, 1);

    h.send(Event::Next);
    assert_eq!(h.index(), 1);

    // Second pull inside the 600 ms cool-down.
    h.drag(200, 2.0, 45.0, 80);
    assert_eq!(h.index(), 1);
    assert_eq!(h.haptics, 1);

    // Cool-down was scheduled by the move at t=80.
    h.advance_to(680);
    assert!(!h.state.refreshing);

    h.drag(700, 2.0, 45.0, 80);
    assert_eq!(h.index(), 0);
    assert_eq!(h.haptics, 2);
}

#[test]
fn pull_fires_only_once_within_a_session() {
    let mut h = Harness::with_cards(5);
    h.pointer(PointerPhase::Down, 200.0, 300.0, 0);
    h.pointer(PointerPhase::Move, 201.0, 345.0, 40);
    h.advance_to(700);
    assert!(!h.state.refreshing);

    h.send(Event::Next);
    h.pointer(PointerPhase::Move, 201.0, 400.0, 720);
    h.pointer(PointerPhase::Up, 201.0, 400.0, 730);
    assert_eq!(h.index(), 1);
}

#[test]
fn gesture_on_interactive_control_does_nothing() {
    for role in [ElementRole::Button, ElementRole::Link, ElementRole::Select, ElementRole::OptOut] {
        let mut h = Harness::with_cards(5);
        h.pointer_on(PointerPhase::Down, 200.0, 300.0, 0, InputTarget::inside(role));
        h.pointer(PointerPhase::Move, 100.0, 300.0, 50);
        assert_eq!(h.state.engine.transform().translate_x, 0.0);
        h.pointer(PointerPhase::Up, 100.0, 300.0, 60);
        h.advance_to(2_000);

        assert_eq!(h.index(), 0, "{role:?}");
        assert_eq!(h.state.engine.state(), TransitionState::Idle);
    }
}

#[test]
fn gesture_start_is_ignored_during_commit() {
    let mut h = Harness::with_cards(5);
    h.drag(0, -80.0, 0.0, 60);
    assert!(h.state.engine.is_locked());
    let generation = h.state.engine.generation();

    h.pointer(PointerPhase::Down, 200.0, 300.0, 70);
    h.pointer(PointerPhase::Move, 120.0, 300.0, 90);
    h.pointer(PointerPhase::Up, 120.0, 300.0, 100);
    assert_eq!(h.state.engine.generation(), generation);

    h.send(Event::Next);
    assert_eq!(h.index(), 0, "taps respect the transition lock");

    h.advance_to(1_000);
    assert_eq!(h.index(), 1);
}

#[test]
fn filter_change_resets_index_and_aborts_pending_commit() {
    let cards = vec![
        Card::new("mountain", "Mountain", &["Standing"]),
        Card::new("tree", "Tree", &["Standing", "Balance"]),
        Card::new("crow", "Crow", &["Arm Balance"]),
        Card::new("boat", "Boat", &["Core"]),
    ];
    let mut h = Harness::with_cards(0);
    h.state = initialize(&Config::default(), cards);

    h.send(Event::Next);
    h.send(Event::Next);
    h.drag(0, -80.0, 0.0, 60);
    h.send(Event::ToggleFilter("Standing".into()));

    assert_eq!(h.index(), 0);
    assert_eq!(h.state.item_count(), 2);
    assert_eq!(h.state.engine.state(), TransitionState::Idle);

    h.advance_to(1_000);
    assert_eq!(h.index(), 0, "stale commit must not move the new deck");
}

#[test]
fn all_chip_resets_index_even_without_active_filters() {
    let mut h = Harness::with_cards(5);
    h.send(Event::SelectQuizKind(swipedeck::QuizKind::Cues));
    for _ in 0..3 {
        h.send(Event::Next);
    }
    h.send(Event::RevealAnswer);
    assert_eq!(h.index(), 3);

    h.send(Event::ToggleFilter("All".into()));
    assert_eq!(h.index(), 0);
    assert_eq!(h.state.item_count(), 5);
    assert!(!h.state.mode.is_revealed());
}

#[test]
fn empty_deck_ignores_all_navigation() {
    let mut h = Harness::with_cards(0);
    h.send(Event::Next);
    h.drag(0, -80.0, 0.0, 60);
    h.advance_to(1_000);
    assert_eq!(h.index(), 0);
    assert_eq!(h.state.engine.state(), TransitionState::Idle);
}

#[test]
fn touch_swipe_commits_through_first_contact() {
    let mut h = Harness::with_cards(3);
    let touch = |phase, touches: Vec<TouchPoint>, changed: Vec<TouchPoint>, at| {
        Event::Input(RawInput::Touch(TouchEvent {
            phase,
            touches,
            changed,
            at,
            target: InputTarget::surface(),
        }))
    };
    let contact = |id, x| TouchPoint {
        id,
        position: Point::new(x, 300.0),
    };

    h.send(touch(TouchPhase::Start, vec![contact(1, 250.0)], vec![contact(1, 250.0)], 0));
    // A second finger lands; it is not tracked.
    h.send(touch(TouchPhase::Start, vec![contact(1, 250.0), contact(2, 50.0)], vec![contact(2, 50.0)], 10));
    h.send(touch(TouchPhase::Move, vec![contact(1, 190.0), contact(2, 400.0)], vec![], 60));
    h.send(touch(TouchPhase::End, vec![contact(1, 190.0)], vec![contact(2, 400.0)], 70));
    assert!(!h.state.engine.is_locked(), "lifting the untracked finger does not release");

    h.send(touch(TouchPhase::End, vec![], vec![contact(1, 190.0)], 80));
    assert!(h.state.engine.is_locked());
    h.advance_to(1_000);
    assert_eq!(h.index(), 1);
}

#[test]
fn touch_typed_pointer_events_are_ignored() {
    let mut h = Harness::with_cards(3);
    for (phase, x, at) in [(PointerPhase::Down, 250.0, 0), (PointerPhase::Move, 100.0, 50), (PointerPhase::Up, 100.0, 60)] {
        h.send(Event::Input(RawInput::Pointer(PointerEvent {
            kind: PointerKind::Touch,
            phase,
            position: Point::new(x, 300.0),
            at,
            target: InputTarget::surface(),
        })));
    }
    h.advance_to(1_000);
    assert_eq!(h.index(), 0);
}

#[test]
fn commit_hides_revealed_quiz_answer() {
    let mut h = Harness::with_cards(3);
    h.send(Event::SelectQuizKind(swipedeck::QuizKind::Sanskrit));
    h.send(Event::RevealAnswer);
    assert!(h.state.mode.is_revealed());

    h.drag(0, -80.0, 0.0, 60);
    assert!(h.state.mode.is_revealed());
    h.advance_to(1_000);
    assert!(!h.state.mode.is_revealed());
}

#[test]
fn commit_target_scales_with_viewport() {
    let mut h = Harness::with_cards(3);
    h.send(Event::ViewportResized { width: 1_000.0 });
    h.drag(0, -80.0, 0.0, 60);
    assert!((h.state.engine.transform().translate_x + 1_150.0).abs() < 1e-9);
}
