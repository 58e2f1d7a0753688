//! Swipedeck: a gesture-driven card navigation engine.
//!
//! Swipedeck turns raw pointer and touch input over a single card into
//! navigation intents for a fixed deck of study cards:
//! - Horizontal swipes step to the next or previous card, with wraparound
//! - Vertical gestures are left to scrolling, except a slow downward pull,
//!   which returns the deck to its first card
//! - Taps on "Previous"/"Next" controls share the same index rules
//! - Category filters narrow the deck; a study/quiz mode overlays the card
//!
//! The crate renders nothing and owns no timers. Hosts feed it events and carry
//! out the [`Action`]s it returns.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Host runtime / replay binary (main.rs, replay)     │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │ Event            ▲ Action
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │
//! │  - Engine request → deck/mode/actions               │
//! │  - View model computation (ui/)                     │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ Gesture       │   │ Animation     │   │ Deck          │
//! │ (gesture/)    │   │ (animation/)  │   │ (deck/)       │
//! │ - Normalizer  │   │ - Transition  │   │ - Index math  │
//! │ - Axis lock   │   │   state       │   │ - Catalog     │
//! │ - Pull/swipe  │   │ - Timers      │   │ - Filters     │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain & Infrastructure                            │
//! │  - Card, geometry, errors (domain/)                 │
//! │  - Paths (infrastructure/), logging (observability/)│
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Event handler, state, actions, study/quiz mode
//! - [`gesture`]: Input normalization, axis lock, pull-to-reset, swipe policy, engine
//! - [`animation`]: Transition state machine and scheduled tasks
//! - [`deck`]: Wraparound index controller and category catalog
//! - [`domain`]: Cards, geometry, errors
//! - [`ui`]: Render-facing view models
//! - [`replay`]: Deterministic trace replay
//! - [`observability`]: `tracing` subscriber setup
//!
//! # Example
//!
//! ```rust
//! use swipedeck::gesture::{InputTarget, PointerEvent, PointerKind, PointerPhase, RawInput};
//! use swipedeck::domain::Point;
//! use swipedeck::{handle_event, initialize, Action, Card, Config, Event};
//!
//! let cards = vec![Card::new("a", "A", &[]), Card::new("b", "B", &[])];
//! let mut state = initialize(&Config::default(), cards);
//!
//! let pointer = |phase, x: f64, at| Event::Input(RawInput::Pointer(PointerEvent {
//!     kind: PointerKind::Mouse,
//!     phase,
//!     position: Point::new(x, 200.0),
//!     at,
//!     target: InputTarget::surface(),
//! }));
//!
//! handle_event(&mut state, &pointer(PointerPhase::Down, 300.0, 0))?;
//! handle_event(&mut state, &pointer(PointerPhase::Move, 240.0, 80))?;
//! let (_, actions) = handle_event(&mut state, &pointer(PointerPhase::Up, 240.0, 90))?;
//!
//! let Some(Action::ScheduleTimer { task, .. }) = actions.first().copied() else { unreachable!() };
//! handle_event(&mut state, &Event::TimerFired(task))?;
//! assert_eq!(state.deck.index(), 1);
//! # Ok::<(), swipedeck::SwipeDeckError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod animation;
pub mod app;
pub mod deck;
pub mod domain;
pub mod gesture;
pub mod infrastructure;
pub mod observability;
pub mod replay;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, QuizKind, StudyMode};
pub use domain::{Card, Result, SwipeDeckError};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::str::FromStr;

/// Engine tuning and logging configuration.
///
/// Every field has a default, so a config file only needs the keys it changes.
///
/// # Example
///
/// ```toml
/// swipe_distance = 60.0
/// commit_delay_ms = 200
/// trace_level = "debug"
/// log_file = "~/.local/state/swipedeck/swipedeck.log"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Displacement (in both axes) before an axis is committed. Default: 6
    pub deadzone: f64,

    /// Horizontal displacement that commits a swipe on its own. Default: 45
    pub swipe_distance: f64,

    /// Horizontal speed (units/ms) that commits a swipe on its own. Default: 0.45
    pub swipe_velocity: f64,

    /// Pull-to-reset: sideways drift must stay below this. Default: 16
    pub pull_max_dx: f64,

    /// Pull-to-reset: downward travel must exceed this. Default: 40
    pub pull_min_dy: f64,

    /// How long the refreshing state shows after a reset. Default: 600
    pub refresh_cooldown_ms: u64,

    /// Delay between a committed release and the index change. Default: 170
    pub commit_delay_ms: u64,

    /// Snap-back easing duration. Default: 280
    pub settle_ms: u64,

    /// Vertical follow factor while dragging horizontally. Default: 0.2
    pub vertical_damping: f64,

    /// Off-screen target as a multiple of viewport width. Default: 1.15
    pub offscreen_factor: f64,

    /// Viewport width until the host reports one. Default: 420
    pub default_viewport_width: f64,

    /// Card rotation is `offset.x / rotation_divisor` degrees. Default: 20
    pub rotation_divisor: f64,

    /// Card scale while dragging. Default: 1.01
    pub drag_scale: f64,

    /// Haptic pulse length. Default: 12
    pub haptic_ms: u64,

    /// Tracing level: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,

    /// Log to this file (rotating) instead of stderr. `~` is expanded.
    pub log_file: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            deadzone: 6.0,
            swipe_distance: 45.0,
            swipe_velocity: 0.45,
            pull_max_dx: 16.0,
            pull_min_dy: 40.0,
            refresh_cooldown_ms: 600,
            commit_delay_ms: 170,
            settle_ms: 280,
            vertical_damping: 0.2,
            offscreen_factor: 1.15,
            default_viewport_width: 420.0,
            rotation_divisor: 20.0,
            drag_scale: 1.01,
            haptic_ms: 12,
            trace_level: None,
            log_file: None,
        }
    }
}

impl Config {
    /// Parses and validates a TOML document. Missing keys take defaults.
    ///
    /// # Errors
    ///
    /// Returns [`SwipeDeckError::Toml`] for malformed TOML and
    /// [`SwipeDeckError::Config`] for out-of-range values.
    ///
    /// # Example
    ///
    /// ```rust
    /// use swipedeck::Config;
    ///
    /// let config = Config::from_toml_str("swipe_distance = 60.0")?;
    /// assert_eq!(config.swipe_distance, 60.0);
    /// assert_eq!(config.commit_delay_ms, 170);
    /// # Ok::<(), swipedeck::SwipeDeckError>(())
    /// ```
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a TOML config file.
    ///
    /// # Errors
    ///
    /// Returns [`SwipeDeckError::Io`] if the file cannot be read, otherwise as
    /// [`Config::from_toml_str`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "loaded config file");
        Self::from_toml_str(&source)
    }

    /// Parses host-provided string settings, falling back to defaults per key.
    ///
    /// Unparseable, missing or out-of-range values keep their defaults, so the
    /// result always passes [`Config::validate`]. Unknown keys are ignored.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use swipedeck::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("settle_ms".to_string(), "300".to_string());
    /// map.insert("deadzone".to_string(), "wide".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.settle_ms, 300);
    /// assert_eq!(config.deadzone, 6.0);
    /// ```
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();
        Self {
            deadzone: parse_positive_or(map, "deadzone", defaults.deadzone),
            swipe_distance: parse_positive_or(map, "swipe_distance", defaults.swipe_distance),
            swipe_velocity: parse_positive_or(map, "swipe_velocity", defaults.swipe_velocity),
            pull_max_dx: parse_positive_or(map, "pull_max_dx", defaults.pull_max_dx),
            pull_min_dy: parse_positive_or(map, "pull_min_dy", defaults.pull_min_dy),
            refresh_cooldown_ms: parse_or(map, "refresh_cooldown_ms", defaults.refresh_cooldown_ms),
            commit_delay_ms: parse_or(map, "commit_delay_ms", defaults.commit_delay_ms),
            settle_ms: parse_or(map, "settle_ms", defaults.settle_ms),
            vertical_damping: parse_f64_or(map, "vertical_damping", defaults.vertical_damping, |v| v >= 0.0),
            offscreen_factor: parse_positive_or(map, "offscreen_factor", defaults.offscreen_factor),
            default_viewport_width: parse_positive_or(map, "default_viewport_width", defaults.default_viewport_width),
            rotation_divisor: parse_positive_or(map, "rotation_divisor", defaults.rotation_divisor),
            drag_scale: parse_positive_or(map, "drag_scale", defaults.drag_scale),
            haptic_ms: parse_or(map, "haptic_ms", defaults.haptic_ms),
            trace_level: map.get("trace_level").cloned(),
            log_file: map.get("log_file").cloned(),
        }
    }

    /// Checks that thresholds and factors are usable.
    ///
    /// # Errors
    ///
    /// Returns [`SwipeDeckError::Config`] naming the first offending key.
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("deadzone", self.deadzone),
            ("swipe_distance", self.swipe_distance),
            ("swipe_velocity", self.swipe_velocity),
            ("pull_max_dx", self.pull_max_dx),
            ("pull_min_dy", self.pull_min_dy),
            ("offscreen_factor", self.offscreen_factor),
            ("default_viewport_width", self.default_viewport_width),
            ("rotation_divisor", self.rotation_divisor),
            ("drag_scale", self.drag_scale),
        ];
        for (key, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(SwipeDeckError::Config(format!("{key} must be positive, got {value}")));
            }
        }
        if !self.vertical_damping.is_finite() || self.vertical_damping < 0.0 {
            return Err(SwipeDeckError::Config(format!(
                "vertical_damping must not be negative, got {}",
                self.vertical_damping
            )));
        }
        Ok(())
    }
}

fn parse_or<T: FromStr>(map: &BTreeMap<String, String>, key: &str, default: T) -> T {
    map.get(key).and_then(|s| s.trim().parse::<T>().ok()).unwrap_or(default)
}

fn parse_f64_or(map: &BTreeMap<String, String>, key: &str, default: f64, in_range: fn(f64) -> bool) -> f64 {
    match map.get(key).map(|s| s.trim().parse::<f64>()) {
        Some(Ok(value)) if value.is_finite() && in_range(value) => value,
        Some(_) => {
            tracing::warn!(key, value = ?map.get(key), default, "ignoring invalid setting");
            default
        }
        None => default,
    }
}

fn parse_positive_or(map: &BTreeMap<String, String>, key: &str, default: f64) -> f64 {
    parse_f64_or(map, key, default, |v| v > 0.0)
}

/// Creates application state for `cards` with no filters, in study mode.
///
/// # Example
///
/// ```rust
/// use swipedeck::{initialize, Card, Config};
///
/// let state = initialize(&Config::default(), vec![Card::new("a", "A", &[])]);
/// assert_eq!(state.item_count(), 1);
/// ```
pub fn initialize(config: &Config, cards: Vec<Card>) -> AppState {
    tracing::debug!(cards = cards.len(), "initializing swipedeck");
    AppState::new(cards, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn rejects_non_positive_thresholds() {
        let err = Config::from_toml_str("swipe_velocity = 0.0").unwrap_err();
        assert!(err.to_string().contains("swipe_velocity"));

        let config = Config {
            vertical_damping: -0.1,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn malformed_toml_is_a_toml_error() {
        assert!(matches!(
            Config::from_toml_str("deadzone = ["),
            Err(SwipeDeckError::Toml(_))
        ));
    }

    #[test]
    fn map_keeps_logging_keys() {
        let mut map = BTreeMap::new();
        map.insert("trace_level".to_string(), "debug".to_string());
        map.insert("haptic_ms".to_string(), " 20 ".to_string());
        let config = Config::from_map(&map);
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
        assert_eq!(config.haptic_ms, 20);
    }

    #[test]
    fn map_rejects_non_finite_and_negative_numbers() {
        let mut map = BTreeMap::new();
        map.insert("swipe_distance".to_string(), "nan".to_string());
        map.insert("swipe_velocity".to_string(), "-1".to_string());
        map.insert("default_viewport_width".to_string(), "inf".to_string());
        map.insert("vertical_damping".to_string(), "-0.5".to_string());
        map.insert("deadzone".to_string(), "8".to_string());

        let config = Config::from_map(&map);
        let defaults = Config::default();
        assert_eq!(config.swipe_distance, defaults.swipe_distance);
        assert_eq!(config.swipe_velocity, defaults.swipe_velocity);
        assert_eq!(config.default_viewport_width, defaults.default_viewport_width);
        assert_eq!(config.vertical_damping, defaults.vertical_damping);
        assert_eq!(config.deadzone, 8.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn map_accepts_zero_damping() {
        let mut map = BTreeMap::new();
        map.insert("vertical_damping".to_string(), "0".to_string());
        assert_eq!(Config::from_map(&map).vertical_damping, 0.0);
    }
}
