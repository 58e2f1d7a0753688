//! Domain layer for swipedeck.
//!
//! Core value types shared by the gesture engine, the deck, and the application
//! layer, independent of any host UI toolkit.
//!
//! # Organization
//!
//! - [`card`]: Study card model
//! - [`error`]: Error types and result aliases
//! - [`geometry`]: Points, samples, and the millisecond clock type
//!
//! # Examples
//!
//! ```
//! use swipedeck::domain::{Point, Sample};
//!
//! let sample = Sample::new(Point::new(120.0, 300.0), 16);
//! assert_eq!(sample.at, 16);
//! ```

pub mod card;
pub mod error;
pub mod geometry;

pub use card::Card;
pub use error::{Result, SwipeDeckError};
pub use geometry::{Millis, Point, Sample};
