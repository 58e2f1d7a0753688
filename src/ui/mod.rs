//! Render-facing view models.
//!
//! ```text
//! AppState → compute_viewmodel → DeckViewModel → host renderer
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: Display-ready deck state

pub mod viewmodel;

pub use viewmodel::{format_counter, CardView, DeckViewModel, EmptyState, FilterChip};
