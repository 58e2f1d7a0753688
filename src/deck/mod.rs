//! Deck layer: the filtered card list and the index controller that walks it.
//!
//! # Modules
//!
//! - [`catalog`]: Full card list with category filters
//! - [`index`]: Wraparound index arithmetic and the sole index mutator

pub mod catalog;
pub mod index;

pub use catalog::{Catalog, ALL_CATEGORIES, CATEGORY_ORDER};
pub use index::{advance, retreat, DeckIndex, IndexChange};
