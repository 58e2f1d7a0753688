//! Deck index controller.
//!
//! Pure wraparound arithmetic plus [`DeckIndex`], the only type allowed to
//! mutate which card is shown. Swipe commits, pull-to-reset, and tap/button
//! navigation all funnel through [`DeckIndex::apply`], so every input method
//! shares one wraparound rule.

use serde::{Deserialize, Serialize};

/// Index following `index` in a deck of `len` cards, wrapping to the front.
///
/// Returns `index` unchanged when the deck is empty.
///
/// ```
/// use swipedeck::deck::advance;
///
/// assert_eq!(advance(0, 3), 1);
/// assert_eq!(advance(2, 3), 0);
/// assert_eq!(advance(0, 0), 0);
/// ```
#[must_use]
pub const fn advance(index: usize, len: usize) -> usize {
    if len == 0 {
        return index;
    }
    (index % len + 1) % len
}

/// Index preceding `index` in a deck of `len` cards, wrapping to the back.
///
/// Returns `index` unchanged when the deck is empty.
///
/// ```
/// use swipedeck::deck::retreat;
///
/// assert_eq!(retreat(0, 3), 2);
/// assert_eq!(retreat(1, 3), 0);
/// ```
#[must_use]
pub const fn retreat(index: usize, len: usize) -> usize {
    if len == 0 {
        return index;
    }
    (index % len + len - 1) % len
}

/// A requested mutation of the shown card.
///
/// The gesture engine never jumps to arbitrary positions: it can only step by
/// one in either direction or return to the first card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndexChange {
    /// Move to the next card (leftward swipe, "Next" control).
    Advance,
    /// Move to the previous card (rightward swipe, "Previous" control).
    Retreat,
    /// Jump back to the first card (pull-to-reset).
    ResetToFirst,
}

/// Current position within the filtered deck.
///
/// Invariant: `index < len` whenever `len > 0`; when the deck is empty the index
/// is held at 0 and every navigation request is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeckIndex {
    index: usize,
    len: usize,
}

impl DeckIndex {
    /// Creates a controller positioned on the first card.
    #[must_use]
    pub const fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Applies a navigation request.
    ///
    /// Returns `true` if the index actually changed. Requests against an empty
    /// deck are ignored.
    ///
    /// ```
    /// use swipedeck::deck::{DeckIndex, IndexChange};
    ///
    /// let mut deck = DeckIndex::new(3);
    /// deck.apply(IndexChange::Retreat);
    /// assert_eq!(deck.index(), 2);
    /// deck.apply(IndexChange::ResetToFirst);
    /// assert_eq!(deck.index(), 0);
    /// ```
    pub fn apply(&mut self, change: IndexChange) -> bool {
        if self.len == 0 {
            tracing::debug!(change = ?change, "ignoring navigation on empty deck");
            return false;
        }

        let previous = self.index;
        self.index = match change {
            IndexChange::Advance => advance(self.index, self.len),
            IndexChange::Retreat => retreat(self.index, self.len),
            IndexChange::ResetToFirst => 0,
        };

        tracing::debug!(
            change = ?change,
            from = previous,
            to = self.index,
            len = self.len,
            "deck index applied"
        );

        previous != self.index
    }

    /// Replaces the deck length after the filtered list changes.
    ///
    /// The index always returns to the first card, so it can never be left out of
    /// range by a shrinking deck.
    pub fn set_len(&mut self, len: usize) {
        tracing::debug!(old_len = self.len, new_len = len, "deck length changed, index reset");
        self.len = len;
        self.index = 0;
    }

    /// Index of the card after the current one, if any.
    #[must_use]
    pub const fn peek_next(&self) -> Option<usize> {
        if self.len == 0 {
            None
        } else {
            Some(advance(self.index, self.len))
        }
    }
}
