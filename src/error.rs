//! Error types for dealing operations.

use thiserror::Error;

/// Errors that can occur while dealing.
///
/// The fixed schedule of a hand (2 + 2 + 3 + 1 + 1 cards) never exhausts a
/// fresh deck, so these only surface when the deck was altered from outside
/// the engine. Start a new hand to recover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Not enough cards left in the deck for the requested draw.
    #[error("not enough cards in the deck: requested {requested}, {remaining} remaining")]
    InsufficientDeck {
        /// Cards the draw needed.
        requested: usize,
        /// Cards that were left.
        remaining: usize,
    },
}
