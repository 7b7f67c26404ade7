//! Read-only views of a hand for presentation layers.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::engine::Stage;
use crate::hand::{HOLE_CARDS, HandState};

/// What a table shows after an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandSnapshot {
    /// The player's hole cards.
    pub player: [Card; HOLE_CARDS],
    /// The opponent's hole cards.
    pub opponent: [Card; HOLE_CARDS],
    /// Community cards in reveal order (0, 3, 4, or 5).
    pub community: Vec<Card>,
    /// The current stage.
    pub stage: Stage,
    /// Whether the hand has reached [`Stage::Done`]; further advances are no-ops.
    pub is_hand_complete: bool,
    /// Cards left in the deck.
    pub cards_remaining: usize,
}

impl HandSnapshot {
    /// Returns the flop once it has been dealt.
    #[must_use]
    pub fn flop(&self) -> Option<[Card; 3]> {
        match *self.community.as_slice() {
            [a, b, c, ..] => Some([a, b, c]),
            _ => None,
        }
    }

    /// Returns the turn card once it has been dealt.
    #[must_use]
    pub fn turn(&self) -> Option<Card> {
        self.community.get(3).copied()
    }

    /// Returns the river card once it has been dealt.
    #[must_use]
    pub fn river(&self) -> Option<Card> {
        self.community.get(4).copied()
    }
}

impl From<&HandState> for HandSnapshot {
    fn from(hand: &HandState) -> Self {
        Self {
            player: hand.player(),
            opponent: hand.opponent(),
            community: hand.community().to_vec(),
            stage: hand.stage(),
            is_hand_complete: hand.stage().is_done(),
            cards_remaining: hand.deck().len(),
        }
    }
}
