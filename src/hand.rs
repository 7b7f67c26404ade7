//! The state of a hand in progress.

extern crate alloc;

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, full_deck};
use crate::engine::Stage;
use crate::error::DealError;
use crate::options::HandOptions;

/// Cards dealt face down to each seat.
pub const HOLE_CARDS: usize = 2;

/// A hand in progress: the undealt deck plus everything dealt from it.
///
/// Every card of the 52-card universe sits in exactly one of the deck, the
/// two seats, the board, or the burn pile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandState {
    /// Undealt cards, next card first.
    deck: Vec<Card>,
    /// Player hole cards.
    player: [Card; HOLE_CARDS],
    /// Opponent hole cards.
    opponent: [Card; HOLE_CARDS],
    /// Community cards in reveal order.
    community: Vec<Card>,
    /// Cards burned before reveals.
    burned: Vec<Card>,
    /// Current stage.
    stage: Stage,
}

impl HandState {
    /// Shuffles a fresh deck and deals two hole cards to each seat.
    ///
    /// The first two cards go to the player and the next two to the
    /// opponent; the other 48 stay in the deck in shuffled order.
    pub fn deal<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards = full_deck();
        cards.shuffle(rng);

        let [p1, p2, o1, o2, rest @ ..] = cards;

        Self {
            deck: rest.to_vec(),
            player: [p1, p2],
            opponent: [o1, o2],
            community: Vec::new(),
            burned: Vec::new(),
            stage: Stage::Preflop,
        }
    }

    /// Returns the undealt cards, next card first.
    #[must_use]
    pub fn deck(&self) -> &[Card] {
        &self.deck
    }

    /// Returns the undealt cards for direct manipulation.
    ///
    /// Changing the deck can break the one-of-each invariant; it exists for
    /// stacking the deck in tests and for fault injection.
    pub const fn deck_mut(&mut self) -> &mut Vec<Card> {
        &mut self.deck
    }

    /// Returns the player's hole cards.
    #[must_use]
    pub const fn player(&self) -> [Card; HOLE_CARDS] {
        self.player
    }

    /// Returns the opponent's hole cards.
    #[must_use]
    pub const fn opponent(&self) -> [Card; HOLE_CARDS] {
        self.opponent
    }

    /// Returns the community cards in reveal order.
    #[must_use]
    pub fn community(&self) -> &[Card] {
        &self.community
    }

    /// Returns the burned cards.
    #[must_use]
    pub fn burned(&self) -> &[Card] {
        &self.burned
    }

    /// Returns the current stage.
    #[must_use]
    pub const fn stage(&self) -> Stage {
        self.stage
    }

    /// Iterates over every card the hand accounts for, dealt or not.
    pub fn all_cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.player
            .iter()
            .chain(&self.opponent)
            .chain(&self.community)
            .chain(&self.burned)
            .chain(&self.deck)
            .copied()
    }

    /// Removes and returns the first `count` cards of the deck.
    ///
    /// The rest of the deck keeps its order. Nothing is removed on error.
    pub(crate) fn draw(&mut self, count: usize) -> Result<Vec<Card>, DealError> {
        if count > self.deck.len() {
            return Err(DealError::InsufficientDeck {
                requested: count,
                remaining: self.deck.len(),
            });
        }

        let rest = self.deck.split_off(count);
        Ok(core::mem::replace(&mut self.deck, rest))
    }

    /// Deals the reveal due at the current stage and moves to the next one.
    ///
    /// Does nothing once the river is out. On error the hand is unchanged.
    pub(crate) fn advance(&mut self, options: HandOptions) -> Result<(), DealError> {
        if self.stage.is_done() {
            return Ok(());
        }

        let reveal = self.stage.cards_to_deal();
        let mut drawn = self.draw(options.draw_size(reveal))?;
        let burn = drawn.len() - reveal;
        self.burned.extend(drawn.drain(..burn));
        self.community.append(&mut drawn);
        self.stage = self.stage.next();

        Ok(())
    }
}
