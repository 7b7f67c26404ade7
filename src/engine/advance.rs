use core::fmt;

use log::{debug, error, trace};

use crate::card::Card;
use crate::error::DealError;
use crate::snapshot::HandSnapshot;

use super::HandEngine;

impl HandEngine {
    /// Reveals the next community cards and moves the hand forward one stage.
    ///
    /// Preflop deals the flop (3 cards), the flop deals the turn (1), and the
    /// turn deals the river (1). From the river the hand moves to
    /// [`Stage::Done`](super::Stage::Done) without dealing, and once done
    /// further calls change nothing. With
    /// [`burn_cards`](crate::HandOptions::burn_cards) set, one card is burned
    /// before each reveal.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::InsufficientDeck`] if the deck holds fewer cards
    /// than the reveal needs. The hand is left exactly as it was.
    pub fn advance_stage(&self) -> Result<HandSnapshot, DealError> {
        let options = self.options;

        self.state.update(|hand| {
            let from = hand.stage();
            if from.is_done() {
                trace!("hand already complete, nothing to deal");
                return Ok(HandSnapshot::from(&*hand));
            }

            if let Err(err) = hand.advance(options) {
                error!("cannot leave {from}: {err}");
                return Err(err);
            }

            debug!(
                "{from} -> {}: board [{}]",
                hand.stage(),
                Board(hand.community())
            );
            Ok(HandSnapshot::from(&*hand))
        })
    }
}

/// Space-separated card labels for log lines.
struct Board<'a>(&'a [Card]);

impl fmt::Display for Board<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
