//! Hand engine and state management.

use log::debug;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::hand::HandState;
use crate::options::HandOptions;
use crate::snapshot::HandSnapshot;
use crate::sync::Mutex;

mod advance;
pub mod stage;

pub use stage::Stage;

/// A heads-up dealing engine that owns the deck and one hand in progress.
///
/// The engine deals a hand as soon as it is built, so there is always a
/// current hand to show. Use [`HandEngine::start_new_hand`] to replace it
/// and [`HandEngine::advance_stage`] to reveal the board.
pub struct HandEngine {
    /// Dealing options.
    pub options: HandOptions,
    /// The hand in progress.
    pub state: Mutex<HandState>,
    /// Random number generator.
    rng: Mutex<ChaCha8Rng>,
}

impl HandEngine {
    /// Creates a new engine with the given seed and deals the first hand.
    ///
    /// The same seed always produces the same sequence of hands.
    ///
    /// # Example
    ///
    /// ```
    /// use holdem_deal::{HandEngine, HandOptions};
    ///
    /// let a = HandEngine::new(HandOptions::default(), 7);
    /// let b = HandEngine::new(HandOptions::default(), 7);
    /// assert_eq!(a.current_state(), b.current_state());
    /// ```
    #[must_use]
    pub fn new(options: HandOptions, seed: u64) -> Self {
        Self::with_rng(options, ChaCha8Rng::seed_from_u64(seed))
    }

    /// Creates a new engine seeded from the operating system.
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    #[must_use]
    pub fn from_os_rng(options: HandOptions) -> Self {
        Self::with_rng(options, ChaCha8Rng::from_os_rng())
    }

    fn with_rng(options: HandOptions, mut rng: ChaCha8Rng) -> Self {
        let hand = HandState::deal(&mut rng);

        Self {
            options,
            state: Mutex::new(hand),
            rng: Mutex::new(rng),
        }
    }

    /// Discards the current hand and deals a new one from a fresh deck.
    ///
    /// The player and the opponent get two cards each, the board is cleared,
    /// and the stage returns to [`Stage::Preflop`] with 48 cards left.
    pub fn start_new_hand(&self) -> HandSnapshot {
        let hand = self.rng.update(|rng| HandState::deal(rng));
        debug!(
            "new hand: player {} {}, opponent {} {}",
            hand.player()[0],
            hand.player()[1],
            hand.opponent()[0],
            hand.opponent()[1],
        );

        self.state.update(|state| {
            *state = hand;
            HandSnapshot::from(&*state)
        })
    }

    /// Returns a snapshot of the hand in progress.
    pub fn current_state(&self) -> HandSnapshot {
        HandSnapshot::from(&*self.state.lock())
    }

    /// Returns the current stage.
    pub fn stage(&self) -> Stage {
        self.state.lock().stage()
    }

    /// Returns the number of cards remaining in the deck.
    pub fn cards_remaining(&self) -> usize {
        self.state.lock().deck().len()
    }

    /// Returns the dealing options.
    #[must_use]
    pub const fn options(&self) -> &HandOptions {
        &self.options
    }
}
