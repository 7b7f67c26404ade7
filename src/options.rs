//! Dealing options.

/// Dealing options.
///
/// The defaults deal a plain hand: no burn cards, so the deck shrinks by
/// exactly the number of community cards revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HandOptions {
    /// Whether a card is burned face down before the flop, turn, and river.
    pub burn_cards: bool,
}

impl HandOptions {
    /// Creates options with the default settings.
    ///
    /// # Example
    ///
    /// ```
    /// use holdem_deal::HandOptions;
    ///
    /// let options = HandOptions::new();
    /// assert!(!options.burn_cards);
    /// ```
    #[must_use]
    pub const fn new() -> Self {
        Self { burn_cards: false }
    }

    /// Sets whether a card is burned before each community reveal.
    ///
    /// # Example
    ///
    /// ```
    /// use holdem_deal::HandOptions;
    ///
    /// let options = HandOptions::default().with_burn_cards(true);
    /// assert!(options.burn_cards);
    /// ```
    #[must_use]
    pub const fn with_burn_cards(mut self, burn: bool) -> Self {
        self.burn_cards = burn;
        self
    }

    /// Returns how many cards a reveal of `reveal` cards takes from the deck.
    pub(crate) const fn draw_size(&self, reveal: usize) -> usize {
        if reveal == 0 {
            0
        } else if self.burn_cards {
            reveal + 1
        } else {
            reveal
        }
    }
}
