//! Hand stage types.

use core::fmt;

/// Stage of a hand.
///
/// Stages are ordered and only move forward. [`Stage::Done`] is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Stage {
    /// Hole cards dealt, board empty.
    #[default]
    Preflop,
    /// Three community cards showing.
    Flop,
    /// Four community cards showing.
    Turn,
    /// All five community cards showing.
    River,
    /// Hand complete; nothing more is dealt.
    Done,
}

impl Stage {
    /// All stages in play order.
    pub const ALL: [Self; 5] = [
        Self::Preflop,
        Self::Flop,
        Self::Turn,
        Self::River,
        Self::Done,
    ];

    /// Returns the ordinal of the stage, `0` for preflop up to `4` for done.
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Returns the stage that follows this one, staying at [`Stage::Done`].
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Preflop => Self::Flop,
            Self::Flop => Self::Turn,
            Self::Turn => Self::River,
            Self::River | Self::Done => Self::Done,
        }
    }

    /// Returns how many community cards are revealed when leaving this stage.
    #[must_use]
    pub const fn cards_to_deal(self) -> usize {
        match self {
            Self::Preflop => 3,
            Self::Flop | Self::Turn => 1,
            Self::River | Self::Done => 0,
        }
    }

    /// Returns how many community cards are showing at this stage.
    #[must_use]
    pub const fn community_len(self) -> usize {
        match self {
            Self::Preflop => 0,
            Self::Flop => 3,
            Self::Turn => 4,
            Self::River | Self::Done => 5,
        }
    }

    /// Returns whether the hand is complete.
    #[must_use]
    pub const fn is_done(self) -> bool {
        matches!(self, Self::Done)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Preflop => "Preflop",
            Self::Flop => "Flop",
            Self::Turn => "Turn",
            Self::River => "River",
            Self::Done => "Done",
        })
    }
}
