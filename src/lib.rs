//! A heads-up Texas Hold'em dealing engine with optional `no_std` support.
//!
//! The crate provides a [`HandEngine`] that owns a shuffled 52-card deck and
//! walks a single hand through its stages: hole cards for the player and the
//! opponent, then the flop, turn, and river. Betting and hand evaluation are
//! left to the caller.
//!
//! # Example
//!
//! ```
//! use holdem_deal::{HandEngine, HandOptions, Stage};
//!
//! let engine = HandEngine::new(HandOptions::default(), 42);
//! let flop = engine.advance_stage().unwrap();
//! assert_eq!(flop.stage, Stage::Flop);
//! assert_eq!(flop.community.len(), 3);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod engine;
pub mod error;
pub mod hand;
pub mod options;
pub mod snapshot;
mod sync;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit, full_deck};
pub use engine::{HandEngine, Stage};
pub use error::DealError;
pub use hand::HandState;
pub use options::HandOptions;
pub use snapshot::HandSnapshot;
