//! Property tests for the dealing invariants.

use std::collections::BTreeSet;

use holdem_deal::{Card, DECK_SIZE, HandEngine, HandOptions, Stage, full_deck};
use proptest::prelude::*;

fn universe() -> BTreeSet<Card> {
    full_deck().into_iter().collect()
}

proptest! {
    #[test]
    fn every_card_is_somewhere_exactly_once(
        seed in any::<u64>(),
        advances in 0usize..8,
        burn in any::<bool>(),
    ) {
        let engine = HandEngine::new(HandOptions::default().with_burn_cards(burn), seed);
        for _ in 0..advances {
            engine.advance_stage().unwrap();
        }

        let hand = engine.state.lock();
        let cards: Vec<Card> = hand.all_cards().collect();
        let unique: BTreeSet<Card> = cards.iter().copied().collect();
        prop_assert_eq!(cards.len(), DECK_SIZE);
        prop_assert_eq!(unique, universe());
    }

    #[test]
    fn community_count_follows_the_stage(seed in any::<u64>(), advances in 0usize..10) {
        let engine = HandEngine::new(HandOptions::default(), seed);
        let mut last = engine.stage();

        for _ in 0..advances {
            let snapshot = engine.advance_stage().unwrap();
            prop_assert!(snapshot.stage >= last);
            prop_assert!(snapshot.stage.ordinal() <= Stage::Done.ordinal());
            prop_assert_eq!(snapshot.community.len(), snapshot.stage.community_len());
            prop_assert_eq!(snapshot.cards_remaining + snapshot.community.len(), 48);
            prop_assert_eq!(snapshot.is_hand_complete, snapshot.stage == Stage::Done);
            last = snapshot.stage;
        }

        let expected = Stage::ALL[advances.min(4)];
        prop_assert_eq!(engine.stage(), expected);
    }

    #[test]
    fn new_hand_always_starts_clean(seed in any::<u64>(), advances in 0usize..6, hands in 1usize..4) {
        let engine = HandEngine::new(HandOptions::default(), seed);

        for _ in 0..hands {
            for _ in 0..advances {
                engine.advance_stage().unwrap();
            }
            let snapshot = engine.start_new_hand();
            prop_assert_eq!(snapshot.stage, Stage::Preflop);
            prop_assert!(snapshot.community.is_empty());
            prop_assert_eq!(snapshot.cards_remaining, 48);

            let seats: BTreeSet<Card> = snapshot.player.iter().chain(&snapshot.opponent).copied().collect();
            prop_assert_eq!(seats.len(), 4);
            prop_assert!(engine.state.lock().burned().is_empty());
        }
    }
}
