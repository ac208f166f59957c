//! Cross-configuration invariants, swept by proptest.

use proptest::prelude::*;
use steeplechase::{GameBuilder, Knight, RANKS_PER_SUIT};

proptest! {
    /// Any valid configuration starts clean: rows zero, cells face down,
    /// nothing in hand, and the draw pile holding the rest of the deck.
    #[test]
    fn prop_initial_state(players in 2usize..=4, length in 4usize..=7, seed in any::<u64>()) {
        let game = GameBuilder::new()
            .players(players)
            .length(length)
            .build(seed)
            .unwrap();

        prop_assert!(game.knights().iter().all(|k| k.row() == 0));
        prop_assert!(game.steps().iter().all(|c| c.is_hidden() && !c.is_pending()));
        prop_assert_eq!(game.top_card(), None);
        prop_assert_eq!(game.deck_remaining(), players * 12 - players - length);
    }

    /// Every race terminates, and along the way the card count is conserved
    /// and the cached rearmost row matches a recount.
    #[test]
    fn prop_race_invariants_hold_to_termination(
        players in 2usize..=4,
        length in 4usize..=7,
        seed in any::<u64>(),
    ) {
        let mut game = GameBuilder::new()
            .players(players)
            .length(length)
            .build(seed)
            .unwrap();
        let total = players * RANKS_PER_SUIT as usize;

        let mut finished = false;
        for _ in 0..2000 {
            finished = game.advance();

            let counted = game.deck_remaining()
                + game.discard_remaining()
                + game.steps().len()
                + game.knights().len()
                + usize::from(game.top_card().is_some());
            prop_assert_eq!(counted, total);

            let true_min = game.knights().iter().map(Knight::row).min().unwrap();
            prop_assert_eq!(game.min_row(), true_min);
            prop_assert!(true_min >= 0);

            if finished {
                break;
            }
        }
        prop_assert!(finished, "race stalled past 2000 ticks");
    }

    /// Identical seeds replay identical races regardless of configuration.
    #[test]
    fn prop_seed_determinism(players in 2usize..=4, length in 4usize..=7, seed in any::<u64>()) {
        let build = || {
            GameBuilder::new()
                .players(players)
                .length(length)
                .build(seed)
                .unwrap()
        };
        let mut a = build();
        let mut b = build();

        prop_assert_eq!(a.snapshot(), b.snapshot());
        for _ in 0..40 {
            let fa = a.advance();
            let fb = b.advance();
            prop_assert_eq!(fa, fb);
            prop_assert_eq!(a.snapshot(), b.snapshot());
            if fa {
                break;
            }
        }
    }
}
