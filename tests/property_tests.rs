//! Property tests for the bid order and whole rounds.

use proptest::prelude::*;

use liars_dice::core::{count_face, is_legal_bid, Bid, DiceSet, Face, PlayerMap, RoundConfig};
use liars_dice::policy::{ConservativeChallenger, DecisionPolicy, ExpectedValuePolicy, RandomBidder};
use liars_dice::round::RoundEngine;

fn any_bid() -> impl Strategy<Value = Bid> {
    (1u32..40, 1u8..=6).prop_map(|(quantity, face)| Bid::from_values(quantity, face).unwrap())
}

fn any_dice(len: usize) -> impl Strategy<Value = DiceSet> {
    prop::collection::vec(1u8..=6, len).prop_map(|values| DiceSet::from_values(&values).unwrap())
}

proptest! {
    #[test]
    fn opening_bid_is_always_legal(bid in any_bid()) {
        prop_assert!(is_legal_bid(&bid, None));
    }

    #[test]
    fn bid_order_is_irreflexive(bid in any_bid()) {
        prop_assert!(!is_legal_bid(&bid, Some(&bid)));
    }

    #[test]
    fn bid_order_is_transitive(a in any_bid(), b in any_bid(), c in any_bid()) {
        if is_legal_bid(&b, Some(&a)) && is_legal_bid(&c, Some(&b)) {
            prop_assert!(is_legal_bid(&c, Some(&a)));
        }
    }

    #[test]
    fn bid_order_is_total(a in any_bid(), b in any_bid()) {
        if a != b {
            prop_assert!(is_legal_bid(&a, Some(&b)) ^ is_legal_bid(&b, Some(&a)));
        }
    }

    #[test]
    fn count_face_matches_manual_count(
        sets in prop::collection::vec(any_dice(5), 2..6),
        face in 1u8..=6,
    ) {
        let face = Face::new(face).unwrap();
        let expected: u32 = sets
            .iter()
            .flat_map(|set| set.faces().iter())
            .filter(|&&f| f == face)
            .count() as u32;

        let dice = PlayerMap::new(sets.len(), |p| sets[p.index()].clone());
        prop_assert_eq!(count_face(&dice, face), expected);
    }

    #[test]
    fn random_rounds_keep_invariants(
        seed in any::<u64>(),
        player_count in 2usize..7,
        dice_per_player in 1usize..6,
    ) {
        let config = RoundConfig::new().with_dice_per_player(dice_per_player);
        let policies: Vec<Box<dyn DecisionPolicy>> = (0..player_count)
            .map(|seat| -> Box<dyn DecisionPolicy> {
                if seat % 2 == 0 {
                    Box::new(RandomBidder::new(seed.wrapping_add(seat as u64)).with_max_jump(1))
                } else {
                    Box::new(ConservativeChallenger::new(0))
                }
            })
            .collect();

        let outcome = RoundEngine::new(policies, config, liars_dice::GameRng::new(seed))
            .unwrap()
            .play_round_recorded();

        prop_assert!(outcome.winner.index() < player_count);
        prop_assert!(outcome.history.is_strictly_increasing());
        prop_assert_eq!(outcome.actions.len(), outcome.history.len() + 1);
        prop_assert!(outcome.dice.values().all(|set| set.len() == dice_per_player));
    }

    #[test]
    fn expected_value_never_opens_with_challenge(dice in any_dice(5), total in 10u32..40) {
        let policy = ExpectedValuePolicy::new(total);
        let action = policy.choose_action(&dice, &Default::default());
        prop_assert!(!action.is_challenge());
    }
}
