//! N-player rounds with the built-in policies.
//!
//! These verify the engine has no hidden 2-player assumptions and that the
//! built-in policies always bring a round to an end.

use liars_dice::core::{Action, Bid, DiceSet, Face, History, PlayerId, RoundConfig};
use liars_dice::policy::{
    ConservativeChallenger, DecisionPolicy, ExpectedValuePolicy, RandomBidder,
};
use liars_dice::round::{Resolution, RoundEngine, RoundOutcome};
use liars_dice::ConfigError;

/// Seat `player_count` players, cycling through the built-in policies.
fn mixed_table(
    player_count: usize,
    config: &RoundConfig,
    seed: u64,
) -> Vec<Box<dyn DecisionPolicy>> {
    (0..player_count)
        .map(|seat| -> Box<dyn DecisionPolicy> {
            match seat % 3 {
                0 => Box::new(ExpectedValuePolicy::for_round(config, player_count)),
                1 => Box::new(ConservativeChallenger::default()),
                _ => Box::new(RandomBidder::new(seed ^ seat as u64)),
            }
        })
        .collect()
}

fn play_mixed(player_count: usize, seed: u64) -> RoundOutcome {
    let config = RoundConfig::default();
    let policies = mixed_table(player_count, &config, seed);
    RoundEngine::new(policies, config, liars_dice::GameRng::new(seed))
        .unwrap()
        .play_round_recorded()
}

#[test]
fn test_winner_in_range_for_all_table_sizes() {
    for player_count in 2..=8 {
        for seed in 0..25 {
            let outcome = play_mixed(player_count, seed);

            assert_eq!(outcome.player_count(), player_count);
            assert!(outcome.winner.index() < player_count);
            assert!(outcome.history.is_strictly_increasing());
        }
    }
}

#[test]
fn test_builtin_policies_terminate_quickly() {
    // Each policy stops raising once bids pass what the table can plausibly hold.
    for seed in 0..100 {
        let outcome = play_mixed(4, seed);
        let total_dice = outcome.config.total_dice(4) as u32;

        assert!(outcome.turns() <= (total_dice as usize + 2) * 6 + 2);
        assert!(outcome.history.last().map_or(true, |b| b.quantity <= total_dice + 2));
    }
}

#[test]
fn test_builtin_policies_never_forfeit() {
    for player_count in 2..=6 {
        for seed in 0..30 {
            let outcome = play_mixed(player_count, seed);
            assert!(
                !outcome.resolution.is_forfeit(),
                "{player_count} players, seed {seed}: {:?}",
                outcome.resolution
            );
        }
    }
}

#[test]
fn test_every_seat_acts_before_repeating() {
    let outcome = play_mixed(5, 17);

    for (i, record) in outcome.actions.iter().enumerate() {
        assert_eq!(record.player, PlayerId::new((i % 5) as u8));
    }
}

#[test]
fn test_dice_per_player_respected() {
    let config = RoundConfig::new().with_dice_per_player(3);
    let policies = mixed_table(6, &config, 8);
    let outcome = RoundEngine::new(policies, config, liars_dice::GameRng::new(8))
        .unwrap()
        .play_round_recorded();

    assert!(outcome.dice.values().all(|set| set.len() == 3));
    assert_eq!(outcome.policies[0], "expected-value");
    assert_eq!(outcome.policies[1], "conservative");
    assert_eq!(outcome.policies[2], "random-bidder");
}

#[test]
fn test_largest_table() {
    let outcome = play_mixed(255, 3);
    assert!(outcome.winner.index() < 255);
}

#[test]
fn test_table_size_limits() {
    let config = RoundConfig::default();

    let one = mixed_table(1, &config, 0);
    assert!(matches!(
        RoundEngine::with_seed(one, 0),
        Err(ConfigError::TooFewPlayers { count: 1 })
    ));

    let none: Vec<Box<dyn DecisionPolicy>> = Vec::new();
    assert!(matches!(
        RoundEngine::with_seed(none, 0),
        Err(ConfigError::TooFewPlayers { count: 0 })
    ));

    let crowd: Vec<Box<dyn DecisionPolicy>> = (0..256)
        .map(|_| Box::new(ConservativeChallenger::default()) as Box<dyn DecisionPolicy>)
        .collect();
    assert!(matches!(
        RoundEngine::with_seed(crowd, 0),
        Err(ConfigError::TooManyPlayers { count: 256 })
    ));
}

#[test]
fn test_builtin_policies_answer_ceiling_bid() {
    let followers: Vec<Box<dyn DecisionPolicy>> = vec![
        Box::new(RandomBidder::new(1).with_challenge_probability(0.0)),
        Box::new(RandomBidder::new(2).with_challenge_probability(0.0).with_max_jump(u32::MAX)),
        Box::new(ExpectedValuePolicy::new(10)),
        Box::new(ConservativeChallenger::default()),
        Box::new(ConservativeChallenger::new(u32::MAX)),
    ];
    let ceiling = Bid::new(u32::MAX, Face::SIX);

    for follower in followers {
        let name = follower.name().to_string();
        let opener = move |_: &DiceSet, _: &History| Action::Bid(ceiling);
        let policies: Vec<Box<dyn DecisionPolicy>> = vec![Box::new(opener), follower];

        let outcome = RoundEngine::with_seed(policies, 1)
            .unwrap()
            .play_round_recorded();

        // Nobody holds u32::MAX sixes, so the challenged opener wins.
        assert!(
            matches!(outcome.resolution, Resolution::Challenge { bid, .. } if bid == ceiling),
            "{name}: {:?}",
            outcome.resolution
        );
        assert_eq!(outcome.winner, PlayerId::new(0), "{name}");
    }
}
