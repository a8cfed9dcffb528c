//! The round engine.
//!
//! Owns the dice, the bid history, and turn order for exactly one round.
//! Each turn the current player's policy is shown its own dice and the
//! public history; the returned action is validated and either recorded or
//! used to end the round.
//!
//! ## Example
//!
//! ```
//! use liars_dice::policy::{ConservativeChallenger, DecisionPolicy, ExpectedValuePolicy};
//! use liars_dice::round::RoundEngine;
//!
//! let policies: Vec<Box<dyn DecisionPolicy>> = vec![
//!     Box::new(ConservativeChallenger::default()),
//!     Box::new(ExpectedValuePolicy::new(10)),
//! ];
//! let engine = RoundEngine::with_seed(policies, 42).unwrap();
//! let winner = engine.play_round();
//! assert!(winner.index() < 2);
//! ```

use tracing::{debug, info, info_span, warn};

use crate::core::{
    count_face, is_legal_bid, Action, ActionRecord, ConfigError, DiceSet, DiceSource, GameRng,
    GameRngState, History, PlayerId, PlayerMap, RoundConfig,
};
use crate::policy::DecisionPolicy;

use super::outcome::{Forfeit, Resolution, RoundOutcome, RoundPhase};

/// Plays a single round of Liar's Dice.
///
/// Construct one per round; `play_round` consumes the engine.
pub struct RoundEngine<R: DiceSource = GameRng> {
    policies: Vec<Box<dyn DecisionPolicy>>,
    config: RoundConfig,
    source: R,
    /// Empty sets until the roll.
    dice: PlayerMap<DiceSet>,
    history: History,
    actions: Vec<ActionRecord>,
    phase: RoundPhase,
    resolution: Option<Resolution>,
    checkpoint: Option<GameRngState>,
}

impl RoundEngine<GameRng> {
    /// Create an engine with the standard configuration and a seeded RNG.
    pub fn with_seed(
        policies: Vec<Box<dyn DecisionPolicy>>,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        Self::new(policies, RoundConfig::default(), GameRng::new(seed))
    }
}

impl<R: DiceSource> RoundEngine<R> {
    /// Create an engine seating one player per policy, in order.
    ///
    /// Fails if there are fewer than two policies, more than 255, or the
    /// configuration rolls no dice.
    pub fn new(
        policies: Vec<Box<dyn DecisionPolicy>>,
        config: RoundConfig,
        source: R,
    ) -> Result<Self, ConfigError> {
        config.validate(policies.len())?;

        Ok(Self {
            dice: PlayerMap::with_value(policies.len(), DiceSet::default()),
            policies,
            config,
            source,
            history: History::new(),
            actions: Vec::new(),
            phase: RoundPhase::Rolling,
            resolution: None,
            checkpoint: None,
        })
    }

    /// Number of seated players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.policies.len()
    }

    /// The round configuration.
    #[must_use]
    pub fn config(&self) -> &RoundConfig {
        &self.config
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Bids accepted so far.
    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Every player's dice, once rolled.
    #[must_use]
    pub fn dice(&self) -> Option<&PlayerMap<DiceSet>> {
        (self.phase != RoundPhase::Rolling).then_some(&self.dice)
    }

    /// Actions taken so far, including a final challenge or forfeit.
    #[must_use]
    pub fn actions(&self) -> &[ActionRecord] {
        &self.actions
    }

    /// How the round ended, once it has.
    #[must_use]
    pub fn resolution(&self) -> Option<&Resolution> {
        self.resolution.as_ref()
    }

    /// Roll `count` dice from this engine's source.
    pub fn roll(&mut self, count: usize) -> DiceSet {
        DiceSet::roll(&mut self.source, count)
    }

    /// Advance by one transition: the roll, or one player's turn.
    ///
    /// Does nothing once the round is resolved.
    pub fn step(&mut self) -> RoundPhase {
        match self.phase {
            RoundPhase::Rolling => self.roll_table(),
            RoundPhase::Turn(player) => self.take_turn(player),
            RoundPhase::Resolved(_) => {}
        }
        self.phase
    }

    /// Play the round to completion and return the winner.
    pub fn play_round(mut self) -> PlayerId {
        self.run().winner()
    }

    /// Play the round to completion and return a full record of it.
    pub fn play_round_recorded(mut self) -> RoundOutcome {
        let resolution = self.run();

        RoundOutcome {
            winner: resolution.winner(),
            resolution,
            policies: self.policies.iter().map(|p| p.name().to_string()).collect(),
            dice: self.dice,
            history: self.history,
            actions: self.actions,
            rng_checkpoint: self.checkpoint,
            config: self.config,
        }
    }

    fn run(&mut self) -> Resolution {
        let span = info_span!("round", players = self.player_count());
        let _guard = span.enter();

        loop {
            if let Some(resolution) = self.resolution {
                return resolution;
            }
            self.step();
        }
    }

    fn roll_table(&mut self) {
        self.checkpoint = self.source.checkpoint();

        let count = self.config.dice_per_player;
        let source = &mut self.source;
        self.dice = PlayerMap::new(self.policies.len(), |_| DiceSet::roll(&mut *source, count));

        debug!(
            players = self.player_count(),
            dice_per_player = count,
            "dice rolled"
        );
        self.phase = RoundPhase::Turn(PlayerId::new(0));
    }

    fn take_turn(&mut self, player: PlayerId) {
        let player_count = self.player_count();
        let previous = player.previous(player_count);

        let action = self.policies[player.index()].choose_action(&self.dice[player], &self.history);
        let turn = self.actions.len() as u32;
        self.actions.push(ActionRecord::new(player, action, turn));

        let forfeit = |reason| Resolution::Forfeit {
            offender: player,
            winner: previous,
            reason,
        };

        let resolution = match action {
            Action::Challenge => match self.history.last() {
                Some(&bid) => Resolution::Challenge {
                    challenger: player,
                    bidder: previous,
                    bid,
                    count: count_face(&self.dice, bid.face),
                },
                None => forfeit(Forfeit::ChallengeWithoutBid),
            },
            Action::Bid(bid) if !bid.is_well_formed() => forfeit(Forfeit::MalformedBid { bid }),
            Action::Bid(bid) => match self.history.last() {
                Some(&last) if !is_legal_bid(&bid, Some(&last)) => {
                    forfeit(Forfeit::IllegalBid { bid, last })
                }
                _ if self.config.cap_quantity
                    && bid.quantity as usize > self.config.total_dice(player_count) =>
                {
                    forfeit(Forfeit::ImplausibleBid {
                        bid,
                        total_dice: self.config.total_dice(player_count) as u32,
                    })
                }
                _ => {
                    debug!(player = player.index(), turn, %bid, "bid accepted");
                    self.history.push(bid);
                    self.phase = RoundPhase::Turn(player.next(player_count));
                    return;
                }
            },
        };

        self.resolve(resolution);
    }

    fn resolve(&mut self, resolution: Resolution) {
        let winner = resolution.winner();

        match resolution {
            Resolution::Forfeit {
                offender, reason, ..
            } => {
                warn!(
                    player = offender.index(),
                    policy = self.policies[offender.index()].name(),
                    ?reason,
                    "policy forfeited the round"
                );
            }
            Resolution::Challenge { bid, count, .. } => {
                debug!(%bid, count, "challenge resolved");
            }
        }
        info!(winner = winner.index(), turns = self.actions.len(), "round over");

        self.resolution = Some(resolution);
        self.phase = RoundPhase::Resolved(winner);
    }
}
