//! A single round: two fighters, a decision per fighter per tick, and an
//! outcome.

use fight_content::Character;
use fight_core::{
    Decision, Facing, FightConfig, FightEngine, FightEnv, FightState, Fighter, FighterId,
    FighterSpec, GameError, Position, TickOutcome,
};
use serde::{Deserialize, Serialize};

use crate::decision::{DecisionCache, DecisionSource, Observation};
use crate::error::{Result, RuntimeError};
use crate::log::{EventSink, FightEvent};

/// How a round ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RoundOutcome {
    /// Exactly one fighter was defeated.
    KnockOut { winner: FighterId },
    /// Both fighters were defeated on the same tick.
    DoubleKnockOut,
    /// The tick limit was reached; the healthier fighter wins, equal health draws.
    TimeOver { winner: Option<FighterId> },
}

impl RoundOutcome {
    pub fn winner(&self) -> Option<FighterId> {
        match *self {
            RoundOutcome::KnockOut { winner } => Some(winner),
            RoundOutcome::DoubleKnockOut => None,
            RoundOutcome::TimeOver { winner } => winner,
        }
    }

    /// Outcome implied by the state, if the round is over.
    pub fn judge(state: &FightState, tick_limit: u64) -> Option<Self> {
        let p1 = state.fighter(FighterId::P1);
        let p2 = state.fighter(FighterId::P2);

        match (p1.is_defeated(), p2.is_defeated()) {
            (true, true) => return Some(RoundOutcome::DoubleKnockOut),
            (true, false) => return Some(RoundOutcome::KnockOut { winner: FighterId::P2 }),
            (false, true) => return Some(RoundOutcome::KnockOut { winner: FighterId::P1 }),
            (false, false) => {}
        }

        if state.tick.0 < tick_limit {
            return None;
        }
        let winner = match p1.health.current.cmp(&p2.health.current) {
            std::cmp::Ordering::Greater => Some(FighterId::P1),
            std::cmp::Ordering::Less => Some(FighterId::P2),
            std::cmp::Ordering::Equal => None,
        };
        Some(RoundOutcome::TimeOver { winner })
    }
}

/// Round-start placement: P1 left of centre facing right, P2 mirrored.
pub fn placement(config: &FightConfig, id: FighterId) -> (Position, Facing) {
    let center = config.stage_center();
    if id == FighterId::P1 {
        (
            Position::new(center - config.start_offset, config.ground_y),
            Facing::Right,
        )
    } else {
        (
            Position::new(center + config.start_offset, config.ground_y),
            Facing::Left,
        )
    }
}

/// Builds both fighters from loaded characters at their round-start marks.
///
/// A character's own `max_health` overrides the configured default.
pub fn spawn_fighters(characters: [&Character; 2], config: &FightConfig) -> Result<[Fighter; 2]> {
    let build = |id: FighterId| -> Result<Fighter> {
        let character = characters[id.index()];
        let (position, facing) = placement(config, id);
        let fighter = Fighter::builder(id)
            .name(character.assets.name.clone())
            .frames(character.assets.frames.clone())
            .sprites(character.assets.sprites.clone())
            .position(position)
            .facing(facing)
            .max_health(character.max_health.unwrap_or(config.max_health))
            .build()?;
        Ok(fighter)
    };
    Ok([build(FighterId::P1)?, build(FighterId::P2)?])
}

/// Limits of a single round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundSettings {
    /// Ticks before the round is judged on health.
    pub tick_limit: u64,
}

impl RoundSettings {
    /// 99 seconds at 60 ticks per second.
    pub const DEFAULT_TICK_LIMIT: u64 = 99 * 60;
}

impl Default for RoundSettings {
    fn default() -> Self {
        Self {
            tick_limit: Self::DEFAULT_TICK_LIMIT,
        }
    }
}

/// One round in progress.
///
/// Owns the mutable fight state and each fighter's cached decision. Fighter
/// assets and config are borrowed for the round's lifetime.
pub struct Round<'a> {
    number: u32,
    fighters: &'a [Fighter; 2],
    env: FightEnv<'a>,
    settings: RoundSettings,
    state: FightState,
    decisions: DecisionCache,
    outcome: Option<RoundOutcome>,
}

impl<'a> Round<'a> {
    /// Starts a round with both fighters at full health on their marks.
    pub fn new(
        number: u32,
        fighters: &'a [Fighter; 2],
        config: &'a FightConfig,
        settings: RoundSettings,
    ) -> Self {
        let env = FightEnv::new(&fighters[0].assets.frames, &fighters[1].assets.frames, config);
        let specs: [FighterSpec; 2] = [fighters[0].spec, fighters[1].spec];
        Self {
            number,
            fighters,
            env,
            settings,
            state: FightState::from_specs(&specs),
            decisions: DecisionCache::new(),
            outcome: None,
        }
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn state(&self) -> &FightState {
        &self.state
    }

    pub fn outcome(&self) -> Option<RoundOutcome> {
        self.outcome
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn health(&self) -> [u32; 2] {
        FighterId::BOTH.map(|id| self.state.fighter(id).health.current)
    }

    /// Polls both sources and runs one engine tick.
    ///
    /// Returns `Ok(None)` when the round was already finished; no tick runs
    /// and no source is polled in that case.
    pub fn tick(
        &mut self,
        sources: &mut [Box<dyn DecisionSource + '_>; 2],
        sink: &mut dyn EventSink,
    ) -> Result<Option<TickOutcome>> {
        if self.is_finished() {
            return Ok(None);
        }

        let decisions = self.poll(sources, sink)?;
        let outcome = FightEngine::new(&mut self.state)
            .tick(&self.env, &decisions)
            .map_err(|source| {
                tracing::error!(
                    round = self.number,
                    code = source.error_code(),
                    severity = %source.severity(),
                    halts_round = source.severity().halts_round(),
                    "{source}"
                );
                RuntimeError::Tick {
                    round: self.number,
                    source,
                }
            })?;

        for hit in &outcome.hits {
            tracing::info!(
                round = self.number,
                tick = %hit.tick,
                attacker = %hit.attacker,
                defender = %hit.defender,
                damage = hit.damage,
                health = hit.defender_health,
                "hit"
            );
            sink.record(&FightEvent::Hit {
                round: self.number,
                hit: *hit,
            })?;
        }
        tracing::debug!(
            round = self.number,
            tick = %outcome.tick,
            p1_x = self.state.fighter(FighterId::P1).position.x,
            p2_x = self.state.fighter(FighterId::P2).position.x,
            "tick"
        );

        if let Some(result) = RoundOutcome::judge(&self.state, self.settings.tick_limit) {
            self.finish(result, sink)?;
        }
        Ok(Some(outcome))
    }

    /// Ticks until the round has an outcome.
    pub fn run(
        &mut self,
        sources: &mut [Box<dyn DecisionSource + '_>; 2],
        sink: &mut dyn EventSink,
    ) -> Result<RoundOutcome> {
        sink.record(&FightEvent::RoundStarted {
            round: self.number,
            fighters: FighterId::BOTH.map(|id| self.fighters[id.index()].assets.name.clone()),
            health: self.health(),
        })?;
        tracing::info!(round = self.number, "round started");

        loop {
            if let Some(outcome) = self.outcome {
                return Ok(outcome);
            }
            self.tick(sources, sink)?;
        }
    }

    fn poll(
        &mut self,
        sources: &mut [Box<dyn DecisionSource + '_>; 2],
        sink: &mut dyn EventSink,
    ) -> Result<[Decision; 2]> {
        for id in FighterId::BOTH {
            let view = Observation {
                round: self.number,
                tick: self.state.tick,
                me: self.state.fighter(id),
                opponent: self.state.fighter(id.opponent()),
            };
            let source = &mut sources[id.index()];
            let polled = source.poll(&view);
            if let Err(err) = &polled {
                sink.record(&FightEvent::DecisionFailed {
                    round: self.number,
                    tick: self.state.tick,
                    fighter: id,
                    reason: err.to_string(),
                })?;
            }
            self.decisions.resolve(id, polled, source.label());
        }
        Ok(*self.decisions.all())
    }

    fn finish(&mut self, outcome: RoundOutcome, sink: &mut dyn EventSink) -> Result<()> {
        self.outcome = Some(outcome);
        tracing::info!(
            round = self.number,
            tick = %self.state.tick,
            ?outcome,
            health = ?self.health(),
            "round over"
        );
        sink.record(&FightEvent::RoundEnded {
            round: self.number,
            tick: self.state.tick,
            outcome,
            health: self.health(),
        })?;
        Ok(())
    }
}
