//! Best-of-N matches.

use fight_core::{FightConfig, Fighter, FighterId, Tick};
use serde::{Deserialize, Serialize};

use crate::decision::DecisionSource;
use crate::error::{Result, RuntimeError};
use crate::log::{EventSink, FightEvent};
use crate::round::{Round, RoundOutcome, RoundSettings};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatchSettings {
    /// Maximum rounds played; a fighter needs a strict majority to win early.
    pub best_of: u32,
    pub round: RoundSettings,
}

impl Default for MatchSettings {
    fn default() -> Self {
        Self {
            best_of: 3,
            round: RoundSettings::default(),
        }
    }
}

impl MatchSettings {
    /// Round wins that decide the match.
    pub fn wins_needed(&self) -> u32 {
        self.best_of / 2 + 1
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    pub number: u32,
    pub outcome: RoundOutcome,
    pub ticks: Tick,
    pub health: [u32; 2],
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub rounds: Vec<RoundResult>,
    pub wins: [u32; 2],
    /// `None` when the rounds ran out without a majority.
    pub winner: Option<FighterId>,
}

/// A match between two loaded fighters.
///
/// Every round starts from the fighters' specs (full health, round-start
/// marks, idle action); character assets are shared across rounds. Decision
/// sources persist across rounds.
pub struct Match<'a> {
    fighters: &'a [Fighter; 2],
    config: &'a FightConfig,
    settings: MatchSettings,
    sources: [Box<dyn DecisionSource + 'a>; 2],
}

impl<'a> Match<'a> {
    pub fn new(
        fighters: &'a [Fighter; 2],
        config: &'a FightConfig,
        settings: MatchSettings,
        sources: [Box<dyn DecisionSource + 'a>; 2],
    ) -> Self {
        Self {
            fighters,
            config,
            settings,
            sources,
        }
    }

    pub fn settings(&self) -> &MatchSettings {
        &self.settings
    }

    /// Plays rounds until one fighter has a majority or `best_of` rounds ran.
    pub fn run(&mut self, sink: &mut dyn EventSink) -> Result<MatchResult> {
        if self.settings.best_of == 0 {
            return Err(RuntimeError::NoRounds);
        }

        let needed = self.settings.wins_needed();
        let mut wins = [0u32; 2];
        let mut rounds = Vec::new();

        for number in 1..=self.settings.best_of {
            let mut round = Round::new(number, self.fighters, self.config, self.settings.round);
            let outcome = round.run(&mut self.sources, sink)?;

            if let Some(winner) = outcome.winner() {
                wins[winner.index()] += 1;
            }
            rounds.push(RoundResult {
                number,
                outcome,
                ticks: round.state().tick,
                health: round.health(),
            });

            if wins.iter().any(|&w| w >= needed) {
                break;
            }
        }

        let winner = match wins[0].cmp(&wins[1]) {
            std::cmp::Ordering::Greater => Some(FighterId::P1),
            std::cmp::Ordering::Less => Some(FighterId::P2),
            std::cmp::Ordering::Equal => None,
        };
        tracing::info!(?winner, ?wins, rounds = rounds.len(), "match over");
        sink.record(&FightEvent::MatchEnded { winner, wins })?;
        sink.flush()?;

        Ok(MatchResult {
            rounds,
            wins,
            winner,
        })
    }
}
