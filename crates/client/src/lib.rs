//! Headless fight client: loads content, runs a match between two rule-based
//! opponents and reports the result.
//!
//! # Architecture
//!
//! ```text
//! fight (binary)
//!   ├─→ ClientConfig   (environment / .env)
//!   ├─→ fight-content  (characters + balance config from the data dir)
//!   ├─→ fight-runtime  (match driver, AI sources, transcript)
//!   └─→ logging        (stderr + per-session log file)
//! ```

pub mod config;
pub mod logging;

pub use config::ClientConfig;

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use fight_content::ContentFactory;
use fight_core::{FighterId, compute_seed};
use fight_runtime::{
    DecisionSource, EventSink, JsonLinesLog, Match, MatchResult, MatchSettings, NullSink,
    RoundSettings, RuleBasedAi, Throttled, spawn_fighters,
};

/// A resolved run: config plus the identifiers derived at startup.
pub struct Session {
    pub id: String,
    pub dir: PathBuf,
    pub seed: u64,
}

impl Session {
    pub fn new(config: &ClientConfig) -> Self {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        let id = config
            .session_id
            .clone()
            .unwrap_or_else(|| format!("session_{}", now.as_secs()));
        let dir = config
            .log_dir
            .clone()
            .unwrap_or_else(logging::default_log_directory)
            .join(&id);
        let seed = config.seed.unwrap_or(now.as_nanos() as u64);
        Self { id, dir, seed }
    }
}

/// A finished match and the display names it was played under.
pub struct MatchReport {
    /// Character names as loaded, e.g. "Kung Fu Man", in P1/P2 order.
    pub fighters: [String; 2],
    pub result: MatchResult,
}

impl MatchReport {
    pub fn summary(&self) -> String {
        summary(&self.result, [self.fighters[0].as_str(), self.fighters[1].as_str()])
    }
}

/// Loads content and plays one match.
pub fn run(config: &ClientConfig, session: &Session) -> Result<MatchReport> {
    let content = ContentFactory::new(&config.data_dir);
    let fight_config = content
        .load_config()
        .context("failed to load fight config")?;

    let [p1, p2] = &config.characters;
    let characters = [
        content
            .load_character(p1)
            .with_context(|| format!("failed to load character '{p1}'"))?,
        content
            .load_character(p2)
            .with_context(|| format!("failed to load character '{p2}'"))?,
    ];
    let fighters = spawn_fighters([&characters[0], &characters[1]], &fight_config)?;

    tracing::info!(
        session = %session.id,
        seed = session.seed,
        p1 = %fighters[0].assets.name,
        p2 = %fighters[1].assets.name,
        "starting match"
    );

    let sources = FighterId::BOTH.map(|id| opponent(config, session.seed, id));
    let settings = MatchSettings {
        best_of: config.best_of,
        round: RoundSettings {
            tick_limit: config.tick_limit,
        },
    };

    let mut sink = transcript(config, &session.dir)?;
    let result = Match::new(&fighters, &fight_config, settings, sources).run(sink.as_mut())?;
    let [p1, p2] = &fighters;
    Ok(MatchReport {
        fighters: [p1.assets.name.clone(), p2.assets.name.clone()],
        result,
    })
}

fn opponent<'a>(config: &ClientConfig, seed: u64, id: FighterId) -> Box<dyn DecisionSource + 'a> {
    let personality = config.personalities[id.index()];
    let ai = RuleBasedAi::new(personality, compute_seed(seed, 0, id.0, 0));
    Box::new(Throttled::new(ai, config.decision_delay))
}

fn transcript(config: &ClientConfig, dir: &Path) -> Result<Box<dyn EventSink>> {
    if !config.transcript {
        return Ok(Box::new(NullSink));
    }
    let log = JsonLinesLog::create(dir, "match.jsonl")?;
    tracing::info!("Transcript: {}/match.jsonl", dir.display());
    Ok(Box::new(log))
}

/// Human-readable summary printed when the match ends.
pub fn summary(result: &MatchResult, names: [&str; 2]) -> String {
    use std::fmt::Write;

    let mut out = String::new();
    for round in &result.rounds {
        let _ = writeln!(
            out,
            "Round {}: {:?} after {} ticks (health {} / {})",
            round.number, round.outcome, round.ticks, round.health[0], round.health[1]
        );
    }
    let verdict = match result.winner {
        Some(id) => format!("{} wins", names[id.index()]),
        None => "Draw".to_owned(),
    };
    let _ = writeln!(out, "{verdict} ({}-{})", result.wins[0], result.wins[1]);
    out
}
