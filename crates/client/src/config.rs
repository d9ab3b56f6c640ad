//! Client configuration structures and loaders.
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use fight_runtime::{Personality, RoundSettings, Throttled};

/// Everything the binary needs to set up and run a match.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub data_dir: PathBuf,
    /// Character file names (without `.ron`) for P1 and P2.
    pub characters: [String; 2],
    pub personalities: [Personality; 2],
    pub best_of: u32,
    pub tick_limit: u64,
    /// Ticks between rule-based decisions.
    pub decision_delay: u64,
    /// Match seed; unset means derive one from the clock.
    pub seed: Option<u64>,
    pub session_id: Option<String>,
    pub log_dir: Option<PathBuf>,
    /// Write a JSON-lines transcript next to the log file.
    pub transcript: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("crates/game/content/data"),
            characters: ["kfm".to_owned(), "suave".to_owned()],
            personalities: [Personality::Aggressive, Personality::Balanced],
            best_of: 3,
            tick_limit: RoundSettings::DEFAULT_TICK_LIMIT,
            decision_delay: Throttled::<()>::DEFAULT_DELAY,
            seed: None,
            session_id: None,
            log_dir: None,
            transcript: true,
        }
    }
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `FIGHT_DATA_DIR` - Content directory (default: `crates/game/content/data`)
    /// - `FIGHT_P1`, `FIGHT_P2` - Character names (default: `kfm`, `suave`)
    /// - `FIGHT_P1_AI`, `FIGHT_P2_AI` - `aggressive`, `defensive` or `balanced`
    /// - `FIGHT_ROUNDS` - Best-of round count (default: 3)
    /// - `FIGHT_TICK_LIMIT` - Ticks per round before time over (default: 5940)
    /// - `FIGHT_DECISION_DELAY` - Ticks between AI decisions (default: 10)
    /// - `FIGHT_SEED` - Match seed (default: clock-derived)
    /// - `FIGHT_SESSION_ID` - Session identifier for log files (default: auto-generated)
    /// - `FIGHT_LOG_DIR` - Log directory (default: platform cache dir)
    /// - `FIGHT_TRANSCRIPT` - Write the JSON-lines transcript (default: true)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = env::var("FIGHT_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }

        for (slot, key) in ["FIGHT_P1", "FIGHT_P2"].into_iter().enumerate() {
            if let Ok(name) = env::var(key) {
                config.characters[slot] = name;
            }
        }
        for (slot, key) in ["FIGHT_P1_AI", "FIGHT_P2_AI"].into_iter().enumerate() {
            if let Some(personality) = read_env::<Personality>(key) {
                config.personalities[slot] = personality;
            }
        }

        if let Some(rounds) = read_env::<u32>("FIGHT_ROUNDS") {
            config.best_of = rounds.max(1);
        }
        if let Some(limit) = read_env::<u64>("FIGHT_TICK_LIMIT") {
            config.tick_limit = limit.max(1);
        }
        if let Some(delay) = read_env::<u64>("FIGHT_DECISION_DELAY") {
            config.decision_delay = delay;
        }

        config.seed = read_env::<u64>("FIGHT_SEED");
        config.session_id = env::var("FIGHT_SESSION_ID").ok();
        config.log_dir = env::var("FIGHT_LOG_DIR").ok().map(PathBuf::from);

        if let Some(enable) = read_env::<bool>("FIGHT_TRANSCRIPT") {
            config.transcript = enable;
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: FromStr,
{
    env::var(key).ok()?.parse().ok()
}
