//! Fight client binary.
//!
//! Composition root: reads configuration from the environment (and `.env`),
//! sets up logging, runs one match between two rule-based opponents and
//! prints the result.
//!
//! ```bash
//! FIGHT_P1_AI=defensive FIGHT_SEED=7 cargo run -p fight-client
//! ```

use anyhow::Result;
use fight_client::{ClientConfig, Session, logging};

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = ClientConfig::from_env();
    let session = Session::new(&config);
    let _guard = logging::setup_logging(&session.dir)?;

    tracing::info!("Session ID: {}", session.id);
    tracing::debug!(?config, "client config");

    let report = fight_client::run(&config, &session)?;
    print!("{}", report.summary());

    tracing::info!("Client shutdown complete");
    Ok(())
}
