//! Fantasy Quest client binary.
//!
//! Composition root: reads configuration from the environment (and a `.env`
//! file if present), installs file logging, then plays one game on the
//! terminal.
//!
//! ```bash
//! # Instant, uncolored output
//! QUEST_PACING_MS=0 QUEST_COLOR=false cargo run -p quest-client
//!
//! # Play a custom campaign
//! QUEST_CAMPAIGN=./my_campaign.ron cargo run -p quest-client
//! ```

use anyhow::Result;
use client_frontend_cli::{CliConfig, CliFrontend, logging};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = CliConfig::from_env();
    let _log_guard = logging::setup_logging(&config.logging)?;

    tracing::info!("Starting Fantasy Quest");
    tracing::debug!(?config, "client configuration");

    let report = CliFrontend::new(config).run()?;

    tracing::info!(
        "Client shutdown complete: {} ({} scenarios, health {})",
        report.outcome,
        report.scenarios_played,
        report.final_health
    );
    Ok(())
}
