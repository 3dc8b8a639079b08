//! Glue code tying content, the engine and the terminal together.
use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use game_content::{CampaignContent, CampaignLoader, ConfigLoader};
use game_core::{GameConfig, GameEngine, RunReport};

use crate::config::CliConfig;
use crate::input::TerminalInput;
use crate::presentation::TerminalNarrator;

/// Terminal frontend for a single play-through.
pub struct CliFrontend {
    config: CliConfig,
}

impl CliFrontend {
    pub fn new(config: CliConfig) -> Self {
        Self { config }
    }

    /// Loads the game rules and campaign, preferring on-disk overrides.
    pub fn load_content(&self) -> Result<(GameConfig, CampaignContent)> {
        let game_config = match &self.config.content.config_path {
            Some(path) => {
                tracing::info!("Loading game config from {}", path.display());
                ConfigLoader::load(path)?
            }
            None => ConfigLoader::embedded()?,
        };

        let campaign = match &self.config.content.campaign_path {
            Some(path) => {
                tracing::info!("Loading campaign from {}", path.display());
                CampaignLoader::load(path)?
            }
            None => CampaignLoader::embedded()?,
        };

        tracing::debug!(
            scenarios = campaign.scenarios.len(),
            title = %campaign.story.title,
            "content loaded"
        );
        Ok((game_config, campaign))
    }

    /// Plays one game on the process's stdin and stdout.
    pub fn run(&self) -> Result<RunReport> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run_with(stdin.lock(), stdout.lock())
    }

    /// Plays one game reading answers from `reader` and narrating to `writer`.
    pub fn run_with<R: BufRead, W: Write>(&self, reader: R, writer: W) -> Result<RunReport> {
        let (game_config, campaign) = self.load_content()?;
        let engine = GameEngine::new(game_config, campaign.story, campaign.scenarios)
            .context("Failed to set up the game")?;

        let mut narrator = TerminalNarrator::new(writer, self.config.ui.clone());
        let mut input = TerminalInput::new(reader);

        let report = engine.run(&mut narrator, &mut input)?;

        narrator
            .finish()
            .context("Failed to write narration to the terminal")?;

        tracing::info!(
            player = %report.player_name,
            outcome = %report.outcome,
            scenarios = report.scenarios_played,
            health = report.final_health,
            "run finished"
        );
        Ok(report)
    }
}
