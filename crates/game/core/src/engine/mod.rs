//! Run driver: plays a campaign from the title banner to one of its endings.
//!
//! The [`GameEngine`] owns the campaign content and configuration. A run
//! builds the player, plays each scenario in order while the player is
//! alive, and narrates the ending. Callers supply the narrator and input
//! source; the engine pairs them with its own configuration in a
//! [`PlayContext`], so one run always follows one rule set.

mod context;

pub use context::PlayContext;

use crate::campaign::{Campaign, Story};
use crate::combatant::Player;
use crate::config::GameConfig;
use crate::error::ContentError;
use crate::event::{GameEvent, Narrator};
use crate::provider::InputSource;
use crate::scenario::{Scenario, ScenarioOutcome};

/// How a run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RunOutcome {
    Victory,
    Defeat,
}

/// Final summary of a run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunReport {
    pub player_name: String,
    pub outcome: RunOutcome,
    /// Scenarios started, i.e. the length of the campaign prefix the player
    /// entered alive.
    pub scenarios_played: usize,
    pub final_health: i32,
}

/// Game engine that sequences scenarios and reports the outcome.
pub struct GameEngine {
    config: GameConfig,
    story: Story,
    scenarios: Vec<Scenario>,
}

impl GameEngine {
    /// Creates an engine, validating that a player can be built from the
    /// configuration and that there is something to play.
    pub fn new(
        config: GameConfig,
        story: Story,
        scenarios: Vec<Scenario>,
    ) -> Result<Self, ContentError> {
        if scenarios.is_empty() {
            return Err(ContentError::EmptyCampaign);
        }
        config.validate()?;

        Ok(Self {
            config,
            story,
            scenarios,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn story(&self) -> &Story {
        &self.story
    }

    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    /// Runs a full game: banner, name prompt, prologue, then the campaign.
    pub fn run(
        &self,
        narrator: &mut dyn Narrator,
        input: &mut dyn InputSource,
    ) -> Result<RunReport, ContentError> {
        let mut ctx = PlayContext::new(narrator, input, &self.config);
        ctx.narrate(GameEvent::Banner {
            title: self.story.title.clone(),
        });
        ctx.narrate(GameEvent::NamePrompt {
            title: self.story.title.clone(),
        });

        let name = ctx
            .input
            .read_name()
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| self.config.default_player_name.clone());
        ctx.narrate(GameEvent::Welcome { name: name.clone() });

        for line in &self.story.prologue {
            ctx.narrate(GameEvent::Prologue(line.clone()));
        }

        let player = Player::new(name, self.config.starting_health, self.config.attack_power)?;
        let mut campaign = Campaign::new(player, self.scenarios.clone())?;

        Ok(self.play_with(&mut campaign, &mut ctx))
    }

    /// Plays every scenario of `campaign` in order, stopping as soon as the
    /// player is no longer alive, then narrates the matching ending.
    pub fn play(
        &self,
        campaign: &mut Campaign,
        narrator: &mut dyn Narrator,
        input: &mut dyn InputSource,
    ) -> RunReport {
        let mut ctx = PlayContext::new(narrator, input, &self.config);
        self.play_with(campaign, &mut ctx)
    }

    fn play_with(&self, campaign: &mut Campaign, ctx: &mut PlayContext<'_>) -> RunReport {
        let (player, scenarios) = campaign.parts_mut();
        let mut scenarios_played = 0;

        for (index, scenario) in scenarios.iter().enumerate() {
            if !player.is_alive() {
                tracing::info!(index, "player fell, skipping remaining scenarios");
                break;
            }

            tracing::info!(index, kind = scenario.kind(), health = player.health(), "scenario started");
            let outcome = scenario.play(player, ctx);
            scenarios_played += 1;

            match outcome {
                ScenarioOutcome::Choice(choice) => {
                    tracing::info!(index, ?choice, health = player.health(), "scenario finished");
                }
                ScenarioOutcome::Battle(battle) => {
                    tracing::info!(
                        index,
                        outcome = ?battle.outcome,
                        rounds = battle.rounds,
                        health = player.health(),
                        "battle finished"
                    );
                }
            }
        }

        let outcome = if player.is_alive() {
            ctx.narrate(GameEvent::Triumph(self.story.triumph.clone()));
            for line in &self.story.epilogue {
                ctx.narrate(GameEvent::Epilogue(line.clone()));
            }
            RunOutcome::Victory
        } else {
            ctx.narrate(GameEvent::GameOver(self.story.game_over.clone()));
            RunOutcome::Defeat
        };

        tracing::info!(%outcome, scenarios_played, health = player.health(), "run finished");

        RunReport {
            player_name: player.name().to_string(),
            outcome,
            scenarios_played,
            final_health: player.health(),
        }
    }
}
