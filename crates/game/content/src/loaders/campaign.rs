//! Campaign loader.
//!
//! Loads the story text and scenario list from RON and resolves them into
//! validated `game-core` scenarios.

use std::path::Path;

use anyhow::Context;
use game_core::{ChoiceScenario, Enemy, Scenario, Story};
use serde::Deserialize;

use crate::loaders::{LoadResult, read_file};

/// Serialized form of a campaign file.
///
/// RON format:
/// ```ron
/// (
///     story: (title: "...", prologue: [...], triumph: "...", epilogue: [...], game_over: "..."),
///     scenarios: [
///         Choice(description: "...", options: [(label: "...", outcome: -10, result: "...")]),
///         Battle(enemy: (name: "Goblin", health: 30, attack_power: 10)),
///     ],
/// )
/// ```
#[derive(Clone, Debug, Deserialize)]
pub struct CampaignSpec {
    pub story: Story,
    pub scenarios: Vec<ScenarioSpec>,
}

#[derive(Clone, Debug, Deserialize)]
pub enum ScenarioSpec {
    Choice {
        description: String,
        options: Vec<ChoiceOptionSpec>,
    },
    Battle {
        enemy: EnemySpec,
    },
}

/// One selectable option together with its outcome and result line.
#[derive(Clone, Debug, Deserialize)]
pub struct ChoiceOptionSpec {
    pub label: String,
    pub outcome: i32,
    pub result: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct EnemySpec {
    pub name: String,
    pub health: i32,
    pub attack_power: i32,
}

impl ScenarioSpec {
    /// Resolves this spec into a validated scenario.
    pub fn resolve(self) -> Result<Scenario, game_core::ContentError> {
        match self {
            Self::Choice {
                description,
                options,
            } => {
                let mut choices = Vec::with_capacity(options.len());
                let mut outcomes = Vec::with_capacity(options.len());
                let mut results = Vec::with_capacity(options.len());
                for option in options {
                    choices.push(option.label);
                    outcomes.push(option.outcome);
                    results.push(option.result);
                }
                ChoiceScenario::new(description, choices, outcomes, results).map(Scenario::from)
            }
            Self::Battle { enemy } => {
                Enemy::new(enemy.name, enemy.health, enemy.attack_power).map(Scenario::battle)
            }
        }
    }
}

/// Story and scenarios ready to hand to the engine.
#[derive(Clone, Debug)]
pub struct CampaignContent {
    pub story: Story,
    pub scenarios: Vec<Scenario>,
}

/// Loader for campaign content from RON files.
pub struct CampaignLoader;

impl CampaignLoader {
    /// Load the campaign bundled with the crate.
    pub fn embedded() -> LoadResult<CampaignContent> {
        Self::parse(include_str!("../../data/campaign.ron"))
            .context("Failed to load embedded campaign")
    }

    /// Load a campaign from a RON file.
    pub fn load(path: &Path) -> LoadResult<CampaignContent> {
        let content = read_file(path)?;
        Self::parse(&content).with_context(|| format!("Invalid campaign {}", path.display()))
    }

    /// Parse and validate campaign RON.
    ///
    /// Every scenario is validated; the first invalid one aborts the load.
    pub fn parse(source: &str) -> LoadResult<CampaignContent> {
        let spec: CampaignSpec = ron::from_str(source)
            .map_err(|e| anyhow::anyhow!("Failed to parse campaign RON: {}", e))?;

        if spec.scenarios.is_empty() {
            return Err(game_core::ContentError::EmptyCampaign.into());
        }

        let scenarios = spec
            .scenarios
            .into_iter()
            .enumerate()
            .map(|(index, scenario)| {
                scenario
                    .resolve()
                    .with_context(|| format!("Scenario #{} is invalid", index + 1))
            })
            .collect::<LoadResult<Vec<_>>>()?;

        tracing::debug!(
            title = %spec.story.title,
            scenarios = scenarios.len(),
            "campaign loaded"
        );

        Ok(CampaignContent {
            story: spec.story,
            scenarios,
        })
    }
}
