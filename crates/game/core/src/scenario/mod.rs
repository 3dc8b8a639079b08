//! Scenario domain - the units a campaign is made of.
//!
//! A [`Scenario`] is a closed set of two variants:
//! - [`ChoiceScenario`]: present options, apply a fixed health outcome
//! - [`BattleScenario`]: fight one enemy until one side falls
//!
//! Scenarios are immutable content once built; only the player (and a
//! battle's private copy of its enemy) change while one is played.

pub mod battle;
pub mod choice;

pub use battle::{BattleAction, BattleOutcome, BattleReport, BattleScenario};
pub use choice::{ChoiceOutcome, ChoiceScenario};

use crate::combatant::{Enemy, Player};
use crate::engine::PlayContext;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Scenario {
    Choice(ChoiceScenario),
    Battle(BattleScenario),
}

/// Result of playing any scenario.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScenarioOutcome {
    Choice(ChoiceOutcome),
    Battle(BattleReport),
}

impl Scenario {
    pub fn battle(enemy: Enemy) -> Self {
        Self::Battle(BattleScenario::new(enemy))
    }

    /// Short label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Choice(_) => "choice",
            Self::Battle(_) => "battle",
        }
    }

    pub fn play(&self, player: &mut Player, ctx: &mut PlayContext<'_>) -> ScenarioOutcome {
        match self {
            Self::Choice(choice) => ScenarioOutcome::Choice(choice.play(player, ctx)),
            Self::Battle(battle) => ScenarioOutcome::Battle(battle.play(player, ctx)),
        }
    }
}

impl From<ChoiceScenario> for Scenario {
    fn from(choice: ChoiceScenario) -> Self {
        Self::Choice(choice)
    }
}

impl From<BattleScenario> for Scenario {
    fn from(battle: BattleScenario) -> Self {
        Self::Battle(battle)
    }
}
