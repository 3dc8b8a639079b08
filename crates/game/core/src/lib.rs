//! Deterministic game logic and data types for a linear text adventure.
//!
//! `game-core` defines the canonical rules (combatants, scenarios, the run
//! driver) and exposes pure APIs that frontends drive through two injected
//! collaborators: a [`Narrator`] that renders [`GameEvent`]s and an
//! [`InputSource`] that supplies the player's selections. All play flows
//! through [`engine::GameEngine`]; content crates build [`Scenario`]s with
//! the validating constructors re-exported here.
pub mod campaign;
pub mod combatant;
pub mod config;
pub mod engine;
pub mod error;
pub mod event;
pub mod provider;
pub mod scenario;

pub use campaign::{Campaign, Story};
pub use combatant::{AttackReport, Combatant, Enemy, Player};
pub use config::GameConfig;
pub use engine::{GameEngine, PlayContext, RunOutcome, RunReport};
pub use error::{ContentError, ErrorSeverity, GameError};
pub use event::{Emphasis, EventLog, GameEvent, Narrator};
pub use provider::{InputSource, ScriptedInput};
pub use scenario::{
    BattleAction, BattleOutcome, BattleReport, BattleScenario, ChoiceOutcome, ChoiceScenario,
    Scenario, ScenarioOutcome,
};
