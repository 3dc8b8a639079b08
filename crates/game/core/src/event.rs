//! Narration events emitted by the core and the narrator that receives them.
//!
//! The core never formats terminal output itself. Every observable step of a
//! run is described by a [`GameEvent`] and handed to a [`Narrator`], which
//! decides how (and how slowly) to show it. `Display` gives each event its
//! canonical English line; [`GameEvent::emphasis`] tells a renderer how to
//! style it.

use core::fmt;

use crate::scenario::BattleAction;

/// Abstract styling hint attached to every narration line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Emphasis {
    /// Story text and status lines.
    Neutral,
    /// Selectable options.
    Informational,
    /// Wins and rewards.
    Positive,
    /// Invalid input, defeats, game over.
    Negative,
}

/// Width of the framed title banner, in characters.
pub const BANNER_WIDTH: usize = 81;

/// Everything the core reports while a run is in progress.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    Banner { title: String },
    NamePrompt { title: String },
    Welcome { name: String },
    Prologue(String),

    ScenarioDescription(String),
    ChoiceOption { position: usize, label: String },
    ChoiceResult(String),
    InvalidChoice,

    Encounter { enemy: String },
    ActionMenu,
    ActionOption { position: usize, action: BattleAction },
    InvalidAction,
    Attack { attacker: String, target: String, damage: i32 },
    Defeated { name: String },
    Heal { name: String, amount: i32 },
    Health { name: String, health: i32 },
    BattleWon { enemy: String },
    BattleLost { enemy: String },

    Triumph(String),
    Epilogue(String),
    GameOver(String),
}

impl GameEvent {
    pub fn emphasis(&self) -> Emphasis {
        match self {
            Self::ChoiceOption { .. } | Self::ActionOption { .. } => Emphasis::Informational,
            Self::BattleWon { .. } | Self::Triumph(_) => Emphasis::Positive,
            Self::InvalidChoice
            | Self::InvalidAction
            | Self::Defeated { .. }
            | Self::BattleLost { .. }
            | Self::GameOver(_) => Emphasis::Negative,
            _ => Emphasis::Neutral,
        }
    }

    /// True for events a renderer may print instantly instead of pacing them.
    pub fn is_decoration(&self) -> bool {
        matches!(self, Self::Banner { .. })
    }
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Banner { title } => write_banner(f, title),
            Self::NamePrompt { title } => write!(
                f,
                "O Brave Adventurer! Say your name to enter the world of {title}: "
            ),
            Self::Welcome { name } => write!(f, "Welcome, {name}!"),
            Self::Prologue(line)
            | Self::ScenarioDescription(line)
            | Self::ChoiceResult(line)
            | Self::Triumph(line)
            | Self::Epilogue(line)
            | Self::GameOver(line) => f.write_str(line),
            Self::ChoiceOption { position, label } => write!(f, "[{position}] {label}"),
            Self::InvalidChoice => f.write_str("Invalid choice."),
            Self::Encounter { enemy } => write!(f, "You encounter the {enemy}!"),
            Self::ActionMenu => f.write_str("Choose your action:"),
            Self::ActionOption { position, action } => write!(f, "[{position}] {action}"),
            Self::InvalidAction => f.write_str("Invalid choice!"),
            Self::Attack {
                attacker,
                target,
                damage,
            } => write!(f, "{attacker} attacks {target} for {damage} damage!"),
            Self::Defeated { name } => write!(f, "{name} is defeated!"),
            Self::Heal { name, amount } => write!(f, "{name} heals for {amount} health!"),
            Self::Health { name, health } => write!(f, "{name} Health: {health}"),
            Self::BattleWon { enemy } => write!(f, "You have defeated the {enemy}!"),
            Self::BattleLost { enemy } => write!(f, "You have been defeated by the {enemy}."),
        }
    }
}

fn write_banner(f: &mut fmt::Formatter<'_>, title: &str) -> fmt::Result {
    let full = "*".repeat(BANNER_WIDTH);
    let inner = format!("     {}     ", title.to_uppercase());
    let stars = BANNER_WIDTH.saturating_sub(inner.chars().count());
    let left = "*".repeat(stars / 2);
    let right = "*".repeat(stars - stars / 2);

    writeln!(f, "{full}")?;
    writeln!(f, "{full}")?;
    writeln!(f, "{left}{inner}{right}")?;
    writeln!(f, "{full}")?;
    write!(f, "{full}")
}

/// Receives narration events as the run progresses.
pub trait Narrator {
    fn narrate(&mut self, event: &GameEvent);
}

/// Narrator that keeps every event in memory.
///
/// Useful for headless runs and tests that assert on what the player saw.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn contains(&self, event: &GameEvent) -> bool {
        self.events.contains(event)
    }

    /// Number of recorded events matching the predicate.
    pub fn count(&self, predicate: impl Fn(&GameEvent) -> bool) -> usize {
        self.events.iter().filter(|event| predicate(event)).count()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl Narrator for EventLog {
    fn narrate(&mut self, event: &GameEvent) {
        self.events.push(event.clone());
    }
}
