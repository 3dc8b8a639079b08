//! Terminal frontend for Fantasy Quest.
//!
//! Reads the player's answers from a line-based reader and prints the
//! engine's narration with optional color and typewriter pacing. Tracing
//! output goes to a log file so it never interleaves with the story.

mod app;
mod config;
mod input;
pub mod logging;
pub mod presentation;

pub use app::CliFrontend;
pub use config::{CliConfig, ContentConfig, LoggingConfig, UiConfig};
pub use input::TerminalInput;
