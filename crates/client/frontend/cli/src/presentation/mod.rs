//! Terminal rendering of narration events.

pub mod narrator;
pub mod theme;

pub use narrator::TerminalNarrator;
pub use theme::TerminalTheme;
