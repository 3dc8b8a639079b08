//! Terminal colors for narration emphasis.

use crossterm::style::Color;
use game_core::Emphasis;

/// Maps emphasis tags to terminal colors.
///
/// Story text is white, options cyan, good news green, bad news red.
#[derive(Clone, Copy, Debug, Default)]
pub struct TerminalTheme;

impl TerminalTheme {
    pub fn color(&self, emphasis: Emphasis) -> Color {
        match emphasis {
            Emphasis::Neutral => Color::White,
            Emphasis::Informational => Color::Cyan,
            Emphasis::Positive => Color::Green,
            Emphasis::Negative => Color::Red,
        }
    }
}
