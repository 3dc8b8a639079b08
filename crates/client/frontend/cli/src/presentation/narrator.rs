//! Narrator that prints events to a terminal.

use std::io::{self, Write};
use std::thread;

use crossterm::queue;
use crossterm::style::{Print, ResetColor, SetForegroundColor};
use game_core::{GameEvent, Narrator};

use super::theme::TerminalTheme;
use crate::config::UiConfig;

/// Writes each narration event as a line, colored by its emphasis and
/// printed one character at a time when pacing is enabled.
///
/// `Narrator::narrate` cannot fail, so the first write error is kept and
/// surfaced by [`TerminalNarrator::finish`].
pub struct TerminalNarrator<W: Write> {
    out: W,
    ui: UiConfig,
    theme: TerminalTheme,
    error: Option<io::Error>,
}

impl<W: Write> TerminalNarrator<W> {
    pub fn new(out: W, ui: UiConfig) -> Self {
        Self {
            out,
            ui,
            theme: TerminalTheme,
            error: None,
        }
    }

    /// Flushes output and returns the writer, or the first write error.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(error) = self.error.take() {
            return Err(error);
        }
        self.out.flush()?;
        Ok(self.out)
    }

    fn write_event(&mut self, event: &GameEvent) -> io::Result<()> {
        let text = event.to_string();

        if self.ui.color {
            queue!(
                self.out,
                SetForegroundColor(self.theme.color(event.emphasis()))
            )?;
        }

        if self.ui.pacing.is_zero() || event.is_decoration() {
            queue!(self.out, Print(&text))?;
        } else {
            for ch in text.chars() {
                queue!(self.out, Print(ch))?;
                self.out.flush()?;
                thread::sleep(self.ui.pacing);
            }
        }

        if self.ui.color {
            queue!(self.out, ResetColor)?;
        }
        writeln!(self.out)?;
        self.out.flush()
    }
}

impl<W: Write> Narrator for TerminalNarrator<W> {
    fn narrate(&mut self, event: &GameEvent) {
        if self.error.is_some() {
            return;
        }
        if let Err(error) = self.write_event(event) {
            tracing::error!(%error, "failed to write narration");
            self.error = Some(error);
        }
    }
}
