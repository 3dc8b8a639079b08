//! Input processing for the CLI client.
//!
//! Reads whitespace-separated tokens from a line-oriented reader, so a player
//! can type one answer per line or several on one line. Blank lines are
//! skipped; anything that is not an integer becomes an invalid selection.

use std::collections::VecDeque;
use std::io::BufRead;

use game_core::InputSource;

/// Input source backed by a buffered reader (stdin in the real game).
pub struct TerminalInput<R: BufRead> {
    reader: R,
    pending: VecDeque<String>,
    exhausted: bool,
}

impl<R: BufRead> TerminalInput<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
            exhausted: false,
        }
    }

    /// True once the reader hit end of input or failed.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted && self.pending.is_empty()
    }

    fn next_token(&mut self) -> Option<String> {
        while self.pending.is_empty() {
            if self.exhausted {
                return None;
            }

            let mut line = String::new();
            match self.reader.read_line(&mut line) {
                Ok(0) => {
                    tracing::debug!("input reached end of stream");
                    self.exhausted = true;
                }
                Ok(_) => self
                    .pending
                    .extend(line.split_whitespace().map(str::to_string)),
                Err(error) => {
                    tracing::warn!(%error, "failed to read input");
                    self.exhausted = true;
                }
            }
        }
        self.pending.pop_front()
    }
}

impl<R: BufRead> InputSource for TerminalInput<R> {
    fn read_selection(&mut self) -> Option<i32> {
        let token = self.next_token()?;
        let selection = token.parse().ok();
        if selection.is_none() {
            tracing::debug!(%token, "non-numeric selection");
        }
        selection
    }

    fn read_name(&mut self) -> Option<String> {
        self.next_token()
    }
}
