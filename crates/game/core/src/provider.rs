//! Abstraction for sourcing player input.
//!
//! Callers plug in [`InputSource`] implementations so a run can be driven by a
//! terminal, a replay script, or a test fixture.
use std::collections::VecDeque;

/// Source of player decisions.
pub trait InputSource {
    /// Reads one numeric selection.
    ///
    /// Returns `None` when the input was not a number or no input is left;
    /// menus treat that exactly like an out-of-range selection.
    fn read_selection(&mut self) -> Option<i32>;

    /// Reads the player's name. `None` means no name was given.
    fn read_name(&mut self) -> Option<String>;
}

/// Input source replaying a fixed list of selections.
///
/// Useful for testing, or for replaying a known run. Once the script is
/// exhausted every further read yields `None`.
#[derive(Clone, Debug, Default)]
pub struct ScriptedInput {
    name: Option<String>,
    selections: VecDeque<Option<i32>>,
}

impl ScriptedInput {
    pub fn new(selections: impl IntoIterator<Item = i32>) -> Self {
        Self {
            name: None,
            selections: selections.into_iter().map(Some).collect(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Queues a malformed (non-numeric) response.
    pub fn push_malformed(&mut self) {
        self.selections.push_back(None);
    }

    pub fn push(&mut self, selection: i32) {
        self.selections.push_back(Some(selection));
    }

    pub fn remaining(&self) -> usize {
        self.selections.len()
    }
}

impl InputSource for ScriptedInput {
    fn read_selection(&mut self) -> Option<i32> {
        self.selections.pop_front().flatten()
    }

    fn read_name(&mut self) -> Option<String> {
        self.name.take()
    }
}
