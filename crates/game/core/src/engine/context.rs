//! Play context passed to every scenario.

use crate::config::GameConfig;
use crate::event::{GameEvent, Narrator};
use crate::provider::InputSource;

/// Collaborators a scenario needs while it plays.
///
/// Bundles the narrator, the input source and the game configuration so
/// scenario code never touches a terminal directly.
pub struct PlayContext<'a> {
    /// Where narration events go.
    pub narrator: &'a mut dyn Narrator,

    /// Where player decisions come from.
    pub input: &'a mut dyn InputSource,

    /// Tunable rules (heal amount, starting stats).
    pub config: &'a GameConfig,
}

impl<'a> PlayContext<'a> {
    pub fn new(
        narrator: &'a mut dyn Narrator,
        input: &'a mut dyn InputSource,
        config: &'a GameConfig,
    ) -> Self {
        Self {
            narrator,
            input,
            config,
        }
    }

    #[inline]
    pub fn narrate(&mut self, event: GameEvent) {
        self.narrator.narrate(&event);
    }
}
