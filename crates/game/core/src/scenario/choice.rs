//! Multiple-choice scenarios with a scripted health outcome per option.

use crate::combatant::Player;
use crate::engine::PlayContext;
use crate::error::ContentError;
use crate::event::GameEvent;

/// A narrative fork: a description, a list of options and, per option, a
/// signed health outcome and a result line.
///
/// The three tables are parallel; [`ChoiceScenario::new`] refuses to build a
/// scenario whose tables disagree in length.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChoiceScenario {
    description: String,
    choices: Vec<String>,
    outcomes: Vec<i32>,
    results: Vec<String>,
}

/// What happened when a choice scenario was played.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChoiceOutcome {
    /// A listed option was picked (0-based index) and its outcome applied.
    Resolved { index: usize, health_delta: i32 },
    /// The selection was out of range or unreadable. Nothing changed.
    Invalid { selection: Option<i32> },
}

impl ChoiceScenario {
    pub fn new(
        description: impl Into<String>,
        choices: Vec<String>,
        outcomes: Vec<i32>,
        results: Vec<String>,
    ) -> Result<Self, ContentError> {
        if choices.len() != outcomes.len() || choices.len() != results.len() {
            return Err(ContentError::MismatchedChoiceTables {
                choices: choices.len(),
                outcomes: outcomes.len(),
                results: results.len(),
            });
        }
        if choices.is_empty() {
            return Err(ContentError::EmptyChoices);
        }

        Ok(Self {
            description: description.into(),
            choices,
            outcomes,
            results,
        })
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    pub fn outcomes(&self) -> &[i32] {
        &self.outcomes
    }

    pub fn results(&self) -> &[String] {
        &self.results
    }

    /// Maps a 1-based selection onto an option index.
    pub fn option_index(&self, selection: i32) -> Option<usize> {
        let index = usize::try_from(selection.checked_sub(1)?).ok()?;
        (index < self.choices.len()).then_some(index)
    }

    /// Presents the options, reads one selection and applies its outcome.
    ///
    /// A positive outcome heals the player, a negative one hurts; zero leaves
    /// health alone. An invalid selection is narrated and otherwise ignored.
    pub fn play(&self, player: &mut Player, ctx: &mut PlayContext<'_>) -> ChoiceOutcome {
        ctx.narrate(GameEvent::ScenarioDescription(self.description.clone()));
        for (index, label) in self.choices.iter().enumerate() {
            ctx.narrate(GameEvent::ChoiceOption {
                position: index + 1,
                label: label.clone(),
            });
        }

        let selection = ctx.input.read_selection();
        let Some(index) = selection.and_then(|s| self.option_index(s)) else {
            tracing::warn!(?selection, options = self.choices.len(), "invalid choice");
            ctx.narrate(GameEvent::InvalidChoice);
            return ChoiceOutcome::Invalid { selection };
        };

        let health_delta = self.outcomes[index];
        if health_delta != 0 {
            player.receive_damage(health_delta.saturating_neg());
        }
        ctx.narrate(GameEvent::ChoiceResult(self.results[index].clone()));

        tracing::debug!(index, health_delta, health = player.health(), "choice resolved");
        ChoiceOutcome::Resolved {
            index,
            health_delta,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::event::EventLog;
    use crate::provider::ScriptedInput;

    fn fork() -> ChoiceScenario {
        ChoiceScenario::new(
            "You find a fork in the road.",
            vec!["Take the left path".into(), "Take the right path".into()],
            vec![-10, 0],
            vec!["Longer road.".into(), "Straight there.".into()],
        )
        .unwrap()
    }

    fn play_with(scenario: &ChoiceScenario, input: &mut ScriptedInput) -> (Player, ChoiceOutcome, EventLog) {
        let config = GameConfig::default();
        let mut log = EventLog::new();
        let mut player = Player::new("Aria", 100, 20).unwrap();
        let outcome = {
            let mut ctx = PlayContext::new(&mut log, input, &config);
            scenario.play(&mut player, &mut ctx)
        };
        (player, outcome, log)
    }

    #[test]
    fn negative_outcome_damages_player() {
        let (player, outcome, log) = play_with(&fork(), &mut ScriptedInput::new([1]));

        assert_eq!(player.health(), 90);
        assert_eq!(
            outcome,
            ChoiceOutcome::Resolved {
                index: 0,
                health_delta: -10
            }
        );
        assert!(log.contains(&GameEvent::ChoiceResult("Longer road.".into())));
    }

    #[test]
    fn zero_outcome_leaves_health() {
        let (player, _, _) = play_with(&fork(), &mut ScriptedInput::new([2]));
        assert_eq!(player.health(), 100);
    }

    #[test]
    fn positive_outcome_heals_player() {
        let chest = ChoiceScenario::new(
            "A suspicious chest.",
            vec!["Open".into(), "Ignore".into()],
            vec![20, 0],
            vec!["A potion!".into(), "Regret.".into()],
        )
        .unwrap();

        let (player, _, _) = play_with(&chest, &mut ScriptedInput::new([1]));
        assert_eq!(player.health(), 120);
    }

    #[test]
    fn out_of_range_and_malformed_selections_change_nothing() {
        for selection in [0, 3, -1, i32::MIN] {
            let (player, outcome, log) =
                play_with(&fork(), &mut ScriptedInput::new([selection]));
            assert_eq!(player.health(), 100);
            assert_eq!(
                outcome,
                ChoiceOutcome::Invalid {
                    selection: Some(selection)
                }
            );
            assert_eq!(log.events().last(), Some(&GameEvent::InvalidChoice));
        }

        let mut malformed = ScriptedInput::default();
        malformed.push_malformed();
        let (player, outcome, _) = play_with(&fork(), &mut malformed);
        assert_eq!(player.health(), 100);
        assert_eq!(outcome, ChoiceOutcome::Invalid { selection: None });
    }

    #[test]
    fn options_are_listed_one_based() {
        let (_, _, log) = play_with(&fork(), &mut ScriptedInput::new([2]));

        assert_eq!(
            &log.events()[..3],
            &[
                GameEvent::ScenarioDescription("You find a fork in the road.".into()),
                GameEvent::ChoiceOption {
                    position: 1,
                    label: "Take the left path".into()
                },
                GameEvent::ChoiceOption {
                    position: 2,
                    label: "Take the right path".into()
                },
            ]
        );
    }

    #[test]
    fn rejects_mismatched_tables() {
        let error = ChoiceScenario::new(
            "Broken",
            vec!["a".into(), "b".into()],
            vec![0],
            vec!["x".into(), "y".into()],
        )
        .unwrap_err();

        assert_eq!(
            error,
            ContentError::MismatchedChoiceTables {
                choices: 2,
                outcomes: 1,
                results: 2
            }
        );
        assert_eq!(
            ChoiceScenario::new("Empty", vec![], vec![], vec![]),
            Err(ContentError::EmptyChoices)
        );
    }
}
