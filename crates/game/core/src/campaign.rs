//! Campaign definition: the ordered scenarios of one playthrough plus the
//! story text framing them.

use crate::combatant::Player;
use crate::error::ContentError;
use crate::scenario::Scenario;

/// Fixed narrative framing a campaign: title, prologue and the two endings.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Story {
    pub title: String,
    pub prologue: Vec<String>,
    /// First line of the victory epilogue.
    pub triumph: String,
    pub epilogue: Vec<String>,
    pub game_over: String,
}

impl Default for Story {
    fn default() -> Self {
        Self {
            title: "Fantasy Quest".to_string(),
            prologue: Vec::new(),
            triumph: "Congratulations! You have completed your quest!".to_string(),
            epilogue: Vec::new(),
            game_over: "Game Over! Your journey ends here.".to_string(),
        }
    }
}

/// One full playthrough: the player and the scenarios they will face, in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Campaign {
    player: Player,
    scenarios: Vec<Scenario>,
}

impl Campaign {
    pub fn new(player: Player, scenarios: Vec<Scenario>) -> Result<Self, ContentError> {
        if scenarios.is_empty() {
            return Err(ContentError::EmptyCampaign);
        }
        Ok(Self { player, scenarios })
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    /// Splits the campaign so scenarios can be played against the player.
    pub(crate) fn parts_mut(&mut self) -> (&mut Player, &[Scenario]) {
        (&mut self.player, &self.scenarios)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combatant::Enemy;

    #[test]
    fn rejects_empty_campaign() {
        let player = Player::new("Aria", 100, 20).unwrap();
        assert_eq!(
            Campaign::new(player, Vec::new()),
            Err(ContentError::EmptyCampaign)
        );
    }

    #[test]
    fn keeps_scenario_order() {
        let player = Player::new("Aria", 100, 20).unwrap();
        let scenarios = vec![
            Scenario::battle(Enemy::new("Goblin", 30, 10).unwrap()),
            Scenario::battle(Enemy::new("Troll", 50, 15).unwrap()),
        ];

        let campaign = Campaign::new(player, scenarios).unwrap();

        let names: Vec<&str> = campaign
            .scenarios()
            .iter()
            .filter_map(|s| match s {
                Scenario::Battle(battle) => Some(battle.enemy().name()),
                Scenario::Choice(_) => None,
            })
            .collect();
        assert_eq!(names, ["Goblin", "Troll"]);
        assert_eq!(campaign.player().name(), "Aria");
    }
}
