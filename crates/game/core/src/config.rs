use crate::combatant::Player;
use crate::error::ContentError;

/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Health the player starts the run with.
    pub starting_health: i32,
    /// Player attack power, fixed for the whole run.
    pub attack_power: i32,
    /// Health restored by the Heal battle action.
    pub heal_amount: i32,
    /// Name used when the name prompt receives no input.
    pub default_player_name: String,
}

impl GameConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_STARTING_HEALTH: i32 = 100;
    pub const DEFAULT_ATTACK_POWER: i32 = 20;
    pub const DEFAULT_HEAL_AMOUNT: i32 = 10;
    pub const DEFAULT_PLAYER_NAME: &'static str = "Player";

    pub fn new() -> Self {
        Self {
            starting_health: Self::DEFAULT_STARTING_HEALTH,
            attack_power: Self::DEFAULT_ATTACK_POWER,
            heal_amount: Self::DEFAULT_HEAL_AMOUNT,
            default_player_name: Self::DEFAULT_PLAYER_NAME.to_string(),
        }
    }

    pub fn with_heal_amount(mut self, heal_amount: i32) -> Self {
        self.heal_amount = heal_amount;
        self
    }

    /// Checks that a player can be built from these stats and that healing
    /// restores health.
    pub fn validate(&self) -> Result<(), ContentError> {
        Player::new(
            self.default_player_name.as_str(),
            self.starting_health,
            self.attack_power,
        )?;
        if self.heal_amount <= 0 {
            return Err(ContentError::NonPositiveHealAmount {
                amount: self.heal_amount,
            });
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(GameConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_heal_that_hurts() {
        for amount in [0, -50] {
            assert_eq!(
                GameConfig::default().with_heal_amount(amount).validate(),
                Err(ContentError::NonPositiveHealAmount { amount })
            );
        }
    }

    #[test]
    fn rejects_player_stats_through_combatant_rules() {
        let config = GameConfig {
            starting_health: -5,
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ContentError::NonPositiveHealth { health: -5, .. })
        ));
    }
}
