//! Turn-based battle against a single enemy.
//!
//! Each round the player picks an action from a fixed menu, then the enemy
//! (if still standing) retaliates with its basic attack. The loop has no turn
//! limit: every round the enemy lands positive damage on a living player, so
//! the player's health strictly falls unless the player is winning.

use strum::IntoEnumIterator;

use crate::combatant::{Enemy, Player};
use crate::engine::PlayContext;
use crate::event::GameEvent;

/// Actions offered to the player each round, in menu order.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleAction {
    Attack,
    Heal,
}

impl BattleAction {
    /// 1-based menu position.
    pub fn position(self) -> usize {
        self as usize + 1
    }

    /// Looks up the action at a 1-based menu position.
    pub fn from_selection(selection: i32) -> Option<Self> {
        Self::iter().find(|action| i32::try_from(action.position()) == Ok(selection))
    }
}

/// How a battle ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BattleOutcome {
    Victory,
    Defeat,
}

/// Summary of a finished battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BattleReport {
    pub outcome: BattleOutcome,
    /// Rounds fought, including rounds forfeited by invalid input.
    pub rounds: u32,
    /// Enemy health when the battle ended.
    pub enemy_health: i32,
}

/// A fight against one enemy.
///
/// The stored enemy is a template: each play fights a fresh copy, so the
/// scenario itself is never mutated and can be replayed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BattleScenario {
    enemy: Enemy,
}

impl BattleScenario {
    pub fn new(enemy: Enemy) -> Self {
        Self { enemy }
    }

    pub fn enemy(&self) -> &Enemy {
        &self.enemy
    }

    pub fn play(&self, player: &mut Player, ctx: &mut PlayContext<'_>) -> BattleReport {
        let mut enemy = self.enemy.clone();
        let enemy_name = enemy.name().to_string();

        ctx.narrate(GameEvent::Encounter {
            enemy: enemy_name.clone(),
        });

        let mut rounds = 0;
        while player.is_alive() && enemy.is_alive() {
            rounds += 1;

            ctx.narrate(GameEvent::ActionMenu);
            for action in BattleAction::iter() {
                ctx.narrate(GameEvent::ActionOption {
                    position: action.position(),
                    action,
                });
            }

            let selection = ctx.input.read_selection();
            match selection.and_then(BattleAction::from_selection) {
                Some(BattleAction::Attack) => {
                    player.attack(&mut enemy, ctx.narrator);
                }
                Some(BattleAction::Heal) => {
                    player.heal(ctx.config.heal_amount, ctx.narrator);
                }
                None => {
                    tracing::warn!(?selection, "invalid battle action, turn forfeited");
                    ctx.narrate(GameEvent::InvalidAction);
                }
            }

            if enemy.is_alive() {
                enemy.attack(player, ctx.narrator);
            }

            ctx.narrate(GameEvent::Health {
                name: player.name().to_string(),
                health: player.health(),
            });
            ctx.narrate(GameEvent::Health {
                name: enemy_name.clone(),
                health: enemy.health(),
            });

            tracing::debug!(
                rounds,
                player = player.health(),
                enemy = enemy.health(),
                "battle round finished"
            );
        }

        let outcome = if player.is_alive() {
            ctx.narrate(GameEvent::BattleWon { enemy: enemy_name });
            BattleOutcome::Victory
        } else {
            ctx.narrate(GameEvent::BattleLost { enemy: enemy_name });
            BattleOutcome::Defeat
        };

        BattleReport {
            outcome,
            rounds,
            enemy_health: enemy.health(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::event::EventLog;
    use crate::provider::ScriptedInput;

    fn fight(
        player: &mut Player,
        enemy: Enemy,
        input: &mut ScriptedInput,
    ) -> (BattleReport, EventLog) {
        let config = GameConfig::default();
        let mut log = EventLog::new();
        let report = {
            let mut ctx = PlayContext::new(&mut log, input, &config);
            BattleScenario::new(enemy).play(player, &mut ctx)
        };
        (report, log)
    }

    #[test]
    fn menu_selection_maps_to_actions() {
        assert_eq!(BattleAction::from_selection(1), Some(BattleAction::Attack));
        assert_eq!(BattleAction::from_selection(2), Some(BattleAction::Heal));
        assert_eq!(BattleAction::from_selection(0), None);
        assert_eq!(BattleAction::from_selection(3), None);
    }

    #[test]
    fn goblin_falls_after_two_attacks() {
        let mut player = Player::new("Aria", 100, 20).unwrap();
        let goblin = Enemy::new("Goblin", 30, 10).unwrap();

        let (report, log) = fight(&mut player, goblin, &mut ScriptedInput::new([1, 1]));

        assert_eq!(report.outcome, BattleOutcome::Victory);
        assert_eq!(report.rounds, 2);
        assert_eq!(report.enemy_health, 0);
        assert_eq!(player.health(), 90);
        assert_eq!(
            log.count(|e| matches!(e, GameEvent::Attack { attacker, .. } if attacker == "Goblin")),
            1
        );
        assert_eq!(
            log.events().last(),
            Some(&GameEvent::BattleWon {
                enemy: "Goblin".into()
            })
        );
    }

    #[test]
    fn invalid_action_still_lets_enemy_strike() {
        let mut player = Player::new("Aria", 100, 20).unwrap();
        let goblin = Enemy::new("Goblin", 30, 10).unwrap();

        let (report, log) = fight(&mut player, goblin, &mut ScriptedInput::new([7, 1, 1]));

        assert_eq!(report.rounds, 3);
        assert_eq!(player.health(), 80);
        assert_eq!(log.count(|e| *e == GameEvent::InvalidAction), 1);
    }

    #[test]
    fn heal_uses_configured_amount() {
        let mut player = Player::new("Aria", 100, 20).unwrap();
        let troll = Enemy::new("Troll", 50, 15).unwrap();

        let (_, log) = fight(&mut player, troll, &mut ScriptedInput::new([2, 1, 1, 1]));

        assert!(log.contains(&GameEvent::Heal {
            name: "Aria".into(),
            amount: GameConfig::DEFAULT_HEAL_AMOUNT
        }));
        // 100 + 10 - 15 (heal round) - 15 - 15 (two attack rounds) = 65
        assert_eq!(player.health(), 65);
    }

    #[test]
    fn exhausted_input_ends_in_defeat() {
        let mut player = Player::new("Aria", 100, 20).unwrap();
        let dragon = Enemy::new("Dragon", 100, 25).unwrap();

        let (report, log) = fight(&mut player, dragon, &mut ScriptedInput::default());

        assert_eq!(report.outcome, BattleOutcome::Defeat);
        assert_eq!(report.rounds, 4);
        assert!(!player.is_alive());
        assert_eq!(
            log.events().last(),
            Some(&GameEvent::BattleLost {
                enemy: "Dragon".into()
            })
        );
    }

    #[test]
    fn terminates_within_round_bound() {
        for (player_hp, player_atk, enemy_hp, enemy_atk) in
            [(100, 20, 100, 25), (1, 1, 500, 1), (500, 3, 7, 200), (40, 40, 40, 40)]
        {
            let mut player = Player::new("P", player_hp, player_atk).unwrap();
            let enemy = Enemy::new("E", enemy_hp, enemy_atk).unwrap();
            let weakest = player_atk.min(enemy_atk);
            let bound = (player_hp.max(enemy_hp) + weakest - 1) / weakest + 1;

            let (report, _) = fight(
                &mut player,
                enemy,
                &mut ScriptedInput::new(std::iter::repeat_n(1, bound as usize)),
            );

            assert!(report.rounds as i32 <= bound);
        }
    }

    #[test]
    fn template_enemy_is_untouched() {
        let scenario = BattleScenario::new(Enemy::new("Goblin", 30, 10).unwrap());
        let config = GameConfig::default();
        let mut log = EventLog::new();
        let mut input = ScriptedInput::new([1, 1]);
        let mut player = Player::new("Aria", 100, 20).unwrap();

        let mut ctx = PlayContext::new(&mut log, &mut input, &config);
        scenario.play(&mut player, &mut ctx);

        assert_eq!(scenario.enemy().health(), 30);
    }
}
