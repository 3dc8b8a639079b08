//! Combatants: anything that can deal and take damage.
//!
//! A [`Combatant`] is plain data plus the attack/damage rules. [`Player`] and
//! [`Enemy`] compose one rather than extend it; the player adds healing, the
//! enemy adds nothing but a distinct role.

use core::ops::{Deref, DerefMut};

use crate::error::ContentError;
use crate::event::{GameEvent, Narrator};

/// Attribute holder for any entity that can fight.
///
/// `health` may drop below zero (choice penalties are unclamped); "alive"
/// always means `health > 0`. `attack_power` never changes after creation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Combatant {
    name: String,
    health: i32,
    attack_power: i32,
}

/// Result of a single attack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AttackReport {
    /// Damage actually taken by the target.
    pub damage: i32,
    /// Whether the target was left non-alive.
    pub defeated: bool,
}

impl Combatant {
    /// Creates a combatant, rejecting stats that would stall a battle.
    pub fn new(
        name: impl Into<String>,
        health: i32,
        attack_power: i32,
    ) -> Result<Self, ContentError> {
        let name = name.into();
        if health <= 0 {
            return Err(ContentError::NonPositiveHealth { name, health });
        }
        if attack_power <= 0 {
            return Err(ContentError::NonPositiveAttack { name, attack_power });
        }
        Ok(Self {
            name,
            health,
            attack_power,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn attack_power(&self) -> i32 {
        self.attack_power
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Subtracts `amount` from health. A negative amount heals.
    ///
    /// Arithmetic wraps at the `i32` bounds, so `receive_damage(d)` followed
    /// by `receive_damage(-d)` restores health exactly for every `d` whose
    /// negation fits in an `i32`.
    pub fn receive_damage(&mut self, amount: i32) {
        self.health = self.health.wrapping_sub(amount);
    }

    /// Attacks `target`, narrating the hit and, if it lands the final blow,
    /// the defeat.
    ///
    /// Damage is `min(attack_power, target health)`, so an attack empties the
    /// target's health but never pushes it below zero.
    pub fn attack(&self, target: &mut Combatant, narrator: &mut dyn Narrator) -> AttackReport {
        let damage = self.attack_power.min(target.health.max(0));
        target.receive_damage(damage);

        narrator.narrate(&GameEvent::Attack {
            attacker: self.name.clone(),
            target: target.name.clone(),
            damage,
        });

        let defeated = !target.is_alive();
        if defeated {
            narrator.narrate(&GameEvent::Defeated {
                name: target.name.clone(),
            });
        }

        AttackReport { damage, defeated }
    }
}

/// The player character. Exactly one per run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player(Combatant);

impl Player {
    pub fn new(
        name: impl Into<String>,
        health: i32,
        attack_power: i32,
    ) -> Result<Self, ContentError> {
        Combatant::new(name, health, attack_power).map(Self)
    }

    pub fn heal(&mut self, amount: i32, narrator: &mut dyn Narrator) {
        self.0.health = self.0.health.saturating_add(amount);
        narrator.narrate(&GameEvent::Heal {
            name: self.0.name.clone(),
            amount,
        });
    }

}

impl Deref for Player {
    type Target = Combatant;

    fn deref(&self) -> &Combatant {
        &self.0
    }
}

impl DerefMut for Player {
    fn deref_mut(&mut self) -> &mut Combatant {
        &mut self.0
    }
}

/// An opponent, owned by the battle it appears in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Enemy(Combatant);

impl Enemy {
    pub fn new(
        name: impl Into<String>,
        health: i32,
        attack_power: i32,
    ) -> Result<Self, ContentError> {
        Combatant::new(name, health, attack_power).map(Self)
    }
}

impl Deref for Enemy {
    type Target = Combatant;

    fn deref(&self) -> &Combatant {
        &self.0
    }
}

impl DerefMut for Enemy {
    fn deref_mut(&mut self) -> &mut Combatant {
        &mut self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventLog;

    #[test]
    fn alive_iff_health_positive() {
        let mut goblin = Combatant::new("Goblin", 30, 10).unwrap();
        assert!(goblin.is_alive());

        goblin.receive_damage(30);
        assert_eq!(goblin.health(), 0);
        assert!(!goblin.is_alive());

        goblin.receive_damage(-1);
        assert!(goblin.is_alive());
    }

    #[test]
    fn receive_damage_is_invertible() {
        let mut hero = Combatant::new("Hero", 100, 20).unwrap();
        for amount in [-1000, -15, 0, 7, 20, 1000] {
            hero.receive_damage(amount);
            hero.receive_damage(-amount);
            assert_eq!(hero.health(), 100);
        }
    }

    #[test]
    fn receive_damage_is_invertible_at_i32_bounds() {
        let mut hero = Combatant::new("Hero", 100, 20).unwrap();
        for amount in [i32::MAX, -i32::MAX, i32::MAX - 50, 150 - i32::MAX] {
            hero.receive_damage(amount);
            hero.receive_damage(-amount);
            assert_eq!(hero.health(), 100);
        }
    }

    #[test]
    fn attack_clamps_damage_to_remaining_health() {
        let hero = Combatant::new("Hero", 100, 20).unwrap();
        let mut goblin = Combatant::new("Goblin", 30, 10).unwrap();
        let mut log = EventLog::new();

        let first = hero.attack(&mut goblin, &mut log);
        assert_eq!(first, AttackReport { damage: 20, defeated: false });
        assert_eq!(goblin.health(), 10);

        let second = hero.attack(&mut goblin, &mut log);
        assert_eq!(second, AttackReport { damage: 10, defeated: true });
        assert_eq!(goblin.health(), 0);

        assert_eq!(
            log.events().last(),
            Some(&GameEvent::Defeated {
                name: "Goblin".into()
            })
        );
        assert_eq!(log.count(|e| matches!(e, GameEvent::Attack { .. })), 2);
    }

    #[test]
    fn rejects_non_positive_stats() {
        assert_eq!(
            Combatant::new("Ghost", 0, 5),
            Err(ContentError::NonPositiveHealth {
                name: "Ghost".into(),
                health: 0
            })
        );
        assert!(matches!(
            Enemy::new("Pacifist", 10, 0),
            Err(ContentError::NonPositiveAttack { .. })
        ));
    }

    #[test]
    fn player_heal_narrates_amount() {
        let mut player = Player::new("Aria", 50, 20).unwrap();
        let mut log = EventLog::new();

        player.heal(10, &mut log);

        assert_eq!(player.health(), 60);
        assert_eq!(
            log.events(),
            &[GameEvent::Heal {
                name: "Aria".into(),
                amount: 10
            }]
        );
    }
}
