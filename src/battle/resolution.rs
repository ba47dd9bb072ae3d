//! Single exchange resolution
//!
//! One exchange is the player's attack followed by the enemy's counterattack
//! (if the enemy survives). Resolution is pure over explicit roll values;
//! the session supplies rolls from its rng so boundaries stay testable.

use rand::Rng;

use crate::battle::action::AttackAction;
use crate::battle::constants::{CRIT_MULTIPLIER, ROLL_RANGE};
use crate::character::player::Player;
use crate::enemy::Enemy;

/// Raw rolls consumed by one exchange
#[derive(Debug, Clone, Copy)]
pub struct ExchangeRolls {
    /// Crit roll in `[0, 100)`; crits when strictly below the crit chance
    pub crit_roll: u32,
    /// Dodge roll in `[0, 100)`; dodges when strictly below the dodge chance
    pub dodge_roll: u32,
    /// Index into the enemy's attack list for the counter
    pub counter_index: usize,
}

impl ExchangeRolls {
    /// Draw a full set of rolls from the given rng
    pub fn draw(rng: &mut impl Rng, enemy_attack_count: usize) -> Self {
        Self {
            crit_roll: rng.gen_range(0..ROLL_RANGE),
            dodge_roll: rng.gen_range(0..ROLL_RANGE),
            counter_index: rng.gen_range(0..enemy_attack_count),
        }
    }
}

/// What the enemy's counterattack did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CounterOutcome {
    /// Enemy was defeated by the player's hit; no counter happens
    Skipped,
    /// Counter fully negated; no damage
    Dodged,
    /// Counter landed for flat attack-power damage
    Landed { attack: String, damage: u32 },
}

/// Result of one resolved exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExchangeResult {
    pub critical: bool,
    /// Final damage dealt to the enemy (after the crit multiplier)
    pub damage: u32,
    pub counter: CounterOutcome,
}

/// Resolve one exchange, mutating both combatants' hp
pub fn resolve_exchange(
    player: &mut Player,
    enemy: &mut Enemy,
    action: AttackAction,
    rolls: ExchangeRolls,
) -> ExchangeResult {
    let base_damage = action.base_damage(player.stats());
    let critical = rolls.crit_roll < player.crit_chance();
    let damage = if critical {
        base_damage * CRIT_MULTIPLIER
    } else {
        base_damage
    };
    enemy.take_damage(damage);

    let counter = if enemy.is_defeated() {
        CounterOutcome::Skipped
    } else if rolls.dodge_roll < player.dodge_chance() {
        CounterOutcome::Dodged
    } else {
        let attack = enemy.attack_name(rolls.counter_index).to_string();
        let counter_damage = enemy.attack_power();
        player.take_damage(counter_damage);
        CounterOutcome::Landed {
            attack,
            damage: counter_damage,
        }
    };

    ExchangeResult {
        critical,
        damage,
        counter,
    }
}
