//! Enemies: combatant state, archetype table, encounter generation

pub mod archetype;
pub mod generator;

use serde::{Deserialize, Serialize};

pub use archetype::EnemyArchetype;
pub use generator::{boss_encounter, random_encounter};

/// An enemy combatant
///
/// Built from an archetype record; hp is clamped to `[0, max_hp]` on every
/// mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    name: String,
    hp: u32,
    max_hp: u32,
    attack_power: u32,
    speed: u32,
    attacks: Vec<String>,
}

impl Enemy {
    /// Create an enemy at full hp with the given attack list
    pub fn new(name: &str, hp: u32, attack_power: u32, speed: u32, attacks: &[&str]) -> Self {
        debug_assert!(!attacks.is_empty());
        Self {
            name: name.to_string(),
            hp,
            max_hp: hp,
            attack_power,
            speed,
            attacks: attacks.iter().map(|a| a.to_string()).collect(),
        }
    }

    /// Reduce hp, floored at 0
    pub fn take_damage(&mut self, amount: u32) {
        self.hp = self.hp.saturating_sub(amount);
    }

    /// Attack name at a pre-rolled index (wraps for safety); the exchange
    /// rolls draw the index uniformly, so every attack is equally likely
    pub fn attack_name(&self, index: usize) -> &str {
        &self.attacks[index % self.attacks.len()]
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hp(&self) -> u32 {
        self.hp
    }

    pub fn max_hp(&self) -> u32 {
        self.max_hp
    }

    pub fn attack_power(&self) -> u32 {
        self.attack_power
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    pub fn attack_count(&self) -> usize {
        self.attacks.len()
    }

    pub fn is_defeated(&self) -> bool {
        self.hp == 0
    }
}
