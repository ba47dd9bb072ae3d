//! Enemy archetype table
//!
//! Each archetype is a data record: base stats, linear per-level scaling
//! coefficients, and a fixed pair of attack names. One generic `spawn`
//! applies the scaling; there is no per-archetype behavior. The boss is just
//! another record constructed through its own path, not a special type.

use crate::enemy::Enemy;

/// Static description of an enemy kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnemyArchetype {
    pub name: &'static str,
    pub base_hp: u32,
    pub base_attack: u32,
    pub base_speed: u32,
    /// Linear growth applied per player level
    pub hp_per_level: u32,
    pub attack_per_level: u32,
    pub speed_per_level: u32,
    pub attacks: [&'static str; 2],
}

/// Glass cannon: highest base hp growth, strong attacks
pub const SPICY_CHILI_DEMON: EnemyArchetype = EnemyArchetype {
    name: "Spicy Chili Demon",
    base_hp: 70,
    base_attack: 15,
    base_speed: 5,
    hp_per_level: 5,
    attack_per_level: 2,
    speed_per_level: 1,
    attacks: ["Flambé Blast", "Spicy Toss"],
};

/// Fast and precise, gentlest attack growth
pub const SUSHI_SAMURAI: EnemyArchetype = EnemyArchetype {
    name: "Sushi Samurai",
    base_hp: 60,
    base_attack: 10,
    base_speed: 10,
    hp_per_level: 4,
    attack_per_level: 1,
    speed_per_level: 2,
    attacks: ["Knife Slice", "Sushi Roll"],
};

/// Frail but with the steepest attack growth
pub const GOURMET_CRITIC: EnemyArchetype = EnemyArchetype {
    name: "Pretentious Gourmet Critic",
    base_hp: 50,
    base_attack: 12,
    base_speed: 7,
    hp_per_level: 3,
    attack_per_level: 3,
    speed_per_level: 1,
    attacks: ["Harsh Critique", "Pretentious Glare"],
};

/// The rival mentor fought in the climactic encounter. Scaled through the
/// same rule as the roster, with coefficients above any generated archetype.
pub const CHEF_CARBY: EnemyArchetype = EnemyArchetype {
    name: "Chef Carby",
    base_hp: 200,
    base_attack: 20,
    base_speed: 15,
    hp_per_level: 10,
    attack_per_level: 5,
    speed_per_level: 2,
    attacks: ["Fiery Flambé", "Perfect Plating"],
};

/// The archetypes eligible for random encounters (the boss is excluded)
pub const ROSTER: [EnemyArchetype; 3] = [SPICY_CHILI_DEMON, SUSHI_SAMURAI, GOURMET_CRITIC];

impl EnemyArchetype {
    /// Instantiate this archetype scaled to the player's level
    pub fn spawn(&self, player_level: u32) -> Enemy {
        let hp = self.base_hp + player_level * self.hp_per_level;
        Enemy::new(
            self.name,
            hp,
            self.base_attack + player_level * self.attack_per_level,
            self.base_speed + player_level * self.speed_per_level,
            &self.attacks,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_applies_linear_scaling() {
        let demon = SPICY_CHILI_DEMON.spawn(3);
        assert_eq!(demon.hp(), 70 + 3 * 5);
        assert_eq!(demon.attack_power(), 15 + 3 * 2);
        assert_eq!(demon.speed(), 5 + 3);
    }

    #[test]
    fn test_spawn_starts_at_full_hp() {
        let samurai = SUSHI_SAMURAI.spawn(2);
        assert_eq!(samurai.hp(), samurai.max_hp());
    }

    #[test]
    fn test_roster_coefficients_differ() {
        // Difficulty variety depends on distinct growth per archetype.
        let growth: Vec<(u32, u32, u32)> = ROSTER
            .iter()
            .map(|a| (a.hp_per_level, a.attack_per_level, a.speed_per_level))
            .collect();
        assert_ne!(growth[0], growth[1]);
        assert_ne!(growth[1], growth[2]);
        assert_ne!(growth[0], growth[2]);
    }

    #[test]
    fn test_boss_outscales_the_roster() {
        for archetype in ROSTER {
            assert!(CHEF_CARBY.base_hp > archetype.base_hp);
            assert!(CHEF_CARBY.hp_per_level > archetype.hp_per_level);
            assert!(CHEF_CARBY.attack_per_level > archetype.attack_per_level);
        }
    }
}
