//! Experience and leveling rules
//!
//! Pure functions over the progression numbers. The mutation side (stat
//! growth, full heal) lives on `Player`; the thresholds and reward math live
//! here so they can be tuned and tested in isolation.

/// Highest reachable level; progression freezes here
pub const LEVEL_CAP: u32 = 10;
/// Experience required per level: threshold = level * EXP_PER_LEVEL
pub const EXP_PER_LEVEL: u32 = 100;
/// Attribute points gained on each level-up (applied to all five attributes)
pub const STAT_GAIN_PER_LEVEL: u32 = 1;
/// Victory reward scaling: reward = enemy_initial_hp / 2 + level * this
pub const REWARD_LEVEL_MULTIPLIER: u32 = 10;

/// Experience needed to advance past the given level
///
/// The threshold is recomputed from the current level, never stored. At the
/// level cap it stays frozen at `LEVEL_CAP * EXP_PER_LEVEL`.
pub fn exp_threshold(level: u32) -> u32 {
    level * EXP_PER_LEVEL
}

/// Experience awarded for defeating an enemy
///
/// Uses the enemy's hp as captured at battle start and the player's level
/// from before any level-up this battle triggers.
pub fn victory_reward(enemy_initial_hp: u32, player_level: u32) -> u32 {
    enemy_initial_hp / 2 + player_level * REWARD_LEVEL_MULTIPLIER
}
