//! Player combatant state
//!
//! Holds the attribute block, clamped hit points, and the progression ledger.
//! Every mutation keeps `0 <= hp <= max_hp`; stamina changes recompute max hp
//! and re-clamp.

use serde::{Deserialize, Serialize};

use crate::character::class::PlayerClass;
use crate::character::progression::{exp_threshold, LEVEL_CAP, STAT_GAIN_PER_LEVEL};
use crate::character::stats::StatBlock;

/// A player character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    name: String,
    class: PlayerClass,
    stats: StatBlock,
    hp: u32,
    max_hp: u32,
    level: u32,
    experience: u32,
}

impl Player {
    /// Create a level-1 player with the class's starting loadout at full hp
    pub fn new(name: impl Into<String>, class: PlayerClass) -> Self {
        let stats = class.base_stats();
        let max_hp = stats.max_hp();
        Self {
            name: name.into(),
            class,
            stats,
            hp: max_hp,
            max_hp,
            level: 1,
            experience: 0,
        }
    }

    /// Reduce hp, floored at 0
    pub fn take_damage(&mut self, amount: u32) {
        self.hp = self.hp.saturating_sub(amount);
    }

    /// Restore hp, capped at max
    pub fn restore_health(&mut self, amount: u32) {
        self.hp = self.hp.saturating_add(amount).min(self.max_hp);
    }

    /// Heal to full
    pub fn full_heal(&mut self) {
        self.hp = self.max_hp;
    }

    /// Add experience; at most one level-up per call, never past the cap
    ///
    /// A gain large enough to cross several thresholds still advances a
    /// single level (deliberate pacing rule, see DESIGN.md). At the cap the
    /// experience keeps accumulating but no further level-ups occur.
    ///
    /// Returns whether a level-up happened.
    pub fn gain_experience(&mut self, amount: u32) -> bool {
        self.experience += amount;
        if self.experience >= exp_threshold(self.level) && self.level < LEVEL_CAP {
            self.level_up();
            return true;
        }
        false
    }

    /// Advance one level: +1 to every attribute, new max hp, full heal
    fn level_up(&mut self) {
        self.level += 1;
        self.stats.raise_all(STAT_GAIN_PER_LEVEL);
        self.max_hp = self.stats.max_hp();
        self.hp = self.max_hp;
        self.experience = 0;
        tracing::debug!(
            level = self.level,
            max_hp = self.max_hp,
            "{} leveled up",
            self.name
        );
    }

    // Buff setters. Stamina is the only attribute that feeds a stored value,
    // so its setter recomputes max hp and re-clamps current hp.

    pub fn set_precision(&mut self, value: u32) {
        self.stats.precision = value;
    }

    pub fn set_stamina(&mut self, value: u32) {
        self.stats.stamina = value;
        self.max_hp = self.stats.max_hp();
        self.hp = self.hp.min(self.max_hp);
    }

    pub fn set_creativity(&mut self, value: u32) {
        self.stats.creativity = value;
    }

    pub fn set_flavor_sense(&mut self, value: u32) {
        self.stats.flavor_sense = value;
    }

    pub fn set_speed(&mut self, value: u32) {
        self.stats.speed = value;
    }

    // Accessors

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn class(&self) -> PlayerClass {
        self.class
    }

    pub fn stats(&self) -> &StatBlock {
        &self.stats
    }

    pub fn hp(&self) -> u32 {
        self.hp
    }

    pub fn max_hp(&self) -> u32 {
        self.max_hp
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn experience(&self) -> u32 {
        self.experience
    }

    /// Experience required for the next level-up
    pub fn exp_to_level(&self) -> u32 {
        exp_threshold(self.level)
    }

    pub fn crit_chance(&self) -> u32 {
        self.stats.crit_chance()
    }

    pub fn dodge_chance(&self) -> u32 {
        self.stats.dodge_chance()
    }

    pub fn is_defeated(&self) -> bool {
        self.hp == 0
    }
}
