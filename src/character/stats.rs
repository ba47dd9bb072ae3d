//! Core attribute block shared by derived combat values
//!
//! Attributes are small non-negative integers. Everything a battle needs
//! beyond raw attributes (max hp, crit odds, dodge odds) is derived, never
//! stored.

use serde::{Deserialize, Serialize};

/// Hit points granted per point of stamina
pub const HP_PER_STAMINA: u32 = 10;
/// Critical-hit percent chance per point of precision
pub const CRIT_PER_PRECISION: u32 = 2;
/// Dodge percent chance per point of speed
pub const DODGE_PER_SPEED: u32 = 3;

/// The five core attributes of a chef
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatBlock {
    pub precision: u32,
    pub stamina: u32,
    pub creativity: u32,
    pub flavor_sense: u32,
    pub speed: u32,
}

impl StatBlock {
    /// Maximum hit points derived from stamina
    pub fn max_hp(&self) -> u32 {
        self.stamina * HP_PER_STAMINA
    }

    /// Critical-hit chance in percent (values over 100 always crit)
    pub fn crit_chance(&self) -> u32 {
        self.precision * CRIT_PER_PRECISION
    }

    /// Dodge chance in percent (values over 100 always dodge)
    pub fn dodge_chance(&self) -> u32 {
        self.speed * DODGE_PER_SPEED
    }

    /// Raise every attribute by the same amount (level-up growth)
    pub fn raise_all(&mut self, amount: u32) {
        self.precision += amount;
        self.stamina += amount;
        self.creativity += amount;
        self.flavor_sense += amount;
        self.speed += amount;
    }
}
