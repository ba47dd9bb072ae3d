//! Player attack actions
//!
//! Four fixed slots with fixed damage formulas. Slots 3 and 4 unlock with
//! level; the display name depends on the chef class, the mechanics do not.

use serde::{Deserialize, Serialize};

use crate::battle::constants::{ATTACK_3_UNLOCK_LEVEL, ATTACK_4_UNLOCK_LEVEL};
use crate::character::class::PlayerClass;
use crate::character::stats::StatBlock;

/// One of the four attack slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttackAction {
    /// Slot 1: precision strike
    Precise,
    /// Slot 2: creative flourish
    Creative,
    /// Slot 3: speed technique, unlocks at level 4
    Swift,
    /// Slot 4: stamina-powered heavy hit, unlocks at level 7
    Heavy,
}

impl AttackAction {
    pub const ALL: [AttackAction; 4] = [
        AttackAction::Precise,
        AttackAction::Creative,
        AttackAction::Swift,
        AttackAction::Heavy,
    ];

    /// 1-based slot number
    pub fn slot(self) -> usize {
        match self {
            AttackAction::Precise => 1,
            AttackAction::Creative => 2,
            AttackAction::Swift => 3,
            AttackAction::Heavy => 4,
        }
    }

    /// Action for a 1-based slot number
    pub fn from_slot(slot: usize) -> Option<Self> {
        match slot {
            1 => Some(AttackAction::Precise),
            2 => Some(AttackAction::Creative),
            3 => Some(AttackAction::Swift),
            4 => Some(AttackAction::Heavy),
            _ => None,
        }
    }

    /// Player level at which this slot becomes available
    pub fn unlock_level(self) -> u32 {
        match self {
            AttackAction::Precise | AttackAction::Creative => 1,
            AttackAction::Swift => ATTACK_3_UNLOCK_LEVEL,
            AttackAction::Heavy => ATTACK_4_UNLOCK_LEVEL,
        }
    }

    /// Whether this slot is available at the given player level
    pub fn unlocked_at(self, level: u32) -> bool {
        level >= self.unlock_level()
    }

    /// All slots available at the given player level, in slot order
    pub fn available_at(level: u32) -> Vec<AttackAction> {
        Self::ALL
            .into_iter()
            .filter(|action| action.unlocked_at(level))
            .collect()
    }

    /// Base damage before the critical multiplier
    pub fn base_damage(self, stats: &StatBlock) -> u32 {
        match self {
            AttackAction::Precise => stats.precision * 2,
            AttackAction::Creative => stats.creativity * 3,
            AttackAction::Swift => stats.speed * 2 + 5,
            AttackAction::Heavy => stats.stamina * 4,
        }
    }

    /// Class-flavored display name for this slot
    pub fn display_name(self, class: PlayerClass) -> &'static str {
        class.attack_names()[self.slot() - 1]
    }
}
