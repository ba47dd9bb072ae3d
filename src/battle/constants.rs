//! Combat tunables - all battle-side values in one place
//!
//! Character-side formulas (hp per stamina, crit/dodge per attribute) live
//! with `character::stats`; progression numbers live with
//! `character::progression`.

// Damage
/// Final damage multiplier on a critical hit
pub const CRIT_MULTIPLIER: u32 = 2;

// Rolls
/// Exclusive upper bound for crit and dodge rolls; chances are percentages
/// compared with strict `<`, so a chance of 100 or more always triggers
pub const ROLL_RANGE: u32 = 100;

// Action unlocks (slots 1 and 2 are always available)
pub const ATTACK_3_UNLOCK_LEVEL: u32 = 4;
pub const ATTACK_4_UNLOCK_LEVEL: u32 = 7;

// Boss gate - the climactic fight opens at the level cap
pub const BOSS_UNLOCK_LEVEL: u32 = 10;

// Pacing - delay directive between message beats, interpreted by the
// presentation layer (the engine itself never sleeps)
pub const MESSAGE_PACE_MS: u64 = 500;
