//! Chef classes and their starting loadouts
//!
//! Classes are pure data: a base attribute block and a table of four attack
//! names. The attack slots map onto the same damage formulas for every class;
//! only the flavor text differs.

use serde::{Deserialize, Serialize};

use crate::character::stats::StatBlock;

/// Playable chef class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerClass {
    /// Balanced all-rounder
    SousChef,
    /// Precise and creative, low stamina
    PastryArtist,
    /// Tough and enduring, less refined
    GrillMaster,
}

impl PlayerClass {
    /// Starting attributes for this class
    pub fn base_stats(&self) -> StatBlock {
        match self {
            PlayerClass::SousChef => StatBlock {
                precision: 5,
                stamina: 5,
                creativity: 5,
                flavor_sense: 5,
                speed: 5,
            },
            PlayerClass::PastryArtist => StatBlock {
                precision: 7,
                stamina: 3,
                creativity: 8,
                flavor_sense: 5,
                speed: 7,
            },
            PlayerClass::GrillMaster => StatBlock {
                precision: 4,
                stamina: 8,
                creativity: 5,
                flavor_sense: 3,
                speed: 4,
            },
        }
    }

    /// Attack names for the four action slots, in slot order
    pub fn attack_names(&self) -> [&'static str; 4] {
        match self {
            PlayerClass::SousChef => ["Chop", "Sauté", "Dice", "Simmer"],
            PlayerClass::PastryArtist => ["Whisk", "Frost", "Fold", "Bake"],
            PlayerClass::GrillMaster => ["Grill", "Sear", "Baste", "Smoke"],
        }
    }

    /// Display name of the class
    pub fn name(&self) -> &'static str {
        match self {
            PlayerClass::SousChef => "Sous Chef",
            PlayerClass::PastryArtist => "Pastry Artist",
            PlayerClass::GrillMaster => "Grill Master",
        }
    }
}
