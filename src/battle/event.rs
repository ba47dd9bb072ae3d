//! Battle event stream
//!
//! One resolution emits a fixed-order sequence of events; the presentation
//! layer renders text, plays cues, and interprets `Pace` delay directives.
//! The engine never sleeps on its own.

use serde::{Deserialize, Serialize};

use crate::battle::action::AttackAction;

/// How a battle ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleOutcome {
    Won,
    Lost,
}

/// Tag for an optional presentation-side sound effect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AudioCue {
    PlayerAttack,
    EnemyAttack,
    CriticalHit,
    Dodge,
}

/// One beat of the battle, in emission order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BattleEvent {
    BattleStarted {
        player: String,
        enemy: String,
    },
    /// Player attack declared; the crit flag is part of the declaration
    AttackDeclared {
        attacker: String,
        attack: String,
        critical: bool,
    },
    /// Damage applied to the named target
    DamageDealt {
        target: String,
        amount: u32,
    },
    /// The counterattack was fully negated; no damage event follows
    CounterDodged,
    /// Enemy counterattack declared with its chosen attack name
    CounterDeclared {
        attacker: String,
        attack: String,
    },
    HpSnapshot {
        player_hp: u32,
        player_max_hp: u32,
        enemy_hp: u32,
        enemy_max_hp: u32,
    },
    /// Timed-delay directive for the presentation layer
    Pace {
        millis: u64,
    },
    /// The player may act; carries the currently unlocked slots
    TurnReady {
        actions: Vec<AttackAction>,
    },
    ExperienceGained {
        amount: u32,
    },
    LevelUp {
        new_level: u32,
    },
    BattleEnded {
        outcome: BattleOutcome,
    },
}

impl BattleEvent {
    /// Sound effect to play alongside this event, if any
    pub fn audio_cue(&self) -> Option<AudioCue> {
        match self {
            BattleEvent::AttackDeclared { critical: true, .. } => Some(AudioCue::CriticalHit),
            BattleEvent::AttackDeclared { .. } => Some(AudioCue::PlayerAttack),
            BattleEvent::CounterDeclared { .. } => Some(AudioCue::EnemyAttack),
            BattleEvent::CounterDodged => Some(AudioCue::Dodge),
            _ => None,
        }
    }

    /// Render this event as a battle-log line; pacing and readiness beats
    /// have no text of their own
    pub fn describe(&self) -> Option<String> {
        match self {
            BattleEvent::BattleStarted { player, enemy } => {
                Some(format!("Battle Begins: {player} vs. {enemy}"))
            }
            BattleEvent::AttackDeclared {
                attacker,
                attack,
                critical,
            } => Some(if *critical {
                format!("{attacker} uses {attack} (CRITICAL HIT!)")
            } else {
                format!("{attacker} uses {attack}")
            }),
            BattleEvent::DamageDealt { target, amount } => {
                Some(format!("{target} takes {amount} damage!"))
            }
            BattleEvent::CounterDodged => Some("Swiftly dodged the counterattack!".to_string()),
            BattleEvent::CounterDeclared { attacker, attack } => {
                Some(format!("{attacker} counters with {attack}!"))
            }
            BattleEvent::HpSnapshot {
                player_hp,
                player_max_hp,
                enemy_hp,
                enemy_max_hp,
            } => Some(format!(
                "Your HP: {player_hp}/{player_max_hp} | Enemy HP: {enemy_hp}/{enemy_max_hp}"
            )),
            BattleEvent::ExperienceGained { amount } => {
                Some(format!("You gained {amount} experience!"))
            }
            BattleEvent::LevelUp { new_level } => {
                Some(format!("Level Up! You reached Level {new_level}!"))
            }
            BattleEvent::BattleEnded { outcome } => Some(match outcome {
                BattleOutcome::Won => "Victory!".to_string(),
                BattleOutcome::Lost => "You were defeated!".to_string(),
            }),
            BattleEvent::Pace { .. } | BattleEvent::TurnReady { .. } => None,
        }
    }
}
