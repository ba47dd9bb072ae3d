//! Battle session state machine
//!
//! Owns both combatants for the duration of one battle. Each submitted
//! action resolves atomically into an ordered event sequence; the session
//! transitions `AwaitingAction -> Resolving -> AwaitingAction | Won | Lost`,
//! with `Won`/`Lost` terminal.

use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::battle::action::AttackAction;
use crate::battle::constants::MESSAGE_PACE_MS;
use crate::battle::event::{BattleEvent, BattleOutcome};
use crate::battle::resolution::{resolve_exchange, CounterOutcome, ExchangeRolls};
use crate::character::player::Player;
use crate::character::progression::victory_reward;
use crate::core::error::{CombatError, Result};
use crate::enemy::Enemy;

/// Lifecycle state of a battle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattlePhase {
    /// Idle, accepting one action
    AwaitingAction,
    /// An action is resolving; further submissions are rejected
    Resolving,
    Won,
    Lost,
}

/// One battle between a player and an enemy
#[derive(Debug)]
pub struct BattleSession {
    player: Player,
    enemy: Enemy,
    /// Enemy hp captured at battle start, used for the victory reward
    enemy_initial_hp: u32,
    phase: BattlePhase,
    rng: ChaCha8Rng,
}

impl BattleSession {
    /// Begin a battle. The player always enters at full hp regardless of
    /// prior damage (deliberate balancing rule).
    ///
    /// Returns the session and the opening events (battle start, hp
    /// snapshot, first turn-ready beat).
    pub fn start(mut player: Player, enemy: Enemy, rng: ChaCha8Rng) -> (Self, Vec<BattleEvent>) {
        player.full_heal();
        let enemy_initial_hp = enemy.hp();
        tracing::info!(
            player = player.name(),
            enemy = enemy.name(),
            enemy_hp = enemy_initial_hp,
            "battle started"
        );

        let events = vec![
            BattleEvent::BattleStarted {
                player: player.name().to_string(),
                enemy: enemy.name().to_string(),
            },
            BattleEvent::HpSnapshot {
                player_hp: player.hp(),
                player_max_hp: player.max_hp(),
                enemy_hp: enemy.hp(),
                enemy_max_hp: enemy.max_hp(),
            },
            BattleEvent::TurnReady {
                actions: AttackAction::available_at(player.level()),
            },
        ];

        let session = Self {
            player,
            enemy,
            enemy_initial_hp,
            phase: BattlePhase::AwaitingAction,
            rng,
        };
        (session, events)
    }

    /// Submit the player's action for this turn
    ///
    /// Rejected without state change if a resolution is in flight, the
    /// battle is over, or the slot is still locked. Otherwise resolves the
    /// full exchange atomically and returns the ordered events.
    pub fn submit_action(&mut self, action: AttackAction) -> Result<Vec<BattleEvent>> {
        match self.phase {
            BattlePhase::Resolving => return Err(CombatError::ResolutionInFlight),
            BattlePhase::Won => {
                return Err(CombatError::BattleOver {
                    outcome: BattleOutcome::Won,
                })
            }
            BattlePhase::Lost => {
                return Err(CombatError::BattleOver {
                    outcome: BattleOutcome::Lost,
                })
            }
            BattlePhase::AwaitingAction => {}
        }
        if !action.unlocked_at(self.player.level()) {
            return Err(CombatError::AttackLocked {
                slot: action.slot(),
                required_level: action.unlock_level(),
            });
        }

        self.phase = BattlePhase::Resolving;
        let events = self.resolve(action);
        Ok(events)
    }

    /// Resolve one exchange and build its event sequence. Runs to completion
    /// once started; the terminal check at the end picks the next phase.
    fn resolve(&mut self, action: AttackAction) -> Vec<BattleEvent> {
        let rolls = ExchangeRolls::draw(&mut self.rng, self.enemy.attack_count());
        let attack = action.display_name(self.player.class()).to_string();
        let result = resolve_exchange(&mut self.player, &mut self.enemy, action, rolls);

        let mut events = vec![
            BattleEvent::AttackDeclared {
                attacker: self.player.name().to_string(),
                attack,
                critical: result.critical,
            },
            BattleEvent::DamageDealt {
                target: self.enemy.name().to_string(),
                amount: result.damage,
            },
            BattleEvent::Pace {
                millis: MESSAGE_PACE_MS,
            },
        ];

        match result.counter {
            CounterOutcome::Skipped => {}
            CounterOutcome::Dodged => {
                events.push(BattleEvent::CounterDodged);
                events.push(BattleEvent::Pace {
                    millis: MESSAGE_PACE_MS,
                });
            }
            CounterOutcome::Landed { attack, damage } => {
                events.push(BattleEvent::CounterDeclared {
                    attacker: self.enemy.name().to_string(),
                    attack,
                });
                events.push(BattleEvent::DamageDealt {
                    target: self.player.name().to_string(),
                    amount: damage,
                });
                events.push(BattleEvent::Pace {
                    millis: MESSAGE_PACE_MS,
                });
            }
        }

        events.push(BattleEvent::HpSnapshot {
            player_hp: self.player.hp(),
            player_max_hp: self.player.max_hp(),
            enemy_hp: self.enemy.hp(),
            enemy_max_hp: self.enemy.max_hp(),
        });

        // Terminal check: player defeat wins over enemy defeat.
        if self.player.is_defeated() {
            self.phase = BattlePhase::Lost;
            tracing::info!(enemy = self.enemy.name(), "battle lost");
            events.push(BattleEvent::BattleEnded {
                outcome: BattleOutcome::Lost,
            });
        } else if self.enemy.is_defeated() {
            self.phase = BattlePhase::Won;
            let reward = victory_reward(self.enemy_initial_hp, self.player.level());
            let leveled = self.player.gain_experience(reward);
            tracing::info!(
                enemy = self.enemy.name(),
                reward,
                leveled,
                "battle won"
            );
            events.push(BattleEvent::ExperienceGained { amount: reward });
            if leveled {
                events.push(BattleEvent::LevelUp {
                    new_level: self.player.level(),
                });
            }
            events.push(BattleEvent::BattleEnded {
                outcome: BattleOutcome::Won,
            });
        } else {
            self.phase = BattlePhase::AwaitingAction;
            events.push(BattleEvent::TurnReady {
                actions: AttackAction::available_at(self.player.level()),
            });
        }

        events
    }

    pub fn phase(&self) -> BattlePhase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, BattlePhase::Won | BattlePhase::Lost)
    }

    pub fn outcome(&self) -> Option<BattleOutcome> {
        match self.phase {
            BattlePhase::Won => Some(BattleOutcome::Won),
            BattlePhase::Lost => Some(BattleOutcome::Lost),
            _ => None,
        }
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn enemy(&self) -> &Enemy {
        &self.enemy
    }

    pub fn enemy_initial_hp(&self) -> u32 {
        self.enemy_initial_hp
    }

    /// Action slots currently available to the player
    pub fn available_actions(&self) -> Vec<AttackAction> {
        AttackAction::available_at(self.player.level())
    }

    /// Tear down the session, handing the player back to the caller. Only
    /// the player's hp/level/experience persist across battles.
    pub fn finish(self) -> Player {
        self.player
    }
}
