//! Turn-based battle engine: actions, events, resolution, session, runner

pub mod action;
pub mod constants;
pub mod event;
pub mod resolution;
pub mod runner;
pub mod session;

pub use action::AttackAction;
pub use event::{AudioCue, BattleEvent, BattleOutcome};
pub use runner::{BattleHandle, BattleRunner};
pub use session::{BattlePhase, BattleSession};
