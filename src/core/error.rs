use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CombatError {
    #[error("attack slot {slot} is locked until level {required_level}")]
    AttackLocked { slot: usize, required_level: u32 },

    #[error("an attack resolution is already in flight")]
    ResolutionInFlight,

    #[error("battle is already over ({outcome:?})")]
    BattleOver {
        outcome: crate::battle::event::BattleOutcome,
    },
}

pub type Result<T> = std::result::Result<T, CombatError>;
