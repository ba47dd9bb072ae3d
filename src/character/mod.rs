//! Player characters: attributes, classes, and progression

pub mod class;
pub mod player;
pub mod progression;
pub mod stats;

pub use class::PlayerClass;
pub use player::Player;
pub use stats::StatBlock;
