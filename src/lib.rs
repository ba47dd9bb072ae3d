//! Kitchen Clash - turn-based combat core for a cooking role-playing game
//!
//! The library is the whole game logic: character stats and progression,
//! enemy archetypes and encounter generation, and the battle state machine
//! with its paced event stream. Presentation (rendering, input, audio) is a
//! consumer of the event stream and lives outside this crate; `src/main.rs`
//! ships a minimal text-mode consumer.

pub mod battle;
pub mod character;
pub mod core;
pub mod enemy;
