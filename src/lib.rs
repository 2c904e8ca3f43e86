//! Chrono Gate - gauge-driven battle engine for a time-travel RPG

pub mod battle;
pub mod combatant;
pub mod core;
pub mod runtime;
