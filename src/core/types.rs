//! Core type definitions used throughout the engine

use serde::{Deserialize, Serialize};

/// Unique identifier for combatants, stable within a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CombatantId(pub u32);

impl CombatantId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }
}

/// Gauge tick counter (battle time unit)
pub type Tick = u64;

/// Which side of a battle a combatant fights on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Ally,
    Enemy,
}

/// Elemental affinity carried by party members
///
/// Display context only; no combat math reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    Lightning,
    Water,
    Earth,
}

/// Time periods reachable through the time gate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TimePeriod {
    Prehistoric,
    Ancient,
    Medieval,
    #[default]
    Present,
    Future,
}

impl TimePeriod {
    /// Display label for the presentation layer
    pub fn label(&self) -> &'static str {
        match self {
            TimePeriod::Prehistoric => "Prehistoric Era",
            TimePeriod::Ancient => "Ancient Civilization",
            TimePeriod::Medieval => "Middle Ages",
            TimePeriod::Present => "Present Day",
            TimePeriod::Future => "Future",
        }
    }

    /// All periods in gate-menu order
    pub fn all() -> [TimePeriod; 5] {
        [
            TimePeriod::Prehistoric,
            TimePeriod::Ancient,
            TimePeriod::Medieval,
            TimePeriod::Present,
            TimePeriod::Future,
        ]
    }
}
