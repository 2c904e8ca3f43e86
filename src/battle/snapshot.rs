//! Read-only session snapshots for presentation layers
//!
//! A snapshot is a plain serializable copy; mutating it has no effect on the
//! session it was captured from.

use serde::{Deserialize, Serialize};

use crate::battle::log::LogEntry;
use crate::battle::session::{GameSession, Mode};
use crate::combatant::state::Combatant;
use crate::core::error::Result;
use crate::core::types::{CombatantId, Side, Tick, TimePeriod};

/// One combatant as the UI sees it: integer gauge, derived readiness
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombatantView {
    pub id: CombatantId,
    pub name: String,
    pub side: Side,
    pub hp: u32,
    pub max_hp: u32,
    pub mp: u32,
    pub max_mp: u32,
    /// Gauge floored to a whole number for display
    pub gauge: u32,
    pub max_gauge: u32,
    pub ready: bool,
}

impl CombatantView {
    fn from_combatant(c: &Combatant) -> Self {
        Self {
            id: c.id,
            name: c.name.clone(),
            side: c.side,
            hp: c.hp,
            max_hp: c.max_hp,
            mp: c.mp,
            max_mp: c.max_mp,
            gauge: c.gauge.floor() as u32,
            max_gauge: c.max_gauge.floor() as u32,
            ready: c.is_ready(),
        }
    }
}

/// Full session state at one instant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub mode: Mode,
    pub current_period: TimePeriod,
    pub scheduler_running: bool,
    pub battle_tick: Tick,
    pub selected: Option<CombatantId>,
    pub allies: Vec<CombatantView>,
    pub enemies: Vec<CombatantView>,
    pub log: Vec<LogEntry>,
}

impl SessionSnapshot {
    pub fn capture(session: &GameSession) -> Self {
        Self {
            mode: session.mode,
            current_period: session.current_period,
            scheduler_running: session.scheduler.running,
            battle_tick: session.battle_tick,
            selected: session.selected,
            allies: session
                .roster
                .allies
                .iter()
                .map(CombatantView::from_combatant)
                .collect(),
            enemies: session
                .roster
                .enemies
                .iter()
                .map(CombatantView::from_combatant)
                .collect(),
            log: session.log.entries.clone(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        let json = serde_json::to_string_pretty(self)?;
        Ok(json)
    }
}
