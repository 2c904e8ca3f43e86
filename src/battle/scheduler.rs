//! Gauge scheduler - fills readiness gauges on a fixed cadence
//!
//! The scheduler knows nothing about readiness thresholds; "ready" is a
//! derived read on the combatant. Pausing never resets a gauge.

use serde::{Deserialize, Serialize};

use crate::combatant::roster::Roster;
use crate::core::config::BalanceConfig;

/// Pause flag plus the per-tick gauge advance
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct GaugeScheduler {
    /// Whether the recurring tick should advance gauges
    pub running: bool,
}

impl GaugeScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_running(&mut self, running: bool) {
        self.running = running;
    }

    /// Advance every live combatant's gauge by one tick
    ///
    /// Allies and enemies fill at different rates; both clamp at their own
    /// `max_gauge`. Defeated combatants are skipped.
    pub fn tick_roster(&self, roster: &mut Roster, config: &BalanceConfig) {
        for ally in roster.allies.iter_mut().filter(|c| c.is_live()) {
            ally.advance_gauge(config.ally_gauge_rate);
        }
        for enemy in roster.enemies.iter_mut().filter(|c| c.is_live()) {
            enemy.advance_gauge(config.enemy_gauge_rate);
        }
    }
}
