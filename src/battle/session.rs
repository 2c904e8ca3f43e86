//! Battle session state machine
//!
//! One session spans a whole game run: exploration, the time gate, and any
//! number of battles. All transitions are total; calling one from an
//! inapplicable mode is a no-op rather than an error.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::battle::log::{BattleLog, LogEntry, LogEventKind};
use crate::battle::resolver::{resolve_action, ActionKind};
use crate::battle::scheduler::GaugeScheduler;
use crate::battle::snapshot::SessionSnapshot;
use crate::combatant::roster::Roster;
use crate::combatant::state::Combatant;
use crate::combatant::templates::{enemy_roster, party_roster};
use crate::core::config::BalanceConfig;
use crate::core::types::{CombatantId, Tick, TimePeriod};

/// Session modes; exactly one is active at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Mode {
    #[default]
    Exploration,
    Battle,
    TimePeriodSelect,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameSession {
    pub mode: Mode,
    pub roster: Roster,
    /// Enemy templates cloned into the roster at every battle start
    pub enemy_templates: Vec<Combatant>,
    /// Weak reference to a live ally, or nothing
    pub selected: Option<CombatantId>,
    pub log: BattleLog,
    pub scheduler: GaugeScheduler,
    /// Where in time the party currently is; combat never reads this
    pub current_period: TimePeriod,
    pub config: BalanceConfig,
    /// Deterministic rng for damage rolls
    pub rng: ChaCha8Rng,
    /// Elapsed gauge ticks in the current battle
    pub battle_tick: Tick,
}

impl GameSession {
    pub fn new(
        config: BalanceConfig,
        allies: Vec<Combatant>,
        enemy_templates: Vec<Combatant>,
        rng: ChaCha8Rng,
    ) -> Self {
        Self {
            mode: Mode::Exploration,
            roster: Roster::new(allies),
            enemy_templates,
            selected: None,
            log: BattleLog::new(),
            scheduler: GaugeScheduler::new(),
            current_period: TimePeriod::default(),
            config,
            rng,
            battle_tick: 0,
        }
    }

    /// Session with the built-in party and enemy set, seeded for determinism
    pub fn with_seed(seed: u64) -> Self {
        Self::new(
            BalanceConfig::default(),
            party_roster(),
            enemy_roster(),
            ChaCha8Rng::seed_from_u64(seed),
        )
    }

    /// Enter battle: fresh enemies, cleared log, empty gauges, ticking on
    pub fn start_battle(&mut self) {
        if self.mode != Mode::Exploration {
            return;
        }

        self.mode = Mode::Battle;
        self.battle_tick = 0;
        self.selected = None;
        self.roster.enemies = self.enemy_templates.clone();
        for ally in self.roster.allies.iter_mut() {
            ally.reset_gauge();
        }
        self.log.clear();
        self.log.push(LogEntry {
            tick: 0,
            kind: LogEventKind::BattleStarted,
            message: "The battle begins!".to_string(),
        });
        self.scheduler.set_running(true);

        tracing::debug!("battle started with {} enemies", self.roster.enemies.len());
    }

    /// Leave battle: enemies and log are discarded, ticking stops
    ///
    /// Always caller-initiated; the engine computes no win or loss. A caller
    /// that wants "battle ends when the last enemy falls" watches the roster
    /// and invokes this itself.
    pub fn end_battle(&mut self) {
        if self.mode != Mode::Battle {
            return;
        }

        self.mode = Mode::Exploration;
        self.roster.enemies.clear();
        self.selected = None;
        self.log.clear();
        self.scheduler.set_running(false);

        tracing::debug!("battle ended");
    }

    /// Pause or resume the gauge tick without touching any gauge
    pub fn set_scheduler_running(&mut self, running: bool) {
        self.scheduler.set_running(running);
    }

    /// Record a selection if `id` names a live ally during battle
    pub fn select_combatant(&mut self, id: CombatantId) {
        if self.mode != Mode::Battle {
            return;
        }
        if self.roster.ally(id).map(|a| a.is_live()).unwrap_or(false) {
            self.selected = Some(id);
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn open_time_period_select(&mut self) {
        if self.mode == Mode::Exploration {
            self.mode = Mode::TimePeriodSelect;
        }
    }

    pub fn close_time_period_select(&mut self) {
        if self.mode == Mode::TimePeriodSelect {
            self.mode = Mode::Exploration;
        }
    }

    /// Travel: set the period and return to exploration
    pub fn choose_time_period(&mut self, period: TimePeriod) {
        if self.mode != Mode::TimePeriodSelect {
            return;
        }

        self.current_period = period;
        self.mode = Mode::Exploration;
        tracing::debug!("travelled to {}", period.label());
    }

    /// Advance one gauge tick, if in battle and not paused
    pub fn tick(&mut self) {
        if self.mode != Mode::Battle || !self.scheduler.running {
            return;
        }

        self.battle_tick += 1;
        self.scheduler.tick_roster(&mut self.roster, &self.config);
    }

    /// Resolve an action for a ready ally; see [`resolve_action`]
    ///
    /// On success the selection is cleared and the entry is appended to the
    /// log, exactly once.
    pub fn resolve(
        &mut self,
        actor: CombatantId,
        kind: ActionKind,
        target: Option<CombatantId>,
    ) -> Option<LogEntry> {
        if self.mode != Mode::Battle {
            tracing::debug!("ignoring {:?} outside of battle", kind);
            return None;
        }

        let entry = resolve_action(
            &mut self.roster,
            &mut self.rng,
            &self.config,
            self.battle_tick,
            actor,
            kind,
            target,
        )?;

        self.selected = None;
        self.log.push(entry.clone());
        Some(entry)
    }

    /// Serializable view of the whole session for the presentation layer
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::capture(self)
    }
}
