//! Battle engine - gauge scheduling, action resolution, session state
//!
//! Not a full combat simulator: effects are minimal (attack damage only),
//! turn order is whatever the gauges produce, and win/loss judgement is
//! left to the caller.

pub mod log;
pub mod resolver;
pub mod scheduler;
pub mod session;
pub mod snapshot;

// Re-exports for convenient access
pub use log::{BattleLog, LogEntry, LogEventKind};
pub use resolver::{resolve_action, roll_attack_damage, ActionKind};
pub use scheduler::GaugeScheduler;
pub use session::{GameSession, Mode};
pub use snapshot::{CombatantView, SessionSnapshot};
