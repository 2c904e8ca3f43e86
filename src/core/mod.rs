pub mod config;
pub mod error;
pub mod types;

pub use config::{load_balance_config, BalanceConfig};
pub use error::{EngineError, Result};
pub use types::{CombatantId, Element, Side, Tick, TimePeriod};
