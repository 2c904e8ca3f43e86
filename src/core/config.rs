//! Balance configuration with documented constants
//!
//! All pacing numbers are collected here with explanations of their purpose
//! and how they interact with each other.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::error::{EngineError, Result};

/// Configuration for gauge pacing and attack damage
///
/// The defaults give battles their intended feel. Changing them
/// affects how quickly turns come up and how long enemies survive.
/// Fields omitted from a TOML override keep their defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BalanceConfig {
    /// Milliseconds between gauge ticks when driven by the wall clock
    ///
    /// Only the runtime driver consumes this; the engine itself counts
    /// ticks, not milliseconds.
    pub tick_interval_ms: u64,

    /// Gauge points an ally gains per tick
    ///
    /// At the default rate (2.0), a standard 100-point gauge fills in
    /// 50 ticks, i.e. five seconds at the 100ms tick interval.
    pub ally_gauge_rate: f32,

    /// Gauge points an enemy gains per tick
    ///
    /// Deliberately below the ally rate so the party gets more turns.
    /// At 1.5, a Slime's 80-point gauge fills in 54 ticks.
    pub enemy_gauge_rate: f32,

    /// Smallest attack damage roll, inclusive
    pub attack_damage_min: u32,

    /// Largest attack damage roll, inclusive
    ///
    /// With the default 10..=29 range, a 30 hp enemy survives the first
    /// hit unless the roll is maximal, and never survives three.
    pub attack_damage_max: u32,
}

impl Default for BalanceConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 100,
            ally_gauge_rate: 2.0,
            enemy_gauge_rate: 1.5,
            attack_damage_min: 10,
            attack_damage_max: 29,
        }
    }
}

impl BalanceConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.tick_interval_ms == 0 {
            return Err("tick_interval_ms must be positive".into());
        }

        if !self.ally_gauge_rate.is_finite() || !self.enemy_gauge_rate.is_finite() {
            return Err("Gauge rates must be finite".into());
        }

        if self.ally_gauge_rate <= 0.0 || self.enemy_gauge_rate <= 0.0 {
            return Err("Gauge rates must be positive".into());
        }

        if self.attack_damage_min == 0 {
            return Err("attack_damage_min must be positive".into());
        }

        if self.attack_damage_min > self.attack_damage_max {
            return Err(format!(
                "attack_damage_min ({}) should be <= attack_damage_max ({})",
                self.attack_damage_min, self.attack_damage_max
            ));
        }

        Ok(())
    }
}

/// Load a balance override from a TOML file, validated before use
pub fn load_balance_config(path: &Path) -> Result<BalanceConfig> {
    let contents = fs::read_to_string(path)?;
    let config: BalanceConfig = toml::from_str(&contents)?;
    config.validate().map_err(EngineError::InvalidConfig)?;
    Ok(config)
}
