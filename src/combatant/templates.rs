//! Built-in party and enemy templates, with TOML overrides
//!
//! The party is fixed for a game run. Enemy templates seed fresh copies at
//! every battle start; a TOML file can replace the built-in set.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::combatant::state::Combatant;
use crate::core::error::{EngineError, Result};
use crate::core::types::{CombatantId, Element};

/// The three party members at game start
pub fn party_roster() -> Vec<Combatant> {
    vec![
        Combatant::ally(
            CombatantId(1),
            "Chrono",
            100,
            50,
            Element::Lightning,
            &["Cyclone Slash", "Thunder"],
        ),
        Combatant::ally(CombatantId(2), "Lilia", 80, 80, Element::Water, &["Heal", "Ice"]),
        Combatant::ally(
            CombatantId(3),
            "Gaion",
            120,
            30,
            Element::Earth,
            &["Gaia's Wrath", "Earthquake"],
        ),
    ]
}

/// Fresh copies of the built-in enemy templates
pub fn enemy_roster() -> Vec<Combatant> {
    vec![
        Combatant::enemy(CombatantId(101), "Slime", 30, 80.0),
        Combatant::enemy(CombatantId(102), "Goblin", 50, 90.0),
    ]
}

/// One enemy template row in a roster TOML file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyTemplate {
    pub id: u32,
    pub name: String,
    pub hp: u32,
    pub max_gauge: f32,
}

/// Enemy roster loaded from TOML
///
/// An empty `enemies` table means "use the built-in set".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RosterConfig {
    #[serde(default)]
    pub enemies: Vec<EnemyTemplate>,
}

impl RosterConfig {
    /// Instantiate the templates as battle-ready combatants
    pub fn to_combatants(&self) -> Vec<Combatant> {
        if self.enemies.is_empty() {
            return enemy_roster();
        }
        self.enemies
            .iter()
            .map(|t| Combatant::enemy(CombatantId(t.id), &t.name, t.hp, t.max_gauge))
            .collect()
    }
}

/// Load an enemy roster override from a TOML file
///
/// Ids must be unique across the whole session, so enemy ids may not repeat
/// or reuse a party member's id.
pub fn load_roster_config(path: &Path) -> Result<RosterConfig> {
    let contents = fs::read_to_string(path)?;
    let config: RosterConfig = toml::from_str(&contents)?;

    let party_ids: HashSet<u32> = party_roster().iter().map(|c| c.id.0).collect();
    let mut seen_ids = HashSet::new();
    for template in &config.enemies {
        if template.hp == 0 {
            return Err(EngineError::InvalidConfig(format!(
                "enemy '{}' has zero hp",
                template.name
            )));
        }
        if !template.max_gauge.is_finite() || template.max_gauge <= 0.0 {
            return Err(EngineError::InvalidConfig(format!(
                "enemy '{}' needs a positive, finite max gauge",
                template.name
            )));
        }
        if party_ids.contains(&template.id) {
            return Err(EngineError::InvalidConfig(format!(
                "enemy '{}' reuses party member id {}",
                template.name, template.id
            )));
        }
        if !seen_ids.insert(template.id) {
            return Err(EngineError::InvalidConfig(format!(
                "duplicate enemy id {}",
                template.id
            )));
        }
    }

    Ok(config)
}
