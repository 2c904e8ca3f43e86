//! Combatant state for battle participants
//!
//! Every participant has the same shape (mandatory but minimal); side-specific
//! rules live in the constructors.

use serde::{Deserialize, Serialize};

use crate::core::types::{CombatantId, Element, Side};

/// Standard readiness gauge size for party members
pub const ALLY_MAX_GAUGE: f32 = 100.0;

/// A battle participant, ally or enemy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Combatant {
    pub id: CombatantId,
    /// Display label, not used for identity
    pub name: String,
    pub side: Side,
    /// Current hit points; 0 means defeated
    pub hp: u32,
    pub max_hp: u32,
    /// Magic points; enemies carry 0/0
    pub mp: u32,
    pub max_mp: u32,
    /// Readiness gauge, fills over time up to `max_gauge`
    pub gauge: f32,
    pub max_gauge: f32,
    /// Elemental affinity; enemies have none
    pub element: Option<Element>,
    /// Skill names in menu order; empty for enemies
    pub skills: Vec<String>,
}

impl Combatant {
    /// Create a party member at full vitals with an empty gauge
    pub fn ally(id: CombatantId, name: &str, hp: u32, mp: u32, element: Element, skills: &[&str]) -> Self {
        Self {
            id,
            name: name.to_string(),
            side: Side::Ally,
            hp,
            max_hp: hp,
            mp,
            max_mp: mp,
            gauge: 0.0,
            max_gauge: ALLY_MAX_GAUGE,
            element: Some(element),
            skills: skills.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Create an enemy at full vitals with an empty gauge
    pub fn enemy(id: CombatantId, name: &str, hp: u32, max_gauge: f32) -> Self {
        Self {
            id,
            name: name.to_string(),
            side: Side::Enemy,
            hp,
            max_hp: hp,
            mp: 0,
            max_mp: 0,
            gauge: 0.0,
            max_gauge,
            element: None,
            skills: Vec::new(),
        }
    }

    /// Reduce hp, clamped at zero (overkill is not an error)
    pub fn apply_damage(&mut self, amount: u32) {
        self.hp = self.hp.saturating_sub(amount);
    }

    /// Advance the gauge by one tick's worth, clamped at `max_gauge`
    pub fn advance_gauge(&mut self, rate: f32) {
        self.gauge = (self.gauge + rate).min(self.max_gauge);
    }

    /// Empty the gauge after an action, or at battle start
    pub fn reset_gauge(&mut self) {
        self.gauge = 0.0;
    }

    /// Can this combatant act right now?
    pub fn is_ready(&self) -> bool {
        self.gauge >= self.max_gauge
    }

    pub fn is_defeated(&self) -> bool {
        self.hp == 0
    }

    pub fn is_live(&self) -> bool {
        self.hp > 0
    }
}
