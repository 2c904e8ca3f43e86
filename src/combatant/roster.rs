//! Roster of battle participants
//!
//! Allies persist for the life of the session; the enemy side is filled at
//! battle start and emptied again at battle end. Iteration order is template
//! order, which is what "first live enemy" means for default targeting.

use serde::{Deserialize, Serialize};

use crate::combatant::state::Combatant;
use crate::core::types::CombatantId;

/// All combatants participating in the session
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Roster {
    pub allies: Vec<Combatant>,
    pub enemies: Vec<Combatant>,
}

impl Roster {
    /// Create a roster with the given party and no enemies
    pub fn new(allies: Vec<Combatant>) -> Self {
        Self {
            allies,
            enemies: Vec::new(),
        }
    }

    pub fn ally(&self, id: CombatantId) -> Option<&Combatant> {
        self.allies.iter().find(|c| c.id == id)
    }

    pub fn ally_mut(&mut self, id: CombatantId) -> Option<&mut Combatant> {
        self.allies.iter_mut().find(|c| c.id == id)
    }

    pub fn enemy(&self, id: CombatantId) -> Option<&Combatant> {
        self.enemies.iter().find(|c| c.id == id)
    }

    pub fn enemy_mut(&mut self, id: CombatantId) -> Option<&mut Combatant> {
        self.enemies.iter_mut().find(|c| c.id == id)
    }

    /// Get a combatant from either side
    pub fn combatant(&self, id: CombatantId) -> Option<&Combatant> {
        self.ally(id).or_else(|| self.enemy(id))
    }

    /// Default attack target: the first live enemy in roster order
    pub fn first_live_enemy(&self) -> Option<&Combatant> {
        self.enemies.iter().find(|e| e.is_live())
    }

    pub fn live_enemy_count(&self) -> usize {
        self.enemies.iter().filter(|e| e.is_live()).count()
    }

    /// Drop enemies whose hp reached zero
    ///
    /// Runs at the end of every resolved action, so a defeated enemy is
    /// never observable by the next one.
    pub fn remove_defeated_enemies(&mut self) {
        self.enemies.retain(|e| e.is_live());
    }
}
