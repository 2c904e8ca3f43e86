pub mod roster;
pub mod state;
pub mod templates;

pub use roster::Roster;
pub use state::Combatant;
pub use templates::{enemy_roster, load_roster_config, party_roster, EnemyTemplate, RosterConfig};
