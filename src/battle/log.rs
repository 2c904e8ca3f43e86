//! Append-only record of resolved battle actions

use serde::{Deserialize, Serialize};

use crate::core::types::{CombatantId, Tick};

/// One entry in the battle log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub tick: Tick,
    pub kind: LogEventKind,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LogEventKind {
    BattleStarted,
    Attack {
        actor: CombatantId,
        target: CombatantId,
        damage: u32,
    },
    Skill {
        actor: CombatantId,
        skill: String,
    },
    Defend {
        actor: CombatantId,
    },
}

/// Ordered log of a single battle, cleared at battle boundaries
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BattleLog {
    pub entries: Vec<LogEntry>,
}

impl BattleLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: LogEntry) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_appends_in_order() {
        let mut log = BattleLog::new();
        assert!(log.is_empty());

        log.push(LogEntry {
            tick: 0,
            kind: LogEventKind::BattleStarted,
            message: "The battle begins!".to_string(),
        });
        log.push(LogEntry {
            tick: 12,
            kind: LogEventKind::Defend {
                actor: CombatantId(1),
            },
            message: "Chrono is guarding!".to_string(),
        });

        assert_eq!(log.len(), 2);
        assert_eq!(log.entries[0].kind, LogEventKind::BattleStarted);
        assert_eq!(log.entries[1].tick, 12);
    }

    #[test]
    fn test_log_clear() {
        let mut log = BattleLog::new();
        log.push(LogEntry {
            tick: 0,
            kind: LogEventKind::BattleStarted,
            message: "The battle begins!".to_string(),
        });

        log.clear();
        assert!(log.is_empty());
    }

    #[test]
    fn test_attack_entry_carries_damage() {
        let entry = LogEntry {
            tick: 40,
            kind: LogEventKind::Attack {
                actor: CombatantId(1),
                target: CombatantId(101),
                damage: 17,
            },
            message: "Chrono attacks! 17 damage to Slime!".to_string(),
        };

        match entry.kind {
            LogEventKind::Attack { damage, .. } => assert_eq!(damage, 17),
            _ => panic!("expected an attack entry"),
        }
    }
}
