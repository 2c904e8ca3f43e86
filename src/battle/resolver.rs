//! Action resolution for ready allies
//!
//! Every unmet precondition is a silent no-op: nothing raises, nothing
//! mutates, no log entry appears. The presentation layer is expected to
//! disable its own affordances, but the resolver never relies on that.

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::battle::log::{LogEntry, LogEventKind};
use crate::combatant::roster::Roster;
use crate::core::config::BalanceConfig;
use crate::core::types::{CombatantId, Tick};

/// Actions a ready ally can take
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionKind {
    Attack,
    Skill,
    Defend,
}

/// Roll attack damage, uniform over the configured inclusive range
pub fn roll_attack_damage(rng: &mut ChaCha8Rng, config: &BalanceConfig) -> u32 {
    rng.gen_range(config.attack_damage_min..=config.attack_damage_max)
}

/// Resolve one action against the roster
///
/// The actor must be a live ally with a full gauge. On success the actor's
/// gauge is reset and defeated enemies are removed before this returns, and
/// the single log entry describing the action is handed back to the caller
/// for appending. `None` means a precondition failed and nothing changed.
pub fn resolve_action(
    roster: &mut Roster,
    rng: &mut ChaCha8Rng,
    config: &BalanceConfig,
    tick: Tick,
    actor_id: CombatantId,
    kind: ActionKind,
    target: Option<CombatantId>,
) -> Option<LogEntry> {
    let actor = match roster.ally(actor_id) {
        Some(a) if a.is_live() && a.is_ready() => a,
        _ => {
            tracing::debug!("ignoring {:?} for non-ready actor {:?}", kind, actor_id);
            return None;
        }
    };
    let actor_name = actor.name.clone();
    let first_skill = actor.skills.first().cloned();

    let entry = match kind {
        ActionKind::Attack => {
            let target_id = match target {
                Some(id) => id,
                None => match roster.first_live_enemy() {
                    Some(enemy) => enemy.id,
                    None => {
                        tracing::debug!("ignoring attack with no live enemies");
                        return None;
                    }
                },
            };

            // An explicit target must name a live enemy; no silent retargeting
            let enemy = match roster.enemy_mut(target_id) {
                Some(e) if e.is_live() => e,
                _ => {
                    tracing::debug!("ignoring attack on invalid target {:?}", target_id);
                    return None;
                }
            };

            let damage = roll_attack_damage(rng, config);
            enemy.apply_damage(damage);
            let target_name = enemy.name.clone();

            LogEntry {
                tick,
                kind: LogEventKind::Attack {
                    actor: actor_id,
                    target: target_id,
                    damage,
                },
                message: format!("{} attacks! {} damage to {}!", actor_name, damage, target_name),
            }
        }
        ActionKind::Skill => match first_skill {
            Some(skill) => LogEntry {
                tick,
                kind: LogEventKind::Skill {
                    actor: actor_id,
                    skill: skill.clone(),
                },
                message: format!("{} uses {}!", actor_name, skill),
            },
            None => {
                tracing::debug!("ignoring skill for {:?} with an empty skill list", actor_id);
                return None;
            }
        },
        ActionKind::Defend => LogEntry {
            tick,
            kind: LogEventKind::Defend { actor: actor_id },
            message: format!("{} is guarding!", actor_name),
        },
    };

    if let Some(actor) = roster.ally_mut(actor_id) {
        actor.reset_gauge();
    }
    roster.remove_defeated_enemies();

    Some(entry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combatant::state::Combatant;
    use crate::combatant::templates::{enemy_roster, party_roster};
    use crate::core::types::Element;
    use rand::SeedableRng;

    fn ready_roster() -> Roster {
        let mut roster = Roster::new(party_roster());
        roster.enemies = enemy_roster();
        for ally in roster.allies.iter_mut() {
            ally.advance_gauge(ally.max_gauge);
        }
        roster
    }

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(7)
    }

    #[test]
    fn test_damage_rolls_stay_in_range() {
        let config = BalanceConfig::default();
        let mut rng = rng();

        let mut saw_min = false;
        let mut saw_max = false;
        for _ in 0..1000 {
            let damage = roll_attack_damage(&mut rng, &config);
            assert!((10..=29).contains(&damage));
            saw_min |= damage == 10;
            saw_max |= damage == 29;
        }
        assert!(saw_min && saw_max);
    }

    #[test]
    fn test_non_ready_actor_is_a_no_op() {
        let config = BalanceConfig::default();
        let mut rng = rng();
        let mut roster = ready_roster();
        roster.allies[0].gauge = 40.0;

        let entry = resolve_action(
            &mut roster,
            &mut rng,
            &config,
            10,
            CombatantId(1),
            ActionKind::Attack,
            None,
        );

        assert!(entry.is_none());
        assert_eq!(roster.allies[0].gauge, 40.0);
        assert_eq!(roster.enemies[0].hp, 30);
    }

    #[test]
    fn test_unknown_or_enemy_actor_is_a_no_op() {
        let config = BalanceConfig::default();
        let mut rng = rng();
        let mut roster = ready_roster();

        let missing = resolve_action(
            &mut roster,
            &mut rng,
            &config,
            0,
            CombatantId(999),
            ActionKind::Defend,
            None,
        );
        assert!(missing.is_none());

        // Enemies never act through the resolver
        let enemy = resolve_action(
            &mut roster,
            &mut rng,
            &config,
            0,
            CombatantId(101),
            ActionKind::Attack,
            None,
        );
        assert!(enemy.is_none());
        assert_eq!(roster.enemies[0].hp, 30);
    }

    #[test]
    fn test_attack_defaults_to_first_live_enemy() {
        let config = BalanceConfig::default();
        let mut rng = rng();
        let mut roster = ready_roster();

        let entry = resolve_action(
            &mut roster,
            &mut rng,
            &config,
            40,
            CombatantId(1),
            ActionKind::Attack,
            None,
        )
        .unwrap();

        match entry.kind {
            LogEventKind::Attack { actor, target, damage } => {
                assert_eq!(actor, CombatantId(1));
                assert_eq!(target, CombatantId(101));
                assert!((10..=29).contains(&damage));
                assert_eq!(roster.enemy(CombatantId(101)).unwrap().hp, 30 - damage);
            }
            _ => panic!("expected an attack entry"),
        }
        assert_eq!(entry.tick, 40);
        assert_eq!(roster.allies[0].gauge, 0.0);
    }

    #[test]
    fn test_attack_with_explicit_target() {
        let config = BalanceConfig::default();
        let mut rng = rng();
        let mut roster = ready_roster();

        let entry = resolve_action(
            &mut roster,
            &mut rng,
            &config,
            0,
            CombatantId(1),
            ActionKind::Attack,
            Some(CombatantId(102)),
        )
        .unwrap();

        match entry.kind {
            LogEventKind::Attack { target, .. } => assert_eq!(target, CombatantId(102)),
            _ => panic!("expected an attack entry"),
        }
        // The default target was left alone
        assert_eq!(roster.enemy(CombatantId(101)).unwrap().hp, 30);
    }

    #[test]
    fn test_attack_on_dead_target_is_a_no_op() {
        let config = BalanceConfig::default();
        let mut rng = rng();
        let mut roster = ready_roster();
        roster.enemy_mut(CombatantId(101)).unwrap().hp = 0;

        let entry = resolve_action(
            &mut roster,
            &mut rng,
            &config,
            0,
            CombatantId(1),
            ActionKind::Attack,
            Some(CombatantId(101)),
        );

        assert!(entry.is_none());
        assert!(roster.allies[0].is_ready());
        assert_eq!(roster.enemy(CombatantId(102)).unwrap().hp, 50);
    }

    #[test]
    fn test_attack_with_no_live_enemies_is_a_no_op() {
        let config = BalanceConfig::default();
        let mut rng = rng();
        let mut roster = ready_roster();
        roster.enemies.clear();

        let entry = resolve_action(
            &mut roster,
            &mut rng,
            &config,
            0,
            CombatantId(1),
            ActionKind::Attack,
            None,
        );

        assert!(entry.is_none());
        assert!(roster.allies[0].is_ready());
    }

    #[test]
    fn test_defeated_enemy_removed_before_return() {
        let config = BalanceConfig::default();
        let mut rng = rng();
        let mut roster = ready_roster();
        roster.enemy_mut(CombatantId(101)).unwrap().hp = 5;

        let entry = resolve_action(
            &mut roster,
            &mut rng,
            &config,
            0,
            CombatantId(1),
            ActionKind::Attack,
            None,
        );

        assert!(entry.is_some());
        assert!(roster.enemy(CombatantId(101)).is_none());
        assert_eq!(roster.enemies.len(), 1);
    }

    #[test]
    fn test_skill_logs_first_skill_without_damage() {
        let config = BalanceConfig::default();
        let mut rng = rng();
        let mut roster = ready_roster();

        let entry = resolve_action(
            &mut roster,
            &mut rng,
            &config,
            0,
            CombatantId(2),
            ActionKind::Skill,
            None,
        )
        .unwrap();

        match entry.kind {
            LogEventKind::Skill { actor, skill } => {
                assert_eq!(actor, CombatantId(2));
                assert_eq!(skill, "Heal");
            }
            _ => panic!("expected a skill entry"),
        }
        assert_eq!(entry.message, "Lilia uses Heal!");
        assert_eq!(roster.enemies[0].hp, 30);
        assert_eq!(roster.ally(CombatantId(2)).unwrap().gauge, 0.0);
    }

    #[test]
    fn test_skill_with_empty_skill_list_is_a_no_op() {
        let config = BalanceConfig::default();
        let mut rng = rng();
        let mut roster = ready_roster();
        roster
            .allies
            .push(Combatant::ally(CombatantId(4), "Mute", 50, 0, Element::Water, &[]));
        roster.ally_mut(CombatantId(4)).unwrap().gauge = 100.0;

        let entry = resolve_action(
            &mut roster,
            &mut rng,
            &config,
            0,
            CombatantId(4),
            ActionKind::Skill,
            None,
        );

        assert!(entry.is_none());
        assert!(roster.ally(CombatantId(4)).unwrap().is_ready());
    }

    #[test]
    fn test_defend_logs_guarding() {
        let config = BalanceConfig::default();
        let mut rng = rng();
        let mut roster = ready_roster();

        let entry = resolve_action(
            &mut roster,
            &mut rng,
            &config,
            0,
            CombatantId(3),
            ActionKind::Defend,
            None,
        )
        .unwrap();

        assert_eq!(entry.kind, LogEventKind::Defend { actor: CombatantId(3) });
        assert_eq!(entry.message, "Gaion is guarding!");
        assert_eq!(roster.ally(CombatantId(3)).unwrap().gauge, 0.0);
    }

    #[test]
    fn test_failed_resolve_does_not_consume_randomness() {
        let config = BalanceConfig::default();
        let mut roster = ready_roster();
        roster.enemies.clear();

        let mut rng_a = rng();
        let mut rng_b = rng();

        let _ = resolve_action(
            &mut roster,
            &mut rng_a,
            &config,
            0,
            CombatantId(1),
            ActionKind::Attack,
            None,
        );

        // Both rngs still produce the same next roll
        assert_eq!(
            roll_attack_damage(&mut rng_a, &config),
            roll_attack_damage(&mut rng_b, &config)
        );
    }
}
