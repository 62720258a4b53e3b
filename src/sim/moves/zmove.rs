//! Z-move selection and the one-per-battle power ceremony.
//!
//! A crystal either powers up any damaging move of its type or grants a
//! species-locked signature move. Status moves upgrade in place and keep
//! their own effect plus a Z bonus.

use anyhow::{anyhow, Result};

use crate::data::items::{get_item, ZCrystal};
use crate::data::moves::{get_move, Category, MoveTarget};
use crate::data::zmoves::{z_power_from_base, Z_MOVE_TABLE};
use crate::sim::battle::BattleState;
use crate::sim::moves::active::{ActiveMove, HitEffect, ZKind};
use crate::sim::pokemon::MonRef;
use crate::sim::stats::Stat;

use super::actions::MoveActions;

/// One slot's Z option as shown to the chooser.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ZMoveOption {
    pub name: String,
    pub target: MoveTarget,
}

/// Names the Z-move the given slot would become, if the holder's crystal
/// allows one. `skip_checks` bypasses the per-battle and PP gates for
/// choice display.
pub fn get_z_move(
    battle: &BattleState,
    user: MonRef,
    move_id: &str,
    skip_checks: bool,
) -> Option<String> {
    let data = get_move(move_id)?;
    let mon = battle.mon(user);
    let item = mon.item.as_deref().and_then(get_item)?;
    let crystal = item.z_crystal?;
    if !skip_checks {
        if battle.sides[user.side].z_move_used {
            return None;
        }
        if let ZCrystal::Signature { users, .. } = crystal {
            if !users.contains(&mon.species.as_str()) {
                return None;
            }
        }
        // Draining the base move's PP takes the Z-move with it.
        let slot = mon.move_slot(move_id)?;
        if slot.pp == 0 {
            return None;
        }
    }

    match crystal {
        ZCrystal::Signature { grants, from, .. } => {
            (data.name == from).then(|| grants.to_string())
        }
        ZCrystal::Type(crystal_type) => {
            if data.move_type != crystal_type {
                return None;
            }
            if data.category == Category::Status {
                Some(data.name.to_string())
            } else {
                Z_MOVE_TABLE.get(data.move_type).map(|name| (*name).to_string())
            }
        }
    }
}

/// Builds the active form a Z-powered use of `base` runs as.
pub fn get_active_z_move(
    battle: &BattleState,
    base: &ActiveMove,
    user: MonRef,
) -> Result<ActiveMove> {
    let item = battle.mon(user).item.as_deref().and_then(get_item);
    if let Some(ZCrystal::Signature { grants, from, .. }) =
        item.and_then(|data| data.z_crystal)
    {
        if base.name == from {
            let mut z = ActiveMove::new(grants)?;
            z.is_z_powered = true;
            return Ok(z);
        }
    }

    if base.category == Category::Status {
        let mut z = base.clone();
        z.z = ZKind::UpgradedStatus;
        z.is_z_powered = true;
        return Ok(z);
    }

    let canonical = Z_MOVE_TABLE
        .get(base.move_type.as_str())
        .ok_or_else(|| anyhow!("no Z-move for type '{}'", base.move_type))?;
    let mut z = ActiveMove::new(canonical)?;
    z.base_power = base
        .z_move_power
        .unwrap_or_else(|| z_power_from_base(base.base_power));
    z.category = base.category;
    // Quick Guard reads the priority the base move had.
    z.priority = base.priority;
    z.is_z_powered = true;
    Ok(z)
}

/// Z options for every slot, or `None` when the combatant has none at
/// all. Status upgrades display with a `Z-` prefix.
pub fn can_z_move(battle: &BattleState, user: MonRef) -> Option<Vec<Option<ZMoveOption>>> {
    let mon = battle.mon(user);
    if battle.sides[user.side].z_move_used {
        return None;
    }
    let forme_locked = mon.species_data().map_or(false, |data| {
        data.is_mega || matches!(data.forme, Some("Primal") | Some("Ultra"))
    });
    if mon.transformed && forme_locked {
        return None;
    }
    let item = mon.item.as_deref().and_then(get_item)?;
    let crystal = item.z_crystal?;
    if let ZCrystal::Signature { users, .. } = crystal {
        if !users.contains(&mon.species.as_str()) {
            return None;
        }
    }

    let mut at_least_one = false;
    let mut options = Vec::with_capacity(mon.move_slots.len());
    for slot in &mon.move_slots {
        if slot.pp == 0 {
            options.push(None);
            continue;
        }
        let Some(z_name) = get_z_move(battle, user, &slot.id, true) else {
            options.push(None);
            continue;
        };
        let Some(z_data) = get_move(&z_name) else {
            options.push(None);
            continue;
        };
        let display = if z_data.is_z.is_none() && z_data.category == Category::Status {
            format!("Z-{z_name}")
        } else {
            z_name
        };
        options.push(Some(ZMoveOption {
            name: display,
            target: z_data.target,
        }));
        at_least_one = true;
    }
    at_least_one.then_some(options)
}

impl MoveActions<'_> {
    /// Applies the Z bonus right after the move line: the `[zeffect]`
    /// tag for damaging moves, or the status move's declared extra.
    pub fn run_z_power(&mut self, mv: &mut ActiveMove, user: MonRef) {
        if mv.category != Category::Status {
            self.battle.logger.attr_last_move("[zeffect]");
        } else if !mv.z_move_boost.is_empty() {
            let boosts = mv.z_move_boost.clone();
            self.battle.boost(&boosts, user, &["[zeffect]"]);
        } else {
            match mv.z_move_effect {
                Some("heal") => {
                    let amount = self.battle.mon(user).max_hp;
                    self.battle.heal(amount, user, &["[zeffect]"]);
                }
                Some("healreplacement") => {
                    // The wish lands on whoever switches in afterwards.
                    mv.self_effect = Some(HitEffect {
                        side_condition: Some("healreplacement"),
                        ..HitEffect::default()
                    });
                }
                Some("clearnegativeboost") => {
                    let entries = self.battle.mon(user).boosts.entries();
                    let mon = self.battle.mon_mut(user);
                    for (stat, stages) in entries {
                        if stages < 0 {
                            mon.boosts.set(stat, 0);
                        }
                    }
                    let ident = self.battle.ident(user);
                    self.battle
                        .logger
                        .add(&["-clearnegativeboost", &ident, "[zeffect]"]);
                }
                Some("redirect") => {
                    self.battle.add_volatile("followme", user, Some(user));
                }
                Some("crit2") => {
                    self.battle.add_volatile("focusenergy", user, Some(user));
                }
                Some("curse") => {
                    if self.battle.mon(user).has_type("Ghost") {
                        let amount = self.battle.mon(user).max_hp;
                        self.battle.heal(amount, user, &["[zeffect]"]);
                    } else {
                        self.battle.boost(&[(Stat::Atk, 1)], user, &["[zeffect]"]);
                    }
                }
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::damage::FixedDamage;
    use crate::sim::events::NoHooks;
    use crate::sim::pokemon::Pokemon;

    fn mon(species: &str, moves: &[&str], item: Option<&str>) -> Pokemon {
        Pokemon::new(species, 50, moves, "Static", item).expect("test pokemon should build")
    }

    fn p1() -> MonRef {
        MonRef { side: 0, slot: 0 }
    }

    fn p2() -> MonRef {
        MonRef { side: 1, slot: 0 }
    }

    fn log_contains(battle: &BattleState, needle: &str) -> bool {
        battle.logger.log_lines().iter().any(|line| line.contains(needle))
    }

    #[test]
    fn a_type_crystal_offers_the_canonical_move() {
        let battle = BattleState::singles(
            mon("Pikachu", &["Thunderbolt", "Splash"], Some("Electrium Z")),
            mon("Dragonite", &["Splash"], None),
            1,
        );
        assert_eq!(
            get_z_move(&battle, p1(), "thunderbolt", false).as_deref(),
            Some("Gigavolt Havoc")
        );
        // Splash is Normal; the Electric crystal has no answer for it.
        assert_eq!(get_z_move(&battle, p1(), "splash", false), None);
    }

    #[test]
    fn a_status_move_upgrades_into_its_own_z_form() {
        let battle = BattleState::singles(
            mon("Pikachu", &["Splash"], Some("Normalium Z")),
            mon("Dragonite", &["Splash"], None),
            1,
        );
        assert_eq!(
            get_z_move(&battle, p1(), "splash", false).as_deref(),
            Some("Splash")
        );
        let base = ActiveMove::new("Splash").expect("move");
        let z = get_active_z_move(&battle, &base, p1()).expect("upgrade");
        assert_eq!(z.z, ZKind::UpgradedStatus);
        assert!(z.is_z_powered);
        assert_eq!(z.name, "Splash");
    }

    #[test]
    fn a_signature_crystal_grants_its_own_move() {
        let battle = BattleState::singles(
            mon("Pikachu", &["Volt Tackle"], Some("Pikanium Z")),
            mon("Dragonite", &["Splash"], None),
            1,
        );
        assert_eq!(
            get_z_move(&battle, p1(), "volttackle", false).as_deref(),
            Some("Catastropika")
        );
        let base = ActiveMove::new("Volt Tackle").expect("move");
        let z = get_active_z_move(&battle, &base, p1()).expect("signature");
        assert_eq!(z.name, "Catastropika");
        assert!(z.is_z_powered);
        assert_eq!(z.base_power, 210);
    }

    #[test]
    fn the_wrong_holder_cannot_use_a_signature_crystal() {
        let battle = BattleState::singles(
            mon("Snorlax", &["Volt Tackle"], Some("Pikanium Z")),
            mon("Dragonite", &["Splash"], None),
            1,
        );
        assert_eq!(get_z_move(&battle, p1(), "volttackle", false), None);
        assert_eq!(can_z_move(&battle, p1()), None);
    }

    #[test]
    fn spent_pp_takes_the_z_move_with_it() {
        let mut battle = BattleState::singles(
            mon("Pikachu", &["Thunderbolt"], Some("Electrium Z")),
            mon("Dragonite", &["Splash"], None),
            1,
        );
        battle.mon_mut(p1()).move_slots[0].pp = 0;
        assert_eq!(get_z_move(&battle, p1(), "thunderbolt", false), None);
    }

    #[test]
    fn one_z_move_per_side_per_battle() {
        let mut battle = BattleState::singles(
            mon("Pikachu", &["Thunderbolt"], Some("Electrium Z")),
            mon("Dragonite", &["Splash"], None),
            1,
        );
        battle.sides[0].z_move_used = true;
        assert_eq!(get_z_move(&battle, p1(), "thunderbolt", false), None);
        assert_eq!(can_z_move(&battle, p1()), None);
    }

    #[test]
    fn the_canonical_form_inherits_power_and_category() {
        let battle = BattleState::singles(
            mon("Pikachu", &["Thunderbolt"], Some("Electrium Z")),
            mon("Dragonite", &["Splash"], None),
            1,
        );
        let base = ActiveMove::new("Thunderbolt").expect("move");
        let z = get_active_z_move(&battle, &base, p1()).expect("canonical");
        assert_eq!(z.name, "Gigavolt Havoc");
        assert_eq!(z.base_power, 175);
        assert_eq!(z.category, Category::Special);
        assert!(z.is_z_powered);
    }

    #[test]
    fn the_choice_list_has_one_entry_per_slot() {
        let battle = BattleState::singles(
            mon("Pikachu", &["Thunderbolt", "Splash"], Some("Normalium Z")),
            mon("Dragonite", &["Splash"], None),
            1,
        );
        let options = can_z_move(&battle, p1()).expect("at least one option");
        assert_eq!(options.len(), 2);
        assert_eq!(options[0], None);
        let splash = options[1].clone().expect("status upgrade");
        assert_eq!(splash.name, "Z-Splash");
        assert_eq!(splash.target, MoveTarget::User);
    }

    #[test]
    fn z_splash_flexes_attack_through_the_status_path() {
        let mut battle = BattleState::singles(
            mon("Pikachu", &["Splash"], Some("Normalium Z")),
            mon("Dragonite", &["Splash"], None),
            1,
        );
        let mut hooks = NoHooks;
        let mut oracle = FixedDamage(0);
        let mut actions = MoveActions::new(&mut battle, &mut hooks, &mut oracle);
        // The boost lands even though Splash itself still does nothing.
        actions
            .use_move("Splash", p1(), None, None, Some("Z-Splash"), None)
            .expect("known move");
        assert!(log_contains(
            actions.battle,
            "|move|p1a: Pikachu|Z-Splash|p1a: Pikachu|[anim]Splash"
        ));
        assert!(log_contains(actions.battle, "-boost|p1a: Pikachu|atk|3|[zeffect]"));
        assert_eq!(actions.battle.mon(p1()).boosts.get(Stat::Atk), 3);
    }

    #[test]
    fn z_belly_drum_heals_to_full_first() {
        let mut battle = BattleState::singles(
            mon("Snorlax", &["Belly Drum"], Some("Normalium Z")),
            mon("Dragonite", &["Splash"], None),
            1,
        );
        battle.damage(80, p1(), &[]);
        let mut hooks = NoHooks;
        let mut oracle = FixedDamage(0);
        let mut actions = MoveActions::new(&mut battle, &mut hooks, &mut oracle);
        actions
            .use_move("Belly Drum", p1(), None, None, Some("Z-Belly Drum"), None)
            .expect("known move");
        let snorlax = actions.battle.mon(p1());
        assert_eq!(snorlax.hp, snorlax.max_hp);
        assert!(log_contains(actions.battle, "[zeffect]"));
    }

    #[test]
    fn z_curse_splits_on_the_ghost_type() {
        let mut battle = BattleState::singles(
            mon("Gengar", &["Curse"], None),
            mon("Snorlax", &["Curse"], None),
            1,
        );
        battle.damage(40, p1(), &[]);
        let mut hooks = NoHooks;
        let mut oracle = FixedDamage(0);
        let mut actions = MoveActions::new(&mut battle, &mut hooks, &mut oracle);
        let mut mv = ActiveMove::new("Curse").expect("move");
        actions.run_z_power(&mut mv, p1());
        let gengar = actions.battle.mon(p1());
        assert_eq!(gengar.hp, gengar.max_hp);

        let mut mv = ActiveMove::new("Curse").expect("move");
        actions.run_z_power(&mut mv, p2());
        assert_eq!(actions.battle.mon(p2()).boosts.get(Stat::Atk), 1);
    }

    #[test]
    fn z_memento_rewrites_the_self_effect_into_a_wish() {
        let mut battle = BattleState::singles(
            mon("Gengar", &["Memento"], None),
            mon("Snorlax", &["Splash"], None),
            1,
        );
        let mut hooks = NoHooks;
        let mut oracle = FixedDamage(0);
        let mut actions = MoveActions::new(&mut battle, &mut hooks, &mut oracle);
        let mut mv = ActiveMove::new("Memento").expect("move");
        actions.run_z_power(&mut mv, p1());
        let self_effect = mv.self_effect.expect("replacement wish");
        assert_eq!(self_effect.side_condition, Some("healreplacement"));
    }
}
