//! Mega evolution and Ultra Burst eligibility plus the forme swap
//! itself. Eligibility is stamped on each combatant before the first
//! turn; using it clears the allowance for the whole side.

use anyhow::Result;

use crate::data::items::get_item;
use crate::data::moves::normalize_move_name;
use crate::data::species::get_species;
use crate::sim::battle::BattleState;
use crate::sim::events::EventId;
use crate::sim::pokemon::{MonRef, Pokemon};

use super::actions::MoveActions;

/// Forme this combatant may mega evolve into, if any. Stones answer for
/// most; Rayquaza's line asks for a known move instead, and any held
/// Z-crystal rules that path out.
pub fn can_mega_evo(mon: &Pokemon) -> Option<String> {
    let base = mon.base_species_data()?;
    let item = mon.item.as_deref().and_then(get_item);
    if let Some(alt) = base.other_formes.first().and_then(|name| get_species(name)) {
        if alt.is_mega {
            if let Some(required) = alt.required_move {
                let required_id = normalize_move_name(required);
                let knows_it = mon.base_move_ids.iter().any(|id| *id == required_id);
                let holds_crystal = item.map_or(false, |data| data.z_crystal.is_some());
                if knows_it && !holds_crystal {
                    return Some(alt.name.to_string());
                }
            }
        }
    }
    let item = item?;
    if item.mega_evolves != Some(mon.base_family()) || item.mega_stone == Some(mon.species.as_str())
    {
        return None;
    }
    item.mega_stone.map(str::to_string)
}

/// The halves of Necrozma burst with their own crystal instead of a
/// stone.
pub fn can_ultra_burst(mon: &Pokemon) -> Option<String> {
    if matches!(
        mon.base_species.as_str(),
        "Necrozma-Dawn-Wings" | "Necrozma-Dusk-Mane"
    ) && mon.has_item("Ultranecrozium Z")
    {
        return Some("Necrozma-Ultra".to_string());
    }
    None
}

/// Stamps every active combatant's mega and burst allowances. Run once
/// before the first turn.
pub fn prime_mega_candidates(battle: &mut BattleState) {
    for at in battle.all_active() {
        let can_mega = can_mega_evo(battle.mon(at));
        let can_burst = can_ultra_burst(battle.mon(at));
        let mon = battle.mon_mut(at);
        mon.can_mega_evo = can_mega;
        mon.can_ultra_burst = can_burst;
    }
}

impl MoveActions<'_> {
    /// Performs the stamped forme swap. Returns false when the
    /// combatant has no allowance or is tied up carrying a Sky Drop
    /// victim.
    pub fn run_mega_evo(&mut self, at: MonRef) -> Result<bool> {
        let mon = self.battle.mon(at);
        let forme = match mon.can_mega_evo.clone().or_else(|| mon.can_ultra_burst.clone()) {
            Some(forme) => forme,
            None => return Ok(false),
        };

        for foe in self.battle.all_active() {
            if foe.side == at.side {
                continue;
            }
            if let Some(state) = self.battle.mon(foe).volatiles.get("skydrop") {
                if state.source == Some(at) {
                    return Ok(false);
                }
            }
        }

        let was_mega = self.battle.mon(at).can_mega_evo.is_some();
        let family = self.battle.mon(at).base_family().to_string();
        let item_name = self
            .battle
            .mon(at)
            .item
            .as_deref()
            .and_then(get_item)
            .map_or("", |data| data.name);
        self.battle.forme_change(at, &forme)?;
        let ident = self.battle.ident(at);
        if was_mega {
            self.battle.logger.log_mega(&ident, &family, item_name);
        } else {
            self.battle.logger.log_burst(&ident, &forme, item_name);
        }

        // One mega per side; a burst spends the side's burst instead.
        for ally in self.battle.sides[at.side].active.iter_mut() {
            if was_mega {
                ally.can_mega_evo = None;
            } else {
                ally.can_ultra_burst = None;
            }
        }

        self.hooks.run_mon_event(EventId::AfterMega, self.battle, at);
        Ok(true)
    }
}
