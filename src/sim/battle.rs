use std::collections::HashSet;

use anyhow::{anyhow, Result};

use crate::battle_logger::{showdown_ident, side_label, BattleLogger};
use crate::data::moves::{get_move, MoveTarget};
use crate::data::species::get_species;
use crate::sim::moves::active::ActiveMove;
use crate::sim::pokemon::{status_id, MonRef, Pokemon, Status};
use crate::sim::rng::BattleRng;
use crate::sim::stats::{stat_id, Stat, StatsSet};

#[derive(Clone, Debug)]
pub struct Side {
    pub active: Vec<Pokemon>,
    pub conditions: HashSet<String>,
    pub z_move_used: bool,
    /// Healthy party members beyond the active slots.
    pub reserve: u8,
}

impl Side {
    pub fn new(active: Vec<Pokemon>) -> Self {
        Self {
            active,
            conditions: HashSet::new(),
            z_move_used: false,
            reserve: 0,
        }
    }

    pub fn with_reserve(active: Vec<Pokemon>, reserve: u8) -> Self {
        Self {
            reserve,
            ..Self::new(active)
        }
    }

    pub fn has_condition(&self, id: &str) -> bool {
        self.conditions.contains(id)
    }
}

#[derive(Clone, Debug)]
pub struct BattleState {
    pub sides: [Side; 2],
    pub gen: u8,
    pub weather: Option<String>,
    pub terrain: Option<String>,
    pub pseudo_weather: Vec<String>,
    pub rng: BattleRng,
    pub logger: BattleLogger,
    /// Damage dealt by the most recent successful move application.
    pub last_damage: u32,
    pub faint_queue: Vec<MonRef>,
    pub ended: bool,
}

impl BattleState {
    pub fn new(sides: [Side; 2], gen: u8, seed: u64) -> Self {
        let mut battle = Self {
            sides,
            gen,
            weather: None,
            terrain: None,
            pseudo_weather: Vec::new(),
            rng: BattleRng::seeded(seed),
            logger: BattleLogger::new(),
            last_damage: 0,
            faint_queue: Vec::new(),
            ended: false,
        };
        let mut order = 0;
        for side in battle.sides.iter_mut() {
            for mon in side.active.iter_mut() {
                mon.ability_order = order;
                order += 1;
            }
        }
        battle
    }

    pub fn singles(a: Pokemon, b: Pokemon, seed: u64) -> Self {
        Self::new([Side::new(vec![a]), Side::new(vec![b])], 7, seed)
    }

    pub fn doubles(side_a: [Pokemon; 2], side_b: [Pokemon; 2], seed: u64) -> Self {
        let [a1, a2] = side_a;
        let [b1, b2] = side_b;
        let mut battle = Self::new([Side::new(vec![a1, a2]), Side::new(vec![b1, b2])], 7, seed);
        battle.logger = BattleLogger::new_with_format("gen7doublescustomgame");
        battle
    }

    pub fn mon(&self, at: MonRef) -> &Pokemon {
        &self.sides[at.side].active[at.slot]
    }

    pub fn mon_mut(&mut self, at: MonRef) -> &mut Pokemon {
        &mut self.sides[at.side].active[at.slot]
    }

    pub fn ident(&self, at: MonRef) -> String {
        showdown_ident(at.side, at.slot, &self.mon(at).name)
    }

    pub fn all_active(&self) -> Vec<MonRef> {
        let mut refs = Vec::new();
        for (side_idx, side) in self.sides.iter().enumerate() {
            for slot in 0..side.active.len() {
                refs.push(MonRef {
                    side: side_idx,
                    slot,
                });
            }
        }
        refs
    }

    pub fn living_foes(&self, side: usize) -> Vec<MonRef> {
        let foe = 1 - side;
        self.sides[foe]
            .active
            .iter()
            .enumerate()
            .filter(|(_, mon)| !mon.fainted && mon.hp > 0)
            .map(|(slot, _)| MonRef { side: foe, slot })
            .collect()
    }

    /// Living teammates, not counting `at` itself.
    pub fn living_allies(&self, at: MonRef) -> Vec<MonRef> {
        self.sides[at.side]
            .active
            .iter()
            .enumerate()
            .filter(|(slot, mon)| *slot != at.slot && !mon.fainted && mon.hp > 0)
            .map(|(slot, _)| MonRef {
                side: at.side,
                slot,
            })
            .collect()
    }

    /// Applies damage and queues the faint when hp reaches zero.
    /// Returns the amount actually dealt.
    pub fn damage(&mut self, amount: u32, target: MonRef, tags: &[&str]) -> u32 {
        let mon = self.mon(target);
        if mon.fainted || mon.hp == 0 || amount == 0 {
            return 0;
        }
        let dealt = amount.min(mon.hp);
        let ident = self.ident(target);
        let mon = self.mon_mut(target);
        mon.hp -= dealt;
        let hp = mon.hp;
        let max_hp = mon.max_hp;
        self.logger.log_damage(&ident, hp, max_hp, tags);
        if hp == 0 {
            self.faint(target);
        }
        dealt
    }

    /// Damage that bypasses move bookkeeping, clamped to a minimum of
    /// one point.
    pub fn direct_damage(&mut self, amount: u32, target: MonRef) -> u32 {
        self.damage(amount.max(1), target, &[])
    }

    /// Move damage proper: records the running last-damage counter and
    /// pays out drain to the attacker.
    pub fn move_damage(&mut self, amount: u32, target: MonRef, source: MonRef, mv: &ActiveMove) -> u32 {
        let dealt = self.damage(amount, target, &[]);
        if dealt > 0 {
            self.last_damage = dealt;
            self.mon_mut(source).last_damage = dealt;
            if let Some((numerator, denominator)) = mv.drain {
                if self.mon(source).hp > 0 {
                    let drained = (dealt * numerator + denominator - 1) / denominator;
                    let of_tag = format!("[of] {}", self.ident(target));
                    self.heal(drained, source, &["[from] drain", of_tag.as_str()]);
                }
            }
        }
        dealt
    }

    pub fn heal(&mut self, amount: u32, target: MonRef, tags: &[&str]) -> u32 {
        let mon = self.mon(target);
        if mon.fainted || mon.hp == 0 || mon.hp >= mon.max_hp {
            return 0;
        }
        let healed = amount.min(mon.max_hp - mon.hp);
        if healed == 0 {
            return 0;
        }
        let ident = self.ident(target);
        let mon = self.mon_mut(target);
        mon.hp += healed;
        let hp = mon.hp;
        let max_hp = mon.max_hp;
        self.logger.log_heal(&ident, hp, max_hp, tags);
        healed
    }

    /// Applies stat stage changes one entry at a time, logging each
    /// stage that actually moved. Returns whether anything changed.
    pub fn boost(&mut self, boosts: &[(Stat, i8)], target: MonRef, tags: &[&str]) -> bool {
        if self.mon(target).fainted || self.mon(target).hp == 0 {
            return false;
        }
        let ident = self.ident(target);
        let mut changed = false;
        for &(stat, delta) in boosts {
            let applied = self.mon_mut(target).boosts.apply(stat, delta);
            if applied > 0 {
                self.logger.log_boost(&ident, stat_id(stat), applied as u8, tags);
                changed = true;
            } else if applied < 0 {
                self.logger
                    .log_unboost(&ident, stat_id(stat), (-applied) as u8, tags);
                changed = true;
            }
        }
        changed
    }

    /// Major status through the normal route: fails when a status is
    /// already in place or the target's typing blocks it.
    pub fn try_set_status(&mut self, status: Status, target: MonRef) -> bool {
        let mon = self.mon(target);
        if mon.fainted || mon.hp == 0 || mon.status.is_some() {
            return false;
        }
        self.set_status(status, target)
    }

    /// Overwrites any existing status. Type immunity still applies.
    pub fn set_status(&mut self, status: Status, target: MonRef) -> bool {
        let mon = self.mon(target);
        if mon.fainted || mon.hp == 0 || mon.immune_to_status(status) {
            return false;
        }
        let ident = self.ident(target);
        self.mon_mut(target).status = Some(status);
        self.logger.log_status(&ident, status_id(status));
        true
    }

    pub fn add_volatile(&mut self, id: &str, target: MonRef, source: Option<MonRef>) -> bool {
        if self.mon(target).fainted || self.mon(target).hp == 0 {
            return false;
        }
        if !self.mon_mut(target).add_volatile(id, source) {
            return false;
        }
        let ident = self.ident(target);
        self.logger.log_start(&ident, &condition_name(id));
        true
    }

    pub fn remove_volatile(&mut self, id: &str, target: MonRef) -> bool {
        if !self.mon_mut(target).remove_volatile(id) {
            return false;
        }
        let ident = self.ident(target);
        self.logger.log_end(&ident, &condition_name(id));
        true
    }

    pub fn add_side_condition(&mut self, id: &str, side: usize) -> bool {
        if !self.sides[side].conditions.insert(id.to_string()) {
            return false;
        }
        self.logger
            .log_side_start(side_label(side), &condition_name(id));
        true
    }

    pub fn remove_side_condition(&mut self, id: &str, side: usize) -> bool {
        if !self.sides[side].conditions.remove(id) {
            return false;
        }
        self.logger
            .log_side_end(side_label(side), &condition_name(id));
        true
    }

    pub fn set_weather(&mut self, id: &str) -> bool {
        if self.weather.as_deref() == Some(id) {
            return false;
        }
        self.weather = Some(id.to_string());
        // Weather names log without spaces, RainDance style.
        self.logger
            .log_weather(&condition_name(id).replace(' ', ""));
        true
    }

    pub fn set_terrain(&mut self, id: &str) -> bool {
        if self.terrain.as_deref() == Some(id) {
            return false;
        }
        self.terrain = Some(id.to_string());
        self.logger
            .log_field_start(&format!("move: {}", condition_name(id)));
        true
    }

    pub fn add_pseudo_weather(&mut self, id: &str) -> bool {
        if self.pseudo_weather.iter().any(|existing| existing == id) {
            return false;
        }
        self.pseudo_weather.push(id.to_string());
        self.logger
            .log_field_start(&format!("move: {}", condition_name(id)));
        true
    }

    pub fn can_switch(&self, side: usize) -> bool {
        self.sides[side].reserve > 0
    }

    pub fn faint(&mut self, at: MonRef) {
        let mon = self.mon_mut(at);
        if mon.fainted {
            return;
        }
        mon.hp = 0;
        if !self.faint_queue.contains(&at) {
            self.faint_queue.push(at);
        }
    }

    /// Flushes queued faints to the log. Returns true once the battle
    /// is over.
    pub fn faint_messages(&mut self) -> bool {
        while !self.faint_queue.is_empty() {
            let at = self.faint_queue.remove(0);
            if self.mon(at).fainted {
                continue;
            }
            let ident = self.ident(at);
            let mon = self.mon_mut(at);
            mon.fainted = true;
            mon.illusion = false;
            mon.status = None;
            mon.volatiles.clear();
            mon.switch_flag = None;
            mon.force_switch_flag = false;
            self.logger.log_faint(&ident);
        }
        self.check_battle_over()
    }

    fn side_has_pokemon_left(&self, side: usize) -> bool {
        self.sides[side].reserve > 0 || self.sides[side].active.iter().any(|mon| !mon.fainted)
    }

    fn check_battle_over(&mut self) -> bool {
        if self.ended {
            return true;
        }
        let a = self.side_has_pokemon_left(0);
        let b = self.side_has_pokemon_left(1);
        match (a, b) {
            (true, true) => return false,
            (true, false) => self.logger.add(&["win", side_label(0)]),
            (false, true) => self.logger.add(&["win", side_label(1)]),
            (false, false) => self.logger.add(&["tie"]),
        }
        self.ended = true;
        true
    }

    /// Swaps the mon at `at` to another forme of the same family. HP
    /// carries over; the other stats come from the new forme.
    pub fn forme_change(&mut self, at: MonRef, species_name: &str) -> Result<()> {
        let data = get_species(species_name)
            .ok_or_else(|| anyhow!("Species '{}' not found in POKEDEX", species_name))?;
        let level = self.mon(at).level;
        let stats = StatsSet::from_species(species_name, level)
            .ok_or_else(|| anyhow!("Species '{}' not found in POKEDEX", species_name))?;
        let ident = self.ident(at);
        let mon = self.mon_mut(at);
        mon.species = data.name.to_string();
        mon.types = data.types.iter().map(|name| name.to_string()).collect();
        mon.ability = data.abilities[0].to_string();
        mon.stats.atk = stats.atk;
        mon.stats.def = stats.def;
        mon.stats.spa = stats.spa;
        mon.stats.spd = stats.spd;
        mon.stats.spe = stats.spe;
        self.logger.add(&["detailschange", &ident, data.name]);
        Ok(())
    }

    /// Resolves the chosen target of a single-target move, falling
    /// back to a fresh pick when the choice has gone stale.
    pub fn get_target(
        &mut self,
        user: MonRef,
        move_target: MoveTarget,
        requested: Option<MonRef>,
    ) -> Option<MonRef> {
        if move_target.targets_user() {
            return Some(user);
        }
        if let Some(at) = requested {
            if self.valid_target(user, move_target, at) {
                return Some(at);
            }
        }
        self.resolve_target(user, move_target)
    }

    fn valid_target(&self, user: MonRef, move_target: MoveTarget, at: MonRef) -> bool {
        if at.side >= self.sides.len() || at.slot >= self.sides[at.side].active.len() {
            return false;
        }
        let mon = self.mon(at);
        if mon.fainted || mon.hp == 0 {
            return false;
        }
        match move_target {
            MoveTarget::AdjacentAlly => at.side == user.side && at != user,
            MoveTarget::AdjacentAllyOrSelf => at.side == user.side,
            _ => at != user,
        }
    }

    /// Fresh target pick: the first living foe in slot order, except
    /// random-target moves which draw from the RNG. Field moves and moves
    /// aimed at the user's own side anchor on the user itself.
    pub fn resolve_target(&mut self, user: MonRef, move_target: MoveTarget) -> Option<MonRef> {
        if move_target.targets_user() {
            return Some(user);
        }
        match move_target {
            MoveTarget::All | MoveTarget::AllySide | MoveTarget::AllyTeam => Some(user),
            MoveTarget::AdjacentAlly => self.living_allies(user).into_iter().next(),
            MoveTarget::AdjacentAllyOrSelf => Some(user),
            MoveTarget::RandomNormal => {
                let foes = self.living_foes(user.side);
                if foes.is_empty() {
                    None
                } else {
                    Some(self.rng.sample(&foes))
                }
            }
            _ => self.living_foes(user.side).into_iter().next(),
        }
    }

    /// Everything a move will hit, in slot order. For side and field
    /// moves this lists the mons whose PP-drain events fire; the
    /// resolution path applies the actual effect without mon slots.
    pub fn get_move_targets(
        &mut self,
        user: MonRef,
        mv: &ActiveMove,
        selected: Option<MonRef>,
    ) -> Vec<MonRef> {
        match mv.target {
            MoveTarget::All | MoveTarget::FoeSide | MoveTarget::AllySide | MoveTarget::AllyTeam => {
                let mut targets = Vec::new();
                if mv.target != MoveTarget::FoeSide {
                    targets.push(user);
                    targets.extend(self.living_allies(user));
                }
                if matches!(mv.target, MoveTarget::All | MoveTarget::FoeSide) {
                    targets.extend(self.living_foes(user.side));
                }
                targets
            }
            MoveTarget::AllAdjacent => {
                let mut targets = self.living_allies(user);
                targets.extend(self.living_foes(user.side));
                targets
            }
            MoveTarget::AllAdjacentFoes => self.living_foes(user.side),
            MoveTarget::Allies => {
                let mut targets = vec![user];
                targets.extend(self.living_allies(user));
                targets
            }
            MoveTarget::User => vec![user],
            _ => self
                .get_target(user, mv.target, selected)
                .into_iter()
                .collect(),
        }
    }
}

fn condition_name(id: &str) -> String {
    get_move(id)
        .map(|data| data.name.to_string())
        .unwrap_or_else(|| id.to_string())
}
