use crate::data::moves::get_move;
use crate::data::species::{get_species, SpeciesData};
use crate::data::types::immune_against;
use crate::sim::stats::{BoostTable, StatsSet};
use anyhow::{anyhow, Result};
use std::collections::HashMap;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Status {
    Burn,
    Paralysis,
    Poison,
    Toxic,
    Sleep,
    Freeze,
}

pub fn status_from_id(id: &str) -> Option<Status> {
    match id {
        "brn" => Some(Status::Burn),
        "par" => Some(Status::Paralysis),
        "psn" => Some(Status::Poison),
        "tox" => Some(Status::Toxic),
        "slp" => Some(Status::Sleep),
        "frz" => Some(Status::Freeze),
        _ => None,
    }
}

pub fn status_id(status: Status) -> &'static str {
    match status {
        Status::Burn => "brn",
        Status::Paralysis => "par",
        Status::Poison => "psn",
        Status::Toxic => "tox",
        Status::Sleep => "slp",
        Status::Freeze => "frz",
    }
}

/// How a combatant's move attempt ended this turn. `Silent` records a
/// quiet non-event that effects punishing failure must not see.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MoveResult {
    Success,
    Failure,
    Silent,
}

/// Handle to an active combatant: side index plus active slot.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct MonRef {
    pub side: usize,
    pub slot: usize,
}

#[derive(Clone, Debug)]
pub struct MoveSlot {
    pub id: String,
    pub pp: u8,
    pub max_pp: u8,
}

/// A named volatile condition and who inflicted it.
#[derive(Clone, Debug, Default)]
pub struct VolatileState {
    pub source: Option<MonRef>,
}

/// History entry recorded when a move connects with this combatant.
#[derive(Clone, Debug)]
pub struct AttackedBy {
    pub source: MonRef,
    pub move_id: String,
    pub damage: u32,
    pub this_turn: bool,
}

const SEMI_INVULNERABLE: [&str; 7] = [
    "fly",
    "bounce",
    "dive",
    "dig",
    "phantomforce",
    "shadowforce",
    "skydrop",
];

#[derive(Clone, Debug)]
pub struct Pokemon {
    pub name: String,
    /// Current species; changes on forme change.
    pub species: String,
    /// Species this combatant was sent into battle as.
    pub base_species: String,
    pub types: Vec<String>,
    pub level: u8,
    pub hp: u32,
    pub max_hp: u32,
    pub stats: StatsSet,
    pub boosts: BoostTable,
    pub status: Option<Status>,
    pub ability: String,
    /// Acquisition order; later abilities act later on speed ties.
    pub ability_order: u32,
    pub item: Option<String>,
    pub move_slots: Vec<MoveSlot>,
    /// Move ids known at team preview, before any transformation.
    pub base_move_ids: Vec<String>,
    pub volatiles: HashMap<String, VolatileState>,
    pub fainted: bool,
    pub illusion: bool,
    pub transformed: bool,
    pub last_move: Option<String>,
    pub last_damage: u32,
    pub move_this_turn: Option<String>,
    pub move_this_turn_result: Option<MoveResult>,
    pub active_turns: u32,
    pub can_mega_evo: Option<String>,
    pub can_ultra_burst: Option<String>,
    pub switch_flag: Option<String>,
    pub force_switch_flag: bool,
    pub attacked_by: Vec<AttackedBy>,
}

impl Pokemon {
    pub fn new(
        species: impl Into<String>,
        level: u8,
        moves: &[&str],
        ability: impl Into<String>,
        item: Option<&str>,
    ) -> Result<Self> {
        let species_str = species.into();
        let data = get_species(species_str.as_str())
            .ok_or_else(|| anyhow!("Species '{}' not found in POKEDEX", species_str))?;
        let stats = StatsSet::from_species(species_str.as_str(), level)
            .ok_or_else(|| anyhow!("Species '{}' not found in POKEDEX", species_str))?;
        let mut move_slots = Vec::with_capacity(moves.len());
        for name in moves {
            let id = normalize_id(name);
            let move_data =
                get_move(name).ok_or_else(|| anyhow!("Move '{}' not found in MOVES", name))?;
            move_slots.push(MoveSlot {
                id,
                pp: move_data.pp,
                max_pp: move_data.pp,
            });
        }
        let base_move_ids = move_slots.iter().map(|slot| slot.id.clone()).collect();
        Ok(Self {
            name: data.name.to_string(),
            species: data.name.to_string(),
            base_species: data.name.to_string(),
            types: data.types.iter().map(|t| t.to_string()).collect(),
            level,
            hp: stats.hp as u32,
            max_hp: stats.hp as u32,
            stats,
            boosts: BoostTable::default(),
            status: None,
            ability: ability.into(),
            ability_order: 0,
            item: item.map(normalize_id),
            move_slots,
            base_move_ids,
            volatiles: HashMap::new(),
            fainted: false,
            illusion: false,
            transformed: false,
            last_move: None,
            last_damage: 0,
            move_this_turn: None,
            move_this_turn_result: None,
            active_turns: 0,
            can_mega_evo: None,
            can_ultra_burst: None,
            switch_flag: None,
            force_switch_flag: false,
            attacked_by: Vec::new(),
        })
    }

    pub fn species_data(&self) -> Option<&'static SpeciesData> {
        get_species(self.species.as_str())
    }

    pub fn base_species_data(&self) -> Option<&'static SpeciesData> {
        get_species(self.base_species.as_str())
    }

    /// Family root of the forme this combatant was sent in as.
    pub fn base_family(&self) -> &str {
        self.base_species_data()
            .and_then(|data| data.base_species)
            .unwrap_or(self.base_species.as_str())
    }

    pub fn has_type(&self, type_name: &str) -> bool {
        self.types.iter().any(|t| t.eq_ignore_ascii_case(type_name))
    }

    pub fn has_ability(&self, ability: &str) -> bool {
        self.ability.eq_ignore_ascii_case(ability)
    }

    pub fn has_item(&self, item: &str) -> bool {
        self.item.as_deref() == Some(normalize_id(item).as_str())
    }

    /// True when the combatant can be hit by the given attack type or
    /// pseudo-type.
    pub fn run_immunity(&self, attack_type: &str) -> bool {
        !immune_against(attack_type, &self.types)
    }

    pub fn move_slot(&self, move_id: &str) -> Option<&MoveSlot> {
        self.move_slots.iter().find(|slot| slot.id == move_id)
    }

    /// Spends PP; false when the slot is missing or already empty.
    pub fn deduct_pp(&mut self, move_id: &str, amount: u8) -> bool {
        let Some(slot) = self.move_slots.iter_mut().find(|slot| slot.id == move_id) else {
            return false;
        };
        if slot.pp == 0 {
            return false;
        }
        slot.pp = slot.pp.saturating_sub(amount);
        true
    }

    pub fn has_volatile(&self, id: &str) -> bool {
        self.volatiles.contains_key(id)
    }

    pub fn add_volatile(&mut self, id: &str, source: Option<MonRef>) -> bool {
        if self.volatiles.contains_key(id) {
            return false;
        }
        self.volatiles.insert(id.to_string(), VolatileState { source });
        true
    }

    pub fn remove_volatile(&mut self, id: &str) -> bool {
        self.volatiles.remove(id).is_some()
    }

    pub fn is_semi_invulnerable(&self) -> bool {
        SEMI_INVULNERABLE.iter().any(|id| self.volatiles.contains_key(*id))
    }

    pub fn move_used(&mut self, move_id: &str) {
        self.last_move = Some(move_id.to_string());
        self.move_this_turn = Some(move_id.to_string());
    }

    pub fn got_attacked(&mut self, move_id: &str, damage: u32, source: MonRef) {
        self.attacked_by.push(AttackedBy {
            source,
            move_id: move_id.to_string(),
            damage,
            this_turn: true,
        });
    }

    /// Type-level status immunity; ability and item vetoes arrive
    /// through events instead.
    pub fn immune_to_status(&self, status: Status) -> bool {
        match status {
            Status::Burn => self.has_type("Fire"),
            Status::Paralysis => self.has_type("Electric"),
            Status::Poison | Status::Toxic => self.has_type("Poison") || self.has_type("Steel"),
            Status::Freeze => self.has_type("Ice"),
            Status::Sleep => false,
        }
    }
}

fn normalize_id(name: &str) -> String {
    name.to_ascii_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect()
}
