use crate::data::species::get_species;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub enum Stat {
    Atk,
    Def,
    Spa,
    Spd,
    Spe,
    Accuracy,
    Evasion,
}

pub fn stat_from_id(id: &str) -> Option<Stat> {
    match id {
        "atk" => Some(Stat::Atk),
        "def" => Some(Stat::Def),
        "spa" => Some(Stat::Spa),
        "spd" => Some(Stat::Spd),
        "spe" => Some(Stat::Spe),
        "accuracy" => Some(Stat::Accuracy),
        "evasion" => Some(Stat::Evasion),
        _ => None,
    }
}

pub fn stat_id(stat: Stat) -> &'static str {
    match stat {
        Stat::Atk => "atk",
        Stat::Def => "def",
        Stat::Spa => "spa",
        Stat::Spd => "spd",
        Stat::Spe => "spe",
        Stat::Accuracy => "accuracy",
        Stat::Evasion => "evasion",
    }
}

/// Boost stages. Writes clamp to the -6..=6 range.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct BoostTable {
    pub atk: i8,
    pub def: i8,
    pub spa: i8,
    pub spd: i8,
    pub spe: i8,
    pub accuracy: i8,
    pub evasion: i8,
}

impl BoostTable {
    pub fn get(&self, stat: Stat) -> i8 {
        match stat {
            Stat::Atk => self.atk,
            Stat::Def => self.def,
            Stat::Spa => self.spa,
            Stat::Spd => self.spd,
            Stat::Spe => self.spe,
            Stat::Accuracy => self.accuracy,
            Stat::Evasion => self.evasion,
        }
    }

    pub fn set(&mut self, stat: Stat, stages: i8) {
        let stages = stages.clamp(-6, 6);
        match stat {
            Stat::Atk => self.atk = stages,
            Stat::Def => self.def = stages,
            Stat::Spa => self.spa = stages,
            Stat::Spd => self.spd = stages,
            Stat::Spe => self.spe = stages,
            Stat::Accuracy => self.accuracy = stages,
            Stat::Evasion => self.evasion = stages,
        }
    }

    /// Applies a stage delta and reports the stages actually gained,
    /// which is smaller than the delta at the -6/+6 caps.
    pub fn apply(&mut self, stat: Stat, delta: i8) -> i8 {
        let current = self.get(stat);
        let next = (current + delta).clamp(-6, 6);
        self.set(stat, next);
        next - current
    }

    pub fn entries(&self) -> [(Stat, i8); 7] {
        [
            (Stat::Atk, self.atk),
            (Stat::Def, self.def),
            (Stat::Spa, self.spa),
            (Stat::Spd, self.spd),
            (Stat::Spe, self.spe),
            (Stat::Accuracy, self.accuracy),
            (Stat::Evasion, self.evasion),
        ]
    }
}

/// Accuracy and evasion multipliers for stages 0..=6. Negative stages
/// divide instead of multiply.
pub const STAGE_MULTIPLIERS: [f64; 7] = [
    1.0,
    4.0 / 3.0,
    5.0 / 3.0,
    2.0,
    7.0 / 3.0,
    8.0 / 3.0,
    3.0,
];

pub fn calc_hp(base: u16, level: u8) -> u16 {
    // Flat spread: perfect IVs, no EVs.
    let base_value = base * 2 + 31;
    (base_value * level as u16) / 100 + level as u16 + 10
}

pub fn calc_stat(base: u16, level: u8) -> u16 {
    let base_value = base * 2 + 31;
    (base_value * level as u16) / 100 + 5
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct StatsSet {
    pub hp: u16,
    pub atk: u16,
    pub def: u16,
    pub spa: u16,
    pub spd: u16,
    pub spe: u16,
}

impl StatsSet {
    pub fn from_species(species: &str, level: u8) -> Option<Self> {
        let data = get_species(species)?;
        let base = data.base_stats;
        Some(Self {
            hp: calc_hp(base.hp, level),
            atk: calc_stat(base.atk, level),
            def: calc_stat(base.def, level),
            spa: calc_stat(base.spa, level),
            spd: calc_stat(base.spd, level),
            spe: calc_stat(base.spe, level),
        })
    }
}
