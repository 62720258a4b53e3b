use crate::data::moves::{
    normalize_move_name, Accuracy, Category, EffectData, MoveData, MoveTarget, Multihit, Ohko,
    SecondaryEffect as DataSecondaryEffect, SelfDestruct, MOVES,
};
use crate::sim::pokemon::{status_from_id, Status};
use crate::sim::stats::{stat_from_id, Stat};
use anyhow::{anyhow, Result};

/// One application's worth of effects: a move's primary payload, its
/// `self:` block, or one secondary rider.
#[derive(Clone, Debug, Default)]
pub struct HitEffect {
    pub boosts: Vec<(Stat, i8)>,
    pub heal: Option<(u32, u32)>,
    pub status: Option<Status>,
    pub force_status: Option<Status>,
    pub volatile_status: Option<&'static str>,
    pub side_condition: Option<&'static str>,
    pub weather: Option<&'static str>,
    pub terrain: Option<&'static str>,
    pub pseudo_weather: Option<&'static str>,
    /// Only read for `self:` blocks; secondaries carry their own roll.
    pub chance: Option<u8>,
}

impl HitEffect {
    pub fn boosts_only(boosts: Vec<(Stat, i8)>) -> Self {
        Self {
            boosts,
            ..Self::default()
        }
    }
}

#[derive(Clone, Debug)]
pub struct SecondaryEffect {
    pub chance: u8,
    pub effect: HitEffect,
    pub self_effect: Option<HitEffect>,
}

/// How this invocation relates to the Z mechanic.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ZKind {
    #[default]
    None,
    /// A canonical Z-move backed by a crystal.
    Canonical,
    /// A status move upgraded in place; displays with a `Z-` prefix.
    UpgradedStatus,
}

/// Mutable working copy of a move for one invocation. Event hooks may
/// rewrite any of it; the data tables stay untouched.
#[derive(Clone, Debug)]
pub struct ActiveMove {
    pub id: String,
    pub name: String,
    pub move_type: String,
    pub category: Category,
    pub base_power: u32,
    /// `None` is a sure hit.
    pub accuracy: Option<f64>,
    /// Effects that bypass the accuracy check outright set this mid-turn.
    pub always_hit: bool,
    pub priority: i8,
    pub target: MoveTarget,
    pub flags: &'static [&'static str],
    pub multihit: Option<Multihit>,
    pub multiaccuracy: bool,
    pub ohko: Option<Ohko>,
    pub drain: Option<(u32, u32)>,
    pub recoil: Option<(u32, u32)>,
    pub struggle_recoil: bool,
    pub mind_blown_recoil: bool,
    pub selfdestruct: Option<SelfDestruct>,
    pub breaks_protect: bool,
    pub steals_boosts: bool,
    pub force_switch: bool,
    pub self_switch: bool,
    /// Unset until activation resolves the category default.
    pub ignore_immunity: Option<bool>,
    pub ignore_accuracy: bool,
    pub ignore_evasion: bool,
    pub ignore_ability: bool,
    pub sleep_usable: bool,
    pub no_faint: bool,
    pub hit_effect: HitEffect,
    pub self_effect: Option<HitEffect>,
    pub self_boost: Vec<(Stat, i8)>,
    pub secondaries: Vec<SecondaryEffect>,
    pub z: ZKind,
    pub is_z_powered: bool,
    pub z_move_power: Option<u32>,
    pub z_move_effect: Option<&'static str>,
    pub z_move_boost: Vec<(Stat, i8)>,
    pub has_bounced: bool,
    pub has_sheer_force: bool,
    pub negate_secondary: bool,
    pub prankster_boosted: bool,
    pub source_effect: Option<String>,
    pub is_external: bool,
    pub spread_hit: bool,
    /// Hit number inside the multi-hit loop, starting at 1.
    pub hit: u32,
    pub total_damage: u32,
    pub self_dropped: bool,
}

impl ActiveMove {
    pub fn new(name: &str) -> Result<Self> {
        let id = normalize_move_name(name);
        let data = MOVES
            .get(id.as_str())
            .ok_or_else(|| anyhow!("Move '{}' not found in MOVES", name))?;
        Ok(Self::from_data(id, data))
    }

    pub fn from_data(id: String, data: &MoveData) -> Self {
        let secondaries = if !data.secondaries.is_empty() {
            data.secondaries.iter().map(secondary_from_data).collect()
        } else {
            data.secondary
                .as_ref()
                .map(|secondary| vec![secondary_from_data(secondary)])
                .unwrap_or_default()
        };
        Self {
            id,
            name: data.name.to_string(),
            move_type: data.move_type.to_string(),
            category: data.category,
            base_power: data.base_power.unwrap_or(0),
            accuracy: match data.accuracy {
                Accuracy::Percent(value) => Some(f64::from(value)),
                Accuracy::AlwaysHit => None,
            },
            always_hit: false,
            priority: data.priority,
            target: data.target,
            flags: data.flags,
            multihit: data.multihit,
            multiaccuracy: data.multiaccuracy,
            ohko: data.ohko,
            drain: data.drain,
            recoil: data.recoil,
            struggle_recoil: data.struggle_recoil,
            mind_blown_recoil: data.mind_blown_recoil,
            selfdestruct: data.selfdestruct,
            breaks_protect: data.breaks_protect,
            steals_boosts: data.steals_boosts,
            force_switch: data.force_switch,
            self_switch: data.self_switch,
            ignore_immunity: data.ignore_immunity,
            ignore_accuracy: data.ignore_accuracy,
            ignore_evasion: data.ignore_evasion,
            ignore_ability: false,
            sleep_usable: data.sleep_usable,
            no_faint: data.no_faint,
            hit_effect: primary_effect_from_data(data),
            self_effect: data.self_effect.as_ref().map(hit_effect_from_effect_data),
            self_boost: parse_boosts(data.self_boost),
            secondaries,
            z: if data.is_z.is_some() {
                ZKind::Canonical
            } else {
                ZKind::None
            },
            is_z_powered: false,
            z_move_power: data.z_move_power,
            z_move_effect: data.z_move_effect,
            z_move_boost: parse_boosts(data.z_move_boost),
            has_bounced: false,
            has_sheer_force: false,
            negate_secondary: false,
            prankster_boosted: false,
            source_effect: None,
            is_external: false,
            spread_hit: false,
            hit: 0,
            total_damage: 0,
            self_dropped: false,
        }
    }

    pub fn is_z(&self) -> bool {
        self.z != ZKind::None
    }

    pub fn has_flag(&self, flag: &str) -> bool {
        self.flags.contains(&flag)
    }

    /// Category default applies until activation pins the flag down.
    pub fn ignores_immunity(&self) -> bool {
        self.ignore_immunity
            .unwrap_or(self.category == Category::Status)
    }

    pub fn fullname(&self) -> String {
        format!("move: {}", self.name)
    }
}

fn primary_effect_from_data(data: &MoveData) -> HitEffect {
    HitEffect {
        boosts: parse_boosts(data.boosts),
        heal: data.heal,
        status: data.status.and_then(status_from_id),
        force_status: data.force_status.and_then(status_from_id),
        volatile_status: data.volatile_status,
        side_condition: data.side_condition,
        weather: data.weather,
        terrain: data.terrain,
        pseudo_weather: data.pseudo_weather,
        chance: None,
    }
}

fn hit_effect_from_effect_data(data: &EffectData) -> HitEffect {
    HitEffect {
        boosts: parse_boosts(data.boosts),
        heal: None,
        status: data.status.and_then(status_from_id),
        force_status: None,
        volatile_status: data.volatile_status,
        side_condition: data.side_condition,
        weather: None,
        terrain: None,
        pseudo_weather: None,
        chance: data.chance,
    }
}

fn secondary_from_data(data: &DataSecondaryEffect) -> SecondaryEffect {
    SecondaryEffect {
        chance: data.chance,
        effect: HitEffect {
            boosts: parse_boosts(data.boosts),
            status: data.status.and_then(status_from_id),
            volatile_status: data.volatile_status,
            ..HitEffect::default()
        },
        self_effect: data.self_effect.as_ref().map(hit_effect_from_effect_data),
    }
}

fn parse_boosts(pairs: &[(&'static str, i8)]) -> Vec<(Stat, i8)> {
    pairs
        .iter()
        .filter_map(|(id, amount)| stat_from_id(id).map(|stat| (stat, *amount)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tackle_defaults() {
        let mv = ActiveMove::new("Tackle").expect("Tackle exists");
        assert_eq!(mv.id, "tackle");
        assert_eq!(mv.base_power, 40);
        assert_eq!(mv.accuracy, Some(100.0));
        assert!(mv.secondaries.is_empty());
        assert!(!mv.is_z());
    }

    #[test]
    fn struggle_ignores_immunity_and_accuracy() {
        let mv = ActiveMove::new("Struggle").expect("Struggle exists");
        assert_eq!(mv.accuracy, None);
        assert_eq!(mv.ignore_immunity, Some(true));
        assert!(mv.struggle_recoil);
    }

    #[test]
    fn status_default_covers_immunity() {
        let mv = ActiveMove::new("Swords Dance").expect("Swords Dance exists");
        assert!(mv.ignores_immunity());
        let mv = ActiveMove::new("Tackle").expect("Tackle exists");
        assert!(!mv.ignores_immunity());
    }

    #[test]
    fn fiery_dance_secondary_boosts_the_user() {
        let mv = ActiveMove::new("Fiery Dance").expect("Fiery Dance exists");
        assert_eq!(mv.secondaries.len(), 1);
        let secondary = &mv.secondaries[0];
        assert_eq!(secondary.chance, 50);
        let self_effect = secondary.self_effect.as_ref().expect("self rider");
        assert_eq!(self_effect.boosts, vec![(Stat::Spa, 1)]);
    }

    #[test]
    fn petal_dance_locks_the_user_in() {
        let mv = ActiveMove::new("Petal Dance").expect("Petal Dance exists");
        let self_effect = mv.self_effect.as_ref().expect("self block");
        assert_eq!(self_effect.volatile_status, Some("lockedmove"));
        assert!(mv.has_flag("dance"));
    }

    #[test]
    fn thunder_wave_never_ignores_immunity() {
        let mv = ActiveMove::new("Thunder Wave").expect("Thunder Wave exists");
        assert_eq!(mv.ignore_immunity, Some(false));
        assert!(!mv.ignores_immunity());
    }
}
