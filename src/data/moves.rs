// Ref: pokemon-showdown/data/moves.ts, trimmed to the fields move
// resolution reads. Effect callbacks stay outside this crate.

use phf::phf_map;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Physical,
    Special,
    Status,
}

/// Declared accuracy. `AlwaysHit` never rolls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accuracy {
    Percent(u8),
    AlwaysHit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Multihit {
    Fixed(u8),
    Range(u8, u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ohko {
    Regular,
    /// Ice-type flavor; freezing immunity and the gen 7 accuracy nerf.
    Ice,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelfDestruct {
    Always,
    IfHit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveTarget {
    Normal,
    User,
    AdjacentAlly,
    AdjacentAllyOrSelf,
    AdjacentFoe,
    AllAdjacent,
    AllAdjacentFoes,
    Allies,
    AllySide,
    AllyTeam,
    FoeSide,
    All,
    Any,
    RandomNormal,
    Scripted,
}

impl MoveTarget {
    /// Side- and field-scoped moves resolve without per-combatant steps.
    pub fn is_side_or_field(self) -> bool {
        matches!(
            self,
            MoveTarget::All | MoveTarget::FoeSide | MoveTarget::AllySide | MoveTarget::AllyTeam
        )
    }

    pub fn hits_multiple(self) -> bool {
        matches!(
            self,
            MoveTarget::AllAdjacent | MoveTarget::AllAdjacentFoes | MoveTarget::Allies
        )
    }

    pub fn targets_user(self) -> bool {
        matches!(self, MoveTarget::User | MoveTarget::Allies)
    }
}

/// Effect payload applied to one combatant: riders of a secondary, or a
/// move's `self:` block.
#[derive(Debug, Clone, Copy)]
pub struct EffectData {
    pub chance: Option<u8>,
    pub boosts: &'static [(&'static str, i8)],
    pub status: Option<&'static str>,
    pub volatile_status: Option<&'static str>,
    pub side_condition: Option<&'static str>,
}

pub const EFFECT_DEFAULTS: EffectData = EffectData {
    chance: None,
    boosts: &[],
    status: None,
    volatile_status: None,
    side_condition: None,
};

/// A chance-gated secondary effect.
#[derive(Debug, Clone, Copy)]
pub struct SecondaryEffect {
    pub chance: u8,
    pub status: Option<&'static str>,
    pub volatile_status: Option<&'static str>,
    pub boosts: &'static [(&'static str, i8)],
    pub self_effect: Option<EffectData>,
}

pub const SECONDARY_DEFAULTS: SecondaryEffect = SecondaryEffect {
    chance: 100,
    status: None,
    volatile_status: None,
    boosts: &[],
    self_effect: None,
};

/// One move's static data.
#[derive(Debug, Clone, Copy)]
pub struct MoveData {
    pub name: &'static str,
    pub move_type: &'static str,
    pub category: Category,
    pub base_power: Option<u32>,
    pub accuracy: Accuracy,
    pub pp: u8,
    pub priority: i8,
    pub target: MoveTarget,
    pub flags: &'static [&'static str],
    pub multihit: Option<Multihit>,
    pub multiaccuracy: bool,
    pub ohko: Option<Ohko>,
    pub drain: Option<(u32, u32)>,
    pub recoil: Option<(u32, u32)>,
    pub heal: Option<(u32, u32)>,
    pub struggle_recoil: bool,
    pub mind_blown_recoil: bool,
    pub selfdestruct: Option<SelfDestruct>,
    pub breaks_protect: bool,
    pub steals_boosts: bool,
    pub force_switch: bool,
    pub self_switch: bool,
    pub ignore_immunity: Option<bool>,
    pub ignore_accuracy: bool,
    pub ignore_evasion: bool,
    pub sleep_usable: bool,
    pub no_faint: bool,
    pub boosts: &'static [(&'static str, i8)],
    pub status: Option<&'static str>,
    pub force_status: Option<&'static str>,
    pub volatile_status: Option<&'static str>,
    pub side_condition: Option<&'static str>,
    pub weather: Option<&'static str>,
    pub terrain: Option<&'static str>,
    pub pseudo_weather: Option<&'static str>,
    pub secondary: Option<SecondaryEffect>,
    pub secondaries: &'static [SecondaryEffect],
    pub self_effect: Option<EffectData>,
    pub self_boost: &'static [(&'static str, i8)],
    pub is_z: Option<&'static str>,
    pub z_move_power: Option<u32>,
    pub z_move_effect: Option<&'static str>,
    pub z_move_boost: &'static [(&'static str, i8)],
}

pub const MOVE_DEFAULTS: MoveData = MoveData {
    name: "",
    move_type: "Normal",
    category: Category::Physical,
    base_power: None,
    accuracy: Accuracy::Percent(100),
    pp: 10,
    priority: 0,
    target: MoveTarget::Normal,
    flags: &[],
    multihit: None,
    multiaccuracy: false,
    ohko: None,
    drain: None,
    recoil: None,
    heal: None,
    struggle_recoil: false,
    mind_blown_recoil: false,
    selfdestruct: None,
    breaks_protect: false,
    steals_boosts: false,
    force_switch: false,
    self_switch: false,
    ignore_immunity: None,
    ignore_accuracy: false,
    ignore_evasion: false,
    sleep_usable: false,
    no_faint: false,
    boosts: &[],
    status: None,
    force_status: None,
    volatile_status: None,
    side_condition: None,
    weather: None,
    terrain: None,
    pseudo_weather: None,
    secondary: None,
    secondaries: &[],
    self_effect: None,
    self_boost: &[],
    is_z: None,
    z_move_power: None,
    z_move_effect: None,
    z_move_boost: &[],
};

pub static MOVES: phf::Map<&'static str, MoveData> = phf_map! {
    "tackle" => MoveData {
        name: "Tackle",
        base_power: Some(40),
        pp: 35,
        flags: &["contact", "protect", "mirror"],
        z_move_power: Some(100),
        ..MOVE_DEFAULTS
    },
    "thunderbolt" => MoveData {
        name: "Thunderbolt",
        move_type: "Electric",
        category: Category::Special,
        base_power: Some(90),
        pp: 15,
        flags: &["protect", "mirror"],
        secondary: Some(SecondaryEffect { chance: 10, status: Some("par"), ..SECONDARY_DEFAULTS }),
        z_move_power: Some(175),
        ..MOVE_DEFAULTS
    },
    "volttackle" => MoveData {
        name: "Volt Tackle",
        move_type: "Electric",
        base_power: Some(120),
        pp: 15,
        flags: &["contact", "protect", "mirror"],
        recoil: Some((33, 100)),
        secondary: Some(SecondaryEffect { chance: 10, status: Some("par"), ..SECONDARY_DEFAULTS }),
        z_move_power: Some(190),
        ..MOVE_DEFAULTS
    },
    "nuzzle" => MoveData {
        name: "Nuzzle",
        move_type: "Electric",
        base_power: Some(20),
        pp: 20,
        flags: &["contact", "protect", "mirror"],
        secondary: Some(SecondaryEffect { chance: 100, status: Some("par"), ..SECONDARY_DEFAULTS }),
        z_move_power: Some(100),
        ..MOVE_DEFAULTS
    },
    "icebeam" => MoveData {
        name: "Ice Beam",
        move_type: "Ice",
        category: Category::Special,
        base_power: Some(90),
        flags: &["protect", "mirror"],
        secondary: Some(SecondaryEffect { chance: 10, status: Some("frz"), ..SECONDARY_DEFAULTS }),
        z_move_power: Some(175),
        ..MOVE_DEFAULTS
    },
    "firefang" => MoveData {
        name: "Fire Fang",
        move_type: "Fire",
        base_power: Some(65),
        accuracy: Accuracy::Percent(95),
        pp: 15,
        flags: &["bite", "contact", "protect", "mirror"],
        secondaries: &[
            SecondaryEffect { chance: 10, status: Some("brn"), ..SECONDARY_DEFAULTS },
            SecondaryEffect { chance: 10, volatile_status: Some("flinch"), ..SECONDARY_DEFAULTS },
        ],
        z_move_power: Some(120),
        ..MOVE_DEFAULTS
    },
    "airslash" => MoveData {
        name: "Air Slash",
        move_type: "Flying",
        category: Category::Special,
        base_power: Some(75),
        accuracy: Accuracy::Percent(95),
        pp: 15,
        target: MoveTarget::Any,
        flags: &["protect", "mirror"],
        secondary: Some(SecondaryEffect { chance: 30, volatile_status: Some("flinch"), ..SECONDARY_DEFAULTS }),
        z_move_power: Some(140),
        ..MOVE_DEFAULTS
    },
    "shadowball" => MoveData {
        name: "Shadow Ball",
        move_type: "Ghost",
        category: Category::Special,
        base_power: Some(80),
        pp: 15,
        flags: &["bullet", "protect", "mirror"],
        secondary: Some(SecondaryEffect { chance: 20, boosts: &[("spd", -1)], ..SECONDARY_DEFAULTS }),
        z_move_power: Some(160),
        ..MOVE_DEFAULTS
    },
    "surf" => MoveData {
        name: "Surf",
        move_type: "Water",
        category: Category::Special,
        base_power: Some(90),
        pp: 15,
        target: MoveTarget::AllAdjacent,
        flags: &["protect", "mirror"],
        z_move_power: Some(175),
        ..MOVE_DEFAULTS
    },
    "earthquake" => MoveData {
        name: "Earthquake",
        move_type: "Ground",
        base_power: Some(100),
        target: MoveTarget::AllAdjacent,
        flags: &["protect", "mirror"],
        z_move_power: Some(180),
        ..MOVE_DEFAULTS
    },
    "hypervoice" => MoveData {
        name: "Hyper Voice",
        category: Category::Special,
        base_power: Some(90),
        target: MoveTarget::AllAdjacentFoes,
        flags: &["sound", "protect", "mirror"],
        z_move_power: Some(175),
        ..MOVE_DEFAULTS
    },
    "bulletseed" => MoveData {
        name: "Bullet Seed",
        move_type: "Grass",
        base_power: Some(25),
        pp: 30,
        flags: &["bullet", "protect", "mirror"],
        multihit: Some(Multihit::Range(2, 5)),
        z_move_power: Some(140),
        ..MOVE_DEFAULTS
    },
    "rockblast" => MoveData {
        name: "Rock Blast",
        move_type: "Rock",
        base_power: Some(25),
        accuracy: Accuracy::Percent(90),
        flags: &["bullet", "protect", "mirror"],
        multihit: Some(Multihit::Range(2, 5)),
        z_move_power: Some(140),
        ..MOVE_DEFAULTS
    },
    "doublekick" => MoveData {
        name: "Double Kick",
        move_type: "Fighting",
        base_power: Some(30),
        pp: 30,
        flags: &["contact", "protect", "mirror"],
        multihit: Some(Multihit::Fixed(2)),
        z_move_power: Some(100),
        ..MOVE_DEFAULTS
    },
    "triplekick" => MoveData {
        name: "Triple Kick",
        move_type: "Fighting",
        base_power: Some(10),
        accuracy: Accuracy::Percent(90),
        flags: &["contact", "protect", "mirror"],
        multihit: Some(Multihit::Fixed(3)),
        multiaccuracy: true,
        z_move_power: Some(120),
        ..MOVE_DEFAULTS
    },
    "bravebird" => MoveData {
        name: "Brave Bird",
        move_type: "Flying",
        base_power: Some(120),
        pp: 15,
        target: MoveTarget::Any,
        flags: &["contact", "protect", "mirror"],
        recoil: Some((33, 100)),
        z_move_power: Some(190),
        ..MOVE_DEFAULTS
    },
    "flareblitz" => MoveData {
        name: "Flare Blitz",
        move_type: "Fire",
        base_power: Some(120),
        pp: 15,
        flags: &["contact", "protect", "mirror"],
        recoil: Some((33, 100)),
        secondary: Some(SecondaryEffect { chance: 10, status: Some("brn"), ..SECONDARY_DEFAULTS }),
        z_move_power: Some(190),
        ..MOVE_DEFAULTS
    },
    "gigadrain" => MoveData {
        name: "Giga Drain",
        move_type: "Grass",
        category: Category::Special,
        base_power: Some(75),
        flags: &["heal", "protect", "mirror"],
        drain: Some((1, 2)),
        z_move_power: Some(140),
        ..MOVE_DEFAULTS
    },
    "mindblown" => MoveData {
        name: "Mind Blown",
        move_type: "Fire",
        category: Category::Special,
        base_power: Some(150),
        pp: 5,
        target: MoveTarget::AllAdjacent,
        flags: &["protect", "mirror"],
        mind_blown_recoil: true,
        z_move_power: Some(200),
        ..MOVE_DEFAULTS
    },
    "struggle" => MoveData {
        name: "Struggle",
        base_power: Some(50),
        accuracy: Accuracy::AlwaysHit,
        pp: 1,
        target: MoveTarget::RandomNormal,
        flags: &["contact", "protect"],
        struggle_recoil: true,
        ignore_immunity: Some(true),
        ..MOVE_DEFAULTS
    },
    "fissure" => MoveData {
        name: "Fissure",
        move_type: "Ground",
        accuracy: Accuracy::Percent(30),
        pp: 5,
        flags: &["protect", "mirror"],
        ohko: Some(Ohko::Regular),
        z_move_power: Some(180),
        ..MOVE_DEFAULTS
    },
    "guillotine" => MoveData {
        name: "Guillotine",
        accuracy: Accuracy::Percent(30),
        pp: 5,
        flags: &["contact", "protect", "mirror"],
        ohko: Some(Ohko::Regular),
        z_move_power: Some(180),
        ..MOVE_DEFAULTS
    },
    "sheercold" => MoveData {
        name: "Sheer Cold",
        move_type: "Ice",
        category: Category::Special,
        accuracy: Accuracy::Percent(30),
        pp: 5,
        flags: &["protect", "mirror"],
        ohko: Some(Ohko::Ice),
        z_move_power: Some(180),
        ..MOVE_DEFAULTS
    },
    "falseswipe" => MoveData {
        name: "False Swipe",
        base_power: Some(40),
        pp: 40,
        flags: &["contact", "protect", "mirror"],
        no_faint: true,
        z_move_power: Some(100),
        ..MOVE_DEFAULTS
    },
    "feint" => MoveData {
        name: "Feint",
        base_power: Some(30),
        priority: 2,
        flags: &["mirror"],
        breaks_protect: true,
        z_move_power: Some(100),
        ..MOVE_DEFAULTS
    },
    "hyperspacefury" => MoveData {
        name: "Hyperspace Fury",
        move_type: "Dark",
        base_power: Some(100),
        accuracy: Accuracy::AlwaysHit,
        pp: 5,
        flags: &["mirror"],
        breaks_protect: true,
        self_effect: Some(EffectData { boosts: &[("def", -1)], ..EFFECT_DEFAULTS }),
        z_move_power: Some(180),
        ..MOVE_DEFAULTS
    },
    "spectralthief" => MoveData {
        name: "Spectral Thief",
        move_type: "Ghost",
        base_power: Some(90),
        flags: &["contact", "protect", "mirror"],
        steals_boosts: true,
        z_move_power: Some(175),
        ..MOVE_DEFAULTS
    },
    "pursuit" => MoveData {
        name: "Pursuit",
        move_type: "Dark",
        base_power: Some(40),
        pp: 20,
        flags: &["contact", "protect", "mirror"],
        z_move_power: Some(100),
        ..MOVE_DEFAULTS
    },
    "uturn" => MoveData {
        name: "U-turn",
        move_type: "Bug",
        base_power: Some(70),
        pp: 20,
        flags: &["contact", "protect", "mirror"],
        self_switch: true,
        z_move_power: Some(140),
        ..MOVE_DEFAULTS
    },
    "voltswitch" => MoveData {
        name: "Volt Switch",
        move_type: "Electric",
        category: Category::Special,
        base_power: Some(70),
        pp: 20,
        flags: &["protect", "mirror"],
        self_switch: true,
        z_move_power: Some(140),
        ..MOVE_DEFAULTS
    },
    "batonpass" => MoveData {
        name: "Baton Pass",
        category: Category::Status,
        accuracy: Accuracy::AlwaysHit,
        pp: 40,
        target: MoveTarget::User,
        self_switch: true,
        z_move_boost: &[("spe", 1)],
        ..MOVE_DEFAULTS
    },
    "roar" => MoveData {
        name: "Roar",
        category: Category::Status,
        accuracy: Accuracy::AlwaysHit,
        pp: 20,
        priority: -6,
        flags: &["sound", "reflectable", "mirror"],
        force_switch: true,
        z_move_boost: &[("def", 1)],
        ..MOVE_DEFAULTS
    },
    "whirlwind" => MoveData {
        name: "Whirlwind",
        category: Category::Status,
        accuracy: Accuracy::AlwaysHit,
        pp: 20,
        priority: -6,
        flags: &["reflectable", "mirror"],
        force_switch: true,
        z_move_boost: &[("spe", 1)],
        ..MOVE_DEFAULTS
    },
    "dragontail" => MoveData {
        name: "Dragon Tail",
        move_type: "Dragon",
        base_power: Some(60),
        accuracy: Accuracy::Percent(90),
        priority: -6,
        flags: &["contact", "protect", "mirror"],
        force_switch: true,
        z_move_power: Some(120),
        ..MOVE_DEFAULTS
    },
    "toxic" => MoveData {
        name: "Toxic",
        move_type: "Poison",
        category: Category::Status,
        accuracy: Accuracy::Percent(90),
        flags: &["reflectable", "mirror"],
        status: Some("tox"),
        z_move_boost: &[("def", 1)],
        ..MOVE_DEFAULTS
    },
    "thunderwave" => MoveData {
        name: "Thunder Wave",
        move_type: "Electric",
        category: Category::Status,
        accuracy: Accuracy::Percent(90),
        pp: 20,
        flags: &["reflectable", "mirror"],
        status: Some("par"),
        ignore_immunity: Some(false),
        z_move_boost: &[("spd", 1)],
        ..MOVE_DEFAULTS
    },
    "willowisp" => MoveData {
        name: "Will-O-Wisp",
        move_type: "Fire",
        category: Category::Status,
        accuracy: Accuracy::Percent(85),
        pp: 15,
        flags: &["reflectable", "mirror"],
        status: Some("brn"),
        z_move_boost: &[("atk", 1)],
        ..MOVE_DEFAULTS
    },
    "spore" => MoveData {
        name: "Spore",
        move_type: "Grass",
        category: Category::Status,
        pp: 15,
        flags: &["powder", "reflectable", "mirror"],
        status: Some("slp"),
        z_move_effect: Some("clearnegativeboost"),
        ..MOVE_DEFAULTS
    },
    "swordsdance" => MoveData {
        name: "Swords Dance",
        category: Category::Status,
        accuracy: Accuracy::AlwaysHit,
        pp: 20,
        target: MoveTarget::User,
        flags: &["dance", "snatch"],
        boosts: &[("atk", 2)],
        z_move_effect: Some("clearnegativeboost"),
        ..MOVE_DEFAULTS
    },
    "quiverdance" => MoveData {
        name: "Quiver Dance",
        move_type: "Bug",
        category: Category::Status,
        accuracy: Accuracy::AlwaysHit,
        pp: 20,
        target: MoveTarget::User,
        flags: &["dance", "snatch"],
        boosts: &[("spa", 1), ("spd", 1), ("spe", 1)],
        z_move_effect: Some("clearnegativeboost"),
        ..MOVE_DEFAULTS
    },
    "fierydance" => MoveData {
        name: "Fiery Dance",
        move_type: "Fire",
        category: Category::Special,
        base_power: Some(80),
        flags: &["dance", "protect", "mirror"],
        secondary: Some(SecondaryEffect {
            chance: 50,
            self_effect: Some(EffectData { boosts: &[("spa", 1)], ..EFFECT_DEFAULTS }),
            ..SECONDARY_DEFAULTS
        }),
        z_move_power: Some(160),
        ..MOVE_DEFAULTS
    },
    "petaldance" => MoveData {
        name: "Petal Dance",
        move_type: "Grass",
        category: Category::Special,
        base_power: Some(120),
        target: MoveTarget::RandomNormal,
        flags: &["dance", "contact", "protect", "mirror"],
        self_effect: Some(EffectData { volatile_status: Some("lockedmove"), ..EFFECT_DEFAULTS }),
        z_move_power: Some(190),
        ..MOVE_DEFAULTS
    },
    "teeterdance" => MoveData {
        name: "Teeter Dance",
        category: Category::Status,
        pp: 20,
        target: MoveTarget::AllAdjacent,
        flags: &["dance", "mirror"],
        volatile_status: Some("confusion"),
        z_move_boost: &[("spa", 1)],
        ..MOVE_DEFAULTS
    },
    "revelationdance" => MoveData {
        name: "Revelation Dance",
        category: Category::Special,
        base_power: Some(90),
        pp: 15,
        flags: &["dance", "protect", "mirror"],
        z_move_power: Some(175),
        ..MOVE_DEFAULTS
    },
    "protect" => MoveData {
        name: "Protect",
        category: Category::Status,
        accuracy: Accuracy::AlwaysHit,
        priority: 4,
        target: MoveTarget::User,
        volatile_status: Some("protect"),
        ..MOVE_DEFAULTS
    },
    "kingsshield" => MoveData {
        name: "King's Shield",
        move_type: "Steel",
        category: Category::Status,
        accuracy: Accuracy::AlwaysHit,
        priority: 4,
        target: MoveTarget::User,
        volatile_status: Some("kingsshield"),
        ..MOVE_DEFAULTS
    },
    "spikyshield" => MoveData {
        name: "Spiky Shield",
        move_type: "Grass",
        category: Category::Status,
        accuracy: Accuracy::AlwaysHit,
        priority: 4,
        target: MoveTarget::User,
        volatile_status: Some("spikyshield"),
        ..MOVE_DEFAULTS
    },
    "banefulbunker" => MoveData {
        name: "Baneful Bunker",
        move_type: "Poison",
        category: Category::Status,
        accuracy: Accuracy::AlwaysHit,
        priority: 4,
        target: MoveTarget::User,
        volatile_status: Some("banefulbunker"),
        ..MOVE_DEFAULTS
    },
    "wideguard" => MoveData {
        name: "Wide Guard",
        move_type: "Rock",
        category: Category::Status,
        accuracy: Accuracy::AlwaysHit,
        priority: 3,
        target: MoveTarget::AllySide,
        side_condition: Some("wideguard"),
        z_move_boost: &[("def", 1)],
        ..MOVE_DEFAULTS
    },
    "lightscreen" => MoveData {
        name: "Light Screen",
        move_type: "Psychic",
        category: Category::Status,
        accuracy: Accuracy::AlwaysHit,
        pp: 30,
        target: MoveTarget::AllySide,
        side_condition: Some("lightscreen"),
        z_move_boost: &[("spd", 1)],
        ..MOVE_DEFAULTS
    },
    "stealthrock" => MoveData {
        name: "Stealth Rock",
        move_type: "Rock",
        category: Category::Status,
        accuracy: Accuracy::AlwaysHit,
        pp: 20,
        target: MoveTarget::FoeSide,
        flags: &["reflectable"],
        side_condition: Some("stealthrock"),
        z_move_boost: &[("def", 1)],
        ..MOVE_DEFAULTS
    },
    "raindance" => MoveData {
        name: "Rain Dance",
        move_type: "Water",
        category: Category::Status,
        accuracy: Accuracy::AlwaysHit,
        pp: 5,
        target: MoveTarget::All,
        weather: Some("raindance"),
        z_move_boost: &[("spe", 1)],
        ..MOVE_DEFAULTS
    },
    "electricterrain" => MoveData {
        name: "Electric Terrain",
        move_type: "Electric",
        category: Category::Status,
        accuracy: Accuracy::AlwaysHit,
        target: MoveTarget::All,
        terrain: Some("electricterrain"),
        z_move_boost: &[("spe", 1)],
        ..MOVE_DEFAULTS
    },
    "trickroom" => MoveData {
        name: "Trick Room",
        move_type: "Psychic",
        category: Category::Status,
        accuracy: Accuracy::AlwaysHit,
        pp: 5,
        priority: -7,
        target: MoveTarget::All,
        flags: &["mirror"],
        pseudo_weather: Some("trickroom"),
        z_move_boost: &[("accuracy", 1)],
        ..MOVE_DEFAULTS
    },
    "recover" => MoveData {
        name: "Recover",
        category: Category::Status,
        accuracy: Accuracy::AlwaysHit,
        target: MoveTarget::User,
        flags: &["heal", "snatch"],
        heal: Some((1, 2)),
        z_move_effect: Some("clearnegativeboost"),
        ..MOVE_DEFAULTS
    },
    "splash" => MoveData {
        name: "Splash",
        category: Category::Status,
        accuracy: Accuracy::AlwaysHit,
        pp: 40,
        target: MoveTarget::User,
        flags: &["gravity"],
        z_move_boost: &[("atk", 3)],
        ..MOVE_DEFAULTS
    },
    "celebrate" => MoveData {
        name: "Celebrate",
        category: Category::Status,
        accuracy: Accuracy::AlwaysHit,
        pp: 40,
        target: MoveTarget::User,
        z_move_boost: &[("atk", 1), ("def", 1), ("spa", 1), ("spd", 1), ("spe", 1)],
        ..MOVE_DEFAULTS
    },
    "bellydrum" => MoveData {
        name: "Belly Drum",
        category: Category::Status,
        accuracy: Accuracy::AlwaysHit,
        target: MoveTarget::User,
        flags: &["snatch"],
        z_move_effect: Some("heal"),
        ..MOVE_DEFAULTS
    },
    "memento" => MoveData {
        name: "Memento",
        move_type: "Dark",
        category: Category::Status,
        flags: &["mirror"],
        boosts: &[("atk", -2), ("spa", -2)],
        selfdestruct: Some(SelfDestruct::IfHit),
        z_move_effect: Some("healreplacement"),
        ..MOVE_DEFAULTS
    },
    "explosion" => MoveData {
        name: "Explosion",
        base_power: Some(250),
        pp: 5,
        target: MoveTarget::AllAdjacent,
        flags: &["mirror"],
        selfdestruct: Some(SelfDestruct::Always),
        z_move_power: Some(200),
        ..MOVE_DEFAULTS
    },
    "destinybond" => MoveData {
        name: "Destiny Bond",
        move_type: "Ghost",
        category: Category::Status,
        accuracy: Accuracy::AlwaysHit,
        pp: 5,
        target: MoveTarget::User,
        volatile_status: Some("destinybond"),
        z_move_effect: Some("redirect"),
        ..MOVE_DEFAULTS
    },
    "sleeptalk" => MoveData {
        name: "Sleep Talk",
        category: Category::Status,
        accuracy: Accuracy::AlwaysHit,
        target: MoveTarget::User,
        sleep_usable: true,
        z_move_effect: Some("crit2"),
        ..MOVE_DEFAULTS
    },
    "curse" => MoveData {
        name: "Curse",
        move_type: "Ghost",
        category: Category::Status,
        accuracy: Accuracy::AlwaysHit,
        z_move_effect: Some("curse"),
        ..MOVE_DEFAULTS
    },
    "instruct" => MoveData {
        name: "Instruct",
        move_type: "Psychic",
        category: Category::Status,
        accuracy: Accuracy::AlwaysHit,
        pp: 15,
        z_move_boost: &[("spa", 1)],
        ..MOVE_DEFAULTS
    },
    "hiddenpower" => MoveData {
        name: "Hidden Power",
        category: Category::Special,
        base_power: Some(60),
        pp: 15,
        flags: &["protect", "mirror"],
        z_move_power: Some(120),
        ..MOVE_DEFAULTS
    },
    "weatherball" => MoveData {
        name: "Weather Ball",
        category: Category::Special,
        base_power: Some(50),
        flags: &["bullet", "protect", "mirror"],
        z_move_power: Some(160),
        ..MOVE_DEFAULTS
    },
    "dragonascent" => MoveData {
        name: "Dragon Ascent",
        move_type: "Flying",
        base_power: Some(120),
        pp: 5,
        target: MoveTarget::Any,
        flags: &["contact", "protect", "mirror"],
        self_effect: Some(EffectData { boosts: &[("def", -1), ("spd", -1)], ..EFFECT_DEFAULTS }),
        z_move_power: Some(190),
        ..MOVE_DEFAULTS
    },
    "photongeyser" => MoveData {
        name: "Photon Geyser",
        move_type: "Psychic",
        category: Category::Special,
        base_power: Some(100),
        pp: 5,
        flags: &["protect", "mirror"],
        z_move_power: Some(180),
        ..MOVE_DEFAULTS
    },
    "clangingscales" => MoveData {
        name: "Clanging Scales",
        move_type: "Dragon",
        category: Category::Special,
        base_power: Some(110),
        pp: 5,
        target: MoveTarget::AllAdjacentFoes,
        flags: &["sound", "protect", "mirror"],
        self_effect: Some(EffectData { boosts: &[("def", -1)], ..EFFECT_DEFAULTS }),
        z_move_power: Some(185),
        ..MOVE_DEFAULTS
    },
    // Signature Z-moves.
    "catastropika" => MoveData {
        name: "Catastropika",
        move_type: "Electric",
        base_power: Some(210),
        accuracy: Accuracy::AlwaysHit,
        pp: 1,
        flags: &["contact"],
        is_z: Some("pikaniumz"),
        ..MOVE_DEFAULTS
    },
    "lightthatburnsthesky" => MoveData {
        name: "Light That Burns the Sky",
        move_type: "Psychic",
        category: Category::Special,
        base_power: Some(200),
        accuracy: Accuracy::AlwaysHit,
        pp: 1,
        is_z: Some("ultranecroziumz"),
        ..MOVE_DEFAULTS
    },
    "clangoroussoulblaze" => MoveData {
        name: "Clangorous Soulblaze",
        move_type: "Dragon",
        category: Category::Special,
        base_power: Some(185),
        accuracy: Accuracy::AlwaysHit,
        pp: 1,
        target: MoveTarget::AllAdjacentFoes,
        flags: &["sound"],
        self_boost: &[("atk", 1), ("def", 1), ("spa", 1), ("spd", 1), ("spe", 1)],
        is_z: Some("kommoniumz"),
        ..MOVE_DEFAULTS
    },
    // One canonical Z-move per type.
    "breakneckblitz" => MoveData {
        name: "Breakneck Blitz",
        base_power: Some(1),
        accuracy: Accuracy::AlwaysHit,
        pp: 1,
        is_z: Some("normaliumz"),
        ..MOVE_DEFAULTS
    },
    "aciddownpour" => MoveData {
        name: "Acid Downpour",
        move_type: "Poison",
        base_power: Some(1),
        accuracy: Accuracy::AlwaysHit,
        pp: 1,
        is_z: Some("poisoniumz"),
        ..MOVE_DEFAULTS
    },
    "alloutpummeling" => MoveData {
        name: "All-Out Pummeling",
        move_type: "Fighting",
        base_power: Some(1),
        accuracy: Accuracy::AlwaysHit,
        pp: 1,
        is_z: Some("fightiniumz"),
        ..MOVE_DEFAULTS
    },
    "blackholeeclipse" => MoveData {
        name: "Black Hole Eclipse",
        move_type: "Dark",
        base_power: Some(1),
        accuracy: Accuracy::AlwaysHit,
        pp: 1,
        is_z: Some("darkiniumz"),
        ..MOVE_DEFAULTS
    },
    "bloomdoom" => MoveData {
        name: "Bloom Doom",
        move_type: "Grass",
        base_power: Some(1),
        accuracy: Accuracy::AlwaysHit,
        pp: 1,
        is_z: Some("grassiumz"),
        ..MOVE_DEFAULTS
    },
    "continentalcrush" => MoveData {
        name: "Continental Crush",
        move_type: "Rock",
        base_power: Some(1),
        accuracy: Accuracy::AlwaysHit,
        pp: 1,
        is_z: Some("rockiumz"),
        ..MOVE_DEFAULTS
    },
    "corkscrewcrash" => MoveData {
        name: "Corkscrew Crash",
        move_type: "Steel",
        base_power: Some(1),
        accuracy: Accuracy::AlwaysHit,
        pp: 1,
        is_z: Some("steeliumz"),
        ..MOVE_DEFAULTS
    },
    "devastatingdrake" => MoveData {
        name: "Devastating Drake",
        move_type: "Dragon",
        base_power: Some(1),
        accuracy: Accuracy::AlwaysHit,
        pp: 1,
        is_z: Some("dragoniumz"),
        ..MOVE_DEFAULTS
    },
    "gigavolthavoc" => MoveData {
        name: "Gigavolt Havoc",
        move_type: "Electric",
        base_power: Some(1),
        accuracy: Accuracy::AlwaysHit,
        pp: 1,
        is_z: Some("electriumz"),
        ..MOVE_DEFAULTS
    },
    "hydrovortex" => MoveData {
        name: "Hydro Vortex",
        move_type: "Water",
        base_power: Some(1),
        accuracy: Accuracy::AlwaysHit,
        pp: 1,
        is_z: Some("wateriumz"),
        ..MOVE_DEFAULTS
    },
    "infernooverdrive" => MoveData {
        name: "Inferno Overdrive",
        move_type: "Fire",
        base_power: Some(1),
        accuracy: Accuracy::AlwaysHit,
        pp: 1,
        is_z: Some("firiumz"),
        ..MOVE_DEFAULTS
    },
    "neverendingnightmare" => MoveData {
        name: "Never-Ending Nightmare",
        move_type: "Ghost",
        base_power: Some(1),
        accuracy: Accuracy::AlwaysHit,
        pp: 1,
        is_z: Some("ghostiumz"),
        ..MOVE_DEFAULTS
    },
    "savagespinout" => MoveData {
        name: "Savage Spin-Out",
        move_type: "Bug",
        base_power: Some(1),
        accuracy: Accuracy::AlwaysHit,
        pp: 1,
        is_z: Some("buginiumz"),
        ..MOVE_DEFAULTS
    },
    "shatteredpsyche" => MoveData {
        name: "Shattered Psyche",
        move_type: "Psychic",
        base_power: Some(1),
        accuracy: Accuracy::AlwaysHit,
        pp: 1,
        is_z: Some("psychiumz"),
        ..MOVE_DEFAULTS
    },
    "subzeroslammer" => MoveData {
        name: "Subzero Slammer",
        move_type: "Ice",
        base_power: Some(1),
        accuracy: Accuracy::AlwaysHit,
        pp: 1,
        is_z: Some("iciumz"),
        ..MOVE_DEFAULTS
    },
    "supersonicskystrike" => MoveData {
        name: "Supersonic Skystrike",
        move_type: "Flying",
        base_power: Some(1),
        accuracy: Accuracy::AlwaysHit,
        pp: 1,
        is_z: Some("flyiniumz"),
        ..MOVE_DEFAULTS
    },
    "tectonicrage" => MoveData {
        name: "Tectonic Rage",
        move_type: "Ground",
        base_power: Some(1),
        accuracy: Accuracy::AlwaysHit,
        pp: 1,
        is_z: Some("groundiumz"),
        ..MOVE_DEFAULTS
    },
    "twinkletackle" => MoveData {
        name: "Twinkle Tackle",
        move_type: "Fairy",
        base_power: Some(1),
        accuracy: Accuracy::AlwaysHit,
        pp: 1,
        is_z: Some("fairiumz"),
        ..MOVE_DEFAULTS
    },
};

/// Lowercase-alphanumeric id for table lookups.
pub fn normalize_move_name(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

pub fn get_move(name: &str) -> Option<&'static MoveData> {
    MOVES.get(normalize_move_name(name).as_str())
}
