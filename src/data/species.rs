// Ref: pokemon-showdown/data/pokedex.ts, trimmed to the species the
// test roster uses plus the forme fields mega evolution reads.

use phf::phf_map;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaseStats {
    pub hp: u16,
    pub atk: u16,
    pub def: u16,
    pub spa: u16,
    pub spd: u16,
    pub spe: u16,
}

#[derive(Debug, Clone, Copy)]
pub struct SpeciesData {
    pub name: &'static str,
    pub types: &'static [&'static str],
    pub base_stats: BaseStats,
    pub abilities: &'static [&'static str],
    /// Family root; `None` when this entry is its own base forme.
    pub base_species: Option<&'static str>,
    pub forme: Option<&'static str>,
    pub is_mega: bool,
    /// Mega formes unlocked by a known move instead of a stone.
    pub required_move: Option<&'static str>,
    pub other_formes: &'static [&'static str],
}

const SPECIES_DEFAULTS: SpeciesData = SpeciesData {
    name: "",
    types: &[],
    base_stats: BaseStats { hp: 1, atk: 1, def: 1, spa: 1, spd: 1, spe: 1 },
    abilities: &[],
    base_species: None,
    forme: None,
    is_mega: false,
    required_move: None,
    other_formes: &[],
};

pub static POKEDEX: phf::Map<&'static str, SpeciesData> = phf_map! {
    "pikachu" => SpeciesData {
        name: "Pikachu",
        types: &["Electric"],
        base_stats: BaseStats { hp: 35, atk: 55, def: 40, spa: 50, spd: 50, spe: 90 },
        abilities: &["Static", "Lightning Rod"],
        ..SPECIES_DEFAULTS
    },
    "blissey" => SpeciesData {
        name: "Blissey",
        types: &["Normal"],
        base_stats: BaseStats { hp: 255, atk: 10, def: 10, spa: 75, spd: 135, spe: 55 },
        abilities: &["Natural Cure", "Serene Grace", "Healer"],
        ..SPECIES_DEFAULTS
    },
    "machamp" => SpeciesData {
        name: "Machamp",
        types: &["Fighting"],
        base_stats: BaseStats { hp: 90, atk: 130, def: 80, spa: 65, spd: 85, spe: 55 },
        abilities: &["Guts", "No Guard", "Steadfast"],
        ..SPECIES_DEFAULTS
    },
    "lapras" => SpeciesData {
        name: "Lapras",
        types: &["Water", "Ice"],
        base_stats: BaseStats { hp: 130, atk: 85, def: 80, spa: 85, spd: 95, spe: 60 },
        abilities: &["Water Absorb", "Shell Armor", "Hydration"],
        ..SPECIES_DEFAULTS
    },
    "glaceon" => SpeciesData {
        name: "Glaceon",
        types: &["Ice"],
        base_stats: BaseStats { hp: 65, atk: 60, def: 110, spa: 130, spd: 95, spe: 65 },
        abilities: &["Snow Cloak", "Ice Body"],
        ..SPECIES_DEFAULTS
    },
    "snorlax" => SpeciesData {
        name: "Snorlax",
        types: &["Normal"],
        base_stats: BaseStats { hp: 160, atk: 110, def: 65, spa: 65, spd: 110, spe: 30 },
        abilities: &["Immunity", "Thick Fat", "Gluttony"],
        ..SPECIES_DEFAULTS
    },
    "dragonite" => SpeciesData {
        name: "Dragonite",
        types: &["Dragon", "Flying"],
        base_stats: BaseStats { hp: 91, atk: 134, def: 95, spa: 100, spd: 100, spe: 80 },
        abilities: &["Inner Focus", "Multiscale"],
        ..SPECIES_DEFAULTS
    },
    "gengar" => SpeciesData {
        name: "Gengar",
        types: &["Ghost", "Poison"],
        base_stats: BaseStats { hp: 60, atk: 65, def: 60, spa: 130, spd: 75, spe: 110 },
        abilities: &["Cursed Body"],
        ..SPECIES_DEFAULTS
    },
    "umbreon" => SpeciesData {
        name: "Umbreon",
        types: &["Dark"],
        base_stats: BaseStats { hp: 95, atk: 65, def: 110, spa: 60, spd: 130, spe: 65 },
        abilities: &["Synchronize", "Inner Focus"],
        ..SPECIES_DEFAULTS
    },
    "sableye" => SpeciesData {
        name: "Sableye",
        types: &["Dark", "Ghost"],
        base_stats: BaseStats { hp: 50, atk: 75, def: 75, spa: 65, spd: 65, spe: 50 },
        abilities: &["Keen Eye", "Stall", "Prankster"],
        ..SPECIES_DEFAULTS
    },
    "skarmory" => SpeciesData {
        name: "Skarmory",
        types: &["Steel", "Flying"],
        base_stats: BaseStats { hp: 65, atk: 80, def: 140, spa: 40, spd: 70, spe: 70 },
        abilities: &["Keen Eye", "Sturdy", "Weak Armor"],
        ..SPECIES_DEFAULTS
    },
    "golem" => SpeciesData {
        name: "Golem",
        types: &["Rock", "Ground"],
        base_stats: BaseStats { hp: 80, atk: 120, def: 130, spa: 55, spd: 65, spe: 45 },
        abilities: &["Rock Head", "Sturdy", "Sand Veil"],
        ..SPECIES_DEFAULTS
    },
    "breloom" => SpeciesData {
        name: "Breloom",
        types: &["Grass", "Fighting"],
        base_stats: BaseStats { hp: 60, atk: 130, def: 80, spa: 60, spd: 60, spe: 70 },
        abilities: &["Effect Spore", "Poison Heal", "Technician"],
        ..SPECIES_DEFAULTS
    },
    "kommoo" => SpeciesData {
        name: "Kommo-o",
        types: &["Dragon", "Fighting"],
        base_stats: BaseStats { hp: 75, atk: 110, def: 125, spa: 100, spd: 105, spe: 85 },
        abilities: &["Bulletproof", "Soundproof", "Overcoat"],
        ..SPECIES_DEFAULTS
    },
    "oricorio" => SpeciesData {
        name: "Oricorio",
        types: &["Fire", "Flying"],
        base_stats: BaseStats { hp: 75, atk: 70, def: 70, spa: 98, spd: 70, spe: 93 },
        abilities: &["Dancer"],
        ..SPECIES_DEFAULTS
    },
    "oricoriopompom" => SpeciesData {
        name: "Oricorio-Pom-Pom",
        types: &["Electric", "Flying"],
        base_stats: BaseStats { hp: 75, atk: 70, def: 70, spa: 98, spd: 70, spe: 93 },
        abilities: &["Dancer"],
        base_species: Some("Oricorio"),
        forme: Some("Pom-Pom"),
        ..SPECIES_DEFAULTS
    },
    "charizard" => SpeciesData {
        name: "Charizard",
        types: &["Fire", "Flying"],
        base_stats: BaseStats { hp: 78, atk: 84, def: 78, spa: 109, spd: 85, spe: 100 },
        abilities: &["Blaze", "Solar Power"],
        other_formes: &["Charizard-Mega-X"],
        ..SPECIES_DEFAULTS
    },
    "charizardmegax" => SpeciesData {
        name: "Charizard-Mega-X",
        types: &["Fire", "Dragon"],
        base_stats: BaseStats { hp: 78, atk: 130, def: 111, spa: 130, spd: 85, spe: 100 },
        abilities: &["Tough Claws"],
        base_species: Some("Charizard"),
        forme: Some("Mega-X"),
        is_mega: true,
        ..SPECIES_DEFAULTS
    },
    "venusaur" => SpeciesData {
        name: "Venusaur",
        types: &["Grass", "Poison"],
        base_stats: BaseStats { hp: 80, atk: 82, def: 83, spa: 100, spd: 100, spe: 80 },
        abilities: &["Overgrow", "Chlorophyll"],
        other_formes: &["Venusaur-Mega"],
        ..SPECIES_DEFAULTS
    },
    "venusaurmega" => SpeciesData {
        name: "Venusaur-Mega",
        types: &["Grass", "Poison"],
        base_stats: BaseStats { hp: 80, atk: 100, def: 123, spa: 122, spd: 120, spe: 80 },
        abilities: &["Thick Fat"],
        base_species: Some("Venusaur"),
        forme: Some("Mega"),
        is_mega: true,
        ..SPECIES_DEFAULTS
    },
    "gyarados" => SpeciesData {
        name: "Gyarados",
        types: &["Water", "Flying"],
        base_stats: BaseStats { hp: 95, atk: 125, def: 79, spa: 60, spd: 100, spe: 81 },
        abilities: &["Intimidate", "Moxie"],
        other_formes: &["Gyarados-Mega"],
        ..SPECIES_DEFAULTS
    },
    "gyaradosmega" => SpeciesData {
        name: "Gyarados-Mega",
        types: &["Water", "Dark"],
        base_stats: BaseStats { hp: 95, atk: 155, def: 109, spa: 70, spd: 130, spe: 81 },
        abilities: &["Mold Breaker"],
        base_species: Some("Gyarados"),
        forme: Some("Mega"),
        is_mega: true,
        ..SPECIES_DEFAULTS
    },
    "rayquaza" => SpeciesData {
        name: "Rayquaza",
        types: &["Dragon", "Flying"],
        base_stats: BaseStats { hp: 105, atk: 150, def: 90, spa: 150, spd: 90, spe: 95 },
        abilities: &["Air Lock"],
        other_formes: &["Rayquaza-Mega"],
        ..SPECIES_DEFAULTS
    },
    "rayquazamega" => SpeciesData {
        name: "Rayquaza-Mega",
        types: &["Dragon", "Flying"],
        base_stats: BaseStats { hp: 105, atk: 180, def: 100, spa: 180, spd: 100, spe: 115 },
        abilities: &["Delta Stream"],
        base_species: Some("Rayquaza"),
        forme: Some("Mega"),
        is_mega: true,
        required_move: Some("Dragon Ascent"),
        ..SPECIES_DEFAULTS
    },
    "necrozmadawnwings" => SpeciesData {
        name: "Necrozma-Dawn-Wings",
        types: &["Psychic", "Ghost"],
        base_stats: BaseStats { hp: 97, atk: 113, def: 109, spa: 157, spd: 127, spe: 77 },
        abilities: &["Prism Armor"],
        base_species: Some("Necrozma"),
        forme: Some("Dawn-Wings"),
        ..SPECIES_DEFAULTS
    },
    "necrozmaduskmane" => SpeciesData {
        name: "Necrozma-Dusk-Mane",
        types: &["Psychic", "Steel"],
        base_stats: BaseStats { hp: 97, atk: 157, def: 127, spa: 113, spd: 109, spe: 77 },
        abilities: &["Prism Armor"],
        base_species: Some("Necrozma"),
        forme: Some("Dusk-Mane"),
        ..SPECIES_DEFAULTS
    },
    "necrozmaultra" => SpeciesData {
        name: "Necrozma-Ultra",
        types: &["Psychic", "Dragon"],
        base_stats: BaseStats { hp: 97, atk: 167, def: 97, spa: 167, spd: 97, spe: 129 },
        abilities: &["Neuroforce"],
        base_species: Some("Necrozma"),
        forme: Some("Ultra"),
        ..SPECIES_DEFAULTS
    },
};

/// Lowercase-alphanumeric id for pokedex lookups.
pub fn normalize_species_name(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

pub fn get_species(name: &str) -> Option<&'static SpeciesData> {
    POKEDEX.get(normalize_species_name(name).as_str())
}
