// Ref: pokemon-showdown/data/mods/gen7/scripts.ts: zMoveTable.

use phf::phf_map;

/// Canonical Z-move for each damaging move type.
pub static Z_MOVE_TABLE: phf::Map<&'static str, &'static str> = phf_map! {
    "Poison" => "Acid Downpour",
    "Fighting" => "All-Out Pummeling",
    "Dark" => "Black Hole Eclipse",
    "Grass" => "Bloom Doom",
    "Normal" => "Breakneck Blitz",
    "Rock" => "Continental Crush",
    "Steel" => "Corkscrew Crash",
    "Dragon" => "Devastating Drake",
    "Electric" => "Gigavolt Havoc",
    "Water" => "Hydro Vortex",
    "Fire" => "Inferno Overdrive",
    "Ghost" => "Never-Ending Nightmare",
    "Bug" => "Savage Spin-Out",
    "Psychic" => "Shattered Psyche",
    "Ice" => "Subzero Slammer",
    "Flying" => "Supersonic Skystrike",
    "Ground" => "Tectonic Rage",
    "Fairy" => "Twinkle Tackle",
};

/// Power bracket used when a move declares no explicit Z-power.
pub fn z_power_from_base(base_power: u32) -> u32 {
    match base_power {
        0..=55 => 100,
        56..=65 => 120,
        66..=75 => 140,
        76..=85 => 160,
        86..=95 => 175,
        96..=100 => 180,
        101..=110 => 185,
        111..=125 => 190,
        126..=130 => 195,
        _ => 200,
    }
}
