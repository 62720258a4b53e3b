// Ref: pokemon-showdown/data/items.ts, trimmed to the Z-crystal and
// mega stone fields move resolution reads.

use phf::phf_map;

#[derive(Debug, Clone, Copy)]
pub enum ZCrystal {
    /// Powers up any damaging move of the given type.
    Type(&'static str),
    /// Species-locked crystal that turns one specific move into a
    /// signature Z-move.
    Signature {
        grants: &'static str,
        from: &'static str,
        users: &'static [&'static str],
    },
}

#[derive(Debug, Clone, Copy)]
pub struct ItemData {
    pub name: &'static str,
    pub z_crystal: Option<ZCrystal>,
    pub mega_stone: Option<&'static str>,
    pub mega_evolves: Option<&'static str>,
}

const ITEM_DEFAULTS: ItemData = ItemData {
    name: "",
    z_crystal: None,
    mega_stone: None,
    mega_evolves: None,
};

pub static ITEMS: phf::Map<&'static str, ItemData> = phf_map! {
    "leftovers" => ItemData { name: "Leftovers", ..ITEM_DEFAULTS },
    "normaliumz" => ItemData { name: "Normalium Z", z_crystal: Some(ZCrystal::Type("Normal")), ..ITEM_DEFAULTS },
    "firiumz" => ItemData { name: "Firium Z", z_crystal: Some(ZCrystal::Type("Fire")), ..ITEM_DEFAULTS },
    "wateriumz" => ItemData { name: "Waterium Z", z_crystal: Some(ZCrystal::Type("Water")), ..ITEM_DEFAULTS },
    "electriumz" => ItemData { name: "Electrium Z", z_crystal: Some(ZCrystal::Type("Electric")), ..ITEM_DEFAULTS },
    "grassiumz" => ItemData { name: "Grassium Z", z_crystal: Some(ZCrystal::Type("Grass")), ..ITEM_DEFAULTS },
    "iciumz" => ItemData { name: "Icium Z", z_crystal: Some(ZCrystal::Type("Ice")), ..ITEM_DEFAULTS },
    "fightiniumz" => ItemData { name: "Fightinium Z", z_crystal: Some(ZCrystal::Type("Fighting")), ..ITEM_DEFAULTS },
    "poisoniumz" => ItemData { name: "Poisonium Z", z_crystal: Some(ZCrystal::Type("Poison")), ..ITEM_DEFAULTS },
    "groundiumz" => ItemData { name: "Groundium Z", z_crystal: Some(ZCrystal::Type("Ground")), ..ITEM_DEFAULTS },
    "flyiniumz" => ItemData { name: "Flyinium Z", z_crystal: Some(ZCrystal::Type("Flying")), ..ITEM_DEFAULTS },
    "psychiumz" => ItemData { name: "Psychium Z", z_crystal: Some(ZCrystal::Type("Psychic")), ..ITEM_DEFAULTS },
    "buginiumz" => ItemData { name: "Buginium Z", z_crystal: Some(ZCrystal::Type("Bug")), ..ITEM_DEFAULTS },
    "rockiumz" => ItemData { name: "Rockium Z", z_crystal: Some(ZCrystal::Type("Rock")), ..ITEM_DEFAULTS },
    "ghostiumz" => ItemData { name: "Ghostium Z", z_crystal: Some(ZCrystal::Type("Ghost")), ..ITEM_DEFAULTS },
    "dragoniumz" => ItemData { name: "Dragonium Z", z_crystal: Some(ZCrystal::Type("Dragon")), ..ITEM_DEFAULTS },
    "darkiniumz" => ItemData { name: "Darkinium Z", z_crystal: Some(ZCrystal::Type("Dark")), ..ITEM_DEFAULTS },
    "steeliumz" => ItemData { name: "Steelium Z", z_crystal: Some(ZCrystal::Type("Steel")), ..ITEM_DEFAULTS },
    "fairiumz" => ItemData { name: "Fairium Z", z_crystal: Some(ZCrystal::Type("Fairy")), ..ITEM_DEFAULTS },
    "pikaniumz" => ItemData {
        name: "Pikanium Z",
        z_crystal: Some(ZCrystal::Signature {
            grants: "Catastropika",
            from: "Volt Tackle",
            users: &["Pikachu"],
        }),
        ..ITEM_DEFAULTS
    },
    "kommoniumz" => ItemData {
        name: "Kommonium Z",
        z_crystal: Some(ZCrystal::Signature {
            grants: "Clangorous Soulblaze",
            from: "Clanging Scales",
            users: &["Kommo-o", "Kommo-o-Totem"],
        }),
        ..ITEM_DEFAULTS
    },
    "ultranecroziumz" => ItemData {
        name: "Ultranecrozium Z",
        z_crystal: Some(ZCrystal::Signature {
            grants: "Light That Burns the Sky",
            from: "Photon Geyser",
            users: &["Necrozma-Ultra"],
        }),
        ..ITEM_DEFAULTS
    },
    "venusaurite" => ItemData {
        name: "Venusaurite",
        mega_stone: Some("Venusaur-Mega"),
        mega_evolves: Some("Venusaur"),
        ..ITEM_DEFAULTS
    },
    "charizarditex" => ItemData {
        name: "Charizardite X",
        mega_stone: Some("Charizard-Mega-X"),
        mega_evolves: Some("Charizard"),
        ..ITEM_DEFAULTS
    },
    "gyaradosite" => ItemData {
        name: "Gyaradosite",
        mega_stone: Some("Gyarados-Mega"),
        mega_evolves: Some("Gyarados"),
        ..ITEM_DEFAULTS
    },
};

pub fn get_item(id: &str) -> Option<&'static ItemData> {
    ITEMS.get(id)
}
