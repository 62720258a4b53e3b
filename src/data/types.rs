// Ref: pokemon-showdown/data/typechart.ts: damageTaken tables, immunities only.
// The damage formula lives outside this crate, so the chart is trimmed to
// the zero-damage pairs plus the pseudo-types immunity checks use.

/// True when an attack (or pseudo-type such as `powder`/`prankster`)
/// cannot affect a defender of the given type.
pub fn immune_to(attacking: &str, defending: &str) -> bool {
    let atk = attacking.to_ascii_lowercase();
    let def = defending.to_ascii_lowercase();
    match atk.as_str() {
        "normal" | "fighting" => def == "ghost",
        "electric" => def == "ground",
        "ground" => def == "flying",
        "poison" => def == "steel",
        "psychic" => def == "dark",
        "ghost" => def == "normal",
        "dragon" => def == "fairy",
        // Spore, powder and friends never land on Grass types.
        "powder" => def == "grass",
        // Gen 7: priority granted by Prankster fails against Dark types.
        "prankster" => def == "dark",
        _ => false,
    }
}

/// True when any of the defender's types grants immunity.
pub fn immune_against(attacking: &str, defender_types: &[String]) -> bool {
    defender_types.iter().any(|t| immune_to(attacking, t))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_immunities() {
        assert!(immune_to("Normal", "Ghost"));
        assert!(immune_to("Ground", "Flying"));
        assert!(immune_to("Electric", "Ground"));
        assert!(!immune_to("Fire", "Water"));
    }

    #[test]
    fn pseudo_type_immunities() {
        assert!(immune_to("powder", "Grass"));
        assert!(immune_to("prankster", "Dark"));
        assert!(!immune_to("powder", "Fire"));
    }

    #[test]
    fn dual_type_defender() {
        let types = vec!["Water".to_string(), "Flying".to_string()];
        assert!(immune_against("Ground", &types));
        assert!(!immune_against("Electric", &types));
    }
}
