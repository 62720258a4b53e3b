use serde::Deserialize;

use pokemon_battle_actions::sim::battle::BattleState;
use pokemon_battle_actions::sim::damage::FixedDamage;
use pokemon_battle_actions::sim::events::NoHooks;
use pokemon_battle_actions::sim::moves::MoveActions;
use pokemon_battle_actions::sim::pokemon::{MonRef, Pokemon};

#[derive(Debug, Deserialize)]
struct Transcript {
    formatid: String,
    log: Vec<String>,
}

fn make_pokemon(species: &str, moves: &[&str]) -> Pokemon {
    Pokemon::new(species, 50, moves, "Static", None).expect("species exists")
}

#[test]
fn a_singles_transcript_round_trips_through_serde() {
    let mut battle = BattleState::singles(
        make_pokemon("pikachu", &["thunderbolt"]),
        make_pokemon("dragonite", &["tackle"]),
        7,
    );
    let mut hooks = NoHooks;
    let mut oracle = FixedDamage(9999);
    let mut actions = MoveActions::new(&mut battle, &mut hooks, &mut oracle);
    actions
        .run_move("Thunderbolt", MonRef { side: 0, slot: 0 }, None, None, None, false)
        .expect("move runs");
    battle.faint_messages();

    let transcript: Transcript =
        serde_json::from_value(battle.logger.to_json()).expect("transcript parses");
    assert_eq!(transcript.formatid, "gen7customgame");
    assert!(transcript.log[0].starts_with("|move|p1a: Pikachu|Thunderbolt"));
    assert!(transcript.log.iter().all(|line| line.starts_with('|')));
    assert!(transcript.log.iter().any(|line| line == "|faint|p2a: Dragonite"));
    assert!(transcript.log.iter().any(|line| line == "|win|p1"));
}

#[test]
fn a_doubles_transcript_keeps_format_and_spread_annotations() {
    let mut battle = BattleState::doubles(
        [
            make_pokemon("pikachu", &["hypervoice"]),
            make_pokemon("snorlax", &["tackle"]),
        ],
        [
            make_pokemon("dragonite", &["tackle"]),
            make_pokemon("gyarados", &["tackle"]),
        ],
        19,
    );
    let mut hooks = NoHooks;
    let mut oracle = FixedDamage(20);
    let mut actions = MoveActions::new(&mut battle, &mut hooks, &mut oracle);
    actions
        .run_move("Hyper Voice", MonRef { side: 0, slot: 0 }, None, None, None, false)
        .expect("move runs");

    let transcript: Transcript =
        serde_json::from_value(battle.logger.to_json()).expect("transcript parses");
    assert_eq!(transcript.formatid, "gen7doublescustomgame");
    assert!(transcript
        .log
        .iter()
        .any(|line| line.contains("[spread] p2a,p2b")));
}
