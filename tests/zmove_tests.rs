use pokemon_battle_actions::sim::battle::BattleState;
use pokemon_battle_actions::sim::damage::FixedDamage;
use pokemon_battle_actions::sim::events::{BattleHooks, EventId, EventTarget, NoHooks};
use pokemon_battle_actions::sim::moves::{can_z_move, ActiveMove, MoveActions};
use pokemon_battle_actions::sim::outcome::Outcome;
use pokemon_battle_actions::sim::pokemon::{MonRef, Pokemon};
use pokemon_battle_actions::sim::stats::Stat;

fn make_pokemon(species: &str, moves: &[&str], item: Option<&str>) -> Pokemon {
    Pokemon::new(species, 50, moves, "Static", item).expect("species exists")
}

fn p1() -> MonRef {
    MonRef { side: 0, slot: 0 }
}

fn p2() -> MonRef {
    MonRef { side: 1, slot: 0 }
}

fn log_contains(battle: &BattleState, needle: &str) -> bool {
    battle
        .logger
        .log_lines()
        .iter()
        .any(|line| line.contains(needle))
}

#[test]
fn a_type_crystal_turns_the_choice_into_its_canonical_z_move() {
    let mut battle = BattleState::singles(
        make_pokemon("pikachu", &["thunderbolt"], Some("Electrium Z")),
        make_pokemon("dragonite", &["tackle"], None),
        7,
    );
    let foe_hp = battle.mon(p2()).max_hp;
    let mut hooks = NoHooks;
    let mut oracle = FixedDamage(60);
    let mut actions = MoveActions::new(&mut battle, &mut hooks, &mut oracle);
    actions
        .run_move("Thunderbolt", p1(), None, None, Some("Gigavolt Havoc"), false)
        .expect("move runs");

    assert!(log_contains(&battle, "|-zpower|p1a: Pikachu"));
    assert!(log_contains(
        &battle,
        "|move|p1a: Pikachu|Gigavolt Havoc|p2a: Dragonite|[zeffect]"
    ));
    assert_eq!(battle.mon(p2()).hp, foe_hp - 60);
    assert!(battle.sides[0].z_move_used);
    // The Z-move itself has no slot; the base move pays the point.
    let slot = battle.mon(p1()).move_slot("thunderbolt").expect("slot");
    assert_eq!(slot.pp, slot.max_pp - 1);
}

#[test]
fn a_status_z_upgrades_in_place_and_keeps_its_body() {
    let mut battle = BattleState::singles(
        make_pokemon("pikachu", &["splash"], Some("Normalium Z")),
        make_pokemon("dragonite", &["tackle"], None),
        7,
    );
    let mut hooks = NoHooks;
    let mut oracle = FixedDamage(0);
    let mut actions = MoveActions::new(&mut battle, &mut hooks, &mut oracle);
    actions
        .run_move("Splash", p1(), None, None, Some("Z-Splash"), false)
        .expect("move runs");

    assert!(log_contains(&battle, "|-zpower|p1a: Pikachu"));
    assert!(log_contains(
        &battle,
        "|move|p1a: Pikachu|Z-Splash|p1a: Pikachu|[anim]Splash"
    ));
    assert!(log_contains(&battle, "|-boost|p1a: Pikachu|atk|3|[zeffect]"));
    assert_eq!(battle.mon(p1()).boosts.get(Stat::Atk), 3);
    assert!(battle.sides[0].z_move_used);
}

#[test]
fn the_side_latch_blocks_a_second_offer() {
    let mut battle = BattleState::singles(
        make_pokemon("pikachu", &["thunderbolt"], Some("Electrium Z")),
        make_pokemon("dragonite", &["tackle"], None),
        7,
    );
    let offer = can_z_move(&battle, p1()).expect("an offer before the latch");
    assert_eq!(offer.len(), 1);
    assert_eq!(
        offer[0].as_ref().expect("slot offer").name,
        "Gigavolt Havoc"
    );

    let mut hooks = NoHooks;
    let mut oracle = FixedDamage(60);
    let mut actions = MoveActions::new(&mut battle, &mut hooks, &mut oracle);
    actions
        .run_move("Thunderbolt", p1(), None, None, Some("Gigavolt Havoc"), false)
        .expect("move runs");

    assert!(can_z_move(&battle, p1()).is_none());
}

#[test]
fn a_signature_crystal_powers_the_full_sequence() {
    let mut battle = BattleState::doubles(
        [
            make_pokemon("kommoo", &["clangingscales"], Some("Kommonium Z")),
            make_pokemon("pikachu", &["thunderbolt"], None),
        ],
        [
            make_pokemon("dragonite", &["tackle"], None),
            make_pokemon("gyarados", &["tackle"], None),
        ],
        21,
    );
    let foe_a_hp = battle.mon(p2()).max_hp;
    let foe_b = MonRef { side: 1, slot: 1 };
    let foe_b_hp = battle.mon(foe_b).max_hp;
    let mut hooks = NoHooks;
    let mut oracle = FixedDamage(30);
    let mut actions = MoveActions::new(&mut battle, &mut hooks, &mut oracle);
    actions
        .run_move(
            "Clanging Scales",
            p1(),
            None,
            None,
            Some("Clangorous Soulblaze"),
            false,
        )
        .expect("move runs");

    assert!(log_contains(&battle, "|move|p1a: Kommo-o|Clangorous Soulblaze"));
    assert_eq!(battle.mon(p2()).hp, foe_a_hp - 30);
    assert_eq!(battle.mon(foe_b).hp, foe_b_hp - 30);
    for stat in ["atk", "def", "spa", "spd", "spe"] {
        assert!(log_contains(
            &battle,
            &format!("|-boost|p1a: Kommo-o|{stat}|1")
        ));
    }
    // The base move's own shed-scales drop does not carry over.
    assert!(!log_contains(&battle, "|-unboost|p1a: Kommo-o"));
    assert!(battle.sides[0].z_move_used);
}

#[test]
fn illusion_breaks_before_the_z_power_flares() {
    let mut battle = BattleState::singles(
        make_pokemon("pikachu", &["thunderbolt"], Some("Electrium Z")),
        make_pokemon("dragonite", &["tackle"], None),
        7,
    );
    battle.mon_mut(p1()).illusion = true;
    let mut hooks = NoHooks;
    let mut oracle = FixedDamage(60);
    let mut actions = MoveActions::new(&mut battle, &mut hooks, &mut oracle);
    actions
        .run_move("Thunderbolt", p1(), None, None, Some("Gigavolt Havoc"), false)
        .expect("move runs");

    assert!(!battle.mon(p1()).illusion);
    assert!(log_contains(&battle, "|-zpower|p1a: Pikachu"));
}

#[test]
fn weather_ball_z_follows_the_changed_type() {
    struct SunTyping;
    impl BattleHooks for SunTyping {
        fn single_event(
            &mut self,
            event: EventId,
            _battle: &mut BattleState,
            mv: &mut ActiveMove,
            _target: EventTarget,
            _source: Option<MonRef>,
        ) -> Outcome {
            if event == EventId::ModifyMove && mv.id == "weatherball" {
                mv.move_type = "Fire".to_string();
            }
            Outcome::Continue
        }
    }

    let mut battle = BattleState::singles(
        make_pokemon("pikachu", &["weatherball"], Some("Firium Z")),
        make_pokemon("dragonite", &["tackle"], None),
        7,
    );
    battle.weather = Some("sunnyday".to_string());
    let foe_hp = battle.mon(p2()).max_hp;
    let mut hooks = SunTyping;
    let mut oracle = FixedDamage(25);
    let mut actions = MoveActions::new(&mut battle, &mut hooks, &mut oracle);
    actions
        .run_move(
            "Weather Ball",
            p1(),
            None,
            None,
            Some("Inferno Overdrive"),
            false,
        )
        .expect("move runs");

    assert!(log_contains(&battle, "|move|p1a: Pikachu|Inferno Overdrive"));
    assert!(log_contains(&battle, "[from]move: Weather Ball"));
    assert_eq!(battle.mon(p2()).hp, foe_hp - 25);
    assert!(battle.sides[0].z_move_used);
}
