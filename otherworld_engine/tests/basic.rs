use oe::effect::Effect;
use oe::error::GameError;
use oe::inventory::MAX_SLOTS;
use oe::item::ItemDefinition;
use oe::player::InventoryContext;
use oe::repl::{handle_line, run_turn};
use oe::*;
use otherworld_data::{ItemFlag, StatKind};
use otherworld_engine as oe;

use std::fs;
use tempfile::TempDir;

const WORLD: &str = r#"(
    game: (
        title: "Test World",
        intro: "Testing.",
        player: (name: "Tester", start_map: "start", max_hp: 10, attack: Some(3), defense: Some(3)),
    ),
    items: [
        (id: "torch", name: "torch", title: "A torch", description: "Unlit.", weight: 1.0, flags: [collectable]),
        (
            id: "berry", name: "berry", title: "A red berry", description: "Juicy.", weight: 0.1,
            flags: [collectable, consumable],
            effects: [(name: "sugar rush", stat: hp, magnitude: 1, duration: 2)],
        ),
    ],
    maps: [
        (
            id: "start", title: "Clearing", description: "Grass.",
            exits: [(name: "north", to: "forest")],
            items: [(item: "torch")],
        ),
        (
            id: "forest", title: "Dark Forest", description: "Trees.",
            exits: [(name: "back", to: "start")],
            items: [(item: "berry", count: 2)],
            effects: [(name: "chilling mist", stat: hp, magnitude: -1, duration: 2)],
        ),
    ],
)"#;

/// Keeps the temp dir alive alongside the loaded game.
fn load_test_world() -> (TempDir, GameState) {
    colored::control::set_override(false);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("world.ron");
    fs::write(&path, WORLD).unwrap();
    let world = load_world_from(&path).unwrap();
    (dir, world)
}

#[test]
fn test_lib_version() {
    assert!(!oe::OTHERWORLD_VERSION.is_empty());
}

#[test]
fn test_inventory_aliases_are_equivalent() {
    let (_dir, mut world) = load_test_world();
    let outputs: Vec<_> = ["i", "inv", "inventory", "INV"]
        .into_iter()
        .map(|alias| handle_line(&mut world, alias).message)
        .collect();
    assert!(outputs.windows(2).all(|pair| pair[0] == pair[1]));
    assert_eq!(outputs[0], "Your inventory is empty.");
}

#[test]
fn test_navigation_applies_ambient_effects() {
    let (_dir, mut world) = load_test_world();

    let outcome = run_turn(&mut world, "go north").unwrap();
    assert!(outcome.response.message.contains("Dark Forest"));
    assert_eq!(world.current_map_id(), "forest");
    // the mist acts on the same turn it was picked up
    assert_eq!(outcome.effects_log.len(), 1);
    assert_eq!(world.status().hp, 9);
    assert_eq!(world.player.character.effects().len(), 1);

    let outcome = run_turn(&mut world, "go south").unwrap();
    assert!(outcome.response.message.contains("Unknown exit `south`."));
    assert_eq!(world.current_map_id(), "forest");
    assert!(!outcome.finished());
}

#[test]
fn test_take_torch_then_empty_ground() {
    let (_dir, mut world) = load_test_world();

    assert_eq!(world.take("a").unwrap().id, "torch");
    assert_eq!(
        world.inventory(InventoryContext::Player).unwrap().entry_by_code("a").unwrap().item.id,
        "torch"
    );
    assert!(world.current_map().unwrap().inventory.is_empty());
    assert_eq!(world.take("a").unwrap_err(), GameError::ItemNotFound("a".into()));

    let message = handle_line(&mut world, "take a").message;
    assert!(message.contains("No such item available (a)."));
}

#[test]
fn test_take_into_full_inventory_is_atomic() {
    let (_dir, mut world) = load_test_world();
    for n in 0..MAX_SLOTS {
        let pebble = world.catalog.insert(ItemDefinition {
            id: format!("pebble{n}"),
            name: "pebble".into(),
            title: "A pebble".into(),
            description: "Round.".into(),
            weight: 0.1,
            flags: [ItemFlag::Collectable].into_iter().collect(),
            effect_templates: Vec::new(),
        });
        world.player.character.inventory.add(&pebble, 1).unwrap();
    }

    let outcome = run_turn(&mut world, "take a").unwrap();
    assert!(outcome.response.message.contains("The inventory is full."));
    assert_eq!(world.current_map().unwrap().inventory.len(), 1);
    assert_eq!(world.player.character.inventory.len(), MAX_SLOTS);
}

#[test]
fn test_drop_onto_full_ground_is_atomic() {
    let (_dir, mut world) = load_test_world();
    world.take("a").unwrap();
    for n in 0..MAX_SLOTS {
        let pebble = world.catalog.insert(ItemDefinition {
            id: format!("pebble{n}"),
            name: "pebble".into(),
            title: "A pebble".into(),
            description: "Round.".into(),
            weight: 0.1,
            flags: [ItemFlag::Collectable].into_iter().collect(),
            effect_templates: Vec::new(),
        });
        world.current_map_mut().unwrap().inventory.add(&pebble, 1).unwrap();
    }
    let ground_before = world.current_map().unwrap().inventory.clone();
    let pack_before = world.player.character.inventory.clone();

    let outcome = run_turn(&mut world, "drop a").unwrap();
    assert!(outcome.response.message.contains("The ground is full."));
    assert_eq!(world.current_map().unwrap().inventory, ground_before);
    assert_eq!(world.player.character.inventory, pack_before);
}

#[test]
fn test_mixed_case_exits_are_rejected_at_load() {
    colored::control::set_override(false);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("world.ron");
    fs::write(&path, WORLD.replace(r#"(name: "north", to: "forest")"#, r#"(name: "North", to: "forest")"#)).unwrap();

    let err = load_world_from(&path).unwrap_err();
    assert!(format!("{err}").contains("exit 'North' of map 'start' must be one lowercase word"));
}

#[test]
fn test_consume_and_effects_over_turns() {
    let (_dir, mut world) = load_test_world();
    run_turn(&mut world, "go north");
    run_turn(&mut world, "look");
    let outcome = run_turn(&mut world, "take a").unwrap();
    assert!(outcome.response.message.contains("berry"));
    run_turn(&mut world, "take a");
    assert!(world.current_map().unwrap().inventory.is_empty());
    // mist expired after its second tick
    assert_eq!(world.status().hp, 8);
    assert!(world.player.character.effects().is_empty());

    let outcome = run_turn(&mut world, "consume a").unwrap();
    assert!(outcome.response.message.contains("sugar rush"));
    assert_eq!(world.status().hp, 9);
    assert_eq!(world.player.character.inventory.entry_by_code("a").unwrap().count, 1);
}

#[test]
fn test_death_ends_the_session() {
    let (_dir, mut world) = load_test_world();
    world.player.character = oe::character::Character::new(
        "Tester",
        oe::effect::CharacterStats::new(10, 3, 3).with_hp(2),
    );
    world.player.character.add_effect(Effect::new("curse", StatKind::Hp, -5, 1));

    let outcome = run_turn(&mut world, "look").unwrap();
    assert!(outcome.died);
    assert!(outcome.finished());
    assert_eq!(outcome.effects_log.last().map(String::as_str), Some("Tester died."));
    assert!(world.is_over());
    assert_eq!(world.status().hp, -3);
}

#[test]
fn test_errors_and_quit_still_take_a_turn() {
    let (_dir, mut world) = load_test_world();
    assert!(run_turn(&mut world, "   ").is_none());
    assert_eq!(world.turn_count, 0);

    let outcome = run_turn(&mut world, "dance").unwrap();
    assert!(outcome.response.message.contains("Unknown command `dance`."));
    assert!(!outcome.finished());

    let outcome = run_turn(&mut world, "q").unwrap();
    assert_eq!(outcome.response.message, "Exiting the game.");
    assert!(outcome.finished());
    assert_eq!(world.turn_count, 2);
}

#[test]
fn test_examine_follows_last_listing() {
    let (_dir, mut world) = load_test_world();
    assert!(handle_line(&mut world, "examine a").message.contains("No such item"));
    handle_line(&mut world, "look");
    assert!(handle_line(&mut world, "ex a").message.contains("Unlit."));
    handle_line(&mut world, "inventory");
    assert!(handle_line(&mut world, "ex a").message.contains("No such item"));
}

#[test]
fn test_bundled_world_is_valid() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("data/world.ron");
    let world = load_world_from(&path).unwrap();
    assert_eq!(world.current_map_id(), "start");
    assert!(world.maps.contains_key("forest"));
}
