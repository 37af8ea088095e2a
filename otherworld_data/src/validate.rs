use std::collections::HashSet;
use std::fmt;

use crate::*;

/// Number of addressable inventory slots (one per letter `a`..=`z`).
pub const INVENTORY_SLOTS: usize = 26;

/// Validation error for malformed or missing references in a WorldDef.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    DuplicateId { kind: &'static str, id: String },
    MissingReference { kind: &'static str, id: String, context: String },
    EmptySet { kind: &'static str },
    InvalidValue { context: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::DuplicateId { kind, id } => {
                write!(f, "duplicate {kind} id '{id}'")
            },
            ValidationError::MissingReference { kind, id, context } => {
                write!(f, "missing {kind} '{id}' ({context})")
            },
            ValidationError::EmptySet { kind } => {
                write!(f, "no {kind} definitions found")
            },
            ValidationError::InvalidValue { context } => {
                write!(f, "invalid value ({context})")
            },
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate cross-references and basic invariants in a WorldDef.
///
/// Exits pointing at unknown maps are not reported; the engine refuses the move
/// at runtime instead.
///
/// ```
/// use otherworld_data::{GameDef, ItemDef, MapDef, PlayerDef, WorldDef, validate_world};
///
/// let world = WorldDef {
///     game: GameDef {
///         title: "Demo".into(),
///         intro: "Intro".into(),
///         player: PlayerDef {
///             name: "Adventurer".into(),
///             start_map: "start".into(),
///             max_hp: 10,
///             ..PlayerDef::default()
///         },
///     },
///     items: vec![ItemDef {
///         id: "torch".into(),
///         name: "torch".into(),
///         title: "A torch".into(),
///         description: "It flickers.".into(),
///         weight: 1.0,
///         flags: Vec::new(),
///         effects: Vec::new(),
///     }],
///     maps: vec![MapDef {
///         id: "start".into(),
///         title: "Start".into(),
///         description: "A clearing.".into(),
///         exits: Vec::new(),
///         items: Vec::new(),
///         effects: Vec::new(),
///     }],
/// };
/// assert!(validate_world(&world).is_empty());
/// ```
pub fn validate_world(world: &WorldDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let mut items = HashSet::new();
    let mut maps = HashSet::new();

    if world.items.is_empty() {
        errors.push(ValidationError::EmptySet { kind: "item" });
    }
    if world.maps.is_empty() {
        errors.push(ValidationError::EmptySet { kind: "map" });
    }

    track_ids("item", world.items.iter().map(|i| i.id.as_str()), &mut items, &mut errors);
    track_ids("map", world.maps.iter().map(|m| m.id.as_str()), &mut maps, &mut errors);

    let player = &world.game.player;
    if player.start_map.trim().is_empty() {
        errors.push(ValidationError::InvalidValue {
            context: "player start map missing".to_string(),
        });
    } else {
        check_ref("map", &player.start_map, &maps, "player start map".to_string(), &mut errors);
    }
    if player.max_hp <= 0 {
        errors.push(ValidationError::InvalidValue {
            context: format!("player max_hp must be positive ({})", player.max_hp),
        });
    }
    validate_stacks(&player.inventory, &items, "player inventory", &mut errors);

    for item in &world.items {
        if item.weight < 0.0 || !item.weight.is_finite() {
            errors.push(ValidationError::InvalidValue {
                context: format!("item '{}' weight {}", item.id, item.weight),
            });
        }
    }

    for map in &world.maps {
        let mut exit_names = HashSet::new();
        for exit in &map.exits {
            if !is_command_word(&exit.name) {
                errors.push(ValidationError::InvalidValue {
                    context: format!("exit '{}' of map '{}' must be one lowercase word", exit.name, map.id),
                });
            }
            if !exit_names.insert(exit.name.as_str()) {
                errors.push(ValidationError::DuplicateId {
                    kind: "exit",
                    id: format!("{}.{}", map.id, exit.name),
                });
            }
        }
        validate_stacks(&map.items, &items, &format!("map '{}' items", map.id), &mut errors);
    }

    errors
}

/// Player input is lower-cased and split on whitespace, so only such words can be typed.
fn is_command_word(name: &str) -> bool {
    !name.is_empty() && !name.chars().any(char::is_whitespace) && name.to_lowercase() == name
}

fn validate_stacks(stacks: &[StackDef], items: &HashSet<String>, context: &str, errors: &mut Vec<ValidationError>) {
    let mut distinct = HashSet::new();
    for stack in stacks {
        check_ref("item", &stack.item, items, context.to_string(), errors);
        if stack.count == 0 {
            errors.push(ValidationError::InvalidValue {
                context: format!("{context}: zero count for '{}'", stack.item),
            });
        }
        distinct.insert(stack.item.as_str());
    }
    if distinct.len() > INVENTORY_SLOTS {
        errors.push(ValidationError::InvalidValue {
            context: format!("{context}: {} distinct items exceed {INVENTORY_SLOTS} slots", distinct.len()),
        });
    }
}

fn track_ids<'a>(
    kind: &'static str,
    ids: impl Iterator<Item = &'a str>,
    set: &mut HashSet<String>,
    errors: &mut Vec<ValidationError>,
) {
    for id in ids {
        if !set.insert(id.to_string()) {
            errors.push(ValidationError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
}

fn check_ref(kind: &'static str, id: &str, set: &HashSet<String>, context: String, errors: &mut Vec<ValidationError>) {
    if !set.contains(id) {
        errors.push(ValidationError::MissingReference {
            kind,
            id: id.to_string(),
            context,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(id: &str) -> MapDef {
        MapDef {
            id: id.to_string(),
            title: format!("Map {id}"),
            description: "Test map".into(),
            exits: Vec::new(),
            items: Vec::new(),
            effects: Vec::new(),
        }
    }

    fn item(id: &str) -> ItemDef {
        ItemDef {
            id: id.to_string(),
            name: id.to_string(),
            title: format!("Item {id}"),
            description: "Test item".into(),
            weight: 1.0,
            flags: vec![ItemFlag::Collectable],
            effects: Vec::new(),
        }
    }

    fn base_world() -> WorldDef {
        WorldDef {
            game: GameDef {
                title: "Demo".into(),
                intro: "Intro".into(),
                player: PlayerDef {
                    name: "Adventurer".into(),
                    start_map: "start".into(),
                    max_hp: 10,
                    ..PlayerDef::default()
                },
            },
            items: vec![item("torch")],
            maps: vec![map("start")],
        }
    }

    #[test]
    fn base_world_is_valid() {
        assert!(validate_world(&base_world()).is_empty());
    }

    #[test]
    fn duplicate_ids_are_reported() {
        let mut world = base_world();
        world.maps = vec![map("start"), map("start")];

        let errors = validate_world(&world);
        assert!(
            errors
                .iter()
                .any(|err| matches!(err, ValidationError::DuplicateId { kind, id } if *kind == "map" && id == "start"))
        );
    }

    #[test]
    fn missing_start_map_is_reported() {
        let mut world = base_world();
        world.game.player.start_map = "nowhere".into();

        let errors = validate_world(&world);
        assert!(errors.iter().any(|err| matches!(err, ValidationError::MissingReference { kind, id, .. } if *kind == "map" && id == "nowhere")));
    }

    #[test]
    fn empty_content_sets_are_reported() {
        let mut world = base_world();
        world.items.clear();
        world.maps.clear();

        let errors = validate_world(&world);
        assert!(errors.contains(&ValidationError::EmptySet { kind: "item" }));
        assert!(errors.contains(&ValidationError::EmptySet { kind: "map" }));
    }

    #[test]
    fn unknown_ground_item_is_reported() {
        let mut world = base_world();
        world.maps[0].items.push(StackDef {
            item: "ghost".into(),
            count: 1,
        });

        let errors = validate_world(&world);
        assert!(errors.iter().any(|err| matches!(err, ValidationError::MissingReference { kind, id, .. } if *kind == "item" && id == "ghost")));
    }

    #[test]
    fn dangling_exit_is_tolerated() {
        let mut world = base_world();
        world.maps[0].exits.push(ExitDef {
            name: "north".into(),
            to: "unbuilt".into(),
        });
        assert!(validate_world(&world).is_empty());
    }

    #[test]
    fn exit_names_must_be_typeable() {
        let mut world = base_world();
        for name in ["North", "up stairs", "", "east"] {
            world.maps[0].exits.push(ExitDef {
                name: name.into(),
                to: "start".into(),
            });
        }

        let errors = validate_world(&world);
        let rejected: Vec<_> = errors
            .iter()
            .filter(|err| matches!(err, ValidationError::InvalidValue { context } if context.starts_with("exit")))
            .collect();
        assert_eq!(rejected.len(), 3);
        assert!(rejected[0].to_string().contains("'North'"));
    }

    #[test]
    fn duplicate_exit_names_and_bad_values_are_reported() {
        let mut world = base_world();
        world.maps[0].exits = vec![
            ExitDef {
                name: "north".into(),
                to: "start".into(),
            },
            ExitDef {
                name: "north".into(),
                to: "start".into(),
            },
        ];
        world.items[0].weight = -1.0;
        world.game.player.inventory.push(StackDef {
            item: "torch".into(),
            count: 0,
        });

        let errors = validate_world(&world);
        assert!(errors.iter().any(|err| matches!(err, ValidationError::DuplicateId { kind, .. } if *kind == "exit")));
        assert_eq!(
            errors
                .iter()
                .filter(|err| matches!(err, ValidationError::InvalidValue { .. }))
                .count(),
            2
        );
    }
}
