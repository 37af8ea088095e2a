//! Loader utilities for building a [`GameState`] from serialized data.
//!
//! World content is a single RON file holding a `WorldDef`. It is validated as a
//! whole before anything is built, so content errors are reported together.

pub mod player;
pub mod worlddef;

use std::path::Path;

use anyhow::{Context, Result, bail};
use log::info;
use otherworld_data::WorldDef;

use crate::data_paths::data_path;
use crate::loader::worlddef::{build_game_from_def, load_worlddef};
use crate::world::GameState;

/// Load the game from `world.ron` in the data directory.
///
/// # Errors
/// Errors bubble up from file IO, deserialization, or content validation.
pub fn load_world() -> Result<GameState> {
    load_world_from(&data_path("world.ron"))
}

/// Load the game from a specific RON file.
///
/// # Errors
/// Errors bubble up from file IO, deserialization, or content validation.
pub fn load_world_from(path: &Path) -> Result<GameState> {
    let worlddef = load_worlddef(path).context("while loading worlddef from file")?;
    validate_worlddef(&worlddef)?;
    let world = build_game_from_def(&worlddef, &mut rand::rng()).context("while building game from worlddef")?;
    info!("{} items added to GameState", world.catalog.len());
    info!("{} maps added to GameState", world.maps.len());
    info!(
        "player \"{}\" added to GameState at {}",
        world.player.name(),
        world.current_map_id()
    );
    Ok(world)
}

/// Validate the WorldDef and return a single aggregated error.
fn validate_worlddef(def: &WorldDef) -> Result<()> {
    let errors = otherworld_data::validate_world(def);
    if errors.is_empty() {
        return Ok(());
    }
    let details = errors
        .into_iter()
        .map(|err| format!("- {err}"))
        .collect::<Vec<_>>()
        .join("\n");
    bail!("content validation failed:\n{details}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const TINY_WORLD: &str = r#"(
        game: (
            title: "Tiny",
            player: (name: "Tess", start_map: "hut", max_hp: 5, attack: Some(2), defense: Some(2)),
        ),
        items: [
            (id: "cup", name: "cup", title: "A tin cup", description: "Dented.", weight: 0.3, flags: [collectable]),
        ],
        maps: [
            (id: "hut", title: "Hut", description: "Cramped.", items: [(item: "cup")]),
        ],
    )"#;

    #[test]
    fn loads_a_world_from_ron() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("world.ron");
        fs::write(&path, TINY_WORLD).unwrap();

        let world = load_world_from(&path).unwrap();
        assert_eq!(world.title, "Tiny");
        assert_eq!(world.current_map_id(), "hut");
        assert_eq!(world.current_map().unwrap().inventory.len(), 1);
        assert_eq!(world.status().hp, 5);
    }

    #[test]
    fn invalid_content_is_reported_as_one_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("world.ron");
        fs::write(&path, TINY_WORLD.replace("start_map: \"hut\"", "start_map: \"castle\"")).unwrap();

        let err = load_world_from(&path).unwrap_err();
        assert!(format!("{err}").contains("content validation failed"));
        assert!(format!("{err}").contains("castle"));
    }

    #[test]
    fn unreadable_files_carry_context() {
        let dir = tempdir().unwrap();
        let err = load_world_from(&dir.path().join("missing.ron")).unwrap_err();
        assert!(format!("{err:#}").contains("while loading worlddef from file"));
    }

    #[test]
    fn malformed_ron_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("world.ron");
        fs::write(&path, "(game: oops").unwrap();
        assert!(load_world_from(&path).is_err());
    }
}
