//! WorldDef loader and conversion helpers.
//!
//! Converts the serialized `WorldDef` data model into runtime engine structs.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::{info, warn};
use rand::Rng;

use otherworld_data::{MapDef, StackDef, WorldDef};

use crate::effect::Effect;
use crate::error::GameError;
use crate::inventory::Inventory;
use crate::item::{Catalog, ItemDefinition};
use crate::loader::player::build_player;
use crate::map::{Map, MapId};
use crate::world::GameState;

/// Load a `WorldDef` from a RON file.
pub fn load_worlddef(path: &Path) -> Result<WorldDef> {
    let text = fs::read_to_string(path).with_context(|| format!("reading worlddef from '{}'", path.display()))?;
    ron::from_str(&text).with_context(|| format!("parsing worlddef RON from '{}'", path.display()))
}

/// Convert a validated `WorldDef` into a ready-to-play `GameState`.
///
/// `rng` is only used to roll player stats the content leaves unspecified.
pub fn build_game_from_def<R: Rng + ?Sized>(def: &WorldDef, rng: &mut R) -> Result<GameState> {
    let mut catalog = Catalog::new();
    for item_def in &def.items {
        catalog.insert(ItemDefinition::from(item_def));
    }

    let mut maps = HashMap::new();
    for map_def in &def.maps {
        let map = map_from_def(map_def, &catalog)?;
        maps.insert(map.id.clone(), map);
    }
    warn_dangling_exits(&maps);

    let player = build_player(&def.game.player, &catalog, rng).context("while building player from definition")?;
    let mut game = GameState::new(&def.game.title, catalog, maps, player, &def.game.player.start_map)?;
    game.intro.clone_from(&def.game.intro);
    Ok(game)
}

fn map_from_def(def: &MapDef, catalog: &Catalog) -> Result<Map> {
    let mut map = Map::new(&def.id, &def.title, &def.description);
    for exit in &def.exits {
        map.exits.insert(exit.name.clone(), exit.to.clone());
    }
    fill_inventory(&mut map.inventory, &def.items, catalog).with_context(|| format!("placing items on map '{}'", def.id))?;
    map.ambient_effects = def.effects.iter().map(Effect::from).collect();
    Ok(map)
}

/// Add each stack of `stacks` to `inventory`, resolving item ids against the catalog.
pub(crate) fn fill_inventory(inventory: &mut Inventory, stacks: &[StackDef], catalog: &Catalog) -> Result<()> {
    for stack in stacks {
        let item = catalog
            .get(&stack.item)
            .ok_or_else(|| GameError::UnknownItem(stack.item.clone()))?;
        inventory.add(item, stack.count)?;
    }
    Ok(())
}

/// Exits to unknown maps are legal content; going through one fails at runtime.
fn warn_dangling_exits(maps: &HashMap<MapId, Map>) {
    let mut dangling = 0;
    for map in maps.values() {
        for (name, to) in &map.exits {
            if !maps.contains_key(to) {
                warn!("exit '{name}' of map '{}' leads to unknown map '{to}'", map.id);
                dangling += 1;
            }
        }
    }
    if dangling > 0 {
        info!("{dangling} exits lead nowhere");
    }
}
