//! Data structures representing the running game.
//!
//! This module defines [`GameState`], which owns the item catalog, the map graph,
//! the player and the pointer to the player's current map. Every player command
//! ends up as one of its methods.

use std::collections::HashMap;
use std::rc::Rc;

use log::info;
use otherworld_data::ItemFlag;

use crate::effect::EffectTick;
use crate::error::GameError;
use crate::inventory::{Inventory, InventoryEntry};
use crate::item::{Catalog, ItemDefinition};
use crate::map::{Map, MapId};
use crate::player::{InventoryContext, Player};
use crate::view::{InventoryLine, MapView, StatusLine};

/// Complete state of the running game.
#[derive(Debug, Clone)]
pub struct GameState {
    pub title: String,
    pub intro: String,
    pub catalog: Catalog,
    pub maps: HashMap<MapId, Map>,
    pub player: Player,
    current_map: MapId,
    pub turn_count: usize,
}

impl GameState {
    /// Assemble a game with the player standing on `start_map`.
    ///
    /// # Errors
    /// - `MapUnavailable` if `start_map` is not among `maps`
    pub fn new(
        title: &str,
        catalog: Catalog,
        maps: HashMap<MapId, Map>,
        player: Player,
        start_map: &str,
    ) -> Result<GameState, GameError> {
        if !maps.contains_key(start_map) {
            return Err(GameError::MapUnavailable(start_map.to_string()));
        }
        info!(
            "new GameState '{title}': {} items, {} maps, starting at '{start_map}'",
            catalog.len(),
            maps.len()
        );
        Ok(GameState {
            title: title.to_string(),
            intro: String::new(),
            catalog,
            maps,
            player,
            current_map: start_map.to_string(),
            turn_count: 0,
        })
    }

    pub fn current_map_id(&self) -> &str {
        &self.current_map
    }

    /// Obtain a reference to the map the player is standing on.
    /// # Errors
    /// - if the current map id has gone missing from the map graph
    pub fn current_map(&self) -> Result<&Map, GameError> {
        self.maps
            .get(&self.current_map)
            .ok_or_else(|| GameError::MapUnavailable(self.current_map.clone()))
    }

    /// Obtain a mutable reference to the map the player is standing on.
    /// # Errors
    /// - if the current map id has gone missing from the map graph
    pub fn current_map_mut(&mut self) -> Result<&mut Map, GameError> {
        self.maps
            .get_mut(&self.current_map)
            .ok_or_else(|| GameError::MapUnavailable(self.current_map.clone()))
    }

    /// The inventory a context refers to right now.
    /// # Errors
    /// - if the context is the current map and it cannot be resolved
    pub fn inventory(&self, context: InventoryContext) -> Result<&Inventory, GameError> {
        match context {
            InventoryContext::Player => Ok(&self.player.character.inventory),
            InventoryContext::CurrentMap => Ok(&self.current_map()?.inventory),
        }
    }

    fn inventory_mut(&mut self, context: InventoryContext) -> Result<&mut Inventory, GameError> {
        match context {
            InventoryContext::Player => Ok(&mut self.player.character.inventory),
            InventoryContext::CurrentMap => Ok(&mut self.current_map_mut()?.inventory),
        }
    }

    /// Move the player through the named exit of the current map.
    ///
    /// On success the destination's ambient effects are applied (as fresh copies) and
    /// `examine` goes back to looking at the player's own inventory.
    ///
    /// # Errors
    /// - `UnknownExit` if the current map has no such exit
    /// - `MapUnavailable` if the exit leads to a map that was never loaded
    pub fn go(&mut self, exit: &str) -> Result<&Map, GameError> {
        let destination = self
            .current_map()?
            .exit_to(exit)
            .cloned()
            .ok_or_else(|| GameError::UnknownExit(exit.to_string()))?;
        let arriving_effects = self
            .maps
            .get(&destination)
            .ok_or_else(|| GameError::MapUnavailable(destination.clone()))?
            .instantiate_ambient_effects();

        info!("{} moved from '{}' to '{destination}' via '{exit}'", self.player.name(), self.current_map);
        self.current_map = destination;
        for fx in arriving_effects {
            self.player.character.add_effect(fx);
        }
        self.player.inventory_context = InventoryContext::Player;
        self.current_map()
    }

    /// Move one unit of the item at `code` out of `source`, into `target` if one is given.
    ///
    /// All checks happen before anything is mutated, so a failure leaves both
    /// inventories exactly as they were.
    ///
    /// # Errors
    /// - `ItemNotFound` if `code` doesn't address an entry of `source`
    /// - `FlagMismatch` if the item lacks `required`
    /// - `InventoryFull` if `target` has no room for a new entry
    pub fn transfer(
        &mut self,
        source: InventoryContext,
        code: &str,
        target: Option<InventoryContext>,
        required: ItemFlag,
    ) -> Result<Rc<ItemDefinition>, GameError> {
        let item = self
            .inventory(source)?
            .entry_by_code(code)
            .map(|entry| Rc::clone(&entry.item))
            .map_err(|_| GameError::ItemNotFound(code.to_string()))?;
        if !item.has_flag(required) {
            return Err(GameError::FlagMismatch {
                item: item.name.clone(),
                flag: required,
            });
        }
        if let Some(target) = target {
            self.inventory_mut(target)?.add(&item, 1)?;
        }
        self.inventory_mut(source)?.remove(&item.id, 1)?;
        Ok(item)
    }

    /// Pick up one unit of a collectable item lying on the current map.
    /// # Errors
    /// - see [`GameState::transfer`]
    pub fn take(&mut self, code: &str) -> Result<Rc<ItemDefinition>, GameError> {
        let item = self.transfer(
            InventoryContext::CurrentMap,
            code,
            Some(InventoryContext::Player),
            ItemFlag::Collectable,
        )?;
        info!("{} took '{}' from '{}'", self.player.name(), item.id, self.current_map);
        Ok(item)
    }

    /// Put one unit of a carried item down on the current map.
    /// # Errors
    /// - see [`GameState::transfer`]
    pub fn drop(&mut self, code: &str) -> Result<Rc<ItemDefinition>, GameError> {
        let item = self.transfer(
            InventoryContext::Player,
            code,
            Some(InventoryContext::CurrentMap),
            ItemFlag::Collectable,
        )?;
        info!("{} dropped '{}' in '{}'", self.player.name(), item.id, self.current_map);
        Ok(item)
    }

    /// Eat / drink one unit of a carried item and start its effects.
    /// # Errors
    /// - see [`GameState::transfer`]
    pub fn consume(&mut self, code: &str) -> Result<Rc<ItemDefinition>, GameError> {
        let item = self.transfer(InventoryContext::Player, code, None, ItemFlag::Consumable)?;
        info!("{} consumed '{}'", self.player.name(), item.id);
        for fx in &item.effect_templates {
            self.player.character.add_effect(fx.clone());
        }
        Ok(item)
    }

    /// Resolve `code` in whichever inventory was made current last.
    /// # Errors
    /// - `ItemNotFound` if the code addresses nothing there
    pub fn examine(&self, code: &str) -> Result<InventoryEntry, GameError> {
        self.inventory(self.player.inventory_context)?
            .entry_by_code(code)
            .cloned()
            .map_err(|_| GameError::ItemNotFound(code.to_string()))
    }

    /// Snapshot the current map and point `examine` at its ground items.
    /// # Errors
    /// - if the current map cannot be resolved
    pub fn look(&mut self) -> Result<MapView, GameError> {
        self.player.inventory_context = InventoryContext::CurrentMap;
        self.map_view()
    }

    /// Snapshot the player's inventory and point `examine` back at it.
    pub fn show_inventory(&mut self) -> Vec<InventoryLine> {
        self.player.inventory_context = InventoryContext::Player;
        InventoryLine::list(&self.player.character.inventory)
    }

    /// Tick the player's effects once, closing the turn.
    pub fn end_turn(&mut self) -> EffectTick {
        self.turn_count += 1;
        self.player.character.tick_effects()
    }

    pub fn is_over(&self) -> bool {
        self.player.character.is_dead()
    }

    /// Read-only snapshot of the current map for rendering.
    /// # Errors
    /// - if the current map cannot be resolved
    pub fn map_view(&self) -> Result<MapView, GameError> {
        Ok(MapView::from(self.current_map()?))
    }

    /// Read-only listing of either inventory, without changing what `examine` addresses.
    /// # Errors
    /// - if the context is the current map and it cannot be resolved
    pub fn inventory_view(&self, context: InventoryContext) -> Result<Vec<InventoryLine>, GameError> {
        Ok(InventoryLine::list(self.inventory(context)?))
    }

    pub fn status(&self) -> StatusLine {
        let stats = self.player.stats();
        StatusLine {
            hp: stats.hp(),
            max_hp: stats.max_hp(),
            level: self.player.level,
        }
    }
}
