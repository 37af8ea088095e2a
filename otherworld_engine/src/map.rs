//! Map definitions.
//!
//! Any location the player can stand in is a "map", whether it's a cellar or a
//! forest. A map has a static description, named exits to other maps, items lying
//! on the ground, and ambient effects that hit the player on every entry.

use std::collections::BTreeMap;

use crate::effect::Effect;
use crate::inventory::Inventory;

/// Stable key of a map.
pub type MapId = String;

#[derive(Debug, Clone)]
pub struct Map {
    pub id: MapId,
    pub title: String,
    pub description: String,
    /// Exit name -> destination map id. Several exits may lead to the same map.
    pub exits: BTreeMap<String, MapId>,
    /// Items lying on the ground.
    pub inventory: Inventory,
    /// Templates copied onto the player every time the map is entered.
    pub ambient_effects: Vec<Effect>,
}

impl Map {
    /// Create an empty map with no exits, items or effects.
    pub fn new(id: &str, title: &str, description: &str) -> Map {
        Map {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            exits: BTreeMap::new(),
            inventory: Inventory::new("ground"),
            ambient_effects: Vec::new(),
        }
    }

    /// Destination of the named exit, if the map has one.
    pub fn exit_to(&self, name: &str) -> Option<&MapId> {
        self.exits.get(name)
    }

    pub fn exit_names(&self) -> Vec<&str> {
        self.exits.keys().map(String::as_str).collect()
    }

    /// Fresh copies of the ambient effects, one set per entry.
    pub fn instantiate_ambient_effects(&self) -> Vec<Effect> {
        self.ambient_effects.clone()
    }
}
