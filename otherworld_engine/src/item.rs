//! Item definitions and the catalog that owns them.
//!
//! Definitions are immutable once loaded. Inventories hold shared `Rc` handles to
//! them plus a count, so no per-item mutable state ever lives here.

use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use otherworld_data::{ItemDef, ItemFlag};

use crate::effect::Effect;

/// Stable key of an item definition.
pub type ItemId = String;

/// Everything known about one kind of item.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemDefinition {
    pub id: ItemId,
    /// Short name used in messages ("torch").
    pub name: String,
    /// Display title used in listings ("A burning torch").
    pub title: String,
    pub description: String,
    pub weight: f32,
    pub flags: HashSet<ItemFlag>,
    /// Effects instantiated and applied to whoever consumes the item.
    pub effect_templates: Vec<Effect>,
}

impl ItemDefinition {
    /// Returns `true` if the item carries the given capability flag.
    pub fn has_flag(&self, flag: ItemFlag) -> bool {
        self.flags.contains(&flag)
    }
}

impl From<&ItemDef> for ItemDefinition {
    fn from(def: &ItemDef) -> Self {
        Self {
            id: def.id.clone(),
            name: def.name.clone(),
            title: def.title.clone(),
            description: def.description.clone(),
            weight: def.weight,
            flags: def.flags.iter().copied().collect(),
            effect_templates: def.effects.iter().map(Effect::from).collect(),
        }
    }
}

/// Registry of all item definitions, keyed by id.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: HashMap<ItemId, Rc<ItemDefinition>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a definition, replacing any previous one with the same id.
    pub fn insert(&mut self, item: ItemDefinition) -> Rc<ItemDefinition> {
        let shared = Rc::new(item);
        self.items.insert(shared.id.clone(), Rc::clone(&shared));
        shared
    }

    pub fn get(&self, id: &str) -> Option<&Rc<ItemDefinition>> {
        self.items.get(id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
