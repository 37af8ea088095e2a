use serde::{Deserialize, Serialize};

/// Stable identifier used across WorldDef references.
pub type Id = String;

/// Top-level content loaded by the engine.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WorldDef {
    pub game: GameDef,
    #[serde(default)]
    pub items: Vec<ItemDef>,
    #[serde(default)]
    pub maps: Vec<MapDef>,
}

/// Game-level metadata and startup configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GameDef {
    pub title: String,
    #[serde(default)]
    pub intro: String,
    pub player: PlayerDef,
}

/// Starting configuration of the player character.
///
/// `attack` and `defense` are rolled at startup when omitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerDef {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub start_map: Id,
    pub max_hp: i32,
    #[serde(default)]
    pub attack: Option<i32>,
    #[serde(default)]
    pub defense: Option<i32>,
    #[serde(default = "default_level")]
    pub level: u32,
    #[serde(default)]
    pub inventory: Vec<StackDef>,
}

impl Default for PlayerDef {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            start_map: String::new(),
            max_hp: 1,
            attack: None,
            defense: None,
            level: default_level(),
            inventory: Vec::new(),
        }
    }
}

fn default_level() -> u32 {
    1
}

/// Capability tags that gate what the player may do with an item.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum ItemFlag {
    Collectable,
    Consumable,
}

impl std::fmt::Display for ItemFlag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ItemFlag::Collectable => write!(f, "collectable"),
            ItemFlag::Consumable => write!(f, "consumable"),
        }
    }
}

/// Character statistics an effect can modify.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum StatKind {
    Hp,
    Attack,
    Defense,
}

impl std::fmt::Display for StatKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatKind::Hp => write!(f, "hp"),
            StatKind::Attack => write!(f, "attack"),
            StatKind::Defense => write!(f, "defense"),
        }
    }
}

/// Template for a timed stat modifier.
///
/// Example: a poisonous mushroom carrying `(stat: hp, magnitude: -2, duration: 10)`
/// takes 2 hp every turn for 10 turns.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EffectDef {
    pub name: String,
    pub stat: StatKind,
    pub magnitude: i32,
    pub duration: i32,
}

/// Item definition used to populate the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemDef {
    pub id: Id,
    pub name: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub weight: f32,
    #[serde(default)]
    pub flags: Vec<ItemFlag>,
    #[serde(default)]
    pub effects: Vec<EffectDef>,
}

/// A location node and its connections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapDef {
    pub id: Id,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub exits: Vec<ExitDef>,
    #[serde(default)]
    pub items: Vec<StackDef>,
    /// Effects applied to the player every time the map is entered.
    #[serde(default)]
    pub effects: Vec<EffectDef>,
}

/// Named exit leading to another map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExitDef {
    pub name: String,
    pub to: Id,
}

/// A number of units of one item, placed in an inventory at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StackDef {
    pub item: Id,
    #[serde(default = "default_count")]
    pub count: u32,
}

fn default_count() -> u32 {
    1
}
