//! Player -- the one character controlled by the person at the keyboard.
use crate::character::Character;
use crate::effect::CharacterStats;

/// Which inventory `examine` resolves slot codes against.
///
/// Set by the last `go` / `inventory` (player's own) or `look` (ground of the current map).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InventoryContext {
    #[default]
    Player,
    CurrentMap,
}

#[derive(Debug, Clone)]
pub struct Player {
    pub character: Character,
    pub description: String,
    pub level: u32,
    pub inventory_context: InventoryContext,
}

impl Player {
    pub fn new(name: &str, stats: CharacterStats) -> Player {
        Player {
            character: Character::new(name, stats),
            description: String::new(),
            level: 1,
            inventory_context: InventoryContext::Player,
        }
    }

    pub fn name(&self) -> &str {
        &self.character.name
    }

    pub fn stats(&self) -> &CharacterStats {
        self.character.stats()
    }
}
