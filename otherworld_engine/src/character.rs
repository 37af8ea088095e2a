//! Characters: anything with stats, an inventory and active effects.

use log::info;

use crate::effect::{CharacterStats, Effect, EffectTick, tick_effects};
use crate::inventory::Inventory;

/// A living entity that effects can act upon.
#[derive(Debug, Clone)]
pub struct Character {
    pub name: String,
    pub inventory: Inventory,
    stats: CharacterStats,
    effects: Vec<Effect>,
}

impl Character {
    pub fn new(name: &str, stats: CharacterStats) -> Character {
        Character {
            name: name.to_string(),
            inventory: Inventory::new("inventory"),
            stats,
            effects: Vec::new(),
        }
    }

    pub fn stats(&self) -> &CharacterStats {
        &self.stats
    }

    /// Currently active effects, oldest first.
    pub fn effects(&self) -> &[Effect] {
        &self.effects
    }

    /// Queue an effect; it first acts on the next tick.
    pub fn add_effect(&mut self, effect: Effect) {
        info!(
            "{} gains effect '{}' ({} {:+} for {} turns)",
            self.name, effect.name, effect.stat, effect.magnitude, effect.remaining_duration
        );
        self.effects.push(effect);
    }

    pub fn is_dead(&self) -> bool {
        self.stats.is_dead()
    }

    /// Run one effect tick and adopt its resulting stats and effect list.
    pub fn tick_effects(&mut self) -> EffectTick {
        let tick = tick_effects(self.stats, &self.effects, &self.name);
        self.stats = tick.stats;
        self.effects.clone_from(&tick.effects);
        tick
    }
}
