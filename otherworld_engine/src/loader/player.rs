//! Player loading helpers.
//!
//! Turns the `PlayerDef` from the world file into a [`Player`], rolling any
//! combat stats the content leaves out and filling the starting inventory.

use anyhow::{Context, Result};
use log::info;
use rand::Rng;

use otherworld_data::PlayerDef;

use crate::effect::CharacterStats;
use crate::item::Catalog;
use crate::loader::worlddef::fill_inventory;
use crate::player::Player;

/// Number of six-sided dice summed for an unspecified stat.
const STAT_DICE: u32 = 3;

/// Roll a combat stat as the sum of three six-sided dice.
pub fn roll_stat<R: Rng + ?Sized>(rng: &mut R) -> i32 {
    (0..STAT_DICE).map(|_| rng.random_range(1..=6)).sum()
}

/// Build the player character from its definition.
/// # Errors
/// - if a starting inventory stack names an unknown item or overflows the inventory
pub fn build_player<R: Rng + ?Sized>(def: &PlayerDef, catalog: &Catalog, rng: &mut R) -> Result<Player> {
    let attack = def.attack.unwrap_or_else(|| roll_stat(rng));
    let defense = def.defense.unwrap_or_else(|| roll_stat(rng));
    let mut player = Player::new(&def.name, CharacterStats::new(def.max_hp, attack, defense));
    player.description.clone_from(&def.description);
    player.level = def.level;
    fill_inventory(&mut player.character.inventory, &def.inventory, catalog)
        .context("filling the player's starting inventory")?;
    info!(
        "player '{}' built: hp {}, attack {attack}, defense {defense}, {} inventory entries",
        def.name,
        def.max_hp,
        player.character.inventory.len()
    );
    Ok(player)
}
