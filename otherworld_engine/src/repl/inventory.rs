//! `repl::inventory` module
//!
//! Contains repl loop handlers for commands that move items in or out of the
//! player's inventory.

use crate::{
    error::GameError,
    repl::Response,
    style::GameStyle,
    view::{render_inventory, render_new_effects},
    world::GameState,
};

use log::info;

/// Moves one unit of an item from the ground into the player's inventory.
/// # Errors
/// - `ItemNotFound`, `FlagMismatch` or `InventoryFull` from the transfer
pub fn take_handler(world: &mut GameState, code: &str) -> Result<Response, GameError> {
    let item = world.take(code)?;
    Ok(Response::say(format!("You've taken the {}.", item.name.item_style())))
}

/// Puts one unit of a carried item down on the current map.
/// # Errors
/// - `ItemNotFound`, `FlagMismatch` or `InventoryFull` from the transfer
pub fn drop_handler(world: &mut GameState, code: &str) -> Result<Response, GameError> {
    let item = world.drop(code)?;
    Ok(Response::say(format!("You've dropped the {}.", item.name.item_style())))
}

/// Consumes one unit of a carried item, starting any effects it carries.
/// # Errors
/// - `ItemNotFound` or `FlagMismatch` from the transfer
pub fn consume_handler(world: &mut GameState, code: &str) -> Result<Response, GameError> {
    let item = world.consume(code)?;
    let mut message = format!("You've consumed the {}.", item.name.item_style());
    if !item.effect_templates.is_empty() {
        message.push('\n');
        message.push_str(&render_new_effects(&item.effect_templates));
    }
    Ok(Response::say(message))
}

/// Lists the player's inventory and makes it the target of `examine`.
pub fn inv_handler(world: &mut GameState) -> Response {
    let lines = world.show_inventory();
    info!("{} checked inventory ({} entries)", world.player.name(), lines.len());
    Response::say(render_inventory(&lines))
}
