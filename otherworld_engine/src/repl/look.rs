//! `repl::look` module
//!
//! Contains repl loop handlers for commands that describe the world without changing it.

use log::info;

use crate::{
    error::GameError,
    repl::Response,
    view::{render_item, render_map},
    world::GameState,
};

/// Describe the current map. Afterwards `examine` addresses the ground items.
/// # Errors
/// - if the current map cannot be resolved
pub fn look_handler(world: &mut GameState) -> Result<Response, GameError> {
    let view = world.look()?;
    info!("{} looked around '{}'", world.player.name(), world.current_map_id());
    Ok(Response::say(render_map(&view)))
}

/// Show the details of one item, addressed by its code in the last listed inventory.
/// # Errors
/// - `ItemNotFound` if the code addresses nothing
pub fn examine_handler(world: &mut GameState, code: &str) -> Result<Response, GameError> {
    let entry = world.examine(code)?;
    info!("{} examined '{}'", world.player.name(), entry.item.id);
    Ok(Response::say(render_item(&entry)))
}
