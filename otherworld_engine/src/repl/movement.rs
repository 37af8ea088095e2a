//! `repl::movement` module
//!
//! Contains repl loop handlers for commands that move the player between maps.

use crate::{error::GameError, repl::Response, view::MapView, view::render_map, world::GameState};

/// Move the player through the named exit and describe where they arrived.
/// # Errors
/// - `UnknownExit` if the current map has no exit by that name
/// - `MapUnavailable` if the exit points at a map that doesn't exist
pub fn go_handler(world: &mut GameState, exit: &str) -> Result<Response, GameError> {
    let arrived = MapView::from(world.go(exit)?);
    Ok(Response::say(format!("You go {exit}.\n\n{}", render_map(&arrived))))
}
