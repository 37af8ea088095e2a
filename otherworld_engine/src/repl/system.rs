//! `repl::system` module
//!
//! Contains repl loop handlers for commands that affect the session rather than the world.

use log::info;

use crate::{repl::Response, view::render_help, world::GameState};

/// Print the list of available commands.
pub fn help_handler() -> Response {
    Response::say(render_help())
}

/// Ask the REPL to stop after this turn.
pub fn quit_handler(world: &GameState) -> Response {
    info!("{} chose to quit after {} turns", world.player.name(), world.turn_count);
    Response::quit("Exiting the game.")
}
