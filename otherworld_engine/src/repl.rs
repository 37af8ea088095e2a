//! REPL and command handling utilities.
//!
//! The game runs in a read-eval-print loop. This module turns an input line into
//! a [`Response`] via the command handlers in its submodules, closes every turn
//! with an effect tick, and drives the interactive loop.

mod input;
pub mod inventory;
pub mod look;
pub mod movement;
pub mod system;

pub use inventory::*;
pub use look::*;
pub use movement::*;
pub use system::*;

use crate::command::{Command, parse_command};
use crate::error::GameError;
use crate::style::GameStyle;
use crate::view::{prompt, render_death, render_effect_log};
use crate::world::GameState;

use anyhow::Result;
use log::{info, warn};

use input::{InputEvent, InputManager};

/// Control flow signal used by handlers to exit the REPL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplControl {
    Continue,
    Quit,
}

/// What a command produced: text for the player and whether the session should end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// May be empty, in which case nothing needs printing.
    pub message: String,
    pub control: ReplControl,
}
impl Response {
    pub fn say(message: impl Into<String>) -> Response {
        Response {
            message: message.into(),
            control: ReplControl::Continue,
        }
    }

    pub fn quit(message: impl Into<String>) -> Response {
        Response {
            message: message.into(),
            control: ReplControl::Quit,
        }
    }

    pub fn should_end(&self) -> bool {
        self.control == ReplControl::Quit
    }
}

/// Everything that happened during one turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnOutcome {
    pub response: Response,
    /// Lines from the end-of-turn effect tick.
    pub effects_log: Vec<String>,
    pub died: bool,
}
impl TurnOutcome {
    pub fn finished(&self) -> bool {
        self.died || self.response.should_end()
    }
}

/// Route a parsed command to its handler.
///
/// # Errors
/// - any recoverable [`GameError`] raised by the handler
pub fn dispatch(world: &mut GameState, command: &Command) -> Result<Response, GameError> {
    match command {
        Command::Consume(code) => consume_handler(world, code),
        Command::Drop(code) => drop_handler(world, code),
        Command::Examine(code) => examine_handler(world, code),
        Command::Go(exit) => go_handler(world, exit),
        Command::Help => Ok(help_handler()),
        Command::Inventory => Ok(inv_handler(world)),
        Command::Look => look_handler(world),
        Command::Quit => Ok(quit_handler(world)),
        Command::Take(code) => take_handler(world, code),
    }
}

/// Parse and execute one input line. Failures become an error message; they never end the game.
pub fn handle_line(world: &mut GameState, input: &str) -> Response {
    match parse_command(input).and_then(|command| dispatch(world, &command)) {
        Ok(response) => response,
        Err(err) => {
            warn!("command '{}' failed: {err}", input.trim());
            Response::say(format!("{} {err}", "Error:".error_style()))
        },
    }
}

/// Play one turn: handle the line, then tick the player's effects.
///
/// The tick runs after every non-blank line, whether the command succeeded, failed
/// or asked to quit, so a lethal effect ends the game no matter what was typed.
/// Blank input is not a turn and returns `None`.
pub fn run_turn(world: &mut GameState, input: &str) -> Option<TurnOutcome> {
    if input.trim().is_empty() {
        return None;
    }
    let response = handle_line(world, input);
    let tick = world.end_turn();
    Some(TurnOutcome {
        response,
        effects_log: tick.log,
        died: tick.died,
    })
}

/// Run the main read–eval–print loop until the player quits, dies or interrupts.
///
/// # Errors
/// - if input can no longer be read
pub fn run_repl(world: &mut GameState) -> Result<()> {
    let mut input_manager = InputManager::new();
    loop {
        info!("================> BEGIN TURN {} <================", world.turn_count + 1);
        let line = match input_manager.read_line(&prompt(world.status()))? {
            InputEvent::Line(line) => line,
            InputEvent::Eof => "quit".to_string(),
            InputEvent::Interrupted => {
                info!("{} interrupted the session", world.player.name());
                eprintln!("Interrupted by user.");
                return Ok(());
            },
        };

        let Some(outcome) = run_turn(world, &line) else {
            continue;
        };
        if !outcome.response.message.is_empty() {
            println!("\n{}", outcome.response.message);
        }
        if !outcome.effects_log.is_empty() {
            println!("\n{}", render_effect_log(&outcome.effects_log));
        }
        if outcome.died {
            println!("\n{}", render_death(world.player.name()));
        }
        if outcome.finished() {
            info!(
                "session over after {} turns ({})",
                world.turn_count,
                if outcome.died { "death" } else { "quit" }
            );
            break;
        }
    }
    Ok(())
}
