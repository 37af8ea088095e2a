//! Recoverable errors raised while handling player commands.
//!
//! None of these end the game. The REPL reports them to the player and carries on;
//! the `Display` text is what the player sees.

use otherworld_data::ItemFlag;
use thiserror::Error;

/// Everything that can go wrong with a single command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("Unknown command `{0}`. Type `help` for a list of commands.")]
    UnknownCommand(String),
    #[error("Use `{usage}`.")]
    Usage { command: &'static str, usage: &'static str },
    #[error("Unknown exit `{0}`.")]
    UnknownExit(String),
    #[error("Map not available (`{0}`).")]
    MapUnavailable(String),
    #[error("No such item available ({0}).")]
    ItemNotFound(String),
    #[error("`{0}` is not an item code. Use a letter from a to z.")]
    InvalidCode(String),
    #[error("The {item} is not {flag}.")]
    FlagMismatch { item: String, flag: ItemFlag },
    #[error("The {0} is full.")]
    InventoryFull(String),
    #[error("Item `{0}` is not in the catalog.")]
    UnknownItem(String),
}
