//! Command module
//!
//! Describes the commands available during gameplay and turns raw input lines into
//! [`Command`] values. Each command has a canonical name, a handful of aliases, a
//! one-line help text and a usage string shown when its arguments don't fit.
use crate::error::GameError;

/// Canonical command names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    Consume,
    Drop,
    Examine,
    Go,
    Help,
    Inventory,
    Look,
    Quit,
    Take,
}

/// Static description of one command.
#[derive(Debug, Clone, Copy)]
pub struct CommandSpec {
    pub verb: Verb,
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub help: &'static str,
    pub usage: &'static str,
}

/// All commands, sorted by name.
pub const COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        verb: Verb::Consume,
        name: "consume",
        aliases: &["c", "consume"],
        help: "Eat an item if it's consumable",
        usage: "consume <item code>",
    },
    CommandSpec {
        verb: Verb::Drop,
        name: "drop",
        aliases: &["d", "drop"],
        help: "Drop an item from player's inventory",
        usage: "drop <item code>",
    },
    CommandSpec {
        verb: Verb::Examine,
        name: "examine",
        aliases: &["ex", "examine"],
        help: "Examine an item in the player's inventory or on the current map",
        usage: "examine <item code>",
    },
    CommandSpec {
        verb: Verb::Go,
        name: "go",
        aliases: &["g", "go"],
        help: "Go to another map using the specified exit",
        usage: "go <exit name>",
    },
    CommandSpec {
        verb: Verb::Help,
        name: "help",
        aliases: &["h", "?", "help"],
        help: "List the available commands",
        usage: "help",
    },
    CommandSpec {
        verb: Verb::Inventory,
        name: "inventory",
        aliases: &["i", "inv", "inventory"],
        help: "List the player's inventory",
        usage: "inventory",
    },
    CommandSpec {
        verb: Verb::Look,
        name: "look",
        aliases: &["l", "look"],
        help: "Display a map description",
        usage: "look",
    },
    CommandSpec {
        verb: Verb::Quit,
        name: "quit",
        aliases: &["q", "quit"],
        help: "Quit the game",
        usage: "quit",
    },
    CommandSpec {
        verb: Verb::Take,
        name: "take",
        aliases: &["t", "take"],
        help: "Take an item from the floor / map",
        usage: "take <item code>",
    },
];

/// Find the command a word refers to, by any of its aliases.
pub fn lookup_alias(word: &str) -> Option<&'static CommandSpec> {
    COMMANDS
        .iter()
        .find(|spec| spec.aliases.iter().any(|alias| *alias == word))
}

/// Commands that can be executed by the player, with their parsed arguments.
#[derive(Debug, Clone, PartialEq, Eq, variantly::Variantly)]
pub enum Command {
    Consume(String),
    Drop(String),
    Examine(String),
    Go(String),
    Help,
    Inventory,
    Look,
    Quit,
    Take(String),
}

/// Parses an input line into a `Command`.
///
/// Input is lower-cased and split on whitespace. The first word selects the command;
/// the remaining words must match that command's argument shape exactly.
///
/// # Errors
/// - `UnknownCommand` if the first word is not an alias of any command
/// - `Usage` if the command exists but was given the wrong number of arguments
pub fn parse_command(input: &str) -> Result<Command, GameError> {
    let lowered = input.to_lowercase();
    let words: Vec<&str> = lowered.split_whitespace().collect();
    let Some((first, args)) = words.split_first() else {
        return Err(GameError::UnknownCommand(String::new()));
    };
    let spec = lookup_alias(first).ok_or_else(|| GameError::UnknownCommand((*first).to_string()))?;
    let command = match (spec.verb, args) {
        (Verb::Consume, [code]) => Command::Consume((*code).to_string()),
        (Verb::Drop, [code]) => Command::Drop((*code).to_string()),
        (Verb::Examine, [code]) => Command::Examine((*code).to_string()),
        (Verb::Go, [exit]) => Command::Go((*exit).to_string()),
        (Verb::Take, [code]) => Command::Take((*code).to_string()),
        (Verb::Help, []) => Command::Help,
        (Verb::Inventory, []) => Command::Inventory,
        (Verb::Look, []) => Command::Look,
        (Verb::Quit, []) => Command::Quit,
        _ => {
            return Err(GameError::Usage {
                command: spec.name,
                usage: spec.usage,
            });
        },
    };
    Ok(command)
}
