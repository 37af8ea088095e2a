#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

pub const OTHERWORLD_VERSION: &str = env!("CARGO_PKG_VERSION");

// Core modules
pub mod character;
pub mod command;
pub mod data_paths;
pub mod effect;
pub mod error;
pub mod inventory;
pub mod item;
pub mod loader;
pub mod map;
pub mod player;
pub mod repl;
pub mod style;
pub mod view;
pub mod world;

// Re-exports for convenience
pub use error::GameError;
pub use item::{Catalog, ItemDefinition};
pub use loader::{load_world, load_world_from};
pub use map::Map;
pub use player::Player;
pub use repl::{run_repl, run_turn};
pub use world::GameState;
