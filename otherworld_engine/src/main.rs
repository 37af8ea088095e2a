#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** Otherworld **
//! Turn-based text adventure

use otherworld_engine::style::{GameStyle, normal_block};
use otherworld_engine::view::{MapView, render_map};
use otherworld_engine::{OTHERWORLD_VERSION, load_world, run_repl};

use anyhow::Result;
use colored::Colorize;
use log::{error, info};

use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();
    info!("Start: loading Otherworld v{OTHERWORLD_VERSION}...");
    let mut world = match load_world() {
        Ok(world) => world,
        Err(err) => {
            error!("failed to load world: {err:#}");
            eprintln!("{}", "Unable to initialize the game: invalid content".error_style());
            for cause in err.chain() {
                eprintln!("  caused by: {cause}");
            }
            return ExitCode::FAILURE;
        },
    };
    info!("GameState loaded successfully.");

    match play(&mut world) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("game loop failed: {err:#}");
            eprintln!("{} {err:#}", "Error:".error_style());
            ExitCode::FAILURE
        },
    }
}

fn play(world: &mut otherworld_engine::GameState) -> Result<()> {
    info!("Starting the game!");
    println!("{:^84}", world.title.to_uppercase().bright_yellow().underline());
    println!("\nYou are {}.", world.player.name().bold().bright_blue());
    if !world.player.description.is_empty() {
        println!("{}", world.player.description);
    }
    if !world.intro.is_empty() {
        println!("\n{}", textwrap::fill(&world.intro, normal_block()).description_style());
    }
    println!("\n{}", render_map(&MapView::from(world.current_map()?)));
    println!("\nType {} for a list of commands.", "help".bold());

    run_repl(world)
}
