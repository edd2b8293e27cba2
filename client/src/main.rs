use std::{io, process::ExitCode, time::Duration};

use anyhow::Context;
use clap::Parser;
use cli::Args;
use colored::Colorize;
use config::Config;
use libgame::{Game, board::GameBoard, seed};
use log::LevelFilter;
use rand::{SeedableRng, rngs::StdRng};
use renderer::Renderer;

mod cli;
mod config;
mod renderer;

fn main() -> ExitCode {
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    init_logger(args.verbose)?;

    let config = match &args.config {
        Some(config_path) => Config::load(config_path)?,
        None => Config::default(),
    }
    .with_args(&args);
    log::debug!("Using {config:?}");

    let variant = config.variant();
    let size = config.board_size()?;

    let mut board = if let Some(seed_path) = &args.seed_file {
        seed::load_file(seed_path, size, variant)?
    } else {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        GameBoard::new_random(size, variant, &mut rng)
    };

    let turns = match args.turns {
        Some(turns) => turns,
        None => cli::read_turn_count(io::stdin().lock(), io::stdout())?,
    };
    board.set_turns(turns);

    let mut game = Game::new(board, config.pending_policy());
    let mut renderer = Renderer::new(io::stdout().lock(), Duration::from_millis(config.delay_ms));

    game.run(|game, current| renderer.draw(game, current))
        .context("Running simulation")?;

    log::info!("Finished after {} generations", game.generation());
    Ok(())
}

fn init_logger(verbose: u8) -> anyhow::Result<()> {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    simple_logger::SimpleLogger::new()
        .with_level(level)
        .env()
        .init()
        .context("Installing logger")
}
