mod console;

use anyhow::{Context, Result};
use clap::Parser;
use console::Console;
use geometry_game::GameController;
use log::info;
use std::io;
use std::path::PathBuf;

/// Tell whether a point lies inside a rectangle, one round at a time.
#[derive(Parser)]
#[command(version)]
pub struct Options {
    /// Write the plot of every round as an SVG file into this directory
    #[arg(long, short)]
    plot_dir: Option<PathBuf>,

    /// Reject rectangles whose lower-left corner is not below and left of
    /// the upper-right corner
    #[arg(long)]
    strict: bool,

    /// Print each round as a JSON line
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let opt = Options::parse();

    if let Some(dir) = &opt.plot_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Cannot create plot directory {}", dir.display()))?;
    }

    let stdin = io::stdin();
    let console = Console::new(stdin.lock(), io::stdout())
        .plot_dir(opt.plot_dir)
        .json(opt.json);

    let mut game = GameController::new(console).strict(opt.strict);
    let summary = game.run()?;

    info!(
        "Game over after {} round(s), {} inside",
        summary.rounds, summary.inside
    );

    Ok(())
}
