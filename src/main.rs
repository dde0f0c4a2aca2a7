//! This crate contains the source code for the binary front-end of mazefabric.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]
#![expect(
    unused_crate_dependencies,
    reason = "The rand dependency is only used in the library crate."
)]

use clap::Parser;
use color_eyre::{eyre::Result, install};
use mazefabric::{config, Maze};

/// Command-line options for maze generation.
///
/// This structure mirrors the configuration an embedding game would supply: the maze shape, the
/// number of open rooms, and an optional seed for reproducible output.
#[derive(Debug, Parser)]
#[command(version, about = "Generates a random maze and reports whether it can be solved.")]
struct Cli {
    /// Width of the maze in cells.
    #[arg(long, default_value_t = config::DEFAULT_MAZE_WIDTH)]
    width: usize,
    /// Height of the maze in cells.
    #[arg(long, default_value_t = config::DEFAULT_MAZE_HEIGHT)]
    height: usize,
    /// Number of open rooms to carve into the maze.
    #[arg(long, default_value_t = config::DEFAULT_MAZE_ROOMS)]
    rooms: usize,
    /// Seed for reproducible generation; entropy-seeded when omitted.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    install()?;

    let cli = Cli::parse();

    let maze = match cli.seed {
        Some(seed) => Maze::with_seed(cli.width, cli.height, cli.rooms, seed)?,
        None => Maze::new(cli.width, cli.height, cli.rooms)?,
    };

    // The renderer produces one flat row-major string; reflow it into rows for the terminal.
    let rendered = maze.to_string();
    for row in rendered.as_bytes().chunks(maze.width()) {
        println!("{}", String::from_utf8_lossy(row));
    }
    println!("solvable: {}", maze.is_solvable());

    Ok(())
}
