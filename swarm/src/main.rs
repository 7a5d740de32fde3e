//! Parallel maze-run aggregator: many independent explorers, one summary.
//!
//! Each explorer gets its own freshly generated maze and its own agent
//! state; the batch shares nothing. The process exits 0 once the summary is
//! printed; there is no error signaling at this layer.

mod report;
mod run;

use anyhow::Result;
use clap::Parser;

use explorer::logging;
use explorer::maze::MazeKind;

use crate::report::print_summary;
use crate::run::{RunParams, run_many};

#[derive(Parser)]
#[command(
    name = "swarm",
    version,
    about = "Run many independent maze explorers and report the best"
)]
struct Cli {
    /// Number of independent explorer runs.
    #[arg(long, default_value_t = 4)]
    explorers: usize,
    /// Maze width in cells.
    #[arg(long, default_value_t = 50)]
    width: i32,
    /// Maze height in cells.
    #[arg(long, default_value_t = 50)]
    height: i32,
    /// Maze layout: static (identical per run) or random (fresh per run).
    #[arg(long, value_enum, default_value_t = MazeKind::Static)]
    maze_type: MazeKind,
}

fn main() -> Result<()> {
    logging::init();
    let cli = Cli::parse();

    let params = RunParams {
        width: cli.width,
        height: cli.height,
        kind: cli.maze_type,
    };
    let results = run_many(cli.explorers, &params);
    print_summary(&results);
    Ok(())
}
