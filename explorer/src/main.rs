//! Single-solve CLI: generate one maze, walk it, print statistics.

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen};

use explorer::config::{ExplorerConfig, load_config};
use explorer::logging;
use explorer::maze::{Maze, MazeKind};
use explorer::render::{NullSink, TerminalRenderer};
use explorer::solve::{SolveReport, solve};

#[derive(Parser)]
#[command(
    name = "explorer",
    version,
    about = "Walk a grid maze using local sensing only"
)]
struct Cli {
    /// Maze width in cells.
    #[arg(long)]
    width: Option<i32>,
    /// Maze height in cells.
    #[arg(long)]
    height: Option<i32>,
    /// Maze layout: static (fixed layout) or random.
    #[arg(long, value_enum)]
    maze_type: Option<MazeKind>,
    /// Redraw the maze in the terminal after every move.
    #[arg(long)]
    visualize: bool,
    /// TOML config file overriding the built-in defaults.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    logging::init();
    let cli = Cli::parse();

    let cfg = match &cli.config {
        Some(path) => load_config(path).context("load config")?,
        None => ExplorerConfig::default(),
    };
    let width = cli.width.unwrap_or(cfg.width);
    let height = cli.height.unwrap_or(cfg.height);
    let kind = cli.maze_type.unwrap_or(cfg.maze_kind);

    let maze = Maze::generate(width, height, kind);
    let report = if cli.visualize {
        solve_visualized(&maze, &cfg)?
    } else {
        solve(&maze, &mut NullSink)
    };

    println!("{}", statistics_line(&report));
    Ok(())
}

fn solve_visualized(maze: &Maze, cfg: &ExplorerConfig) -> Result<SolveReport> {
    let mut sink = TerminalRenderer::stdout(Duration::from_millis(cfg.render.frame_delay_ms));
    execute!(io::stdout(), EnterAlternateScreen).context("enter alternate screen")?;
    let report = solve(maze, &mut sink);
    execute!(io::stdout(), LeaveAlternateScreen).context("leave alternate screen")?;
    Ok(report)
}

fn statistics_line(report: &SolveReport) -> String {
    format!(
        "solve: moves={} backtracks={} time_secs={:.2} moves_per_sec={:.2}",
        report.move_count(),
        report.backtrack_count,
        report.elapsed.as_secs_f64(),
        report.moves_per_sec()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use explorer::core::types::Pos;

    #[test]
    fn parse_defaults_to_config_driven_values() {
        let cli = Cli::parse_from(["explorer"]);
        assert!(cli.width.is_none());
        assert!(cli.maze_type.is_none());
        assert!(!cli.visualize);
    }

    #[test]
    fn parse_full_invocation() {
        let cli = Cli::parse_from([
            "explorer",
            "--width",
            "21",
            "--height",
            "15",
            "--maze-type",
            "static",
            "--visualize",
        ]);
        assert_eq!(cli.width, Some(21));
        assert_eq!(cli.height, Some(15));
        assert_eq!(cli.maze_type, Some(MazeKind::Static));
        assert!(cli.visualize);
    }

    #[test]
    fn statistics_line_is_key_value_formatted() {
        let report = SolveReport {
            elapsed: Duration::from_millis(500),
            moves: vec![Pos::new(1, 0), Pos::new(2, 0)],
            backtrack_count: 1,
        };
        assert_eq!(
            statistics_line(&report),
            "solve: moves=2 backtracks=1 time_secs=0.50 moves_per_sec=4.00"
        );
    }
}
