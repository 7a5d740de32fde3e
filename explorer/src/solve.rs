//! Solve orchestration: drive the agent until it stands on the end cell.

use std::time::{Duration, Instant};

use tracing::{info, instrument};

use crate::core::agent::Explorer;
use crate::core::types::Pos;
use crate::maze::Maze;
use crate::render::FrameSink;

/// Outcome of one completed solve run. Immutable once produced.
#[derive(Debug, Clone, PartialEq)]
pub struct SolveReport {
    pub elapsed: Duration,
    /// Every cell entered by a forward move, in order; the final entry is
    /// the end cell.
    pub moves: Vec<Pos>,
    /// Times the agent replayed a history step to escape a loop.
    pub backtrack_count: u32,
}

impl SolveReport {
    pub fn move_count(&self) -> usize {
        self.moves.len()
    }

    pub fn moves_per_sec(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.moves.len() as f64 / secs
        } else {
            0.0
        }
    }
}

/// Run a fresh agent from the maze's start cell until it reaches the end
/// cell.
///
/// The sink sees one frame at solve start and one per successful move. This
/// does not return while the end cell is unreachable from the start:
/// solvability is the caller's precondition, and there is no reachability
/// check here.
#[instrument(skip_all, fields(width = maze.width(), height = maze.height()))]
pub fn solve(maze: &Maze, sink: &mut dyn FrameSink) -> SolveReport {
    let mut explorer = Explorer::new(maze);
    let started = Instant::now();
    sink.frame(maze, explorer.position());

    while !explorer.at_end() {
        explorer.advance();
        sink.frame(maze, explorer.position());
    }

    let elapsed = started.elapsed();
    let report = SolveReport {
        elapsed,
        backtrack_count: explorer.backtrack_count(),
        moves: explorer.into_moves(),
    };
    info!(
        moves = report.moves.len(),
        backtracks = report.backtrack_count,
        elapsed_ms = elapsed.as_millis() as u64,
        "solve complete"
    );
    report
}
