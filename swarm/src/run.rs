//! Independent explorer runs and their parallel fan-out.

use rayon::prelude::*;
use tracing::{debug, instrument};

use explorer::maze::{Maze, MazeKind};
use explorer::render::NullSink;
use explorer::solve::solve;

/// Maze parameters shared by every run in a batch.
#[derive(Debug, Clone, Copy)]
pub struct RunParams {
    pub width: i32,
    pub height: i32,
    pub kind: MazeKind,
}

/// Performance of one completed run. Immutable once produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunResult {
    pub elapsed_secs: f64,
    pub move_count: usize,
    pub backtrack_count: u32,
}

/// One fresh maze, one fresh explorer, visualization off.
#[instrument(skip_all)]
pub fn run_single(params: &RunParams) -> RunResult {
    let maze = Maze::generate(params.width, params.height, params.kind);
    let report = solve(&maze, &mut NullSink);
    let result = RunResult {
        elapsed_secs: report.elapsed.as_secs_f64(),
        move_count: report.move_count(),
        backtrack_count: report.backtrack_count,
    };
    debug!(
        moves = result.move_count,
        backtracks = result.backtrack_count,
        "run finished"
    );
    result
}

/// Dispatch `count` fully independent runs across the worker pool and block
/// until all of them complete.
///
/// Each run owns its maze and agent; nothing is shared and nothing is
/// synchronized beyond the final collect, which preserves dispatch order.
/// A run that never terminates (unsolvable maze) hangs the whole batch:
/// there are no timeouts and no cancellation here.
pub fn run_many(count: usize, params: &RunParams) -> Vec<RunResult> {
    (0..count)
        .into_par_iter()
        .map(|_| run_single(params))
        .collect()
}

/// Index of the best run: minimum move count, first one on ties.
///
/// Strict comparison on purpose: `Iterator::min_by_key` keeps the last
/// minimum, which would report the wrong run for tied batches.
pub fn best_index(results: &[RunResult]) -> Option<usize> {
    let mut best: Option<(usize, usize)> = None;
    for (idx, result) in results.iter().enumerate() {
        let better = match best {
            None => true,
            Some((_, moves)) => result.move_count < moves,
        };
        if better {
            best = Some((idx, result.move_count));
        }
    }
    best.map(|(idx, _)| idx)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(move_count: usize) -> RunResult {
        RunResult {
            elapsed_secs: 0.5,
            move_count,
            backtrack_count: 0,
        }
    }

    #[test]
    fn best_index_picks_minimum_move_count() {
        let results = [result(12), result(8), result(10)];
        assert_eq!(best_index(&results), Some(1));
    }

    #[test]
    fn best_index_keeps_first_on_ties() {
        let results = [result(9), result(9), result(9)];
        assert_eq!(best_index(&results), Some(0));
    }

    #[test]
    fn best_index_of_empty_batch_is_none() {
        assert_eq!(best_index(&[]), None);
    }

    #[test]
    fn static_runs_are_identical_across_the_batch() {
        let params = RunParams {
            width: 5,
            height: 5,
            kind: MazeKind::Static,
        };
        let results = run_many(4, &params);
        assert_eq!(results.len(), 4);
        for result in &results {
            assert_eq!(result.move_count, results[0].move_count);
            assert_eq!(result.backtrack_count, results[0].backtrack_count);
        }
        assert_eq!(best_index(&results), Some(0));
    }

    #[test]
    fn parallel_batch_matches_sequential_runs() {
        let params = RunParams {
            width: 5,
            height: 5,
            kind: MazeKind::Static,
        };
        let sequential = run_single(&params);
        let batch = run_many(2, &params);
        assert_eq!(batch[0].move_count, sequential.move_count);
        assert_eq!(batch[1].move_count, sequential.move_count);
    }
}
