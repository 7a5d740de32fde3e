//! Human-readable batch summary.

use crate::run::{RunResult, best_index};

/// Print one line per run plus the best-performance line.
pub fn print_summary(results: &[RunResult]) {
    for (idx, result) in results.iter().enumerate() {
        println!("{}", run_line(idx, result));
    }
    if let Some(best) = best_index(results) {
        println!("{}", best_line(best, &results[best]));
    }
}

fn run_line(idx: usize, result: &RunResult) -> String {
    format!(
        "run: explorer={} time_secs={:.2} moves={} backtracks={}",
        idx + 1,
        result.elapsed_secs,
        result.move_count,
        result.backtrack_count
    )
}

fn best_line(idx: usize, result: &RunResult) -> String {
    format!(
        "best: explorer={} time_secs={:.2} moves={} backtracks={}",
        idx + 1,
        result.elapsed_secs,
        result.move_count,
        result.backtrack_count
    )
}
