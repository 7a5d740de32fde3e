//! Backtrack path finding over the agent's move history.

use std::collections::HashSet;

use crate::core::types::{Heading, Pos};
use crate::maze::Maze;

/// Walk the move history newest-first and collect the path back to the
/// nearest branch point (a cell with more than one open neighbor).
///
/// Each position is considered once: loops in the history collapse to their
/// most recent occurrence. The returned path is in chronological order;
/// callers drain it from the end, so the first step taken is the most recent
/// history entry. When no branch point exists, the full deduplicated history
/// comes back and the walk ends at the start cell.
pub fn find_backtrack_path(maze: &Maze, history: &[Pos]) -> Vec<Pos> {
    let mut path = Vec::new();
    let mut seen = HashSet::new();
    for &pos in history.iter().rev() {
        if !seen.insert(pos) {
            continue;
        }
        path.push(pos);
        if open_neighbors(maze, pos) > 1 {
            break;
        }
    }
    path.reverse();
    path
}

/// Number of the four axis-aligned neighbors of `pos` that are in-bounds
/// and passable.
pub fn open_neighbors(maze: &Maze, pos: Pos) -> usize {
    [Heading::EAST, Heading::WEST, Heading::SOUTH, Heading::NORTH]
        .into_iter()
        .filter(|heading| maze.is_open(heading.step_from(pos)))
        .count()
}
