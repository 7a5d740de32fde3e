//! The navigation agent: position, heading, and visit-frequency memory.
//!
//! The agent never sees the maze as a whole. Each iteration it looks at the
//! four neighboring cells, steps into the least-visited passable one, and
//! falls back to walking its own history once the visit count of the cell it
//! stands on says the heuristic keeps bringing it back.

use std::collections::{HashMap, VecDeque};

use tracing::{debug, trace};

use crate::core::backtrack::find_backtrack_path;
use crate::core::types::{Heading, Pos};
use crate::maze::Maze;

/// Visit count above which a cell is treated as looped-over: the agent stops
/// trusting the direction heuristic there and backtracks instead.
pub const STAGNATION_THRESHOLD: u32 = 3;

/// Recent moves kept for the oscillation probe.
const RECENT_WINDOW: usize = 3;

/// A maze walker with local sensing only.
#[derive(Debug)]
pub struct Explorer<'m> {
    maze: &'m Maze,
    pos: Pos,
    heading: Heading,
    moves: Vec<Pos>,
    recent: VecDeque<Pos>,
    visit_counts: HashMap<Pos, u32>,
    backtrack_plan: Vec<Pos>,
    backtrack_count: u32,
}

impl<'m> Explorer<'m> {
    /// A fresh explorer standing on the maze's start cell, facing east.
    /// The start cell counts as occupied once before the first move.
    pub fn new(maze: &'m Maze) -> Self {
        let start = maze.start();
        let mut visit_counts = HashMap::new();
        visit_counts.insert(start, 1);
        Self {
            maze,
            pos: start,
            heading: Heading::EAST,
            moves: Vec::new(),
            recent: VecDeque::with_capacity(RECENT_WINDOW),
            visit_counts,
            backtrack_plan: Vec::new(),
            backtrack_count: 0,
        }
    }

    pub fn position(&self) -> Pos {
        self.pos
    }

    pub fn at_end(&self) -> bool {
        self.pos == self.maze.end()
    }

    /// Every cell entered by a forward move, oldest first.
    pub fn moves(&self) -> &[Pos] {
        &self.moves
    }

    pub fn backtrack_count(&self) -> u32 {
        self.backtrack_count
    }

    pub fn into_moves(self) -> Vec<Pos> {
        self.moves
    }

    /// Times the agent has occupied `pos` (0 if never).
    pub fn visit_count(&self, pos: Pos) -> u32 {
        self.visit_counts.get(&pos).copied().unwrap_or(0)
    }

    /// Whether the cell straight ahead is in-bounds and passable. Pure
    /// predicate, no side effects.
    pub fn can_move_forward(&self) -> bool {
        self.maze.is_open(self.heading.step_from(self.pos))
    }

    /// Oscillation probe: true when the last three recorded moves all landed
    /// on the same cell. The decision loop keys stagnation off visit counts
    /// instead; this stays exposed for diagnostics.
    pub fn is_stuck(&self) -> bool {
        self.recent.len() == RECENT_WINDOW && self.recent.iter().all(|p| *p == self.recent[0])
    }

    /// One decision iteration. Exactly one position update per call.
    pub fn advance(&mut self) {
        if self.visit_count(self.pos) > STAGNATION_THRESHOLD {
            // The heuristic has been through here too often; walk back
            // toward the nearest branch point instead of trusting it again.
            if !self.backtrack() {
                self.reverse_and_push_on();
            }
            return;
        }

        match self.choose_best_direction() {
            Some(heading) => {
                self.heading = heading;
                self.move_forward();
            }
            None => {
                if !self.backtrack() {
                    self.reverse_and_push_on();
                }
            }
        }
    }

    /// Pick the passable neighbor with the strictly lowest visit count,
    /// trying right turn, straight ahead, left turn, then reverse. Ties keep
    /// the earlier candidate.
    fn choose_best_direction(&self) -> Option<Heading> {
        let candidates = [
            self.heading.turned_right(),
            self.heading,
            self.heading.turned_left(),
            self.heading.reversed(),
        ];
        let mut best: Option<(Heading, u32)> = None;
        for candidate in candidates {
            let dest = candidate.step_from(self.pos);
            if !self.maze.is_open(dest) {
                continue;
            }
            let count = self.visit_count(dest);
            if best.is_none_or(|(_, lowest)| count < lowest) {
                best = Some((candidate, count));
            }
        }
        best.map(|(heading, _)| heading)
    }

    /// Step into the cell ahead and record it.
    fn move_forward(&mut self) {
        self.pos = self.heading.step_from(self.pos);
        self.moves.push(self.pos);
        if self.recent.len() == RECENT_WINDOW {
            self.recent.pop_front();
        }
        self.recent.push_back(self.pos);
        *self.visit_counts.entry(self.pos).or_insert(0) += 1;
        trace!(x = self.pos.x, y = self.pos.y, "moved");
    }

    /// Terminal fallback: turn around and take the cell behind, visited or
    /// not. Skips the passability check; the next iteration recovers through
    /// the heuristic, which never sends the agent further out of bounds.
    fn reverse_and_push_on(&mut self) {
        self.heading = self.heading.reversed();
        self.move_forward();
    }

    /// Replay one step of the backtrack plan, computing a fresh plan first
    /// when the previous one is spent. Returns false when there is no
    /// history to walk back through.
    fn backtrack(&mut self) -> bool {
        if self.backtrack_plan.is_empty() {
            self.backtrack_plan = find_backtrack_path(self.maze, &self.moves);
            debug!(len = self.backtrack_plan.len(), "computed backtrack plan");
        }
        // The plan is chronological and drained from the end, so replayed
        // steps come out newest-first.
        match self.backtrack_plan.pop() {
            Some(next) => {
                self.pos = next;
                self.backtrack_count += 1;
                true
            }
            None => false,
        }
    }
}
