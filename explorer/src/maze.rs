//! Maze grids: the passability oracle the agent navigates, plus generation.
//!
//! A maze is a rectangular `[y][x]` grid of cells (0 = passable, 1 =
//! blocked) with designated start and end cells. The agent only ever asks
//! one question of it: is this position in-bounds and passable?

use std::fmt;

use anyhow::{Result, bail};
use clap::ValueEnum;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::core::types::Pos;

const OPEN: u8 = 0;
const WALL: u8 = 1;

/// Seed behind [`MazeKind::Static`].
const STATIC_SEED: u64 = 0x6d61_7a65; // "maze"

/// Layout selector for generated mazes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MazeKind {
    /// Fixed seed: every generation yields the identical layout.
    Static,
    /// Entropy seed: a fresh layout per generation.
    Random,
}

impl fmt::Display for MazeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MazeKind::Static => "static",
            MazeKind::Random => "random",
        })
    }
}

/// A fixed-size grid maze with start and end cells.
#[derive(Debug, Clone)]
pub struct Maze {
    width: i32,
    height: i32,
    grid: Vec<Vec<u8>>,
    start: Pos,
    end: Pos,
}

impl Maze {
    /// Build a maze from an explicit grid (0 = passable, 1 = blocked,
    /// indexed `[y][x]`).
    ///
    /// The grid must be rectangular and non-empty, and both endpoints must
    /// land on passable in-bounds cells.
    pub fn from_grid(grid: Vec<Vec<u8>>, start: Pos, end: Pos) -> Result<Self> {
        let height = grid.len();
        let width = grid.first().map_or(0, Vec::len);
        if width == 0 || height == 0 {
            bail!("maze grid must be non-empty");
        }
        if grid.iter().any(|row| row.len() != width) {
            bail!("maze grid must be rectangular");
        }
        let maze = Self {
            width: width as i32,
            height: height as i32,
            grid,
            start,
            end,
        };
        if !maze.is_open(start) {
            bail!("start cell ({}, {}) is not passable", start.x, start.y);
        }
        if !maze.is_open(end) {
            bail!("end cell ({}, {}) is not passable", end.x, end.y);
        }
        Ok(maze)
    }

    /// Generate a maze of roughly the requested size.
    ///
    /// Dimensions are normalized up to odd values (minimum 5) so the carving
    /// lattice is well-formed. Start is (1, 1), end is the opposite corner
    /// room; the carve guarantees every room is reachable from every other.
    pub fn generate(width: i32, height: i32, kind: MazeKind) -> Self {
        let seed = match kind {
            MazeKind::Static => STATIC_SEED,
            MazeKind::Random => rand::random(),
        };
        Self::generate_seeded(width, height, seed)
    }

    /// Generate from an explicit seed; the seed fully determines the layout.
    pub fn generate_seeded(width: i32, height: i32, seed: u64) -> Self {
        let width = normalize_dim(width);
        let height = normalize_dim(height);
        let mut grid = vec![vec![WALL; width as usize]; height as usize];
        carve(&mut grid, width, height, seed);
        Self {
            width,
            height,
            grid,
            start: Pos::new(1, 1),
            end: Pos::new(width - 2, height - 2),
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn start(&self) -> Pos {
        self.start
    }

    pub fn end(&self) -> Pos {
        self.end
    }

    /// Whether `pos` is in-bounds and passable. Out-of-bounds is blocked.
    pub fn is_open(&self, pos: Pos) -> bool {
        pos.x >= 0
            && pos.x < self.width
            && pos.y >= 0
            && pos.y < self.height
            && self.grid[pos.y as usize][pos.x as usize] == OPEN
    }

    /// Raw cell rows, `[y][x]`, 0 = passable / 1 = blocked.
    pub fn rows(&self) -> &[Vec<u8>] {
        &self.grid
    }
}

/// Rooms sit at odd coordinates, so dimensions must be odd and large enough
/// to hold at least a 2x2 room lattice.
fn normalize_dim(dim: i32) -> i32 {
    dim.max(5) | 1
}

/// Iterative randomized depth-first carving: walk the odd room lattice with
/// an explicit stack, knocking out the wall cell between each pair of rooms
/// the walk connects. Produces a perfect maze (no cycles, fully connected).
fn carve(grid: &mut [Vec<u8>], width: i32, height: i32, seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let start = Pos::new(1, 1);
    grid[start.y as usize][start.x as usize] = OPEN;
    let mut stack = vec![start];

    while let Some(&room) = stack.last() {
        let mut unvisited = [room; 4];
        let mut n = 0;
        for (dx, dy) in [(2, 0), (-2, 0), (0, 2), (0, -2)] {
            let next = Pos::new(room.x + dx, room.y + dy);
            if next.x >= 1
                && next.x < width - 1
                && next.y >= 1
                && next.y < height - 1
                && grid[next.y as usize][next.x as usize] == WALL
            {
                unvisited[n] = next;
                n += 1;
            }
        }

        if n == 0 {
            stack.pop();
            continue;
        }

        let next = unvisited[rng.gen_range(0..n)];
        let wall = Pos::new((room.x + next.x) / 2, (room.y + next.y) / 2);
        grid[wall.y as usize][wall.x as usize] = OPEN;
        grid[next.y as usize][next.x as usize] = OPEN;
        stack.push(next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn from_grid_rejects_empty_and_ragged() {
        assert!(Maze::from_grid(Vec::new(), Pos::new(0, 0), Pos::new(0, 0)).is_err());
        let ragged = vec![vec![0, 0], vec![0]];
        assert!(Maze::from_grid(ragged, Pos::new(0, 0), Pos::new(0, 0)).is_err());
    }

    #[test]
    fn from_grid_rejects_blocked_endpoints() {
        let grid = vec![vec![0, 1]];
        assert!(Maze::from_grid(grid.clone(), Pos::new(1, 0), Pos::new(0, 0)).is_err());
        assert!(Maze::from_grid(grid, Pos::new(0, 0), Pos::new(1, 0)).is_err());
    }

    #[test]
    fn out_of_bounds_is_blocked() {
        let maze = Maze::from_grid(vec![vec![0]], Pos::new(0, 0), Pos::new(0, 0)).expect("maze");
        assert!(maze.is_open(Pos::new(0, 0)));
        assert!(!maze.is_open(Pos::new(-1, 0)));
        assert!(!maze.is_open(Pos::new(0, 1)));
    }

    #[test]
    fn dimensions_normalize_to_odd_minimum() {
        let maze = Maze::generate_seeded(0, 0, 7);
        assert_eq!((maze.width(), maze.height()), (5, 5));
        let maze = Maze::generate_seeded(10, 16, 7);
        assert_eq!((maze.width(), maze.height()), (11, 17));
    }

    #[test]
    fn same_seed_same_layout() {
        let a = Maze::generate_seeded(15, 15, 42);
        let b = Maze::generate_seeded(15, 15, 42);
        assert_eq!(a.rows(), b.rows());

        let c = Maze::generate_seeded(15, 15, 43);
        assert_ne!(a.rows(), c.rows());
    }

    #[test]
    fn static_kind_is_reproducible() {
        let a = Maze::generate(21, 21, MazeKind::Static);
        let b = Maze::generate(21, 21, MazeKind::Static);
        assert_eq!(a.rows(), b.rows());
    }

    #[test]
    fn endpoints_are_open_rooms() {
        let maze = Maze::generate_seeded(17, 13, 99);
        assert!(maze.is_open(maze.start()));
        assert!(maze.is_open(maze.end()));
    }

    #[test]
    fn end_is_reachable_from_start() {
        let maze = Maze::generate_seeded(19, 19, 5);
        let mut frontier = vec![maze.start()];
        let mut seen: HashSet<Pos> = frontier.iter().copied().collect();
        while let Some(pos) = frontier.pop() {
            for (dx, dy) in [(1, 0), (-1, 0), (0, 1), (0, -1)] {
                let next = Pos::new(pos.x + dx, pos.y + dy);
                if maze.is_open(next) && seen.insert(next) {
                    frontier.push(next);
                }
            }
        }
        assert!(seen.contains(&maze.end()));
    }
}
