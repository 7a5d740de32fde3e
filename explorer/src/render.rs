//! Frame sinks: observational rendering of the agent's progress.
//!
//! A sink receives the full solve state once at solve start and once per
//! successful move. Nothing a sink does feeds back into navigation, and
//! implementations must never block indefinitely.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::QueueableCommand;
use crossterm::cursor::MoveTo;
use crossterm::style::Print;
use crossterm::terminal::{Clear, ClearType};
use tracing::warn;

use crate::core::types::Pos;
use crate::maze::Maze;

/// Observational rendering seam consumed by the solve loop.
pub trait FrameSink {
    fn frame(&mut self, maze: &Maze, agent: Pos);
}

/// Sink that drops every frame; used when visualization is off.
#[derive(Debug, Default)]
pub struct NullSink;

impl FrameSink for NullSink {
    fn frame(&mut self, _maze: &Maze, _agent: Pos) {}
}

/// Redraws the maze in a terminal on every frame.
///
/// Walls are `#`, open cells blank, `S`/`E` mark the endpoints and `@` the
/// agent. Generic over the writer so tests can capture frames.
pub struct TerminalRenderer<W: Write> {
    out: W,
    frame_delay: Duration,
}

impl TerminalRenderer<io::Stdout> {
    pub fn stdout(frame_delay: Duration) -> Self {
        Self::new(io::stdout(), frame_delay)
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, frame_delay: Duration) -> Self {
        Self { out, frame_delay }
    }

    fn draw(&mut self, maze: &Maze, agent: Pos) -> Result<()> {
        self.out
            .queue(MoveTo(0, 0))?
            .queue(Clear(ClearType::All))?;
        for (y, row) in maze.rows().iter().enumerate() {
            let mut line = String::with_capacity(row.len());
            for (x, cell) in row.iter().enumerate() {
                let pos = Pos::new(x as i32, y as i32);
                line.push(glyph(maze, agent, pos, *cell));
            }
            self.out.queue(MoveTo(0, y as u16))?.queue(Print(line))?;
        }
        self.out.flush().context("flush frame")?;
        Ok(())
    }
}

fn glyph(maze: &Maze, agent: Pos, pos: Pos, cell: u8) -> char {
    if pos == agent {
        '@'
    } else if pos == maze.start() {
        'S'
    } else if pos == maze.end() {
        'E'
    } else if cell == 0 {
        ' '
    } else {
        '#'
    }
}

impl<W: Write> FrameSink for TerminalRenderer<W> {
    fn frame(&mut self, maze: &Maze, agent: Pos) {
        // A rendering failure must never stop the solve; drop the frame.
        if let Err(err) = self.draw(maze, agent) {
            warn!(%err, "dropped frame");
        }
        thread::sleep(self.frame_delay);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn maze() -> Maze {
        let grid = vec![vec![0, 0, 0], vec![1, 1, 0]];
        Maze::from_grid(grid, Pos::new(0, 0), Pos::new(2, 1)).expect("maze")
    }

    #[test]
    fn frame_renders_walls_endpoints_and_agent() {
        let maze = maze();
        let mut renderer = TerminalRenderer::new(Vec::new(), Duration::ZERO);
        renderer.frame(&maze, Pos::new(1, 0));

        let output = String::from_utf8(renderer.out).expect("utf8");
        assert!(output.contains('@'));
        assert!(output.contains('S'));
        assert!(output.contains('E'));
        assert!(output.contains('#'));
    }

    #[test]
    fn agent_glyph_wins_over_endpoint_glyphs() {
        let maze = maze();
        assert_eq!(glyph(&maze, maze.start(), maze.start(), 0), '@');
        assert_eq!(glyph(&maze, maze.start(), maze.end(), 0), 'E');
    }

    #[test]
    fn null_sink_ignores_frames() {
        let maze = maze();
        NullSink.frame(&maze, maze.start());
    }
}
