//! Local-knowledge maze explorer.
//!
//! The agent walks a grid maze from start to end with no global view of the
//! layout: each step it senses the four neighboring cells, prefers the least
//! visited passable one, and walks back toward the nearest branch point when
//! the visit count of its current cell shows it is going in circles. The
//! architecture enforces a strict separation:
//!
//! - **[`core`]**: Pure, deterministic navigation logic (heading algebra,
//!   direction choice, backtrack path finding). No I/O, fully testable in
//!   isolation.
//! - Side-effecting modules ([`render`], [`config`], [`logging`]) sit at the
//!   edges and are consumed through narrow seams.
//!
//! [`solve`] coordinates the core with a [`maze`] and an optional frame sink
//! to implement a complete solve run.

pub mod config;
pub mod core;
pub mod logging;
pub mod maze;
pub mod render;
pub mod solve;
