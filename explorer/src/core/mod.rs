//! Pure navigation logic: deterministic for a given maze, no I/O.

pub mod agent;
pub mod backtrack;
pub mod types;
