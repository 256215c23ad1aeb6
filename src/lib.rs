//! Tile-grid falling-block puzzle engine: gravity, pushing, keys and locks,
//! with a terminal front end and a reachable-state explorer.

pub mod config;
pub mod console_interface;
pub mod core;
pub mod models;
pub mod scheduler;
pub mod state_graph;

#[cfg(test)]
mod test;
