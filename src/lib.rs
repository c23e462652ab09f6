//! Minimum-cost routes through weighted grid mazes.
//!
//! Every cell of a [`Maze`] carries the cost of entering it, with `0`
//! marking a wall. Routes move between 4-adjacent cells and their cost is
//! the sum of every cell they contain, the start included.

mod config;
mod dijkstra;
mod distance_map;
mod error;
mod grid;
mod input;
mod metadata;
pub mod path;
pub mod render;
pub mod search;

pub use config::*;
pub use dijkstra::*;
pub use distance_map::*;
pub use error::*;
pub use grid::*;
pub use input::*;
pub use metadata::*;
pub use search::{relax, SearchContext};

pub use grid_2d::{Coord, Size};

#[cfg(test)]
mod tests;
