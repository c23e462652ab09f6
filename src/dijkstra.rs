use crate::config::*;
use crate::error::*;
use crate::grid::*;
use crate::input::Query;
use crate::metadata::*;
use crate::path;
use crate::search;
use grid_2d::Coord;
use log::debug;

/// A minimum-cost path in start-to-finish order.
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub path: Vec<Coord>,
    pub metadata: SearchMetadata<u64>,
}

impl Route {
    pub fn cost(&self) -> u64 {
        self.metadata.cost
    }
}

/// Relaxes distances from the query's start, then walks the distance
/// table back from the finish.
pub fn find_path(query: &Query, config: SearchConfig) -> Result<Route, Error> {
    let maze = query.maze();
    let (start, finish) = (query.start(), query.finish());

    let (table, DistanceMapMetadata { num_nodes_visited }) =
        search::relax(maze, start, finish, config)?;
    let cost = table.distance(finish).ok_or(Error::NoPath)?;

    let mut path = path::trace(maze, &table, start, finish)?;
    path.reverse();

    debug!(
        "route of {} cells with cost {} ({} cells visited)",
        path.len(),
        cost,
        num_nodes_visited
    );

    let length = path.len();
    Ok(Route {
        path,
        metadata: SearchMetadata {
            num_nodes_visited,
            cost,
            length,
        },
    })
}

impl Maze {
    /// Validates the endpoints and finds a route with the default config.
    pub fn find_path(&self, start: Coord, finish: Coord) -> Result<Route, Error> {
        let query = Query::new(self.clone(), start, finish)?;
        find_path(&query, SearchConfig::default())
    }
}
