use crate::config::*;
use crate::distance_map::*;
use crate::error::*;
use crate::grid::*;
use crate::metadata::*;
use direction::Direction;
use grid_2d::*;
use log::{debug, trace};
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::ops::Add;

/// Neighbour scan order, shared by relaxation and path reconstruction.
pub const CARDINAL_DIRECTIONS: [Direction; 4] = [
    Direction::South,
    Direction::East,
    Direction::North,
    Direction::West,
];

#[derive(Debug, Clone)]
pub(crate) struct PriorityEntry<Cost: Ord> {
    pub(crate) node_index: usize,
    pub(crate) cost: Cost,
}

impl<Cost: Ord> PriorityEntry<Cost> {
    fn new(node_index: usize, cost: Cost) -> Self {
        Self { node_index, cost }
    }
}

impl<Cost: Ord> PartialEq for PriorityEntry<Cost> {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost
    }
}

impl<Cost: Ord> PartialOrd for PriorityEntry<Cost> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<Cost: Ord> Eq for PriorityEntry<Cost> {}

impl<Cost: Ord> Ord for PriorityEntry<Cost> {
    // reversed so the max-heap pops the cheapest entry
    fn cmp(&self, other: &Self) -> Ordering {
        other.cost.cmp(&self.cost)
    }
}

/// State owned by a single relaxation run.
#[derive(Debug, Clone)]
pub struct SearchContext<Cost: Ord> {
    pub(crate) priority_queue: BinaryHeap<PriorityEntry<Cost>>,
    pub(crate) table: DistanceTable<Cost>,
}

impl<Cost> SearchContext<Cost>
where
    Cost: Copy + Ord + Add<Output = Cost>,
{
    /// `size` must be the size of the grid later passed to `relax`.
    pub fn new(size: Size, origin: Coord) -> Self {
        Self {
            priority_queue: BinaryHeap::new(),
            table: DistanceTable::new(size, origin),
        }
    }

    /// Computes minimum distances from the origin. Stops once `goal` is
    /// finalized unless the config asks for an exhaustive run.
    pub fn relax<G>(
        mut self,
        grid: &G,
        goal: Coord,
        config: SearchConfig,
    ) -> Result<(DistanceTable<Cost>, DistanceMapMetadata), Error>
    where
        G: CostGrid<Cost = Cost>,
    {
        let start = self.table.origin;
        let start_cost = match grid.cost(start) {
            Some(CostCell::Cost(cost)) => cost,
            Some(CostCell::Solid) | None => return Err(Error::Endpoint),
        };
        let start_index = self
            .table
            .grid
            .index_of_coord(start)
            .ok_or(Error::Endpoint)?;
        let goal_index = self
            .table
            .grid
            .index_of_coord(goal)
            .ok_or(Error::Endpoint)?;

        self.table.grid[start_index].distance = Some(start_cost);
        self.priority_queue
            .push(PriorityEntry::new(start_index, start_cost));

        let mut num_nodes_visited = 0;

        while let Some(current_entry) = self.priority_queue.pop() {
            let (current_coord, current_cost) = {
                let cell = &mut self.table.grid[current_entry.node_index];
                if cell.visited {
                    continue;
                }
                cell.visited = true;
                (cell.coord, current_entry.cost)
            };
            num_nodes_visited += 1;
            trace!("visiting {:?}", current_coord);

            if current_entry.node_index == goal_index && !config.exhaustive {
                debug!(
                    "goal {:?} finalized after {} visits",
                    goal, num_nodes_visited
                );
                break;
            }

            for &direction in CARDINAL_DIRECTIONS.iter() {
                let neighbour_coord = current_coord + direction.coord();

                let neighbour_cost =
                    if let Some(CostCell::Cost(cost)) = grid.cost(neighbour_coord) {
                        cost
                    } else {
                        continue;
                    };

                self.see_successor(current_cost + neighbour_cost, neighbour_coord);
            }
        }

        if self.table.grid[goal_index].distance.is_none() {
            debug!(
                "queue exhausted after {} visits without reaching {:?}",
                num_nodes_visited, goal
            );
            return Err(Error::NoPath);
        }

        Ok((self.table, DistanceMapMetadata { num_nodes_visited }))
    }

    fn see_successor(&mut self, cost: Cost, successor_coord: Coord) {
        let index = match self.table.grid.index_of_coord(successor_coord) {
            Some(index) => index,
            None => return,
        };

        let cell = &mut self.table.grid[index];

        let improved = match cell.distance {
            Some(distance) => cost < distance,
            None => true,
        };

        if improved {
            cell.distance = Some(cost);
            self.priority_queue.push(PriorityEntry::new(index, cost));
        }
    }
}

/// Runs a fresh relaxation from `start` over `grid`, with a distance table
/// shaped like the grid.
pub fn relax<G>(
    grid: &G,
    start: Coord,
    goal: Coord,
    config: SearchConfig,
) -> Result<(DistanceTable<G::Cost>, DistanceMapMetadata), Error>
where
    G: CostGrid,
    G::Cost: Copy + Ord + Add<Output = G::Cost>,
{
    SearchContext::new(grid.size(), start).relax(grid, goal, config)
}
