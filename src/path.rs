use crate::distance_map::DistanceTable;
use crate::error::Error;
use crate::grid::*;
use crate::search::CARDINAL_DIRECTIONS;
use best::BestMap;
use grid_2d::Coord;
use log::warn;
use num_traits::Zero;
use std::ops::Add;
use std::slice;

/// Walks down the distance gradient from `finish` to `start`. The returned
/// path begins with `finish` and ends with `start`.
///
/// Each step moves to the open neighbour with the smallest recorded
/// distance; the first such neighbour in [`CARDINAL_DIRECTIONS`] order wins
/// ties. The table must come from a successful relaxation towards `finish`.
pub fn trace<G, Cost>(
    grid: &G,
    table: &DistanceTable<Cost>,
    start: Coord,
    finish: Coord,
) -> Result<Vec<Coord>, Error>
where
    G: SolidGrid,
    Cost: Copy + Ord,
{
    let mut cursor_distance = table.distance(finish).ok_or(Error::NoPath)?;
    let mut cursor = finish;
    let mut path = vec![finish];

    while cursor != start {
        let mut best_map = BestMap::new();
        let mut reached_start = false;

        for &direction in CARDINAL_DIRECTIONS.iter() {
            let neighbour_coord = cursor + direction.coord();
            if neighbour_coord == start {
                reached_start = true;
                break;
            }
            if grid.is_solid_or_outside(neighbour_coord) {
                continue;
            }
            if let Some(distance) = table.distance(neighbour_coord) {
                best_map.insert_lt(distance, neighbour_coord);
            }
        }

        if reached_start {
            path.push(start);
            break;
        }

        let (next, next_distance) = match best_map
            .into_value()
            .and_then(|next| table.distance(next).map(|distance| (next, distance)))
        {
            Some(best) => best,
            None => {
                warn!("no reached neighbour around {:?}", cursor);
                return Err(Error::NoPath);
            }
        };
        // distances strictly decrease towards the start
        if next_distance >= cursor_distance {
            warn!("distance gradient is flat at {:?}", cursor);
            return Err(Error::NoPath);
        }

        path.push(next);
        cursor = next;
        cursor_distance = next_distance;
    }

    Ok(path)
}

pub fn is_adjacent(a: Coord, b: Coord) -> bool {
    matches!(
        (a.x.abs_diff(b.x), a.y.abs_diff(b.y)),
        (0, 1) | (1, 0)
    )
}

/// Total cost of entering every cell of `path`, the first cell included.
/// `None` if the path leaves the grid or crosses a wall.
pub fn path_cost<G>(grid: &G, path: &[Coord]) -> Option<G::Cost>
where
    G: CostGrid,
    G::Cost: Copy + Add<Output = G::Cost> + Zero,
{
    path.iter().try_fold(G::Cost::zero(), |total, &coord| {
        grid.cost(coord)?.cost().map(|cost| total + cost)
    })
}

/// Iterates over the consecutive steps `(from, to)` of a path.
pub struct PathWalk<'a> {
    current_coord: Option<Coord>,
    coords: slice::Iter<'a, Coord>,
}

impl<'a> PathWalk<'a> {
    pub fn new(path: &'a [Coord]) -> Self {
        let mut coords = path.iter();
        Self {
            current_coord: coords.next().cloned(),
            coords,
        }
    }
}

impl<'a> Iterator for PathWalk<'a> {
    type Item = (Coord, Coord);
    fn next(&mut self) -> Option<Self::Item> {
        let current_coord = self.current_coord?;
        if let Some(&next_coord) = self.coords.next() {
            self.current_coord = Some(next_coord);
            Some((current_coord, next_coord))
        } else {
            None
        }
    }
}

/// Checks that `path` runs from `start` to `finish` through open cells in
/// 4-adjacent steps.
pub fn is_valid_path<G: SolidGrid>(
    grid: &G,
    path: &[Coord],
    start: Coord,
    finish: Coord,
) -> bool {
    path.first() == Some(&start)
        && path.last() == Some(&finish)
        && path.iter().all(|&coord| !grid.is_solid_or_outside(coord))
        && PathWalk::new(path).all(|(a, b)| is_adjacent(a, b))
}
