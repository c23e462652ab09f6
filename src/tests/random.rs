//! Checks the search against a brute-force reference on many random mazes.

use crate::config::*;
use crate::dijkstra::*;
use crate::error::*;
use crate::grid::*;
use crate::input::Query;
use crate::path::*;
use crate::search::relax;
use grid_2d::*;
use rand::prelude::*;

const N_MAZES: usize = 500;
const WIDTH: u32 = 7;
const HEIGHT: u32 = 5;

fn random_maze(rng: &mut StdRng) -> Maze {
    let values = (0..WIDTH * HEIGHT)
        .map(|_| {
            if rng.gen_bool(0.25) {
                0
            } else {
                rng.gen_range(1..=9)
            }
        })
        .collect();
    Maze::new(Size::new(WIDTH, HEIGHT), values).unwrap()
}

fn open_coords(maze: &Maze) -> Vec<Coord> {
    let mut coords = Vec::new();
    for y in 0..maze.height() as i32 {
        for x in 0..maze.width() as i32 {
            let coord = Coord::new(x, y);
            if maze.is_open(coord) {
                coords.push(coord);
            }
        }
    }
    coords
}

/// Bellman-Ford style fixpoint over the whole maze.
fn reference_distances(maze: &Maze, start: Coord) -> Vec<Option<u64>> {
    let width = maze.width() as i32;
    let index = |coord: Coord| (coord.y * width + coord.x) as usize;
    let mut distances = vec![None; (maze.width() * maze.height()) as usize];
    distances[index(start)] = maze.cost(start).map(u64::from);
    let cells = open_coords(maze);
    loop {
        let mut changed = false;
        for &coord in &cells {
            let cost = maze.cost(coord).map(u64::from).unwrap();
            for &(dx, dy) in &[(0, 1), (1, 0), (0, -1), (-1, 0)] {
                let neighbour = Coord::new(coord.x + dx, coord.y + dy);
                if !maze.is_open(neighbour) {
                    continue;
                }
                if let Some(d) = distances[index(neighbour)] {
                    let candidate = d + cost;
                    if distances[index(coord)].map_or(true, |current| candidate < current) {
                        distances[index(coord)] = Some(candidate);
                        changed = true;
                    }
                }
            }
        }
        if !changed {
            return distances;
        }
    }
}

#[test]
fn matches_reference() {
    let mut rng = StdRng::seed_from_u64(0);
    let mut found = 0;
    let mut missing = 0;
    for _ in 0..N_MAZES {
        let maze = random_maze(&mut rng);
        let open = open_coords(&maze);
        if open.len() < 2 {
            continue;
        }
        let start = *open.choose(&mut rng).unwrap();
        let finish = loop {
            let finish = *open.choose(&mut rng).unwrap();
            if finish != start {
                break finish;
            }
        };
        let expected = reference_distances(&maze, start);
        let finish_index = (finish.y * WIDTH as i32 + finish.x) as usize;

        let query = Query::new(maze.clone(), start, finish).unwrap();
        match (find_path(&query, SearchConfig::default()), expected[finish_index]) {
            (Ok(route), Some(cost)) => {
                found += 1;
                assert_eq!(route.cost(), cost);
                assert!(is_valid_path(&maze, &route.path, start, finish));
                assert_eq!(path_cost(&maze, &route.path), Some(cost));
                assert_eq!(route.metadata.length, route.path.len());
            }
            (Err(Error::NoPath), None) => missing += 1,
            (result, expected) => panic!(
                "start {:?} finish {:?}: got {:?}, expected {:?}\n{}",
                start, finish, result, expected, maze
            ),
        }
    }
    // both outcomes should be exercised
    assert!(found > 0);
    assert!(missing > 0);
}

#[test]
fn exhaustive_table_matches_reference() {
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..N_MAZES {
        let maze = random_maze(&mut rng);
        let open = open_coords(&maze);
        let start = match open.choose(&mut rng) {
            Some(&start) => start,
            None => continue,
        };
        let expected = reference_distances(&maze, start);
        let result = relax(&maze, start, start, SearchConfig::exhaustive());
        let (table, _) = result.unwrap();
        for y in 0..HEIGHT as i32 {
            for x in 0..WIDTH as i32 {
                let coord = Coord::new(x, y);
                let index = (y * WIDTH as i32 + x) as usize;
                assert_eq!(table.distance(coord), expected[index]);
                assert_eq!(table.is_visited(coord), expected[index].is_some());
            }
        }
    }
}

#[test]
fn early_stop_agrees_with_exhaustive() {
    let mut rng = StdRng::seed_from_u64(2);
    for _ in 0..N_MAZES {
        let maze = random_maze(&mut rng);
        let open = open_coords(&maze);
        if open.len() < 2 {
            continue;
        }
        let start = open[0];
        let finish = open[open.len() - 1];
        let query = Query::new(maze, start, finish).unwrap();
        let early = find_path(&query, SearchConfig::default());
        let exhaustive = find_path(&query, SearchConfig::exhaustive());
        match (early, exhaustive) {
            (Ok(early), Ok(exhaustive)) => {
                assert_eq!(early.cost(), exhaustive.cost());
                assert!(
                    early.metadata.num_nodes_visited <= exhaustive.metadata.num_nodes_visited
                );
            }
            (Err(Error::NoPath), Err(Error::NoPath)) => (),
            (early, exhaustive) => panic!("{:?} vs {:?}", early, exhaustive),
        }
    }
}
