mod random;

use crate::grid::*;
use grid_2d::*;

/// Builds a maze from rows of characters: digits are cell costs, `#` is a
/// wall, `.` costs 1, `,` costs 9, and `s`/`g` mark the start and goal on
/// cells of cost 1.
pub(crate) fn maze_from_strings(strings: &[&str]) -> (Maze, Coord, Coord) {
    let mut rows = Vec::new();
    let mut start = None;
    let mut goal = None;
    for (i, line) in strings.iter().enumerate() {
        let mut row = Vec::new();
        for (j, ch) in line.chars().enumerate() {
            let coord = Coord::new(j as i32, i as i32);
            let cost = match ch {
                '.' => 1,
                ',' => 9,
                '#' => 0,
                's' => {
                    start = Some(coord);
                    1
                }
                'g' => {
                    goal = Some(coord);
                    1
                }
                d if d.is_ascii_digit() => d as u8 - b'0',
                _ => panic!("unexpected character {:?}", ch),
            };
            row.push(cost);
        }
        rows.push(row);
    }
    let maze = Maze::from_rows(&rows).unwrap();
    (maze, start.unwrap(), goal.unwrap())
}
