//! Turns whitespace-delimited tokens into a validated [`Query`].
//!
//! The expected layout is `height width`, then `height * width` cell costs
//! in row-major order, then `startRow startCol finishRow finishCol`.

use crate::error::Error;
use crate::grid::*;
use grid_2d::{Coord, Size};
use log::debug;
use std::convert::TryFrom;
use std::io::Read;
use std::str::FromStr;

/// A maze together with validated endpoints: both open, both inside the
/// maze, and distinct.
#[cfg_attr(
    feature = "serialize",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawQuery")
)]
#[derive(Debug, Clone)]
pub struct Query {
    maze: Maze,
    start: Coord,
    finish: Coord,
}

#[cfg(feature = "serialize")]
#[derive(serde::Deserialize)]
struct RawQuery {
    maze: Maze,
    start: Coord,
    finish: Coord,
}

#[cfg(feature = "serialize")]
impl TryFrom<RawQuery> for Query {
    type Error = Error;
    fn try_from(raw: RawQuery) -> Result<Self, Self::Error> {
        Query::new(raw.maze, raw.start, raw.finish)
    }
}

impl Query {
    pub fn new(maze: Maze, start: Coord, finish: Coord) -> Result<Self, Error> {
        if !maze.is_open(start) || !maze.is_open(finish) || start == finish {
            return Err(Error::Endpoint);
        }
        Ok(Self {
            maze,
            start,
            finish,
        })
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn start(&self) -> Coord {
        self.start
    }

    pub fn finish(&self) -> Coord {
        self.finish
    }

    pub fn from_tokens<'a, I>(tokens: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut tokens = tokens.into_iter();

        let height = next_dimension(&mut tokens)?;
        let width = next_dimension(&mut tokens)?;
        let size = Size::new(width, height);
        let count = cell_count(size)?;

        let mut values = Vec::new();
        for _ in 0..count {
            let value = tokens
                .next()
                .and_then(|token| token.parse::<u8>().ok())
                .filter(|&value| value <= MAX_CELL_COST)
                .ok_or(Error::Structure)?;
            values.push(value);
        }
        let maze = Maze::new(size, values)?;

        let start = next_position(&mut tokens)?;
        let finish = next_position(&mut tokens)?;

        let trailing = tokens.count();
        if trailing > 0 {
            debug!("ignoring {} trailing tokens", trailing);
        }

        debug!(
            "read {}x{} maze, start {:?}, finish {:?}",
            height, width, start, finish
        );
        Self::new(maze, start, finish)
    }

    pub fn read<R: Read>(mut reader: R) -> Result<Self, Error> {
        let mut buf = String::new();
        reader.read_to_string(&mut buf)?;
        buf.parse()
    }
}

impl FromStr for Query {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tokens(s.split_ascii_whitespace())
    }
}

fn next_dimension<'a, I>(tokens: &mut I) -> Result<u32, Error>
where
    I: Iterator<Item = &'a str>,
{
    let dimension = tokens
        .next()
        .and_then(|token| token.parse::<u32>().ok())
        .ok_or(Error::Dimension)?;
    if dimension == 0 || dimension > i32::MAX as u32 {
        return Err(Error::Dimension);
    }
    Ok(dimension)
}

/// Reads a `row col` pair into a coordinate. Values that cannot be a
/// coordinate at all are endpoint errors just like out-of-range ones.
fn next_position<'a, I>(tokens: &mut I) -> Result<Coord, Error>
where
    I: Iterator<Item = &'a str>,
{
    let mut next = || {
        tokens
            .next()
            .and_then(|token| token.parse::<i64>().ok())
            .and_then(|value| i32::try_from(value).ok())
            .ok_or(Error::Endpoint)
    };
    let row = next()?;
    let col = next()?;
    Ok(Coord::new(col, row))
}
