use crate::error::Error;
use grid_2d::*;
use std::fmt;

/// Largest cost a single cell may carry.
pub const MAX_CELL_COST: u8 = 9;

pub trait SolidGrid {
    /// Extent of the grid. Every coordinate inside it is reported by
    /// `is_solid` as `Some`.
    fn size(&self) -> Size;
    fn is_solid(&self, coord: Coord) -> Option<bool>;
    fn is_solid_or_outside(&self, coord: Coord) -> bool {
        self.is_solid(coord).unwrap_or(true)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CostCell<Cost> {
    Solid,
    Cost(Cost),
}

impl<Cost> CostCell<Cost> {
    pub fn is_solid(&self) -> bool {
        if let CostCell::Solid = self {
            true
        } else {
            false
        }
    }

    pub fn cost(self) -> Option<Cost> {
        match self {
            CostCell::Solid => None,
            CostCell::Cost(cost) => Some(cost),
        }
    }
}

/// The cost of entering a cell. Movement is 4-connected, so unlike the
/// direction-aware grids this only depends on the destination.
pub trait CostGrid: SolidGrid {
    type Cost;
    fn cost(&self, coord: Coord) -> Option<CostCell<Self::Cost>>;
}

/// A rectangular maze of cell costs. `0` is a wall, `1..=9` is the cost of
/// entering the cell. Coordinates have `x` as the column and `y` as the row.
#[cfg_attr(
    feature = "serialize",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawMaze", into = "RawMaze")
)]
#[derive(Debug, Clone)]
pub struct Maze {
    cells: Grid<u8>,
}

/// Serialized form of a [`Maze`]. Deserialization goes through
/// [`Maze::new`] so the same checks apply.
#[cfg(feature = "serialize")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RawMaze {
    width: u32,
    height: u32,
    cells: Vec<u8>,
}

#[cfg(feature = "serialize")]
impl std::convert::TryFrom<RawMaze> for Maze {
    type Error = Error;
    fn try_from(raw: RawMaze) -> Result<Self, Self::Error> {
        Maze::new(Size::new(raw.width, raw.height), raw.cells)
    }
}

#[cfg(feature = "serialize")]
impl From<Maze> for RawMaze {
    fn from(maze: Maze) -> Self {
        let mut cells = Vec::new();
        for y in 0..maze.height() as i32 {
            for x in 0..maze.width() as i32 {
                cells.extend(maze.cost(Coord::new(x, y)));
            }
        }
        RawMaze {
            width: maze.width(),
            height: maze.height(),
            cells,
        }
    }
}

impl Maze {
    /// Builds a maze from row-major cell values.
    pub fn new(size: Size, values: Vec<u8>) -> Result<Self, Error> {
        check_size(size)?;
        if values.len() != cell_count(size)? {
            return Err(Error::Structure);
        }
        if values.iter().any(|&cost| cost > MAX_CELL_COST) {
            return Err(Error::Structure);
        }
        let width = size.width() as usize;
        let cells = Grid::new_fn(size, |coord| {
            values[coord.y as usize * width + coord.x as usize]
        });
        Ok(Self { cells })
    }

    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, Error> {
        let width = rows.first().map_or(0, |row| row.as_ref().len());
        if rows.iter().any(|row| row.as_ref().len() != width) {
            return Err(Error::Structure);
        }
        if width > i32::MAX as usize || rows.len() > i32::MAX as usize {
            return Err(Error::Dimension);
        }
        let size = Size::new(width as u32, rows.len() as u32);
        let cells = rows
            .iter()
            .flat_map(|row| row.as_ref().iter().cloned())
            .collect();
        Self::new(size, cells)
    }

    pub fn size(&self) -> Size {
        self.cells.size()
    }

    pub fn width(&self) -> u32 {
        self.cells.width()
    }

    pub fn height(&self) -> u32 {
        self.cells.height()
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.cells.get(coord).is_some()
    }

    /// The stored value, or `None` outside the maze.
    pub fn cost(&self, coord: Coord) -> Option<u8> {
        self.cells.get(coord).cloned()
    }

    /// In bounds and not a wall.
    pub fn is_open(&self, coord: Coord) -> bool {
        match self.cost(coord) {
            Some(cost) => cost != 0,
            None => false,
        }
    }
}

pub(crate) fn check_size(size: Size) -> Result<(), Error> {
    if size.width() == 0 || size.height() == 0 {
        return Err(Error::Dimension);
    }
    // coordinates are signed
    if size.width() > i32::MAX as u32 || size.height() > i32::MAX as u32 {
        return Err(Error::Dimension);
    }
    Ok(())
}

pub(crate) fn cell_count(size: Size) -> Result<usize, Error> {
    (size.width() as usize)
        .checked_mul(size.height() as usize)
        .ok_or(Error::Dimension)
}

impl SolidGrid for Maze {
    fn size(&self) -> Size {
        self.cells.size()
    }
    fn is_solid(&self, coord: Coord) -> Option<bool> {
        self.cost(coord).map(|cost| cost == 0)
    }
}

impl CostGrid for Maze {
    type Cost = u64;
    fn cost(&self, coord: Coord) -> Option<CostCell<Self::Cost>> {
        match Maze::cost(self, coord)? {
            0 => Some(CostCell::Solid),
            cost => Some(CostCell::Cost(cost as u64)),
        }
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in 0..self.height() as i32 {
            for x in 0..self.width() as i32 {
                if x > 0 {
                    write!(f, " ")?;
                }
                if let Some(cost) = self.cells.get(Coord::new(x, y)) {
                    write!(f, "{}", cost)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
