use grid_2d::*;

#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy)]
pub struct DistanceCell<Cost> {
    pub(crate) visited: bool,
    pub(crate) distance: Option<Cost>,
    pub(crate) coord: Coord,
}

impl<Cost> DistanceCell<Cost> {
    fn new(coord: Coord) -> Self {
        Self {
            visited: false,
            distance: None,
            coord,
        }
    }
}

impl<Cost> DistanceCell<Cost>
where
    Cost: Copy,
{
    /// Minimum known cost from the origin, including the origin's own cost.
    pub fn distance(&self) -> Option<Cost> {
        self.distance
    }
    /// Whether the distance is final.
    pub fn is_visited(&self) -> bool {
        self.visited
    }
    pub fn coord(&self) -> Coord {
        self.coord
    }
}

#[derive(Debug, Clone)]
pub enum DistanceEntry<'a, Cost: 'a> {
    Origin(&'a DistanceCell<Cost>),
    Unreached,
    Outside,
    Cell(&'a DistanceCell<Cost>),
}

impl<'a, Cost> DistanceEntry<'a, Cost> {
    pub fn cell(self) -> Option<&'a DistanceCell<Cost>> {
        match self {
            DistanceEntry::Origin(c) | DistanceEntry::Cell(c) => Some(c),
            _ => None,
        }
    }
    pub fn is_origin(&self) -> bool {
        matches!(self, DistanceEntry::Origin(_))
    }
    pub fn is_unreached(&self) -> bool {
        matches!(self, DistanceEntry::Unreached)
    }
    pub fn is_outside(&self) -> bool {
        matches!(self, DistanceEntry::Outside)
    }
}

/// Per-query table of minimum distances from a single origin. Cells that
/// were never relaxed hold no distance.
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct DistanceTable<Cost> {
    pub(crate) grid: Grid<DistanceCell<Cost>>,
    pub(crate) origin: Coord,
}

impl<Cost> DistanceTable<Cost>
where
    Cost: Copy,
{
    pub(crate) fn new(size: Size, origin: Coord) -> Self {
        Self {
            grid: Grid::new_fn(size, DistanceCell::new),
            origin,
        }
    }

    pub fn width(&self) -> u32 {
        self.grid.width()
    }

    pub fn height(&self) -> u32 {
        self.grid.height()
    }

    pub fn size(&self) -> Size {
        self.grid.size()
    }

    pub fn origin(&self) -> Coord {
        self.origin
    }

    pub fn get(&self, coord: Coord) -> DistanceEntry<'_, Cost> {
        if let Some(cell) = self.grid.get(coord) {
            if cell.distance.is_none() {
                DistanceEntry::Unreached
            } else if coord == self.origin {
                DistanceEntry::Origin(cell)
            } else {
                DistanceEntry::Cell(cell)
            }
        } else {
            DistanceEntry::Outside
        }
    }

    pub fn distance(&self, coord: Coord) -> Option<Cost> {
        self.grid.get(coord).and_then(|cell| cell.distance)
    }

    pub fn is_visited(&self, coord: Coord) -> bool {
        self.grid.get(coord).map_or(false, |cell| cell.visited)
    }
}
