//! Geometry of the cake: cell coordinates, rectangular regions and the cut
//! directions that split them.
//!
//! All coordinates are 1 indexed, `x` grows to the right and `y` grows
//! upwards, so `(1, 1)` is the bottom left cell of the cake.

use std::{cmp::Reverse, fmt};

/// A single cell of the cake.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    /// The column, ranging from 1 to the cake width.
    pub x: usize,
    /// The row, ranging from 1 to the cake height.
    pub y: usize,
}

impl Coordinate {
    /// Create a new coordinate.
    pub fn new(x: usize, y: usize) -> Self {
        Coordinate { x, y }
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((x, y): (usize, usize)) -> Self {
        Coordinate { x, y }
    }
}

/// Orientation of a straight cut through a region.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    /// A vertical cut, separating columns. The halves differ in `x`.
    Vertical,
    /// A horizontal cut, separating rows. The halves differ in `y`.
    Horizontal,
}

impl Direction {
    /// Pick the cut that shortens the longer side of `region`.
    ///
    /// Square regions, and regions taller than they are wide, are cut
    /// horizontally.
    pub fn choose(region: &Region) -> Self {
        if region.x2 - region.x1 > region.y2 - region.y1 {
            Direction::Vertical
        } else {
            Direction::Horizontal
        }
    }

    /// Return the other direction.
    pub fn opposite(self) -> Self {
        match self {
            Direction::Vertical => Direction::Horizontal,
            Direction::Horizontal => Direction::Vertical,
        }
    }
}

/// An axis-aligned rectangle of cells, given by its bottom left corner
/// `(x1, y1)` and top right corner `(x2, y2)`, both inclusive.
///
/// Two regions are equal exactly when their corners are equal.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Region {
    x1: usize,
    y1: usize,
    x2: usize,
    y2: usize,
}

impl Region {
    /// Create a region from two opposite corners.
    ///
    /// # Panics
    ///
    /// Panics if `x1 > x2` or `y1 > y2`.
    pub fn new(x1: usize, y1: usize, x2: usize, y2: usize) -> Self {
        assert!(x1 <= x2, "invalid region, x1: {x1}, x2: {x2}");
        assert!(y1 <= y2, "invalid region, y1: {y1}, y2: {y2}");

        Region { x1, y1, x2, y2 }
    }

    /// Leftmost column.
    pub fn x1(&self) -> usize {
        self.x1
    }

    /// Bottom row.
    pub fn y1(&self) -> usize {
        self.y1
    }

    /// Rightmost column.
    pub fn x2(&self) -> usize {
        self.x2
    }

    /// Top row.
    pub fn y2(&self) -> usize {
        self.y2
    }

    /// Number of columns covered.
    pub fn width(&self) -> usize {
        self.x2 - self.x1 + 1
    }

    /// Number of rows covered.
    pub fn height(&self) -> usize {
        self.y2 - self.y1 + 1
    }

    /// Number of cells covered.
    pub fn area(&self) -> usize {
        self.width() * self.height()
    }

    /// Return true if the cell `(x, y)` lies inside this region.
    pub fn contains(&self, x: usize, y: usize) -> bool {
        (self.x1..=self.x2).contains(&x) && (self.y1..=self.y2).contains(&y)
    }

    /// Return true if the two regions share at least one cell.
    pub fn overlaps(&self, other: &Region) -> bool {
        self.x1 <= other.x2 && other.x1 <= self.x2 && self.y1 <= other.y2 && other.y1 <= self.y2
    }

    /// Return an iterator over every cell in this region, row by row.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> {
        let Region { x1, y1, x2, y2 } = *self;

        (y1..=y2).flat_map(move |y| (x1..=x2).map(move |x| Coordinate { x, y }))
    }

    /// Collect the flowers that lie inside this region into a new vector.
    ///
    /// The result never aliases `flowers`, so callers can hand it to
    /// independent branches of a cut.
    pub fn flowers_in<'a>(
        &self,
        flowers: impl IntoIterator<Item = &'a Coordinate>,
    ) -> Vec<Coordinate> {
        flowers
            .into_iter()
            .filter(|flower| self.contains(flower.x, flower.y))
            .copied()
            .collect()
    }

    /// Return true if at least one flower lies inside this region.
    pub fn has_flower<'a>(&self, flowers: impl IntoIterator<Item = &'a Coordinate>) -> bool {
        flowers
            .into_iter()
            .any(|flower| self.contains(flower.x, flower.y))
    }

    /// Split the region at its midpoint along `direction`.
    ///
    /// The first half ends at `start + (end - start) / 2` and the second
    /// half starts right after it, so the halves tile the region exactly.
    /// Returns `None` if the region is a single cell thick along the cut
    /// axis.
    pub fn bisect(&self, direction: Direction) -> Option<(Region, Region)> {
        let end = match direction {
            Direction::Vertical => self.x1 + (self.x2 - self.x1) / 2,
            Direction::Horizontal => self.y1 + (self.y2 - self.y1) / 2,
        };

        self.split_after(end, direction)
    }

    /// Among the flowers inside this region, return the one farthest along
    /// the cut axis of `direction`.
    ///
    /// For a vertical cut that is the flower with the largest `x`, ties
    /// going to the smallest `y`. For a horizontal cut it is the largest
    /// `y`, ties going to the smallest `x`.
    pub fn farthest_flower<'a>(
        &self,
        flowers: impl IntoIterator<Item = &'a Coordinate>,
        direction: Direction,
    ) -> Option<Coordinate> {
        let inside = flowers
            .into_iter()
            .filter(|flower| self.contains(flower.x, flower.y))
            .copied();

        match direction {
            Direction::Vertical => inside.max_by_key(|flower| (flower.x, Reverse(flower.y))),
            Direction::Horizontal => inside.max_by_key(|flower| (flower.y, Reverse(flower.x))),
        }
    }

    /// Split the region so that the second half starts on the line of
    /// `anchor` along the cut axis of `direction`.
    ///
    /// Returns `None` if `anchor` is on the first line of the region, or
    /// outside of it, since one half would then have no cells.
    pub fn split_before(
        &self,
        anchor: Coordinate,
        direction: Direction,
    ) -> Option<(Region, Region)> {
        if !self.contains(anchor.x, anchor.y) {
            return None;
        }

        let start = match direction {
            Direction::Vertical => anchor.x,
            Direction::Horizontal => anchor.y,
        };

        self.split_after(start.checked_sub(1)?, direction)
    }

    /// Split so that the first half ends on line `end` of the cut axis.
    fn split_after(&self, end: usize, direction: Direction) -> Option<(Region, Region)> {
        let Region { x1, y1, x2, y2 } = *self;

        match direction {
            Direction::Vertical if (x1..x2).contains(&end) => Some((
                Region::new(x1, y1, end, y2),
                Region::new(end + 1, y1, x2, y2),
            )),
            Direction::Horizontal if (y1..y2).contains(&end) => Some((
                Region::new(x1, y1, x2, end),
                Region::new(x1, end + 1, x2, y2),
            )),
            _ => None,
        }
    }
}

impl fmt::Debug for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})..=({}, {})", self.x1, self.y1, self.x2, self.y2)
    }
}
