//! The cake: its dimensions, where the flowers are, and which piece every
//! cell ended up in once it has been cut.

use crate::{
    error::{CakeError, Result},
    region::{Coordinate, Region},
};
use std::{collections::BTreeSet, fmt};

/// A finished piece of cake.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Piece {
    /// Identifier of the piece, starting at 1.
    pub id: usize,
    /// The cells covered by the piece.
    pub region: Region,
}

/// A rectangular cake with flowers on some of its cells.
#[derive(Debug, Clone)]
pub struct Cake {
    width: usize,
    height: usize,
    flowers: BTreeSet<Coordinate>,
    pieces: Vec<Piece>,
}

impl Cake {
    /// Create a new, uncut cake.
    ///
    /// Duplicate flowers collapse into one. Fails if either side is zero,
    /// if the number of cells does not fit in a `usize`, if there are no
    /// flowers, or if a flower lies outside of the cake.
    pub fn new(
        width: usize,
        height: usize,
        flowers: impl IntoIterator<Item = Coordinate>,
    ) -> Result<Self> {
        if width == 0 || height == 0 || width.checked_mul(height).is_none() {
            return Err(CakeError::InvalidDimensions { width, height });
        }

        let flowers: BTreeSet<_> = flowers.into_iter().collect();

        if let Some(flower) = flowers
            .iter()
            .find(|flower| !(1..=width).contains(&flower.x) || !(1..=height).contains(&flower.y))
        {
            return Err(CakeError::FlowerOutOfBounds {
                x: flower.x,
                y: flower.y,
                width,
                height,
            });
        }

        if flowers.is_empty() {
            return Err(CakeError::NoFlowers);
        }

        Ok(Cake {
            width,
            height,
            flowers,
            pieces: Vec::new(),
        })
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The flowers on the cake, ordered by `x` then `y`.
    pub fn flowers(&self) -> &BTreeSet<Coordinate> {
        &self.flowers
    }

    /// The finished pieces, ordered by identifier. Empty until the cake is
    /// cut.
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Return true once the cake has been cut into pieces.
    pub fn is_cut(&self) -> bool {
        !self.pieces.is_empty()
    }

    /// The region covering the whole cake, where cutting starts.
    pub fn full_extent(&self) -> Region {
        Region::new(1, 1, self.width, self.height)
    }

    /// Return the identifier of the piece containing the cell `(x, y)`, or
    /// `None` if no piece covers it.
    pub fn piece_of(&self, x: usize, y: usize) -> Option<usize> {
        let mut owners = self
            .pieces
            .iter()
            .filter(|piece| piece.region.contains(x, y));

        let first = owners.next()?;
        if let Some(other) = owners.next() {
            log::warn!(
                "Cell ({}, {}) is covered by overlapping pieces [{}] and [{}].",
                x,
                y,
                first.id,
                other.id
            );
        }

        Some(first.id)
    }

    /// Number of cells not covered by any piece.
    pub fn leftover_cells(&self) -> usize {
        let covered: usize = self.pieces.iter().map(|piece| piece.region.area()).sum();

        (self.width * self.height).saturating_sub(covered)
    }

    /// List the pieces, one per line as `y1 x1 y2 x2`, followed by a line
    /// holding the number of leftover cells.
    ///
    /// An uncut cake reports only its leftover count, the full area.
    pub fn report(&self) -> String {
        let mut report = String::new();

        for Piece { region, .. } in &self.pieces {
            report.push_str(&format!(
                "{} {} {} {}\n",
                region.y1(),
                region.x1(),
                region.y2(),
                region.x2()
            ));
        }
        report.push_str(&format!("{}\n", self.leftover_cells()));

        report
    }

    /// Store the finished regions, numbering them from 1 in `(y1, x1)` order.
    pub(crate) fn assign_pieces(&mut self, mut regions: Vec<Region>) {
        regions.sort_by_key(|region| (region.y1(), region.x1()));

        self.pieces = regions
            .into_iter()
            .enumerate()
            .map(|(index, region)| Piece {
                id: index + 1,
                region,
            })
            .collect();
    }
}

impl fmt::Display for Cake {
    /// Draw the cake top row first: `@` marks a flower, a number marks the
    /// piece a cell belongs to and `·` marks an unassigned cell.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in (1..=self.height).rev() {
            for x in 1..=self.width {
                if self.flowers.contains(&Coordinate { x, y }) {
                    write!(f, "@ ")?;
                } else if let Some(id) = self.piece_of(x, y) {
                    write!(f, "{id} ")?;
                } else {
                    write!(f, "· ")?;
                }
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::iter;

    fn c(x: usize, y: usize) -> Coordinate {
        Coordinate { x, y }
    }

    #[test]
    fn rejects_invalid_input() {
        assert_eq!(
            Cake::new(0, 3, [c(1, 1)]).unwrap_err(),
            CakeError::InvalidDimensions {
                width: 0,
                height: 3
            }
        );
        assert_eq!(
            Cake::new(3, 0, [c(1, 1)]).unwrap_err(),
            CakeError::InvalidDimensions {
                width: 3,
                height: 0
            }
        );
        assert_eq!(Cake::new(3, 3, iter::empty()).unwrap_err(), CakeError::NoFlowers);
        assert_eq!(
            Cake::new(3, 2, [c(1, 1), c(2, 3)]).unwrap_err(),
            CakeError::FlowerOutOfBounds {
                x: 2,
                y: 3,
                width: 3,
                height: 2
            }
        );
        assert!(matches!(
            Cake::new(3, 2, [c(0, 1)]),
            Err(CakeError::FlowerOutOfBounds { x: 0, y: 1, .. })
        ));
    }

    #[test]
    fn rejects_cakes_with_too_many_cells() {
        let width = usize::MAX / 2 + 1;

        assert_eq!(
            Cake::new(width, 4, [c(1, 1), c(width, 4)]).unwrap_err(),
            CakeError::InvalidDimensions { width, height: 4 }
        );

        // The largest cake that still fits can be cut and reported.
        let mut cake = Cake::new(usize::MAX, 1, [c(1, 1), c(usize::MAX, 1)]).unwrap();
        assert_eq!(cake.leftover_cells(), usize::MAX);
        crate::cut_all(&mut cake).unwrap();
        assert_eq!(cake.leftover_cells(), 0);
        assert_eq!(cake.report().lines().last(), Some("0"));
    }

    #[test]
    fn duplicate_flowers_collapse() {
        let cake = Cake::new(2, 2, [c(1, 1), c(1, 1), c(2, 2)]).unwrap();

        assert_eq!(cake.flowers().len(), 2);
    }

    #[test]
    fn uncut_cake() {
        let cake = Cake::new(3, 2, [c(2, 2)]).unwrap();

        assert_eq!(cake.full_extent(), Region::new(1, 1, 3, 2));
        assert!(!cake.is_cut());
        assert!(cake.pieces().is_empty());
        for cell in cake.full_extent().cells() {
            assert_eq!(cake.piece_of(cell.x, cell.y), None);
        }
        assert_eq!(cake.leftover_cells(), 6);
        assert_eq!(cake.report(), "6\n");
        assert_eq!(cake.to_string(), "· @ · \n· · · \n");
    }

    #[test]
    fn pieces_numbered_bottom_row_first() {
        let mut cake = Cake::new(4, 2, [c(1, 1), c(4, 2)]).unwrap();
        cake.assign_pieces(vec![Region::new(3, 1, 4, 2), Region::new(1, 1, 2, 2)]);

        assert_eq!(
            cake.pieces(),
            &[
                Piece {
                    id: 1,
                    region: Region::new(1, 1, 2, 2)
                },
                Piece {
                    id: 2,
                    region: Region::new(3, 1, 4, 2)
                },
            ]
        );
        assert_eq!(cake.piece_of(2, 2), Some(1));
        assert_eq!(cake.piece_of(3, 1), Some(2));
        assert_eq!(cake.piece_of(5, 1), None);
        assert_eq!(cake.leftover_cells(), 0);
        assert_eq!(cake.report(), "1 1 2 2\n1 3 2 4\n0\n");
        assert_eq!(cake.to_string(), "1 1 2 @ \n@ 1 2 2 \n");
    }
}
