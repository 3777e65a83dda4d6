#![deny(missing_docs)]

//! Cut a rectangular cake into axis-aligned pieces so that every piece holds
//! exactly one flower and no cake is left over.
//!
//! The cake is cut with straight cuts only: each cut runs across the full
//! width or height of the region being cut, splitting it in two. Regions are
//! bisected where possible, cut right before their farthest flower when a
//! bisection would leave a side without flowers, and retried in the other
//! direction when neither works.
//!
//! ```
//! use cake_cutting::{cut_all, Cake, Coordinate};
//!
//! let mut cake = Cake::new(4, 2, [Coordinate::new(1, 1), Coordinate::new(4, 2)])?;
//! cut_all(&mut cake)?;
//!
//! assert_eq!(cake.pieces().len(), 2);
//! assert_eq!(cake.piece_of(2, 2), Some(1));
//! assert_eq!(cake.piece_of(3, 1), Some(2));
//! # Ok::<(), cake_cutting::CakeError>(())
//! ```
//!
//! The cutting strategy does not minimise the number of cuts and does not
//! optimise the shape of the pieces.

pub mod cake;
pub mod cutter;
pub mod error;
pub mod region;

pub use cake::{Cake, Piece};
pub use cutter::{cut_all, CutStats, Cutter};
pub use error::{CakeError, Result};
pub use region::{Coordinate, Direction, Region};
