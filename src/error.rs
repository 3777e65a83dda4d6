//! Errors reported while building or cutting a [`Cake`](crate::Cake).

use thiserror::Error;

use crate::region::Region;

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, CakeError>;

/// Everything that can go wrong while building or cutting a cake.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CakeError {
    /// The cake has no cells, or more cells than fit in a `usize`.
    #[error("invalid cake dimensions {width}x{height}, both sides must be positive and their product must fit in a usize")]
    InvalidDimensions {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },
    /// A flower lies outside of `[1, width] x [1, height]`.
    #[error("flower ({x}, {y}) is outside of the {width}x{height} cake")]
    FlowerOutOfBounds {
        /// Column of the offending flower.
        x: usize,
        /// Row of the offending flower.
        y: usize,
        /// Width of the cake.
        width: usize,
        /// Height of the cake.
        height: usize,
    },
    /// No piece can ever hold exactly one flower.
    #[error("the cake has no flowers")]
    NoFlowers,
    /// The cake has already been cut into pieces.
    #[error("the cake has already been cut")]
    AlreadyCut,
    /// A region kept switching cut direction without ever separating its
    /// flowers.
    #[error("no straight cut separates the flowers of {region:?} after {switches} direction switches")]
    NonTerminatingSplit {
        /// The region that could not be split.
        region: Region,
        /// How many times the direction was switched for this region.
        switches: usize,
    },
}
