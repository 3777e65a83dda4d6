//! Cut a [`Cake`] into pieces that each hold exactly one flower, using only
//! straight cuts across the full width or height of the current region.
//!
//! Every region on the worklist goes through the same states:
//!
//!  1. Bisect it along the chosen direction. If both halves have flowers,
//!     queue them.
//!  2. Otherwise cut right before the flower farthest along that direction.
//!     If both sides have flowers, queue them.
//!  3. Otherwise switch direction and start over with the same region.
//!
//! A region holding a single flower is a finished piece.

use crate::{
    cake::Cake,
    error::{CakeError, Result},
    region::{Coordinate, Direction, Region},
};

/// Counters describing how a cake was cut.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct CutStats {
    /// Number of pieces produced.
    pub pieces: usize,
    /// Number of cuts made at the midpoint of a region.
    pub balanced_splits: usize,
    /// Number of cuts made right before the farthest flower of a region.
    pub anchored_splits: usize,
    /// Number of times a region had to be retried in the other direction.
    pub direction_switches: usize,
}

/// Cuts cakes into single flower pieces.
#[derive(Debug, Clone)]
pub struct Cutter {
    max_direction_switches: usize,
}

impl Default for Cutter {
    fn default() -> Self {
        Cutter {
            max_direction_switches: 1,
        }
    }
}

#[derive(Debug)]
enum FrameState {
    // Before trying the midpoint
    Balanced,
    // After the midpoint left a side empty
    Anchored,
    // After both splits failed, before retrying the other direction
    Switch,
}

#[derive(Debug)]
struct Frame {
    region: Region,
    flowers: Vec<Coordinate>,
    direction: Direction,
    switches: usize,
    state: FrameState,
}

impl Frame {
    fn new(region: Region, flowers: Vec<Coordinate>) -> Self {
        Frame {
            region,
            flowers,
            direction: Direction::choose(&region),
            switches: 0,
            state: FrameState::Balanced,
        }
    }
}

impl Cutter {
    /// Create a cutter with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how many times in a row a single region may switch its cut
    /// direction before cutting fails with
    /// [`CakeError::NonTerminatingSplit`].
    pub fn with_max_direction_switches(mut self, max_direction_switches: usize) -> Self {
        self.max_direction_switches = max_direction_switches;
        self
    }

    /// The configured direction switch limit.
    pub fn max_direction_switches(&self) -> usize {
        self.max_direction_switches
    }

    /// Cut `cake` into pieces holding exactly one flower each and store them
    /// on the cake, numbered from 1 in `(y1, x1)` order.
    ///
    /// Fails without touching the cake if it was already cut, or if some
    /// region exceeds the direction switch limit.
    pub fn cut(&self, cake: &mut Cake) -> Result<CutStats> {
        if cake.is_cut() {
            return Err(CakeError::AlreadyCut);
        }

        log::debug!(
            "Cutting a [{}x{}] cake with [{}] flowers.",
            cake.width(),
            cake.height(),
            cake.flowers().len()
        );

        let (regions, stats) = self.cut_region(cake.full_extent(), cake.flowers())?;
        cake.assign_pieces(regions);

        log::debug!("Finished cutting: [{:?}].", stats);

        Ok(stats)
    }

    /// Cut `region` into single flower regions, returned in the order they
    /// were finished.
    ///
    /// The region must hold at least one of `flowers`.
    pub fn cut_region<'a>(
        &self,
        region: Region,
        flowers: impl IntoIterator<Item = &'a Coordinate>,
    ) -> Result<(Vec<Region>, CutStats)> {
        let mut stats = CutStats::default();
        let mut regions = Vec::new();

        let flowers = region.flowers_in(flowers);
        if flowers.is_empty() {
            return Err(CakeError::NoFlowers);
        }

        let mut stack = vec![Frame::new(region, flowers)];

        while let Some(mut frame) = stack.pop() {
            if frame.flowers.len() == 1 {
                log::trace!("Finished piece [{:?}].", frame.region);
                regions.push(frame.region);
                continue;
            }

            log::trace!(
                "Region [{:?}] with [{}] flowers in state [{:?}] going [{:?}].",
                frame.region,
                frame.flowers.len(),
                frame.state,
                frame.direction
            );

            let halves = match frame.state {
                FrameState::Balanced => {
                    frame.state = FrameState::Anchored;
                    frame
                        .region
                        .bisect(frame.direction)
                        .and_then(|halves| Self::separate(halves, &frame.flowers))
                        .map(|halves| {
                            stats.balanced_splits += 1;
                            halves
                        })
                }
                FrameState::Anchored => {
                    frame.state = FrameState::Switch;
                    frame
                        .region
                        .farthest_flower(&frame.flowers, frame.direction)
                        .and_then(|anchor| frame.region.split_before(anchor, frame.direction))
                        .and_then(|halves| Self::separate(halves, &frame.flowers))
                        .map(|halves| {
                            stats.anchored_splits += 1;
                            halves
                        })
                }
                FrameState::Switch => {
                    if frame.switches >= self.max_direction_switches {
                        return Err(CakeError::NonTerminatingSplit {
                            region: frame.region,
                            switches: frame.switches,
                        });
                    }

                    frame.direction = frame.direction.opposite();
                    frame.switches += 1;
                    frame.state = FrameState::Balanced;
                    stats.direction_switches += 1;
                    None
                }
            };

            match halves {
                Some((first, second)) => {
                    // Second half goes on first so the first half is cut first
                    stack.push(second);
                    stack.push(first);
                }
                None => stack.push(frame),
            }
        }

        stats.pieces = regions.len();

        Ok((regions, stats))
    }

    /// Turn a split into two frames, or `None` if a half has no flowers.
    fn separate(
        (first, second): (Region, Region),
        flowers: &[Coordinate],
    ) -> Option<(Frame, Frame)> {
        if !first.has_flower(flowers) || !second.has_flower(flowers) {
            return None;
        }

        Some((
            Frame::new(first, first.flowers_in(flowers)),
            Frame::new(second, second.flowers_in(flowers)),
        ))
    }
}

/// Cut `cake` with the default [`Cutter`].
pub fn cut_all(cake: &mut Cake) -> Result<CutStats> {
    Cutter::default().cut(cake)
}
