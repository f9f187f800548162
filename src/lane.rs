//! Lanes and the per-lane damage accumulator.

use crate::constants::*;
use crate::error::*;
use crate::ledger::*;
use log::*;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Lane {
    Left,
    Middle,
    Right,
}

impl Lane {
    /// Enumeration order, which is also the tie-break order.
    pub const ALL: [Lane; 3] = [Lane::Left, Lane::Middle, Lane::Right];

    pub fn index(self) -> usize {
        match self {
            Lane::Left => 0,
            Lane::Middle => 1,
            Lane::Right => 2,
        }
    }

    /// The lane on the other flank. The middle lane mirrors onto itself.
    pub fn mirrored(self) -> Lane {
        match self {
            Lane::Left => Lane::Right,
            Lane::Middle => Lane::Middle,
            Lane::Right => Lane::Left,
        }
    }
}

/// X-coordinate boundaries splitting an arena of a given width into lanes.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
pub struct LaneBoundaries {
    width: u8,
    left_end: u8,
    right_start: u8,
}

impl LaneBoundaries {
    /// Boundaries scaled from the 28-wide reference split at 9 and 19.
    pub fn for_width(width: u8) -> Self {
        let scale = |numerator: u32| (width as u32 * numerator / LANE_DENOMINATOR) as u8;
        LaneBoundaries {
            width,
            left_end: scale(LEFT_LANE_END_NUMERATOR),
            right_start: scale(RIGHT_LANE_START_NUMERATOR),
        }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    /// Lane for an x-coordinate, or an error if x is off the grid.
    pub fn lane_of(&self, x: u8) -> PlannerResult<Lane> {
        if x >= self.width {
            return Err(PlannerError::InconsistentState(format!(
                "x = {} is outside a grid of width {}",
                x, self.width
            )));
        }

        Ok(if x < self.left_end {
            Lane::Left
        } else if x < self.right_start {
            Lane::Middle
        } else {
            Lane::Right
        })
    }

    pub fn contains(&self, lane: Lane, x: u8) -> bool {
        matches!(self.lane_of(x), Ok(l) if l == lane)
    }
}

impl Default for LaneBoundaries {
    fn default() -> Self {
        LaneBoundaries::for_width(ARENA_SIZE)
    }
}

/// Running count of destroyed structures per lane. Only ever grows over a match.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct LaneWeights {
    counts: [u32; 3],
}

impl LaneWeights {
    pub fn new() -> Self {
        LaneWeights::default()
    }

    pub fn from_counts(left: u32, middle: u32, right: u32) -> Self {
        LaneWeights {
            counts: [left, middle, right],
        }
    }

    pub fn get(&self, lane: Lane) -> u32 {
        self.counts[lane.index()]
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// The largest weight together with its lane. Ties go to the lane that
    /// comes first in [`Lane::ALL`].
    pub fn heaviest(&self) -> (Lane, u32) {
        Lane::ALL
            .into_iter()
            .map(|lane| (lane, self.get(lane)))
            .fold((Lane::Left, 0), |best, candidate| {
                if candidate.1 > best.1 {
                    candidate
                } else {
                    best
                }
            })
    }

    /// Add one to the lane of every destroyed structure.
    ///
    /// Every position is classified before any weight changes, so a failed
    /// call leaves the weights untouched.
    pub fn attribute(&mut self, destroyed: &Ledger, boundaries: &LaneBoundaries) -> PlannerResult<()> {
        let lanes = destroyed
            .iter()
            .map(|(_, location)| boundaries.lane_of(location.x()))
            .collect::<PlannerResult<Vec<_>>>()?;

        for lane in lanes {
            self.counts[lane.index()] = self.counts[lane.index()].saturating_add(1);
        }

        if !destroyed.is_empty() {
            debug!(
                "Attributed {} destroyed structures, lane weights now L{} M{} R{}",
                destroyed.len(),
                self.counts[0],
                self.counts[1],
                self.counts[2]
            );
        }

        Ok(())
    }
}
