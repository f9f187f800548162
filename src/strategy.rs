//! Strategy selection.
//!
//! The selector is a pure function of the lane weights: the opening build
//! holds until some lane has lost `threshold` structures, after which the
//! planner reinforces whichever lane has lost the most. Weights never
//! decrease, so once the threshold is crossed the opening build never
//! comes back; the reinforced lane can still change as losses shift.

use crate::lane::*;
use log::*;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    /// Baseline walls, turrets and shields across the whole front.
    #[default]
    InitialBuild,
    /// Extra defences in the left lane, attacks through the right.
    ReinforceLeft,
    /// Extra defences in the middle lane.
    ReinforceMiddle,
    /// Extra defences in the right lane, attacks through the left.
    ReinforceRight,
}

impl Strategy {
    pub fn reinforcing(lane: Lane) -> Strategy {
        match lane {
            Lane::Left => Strategy::ReinforceLeft,
            Lane::Middle => Strategy::ReinforceMiddle,
            Lane::Right => Strategy::ReinforceRight,
        }
    }

    /// The lane this strategy reinforces, if any.
    pub fn reinforced_lane(self) -> Option<Lane> {
        match self {
            Strategy::InitialBuild => None,
            Strategy::ReinforceLeft => Some(Lane::Left),
            Strategy::ReinforceMiddle => Some(Lane::Middle),
            Strategy::ReinforceRight => Some(Lane::Right),
        }
    }

    /// The lane mobile units are launched into under this strategy.
    pub fn deployment_lane(self) -> Lane {
        match self {
            Strategy::InitialBuild => Lane::Left,
            Strategy::ReinforceLeft => Lane::Right,
            Strategy::ReinforceMiddle => Lane::Right,
            Strategy::ReinforceRight => Lane::Left,
        }
    }
}

/// Picks the strategy for a turn from the weights accumulated so far.
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
pub struct StrategySelector {
    threshold: u32,
}

impl StrategySelector {
    pub fn new(threshold: u32) -> Self {
        StrategySelector { threshold }
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    pub fn select(&self, weights: &LaneWeights) -> Strategy {
        let (lane, weight) = weights.heaviest();
        let strategy = if weight < self.threshold {
            Strategy::InitialBuild
        } else {
            Strategy::reinforcing(lane)
        };

        trace!("Selected {:?} from {:?}", strategy, weights);

        strategy
    }
}

impl Default for StrategySelector {
    fn default() -> Self {
        StrategySelector::new(crate::constants::REINFORCE_THRESHOLD)
    }
}
