//! Attack planner: picks a launch cell in the strategy's deployment lane
//! and spends the bit budget on a wave of mobile units.

use crate::board::*;
use crate::catalog::*;
use crate::config::*;
use crate::lane::*;
use crate::location::*;
use crate::plan::*;
use crate::strategy::*;
use fnv::FnvHashMap;
use log::*;
use serde::{Deserialize, Serialize};

/// Units sent under a strategy, in the order they are bought.
pub fn wave_for(strategy: Strategy, opening: bool) -> &'static [MobileKind] {
    if opening {
        return &[MobileKind::Scout];
    }
    match strategy {
        Strategy::InitialBuild => &[MobileKind::Demolisher, MobileKind::Interceptor],
        Strategy::ReinforceLeft | Strategy::ReinforceMiddle | Strategy::ReinforceRight => &[MobileKind::Scout],
    }
}

/// First free friendly edge cell in `lane`, starting from the outer corner
/// of the lane. `None` when every cell is blocked by a structure.
pub fn launch_location(board: &dyn GameBoard, lane: Lane, boundaries: &LaneBoundaries) -> Option<Location> {
    let size = board.arena_size();
    let mut candidates: Vec<Location> = Edge::FRIENDLY
        .iter()
        .flat_map(|edge| board.edge_positions(*edge))
        .filter(|loc| loc.in_arena(size) && boundaries.contains(lane, loc.x()))
        .collect();

    candidates.sort_by_key(|loc| loc.x());
    if lane == Lane::Right {
        candidates.reverse();
    }

    candidates.into_iter().find(|loc| !board.contains_structure(*loc))
}

/// Attack state carried across turns: opponent health history and whether
/// the launch side has been flipped because attacks stalled.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AttackPlanner {
    health_history: FnvHashMap<u32, f32>,
    flipped: bool,
}

impl AttackPlanner {
    pub fn new() -> Self {
        AttackPlanner::default()
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    /// Record the opponent's health for `turn` and flip the launch side if
    /// it has not dropped over the last window. The check runs on every
    /// `stall_window`-th turn after the first. Call once per turn, before
    /// the build, so the gate and the launch cell agree.
    pub fn observe(&mut self, turn: u32, opponent_health: f32, config: &PlannerConfig) {
        let window = config.stall_window;

        if window > 0 && turn > 0 && turn % window == 0 {
            let reference_turn = turn.saturating_sub(window - 1);
            if let Some(reference) = self.health_history.get(&reference_turn) {
                if opponent_health >= *reference {
                    self.flipped = !self.flipped;
                    info!(
                        "Opponent health held at {} since turn {}, launch side flipped: {}",
                        opponent_health, reference_turn, self.flipped
                    );
                }
            }
        }

        self.health_history.insert(turn, opponent_health);
        // Only the last `window` turns can still be a reference.
        self.health_history.retain(|recorded, _| recorded.saturating_add(window) > turn);
    }

    /// The lane units go into this turn.
    pub fn attack_lane(&self, strategy: Strategy) -> Lane {
        let lane = strategy.deployment_lane();
        if self.flipped {
            lane.mirrored()
        } else {
            lane
        }
    }

    /// Deploy this turn's wave into [`AttackPlanner::attack_lane`]. Returns
    /// the lane launched into, or `None` if nothing was sent.
    pub fn execute(
        &self,
        strategy: Strategy,
        board: &mut dyn GameBoard,
        catalog: &UnitCatalog,
        config: &PlannerConfig,
        boundaries: &LaneBoundaries,
        plan: &mut TurnPlan,
    ) -> Option<Lane> {
        let turn = board.turn_number();
        let opening = turn < config.opening_turns;
        let bits = board.resource_available(MobileKind::Scout.into());
        if bits <= 0.0 || (!opening && bits < config.stockpile_threshold) {
            trace!("Holding {} bits on turn {}", bits, turn);
            return None;
        }

        let lane = self.attack_lane(strategy);
        let location = match launch_location(board, lane, boundaries) {
            Some(location) => location,
            None => {
                warn!("No free launch cell in {:?} lane on turn {}", lane, turn);
                return None;
            }
        };

        let mut deployed = 0u32;
        for &kind in wave_for(strategy, opening) {
            let unit = UnitKind::Mobile(kind);
            let cost = catalog.cost(unit);
            while deployed < config.max_deployments_per_turn && board.resource_available(unit) >= cost {
                if !(board.can_place(unit, location) && board.place(unit, location)) {
                    break;
                }
                plan.push(TurnOperation::Deploy { kind, location });
                deployed += 1;
            }
        }

        debug!(
            "Deployed {} units at ({}, {}) in {:?} lane on turn {}",
            deployed,
            location.x(),
            location.y(),
            lane,
            turn
        );

        if deployed > 0 {
            Some(lane)
        } else {
            None
        }
    }
}
