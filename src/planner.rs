//! Public API for the adaptive planner.
//!
//! One `AdaptivePlanner` is built per match and fed the board once per
//! turn. It owns everything that has to survive between turns: the
//! expectation store, the lane weights and the attack history. Dropping it
//! at the end of the match discards all of that.
//!
//! Each turn runs in a fixed order:
//!
//! 1. The strategy is chosen from the lane weights as they stood at the
//!    end of the previous turn.
//! 2. The opponent's health is recorded, which may flip the attack side.
//!    The build and the attack both use the resulting lane.
//! 3. The expectation store is snapshotted, and the cells it names are
//!    checked against the board before anything is built.
//! 4. The build planner and the attack planner run, filling this turn's
//!    ledger and plan.
//! 5. Losses (expected but no longer standing) are attributed to lanes.
//! 6. The expectation store advances to the union of itself and the ledger.
//!
//! Losses seen in turn `t` therefore first influence the strategy in turn
//! `t + 1`.

use crate::attack::*;
use crate::board::*;
use crate::build::*;
use crate::catalog::*;
use crate::config::*;
use crate::damage::*;
use crate::error::*;
use crate::lane::*;
use crate::ledger::*;
use crate::strategy::*;
use log::*;

// Re-export key types for convenience
pub use crate::build::BuildSummary;
pub use crate::plan::{TurnOperation, TurnPlan};

/// Append-only builder for configuring a planner.
pub struct PlannerBuilder {
    config: PlannerConfig,
    catalog: UnitCatalog,
}

impl PlannerBuilder {
    /// Start with the default config and the standard unit catalog.
    pub fn new() -> Self {
        PlannerBuilder {
            config: PlannerConfig::default(),
            catalog: UnitCatalog::default(),
        }
    }

    /// Replace the whole config.
    pub fn config(mut self, config: PlannerConfig) -> Self {
        self.config = config;
        self
    }

    /// Use the unit catalog read from the match-start config.
    pub fn catalog(mut self, catalog: UnitCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Set the loss count at which a lane gets reinforced (default: 3).
    pub fn reinforce_threshold(mut self, threshold: u32) -> Self {
        self.config.reinforce_threshold = threshold;
        self
    }

    /// Set the arena width the lane boundaries are scaled to (default: 28).
    pub fn arena_size(mut self, size: u8) -> Self {
        self.config.arena_size = size;
        self
    }

    /// Validate the config and create the planner.
    pub fn build(self) -> PlannerResult<AdaptivePlanner> {
        self.config.validate()?;

        Ok(AdaptivePlanner {
            boundaries: LaneBoundaries::for_width(self.config.arena_size),
            selector: StrategySelector::new(self.config.reinforce_threshold),
            config: self.config,
            catalog: self.catalog,
            expectation: ExpectationStore::new(),
            weights: LaneWeights::new(),
            attack: AttackPlanner::new(),
            last_destroyed: Ledger::new(),
            last_strategy: None,
        })
    }
}

impl Default for PlannerBuilder {
    fn default() -> Self {
        PlannerBuilder::new()
    }
}

pub struct AdaptivePlanner {
    config: PlannerConfig,
    catalog: UnitCatalog,
    boundaries: LaneBoundaries,
    selector: StrategySelector,
    expectation: ExpectationStore,
    weights: LaneWeights,
    attack: AttackPlanner,
    last_destroyed: Ledger,
    last_strategy: Option<Strategy>,
}

impl AdaptivePlanner {
    /// Planner with default tunables for a match described by the
    /// match-start config JSON. Fails if the unit catalog is unusable.
    pub fn from_match_config(json: &str) -> PlannerResult<AdaptivePlanner> {
        let catalog = UnitCatalog::from_config_json(json)?;
        info!("Configured planner with catalog {:?}", catalog);
        PlannerBuilder::new().catalog(catalog).build()
    }

    /// The strategy the next call to [`AdaptivePlanner::on_turn`] will use.
    pub fn next_strategy(&self) -> Strategy {
        self.selector.select(&self.weights)
    }

    /// Run one planning pass against the board and return the batch of
    /// operations to submit for this turn.
    ///
    /// Fails without touching the board if the board's arena is not the
    /// size the planner was configured for.
    pub fn on_turn(&mut self, board: &mut dyn GameBoard) -> PlannerResult<TurnPlan> {
        if board.arena_size() != self.config.arena_size {
            return Err(PlannerError::InvalidConfig(format!(
                "planner configured for arena size {} but the board is {}",
                self.config.arena_size,
                board.arena_size()
            )));
        }

        let turn = board.turn_number();
        let strategy = self.selector.select(&self.weights);
        if self.last_strategy.is_some_and(|last| last != strategy) {
            info!("Turn {}: switching strategy to {:?} ({:?})", turn, strategy, self.weights);
        }

        self.attack.observe(turn, board.opponent_health(), &self.config);
        let attack_lane = self.attack.attack_lane(strategy);

        let expected = self.expectation.snapshot();
        let standing = standing_on_board(&expected, board);

        let mut ledger = Ledger::new();
        let mut plan = TurnPlan::new(turn, strategy);

        let (_, cleared) = BuildPlanner::execute(strategy, attack_lane, board, &mut ledger, &mut plan);
        plan.attack_lane = self.attack.execute(
            strategy,
            board,
            &self.catalog,
            &self.config,
            &self.boundaries,
            &mut plan,
        );

        let destroyed = find_destroyed(&expected, &standing);
        self.weights.attribute(&destroyed, &self.boundaries)?;

        self.expectation.advance(&ledger);
        for location in cleared {
            self.expectation.forget(location);
        }
        if self.config.count_each_loss_once {
            let mut unrebuilt = destroyed.clone();
            unrebuilt.subtract(&ledger);
            self.expectation.retire(&unrebuilt);
        }

        debug!(
            "Turn {}: {:?}, {} expected, {} destroyed, {} operations",
            turn,
            strategy,
            expected.len(),
            destroyed.len(),
            plan.operations.len()
        );

        self.last_destroyed = destroyed;
        self.last_strategy = Some(strategy);

        Ok(plan)
    }

    pub fn weights(&self) -> &LaneWeights {
        &self.weights
    }

    pub fn expectation(&self) -> &ExpectationStore {
        &self.expectation
    }

    /// Losses found during the most recent turn.
    pub fn last_destroyed(&self) -> &Ledger {
        &self.last_destroyed
    }

    pub fn last_strategy(&self) -> Option<Strategy> {
        self.last_strategy
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    pub fn catalog(&self) -> &UnitCatalog {
        &self.catalog
    }

    pub fn attack(&self) -> &AttackPlanner {
        &self.attack
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::Location;
    use crate::shim::ShimBoard;

    fn loc(x: u32, y: u32) -> Location {
        Location::from_coords(x, y)
    }

    #[test]
    fn first_turn_builds_the_opening() {
        let mut planner = PlannerBuilder::new().build().unwrap();
        let mut board = ShimBoard::new(30.0, 5.0);

        let plan = planner.on_turn(&mut board).unwrap();
        assert_eq!(plan.strategy, Strategy::InitialBuild);
        assert_eq!(
            plan.operations.first(),
            Some(&TurnOperation::Place {
                kind: StructureKind::Wall,
                location: loc(6, 11)
            })
        );
        assert!(planner.last_destroyed().is_empty());
        assert_eq!(planner.expectation().baseline().len(), plan.placements().count());
    }

    #[test]
    fn losses_shift_strategy_one_turn_later() {
        let mut planner = PlannerBuilder::new().build().unwrap();
        let mut board = ShimBoard::new(30.0, 0.0);
        planner.on_turn(&mut board).unwrap();

        for location in [loc(0, 13), loc(1, 13), loc(7, 10)] {
            assert!(board.destroy(location).is_some());
        }
        board.next_turn(0.0, 0.0, 30.0);

        let plan = planner.on_turn(&mut board).unwrap();
        assert_eq!(plan.strategy, Strategy::InitialBuild);
        assert_eq!(planner.weights(), &LaneWeights::from_counts(3, 0, 0));
        assert_eq!(planner.next_strategy(), Strategy::ReinforceLeft);

        board.next_turn(0.0, 0.0, 30.0);
        let plan = planner.on_turn(&mut board).unwrap();
        assert_eq!(plan.strategy, Strategy::ReinforceLeft);
    }

    #[test]
    fn losses_count_once_by_default() {
        let mut planner = PlannerBuilder::new().build().unwrap();
        let mut board = ShimBoard::new(30.0, 0.0);
        planner.on_turn(&mut board).unwrap();

        board.destroy(loc(20, 11));
        for _ in 0..3 {
            board.next_turn(0.0, 0.0, 30.0);
            planner.on_turn(&mut board).unwrap();
        }
        assert_eq!(planner.weights(), &LaneWeights::from_counts(0, 0, 1));
    }

    #[test]
    fn literal_union_recounts_unrebuilt_losses() {
        let config = PlannerConfig {
            count_each_loss_once: false,
            ..PlannerConfig::default()
        };
        let mut planner = PlannerBuilder::new().config(config).build().unwrap();
        let mut board = ShimBoard::new(30.0, 0.0);
        planner.on_turn(&mut board).unwrap();

        // No income, so the wall at (20, 11) is never rebuilt.
        board.destroy(loc(20, 11));
        for _ in 0..3 {
            board.next_turn(0.0, 0.0, 30.0);
            planner.on_turn(&mut board).unwrap();
        }
        assert_eq!(planner.weights(), &LaneWeights::from_counts(0, 0, 3));
    }

    #[test]
    fn mismatched_arena_is_rejected_before_building() {
        let mut planner = PlannerBuilder::new().arena_size(56).build().unwrap();
        let mut board = ShimBoard::new(30.0, 5.0);

        assert!(matches!(
            planner.on_turn(&mut board),
            Err(PlannerError::InvalidConfig(_))
        ));
        assert_eq!(board.structure_count(), 0);
        assert_eq!(board.cores(), 30.0);
        assert_eq!(board.bits(), 5.0);
        assert!(planner.expectation().baseline().is_empty());
    }

    #[test]
    fn gate_follows_a_stalled_attack() {
        let mut planner = PlannerBuilder::new().reinforce_threshold(1).build().unwrap();
        let mut board = ShimBoard::new(200.0, 0.0);
        planner.on_turn(&mut board).unwrap();

        board.destroy(loc(0, 13));
        board.next_turn(0.0, 0.0, 30.0);
        planner.on_turn(&mut board).unwrap();

        // Reinforcing the left lane attacks through the right gate.
        board.next_turn(0.0, 0.0, 30.0);
        let plan = planner.on_turn(&mut board).unwrap();
        assert_eq!(plan.strategy, Strategy::ReinforceLeft);
        assert_eq!(plan.removals().collect::<Vec<_>>(), vec![loc(21, 11), loc(22, 11)]);

        board.next_turn(0.0, 0.0, 30.0);
        planner.on_turn(&mut board).unwrap();

        // Health has not dropped since turn 1, so turn 4 flips to the left.
        board.next_turn(0.0, 20.0, 30.0);
        let plan = planner.on_turn(&mut board).unwrap();
        assert!(planner.attack().is_flipped());
        assert_eq!(plan.attack_lane, Some(Lane::Left));
        assert_eq!(plan.removals().collect::<Vec<_>>(), vec![loc(2, 11), loc(3, 11)]);
        assert_eq!(plan.deployments().count(), 20);
        assert!(plan.deployments().all(|(_, location)| location == loc(2, 11)));
        assert!(board.contains_structure(loc(21, 11)));
        assert!(board.contains_structure(loc(22, 11)));
        assert!(!board.contains_structure(loc(2, 11)));
        assert_eq!(planner.weights(), &LaneWeights::from_counts(1, 0, 0));
    }
}
