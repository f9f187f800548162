//! Build planner: walks the strategy's stamps in order and issues whatever
//! the board accepts.

use crate::board::*;
use crate::catalog::*;
use crate::lane::*;
use crate::ledger::*;
use crate::location::*;
use crate::plan::*;
use crate::stamps::*;
use crate::strategy::*;
use log::*;

/// Tally of one build pass.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct BuildSummary {
    pub placed: u32,
    pub removed: u32,
    pub skipped: u32,
}

pub struct BuildPlanner;

impl BuildPlanner {
    /// Apply the stamps for `strategy` to the board, with the gate cut in
    /// front of `attack_lane`.
    ///
    /// Placements are only attempted when `can_place` agrees, and each
    /// accepted one is recorded in `ledger`. Removals are only issued when
    /// something stands on the cell; the cell is then forgotten by the
    /// ledger and returned so the caller can stop expecting it too.
    pub fn execute(
        strategy: Strategy,
        attack_lane: Lane,
        board: &mut dyn GameBoard,
        ledger: &mut Ledger,
        plan: &mut TurnPlan,
    ) -> (BuildSummary, Vec<Location>) {
        let stamps = stamps_for(strategy, attack_lane, board.turn_number(), board.arena_size());
        let mut summary = BuildSummary::default();
        let mut cleared = Vec::new();

        for stamp in &stamps {
            for step in &stamp.steps {
                let location = step.location();
                match *step {
                    StampStep::Place { kind, .. } => {
                        let unit = UnitKind::Structure(kind);
                        if board.can_place(unit, location) && board.place(unit, location) {
                            ledger.record(kind, location);
                            plan.push(TurnOperation::Place { kind, location });
                            summary.placed += 1;
                        } else {
                            summary.skipped += 1;
                        }
                    }
                    StampStep::Remove { .. } => {
                        if board.contains_structure(location) && board.remove(location) {
                            ledger.forget(location);
                            plan.push(TurnOperation::Remove { location });
                            cleared.push(location);
                            summary.removed += 1;
                        }
                    }
                }
            }
        }

        debug!(
            "Build {:?} on turn {}: placed {}, removed {}, skipped {}",
            strategy,
            board.turn_number(),
            summary.placed,
            summary.removed,
            summary.skipped
        );

        (summary, cleared)
    }
}
