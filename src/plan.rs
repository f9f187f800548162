use crate::catalog::*;
use crate::lane::*;
use crate::location::*;
use crate::strategy::*;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Turn operations (pure data, no game API)
// ---------------------------------------------------------------------------

/// An operation the planner wants submitted for this turn.
///
/// Only operations the board accepted end up in a [`TurnPlan`]; refused
/// placements are dropped rather than submitted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum TurnOperation {
    /// Place a persistent structure.
    Place {
        kind: StructureKind,
        location: Location,
    },
    /// Clear the structure at the given location to open a path.
    Remove { location: Location },
    /// Deploy a mobile unit from a friendly edge cell.
    Deploy { kind: MobileKind, location: Location },
}

impl TurnOperation {
    pub fn location(&self) -> Location {
        match self {
            TurnOperation::Place { location, .. }
            | TurnOperation::Remove { location }
            | TurnOperation::Deploy { location, .. } => *location,
        }
    }
}

// ---------------------------------------------------------------------------
// Turn plan
// ---------------------------------------------------------------------------

/// Everything decided in one planning pass, submitted to the simulation as
/// a single batch at the end of the turn.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TurnPlan {
    pub turn: u32,
    pub strategy: Strategy,
    /// Lane mobile units were launched into, if any were sent.
    pub attack_lane: Option<Lane>,
    /// Ordered operations: removals and placements first, then deployments.
    pub operations: Vec<TurnOperation>,
}

impl TurnPlan {
    pub fn new(turn: u32, strategy: Strategy) -> Self {
        TurnPlan {
            turn,
            strategy,
            attack_lane: None,
            operations: Vec::new(),
        }
    }

    pub fn push(&mut self, operation: TurnOperation) {
        self.operations.push(operation);
    }

    pub fn placements(&self) -> impl Iterator<Item = (StructureKind, Location)> + '_ {
        self.operations.iter().filter_map(|op| match op {
            TurnOperation::Place { kind, location } => Some((*kind, *location)),
            _ => None,
        })
    }

    pub fn removals(&self) -> impl Iterator<Item = Location> + '_ {
        self.operations.iter().filter_map(|op| match op {
            TurnOperation::Remove { location } => Some(*location),
            _ => None,
        })
    }

    pub fn deployments(&self) -> impl Iterator<Item = (MobileKind, Location)> + '_ {
        self.operations.iter().filter_map(|op| match op {
            TurnOperation::Deploy { kind, location } => Some((*kind, *location)),
            _ => None,
        })
    }

    /// Operations grouped into the `[shorthand, x, y]` rows the match server
    /// expects: structure placements and removals in the first list,
    /// deployments in the second.
    pub fn to_wire(&self, catalog: &UnitCatalog) -> (Vec<(String, u8, u8)>, Vec<(String, u8, u8)>) {
        let mut build = Vec::new();
        let mut deploy = Vec::new();

        for op in &self.operations {
            let location = op.location();
            match op {
                TurnOperation::Place { kind, .. } => {
                    build.push((catalog.shorthand((*kind).into()).to_string(), location.x(), location.y()));
                }
                TurnOperation::Remove { .. } => {
                    build.push((REMOVE_SHORTHAND.to_string(), location.x(), location.y()));
                }
                TurnOperation::Deploy { kind, .. } => {
                    deploy.push((catalog.shorthand((*kind).into()).to_string(), location.x(), location.y()));
                }
            }
        }

        (build, deploy)
    }
}

/// Shorthand the match server uses for a removal request.
pub const REMOVE_SHORTHAND: &str = "RM";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_rows_split_build_and_deploy() {
        let mut plan = TurnPlan::new(3, Strategy::InitialBuild);
        plan.push(TurnOperation::Remove {
            location: Location::from_coords(12, 1),
        });
        plan.push(TurnOperation::Place {
            kind: StructureKind::Wall,
            location: Location::from_coords(2, 11),
        });
        plan.push(TurnOperation::Deploy {
            kind: MobileKind::Scout,
            location: Location::from_coords(13, 0),
        });

        let (build, deploy) = plan.to_wire(&UnitCatalog::default());
        assert_eq!(build, vec![("RM".to_string(), 12, 1), ("FF".to_string(), 2, 11)]);
        assert_eq!(deploy, vec![("PI".to_string(), 13, 0)]);
    }

    #[test]
    fn operations_serialize_tagged() {
        let op = TurnOperation::Place {
            kind: StructureKind::Turret,
            location: Location::from_coords(23, 9),
        };
        let json = serde_json::to_string(&op).unwrap();
        assert_eq!(json, r#"{"op":"place","kind":"Turret","location":[23,9]}"#);
    }
}
