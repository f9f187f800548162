pub mod attack;
pub mod board;
pub mod build;
pub mod catalog;
pub mod config;
pub mod constants;
pub mod damage;
pub mod error;
pub mod lane;
pub mod ledger;
pub mod location;
pub mod plan;
pub mod planner;
pub mod shim;
pub mod stamps;
pub mod strategy;

pub use board::GameBoard;
pub use catalog::{MobileKind, StructureKind, UnitCatalog, UnitKind};
pub use config::PlannerConfig;
pub use error::{PlannerError, PlannerResult};
pub use lane::{Lane, LaneBoundaries, LaneWeights};
pub use ledger::{ExpectationStore, Ledger};
pub use location::{Edge, Location};
pub use planner::*;
pub use strategy::{Strategy, StrategySelector};
