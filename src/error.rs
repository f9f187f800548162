//! Error types for the planner.
//!
//! Infeasible placements are not errors: the board refuses them and the
//! planner moves on. Only a broken unit catalog (fatal before the first
//! turn) and internal inconsistencies surface here.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlannerError {
    /// The match config could not be read.
    #[error("invalid match config: {0}")]
    Config(#[from] serde_json::Error),

    /// The planner config holds values the planner cannot work with.
    #[error("invalid planner config: {0}")]
    InvalidConfig(String),

    /// The unit catalog does not describe the units the planner needs.
    #[error("unit catalog mismatch: {0}")]
    Catalog(String),

    /// A computed value fell outside the range the planner's state allows.
    #[error("inconsistent planner state: {0}")]
    InconsistentState(String),
}

pub type PlannerResult<T> = Result<T, PlannerError>;
