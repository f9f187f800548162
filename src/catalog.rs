//! Unit kinds and the match-start unit catalog.
//!
//! The simulation describes its units in the match config as an ordered
//! `unitInformation` array. The first three entries are structures, the
//! next three are mobile units; the planner refers to them by kind and the
//! catalog maps each kind to the shorthand the simulation expects.

use crate::constants::*;
use crate::error::*;
use serde::{Deserialize, Serialize};

/// Persistent structures the planner places.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Ord, PartialOrd, Serialize, Deserialize)]
pub enum StructureKind {
    Wall,
    Shield,
    Turret,
}

impl StructureKind {
    pub const ALL: [StructureKind; 3] = [StructureKind::Wall, StructureKind::Shield, StructureKind::Turret];
}

/// Transient units deployed from the friendly edges.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Ord, PartialOrd, Serialize, Deserialize)]
pub enum MobileKind {
    Scout,
    Demolisher,
    Interceptor,
}

impl MobileKind {
    pub const ALL: [MobileKind; 3] = [MobileKind::Scout, MobileKind::Demolisher, MobileKind::Interceptor];
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub enum UnitKind {
    Structure(StructureKind),
    Mobile(MobileKind),
}

impl UnitKind {
    pub const ALL: [UnitKind; 6] = [
        UnitKind::Structure(StructureKind::Wall),
        UnitKind::Structure(StructureKind::Shield),
        UnitKind::Structure(StructureKind::Turret),
        UnitKind::Mobile(MobileKind::Scout),
        UnitKind::Mobile(MobileKind::Demolisher),
        UnitKind::Mobile(MobileKind::Interceptor),
    ];

    /// Position of this kind in the config's `unitInformation` array.
    pub fn catalog_index(self) -> usize {
        match self {
            UnitKind::Structure(StructureKind::Wall) => 0,
            UnitKind::Structure(StructureKind::Shield) => 1,
            UnitKind::Structure(StructureKind::Turret) => 2,
            UnitKind::Mobile(MobileKind::Scout) => 3,
            UnitKind::Mobile(MobileKind::Demolisher) => 4,
            UnitKind::Mobile(MobileKind::Interceptor) => 5,
        }
    }

    pub fn is_structure(self) -> bool {
        matches!(self, UnitKind::Structure(_))
    }

    pub fn default_cost(self) -> f32 {
        match self {
            UnitKind::Structure(StructureKind::Wall) => DEFAULT_WALL_COST,
            UnitKind::Structure(StructureKind::Shield) => DEFAULT_SHIELD_COST,
            UnitKind::Structure(StructureKind::Turret) => DEFAULT_TURRET_COST,
            UnitKind::Mobile(MobileKind::Scout) => DEFAULT_SCOUT_COST,
            UnitKind::Mobile(MobileKind::Demolisher) => DEFAULT_DEMOLISHER_COST,
            UnitKind::Mobile(MobileKind::Interceptor) => DEFAULT_INTERCEPTOR_COST,
        }
    }
}

impl From<StructureKind> for UnitKind {
    fn from(kind: StructureKind) -> Self {
        UnitKind::Structure(kind)
    }
}

impl From<MobileKind> for UnitKind {
    fn from(kind: MobileKind) -> Self {
        UnitKind::Mobile(kind)
    }
}

/// One entry of the config's `unitInformation` array.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UnitInformation {
    pub shorthand: String,
    #[serde(default, alias = "cost1")]
    pub cost: Option<f32>,
}

#[derive(Deserialize)]
struct MatchConfig {
    #[serde(rename = "unitInformation")]
    unit_information: Vec<UnitInformation>,
}

/// Shorthands and costs for the six unit kinds of a match.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UnitCatalog {
    shorthands: [String; 6],
    costs: [f32; 6],
}

impl UnitCatalog {
    /// Build the catalog from the `unitInformation` entries in catalog order.
    pub fn from_unit_information(entries: &[UnitInformation]) -> PlannerResult<UnitCatalog> {
        if entries.len() < UnitKind::ALL.len() {
            return Err(PlannerError::Catalog(format!(
                "expected {} unit entries, found {}",
                UnitKind::ALL.len(),
                entries.len()
            )));
        }

        let mut shorthands: [String; 6] = Default::default();
        let mut costs = [0.0; 6];

        for kind in UnitKind::ALL {
            let index = kind.catalog_index();
            let entry = &entries[index];

            if entry.shorthand.is_empty() {
                return Err(PlannerError::Catalog(format!("{:?} has an empty shorthand", kind)));
            }
            if shorthands[..index].contains(&entry.shorthand) {
                return Err(PlannerError::Catalog(format!(
                    "shorthand {:?} for {:?} is already taken",
                    entry.shorthand, kind
                )));
            }

            let cost = entry.cost.unwrap_or_else(|| kind.default_cost());
            if !(cost.is_finite() && cost > 0.0) {
                return Err(PlannerError::Catalog(format!("{:?} has invalid cost {}", kind, cost)));
            }

            shorthands[index] = entry.shorthand.clone();
            costs[index] = cost;
        }

        Ok(UnitCatalog { shorthands, costs })
    }

    /// Parse the match-start config JSON.
    pub fn from_config_json(json: &str) -> PlannerResult<UnitCatalog> {
        let config: MatchConfig = serde_json::from_str(json)?;
        Self::from_unit_information(&config.unit_information)
    }

    pub fn shorthand(&self, kind: UnitKind) -> &str {
        &self.shorthands[kind.catalog_index()]
    }

    pub fn cost(&self, kind: UnitKind) -> f32 {
        self.costs[kind.catalog_index()]
    }

    /// Reverse lookup used when reading board snapshots tagged by shorthand.
    pub fn kind_of(&self, shorthand: &str) -> Option<UnitKind> {
        UnitKind::ALL
            .into_iter()
            .find(|kind| self.shorthand(*kind) == shorthand)
    }
}

impl Default for UnitCatalog {
    /// The standard catalog: FF, EF, DF, PI, EI, SI with the default costs.
    fn default() -> Self {
        let shorthands = ["FF", "EF", "DF", "PI", "EI", "SI"].map(String::from);
        let costs = UnitKind::ALL.map(UnitKind::default_cost);
        UnitCatalog { shorthands, costs }
    }
}
