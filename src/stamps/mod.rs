pub mod front;
pub mod opening;
pub mod reinforce;

use crate::catalog::StructureKind;
use crate::lane::Lane;
use crate::location::Location;
use crate::strategy::Strategy;
use fnv::FnvHashSet;
use itertools::*;

/// One step of a stamp, in absolute arena coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StampStep {
    Place { kind: StructureKind, x: u8, y: u8 },
    Remove { x: u8, y: u8 },
}

impl StampStep {
    pub fn location(&self) -> Location {
        match *self {
            StampStep::Place { x, y, .. } | StampStep::Remove { x, y } => Location::from_coords(x as u32, y as u32),
        }
    }

    pub fn is_removal(&self) -> bool {
        matches!(self, StampStep::Remove { .. })
    }
}

/// A fixed, ordered arrangement of placements and removals. Earlier steps
/// get first claim on the turn's budget.
#[derive(Clone, Debug)]
pub struct Stamp {
    pub name: &'static str,
    pub steps: Vec<StampStep>,
}

impl Stamp {
    pub fn new(name: &'static str) -> Self {
        Stamp { name, steps: Vec::new() }
    }

    pub fn place(mut self, kind: StructureKind, cells: impl IntoIterator<Item = (u8, u8)>) -> Self {
        self.steps
            .extend(cells.into_iter().map(|(x, y)| StampStep::Place { kind, x, y }));
        self
    }

    pub fn remove(mut self, cells: impl IntoIterator<Item = (u8, u8)>) -> Self {
        self.steps
            .extend(cells.into_iter().map(|(x, y)| StampStep::Remove { x, y }));
        self
    }

    /// Drop every step touching one of the given cells.
    pub fn without(mut self, cells: &[(u8, u8)]) -> Self {
        self.steps.retain(|step| {
            let location = step.location();
            !cells.contains(&(location.x(), location.y()))
        });
        self
    }

    /// Reflect the stamp across the vertical centre line of the arena.
    pub fn mirrored(&self, name: &'static str, size: u8) -> Stamp {
        let steps = self
            .steps
            .iter()
            .map(|step| match *step {
                StampStep::Place { kind, x, y } => StampStep::Place { kind, x: size - 1 - x, y },
                StampStep::Remove { x, y } => StampStep::Remove { x: size - 1 - x, y },
            })
            .collect();

        Stamp { name, steps }
    }

    /// Check that every step is inside the arena and that no cell is
    /// placed on twice.
    pub fn validate(&self, size: u8) -> bool {
        let in_bounds = self.steps.iter().all(|step| step.location().in_arena(size));

        let mut seen = FnvHashSet::default();
        let unique = self
            .steps
            .iter()
            .filter(|step| !step.is_removal())
            .all(|step| seen.insert(step.location()));

        in_bounds && unique
    }
}

/// Cells `(x, y)` for `x` in `xs`.
pub fn row(xs: impl IntoIterator<Item = u8>, y: u8) -> Vec<(u8, u8)> {
    xs.into_iter().map(|x| (x, y)).collect()
}

/// The stamps a strategy builds this turn, in priority order. While
/// reinforcing, the gate is cut in front of `attack_lane`.
pub fn stamps_for(strategy: Strategy, attack_lane: Lane, turn: u32, size: u8) -> Vec<Stamp> {
    let mut stamps = Vec::new();

    match strategy.reinforced_lane() {
        None => {
            if turn == 0 {
                stamps.push(opening::scratch_post());
            }
            stamps.push(front::front_line());
        }
        Some(lane) => {
            let gate = reinforce::gate(attack_lane, size);
            stamps.push(reinforce::lane_block(lane, size));
            stamps.push(front::front_line().without(&gate));
            stamps.push(reinforce::open_gate(&gate));
        }
    }

    stamps
}

/// Every location a set of stamps would place on, without repeats.
pub fn placed_locations(stamps: &[Stamp]) -> Vec<Location> {
    stamps
        .iter()
        .flat_map(|stamp| stamp.steps.iter())
        .filter(|step| !step.is_removal())
        .map(StampStep::location)
        .unique()
        .collect()
}
