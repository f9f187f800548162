//! In-memory board for offline runs and tests.
//!
//! Mirrors the parts of the match server's turn state the planner talks
//! to: arena bounds, the two budgets, structure occupancy and queued
//! deployments. Combat is not simulated; callers knock structures out with
//! [`ShimBoard::destroy`] and move to the next turn with
//! [`ShimBoard::next_turn`].

use crate::board::*;
use crate::catalog::*;
use crate::constants::*;
use crate::location::*;
use fnv::FnvHashMap;

#[derive(Clone, Debug)]
pub struct ShimBoard {
    size: u8,
    turn: u32,
    opponent_health: f32,
    cores: f32,
    bits: f32,
    catalog: UnitCatalog,
    structures: FnvHashMap<Location, StructureKind>,
    deployments: Vec<(MobileKind, Location)>,
}

impl ShimBoard {
    pub fn new(cores: f32, bits: f32) -> Self {
        ShimBoard::with_catalog(UnitCatalog::default(), cores, bits)
    }

    pub fn with_catalog(catalog: UnitCatalog, cores: f32, bits: f32) -> Self {
        ShimBoard {
            size: ARENA_SIZE,
            turn: 0,
            opponent_health: 30.0,
            cores,
            bits,
            catalog,
            structures: FnvHashMap::default(),
            deployments: Vec::new(),
        }
    }

    /// Advance to the next turn: add income, set the opponent's health and
    /// clear last turn's deployments.
    pub fn next_turn(&mut self, cores_income: f32, bits_income: f32, opponent_health: f32) {
        self.turn += 1;
        self.cores += cores_income;
        self.bits += bits_income;
        self.opponent_health = opponent_health;
        self.deployments.clear();
    }

    /// Knock out a structure, as enemy fire would.
    pub fn destroy(&mut self, location: Location) -> Option<StructureKind> {
        self.structures.remove(&location)
    }

    /// Put a structure on the board without paying for it.
    pub fn seed(&mut self, kind: StructureKind, location: Location) {
        self.structures.insert(location, kind);
    }

    pub fn structure_at(&self, location: Location) -> Option<StructureKind> {
        self.structures.get(&location).copied()
    }

    pub fn structure_count(&self) -> usize {
        self.structures.len()
    }

    pub fn deployments(&self) -> &[(MobileKind, Location)] {
        &self.deployments
    }

    pub fn cores(&self) -> f32 {
        self.cores
    }

    pub fn bits(&self) -> f32 {
        self.bits
    }

    fn is_friendly_edge(&self, location: Location) -> bool {
        Edge::FRIENDLY
            .iter()
            .any(|edge| edge.locations(self.size).contains(&location))
    }

    fn budget(&self, kind: UnitKind) -> f32 {
        if kind.is_structure() {
            self.cores
        } else {
            self.bits
        }
    }

    fn budget_mut(&mut self, kind: UnitKind) -> &mut f32 {
        if kind.is_structure() {
            &mut self.cores
        } else {
            &mut self.bits
        }
    }
}

impl GameBoard for ShimBoard {
    fn turn_number(&self) -> u32 {
        self.turn
    }

    fn opponent_health(&self) -> f32 {
        self.opponent_health
    }

    fn arena_size(&self) -> u8 {
        self.size
    }

    fn can_place(&self, kind: UnitKind, location: Location) -> bool {
        if !location.in_arena(self.size) || !location.is_friendly_half(self.size) {
            return false;
        }
        if self.budget(kind) < self.catalog.cost(kind) {
            return false;
        }
        if self.structures.contains_key(&location) {
            return false;
        }

        kind.is_structure() || self.is_friendly_edge(location)
    }

    fn place(&mut self, kind: UnitKind, location: Location) -> bool {
        if !self.can_place(kind, location) {
            return false;
        }

        let cost = self.catalog.cost(kind);
        *self.budget_mut(kind) -= cost;

        match kind {
            UnitKind::Structure(structure) => {
                self.structures.insert(location, structure);
            }
            UnitKind::Mobile(mobile) => self.deployments.push((mobile, location)),
        }

        true
    }

    fn remove(&mut self, location: Location) -> bool {
        self.structures.remove(&location).is_some()
    }

    fn resource_available(&self, kind: UnitKind) -> f32 {
        self.budget(kind)
    }

    fn contains_structure(&self, location: Location) -> bool {
        self.structures.contains_key(&location)
    }
}
