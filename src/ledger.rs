//! Structure ledger and expectation store.
//!
//! The `Ledger` is the planner's record of which structures it intends to
//! have standing, bucketed by kind. The `ExpectationStore` carries the
//! ledger from one turn to the next so it can be compared against the
//! board the simulation reports.

use crate::catalog::*;
use crate::location::*;
use fnv::FnvHashMap;
use itertools::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    entries: FnvHashMap<StructureKind, Vec<Location>>,
}

impl Ledger {
    pub fn new() -> Self {
        Ledger::default()
    }

    /// Record a structure. Recording the same kind and location twice is a no-op.
    pub fn record(&mut self, kind: StructureKind, location: Location) {
        let bucket = self.entries.entry(kind).or_default();
        if !bucket.contains(&location) {
            bucket.push(location);
        }
    }

    /// Drop a location from every bucket.
    pub fn forget(&mut self, location: Location) {
        for bucket in self.entries.values_mut() {
            bucket.retain(|l| *l != location);
        }
        self.entries.retain(|_, bucket| !bucket.is_empty());
    }

    /// Drop every entry that is also present in `other`.
    pub fn subtract(&mut self, other: &Ledger) {
        for (kind, bucket) in self.entries.iter_mut() {
            let removed = other.locations(*kind);
            bucket.retain(|l| !removed.contains(l));
        }
        self.entries.retain(|_, bucket| !bucket.is_empty());
    }

    /// Append every entry of `other` without checking for duplicates.
    /// Follow with [`Ledger::dedupe`] before comparing against history.
    pub fn union(&self, other: &Ledger) -> Ledger {
        let mut merged = self.clone();
        for (kind, location) in other.iter() {
            merged.entries.entry(kind).or_default().push(location);
        }
        merged
    }

    /// A copy with repeated locations removed per kind, keeping the first occurrence.
    pub fn dedupe(&self) -> Ledger {
        let entries = self
            .entries
            .iter()
            .filter(|(_, bucket)| !bucket.is_empty())
            .map(|(kind, bucket)| (*kind, bucket.iter().copied().unique().collect()))
            .collect();

        Ledger { entries }
    }

    pub fn contains(&self, kind: StructureKind, location: Location) -> bool {
        self.locations(kind).contains(&location)
    }

    pub fn locations(&self, kind: StructureKind) -> &[Location] {
        self.entries.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All entries, in kind order and then recording order.
    pub fn iter(&self) -> impl Iterator<Item = (StructureKind, Location)> + '_ {
        StructureKind::ALL
            .into_iter()
            .flat_map(move |kind| self.locations(kind).iter().map(move |l| (kind, *l)))
    }

    pub fn len(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get_count(&self, kind: StructureKind) -> usize {
        self.locations(kind).len()
    }
}

impl FromIterator<(StructureKind, Location)> for Ledger {
    fn from_iter<I: IntoIterator<Item = (StructureKind, Location)>>(iter: I) -> Self {
        let mut ledger = Ledger::new();
        for (kind, location) in iter {
            ledger.record(kind, location);
        }
        ledger
    }
}

/// What the board was expected to hold at the end of the previous turn.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ExpectationStore {
    baseline: Ledger,
}

impl ExpectationStore {
    pub fn new() -> Self {
        ExpectationStore::default()
    }

    /// Deduplicated copy of the baseline, taken before this turn's build runs.
    pub fn snapshot(&self) -> Ledger {
        self.baseline.dedupe()
    }

    /// Replace the baseline with the deduplicated union of the previous
    /// baseline and this turn's ledger.
    pub fn advance(&mut self, turn_ledger: &Ledger) {
        self.baseline = self.baseline.union(turn_ledger).dedupe();
    }

    /// Stop expecting entries, e.g. losses that have already been attributed.
    pub fn retire(&mut self, entries: &Ledger) {
        self.baseline.subtract(entries);
    }

    /// Stop expecting anything at a location the planner cleared itself.
    pub fn forget(&mut self, location: Location) {
        self.baseline.forget(location);
    }

    pub fn baseline(&self) -> &Ledger {
        &self.baseline
    }
}
