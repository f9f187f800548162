use crate::catalog::*;
use crate::location::*;

/// The planner's view of the battlefield for one turn.
///
/// Implement this in the crate that talks to the match server. The planner
/// only queries and issues intents through it; resolving combat, pathing
/// and resource accrual stays on the other side. `place` and `remove` are
/// expected to update what later queries in the same turn observe, the way
/// a local copy of the turn state does before submission.
pub trait GameBoard {
    fn turn_number(&self) -> u32;

    fn opponent_health(&self) -> f32;

    /// Size of the (square) arena.
    fn arena_size(&self) -> u8;

    /// Whether `place` would succeed right now: the cell is in bounds and
    /// free, the kind may go there, and the budget covers it.
    fn can_place(&self, kind: UnitKind, location: Location) -> bool;

    /// Reserve the resource for a unit and add it to the board. Returns
    /// false if the simulation refused.
    fn place(&mut self, kind: UnitKind, location: Location) -> bool;

    /// Mark the structure at `location` for removal. Returns false if
    /// there was nothing to remove.
    fn remove(&mut self, location: Location) -> bool;

    /// Budget available for a kind: cores for structures, bits for mobile units.
    fn resource_available(&self, kind: UnitKind) -> f32;

    /// Whether a friendly structure currently stands at `location`.
    fn contains_structure(&self, location: Location) -> bool;

    fn edge_positions(&self, edge: Edge) -> Vec<Location> {
        edge.locations(self.arena_size())
    }
}
