//! Damage attribution: which expected structures are gone.
//!
//! Losses are `expected - still_standing`, per kind. The still-standing
//! set comes from the board, never from what the planner itself placed
//! this turn, otherwise a structure that was destroyed and rebuilt in the
//! same turn would hide its own loss.

use crate::board::*;
use crate::ledger::*;

/// Entries of `expected` that are not in `standing`.
pub fn find_destroyed(expected: &Ledger, standing: &Ledger) -> Ledger {
    expected
        .iter()
        .filter(|(kind, location)| !standing.contains(*kind, *location))
        .collect()
}

/// Entries of `expected` whose cell still holds a structure on the board.
///
/// The board only reports occupancy, so an expected entry counts as
/// standing whenever its cell is occupied.
pub fn standing_on_board(expected: &Ledger, board: &dyn GameBoard) -> Ledger {
    expected
        .iter()
        .filter(|(_, location)| board.contains_structure(*location))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StructureKind;
    use crate::location::Location;

    fn ledger(entries: &[(StructureKind, u32, u32)]) -> Ledger {
        entries
            .iter()
            .map(|(kind, x, y)| (*kind, Location::from_coords(*x, *y)))
            .collect()
    }

    #[test]
    fn missing_entries_are_destroyed() {
        let expected = ledger(&[
            (StructureKind::Turret, 2, 13),
            (StructureKind::Wall, 5, 12),
            (StructureKind::Wall, 20, 11),
        ]);
        let standing = ledger(&[(StructureKind::Wall, 20, 11)]);

        let destroyed = find_destroyed(&expected, &standing);
        assert_eq!(
            destroyed,
            ledger(&[(StructureKind::Turret, 2, 13), (StructureKind::Wall, 5, 12)])
        );
    }

    #[test]
    fn kind_must_match_to_count_as_standing() {
        let expected = ledger(&[(StructureKind::Shield, 24, 10)]);
        let standing = ledger(&[(StructureKind::Wall, 24, 10)]);
        assert_eq!(find_destroyed(&expected, &standing), expected);
    }

    #[test]
    fn identical_snapshot_destroys_nothing() {
        let expected = ledger(&[(StructureKind::Wall, 3, 11), (StructureKind::Shield, 26, 12)]);
        assert!(find_destroyed(&expected, &expected).is_empty());
    }

    #[test]
    fn unexpected_standing_structures_are_ignored() {
        let expected = ledger(&[(StructureKind::Wall, 3, 11)]);
        let standing = ledger(&[(StructureKind::Wall, 3, 11), (StructureKind::Turret, 9, 10)]);
        assert!(find_destroyed(&expected, &standing).is_empty());
    }
}
