//! Property-based tests for ledgers, lane attribution and strategy selection.

#![allow(clippy::unwrap_used)]

use proptest::prelude::*;

use lane_foreman::damage::{find_destroyed, standing_on_board};
use lane_foreman::shim::ShimBoard;
use lane_foreman::{
    Lane, LaneBoundaries, LaneWeights, Ledger, Location, Strategy as Plan, StrategySelector, StructureKind,
};

fn kind_strategy() -> impl Strategy<Value = StructureKind> {
    prop_oneof![
        Just(StructureKind::Wall),
        Just(StructureKind::Shield),
        Just(StructureKind::Turret),
    ]
}

fn entries() -> impl Strategy<Value = Vec<(StructureKind, Location)>> {
    prop::collection::vec(
        (kind_strategy(), 0u32..28, 0u32..14).prop_map(|(kind, x, y)| (kind, Location::from_coords(x, y))),
        0..64,
    )
}

fn ledger_from(entries: &[(StructureKind, Location)]) -> Ledger {
    entries.iter().copied().collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// Deduping leaves no repeats and a second pass changes nothing.
    #[test]
    fn prop_dedupe_is_idempotent(a in entries(), b in entries()) {
        let merged = ledger_from(&a).union(&ledger_from(&b));
        let once = merged.dedupe();

        for kind in StructureKind::ALL {
            let locations = once.locations(kind);
            for (i, location) in locations.iter().enumerate() {
                prop_assert!(!locations[i + 1..].contains(location));
            }
        }
        prop_assert_eq!(once.dedupe(), once);
    }

    /// A ledger checked against a board holding exactly its structures
    /// reports no loss.
    #[test]
    fn prop_no_loss_against_a_matching_board(a in entries()) {
        let ledger = ledger_from(&a).dedupe();
        let mut board = ShimBoard::new(0.0, 0.0);
        for (kind, location) in ledger.iter() {
            board.seed(kind, location);
        }

        let standing = standing_on_board(&ledger, &board);
        prop_assert!(find_destroyed(&ledger, &standing).is_empty());
    }

    /// Every loss is something that was expected and is not standing.
    #[test]
    fn prop_losses_are_expected_and_missing(a in entries(), b in entries()) {
        let expected = ledger_from(&a);
        let standing = ledger_from(&b);
        let destroyed = find_destroyed(&expected, &standing);

        for (kind, location) in destroyed.iter() {
            prop_assert!(expected.contains(kind, location));
            prop_assert!(!standing.contains(kind, location));
        }
    }

    /// Every in-bounds column lands in exactly one lane.
    #[test]
    fn prop_every_column_has_one_lane(half in 2u8..40, x in 0u8..80) {
        let width = half * 2;
        let boundaries = LaneBoundaries::for_width(width);
        if x < width {
            let lane = boundaries.lane_of(x).unwrap();
            let owners = Lane::ALL.iter().filter(|l| boundaries.contains(**l, x)).count();
            prop_assert_eq!(owners, 1);
            prop_assert!(boundaries.contains(lane, x));
        } else {
            prop_assert!(boundaries.lane_of(x).is_err());
        }
    }

    /// Attribution only ever adds, and adds exactly one per loss.
    #[test]
    fn prop_weights_are_monotonic(start in (0u32..50, 0u32..50, 0u32..50), a in entries()) {
        let mut weights = LaneWeights::from_counts(start.0, start.1, start.2);
        let before = weights;
        let destroyed = ledger_from(&a).dedupe();

        weights.attribute(&destroyed, &LaneBoundaries::default()).unwrap();
        for lane in Lane::ALL {
            prop_assert!(weights.get(lane) >= before.get(lane));
        }
        prop_assert_eq!(weights.total(), before.total() + destroyed.len() as u32);
    }

    /// Selection depends only on the weights and breaks ties left to right.
    #[test]
    fn prop_selection_is_deterministic(left in 0u32..10, middle in 0u32..10, right in 0u32..10) {
        let weights = LaneWeights::from_counts(left, middle, right);
        let selector = StrategySelector::default();
        let chosen = selector.select(&weights);
        prop_assert_eq!(chosen, selector.select(&weights));

        let max = left.max(middle).max(right);
        if max < 3 {
            prop_assert_eq!(chosen, Plan::InitialBuild);
        } else {
            let expected = Lane::ALL.into_iter().find(|l| weights.get(*l) == max).unwrap();
            prop_assert_eq!(chosen, Plan::reinforcing(expected));
        }
    }
}
