use super::*;

/// First-turn opener: short wall segments along the front with turrets on
/// the far corners, so the cheapest cover goes up before anything else.
pub fn scratch_post() -> Stamp {
    Stamp::new("scratch_post")
        .place(
            StructureKind::Wall,
            row([6, 7, 8, 11, 12, 13, 14, 15, 16, 19, 20, 21], 11),
        )
        .place(
            StructureKind::Turret,
            [(7, 10), (20, 10), (0, 13), (1, 13), (27, 13)],
        )
}
