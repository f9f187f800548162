use super::*;

/// Turrets placed ahead of the main turret row, in priority order. The
/// corners go first since nothing else covers them.
const KEY_TURRETS: [(u8, u8); 9] = [
    (0, 13),
    (1, 12),
    (27, 13),
    (23, 12),
    (24, 13),
    (20, 10),
    (25, 11),
    (13, 10),
    (6, 10),
];

/// The baseline defence: a wall across the front on y = 11, key turrets,
/// a turret row on y = 10 and a staggered shield row on y = 9.
pub fn front_line() -> Stamp {
    let turret_row = (3..=20)
        .map(|x| (x, 10))
        .filter(|cell| !KEY_TURRETS.contains(cell));

    Stamp::new("front_line")
        .place(StructureKind::Wall, row(2..=22, 11))
        .place(StructureKind::Turret, KEY_TURRETS)
        .place(StructureKind::Shield, [(26, 12), (24, 10)])
        .place(StructureKind::Turret, turret_row)
        .place(StructureKind::Turret, [(23, 9)])
        .place(StructureKind::Shield, row((8..=20).rev().step_by(3), 9))
}
