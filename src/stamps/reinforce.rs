use super::*;

/// Extra turrets tucked into the left corner behind the wall, with two
/// shields further back. The right block is its mirror image.
fn left_block() -> Stamp {
    Stamp::new("reinforce_left")
        .place(
            StructureKind::Turret,
            [(1, 13), (2, 13), (3, 13), (2, 12), (3, 12), (4, 12)],
        )
        .place(StructureKind::Shield, [(5, 9), (6, 9)])
}

fn middle_block() -> Stamp {
    Stamp::new("reinforce_middle")
        .place(StructureKind::Turret, row(11..=16, 12))
        .place(StructureKind::Shield, [(12, 9), (15, 9)])
}

/// Defences added in front of a lane that keeps losing structures.
pub fn lane_block(lane: Lane, size: u8) -> Stamp {
    match lane {
        Lane::Left => left_block(),
        Lane::Middle => middle_block(),
        Lane::Right => left_block().mirrored("reinforce_right", size),
    }
}

/// Two wall cells kept open so mobile units launched into `lane` can get
/// through the front.
pub fn gate(lane: Lane, size: u8) -> Vec<(u8, u8)> {
    let half = size / 2;
    let y = half - 3;
    match lane {
        Lane::Left => vec![(2, y), (3, y)],
        Lane::Middle => vec![(half - 1, y), (half, y)],
        Lane::Right => vec![(size - 7, y), (size - 6, y)],
    }
}

pub fn open_gate(cells: &[(u8, u8)]) -> Stamp {
    Stamp::new("gate").remove(cells.iter().copied())
}
