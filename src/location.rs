use serde::*;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Location {
    packed: u16,
}

impl Location {
    pub fn from_coords(x: u32, y: u32) -> Self {
        Location {
            packed: ((x << 8) | y) as u16,
        }
    }

    #[inline]
    pub fn x(self) -> u8 {
        ((self.packed >> 8) & 0xFF) as u8
    }

    #[inline]
    pub fn y(self) -> u8 {
        (self.packed & 0xFF) as u8
    }

    #[inline]
    pub fn packed_repr(self) -> u16 {
        self.packed
    }

    #[inline]
    pub fn from_packed(packed: u16) -> Self {
        Location { packed }
    }

    /// Whether the location lies inside the diamond-shaped arena of the
    /// given size.
    pub fn in_arena(self, size: u8) -> bool {
        let half = size / 2;
        let (x, y) = (self.x(), self.y());
        if x >= size || y >= size {
            return false;
        }
        let row = if y < half { y } else { size - 1 - y };
        let start = half - 1 - row;
        let end = half + row;

        (start..=end).contains(&x)
    }

    /// Whether the location is on the friendly (bottom) half of the arena.
    pub fn is_friendly_half(self, size: u8) -> bool {
        self.y() < size / 2
    }
}

impl Serialize for Location {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        [self.x(), self.y()].serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Location {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        <[u8; 2]>::deserialize(deserializer).map(|[x, y]| Location::from_coords(x as u32, y as u32))
    }
}

impl From<(u8, u8)> for Location {
    fn from((x, y): (u8, u8)) -> Self {
        Location::from_coords(x as u32, y as u32)
    }
}

/// One of the four diagonal edges of the arena. Mobile units can only be
/// deployed on the two friendly edges.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub enum Edge {
    TopRight,
    TopLeft,
    BottomLeft,
    BottomRight,
}

impl Edge {
    pub const FRIENDLY: [Edge; 2] = [Edge::BottomLeft, Edge::BottomRight];

    /// Cells along this edge, ordered by increasing x.
    pub fn locations(self, size: u8) -> Vec<Location> {
        let half = size / 2;
        let mut cells: Vec<Location> = (0..half)
            .map(|i| {
                let (x, y) = match self {
                    Edge::TopRight => (half + i, size - 1 - i),
                    Edge::TopLeft => (half - 1 - i, size - 1 - i),
                    Edge::BottomLeft => (half - 1 - i, i),
                    Edge::BottomRight => (half + i, i),
                };
                Location::from_coords(x as u32, y as u32)
            })
            .collect();
        cells.sort_by_key(|loc| loc.x());
        cells
    }
}
