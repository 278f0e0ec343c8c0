use crate::Coordinate;

/// A single tracked hand point in normalized image space.
///
/// `x` grows to the right and `y` grows downward, so a smaller `y` is
/// visually higher in the frame. Depth `z` is carried through from the
/// tracker but never consulted by classification.
#[derive(Debug, Default, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Point {
    pub x: Coordinate,
    pub y: Coordinate,
    #[serde(default)]
    pub z: Coordinate,
}

impl Point {
    pub const fn new(x: Coordinate, y: Coordinate) -> Self {
        Self { x, y, z: 0. }
    }
    /// strictly further left in the frame
    pub fn left_of(&self, other: &Self) -> bool {
        self.x < other.x
    }
    /// strictly higher in the frame
    pub fn above(&self, other: &Self) -> bool {
        self.y < other.y
    }
}

/// (x, y) isomorphism
impl From<(Coordinate, Coordinate)> for Point {
    fn from((x, y): (Coordinate, Coordinate)) -> Self {
        Self::new(x, y)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}
