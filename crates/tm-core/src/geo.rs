//! Grid coordinate type.
//!
//! Positions are integer grid cells; all travel costs are Manhattan
//! distances, so no floating point is involved anywhere in the reward.

/// A grid cell `(x, y)`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "(i32, i32)", into = "(i32, i32)"))]
pub struct GridPoint {
    pub x: i32,
    pub y: i32,
}

impl GridPoint {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Sum of absolute coordinate differences.  Widened to `u64` so that
    /// any two `i32` points have a representable distance.
    #[inline]
    pub fn manhattan(self, other: GridPoint) -> u64 {
        u64::from(self.x.abs_diff(other.x)) + u64::from(self.y.abs_diff(other.y))
    }

    /// Cells visited when driving from `self` to `to`, one step at a time,
    /// along x first and then along y.  `self` is excluded, `to` is included;
    /// the walk is empty when the points coincide.
    ///
    /// The walk always has exactly `self.manhattan(to)` cells.
    pub fn walk_to(self, to: GridPoint) -> Vec<GridPoint> {
        let mut cells = Vec::new();
        let mut cur = self;
        let dx = to.x.cmp(&self.x) as i32;
        let dy = to.y.cmp(&self.y) as i32;
        while cur.x != to.x {
            cur.x += dx;
            cells.push(cur);
        }
        while cur.y != to.y {
            cur.y += dy;
            cells.push(cur);
        }
        cells
    }
}

impl From<(i32, i32)> for GridPoint {
    fn from((x, y): (i32, i32)) -> Self {
        GridPoint { x, y }
    }
}

impl From<GridPoint> for (i32, i32) {
    fn from(p: GridPoint) -> Self {
        (p.x, p.y)
    }
}

impl std::fmt::Display for GridPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
