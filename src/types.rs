use serde::{Deserialize, Serialize};

/// Axis directions a word may be laid out along.
///
/// These four vectors are the only placement axes attempted; anything else
/// (left, up, the two remaining diagonals) is reachable only as the reverse
/// reading of a placed word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Right,
    Down,
    DownRight,
    UpRight,
}

impl Direction {
    #[inline]
    pub fn all() -> [Direction; 4] {
        [
            Direction::Right,
            Direction::Down,
            Direction::DownRight,
            Direction::UpRight,
        ]
    }

    /// (row-delta, col-delta) step for this direction.
    #[inline]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::DownRight => (1, 1),
            Direction::UpRight => (-1, 1),
        }
    }
}

/// Bounds check for a (row, col) pair against a square grid side.
#[inline]
pub fn in_bounds(r: i32, c: i32, side: i32) -> bool {
    (0..side).contains(&r) && (0..side).contains(&c)
}
