//! Movement directions and their fixed costs.

use std::fmt;

use crate::geom::Point;

/// One of the four cardinal moves.
///
/// Vertical moves cost 1, horizontal moves cost 2. The costs are
/// process-wide constants.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
    Right,
    Left,
}

impl Direction {
    /// All four directions, in the order the search loop expands them.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Right,
        Direction::Left,
    ];

    /// Grid delta of one step in this direction.
    #[inline]
    pub const fn delta(self) -> Point {
        match self {
            Direction::Up => Point::new(0, -1),
            Direction::Down => Point::new(0, 1),
            Direction::Right => Point::new(1, 0),
            Direction::Left => Point::new(-1, 0),
        }
    }

    /// Cost of one move in this direction.
    #[inline]
    pub const fn cost(self) -> i32 {
        match self {
            Direction::Up | Direction::Down => 1,
            Direction::Right | Direction::Left => 2,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Right => "right",
            Direction::Left => "left",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertical_cheaper_than_horizontal() {
        assert_eq!(Direction::Up.cost(), 1);
        assert_eq!(Direction::Down.cost(), 1);
        assert_eq!(Direction::Right.cost(), 2);
        assert_eq!(Direction::Left.cost(), 2);
    }

    #[test]
    fn deltas_are_unit_steps() {
        for dir in Direction::ALL {
            let d = dir.delta();
            assert_eq!(d.x.abs() + d.y.abs(), 1);
        }
    }
}
