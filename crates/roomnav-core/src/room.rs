//! The fixed 3×3 room layout and its coordinate lookups.

use std::fmt;

use crate::direction::Direction;
use crate::error::NavError;
use crate::geom::Point;

/// One of the nine labeled rooms, arranged 3 rows × 3 columns:
///
/// ```text
/// A B C
/// D E F
/// G H I
/// ```
///
/// A room's identity is its label; its grid position is derived via
/// [`Room::coords`], not stored.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Room {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
}

/// Row-major layout of the grid, indexed `[row][col]`.
const LAYOUT: [[Room; 3]; 3] = [
    [Room::A, Room::B, Room::C],
    [Room::D, Room::E, Room::F],
    [Room::G, Room::H, Room::I],
];

impl Room {
    /// All nine rooms in row-major order.
    pub const ALL: [Room; 9] = [
        Room::A,
        Room::B,
        Room::C,
        Room::D,
        Room::E,
        Room::F,
        Room::G,
        Room::H,
        Room::I,
    ];

    /// Grid position of this room (x = column, y = row).
    #[inline]
    pub const fn coords(self) -> Point {
        let i = self as i32;
        Point::new(i % 3, i / 3)
    }

    /// The room at the given grid position, or `None` if out of bounds.
    #[inline]
    pub fn at(p: Point) -> Option<Room> {
        if (0..3).contains(&p.x) && (0..3).contains(&p.y) {
            Some(LAYOUT[p.y as usize][p.x as usize])
        } else {
            None
        }
    }

    /// The adjacent room one step in `dir`, or `None` at the grid edge.
    #[inline]
    pub fn neighbor(self, dir: Direction) -> Option<Room> {
        Room::at(self.coords() + dir.delta())
    }

    /// The room's label character.
    #[inline]
    pub const fn label(self) -> char {
        (b'A' + self as u8) as char
    }
}

impl TryFrom<char> for Room {
    type Error = NavError;

    /// Parse a room label, case-insensitively.
    fn try_from(c: char) -> Result<Self, NavError> {
        match c.to_ascii_uppercase() {
            'A' => Ok(Room::A),
            'B' => Ok(Room::B),
            'C' => Ok(Room::C),
            'D' => Ok(Room::D),
            'E' => Ok(Room::E),
            'F' => Ok(Room::F),
            'G' => Ok(Room::G),
            'H' => Ok(Room::H),
            'I' => Ok(Room::I),
            _ => Err(NavError::InvalidRoom(c)),
        }
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coords_cover_the_grid() {
        assert_eq!(Room::A.coords(), Point::new(0, 0));
        assert_eq!(Room::E.coords(), Point::new(1, 1));
        assert_eq!(Room::I.coords(), Point::new(2, 2));
        assert_eq!(Room::G.coords(), Point::new(0, 2));
    }

    #[test]
    fn at_is_the_inverse_of_coords() {
        for room in Room::ALL {
            assert_eq!(Room::at(room.coords()), Some(room));
        }
        assert_eq!(Room::at(Point::new(3, 0)), None);
        assert_eq!(Room::at(Point::new(0, -1)), None);
    }

    #[test]
    fn neighbor_respects_grid_edges() {
        assert_eq!(Room::A.neighbor(Direction::Up), None);
        assert_eq!(Room::A.neighbor(Direction::Left), None);
        assert_eq!(Room::A.neighbor(Direction::Down), Some(Room::D));
        assert_eq!(Room::A.neighbor(Direction::Right), Some(Room::B));
        assert_eq!(Room::E.neighbor(Direction::Up), Some(Room::B));
        assert_eq!(Room::I.neighbor(Direction::Down), None);
        assert_eq!(Room::I.neighbor(Direction::Right), None);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(Room::try_from('a'), Ok(Room::A));
        assert_eq!(Room::try_from('I'), Ok(Room::I));
        assert_eq!(Room::try_from('Z'), Err(NavError::InvalidRoom('Z')));
        assert_eq!(Room::try_from('1'), Err(NavError::InvalidRoom('1')));
    }

    #[test]
    fn label_round_trip() {
        for room in Room::ALL {
            assert_eq!(Room::try_from(room.label()), Ok(room));
        }
    }
}
