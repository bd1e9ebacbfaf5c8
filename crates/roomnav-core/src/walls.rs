//! The wall registry: a symmetric set of blocked edges between rooms.

use std::collections::HashSet;

use crate::error::{NavError, Result};
use crate::room::Room;

/// A set of blocked edges between adjacent rooms.
///
/// Walls are stored as a symmetric relation: both orderings of a pair are
/// present, so [`Walls::blocks`] is a pure symmetric lookup. The registry
/// does not validate adjacency; callers are expected to supply adjacent
/// pairs. A `Walls` value is owned by the caller and borrowed by each
/// search run, so no wall state carries over between runs unless the
/// caller re-supplies it.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Walls {
    blocked: HashSet<(Room, Room)>,
}

impl Walls {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from unordered room pairs.
    pub fn from_pairs<P: IntoIterator<Item = (Room, Room)>>(pairs: P) -> Self {
        let mut walls = Self::new();
        for (a, b) in pairs {
            walls.add(a, b);
        }
        walls
    }

    /// Parse a wall specification such as `"AD GH BC"`.
    ///
    /// Tokens are whitespace-separated and must be exactly two room labels,
    /// case-insensitive. Adjacency of the pair is not checked.
    pub fn parse(spec: &str) -> Result<Self> {
        let mut walls = Self::new();
        for token in spec.split_whitespace() {
            let mut chars = token.chars();
            match (chars.next(), chars.next(), chars.next()) {
                (Some(a), Some(b), None) => {
                    walls.add(Room::try_from(a)?, Room::try_from(b)?);
                }
                _ => return Err(NavError::MalformedWallSpec(token.to_owned())),
            }
        }
        Ok(walls)
    }

    /// Block the edge between `a` and `b`. Inserts both orderings;
    /// idempotent.
    pub fn add(&mut self, a: Room, b: Room) {
        self.blocked.insert((a, b));
        self.blocked.insert((b, a));
    }

    /// Remove every wall.
    pub fn clear(&mut self) {
        self.blocked.clear();
    }

    /// Whether the edge between `a` and `b` is blocked, in either order.
    #[inline]
    pub fn blocks(&self, a: Room, b: Room) -> bool {
        self.blocked.contains(&(a, b))
    }

    /// Number of logical blocked edges.
    pub fn edge_count(&self) -> usize {
        self.blocked.len() / 2
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.blocked.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_is_symmetric_and_idempotent() {
        let mut walls = Walls::new();
        walls.add(Room::A, Room::D);
        walls.add(Room::D, Room::A);
        assert!(walls.blocks(Room::A, Room::D));
        assert!(walls.blocks(Room::D, Room::A));
        assert_eq!(walls.edge_count(), 1);
    }

    #[test]
    fn clear_empties_the_registry() {
        let mut walls = Walls::from_pairs([(Room::A, Room::B), (Room::E, Room::F)]);
        assert_eq!(walls.edge_count(), 2);
        walls.clear();
        assert!(walls.is_empty());
        assert!(!walls.blocks(Room::A, Room::B));
    }

    #[test]
    fn parse_accepts_pair_tokens() {
        let walls = Walls::parse("AD gh BC").unwrap();
        assert_eq!(walls.edge_count(), 3);
        assert!(walls.blocks(Room::A, Room::D));
        assert!(walls.blocks(Room::H, Room::G));
        assert!(walls.blocks(Room::B, Room::C));
    }

    #[test]
    fn parse_empty_spec_is_no_walls() {
        let walls = Walls::parse("   ").unwrap();
        assert!(walls.is_empty());
    }

    #[test]
    fn parse_rejects_malformed_tokens() {
        assert_eq!(
            Walls::parse("ADX"),
            Err(NavError::MalformedWallSpec("ADX".to_owned()))
        );
        assert_eq!(
            Walls::parse("A"),
            Err(NavError::MalformedWallSpec("A".to_owned()))
        );
    }

    #[test]
    fn parse_rejects_unknown_rooms() {
        assert_eq!(Walls::parse("AZ"), Err(NavError::InvalidRoom('Z')));
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn walls_round_trip() {
        let walls = Walls::parse("AD GH").unwrap();
        let json = serde_json::to_string(&walls).unwrap();
        let back: Walls = serde_json::from_str(&json).unwrap();
        assert_eq!(walls, back);
        assert!(back.blocks(Room::D, Room::A));
    }
}
