//! Frontier entries: one in-progress search path and its cost.

use roomnav_core::{Direction, Room};

/// One frontier entry: a room reached along a concrete path, with the
/// accumulated move cost and the strategy's remaining-cost estimate.
///
/// A state is created when its move is generated and never mutated
/// afterwards; expansion builds new child states via [`SearchState::advance`].
/// The path doubles as the result trace and as the cycle-avoidance set for
/// this branch of the search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    room: Room,
    cost: i32,
    path: Vec<Room>,
    heuristic: i32,
}

impl SearchState {
    /// The start state: cost 0, path containing only the source.
    pub(crate) fn seed(source: Room, heuristic: i32) -> Self {
        Self {
            room: source,
            cost: 0,
            path: vec![source],
            heuristic,
        }
    }

    /// Child state one move in `dir` to `room`, which the caller has
    /// already validated as a reachable neighbor.
    pub(crate) fn advance(&self, dir: Direction, room: Room, heuristic: i32) -> Self {
        let mut path = self.path.clone();
        path.push(room);
        Self {
            room,
            cost: self.cost + dir.cost(),
            path,
            heuristic,
        }
    }

    /// The room this state occupies.
    #[inline]
    pub fn room(&self) -> Room {
        self.room
    }

    /// Accumulated move cost from the source.
    #[inline]
    pub fn cost(&self) -> i32 {
        self.cost
    }

    /// The rooms visited so far, source first, current room last.
    #[inline]
    pub fn path(&self) -> &[Room] {
        &self.path
    }

    /// The strategy's estimate of the remaining cost to the goal.
    #[inline]
    pub fn heuristic(&self) -> i32 {
        self.heuristic
    }

    /// Frontier ordering key: accumulated cost plus estimate.
    #[inline]
    pub fn priority(&self) -> i32 {
        self.cost + self.heuristic
    }

    /// Whether `room` already appears on this state's path.
    #[inline]
    pub(crate) fn visits(&self, room: Room) -> bool {
        self.path.contains(&room)
    }
}
