//! The two search strategies and their priority keys.

use std::fmt;

use roomnav_core::Room;

use crate::distance::manhattan;

/// How the frontier orders in-progress states.
///
/// Both strategies share one expansion loop and differ only in the
/// heuristic attached to each generated state: always zero for
/// [`Strategy::UniformCost`], Manhattan distance to the goal for
/// [`Strategy::AStar`].
///
/// The estimate counts grid steps, not weighted move cost: two
/// horizontal steps cost 4 but are estimated at 2. The estimate is
/// therefore inconsistent with the cost model, and A-star results are
/// not guaranteed cost-minimal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// Expand by accumulated cost alone.
    UniformCost,
    /// Expand by accumulated cost plus Manhattan distance to the goal.
    AStar,
}

impl Strategy {
    /// Remaining-cost estimate for a state at `room` searching for `goal`.
    #[inline]
    pub fn estimate(self, room: Room, goal: Room) -> i32 {
        match self {
            Strategy::UniformCost => 0,
            Strategy::AStar => manhattan(room.coords(), goal.coords()),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Strategy::UniformCost => "uniform-cost",
            Strategy::AStar => "a-star",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_cost_never_estimates() {
        for room in Room::ALL {
            assert_eq!(Strategy::UniformCost.estimate(room, Room::I), 0);
        }
    }

    #[test]
    fn astar_estimates_manhattan_steps() {
        assert_eq!(Strategy::AStar.estimate(Room::A, Room::I), 4);
        assert_eq!(Strategy::AStar.estimate(Room::E, Room::I), 2);
        assert_eq!(Strategy::AStar.estimate(Room::I, Room::I), 0);
    }

    #[test]
    fn estimate_ignores_horizontal_move_cost() {
        // A to C is two horizontal moves costing 4, estimated at 2.
        assert_eq!(Strategy::AStar.estimate(Room::A, Room::C), 2);
    }
}
