//! The search run: a pull-based stream of expansion steps ending in one
//! terminal outcome.

use roomnav_core::{Direction, NavError, Result, Room, Walls};

use crate::frontier::Frontier;
use crate::state::SearchState;
use crate::strategy::Strategy;

/// Hard cap on expanded (popped, non-goal) states per run.
pub const EXPANSION_LIMIT: usize = 10;

/// One observation per popped state: the room under expansion, the
/// accumulated cost, and the path that reached it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStep {
    pub room: Room,
    pub cost: i32,
    pub path: Vec<Room>,
}

/// How a run ended. Every run ends in exactly one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// The goal was popped from the frontier. The path is acyclic and its
    /// cost is the sum of its edge costs.
    GoalReached { path: Vec<Room>, total_cost: i32 },
    /// [`EXPANSION_LIMIT`] states were expanded without reaching the goal.
    LimitReached,
    /// The frontier emptied without reaching the goal (walls isolate it).
    Exhausted,
}

/// A validated search run over the room grid.
///
/// `Search` is an [`Iterator`] yielding one [`SearchStep`] per popped
/// state, in expansion order. The stream is lazy, finite, and
/// non-restartable; once it ends, [`Search::outcome`] reports the terminal
/// outcome. Any consumer can drive it a step at a time, or use
/// [`Search::run`] to drain it through a callback.
///
/// The wall set is borrowed for the lifetime of the run, so walls cannot
/// change while a search is in progress.
///
/// No closed list is kept: cycle avoidance is per-path only, so distinct
/// paths may revisit the same room and equal-room states are not
/// deduplicated. Ties in priority pop in insertion order.
pub struct Search<'w> {
    goal: Room,
    walls: &'w Walls,
    strategy: Strategy,
    frontier: Frontier<SearchState>,
    expanded: usize,
    outcome: Option<Outcome>,
}

impl<'w> Search<'w> {
    /// Set up a run from `source` to `goal`.
    ///
    /// Fails with [`NavError::SameSourceGoal`] when the two coincide; a
    /// zero-move search is rejected rather than trivially solved.
    pub fn new(source: Room, goal: Room, walls: &'w Walls, strategy: Strategy) -> Result<Self> {
        if source == goal {
            return Err(NavError::SameSourceGoal);
        }
        let seed = SearchState::seed(source, strategy.estimate(source, goal));
        let mut frontier = Frontier::new();
        frontier.push(seed.priority(), seed);
        log::debug!("{strategy} search {source} -> {goal}, {} walls", walls.edge_count());
        Ok(Self {
            goal,
            walls,
            strategy,
            frontier,
            expanded: 0,
            outcome: None,
        })
    }

    /// The goal room of this run.
    #[inline]
    pub fn goal(&self) -> Room {
        self.goal
    }

    /// The strategy driving this run.
    #[inline]
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// The terminal outcome, or `None` while steps remain.
    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    /// Drain the stream, feeding every step to `on_step`, and return the
    /// terminal outcome.
    pub fn run<F: FnMut(&SearchStep)>(mut self, mut on_step: F) -> Outcome {
        for step in self.by_ref() {
            on_step(&step);
        }
        self.outcome.unwrap_or(Outcome::Exhausted)
    }

    /// Push every valid move out of `state` onto the frontier.
    fn expand(&mut self, state: &SearchState) {
        for dir in Direction::ALL {
            let Some(next) = state.room().neighbor(dir) else {
                continue;
            };
            if self.walls.blocks(next, state.room()) || state.visits(next) {
                continue;
            }
            let child = state.advance(dir, next, self.strategy.estimate(next, self.goal));
            self.frontier.push(child.priority(), child);
        }
    }
}

impl Iterator for Search<'_> {
    type Item = SearchStep;

    fn next(&mut self) -> Option<SearchStep> {
        if self.outcome.is_some() {
            return None;
        }
        let Some(state) = self.frontier.pop() else {
            log::debug!("frontier exhausted, {} unreached", self.goal);
            self.outcome = Some(Outcome::Exhausted);
            return None;
        };
        log::trace!(
            "pop {} cost={} priority={} frontier={}",
            state.room(),
            state.cost(),
            state.priority(),
            self.frontier.len()
        );
        let step = SearchStep {
            room: state.room(),
            cost: state.cost(),
            path: state.path().to_vec(),
        };

        if state.room() == self.goal {
            log::debug!("goal {} reached, total cost {}", self.goal, state.cost());
            self.outcome = Some(Outcome::GoalReached {
                path: step.path.clone(),
                total_cost: state.cost(),
            });
            return Some(step);
        }

        self.expanded += 1;
        if self.expanded == EXPANSION_LIMIT {
            log::debug!("expansion limit of {EXPANSION_LIMIT} reached");
            self.outcome = Some(Outcome::LimitReached);
            return Some(step);
        }

        self.expand(&state);
        Some(step)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn search_step_round_trip() {
        let step = SearchStep {
            room: Room::D,
            cost: 3,
            path: vec![Room::A, Room::D],
        };
        let json = serde_json::to_string(&step).unwrap();
        let back: SearchStep = serde_json::from_str(&json).unwrap();
        assert_eq!(step, back);
    }

    #[test]
    fn outcome_round_trip() {
        let outcome = Outcome::GoalReached {
            path: vec![Room::A, Room::B],
            total_cost: 2,
        };
        let json = serde_json::to_string(&outcome).unwrap();
        let back: Outcome = serde_json::from_str(&json).unwrap();
        assert_eq!(outcome, back);
    }
}
