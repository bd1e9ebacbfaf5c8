//! **roomnav-search** — best-first search over the 3×3 room grid.
//!
//! Two interchangeable strategies share one expansion loop:
//!
//! - **Uniform-cost** search, ordered by accumulated move cost alone
//! - **A\*** search, ordered by cost plus a Manhattan-distance estimate
//!
//! A run is a [`Search`] value: a lazy, finite iterator yielding one
//! [`SearchStep`] per expanded state, ending in exactly one terminal
//! [`Outcome`] (goal reached, expansion limit hit, or frontier exhausted).
//! Any consumer can drive it: a renderer pulling a step at a time, or a
//! test harness draining it through [`Search::run`].
//!
//! ```
//! use roomnav_core::{Room, Walls};
//! use roomnav_search::{Outcome, Search, Strategy};
//!
//! let walls = Walls::parse("AD").unwrap();
//! let search = Search::new(Room::A, Room::D, &walls, Strategy::UniformCost).unwrap();
//! let outcome = search.run(|step| println!("{} at cost {}", step.room, step.cost));
//! assert!(matches!(outcome, Outcome::GoalReached { total_cost: 5, .. }));
//! ```

mod distance;
mod frontier;
mod search;
mod state;
mod strategy;

pub use distance::manhattan;
pub use frontier::Frontier;
pub use search::{EXPANSION_LIMIT, Outcome, Search, SearchStep};
pub use state::SearchState;
pub use strategy::Strategy;
