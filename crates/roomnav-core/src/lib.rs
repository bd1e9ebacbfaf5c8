//! **roomnav-core** — the fixed 3×3 room grid and its rules.
//!
//! This crate provides the static topology the search engine operates on:
//! the nine labeled rooms ([`Room`]), the four directional moves with their
//! fixed costs ([`Direction`]), the caller-owned wall registry ([`Walls`]),
//! and the validation errors shared across the workspace ([`NavError`]).

pub mod direction;
pub mod error;
pub mod geom;
pub mod room;
pub mod walls;

pub use direction::Direction;
pub use error::{NavError, Result};
pub use geom::Point;
pub use room::Room;
pub use walls::Walls;
