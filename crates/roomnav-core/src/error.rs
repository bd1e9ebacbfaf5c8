//! Error types for roomnav-core.

use thiserror::Error;

/// Validation failures detected before a search starts.
///
/// Mid-search conditions (goal reached, expansion limit, exhausted
/// frontier) are terminal outcomes, not errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavError {
    #[error("invalid room {0:?}, expected a label in A-I")]
    InvalidRoom(char),

    #[error("source and goal are the same room")]
    SameSourceGoal,

    #[error("malformed wall token {0:?}, expected a pair of room labels")]
    MalformedWallSpec(String),
}

pub type Result<T> = core::result::Result<T, NavError>;
