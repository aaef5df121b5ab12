use std::num::ParseIntError;

use thiserror::Error;

use crate::Point;

/// Convenient result alias for this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while loading or searching a Road Network.
///
/// Note that an unreachable goal is **not** an Error. Searches report it as `None`.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised for a road type code other than `1` (one-way) or `2` (two-way).
    #[error("unsupported road type: {0}")]
    UnknownRoadType(i64),

    /// Raised when a road line does not consist of exactly five values.
    #[error("expected `<roadType> <srcX> <srcY> <dstX> <dstY>`, found {found} values")]
    MalformedLine {
        /// how many values the line contained
        found: usize,
    },

    /// Raised when a value in a road line is not an integer.
    #[error("invalid integer {token:?}")]
    InvalidInteger {
        /// the offending value
        token: String,
        /// why it could not be parsed
        #[source]
        source: ParseIntError,
    },

    /// Wraps an Error with the (1-based) line of the road file it occurred on.
    #[error("line {line}: {source}")]
    AtLine {
        /// the line number, starting at 1
        line: usize,
        /// what went wrong on that line
        #[source]
        source: Box<Error>,
    },

    /// Raised when an algorithm name is not one of `bfs`, `astar` or `idastar`.
    #[error("unknown algorithm {0:?}, expected one of `bfs`, `astar`, `idastar`")]
    UnknownAlgorithm(String),

    /// Raised when a [`HeuristicTable`](crate::HeuristicTable) is used for a different goal
    /// than the one it was computed for.
    #[error("heuristics were computed for goal {table:?}, but the search goal is {goal:?}")]
    HeuristicGoalMismatch {
        /// the goal of the table
        table: Point,
        /// the goal of the search
        goal: Point,
    },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
