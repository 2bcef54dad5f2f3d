//! Error types for grid construction, access, and pointer movement.

use crate::direction::Direction;
use crate::id::PointerId;
use crate::position::Position;
use std::error::Error;
use std::fmt;

/// Errors arising from grid parsing, accessors, and pointer operations.
///
/// `Parse` and `OutOfBounds` indicate bad input or a caller bug.
/// `Move` and `Peek` are ordinary control-flow signals: a traversal that
/// runs off a bounded grid gets one of these and decides what to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// Input text is not a non-empty rectangular block of characters.
    Parse {
        /// 1-based line number of the offending row (0 for whole-input errors).
        line: usize,
        /// What went wrong.
        reason: String,
    },
    /// A direct accessor was called outside the grid.
    OutOfBounds {
        /// The offending position.
        position: Position,
        /// Human-readable description of the valid range.
        bounds: String,
    },
    /// A pointer move was blocked by the grid edge.
    Move {
        /// The blocked direction(s), e.g. `"left"` or `"up or left"`.
        toward: String,
    },
    /// A pointer peek was blocked by the grid edge.
    Peek {
        /// The blocked direction(s), e.g. `"left"` or `"up or left"`.
        toward: String,
    },
    /// No pointer with this ID is registered on the grid.
    UnknownPointer {
        /// The missing pointer.
        id: PointerId,
    },
    /// Growth was requested on a bounded grid.
    NotGrowable {
        /// The edge that would have grown.
        side: Direction,
    },
}

impl GridError {
    /// `true` for the movement/peek signals a traversal is expected to
    /// handle; `false` for input errors and caller bugs.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Move { .. } | Self::Peek { .. })
    }

    pub(crate) fn bounds_desc(height: usize, width: usize) -> String {
        format!("[0, {height}) x [0, {width})")
    }

    /// Build an [`OutOfBounds`](Self::OutOfBounds) error for a `height x width` grid.
    pub fn out_of_bounds(position: Position, height: usize, width: usize) -> Self {
        Self::OutOfBounds {
            position,
            bounds: Self::bounds_desc(height, width),
        }
    }
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse { line, reason } if *line == 0 => write!(f, "parse error: {reason}"),
            Self::Parse { line, reason } => write!(f, "parse error on line {line}: {reason}"),
            Self::OutOfBounds { position, bounds } => {
                write!(f, "position {position} out of bounds: {bounds}")
            }
            Self::Move { toward } => write!(f, "cannot move {toward}"),
            Self::Peek { toward } => write!(f, "cannot peek {toward}"),
            Self::UnknownPointer { id } => write!(f, "no pointer with id {id}"),
            Self::NotGrowable { side } => {
                write!(f, "cannot grow {side}: grid is bounded")
            }
        }
    }
}

impl Error for GridError {}

/// A direction name could not be parsed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseDirectionError {
    /// The rejected input.
    pub input: String,
}

impl fmt::Display for ParseDirectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown direction '{}' (expected up, down, left or right)",
            self.input
        )
    }
}

impl Error for ParseDirectionError {}
