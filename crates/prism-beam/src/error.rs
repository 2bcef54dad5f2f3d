//! Error type for beam simulation.

use crate::config::ConfigError;
use prism_core::{GridError, Position};
use std::error::Error;
use std::fmt;

/// Errors from building a simulator or running trials.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BeamError {
    /// A grid operation failed outside the expected edge signals.
    Grid(GridError),
    /// The template grid contains a character that is not a tile.
    UnknownTile {
        /// Where the character is.
        position: Position,
        /// The offending character.
        value: char,
    },
    /// The template grid is infinite; beams would never leave it.
    InfiniteGrid,
    /// Sweep configuration failed validation.
    Config(ConfigError),
    /// A sweep worker thread panicked.
    WorkerPanicked,
}

impl fmt::Display for BeamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::UnknownTile { position, value } => {
                write!(f, "unknown tile {value:?} at {position}")
            }
            Self::InfiniteGrid => write!(f, "beam simulation requires a bounded grid"),
            Self::Config(e) => write!(f, "config: {e}"),
            Self::WorkerPanicked => write!(f, "sweep worker panicked"),
        }
    }
}

impl Error for BeamError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for BeamError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl From<ConfigError> for BeamError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
