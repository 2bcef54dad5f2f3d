//! Beam entry points.

use prism_core::{Direction, ParseDirectionError, Position};
use std::error::Error;
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Where a trial's first beam-head starts and which way it travels.
///
/// The starting cell itself is the first cell the beam processes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EntryPoint {
    /// Starting cell.
    pub position: Position,
    /// Initial travel direction.
    pub heading: Direction,
}

impl EntryPoint {
    /// Create an entry point.
    pub const fn new(row: usize, col: usize, heading: Direction) -> Self {
        Self {
            position: Position::new(row, col),
            heading,
        }
    }

    /// Whether this entry lies on the edge its heading points away from,
    /// i.e. the beam enters the grid from outside.
    pub fn is_inward(&self, width: usize, height: usize) -> bool {
        let Position { row, col } = self.position;
        match self.heading {
            Direction::Right => col == 0,
            Direction::Left => col + 1 == width,
            Direction::Down => row == 0,
            Direction::Up => row + 1 == height,
        }
    }
}

impl fmt::Display for EntryPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} heading {}", self.position, self.heading)
    }
}

/// Failure parsing an [`EntryPoint`] from `ROW,COL,DIR` text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseEntryError {
    /// The input is not three comma-separated fields.
    Shape {
        /// The rejected input.
        input: String,
    },
    /// The row field is not an unsigned integer.
    Row {
        /// The rejected field.
        field: String,
        /// Why it was rejected.
        reason: ParseIntError,
    },
    /// The column field is not an unsigned integer.
    Col {
        /// The rejected field.
        field: String,
        /// Why it was rejected.
        reason: ParseIntError,
    },
    /// The direction field is not a direction name.
    Heading(ParseDirectionError),
}

impl fmt::Display for ParseEntryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shape { input } => write!(f, "expected ROW,COL,DIR, got '{input}'"),
            Self::Row { field, reason } => write!(f, "invalid row '{field}': {reason}"),
            Self::Col { field, reason } => write!(f, "invalid column '{field}': {reason}"),
            Self::Heading(e) => write!(f, "{e}"),
        }
    }
}

impl Error for ParseEntryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Row { reason, .. } | Self::Col { reason, .. } => Some(reason),
            Self::Heading(e) => Some(e),
            Self::Shape { .. } => None,
        }
    }
}

impl From<ParseDirectionError> for ParseEntryError {
    fn from(e: ParseDirectionError) -> Self {
        Self::Heading(e)
    }
}

impl FromStr for EntryPoint {
    type Err = ParseEntryError;

    /// Parse `ROW,COL,DIR`, e.g. `0,0,right`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        let [row, col, dir] = parts.as_slice() else {
            return Err(ParseEntryError::Shape {
                input: s.to_owned(),
            });
        };
        let row = row.parse().map_err(|reason| ParseEntryError::Row {
            field: (*row).to_owned(),
            reason,
        })?;
        let col = col.parse().map_err(|reason| ParseEntryError::Col {
            field: (*col).to_owned(),
            reason,
        })?;
        let heading = dir.parse::<Direction>()?;
        Ok(Self::new(row, col, heading))
    }
}

/// Every inward-facing entry on the boundary of a `height x width` grid.
///
/// Order: for each row, the left edge heading right then the right edge
/// heading left; then for each column, the top edge heading down then the
/// bottom edge heading up. Corners therefore appear twice, once per axis.
pub fn boundary_entries(width: usize, height: usize) -> Vec<EntryPoint> {
    if width == 0 || height == 0 {
        return Vec::new();
    }
    let mut out = Vec::with_capacity(2 * (width + height));
    for row in 0..height {
        out.push(EntryPoint::new(row, 0, Direction::Right));
        out.push(EntryPoint::new(row, width - 1, Direction::Left));
    }
    for col in 0..width {
        out.push(EntryPoint::new(0, col, Direction::Down));
        out.push(EntryPoint::new(height - 1, col, Direction::Up));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_entries_cover_every_edge_cell() {
        let entries = boundary_entries(4, 3);
        assert_eq!(entries.len(), 2 * (4 + 3));
        assert_eq!(entries[0], EntryPoint::new(0, 0, Direction::Right));
        assert_eq!(entries[1], EntryPoint::new(0, 3, Direction::Left));
        assert_eq!(entries[6], EntryPoint::new(0, 0, Direction::Down));
        assert_eq!(entries[7], EntryPoint::new(2, 0, Direction::Up));
        assert!(entries.iter().all(|e| e.is_inward(4, 3)));
    }

    #[test]
    fn boundary_entries_of_empty_grid() {
        assert!(boundary_entries(0, 5).is_empty());
    }

    #[test]
    fn parse_entry() {
        let e: EntryPoint = "3, 4, up".parse().unwrap();
        assert_eq!(e, EntryPoint::new(3, 4, Direction::Up));
        assert!("3,4".parse::<EntryPoint>().is_err());
        assert!("x,4,up".parse::<EntryPoint>().is_err());
        assert!("3,4,sideways".parse::<EntryPoint>().is_err());
    }

    #[test]
    fn parse_errors_name_the_bad_field() {
        let err = "3,4".parse::<EntryPoint>().unwrap_err();
        assert_eq!(
            err,
            ParseEntryError::Shape {
                input: "3,4".into()
            }
        );
        assert_eq!(err.to_string(), "expected ROW,COL,DIR, got '3,4'");

        let err = "3, -1, up".parse::<EntryPoint>().unwrap_err();
        assert!(matches!(&err, ParseEntryError::Col { field, .. } if field == "-1"));
        assert!(err.to_string().starts_with("invalid column '-1'"));
        assert!(err.source().is_some());

        let err = "x,4,up".parse::<EntryPoint>().unwrap_err();
        assert!(matches!(err, ParseEntryError::Row { .. }));

        let err = "3,4,sideways".parse::<EntryPoint>().unwrap_err();
        assert!(matches!(err, ParseEntryError::Heading(_)));
        assert!(err.to_string().contains("sideways"));
    }

    #[test]
    fn interior_entry_is_not_inward() {
        assert!(!EntryPoint::new(1, 1, Direction::Right).is_inward(3, 3));
        assert_eq!(
            EntryPoint::new(1, 2, Direction::Left).to_string(),
            "(1, 2) heading left"
        );
    }
}
