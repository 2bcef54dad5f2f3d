//! Compass directions and axes.

use crate::error::ParseDirectionError;
use std::fmt;
use std::str::FromStr;

/// One of the four cardinal directions on a row-major grid.
///
/// `Up` decreases the row index, `Left` decreases the column index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// Toward row 0.
    Up,
    /// Toward the last row.
    Down,
    /// Toward column 0.
    Left,
    /// Toward the last column.
    Right,
}

impl Direction {
    /// All four directions in a fixed order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The direction pointing the other way.
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// The axis this direction moves along.
    pub fn axis(self) -> Axis {
        match self {
            Self::Up | Self::Down => Axis::Row,
            Self::Left | Self::Right => Axis::Col,
        }
    }

    /// Whether movement in this direction increases the coordinate.
    pub fn is_forward(self) -> bool {
        matches!(self, Self::Down | Self::Right)
    }

    /// Lower-case name used in error messages and on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        }
    }

    /// Dense index in `0..4`, matching [`Direction::ALL`].
    pub fn index(self) -> usize {
        match self {
            Self::Up => 0,
            Self::Down => 1,
            Self::Left => 2,
            Self::Right => 3,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" | "u" | "n" | "north" => Ok(Self::Up),
            "down" | "d" | "s" | "south" => Ok(Self::Down),
            "left" | "l" | "w" | "west" => Ok(Self::Left),
            "right" | "r" | "e" | "east" => Ok(Self::Right),
            _ => Err(ParseDirectionError {
                input: s.to_string(),
            }),
        }
    }
}

/// One of the four diagonal directions.
///
/// A diagonal is the composition of one vertical and one horizontal
/// [`Direction`]; movement and peeking resolve each axis independently.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Diagonal {
    /// Up and to the left.
    UpLeft,
    /// Up and to the right.
    UpRight,
    /// Down and to the left.
    DownLeft,
    /// Down and to the right.
    DownRight,
}

impl Diagonal {
    /// All four diagonals in a fixed order.
    pub const ALL: [Diagonal; 4] = [
        Diagonal::DownRight,
        Diagonal::DownLeft,
        Diagonal::UpRight,
        Diagonal::UpLeft,
    ];

    /// The vertical component.
    pub fn vertical(self) -> Direction {
        match self {
            Self::UpLeft | Self::UpRight => Direction::Up,
            Self::DownLeft | Self::DownRight => Direction::Down,
        }
    }

    /// The horizontal component.
    pub fn horizontal(self) -> Direction {
        match self {
            Self::UpLeft | Self::DownLeft => Direction::Left,
            Self::UpRight | Self::DownRight => Direction::Right,
        }
    }

    /// Lower-case hyphenated name, e.g. `"up-left"`.
    pub fn name(self) -> &'static str {
        match self {
            Self::UpLeft => "up-left",
            Self::UpRight => "up-right",
            Self::DownLeft => "down-left",
            Self::DownRight => "down-right",
        }
    }
}

impl fmt::Display for Diagonal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A grid axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The vertical axis (row index).
    Row,
    /// The horizontal axis (column index).
    Col,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Row => f.write_str("row"),
            Self::Col => f.write_str("col"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_is_an_involution() {
        for d in Direction::ALL {
            assert_eq!(d.opposite().opposite(), d);
            assert_ne!(d.opposite(), d);
            assert_eq!(d.opposite().axis(), d.axis());
        }
    }

    #[test]
    fn index_matches_all_order() {
        for (i, d) in Direction::ALL.iter().enumerate() {
            assert_eq!(d.index(), i);
        }
    }

    #[test]
    fn parse_accepts_names_and_shorthands() {
        assert_eq!("up".parse::<Direction>().unwrap(), Direction::Up);
        assert_eq!("RIGHT".parse::<Direction>().unwrap(), Direction::Right);
        assert_eq!(" l ".parse::<Direction>().unwrap(), Direction::Left);
        assert_eq!("south".parse::<Direction>().unwrap(), Direction::Down);
        let err = "sideways".parse::<Direction>().unwrap_err();
        assert_eq!(err.input, "sideways");
    }

    #[test]
    fn diagonal_components() {
        assert_eq!(Diagonal::UpLeft.vertical(), Direction::Up);
        assert_eq!(Diagonal::UpLeft.horizontal(), Direction::Left);
        assert_eq!(Diagonal::DownRight.vertical(), Direction::Down);
        assert_eq!(Diagonal::DownRight.horizontal(), Direction::Right);
        assert_eq!(Diagonal::UpRight.to_string(), "up-right");
    }
}
