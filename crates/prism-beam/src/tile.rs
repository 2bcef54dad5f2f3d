//! Tiles and the beam transition table.

use prism_core::Direction;
use std::fmt;

/// What occupies a grid cell, as seen by a beam.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tile {
    /// `.`: beams pass unchanged.
    Empty,
    /// `/`: reflects up↔right, down↔left.
    Slash,
    /// `\`: reflects up↔left, down↔right.
    Backslash,
    /// `|`: passes vertical beams, splits horizontal ones up and down.
    VerticalSplitter,
    /// `-`: passes horizontal beams, splits vertical ones left and right.
    HorizontalSplitter,
}

/// Outcome of a beam entering a tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// The beam continues in this direction.
    Pass(Direction),
    /// The beam splits: the existing head takes the first direction, a
    /// new head takes the second.
    Split(Direction, Direction),
}

impl Tile {
    /// Parse a tile symbol.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '.' => Some(Self::Empty),
            '/' => Some(Self::Slash),
            '\\' => Some(Self::Backslash),
            '|' => Some(Self::VerticalSplitter),
            '-' => Some(Self::HorizontalSplitter),
            _ => None,
        }
    }

    /// The character this tile is written as.
    pub fn symbol(self) -> char {
        match self {
            Self::Empty => '.',
            Self::Slash => '/',
            Self::Backslash => '\\',
            Self::VerticalSplitter => '|',
            Self::HorizontalSplitter => '-',
        }
    }

    /// Where a beam travelling in `heading` goes after this tile.
    pub fn transition(self, heading: Direction) -> Transition {
        use Direction::*;
        match (self, heading) {
            (Self::Empty, d) => Transition::Pass(d),

            (Self::Slash, Up) => Transition::Pass(Right),
            (Self::Slash, Down) => Transition::Pass(Left),
            (Self::Slash, Left) => Transition::Pass(Down),
            (Self::Slash, Right) => Transition::Pass(Up),

            (Self::Backslash, Up) => Transition::Pass(Left),
            (Self::Backslash, Down) => Transition::Pass(Right),
            (Self::Backslash, Left) => Transition::Pass(Up),
            (Self::Backslash, Right) => Transition::Pass(Down),

            (Self::VerticalSplitter, d @ (Up | Down)) => Transition::Pass(d),
            (Self::VerticalSplitter, Left | Right) => Transition::Split(Up, Down),

            (Self::HorizontalSplitter, d @ (Left | Right)) => Transition::Pass(d),
            (Self::HorizontalSplitter, Up | Down) => Transition::Split(Left, Right),
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Tile; 5] = [
        Tile::Empty,
        Tile::Slash,
        Tile::Backslash,
        Tile::VerticalSplitter,
        Tile::HorizontalSplitter,
    ];

    #[test]
    fn symbols_round_trip() {
        for t in ALL {
            assert_eq!(Tile::from_symbol(t.symbol()), Some(t));
        }
        assert_eq!(Tile::from_symbol('#'), None);
    }

    #[test]
    fn slash_table() {
        assert_eq!(Tile::Slash.transition(Direction::Up), Transition::Pass(Direction::Right));
        assert_eq!(Tile::Slash.transition(Direction::Left), Transition::Pass(Direction::Down));
    }

    #[test]
    fn splitters_split_only_across() {
        assert_eq!(
            Tile::VerticalSplitter.transition(Direction::Right),
            Transition::Split(Direction::Up, Direction::Down)
        );
        assert_eq!(
            Tile::VerticalSplitter.transition(Direction::Down),
            Transition::Pass(Direction::Down)
        );
        assert_eq!(
            Tile::HorizontalSplitter.transition(Direction::Up),
            Transition::Split(Direction::Left, Direction::Right)
        );
        assert_eq!(
            Tile::HorizontalSplitter.transition(Direction::Left),
            Transition::Pass(Direction::Left)
        );
    }

    #[test]
    fn passing_transitions_are_reversible() {
        // Light entering where it left, travelling backwards, leaves
        // where it entered.
        for t in ALL {
            for d in Direction::ALL {
                if let Transition::Pass(out) = t.transition(d) {
                    assert_eq!(
                        t.transition(out.opposite()),
                        Transition::Pass(d.opposite()),
                        "{t} is not reversible for {d}"
                    );
                }
            }
        }
    }

    #[test]
    fn mirrors_always_turn() {
        for t in [Tile::Slash, Tile::Backslash] {
            for d in Direction::ALL {
                match t.transition(d) {
                    Transition::Pass(out) => assert_ne!(out.axis(), d.axis()),
                    Transition::Split(..) => panic!("{t} split a beam"),
                }
            }
        }
    }
}
