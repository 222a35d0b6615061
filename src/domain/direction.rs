//! Six-direction enumeration for hex neighbors.
//!
//! The board uses a brick-offset layout where valid cells satisfy
//! `col % 2 == row % 2`, so every step changes the row index by 1 or 2.

use std::fmt;

/// The closed set of hex neighbor directions, in ordinal order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    LeftUp,
    RightUp,
    LeftDown,
    RightDown,
}

impl Direction {
    /// Get all directions in ordinal order
    pub const fn all() -> [Direction; 6] {
        [
            Direction::Up,
            Direction::Down,
            Direction::LeftUp,
            Direction::RightUp,
            Direction::LeftDown,
            Direction::RightDown,
        ]
    }

    /// Stable ordinal, 0-indexed
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Display name, also accepted by [`Direction::from_name`]
    pub const fn name(self) -> &'static str {
        match self {
            Direction::Up => "Up",
            Direction::Down => "Down",
            Direction::LeftUp => "LeftUp",
            Direction::RightUp => "RightUp",
            Direction::LeftDown => "LeftDown",
            Direction::RightDown => "RightDown",
        }
    }

    /// Find a direction by its name
    pub fn from_name(name: &str) -> Option<Direction> {
        Direction::all().into_iter().find(|d| d.name() == name)
    }

    /// Grid-index step (dcol, drow) to the adjacent cell.
    /// Vertical neighbors skip a row because rows are half a hex apart.
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -2),
            Direction::Down => (0, 2),
            Direction::LeftUp => (-1, -1),
            Direction::RightUp => (1, -1),
            Direction::LeftDown => (-1, 1),
            Direction::RightDown => (1, 1),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
