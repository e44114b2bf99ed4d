//! The per-turn action vocabulary and the fixed move-direction rule.

use std::fmt;

use crate::geom::Point;

/// A single-cell cardinal move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Offset of one step in this direction (rows grow southward).
    #[inline]
    pub const fn delta(self) -> Point {
        match self {
            Self::North => Point::new(0, -1),
            Self::South => Point::new(0, 1),
            Self::East => Point::new(1, 0),
            Self::West => Point::new(-1, 0),
        }
    }
}

/// Direction of the next step from `from` toward `target`.
///
/// Columns are resolved before rows. Equal points produce `None`, which the
/// caller treats as "arrived".
pub fn move_direction(target: Point, from: Point) -> Option<Direction> {
    if target.x != from.x {
        Some(if target.x > from.x {
            Direction::East
        } else {
            Direction::West
        })
    } else if target.y != from.y {
        Some(if target.y > from.y {
            Direction::South
        } else {
            Direction::North
        })
    } else {
        None
    }
}

/// What an agent does on one turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    Move(Direction),
    /// Pick up the fruit on the current cell.
    Take,
    Pass,
}

impl From<Direction> for Action {
    fn from(d: Direction) -> Self {
        Self::Move(d)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Move(Direction::North) => "NORTH",
            Self::Move(Direction::South) => "SOUTH",
            Self::Move(Direction::East) => "EAST",
            Self::Move(Direction::West) => "WEST",
            Self::Take => "TAKE",
            Self::Pass => "PASS",
        };
        f.write_str(s)
    }
}
