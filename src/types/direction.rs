use std::fmt;

use crate::error::DispatchError;

/// State of the car as seen by the dispatcher.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    #[default]
    Idle,
}

/// A travel direction. Unlike [`Direction`] there is no idle variant, so every
/// request queue is keyed by one of these.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heading {
    #[default]
    Up,
    Down,
}

impl Heading {
    pub fn opposite(self) -> Heading {
        match self {
            Heading::Up => Heading::Down,
            Heading::Down => Heading::Up,
        }
    }

    /// Signed floor offset of one step in this heading.
    pub fn step(self) -> i32 {
        match self {
            Heading::Up => 1,
            Heading::Down => -1,
        }
    }
}

impl From<Heading> for Direction {
    fn from(heading: Heading) -> Self {
        match heading {
            Heading::Up => Direction::Up,
            Heading::Down => Direction::Down,
        }
    }
}

impl TryFrom<Direction> for Heading {
    type Error = DispatchError;

    fn try_from(direction: Direction) -> Result<Self, Self::Error> {
        match direction {
            Direction::Up => Ok(Heading::Up),
            Direction::Down => Ok(Heading::Down),
            Direction::Idle => Err(DispatchError::InvalidDirection(direction)),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Up => f.pad("UP"),
            Direction::Down => f.pad("DOWN"),
            Direction::Idle => f.pad("IDLE"),
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&Direction::from(*self), f)
    }
}
