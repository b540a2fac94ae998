use std::fmt;

use crate::types::Floor;

/// What a single scheduling tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickEvent {
    /// The car moved one floor and is now at this floor.
    Passing(Floor),
    /// Doors open at this floor; the stop was removed from its queue.
    Servicing(Floor),
    /// Nothing to do.
    Idle,
}

impl fmt::Display for TickEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TickEvent::Passing(floor) => write!(f, "Passing floor {floor}."),
            TickEvent::Servicing(floor) => {
                write!(f, "Doors open on floor {floor}. Servicing passengers.")
            }
            TickEvent::Idle => write!(f, "Elevator is idle."),
        }
    }
}
