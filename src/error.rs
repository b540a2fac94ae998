use thiserror::Error;

use crate::types::direction::Direction;
use crate::types::Floor;

/// Errors surfaced by the dispatch core. Everything else (empty queues,
/// boundary floors, reversals) is ordinary control flow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    #[error("floor {floor} is outside the building (floors 0..{floor_count})")]
    InvalidFloor { floor: Floor, floor_count: Floor },

    #[error("cannot queue a request travelling {0}")]
    InvalidDirection(Direction),

    #[error("a building needs at least one floor, got {floor_count}")]
    Configuration { floor_count: Floor },
}
