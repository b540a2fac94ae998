pub mod direction;
pub mod event;
pub mod tick_event;

/// Floor index. Signed so out-of-range requests below the ground floor can be
/// represented and rejected instead of wrapping.
pub type Floor = i32;
