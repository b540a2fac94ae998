pub mod input;
pub mod reporter;
pub mod scheduler;
pub mod ticker;
