pub mod config;
pub mod dispatcher;
pub mod error;
pub mod queue;
pub mod services;
pub mod strategies;
pub mod strategy;
pub mod types;

pub use crate::dispatcher::{Dispatcher, Status};
pub use crate::error::DispatchError;
pub use crate::types::Floor;
pub use crate::types::direction::{Direction, Heading};
pub use crate::types::event::{Input, Request};
pub use crate::types::tick_event::TickEvent;
