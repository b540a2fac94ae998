use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

use crate::dispatcher::{Dispatcher, Status};
use crate::error::DispatchError;
use crate::strategy::Strategy;
use crate::types::direction::Direction;
use crate::types::event::Request;
use crate::types::tick_event::TickEvent;

/// Sweep dispatching for a single car. Intake and ticks share one lock, so a
/// tick is atomic with respect to incoming requests.
#[derive(Debug, Clone)]
pub struct SweepStrategy {
    state: Arc<Mutex<Dispatcher>>,
}

impl SweepStrategy {
    pub fn new(state: Arc<Mutex<Dispatcher>>) -> Self {
        Self { state }
    }

    pub fn from_dispatcher(dispatcher: Dispatcher) -> Self {
        Self::new(Arc::new(Mutex::new(dispatcher)))
    }

    pub async fn status(&self) -> Status {
        self.state.lock().await.status()
    }
}

#[async_trait]
impl Strategy<Request, TickEvent> for SweepStrategy {
    type Error = DispatchError;

    async fn handle(&self, request: Request) -> Result<(), DispatchError> {
        let mut state = self.state.lock().await;
        match request {
            Request::HallUp(floor) => {
                state.call(floor, Direction::Up)?;
                info!("UP: {floor}");
            }
            Request::HallDown(floor) => {
                state.call(floor, Direction::Down)?;
                info!("DOWN: {floor}");
            }
            Request::Panel(floor) => {
                let heading = state.request_from_car(floor)?;
                info!("PANEL: {floor} (queued {heading})");
            }
        }
        Ok(())
    }

    async fn step(&self) -> TickEvent {
        self.state.lock().await.tick()
    }
}
