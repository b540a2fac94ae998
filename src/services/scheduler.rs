use std::pin::Pin;
use std::task::{Context, Poll};
use tower::Service;

use crate::error::DispatchError;
use crate::strategy::Strategy;
use crate::types::event::Request;
use crate::types::tick_event::TickEvent;

/// Hands requests to the scheduling strategy.
#[derive(Debug, Clone)]
pub struct SchedulerService<ST> {
    strategy: ST,
}

impl<ST> SchedulerService<ST> {
    pub fn new(strategy: ST) -> Self {
        SchedulerService { strategy }
    }
}

impl<ST> Service<Request> for SchedulerService<ST>
where
    ST: Clone + Strategy<Request, TickEvent, Error = DispatchError> + 'static,
{
    type Response = ();
    type Error = DispatchError;
    type Future = Pin<Box<dyn Future<Output = Result<(), Self::Error>> + Send>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, request: Request) -> Self::Future {
        let strategy = self.strategy.clone();
        Box::pin(async move { strategy.handle(request).await })
    }
}
