use std::pin::Pin;
use std::task::Poll;
use tower::Service;
use tracing::info;

use crate::types::tick_event::TickEvent;

/// Renders tick outcomes on the console. Repeated idle ticks are printed once.
#[derive(Debug, Default)]
pub struct ReporterService {
    last: Option<TickEvent>,
}

impl ReporterService {
    pub fn new() -> Self {
        Self::default()
    }

    fn should_render(&mut self, event: TickEvent) -> bool {
        let repeat = event == TickEvent::Idle && self.last == Some(TickEvent::Idle);
        self.last = Some(event);
        !repeat
    }
}

impl Service<TickEvent> for ReporterService {
    type Response = ();
    type Error = anyhow::Error;
    type Future = Pin<Box<dyn Future<Output = Result<(), Self::Error>> + Send>>;

    fn poll_ready(&mut self, _cx: &mut std::task::Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, event: TickEvent) -> Self::Future {
        if self.should_render(event) {
            info!(?event, "tick");
            println!("{event}");
        }
        Box::pin(async { Ok(()) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_runs_collapse() {
        let mut reporter = ReporterService::new();
        let rendered: Vec<bool> = [
            TickEvent::Idle,
            TickEvent::Idle,
            TickEvent::Passing(1),
            TickEvent::Idle,
            TickEvent::Idle,
            TickEvent::Servicing(1),
            TickEvent::Servicing(1),
        ]
        .into_iter()
        .map(|event| reporter.should_render(event))
        .collect();
        assert_eq!(
            rendered,
            vec![true, false, true, true, false, true, true]
        );
    }
}
