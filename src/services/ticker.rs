use std::time::Duration;
use tokio::sync::watch;
use tokio::time::{self, MissedTickBehavior};
use tower::{Service, ServiceExt};
use tracing::debug;

use crate::strategy::Strategy;
use crate::types::event::Request;
use crate::types::tick_event::TickEvent;

/// Periodic tick source. Each period it steps the strategy once and hands
/// the outcome to `sink`.
pub struct Ticker<ST, S> {
    strategy: ST,
    sink: S,
    period: Duration,
}

impl<ST, S> Ticker<ST, S>
where
    ST: Strategy<Request, TickEvent>,
    S: Service<TickEvent, Response = ()>,
    S::Error: Into<anyhow::Error>,
{
    pub fn new(strategy: ST, sink: S, period: Duration) -> Self {
        Ticker {
            strategy,
            sink,
            period,
        }
    }

    /// Ticks until `shutdown` flips to `true` or its sender is dropped. The
    /// first tick fires one full period after start.
    pub async fn run(mut self, mut shutdown: watch::Receiver<bool>) -> anyhow::Result<()> {
        let mut interval = time::interval(self.period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        interval.tick().await;

        loop {
            tokio::select! {
                _ = interval.tick() => {
                    let event = self.strategy.step().await;
                    ServiceExt::<TickEvent>::ready(&mut self.sink)
                        .await
                        .map_err(Into::into)?
                        .call(event)
                        .await
                        .map_err(Into::into)?;
                }
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        debug!("ticker shutting down");
                        break;
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatcher::Dispatcher;
    use crate::strategies::sweep::SweepStrategy;
    use std::sync::{Arc, Mutex as StdMutex};
    use tower::service_fn;

    type Seen = Arc<StdMutex<Vec<TickEvent>>>;

    fn collector() -> (
        impl Service<TickEvent, Response = (), Error = anyhow::Error, Future: Send> + Send,
        Seen,
    ) {
        let seen: Seen = Arc::default();
        let sink = {
            let seen = seen.clone();
            service_fn(move |event: TickEvent| {
                seen.lock().unwrap().push(event);
                std::future::ready(Ok::<(), anyhow::Error>(()))
            })
        };
        (sink, seen)
    }

    #[tokio::test(start_paused = true)]
    async fn ticks_once_per_period() {
        let strategy = SweepStrategy::from_dispatcher(Dispatcher::new(10, 0).unwrap());
        strategy.handle(Request::HallUp(2)).await.unwrap();
        let (sink, seen) = collector();
        let (tx, rx) = watch::channel(false);

        let ticker = Ticker::new(strategy, sink, Duration::from_secs(1));
        let handle = tokio::spawn(ticker.run(rx));

        time::sleep(Duration::from_millis(3500)).await;
        tx.send(true).unwrap();
        handle.await.unwrap().unwrap();

        assert_eq!(
            *seen.lock().unwrap(),
            vec![
                TickEvent::Passing(1),
                TickEvent::Passing(2),
                TickEvent::Servicing(2)
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn stops_when_sender_dropped() {
        let strategy = SweepStrategy::from_dispatcher(Dispatcher::new(3, 0).unwrap());
        let (sink, seen) = collector();
        let (tx, rx) = watch::channel(false);

        let handle = tokio::spawn(Ticker::new(strategy, sink, Duration::from_secs(5)).run(rx));
        drop(tx);
        handle.await.unwrap().unwrap();
        assert!(seen.lock().unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn sink_errors_stop_the_ticker() {
        let strategy = SweepStrategy::from_dispatcher(Dispatcher::new(3, 0).unwrap());
        let sink = service_fn(|_event: TickEvent| {
            std::future::ready(Err::<(), anyhow::Error>(anyhow::anyhow!("console gone")))
        });
        let (_tx, rx) = watch::channel(false);

        let result = Ticker::new(strategy, sink, Duration::from_millis(10))
            .run(rx)
            .await;
        assert_eq!(result.unwrap_err().to_string(), "console gone");
    }
}
