use clap::Parser;
use elevator_dispatch::config::Config;
use elevator_dispatch::services::input::{Flow, InputLayer};
use elevator_dispatch::services::reporter::ReporterService;
use elevator_dispatch::services::scheduler::SchedulerService;
use elevator_dispatch::services::ticker::Ticker;
use elevator_dispatch::strategies::sweep::SweepStrategy;
use elevator_dispatch::Dispatcher;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::watch;
use tower::{Service, ServiceBuilder, ServiceExt};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::parse();
    let dispatcher = Dispatcher::new(config.floors, config.start_floor)?;
    tracing::info!(
        floors = config.floors,
        start = dispatcher.current_floor(),
        tick_ms = config.tick_ms,
        "dispatcher ready"
    );

    println!(
        "The building has {} floors (0 - {}). Enter u for up, d for down or p for a \
         panel button, followed by a floor, i.e. u1.",
        config.floors,
        config.floors - 1
    );
    println!("Type exit to quit.");

    let strategy = SweepStrategy::from_dispatcher(dispatcher);
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let ticker = Ticker::new(strategy.clone(), ReporterService::new(), config.tick_period());
    let ticker_handle = tokio::spawn(ticker.run(shutdown_rx));

    let mut svc = ServiceBuilder::new()
        .layer(InputLayer::new(config.on_invalid))
        .service(SchedulerService::new(strategy.clone()));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let flow = ServiceExt::<String>::ready(&mut svc)
            .await?
            .call(line)
            .await?;
        if flow == Flow::Exit {
            break;
        }
        let status = strategy.status().await;
        tracing::debug!(%status, "after input");
    }

    if shutdown_tx.send(true).is_err() {
        tracing::warn!("ticker already stopped");
    }
    ticker_handle.await??;

    println!("{}", strategy.status().await);
    println!("Terminating Application.\nGoodbye.");
    Ok(())
}
