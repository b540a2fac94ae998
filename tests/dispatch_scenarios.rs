use elevator_dispatch::config::InvalidInputPolicy;
use elevator_dispatch::services::input::{Flow, InputLayer};
use elevator_dispatch::services::scheduler::SchedulerService;
use elevator_dispatch::strategies::sweep::SweepStrategy;
use elevator_dispatch::strategy::Strategy;
use elevator_dispatch::{Direction, Dispatcher, TickEvent};
use tower::{Service, ServiceBuilder, ServiceExt};

use TickEvent::{Idle, Passing, Servicing};

async fn type_lines(
    svc: &mut (impl Service<String, Response = Flow, Error = anyhow::Error> + Send),
    lines: &[&str],
) -> Flow {
    let mut flow = Flow::Continue;
    for line in lines {
        flow = ServiceExt::<String>::ready(&mut *svc)
            .await
            .unwrap()
            .call(line.to_string())
            .await
            .unwrap();
        if flow == Flow::Exit {
            break;
        }
    }
    flow
}

async fn ticks(strategy: &SweepStrategy, n: usize) -> Vec<TickEvent> {
    let mut events = Vec::with_capacity(n);
    for _ in 0..n {
        events.push(strategy.step().await);
    }
    events
}

fn pipeline(
    floors: i32,
    start: i32,
) -> (
    SweepStrategy,
    impl Service<String, Response = Flow, Error = anyhow::Error> + Send,
) {
    let strategy = SweepStrategy::from_dispatcher(Dispatcher::new(floors, start).unwrap());
    let svc = ServiceBuilder::new()
        .layer(InputLayer::new(InvalidInputPolicy::Terminate))
        .service(SchedulerService::new(strategy.clone()));
    (strategy, svc)
}

#[tokio::test]
async fn ten_floor_building_serves_a_single_up_call() {
    let (strategy, mut svc) = pipeline(10, 0);
    assert_eq!(type_lines(&mut svc, &["u5"]).await, Flow::Continue);

    assert_eq!(
        ticks(&strategy, 7).await,
        vec![
            Passing(1),
            Passing(2),
            Passing(3),
            Passing(4),
            Passing(5),
            Servicing(5),
            Idle
        ]
    );
    assert_eq!(ticks(&strategy, 3).await, vec![Idle, Idle, Idle]);
    assert_eq!(strategy.status().await.direction, Direction::Idle);
}

#[tokio::test]
async fn up_sweep_then_down_sweep_skips_nothing() {
    let (strategy, mut svc) = pipeline(10, 1);
    type_lines(&mut svc, &["U6", "d8", "D4", "d2", "u3"]).await;

    let serviced: Vec<_> = ticks(&strategy, 30)
        .await
        .into_iter()
        .filter_map(|event| match event {
            Servicing(floor) => Some(floor),
            _ => None,
        })
        .collect();
    // the car turns at the last up stop; the down call above it is
    // collected once nothing is left below
    assert_eq!(serviced, vec![3, 6, 4, 2, 8]);

    let status = strategy.status().await;
    assert!(status.up.is_empty() && status.down.is_empty());
    assert_eq!(status.floor, 8);
}

#[tokio::test]
async fn passenger_requests_follow_travel_intent() {
    let (strategy, mut svc) = pipeline(10, 0);
    type_lines(&mut svc, &["u4"]).await;
    ticks(&strategy, 4).await;
    // aboard at floor 4, going up
    assert_eq!(ticks(&strategy, 1).await, vec![Servicing(4)]);
    type_lines(&mut svc, &["p7", "p1"]).await;

    let status = strategy.status().await;
    assert_eq!(status.up, vec![7]);
    assert_eq!(status.down, vec![1]);

    let events = ticks(&strategy, 14).await;
    assert_eq!(
        events,
        vec![
            Passing(5),
            Passing(6),
            Passing(7),
            Servicing(7),
            Passing(6),
            Passing(5),
            Passing(4),
            Passing(3),
            Passing(2),
            Passing(1),
            Servicing(1),
            Idle,
            Idle,
            Idle
        ]
    );
}

#[tokio::test]
async fn calls_arriving_mid_run_are_picked_up() {
    let (strategy, mut svc) = pipeline(10, 0);
    type_lines(&mut svc, &["u8"]).await;
    assert_eq!(ticks(&strategy, 3).await, vec![Passing(1), Passing(2), Passing(3)]);

    // ahead of the car in its direction: served on this sweep
    type_lines(&mut svc, &["u5"]).await;
    assert_eq!(ticks(&strategy, 3).await, vec![Passing(4), Passing(5), Servicing(5)]);
}

#[tokio::test]
async fn out_of_range_and_exit() {
    let (strategy, mut svc) = pipeline(4, 0);
    assert_eq!(
        type_lines(&mut svc, &["u9", "d-1", "p3", "exit", "u1"]).await,
        Flow::Exit
    );
    let status = strategy.status().await;
    assert_eq!(status.up, vec![3]);
    assert!(status.down.is_empty());
}

#[tokio::test]
async fn garbage_terminates_the_driver() {
    let (strategy, mut svc) = pipeline(10, 0);
    assert_eq!(type_lines(&mut svc, &["u2", "hello", "u3"]).await, Flow::Exit);
    assert_eq!(strategy.status().await.up, vec![2]);
}
