use std::pin::Pin;
use std::sync::Arc;
use std::task::Poll;
use tokio::sync::Mutex;
use tower::{Layer, Service, ServiceExt};
use tracing::warn;

use crate::config::InvalidInputPolicy;
use crate::error::DispatchError;
use crate::types::event::{Input, Request};

/// Whether the driver loop should keep reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Decodes one line of console input and forwards requests to the inner
/// service. Rejected requests are reported and skipped; undecodable lines
/// follow the configured [`InvalidInputPolicy`].
pub struct InputService<S> {
    inner: Arc<Mutex<S>>,
    policy: InvalidInputPolicy,
}

impl<S> InputService<S> {
    fn new(inner: S, policy: InvalidInputPolicy) -> Self {
        InputService {
            inner: Arc::new(Mutex::new(inner)),
            policy,
        }
    }
}

impl<S> Service<String> for InputService<S>
where
    S: Service<Request, Response = (), Error = DispatchError> + Send + 'static,
    S::Future: Send + 'static,
{
    type Response = Flow;
    type Error = anyhow::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Flow, Self::Error>> + Send>>;

    fn poll_ready(&mut self, _cx: &mut std::task::Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, line: String) -> Self::Future {
        let maybe_input = Input::try_from(line.as_str());
        let inner = self.inner.clone();
        let policy = self.policy;

        Box::pin(async move {
            match maybe_input {
                Ok(Input::Exit) => Ok(Flow::Exit),
                Ok(Input::Request(request)) => {
                    let mut guard = inner.lock().await;
                    let svc = ServiceExt::<Request>::ready(&mut *guard).await?;
                    if let Err(e) = svc.call(request).await {
                        warn!("Request {request:?} rejected: {e}");
                    }
                    Ok(Flow::Continue)
                }
                Err(e) => match policy {
                    InvalidInputPolicy::Terminate => {
                        warn!("Invalid input {line:?}: {e:#}");
                        Ok(Flow::Exit)
                    }
                    InvalidInputPolicy::Ignore => {
                        warn!("Ignoring invalid input {line:?}: {e:#}");
                        Ok(Flow::Continue)
                    }
                },
            }
        })
    }
}

pub struct InputLayer {
    policy: InvalidInputPolicy,
}

impl InputLayer {
    pub fn new(policy: InvalidInputPolicy) -> Self {
        Self { policy }
    }
}

impl<S> Layer<S> for InputLayer {
    type Service = InputService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        InputService::new(inner, self.policy)
    }
}
