use async_trait::async_trait;

/// A scheduling policy fed with requests of type `E`, stepped once per tick
/// to produce an outcome `O`.
///
/// Implementations own whatever locking they need; `handle` and `step` must
/// never observe each other half-way through.
#[async_trait]
pub trait Strategy<E, O>: Send + Sync {
    type Error;

    async fn handle(&self, event: E) -> Result<(), Self::Error>;

    async fn step(&self) -> O;
}
