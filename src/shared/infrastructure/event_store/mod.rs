// Event store port.
//
// Purpose
// - Describe how the core loads and appends request event streams without
//   tying it to a concrete backend.
//
// Testing guidance
// - Use the in memory implementation for tests and local development.

pub mod in_memory;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EventStoreError {
    #[error("version mismatch: expected {expected}, actual {actual}")]
    VersionMismatch { expected: i64, actual: i64 },

    #[error("backend error: {0}")]
    Backend(String),
}

#[derive(Debug, Clone)]
pub struct LoadedStream<E> {
    pub events: Vec<E>,
    pub version: i64,
}

#[async_trait]
pub trait EventStore<Event: Clone + Send + Sync + 'static>: Send + Sync {
    async fn load(&self, stream_id: &str) -> Result<LoadedStream<Event>, EventStoreError>;

    async fn append(
        &self,
        stream_id: &str,
        expected_version: i64,
        new_events: &[Event],
    ) -> Result<(), EventStoreError>;

    /// Every stream in the store, keyed by stream id, in stream id order.
    async fn load_all(&self) -> Result<Vec<(String, LoadedStream<Event>)>, EventStoreError>;
}
