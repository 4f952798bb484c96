// In memory implementation of the EventStore port.
//
// Responsibilities
// - Store events per stream in memory.
// - Enforce optimistic concurrency by checking the expected version.
// - Offer failure and latency switches so handlers can be tested against them.

use crate::shared::infrastructure::event_store::{EventStore, EventStoreError, LoadedStream};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

pub struct InMemoryEventStore<Event: Clone + Send + Sync + 'static> {
    inner: RwLock<BTreeMap<String, Vec<Event>>>,
    is_offline: bool,
    delay_append_ms: AtomicU64,
}

impl<Event: Clone + Send + Sync + 'static> Default for InMemoryEventStore<Event> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Event: Clone + Send + Sync + 'static> InMemoryEventStore<Event> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(BTreeMap::new()),
            is_offline: false,
            delay_append_ms: AtomicU64::new(0),
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    /// Sleeps before every append, after the caller has loaded its version.
    pub fn set_delay_append_ms(&self, ms: u64) {
        self.delay_append_ms.store(ms, Ordering::SeqCst);
    }

    fn ensure_online(&self) -> Result<(), EventStoreError> {
        if self.is_offline {
            return Err(EventStoreError::Backend("Event store offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl<Event> EventStore<Event> for InMemoryEventStore<Event>
where
    Event: Clone + Send + Sync + 'static,
{
    async fn load(&self, stream_id: &str) -> Result<LoadedStream<Event>, EventStoreError> {
        self.ensure_online()?;
        let guard = self.inner.read().await;
        let events = guard.get(stream_id).cloned().unwrap_or_default();
        let version = events.len() as i64;
        Ok(LoadedStream { events, version })
    }

    async fn append(
        &self,
        stream_id: &str,
        expected_version: i64,
        new_events: &[Event],
    ) -> Result<(), EventStoreError> {
        self.ensure_online()?;
        let delay = self.delay_append_ms.load(Ordering::SeqCst);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }
        let mut guard = self.inner.write().await;
        let entry = guard.entry(stream_id.to_string()).or_default();
        let actual = entry.len() as i64;
        if actual != expected_version {
            return Err(EventStoreError::VersionMismatch {
                expected: expected_version,
                actual,
            });
        }
        entry.extend_from_slice(new_events);
        Ok(())
    }

    async fn load_all(&self) -> Result<Vec<(String, LoadedStream<Event>)>, EventStoreError> {
        self.ensure_online()?;
        let guard = self.inner.read().await;
        Ok(guard
            .iter()
            .filter(|(_, events)| !events.is_empty())
            .map(|(id, events)| {
                (
                    id.clone(),
                    LoadedStream {
                        events: events.clone(),
                        version: events.len() as i64,
                    },
                )
            })
            .collect())
    }
}

#[cfg(test)]
mod in_memory_event_store_tests {
    use super::*;
    use rstest::rstest;

    #[derive(Debug, Clone, PartialEq)]
    struct DomainEvent {
        event_type: &'static str,
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_append_and_load_multiple_events() {
        let store = InMemoryEventStore::<DomainEvent>::new();
        let events = vec![
            DomainEvent { event_type: "test_1" },
            DomainEvent { event_type: "test_2" },
        ];
        store
            .append("1", 0, &events)
            .await
            .expect("expected to append to the event_store");
        let stream = store
            .load("1")
            .await
            .expect("expected to load from the event_store");
        assert_eq!(stream.version, 2);
        assert_eq!(stream.events, events);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_load_an_empty_stream_at_version_zero() {
        let store = InMemoryEventStore::<DomainEvent>::new();
        let stream = store.load("missing").await.unwrap();
        assert_eq!(stream.version, 0);
        assert!(stream.events.is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_to_append_if_the_wrong_version_is_expected() {
        let store = InMemoryEventStore::<DomainEvent>::new();
        let result = store
            .append("1", 1, &[DomainEvent { event_type: "test" }])
            .await;
        assert_eq!(
            result,
            Err(EventStoreError::VersionMismatch {
                expected: 1,
                actual: 0
            })
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_load_all_streams_in_id_order() {
        let store = InMemoryEventStore::<DomainEvent>::new();
        store.append("b", 0, &[DomainEvent { event_type: "b" }]).await.unwrap();
        store.append("a", 0, &[DomainEvent { event_type: "a" }]).await.unwrap();
        let ids: Vec<String> = store
            .load_all()
            .await
            .unwrap()
            .into_iter()
            .map(|(id, _)| id)
            .collect();
        assert_eq!(ids, vec!["a".to_string(), "b".to_string()]);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_every_operation_when_offline() {
        let mut store = InMemoryEventStore::<DomainEvent>::new();
        store.toggle_offline();
        let expected = EventStoreError::Backend("Event store offline".into());
        assert_eq!(store.load("1").await.unwrap_err(), expected);
        assert_eq!(store.append("1", 0, &[]).await.unwrap_err(), expected);
        assert_eq!(store.load_all().await.unwrap_err(), expected);
    }
}
