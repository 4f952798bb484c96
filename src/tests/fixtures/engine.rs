use crate::modules::leave::core::events::LeaveRequestEvent;
use crate::modules::leave::core::policy::PolicyCatalog;
use crate::modules::leave::engine::LeaveEngine;
use crate::shared::infrastructure::event_store::in_memory::InMemoryEventStore;
use crate::shell::seed;
use crate::tests::fixtures::directory::{demo_directory, demo_holidays};
use rstest::fixture;
use std::sync::Arc;

pub type TestStore = InMemoryEventStore<LeaveRequestEvent>;
pub type TestEngine = LeaveEngine<TestStore>;

pub fn engine_with(store: TestStore) -> TestEngine {
    LeaveEngine::new(
        demo_directory(),
        PolicyCatalog::with_defaults(),
        demo_holidays(),
        Arc::new(store),
    )
    .unwrap()
}

/// Demo directory and holidays, no requests, full balances.
#[fixture]
pub fn empty_engine() -> TestEngine {
    engine_with(TestStore::new())
}

#[fixture]
pub fn offline_engine() -> TestEngine {
    let mut store = TestStore::new();
    store.toggle_offline();
    engine_with(store)
}

/// The demo engine with L001 to L005 imported.
#[fixture]
pub async fn demo_engine() -> TestEngine {
    seed::demo_engine().await.unwrap()
}
