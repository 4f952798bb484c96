use crate::modules::leave::core::events::LeaveRequestEvent;
use crate::modules::leave::engine::LeaveEngine;
use crate::shared::infrastructure::event_store::in_memory::InMemoryEventStore;
use std::sync::Arc;

pub type InMemoryEngine = LeaveEngine<InMemoryEventStore<LeaveRequestEvent>>;

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<InMemoryEngine>,
}
