// Composition root for the leave engine.
//
// Responsibilities
// - Read config from the environment.
// - Build the engine on the in-memory event store, seeded when configured.
// - Expose it over HTTP.

pub mod config;
pub mod http;
pub mod seed;
pub mod state;

use crate::modules::leave::errors::ApplicationError;
use crate::shell::state::{AppState, InMemoryEngine};
use std::sync::Arc;

pub async fn build_engine(seed_demo_data: bool) -> Result<InMemoryEngine, ApplicationError> {
    if seed_demo_data {
        seed::demo_engine().await
    } else {
        seed::demo_organisation()
    }
}

pub async fn app_state(seed_demo_data: bool) -> Result<AppState, ApplicationError> {
    Ok(AppState {
        engine: Arc::new(build_engine(seed_demo_data).await?),
    })
}
