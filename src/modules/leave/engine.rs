// The leave engine aggregate.
//
// Purpose
// - Own the directory, policy catalog, holiday calendar, balance ledger and
//   the request event store, and hand them to the use case handlers.
//
// Concurrency
// - The ledger mutex is the approval boundary: re-validation, debit and the
//   append of the approval all happen while it is held.
// - Lock order is ledger, then holidays.
// - Everything else relies on optimistic concurrency in the event store.

use crate::modules::leave::core::balance::BalanceLedger;
use crate::modules::leave::core::calendar::HolidayCalendar;
use crate::modules::leave::core::decision::DecideError;
use crate::modules::leave::core::directory::Directory;
use crate::modules::leave::core::events::LeaveRequestEvent;
use crate::modules::leave::core::evolve::fold;
use crate::modules::leave::core::policy::PolicyCatalog;
use crate::modules::leave::core::request::{LeaveRequest, LeaveStatus};
use crate::modules::leave::core::state::LeaveRequestState;
use crate::modules::leave::core::validation::ValidationContext;
use crate::modules::leave::errors::ApplicationError;
use crate::shared::infrastructure::event_store::{EventStore, LoadedStream};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use tracing::{info, warn};

pub fn stream_id(request_id: &str) -> String {
    format!("LeaveRequest-{request_id}")
}

pub struct LeaveEngine<S>
where
    S: EventStore<LeaveRequestEvent> + 'static,
{
    pub(crate) directory: Directory,
    pub(crate) policies: PolicyCatalog,
    pub(crate) holidays: RwLock<HolidayCalendar>,
    pub(crate) ledger: Mutex<BalanceLedger>,
    pub(crate) event_store: Arc<S>,
}

impl<S> LeaveEngine<S>
where
    S: EventStore<LeaveRequestEvent> + 'static,
{
    /// Opens a full-entitlement balance account for every employee.
    pub fn new(
        directory: Directory,
        policies: PolicyCatalog,
        holidays: HolidayCalendar,
        event_store: Arc<S>,
    ) -> Result<Self, ApplicationError> {
        let mut ledger = BalanceLedger::new();
        for employee in directory.iter() {
            let policy =
                policies
                    .get(&employee.policy)
                    .ok_or_else(|| ApplicationError::UnknownPolicy {
                        employee_id: employee.id.clone(),
                        policy: employee.policy.clone(),
                    })?;
            ledger.open(employee.id.clone(), policy);
        }
        Ok(Self {
            directory,
            policies,
            holidays: RwLock::new(holidays),
            ledger: Mutex::new(ledger),
            event_store,
        })
    }

    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    pub fn policies(&self) -> &PolicyCatalog {
        &self.policies
    }

    pub fn event_store(&self) -> &Arc<S> {
        &self.event_store
    }

    /// Appends pre-existing request streams and charges the ledger for every
    /// request that ends up approved. Each stream must be new; a request id
    /// already in the store fails with `AlreadyExists`.
    pub async fn import_history(
        &self,
        streams: Vec<Vec<LeaveRequestEvent>>,
    ) -> Result<(), ApplicationError> {
        let mut ledger = self.ledger.lock().await;
        let mut imported = 0usize;
        for events in streams {
            let Some(request) = fold(events.iter().cloned()).into_request() else {
                continue;
            };
            let stream_id = stream_id(&request.id);
            let stream = self.event_store.load(&stream_id).await?;
            if stream.version != 0 {
                warn!(request_id = %request.id, "history import refused, request already recorded");
                return Err(DecideError::AlreadyExists(request.id).into());
            }
            let charged = request.status == LeaveStatus::Approved;
            if charged {
                ledger.debit(&request.employee_id, request.category, request.days)?;
            }
            if let Err(err) = self.event_store.append(&stream_id, 0, &events).await {
                if charged {
                    ledger.credit(&request.employee_id, request.category, request.days)?;
                }
                warn!(request_id = %request.id, error = %err, "history import failed, debit rolled back");
                return Err(err.into());
            }
            imported += 1;
        }
        info!(imported, "leave history imported");
        Ok(())
    }

    pub async fn request(&self, request_id: &str) -> Result<LeaveRequest, ApplicationError> {
        let (_, state) = self.load_state(request_id).await?;
        state
            .into_request()
            .ok_or_else(|| DecideError::NotFound(request_id.to_string()).into())
    }

    pub(crate) async fn load_state(
        &self,
        request_id: &str,
    ) -> Result<(LoadedStream<LeaveRequestEvent>, LeaveRequestState), ApplicationError> {
        let stream = self.event_store.load(&stream_id(request_id)).await?;
        let state = fold(stream.events.iter().cloned());
        Ok((stream, state))
    }

    /// Every request in the store, folded.
    pub(crate) async fn load_requests(&self) -> Result<Vec<LeaveRequest>, ApplicationError> {
        Ok(self
            .event_store
            .load_all()
            .await?
            .into_iter()
            .filter_map(|(_, stream)| fold(stream.events).into_request())
            .collect())
    }

    pub(crate) fn context<'a>(
        &'a self,
        ledger: &'a BalanceLedger,
        holidays: &'a HolidayCalendar,
        requests: &'a [LeaveRequest],
        now: DateTime<Utc>,
    ) -> ValidationContext<'a> {
        ValidationContext {
            directory: &self.directory,
            policies: &self.policies,
            ledger,
            holidays,
            requests,
            now,
        }
    }
}
