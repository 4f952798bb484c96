// Approval handler.
//
// The ledger mutex is held from re-validation until the approval is appended.
// A failed append credits the debit back before the lock is released.

use crate::modules::leave::core::events::LeaveRequestEvent;
use crate::modules::leave::core::evolve::fold;
use crate::modules::leave::core::decision::DecideError;
use crate::modules::leave::core::request::LeaveRequest;
use crate::modules::leave::core::validation::{ValidationReport, validate_request};
use crate::modules::leave::engine::{LeaveEngine, stream_id};
use crate::modules::leave::errors::ApplicationError;
use crate::modules::leave::use_cases::approve_leave_request::command::ApproveLeaveRequest;
use crate::modules::leave::use_cases::approve_leave_request::decide::decide_approve;
use crate::shared::infrastructure::event_store::EventStore;
use tracing::{info, warn};

impl<S> LeaveEngine<S>
where
    S: EventStore<LeaveRequestEvent> + 'static,
{
    pub async fn approve_request(
        &self,
        command: ApproveLeaveRequest,
    ) -> Result<LeaveRequest, ApplicationError> {
        let request_id = command.request_id.clone();
        let mut ledger = self.ledger.lock().await;
        let (stream, state) = self.load_state(&request_id).await?;

        let report = match state.request() {
            Some(request) => {
                let requests = self.load_requests().await?;
                let holidays = self.holidays.read().await;
                let ctx = self.context(&ledger, &holidays, &requests, command.decided_at);
                validate_request(
                    &ctx,
                    &request.employee_id,
                    request.category,
                    request.start_date,
                    request.end_date,
                )
            }
            None => ValidationReport::default(),
        };

        let events = decide_approve(&state, command, &self.directory, &report).inspect_err(|err| {
            warn!(request_id = %request_id, error = %err, "leave approval refused");
        })?;
        let request = fold(stream.events.into_iter().chain(events.iter().cloned()))
            .into_request()
            .ok_or_else(|| DecideError::NotFound(request_id.clone()))?;

        ledger.debit(&request.employee_id, request.category, request.days)?;
        if let Err(err) = self
            .event_store
            .append(&stream_id(&request_id), stream.version, &events)
            .await
        {
            ledger.credit(&request.employee_id, request.category, request.days)?;
            warn!(request_id = %request_id, error = %err, "approval not recorded, debit rolled back");
            return Err(err.into());
        }

        info!(
            request_id = %request.id,
            employee_id = %request.employee_id,
            days = request.days,
            "leave request approved"
        );
        Ok(request)
    }
}
