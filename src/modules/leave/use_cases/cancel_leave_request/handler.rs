use crate::modules::leave::core::decision::DecideError;
use crate::modules::leave::core::events::LeaveRequestEvent;
use crate::modules::leave::core::evolve::fold;
use crate::modules::leave::core::request::LeaveRequest;
use crate::modules::leave::engine::{LeaveEngine, stream_id};
use crate::modules::leave::errors::ApplicationError;
use crate::modules::leave::use_cases::cancel_leave_request::command::CancelLeaveRequest;
use crate::modules::leave::use_cases::cancel_leave_request::decide::decide_cancel;
use crate::shared::infrastructure::event_store::EventStore;
use tracing::{info, warn};

impl<S> LeaveEngine<S>
where
    S: EventStore<LeaveRequestEvent> + 'static,
{
    pub async fn cancel_request(
        &self,
        command: CancelLeaveRequest,
    ) -> Result<LeaveRequest, ApplicationError> {
        let request_id = command.request_id.clone();
        let (stream, state) = self.load_state(&request_id).await?;
        let events = decide_cancel(&state, command).inspect_err(|err| {
            warn!(request_id = %request_id, error = %err, "leave cancellation refused");
        })?;
        self.event_store
            .append(&stream_id(&request_id), stream.version, &events)
            .await?;

        let request = fold(stream.events.into_iter().chain(events))
            .into_request()
            .ok_or_else(|| DecideError::NotFound(request_id.clone()))?;
        info!(request_id = %request.id, employee_id = %request.employee_id, "leave request cancelled");
        Ok(request)
    }
}
