// Pure decision function for cancellation.
//
// Only the requester may cancel, and only while the request is Pending.
// Approved requests stay approved, so the ledger never needs a credit here.

use crate::modules::leave::core::decision::DecideError;
use crate::modules::leave::core::events::{
    LeaveRequestEvent, v1::leave_request_cancelled::LeaveRequestCancelledV1,
};
use crate::modules::leave::core::request::LeaveStatus;
use crate::modules::leave::core::state::LeaveRequestState;
use crate::modules::leave::use_cases::cancel_leave_request::command::CancelLeaveRequest;

pub fn decide_cancel(
    state: &LeaveRequestState,
    command: CancelLeaveRequest,
) -> Result<Vec<LeaveRequestEvent>, DecideError> {
    let Some(request) = state.request() else {
        return Err(DecideError::NotFound(command.request_id));
    };
    if request.employee_id != command.requester_id {
        return Err(DecideError::Unauthorized {
            actor: command.requester_id,
            requester: request.employee_id.clone(),
        });
    }
    if request.status != LeaveStatus::Pending {
        return Err(DecideError::NotPending { status: request.status });
    }
    Ok(vec![LeaveRequestEvent::LeaveRequestCancelledV1(
        LeaveRequestCancelledV1 {
            request_id: command.request_id,
            cancelled_by: command.requester_id,
            cancelled_at: command.cancelled_at,
        },
    )])
}
