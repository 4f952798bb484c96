// Pure decision function for rejection. No validation and no ledger change.

use crate::modules::leave::core::decision::DecideError;
use crate::modules::leave::core::directory::Directory;
use crate::modules::leave::core::events::{
    LeaveRequestEvent, v1::leave_request_rejected::LeaveRequestRejectedV1,
};
use crate::modules::leave::core::request::LeaveStatus;
use crate::modules::leave::core::state::LeaveRequestState;
use crate::modules::leave::use_cases::reject_leave_request::command::RejectLeaveRequest;

pub const DEFAULT_REJECTION_COMMENT: &str = "Request rejected";

pub fn decide_reject(
    state: &LeaveRequestState,
    command: RejectLeaveRequest,
    directory: &Directory,
) -> Result<Vec<LeaveRequestEvent>, DecideError> {
    let Some(request) = state.request() else {
        return Err(DecideError::NotFound(command.request_id));
    };
    if !directory.is_manager_of(&command.approver_id, &request.employee_id) {
        return Err(DecideError::Unauthorized {
            actor: command.approver_id,
            requester: request.employee_id.clone(),
        });
    }
    if request.status != LeaveStatus::Pending {
        return Err(DecideError::NotPending { status: request.status });
    }

    let comment = command
        .comment
        .filter(|c| !c.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_REJECTION_COMMENT.to_string());
    Ok(vec![LeaveRequestEvent::LeaveRequestRejectedV1(
        LeaveRequestRejectedV1 {
            request_id: command.request_id,
            approver_id: command.approver_id,
            comment,
            decided_at: command.decided_at,
        },
    )])
}
