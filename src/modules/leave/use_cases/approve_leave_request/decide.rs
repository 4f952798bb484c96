// Pure decision function for approval.
//
// Responsibilities
// - Require an existing request, the requester's manager and a Pending status.
// - Require a re-validation with zero errors.
// - Emit LeaveRequestApprovedV1 carrying the days to debit.
//
// Testing guidance
// - Check ordering: NotFound, Unauthorized, NotPending, Validation.

use crate::modules::leave::core::decision::DecideError;
use crate::modules::leave::core::directory::Directory;
use crate::modules::leave::core::events::{
    LeaveRequestEvent, v1::leave_request_approved::LeaveRequestApprovedV1,
};
use crate::modules::leave::core::request::LeaveStatus;
use crate::modules::leave::core::state::LeaveRequestState;
use crate::modules::leave::core::validation::ValidationReport;
use crate::modules::leave::use_cases::approve_leave_request::command::ApproveLeaveRequest;

pub fn decide_approve(
    state: &LeaveRequestState,
    command: ApproveLeaveRequest,
    directory: &Directory,
    report: &ValidationReport,
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
    if !report.is_admissible() {
        return Err(DecideError::Validation(report.errors.clone()));
    }

    Ok(vec![LeaveRequestEvent::LeaveRequestApprovedV1(
        LeaveRequestApprovedV1 {
            request_id: command.request_id,
            approver_id: command.approver_id,
            days_debited: report.working_days.unwrap_or(request.days),
            comment: command.comment,
            decided_at: command.decided_at,
        },
    )])
}
