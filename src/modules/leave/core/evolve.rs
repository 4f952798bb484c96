// Evolve function: combine a prior state with a new event to produce the next state.
//
// Boundaries
// - No input or output. No side effects.
// - Decisions only apply to pending requests; anything else falls through
//   unchanged, so replaying a duplicate event does not apply twice.

use crate::modules::leave::core::events::LeaveRequestEvent;
use crate::modules::leave::core::request::{LeaveRequest, LeaveStatus};
use crate::modules::leave::core::state::LeaveRequestState;

pub fn evolve(state: LeaveRequestState, event: LeaveRequestEvent) -> LeaveRequestState {
    match (state, event) {
        (LeaveRequestState::None, LeaveRequestEvent::LeaveRequestSubmittedV1(e)) => {
            LeaveRequestState::Requested(LeaveRequest {
                id: e.request_id,
                employee_id: e.employee_id,
                category: e.category,
                start_date: e.start_date,
                end_date: e.end_date,
                days: e.days,
                reason: e.reason,
                status: LeaveStatus::Pending,
                submitted_at: e.submitted_at,
                approver_id: None,
                decided_at: None,
                comment: None,
            })
        }
        (LeaveRequestState::Requested(mut r), LeaveRequestEvent::LeaveRequestApprovedV1(e))
            if r.status == LeaveStatus::Pending =>
        {
            r.status = LeaveStatus::Approved;
            r.days = e.days_debited;
            r.approver_id = Some(e.approver_id);
            r.decided_at = Some(e.decided_at);
            r.comment = e.comment;
            LeaveRequestState::Requested(r)
        }
        (LeaveRequestState::Requested(mut r), LeaveRequestEvent::LeaveRequestRejectedV1(e))
            if r.status == LeaveStatus::Pending =>
        {
            r.status = LeaveStatus::Rejected;
            r.approver_id = Some(e.approver_id);
            r.decided_at = Some(e.decided_at);
            r.comment = Some(e.comment);
            LeaveRequestState::Requested(r)
        }
        (LeaveRequestState::Requested(mut r), LeaveRequestEvent::LeaveRequestCancelledV1(e))
            if r.status == LeaveStatus::Pending =>
        {
            r.status = LeaveStatus::Cancelled;
            r.decided_at = Some(e.cancelled_at);
            LeaveRequestState::Requested(r)
        }
        (state, _) => state,
    }
}

/// Folds a whole stream from the blank state.
pub fn fold(events: impl IntoIterator<Item = LeaveRequestEvent>) -> LeaveRequestState {
    events.into_iter().fold(LeaveRequestState::None, evolve)
}
