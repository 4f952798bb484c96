use crate::modules::leave::core::events::v1::leave_request_approved::LeaveRequestApprovedV1;
use crate::modules::leave::core::events::v1::leave_request_cancelled::LeaveRequestCancelledV1;
use crate::modules::leave::core::events::v1::leave_request_rejected::LeaveRequestRejectedV1;
use crate::modules::leave::core::events::v1::leave_request_submitted::LeaveRequestSubmittedV1;
use crate::modules::leave::core::request::LeaveCategory;
use crate::tests::fixtures::directory::now;
use chrono::{Duration, NaiveDate};

pub fn submitted_event(request_id: &str, employee_id: &str) -> LeaveRequestSubmittedV1 {
    LeaveRequestSubmittedV1 {
        request_id: request_id.into(),
        employee_id: employee_id.into(),
        category: LeaveCategory::Annual,
        start_date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2024, 2, 5).unwrap(),
        days: 3,
        reason: "Family vacation".into(),
        submitted_at: now(),
    }
}

pub fn approved_event(request_id: &str, approver_id: &str) -> LeaveRequestApprovedV1 {
    LeaveRequestApprovedV1 {
        request_id: request_id.into(),
        approver_id: approver_id.into(),
        days_debited: 3,
        comment: None,
        decided_at: now() + Duration::hours(2),
    }
}

pub fn rejected_event(request_id: &str, approver_id: &str) -> LeaveRequestRejectedV1 {
    LeaveRequestRejectedV1 {
        request_id: request_id.into(),
        approver_id: approver_id.into(),
        comment: "Request rejected".into(),
        decided_at: now() + Duration::hours(2),
    }
}

pub fn cancelled_event(request_id: &str, employee_id: &str) -> LeaveRequestCancelledV1 {
    LeaveRequestCancelledV1 {
        request_id: request_id.into(),
        cancelled_by: employee_id.into(),
        cancelled_at: now() + Duration::hours(1),
    }
}
