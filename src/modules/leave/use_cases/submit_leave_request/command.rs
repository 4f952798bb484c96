// Command data type for submitting a leave request.
//
// Responsibilities
// - Carry input data for the decider. Independent of any transport.

use crate::modules::leave::core::request::LeaveCategory;
use crate::shared::core::primitives::{EmployeeId, RequestId};
use chrono::{DateTime, NaiveDate, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitLeaveRequest {
    pub request_id: RequestId,
    pub employee_id: EmployeeId,
    pub category: LeaveCategory,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
    pub submitted_at: DateTime<Utc>,
}
