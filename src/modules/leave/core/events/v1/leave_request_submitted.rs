// Event payload: LeaveRequestSubmittedV1.
//
// Purpose
// - Record that an employee asked for time off, with the working-day count
//   computed at submission.

use crate::modules::leave::core::request::LeaveCategory;
use crate::shared::core::primitives::{EmployeeId, RequestId};
use chrono::{DateTime, NaiveDate, Utc};

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct LeaveRequestSubmittedV1 {
    pub request_id: RequestId,
    pub employee_id: EmployeeId,
    pub category: LeaveCategory,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub days: u32,
    pub reason: String,
    pub submitted_at: DateTime<Utc>,
}
