// Event payload: LeaveRequestCancelledV1.
//
// Purpose
// - Record that the requester withdrew a pending request. No balance was
//   ever charged for it.

use crate::shared::core::primitives::{EmployeeId, RequestId};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct LeaveRequestCancelledV1 {
    pub request_id: RequestId,
    pub cancelled_by: EmployeeId,
    pub cancelled_at: DateTime<Utc>,
}
