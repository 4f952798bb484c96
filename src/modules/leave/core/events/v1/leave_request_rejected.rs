// Event payload: LeaveRequestRejectedV1.

use crate::shared::core::primitives::{EmployeeId, RequestId};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct LeaveRequestRejectedV1 {
    pub request_id: RequestId,
    pub approver_id: EmployeeId,
    pub comment: String,
    pub decided_at: DateTime<Utc>,
}
