use crate::shared::core::primitives::{EmployeeId, RequestId};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApproveLeaveRequest {
    pub request_id: RequestId,
    pub approver_id: EmployeeId,
    pub comment: Option<String>,
    pub decided_at: DateTime<Utc>,
}
