use crate::shared::core::primitives::{EmployeeId, RequestId};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CancelLeaveRequest {
    pub request_id: RequestId,
    pub requester_id: EmployeeId,
    pub cancelled_at: DateTime<Utc>,
}
