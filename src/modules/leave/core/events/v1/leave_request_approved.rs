// Event payload: LeaveRequestApprovedV1.
//
// Purpose
// - Record a manager's approval. `days_debited` is what the ledger was charged.

use crate::shared::core::primitives::{EmployeeId, RequestId};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct LeaveRequestApprovedV1 {
    pub request_id: RequestId,
    pub approver_id: EmployeeId,
    pub days_debited: u32,
    pub comment: Option<String>,
    pub decided_at: DateTime<Utc>,
}
