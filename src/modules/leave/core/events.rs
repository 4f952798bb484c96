// Root event enumeration for leave requests and re-exports of versioned payloads.
//
// Versioning and evolution
// - Prefer additive changes. If a breaking change is needed, add a new version and a new variant.
// - Do not change the meaning of historical events.

pub mod v1 {
    pub mod leave_request_approved;
    pub mod leave_request_cancelled;
    pub mod leave_request_rejected;
    pub mod leave_request_submitted;
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum LeaveRequestEvent {
    LeaveRequestSubmittedV1(v1::leave_request_submitted::LeaveRequestSubmittedV1),
    LeaveRequestApprovedV1(v1::leave_request_approved::LeaveRequestApprovedV1),
    LeaveRequestRejectedV1(v1::leave_request_rejected::LeaveRequestRejectedV1),
    LeaveRequestCancelledV1(v1::leave_request_cancelled::LeaveRequestCancelledV1),
}
