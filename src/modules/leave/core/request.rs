// Leave request read shape and its vocabulary.
//
// Purpose
// - The folded view of one request stream, as returned to callers.
//
// Boundaries
// - Values only. Status changes happen through events and evolve.

use crate::shared::core::primitives::{EmployeeId, RequestId};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaveCategory {
    Annual,
    Sick,
    Personal,
}

impl LeaveCategory {
    pub const ALL: [LeaveCategory; 3] = [
        LeaveCategory::Annual,
        LeaveCategory::Sick,
        LeaveCategory::Personal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveCategory::Annual => "Annual Leave",
            LeaveCategory::Sick => "Sick Leave",
            LeaveCategory::Personal => "Personal Leave",
        }
    }
}

impl fmt::Display for LeaveCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
    Cancelled,
}

impl LeaveStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveStatus::Pending => "pending",
            LeaveStatus::Approved => "approved",
            LeaveStatus::Rejected => "rejected",
            LeaveStatus::Cancelled => "cancelled",
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, LeaveStatus::Pending)
    }
}

impl fmt::Display for LeaveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRequest {
    pub id: RequestId,
    pub employee_id: EmployeeId,
    pub category: LeaveCategory,
    pub start_date: NaiveDate,
    /// Inclusive.
    pub end_date: NaiveDate,
    /// Working days, computed when the request was submitted.
    pub days: u32,
    pub reason: String,
    pub status: LeaveStatus,
    pub submitted_at: DateTime<Utc>,
    pub approver_id: Option<EmployeeId>,
    pub decided_at: Option<DateTime<Utc>>,
    pub comment: Option<String>,
}

impl LeaveRequest {
    /// Closed-interval intersection with `[start, end]`.
    pub fn overlaps(&self, start: NaiveDate, end: NaiveDate) -> bool {
        !(self.end_date < start || self.start_date > end)
    }
}
