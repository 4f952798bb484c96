use crate::modules::leave::core::request::{LeaveCategory, LeaveRequest, LeaveStatus};
use crate::tests::fixtures::directory::now;
use chrono::NaiveDate;

pub struct LeaveRequestBuilder {
    request: LeaveRequest,
}

impl LeaveRequestBuilder {
    /// A pending 3 day annual request from E001, Feb 1 to Feb 5 2024.
    pub fn new() -> Self {
        Self {
            request: LeaveRequest {
                id: "L001".into(),
                employee_id: "E001".into(),
                category: LeaveCategory::Annual,
                start_date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
                end_date: NaiveDate::from_ymd_opt(2024, 2, 5).unwrap(),
                days: 3,
                reason: "Family vacation".into(),
                status: LeaveStatus::Pending,
                submitted_at: now(),
                approver_id: None,
                decided_at: None,
                comment: None,
            },
        }
    }

    pub fn id(mut self, id: &str) -> Self {
        self.request.id = id.into();
        self
    }

    pub fn employee_id(mut self, employee_id: &str) -> Self {
        self.request.employee_id = employee_id.into();
        self
    }

    pub fn category(mut self, category: LeaveCategory) -> Self {
        self.request.category = category;
        self
    }

    pub fn dates(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.request.start_date = start;
        self.request.end_date = end;
        self
    }

    pub fn days(mut self, days: u32) -> Self {
        self.request.days = days;
        self
    }

    pub fn status(mut self, status: LeaveStatus) -> Self {
        self.request.status = status;
        self
    }

    pub fn build(self) -> LeaveRequest {
        self.request
    }
}

impl Default for LeaveRequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
