use crate::modules::leave::core::request::LeaveCategory;
use crate::modules::leave::use_cases::submit_leave_request::command::SubmitLeaveRequest;
use crate::tests::fixtures::directory::now;
use chrono::NaiveDate;

pub struct SubmitLeaveRequestBuilder {
    command: SubmitLeaveRequest,
}

impl SubmitLeaveRequestBuilder {
    /// L100: E001 asks for annual leave Jan 18 to Jan 24 2024, 5 working days.
    pub fn new() -> Self {
        Self {
            command: SubmitLeaveRequest {
                request_id: "L100".into(),
                employee_id: "E001".into(),
                category: LeaveCategory::Annual,
                start_date: NaiveDate::from_ymd_opt(2024, 1, 18).unwrap(),
                end_date: NaiveDate::from_ymd_opt(2024, 1, 24).unwrap(),
                reason: "Family vacation".into(),
                submitted_at: now(),
            },
        }
    }

    pub fn request_id(mut self, request_id: &str) -> Self {
        self.command.request_id = request_id.into();
        self
    }

    pub fn employee_id(mut self, employee_id: &str) -> Self {
        self.command.employee_id = employee_id.into();
        self
    }

    pub fn category(mut self, category: LeaveCategory) -> Self {
        self.command.category = category;
        self
    }

    pub fn dates(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.command.start_date = start;
        self.command.end_date = end;
        self
    }

    pub fn build(self) -> SubmitLeaveRequest {
        self.command
    }
}

impl Default for SubmitLeaveRequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
