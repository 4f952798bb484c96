// Pure decision function for submission.
//
// Responsibilities
// - Refuse a request id that already has a stream.
// - Refuse anything the validation report marks as an error.
// - Emit LeaveRequestSubmittedV1 with the counted working days.

use crate::modules::leave::core::decision::DecideError;
use crate::modules::leave::core::events::{
    LeaveRequestEvent, v1::leave_request_submitted::LeaveRequestSubmittedV1,
};
use crate::modules::leave::core::state::LeaveRequestState;
use crate::modules::leave::core::validation::ValidationReport;
use crate::modules::leave::use_cases::submit_leave_request::command::SubmitLeaveRequest;

pub fn decide_submit(
    state: &LeaveRequestState,
    command: SubmitLeaveRequest,
    report: &ValidationReport,
) -> Result<Vec<LeaveRequestEvent>, DecideError> {
    if let LeaveRequestState::Requested(_) = state {
        return Err(DecideError::AlreadyExists(command.request_id));
    }
    let days = match report.working_days {
        Some(days) if report.is_admissible() => days,
        _ => return Err(DecideError::Validation(report.errors.clone())),
    };
    Ok(vec![LeaveRequestEvent::LeaveRequestSubmittedV1(
        LeaveRequestSubmittedV1 {
            request_id: command.request_id,
            employee_id: command.employee_id,
            category: command.category,
            start_date: command.start_date,
            end_date: command.end_date,
            days,
            reason: command.reason,
            submitted_at: command.submitted_at,
        },
    )])
}

#[cfg(test)]
mod submit_decide_tests {
    use super::*;
    use crate::modules::leave::core::evolve::evolve;
    use crate::modules::leave::core::validation::{ValidationError, ValidationWarning};
    use crate::tests::fixtures::commands::SubmitLeaveRequestBuilder;
    use rstest::{fixture, rstest};

    #[fixture]
    fn command() -> SubmitLeaveRequest {
        SubmitLeaveRequestBuilder::new().build()
    }

    #[fixture]
    fn clean_report() -> ValidationReport {
        ValidationReport {
            working_days: Some(5),
            errors: vec![],
            warnings: vec![ValidationWarning::ShortNotice {
                min_notice_days: 7,
                days_until: 2,
            }],
        }
    }

    #[rstest]
    fn it_should_decide_to_submit_the_request(
        command: SubmitLeaveRequest,
        clean_report: ValidationReport,
    ) {
        let events = decide_submit(&LeaveRequestState::None, command.clone(), &clean_report).unwrap();
        assert_eq!(
            events,
            vec![LeaveRequestEvent::LeaveRequestSubmittedV1(LeaveRequestSubmittedV1 {
                request_id: command.request_id,
                employee_id: command.employee_id,
                category: command.category,
                start_date: command.start_date,
                end_date: command.end_date,
                days: 5,
                reason: command.reason,
                submitted_at: command.submitted_at,
            })]
        );
    }

    #[rstest]
    fn it_should_decide_that_the_request_already_exists(
        command: SubmitLeaveRequest,
        clean_report: ValidationReport,
    ) {
        let event = decide_submit(&LeaveRequestState::None, command.clone(), &clean_report).unwrap()[0].clone();
        let state = evolve(LeaveRequestState::None, event);
        assert_eq!(
            decide_submit(&state, command.clone(), &clean_report),
            Err(DecideError::AlreadyExists(command.request_id))
        );
    }

    #[rstest]
    fn it_should_refuse_a_request_with_validation_errors(command: SubmitLeaveRequest) {
        let errors = vec![ValidationError::ExceedsMaxConsecutive { limit: 15, requested: 16 }];
        let report = ValidationReport {
            working_days: Some(16),
            errors: errors.clone(),
            warnings: vec![],
        };
        assert_eq!(
            decide_submit(&LeaveRequestState::None, command, &report),
            Err(DecideError::Validation(errors))
        );
    }
}
