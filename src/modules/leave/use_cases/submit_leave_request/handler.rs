// Submission handler.
//
// Responsibilities
// - Validate the proposal against the current ledger, holidays and requests.
// - Decide, then append the new stream with optimistic concurrency.

use crate::modules::leave::core::evolve::fold;
use crate::modules::leave::core::events::LeaveRequestEvent;
use crate::modules::leave::core::decision::DecideError;
use crate::modules::leave::core::request::LeaveRequest;
use crate::modules::leave::core::validation::{ValidationWarning, validate_request};
use crate::modules::leave::engine::{LeaveEngine, stream_id};
use crate::modules::leave::errors::ApplicationError;
use crate::modules::leave::use_cases::submit_leave_request::command::SubmitLeaveRequest;
use crate::modules::leave::use_cases::submit_leave_request::decide::decide_submit;
use crate::shared::infrastructure::event_store::EventStore;
use serde::Serialize;
use tracing::{info, warn};

/// The stored request and the advisory warnings the requester accepted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Submission {
    pub request: LeaveRequest,
    pub warnings: Vec<String>,
}

impl<S> LeaveEngine<S>
where
    S: EventStore<LeaveRequestEvent> + 'static,
{
    pub async fn submit_request(
        &self,
        command: SubmitLeaveRequest,
    ) -> Result<Submission, ApplicationError> {
        let request_id = command.request_id.clone();
        let (stream, state) = self.load_state(&request_id).await?;
        let requests = self.load_requests().await?;
        let report = {
            let ledger = self.ledger.lock().await;
            let holidays = self.holidays.read().await;
            let ctx = self.context(&ledger, &holidays, &requests, command.submitted_at);
            validate_request(
                &ctx,
                &command.employee_id,
                command.category,
                command.start_date,
                command.end_date,
            )
        };

        let events = decide_submit(&state, command, &report).inspect_err(|err| {
            warn!(request_id = %request_id, error = %err, "leave request refused");
        })?;
        self.event_store
            .append(&stream_id(&request_id), stream.version, &events)
            .await?;

        let request = fold(stream.events.into_iter().chain(events))
            .into_request()
            .ok_or_else(|| DecideError::NotFound(request_id.clone()))?;
        info!(
            request_id = %request.id,
            employee_id = %request.employee_id,
            days = request.days,
            warnings = report.warnings.len(),
            "leave request submitted"
        );
        Ok(Submission {
            request,
            warnings: report.warnings.iter().map(ValidationWarning::to_string).collect(),
        })
    }
}

#[cfg(test)]
mod submit_handler_tests {
    use crate::modules::leave::core::decision::DecideError;
    use crate::modules::leave::core::request::LeaveStatus;
    use crate::modules::leave::core::validation::ValidationError;
    use crate::modules::leave::errors::ApplicationError;
    use crate::shared::infrastructure::event_store::{EventStore, EventStoreError};
    use crate::tests::fixtures::commands::SubmitLeaveRequestBuilder;
    use crate::tests::fixtures::engine::{TestEngine, empty_engine, offline_engine};
    use chrono::NaiveDate;
    use rstest::rstest;
    use std::sync::Arc;
    use tokio::join;

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, d).unwrap()
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_store_a_pending_request(empty_engine: TestEngine) {
        let submission = empty_engine
            .submit_request(SubmitLeaveRequestBuilder::new().build())
            .await
            .expect("submit failed");
        assert_eq!(submission.request.status, LeaveStatus::Pending);
        assert_eq!(submission.request.days, 5);
        assert!(submission.warnings.is_empty());

        let stream = empty_engine
            .event_store()
            .load("LeaveRequest-L100")
            .await
            .unwrap();
        assert_eq!(stream.version, 1);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_return_warnings_without_blocking(empty_engine: TestEngine) {
        let submission = empty_engine
            .submit_request(
                SubmitLeaveRequestBuilder::new()
                    .dates(date(1, 10), date(1, 10))
                    .build(),
            )
            .await
            .unwrap();
        assert_eq!(submission.warnings, vec!["Less than 7 days notice provided".to_string()]);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_refuse_a_request_with_errors_and_store_nothing(empty_engine: TestEngine) {
        let result = empty_engine
            .submit_request(
                SubmitLeaveRequestBuilder::new()
                    .dates(date(1, 18), date(2, 8))
                    .build(),
            )
            .await;
        assert!(matches!(
            result,
            Err(ApplicationError::Domain(DecideError::Validation(ref errors)))
                if errors == &vec![ValidationError::ExceedsMaxConsecutive { limit: 15, requested: 16 }]
        ));
        assert!(empty_engine.event_store().load_all().await.unwrap().is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_refuse_a_duplicate_request_id(empty_engine: TestEngine) {
        let command = SubmitLeaveRequestBuilder::new().build();
        empty_engine.submit_request(command.clone()).await.unwrap();
        let result = empty_engine.submit_request(command).await;
        assert!(matches!(
            result,
            Err(ApplicationError::Domain(DecideError::AlreadyExists(ref id))) if id == "L100"
        ));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_let_only_one_of_two_racing_submissions_win(empty_engine: TestEngine) {
        empty_engine.event_store().set_delay_append_ms(10);
        let engine = Arc::new(empty_engine);
        let command = SubmitLeaveRequestBuilder::new().build();
        let (first, second) = join!(
            engine.submit_request(command.clone()),
            engine.submit_request(command)
        );
        assert!(first.is_ok() ^ second.is_ok(), "exactly one should fail");
        let err = first.err().or(second.err()).unwrap();
        assert!(matches!(
            err,
            ApplicationError::EventStore(EventStoreError::VersionMismatch { expected: 0, actual: 1 })
        ));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_if_the_event_store_is_offline(offline_engine: TestEngine) {
        let result = offline_engine
            .submit_request(SubmitLeaveRequestBuilder::new().build())
            .await;
        assert!(matches!(
            result,
            Err(ApplicationError::EventStore(EventStoreError::Backend(_)))
        ));
    }
}
