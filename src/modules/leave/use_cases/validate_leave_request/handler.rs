// Read-only checks that do not change any state.
//
// Responsibilities
// - Preview the validation report for a proposed request.
// - Coverage and sick pattern lookups for one employee.

use crate::modules::leave::core::coverage::{Coverage, compute_coverage};
use crate::modules::leave::core::events::LeaveRequestEvent;
use crate::modules::leave::core::request::LeaveCategory;
use crate::modules::leave::core::sick_pattern::{SickPattern, compute_sick_pattern};
use crate::modules::leave::core::validation::{ValidationReport, validate_request};
use crate::modules::leave::engine::LeaveEngine;
use crate::modules::leave::errors::ApplicationError;
use crate::shared::infrastructure::event_store::EventStore;
use chrono::{DateTime, NaiveDate, Utc};
use tracing::debug;

impl<S> LeaveEngine<S>
where
    S: EventStore<LeaveRequestEvent> + 'static,
{
    pub async fn validate_request(
        &self,
        employee_id: &str,
        category: LeaveCategory,
        start: NaiveDate,
        end: NaiveDate,
        now: DateTime<Utc>,
    ) -> Result<ValidationReport, ApplicationError> {
        let requests = self.load_requests().await?;
        let ledger = self.ledger.lock().await;
        let holidays = self.holidays.read().await;
        let ctx = self.context(&ledger, &holidays, &requests, now);
        let report = validate_request(&ctx, employee_id, category, start, end);
        debug!(
            employee_id,
            %category,
            %start,
            %end,
            errors = report.errors.len(),
            warnings = report.warnings.len(),
            "leave request validated"
        );
        Ok(report)
    }

    pub async fn coverage_for(
        &self,
        employee_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Coverage, ApplicationError> {
        let employee = self
            .directory
            .get(employee_id)
            .ok_or_else(|| ApplicationError::UnknownEmployee(employee_id.to_string()))?;
        let requests = self.load_requests().await?;
        Ok(compute_coverage(employee, start, end, &requests, &self.directory))
    }

    pub async fn sick_pattern_for(&self, employee_id: &str) -> Result<SickPattern, ApplicationError> {
        if self.directory.get(employee_id).is_none() {
            return Err(ApplicationError::UnknownEmployee(employee_id.to_string()));
        }
        let requests = self.load_requests().await?;
        Ok(compute_sick_pattern(employee_id, &requests))
    }
}
