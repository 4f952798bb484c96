// Request queries: listings, the approval queue, decision history and balances.
//
// Boundaries
// - Reads only. Every listing is folded from the event store on demand.

use crate::modules::leave::core::balance::BalanceSheet;
use crate::modules::leave::core::events::LeaveRequestEvent;
use crate::modules::leave::core::request::{LeaveRequest, LeaveStatus};
use crate::modules::leave::core::validation::{ValidationReport, validate_request};
use crate::modules::leave::engine::LeaveEngine;
use crate::modules::leave::errors::ApplicationError;
use crate::shared::core::primitives::EmployeeId;
use crate::shared::infrastructure::event_store::EventStore;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::cmp::Reverse;
use std::collections::HashSet;

/// Empty `statuses` matches every status.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestFilter {
    pub employee_id: Option<EmployeeId>,
    pub statuses: Vec<LeaveStatus>,
}

impl RequestFilter {
    pub fn matches(&self, request: &LeaveRequest) -> bool {
        self.employee_id
            .as_deref()
            .is_none_or(|id| request.employee_id == id)
            && (self.statuses.is_empty() || self.statuses.contains(&request.status))
    }
}

/// A request waiting for its manager, with what approving it now would face.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PendingApproval {
    pub request: LeaveRequest,
    pub working_days: Option<u32>,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl PendingApproval {
    fn new(request: LeaveRequest, report: ValidationReport) -> Self {
        Self {
            request,
            working_days: report.working_days,
            errors: report.errors.iter().map(ToString::to_string).collect(),
            warnings: report.warnings.iter().map(ToString::to_string).collect(),
        }
    }
}

impl<S> LeaveEngine<S>
where
    S: EventStore<LeaveRequestEvent> + 'static,
{
    /// Newest submission first.
    pub async fn list_requests(
        &self,
        filter: &RequestFilter,
    ) -> Result<Vec<LeaveRequest>, ApplicationError> {
        let mut requests: Vec<LeaveRequest> = self
            .load_requests()
            .await?
            .into_iter()
            .filter(|r| filter.matches(r))
            .collect();
        requests.sort_by(|a, b| (b.submitted_at, &b.id).cmp(&(a.submitted_at, &a.id)));
        Ok(requests)
    }

    /// Pending requests of the manager's direct reports, oldest first.
    pub async fn pending_approvals(
        &self,
        manager_id: &str,
        now: DateTime<Utc>,
    ) -> Result<Vec<PendingApproval>, ApplicationError> {
        self.known_employee(manager_id)?;
        let reports: HashSet<&str> = self
            .directory
            .subordinates(manager_id)
            .map(|e| e.id.as_str())
            .collect();

        let requests = self.load_requests().await?;
        let mut pending: Vec<&LeaveRequest> = requests
            .iter()
            .filter(|r| r.status == LeaveStatus::Pending)
            .filter(|r| reports.contains(r.employee_id.as_str()))
            .collect();
        pending.sort_by_key(|r| (r.submitted_at, r.id.clone()));

        let ledger = self.ledger.lock().await;
        let holidays = self.holidays.read().await;
        let ctx = self.context(&ledger, &holidays, &requests, now);
        Ok(pending
            .into_iter()
            .map(|r| {
                let report = validate_request(&ctx, &r.employee_id, r.category, r.start_date, r.end_date);
                PendingApproval::new(r.clone(), report)
            })
            .collect())
    }

    /// Approvals and rejections made by `approver_id`, most recent first.
    pub async fn recent_decisions(
        &self,
        approver_id: &str,
    ) -> Result<Vec<LeaveRequest>, ApplicationError> {
        self.known_employee(approver_id)?;
        let mut decided: Vec<LeaveRequest> = self
            .load_requests()
            .await?
            .into_iter()
            .filter(|r| matches!(r.status, LeaveStatus::Approved | LeaveStatus::Rejected))
            .filter(|r| r.approver_id.as_deref() == Some(approver_id))
            .collect();
        decided.sort_by_key(|r| Reverse(r.decided_at));
        Ok(decided)
    }

    pub async fn balances(&self, employee_id: &str) -> Result<BalanceSheet, ApplicationError> {
        let ledger = self.ledger.lock().await;
        ledger
            .sheet(employee_id)
            .cloned()
            .ok_or_else(|| ApplicationError::UnknownEmployee(employee_id.to_string()))
    }

    pub(crate) fn known_employee(&self, employee_id: &str) -> Result<(), ApplicationError> {
        match self.directory.get(employee_id) {
            Some(_) => Ok(()),
            None => Err(ApplicationError::UnknownEmployee(employee_id.to_string())),
        }
    }
}
