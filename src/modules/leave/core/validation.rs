// Validation engine.
//
// Purpose
// - Decide whether a proposed absence is admissible under the employee's
//   policy, current balance and team coverage.
//
// Responsibilities
// - Run every check and accumulate errors (blocking) and warnings (advisory).
// - Never mutate anything and never look at request status beyond coverage,
//   so the same request can be re-validated at approval time.

use crate::modules::leave::core::balance::BalanceLedger;
use crate::modules::leave::core::calendar::{CalendarError, HolidayCalendar, working_days};
use crate::modules::leave::core::coverage::compute_coverage;
use crate::modules::leave::core::directory::Directory;
use crate::modules::leave::core::policy::PolicyCatalog;
use crate::modules::leave::core::request::{LeaveCategory, LeaveRequest};
use crate::shared::core::primitives::{EmployeeId, whole_days_until};
use chrono::{DateTime, NaiveDate, Utc};
use thiserror::Error;

pub const MIN_COVERAGE: f64 = 0.5;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("unknown employee: {0}")]
    UnknownEmployee(EmployeeId),

    #[error("unknown leave policy: {0}")]
    UnknownPolicy(String),

    #[error(transparent)]
    InvalidRange(#[from] CalendarError),

    #[error("Exceeds maximum consecutive days ({limit})")]
    ExceedsMaxConsecutive { limit: u32, requested: u32 },

    #[error("Insufficient {category} balance (Available: {available}, Requested: {requested})")]
    InsufficientBalance {
        category: LeaveCategory,
        available: u32,
        requested: u32,
    },
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationWarning {
    #[error("Less than {min_notice_days} days notice provided")]
    ShortNotice { min_notice_days: u32, days_until: i64 },

    #[error("Low team coverage ({percent}%) - {overlapping} team members also on leave")]
    LowCoverage { percent: i64, overlapping: usize },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    /// `None` when the range could not be counted.
    pub working_days: Option<u32>,
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationReport {
    pub fn is_admissible(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Read access to everything a validation needs.
#[derive(Debug, Clone, Copy)]
pub struct ValidationContext<'a> {
    pub directory: &'a Directory,
    pub policies: &'a PolicyCatalog,
    pub ledger: &'a BalanceLedger,
    pub holidays: &'a HolidayCalendar,
    pub requests: &'a [LeaveRequest],
    pub now: DateTime<Utc>,
}

pub fn validate_request(
    ctx: &ValidationContext<'_>,
    employee_id: &str,
    category: LeaveCategory,
    start: NaiveDate,
    end: NaiveDate,
) -> ValidationReport {
    let mut report = ValidationReport::default();

    let Some(employee) = ctx.directory.get(employee_id) else {
        report
            .errors
            .push(ValidationError::UnknownEmployee(employee_id.to_string()));
        return report;
    };
    let Some(policy) = ctx.policies.get(&employee.policy) else {
        report
            .errors
            .push(ValidationError::UnknownPolicy(employee.policy.clone()));
        return report;
    };

    let days_until = whole_days_until(start, ctx.now);
    if days_until < i64::from(policy.min_notice_days) {
        report.warnings.push(ValidationWarning::ShortNotice {
            min_notice_days: policy.min_notice_days,
            days_until,
        });
    }

    match working_days(start, end, ctx.holidays) {
        Ok(requested) => {
            report.working_days = Some(requested);

            if requested > policy.max_consecutive_days {
                report.errors.push(ValidationError::ExceedsMaxConsecutive {
                    limit: policy.max_consecutive_days,
                    requested,
                });
            }

            let available = ctx.ledger.remaining(employee_id, category);
            if requested > available {
                report.errors.push(ValidationError::InsufficientBalance {
                    category,
                    available,
                    requested,
                });
            }
        }
        // Duration and balance need a day count; coverage does not.
        Err(err) => report.errors.push(err.into()),
    }

    let coverage = compute_coverage(employee, start, end, ctx.requests, ctx.directory);
    if coverage.fraction < MIN_COVERAGE {
        report.warnings.push(ValidationWarning::LowCoverage {
            percent: coverage.percent(),
            overlapping: coverage.overlapping.len(),
        });
    }

    report
}
