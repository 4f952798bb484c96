// Usage analytics over approved leave.

use crate::modules::leave::core::events::LeaveRequestEvent;
use crate::modules::leave::core::request::{LeaveCategory, LeaveRequest, LeaveStatus};
use crate::modules::leave::core::sick_pattern::{AlertLevel, SickPattern, compute_sick_pattern};
use crate::modules::leave::engine::LeaveEngine;
use crate::modules::leave::errors::ApplicationError;
use crate::shared::core::primitives::EmployeeId;
use crate::shared::infrastructure::event_store::EventStore;
use chrono::{Datelike, Weekday};
use serde::Serialize;
use std::collections::BTreeMap;

/// Above this many approved days a team member is flagged as a high user.
pub const HIGH_USAGE_DAYS: u32 = 15;

pub type CategoryTotals = BTreeMap<LeaveCategory, u32>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyUsage {
    pub year: i32,
    pub month: u32,
    pub days: CategoryTotals,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WellnessFlag {
    pub employee_id: EmployeeId,
    pub name: String,
    pub sick_pattern: SickPattern,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamUsage {
    pub days_by_member: BTreeMap<EmployeeId, u32>,
    pub days_by_category: CategoryTotals,
    pub high_users: Vec<EmployeeId>,
    pub wellness_flags: Vec<WellnessFlag>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeekdayCount {
    pub weekday: Weekday,
    pub count: usize,
}

fn empty_totals() -> CategoryTotals {
    LeaveCategory::ALL.into_iter().map(|c| (c, 0)).collect()
}

impl<S> LeaveEngine<S>
where
    S: EventStore<LeaveRequestEvent> + 'static,
{
    async fn approved_of(&self, employee_id: &str) -> Result<Vec<LeaveRequest>, ApplicationError> {
        Ok(self
            .load_requests()
            .await?
            .into_iter()
            .filter(|r| r.employee_id == employee_id && r.status == LeaveStatus::Approved)
            .collect())
    }

    /// Approved days per start month, every category present.
    pub async fn monthly_usage(
        &self,
        employee_id: &str,
    ) -> Result<Vec<MonthlyUsage>, ApplicationError> {
        self.known_employee(employee_id)?;
        let mut months: BTreeMap<(i32, u32), CategoryTotals> = BTreeMap::new();
        for request in self.approved_of(employee_id).await? {
            let key = (request.start_date.year(), request.start_date.month());
            *months
                .entry(key)
                .or_insert_with(empty_totals)
                .entry(request.category)
                .or_default() += request.days;
        }
        Ok(months
            .into_iter()
            .map(|((year, month), days)| MonthlyUsage { year, month, days })
            .collect())
    }

    pub async fn team_usage(&self, manager_id: &str) -> Result<TeamUsage, ApplicationError> {
        self.known_employee(manager_id)?;
        let requests = self.load_requests().await?;

        let mut usage = TeamUsage {
            days_by_member: BTreeMap::new(),
            days_by_category: empty_totals(),
            high_users: Vec::new(),
            wellness_flags: Vec::new(),
        };
        for member in self.directory.subordinates(manager_id) {
            let mut total = 0;
            for request in requests
                .iter()
                .filter(|r| r.employee_id == member.id && r.status == LeaveStatus::Approved)
            {
                total += request.days;
                *usage.days_by_category.entry(request.category).or_default() += request.days;
            }
            usage.days_by_member.insert(member.id.clone(), total);
            if total > HIGH_USAGE_DAYS {
                usage.high_users.push(member.id.clone());
            }

            let sick_pattern = compute_sick_pattern(&member.id, &requests);
            if sick_pattern.alert_level != AlertLevel::Green {
                usage.wellness_flags.push(WellnessFlag {
                    employee_id: member.id.clone(),
                    name: member.name.clone(),
                    sick_pattern,
                });
            }
        }
        Ok(usage)
    }

    /// How often approved sick leave started on each weekday, Monday first.
    pub async fn sick_weekday_distribution(
        &self,
        employee_id: &str,
    ) -> Result<Vec<WeekdayCount>, ApplicationError> {
        self.known_employee(employee_id)?;
        let mut counts = [0usize; 7];
        for request in self
            .approved_of(employee_id)
            .await?
            .iter()
            .filter(|r| r.category == LeaveCategory::Sick)
        {
            counts[request.start_date.weekday().num_days_from_monday() as usize] += 1;
        }
        let mut weekday = Weekday::Mon;
        Ok(counts
            .into_iter()
            .map(|count| {
                let entry = WeekdayCount { weekday, count };
                weekday = weekday.succ();
                entry
            })
            .collect())
    }
}
