// Team availability for one calendar month.
//
// Purpose
// - Who is in the viewer's team, which approved leave touches the month,
//   and how many members remain available on a given day.

use crate::modules::leave::core::calendar::Holiday;
use crate::modules::leave::core::directory::Employee;
use crate::modules::leave::core::events::LeaveRequestEvent;
use crate::modules::leave::core::request::{LeaveRequest, LeaveStatus};
use crate::modules::leave::engine::LeaveEngine;
use crate::modules::leave::errors::ApplicationError;
use crate::shared::infrastructure::event_store::EventStore;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Nominal working days per member per month, used for the average.
const WORKING_DAYS_PER_MONTH: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeamScope {
    /// The viewer's direct reports.
    #[default]
    DirectReports,
    /// Everyone in the viewer's department, the viewer included.
    Department,
    Everyone,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamCalendar {
    pub year: i32,
    pub month: u32,
    pub members: Vec<Employee>,
    /// Approved leave of members overlapping the month, by start date.
    pub leaves: Vec<LeaveRequest>,
    pub holidays: Vec<Holiday>,
    pub total_leave_days: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyAvailability {
    pub date: NaiveDate,
    pub available: usize,
    pub on_leave: usize,
}

impl TeamCalendar {
    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    pub fn last_day(&self) -> Option<NaiveDate> {
        let (year, month) = match self.month {
            12 => (self.year.checked_add(1)?, 1),
            m => (self.year, m.checked_add(1)?),
        };
        NaiveDate::from_ymd_opt(year, month, 1).and_then(|d| d.pred_opt())
    }

    /// Members without approved leave covering `date`.
    pub fn availability_on(&self, date: NaiveDate) -> Vec<&Employee> {
        let away = self.away_on(date);
        self.members
            .iter()
            .filter(|m| !away.contains(m.id.as_str()))
            .collect()
    }

    pub fn daily(&self) -> Vec<DailyAvailability> {
        let (Some(first), Some(last)) = (self.first_day(), self.last_day()) else {
            return Vec::new();
        };
        first
            .iter_days()
            .take_while(|d| *d <= last)
            .map(|date| {
                let on_leave = self.away_on(date).len();
                DailyAvailability {
                    date,
                    available: self.members.len().saturating_sub(on_leave),
                    on_leave,
                }
            })
            .collect()
    }

    /// 100 minus leave days as a share of nominal team capacity.
    pub fn average_availability_percent(&self) -> f64 {
        if self.members.is_empty() {
            return 100.0;
        }
        let capacity = self.members.len() as f64 * WORKING_DAYS_PER_MONTH;
        100.0 - f64::from(self.total_leave_days) / capacity * 100.0
    }

    fn away_on(&self, date: NaiveDate) -> HashSet<&str> {
        self.leaves
            .iter()
            .filter(|l| l.overlaps(date, date))
            .map(|l| l.employee_id.as_str())
            .collect()
    }
}

impl<S> LeaveEngine<S>
where
    S: EventStore<LeaveRequestEvent> + 'static,
{
    pub async fn team_calendar(
        &self,
        viewer_id: &str,
        scope: TeamScope,
        year: i32,
        month: u32,
    ) -> Result<TeamCalendar, ApplicationError> {
        let viewer = self
            .directory
            .get(viewer_id)
            .ok_or_else(|| ApplicationError::UnknownEmployee(viewer_id.to_string()))?;
        let members: Vec<Employee> = match scope {
            TeamScope::DirectReports => self.directory.subordinates(&viewer.id).cloned().collect(),
            TeamScope::Department => self
                .directory
                .department_members(&viewer.department)
                .cloned()
                .collect(),
            TeamScope::Everyone => self.directory.iter().cloned().collect(),
        };

        let mut calendar = TeamCalendar {
            year,
            month,
            members,
            leaves: Vec::new(),
            holidays: Vec::new(),
            total_leave_days: 0,
        };
        let (Some(first), Some(last)) = (calendar.first_day(), calendar.last_day()) else {
            return Err(ApplicationError::InvalidMonth { year, month });
        };

        let ids: HashSet<&str> = calendar.members.iter().map(|m| m.id.as_str()).collect();
        let mut leaves: Vec<LeaveRequest> = self
            .load_requests()
            .await?
            .into_iter()
            .filter(|r| r.status == LeaveStatus::Approved)
            .filter(|r| ids.contains(r.employee_id.as_str()))
            .filter(|r| r.overlaps(first, last))
            .collect();
        leaves.sort_by(|a, b| (a.start_date, &a.id).cmp(&(b.start_date, &b.id)));

        calendar.total_leave_days = leaves.iter().map(|l| l.days).sum();
        calendar.leaves = leaves;
        calendar.holidays = self.holidays.read().await.in_month(year, month);
        Ok(calendar)
    }
}
