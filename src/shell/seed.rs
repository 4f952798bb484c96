// Demo organisation used by the binary and the test suites.
//
// Three departments with one manager each, five employees, four public
// holidays and five historical requests. Approved history is charged to the
// ledger on import.

use crate::modules::leave::core::calendar::{Holiday, HolidayCalendar, working_days};
use crate::modules::leave::core::directory::{Directory, Employee};
use crate::modules::leave::core::events::LeaveRequestEvent;
use crate::modules::leave::core::events::v1::leave_request_approved::LeaveRequestApprovedV1;
use crate::modules::leave::core::events::v1::leave_request_submitted::LeaveRequestSubmittedV1;
use crate::modules::leave::core::policy::PolicyCatalog;
use crate::modules::leave::core::request::LeaveCategory;
use crate::modules::leave::engine::LeaveEngine;
use crate::modules::leave::errors::ApplicationError;
use crate::shared::infrastructure::event_store::in_memory::InMemoryEventStore;
use crate::shell::state::InMemoryEngine;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use std::sync::Arc;

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 9, 0, 0)
        .single()
        .unwrap_or_default()
}

fn person(
    id: &str,
    name: &str,
    department: &str,
    manager_id: Option<&str>,
    policy: &str,
    hire_date: NaiveDate,
) -> Employee {
    let mut parts = name.split_whitespace();
    let email = match (parts.next(), parts.next()) {
        (Some(first), Some(last)) => format!("{}.{}@company.com", first, last),
        _ => format!("{}@company.com", id),
    };
    Employee {
        id: id.into(),
        name: name.into(),
        email: email.to_lowercase(),
        department: department.into(),
        manager_id: manager_id.map(str::to_string),
        policy: policy.into(),
        hire_date,
    }
}

pub fn demo_employees() -> Vec<Employee> {
    vec![
        person("E001", "John Doe", "Engineering", Some("M001"), "Standard", ymd(2020, 1, 15)),
        person("E002", "Jane Smith", "Marketing", Some("M002"), "Senior", ymd(2018, 3, 20)),
        person("E003", "Bob Johnson", "Engineering", Some("M001"), "Standard", ymd(2021, 6, 10)),
        person("E004", "Alice Williams", "HR", Some("M003"), "Senior", ymd(2017, 9, 5)),
        person("E005", "Charlie Brown", "Sales", Some("M002"), "Standard", ymd(2022, 2, 1)),
        person("M001", "Manager One", "Engineering", None, "Executive", ymd(2015, 1, 1)),
        person("M002", "Manager Two", "Marketing", None, "Executive", ymd(2014, 5, 15)),
        person("M003", "Manager Three", "HR", None, "Executive", ymd(2016, 8, 20)),
    ]
}

pub fn demo_holidays() -> Vec<Holiday> {
    [
        (ymd(2024, 1, 1), "New Year's Day"),
        (ymd(2024, 7, 4), "Independence Day"),
        (ymd(2024, 11, 28), "Thanksgiving"),
        (ymd(2024, 12, 25), "Christmas Day"),
    ]
    .into_iter()
    .map(|(date, name)| Holiday {
        date,
        name: name.into(),
    })
    .collect()
}

struct HistoricRequest {
    id: &'static str,
    employee_id: &'static str,
    category: LeaveCategory,
    start: NaiveDate,
    end: NaiveDate,
    reason: &'static str,
    submitted_at: DateTime<Utc>,
    approval: Option<(&'static str, DateTime<Utc>)>,
}

fn history() -> Vec<HistoricRequest> {
    vec![
        HistoricRequest {
            id: "L001",
            employee_id: "E001",
            category: LeaveCategory::Annual,
            start: ymd(2024, 2, 1),
            end: ymd(2024, 2, 5),
            reason: "Family vacation",
            submitted_at: at(2024, 1, 15),
            approval: Some(("M001", at(2024, 1, 16))),
        },
        HistoricRequest {
            id: "L002",
            employee_id: "E002",
            category: LeaveCategory::Sick,
            start: ymd(2024, 1, 10),
            end: ymd(2024, 1, 12),
            reason: "Flu",
            submitted_at: at(2024, 1, 9),
            approval: Some(("M002", at(2024, 1, 9))),
        },
        HistoricRequest {
            id: "L003",
            employee_id: "E003",
            category: LeaveCategory::Annual,
            start: ymd(2024, 3, 15),
            end: ymd(2024, 3, 20),
            reason: "Vacation",
            submitted_at: at(2024, 1, 20),
            approval: None,
        },
        HistoricRequest {
            id: "L004",
            employee_id: "E001",
            category: LeaveCategory::Personal,
            start: ymd(2024, 2, 26),
            end: ymd(2024, 2, 27),
            reason: "Personal matters",
            submitted_at: at(2024, 1, 25),
            approval: None,
        },
        HistoricRequest {
            id: "L005",
            employee_id: "E004",
            category: LeaveCategory::Annual,
            start: ymd(2024, 4, 1),
            end: ymd(2024, 4, 10),
            reason: "Spring break",
            submitted_at: at(2024, 1, 28),
            approval: Some(("M003", at(2024, 1, 29))),
        },
    ]
}

/// Event streams for the demo history, day counts taken from `holidays`.
pub fn demo_history(holidays: &HolidayCalendar) -> Vec<Vec<LeaveRequestEvent>> {
    history()
        .into_iter()
        .filter_map(|h| {
            let days = working_days(h.start, h.end, holidays).ok()?;
            let mut events = vec![LeaveRequestEvent::LeaveRequestSubmittedV1(
                LeaveRequestSubmittedV1 {
                    request_id: h.id.into(),
                    employee_id: h.employee_id.into(),
                    category: h.category,
                    start_date: h.start,
                    end_date: h.end,
                    days,
                    reason: h.reason.into(),
                    submitted_at: h.submitted_at,
                },
            )];
            if let Some((approver_id, decided_at)) = h.approval {
                events.push(LeaveRequestEvent::LeaveRequestApprovedV1(
                    LeaveRequestApprovedV1 {
                        request_id: h.id.into(),
                        approver_id: approver_id.into(),
                        days_debited: days,
                        comment: None,
                        decided_at,
                    },
                ));
            }
            Some(events)
        })
        .collect()
}

/// Organisation and holidays only, no request history.
pub fn demo_organisation() -> Result<InMemoryEngine, ApplicationError> {
    LeaveEngine::new(
        Directory::new(demo_employees()),
        PolicyCatalog::with_defaults(),
        HolidayCalendar::new(demo_holidays()),
        Arc::new(InMemoryEventStore::new()),
    )
}

pub async fn demo_engine() -> Result<InMemoryEngine, ApplicationError> {
    let engine = demo_organisation()?;
    let history = demo_history(&HolidayCalendar::new(demo_holidays()));
    engine.import_history(history).await?;
    Ok(engine)
}
