use crate::modules::leave::core::balance::BalanceLedger;
use crate::modules::leave::core::calendar::HolidayCalendar;
use crate::modules::leave::core::directory::{Directory, Employee};
use crate::modules::leave::core::policy::PolicyCatalog;
use crate::shell::seed;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};

/// Monday 2024-01-08, 09:00 UTC.
pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 8, 9, 0, 0).unwrap()
}

pub fn employee(
    id: &str,
    name: &str,
    department: &str,
    manager_id: Option<&str>,
    policy: &str,
) -> Employee {
    Employee {
        id: id.into(),
        name: name.into(),
        email: format!("{}@company.com", id.to_lowercase()),
        department: department.into(),
        manager_id: manager_id.map(str::to_string),
        policy: policy.into(),
        hire_date: NaiveDate::from_ymd_opt(2020, 1, 15).unwrap(),
    }
}

pub fn demo_directory() -> Directory {
    Directory::new(seed::demo_employees())
}

pub fn demo_holidays() -> HolidayCalendar {
    HolidayCalendar::new(seed::demo_holidays())
}

/// Every employee at full entitlement.
pub fn demo_ledger(directory: &Directory, policies: &PolicyCatalog) -> BalanceLedger {
    let mut ledger = BalanceLedger::new();
    for employee in directory.iter() {
        ledger.open(employee.id.clone(), policies.get(&employee.policy).unwrap());
    }
    ledger
}
