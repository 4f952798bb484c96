// Employee directory.
//
// Purpose
// - Profile lookups and the manager tree used by coverage, authority checks
//   and team views.
//
// Notes
// - The manager edge forms a tree. Cycles are a caller error and are not
//   detected here.

use crate::shared::core::primitives::EmployeeId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub email: String,
    pub department: String,
    /// `None` for the root of the reporting tree.
    pub manager_id: Option<EmployeeId>,
    pub policy: String,
    pub hire_date: NaiveDate,
}

#[derive(Debug, Clone, Default)]
pub struct Directory {
    employees: BTreeMap<EmployeeId, Employee>,
}

impl Directory {
    pub fn new(employees: impl IntoIterator<Item = Employee>) -> Self {
        Self {
            employees: employees
                .into_iter()
                .map(|employee| (employee.id.clone(), employee))
                .collect(),
        }
    }

    pub fn get(&self, id: &str) -> Option<&Employee> {
        self.employees.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Employee> {
        self.employees.values()
    }

    /// Same department, excluding the employee.
    pub fn peers<'a>(&'a self, employee: &'a Employee) -> impl Iterator<Item = &'a Employee> {
        self.employees
            .values()
            .filter(move |e| e.department == employee.department && e.id != employee.id)
    }

    pub fn department_members<'a>(&'a self, department: &'a str) -> impl Iterator<Item = &'a Employee> {
        self.employees
            .values()
            .filter(move |e| e.department == department)
    }

    /// Direct reports of `manager_id`.
    pub fn subordinates<'a>(&'a self, manager_id: &'a str) -> impl Iterator<Item = &'a Employee> {
        self.employees
            .values()
            .filter(move |e| e.manager_id.as_deref() == Some(manager_id))
    }

    pub fn is_manager(&self, id: &str) -> bool {
        self.subordinates(id).next().is_some()
    }

    pub fn is_manager_of(&self, approver_id: &str, requester_id: &str) -> bool {
        self.get(requester_id)
            .and_then(|requester| requester.manager_id.as_deref())
            .is_some_and(|manager_id| manager_id == approver_id)
    }
}
