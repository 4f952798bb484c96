// Coverage analyzer.
//
// Purpose
// - For a candidate absence, estimate how much of the employee's department
//   stays available, counting only approved overlapping leave of peers.
//
// Notes
// - The peer count is floored at one so an employee alone in a department
//   does not divide by zero.
// - Overlapping requests are counted, not distinct peers. With several
//   approved requests from the same peer the fraction can drop below zero;
//   the value is returned as is.

use crate::modules::leave::core::directory::{Directory, Employee};
use crate::modules::leave::core::request::{LeaveRequest, LeaveStatus};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Coverage {
    pub fraction: f64,
    pub peer_count: usize,
    pub overlapping: Vec<LeaveRequest>,
}

impl Coverage {
    /// Rounded percentage, as shown to users.
    pub fn percent(&self) -> i64 {
        (self.fraction * 100.0).round() as i64
    }
}

pub fn compute_coverage(
    employee: &Employee,
    start: NaiveDate,
    end: NaiveDate,
    requests: &[LeaveRequest],
    directory: &Directory,
) -> Coverage {
    let peers: HashSet<&str> = directory.peers(employee).map(|e| e.id.as_str()).collect();
    let overlapping: Vec<LeaveRequest> = requests
        .iter()
        .filter(|r| r.status == LeaveStatus::Approved)
        .filter(|r| peers.contains(r.employee_id.as_str()))
        .filter(|r| r.overlaps(start, end))
        .cloned()
        .collect();
    let fraction = 1.0 - overlapping.len() as f64 / peers.len().max(1) as f64;
    Coverage {
        fraction,
        peer_count: peers.len(),
        overlapping,
    }
}
