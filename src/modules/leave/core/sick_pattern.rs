// Sick leave pattern analyzer for wellness follow-up.

use crate::modules::leave::core::request::{LeaveCategory, LeaveRequest};
use chrono::{Datelike, Weekday};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertLevel {
    Green,
    Yellow,
    Red,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternLabel {
    NoPattern,
    HighFrequency,
    Moderate,
    WeekendAdjacent,
    Normal,
}

impl PatternLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            PatternLabel::NoPattern => "No pattern",
            PatternLabel::HighFrequency => "High frequency - wellness check recommended",
            PatternLabel::Moderate => "Moderate - monitor",
            PatternLabel::WeekendAdjacent => "Weekend-adjacent pattern detected",
            PatternLabel::Normal => "Normal",
        }
    }
}

impl fmt::Display for PatternLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SickPattern {
    pub total_days: u32,
    pub frequency: usize,
    pub pattern: PatternLabel,
    pub alert_level: AlertLevel,
}

/// Every sick request of the employee counts, whatever its status.
pub fn is_sick_history(request: &LeaveRequest, employee_id: &str) -> bool {
    request.employee_id == employee_id && request.category == LeaveCategory::Sick
}

pub fn compute_sick_pattern(employee_id: &str, history: &[LeaveRequest]) -> SickPattern {
    let sick: Vec<&LeaveRequest> = history
        .iter()
        .filter(|r| is_sick_history(r, employee_id))
        .collect();

    let total_days: u32 = sick.iter().map(|r| r.days).sum();
    let frequency = sick.len();
    let weekend_adjacent = sick
        .iter()
        .filter(|r| matches!(r.start_date.weekday(), Weekday::Mon | Weekday::Fri))
        .count();

    let (pattern, alert_level) = if frequency == 0 {
        (PatternLabel::NoPattern, AlertLevel::Green)
    } else if total_days > 8 {
        (PatternLabel::HighFrequency, AlertLevel::Red)
    } else if total_days > 5 {
        (PatternLabel::Moderate, AlertLevel::Yellow)
    } else if weekend_adjacent * 5 > frequency * 3 {
        (PatternLabel::WeekendAdjacent, AlertLevel::Yellow)
    } else {
        (PatternLabel::Normal, AlertLevel::Green)
    };

    SickPattern {
        total_days,
        frequency,
        pattern,
        alert_level,
    }
}
