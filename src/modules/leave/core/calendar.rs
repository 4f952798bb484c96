// Calendar utilities: holidays and working-day counting.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum CalendarError {
    #[error("end date {end} precedes start date {start}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    pub date: NaiveDate,
    pub name: String,
}

/// At most one holiday per date, iterated in date order.
#[derive(Debug, Clone, Default)]
pub struct HolidayCalendar {
    holidays: BTreeMap<NaiveDate, String>,
}

impl HolidayCalendar {
    pub fn new(holidays: impl IntoIterator<Item = Holiday>) -> Self {
        let mut calendar = Self::default();
        for holiday in holidays {
            calendar.add(holiday);
        }
        calendar
    }

    /// Returns the holiday previously registered on that date, if any.
    pub fn add(&mut self, holiday: Holiday) -> Option<Holiday> {
        self.holidays
            .insert(holiday.date, holiday.name)
            .map(|name| Holiday {
                date: holiday.date,
                name,
            })
    }

    pub fn remove(&mut self, date: NaiveDate) -> Option<Holiday> {
        self.holidays
            .remove(&date)
            .map(|name| Holiday { date, name })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.holidays.contains_key(&date)
    }

    pub fn iter(&self) -> impl Iterator<Item = Holiday> + '_ {
        self.holidays.iter().map(|(date, name)| Holiday {
            date: *date,
            name: name.clone(),
        })
    }

    pub fn in_month(&self, year: i32, month: u32) -> Vec<Holiday> {
        self.iter()
            .filter(|h| h.date.year() == year && h.date.month() == month)
            .collect()
    }
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Counts Monday to Friday dates in `[start, end]` that are not holidays.
pub fn working_days(
    start: NaiveDate,
    end: NaiveDate,
    holidays: &HolidayCalendar,
) -> Result<u32, CalendarError> {
    if end < start {
        return Err(CalendarError::InvalidRange { start, end });
    }
    let count = start
        .iter_days()
        .take_while(|day| *day <= end)
        .filter(|day| !is_weekend(*day) && !holidays.contains(*day))
        .count();
    Ok(count as u32)
}
