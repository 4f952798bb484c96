// Shared primitive types used across modules.
//
// Boundaries
// - No input or output here. Values only.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use uuid::Uuid;

pub type EmployeeId = String;
pub type RequestId = String;

const SECONDS_PER_DAY: i64 = 86_400;

/// Generates a fresh, time-ordered leave request identifier.
pub fn new_request_id() -> RequestId {
    format!("L-{}", Uuid::now_v7())
}

/// Whole days between `now` and midnight (UTC) of `date`, rounded towards
/// negative infinity. A start date later today counts as zero days, a start
/// date earlier today counts as minus one.
pub fn whole_days_until(date: NaiveDate, now: DateTime<Utc>) -> i64 {
    let start = date.and_time(NaiveTime::MIN).and_utc();
    (start - now).num_seconds().div_euclid(SECONDS_PER_DAY)
}
