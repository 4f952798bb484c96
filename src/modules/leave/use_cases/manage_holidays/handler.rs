// Holiday calendar maintenance.
//
// Changing the calendar does not touch stored requests. Their day counts are
// recounted when they are approved.

use crate::modules::leave::core::calendar::Holiday;
use crate::modules::leave::core::events::LeaveRequestEvent;
use crate::modules::leave::engine::LeaveEngine;
use crate::shared::infrastructure::event_store::EventStore;
use chrono::NaiveDate;
use tracing::info;

impl<S> LeaveEngine<S>
where
    S: EventStore<LeaveRequestEvent> + 'static,
{
    pub async fn holidays(&self) -> Vec<Holiday> {
        self.holidays.read().await.iter().collect()
    }

    /// Returns the holiday it replaced on the same date, if any.
    pub async fn add_holiday(&self, holiday: Holiday) -> Option<Holiday> {
        let date = holiday.date;
        let replaced = self.holidays.write().await.add(holiday);
        info!(%date, replaced = replaced.is_some(), "holiday added");
        replaced
    }

    pub async fn remove_holiday(&self, date: NaiveDate) -> Option<Holiday> {
        let removed = self.holidays.write().await.remove(date);
        if removed.is_some() {
            info!(%date, "holiday removed");
        }
        removed
    }
}
