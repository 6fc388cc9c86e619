//! Schedule-list state and the edit draft.

#[cfg(test)]
#[path = "schedules_test.rs"]
mod schedules_test;

use crate::net::types::Schedule;
use crate::util::format::parse_hhmm;

/// Shared schedule-list state.
#[derive(Clone, Debug, Default)]
pub struct SchedulesState {
    pub items: Vec<Schedule>,
    pub loading: bool,
    pub save_pending: bool,
    pub error: Option<String>,
}

/// Editable subset of a schedule.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScheduleDraft {
    /// `HH:MM` 24-hour local departure.
    pub departure_time: String,
    /// Operating days as `MON`..`SUN` labels.
    pub days_of_week: Vec<String>,
    pub active: bool,
}

impl ScheduleDraft {
    pub fn from_schedule(schedule: &Schedule) -> Self {
        Self {
            departure_time: schedule.departure_time.clone(),
            days_of_week: schedule.days_of_week.clone(),
            active: schedule.active,
        }
    }

    /// Toggle a `MON`..`SUN` label's membership.
    pub fn toggle_day(&mut self, day: &str) {
        if let Some(index) = self.days_of_week.iter().position(|d| d == day) {
            self.days_of_week.remove(index);
        } else {
            self.days_of_week.push(day.to_owned());
        }
    }
}

/// Gate for submitting the schedule edit form.
pub fn validate_schedule_draft(draft: &ScheduleDraft) -> Result<(), &'static str> {
    if parse_hhmm(&draft.departure_time).is_none() {
        return Err("Enter a departure time as HH:MM.");
    }
    if draft.days_of_week.is_empty() {
        return Err("Pick at least one operating day.");
    }
    Ok(())
}
