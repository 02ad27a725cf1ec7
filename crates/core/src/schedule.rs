//! Weekly calling-window schedule and date-range derivation.
//!
//! The schedule step shows one row per weekday with an enabled toggle and
//! a start/end time window. Picking a campaign date range re-derives the
//! enabled flags: a day is enabled exactly when it occurs at least once in
//! the inclusive span.

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::timefmt;

/// Default calling-window start for a fresh schedule.
pub const DEFAULT_START_TIME: &str = "09:00";

/// Default calling-window end for a fresh schedule.
pub const DEFAULT_END_TIME: &str = "17:00";

/// All weekdays, Monday first (display order of the schedule step).
pub const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

// ---------------------------------------------------------------------------
// Schedule entries
// ---------------------------------------------------------------------------

/// One weekday's calling window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub enabled: bool,
    /// 24-hour `HH:MM`, kept as entered.
    pub start_time: String,
    /// 24-hour `HH:MM`, kept as entered.
    pub end_time: String,
}

impl Default for ScheduleEntry {
    fn default() -> Self {
        Self {
            enabled: true,
            start_time: DEFAULT_START_TIME.to_string(),
            end_time: DEFAULT_END_TIME.to_string(),
        }
    }
}

impl ScheduleEntry {
    /// The start time, if the field currently holds a valid `HH:MM` string.
    pub fn start(&self) -> Option<NaiveTime> {
        timefmt::parse_clock_time(&self.start_time).ok()
    }

    /// The end time, if the field currently holds a valid `HH:MM` string.
    pub fn end(&self) -> Option<NaiveTime> {
        timefmt::parse_clock_time(&self.end_time).ok()
    }
}

/// Calling windows for all seven weekdays.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklySchedule {
    pub monday: ScheduleEntry,
    pub tuesday: ScheduleEntry,
    pub wednesday: ScheduleEntry,
    pub thursday: ScheduleEntry,
    pub friday: ScheduleEntry,
    pub saturday: ScheduleEntry,
    pub sunday: ScheduleEntry,
}

impl WeeklySchedule {
    pub fn entry(&self, day: Weekday) -> &ScheduleEntry {
        match day {
            Weekday::Mon => &self.monday,
            Weekday::Tue => &self.tuesday,
            Weekday::Wed => &self.wednesday,
            Weekday::Thu => &self.thursday,
            Weekday::Fri => &self.friday,
            Weekday::Sat => &self.saturday,
            Weekday::Sun => &self.sunday,
        }
    }

    pub fn entry_mut(&mut self, day: Weekday) -> &mut ScheduleEntry {
        match day {
            Weekday::Mon => &mut self.monday,
            Weekday::Tue => &mut self.tuesday,
            Weekday::Wed => &mut self.wednesday,
            Weekday::Thu => &mut self.thursday,
            Weekday::Fri => &mut self.friday,
            Weekday::Sat => &mut self.saturday,
            Weekday::Sun => &mut self.sunday,
        }
    }

    /// Days currently enabled, Monday first.
    pub fn enabled_days(&self) -> Vec<Weekday> {
        WEEK.iter()
            .copied()
            .filter(|&day| self.entry(day).enabled)
            .collect()
    }
}

/// `monday`..`sunday` key for a weekday, as used in error keys and
/// schedule payloads.
pub fn day_key(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
        Weekday::Sun => "sunday",
    }
}

/// Weekday index with Sunday = 0, matching the wire format the
/// surrounding app uses for schedule payloads.
pub fn weekday_index(day: Weekday) -> u8 {
    day.num_days_from_sunday() as u8
}

// ---------------------------------------------------------------------------
// Date-range derivation
// ---------------------------------------------------------------------------

/// Collect the weekday indices (Sunday = 0) that occur at least once in
/// the inclusive span `[start, end]`.
///
/// Walks the span day by day and stops once all seven indices have been
/// seen, so at most seven dates are visited regardless of span length.
/// An empty set is returned when `end < start`.
pub fn days_in_range(start: NaiveDate, end: NaiveDate) -> HashSet<u8> {
    let mut days = HashSet::new();
    if end < start {
        return days;
    }
    for date in start.iter_days() {
        days.insert(weekday_index(date.weekday()));
        if date == end || days.len() == 7 {
            break;
        }
    }
    days
}

/// Whether the weekday with `index` (Sunday = 0) occurs in `[start, end]`.
pub fn is_day_in_range(index: u8, start: NaiveDate, end: NaiveDate) -> bool {
    days_in_range(start, end).contains(&index)
}

/// Overwrite every entry's `enabled` flag to mirror membership in
/// `days_in_range(start, end)`.
///
/// This is a full overwrite, not a merge: per-day toggles made before the
/// date range changed are discarded.
pub fn apply_date_range(schedule: &mut WeeklySchedule, start: NaiveDate, end: NaiveDate) {
    let days = days_in_range(start, end);
    for day in WEEK {
        schedule.entry_mut(day).enabled = days.contains(&weekday_index(day));
    }
}
