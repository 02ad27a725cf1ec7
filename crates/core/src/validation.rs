//! Step-scoped and whole-form validation.
//!
//! Pure functions from a draft to a map of field -> human-readable
//! message. Keys are typed rather than stringly; [`Field::as_key`]
//! renders the wire names the surrounding app shows beneath each input
//! (`schedule-monday` for per-day time ordering errors).

use std::collections::HashMap;
use std::ops::RangeInclusive;

use chrono::{Months, Weekday};

use crate::campaign::CampaignDraft;
use crate::schedule::{self, WEEK};
use crate::steps::FormStep;
use crate::timefmt;

/// Allowed call attempts per contact.
pub const MAX_TRIES_RANGE: RangeInclusive<u8> = 1..=10;

/// Allowed simultaneous outbound call count.
pub const CONCURRENCY_RANGE: RangeInclusive<u16> = 1..=100;

/// Allowed auto-scaling threshold percentage.
pub const THRESHOLD_RANGE: RangeInclusive<u8> = 1..=100;

// ---------------------------------------------------------------------------
// Field keys
// ---------------------------------------------------------------------------

/// A form field an error message can attach to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    IvrFlow,
    PhoneNumber,
    StartDate,
    EndDate,
    MaxTries,
    RetryInterval,
    Concurrency,
    AutoScalingMin,
    AutoScalingMax,
    AutoScalingThreshold,
    /// The weekday-row group as a whole (no day enabled).
    ScheduleDays,
    /// One weekday's time window.
    Schedule(Weekday),
}

impl Field {
    /// Wire name used to attach the message beneath an input.
    pub fn as_key(self) -> String {
        match self {
            Self::Name => "name".to_string(),
            Self::IvrFlow => "ivr".to_string(),
            Self::PhoneNumber => "phone-number".to_string(),
            Self::StartDate => "start-date".to_string(),
            Self::EndDate => "end-date".to_string(),
            Self::MaxTries => "max-tries".to_string(),
            Self::RetryInterval => "retry-interval".to_string(),
            Self::Concurrency => "concurrency".to_string(),
            Self::AutoScalingMin => "auto-scaling-min".to_string(),
            Self::AutoScalingMax => "auto-scaling-max".to_string(),
            Self::AutoScalingThreshold => "auto-scaling-threshold".to_string(),
            Self::ScheduleDays => "schedule".to_string(),
            Self::Schedule(day) => format!("schedule-{}", schedule::day_key(day)),
        }
    }
}

/// Field -> message map; empty means the checked scope is valid.
pub type ErrorMap = HashMap<Field, String>;

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Validate only the fields belonging to `step`.
pub fn validate_step(step: FormStep, draft: &CampaignDraft) -> ErrorMap {
    match step {
        FormStep::Info => validate_info(draft),
        FormStep::Schedule => validate_schedule(draft),
        FormStep::Review => ErrorMap::new(),
    }
}

/// Validate the whole draft, regardless of the current step.
pub fn validate_all(draft: &CampaignDraft) -> ErrorMap {
    let mut errors = validate_info(draft);
    errors.extend(validate_schedule(draft));
    errors
}

// ---------------------------------------------------------------------------
// Step 1: Info & Configuration
// ---------------------------------------------------------------------------

fn validate_info(draft: &CampaignDraft) -> ErrorMap {
    let mut errors = ErrorMap::new();

    if draft.name.trim().is_empty() {
        errors.insert(Field::Name, "Campaign name is required".to_string());
    }
    if draft.ivr_flow.is_none() {
        errors.insert(Field::IvrFlow, "Select an IVR flow".to_string());
    }
    if draft.phone_number.is_none() {
        errors.insert(Field::PhoneNumber, "Select a phone number".to_string());
    }
    if !MAX_TRIES_RANGE.contains(&draft.max_tries) {
        errors.insert(
            Field::MaxTries,
            "Max tries must be between 1 and 10".to_string(),
        );
    }
    if !CONCURRENCY_RANGE.contains(&draft.concurrency) {
        errors.insert(
            Field::Concurrency,
            "Concurrency must be between 1 and 100".to_string(),
        );
    }
    if timefmt::parse_retry_interval(&draft.retry_interval).is_err() {
        errors.insert(
            Field::RetryInterval,
            "Retry interval must be in HH:MM:SS format".to_string(),
        );
    }

    if draft.auto_scaling.enabled {
        if draft.auto_scaling.max <= draft.auto_scaling.min {
            errors.insert(
                Field::AutoScalingMax,
                "Maximum concurrency must be greater than minimum".to_string(),
            );
        }
        if !THRESHOLD_RANGE.contains(&draft.auto_scaling.threshold_pct) {
            errors.insert(
                Field::AutoScalingThreshold,
                "Threshold must be between 1 and 100".to_string(),
            );
        }
    }

    errors
}

// ---------------------------------------------------------------------------
// Step 2: Schedule
// ---------------------------------------------------------------------------

fn validate_schedule(draft: &CampaignDraft) -> ErrorMap {
    let mut errors = ErrorMap::new();

    match (draft.start_date, draft.end_date) {
        (None, _) => {
            errors.insert(Field::StartDate, "Start date is required".to_string());
            if draft.end_date.is_none() {
                errors.insert(Field::EndDate, "End date is required".to_string());
            }
        }
        (_, None) => {
            errors.insert(Field::EndDate, "End date is required".to_string());
        }
        (Some(start), Some(end)) => {
            if end <= start {
                errors.insert(
                    Field::EndDate,
                    "End date must be after start date".to_string(),
                );
            } else if let Some(limit) = start.checked_add_months(Months::new(12)) {
                if end > limit {
                    errors.insert(
                        Field::EndDate,
                        "Date range cannot exceed one year".to_string(),
                    );
                }
            }
        }
    }

    let mut any_enabled = false;
    for day in WEEK {
        let entry = draft.schedule.entry(day);
        if !entry.enabled {
            continue;
        }
        any_enabled = true;
        match (entry.start(), entry.end()) {
            (Some(start), Some(end)) => {
                if start >= end {
                    errors.insert(
                        Field::Schedule(day),
                        "End time must be after start time".to_string(),
                    );
                }
            }
            _ => {
                errors.insert(
                    Field::Schedule(day),
                    "Times must be in 24-hour HH:MM format".to_string(),
                );
            }
        }
    }
    if !any_enabled {
        errors.insert(
            Field::ScheduleDays,
            "Enable at least one day".to_string(),
        );
    }

    errors
}
