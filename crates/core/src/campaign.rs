//! Campaign draft data model.
//!
//! The draft is the in-progress, not-yet-submitted campaign configuration
//! owned by the form while the modal is open. IVR flow and phone number
//! fields hold ids pointing into the static directory in
//! [`crate::reference`].

use chrono::{Duration, NaiveDate};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::schedule::WeeklySchedule;
use crate::timefmt;

/// Default wait between call attempts.
pub const DEFAULT_RETRY_INTERVAL: &str = "00:05:00";

/// Default number of call attempts per contact.
pub const DEFAULT_MAX_TRIES: u8 = 3;

/// Default number of simultaneous outbound calls.
pub const DEFAULT_CONCURRENCY: u16 = 10;

/// Auto-scaling settings for the dialer's concurrency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoScaling {
    pub enabled: bool,
    /// Lower concurrency bound when scaling down.
    pub min: u16,
    /// Upper concurrency bound when scaling up.
    pub max: u16,
    /// Agent-availability percentage that triggers scaling, 1..=100.
    pub threshold_pct: u8,
}

impl Default for AutoScaling {
    fn default() -> Self {
        Self {
            enabled: false,
            min: 1,
            max: 10,
            threshold_pct: 80,
        }
    }
}

/// The in-progress campaign configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignDraft {
    pub name: String,
    /// Selected IVR flow id, `None` until the user picks one.
    pub ivr_flow: Option<String>,
    /// Selected outbound phone number id, `None` until the user picks one.
    pub phone_number: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub timezone: Tz,
    pub max_tries: u8,
    /// `HH:MM:SS` wait between retries, kept as entered.
    pub retry_interval: String,
    pub concurrency: u16,
    pub auto_scaling: AutoScaling,
    pub schedule: WeeklySchedule,
}

impl Default for CampaignDraft {
    fn default() -> Self {
        Self::new()
    }
}

impl CampaignDraft {
    /// A fresh draft with the defaults the modal opens with: no picker
    /// selections, no dates, all seven days enabled 09:00-17:00.
    pub fn new() -> Self {
        Self {
            name: String::new(),
            ivr_flow: None,
            phone_number: None,
            start_date: None,
            end_date: None,
            timezone: Tz::UTC,
            max_tries: DEFAULT_MAX_TRIES,
            retry_interval: DEFAULT_RETRY_INTERVAL.to_string(),
            concurrency: DEFAULT_CONCURRENCY,
            auto_scaling: AutoScaling::default(),
            schedule: WeeklySchedule::default(),
        }
    }

    /// Retry interval parsed to a duration, if the field currently holds
    /// a valid `HH:MM:SS` string.
    pub fn retry_interval_duration(&self) -> Option<Duration> {
        timefmt::parse_retry_interval(&self.retry_interval).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_draft_defaults() {
        let draft = CampaignDraft::new();
        assert!(draft.name.is_empty());
        assert!(draft.ivr_flow.is_none());
        assert!(draft.phone_number.is_none());
        assert!(draft.start_date.is_none());
        assert!(draft.end_date.is_none());
        assert_eq!(draft.timezone, Tz::UTC);
        assert_eq!(draft.max_tries, 3);
        assert_eq!(draft.retry_interval, "00:05:00");
        assert_eq!(draft.concurrency, 10);
        assert!(!draft.auto_scaling.enabled);
        assert_eq!(draft.schedule.enabled_days().len(), 7);
    }

    #[test]
    fn retry_interval_parses_to_duration() {
        let draft = CampaignDraft::new();
        assert_eq!(draft.retry_interval_duration(), Some(Duration::minutes(5)));
    }

    #[test]
    fn invalid_retry_interval_has_no_duration() {
        let draft = CampaignDraft {
            retry_interval: "soon".to_string(),
            ..CampaignDraft::new()
        };
        assert!(draft.retry_interval_duration().is_none());
    }

    #[test]
    fn draft_serializes_to_json() {
        let draft = CampaignDraft::new();
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["timezone"], "UTC");
        assert_eq!(json["schedule"]["monday"]["start_time"], "09:00");
        assert_eq!(json["auto_scaling"]["threshold_pct"], 80);
        assert!(json["ivr_flow"].is_null());
    }

    #[test]
    fn draft_roundtrips_through_json() {
        let mut draft = CampaignDraft::new();
        draft.name = "Q3 renewals".to_string();
        draft.timezone = Tz::America__New_York;
        draft.start_date = NaiveDate::from_ymd_opt(2024, 7, 1);
        let json = serde_json::to_string(&draft).unwrap();
        let back: CampaignDraft = serde_json::from_str(&json).unwrap();
        assert_eq!(back, draft);
    }
}
