//! Compiled-in reference data for the pickers.
//!
//! IVR flows, outbound phone numbers, campaign groups, and the candidate
//! zones shown in the timezone picker's clock strip. A production
//! deployment would source these from the directory service; this crate
//! ships a static snapshot.

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Phone numbers
// ---------------------------------------------------------------------------

/// Provisioning state of an outbound number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhoneNumberStatus {
    Active,
    Inactive,
    Unverified,
}

impl PhoneNumberStatus {
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            "unverified" => Ok(Self::Unverified),
            _ => Err(CoreError::Validation(format!(
                "Invalid phone number status '{s}'. Must be one of: active, inactive, unverified"
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Unverified => "unverified",
        }
    }
}

/// An outbound number the campaign can dial from. Read-only reference
/// data, not owned by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PhoneNumber {
    pub id: &'static str,
    pub number: &'static str,
    pub country_code: &'static str,
    pub flag: &'static str,
    pub status: PhoneNumberStatus,
}

pub const PHONE_NUMBERS: &[PhoneNumber] = &[
    PhoneNumber {
        id: "pn-us-1",
        number: "+1 415 555 0134",
        country_code: "US",
        flag: "🇺🇸",
        status: PhoneNumberStatus::Active,
    },
    PhoneNumber {
        id: "pn-us-2",
        number: "+1 646 555 0188",
        country_code: "US",
        flag: "🇺🇸",
        status: PhoneNumberStatus::Active,
    },
    PhoneNumber {
        id: "pn-gb-1",
        number: "+44 20 7946 0823",
        country_code: "GB",
        flag: "🇬🇧",
        status: PhoneNumberStatus::Active,
    },
    PhoneNumber {
        id: "pn-de-1",
        number: "+49 30 901820",
        country_code: "DE",
        flag: "🇩🇪",
        status: PhoneNumberStatus::Inactive,
    },
    PhoneNumber {
        id: "pn-au-1",
        number: "+61 2 5550 1392",
        country_code: "AU",
        flag: "🇦🇺",
        status: PhoneNumberStatus::Unverified,
    },
];

/// Look up a phone number by id.
pub fn phone_number(id: &str) -> Option<&'static PhoneNumber> {
    PHONE_NUMBERS.iter().find(|p| p.id == id)
}

/// Numbers the picker offers for selection.
pub fn active_phone_numbers() -> impl Iterator<Item = &'static PhoneNumber> {
    PHONE_NUMBERS
        .iter()
        .filter(|p| p.status == PhoneNumberStatus::Active)
}

// ---------------------------------------------------------------------------
// IVR flows and groups
// ---------------------------------------------------------------------------

/// An Interactive Voice Response flow, referenced by id only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IvrFlow {
    pub id: &'static str,
    pub name: &'static str,
    pub group: &'static str,
}

pub const IVR_FLOWS: &[IvrFlow] = &[
    IvrFlow {
        id: "ivr-renewal",
        name: "Renewal reminder",
        group: "Sales",
    },
    IvrFlow {
        id: "ivr-upsell",
        name: "Upgrade offer",
        group: "Sales",
    },
    IvrFlow {
        id: "ivr-survey-csat",
        name: "CSAT survey",
        group: "Surveys",
    },
    IvrFlow {
        id: "ivr-payment",
        name: "Payment reminder",
        group: "Collections",
    },
    IvrFlow {
        id: "ivr-callback",
        name: "Support callback",
        group: "Support",
    },
];

/// Group headings for the IVR picker.
pub const CAMPAIGN_GROUPS: &[&str] = &["Sales", "Support", "Collections", "Surveys"];

/// Look up an IVR flow by id.
pub fn ivr_flow(id: &str) -> Option<&'static IvrFlow> {
    IVR_FLOWS.iter().find(|f| f.id == id)
}

/// Flows under one group heading, in declaration order.
pub fn ivr_flows_in_group(group: &str) -> impl Iterator<Item = &'static IvrFlow> + '_ {
    IVR_FLOWS.iter().filter(move |f| f.group == group)
}

// ---------------------------------------------------------------------------
// Timezones
// ---------------------------------------------------------------------------

/// Candidate zones for the timezone picker's live clock strip.
pub const CLOCK_ZONES: &[Tz] = &[
    Tz::America__New_York,
    Tz::America__Chicago,
    Tz::America__Denver,
    Tz::America__Los_Angeles,
    Tz::Europe__London,
    Tz::Europe__Berlin,
    Tz::Asia__Kolkata,
    Tz::Australia__Sydney,
    Tz::UTC,
];

#[cfg(test)]
mod tests {
    use super::*;

    // -- PhoneNumberStatus --

    #[test]
    fn status_as_str_roundtrip() {
        for status in [
            PhoneNumberStatus::Active,
            PhoneNumberStatus::Inactive,
            PhoneNumberStatus::Unverified,
        ] {
            assert_eq!(PhoneNumberStatus::parse(status.as_str()).unwrap(), status);
        }
    }

    #[test]
    fn status_from_str_invalid() {
        assert!(PhoneNumberStatus::parse("retired").is_err());
        assert!(PhoneNumberStatus::parse("").is_err());
    }

    // -- Phone numbers --

    #[test]
    fn phone_number_lookup() {
        let p = phone_number("pn-us-1").unwrap();
        assert_eq!(p.country_code, "US");
        assert_eq!(p.status, PhoneNumberStatus::Active);
    }

    #[test]
    fn phone_number_unknown_id() {
        assert!(phone_number("pn-nowhere").is_none());
    }

    #[test]
    fn active_numbers_excludes_inactive_and_unverified() {
        let active: Vec<_> = active_phone_numbers().map(|p| p.id).collect();
        assert!(active.contains(&"pn-us-1"));
        assert!(!active.contains(&"pn-de-1"));
        assert!(!active.contains(&"pn-au-1"));
    }

    #[test]
    fn phone_number_ids_are_unique() {
        for (i, a) in PHONE_NUMBERS.iter().enumerate() {
            for b in &PHONE_NUMBERS[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    // -- IVR flows --

    #[test]
    fn ivr_flow_lookup() {
        assert_eq!(ivr_flow("ivr-payment").unwrap().group, "Collections");
        assert!(ivr_flow("ivr-missing").is_none());
    }

    #[test]
    fn every_flow_belongs_to_a_known_group() {
        for flow in IVR_FLOWS {
            assert!(CAMPAIGN_GROUPS.contains(&flow.group));
        }
    }

    #[test]
    fn flows_in_group_filters() {
        let sales: Vec<_> = ivr_flows_in_group("Sales").map(|f| f.id).collect();
        assert_eq!(sales, vec!["ivr-renewal", "ivr-upsell"]);
        assert_eq!(ivr_flows_in_group("Facilities").count(), 0);
    }

    // -- Timezones --

    #[test]
    fn clock_zones_are_nonempty_and_unique() {
        assert!(!CLOCK_ZONES.is_empty());
        for (i, a) in CLOCK_ZONES.iter().enumerate() {
            for b in &CLOCK_ZONES[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
