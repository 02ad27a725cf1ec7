//! Wizard step definitions for the new-campaign modal.
//!
//! Three pages: campaign info and dialer configuration, the weekly
//! schedule, and a final review. Forward movement is gated by step
//! validation in [`crate::form`]; backward movement never is.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// The three pages of the new-campaign wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormStep {
    Info,
    Schedule,
    Review,
}

/// Total number of steps in the wizard.
pub const TOTAL_STEPS: u8 = 3;

/// Minimum step number (1-based).
pub const MIN_STEP: u8 = 1;

/// Maximum step number (1-based).
pub const MAX_STEP: u8 = 3;

impl FormStep {
    /// Convert a 1-based step number to a `FormStep`.
    pub fn from_number(n: u8) -> Result<Self, CoreError> {
        match n {
            1 => Ok(Self::Info),
            2 => Ok(Self::Schedule),
            3 => Ok(Self::Review),
            _ => Err(CoreError::Validation(format!(
                "Invalid step number {n}. Must be between {MIN_STEP} and {MAX_STEP}"
            ))),
        }
    }

    /// Convert to a 1-based step number.
    pub fn to_number(self) -> u8 {
        match self {
            Self::Info => 1,
            Self::Schedule => 2,
            Self::Review => 3,
        }
    }

    /// Human-readable label for the step indicator.
    pub fn label(self) -> &'static str {
        match self {
            Self::Info => "Info & Configuration",
            Self::Schedule => "Schedule",
            Self::Review => "Review",
        }
    }

    /// The following step, `None` on the last one.
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Info => Some(Self::Schedule),
            Self::Schedule => Some(Self::Review),
            Self::Review => None,
        }
    }

    /// The preceding step, `None` on the first one.
    pub fn prev(self) -> Option<Self> {
        match self {
            Self::Info => None,
            Self::Schedule => Some(Self::Info),
            Self::Review => Some(Self::Schedule),
        }
    }

    /// Whether this is the step submit is reachable from.
    pub fn is_final(self) -> bool {
        matches!(self, Self::Review)
    }
}
