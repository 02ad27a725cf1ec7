//! Headless core of the new outbound-campaign modal.
//!
//! Form state, step-scoped validation, weekly-schedule derivation, wizard
//! steps, dropdown controllers, static reference data, and the timezone
//! clock strip. Rendering and the surrounding application concerns
//! (transport, persistence, auth) live elsewhere.

pub mod campaign;
pub mod clock;
pub mod error;
pub mod form;
pub mod pickers;
pub mod reference;
pub mod schedule;
pub mod steps;
pub mod timefmt;
pub mod validation;

pub use campaign::{AutoScaling, CampaignDraft};
pub use error::CoreError;
pub use form::CampaignForm;
pub use pickers::{Picker, PickerState};
pub use schedule::{ScheduleEntry, WeeklySchedule};
pub use steps::FormStep;
pub use validation::{ErrorMap, Field};
