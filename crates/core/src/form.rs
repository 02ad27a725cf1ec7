//! Form state holder for the new-campaign modal.
//!
//! Owns the draft, the current wizard step, and the per-field error map.
//! Created fresh each time the modal opens; dropped on close, or once
//! [`CampaignForm::submit`] hands the finished draft to the caller.
//! Every setter clears any existing error for its field; the date setters
//! additionally re-derive the weekly schedule.

use chrono::{NaiveDate, Weekday};
use chrono_tz::Tz;

use crate::campaign::CampaignDraft;
use crate::error::CoreError;
use crate::schedule;
use crate::steps::FormStep;
use crate::validation::{self, ErrorMap, Field};

#[derive(Debug, Clone)]
pub struct CampaignForm {
    draft: CampaignDraft,
    step: FormStep,
    errors: ErrorMap,
}

impl Default for CampaignForm {
    fn default() -> Self {
        Self::new()
    }
}

impl CampaignForm {
    /// A fresh form on step 1 with default draft values.
    pub fn new() -> Self {
        Self {
            draft: CampaignDraft::new(),
            step: FormStep::Info,
            errors: ErrorMap::new(),
        }
    }

    pub fn draft(&self) -> &CampaignDraft {
        &self.draft
    }

    pub fn step(&self) -> FormStep {
        self.step
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    /// The message attached to one field, if any.
    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    fn clear(&mut self, field: Field) {
        self.errors.remove(&field);
    }

    // -----------------------------------------------------------------------
    // Field setters
    // -----------------------------------------------------------------------

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
        self.clear(Field::Name);
    }

    pub fn set_ivr_flow(&mut self, id: impl Into<String>) {
        self.draft.ivr_flow = Some(id.into());
        self.clear(Field::IvrFlow);
    }

    pub fn set_phone_number(&mut self, id: impl Into<String>) {
        self.draft.phone_number = Some(id.into());
        self.clear(Field::PhoneNumber);
    }

    pub fn set_timezone(&mut self, tz: Tz) {
        self.draft.timezone = tz;
    }

    pub fn set_max_tries(&mut self, tries: u8) {
        self.draft.max_tries = tries;
        self.clear(Field::MaxTries);
    }

    pub fn set_retry_interval(&mut self, interval: impl Into<String>) {
        self.draft.retry_interval = interval.into();
        self.clear(Field::RetryInterval);
    }

    pub fn set_concurrency(&mut self, concurrency: u16) {
        self.draft.concurrency = concurrency;
        self.clear(Field::Concurrency);
    }

    pub fn set_auto_scaling_enabled(&mut self, enabled: bool) {
        self.draft.auto_scaling.enabled = enabled;
        self.clear(Field::AutoScalingMin);
        self.clear(Field::AutoScalingMax);
        self.clear(Field::AutoScalingThreshold);
    }

    pub fn set_auto_scaling_min(&mut self, min: u16) {
        self.draft.auto_scaling.min = min;
        self.clear(Field::AutoScalingMin);
    }

    pub fn set_auto_scaling_max(&mut self, max: u16) {
        self.draft.auto_scaling.max = max;
        self.clear(Field::AutoScalingMax);
    }

    pub fn set_auto_scaling_threshold(&mut self, pct: u8) {
        self.draft.auto_scaling.threshold_pct = pct;
        self.clear(Field::AutoScalingThreshold);
    }

    pub fn set_start_date(&mut self, date: NaiveDate) {
        self.draft.start_date = Some(date);
        self.clear(Field::StartDate);
        self.sync_schedule();
    }

    pub fn set_end_date(&mut self, date: NaiveDate) {
        self.draft.end_date = Some(date);
        self.clear(Field::EndDate);
        self.sync_schedule();
    }

    /// Re-derive the enabled flags whenever both dates are present. The
    /// derivation overwrites manual per-day toggles.
    fn sync_schedule(&mut self) {
        if let (Some(start), Some(end)) = (self.draft.start_date, self.draft.end_date) {
            schedule::apply_date_range(&mut self.draft.schedule, start, end);
        }
    }

    // -----------------------------------------------------------------------
    // Schedule entry setters
    // -----------------------------------------------------------------------

    pub fn set_day_enabled(&mut self, day: Weekday, enabled: bool) {
        self.draft.schedule.entry_mut(day).enabled = enabled;
        self.clear(Field::Schedule(day));
        self.clear(Field::ScheduleDays);
    }

    pub fn set_day_start_time(&mut self, day: Weekday, time: impl Into<String>) {
        self.draft.schedule.entry_mut(day).start_time = time.into();
        self.clear(Field::Schedule(day));
    }

    pub fn set_day_end_time(&mut self, day: Weekday, time: impl Into<String>) {
        self.draft.schedule.entry_mut(day).end_time = time.into();
        self.clear(Field::Schedule(day));
    }

    // -----------------------------------------------------------------------
    // Navigation and submit
    // -----------------------------------------------------------------------

    /// Validate the current step and advance on success.
    ///
    /// Returns `true` when the step changed; on failure the step's errors
    /// are stored and surfaced through [`CampaignForm::errors`].
    pub fn advance(&mut self) -> bool {
        let errors = validation::validate_step(self.step, &self.draft);
        if !errors.is_empty() {
            self.errors = errors;
            return false;
        }
        match self.step.next() {
            Some(next) => {
                tracing::debug!(
                    from = self.step.to_number(),
                    to = next.to_number(),
                    "Advancing form step"
                );
                self.errors.clear();
                self.step = next;
                true
            }
            None => false,
        }
    }

    /// Go back one step. Never validates and always succeeds except on
    /// the first step.
    pub fn back(&mut self) -> bool {
        match self.step.prev() {
            Some(prev) => {
                self.step = prev;
                true
            }
            None => false,
        }
    }

    /// Re-validate the whole draft and hand it out when clean.
    ///
    /// Only available from the review step. On failure the full error map
    /// is stored, so an invalid draft is never handed to the caller.
    pub fn submit(&mut self) -> Result<CampaignDraft, CoreError> {
        if !self.step.is_final() {
            return Err(CoreError::NotOnReviewStep {
                step: self.step.to_number(),
            });
        }
        let errors = validation::validate_all(&self.draft);
        if !errors.is_empty() {
            let failed = errors.len();
            self.errors = errors;
            return Err(CoreError::InvalidDraft { failed });
        }
        tracing::debug!(name = %self.draft.name, "Campaign draft submitted");
        Ok(self.draft.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Fill in everything step 1 needs.
    fn fill_info(form: &mut CampaignForm) {
        form.set_name("Q3 renewals");
        form.set_ivr_flow("ivr-renewal");
        form.set_phone_number("pn-us-1");
    }

    // -- Setters and error clearing --

    #[test]
    fn setter_clears_only_its_own_error() {
        let mut form = CampaignForm::new();
        assert!(!form.advance());
        assert!(form.error(Field::Name).is_some());
        assert!(form.error(Field::IvrFlow).is_some());

        form.set_name("Q3 renewals");
        assert!(form.error(Field::Name).is_none());
        assert!(form.error(Field::IvrFlow).is_some());
    }

    #[test]
    fn date_setters_trigger_derivation() {
        let mut form = CampaignForm::new();
        // Tuesday through Thursday.
        form.set_start_date(date(2024, 1, 2));
        assert_eq!(form.draft().schedule.enabled_days().len(), 7);
        form.set_end_date(date(2024, 1, 4));
        assert_eq!(
            form.draft().schedule.enabled_days(),
            vec![Weekday::Tue, Weekday::Wed, Weekday::Thu]
        );
    }

    #[test]
    fn changing_dates_discards_manual_toggles() {
        let mut form = CampaignForm::new();
        form.set_start_date(date(2024, 1, 1));
        form.set_end_date(date(2024, 1, 7));
        form.set_day_enabled(Weekday::Wed, false);
        form.set_end_date(date(2024, 1, 14));
        assert!(form.draft().schedule.wednesday.enabled);
    }

    #[test]
    fn day_toggle_clears_schedule_errors() {
        let mut form = CampaignForm::new();
        fill_info(&mut form);
        assert!(form.advance());
        form.set_start_date(date(2024, 1, 1));
        form.set_end_date(date(2024, 1, 7));
        for day in schedule::WEEK {
            form.set_day_enabled(day, false);
        }
        assert!(!form.advance());
        assert!(form.error(Field::ScheduleDays).is_some());

        form.set_day_enabled(Weekday::Mon, true);
        assert!(form.error(Field::ScheduleDays).is_none());
    }

    // -- Navigation --

    #[test]
    fn advance_blocks_on_invalid_step() {
        let mut form = CampaignForm::new();
        assert!(!form.advance());
        assert_eq!(form.step(), FormStep::Info);
        assert!(!form.errors().is_empty());
    }

    #[test]
    fn advance_moves_forward_when_valid() {
        let mut form = CampaignForm::new();
        fill_info(&mut form);
        assert!(form.advance());
        assert_eq!(form.step(), FormStep::Schedule);
        assert!(form.errors().is_empty());
    }

    #[test]
    fn back_is_unconditional() {
        let mut form = CampaignForm::new();
        fill_info(&mut form);
        assert!(form.advance());
        // Make the schedule step invalid, then go back anyway.
        form.set_day_start_time(Weekday::Mon, "bogus");
        assert!(form.back());
        assert_eq!(form.step(), FormStep::Info);
    }

    #[test]
    fn back_stops_at_first_step() {
        let mut form = CampaignForm::new();
        assert!(!form.back());
        assert_eq!(form.step(), FormStep::Info);
    }

    // -- Submit --

    #[test]
    fn submit_requires_review_step() {
        let mut form = CampaignForm::new();
        assert_matches!(form.submit(), Err(CoreError::NotOnReviewStep { step: 1 }));
    }

    #[test]
    fn submit_revalidates_everything() {
        let mut form = CampaignForm::new();
        fill_info(&mut form);
        assert!(form.advance());
        form.set_start_date(date(2024, 1, 1));
        form.set_end_date(date(2024, 1, 7));
        assert!(form.advance());
        assert_eq!(form.step(), FormStep::Review);

        // Invalidate a step-1 field after passing step 1.
        form.set_name("");
        assert_matches!(form.submit(), Err(CoreError::InvalidDraft { failed: 1 }));
        assert!(form.error(Field::Name).is_some());
    }

    #[test]
    fn submit_hands_out_the_draft() {
        let mut form = CampaignForm::new();
        fill_info(&mut form);
        assert!(form.advance());
        form.set_start_date(date(2024, 1, 1));
        form.set_end_date(date(2024, 1, 7));
        assert!(form.advance());

        let draft = form.submit().unwrap();
        assert_eq!(draft.name, "Q3 renewals");
        assert_eq!(draft.phone_number.as_deref(), Some("pn-us-1"));
        assert_eq!(draft.schedule.enabled_days().len(), 7);
    }
}
