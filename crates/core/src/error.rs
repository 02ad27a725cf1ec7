use crate::steps::MAX_STEP;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Draft failed validation: {failed} field(s) have errors")]
    InvalidDraft { failed: usize },

    #[error("Submit is only available from step {MAX_STEP} (Review), currently on step {step}")]
    NotOnReviewStep { step: u8 },
}
