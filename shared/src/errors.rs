//! Error types for the Calorie Wizard engine

use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised by the wizard engine
///
/// Every variant is preventable by the caller; the engine never retries.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WizardError {
    #[error("Weekly difference {0} is outside the rate ladder (0-7)")]
    InvalidLadderIndex(i32),

    #[error("Target date {target} must lie after start date {start}")]
    NonPositiveDuration { start: NaiveDate, target: NaiveDate },

    #[error("Rate {0} kcal/day is not on the rate ladder")]
    RateNotOnLadder(u32),

    #[error("Rate {0} kcal/day was not recommended for this projection")]
    RateNotRecommendable(u32),

    #[error("Projection from {0} runs past the supported date range")]
    DateOutOfRange(NaiveDate),

    #[error("Activity level {0} is not one of 1.0, 1.25, 1.5, 1.75, 2.0")]
    InvalidActivityLevel(f64),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl WizardError {
    /// Field the error relates to, if any
    pub fn field(&self) -> Option<&'static str> {
        match self {
            WizardError::InvalidLadderIndex(_) => Some("weeklyDifference"),
            WizardError::NonPositiveDuration { .. } => Some("targetDate"),
            WizardError::RateNotOnLadder(_) | WizardError::RateNotRecommendable(_) => {
                Some("selectedRate")
            }
            WizardError::DateOutOfRange(_) => Some("startDate"),
            WizardError::InvalidActivityLevel(_) => Some("activityLevel"),
            WizardError::Validation(_) => None,
        }
    }
}
