//! The fixed ladder of daily calorie rates offered by the wizard

use crate::errors::WizardError;

/// Step between ladder members in kcal/day
pub const RATE_STEP_KCAL: u32 = 100;

/// Daily deficit/surplus options in ascending order
pub const DAILY_RATES_KCAL: [u32; 7] = [100, 200, 300, 400, 500, 600, 700];

/// Highest accepted weekly-difference index; 0 means maintain
pub const MAX_LADDER_INDEX: i32 = 7;

/// Ordered, immutable set of daily kcal rates
#[derive(Debug, Clone, Copy, Default)]
pub struct RateLadder;

impl RateLadder {
    /// Ladder members in ascending order
    pub fn iter() -> impl Iterator<Item = u32> {
        DAILY_RATES_KCAL.into_iter()
    }

    pub fn contains(rate: u32) -> bool {
        DAILY_RATES_KCAL.contains(&rate)
    }

    /// Map a weekly-difference index onto a daily rate
    ///
    /// Index 0 maps to 0 kcal/day (maintain), 1-7 onto the ladder.
    pub fn rate_for_index(index: i32) -> Result<u32, WizardError> {
        if !(0..=MAX_LADDER_INDEX).contains(&index) {
            return Err(WizardError::InvalidLadderIndex(index));
        }
        Ok(index as u32 * RATE_STEP_KCAL)
    }
}
