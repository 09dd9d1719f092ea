//! Energy expenditure calculations
//!
//! Basal metabolic rate (BMR) and total daily energy expenditure (TDEE)
//! from body metrics and an activity multiplier.

use crate::errors::WizardError;
use crate::types::CalculationSex;
use serde::{Deserialize, Serialize};

// ============================================================================
// Activity Level
// ============================================================================

/// Activity multiplier applied to BMR
///
/// Only the five listed multipliers are accepted; anything else fails to
/// deserialize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(try_from = "f64", into = "f64")]
pub enum ActivityLevel {
    /// Mostly sitting, no exercise
    #[default]
    Sedentary,
    /// Light exercise 1-3 days/week
    Light,
    /// Moderate exercise 3-5 days/week
    Moderate,
    /// Hard exercise 6-7 days/week
    High,
    /// Very hard exercise or physical job
    Extreme,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::High,
        ActivityLevel::Extreme,
    ];

    /// Get the activity multiplier for TDEE calculation
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.0,
            ActivityLevel::Light => 1.25,
            ActivityLevel::Moderate => 1.5,
            ActivityLevel::High => 1.75,
            ActivityLevel::Extreme => 2.0,
        }
    }

    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Mostly sitting, little or no exercise",
            ActivityLevel::Light => "Light exercise 1-3 days/week",
            ActivityLevel::Moderate => "Moderate exercise 3-5 days/week",
            ActivityLevel::High => "Hard exercise 6-7 days/week",
            ActivityLevel::Extreme => "Very hard exercise or physical job",
        }
    }
}

impl TryFrom<f64> for ActivityLevel {
    type Error = WizardError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        ActivityLevel::ALL
            .into_iter()
            .find(|level| level.multiplier() == value)
            .ok_or(WizardError::InvalidActivityLevel(value))
    }
}

impl From<ActivityLevel> for f64 {
    fn from(level: ActivityLevel) -> Self {
        level.multiplier()
    }
}

// ============================================================================
// BMR and TDEE
// ============================================================================

/// BMR formula selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BmrFormula {
    /// Harris-Benedict (1919 coefficients), used by the wizard
    #[default]
    HarrisBenedict,
    /// Harris-Benedict as revised by Roza and Shizgal
    HarrisBenedictRevised,
    /// Mifflin-St Jeor
    MifflinStJeor,
}

/// Calculate BMR with the wizard's default formula, rounded to whole kcal
///
/// Men: 66 + 13.7 × weight(kg) + 5 × height(cm) - 6.8 × age(y)
/// Women: 655 + 9.6 × weight(kg) + 1.8 × height(cm) - 4.7 × age(y)
pub fn calculate_bmr(sex: CalculationSex, weight_kg: f64, height_cm: f64, age_years: i32) -> f64 {
    calculate_bmr_with(BmrFormula::default(), sex, weight_kg, height_cm, age_years).round()
}

/// Calculate unrounded BMR with the specified formula
pub fn calculate_bmr_with(
    formula: BmrFormula,
    sex: CalculationSex,
    weight_kg: f64,
    height_cm: f64,
    age_years: i32,
) -> f64 {
    let age = age_years as f64;

    match (formula, sex) {
        (BmrFormula::HarrisBenedict, CalculationSex::Male) => {
            66.0 + 13.7 * weight_kg + 5.0 * height_cm - 6.8 * age
        }
        (BmrFormula::HarrisBenedict, CalculationSex::Female) => {
            655.0 + 9.6 * weight_kg + 1.8 * height_cm - 4.7 * age
        }
        (BmrFormula::HarrisBenedictRevised, CalculationSex::Male) => {
            88.362 + 13.397 * weight_kg + 4.799 * height_cm - 5.677 * age
        }
        (BmrFormula::HarrisBenedictRevised, CalculationSex::Female) => {
            447.593 + 9.247 * weight_kg + 3.098 * height_cm - 4.330 * age
        }
        (BmrFormula::MifflinStJeor, sex) => {
            let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age;
            match sex {
                CalculationSex::Male => base + 5.0,
                CalculationSex::Female => base - 161.0,
            }
        }
    }
}

/// Calculate Total Daily Energy Expenditure, floored to whole kcal
///
/// TDEE = BMR × Activity Multiplier
pub fn calculate_tdee(bmr: f64, activity_level: ActivityLevel) -> f64 {
    (bmr * activity_level.multiplier()).floor()
}
