//! Wizard request and response types
//!
//! Field names serialize in camelCase; enum values follow the client wire
//! format (`MALE`, `LOSS`, `HOLD`, ...).

use crate::bmi::{BmiCategory, TargetBmiBand};
use crate::energy::ActivityLevel;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use validator::Validate;

// ============================================================================
// Enumerations
// ============================================================================

/// Sex used for physiological calculations only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CalculationSex {
    Male,
    Female,
}

/// Direction of the weight change the user is aiming for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CalculationGoal {
    Loss,
    Gain,
}

impl CalculationGoal {
    /// Sign applied to a weight or calorie delta
    pub fn sign(&self) -> f64 {
        match self {
            CalculationGoal::Loss => -1.0,
            CalculationGoal::Gain => 1.0,
        }
    }
}

/// Recommendation attached to a calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WizardRecommendation {
    Hold,
    Lose,
    Gain,
}

// ============================================================================
// calculate
// ============================================================================

/// Body metrics and goal for the TDEE calculation
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct WizardInput {
    #[validate(range(min = 18, max = 99, code = "validation.wizard.age"))]
    pub age: i32,
    pub sex: CalculationSex,
    #[validate(range(min = 30.0, max = 300.0, code = "validation.wizard.weight"))]
    pub weight: f64,
    #[validate(range(min = 100.0, max = 220.0, code = "validation.wizard.height"))]
    pub height: f64,
    pub activity_level: ActivityLevel,
    /// Index into the rate ladder; the daily rate is this value × 100
    #[validate(range(min = 0, max = 7, code = "validation.wizard.weekly_difference"))]
    pub weekly_difference: i32,
    pub calculation_goal: CalculationGoal,
}

/// Result of the TDEE calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardResult {
    pub bmr: f64,
    pub tdee: f64,
    /// Daily deficit (loss) or surplus (gain) in kcal
    pub deficit: f64,
    /// Daily calorie target
    pub target: f64,
    pub bmi: f64,
    pub bmi_category: BmiCategory,
    pub recommendation: WizardRecommendation,
    pub target_bmi: TargetBmiBand,
    pub target_weight: f64,
    pub target_weight_lower: f64,
    pub target_weight_upper: f64,
    pub duration_days: i64,
    pub duration_days_lower: i64,
    pub duration_days_upper: i64,
}

// ============================================================================
// calculate_for_target_weight
// ============================================================================

/// A fixed target weight, for which completion dates are projected
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct WizardTargetWeightInput {
    #[validate(range(min = 18, max = 99, code = "validation.wizard.age"))]
    pub age: i32,
    pub sex: CalculationSex,
    #[validate(range(min = 30.0, max = 300.0, code = "validation.wizard.weight"))]
    pub current_weight: f64,
    #[validate(range(min = 100.0, max = 220.0, code = "validation.wizard.height"))]
    pub height: f64,
    #[validate(range(min = 30.0, max = 300.0, code = "validation.wizard.weight"))]
    pub target_weight: f64,
    pub start_date: NaiveDate,
}

/// Completion date per rate for a fixed target weight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardTargetWeightResult {
    pub date_by_rate: BTreeMap<u32, NaiveDate>,
    /// Expected weekly change in kg per rate
    pub progress_by_rate: BTreeMap<u32, f64>,
    pub target_classification: BmiCategory,
    pub warning: bool,
    pub message: String,
}

// ============================================================================
// calculate_for_target_date
// ============================================================================

/// A fixed target date, for which achievable weights are projected
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct WizardTargetDateInput {
    #[validate(range(min = 18, max = 99, code = "validation.wizard.age"))]
    pub age: i32,
    pub sex: CalculationSex,
    #[validate(range(min = 30.0, max = 300.0, code = "validation.wizard.weight"))]
    pub current_weight: f64,
    #[validate(range(min = 100.0, max = 220.0, code = "validation.wizard.height"))]
    pub height: f64,
    pub calculation_goal: CalculationGoal,
    pub start_date: NaiveDate,
    pub target_date: NaiveDate,
}

/// Weight and BMI reachable by the target date at one rate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectedOutcome {
    pub target_weight: f64,
    pub bmi: f64,
    pub bmi_category: BmiCategory,
}

/// Recommendable outcomes per rate for a fixed target date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardTargetDateResult {
    pub result_by_rate: BTreeMap<u32, ProjectedOutcome>,
}
