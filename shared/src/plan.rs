//! Target plan construction
//!
//! Turns a chosen projection into the calorie and weight target records a
//! persistence layer stores. Nothing here is stored.

use crate::errors::WizardError;
use crate::rates::RateLadder;
use crate::types::{
    CalculationGoal, WizardTargetDateInput, WizardTargetDateResult, WizardTargetWeightInput,
    WizardTargetWeightResult,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use validator::Validate;

/// Daily calorie target over a period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalorieTargetPlan {
    pub added: NaiveDate,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub target_calories: f64,
    pub maximum_calories: f64,
}

/// Weight target over a period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightTargetPlan {
    pub added: NaiveDate,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub initial_weight: f64,
    pub target_weight: f64,
}

/// Both records produced from one wizard run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardPlan {
    pub calorie_target: CalorieTargetPlan,
    pub weight_target: WeightTargetPlan,
}

/// Request to store a target-weight projection at one rate
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TargetWeightPlanRequest {
    pub input: WizardTargetWeightInput,
    #[validate(range(min = 500.0, max = 10000.0, code = "validation.wizard.tdee"))]
    pub tdee: f64,
    pub selected_rate: u32,
}

/// Request to store a target-date projection at one rate
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TargetDatePlanRequest {
    pub input: WizardTargetDateInput,
    #[validate(range(min = 500.0, max = 10000.0, code = "validation.wizard.tdee"))]
    pub tdee: f64,
    pub selected_rate: u32,
}

fn ensure_on_ladder(rate: u32) -> Result<(), WizardError> {
    if RateLadder::contains(rate) {
        Ok(())
    } else {
        Err(WizardError::RateNotOnLadder(rate))
    }
}

/// Build the plan for a fixed target weight at the selected rate
///
/// The end date is the projected completion date for that rate. A target
/// equal to the current weight plans at maintenance (`tdee`).
pub fn plan_for_target_weight(
    added: NaiveDate,
    tdee: f64,
    input: &WizardTargetWeightInput,
    result: &WizardTargetWeightResult,
    selected_rate: u32,
) -> Result<WizardPlan, WizardError> {
    ensure_on_ladder(selected_rate)?;

    let end_date = *result
        .date_by_rate
        .get(&selected_rate)
        .ok_or(WizardError::RateNotRecommendable(selected_rate))?;

    let direction = match input.target_weight.partial_cmp(&input.current_weight) {
        Some(Ordering::Less) => CalculationGoal::Loss.sign(),
        Some(Ordering::Greater) => CalculationGoal::Gain.sign(),
        _ => 0.0,
    };

    Ok(WizardPlan {
        calorie_target: CalorieTargetPlan {
            added,
            start_date: input.start_date,
            end_date,
            target_calories: tdee + direction * selected_rate as f64,
            maximum_calories: tdee,
        },
        weight_target: WeightTargetPlan {
            added,
            start_date: input.start_date,
            end_date,
            initial_weight: input.current_weight,
            target_weight: input.target_weight,
        },
    })
}

/// Build the plan for a fixed target date at the selected rate
///
/// Only rates that survived the recommendation filter can be selected.
pub fn plan_for_target_date(
    added: NaiveDate,
    tdee: f64,
    input: &WizardTargetDateInput,
    result: &WizardTargetDateResult,
    selected_rate: u32,
) -> Result<WizardPlan, WizardError> {
    ensure_on_ladder(selected_rate)?;

    let outcome = result
        .result_by_rate
        .get(&selected_rate)
        .ok_or(WizardError::RateNotRecommendable(selected_rate))?;

    Ok(WizardPlan {
        calorie_target: CalorieTargetPlan {
            added,
            start_date: input.start_date,
            end_date: input.target_date,
            target_calories: tdee + input.calculation_goal.sign() * selected_rate as f64,
            maximum_calories: tdee,
        },
        weight_target: WeightTargetPlan {
            added,
            start_date: input.start_date,
            end_date: input.target_date,
            initial_weight: input.current_weight,
            target_weight: outcome.target_weight,
        },
    })
}
