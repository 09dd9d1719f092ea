//! Wizard orchestration
//!
//! The three entry points compose the energy, BMI, rate ladder and timeline
//! modules. Inputs are expected to be validated by the caller; nothing here
//! re-checks ranges.
//!
//! Target-weight projections *flag* an extreme target but still report the
//! dates, whereas target-date projections *drop* outcomes that contradict
//! the goal.

use crate::bmi::{assess_bmi, BmiCategory, TARGET_BMI_BAND};
use crate::energy::{calculate_bmr, calculate_tdee};
use crate::errors::WizardError;
use crate::rates::RateLadder;
use crate::timeline::{credited_days, days_to_reach, delta_kg_for_duration, weekly_change_kg};
use crate::types::{
    CalculationGoal, ProjectedOutcome, WizardInput, WizardRecommendation, WizardResult,
    WizardTargetDateInput, WizardTargetDateResult, WizardTargetWeightInput,
    WizardTargetWeightResult,
};
use chrono::Duration;
use std::collections::BTreeMap;
use tracing::debug;

/// Advisory shown when the target weight lands in an extreme category
pub fn advisory_message(category: BmiCategory) -> Option<String> {
    category.is_extreme().then(|| {
        format!(
            "Your target weight will classify you as {}. You should revisit your choice.",
            category.description()
        )
    })
}

/// Calculate BMR, TDEE, daily target and time to reach the target band
pub fn calculate(input: &WizardInput) -> Result<WizardResult, WizardError> {
    debug!(?input, "wizard calculate");

    let rate = RateLadder::rate_for_index(input.weekly_difference)?;

    let bmr = calculate_bmr(input.sex, input.weight, input.height, input.age);
    let tdee = calculate_tdee(bmr, input.activity_level);
    let deficit = rate as f64;
    let target = tdee + input.calculation_goal.sign() * deficit;

    let reading = assess_bmi(input.weight, input.height);

    let target_weight = TARGET_BMI_BAND.target_weight(input.height);
    let target_weight_lower = TARGET_BMI_BAND.lower_weight(input.height);
    let target_weight_upper = TARGET_BMI_BAND.upper_weight(input.height);

    // Zero rate means maintain: no timeline to project.
    let days_at_rate =
        |goal_weight: f64| days_to_reach(input.weight - goal_weight, rate).unwrap_or(0);

    let recommendation = match (rate, input.calculation_goal) {
        (0, _) => WizardRecommendation::Hold,
        (_, CalculationGoal::Loss) => WizardRecommendation::Lose,
        (_, CalculationGoal::Gain) => WizardRecommendation::Gain,
    };

    Ok(WizardResult {
        bmr,
        tdee,
        deficit,
        target,
        bmi: reading.bmi,
        bmi_category: reading.bmi_category,
        recommendation,
        target_bmi: TARGET_BMI_BAND,
        target_weight,
        target_weight_lower,
        target_weight_upper,
        duration_days: days_at_rate(target_weight),
        duration_days_lower: days_at_rate(target_weight_lower),
        duration_days_upper: days_at_rate(target_weight_upper),
    })
}

/// Project the completion date for every ladder rate towards a fixed weight
///
/// Fails with [`WizardError::DateOutOfRange`] when a completion date would
/// fall outside the calendar range `NaiveDate` can represent.
pub fn calculate_for_target_weight(
    input: &WizardTargetWeightInput,
) -> Result<WizardTargetWeightResult, WizardError> {
    debug!(?input, "wizard calculate for target weight");

    let delta = (input.current_weight - input.target_weight).abs();

    let mut date_by_rate = BTreeMap::new();
    let mut progress_by_rate = BTreeMap::new();

    for rate in RateLadder::iter() {
        let days = days_to_reach(delta, rate).unwrap_or(0);
        let date = Duration::try_days(days)
            .and_then(|elapsed| input.start_date.checked_add_signed(elapsed))
            .ok_or(WizardError::DateOutOfRange(input.start_date))?;
        date_by_rate.insert(rate, date);
        progress_by_rate.insert(rate, weekly_change_kg(rate));
    }

    let target_classification = assess_bmi(input.target_weight, input.height).bmi_category;
    let message = advisory_message(target_classification);

    Ok(WizardTargetWeightResult {
        date_by_rate,
        progress_by_rate,
        target_classification,
        warning: message.is_some(),
        message: message.unwrap_or_default(),
    })
}

/// Project the reachable weight for every ladder rate by a fixed date
///
/// Outcomes that contradict the goal (underweight when losing, obese when
/// gaining) are removed. An empty map is a valid result.
pub fn calculate_for_target_date(
    input: &WizardTargetDateInput,
) -> Result<WizardTargetDateResult, WizardError> {
    debug!(?input, "wizard calculate for target date");

    let duration_days = (input.target_date - input.start_date).num_days();
    if duration_days <= 0 {
        return Err(WizardError::NonPositiveDuration {
            start: input.start_date,
            target: input.target_date,
        });
    }

    let days = credited_days(duration_days);
    let goal = input.calculation_goal;

    let result_by_rate = RateLadder::iter()
        .filter_map(|rate| {
            let whole_kg = delta_kg_for_duration(days, rate).trunc();
            let target_weight = (input.current_weight + goal.sign() * whole_kg).round();
            let reading = assess_bmi(target_weight, input.height);

            is_recommendable(goal, reading.bmi_category).then_some((
                rate,
                ProjectedOutcome {
                    target_weight,
                    bmi: reading.bmi,
                    bmi_category: reading.bmi_category,
                },
            ))
        })
        .collect();

    Ok(WizardTargetDateResult { result_by_rate })
}

/// Whether an outcome category is compatible with the stated goal
pub fn is_recommendable(goal: CalculationGoal, category: BmiCategory) -> bool {
    match goal {
        CalculationGoal::Loss => category != BmiCategory::Underweight,
        CalculationGoal::Gain => {
            !matches!(category, BmiCategory::Obese | BmiCategory::SeverelyObese)
        }
    }
}
