//! Calorie Wizard WASM Module
//!
//! Runs the wizard engine in the browser so the client can preview
//! results without a round trip. Structured inputs and outputs cross the
//! boundary as JSON strings using the same wire format as the HTTP API.
//! Inputs are range checked with the same rules the HTTP API applies.

use calorie_wizard_shared::validation::{collect_field_errors, FieldError};
use calorie_wizard_shared::{
    bmi, energy, wizard, ActivityLevel, CalculationSex, WizardInput, WizardTargetDateInput,
    WizardTargetWeightInput,
};
use serde::{de::DeserializeOwned, Serialize};
use validator::Validate;
use wasm_bindgen::prelude::*;

fn run_json<I, O, F>(input_json: &str, f: F) -> Result<String, String>
where
    I: DeserializeOwned + Validate,
    O: Serialize,
    F: FnOnce(&I) -> Result<O, String>,
{
    let input: I = serde_json::from_str(input_json).map_err(|e| e.to_string())?;
    input.validate().map_err(|e| {
        collect_field_errors(&e)
            .iter()
            .map(FieldError::user_message)
            .collect::<Vec<_>>()
            .join(" ")
    })?;
    let output = f(&input)?;
    serde_json::to_string(&output).map_err(|e| e.to_string())
}

fn calculate_json(input_json: &str) -> Result<String, String> {
    run_json(input_json, |input: &WizardInput| {
        wizard::calculate(input).map_err(|e| e.to_string())
    })
}

fn target_weight_json(input_json: &str) -> Result<String, String> {
    run_json(input_json, |input: &WizardTargetWeightInput| {
        wizard::calculate_for_target_weight(input).map_err(|e| e.to_string())
    })
}

fn target_date_json(input_json: &str) -> Result<String, String> {
    run_json(input_json, |input: &WizardTargetDateInput| {
        wizard::calculate_for_target_date(input).map_err(|e| e.to_string())
    })
}

/// Run the TDEE wizard on a JSON `WizardInput`
#[wasm_bindgen(js_name = calculateWizard)]
pub fn calculate_wizard(input_json: &str) -> Result<String, JsValue> {
    calculate_json(input_json).map_err(|e| JsValue::from_str(&e))
}

/// Project completion dates for a JSON `WizardTargetWeightInput`
#[wasm_bindgen(js_name = calculateForTargetWeight)]
pub fn calculate_for_target_weight(input_json: &str) -> Result<String, JsValue> {
    target_weight_json(input_json).map_err(|e| JsValue::from_str(&e))
}

/// Project reachable weights for a JSON `WizardTargetDateInput`
#[wasm_bindgen(js_name = calculateForTargetDate)]
pub fn calculate_for_target_date(input_json: &str) -> Result<String, JsValue> {
    target_date_json(input_json).map_err(|e| JsValue::from_str(&e))
}

/// Calculate BMI from weight (kg) and height (cm), rounded to a whole number
#[wasm_bindgen]
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    if height_cm <= 0.0 {
        return 0.0;
    }
    bmi::calculate_bmi(weight_kg, height_cm).round()
}

/// Calculate TDEE (Total Daily Energy Expenditure)
///
/// Returns `NaN` for an activity multiplier off the supported ladder.
#[wasm_bindgen]
pub fn calculate_tdee(
    weight_kg: f64,
    height_cm: f64,
    age_years: i32,
    is_male: bool,
    activity_multiplier: f64,
) -> f64 {
    let Ok(activity_level) = ActivityLevel::try_from(activity_multiplier) else {
        return f64::NAN;
    };
    let sex = if is_male {
        CalculationSex::Male
    } else {
        CalculationSex::Female
    };

    let bmr = energy::calculate_bmr(sex, weight_kg, height_cm, age_years);
    energy::calculate_tdee(bmr, activity_level)
}
