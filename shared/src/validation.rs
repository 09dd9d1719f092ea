//! Input validation helpers
//!
//! Range rules live as `validator` derives on the input types in
//! [`crate::types`]. This module flattens their errors into per-field
//! messages and adds the date checks the derives cannot express.

use chrono::NaiveDate;
use validator::ValidationErrors;

// ============================================================================
// User-Friendly Field Labels
// ============================================================================

/// Map wire field names to user-friendly display labels
pub fn get_field_display_label(field_name: &str) -> &str {
    match field_name {
        "age" => "Age",
        "sex" => "Sex",
        "weight" | "currentWeight" => "Current Weight",
        "targetWeight" => "Target Weight",
        "height" => "Height",
        "activityLevel" => "Activity Level",
        "weeklyDifference" => "Weekly Difference",
        "calculationGoal" => "Goal",
        "startDate" => "Start Date",
        "targetDate" => "Target Date",
        "selectedRate" => "Rate",
        "tdee" => "TDEE",
        _ => field_name,
    }
}

/// Convert a Rust field name (`weekly_difference`) to its wire name (`weeklyDifference`)
pub fn to_camel_case(field_name: &str) -> String {
    let mut out = String::with_capacity(field_name.len());
    let mut upper_next = false;

    for c in field_name.chars() {
        if c == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }

    out
}

/// Default message for a validation code
fn message_for_code(code: &str) -> &'static str {
    match code {
        "validation.wizard.age" => "Please enter an age between 18 and 99.",
        "validation.wizard.weight" => "Please enter a weight between 30kg and 300kg.",
        "validation.wizard.height" => "Please enter a height between 100cm and 220cm.",
        "validation.wizard.weekly_difference" => "Please choose a weekly difference between 0 and 7.",
        "validation.wizard.activity_level" => "Please enter a valid activity level.",
        "validation.wizard.target_date" => "Your target date must lie after the start date.",
        "validation.wizard.start_date" => "Your start date lies in the past.",
        "validation.wizard.horizon" => "Your target date lies too far in the future.",
        "validation.wizard.start_date_horizon" => "Your start date lies too far in the future.",
        "validation.wizard.tdee" => "Please enter a TDEE between 500 and 10000 kcal.",
        _ => "Invalid value.",
    }
}

/// Validation error with field context
#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    pub field: String,
    pub code: String,
    pub message: String,
    pub display_label: String,
}

impl FieldError {
    pub fn new(field: &str, code: &str) -> Self {
        Self {
            field: field.to_string(),
            code: code.to_string(),
            message: message_for_code(code).to_string(),
            display_label: get_field_display_label(field).to_string(),
        }
    }

    /// Format as user-friendly error message
    pub fn user_message(&self) -> String {
        format!("{}: {}", self.display_label, self.message)
    }
}

/// Flatten `validator` errors into field errors, ordered by field name
pub fn collect_field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut collected: Vec<FieldError> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            let field = to_camel_case(&field.to_string());
            errs.iter()
                .map(|err| FieldError::new(&field, &err.code))
                .collect::<Vec<_>>()
        })
        .collect();

    collected.sort_by(|a, b| a.field.cmp(&b.field));
    collected
}

// ============================================================================
// Date Validation
// ============================================================================

/// Validate a projection horizon
///
/// The target must lie strictly after the start and at most `max_days` later.
pub fn validate_date_range(
    start: NaiveDate,
    target: NaiveDate,
    max_days: i64,
) -> Result<(), FieldError> {
    let days = (target - start).num_days();

    if days <= 0 {
        return Err(FieldError::new("targetDate", "validation.wizard.target_date"));
    }
    if days > max_days {
        return Err(FieldError::new("targetDate", "validation.wizard.horizon"));
    }
    Ok(())
}

/// Validate that a start date is not before `today`
pub fn validate_not_in_past(start: NaiveDate, today: NaiveDate) -> Result<(), FieldError> {
    if start < today {
        return Err(FieldError::new("startDate", "validation.wizard.start_date"));
    }
    Ok(())
}

/// Validate that a start date lies at most `max_days` after `today`
pub fn validate_start_within_horizon(
    start: NaiveDate,
    today: NaiveDate,
    max_days: i64,
) -> Result<(), FieldError> {
    if (start - today).num_days() > max_days {
        return Err(FieldError::new("startDate", "validation.wizard.start_date_horizon"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::energy::ActivityLevel;
    use crate::types::{
        CalculationGoal, CalculationSex, WizardInput, WizardTargetDateInput,
        WizardTargetWeightInput,
    };
    use proptest::prelude::*;
    use validator::Validate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("weekly_difference"), "weeklyDifference");
        assert_eq!(to_camel_case("current_weight"), "currentWeight");
        assert_eq!(to_camel_case("age"), "age");
    }

    #[test]
    fn test_wizard_input_validation_errors() {
        let invalid = WizardInput {
            age: 13,
            sex: CalculationSex::Female,
            weight: 20.0,
            height: 340.0,
            activity_level: ActivityLevel::Moderate,
            weekly_difference: 8,
            calculation_goal: CalculationGoal::Loss,
        };

        let errors = collect_field_errors(&invalid.validate().unwrap_err());
        let pairs: Vec<(&str, &str)> = errors
            .iter()
            .map(|e| (e.field.as_str(), e.code.as_str()))
            .collect();

        assert_eq!(
            pairs,
            vec![
                ("age", "validation.wizard.age"),
                ("height", "validation.wizard.height"),
                ("weeklyDifference", "validation.wizard.weekly_difference"),
                ("weight", "validation.wizard.weight"),
            ]
        );
    }

    #[test]
    fn test_valid_wizard_input_passes() {
        let input = WizardInput {
            age: 30,
            sex: CalculationSex::Male,
            weight: 90.0,
            height: 180.0,
            activity_level: ActivityLevel::Moderate,
            weekly_difference: 5,
            calculation_goal: CalculationGoal::Loss,
        };

        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_target_weight_validation_errors() {
        let invalid = WizardTargetWeightInput {
            age: 100,
            sex: CalculationSex::Male,
            current_weight: 300.1,
            height: 220.1,
            target_weight: 29.9,
            start_date: date(2024, 6, 1),
        };

        let errors = collect_field_errors(&invalid.validate().unwrap_err());
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();

        assert_eq!(fields, vec!["age", "currentWeight", "height", "targetWeight"]);
        assert_eq!(errors[1].code, "validation.wizard.weight");
        assert_eq!(errors[3].code, "validation.wizard.weight");
    }

    #[test]
    fn test_target_date_validation_errors() {
        let invalid = WizardTargetDateInput {
            age: 100,
            sex: CalculationSex::Female,
            current_weight: 29.9,
            height: 99.9,
            calculation_goal: CalculationGoal::Gain,
            start_date: date(2024, 5, 1),
            target_date: date(2024, 6, 1),
        };

        let errors = collect_field_errors(&invalid.validate().unwrap_err());
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();

        assert_eq!(fields, vec!["age", "currentWeight", "height"]);
    }

    #[test]
    fn test_validate_date_range() {
        let start = date(2024, 5, 1);

        assert!(validate_date_range(start, date(2024, 5, 2), 3650).is_ok());
        assert_eq!(
            validate_date_range(start, start, 3650).unwrap_err().code,
            "validation.wizard.target_date"
        );
        assert_eq!(
            validate_date_range(start, date(2024, 4, 1), 3650).unwrap_err().code,
            "validation.wizard.target_date"
        );
        assert_eq!(
            validate_date_range(start, date(2030, 5, 1), 365).unwrap_err().code,
            "validation.wizard.horizon"
        );
    }

    #[test]
    fn test_validate_not_in_past() {
        let today = date(2024, 5, 1);
        assert!(validate_not_in_past(today, today).is_ok());
        assert!(validate_not_in_past(date(2024, 6, 1), today).is_ok());
        assert!(validate_not_in_past(date(2024, 4, 30), today).is_err());
    }

    #[test]
    fn test_validate_start_within_horizon() {
        let today = date(2024, 5, 1);
        assert!(validate_start_within_horizon(today, today, 365).is_ok());
        assert!(validate_start_within_horizon(date(2025, 5, 1), today, 365).is_ok());
        assert!(validate_start_within_horizon(date(2020, 1, 1), today, 365).is_ok());

        let err = validate_start_within_horizon(date(2025, 5, 2), today, 365).unwrap_err();
        assert_eq!(err.field, "startDate");
        assert_eq!(err.code, "validation.wizard.start_date_horizon");

        assert!(validate_start_within_horizon(NaiveDate::MAX, today, 3650).is_err());
    }

    #[test]
    fn test_field_error_user_message() {
        let err = FieldError::new("currentWeight", "validation.wizard.weight");
        assert_eq!(err.display_label, "Current Weight");
        assert_eq!(
            err.user_message(),
            "Current Weight: Please enter a weight between 30kg and 300kg."
        );
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_valid_weight_range(weight in 30.0f64..=300.0) {
            let input = WizardInput {
                age: 30,
                sex: CalculationSex::Male,
                weight,
                height: 175.0,
                activity_level: ActivityLevel::Sedentary,
                weekly_difference: 0,
                calculation_goal: CalculationGoal::Loss,
            };
            prop_assert!(input.validate().is_ok());
        }

        #[test]
        fn prop_invalid_age_rejected(age in prop_oneof![0i32..18, 100i32..150]) {
            let input = WizardInput {
                age,
                sex: CalculationSex::Female,
                weight: 60.0,
                height: 165.0,
                activity_level: ActivityLevel::Sedentary,
                weekly_difference: 0,
                calculation_goal: CalculationGoal::Gain,
            };
            let errors = collect_field_errors(&input.validate().unwrap_err());
            prop_assert_eq!(errors.len(), 1);
            prop_assert_eq!(errors[0].field.as_str(), "age");
        }
    }
}
