//! Wizard service
//!
//! Validates wizard requests, runs the engine and records metrics.
//! `today` is passed in by the caller so date rules stay testable.

use crate::config::WizardConfig;
use crate::error::ApiError;
use crate::telemetry;
use calorie_wizard_shared::plan::{
    plan_for_target_date, plan_for_target_weight, TargetDatePlanRequest, TargetWeightPlanRequest,
    WizardPlan,
};
use calorie_wizard_shared::validation::{
    collect_field_errors, validate_date_range, validate_not_in_past,
    validate_start_within_horizon, FieldError,
};
use calorie_wizard_shared::{
    wizard, WizardError, WizardInput, WizardResult, WizardTargetDateInput,
    WizardTargetDateResult, WizardTargetWeightInput, WizardTargetWeightResult,
};
use chrono::NaiveDate;
use tracing::{info, warn};
use validator::{Validate, ValidationErrors};

const OP_CALCULATE: &str = "calculate";
const OP_TARGET_WEIGHT: &str = "target_weight";
const OP_TARGET_DATE: &str = "target_date";
const OP_PLAN_TARGET_WEIGHT: &str = "plan_target_weight";
const OP_PLAN_TARGET_DATE: &str = "plan_target_date";

/// Wizard service for the calculation endpoints
pub struct WizardService;

impl WizardService {
    /// Run the TDEE calculation
    pub fn calculate(input: &WizardInput) -> Result<WizardResult, ApiError> {
        reject_invalid(OP_CALCULATE, field_errors(input.validate()))?;

        let result = wizard::calculate(input).map_err(|e| engine_error(OP_CALCULATE, e))?;

        telemetry::record_calculation(OP_CALCULATE);
        info!(
            operation = OP_CALCULATE,
            tdee = result.tdee,
            target = result.target,
            "Wizard calculation complete"
        );
        Ok(result)
    }

    /// Project completion dates towards a fixed target weight
    pub fn calculate_for_target_weight(
        config: &WizardConfig,
        input: &WizardTargetWeightInput,
        today: NaiveDate,
    ) -> Result<WizardTargetWeightResult, ApiError> {
        let mut errors = field_errors(input.validate());
        errors.extend(start_date_errors(config, input.start_date, today));
        reject_invalid(OP_TARGET_WEIGHT, errors)?;

        let result = wizard::calculate_for_target_weight(input)
            .map_err(|e| engine_error(OP_TARGET_WEIGHT, e))?;

        telemetry::record_calculation(OP_TARGET_WEIGHT);
        if result.warning {
            warn!(
                category = ?result.target_classification,
                "Target weight lands in an extreme BMI category"
            );
        }
        Ok(result)
    }

    /// Project reachable weights by a fixed target date
    pub fn calculate_for_target_date(
        config: &WizardConfig,
        input: &WizardTargetDateInput,
        today: NaiveDate,
    ) -> Result<WizardTargetDateResult, ApiError> {
        reject_invalid(OP_TARGET_DATE, target_date_errors(config, input, today))?;

        let result =
            wizard::calculate_for_target_date(input).map_err(|e| engine_error(OP_TARGET_DATE, e))?;

        telemetry::record_calculation(OP_TARGET_DATE);
        telemetry::record_target_date_options(result.result_by_rate.len());
        info!(
            operation = OP_TARGET_DATE,
            options = result.result_by_rate.len(),
            "Wizard calculation complete"
        );
        Ok(result)
    }

    /// Build the stored plan for a target-weight projection
    pub fn plan_for_target_weight(
        config: &WizardConfig,
        req: &TargetWeightPlanRequest,
        today: NaiveDate,
    ) -> Result<WizardPlan, ApiError> {
        let mut errors = field_errors(req.input.validate());
        errors.extend(field_errors(req.validate()));
        errors.extend(start_date_errors(config, req.input.start_date, today));
        reject_invalid(OP_PLAN_TARGET_WEIGHT, errors)?;

        let result = wizard::calculate_for_target_weight(&req.input)
            .map_err(|e| engine_error(OP_PLAN_TARGET_WEIGHT, e))?;
        let plan = plan_for_target_weight(today, req.tdee, &req.input, &result, req.selected_rate)
            .map_err(|e| engine_error(OP_PLAN_TARGET_WEIGHT, e))?;

        telemetry::record_calculation(OP_PLAN_TARGET_WEIGHT);
        Ok(plan)
    }

    /// Build the stored plan for a target-date projection
    pub fn plan_for_target_date(
        config: &WizardConfig,
        req: &TargetDatePlanRequest,
        today: NaiveDate,
    ) -> Result<WizardPlan, ApiError> {
        let mut errors = target_date_errors(config, &req.input, today);
        errors.extend(field_errors(req.validate()));
        reject_invalid(OP_PLAN_TARGET_DATE, errors)?;

        let result = wizard::calculate_for_target_date(&req.input)
            .map_err(|e| engine_error(OP_PLAN_TARGET_DATE, e))?;
        let plan = plan_for_target_date(today, req.tdee, &req.input, &result, req.selected_rate)
            .map_err(|e| engine_error(OP_PLAN_TARGET_DATE, e))?;

        telemetry::record_calculation(OP_PLAN_TARGET_DATE);
        Ok(plan)
    }
}

fn field_errors(result: Result<(), ValidationErrors>) -> Vec<FieldError> {
    result
        .err()
        .map(|errors| collect_field_errors(&errors))
        .unwrap_or_default()
}

fn start_date_errors(config: &WizardConfig, start: NaiveDate, today: NaiveDate) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if config.reject_past_start_dates {
        errors.extend(validate_not_in_past(start, today).err());
    }
    errors.extend(validate_start_within_horizon(start, today, config.max_target_days).err());
    errors
}

fn target_date_errors(
    config: &WizardConfig,
    input: &WizardTargetDateInput,
    today: NaiveDate,
) -> Vec<FieldError> {
    let mut errors = field_errors(input.validate());
    errors.extend(start_date_errors(config, input.start_date, today));
    if let Err(err) = validate_date_range(input.start_date, input.target_date, config.max_target_days)
    {
        errors.push(err);
    }
    errors
}

fn reject_invalid(operation: &'static str, errors: Vec<FieldError>) -> Result<(), ApiError> {
    if errors.is_empty() {
        return Ok(());
    }

    telemetry::record_validation_failure(operation);
    warn!(
        operation,
        fields = ?errors.iter().map(|e| e.field.as_str()).collect::<Vec<_>>(),
        "Wizard request rejected"
    );
    Err(ApiError::InvalidFields(errors))
}

fn engine_error(operation: &'static str, err: WizardError) -> ApiError {
    telemetry::record_validation_failure(operation);
    warn!(operation, error = %err, "Wizard engine rejected request");
    err.into()
}
