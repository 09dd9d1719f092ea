//! Wizard API routes

use crate::error::ApiResult;
use crate::services::WizardService;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, rejection::PathRejection, Path, State},
    routing::{get, post},
    Json, Router,
};
use calorie_wizard_shared::{
    ActivityLevel, CalculationGoal, CalculationSex, TargetDatePlanRequest, TargetWeightPlanRequest,
    WizardInput, WizardPlan, WizardResult, WizardTargetDateInput, WizardTargetDateResult,
    WizardTargetWeightInput, WizardTargetWeightResult,
};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;

/// Create wizard routes
pub fn wizard_routes() -> Router<AppState> {
    Router::new()
        .route("/calculate", post(calculate))
        .route(
            "/calculate/:age/:sex/:weight/:height/:activity_level/:weekly_difference/:goal",
            get(calculate_from_path),
        )
        .route("/target-weight", post(calculate_for_target_weight))
        .route("/target-date", post(calculate_for_target_date))
        .route("/plan/target-weight", post(plan_for_target_weight))
        .route("/plan/target-date", post(plan_for_target_date))
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Path segments of the GET calculate route
#[derive(Debug, Deserialize)]
struct CalculatePath {
    age: i32,
    sex: CalculationSex,
    weight: f64,
    height: f64,
    activity_level: f64,
    weekly_difference: i32,
    goal: CalculationGoal,
}

/// POST /api/v1/wizard/calculate - BMR, TDEE and daily target
async fn calculate(
    payload: Result<Json<WizardInput>, JsonRejection>,
) -> ApiResult<Json<WizardResult>> {
    let Json(input) = payload?;
    Ok(Json(WizardService::calculate(&input)?))
}

/// GET /api/v1/wizard/calculate/{age}/{sex}/{weight}/{height}/{activityLevel}/{weeklyDifference}/{goal}
///
/// Same calculation as the POST route, addressed entirely by path.
async fn calculate_from_path(
    path: Result<Path<CalculatePath>, PathRejection>,
) -> ApiResult<Json<WizardResult>> {
    let Path(params) = path?;

    let input = WizardInput {
        age: params.age,
        sex: params.sex,
        weight: params.weight,
        height: params.height,
        activity_level: ActivityLevel::try_from(params.activity_level)?,
        weekly_difference: params.weekly_difference,
        calculation_goal: params.goal,
    };

    Ok(Json(WizardService::calculate(&input)?))
}

/// POST /api/v1/wizard/target-weight - Completion date per rate
async fn calculate_for_target_weight(
    State(state): State<AppState>,
    payload: Result<Json<WizardTargetWeightInput>, JsonRejection>,
) -> ApiResult<Json<WizardTargetWeightResult>> {
    let Json(input) = payload?;
    let result =
        WizardService::calculate_for_target_weight(&state.config().wizard, &input, today())?;
    Ok(Json(result))
}

/// POST /api/v1/wizard/target-date - Reachable weight per rate
async fn calculate_for_target_date(
    State(state): State<AppState>,
    payload: Result<Json<WizardTargetDateInput>, JsonRejection>,
) -> ApiResult<Json<WizardTargetDateResult>> {
    let Json(input) = payload?;
    let result = WizardService::calculate_for_target_date(&state.config().wizard, &input, today())?;
    Ok(Json(result))
}

/// POST /api/v1/wizard/plan/target-weight - Calorie and weight targets for one rate
async fn plan_for_target_weight(
    State(state): State<AppState>,
    payload: Result<Json<TargetWeightPlanRequest>, JsonRejection>,
) -> ApiResult<Json<WizardPlan>> {
    let Json(req) = payload?;
    let plan = WizardService::plan_for_target_weight(&state.config().wizard, &req, today())?;
    Ok(Json(plan))
}

/// POST /api/v1/wizard/plan/target-date - Calorie and weight targets for one rate
async fn plan_for_target_date(
    State(state): State<AppState>,
    payload: Result<Json<TargetDatePlanRequest>, JsonRejection>,
) -> ApiResult<Json<WizardPlan>> {
    let Json(req) = payload?;
    let plan = WizardService::plan_for_target_date(&state.config().wizard, &req, today())?;
    Ok(Json(plan))
}
