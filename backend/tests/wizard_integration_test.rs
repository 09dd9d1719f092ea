//! Integration tests for the wizard endpoints

mod common;

use axum::http::StatusCode;
use calorie_wizard_backend::config::AppConfig;
use chrono::{Duration, Utc};
use serde_json::json;

/// Date `offset` days from today, as it appears on the wire
fn day(offset: i64) -> String {
    (Utc::now().date_naive() + Duration::days(offset))
        .format("%Y-%m-%d")
        .to_string()
}

fn target_weight_input(start_date: &str) -> serde_json::Value {
    json!({
        "age": 30,
        "sex": "MALE",
        "currentWeight": 100.0,
        "height": 170.0,
        "targetWeight": 83.0,
        "startDate": start_date
    })
}

fn male_loss_input() -> serde_json::Value {
    json!({
        "age": 30,
        "sex": "MALE",
        "weight": 90.0,
        "height": 180.0,
        "activityLevel": 1.5,
        "weeklyDifference": 5,
        "calculationGoal": "LOSS"
    })
}

// ============================================================================
// calculate
// ============================================================================

#[tokio::test]
async fn test_calculate_weight_loss() {
    let app = common::TestApp::new();

    let (status, body) = app.post_json("/api/v1/wizard/calculate", male_loss_input()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["bmr"], 1995.0);
    assert_eq!(body["tdee"], 2992.0);
    assert_eq!(body["deficit"], 500.0);
    assert_eq!(body["target"], 2492.0);
    assert_eq!(body["bmi"], 28.0);
    assert_eq!(body["bmiCategory"], "Overweight");
    assert_eq!(body["recommendation"], "LOSE");
    assert_eq!(body["targetBmi"], json!({ "lower": 20, "upper": 25 }));
    assert_eq!(body["targetWeight"], 73.0);
    assert_eq!(body["durationDays"], 238);
}

#[tokio::test]
async fn test_calculate_by_path() {
    let app = common::TestApp::new();

    let (status, body) = app
        .get("/api/v1/wizard/calculate/25/FEMALE/52/155/1.25/1/GAIN")
        .await;

    assert_eq!(status, StatusCode::OK);
    let body: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body["bmr"], 1316.0);
    assert_eq!(body["tdee"], 1645.0);
    assert_eq!(body["target"], 1745.0);
    assert_eq!(body["recommendation"], "GAIN");
}

#[tokio::test]
async fn test_calculate_by_path_rejects_unknown_activity_level() {
    let app = common::TestApp::new();

    let (status, body) = app
        .get("/api/v1/wizard/calculate/25/FEMALE/52/155/1.3/1/GAIN")
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("activityLevel"));
}

#[tokio::test]
async fn test_calculate_validation_envelope() {
    let app = common::TestApp::new();
    let mut input = male_loss_input();
    input["age"] = json!(12);
    input["height"] = json!(250.0);

    let (status, body) = app.post_json("/api/v1/wizard/calculate", input).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    let details = body["error"]["details"].as_array().unwrap();
    assert_eq!(details.len(), 2);
    assert_eq!(details[0]["field"], "age");
    assert_eq!(details[0]["code"], "validation.wizard.age");
    assert_eq!(details[1]["field"], "height");
}

#[tokio::test]
async fn test_calculate_malformed_body() {
    let app = common::TestApp::new();

    let (status, body) = app.post("/api/v1/wizard/calculate", r#"{"age": 30"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("BAD_REQUEST"));
}

// ============================================================================
// target weight
// ============================================================================

#[tokio::test]
async fn test_target_weight_dates() {
    let app = common::TestApp::new();

    let (status, body) = app
        .post_json("/api/v1/wizard/target-weight", target_weight_input(&day(0)))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["dateByRate"]["500"], day(238));
    assert_eq!(body["dateByRate"].as_object().unwrap().len(), 7);
    assert_eq!(body["progressByRate"]["700"], 0.7);
    assert_eq!(body["targetClassification"], "Overweight");
    assert_eq!(body["warning"], false);
    assert_eq!(body["message"], "");
}

#[tokio::test]
async fn test_target_weight_warns_on_extreme_category() {
    let app = common::TestApp::new();

    let (status, body) = app
        .post_json(
            "/api/v1/wizard/target-weight",
            json!({
                "age": 30,
                "sex": "FEMALE",
                "currentWeight": 60.0,
                "height": 170.0,
                "targetWeight": 50.0,
                "startDate": day(0)
            }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["targetClassification"], "Underweight");
    assert_eq!(body["warning"], true);
    assert_eq!(
        body["message"],
        "Your target weight will classify you as underweight. You should revisit your choice."
    );
    assert_eq!(body["dateByRate"].as_object().unwrap().len(), 7);
}

#[tokio::test]
async fn test_target_weight_rejects_yesterday_by_default() {
    let app = common::TestApp::new();

    let (status, body) = app
        .post_json("/api/v1/wizard/target-weight", target_weight_input(&day(-1)))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["field"], "startDate");
    assert_eq!(body["error"]["details"][0]["code"], "validation.wizard.start_date");
}

#[tokio::test]
async fn test_target_weight_accepts_past_start_when_opted_out() {
    let mut config = AppConfig::default();
    config.wizard.reject_past_start_dates = false;
    let app = common::TestApp::with_config(config);

    let (status, body) = app
        .post_json("/api/v1/wizard/target-weight", target_weight_input("2000-01-01"))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["dateByRate"]["500"], "2000-08-26");
}

#[tokio::test]
async fn test_target_weight_rejects_far_future_start() {
    let app = common::TestApp::new();

    for start in [day(3651), "+262142-12-01".to_string()] {
        let (status, body) = app
            .post_json("/api/v1/wizard/target-weight", target_weight_input(&start))
            .await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "start {}", start);
        assert_eq!(body["error"]["field"], "startDate");
        assert_eq!(
            body["error"]["details"][0]["code"],
            "validation.wizard.start_date_horizon"
        );
    }
}

// ============================================================================
// target date
// ============================================================================

#[tokio::test]
async fn test_target_date_weight_gain() {
    let app = common::TestApp::new();

    let (status, body) = app
        .post_json(
            "/api/v1/wizard/target-date",
            json!({
                "age": 30,
                "sex": "FEMALE",
                "currentWeight": 45.0,
                "height": 155.0,
                "calculationGoal": "GAIN",
                "startDate": day(0),
                "targetDate": day(150)
            }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    let results = &body["resultByRate"];
    assert_eq!(results.as_object().unwrap().len(), 7);
    assert_eq!(results["100"]["targetWeight"], 47.0);
    assert_eq!(results["700"]["targetWeight"], 59.0);
    assert_eq!(results["700"]["bmi"], 25.0);
    assert_eq!(results["700"]["bmiCategory"], "Overweight");
}

#[tokio::test]
async fn test_target_date_empty_result_is_ok() {
    let app = common::TestApp::new();

    let (status, body) = app
        .post_json(
            "/api/v1/wizard/target-date",
            json!({
                "age": 30,
                "sex": "MALE",
                "currentWeight": 61.0,
                "height": 180.0,
                "calculationGoal": "LOSS",
                "startDate": day(0),
                "targetDate": day(365)
            }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["resultByRate"], json!({}));
}

#[tokio::test]
async fn test_target_date_rejects_non_positive_duration() {
    let app = common::TestApp::new();

    let (status, body) = app
        .post_json(
            "/api/v1/wizard/target-date",
            json!({
                "age": 30,
                "sex": "MALE",
                "currentWeight": 80.0,
                "height": 170.0,
                "calculationGoal": "LOSS",
                "startDate": day(0),
                "targetDate": day(0)
            }),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["field"], "targetDate");
    assert_eq!(body["error"]["details"][0]["code"], "validation.wizard.target_date");
}

// ============================================================================
// plans
// ============================================================================

#[tokio::test]
async fn test_plan_for_target_date() {
    let app = common::TestApp::new();

    let (status, body) = app
        .post_json(
            "/api/v1/wizard/plan/target-date",
            json!({
                "input": {
                    "age": 30,
                    "sex": "FEMALE",
                    "currentWeight": 45.0,
                    "height": 155.0,
                    "calculationGoal": "GAIN",
                    "startDate": day(0),
                    "targetDate": day(150)
                },
                "tdee": 1645.0,
                "selectedRate": 300
            }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["calorieTarget"]["targetCalories"], 1945.0);
    assert_eq!(body["calorieTarget"]["maximumCalories"], 1645.0);
    assert_eq!(body["calorieTarget"]["endDate"], day(150));
    assert_eq!(body["weightTarget"]["initialWeight"], 45.0);
    assert_eq!(body["weightTarget"]["targetWeight"], 51.0);
}

#[tokio::test]
async fn test_plan_for_target_weight_rejects_unknown_rate() {
    let app = common::TestApp::new();

    let (status, body) = app
        .post_json(
            "/api/v1/wizard/plan/target-weight",
            json!({
                "input": target_weight_input(&day(0)),
                "tdee": 2992.0,
                "selectedRate": 550
            }),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["field"], "selectedRate");
}

#[tokio::test]
async fn test_plan_for_target_weight_rejects_far_future_start() {
    let app = common::TestApp::new();

    let (status, body) = app
        .post_json(
            "/api/v1/wizard/plan/target-weight",
            json!({
                "input": target_weight_input("+262142-12-01"),
                "tdee": 2992.0,
                "selectedRate": 500
            }),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["field"], "startDate");
}

#[tokio::test]
async fn test_plan_for_unchanged_weight_keeps_maintenance_calories() {
    let app = common::TestApp::new();
    let mut input = target_weight_input(&day(0));
    input["targetWeight"] = json!(100.0);

    let (status, body) = app
        .post_json(
            "/api/v1/wizard/plan/target-weight",
            json!({ "input": input, "tdee": 2992.0, "selectedRate": 300 }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["calorieTarget"]["targetCalories"], 2992.0);
    assert_eq!(body["weightTarget"]["targetWeight"], 100.0);
}
