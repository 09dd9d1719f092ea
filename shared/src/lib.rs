//! Calorie Wizard Shared Library
//!
//! The wizard calculation engine: energy expenditure, BMI classification,
//! the daily rate ladder, weight timeline projections and the three wizard
//! entry points. Every function is pure; callers own validation, storage
//! and concurrency.

pub mod bmi;
pub mod energy;
pub mod errors;
pub mod plan;
pub mod rates;
pub mod timeline;
pub mod types;
pub mod validation;
pub mod wizard;

// Re-export commonly used items
pub use bmi::{BmiCategory, BmiReading, TargetBmiBand, TARGET_BMI_BAND};
pub use energy::{ActivityLevel, BmrFormula};
pub use errors::WizardError;
pub use plan::{
    CalorieTargetPlan, TargetDatePlanRequest, TargetWeightPlanRequest, WeightTargetPlan, WizardPlan,
};
pub use rates::RateLadder;
pub use types::*;
pub use wizard::{calculate, calculate_for_target_date, calculate_for_target_weight};
