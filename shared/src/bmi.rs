//! BMI calculation and classification
//!
//! Display values are rounded to whole numbers, and classification is
//! always applied to the rounded value.

use serde::{Deserialize, Serialize};

/// BMI category classification
///
/// Standard clinical bands; the thresholds are fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BmiCategory {
    Underweight,
    StandardWeight,
    Overweight,
    Obese,
    SeverelyObese,
}

impl BmiCategory {
    /// Get the BMI range for this category (lower inclusive, upper exclusive)
    pub fn range(&self) -> (f64, f64) {
        match self {
            BmiCategory::Underweight => (0.0, 18.5),
            BmiCategory::StandardWeight => (18.5, 25.0),
            BmiCategory::Overweight => (25.0, 30.0),
            BmiCategory::Obese => (30.0, 35.0),
            BmiCategory::SeverelyObese => (35.0, f64::INFINITY),
        }
    }

    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "underweight",
            BmiCategory::StandardWeight => "standard weight",
            BmiCategory::Overweight => "overweight",
            BmiCategory::Obese => "obese",
            BmiCategory::SeverelyObese => "severely obese",
        }
    }

    /// Categories that trigger a warning when chosen as a target
    pub fn is_extreme(&self) -> bool {
        matches!(
            self,
            BmiCategory::Underweight | BmiCategory::Obese | BmiCategory::SeverelyObese
        )
    }
}

/// Calculate raw BMI from weight and height
///
/// Formula: BMI = weight(kg) / height(m)²
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Classify BMI into category
pub fn classify_bmi(bmi: f64) -> BmiCategory {
    if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 25.0 {
        BmiCategory::StandardWeight
    } else if bmi < 30.0 {
        BmiCategory::Overweight
    } else if bmi < 35.0 {
        BmiCategory::Obese
    } else {
        BmiCategory::SeverelyObese
    }
}

/// Rounded BMI together with its category
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BmiReading {
    pub bmi: f64,
    pub bmi_category: BmiCategory,
}

/// Round the BMI for the given weight and height, then classify it
pub fn assess_bmi(weight_kg: f64, height_cm: f64) -> BmiReading {
    let bmi = calculate_bmi(weight_kg, height_cm).round();

    BmiReading {
        bmi,
        bmi_category: classify_bmi(bmi),
    }
}

// ============================================================================
// Target Band
// ============================================================================

/// The healthy target sub-band used to derive a single target weight
///
/// Narrower than the standard-weight category and independent of every input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetBmiBand {
    pub lower: i32,
    pub upper: i32,
}

pub const TARGET_BMI_BAND: TargetBmiBand = TargetBmiBand { lower: 20, upper: 25 };

impl TargetBmiBand {
    pub fn midpoint(&self) -> f64 {
        (self.lower + self.upper) as f64 / 2.0
    }

    /// Target weight at the band midpoint, rounded to whole kg
    pub fn target_weight(&self, height_cm: f64) -> f64 {
        weight_for_bmi(self.midpoint(), height_cm).round()
    }

    pub fn lower_weight(&self, height_cm: f64) -> f64 {
        weight_for_bmi(self.lower as f64, height_cm).round()
    }

    pub fn upper_weight(&self, height_cm: f64) -> f64 {
        weight_for_bmi(self.upper as f64, height_cm).round()
    }
}

/// Weight (kg) that yields the given BMI at the given height
pub fn weight_for_bmi(bmi: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    bmi * height_m * height_m
}
