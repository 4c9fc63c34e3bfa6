use tracing::debug;

use crate::calculator::constants::{BMI_NORMAL_MIN, BMI_OBESE_MIN, BMI_OVERWEIGHT_MIN};
use crate::error::{HealthError, Result};
use crate::models::{is_positive, BmiCategory, BmiResult};

/// Round a float to n decimal places.
///
/// Goes through the fixed-point formatter so the result always matches what
/// `{:.n}` prints: exact ties round to even (22.125 -> 22.12).
pub fn round_to(value: f64, decimals: u32) -> f64 {
    format!("{:.*}", decimals as usize, value)
        .parse()
        .unwrap_or(value)
}

/// Classify an (unrounded) BMI value.
pub fn classify_bmi(value: f64) -> BmiCategory {
    if value < BMI_NORMAL_MIN {
        BmiCategory::Underweight
    } else if value < BMI_OVERWEIGHT_MIN {
        BmiCategory::Normal
    } else if value < BMI_OBESE_MIN {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// Compute BMI from weight and height.
///
/// Formula: weight(kg) / height(m)². Both inputs must be finite and positive.
/// The category is taken from the unrounded value so that e.g. 24.996 stays
/// Normal even though it displays as 25.00.
pub fn compute_bmi(weight_kg: f64, height_cm: f64) -> Result<BmiResult> {
    if !is_positive(weight_kg) {
        return Err(HealthError::InvalidMeasurement(format!(
            "weight must be positive, got {} kg",
            weight_kg
        )));
    }
    if !is_positive(height_cm) {
        return Err(HealthError::InvalidMeasurement(format!(
            "height must be positive, got {} cm",
            height_cm
        )));
    }

    let height_m = height_cm / 100.0;
    let value = weight_kg / (height_m * height_m);
    let category = classify_bmi(value);

    debug!(weight_kg, height_cm, bmi = value, category = %category, "computed BMI");
    Ok(BmiResult::new(value, category))
}
