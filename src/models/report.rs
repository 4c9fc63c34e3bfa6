use std::fmt;

use serde::{Deserialize, Serialize};

use crate::calculator::constants::BMI_DISPLAY_DECIMALS;
use crate::calculator::round_to;
use crate::models::{Gender, Measurement};

/// BMI category, from the fixed cut-points 18.5 / 25 / 30.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// BMI value and its category.
///
/// `value` is unrounded; the category was derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BmiResult {
    value: f64,
    category: BmiCategory,
}

impl BmiResult {
    pub(crate) fn new(value: f64, category: BmiCategory) -> Self {
        Self { value, category }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn category(&self) -> BmiCategory {
        self.category
    }

    /// Value rounded to two decimals, for display and export only.
    pub fn display_value(&self) -> f64 {
        round_to(self.value, BMI_DISPLAY_DECIMALS)
    }
}

/// Where the day's intake stands against the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BalanceStatus {
    /// Calories still left before the target.
    Deficit,
    Exact,
    Exceeded,
}

/// Calories eaten against a daily target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalorieTally {
    selected_foods: Vec<String>,
    extra_calories: u32,
    eaten_total: u64,
    target: i64,
    balance: i64,
}

impl CalorieTally {
    pub(crate) fn new(
        selected_foods: Vec<String>,
        extra_calories: u32,
        eaten_total: u64,
        target: i64,
    ) -> Self {
        Self {
            selected_foods,
            extra_calories,
            eaten_total,
            target,
            balance: target.saturating_sub(eaten_total as i64),
        }
    }

    /// Selected catalog names, deduplicated, in selection order.
    pub fn selected_foods(&self) -> &[String] {
        &self.selected_foods
    }

    pub fn extra_calories(&self) -> u32 {
        self.extra_calories
    }

    pub fn eaten_total(&self) -> u64 {
        self.eaten_total
    }

    pub fn target(&self) -> i64 {
        self.target
    }

    /// `target - eaten_total`; negative once the target is exceeded.
    pub fn balance(&self) -> i64 {
        self.balance
    }

    pub fn status(&self) -> BalanceStatus {
        crate::calculator::classify_balance(self.balance)
    }

    /// Calories left before the target, floored at zero.
    pub fn remaining(&self) -> u64 {
        self.balance.max(0) as u64
    }
}

/// One day's record: who, how they measure, and what they ate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyReport {
    name: String,
    measurement: Measurement,
    gender: Gender,
    bmi: BmiResult,
    tally: CalorieTally,
}

impl DailyReport {
    pub(crate) fn new(
        name: String,
        measurement: Measurement,
        gender: Gender,
        bmi: BmiResult,
        tally: CalorieTally,
    ) -> Self {
        Self {
            name,
            measurement,
            gender,
            bmi,
            tally,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn measurement(&self) -> Measurement {
        self.measurement
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn bmi(&self) -> &BmiResult {
        &self.bmi
    }

    pub fn tally(&self) -> &CalorieTally {
        &self.tally
    }
}
