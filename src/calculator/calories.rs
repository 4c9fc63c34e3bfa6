use tracing::{debug, warn};

use crate::calculator::constants::{DEFAULT_TARGET_FEMALE, DEFAULT_TARGET_MALE};
use crate::error::{HealthError, Result};
use crate::models::{BalanceStatus, CalorieTally, FoodCatalog, Gender};

/// Default daily calorie target for a gender.
pub fn default_target(gender: Gender) -> i64 {
    match gender {
        Gender::Male => DEFAULT_TARGET_MALE,
        Gender::Female => DEFAULT_TARGET_FEMALE,
    }
}

/// Classify a calorie balance (`target - eaten`).
pub fn classify_balance(balance: i64) -> BalanceStatus {
    match balance {
        b if b > 0 => BalanceStatus::Deficit,
        0 => BalanceStatus::Exact,
        _ => BalanceStatus::Exceeded,
    }
}

/// Tally calories for the selected foods plus any extra calories.
///
/// Every selection must be a catalog name; the first unknown name fails the
/// whole tally. Repeated selections count once.
pub fn compute_calorie_tally<S: AsRef<str>>(
    catalog: &FoodCatalog,
    selected_foods: &[S],
    extra_calories: u32,
    target: i64,
) -> Result<CalorieTally> {
    let mut selected: Vec<String> = Vec::with_capacity(selected_foods.len());
    let mut food_total: u64 = 0;

    for name in selected_foods {
        let name = name.as_ref();
        let calories = catalog.calories(name).ok_or_else(|| {
            warn!(food = name, "selected food is not in the catalog");
            HealthError::UnknownFoodItem(name.to_string())
        })?;

        if selected.iter().any(|s| s == name) {
            continue;
        }
        selected.push(name.to_string());
        food_total += u64::from(calories);
    }

    let eaten_total = food_total + u64::from(extra_calories);
    let tally = CalorieTally::new(selected, extra_calories, eaten_total, target);

    debug!(
        foods = tally.selected_foods().len(),
        extra_calories,
        eaten_total,
        target,
        balance = tally.balance(),
        "computed calorie tally"
    );
    Ok(tally)
}
