use dialoguer::{Confirm, Input, MultiSelect, Select};

use crate::calculator::{default_target, ReportDraft};
use crate::error::{HealthError, Result};
use crate::models::{is_positive, FoodCatalog, Gender};

/// Prompt for the user's name. May be left blank.
pub fn prompt_name() -> Result<Option<String>> {
    let input: String = Input::new()
        .with_prompt("Enter your name")
        .allow_empty(true)
        .interact_text()?;

    let input = input.trim();
    Ok((!input.is_empty()).then(|| input.to_string()))
}

/// Prompt for a positive measurement, e.g. weight in kg.
pub fn prompt_measurement(prompt: &str) -> Result<f64> {
    let input: String = Input::new().with_prompt(prompt).interact_text()?;

    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| HealthError::InvalidInput("Invalid number".to_string()))?;

    if !is_positive(value) {
        return Err(HealthError::InvalidMeasurement(format!(
            "{} must be positive, got {}",
            prompt, value
        )));
    }

    Ok(value)
}

/// Prompt for gender.
pub fn prompt_gender() -> Result<Gender> {
    let options: Vec<&str> = Gender::ALL.iter().map(Gender::label).collect();

    let selection = Select::new()
        .with_prompt("Select gender")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(Gender::ALL[selection])
}

/// Prompt for the daily calorie target, defaulting from gender.
pub fn prompt_target(gender: Gender) -> Result<i64> {
    let input: String = Input::new()
        .with_prompt("Daily calorie target (kcal)")
        .default(default_target(gender).to_string())
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| HealthError::InvalidInput("Invalid number".to_string()))
}

/// Prompt for the foods eaten today, chosen from the catalog.
pub fn prompt_foods(catalog: &FoodCatalog) -> Result<Vec<String>> {
    if catalog.is_empty() {
        return Ok(Vec::new());
    }

    let options: Vec<String> = catalog
        .items()
        .iter()
        .map(|item| format!("{} ({} kcal)", item.name, item.calories))
        .collect();

    let chosen = MultiSelect::new()
        .with_prompt("Select the foods you have eaten (space to toggle, enter to confirm)")
        .items(&options)
        .interact()?;

    Ok(chosen
        .into_iter()
        .map(|i| catalog.items()[i].name.clone())
        .collect())
}

/// Prompt for calories from anything not in the catalog.
pub fn prompt_extra_calories() -> Result<u32> {
    let input: String = Input::new()
        .with_prompt("Add other calories (e.g. snacks, other drinks)")
        .default("0".to_string())
        .interact_text()?;

    input.trim().parse().map_err(|_| {
        HealthError::InvalidInput("Extra calories must be a whole number >= 0".to_string())
    })
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Collect every input for a daily report.
pub fn collect_report_draft(catalog: &FoodCatalog) -> Result<ReportDraft> {
    let name = prompt_name()?;
    let weight_kg = prompt_measurement("Weight (kg)")?;
    let height_cm = prompt_measurement("Height (cm)")?;
    let gender = prompt_gender()?;
    let target = prompt_target(gender)?;
    let selected_foods = prompt_foods(catalog)?;
    let extra_calories = prompt_extra_calories()?;

    let mut draft = ReportDraft::new(gender);
    draft.name = name;
    draft.weight_kg = Some(weight_kg);
    draft.height_cm = Some(height_cm);
    draft.target = Some(target);
    draft.selected_foods = selected_foods;
    draft.extra_calories = extra_calories;
    Ok(draft)
}
