use tracing::debug;

use crate::calculator::{compute_bmi, compute_calorie_tally, default_target};
use crate::error::{HealthError, Result};
use crate::models::{DailyReport, FoodCatalog, Gender, Measurement};

/// Build a full daily report.
///
/// Computes the BMI first, then the calorie tally; either failing fails the
/// report. Same inputs always give the same report.
pub fn build_daily_report<S: AsRef<str>>(
    name: &str,
    measurement: Measurement,
    gender: Gender,
    catalog: &FoodCatalog,
    selected_foods: &[S],
    extra_calories: u32,
    target: i64,
) -> Result<DailyReport> {
    let bmi = compute_bmi(measurement.weight_kg, measurement.height_cm)?;
    let tally = compute_calorie_tally(catalog, selected_foods, extra_calories, target)?;

    debug!(name, gender = %gender, "built daily report");
    Ok(DailyReport::new(
        name.to_string(),
        measurement,
        gender,
        bmi,
        tally,
    ))
}

/// Inputs gathered so far, any of which may still be missing.
///
/// Mirrors a form being filled in: the report only exists once a name and
/// both measurements are known. The target falls back to the gender default.
#[derive(Debug, Clone)]
pub struct ReportDraft {
    pub name: Option<String>,
    pub weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
    pub gender: Gender,
    pub target: Option<i64>,
    pub selected_foods: Vec<String>,
    pub extra_calories: u32,
}

impl ReportDraft {
    pub fn new(gender: Gender) -> Self {
        Self {
            name: None,
            weight_kg: None,
            height_cm: None,
            gender,
            target: None,
            selected_foods: Vec::new(),
            extra_calories: 0,
        }
    }

    /// Target to tally against: the explicit one, or the gender default.
    pub fn effective_target(&self) -> i64 {
        self.target.unwrap_or_else(|| default_target(self.gender))
    }

    /// Measurement, once both weight and height are entered.
    pub fn measurement(&self) -> Option<Measurement> {
        Some(Measurement::new(self.weight_kg?, self.height_cm?))
    }

    /// Finish the draft.
    ///
    /// Returns `Ok(None)` while the name is blank or a measurement is missing.
    /// Values that are present are still validated, so a zero weight is an
    /// error rather than an absent report.
    pub fn finish(&self, catalog: &FoodCatalog) -> Result<Option<DailyReport>> {
        if let (Some(w), Some(h)) = (self.weight_kg, self.height_cm) {
            compute_bmi(w, h)?;
        }
        compute_calorie_tally(
            catalog,
            self.selected_foods.as_slice(),
            self.extra_calories,
            self.effective_target(),
        )?;

        let name = match self.name.as_deref().map(str::trim) {
            Some(n) if !n.is_empty() => n,
            _ => return Ok(None),
        };
        let Some(measurement) = self.measurement() else {
            return Ok(None);
        };

        build_daily_report(
            name,
            measurement,
            self.gender,
            catalog,
            self.selected_foods.as_slice(),
            self.extra_calories,
            self.effective_target(),
        )
        .map(Some)
    }

    /// Finish the draft, treating a missing input as an error.
    ///
    /// For callers that have no "not yet" state, such as one-shot commands.
    pub fn finish_required(&self, catalog: &FoodCatalog) -> Result<DailyReport> {
        if let Some(report) = self.finish(catalog)? {
            return Ok(report);
        }

        let mut missing = Vec::new();
        if self.name.as_deref().is_none_or(|n| n.trim().is_empty()) {
            missing.push("name");
        }
        if self.weight_kg.is_none() {
            missing.push("weight");
        }
        if self.height_cm.is_none() {
            missing.push("height");
        }
        Err(HealthError::InvalidInput(format!(
            "{} required for a report",
            missing.join(", ")
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BalanceStatus, BmiCategory, FoodItem};

    fn catalog() -> FoodCatalog {
        FoodCatalog::new(vec![
            FoodItem::new("Roti canai (1 keping)", 300),
            FoodItem::new("Telur rebus (1 biji)", 70),
        ])
    }

    fn complete_draft() -> ReportDraft {
        let mut draft = ReportDraft::new(Gender::Female);
        draft.name = Some("Aisyah".to_string());
        draft.weight_kg = Some(55.0);
        draft.height_cm = Some(160.0);
        draft.selected_foods = vec!["Roti canai (1 keping)".to_string()];
        draft.extra_calories = 30;
        draft
    }

    #[test]
    fn test_build_report_composes_parts() {
        let report = build_daily_report(
            "Ali",
            Measurement::new(70.0, 175.0),
            Gender::Male,
            &catalog(),
            &["Roti canai (1 keping)", "Telur rebus (1 biji)"],
            0,
            2500,
        )
        .unwrap();

        assert_eq!(report.name(), "Ali");
        assert_eq!(report.bmi().category(), BmiCategory::Normal);
        assert_eq!(report.tally().eaten_total(), 370);
        assert_eq!(report.tally().balance(), 2130);
        assert_eq!(report.tally().status(), BalanceStatus::Deficit);
    }

    #[test]
    fn test_build_report_is_idempotent() {
        let build = || {
            build_daily_report(
                "Ali",
                Measurement::new(82.5, 170.0),
                Gender::Male,
                &catalog(),
                &["Telur rebus (1 biji)"],
                15,
                2500,
            )
            .unwrap()
        };
        assert_eq!(build(), build());
    }

    #[test]
    fn test_build_report_propagates_errors() {
        let err = build_daily_report(
            "Ali",
            Measurement::new(0.0, 175.0),
            Gender::Male,
            &catalog(),
            &["Roti canai (1 keping)"],
            0,
            2500,
        )
        .unwrap_err();
        assert!(matches!(err, HealthError::InvalidMeasurement(_)));

        let err = build_daily_report(
            "Ali",
            Measurement::new(70.0, 175.0),
            Gender::Male,
            &catalog(),
            &["Nasi kandar"],
            0,
            2500,
        )
        .unwrap_err();
        assert!(matches!(err, HealthError::UnknownFoodItem(name) if name == "Nasi kandar"));
    }

    #[test]
    fn test_draft_complete_uses_gender_default_target() {
        let report = complete_draft().finish(&catalog()).unwrap().unwrap();
        assert_eq!(report.tally().target(), 2000);
        assert_eq!(report.tally().eaten_total(), 330);
    }

    #[test]
    fn test_draft_missing_inputs_yield_no_report() {
        let mut draft = complete_draft();
        draft.name = Some("   ".to_string());
        assert!(draft.finish(&catalog()).unwrap().is_none());

        let mut draft = complete_draft();
        draft.height_cm = None;
        assert!(draft.finish(&catalog()).unwrap().is_none());
    }

    #[test]
    fn test_finish_required_rejects_blank_name() {
        for blank in ["", "  \t"] {
            let mut draft = complete_draft();
            draft.name = Some(blank.to_string());
            match draft.finish_required(&catalog()) {
                Err(HealthError::InvalidInput(msg)) => assert_eq!(msg, "name required for a report"),
                other => panic!("unexpected result: {:?}", other),
            }
        }
    }

    #[test]
    fn test_finish_required_lists_missing_measurements() {
        let mut draft = complete_draft();
        draft.weight_kg = None;
        draft.height_cm = None;
        let err = draft.finish_required(&catalog()).unwrap_err();
        assert!(matches!(err, HealthError::InvalidInput(msg) if msg == "weight, height required for a report"));

        let report = complete_draft().finish_required(&catalog()).unwrap();
        assert_eq!(report.name(), "Aisyah");
    }

    #[test]
    fn test_draft_invalid_present_values_error() {
        let mut draft = complete_draft();
        draft.name = None;
        draft.weight_kg = Some(0.0);
        assert!(draft.finish(&catalog()).is_err());

        let mut draft = complete_draft();
        draft.selected_foods.push("Cendol".to_string());
        assert!(draft.finish(&catalog()).is_err());
    }
}
