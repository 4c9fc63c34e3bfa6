use std::fs;

use tempfile::tempdir;

use health_report_rs::calculator::{build_daily_report, ReportDraft};
use health_report_rs::catalog::reference_catalog;
use health_report_rs::export::{to_csv_bytes, write_csv_to_dir, write_csv_to_path, ExportRecord};
use health_report_rs::{DailyReport, Gender, HealthError, Measurement};

fn sample_report(foods: &[&str]) -> DailyReport {
    build_daily_report(
        "Ali",
        Measurement::new(70.0, 175.0),
        Gender::Male,
        &reference_catalog(),
        foods,
        0,
        2500,
    )
    .unwrap()
}

#[test]
fn test_export_record_fields() {
    let report = sample_report(&["Nasi lemak (1 bungkus)", "Teh ais manis (1 gelas)"]);
    let record = ExportRecord::from_report(&report);

    assert_eq!(record.name, "Ali");
    assert_eq!(record.bmi, 22.86);
    assert_eq!(record.bmi_category, "Normal");
    assert_eq!(record.gender, "Male");
    assert_eq!(record.calories_eaten, 620);
    assert_eq!(record.calorie_balance, 1880);
    assert_eq!(
        record.foods_eaten,
        "Nasi lemak (1 bungkus), Teh ais manis (1 gelas)"
    );
}

#[test]
fn test_export_no_foods_sentinel() {
    let report = sample_report(&[]);
    let record = ExportRecord::from_report(&report);
    assert_eq!(record.foods_eaten, "None");
}

#[test]
fn test_csv_bytes_header_and_row() {
    let report = sample_report(&["Roti canai (1 keping)"]);
    let bytes = to_csv_bytes(&report).unwrap();
    let text = String::from_utf8(bytes).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 2);
    assert_eq!(
        lines[0],
        "Name,WeightKg,HeightCm,BMI,BmiCategory,Gender,CaloriesEaten,CalorieBalance,FoodsEaten"
    );
    assert!(lines[1].starts_with("Ali,70.0,175.0,22.86,Normal,Male,300,2200,"));
    assert!(lines[1].ends_with("Roti canai (1 keping)"));
}

#[test]
fn test_csv_quotes_joined_foods() {
    let report = sample_report(&["Air kosong", "Telur rebus (1 biji)"]);
    let text = String::from_utf8(to_csv_bytes(&report).unwrap()).unwrap();
    assert!(text.contains("\"Air kosong, Telur rebus (1 biji)\""));
}

#[test]
fn test_write_csv_to_path_and_dir() {
    let dir = tempdir().unwrap();
    let report = sample_report(&["Mee goreng (1 pinggan)"]);

    let path = dir.path().join("out.csv");
    write_csv_to_path(&report, &path).unwrap();
    let written = fs::read(&path).unwrap();
    assert_eq!(written, to_csv_bytes(&report).unwrap());

    let named = write_csv_to_dir(&report, dir.path()).unwrap();
    assert_eq!(named.file_name().unwrap(), "health_data_Ali.csv");
    assert!(named.exists());
}

#[test]
fn test_partial_draft_produces_no_report() {
    let catalog = reference_catalog();
    let mut draft = ReportDraft::new(Gender::Male);
    draft.weight_kg = Some(70.0);
    draft.height_cm = Some(175.0);

    assert!(draft.finish(&catalog).unwrap().is_none());

    draft.name = Some("Ali".to_string());
    let report = draft.finish(&catalog).unwrap().unwrap();
    assert_eq!(report.tally().target(), 2500);
    assert_eq!(report.tally().eaten_total(), 0);
}

#[test]
fn test_required_report_rejects_blank_name() {
    let catalog = reference_catalog();
    let mut draft = ReportDraft::new(Gender::Female);
    draft.name = Some("   ".to_string());
    draft.weight_kg = Some(55.0);
    draft.height_cm = Some(160.0);

    assert!(matches!(
        draft.finish_required(&catalog),
        Err(HealthError::InvalidInput(_))
    ));
}

#[test]
fn test_export_bmi_matches_displayed_rounding_on_tie() {
    let report = build_daily_report(
        "Ali",
        Measurement::new(88.5, 200.0),
        Gender::Male,
        &reference_catalog(),
        &[] as &[&str],
        0,
        2500,
    )
    .unwrap();
    let record = ExportRecord::from_report(&report);

    assert_eq!(record.bmi, 22.12);
    assert_eq!(format!("{:.2}", report.bmi().value()), format!("{:.2}", record.bmi));
}
