use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use crate::error::{HealthError, Result};
use crate::models::DailyReport;

/// Written in the food column when nothing was selected.
pub const NO_FOODS_SENTINEL: &str = "None";

/// File name used when the user gave no name.
pub const DEFAULT_EXPORT_FILE: &str = "health_data.csv";

/// One flat row of the daily report, in export column order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportRecord {
    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "WeightKg")]
    pub weight_kg: f64,

    #[serde(rename = "HeightCm")]
    pub height_cm: f64,

    #[serde(rename = "BMI")]
    pub bmi: f64,

    #[serde(rename = "BmiCategory")]
    pub bmi_category: String,

    #[serde(rename = "Gender")]
    pub gender: String,

    #[serde(rename = "CaloriesEaten")]
    pub calories_eaten: u64,

    #[serde(rename = "CalorieBalance")]
    pub calorie_balance: i64,

    #[serde(rename = "FoodsEaten")]
    pub foods_eaten: String,
}

impl ExportRecord {
    pub fn from_report(report: &DailyReport) -> Self {
        let measurement = report.measurement();
        let foods = report.tally().selected_foods();
        Self {
            name: report.name().to_string(),
            weight_kg: measurement.weight_kg,
            height_cm: measurement.height_cm,
            bmi: report.bmi().display_value(),
            bmi_category: report.bmi().category().label().to_string(),
            gender: report.gender().label().to_string(),
            calories_eaten: report.tally().eaten_total(),
            calorie_balance: report.tally().balance(),
            foods_eaten: if foods.is_empty() {
                NO_FOODS_SENTINEL.to_string()
            } else {
                foods.join(", ")
            },
        }
    }
}

/// Export file name for a user: `health_data_<name>.csv`.
///
/// Path separators and control characters in the name become `_`.
pub fn export_file_name(name: &str) -> String {
    let name = name.trim();
    if name.is_empty() {
        return DEFAULT_EXPORT_FILE.to_string();
    }
    let safe: String = name
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    format!("health_data_{}.csv", safe)
}

/// Write the report as a header row plus one data row.
pub fn write_csv<W: Write>(report: &DailyReport, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.serialize(ExportRecord::from_report(report))?;
    wtr.flush()?;
    Ok(())
}

/// The CSV export as UTF-8 bytes, ready to hand to a download.
pub fn to_csv_bytes(report: &DailyReport) -> Result<Vec<u8>> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.serialize(ExportRecord::from_report(report))?;
    wtr.into_inner()
        .map_err(|e| HealthError::Io(e.into_error()))
}

/// Write the CSV export to a file.
pub fn write_csv_to_path<P: AsRef<Path>>(report: &DailyReport, path: P) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_csv(report, file)?;
    info!(path = %path.display(), "wrote daily report CSV");
    Ok(())
}

/// Write the CSV export into `dir`, named after the user. Returns the path.
pub fn write_csv_to_dir<P: AsRef<Path>>(report: &DailyReport, dir: P) -> Result<PathBuf> {
    let path = dir.as_ref().join(export_file_name(report.name()));
    write_csv_to_path(report, &path)?;
    Ok(path)
}
