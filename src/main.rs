use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::debug;

use health_report_rs::calculator::{
    compute_bmi, compute_calorie_tally, default_target, ReportDraft,
};
use health_report_rs::catalog::{reference_catalog, resolve_catalog, save_catalog, suggest_food};
use health_report_rs::cli::{CatalogCommand, Cli, Command};
use health_report_rs::error::{HealthError, Result};
use health_report_rs::export::{export_file_name, write_csv_to_dir, write_csv_to_path};
use health_report_rs::interface::{
    collect_report_draft, display_bmi, display_catalog, display_report, display_tally,
    prompt_yes_no,
};
use health_report_rs::logging::init_logging;
use health_report_rs::models::{FoodCatalog, Gender};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let command = cli.command.unwrap_or_default();

    if let Command::Catalog { action } = &command {
        return match action {
            CatalogCommand::Init { path, force } => cmd_catalog_init(path, *force),
        };
    }

    let catalog = resolve_catalog(cli.catalog.as_deref())?;
    debug!(foods = catalog.len(), "catalog ready");

    match command {
        Command::Interactive => cmd_interactive(&catalog),
        Command::Bmi { weight, height } => cmd_bmi(weight, height),
        Command::Calories {
            foods,
            extra,
            target,
            gender,
        } => cmd_calories(&catalog, &foods, extra, target, gender),
        Command::Report {
            name,
            weight,
            height,
            gender,
            target,
            foods,
            extra,
            csv,
            csv_dir,
            json,
        } => {
            let mut draft = ReportDraft::new(gender);
            draft.name = Some(name);
            draft.weight_kg = Some(weight);
            draft.height_cm = Some(height);
            draft.target = target;
            draft.selected_foods = foods;
            draft.extra_calories = extra;
            cmd_report(&catalog, &draft, csv, csv_dir, json)
        }
        Command::Foods => {
            display_catalog(&catalog);
            Ok(())
        }
        Command::Catalog { .. } => Ok(()),
    }
}

/// Print a "did you mean" hint for an unknown food, then pass the error on.
fn with_food_hint(catalog: &FoodCatalog, err: HealthError) -> HealthError {
    if let HealthError::UnknownFoodItem(name) = &err {
        match suggest_food(catalog, name) {
            Some(suggestion) => eprintln!("Did you mean '{}'?", suggestion),
            None => eprintln!("Run 'health_report foods' to list the catalog."),
        }
    }
    err
}

/// Fill in the daily form interactively.
fn cmd_interactive(catalog: &FoodCatalog) -> Result<()> {
    let draft = collect_report_draft(catalog)?;
    let name = draft.name.clone().unwrap_or_default();

    println!();
    if let Some(measurement) = draft.measurement() {
        let bmi = compute_bmi(measurement.weight_kg, measurement.height_cm)?;
        display_bmi(&bmi);
        println!();
    }

    let tally = compute_calorie_tally(
        catalog,
        draft.selected_foods.as_slice(),
        draft.extra_calories,
        draft.effective_target(),
    )?;
    display_tally(&name, &tally);

    let Some(report) = draft.finish(catalog)? else {
        println!();
        println!("Enter your name to see the calorie chart and save the report.");
        return Ok(());
    };

    display_report(&report);

    let file_name = export_file_name(report.name());
    if prompt_yes_no(&format!("Save report as {}?", file_name), true)? {
        write_csv_to_path(&report, &file_name)?;
        println!("Report saved to {}.", file_name);
    }

    Ok(())
}

/// Compute BMI and its category.
fn cmd_bmi(weight: f64, height: f64) -> Result<()> {
    let bmi = compute_bmi(weight, height)?;
    display_bmi(&bmi);
    Ok(())
}

/// Tally calories eaten against the target.
fn cmd_calories(
    catalog: &FoodCatalog,
    foods: &[String],
    extra: u32,
    target: Option<i64>,
    gender: Gender,
) -> Result<()> {
    let target = target.unwrap_or_else(|| default_target(gender));
    let tally = compute_calorie_tally(catalog, foods, extra, target)
        .map_err(|e| with_food_hint(catalog, e))?;
    display_tally("", &tally);
    Ok(())
}

/// Build, print and optionally export the full report.
fn cmd_report(
    catalog: &FoodCatalog,
    draft: &ReportDraft,
    csv: Option<PathBuf>,
    csv_dir: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    let report = draft
        .finish_required(catalog)
        .map_err(|e| with_food_hint(catalog, e))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        display_report(&report);
    }

    if let Some(path) = csv {
        write_csv_to_path(&report, &path)?;
        println!("Report saved to {}.", path.display());
    } else if let Some(dir) = csv_dir {
        let path = write_csv_to_dir(&report, &dir)?;
        println!("Report saved to {}.", path.display());
    }

    Ok(())
}

/// Write the built-in catalog to a file.
fn cmd_catalog_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(HealthError::InvalidInput(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }

    let catalog = reference_catalog();
    save_catalog(path, &catalog)?;
    println!("Wrote {} foods to {}.", catalog.len(), path.display());
    Ok(())
}
