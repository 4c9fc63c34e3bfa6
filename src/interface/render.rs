use std::fmt::Write as _;

use crate::models::{BalanceStatus, BmiResult, CalorieTally, DailyReport, FoodCatalog};

/// Width, in characters, of the longest chart bar.
pub const CHART_WIDTH: usize = 40;

const BAR_CHAR: char = '#';

/// One-line status for the calorie balance.
pub fn balance_message(tally: &CalorieTally) -> String {
    match tally.status() {
        BalanceStatus::Deficit => format!("Calories still needed: {} kcal", tally.balance()),
        BalanceStatus::Exceeded => {
            format!("Exceeded target by {} kcal!", tally.balance().unsigned_abs())
        }
        BalanceStatus::Exact => "Calorie target met exactly!".to_string(),
    }
}

/// Line reporting total calories eaten, addressed to the user when named.
pub fn eaten_message(name: &str, tally: &CalorieTally) -> String {
    if name.trim().is_empty() {
        format!("Total calories eaten: {} kcal", tally.eaten_total())
    } else {
        format!("{}, total calories eaten: {} kcal", name.trim(), tally.eaten_total())
    }
}

/// Horizontal bar chart of eaten vs remaining calories.
///
/// Remaining is floored at zero. Bars are scaled to the larger of the two;
/// a bar with no calories is drawn empty and left unlabelled.
pub fn render_calorie_chart(report: &DailyReport, width: usize) -> String {
    let measurement = report.measurement();
    let tally = report.tally();
    let bars = [("Eaten", tally.eaten_total()), ("Remaining", tally.remaining())];
    let max_value = bars.iter().map(|(_, v)| *v).max().unwrap_or(0);

    let mut out = String::new();
    let _ = writeln!(
        out,
        "Name: {} | Weight: {}kg | Height: {}cm | Status: {}",
        report.name(),
        measurement.weight_kg,
        measurement.height_cm,
        report.bmi().category()
    );
    out.push('\n');
    out.push_str("Daily Calorie Chart\n");

    for (label, value) in bars {
        let len = if max_value == 0 {
            0
        } else {
            ((value as f64 / max_value as f64) * width as f64).round() as usize
        };
        let bar: String = std::iter::repeat_n(BAR_CHAR, len).collect();
        let annotation = if value > 0 {
            format!(" {}", value)
        } else {
            String::new()
        };
        let _ = writeln!(out, "{:<9} | {:<width$}{}", label, bar, annotation, width = width);
    }
    out.push_str("(kcal)\n");
    out
}

/// Display the BMI and its category.
pub fn display_bmi(bmi: &BmiResult) {
    println!("BMI: {:.2}", bmi.display_value());
    println!("Status: {}", bmi.category());
}

/// Display the calorie tally.
pub fn display_tally(name: &str, tally: &CalorieTally) {
    if tally.selected_foods().is_empty() {
        println!("Foods eaten: (none)");
    } else {
        println!("Foods eaten: {}", tally.selected_foods().join(", "));
    }
    if tally.extra_calories() > 0 {
        println!("Extra calories: {} kcal", tally.extra_calories());
    }
    println!("Daily target: {} kcal", tally.target());
    println!("{}", eaten_message(name, tally));
    println!("{}", balance_message(tally));
}

/// Display a full daily report with its chart.
pub fn display_report(report: &DailyReport) {
    println!();
    println!("=== Daily Health Report ===");
    println!();
    println!("Name: {}", report.name());
    println!("Gender: {}", report.gender());
    println!(
        "Weight: {} kg | Height: {} cm",
        report.measurement().weight_kg,
        report.measurement().height_cm
    );
    display_bmi(report.bmi());
    println!();
    display_tally(report.name(), report.tally());
    println!();
    print!("{}", render_calorie_chart(report, CHART_WIDTH));
    println!();
}

/// Display the food catalog.
pub fn display_catalog(catalog: &FoodCatalog) {
    if catalog.is_empty() {
        println!("Food catalog: (empty)");
        return;
    }

    println!();
    println!("=== Food Catalog ({} items) ===", catalog.len());
    println!();

    let max_name_len = catalog.names().map(str::len).max().unwrap_or(10);
    for item in catalog.items() {
        println!(
            "  {:<width$} {:>5} kcal",
            item.name,
            item.calories,
            width = max_name_len
        );
    }

    println!();
}
