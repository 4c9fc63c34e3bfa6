use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::models::Gender;

/// health_report — BMI and daily calorie tally with an exportable report.
#[derive(Parser, Debug)]
#[command(name = "health_report")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to a food catalog JSON file. Uses the built-in catalog when omitted.
    #[arg(short, long, global = true, env = "HEALTH_REPORT_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Enable debug logging (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fill in the daily form interactively.
    Interactive,

    /// Compute BMI and its category.
    Bmi {
        /// Body weight in kg.
        #[arg(long)]
        weight: f64,

        /// Height in cm.
        #[arg(long)]
        height: f64,
    },

    /// Tally calories eaten against a daily target.
    Calories {
        /// Food eaten, by exact catalog name. Repeat for several foods.
        #[arg(short, long = "food")]
        foods: Vec<String>,

        /// Calories from anything not in the catalog.
        #[arg(long, default_value_t = 0)]
        extra: u32,

        /// Daily calorie target. Defaults from --gender.
        #[arg(long, allow_negative_numbers = true)]
        target: Option<i64>,

        /// Gender used for the default target (male or female).
        #[arg(long, default_value = "male")]
        gender: Gender,
    },

    /// Build the full daily report, optionally exporting it as CSV.
    Report {
        /// Name shown on the report and used in the export file name.
        #[arg(long)]
        name: String,

        /// Body weight in kg.
        #[arg(long)]
        weight: f64,

        /// Height in cm.
        #[arg(long)]
        height: f64,

        /// Gender (male or female).
        #[arg(long)]
        gender: Gender,

        /// Daily calorie target. Defaults from --gender.
        #[arg(long, allow_negative_numbers = true)]
        target: Option<i64>,

        /// Food eaten, by exact catalog name. Repeat for several foods.
        #[arg(short, long = "food")]
        foods: Vec<String>,

        /// Calories from anything not in the catalog.
        #[arg(long, default_value_t = 0)]
        extra: u32,

        /// Write the CSV export to this file.
        #[arg(long, conflicts_with = "csv_dir")]
        csv: Option<PathBuf>,

        /// Write the CSV export into this directory, named after the user.
        #[arg(long)]
        csv_dir: Option<PathBuf>,

        /// Print the report as JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// List the foods in the catalog.
    Foods,

    /// Manage catalog files.
    Catalog {
        #[command(subcommand)]
        action: CatalogCommand,
    },
}

#[derive(Subcommand, Debug)]
pub enum CatalogCommand {
    /// Write the built-in catalog to a JSON file as a starting point.
    Init {
        /// Destination path.
        path: PathBuf,

        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Interactive
    }
}
