pub mod calculator;
pub mod catalog;
pub mod cli;
pub mod error;
pub mod export;
pub mod interface;
pub mod logging;
pub mod models;

pub use calculator::{
    build_daily_report, classify_balance, classify_bmi, compute_bmi, compute_calorie_tally,
    default_target, ReportDraft,
};
pub use error::{HealthError, Result};
pub use models::{
    BalanceStatus, BmiCategory, BmiResult, CalorieTally, DailyReport, FoodCatalog, FoodItem,
    Gender, Measurement,
};
