pub mod bmi;
pub mod calories;
pub mod constants;
pub mod report;

pub use bmi::{classify_bmi, compute_bmi, round_to};
pub use calories::{classify_balance, compute_calorie_tally, default_target};
pub use constants::*;
pub use report::{build_daily_report, ReportDraft};
