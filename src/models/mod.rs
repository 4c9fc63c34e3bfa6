mod food;
mod measurement;
mod report;

pub use food::{FoodCatalog, FoodItem};
pub use measurement::{Gender, Measurement};
pub(crate) use measurement::is_positive;
pub use report::{BalanceStatus, BmiCategory, BmiResult, CalorieTally, DailyReport};
