use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Body measurements as entered by the user.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub weight_kg: f64,
    pub height_cm: f64,
}

impl Measurement {
    pub fn new(weight_kg: f64, height_cm: f64) -> Self {
        Self {
            weight_kg,
            height_cm,
        }
    }

    /// Both values are finite and strictly positive.
    pub fn is_valid(&self) -> bool {
        is_positive(self.weight_kg) && is_positive(self.height_cm)
    }
}

pub(crate) fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Gender, used only to pick a default calorie target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" | "lelaki" => Ok(Gender::Male),
            "female" | "f" | "perempuan" => Ok(Gender::Female),
            other => Err(format!("unknown gender '{}' (expected male or female)", other)),
        }
    }
}
