/// Lower bound of the Normal BMI range; below it is Underweight.
pub const BMI_NORMAL_MIN: f64 = 18.5;

/// Lower bound of the Overweight BMI range.
pub const BMI_OVERWEIGHT_MIN: f64 = 25.0;

/// Lower bound of the Obese BMI range.
pub const BMI_OBESE_MIN: f64 = 30.0;

/// Decimal places kept when a BMI is shown or exported.
pub const BMI_DISPLAY_DECIMALS: u32 = 2;

/// Default daily calorie target for men (kcal).
pub const DEFAULT_TARGET_MALE: i64 = 2500;

/// Default daily calorie target for women (kcal).
pub const DEFAULT_TARGET_FEMALE: i64 = 2000;

// ─────────────────────────────────────────────────────────────────────────────
// Reference catalog
// ─────────────────────────────────────────────────────────────────────────────

/// Built-in food table: portion name and calories.
pub const REFERENCE_FOODS: [(&str, u32); 10] = [
    ("Nasi putih (1 pinggan)", 250),
    ("Ayam goreng (1 ketul)", 290),
    ("Ikan bakar (1 keping)", 180),
    ("Telur rebus (1 biji)", 70),
    ("Sayur tumis (1 senduk)", 50),
    ("Teh ais manis (1 gelas)", 120),
    ("Roti canai (1 keping)", 300),
    ("Mee goreng (1 pinggan)", 400),
    ("Nasi lemak (1 bungkus)", 500),
    ("Air kosong", 0),
];
