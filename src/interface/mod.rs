pub mod prompts;
pub mod render;

pub use prompts::{
    collect_report_draft, prompt_extra_calories, prompt_foods, prompt_gender, prompt_measurement,
    prompt_name, prompt_target, prompt_yes_no,
};
pub use render::{
    balance_message, display_bmi, display_catalog, display_report, display_tally, eaten_message,
    render_calorie_chart, CHART_WIDTH,
};
