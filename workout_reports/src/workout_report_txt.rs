use stack_string::{format_sstr, StackString};

use workout_models::workout_summary::WorkoutSummary;

/// Render the one line training report, all values with three decimals.
#[must_use]
pub fn generate_txt_report(summary: &WorkoutSummary) -> StackString {
    format_sstr!(
        "Тип тренировки: {}; Длительность: {:.3} ч.; Дистанция: {:.3} км; Ср. скорость: {:.3} \
         км/ч; Потрачено ккал: {:.3}.",
        summary.kind.display_name(),
        summary.duration,
        summary.distance,
        summary.mean_speed,
        summary.calories,
    )
}
