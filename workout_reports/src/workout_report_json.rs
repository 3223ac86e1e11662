use serde::Serialize;
use stack_string::StackString;

use workout_lib::errors::WorkoutError as Error;
use workout_models::workout_summary::WorkoutSummary;

#[derive(Serialize)]
struct WorkoutReportJson<'a> {
    training_type: &'static str,
    #[serde(flatten)]
    summary: &'a WorkoutSummary,
}

/// # Errors
/// Return error if serialization fails
pub fn generate_json_report(summary: &WorkoutSummary) -> Result<StackString, Error> {
    let report = WorkoutReportJson {
        training_type: summary.kind.display_name(),
        summary,
    };
    serde_json::to_string(&report)
        .map(Into::into)
        .map_err(Into::into)
}
