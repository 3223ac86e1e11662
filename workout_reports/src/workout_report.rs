use log::debug;
use stack_string::StackString;

use workout_lib::{errors::WorkoutError as Error, workout_config::OutputFormat};
use workout_models::{workout_package::WorkoutPackage, workout_summary::WorkoutSummary};

use crate::{workout_report_json::generate_json_report, workout_report_txt::generate_txt_report};

/// # Errors
/// Return error if json serialization fails
pub fn generate_report(
    summary: &WorkoutSummary,
    format: OutputFormat,
) -> Result<StackString, Error> {
    match format {
        OutputFormat::Text => Ok(generate_txt_report(summary)),
        OutputFormat::Json => generate_json_report(summary),
    }
}

/// Compute and render one line per package, in input order. The first
/// malformed package aborts the whole batch.
/// # Errors
/// Return error if any package is malformed
pub fn generate_package_reports<'a, T>(
    packages: T,
    format: OutputFormat,
) -> Result<Vec<StackString>, Error>
where
    T: IntoIterator<Item = &'a WorkoutPackage>,
{
    packages
        .into_iter()
        .map(|package| {
            let summary: WorkoutSummary = package.read_package()?.into();
            debug!("{} {summary:?}", package.workout_type);
            generate_report(&summary, format)
        })
        .collect()
}
