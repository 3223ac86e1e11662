use log::debug;
use stack_string::StackString;
use stdout_channel::StdoutChannel;

use workout_lib::{
    errors::WorkoutError as Error,
    workout_config::{OutputFormat, WorkoutConfig},
};
use workout_models::workout_package::WorkoutPackage;
use workout_reports::workout_report::generate_package_reports;

#[derive(Debug, Default)]
pub struct WorkoutCli {
    pub config: WorkoutConfig,
    pub format: OutputFormat,
    pub stdout: StdoutChannel<StackString>,
}

impl WorkoutCli {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// # Errors
    /// Return error if config init fails
    pub fn with_config() -> Result<Self, Error> {
        let config = WorkoutConfig::get_config(None)?;
        let format = config.output_format;
        Ok(Self {
            config,
            format,
            ..Self::default()
        })
    }

    #[must_use]
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Render every package and queue the lines on the stdout channel, no
    /// line is queued unless every package succeeds.
    /// # Errors
    /// Return error if any package is malformed
    pub fn process_packages(&self, packages: &[WorkoutPackage]) -> Result<usize, Error> {
        debug!("process {} packages as {}", packages.len(), self.format);
        let lines = generate_package_reports(packages, self.format)?;
        let count = lines.len();
        for line in lines {
            self.stdout.send(line);
        }
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use workout_lib::{errors::WorkoutError as Error, workout_config::OutputFormat};
    use workout_models::workout_package::WorkoutPackage;

    use crate::workout_cli::WorkoutCli;

    #[tokio::test]
    async fn test_process_packages() -> Result<(), Error> {
        let cli = WorkoutCli::new().with_format(OutputFormat::Json);
        assert_eq!(cli.format, OutputFormat::Json);
        let stdout_task = cli.stdout.spawn_stdout_task();
        let count = cli.process_packages(&WorkoutPackage::demo_packages())?;
        assert_eq!(count, 3);
        cli.stdout.close().await?;
        stdout_task.await??;
        Ok(())
    }

    #[test]
    fn test_process_bad_packages() {
        let cli = WorkoutCli::new();
        let packages = [WorkoutPackage::new("XYZ", [1.0, 1.0, 1.0])];
        assert!(matches!(
            cli.process_packages(&packages),
            Err(Error::UnknownWorkoutType(_))
        ));
    }
}
