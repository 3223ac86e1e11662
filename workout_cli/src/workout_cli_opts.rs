use clap::{Parser, Subcommand};
use stack_string::StackString;
use std::path::PathBuf;

use workout_lib::{
    errors::WorkoutError as Error,
    workout_config::{OutputFormat, WorkoutConfig},
};
use workout_models::workout_package::WorkoutPackage;

use crate::workout_cli::WorkoutCli;

#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "workout-tracker-cli")]
pub struct WorkoutCliArgs {
    /// Output format, text or json (overrides `WORKOUT_OUTPUT_FORMAT`)
    #[arg(long, global = true)]
    pub format: Option<StackString>,
    #[command(subcommand)]
    pub command: Option<WorkoutCliOpts>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum WorkoutCliOpts {
    /// Report the built in sample packages
    Demo,
    /// Report a single package, e.g. `report --code RUN --data 15000,1,75`
    Report {
        #[arg(short, long)]
        code: StackString,
        #[arg(short, long, allow_hyphen_values = true)]
        data: StackString,
    },
    /// Report every package in a json file
    Proc {
        #[arg(short, long)]
        filename: Option<PathBuf>,
    },
}

impl WorkoutCliArgs {
    /// # Errors
    /// Return error if the format flag isn't a known format
    pub fn get_format(&self, config: &WorkoutConfig) -> Result<OutputFormat, Error> {
        match &self.format {
            Some(format) => format.parse(),
            None => Ok(config.output_format),
        }
    }

    /// # Errors
    /// Return error if packages can't be read or parsed
    pub fn get_packages(&self, config: &WorkoutConfig) -> Result<Vec<WorkoutPackage>, Error> {
        match self.command.as_ref().unwrap_or(&WorkoutCliOpts::Demo) {
            WorkoutCliOpts::Demo => Ok(WorkoutPackage::demo_packages()),
            WorkoutCliOpts::Report { code, data } => {
                Ok(vec![WorkoutPackage::from_args(code, data)?])
            }
            WorkoutCliOpts::Proc { filename } => {
                let filename = filename
                    .as_ref()
                    .or(config.packages_file.as_ref())
                    .ok_or(Error::StaticCustomError("No packages file specified"))?;
                WorkoutPackage::read_packages_json(filename)
            }
        }
    }
}

impl WorkoutCliOpts {
    /// # Errors
    /// Return error if config init fails, input is malformed or writing to
    /// stdout fails
    pub async fn process_args() -> Result<(), Error> {
        let args = WorkoutCliArgs::parse();
        let cli = WorkoutCli::with_config()?;
        let format = args.get_format(&cli.config)?;
        let packages = args.get_packages(&cli.config)?;
        let cli = cli.with_format(format);

        let stdout_task = cli.stdout.spawn_stdout_task();
        let result = cli.process_packages(&packages);
        cli.stdout.close().await?;
        stdout_task.await??;
        result.map(|_| ())
    }
}
