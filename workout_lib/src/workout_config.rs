use log::debug;
use serde::{Deserialize, Serialize};
use stack_string::format_sstr;
use std::{
    fmt,
    ops::Deref,
    path::{Path, PathBuf},
    str::FromStr,
    sync::Arc,
};

use crate::errors::WorkoutError as Error;

/// How report lines are rendered.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    #[must_use]
    pub fn to_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(Error::InvalidInput(format_sstr!("Invalid output format {s}"))),
        }
    }
}

/// `WorkoutConfig` holds configuration information which can be set either
/// through `WORKOUT_` prefixed environment variables or the config.env file,
/// see the dotenvy crate for more information about the config file format.
#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WorkoutConfigInner {
    #[serde(default)]
    pub output_format: OutputFormat,
    pub packages_file: Option<PathBuf>,
}

impl WorkoutConfigInner {
    /// # Errors
    /// Return error if a variable fails to deserialize
    pub fn from_vars<I>(iter: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::prefixed("WORKOUT_").from_iter(iter).map_err(Into::into)
    }
}

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct WorkoutConfig(Arc<WorkoutConfigInner>);

impl WorkoutConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_inner(inner: WorkoutConfigInner) -> Self {
        Self(Arc::new(inner))
    }

    /// Pull configuration from a file if it exists,
    /// first look for the file passed in,
    /// then try `${CONFIG_DIR}/workout_tracker/config.env`,
    /// then a config.env file in the current directory.
    /// # Errors
    /// Return error if an environment variable fails to deserialize
    pub fn get_config(fname: Option<&Path>) -> Result<Self, Error> {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("/tmp"));
        let default_fname = config_dir.join("workout_tracker").join("config.env");

        let env_file = match fname {
            Some(fname) if fname.exists() => fname,
            _ => &default_fname,
        };

        dotenvy::dotenv().ok();

        if env_file.exists() {
            debug!("load config from {env_file:?}");
            dotenvy::from_path(env_file).ok();
        } else if Path::new("config.env").exists() {
            dotenvy::from_filename("config.env").ok();
        }

        let conf: WorkoutConfigInner = envy::prefixed("WORKOUT_").from_env()?;
        debug!("config {conf:?}");

        Ok(Self::from_inner(conf))
    }
}

impl Deref for WorkoutConfig {
    type Target = WorkoutConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
