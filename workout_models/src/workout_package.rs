use log::debug;
use serde::{Deserialize, Serialize};
use stack_string::{format_sstr, StackString};
use std::{fs, path::Path};

use workout_lib::errors::WorkoutError as Error;
use workout_utils::{workout_types::WorkoutKind, workout_util::check_count};

use crate::workout_record::WorkoutRecord;

/// Raw sensor package: a three letter workout code and its numeric readings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutPackage {
    pub workout_type: StackString,
    pub data: Vec<f64>,
}

impl WorkoutPackage {
    pub fn new(workout_type: impl Into<StackString>, data: impl Into<Vec<f64>>) -> Self {
        Self {
            workout_type: workout_type.into(),
            data: data.into(),
        }
    }

    /// Build a package from a code and a comma separated list of values,
    /// e.g. `RUN` and `15000,1,75`.
    /// # Errors
    /// Return error if any value is empty or not a number
    pub fn from_args(workout_type: &str, data: &str) -> Result<Self, Error> {
        let data: Result<Vec<f64>, Error> = data
            .split(',')
            .map(str::trim)
            .map(|s| {
                if s.is_empty() {
                    return Err(Error::InvalidInput(format_sstr!("empty value in {data}")));
                }
                s.parse::<f64>()
                    .map_err(|e| Error::InvalidInput(format_sstr!("{s} is not a number: {e}")))
            })
            .collect();
        Ok(Self::new(workout_type, data?))
    }

    /// Packages processed when no input is given.
    #[must_use]
    pub fn demo_packages() -> Vec<Self> {
        vec![
            Self::new("SWM", [720.0, 1.0, 80.0, 25.0, 40.0]),
            Self::new("RUN", [15000.0, 1.0, 75.0]),
            Self::new("WLK", [9000.0, 1.0, 75.0, 180.0]),
        ]
    }

    /// # Errors
    /// Return error if the file can't be read or isn't a json list of packages
    pub fn read_packages_json(filename: &Path) -> Result<Vec<Self>, Error> {
        debug!("read packages from {filename:?}");
        let data = fs::read_to_string(filename)?;
        serde_json::from_str(&data).map_err(Into::into)
    }

    /// # Errors
    /// Return error if the package is malformed, see `read_package`
    pub fn read_package(&self) -> Result<WorkoutRecord, Error> {
        read_package(&self.workout_type, &self.data)
    }
}

/// Dispatch raw sensor data to the record constructor for `workout_type`.
/// # Errors
/// Return `UnknownWorkoutType` for a code other than `SWM`, `RUN`, `WLK`,
/// `ArityMismatch` if `data` has the wrong number of values for the kind and
/// `InvalidInput` for out of range values
pub fn read_package(workout_type: &str, data: &[f64]) -> Result<WorkoutRecord, Error> {
    let kind = WorkoutKind::from_code(workout_type)?;
    debug!("dispatch {workout_type} {data:?}");
    let record = match (kind, data) {
        (WorkoutKind::Running, &[action, duration, weight]) => {
            WorkoutRecord::running(check_count("action", action)?, duration, weight)?
        }
        (WorkoutKind::Walking, &[action, duration, weight, height]) => {
            WorkoutRecord::walking(check_count("action", action)?, duration, weight, height)?
        }
        (WorkoutKind::Swimming, &[action, duration, weight, pool_length, pool_laps]) => {
            WorkoutRecord::swimming(
                check_count("action", action)?,
                duration,
                weight,
                pool_length,
                check_count("pool_laps", pool_laps)?,
            )?
        }
        _ => {
            return Err(Error::ArityMismatch {
                code: kind.to_code().into(),
                expected: kind.arity(),
                actual: data.len(),
            })
        }
    };
    Ok(record)
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use workout_lib::errors::WorkoutError as Error;
    use workout_utils::workout_types::WorkoutKind;

    use crate::{
        workout_package::{read_package, WorkoutPackage},
        workout_record::WorkoutRecord,
    };

    #[test]
    fn test_read_package() {
        let record = read_package("RUN", &[15000.0, 1.0, 75.0]).unwrap();
        assert_eq!(record, WorkoutRecord::running(15000, 1.0, 75.0).unwrap());

        let record = read_package("WLK", &[9000.0, 1.0, 75.0, 180.0]).unwrap();
        assert_eq!(record.kind(), WorkoutKind::Walking);

        let record = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
        assert_abs_diff_eq!(record.get_mean_speed(), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_unknown_workout_type() {
        match read_package("XYZ", &[15000.0, 1.0, 75.0]) {
            Err(Error::UnknownWorkoutType(code)) => assert_eq!(code.as_str(), "XYZ"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_arity_mismatch() {
        match read_package("RUN", &[15000.0, 1.0]) {
            Err(Error::ArityMismatch {
                code,
                expected,
                actual,
            }) => {
                assert_eq!(code.as_str(), "RUN");
                assert_eq!(expected, 3);
                assert_eq!(actual, 2);
            }
            other => panic!("unexpected {other:?}"),
        }
        assert!(matches!(
            read_package("SWM", &[720.0, 1.0, 80.0, 25.0]),
            Err(Error::ArityMismatch { expected: 5, .. })
        ));
        assert!(matches!(
            read_package("WLK", &[9000.0, 1.0, 75.0, 180.0, 1.0]),
            Err(Error::ArityMismatch { expected: 4, .. })
        ));
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            read_package("RUN", &[15000.5, 1.0, 75.0]),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            read_package("RUN", &[15000.0, 0.0, 75.0]),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            read_package("SWM", &[720.0, 1.0, 80.0, 25.0, -40.0]),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_from_args() {
        let package = WorkoutPackage::from_args("RUN", "15000, 1,75").unwrap();
        assert_eq!(package, WorkoutPackage::new("RUN", [15000.0, 1.0, 75.0]));
        assert!(package.read_package().is_ok());

        match WorkoutPackage::from_args("RUN", "15000,one,75") {
            Err(Error::InvalidInput(msg)) => assert!(msg.starts_with("one is not a number")),
            other => panic!("unexpected {other:?}"),
        }

        for data in ["15000,,1,75", "15000,1,75,", ""] {
            match WorkoutPackage::from_args("RUN", data) {
                Err(Error::InvalidInput(msg)) => assert!(msg.starts_with("empty value in")),
                other => panic!("unexpected {other:?}"),
            }
        }
    }

    #[test]
    fn test_demo_packages() {
        let packages = WorkoutPackage::demo_packages();
        let kinds: Vec<_> = packages
            .iter()
            .map(|p| p.read_package().unwrap().kind())
            .collect();
        assert_eq!(
            kinds,
            vec![
                WorkoutKind::Swimming,
                WorkoutKind::Running,
                WorkoutKind::Walking
            ]
        );
    }
}
