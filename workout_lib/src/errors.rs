use envy::Error as EnvyError;
use serde_json::Error as SerdeJsonError;
use stack_string::StackString;
use stdout_channel::StdoutChannelError;
use thiserror::Error;
use tokio::task::JoinError;

#[derive(Error, Debug)]
pub enum WorkoutError {
    #[error("Unknown workout type {0}")]
    UnknownWorkoutType(StackString),
    #[error("Workout {code} expects {expected} values, got {actual}")]
    ArityMismatch {
        code: StackString,
        expected: usize,
        actual: usize,
    },
    #[error("Invalid input: {0}")]
    InvalidInput(StackString),
    #[error("EnvyError {0}")]
    EnvyError(#[from] EnvyError),
    #[error("SerdeJsonError {0}")]
    SerdeJsonError(#[from] SerdeJsonError),
    #[error("StdoutChannelError {0}")]
    StdoutChannelError(#[from] StdoutChannelError),
    #[error("io Error {0}")]
    IoError(#[from] std::io::Error),
    #[error("tokio join error {0}")]
    JoinError(#[from] JoinError),
    #[error("{0}")]
    StaticCustomError(&'static str),
}

impl WorkoutError {
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownWorkoutType(_) | Self::ArityMismatch { .. } | Self::InvalidInput(_)
        )
    }
}

#[cfg(test)]
mod test {
    use crate::errors::WorkoutError as Error;

    #[test]
    fn test_error_display() {
        let err = Error::UnknownWorkoutType("XYZ".into());
        assert_eq!(err.to_string(), "Unknown workout type XYZ");

        let err = Error::ArityMismatch {
            code: "RUN".into(),
            expected: 3,
            actual: 2,
        };
        assert_eq!(err.to_string(), "Workout RUN expects 3 values, got 2");
        assert!(err.is_input_error());

        let err = Error::StaticCustomError("broken");
        assert!(!err.is_input_error());
    }
}
