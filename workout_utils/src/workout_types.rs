use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use stack_string::StackString;
use std::{collections::HashMap, convert::TryFrom, fmt, str::FromStr};

use workout_lib::errors::WorkoutError as Error;

use crate::workout_util::{LEN_STEP_M, LEN_STROKE_M};

static WORKOUT_CODE_MAP: Lazy<HashMap<&'static str, WorkoutKind>> =
    Lazy::new(init_workout_code_map);
static WORKOUT_NAME_MAP: Lazy<HashMap<&'static str, WorkoutKind>> =
    Lazy::new(init_workout_name_map);

#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(into = "StackString", try_from = "StackString")]
pub enum WorkoutKind {
    Running,
    Walking,
    Swimming,
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl From<WorkoutKind> for StackString {
    fn from(item: WorkoutKind) -> StackString {
        StackString::from_display(item)
    }
}

impl WorkoutKind {
    #[must_use]
    pub fn all() -> [Self; 3] {
        [Self::Running, Self::Walking, Self::Swimming]
    }

    #[must_use]
    pub fn to_str(self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Walking => "walking",
            Self::Swimming => "swimming",
        }
    }

    /// Three letter code used by the sensor packages.
    #[must_use]
    pub fn to_code(self) -> &'static str {
        match self {
            Self::Running => "RUN",
            Self::Walking => "WLK",
            Self::Swimming => "SWM",
        }
    }

    /// Name printed in the training report.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Running => "Running",
            Self::Walking => "SportsWalking",
            Self::Swimming => "Swimming",
        }
    }

    /// Number of values a sensor package for this kind must carry:
    /// `action, duration, weight` followed by `height` for walking or
    /// `pool_length, pool_laps` for swimming.
    #[must_use]
    pub fn arity(self) -> usize {
        match self {
            Self::Running => 3,
            Self::Walking => 4,
            Self::Swimming => 5,
        }
    }

    /// Distance covered by one action (step or stroke) in meters.
    #[must_use]
    pub fn step_length(self) -> f64 {
        match self {
            Self::Running | Self::Walking => LEN_STEP_M,
            Self::Swimming => LEN_STROKE_M,
        }
    }

    /// # Errors
    /// Return error if code isn't one of `RUN`, `WLK`, `SWM`
    pub fn from_code(code: &str) -> Result<Self, Error> {
        WORKOUT_CODE_MAP
            .get(code)
            .copied()
            .ok_or_else(|| Error::UnknownWorkoutType(code.into()))
    }
}

impl FromStr for WorkoutKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(kind) = Self::from_code(s) {
            return Ok(kind);
        }
        match WORKOUT_NAME_MAP.get(s.to_lowercase().as_str()) {
            Some(kind) => Ok(*kind),
            None => Err(Error::UnknownWorkoutType(s.into())),
        }
    }
}

impl TryFrom<&str> for WorkoutKind {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::from_str(s)
    }
}

impl TryFrom<StackString> for WorkoutKind {
    type Error = Error;
    fn try_from(s: StackString) -> Result<Self, Self::Error> {
        Self::from_str(s.as_str())
    }
}

fn init_workout_code_map() -> HashMap<&'static str, WorkoutKind> {
    let mut m: HashMap<_, _> = WorkoutKind::all()
        .iter()
        .map(|kind| (kind.to_code(), *kind))
        .collect();
    m.shrink_to_fit();
    m
}

fn init_workout_name_map() -> HashMap<&'static str, WorkoutKind> {
    let mut m: HashMap<_, _> = [
        ("running", WorkoutKind::Running),
        ("run", WorkoutKind::Running),
        ("walking", WorkoutKind::Walking),
        ("walk", WorkoutKind::Walking),
        ("sportswalking", WorkoutKind::Walking),
        ("swimming", WorkoutKind::Swimming),
        ("swim", WorkoutKind::Swimming),
    ]
    .iter()
    .map(|(k, v)| (*k, *v))
    .collect();
    m.shrink_to_fit();
    m
}

#[must_use]
pub fn get_workout_code_map() -> &'static HashMap<&'static str, WorkoutKind> {
    &WORKOUT_CODE_MAP
}
