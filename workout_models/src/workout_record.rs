use serde::Serialize;

use workout_lib::errors::WorkoutError as Error;
use workout_utils::{
    workout_types::WorkoutKind,
    workout_util::{
        check_non_negative, check_positive, CM_IN_M, KMH_IN_MSEC, MIN_IN_H, M_IN_KM,
        RUNNING_CALORIES_MEAN_SPEED_MULTIPLIER, RUNNING_CALORIES_MEAN_SPEED_SHIFT,
        SWIMMING_CALORIES_MEAN_SPEED_SHIFT, SWIMMING_CALORIES_WEIGHT_MULTIPLIER,
        WALKING_CALORIES_SPEED_HEIGHT_MULTIPLIER, WALKING_CALORIES_WEIGHT_MULTIPLIER,
    },
};

use crate::workout_summary::WorkoutSummary;

/// Validated sensor readings for a single workout.
///
/// `duration` is in hours, `weight` in kilograms, `height` in centimeters
/// and `pool_length` in meters. Records can only be built through the
/// checked constructors, so `duration` is always strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum WorkoutRecord {
    Running {
        action: u64,
        duration: f64,
        weight: f64,
    },
    Walking {
        action: u64,
        duration: f64,
        weight: f64,
        height: f64,
    },
    Swimming {
        action: u64,
        duration: f64,
        weight: f64,
        pool_length: f64,
        pool_laps: u64,
    },
}

impl WorkoutRecord {
    /// # Errors
    /// Return error if duration or weight are not positive
    pub fn running(action: u64, duration: f64, weight: f64) -> Result<Self, Error> {
        Ok(Self::Running {
            action,
            duration: check_positive("duration", duration)?,
            weight: check_positive("weight", weight)?,
        })
    }

    /// # Errors
    /// Return error if duration, weight or height are not positive
    pub fn walking(action: u64, duration: f64, weight: f64, height: f64) -> Result<Self, Error> {
        Ok(Self::Walking {
            action,
            duration: check_positive("duration", duration)?,
            weight: check_positive("weight", weight)?,
            height: check_positive("height", height)?,
        })
    }

    /// # Errors
    /// Return error if duration or weight are not positive or pool length is
    /// negative
    pub fn swimming(
        action: u64,
        duration: f64,
        weight: f64,
        pool_length: f64,
        pool_laps: u64,
    ) -> Result<Self, Error> {
        Ok(Self::Swimming {
            action,
            duration: check_positive("duration", duration)?,
            weight: check_positive("weight", weight)?,
            pool_length: check_non_negative("pool_length", pool_length)?,
            pool_laps,
        })
    }

    #[must_use]
    pub fn kind(&self) -> WorkoutKind {
        match self {
            Self::Running { .. } => WorkoutKind::Running,
            Self::Walking { .. } => WorkoutKind::Walking,
            Self::Swimming { .. } => WorkoutKind::Swimming,
        }
    }

    #[must_use]
    pub fn action(&self) -> u64 {
        match self {
            Self::Running { action, .. }
            | Self::Walking { action, .. }
            | Self::Swimming { action, .. } => *action,
        }
    }

    #[must_use]
    pub fn duration(&self) -> f64 {
        match self {
            Self::Running { duration, .. }
            | Self::Walking { duration, .. }
            | Self::Swimming { duration, .. } => *duration,
        }
    }

    #[must_use]
    pub fn weight(&self) -> f64 {
        match self {
            Self::Running { weight, .. }
            | Self::Walking { weight, .. }
            | Self::Swimming { weight, .. } => *weight,
        }
    }

    /// Distance in km.
    #[must_use]
    pub fn get_distance(&self) -> f64 {
        self.action() as f64 * self.kind().step_length() / M_IN_KM
    }

    /// Mean speed in km/h, swimming uses the pool rather than the stroke
    /// count.
    #[must_use]
    pub fn get_mean_speed(&self) -> f64 {
        match self {
            Self::Swimming {
                duration,
                pool_length,
                pool_laps,
                ..
            } => pool_length * *pool_laps as f64 / M_IN_KM / duration,
            _ => self.get_distance() / self.duration(),
        }
    }

    #[must_use]
    pub fn get_spent_calories(&self) -> f64 {
        self.spent_calories(self.get_mean_speed())
    }

    fn spent_calories(&self, mean_speed: f64) -> f64 {
        match *self {
            Self::Running {
                duration, weight, ..
            } => {
                (RUNNING_CALORIES_MEAN_SPEED_MULTIPLIER * mean_speed
                    + RUNNING_CALORIES_MEAN_SPEED_SHIFT)
                    * weight
                    / M_IN_KM
                    * duration
                    * MIN_IN_H
            }
            Self::Walking {
                duration,
                weight,
                height,
                ..
            } => {
                let speed_m_s = mean_speed * KMH_IN_MSEC;
                (WALKING_CALORIES_WEIGHT_MULTIPLIER * weight
                    + (speed_m_s.powi(2) / (height / CM_IN_M))
                        * WALKING_CALORIES_SPEED_HEIGHT_MULTIPLIER
                        * weight)
                    * duration
                    * MIN_IN_H
            }
            Self::Swimming {
                duration, weight, ..
            } => {
                (mean_speed + SWIMMING_CALORIES_MEAN_SPEED_SHIFT)
                    * SWIMMING_CALORIES_WEIGHT_MULTIPLIER
                    * weight
                    * duration
            }
        }
    }

    /// Distance and speed are derived first, calories are computed from that
    /// speed.
    #[must_use]
    pub fn summary(&self) -> WorkoutSummary {
        let distance = self.get_distance();
        let mean_speed = self.get_mean_speed();
        let calories = self.spent_calories(mean_speed);
        WorkoutSummary {
            kind: self.kind(),
            duration: self.duration(),
            distance,
            mean_speed,
            calories,
        }
    }
}
