use stack_string::format_sstr;

use workout_lib::errors::WorkoutError as Error;

pub const M_IN_KM: f64 = 1000.0;
pub const MIN_IN_H: f64 = 60.0;
pub const KMH_IN_MSEC: f64 = 0.278;
pub const CM_IN_M: f64 = 100.0;

pub const LEN_STEP_M: f64 = 0.65;
pub const LEN_STROKE_M: f64 = 1.38;

pub const RUNNING_CALORIES_MEAN_SPEED_MULTIPLIER: f64 = 18.0;
pub const RUNNING_CALORIES_MEAN_SPEED_SHIFT: f64 = 1.79;

pub const WALKING_CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
pub const WALKING_CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

pub const SWIMMING_CALORIES_MEAN_SPEED_SHIFT: f64 = 1.1;
pub const SWIMMING_CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

/// # Errors
/// Return error if value is not finite or not strictly positive
pub fn check_positive(name: &str, value: f64) -> Result<f64, Error> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(Error::InvalidInput(format_sstr!(
            "{name} must be positive, got {value}"
        )))
    }
}

/// # Errors
/// Return error if value is not finite or is negative
pub fn check_non_negative(name: &str, value: f64) -> Result<f64, Error> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(Error::InvalidInput(format_sstr!(
            "{name} must not be negative, got {value}"
        )))
    }
}

/// Counts (steps, strokes, laps) arrive as plain numbers, only whole
/// non-negative values are accepted.
/// # Errors
/// Return error if value is negative, not finite or has a fractional part
pub fn check_count(name: &str, value: f64) -> Result<u64, Error> {
    let value = check_non_negative(name, value)?;
    if value.fract() != 0.0 || value > u64::MAX as f64 {
        return Err(Error::InvalidInput(format_sstr!(
            "{name} must be a whole number, got {value}"
        )));
    }
    Ok(value as u64)
}
