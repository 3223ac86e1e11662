use serde::Serialize;

use workout_utils::workout_types::WorkoutKind;

use crate::workout_record::WorkoutRecord;

/// Values derived from a `WorkoutRecord`: duration in hours, distance in km,
/// mean speed in km/h and calories in kcal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WorkoutSummary {
    pub kind: WorkoutKind,
    pub duration: f64,
    pub distance: f64,
    pub mean_speed: f64,
    pub calories: f64,
}

impl From<&WorkoutRecord> for WorkoutSummary {
    fn from(record: &WorkoutRecord) -> Self {
        record.summary()
    }
}

impl From<WorkoutRecord> for WorkoutSummary {
    fn from(record: WorkoutRecord) -> Self {
        record.summary()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use workout_utils::workout_types::WorkoutKind;

    use crate::{workout_record::WorkoutRecord, workout_summary::WorkoutSummary};

    #[test]
    fn test_summary_from_record() {
        let record = WorkoutRecord::swimming(720, 1.0, 80.0, 25.0, 40).unwrap();
        let summary: WorkoutSummary = record.into();
        assert_eq!(summary.kind, WorkoutKind::Swimming);
        assert_abs_diff_eq!(summary.duration, 1.0);
        assert_abs_diff_eq!(summary.mean_speed, 1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(summary.calories, 336.0, epsilon = 1e-9);
        assert_eq!(summary, WorkoutSummary::from(&record));
    }

    #[test]
    fn test_serialize_summary() {
        let summary = WorkoutRecord::running(15000, 1.0, 75.0).unwrap().summary();
        let value = serde_json::to_value(summary).unwrap();
        assert_eq!(value["kind"], "running");
        assert_eq!(value["duration"], 1.0);
    }
}
