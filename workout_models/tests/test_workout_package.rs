use approx::assert_abs_diff_eq;
use std::path::Path;

use workout_lib::errors::WorkoutError as Error;
use workout_models::{workout_package::WorkoutPackage, workout_summary::WorkoutSummary};
use workout_utils::workout_types::WorkoutKind;

#[test]
fn test_read_packages_json() {
    let packages =
        WorkoutPackage::read_packages_json(Path::new("tests/data/packages.json")).unwrap();
    assert_eq!(packages, WorkoutPackage::demo_packages());

    let summaries: Vec<WorkoutSummary> = packages
        .iter()
        .map(|p| p.read_package().map(Into::into))
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(summaries.len(), 3);

    assert_eq!(summaries[0].kind, WorkoutKind::Swimming);
    assert_abs_diff_eq!(summaries[0].calories, 336.0, epsilon = 1e-9);

    assert_eq!(summaries[1].kind, WorkoutKind::Running);
    assert_abs_diff_eq!(summaries[1].distance, 9.75, epsilon = 1e-9);
    assert_abs_diff_eq!(summaries[1].calories, 797.805, epsilon = 1e-6);

    assert_eq!(summaries[2].kind, WorkoutKind::Walking);
    assert_abs_diff_eq!(summaries[2].mean_speed, 5.85, epsilon = 1e-9);
    assert_abs_diff_eq!(summaries[2].calories, 349.2517, epsilon = 1e-4);
}

#[test]
fn test_read_bad_packages_json() {
    let packages =
        WorkoutPackage::read_packages_json(Path::new("tests/data/bad_packages.json")).unwrap();
    assert!(packages[0].read_package().is_ok());
    assert!(matches!(
        packages[1].read_package(),
        Err(Error::UnknownWorkoutType(_))
    ));
}

#[test]
fn test_read_missing_file() {
    assert!(matches!(
        WorkoutPackage::read_packages_json(Path::new("tests/data/missing.json")),
        Err(Error::IoError(_))
    ));
}
