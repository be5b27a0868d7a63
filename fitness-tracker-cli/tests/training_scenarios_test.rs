use fitness_tracker_cli::models::Package;
use fitness_tracker_cli::runner::{self, Runner};
use fitness_tracker_cli::training::{read_package, Training, TrainingError, Workout};
use pretty_assertions::assert_eq;

#[test]
fn test_running_package() {
    let workout = read_package("RUN", &[15000.0, 1.0, 75.0]).unwrap();
    let info = workout.show_training_info();

    assert_eq!(info.training_type, "Running");
    assert_eq!(
        info.get_message(),
        "Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 9.750 км; Ср. скорость: 9.750 км/ч; Потрачено ккал: 797.805."
    );
}

#[test]
fn test_sports_walking_package() {
    let workout = read_package("WLK", &[9000.0, 1.0, 75.0, 180.0]).unwrap();
    let training = workout.as_training();

    assert!((training.get_distance() - 5.85).abs() < 1e-9);
    assert!((training.get_mean_speed() - 5.85).abs() < 1e-9);

    let expected = (0.035 * 75.0 + (5.85_f64 * 0.278).powi(2) / (180.0 / 100.0) * 0.029 * 75.0) * 1.0 * 60.0;
    assert!((training.get_spent_calories() - expected).abs() < 1e-9);
    assert_eq!(
        workout.show_training_info().get_message(),
        "Тип тренировки: SportsWalking; Длительность: 1.000 ч.; Дистанция: 5.850 км; Ср. скорость: 5.850 км/ч; Потрачено ккал: 349.252."
    );
}

#[test]
fn test_swimming_package() {
    let workout = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
    assert!(matches!(workout, Workout::Swimming(_)));

    let info = workout.show_training_info();
    assert!((info.speed - 1.0).abs() < 1e-12);
    assert_eq!(format!("{:.3}", info.calories), "336.000");
}

#[test]
fn test_unknown_code_is_rejected() {
    let err = read_package("XYZ", &[1.0, 2.0, 3.0]).unwrap_err();
    assert_eq!(err, TrainingError::UnknownWorkoutCode("XYZ".to_string()));
}

#[test]
fn test_missing_weight_is_rejected() {
    let err = read_package("RUN", &[1.0, 2.0]).unwrap_err();
    assert!(matches!(
        err,
        TrainingError::ArityMismatch { expected: 3, actual: 2, .. }
    ));
}

#[test]
fn test_extra_values_are_rejected() {
    let err = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0, 1.0]).unwrap_err();
    assert!(matches!(
        err,
        TrainingError::ArityMismatch { expected: 5, actual: 6, .. }
    ));
}

#[test]
fn test_zero_duration_is_rejected_eagerly() {
    for package in [
        Package::new("RUN", vec![15000.0, 0.0, 75.0]),
        Package::new("WLK", vec![9000.0, 0.0, 75.0, 180.0]),
        Package::new("SWM", vec![720.0, 0.0, 80.0, 25.0, 40.0]),
    ] {
        assert_eq!(
            runner::process(&package),
            Err(TrainingError::NonPositiveDuration(0.0)),
            "{} should reject zero duration",
            package.code
        );
    }
}

#[test]
fn test_sample_batch_output() {
    let mut lines = Vec::new();
    let report = Runner::new(false).run(&Package::samples(), |outcome| {
        if let Ok(info) = &outcome.result {
            lines.push(info.get_message());
        }
    });

    assert!(report.is_success());
    assert_eq!(
        lines,
        vec![
            "Тип тренировки: Swimming; Длительность: 1.000 ч.; Дистанция: 0.994 км; Ср. скорость: 1.000 км/ч; Потрачено ккал: 336.000.",
            "Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 9.750 км; Ср. скорость: 9.750 км/ч; Потрачено ккал: 797.805.",
            "Тип тренировки: SportsWalking; Длительность: 1.000 ч.; Дистанция: 5.850 км; Ср. скорость: 5.850 км/ч; Потрачено ккал: 349.252.",
        ]
    );
}
