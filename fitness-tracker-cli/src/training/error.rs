use thiserror::Error;

/// Errors raised while turning a package into a workout
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TrainingError {
    #[error("Unknown workout code: {0}")]
    UnknownWorkoutCode(String),

    #[error("Workout {code} expects {expected} values, got {actual}")]
    ArityMismatch {
        code: String,
        expected: usize,
        actual: usize,
    },

    #[error("Duration must be a positive number of hours, got {0}")]
    NonPositiveDuration(f64),

    #[error("Invalid {field}: {reason}")]
    InvalidField {
        field: &'static str,
        reason: String,
    },
}

impl TrainingError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        TrainingError::InvalidField {
            field,
            reason: reason.into(),
        }
    }
}

/// Validate a training duration in hours
pub fn check_duration(duration: f64) -> Result<f64, TrainingError> {
    if duration.is_finite() && duration > 0.0 {
        Ok(duration)
    } else {
        Err(TrainingError::NonPositiveDuration(duration))
    }
}

/// Validate a float field that must be finite and non-negative
pub fn check_non_negative(field: &'static str, value: f64) -> Result<f64, TrainingError> {
    if !value.is_finite() {
        return Err(TrainingError::invalid(field, format!("{} is not a finite number", value)));
    }
    if value < 0.0 {
        return Err(TrainingError::invalid(field, format!("{} is negative", value)));
    }
    Ok(value)
}

/// Convert a positional value into a whole count
pub fn to_count(field: &'static str, value: f64) -> Result<u32, TrainingError> {
    let value = check_non_negative(field, value)?;
    if value.fract() != 0.0 {
        return Err(TrainingError::invalid(field, format!("{} is not a whole number", value)));
    }
    if value > f64::from(u32::MAX) {
        return Err(TrainingError::invalid(field, format!("{} is too large", value)));
    }
    Ok(value as u32)
}
