use std::fmt;
use std::str::FromStr;

use super::error::to_count;
use super::{Running, SportsWalking, Swimming, Training, TrainingError};
use crate::models::InfoMessage;

/// Three-letter workout codes sent by the tracker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkoutCode {
    Swm,
    Run,
    Wlk,
}

impl WorkoutCode {
    pub const ALL: [WorkoutCode; 3] = [WorkoutCode::Swm, WorkoutCode::Run, WorkoutCode::Wlk];

    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutCode::Swm => "SWM",
            WorkoutCode::Run => "RUN",
            WorkoutCode::Wlk => "WLK",
        }
    }

    /// Positional field names, in package order
    pub fn field_names(&self) -> &'static [&'static str] {
        match self {
            WorkoutCode::Run => &["action", "duration", "weight"],
            WorkoutCode::Wlk => &["action", "duration", "weight", "height"],
            WorkoutCode::Swm => &["action", "duration", "weight", "length_pool", "count_pool"],
        }
    }

    pub fn arity(&self) -> usize {
        self.field_names().len()
    }

    pub fn training_type(&self) -> &'static str {
        match self {
            WorkoutCode::Swm => "Swimming",
            WorkoutCode::Run => "Running",
            WorkoutCode::Wlk => "SportsWalking",
        }
    }
}

impl fmt::Display for WorkoutCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkoutCode {
    type Err = TrainingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SWM" => Ok(WorkoutCode::Swm),
            "RUN" => Ok(WorkoutCode::Run),
            "WLK" => Ok(WorkoutCode::Wlk),
            other => Err(TrainingError::UnknownWorkoutCode(other.to_string())),
        }
    }
}

/// A constructed workout of any supported type
#[derive(Debug, Clone, PartialEq)]
pub enum Workout {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

impl Workout {
    pub fn code(&self) -> WorkoutCode {
        match self {
            Workout::Running(_) => WorkoutCode::Run,
            Workout::SportsWalking(_) => WorkoutCode::Wlk,
            Workout::Swimming(_) => WorkoutCode::Swm,
        }
    }

    pub fn as_training(&self) -> &dyn Training {
        match self {
            Workout::Running(w) => w,
            Workout::SportsWalking(w) => w,
            Workout::Swimming(w) => w,
        }
    }

    pub fn show_training_info(&self) -> InfoMessage {
        self.as_training().show_training_info()
    }
}

/// Build the workout described by a sensor package.
///
/// `data` is positional and must match the workout's arity exactly:
/// `RUN [action, duration, weight]`, `WLK [.., height]`,
/// `SWM [.., length_pool, count_pool]`.
pub fn read_package(code: &str, data: &[f64]) -> Result<Workout, TrainingError> {
    let workout_code: WorkoutCode = code.parse()?;

    if data.len() != workout_code.arity() {
        return Err(TrainingError::ArityMismatch {
            code: workout_code.to_string(),
            expected: workout_code.arity(),
            actual: data.len(),
        });
    }

    tracing::debug!("Reading {} package with {} values", workout_code, data.len());

    let workout = match (workout_code, data) {
        (WorkoutCode::Run, &[action, duration, weight]) => {
            Workout::Running(Running::new(to_count("action", action)?, duration, weight)?)
        }
        (WorkoutCode::Wlk, &[action, duration, weight, height]) => {
            Workout::SportsWalking(SportsWalking::new(
                to_count("action", action)?,
                duration,
                weight,
                to_count("height", height)?,
            )?)
        }
        (WorkoutCode::Swm, &[action, duration, weight, length_pool, count_pool]) => {
            Workout::Swimming(Swimming::new(
                to_count("action", action)?,
                duration,
                weight,
                length_pool,
                to_count("count_pool", count_pool)?,
            )?)
        }
        (code, data) => {
            return Err(TrainingError::ArityMismatch {
                code: code.to_string(),
                expected: code.arity(),
                actual: data.len(),
            })
        }
    };

    Ok(workout)
}
