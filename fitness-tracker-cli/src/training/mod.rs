//! Workout calculators.
//!
//! Every exercise type implements [`Training`]. Distance and mean speed have
//! default formulas driven by the variant's step length; calories are always
//! variant-specific. Workouts are built through [`read_package`], which maps
//! a three-letter code onto one of the closed set of variants.

pub mod dispatch;
pub mod error;
pub mod running;
pub mod sports_walking;
pub mod swimming;

use crate::models::InfoMessage;

pub use dispatch::{read_package, Workout, WorkoutCode};
pub use error::TrainingError;
pub use running::Running;
pub use sports_walking::SportsWalking;
pub use swimming::Swimming;

/// Meters in a kilometer
pub const M_IN_KM: f64 = 1000.0;

/// Minutes in an hour
pub const MIN_IN_HOUR: f64 = 60.0;

/// Default distance covered by one step, in meters
pub const LEN_STEP: f64 = 0.65;

/// Fields shared by every workout
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainingData {
    /// Steps or strokes performed
    pub action: u32,
    /// Hours
    pub duration: f64,
    /// Kilograms
    pub weight: f64,
}

impl TrainingData {
    pub fn new(action: u32, duration: f64, weight: f64) -> Result<Self, TrainingError> {
        Ok(Self {
            action,
            duration: error::check_duration(duration)?,
            weight: error::check_non_negative("weight", weight)?,
        })
    }
}

/// Calculations every workout type supports
pub trait Training {
    /// Display name used in the summary line
    fn training_type(&self) -> &'static str;

    fn data(&self) -> &TrainingData;

    /// Meters covered per action
    fn len_step(&self) -> f64 {
        LEN_STEP
    }

    /// Distance in kilometers
    fn get_distance(&self) -> f64 {
        f64::from(self.data().action) * self.len_step() / M_IN_KM
    }

    /// Mean speed in km/h
    fn get_mean_speed(&self) -> f64 {
        self.get_distance() / self.data().duration
    }

    /// Calories burned, in kcal
    fn get_spent_calories(&self) -> f64;

    fn show_training_info(&self) -> InfoMessage {
        InfoMessage::new(
            self.training_type(),
            self.data().duration,
            self.get_distance(),
            self.get_mean_speed(),
            self.get_spent_calories(),
        )
    }
}
