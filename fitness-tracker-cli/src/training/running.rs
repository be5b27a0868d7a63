use super::{Training, TrainingData, TrainingError, MIN_IN_HOUR, M_IN_KM};

/// Running workout
#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    data: TrainingData,
}

impl Running {
    const CALORIES_MEAN_SPEED_MULTIPLIER: f64 = 18.0;
    const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.79;

    pub fn new(action: u32, duration: f64, weight: f64) -> Result<Self, TrainingError> {
        Ok(Self {
            data: TrainingData::new(action, duration, weight)?,
        })
    }
}

impl Training for Running {
    fn training_type(&self) -> &'static str {
        "Running"
    }

    fn data(&self) -> &TrainingData {
        &self.data
    }

    fn get_spent_calories(&self) -> f64 {
        (Self::CALORIES_MEAN_SPEED_MULTIPLIER * self.get_mean_speed()
            + Self::CALORIES_MEAN_SPEED_SHIFT)
            * self.data.weight
            / M_IN_KM
            * self.data.duration
            * MIN_IN_HOUR
    }
}
