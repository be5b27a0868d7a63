use super::{Training, TrainingData, TrainingError, MIN_IN_HOUR};

/// Sports walking workout; calories depend on the walker's height
#[derive(Debug, Clone, PartialEq)]
pub struct SportsWalking {
    data: TrainingData,
    /// Centimeters
    height: u32,
}

impl SportsWalking {
    const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
    const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
    const KMH_IN_MSEC: f64 = 0.278;
    const CM_IN_M: f64 = 100.0;

    pub fn new(action: u32, duration: f64, weight: f64, height: u32) -> Result<Self, TrainingError> {
        if height == 0 {
            return Err(TrainingError::invalid("height", "must be greater than zero"));
        }

        Ok(Self {
            data: TrainingData::new(action, duration, weight)?,
            height,
        })
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

impl Training for SportsWalking {
    fn training_type(&self) -> &'static str {
        "SportsWalking"
    }

    fn data(&self) -> &TrainingData {
        &self.data
    }

    fn get_spent_calories(&self) -> f64 {
        let speed_ms = self.get_mean_speed() * Self::KMH_IN_MSEC;
        let height_m = f64::from(self.height) / Self::CM_IN_M;

        (Self::CALORIES_WEIGHT_MULTIPLIER * self.data.weight
            + (speed_ms.powi(2) / height_m)
                * Self::CALORIES_SPEED_HEIGHT_MULTIPLIER
                * self.data.weight)
            * self.data.duration
            * MIN_IN_HOUR
    }
}
