use super::{error, Training, TrainingData, TrainingError, M_IN_KM};

/// Pool swimming workout; speed comes from laps, not strokes
#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    data: TrainingData,
    /// Meters
    length_pool: f64,
    count_pool: u32,
}

impl Swimming {
    const LEN_STEP: f64 = 1.38;
    const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.1;
    const CALORIES_MEAN_SPEED_MULTIPLIER: f64 = 2.0;

    pub fn new(
        action: u32,
        duration: f64,
        weight: f64,
        length_pool: f64,
        count_pool: u32,
    ) -> Result<Self, TrainingError> {
        Ok(Self {
            data: TrainingData::new(action, duration, weight)?,
            length_pool: error::check_non_negative("length_pool", length_pool)?,
            count_pool,
        })
    }

    pub fn length_pool(&self) -> f64 {
        self.length_pool
    }

    pub fn count_pool(&self) -> u32 {
        self.count_pool
    }
}

impl Training for Swimming {
    fn training_type(&self) -> &'static str {
        "Swimming"
    }

    fn data(&self) -> &TrainingData {
        &self.data
    }

    fn len_step(&self) -> f64 {
        Self::LEN_STEP
    }

    fn get_mean_speed(&self) -> f64 {
        self.length_pool * f64::from(self.count_pool) / M_IN_KM / self.data.duration
    }

    fn get_spent_calories(&self) -> f64 {
        (self.get_mean_speed() + Self::CALORIES_MEAN_SPEED_SHIFT)
            * Self::CALORIES_MEAN_SPEED_MULTIPLIER
            * self.data.weight
            * self.data.duration
    }
}
