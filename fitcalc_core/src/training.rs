//! Distance, speed and calorie formulas for each workout kind.
//!
//! Every metric is a pure function of the workout's reading and the
//! constant table of its kind. Calories use an exhaustive match, so a
//! kind without a formula does not compile.

use crate::report::InfoMessage;
use crate::{Reading, Workout, WorkoutKind};

/// Meters in a kilometer
pub const M_IN_KM: f64 = 1000.0;
/// Minutes in an hour
pub const MIN_IN_H: f64 = 60.0;

impl Workout {
    pub fn kind(&self) -> WorkoutKind {
        match self {
            Workout::Running(_) => WorkoutKind::Running,
            Workout::SportsWalking { .. } => WorkoutKind::SportsWalking,
            Workout::Swimming { .. } => WorkoutKind::Swimming,
        }
    }

    /// Sensor values shared by all kinds
    pub fn reading(&self) -> &Reading {
        match self {
            Workout::Running(reading) => reading,
            Workout::SportsWalking { reading, .. } => reading,
            Workout::Swimming { reading, .. } => reading,
        }
    }

    /// Distance covered, in km
    pub fn distance(&self) -> f64 {
        let step = self.kind().constants().step_length_m;
        f64::from(self.reading().action) * step / M_IN_KM
    }

    /// Mean speed over the whole session, in km/h
    ///
    /// Duration is assumed positive.
    pub fn mean_speed(&self) -> f64 {
        match self {
            Workout::Swimming {
                reading,
                pool_length_m,
                pool_count,
            } => pool_length_m * f64::from(*pool_count) / M_IN_KM / reading.duration_h,
            _ => self.distance() / self.reading().duration_h,
        }
    }

    /// Energy spent, in kcal
    pub fn calories_burned(&self) -> f64 {
        let c = self.kind().constants();
        let speed = self.mean_speed();

        match self {
            Workout::Running(r) => {
                (c.calorie_coeff_1 * speed - c.calorie_coeff_2) * r.weight_kg / M_IN_KM
                    * (r.duration_h * MIN_IN_H)
            }
            Workout::SportsWalking { reading: r, height_cm } => {
                (c.calorie_coeff_1 * r.weight_kg
                    + speed.powi(2) / height_cm * c.calorie_coeff_2 * r.weight_kg)
                    * (r.duration_h * MIN_IN_H)
            }
            Workout::Swimming { reading: r, .. } => {
                (speed + c.calorie_coeff_1) * c.calorie_coeff_2 * r.weight_kg
            }
        }
    }

    /// Summarize the session as a report message
    pub fn show_training_info(&self) -> InfoMessage {
        let message = InfoMessage {
            training_type: self.kind().label().to_string(),
            duration: self.reading().duration_h,
            distance: self.distance(),
            speed: self.mean_speed(),
            calories: self.calories_burned(),
        };

        tracing::debug!(
            "{} metrics: distance={} km, speed={} km/h, calories={} kcal",
            self.kind(),
            message.distance,
            message.speed,
            message.calories
        );

        message
    }
}
