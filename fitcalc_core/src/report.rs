//! Human-readable and JSON rendering of workout summaries.

use crate::Result;
use serde::Serialize;
use std::fmt;

/// Summary of one workout, ready for display
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct InfoMessage {
    pub training_type: String,
    /// Duration in hours
    pub duration: f64,
    /// Distance in km
    pub distance: f64,
    /// Mean speed in km/h
    pub speed: f64,
    /// Energy spent in kcal
    pub calories: f64,
}

impl InfoMessage {
    /// Render the single-line text summary
    pub fn get_message(&self) -> String {
        self.to_string()
    }

    /// Render as a JSON object with every number rounded to 3 decimals
    pub fn to_json(&self) -> Result<String> {
        let rounded = InfoMessage {
            training_type: self.training_type.clone(),
            duration: round3(self.duration),
            distance: round3(self.distance),
            speed: round3(self.speed),
            calories: round3(self.calories),
        };
        Ok(serde_json::to_string(&rounded)?)
    }
}

impl fmt::Display for InfoMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Training type: {}; Duration: {:.3} h.; Distance: {:.3} km; \
             Mean speed: {:.3} km/h; Calories burned: {:.3}.",
            self.training_type, self.duration, self.distance, self.speed, self.calories
        )
    }
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
