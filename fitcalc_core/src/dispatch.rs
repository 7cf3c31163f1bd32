//! Mapping of raw sensor packages to workouts.

use crate::{Error, Reading, Result, Workout, WorkoutKind};
use serde::{Deserialize, Serialize};

/// Raw package as sent by a sensor: a workout code and its ordered values
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Package {
    pub code: String,
    pub data: Vec<f64>,
}

impl Package {
    pub fn new(code: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            code: code.into(),
            data,
        }
    }

    /// Build the workout this package describes
    pub fn to_workout(&self) -> Result<Workout> {
        read_package(&self.code, &self.data)
    }
}

/// Build a workout from a workout code and its ordered parameters
///
/// Parameter order follows [`WorkoutKind::fields`]. Fails with
/// `UnknownWorkoutType` for codes outside the supported set and with
/// `InvalidParameters` when the value count does not match the kind or an
/// integer field holds a fractional or negative value.
pub fn read_package(code: &str, data: &[f64]) -> Result<Workout> {
    let kind: WorkoutKind = code.parse()?;

    if data.len() != kind.arity() {
        return Err(Error::InvalidParameters {
            code: code.to_string(),
            reason: format!(
                "expected {} values ({}), got {}",
                kind.arity(),
                kind.fields().join(", "),
                data.len()
            ),
        });
    }

    let reading = Reading {
        action: whole_number(code, "action", data[0])?,
        duration_h: data[1],
        weight_kg: data[2],
    };

    let workout = match kind {
        WorkoutKind::Running => Workout::Running(reading),
        WorkoutKind::SportsWalking => Workout::SportsWalking {
            reading,
            height_cm: data[3],
        },
        WorkoutKind::Swimming => Workout::Swimming {
            reading,
            pool_length_m: data[3],
            pool_count: whole_number(code, "pool_count", data[4])?,
        },
    };

    tracing::debug!("Read {} package: {:?}", kind, workout);
    Ok(workout)
}

fn whole_number(code: &str, field: &str, value: f64) -> Result<u32> {
    if value.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(&value) {
        Ok(value as u32)
    } else {
        Err(Error::InvalidParameters {
            code: code.to_string(),
            reason: format!("{} must be a whole non-negative number, got {}", field, value),
        })
    }
}
