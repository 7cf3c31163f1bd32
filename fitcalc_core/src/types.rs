//! Core domain types for fitcalc.
//!
//! This module defines:
//! - The closed set of workout kinds and their constant tables
//! - Sensor readings shared by every workout
//! - The `Workout` variant carrying kind-specific fields

use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Workout Kinds
// ============================================================================

/// Supported kind of workout
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutKind {
    Running,
    SportsWalking,
    Swimming,
}

/// Fixed per-kind constants used by the formulas
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KindConstants {
    /// Distance covered by one step or stroke, in meters
    pub step_length_m: f64,
    pub calorie_coeff_1: f64,
    pub calorie_coeff_2: f64,
}

const RUNNING_CONSTANTS: KindConstants = KindConstants {
    step_length_m: 0.65,
    calorie_coeff_1: 18.0,
    calorie_coeff_2: 20.0,
};

const WALKING_CONSTANTS: KindConstants = KindConstants {
    step_length_m: 0.65,
    calorie_coeff_1: 0.035,
    calorie_coeff_2: 0.029,
};

const SWIMMING_CONSTANTS: KindConstants = KindConstants {
    step_length_m: 1.38,
    calorie_coeff_1: 1.1,
    calorie_coeff_2: 2.0,
};

impl WorkoutKind {
    /// Every supported kind, in listing order
    pub const ALL: [WorkoutKind; 3] = [
        WorkoutKind::Swimming,
        WorkoutKind::Running,
        WorkoutKind::SportsWalking,
    ];

    /// Three-letter sensor code
    pub fn code(self) -> &'static str {
        match self {
            WorkoutKind::Running => "RUN",
            WorkoutKind::SportsWalking => "WLK",
            WorkoutKind::Swimming => "SWM",
        }
    }

    /// Label shown in reports
    pub fn label(self) -> &'static str {
        match self {
            WorkoutKind::Running => "Running",
            WorkoutKind::SportsWalking => "SportsWalking",
            WorkoutKind::Swimming => "Swimming",
        }
    }

    /// Names of the raw parameters, in package order
    pub fn fields(self) -> &'static [&'static str] {
        match self {
            WorkoutKind::Running => &["action", "duration_h", "weight_kg"],
            WorkoutKind::SportsWalking => &["action", "duration_h", "weight_kg", "height_cm"],
            WorkoutKind::Swimming => &[
                "action",
                "duration_h",
                "weight_kg",
                "pool_length_m",
                "pool_count",
            ],
        }
    }

    /// Number of raw parameters a package of this kind must carry
    pub fn arity(self) -> usize {
        self.fields().len()
    }

    pub fn constants(self) -> &'static KindConstants {
        match self {
            WorkoutKind::Running => &RUNNING_CONSTANTS,
            WorkoutKind::SportsWalking => &WALKING_CONSTANTS,
            WorkoutKind::Swimming => &SWIMMING_CONSTANTS,
        }
    }
}

impl FromStr for WorkoutKind {
    type Err = Error;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        match code {
            "RUN" => Ok(WorkoutKind::Running),
            "WLK" => Ok(WorkoutKind::SportsWalking),
            "SWM" => Ok(WorkoutKind::Swimming),
            other => Err(Error::UnknownWorkoutType(other.to_string())),
        }
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// ============================================================================
// Readings and Workouts
// ============================================================================

/// Sensor values common to every workout
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct Reading {
    /// Steps taken or strokes swum
    pub action: u32,
    pub duration_h: f64,
    pub weight_kg: f64,
}

/// A single workout session of one of the supported kinds
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Workout {
    Running(Reading),
    SportsWalking {
        reading: Reading,
        height_cm: f64,
    },
    Swimming {
        reading: Reading,
        pool_length_m: f64,
        pool_count: u32,
    },
}
