#![forbid(unsafe_code)]

//! Core domain model for the fitcalc workout calculator.
//!
//! This crate provides:
//! - Workout kinds, readings and per-kind constants
//! - Distance, speed and calorie formulas
//! - Package dispatch from sensor codes to workouts
//! - Report rendering
//! - Package batch loading, configuration and logging

pub mod types;
pub mod error;
pub mod training;
pub mod dispatch;
pub mod report;
pub mod package;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use dispatch::{read_package, Package};
pub use report::InfoMessage;
pub use package::{demo_packages, load_packages};
pub use config::{Config, OutputFormat};
